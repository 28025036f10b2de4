//! Common utilities for feed generation.

use std::borrow::Cow;

/// iTunes podcast namespace, bound to the `itunes:` prefix.
pub const ITUNES_NS: &str = "http://www.itunes.com/dtds/podcast-1.0.dtd";

/// Escape text for use in XML element content or a quoted attribute.
///
/// Absent input renders as the empty string.
pub fn escape<'a>(text: impl Into<Option<&'a str>>) -> Cow<'a, str> {
    match text.into() {
        Some(s) => quick_xml::escape::escape(s),
        None => Cow::Borrowed(""),
    }
}
