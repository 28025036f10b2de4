//! `episodes` section: one entry per feed item.

use crate::config::types::{ConfigError, FieldPath};
use serde::{Deserialize, Deserializer, de};

/// Default enclosure MIME type.
pub const DEFAULT_AUDIO_TYPE: &str = "audio/mpeg";

/// A single episode, rendered as one `<item>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Episode {
    pub title: String,
    pub summary: Option<String>,
    /// Publication date as `YYYY-MM-DD`; checked when the feed is rendered.
    pub date: String,
    /// Enclosure URL, also used as the item guid.
    pub audio_url: String,
    /// Enclosure length in bytes.
    pub audio_bytes: u64,
    pub audio_type: String,
    pub page_url: Option<String>,
    /// Free-form human readable duration (e.g. "42:10").
    pub duration: Option<String>,
}

#[cfg(test)]
impl Episode {
    /// Episode with the required fields set and everything else defaulted.
    pub fn new(
        title: impl Into<String>,
        date: impl Into<String>,
        audio_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            summary: None,
            date: date.into(),
            audio_url: audio_url.into(),
            audio_bytes: 0,
            audio_type: DEFAULT_AUDIO_TYPE.into(),
            page_url: None,
            duration: None,
        }
    }
}

/// Episode mapping as written, before required fields are checked.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawEpisode {
    title: Option<String>,
    summary: Option<String>,
    date: Option<String>,
    audio_url: Option<String>,
    #[serde(deserialize_with = "audio_bytes")]
    audio_bytes: Option<u64>,
    audio_type: Option<String>,
    page_url: Option<String>,
    duration: Option<String>,
}

/// Enclosure length as an integer or a quoted digit string.
fn audio_bytes<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Length {
        Count(u64),
        Text(String),
    }

    match Option::<Length>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Length::Count(n)) => Ok(Some(n)),
        Some(Length::Text(s)) => s.trim().parse().map(Some).map_err(|_| {
            de::Error::custom(format!("expected a non-negative byte count, got {s:?}"))
        }),
    }
}

impl RawEpisode {
    /// Check required fields and apply defaults.
    pub(crate) fn resolve(self, path: &FieldPath) -> Result<Episode, ConfigError> {
        let required = |value: Option<String>, name: &str| {
            value.ok_or_else(|| ConfigError::MissingField(path.child(name)))
        };

        Ok(Episode {
            title: required(self.title, "title")?,
            summary: self.summary,
            date: required(self.date, "date")?,
            audio_url: required(self.audio_url, "audio_url")?,
            audio_bytes: self.audio_bytes.unwrap_or(0),
            audio_type: self
                .audio_type
                .unwrap_or_else(|| DEFAULT_AUDIO_TYPE.into()),
            page_url: self.page_url,
            duration: self.duration,
        })
    }
}
