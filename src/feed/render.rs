//! RSS 2.0 + iTunes document rendering.
//!
//! The document is assembled as text: every free-text value goes through
//! [`escape`], dates through [`format_date`]. Items keep input order.

use super::{
    FeedError,
    common::{ITUNES_NS, escape},
};
use crate::{
    config::{Episode, ShowConfig},
    utils::date::{DateTimeUtc, format_date},
};

/// Render the full feed with `lastBuildDate` set to now.
pub fn render(show: &ShowConfig, episodes: &[Episode]) -> Result<String, FeedError> {
    render_at(show, episodes, DateTimeUtc::now())
}

/// Render the full feed with an explicit build time.
pub fn render_at(
    show: &ShowConfig,
    episodes: &[Episode],
    build_date: DateTimeUtc,
) -> Result<String, FeedError> {
    let items = episodes
        .iter()
        .map(render_item)
        .collect::<Result<Vec<_>, _>>()?;
    let items = if items.is_empty() {
        String::new()
    } else {
        format!("{}\n", items.join("\n\n"))
    };

    Ok(format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:itunes="{ns}">
  <channel>
    <title>{title}</title>
    <link>{link}</link>
    <description>{description}</description>
    <language>{language}</language>
    <lastBuildDate>{build_date}</lastBuildDate>

    <itunes:author>{author}</itunes:author>
    <itunes:explicit>{explicit}</itunes:explicit>
    <itunes:image href="{image}" />
    <itunes:category text="{category}" />
{owner}
{items}  </channel>
</rss>
"#,
        ns = ITUNES_NS,
        title = escape(show.title.as_str()),
        link = escape(show.site_url.as_str()),
        description = escape(show.description.as_str()),
        language = escape(show.language.as_str()),
        build_date = build_date.to_rfc2822(),
        author = escape(show.author.as_deref()),
        explicit = escape(show.explicit.as_str()),
        image = escape(show.cover_image.as_deref()),
        category = escape(show.category.as_str()),
        owner = render_owner_block(show),
    ))
}

/// Render one `<item>` block (no trailing newline).
pub fn render_item(episode: &Episode) -> Result<String, FeedError> {
    let pub_date = format_date(&episode.date).map_err(|source| FeedError::Format {
        title: episode.title.clone(),
        source,
    })?;
    let audio_url = escape(episode.audio_url.as_str());

    Ok(format!(
        r#"    <item>
      <title>{title}</title>
      <description>{description}</description>
      <pubDate>{pub_date}</pubDate>
      <guid>{audio_url}</guid>
      <enclosure url="{audio_url}" length="{length}" type="{mime}" />
      <link>{link}</link>
      <itunes:duration>{duration}</itunes:duration>
    </item>"#,
        title = escape(episode.title.as_str()),
        description = escape(episode.summary.as_deref()),
        length = episode.audio_bytes,
        mime = escape(episode.audio_type.as_str()),
        link = escape(episode.page_url.as_deref()),
        duration = escape(episode.duration.as_deref()),
    ))
}

/// Render `<itunes:owner>` lines, or nothing when neither author nor email is set.
pub fn render_owner_block(show: &ShowConfig) -> String {
    let author = show.author.as_deref().unwrap_or_default();
    let email = show.email.as_deref().unwrap_or_default();
    if author.is_empty() && email.is_empty() {
        return String::new();
    }

    format!(
        "    <itunes:owner>\n      <itunes:name>{}</itunes:name>\n      <itunes:email>{}</itunes:email>\n    </itunes:owner>\n",
        escape(author),
        escape(email),
    )
}
