//! Podcast feed generation.
//!
//! Turns the loaded show and episodes into an RSS 2.0 document with the
//! iTunes namespace:
//!
//! - [`render()`] builds the whole document in memory
//! - [`write`] replaces the destination file with it
//!
//! Nothing is written unless rendering succeeded.

pub mod common;
pub mod render;

pub use render::render;

use crate::{config::FeedConfig, log, utils::date::FormatError};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Feed rendering and output errors
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("episode `{title}` has an invalid date")]
    Format {
        title: String,
        #[source]
        source: FormatError,
    },

    #[error("failed to write feed to `{0}`")]
    Write(PathBuf, #[source] std::io::Error),
}

/// Render the configured feed and write it to `config.output`.
pub fn build_feed(config: &FeedConfig) -> Result<(), FeedError> {
    let document = render(&config.podcast, &config.episodes)?;
    write(&document, &config.output)?;

    log!("feed"; "{}", wrote_message(config));
    Ok(())
}

/// Confirmation line naming the output relative to the project root.
fn wrote_message(config: &FeedConfig) -> String {
    format!("wrote {}", config.root_relative(&config.output).display())
}

/// Write `document` as UTF-8, creating or truncating `path`.
///
/// The parent directory must already exist.
pub fn write(document: &str, path: &Path) -> Result<(), FeedError> {
    fs::write(path, document).map_err(|err| FeedError::Write(path.to_path_buf(), err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Episode, ShowConfig};
    use tempfile::TempDir;

    fn make_config(output: PathBuf) -> FeedConfig {
        FeedConfig {
            output,
            podcast: ShowConfig {
                title: "Show".into(),
                site_url: "https://x".into(),
                description: "D".into(),
                ..ShowConfig::default()
            },
            episodes: vec![Episode::new("Ep1", "2024-01-15", "https://x/1.mp3")],
            ..FeedConfig::default()
        }
    }

    #[test]
    fn test_write_overwrites_existing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("feed.xml");
        fs::write(&path, "a much longer previous feed body").unwrap();

        write("<rss/>", &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<rss/>");
    }

    #[test]
    fn test_write_keeps_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("feed.xml");

        write("<title>Café – Folge 1</title>", &path).unwrap();
        assert_eq!(
            fs::read(&path).unwrap(),
            "<title>Café – Folge 1</title>".as_bytes()
        );
    }

    #[test]
    fn test_write_missing_parent_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("docs").join("feed.xml");

        let err = write("<rss/>", &path).unwrap_err();
        assert!(matches!(err, FeedError::Write(p, _) if p == path));
    }

    #[test]
    fn test_build_feed_writes_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("feed.xml");

        build_feed(&make_config(path.clone())).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(written.contains("<guid>https://x/1.mp3</guid>"));
        assert!(written.contains("<pubDate>Mon, 15 Jan 2024 00:00:00 +0000</pubDate>"));
    }

    #[test]
    fn test_wrote_message_relative_to_root() {
        let mut config = make_config(PathBuf::from("/show/docs/feed.xml"));
        config.root = PathBuf::from("/show");
        assert_eq!(wrote_message(&config), "wrote docs/feed.xml");

        config.output = PathBuf::from("/elsewhere/feed.xml");
        assert_eq!(wrote_message(&config), "wrote /elsewhere/feed.xml");
    }

    #[test]
    fn test_build_feed_bad_date_leaves_output_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("feed.xml");
        fs::write(&path, "previous").unwrap();

        let mut config = make_config(path.clone());
        config.episodes[0].date = "15/01/2024".into();

        let err = build_feed(&config).unwrap_err();
        assert!(matches!(err, FeedError::Format { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "previous");
    }
}
