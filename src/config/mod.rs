//! Feed configuration management for `episodes.yml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── show       # podcast:
//! │   └── episode    # episodes:
//! ├── types/         # Utility types
//! │   └── error      # ConfigError, FieldPath
//! ├── util.rs        # config lookup, tilde expansion
//! └── mod.rs         # FeedConfig (this file)
//! ```
//!
//! # Example
//!
//! ```yaml
//! podcast:
//!   title: My Show
//!   site_url: https://example.com
//!   description: Weekly chats
//!   author: Jane
//! episodes:
//!   - title: Pilot
//!     date: 2024-01-15
//!     audio_url: https://example.com/ep1.mp3
//!     audio_bytes: 12345678
//! ```

pub mod section;
pub mod types;
mod util;

pub use section::{Episode, ShowConfig};
pub use types::{ConfigError, FieldPath};

use crate::{cli::Cli, debug, log};
use section::{RawEpisode, RawShow};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use util::{expand_tilde, find_config_file};

// ============================================================================
// root configuration
// ============================================================================

/// Loaded show metadata, episodes, and resolved file locations.
#[derive(Debug, Clone, Default)]
pub struct FeedConfig {
    /// Absolute path to the config file
    pub config_path: PathBuf,

    /// Project root directory - parent of config file
    pub root: PathBuf,

    /// Feed destination
    pub output: PathBuf,

    /// Channel metadata
    pub podcast: ShowConfig,

    /// Items, in file order
    pub episodes: Vec<Episode>,
}

/// Top-level mapping as written.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawDocument {
    podcast: Option<RawShow>,
    episodes: Option<Vec<RawEpisode>>,
}

impl RawDocument {
    /// Convert to typed sections, failing on the first missing required field.
    fn resolve(self) -> Result<(ShowConfig, Vec<Episode>), ConfigError> {
        let podcast_path = FieldPath::new("podcast");
        let podcast = self
            .podcast
            .ok_or_else(|| ConfigError::MissingField(podcast_path.clone()))?
            .resolve(&podcast_path)?;

        let episodes_path = FieldPath::new("episodes");
        let episodes = self
            .episodes
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(i, raw)| raw.resolve(&episodes_path.index(i)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok((podcast, episodes))
    }
}

impl FeedConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd to find the config file. The project root is
    /// the config file's parent directory, and a relative output path is
    /// resolved against it.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let config_name = expand_tilde(&cli.config);
        let config_path =
            find_config_file(&config_name).ok_or_else(|| ConfigError::NotFound(config_name))?;

        let mut config = Self::from_path(&config_path)?;

        let root = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        let output = expand_tilde(&cli.output);
        config.output = if output.is_relative() {
            root.join(output)
        } else {
            output
        };
        config.root = root;
        config.config_path = config_path;

        debug!("config"; "loaded {}", config.config_path.display());
        debug!("config"; "{} episodes", config.episodes.len());
        Ok(config)
    }

    /// Parse configuration from YAML string
    #[cfg(test)]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let (config, _) = Self::parse_with_ignored(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        config.config_path = path.to_path_buf();
        Ok(config)
    }

    /// Parse YAML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = serde_yaml::Deserializer::from_str(content);
        let raw: RawDocument =
            serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
                ignored.push(path.to_string());
            })?;

        let (podcast, episodes) = raw.resolve()?;
        let config = Self {
            podcast,
            episodes,
            ..Self::default()
        };
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Get path relative to the project root
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }
}

// ============================================================================
// tests
// ============================================================================
