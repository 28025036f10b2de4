//! `podcast` section: channel-level show metadata.

use crate::config::types::{ConfigError, FieldPath};
use serde::Deserialize;

/// Show metadata rendered into the feed `<channel>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowConfig {
    pub title: String,
    pub site_url: String,
    pub description: String,
    /// Language code (e.g. "en", "de").
    pub language: String,
    pub author: Option<String>,
    pub email: Option<String>,
    /// `"true"` or `"false"`, passed through as written.
    pub explicit: String,
    pub cover_image: Option<String>,
    /// iTunes category text.
    pub category: String,
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            site_url: String::new(),
            description: String::new(),
            language: "en".into(),
            author: None,
            email: None,
            explicit: "false".into(),
            cover_image: None,
            category: "Technology".into(),
        }
    }
}

/// `podcast` mapping as written, before required fields are checked.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawShow {
    title: Option<String>,
    site_url: Option<String>,
    description: Option<String>,
    language: Option<String>,
    author: Option<String>,
    email: Option<String>,
    explicit: Option<String>,
    cover_image: Option<String>,
    category: Option<String>,
}

impl RawShow {
    /// Check required fields and apply defaults.
    pub(crate) fn resolve(self, path: &FieldPath) -> Result<ShowConfig, ConfigError> {
        let required = |value: Option<String>, name: &str| {
            value.ok_or_else(|| ConfigError::MissingField(path.child(name)))
        };
        let defaults = ShowConfig::default();

        Ok(ShowConfig {
            title: required(self.title, "title")?,
            site_url: required(self.site_url, "site_url")?,
            description: required(self.description, "description")?,
            language: self.language.unwrap_or(defaults.language),
            author: self.author,
            email: self.email,
            explicit: self.explicit.unwrap_or(defaults.explicit),
            cover_image: self.cover_image,
            category: self.category.unwrap_or(defaults.category),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(yaml: &str) -> Result<ShowConfig, ConfigError> {
        serde_yaml::from_str::<RawShow>(yaml)
            .unwrap()
            .resolve(&FieldPath::new("podcast"))
    }

    #[test]
    fn test_show_defaults() {
        let show = resolve("title: Show\nsite_url: https://x\ndescription: D").unwrap();
        assert_eq!(show.title, "Show");
        assert_eq!(show.language, "en");
        assert_eq!(show.explicit, "false");
        assert_eq!(show.category, "Technology");
        assert!(show.author.is_none());
        assert!(show.email.is_none());
        assert!(show.cover_image.is_none());
    }

    #[test]
    fn test_show_explicit_bool() {
        let show =
            resolve("title: Show\nsite_url: https://x\ndescription: D\nexplicit: true").unwrap();
        assert_eq!(show.explicit, "true");
    }

    #[test]
    fn test_show_first_missing_field_reported() {
        let err = resolve("site_url: https://x").unwrap_err();
        match err {
            ConfigError::MissingField(path) => assert_eq!(path.as_str(), "podcast.title"),
            other => panic!("unexpected error: {other}"),
        }

        let err = resolve("title: Show\nsite_url: https://x").unwrap_err();
        match err {
            ConfigError::MissingField(path) => assert_eq!(path.as_str(), "podcast.description"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
