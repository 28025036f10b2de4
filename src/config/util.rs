//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Expand a leading `~` to the home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).into_owned()),
        None => path.to_path_buf(),
    }
}

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/show/docs/  ← cwd
/// /home/user/show/episodes.yml  ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

/// Same as [`find_config_file`], starting from `start` instead of cwd.
pub fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    // Absolute paths are taken as-is
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    // Walk up from start looking for config file
    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        // Move to parent directory
        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_file_walks_up() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("docs").join("drafts");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("episodes.yml"), "podcast: {}").unwrap();

        let found = find_config_file_from(&nested, Path::new("episodes.yml")).unwrap();
        assert_eq!(found, dir.path().join("episodes.yml"));
    }

    #[test]
    fn test_find_config_file_in_start_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("show.yml"), "podcast: {}").unwrap();

        let found = find_config_file_from(dir.path(), Path::new("show.yml")).unwrap();
        assert_eq!(found, dir.path().join("show.yml"));
    }

    #[test]
    fn test_find_config_file_absolute() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("episodes.yml");
        assert_eq!(find_config_file_from(dir.path(), &path), None);

        fs::write(&path, "podcast: {}").unwrap();
        assert_eq!(find_config_file_from(Path::new("/"), &path), Some(path));
    }

    #[test]
    fn test_expand_tilde_leaves_plain_paths() {
        assert_eq!(
            expand_tilde(Path::new("docs/feed.xml")),
            PathBuf::from("docs/feed.xml")
        );
        assert_eq!(
            expand_tilde(Path::new("/tmp/feed.xml")),
            PathBuf::from("/tmp/feed.xml")
        );
    }

    #[test]
    fn test_expand_tilde_home() {
        if std::env::var_os("HOME").is_none() {
            return;
        }
        let expanded = expand_tilde(Path::new("~/feed.xml"));
        assert!(!expanded.starts_with("~"));
        assert!(expanded.ends_with("feed.xml"));
    }
}
