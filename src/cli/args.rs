//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// Podcast feed generator: reads episodes.yml, writes an RSS 2.0 / iTunes feed
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, default_value = "episodes.yml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Feed output path (relative to the directory containing the config file)
    #[arg(short, long, default_value = "docs/feed.xml", value_hint = clap::ValueHint::FilePath)]
    pub output: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["castfeed"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("episodes.yml"));
        assert_eq!(cli.output, PathBuf::from("docs/feed.xml"));
        assert!(!cli.verbose);
        assert_eq!(cli.color, ColorChoice::Auto);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::try_parse_from([
            "castfeed",
            "-C",
            "shows/weekly.yml",
            "--output",
            "public/rss.xml",
            "-v",
            "--color",
            "never",
        ])
        .unwrap();
        assert_eq!(cli.config, PathBuf::from("shows/weekly.yml"));
        assert_eq!(cli.output, PathBuf::from("public/rss.xml"));
        assert!(cli.verbose);
        assert_eq!(cli.color, ColorChoice::Never);
    }

    #[test]
    fn test_cli_rejects_positional() {
        assert!(Cli::try_parse_from(["castfeed", "build"]).is_err());
    }

    #[test]
    fn test_cli_debug_assert() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
