//! The load → render → write cycle.

use crate::{cli::Cli, config::FeedConfig, feed::build_feed};
use anyhow::{Context, Result};

/// Load the config named by `cli` and write its feed.
pub fn generate(cli: &Cli) -> Result<()> {
    let config = FeedConfig::load(cli).context("failed to load podcast config")?;
    build_feed(&config).context("failed to generate feed")?;
    Ok(())
}
