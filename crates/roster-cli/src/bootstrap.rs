use std::path::Path;

use anyhow::Context;
use roster_config::RosterConfig;

pub fn load_config(extra: Option<&Path>) -> anyhow::Result<RosterConfig> {
    let config = RosterConfig::load_with_dotenv(extra).context("failed to load configuration")?;
    // The delimiter must be valid before any source is opened.
    config.input.delimiter_byte()?;
    Ok(config)
}
