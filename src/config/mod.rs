//! Configuration management module

use anyhow::Result;

use crate::model::Config;

/// Load the user configuration, falling back to defaults when no config
/// file exists. The file is never created implicitly.
pub fn load_or_default() -> Result<Config> {
    Config::load()
}
