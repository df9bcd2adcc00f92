//! Configuration file persistence
//!
//! JSON load/save for `WheelConfiguration`. Loading validates before
//! returning, so a corrupt or out-of-range file never reaches the wheel.

use std::fs;
use std::path::Path;
use tracing::{debug, info};
use wheelkit_core::WheelConfiguration;

use crate::error::SettingsResult;

/// Load a wheel configuration from a JSON file
///
/// A missing file yields the default configuration; any present file
/// must parse and validate.
pub fn load_config(path: &Path) -> SettingsResult<WheelConfiguration> {
    if !path.exists() {
        debug!(path = %path.display(), "no configuration file, using defaults");
        return Ok(WheelConfiguration::default());
    }
    let contents = fs::read_to_string(path)?;
    let config: WheelConfiguration = serde_json::from_str(&contents)?;
    config.validate()?;
    debug!(path = %path.display(), "configuration loaded");
    Ok(config)
}

/// Save a wheel configuration to a JSON file
pub fn save_config(path: &Path, config: &WheelConfiguration) -> SettingsResult<()> {
    let contents = serde_json::to_string_pretty(config)?;
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)?;
    info!(path = %path.display(), "configuration saved");
    Ok(())
}
