//! # WheelKit Settings
//!
//! Persistence for WheelKit: the positional roster file (user display
//! names, one segment each) and the JSON wheel configuration file.

pub mod config_file;
pub mod error;
pub mod roster;

pub use config_file::{load_config, save_config};
pub use error::{SettingsError, SettingsResult};
pub use roster::{load_roster, parse_roster, save_roster};
