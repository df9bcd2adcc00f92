//! Roster persistence
//!
//! The roster file is a flat ordered list of user display names: one
//! line holding the entry count, then that many name lines, keyed
//! positionally. Loading produces the names in wheel order; each name
//! becomes one segment.

use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{SettingsError, SettingsResult};

/// Load a roster from a file
///
/// The declared count must match the number of name lines exactly;
/// truncated or padded files are rejected.
pub fn load_roster(path: &Path) -> SettingsResult<Vec<String>> {
    let contents = fs::read_to_string(path)?;
    parse_roster(&contents)
}

/// Parse roster file contents
pub fn parse_roster(contents: &str) -> SettingsResult<Vec<String>> {
    let mut lines = contents.lines();
    let header = lines
        .next()
        .ok_or_else(|| SettingsError::MalformedRoster("empty file".to_string()))?;
    let declared: usize = header.trim().parse().map_err(|_| {
        SettingsError::MalformedRoster(format!("count header is not an integer: {header:?}"))
    })?;

    let names: Vec<String> = lines.map(|l| l.to_string()).collect();
    if names.len() != declared {
        return Err(SettingsError::RosterCountMismatch {
            declared,
            actual: names.len(),
        });
    }
    debug!(count = declared, "parsed roster");
    Ok(names)
}

/// Save a roster to a file
///
/// Writes to a sibling temp file and renames it into place, so a failed
/// save never leaves a truncated roster behind. Names must be single
/// lines; an embedded line break would corrupt positional keying.
pub fn save_roster(path: &Path, names: &[String]) -> SettingsResult<()> {
    for (index, name) in names.iter().enumerate() {
        if name.contains('\n') || name.contains('\r') {
            return Err(SettingsError::UnencodableEntry { index });
        }
    }

    let mut contents = String::new();
    contents.push_str(&names.len().to_string());
    contents.push('\n');
    for name in names {
        contents.push_str(name);
        contents.push('\n');
    }

    let tmp = path.with_extension("tmp");
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)?;
    info!(count = names.len(), path = %path.display(), "roster saved");
    Ok(())
}
