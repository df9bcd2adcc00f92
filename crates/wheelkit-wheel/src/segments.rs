//! Segment registry
//!
//! The ordered collection of wheel segments. The registry is the sole
//! writer of segment identity and labels; geometry lives in the layout
//! and is looked up by segment id.
//!
//! Ids come from a monotonic counter and are never reused within a
//! registry's lifetime. Deriving them from the segment count at append
//! time would hand out duplicates after interleaved delete/insert, so
//! the counter only ever moves forward.

use serde::{Deserialize, Serialize};
use tracing::debug;
use wheelkit_core::{Result, WheelError};

/// One labeled slice of the wheel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WheelSegment {
    /// Stable identity, assigned in creation order
    pub id: u64,
    /// Display label; mutable via rename
    pub label: String,
}

/// A user as a thin view over a wheel segment
///
/// Not a separate source of truth: the id and display name are the
/// segment's, and renames write through to the registry.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Same as the backing segment id
    pub id: u64,
    /// Same as the backing segment label
    pub display_name: String,
}

/// Ordered registry of wheel segments
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SegmentRegistry {
    segments: Vec<WheelSegment>,
    next_id: u64,
}

impl SegmentRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a segment, returning its id
    ///
    /// A blank label falls back to the segment's 1-based position.
    pub fn add(&mut self, label: Option<&str>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        let label = match label {
            Some(l) if !l.trim().is_empty() => l.to_string(),
            _ => (self.segments.len() + 1).to_string(),
        };
        debug!(id, %label, "adding wheel segment");
        self.segments.push(WheelSegment { id, label });
        id
    }

    /// Remove a segment by id
    pub fn remove(&mut self, id: u64) -> Result<WheelSegment> {
        let position = self.position_of(id).ok_or(WheelError::SegmentNotFound { id })?;
        let removed = self.segments.remove(position);
        debug!(id, label = %removed.label, "removed wheel segment");
        Ok(removed)
    }

    /// Rename a segment in place
    ///
    /// A blank label falls back to the segment's 1-based position.
    pub fn rename(&mut self, id: u64, new_label: &str) -> Result<()> {
        let position = self.position_of(id).ok_or(WheelError::SegmentNotFound { id })?;
        let label = if new_label.trim().is_empty() {
            (position + 1).to_string()
        } else {
            new_label.to_string()
        };
        self.segments[position].label = label;
        Ok(())
    }

    /// Remove all segments
    pub fn clear(&mut self) {
        debug!(count = self.segments.len(), "clearing all wheel segments");
        self.segments.clear();
    }

    /// Number of segments
    pub fn count(&self) -> usize {
        self.segments.len()
    }

    /// True if the registry holds no segments
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Look up a segment by id
    pub fn get(&self, id: u64) -> Option<&WheelSegment> {
        self.segments.iter().find(|s| s.id == id)
    }

    /// Positional index of a segment id, if present
    pub fn position_of(&self, id: u64) -> Option<usize> {
        self.segments.iter().position(|s| s.id == id)
    }

    /// Iterate segments in wheel order
    pub fn iter(&self) -> impl Iterator<Item = &WheelSegment> {
        self.segments.iter()
    }

    /// Segments as a slice, in wheel order
    pub fn segments(&self) -> &[WheelSegment] {
        &self.segments
    }

    /// User views over all segments, in wheel order
    pub fn users(&self) -> Vec<User> {
        self.segments
            .iter()
            .map(|s| User {
                id: s.id,
                display_name: s.label.clone(),
            })
            .collect()
    }

    /// Rename via the user view; writes through to the segment
    pub fn rename_user(&mut self, user_id: u64, display_name: &str) -> Result<()> {
        self.rename(user_id, display_name)
    }
}
