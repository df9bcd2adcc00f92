//! Audio collaborator interface
//!
//! Fire-and-forget playback triggers with a volume scalar. The wheel
//! never waits on audio; a sink that drops everything is a valid sink.

/// Volume for the pointer striking a divider
pub const DIVIDER_HIT_VOLUME: f32 = 0.5;
/// Volume for a wheel step cue
pub const WHEEL_STEP_VOLUME: f32 = 0.1;
/// Volume for the win fanfare
pub const WIN_VOLUME: f32 = 1.0;

/// Receives playback triggers from the wheel
pub trait AudioSink {
    /// The pointer struck a divider
    fn divider_hit(&mut self, _volume: f32) {}

    /// The wheel rotated one step
    fn wheel_step(&mut self, _volume: f32) {}

    /// A winner was decided
    fn win(&mut self, _volume: f32) {}
}

/// Sink that discards all triggers
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {}
