//! # WheelKit Wheel
//!
//! The wheel simulation: procedural segment geometry, the segment
//! registry, layout building, spin state machine, and pointer-based
//! winner resolution.
//!
//! Everything runs on a single-threaded cooperative tick. The actuator
//! (the physical joint and motor) and the audio output are injected
//! collaborators behind traits; the simulation never reaches into a
//! scene graph or an ambient store.

pub mod actuator;
pub mod audio;
pub mod layout;
pub mod mesh;
pub mod pointer;
pub mod segments;
pub mod spin;
pub mod wheel;

pub use actuator::{verify_actuator, Actuator, HingeActuator};
pub use audio::{AudioSink, NullAudio, DIVIDER_HIT_VOLUME, WHEEL_STEP_VOLUME, WIN_VOLUME};
pub use layout::{SegmentSlot, WheelLayout};
pub use mesh::{generate_sector, SegmentGeometry};
pub use pointer::PointerResolver;
pub use segments::{SegmentRegistry, User, WheelSegment};
pub use spin::{SpinMachine, SpinMode, TickReport};
pub use wheel::{WheelOfFortune, DEFAULT_MOTOR_FORCE, DEFAULT_TARGET_VELOCITY};
