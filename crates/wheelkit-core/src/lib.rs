//! # WheelKit Core
//!
//! Core types for WheelKit: errors, wheel events, and configuration.
//! Provides the fundamental abstractions shared by the simulation and
//! persistence crates.

pub mod config;
pub mod error;
pub mod event;

pub use config::WheelConfiguration;
pub use error::{Result, WheelError};
pub use event::{EventDispatcher, WheelEvent};
