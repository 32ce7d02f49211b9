//! A circular tick-mark progress indicator for GTK4.
//!
//! The ring is split into evenly spaced ticks. Ticks covered by the progress
//! are colored along a gradient, the last covered tick is drawn wider and the
//! remaining ticks use a flat color.

pub mod color;
pub mod config;
pub mod error;
pub mod widgets;

pub use error::ConfigError;
pub use widgets::circle_tick_progress::{CircleTickProgress, ProgressHandle, TickConfig};
