use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
	#[error("{name} must be a finite, non-negative angle, got {value}")]
	InvalidAngle { name: &'static str, value: f64 },

	#[error("tick split angle ({split}) plus tick block angle ({block}) must be greater than 0")]
	EmptyTickStep { split: f64, block: f64 },

	#[error("a tick step of {step} degrees leaves no room for a single tick in 360 degrees")]
	NoTicks { step: f64 },

	#[error("a tick step of {step} degrees needs more than {max} ticks to fill 360 degrees")]
	TooManyTicks { step: f64, max: u32 },

	#[error("{name} must be a finite, non-negative stroke width, got {value}")]
	InvalidTickSize { name: &'static str, value: f64 },

	#[error("\"{0}\" is not a color, expected a CSS color")]
	InvalidColor(String),
}
