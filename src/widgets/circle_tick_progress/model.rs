use gtk::gdk::RGBA;
use serde_derive::Deserialize;

use crate::color::deserialize_color;
use crate::error::ConfigError;

pub const DEFAULT_TICK_SPLIT_ANGLE: f64 = 3.0;
pub const DEFAULT_TICK_BLOCK_ANGLE: f64 = 3.0;
pub const DEFAULT_NORMAL_TICK_SIZE: f64 = 60.0;
pub const DEFAULT_CURRENT_TICK_SIZE: f64 = 85.0;

pub const MAX_PERCENT: u32 = 100;
/// Upper bound on ticks in the ring, one every tenth of a degree.
pub const MAX_TICK_COUNT: u32 = 3600;

pub fn default_gradient_start_color() -> RGBA {
	RGBA::new(0.0, 1.0, 0.0, 1.0)
}

pub fn default_gradient_end_color() -> RGBA {
	RGBA::new(1.0, 0.0, 0.0, 1.0)
}

pub fn default_tick_normal_color() -> RGBA {
	let gray = f32::from(0x88_u8) / 255.0;
	RGBA::new(gray, gray, gray, 1.0)
}

/// Appearance of the tick ring. Angles are in degrees, sizes are stroke
/// widths in pixels.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct TickConfig {
	/// Gap between two neighbouring ticks.
	pub tick_split_angle: f64,
	/// Angular width of a single tick.
	pub tick_block_angle: f64,
	pub normal_tick_size: f64,
	/// Stroke width of the tick at the progress boundary.
	pub current_tick_size: f64,
	#[serde(deserialize_with = "deserialize_color")]
	pub gradient_start_color: RGBA,
	#[serde(deserialize_with = "deserialize_color")]
	pub gradient_end_color: RGBA,
	#[serde(deserialize_with = "deserialize_color")]
	pub tick_normal_color: RGBA,
}

impl Default for TickConfig {
	fn default() -> Self {
		Self {
			tick_split_angle: DEFAULT_TICK_SPLIT_ANGLE,
			tick_block_angle: DEFAULT_TICK_BLOCK_ANGLE,
			normal_tick_size: DEFAULT_NORMAL_TICK_SIZE,
			current_tick_size: DEFAULT_CURRENT_TICK_SIZE,
			gradient_start_color: default_gradient_start_color(),
			gradient_end_color: default_gradient_end_color(),
			tick_normal_color: default_tick_normal_color(),
		}
	}
}

impl TickConfig {
	/// Angle between the starts of two neighbouring ticks.
	pub fn tick_step(&self) -> f64 {
		self.tick_split_angle + self.tick_block_angle
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		for (name, value) in [
			("tick_split_angle", self.tick_split_angle),
			("tick_block_angle", self.tick_block_angle),
		] {
			if !value.is_finite() || value < 0.0 {
				return Err(ConfigError::InvalidAngle { name, value });
			}
		}
		for (name, value) in [
			("normal_tick_size", self.normal_tick_size),
			("current_tick_size", self.current_tick_size),
		] {
			if !value.is_finite() || value < 0.0 {
				return Err(ConfigError::InvalidTickSize { name, value });
			}
		}

		let step = self.tick_step();
		if step <= 0.0 {
			return Err(ConfigError::EmptyTickStep {
				split: self.tick_split_angle,
				block: self.tick_block_angle,
			});
		}
		if step > 360.0 {
			return Err(ConfigError::NoTicks { step });
		}
		let count = (360.0 / step).floor();
		if count > f64::from(MAX_TICK_COUNT) {
			return Err(ConfigError::TooManyTicks {
				step,
				max: MAX_TICK_COUNT,
			});
		}
		Ok(())
	}

	/// Number of ticks that fit in a full circle.
	///
	/// Only meaningful for a config that passed [`TickConfig::validate`].
	pub fn total_tick_count(&self) -> u32 {
		((360.0 / self.tick_step()).floor() as u32).min(MAX_TICK_COUNT)
	}
}

/// Validated configuration plus the current progress.
#[derive(Clone, Debug, PartialEq)]
pub struct ProgressModel {
	config: TickConfig,
	total_tick_count: u32,
	percent: u32,
}

impl ProgressModel {
	pub fn new(config: TickConfig) -> Result<Self, ConfigError> {
		config.validate()?;
		Ok(Self {
			total_tick_count: config.total_tick_count(),
			config,
			percent: 0,
		})
	}

	pub fn config(&self) -> &TickConfig {
		&self.config
	}

	pub fn total_tick_count(&self) -> u32 {
		self.total_tick_count
	}

	pub fn percent(&self) -> u32 {
		self.percent
	}

	/// Stores `percent` clamped to `0..=100`. Returns `true` when the stored
	/// value changed.
	pub fn set_percent(&mut self, percent: u32) -> bool {
		let percent = percent.min(MAX_PERCENT);
		if self.percent == percent {
			return false;
		}
		self.percent = percent;
		true
	}

	/// Number of ticks covered by the current progress. The tick right before
	/// this index is the active one.
	pub fn current_block_index(&self) -> u32 {
		let covered = u64::from(self.percent) * u64::from(self.total_tick_count);
		(covered / u64::from(MAX_PERCENT)) as u32
	}
}

impl Default for ProgressModel {
	fn default() -> Self {
		let config = TickConfig::default();
		Self {
			total_tick_count: config.total_tick_count(),
			config,
			percent: 0,
		}
	}
}
