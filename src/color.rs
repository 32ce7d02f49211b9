use gtk::gdk::RGBA;
use serde::{Deserialize, Deserializer};

use crate::error::ConfigError;

/// Parses any CSS color GDK understands, e.g. `green`, `#f00`,
/// `#ff000080` or `rgba(0,0,0,0.5)`.
pub fn parse_color(value: &str) -> Result<RGBA, ConfigError> {
	RGBA::parse(value.trim()).map_err(|_| ConfigError::InvalidColor(value.to_owned()))
}

/// `deserialize_with` helper for color strings.
pub fn deserialize_color<'de, D>(deserializer: D) -> Result<RGBA, D::Error>
where
	D: Deserializer<'de>,
{
	let value = String::deserialize(deserializer)?;
	parse_color(&value).map_err(serde::de::Error::custom)
}

/// Blends every channel linearly from `start` towards `end`.
///
/// `fraction` is clamped to `0.0..=1.0`, so `0.0` returns `start` exactly.
pub fn interpolate_color(start: &RGBA, end: &RGBA, fraction: f32) -> RGBA {
	let fraction = if fraction.is_nan() {
		0.0
	} else {
		fraction.clamp(0.0, 1.0)
	};
	RGBA::new(
		start.red() + (end.red() - start.red()) * fraction,
		start.green() + (end.green() - start.green()) * fraction,
		start.blue() + (end.blue() - start.blue()) * fraction,
		start.alpha() + (end.alpha() - start.alpha()) * fraction,
	)
}

#[cfg(test)]
pub(crate) fn assert_color_eq(left: &RGBA, right: &RGBA) {
	let channels = |c: &RGBA| [c.red(), c.green(), c.blue(), c.alpha()];
	for (l, r) in channels(left).into_iter().zip(channels(right)) {
		assert!((l - r).abs() < 1e-4, "{left:?} != {right:?}");
	}
}
