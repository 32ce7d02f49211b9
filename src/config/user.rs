use anyhow::Context;
use gtk::glib::system_config_dirs;
use gtk::glib::user_config_dir;
use serde_derive::Deserialize;
use std::path::Path;
use std::path::PathBuf;

use super::CONFIG_DIR_NAME;
use crate::widgets::circle_tick_progress::TickConfig;

pub const DEFAULT_SIZE: i32 = 360;

#[derive(Deserialize, Debug, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
	pub style: Option<PathBuf>,
	pub initial_progress: u32,
	/// Requested width and height of the progress ring.
	pub default_size: i32,
}

impl Default for DemoConfig {
	fn default() -> Self {
		Self {
			style: None,
			initial_progress: 0,
			default_size: DEFAULT_SIZE,
		}
	}
}

#[derive(Deserialize, Default, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct UserConfig {
	#[serde(default)]
	pub widget: TickConfig,
	#[serde(default)]
	pub demo: DemoConfig,
}

impl UserConfig {
	pub fn from_toml(content: &str) -> anyhow::Result<Self> {
		let config: UserConfig = toml::from_str(content)?;
		config.widget.validate()?;
		Ok(config)
	}
}

fn find_user_config() -> Option<PathBuf> {
	let path = user_config_dir().join(CONFIG_DIR_NAME).join("config.toml");
	if path.exists() {
		return Some(path);
	}

	for path in system_config_dirs() {
		let path = path.join(CONFIG_DIR_NAME).join("config.toml");
		if path.exists() {
			return Some(path);
		}
	}

	None
}

pub fn read_user_config(path: Option<&Path>) -> anyhow::Result<UserConfig> {
	let path = match path.map(Path::to_owned).or_else(find_user_config) {
		Some(path) => path,
		None => {
			log::info!("No config file found, using defaults");
			return Ok(Default::default());
		}
	};

	log::info!("Loading config from {}", path.display());
	let config_file = std::fs::read_to_string(&path)
		.with_context(|| format!("Failed to read {}", path.display()))?;
	UserConfig::from_toml(&config_file)
		.with_context(|| format!("Invalid config file {}", path.display()))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::color::assert_color_eq;
	use crate::error::ConfigError;
	use crate::widgets::circle_tick_progress::default_gradient_end_color;
	use gtk::gdk::RGBA;

	#[test]
	fn empty_config_uses_defaults() {
		let config = UserConfig::from_toml("").unwrap();
		assert_eq!(config, UserConfig::default());
		assert_eq!(config.widget, TickConfig::default());
		assert_eq!(config.demo.default_size, DEFAULT_SIZE);
	}

	#[test]
	fn parses_widget_section() {
		let config = UserConfig::from_toml(
			r##"
			[widget]
			tick_split_angle = 2.0
			tick_block_angle = 4
			current_tick_size = 40.0
			gradient_start_color = "blue"
			tick_normal_color = "#20202080"

			[demo]
			initial_progress = 30
			"##,
		)
		.unwrap();

		assert_eq!(config.widget.tick_split_angle, 2.0);
		assert_eq!(config.widget.tick_block_angle, 4.0);
		assert_eq!(config.widget.normal_tick_size, 60.0);
		assert_eq!(config.widget.current_tick_size, 40.0);
		assert_color_eq(&config.widget.gradient_start_color, &RGBA::BLUE);
		assert_eq!(config.widget.gradient_end_color, default_gradient_end_color());
		let dim = 32.0 / 255.0;
		assert_color_eq(
			&config.widget.tick_normal_color,
			&RGBA::new(dim, dim, dim, 128.0 / 255.0),
		);
		assert_eq!(config.demo.initial_progress, 30);
	}

	#[test]
	fn gradient_colors_are_read_independently() {
		let config = UserConfig::from_toml(
			r##"
			[widget]
			gradient_start_color = "#000000"
			gradient_end_color = "#ffffff"
			"##,
		)
		.unwrap();
		assert_color_eq(&config.widget.gradient_start_color, &RGBA::BLACK);
		assert_color_eq(&config.widget.gradient_end_color, &RGBA::WHITE);

		let config = UserConfig::from_toml(
			r##"
			[widget]
			gradient_start_color = "#000000"
			"##,
		)
		.unwrap();
		assert_eq!(config.widget.gradient_end_color, default_gradient_end_color());
	}

	#[test]
	fn accepts_css_color_syntax() {
		let config = UserConfig::from_toml(
			r##"
			[widget]
			gradient_start_color = "orange"
			gradient_end_color = "rgb(255,128,0)"
			tick_normal_color = "rgba(0,0,0,0.5)"
			"##,
		)
		.unwrap();
		assert_color_eq(
			&config.widget.gradient_end_color,
			&RGBA::new(1.0, 128.0 / 255.0, 0.0, 1.0),
		);
		assert_color_eq(
			&config.widget.tick_normal_color,
			&RGBA::new(0.0, 0.0, 0.0, 0.5),
		);

		let config = UserConfig::from_toml("[widget]\ngradient_start_color = \"#f00\"").unwrap();
		assert_color_eq(&config.widget.gradient_start_color, &RGBA::RED);
	}

	#[test]
	fn rejects_invalid_widget_config() {
		let error = UserConfig::from_toml(
			r#"
			[widget]
			tick_split_angle = 0.0
			tick_block_angle = 0.0
			"#,
		)
		.unwrap_err();
		assert!(matches!(
			error.downcast_ref::<ConfigError>(),
			Some(ConfigError::EmptyTickStep { .. })
		));

		assert!(UserConfig::from_toml("[widget]\ngradient_end_color = \"nope\"").is_err());
		assert!(UserConfig::from_toml("[widget]\ntick_count = 12").is_err());
	}

	#[test]
	fn missing_file_is_an_error() {
		let result = read_user_config(Some(Path::new("/nonexistent/tickprogress.toml")));
		assert!(result.is_err());
	}
}
