mod application;
mod args;

#[macro_use]
extern crate shrinkwraprs;

#[macro_use]
extern crate cascade;

use application::DemoApplication;
use args::ArgsDemo;
use clap::Parser;
use gtk::{gdk::Display, CssProvider};
use std::path::Path;

const DEFAULT_STYLE: &str = include_str!("../../data/style.css");

fn load_css(display: &Display, style: Option<&Path>) {
	// Load the bundled default theme
	let provider = CssProvider::new();
	provider.connect_parsing_error(|_provider, _section, error| {
		log::error!("Could not load default CSS stylesheet: {}", error);
	});
	provider.load_from_data(DEFAULT_STYLE);
	gtk::style_context_add_provider_for_display(
		display,
		&provider,
		gtk::STYLE_PROVIDER_PRIORITY_APPLICATION as u32,
	);

	// Try loading the users CSS theme
	if let Some(path) = style {
		if !path.exists() {
			log::warn!("Stylesheet {} does not exist", path.display());
			return;
		}
		let user_provider = CssProvider::new();
		user_provider.connect_parsing_error(|_provider, _section, error| {
			log::error!("Failed loading user defined stylesheet: {}", error);
		});
		user_provider.load_from_path(path);
		gtk::style_context_add_provider_for_display(
			display,
			&user_provider,
			gtk::STYLE_PROVIDER_PRIORITY_USER as u32,
		);
		log::info!("Loaded user defined CSS file {}", path.display());
	}
}

fn main() {
	env_logger::init();
	let args = ArgsDemo::parse();

	// Parse Config
	let config = match tickprogress::config::user::read_user_config(args.config.as_deref()) {
		Ok(config) => config,
		Err(error) => {
			log::error!("{:#}", error);
			std::process::exit(1);
		}
	};

	if gtk::init().is_err() {
		log::error!("failed to initialize GTK Application");
		std::process::exit(1);
	}

	let Some(display) = Display::default() else {
		log::error!("Failed getting the default display");
		std::process::exit(1);
	};
	// Load style path from config if none is given on CLI
	let style = args.style.clone().or_else(|| config.demo.style.clone());
	load_css(&display, style.as_deref());

	std::process::exit(DemoApplication::new(config, args).start());
}
