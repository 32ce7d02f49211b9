use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(name = "tickprogress-demo", version, about = "Circular tick progress demo")]
pub struct ArgsDemo {
	/// Use a custom config file instead of looking for one.
	#[arg(long, value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Use a custom stylesheet
	#[arg(short, long, value_name = "CSS FILE PATH")]
	pub style: Option<PathBuf>,

	/// Initial progress
	#[arg(long, value_name = "0..=100", value_parser = clap::value_parser!(u32).range(0..=100))]
	pub progress: Option<u32>,

	/// Drive the progress from a worker thread, one step every N milliseconds
	#[arg(long, value_name = "MILLIS")]
	pub simulate: Option<u64>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_all_flags() {
		let args = ArgsDemo::try_parse_from([
			"tickprogress-demo",
			"--config",
			"/tmp/config.toml",
			"-s",
			"/tmp/style.css",
			"--progress",
			"40",
			"--simulate",
			"25",
		])
		.unwrap();
		assert_eq!(args.config, Some(PathBuf::from("/tmp/config.toml")));
		assert_eq!(args.style, Some(PathBuf::from("/tmp/style.css")));
		assert_eq!(args.progress, Some(40));
		assert_eq!(args.simulate, Some(25));
	}

	#[test]
	fn rejects_progress_out_of_range() {
		assert!(ArgsDemo::try_parse_from(["tickprogress-demo", "--progress", "101"]).is_err());
	}
}
