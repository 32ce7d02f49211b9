mod geometry;
mod handle;
mod imp;
mod model;
mod ticks;

pub use geometry::{resolve_side, DrawingRect, SizeSpec};
pub use handle::ProgressHandle;
pub use model::{
	default_gradient_end_color, default_gradient_start_color, default_tick_normal_color,
	ProgressModel, TickConfig, DEFAULT_CURRENT_TICK_SIZE, DEFAULT_NORMAL_TICK_SIZE,
	DEFAULT_TICK_BLOCK_ANGLE, DEFAULT_TICK_SPLIT_ANGLE, MAX_PERCENT, MAX_TICK_COUNT,
};
pub use ticks::{compute_ticks, draw_ticks, ArcSurface, Tick, TickState};

use gtk::{
	glib::{self, Object},
	subclass::prelude::*,
};

use crate::error::ConfigError;

glib::wrapper! {
	/// A ring of tick marks filled with a color gradient up to the current
	/// progress.
	pub struct CircleTickProgress(ObjectSubclass<imp::CircleTickProgress>)
		@extends gtk::Widget,
		@implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget;
}

impl CircleTickProgress {
	pub fn new(config: TickConfig) -> Result<Self, ConfigError> {
		let model = ProgressModel::new(config)?;
		log::debug!(
			"Creating tick progress with {} ticks",
			model.total_tick_count()
		);

		let widget: Self = Object::new();
		widget.imp().model.replace(model);
		Ok(widget)
	}

	/// The configuration the ring is drawn with.
	pub fn config(&self) -> TickConfig {
		self.imp().model.borrow().config().clone()
	}

	pub fn total_tick_count(&self) -> u32 {
		self.imp().model.borrow().total_tick_count()
	}

	/// A handle that can set the progress from other threads.
	///
	/// Returns a closed handle once the widget has been disposed.
	pub fn handle(&self) -> ProgressHandle {
		let sender = self.imp().sender().unwrap_or_else(|| {
			let (sender, _) = async_channel::unbounded();
			sender
		});
		ProgressHandle::new(sender)
	}
}

impl Default for CircleTickProgress {
	fn default() -> Self {
		Object::new()
	}
}
