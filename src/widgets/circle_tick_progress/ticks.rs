use gtk::{cairo, gdk::prelude::GdkCairoContextExt, gdk::RGBA};

use super::geometry::DrawingRect;
use super::model::ProgressModel;
use crate::color::interpolate_color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickState {
	/// Covered by the progress.
	Completed,
	/// The last covered tick, drawn with the wider stroke.
	Active,
	Pending,
}

/// Everything needed to stroke one tick.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
	pub index: u32,
	pub state: TickState,
	/// Degrees, clockwise from 3 o'clock.
	pub start_angle: f64,
	pub sweep_angle: f64,
	pub stroke_width: f64,
	pub color: RGBA,
}

/// Computes the full tick ring for the current state of `model`.
pub fn compute_ticks(model: &ProgressModel) -> Vec<Tick> {
	let config = model.config();
	let step = config.tick_step();
	let current_block_index = model.current_block_index();

	(0..model.total_tick_count())
		.map(|index| {
			let start_angle = f64::from(index) * step;
			let state = if current_block_index > 0 && index == current_block_index - 1 {
				TickState::Active
			} else if index < current_block_index {
				TickState::Completed
			} else {
				TickState::Pending
			};
			let gradient = || {
				interpolate_color(
					&config.gradient_start_color,
					&config.gradient_end_color,
					(start_angle / 360.0) as f32,
				)
			};
			let (stroke_width, color) = match state {
				TickState::Active => (config.current_tick_size, gradient()),
				TickState::Completed => (config.normal_tick_size, gradient()),
				TickState::Pending => (config.normal_tick_size, config.tick_normal_color.clone()),
			};
			Tick {
				index,
				state,
				start_angle,
				sweep_angle: config.tick_block_angle,
				stroke_width,
				color,
			}
		})
		.collect()
}

/// A surface that can stroke circular arcs inside a rectangle.
pub trait ArcSurface {
	type Error;

	fn stroke_arc(
		&mut self,
		rect: &DrawingRect,
		start_angle: f64,
		sweep_angle: f64,
		stroke_width: f64,
		color: &RGBA,
	) -> Result<(), Self::Error>;
}

pub fn draw_ticks<S: ArcSurface>(
	surface: &mut S,
	rect: &DrawingRect,
	ticks: &[Tick],
) -> Result<(), S::Error> {
	if rect.is_empty() {
		return Ok(());
	}
	for tick in ticks {
		surface.stroke_arc(
			rect,
			tick.start_angle,
			tick.sweep_angle,
			tick.stroke_width,
			&tick.color,
		)?;
	}
	Ok(())
}

impl ArcSurface for cairo::Context {
	type Error = cairo::Error;

	fn stroke_arc(
		&mut self,
		rect: &DrawingRect,
		start_angle: f64,
		sweep_angle: f64,
		stroke_width: f64,
		color: &RGBA,
	) -> Result<(), Self::Error> {
		let (xc, yc) = rect.center();
		let radius = rect.width().min(rect.height()) / 2.0;

		self.new_path();
		self.set_line_width(stroke_width);
		self.set_source_color(color);
		self.arc(
			xc,
			yc,
			radius,
			start_angle.to_radians(),
			(start_angle + sweep_angle).to_radians(),
		);
		self.stroke()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::color::assert_color_eq;
	use crate::widgets::circle_tick_progress::model::{
		default_gradient_end_color, default_gradient_start_color, default_tick_normal_color,
		TickConfig,
	};

	#[derive(Debug)]
	struct StrokedArc {
		rect: DrawingRect,
		start_angle: f64,
		sweep_angle: f64,
		stroke_width: f64,
		color: RGBA,
	}

	#[derive(Default)]
	struct RecordingSurface {
		calls: Vec<StrokedArc>,
	}

	impl ArcSurface for RecordingSurface {
		type Error = ();

		fn stroke_arc(
			&mut self,
			rect: &DrawingRect,
			start_angle: f64,
			sweep_angle: f64,
			stroke_width: f64,
			color: &RGBA,
		) -> Result<(), ()> {
			self.calls.push(StrokedArc {
				rect: *rect,
				start_angle,
				sweep_angle,
				stroke_width,
				color: color.clone(),
			});
			Ok(())
		}
	}

	fn model_at(percent: u32) -> ProgressModel {
		let mut model = ProgressModel::default();
		model.set_percent(percent);
		model
	}

	fn gradient_at(fraction: f32) -> RGBA {
		interpolate_color(
			&default_gradient_start_color(),
			&default_gradient_end_color(),
			fraction,
		)
	}

	#[test]
	fn zero_percent_is_all_pending() {
		let ticks = compute_ticks(&model_at(0));
		assert_eq!(ticks.len(), 60);
		for tick in &ticks {
			assert_eq!(tick.state, TickState::Pending);
			assert_eq!(tick.color, default_tick_normal_color());
			assert_eq!(tick.stroke_width, 60.0);
		}
	}

	#[test]
	fn full_progress_marks_last_tick_active() {
		let ticks = compute_ticks(&model_at(100));
		let (active, completed) = ticks.split_last().unwrap();

		assert_eq!(active.index, 59);
		assert_eq!(active.state, TickState::Active);
		assert_eq!(active.stroke_width, 85.0);
		assert_eq!(active.start_angle, 354.0);
		assert_color_eq(&active.color, &gradient_at(59.0 / 60.0));

		assert_eq!(completed.len(), 59);
		for tick in completed {
			assert_eq!(tick.state, TickState::Completed);
			assert_eq!(tick.stroke_width, 60.0);
		}
		assert_eq!(completed[0].color, default_gradient_start_color());
	}

	#[test]
	fn partial_progress_splits_ring() {
		let ticks = compute_ticks(&model_at(50));
		assert_eq!(ticks[28].state, TickState::Completed);
		assert_eq!(ticks[29].state, TickState::Active);
		assert_eq!(ticks[30].state, TickState::Pending);
		assert_eq!(ticks[30].color, default_tick_normal_color());
		assert_color_eq(&ticks[29].color, &gradient_at(174.0 / 360.0));
	}

	#[test]
	fn ticks_are_evenly_spaced() {
		let config = TickConfig {
			tick_split_angle: 5.0,
			tick_block_angle: 10.0,
			..Default::default()
		};
		let model = ProgressModel::new(config).unwrap();
		let ticks = compute_ticks(&model);
		assert_eq!(ticks.len(), 24);
		for (i, tick) in ticks.iter().enumerate() {
			assert_eq!(tick.start_angle, i as f64 * 15.0);
			assert_eq!(tick.sweep_angle, 10.0);
		}
	}

	#[test]
	fn same_percent_renders_identically() {
		let mut model = ProgressModel::default();
		model.set_percent(37);
		let first = compute_ticks(&model);
		model.set_percent(37);
		assert_eq!(compute_ticks(&model), first);
	}

	#[test]
	fn gradient_end_color_is_used() {
		let config = TickConfig {
			gradient_start_color: RGBA::BLACK,
			gradient_end_color: RGBA::WHITE,
			tick_split_angle: 0.0,
			tick_block_angle: 180.0,
			..Default::default()
		};
		let mut model = ProgressModel::new(config).unwrap();
		model.set_percent(100);
		let ticks = compute_ticks(&model);
		assert_eq!(ticks[0].color, RGBA::BLACK);
		assert_color_eq(&ticks[1].color, &RGBA::new(0.5, 0.5, 0.5, 1.0));
	}

	#[test]
	fn draws_one_arc_per_tick() {
		let rect = DrawingRect::inset_square(300, 85.0);
		let ticks = compute_ticks(&model_at(10));
		let mut surface = RecordingSurface::default();
		draw_ticks(&mut surface, &rect, &ticks).unwrap();

		assert_eq!(surface.calls.len(), 60);
		let arc = &surface.calls[5];
		assert_eq!(arc.rect, rect);
		assert_eq!(arc.start_angle, 30.0);
		assert_eq!(arc.sweep_angle, 3.0);
		assert_eq!(arc.stroke_width, 85.0);
		assert_eq!(arc.color, ticks[5].color);
	}

	#[test]
	fn empty_rect_draws_nothing() {
		let rect = DrawingRect::inset_square(40, 85.0);
		let mut surface = RecordingSurface::default();
		draw_ticks(&mut surface, &rect, &compute_ticks(&model_at(80))).unwrap();
		assert!(surface.calls.is_empty());
	}
}
