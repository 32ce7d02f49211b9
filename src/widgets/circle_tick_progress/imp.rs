use std::cell::{Cell, RefCell};
use std::marker::PhantomData;

use async_channel::Sender;
use gtk::{
	cairo, graphene,
	glib::{self, MainContext, Properties},
	prelude::*,
	subclass::prelude::*,
};

use super::geometry::{natural_side, DrawingRect, SizeSpec};
use super::handle;
use super::model::{ProgressModel, MAX_PERCENT};
use super::ticks::{compute_ticks, draw_ticks};

#[derive(Properties, Debug, Default)]
#[properties(wrapper_type = super::CircleTickProgress)]
pub struct CircleTickProgress {
	#[property(get = Self::progress, set = Self::set_progress, type = u32)]
	progress: PhantomData<u32>,

	pub(super) model: RefCell<ProgressModel>,
	drawing_rect: Cell<DrawingRect>,
	sender: RefCell<Option<Sender<u32>>>,
}

impl CircleTickProgress {
	fn progress(&self) -> u32 {
		self.model.borrow().percent()
	}

	fn set_progress(&self, percent: u32) {
		let changed = self.model.borrow_mut().set_percent(percent);
		if !changed {
			return;
		}

		let percent = self.progress();
		log::trace!("Progress set to {}%", percent);
		self.obj()
			.update_property(&[gtk::accessible::Property::ValueNow(percent as f64)]);
		self.obj().queue_draw();
	}

	pub(super) fn sender(&self) -> Option<Sender<u32>> {
		self.sender.borrow().clone()
	}

	fn update_drawing_rect(&self, width: i32, height: i32) {
		let current_tick_size = self.model.borrow().config().current_tick_size;
		self.drawing_rect
			.set(DrawingRect::centered(width, height, current_tick_size));
	}

	fn listen_for_progress(&self) {
		let (sender, receiver) = async_channel::unbounded::<u32>();
		self.sender.replace(Some(sender));

		let widget = self.obj().downgrade();
		MainContext::default().spawn_local(async move {
			while let Some(percent) = handle::recv_latest(&receiver).await {
				let Some(widget) = widget.upgrade() else {
					break;
				};
				widget.set_progress(percent);
			}
		});
	}
}

#[glib::object_subclass]
impl ObjectSubclass for CircleTickProgress {
	const NAME: &'static str = "CircleTickProgress";
	type Type = super::CircleTickProgress;
	type ParentType = gtk::Widget;

	fn class_init(klass: &mut Self::Class) {
		klass.set_css_name("circletickprogress");
		klass.set_accessible_role(gtk::AccessibleRole::ProgressBar);
	}
}

#[glib::derived_properties]
impl ObjectImpl for CircleTickProgress {
	fn constructed(&self) {
		self.parent_constructed();

		self.obj().update_property(&[
			gtk::accessible::Property::ValueMin(0_f64),
			gtk::accessible::Property::ValueMax(MAX_PERCENT as f64),
			gtk::accessible::Property::ValueNow(self.progress() as f64),
		]);

		self.listen_for_progress();
	}

	fn dispose(&self) {
		// Ends the listener and turns every handle into a no-op
		if let Some(sender) = self.sender.take() {
			handle::close(&sender);
		}
	}
}

impl WidgetImpl for CircleTickProgress {
	fn request_mode(&self) -> gtk::SizeRequestMode {
		gtk::SizeRequestMode::HeightForWidth
	}

	fn measure(&self, _orientation: gtk::Orientation, for_size: i32) -> (i32, i32, i32, i32) {
		// Square: the natural size along one axis is the size of the other
		let current_tick_size = self.model.borrow().config().current_tick_size;
		let natural = natural_side(SizeSpec::from_for_size(for_size), current_tick_size);
		(0, natural, -1, -1)
	}

	fn size_allocate(&self, width: i32, height: i32, baseline: i32) {
		self.parent_size_allocate(width, height, baseline);
		self.update_drawing_rect(width, height);
	}

	fn snapshot(&self, snapshot: &gtk::Snapshot) {
		let rect = self.drawing_rect.get();
		if rect.is_empty() {
			return;
		}

		let ticks = compute_ticks(&self.model.borrow());
		let bounds = graphene::Rect::new(
			0.0,
			0.0,
			self.obj().width() as f32,
			self.obj().height() as f32,
		);
		let mut cr = snapshot.append_cairo(&bounds);
		cr.set_antialias(cairo::Antialias::Best);
		if let Err(error) = draw_ticks(&mut cr, &rect, &ticks) {
			log::warn!("Failed drawing progress ticks: {}", error);
		}
	}
}
