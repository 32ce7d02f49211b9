use std::cell::RefCell;
use std::rc::Rc;
use std::thread;
use std::time::Duration;

use gtk::{
	gio::ApplicationFlags,
	glib::{self, clone},
	prelude::*,
	Application,
};
use tickprogress::config::{user::UserConfig, APPLICATION_NAME};
use tickprogress::widgets::circle_tick_progress::{CircleTickProgress, ProgressHandle, MAX_PERCENT};

use crate::args::ArgsDemo;

#[derive(Clone, Shrinkwrap)]
pub struct DemoApplication {
	#[shrinkwrap(main_field)]
	app: gtk::Application,
	config: Rc<UserConfig>,
	args: Rc<ArgsDemo>,
	window: Rc<RefCell<Option<gtk::ApplicationWindow>>>,
}

impl DemoApplication {
	pub fn new(config: UserConfig, args: ArgsDemo) -> Self {
		let app = Application::new(Some(APPLICATION_NAME), ApplicationFlags::FLAGS_NONE);

		DemoApplication {
			app,
			config: Rc::new(config),
			args: Rc::new(args),
			window: Rc::new(RefCell::new(None)),
		}
	}

	pub fn start(&self) -> i32 {
		let demo_app = self.clone();
		self.app.connect_activate(move |_| demo_app.activate());

		// Arguments are handled by clap
		let empty_args: Vec<String> = vec![];
		self.app.run_with_args(&empty_args).into()
	}

	fn activate(&self) {
		if let Some(window) = self.window.borrow().as_ref() {
			window.present();
			return;
		}

		let progress = match CircleTickProgress::new(self.config.widget.clone()) {
			Ok(progress) => progress,
			Err(error) => {
				log::error!("Could not create the progress widget: {}", error);
				self.app.quit();
				return;
			}
		};
		let size = self.config.demo.default_size;
		progress.set_size_request(size, size);
		progress.set_hexpand(true);
		progress.set_vexpand(true);

		let initial = self
			.args
			.progress
			.unwrap_or(self.config.demo.initial_progress);
		progress.set_progress(initial);

		let scale = cascade! {
			gtk::Scale::with_range(gtk::Orientation::Horizontal, 0.0, MAX_PERCENT as f64, 1.0);
			..set_digits(0);
			..set_draw_value(true);
			..set_value(progress.progress() as f64);
		};
		scale.connect_value_changed(clone!(
			#[weak]
			progress,
			move |scale| progress.set_progress(scale.value().round() as u32)
		));
		progress.connect_progress_notify(clone!(
			#[weak]
			scale,
			move |progress| scale.set_value(progress.progress() as f64)
		));

		let container = cascade! {
			gtk::Box::new(gtk::Orientation::Vertical, 12);
			..set_widget_name("container");
			..append(&progress);
			..append(&scale);
		};

		let window = cascade! {
			gtk::ApplicationWindow::new(&self.app);
			..set_title(Some("Tick Progress"));
			..add_css_class("tickprogress-demo");
			..set_child(Some(&container));
		};
		window.present();
		self.window.replace(Some(window));

		if let Some(interval) = self.args.simulate {
			spawn_simulation(progress.handle(), Duration::from_millis(interval));
		}
	}
}

/// Walks the progress from 0 to 100 over and over from a worker thread until
/// the widget goes away.
fn spawn_simulation(handle: ProgressHandle, interval: Duration) {
	log::info!("Simulating progress every {:?}", interval);
	thread::spawn(move || {
		for percent in (0..=MAX_PERCENT).cycle() {
			if handle.is_closed() {
				break;
			}
			handle.set_progress(percent);
			thread::sleep(interval);
		}
		log::debug!("Progress simulation stopped");
	});
}
