/// A layout constraint for one dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeSpec {
	Exactly(i32),
	AtMost(i32),
	Unspecified,
}

impl SizeSpec {
	/// GTK passes `-1` as `for_size` when the other dimension is unknown.
	pub fn from_for_size(for_size: i32) -> Self {
		if for_size < 0 {
			SizeSpec::Unspecified
		} else {
			SizeSpec::AtMost(for_size)
		}
	}

	pub fn resolve(self) -> i32 {
		match self {
			SizeSpec::Exactly(size) => size.max(0),
			SizeSpec::AtMost(size) => size.max(0),
			SizeSpec::Unspecified => 0,
		}
	}
}

/// Smallest radius left inside the widest stroke when the widget picks its
/// own size.
pub const MIN_RING_RADIUS: f64 = 48.0;

/// Natural size along one axis given the constraint from the other one.
///
/// With no constraint the ring asks for room for the widest stroke on both
/// edges around a ring of [`MIN_RING_RADIUS`].
pub fn natural_side(other: SizeSpec, current_tick_size: f64) -> i32 {
	match other {
		SizeSpec::Unspecified => (2.0 * (current_tick_size + MIN_RING_RADIUS)).ceil() as i32,
		spec => spec.resolve(),
	}
}

/// Side of the square the widget occupies.
pub fn resolve_side(width: SizeSpec, height: SizeSpec) -> i32 {
	width.resolve().min(height.resolve())
}

/// The rectangle the tick arcs are stroked on, in widget coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DrawingRect {
	pub left: f64,
	pub top: f64,
	pub right: f64,
	pub bottom: f64,
}

impl DrawingRect {
	/// Square of `side` inset by half the widest stroke on every edge.
	pub fn inset_square(side: i32, current_tick_size: f64) -> Self {
		let side = f64::from(side);
		let padding = current_tick_size / 2.0;
		Self {
			left: padding,
			top: padding,
			right: side - padding,
			bottom: side - padding,
		}
	}

	/// Like [`DrawingRect::inset_square`], with the square centered in an
	/// allocation of `width` x `height`.
	pub fn centered(width: i32, height: i32, current_tick_size: f64) -> Self {
		let side = resolve_side(SizeSpec::Exactly(width), SizeSpec::Exactly(height));
		let dx = f64::from(width.max(0) - side) / 2.0;
		let dy = f64::from(height.max(0) - side) / 2.0;
		let rect = Self::inset_square(side, current_tick_size);
		Self {
			left: rect.left + dx,
			top: rect.top + dy,
			right: rect.right + dx,
			bottom: rect.bottom + dy,
		}
	}

	pub fn width(&self) -> f64 {
		self.right - self.left
	}

	pub fn height(&self) -> f64 {
		self.bottom - self.top
	}

	pub fn center(&self) -> (f64, f64) {
		(
			(self.left + self.right) / 2.0,
			(self.top + self.bottom) / 2.0,
		)
	}

	/// Nothing can be drawn when the padding eats the whole square.
	pub fn is_empty(&self) -> bool {
		self.width() <= 0.0 || self.height() <= 0.0
	}
}
