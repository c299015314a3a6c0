//! View transform and the toolbar command surface. Commands arrive as an
//! explicit sequence-numbered signal threaded through component props so
//! repeated presses of the same button still re-fire.

use super::adapter::RenderNode;

/// Scale clamp applied to every zoom path.
pub const MIN_SCALE: f64 = 0.1;
/// Upper scale clamp.
pub const MAX_SCALE: f64 = 10.0;
/// Per-press zoom step for the toolbar buttons.
pub const ZOOM_STEP: f64 = 1.2;
/// Viewport padding left around a fitted element set, in pixels.
pub const FIT_PADDING: f64 = 40.0;

/// One toolbar action against the active backend's view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewCommand {
	ZoomIn,
	ZoomOut,
	Reset,
	Fit,
}

/// A command paired with a monotonically increasing sequence number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewRequest {
	pub seq: u64,
	pub command: ViewCommand,
}

/// Sequence baseline for a freshly mounted backend. A command still latched
/// in the signal from before the mount counts as already applied, so only
/// commands issued after the mount fire.
pub fn initial_seq(latched: Option<ViewRequest>) -> u64 {
	latched.map(|r| r.seq).unwrap_or(0)
}

/// Screen transform: graph coordinates scale by `k` then translate by
/// `(x, y)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

impl Default for ViewTransform {
	fn default() -> Self {
		ViewTransform { x: 0.0, y: 0.0, k: 1.0 }
	}
}

impl ViewTransform {
	/// Map a screen point into graph space.
	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		((sx - self.x) / self.k, (sy - self.y) / self.k)
	}

	/// Zoom by `factor` keeping the screen point `(sx, sy)` fixed.
	pub fn zoom_about(&mut self, sx: f64, sy: f64, factor: f64) {
		let new_k = (self.k * factor).clamp(MIN_SCALE, MAX_SCALE);
		let ratio = new_k / self.k;
		self.x = sx - (sx - self.x) * ratio;
		self.y = sy - (sy - self.y) * ratio;
		self.k = new_k;
	}

	/// Transform that centers `bounds` in a `width` x `height` viewport with
	/// `FIT_PADDING` around it. Degenerate bounds fit at unit scale.
	pub fn fit(bounds: Bounds, width: f64, height: f64) -> Self {
		let (bw, bh) = (bounds.max_x - bounds.min_x, bounds.max_y - bounds.min_y);
		let k = if bw <= 0.0 && bh <= 0.0 {
			1.0
		} else {
			let kx = (width - 2.0 * FIT_PADDING) / bw.max(1.0);
			let ky = (height - 2.0 * FIT_PADDING) / bh.max(1.0);
			kx.min(ky).clamp(MIN_SCALE, MAX_SCALE)
		};
		let (cx, cy) = (
			(bounds.min_x + bounds.max_x) / 2.0,
			(bounds.min_y + bounds.max_y) / 2.0,
		);
		ViewTransform {
			x: width / 2.0 - k * cx,
			y: height / 2.0 - k * cy,
			k,
		}
	}

	/// Apply one toolbar command. Button zooms pivot on the viewport
	/// center; `Fit` recenters on `bounds` when there is one, otherwise it
	/// behaves like `Reset`.
	pub fn apply(&mut self, command: ViewCommand, bounds: Option<Bounds>, width: f64, height: f64) {
		match command {
			ViewCommand::ZoomIn => self.zoom_about(width / 2.0, height / 2.0, ZOOM_STEP),
			ViewCommand::ZoomOut => self.zoom_about(width / 2.0, height / 2.0, 1.0 / ZOOM_STEP),
			ViewCommand::Reset => *self = ViewTransform::default(),
			ViewCommand::Fit => {
				*self = match bounds {
					Some(b) => ViewTransform::fit(b, width, height),
					None => ViewTransform::default(),
				};
			}
		}
	}
}

/// Axis-aligned bounding box over node positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
	pub min_x: f64,
	pub min_y: f64,
	pub max_x: f64,
	pub max_y: f64,
}

impl Bounds {
	/// Bounding box of a point set; `None` when empty.
	pub fn of(points: impl IntoIterator<Item = (f64, f64)>) -> Option<Bounds> {
		let mut out: Option<Bounds> = None;
		for (x, y) in points {
			let b = out.get_or_insert(Bounds {
				min_x: x,
				min_y: y,
				max_x: x,
				max_y: y,
			});
			b.min_x = b.min_x.min(x);
			b.min_y = b.min_y.min(y);
			b.max_x = b.max_x.max(x);
			b.max_y = b.max_y.max(y);
		}
		out
	}

	/// Bounding box of the adapter's node output.
	pub fn of_nodes(nodes: &[RenderNode]) -> Option<Bounds> {
		Bounds::of(nodes.iter().map(|n| (n.x, n.y)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn zoom_about_keeps_pivot_fixed() {
		let mut t = ViewTransform { x: 40.0, y: -10.0, k: 1.0 };
		let pivot_graph = t.screen_to_graph(200.0, 150.0);
		t.zoom_about(200.0, 150.0, 1.5);
		let after = t.screen_to_graph(200.0, 150.0);
		assert!((pivot_graph.0 - after.0).abs() < 1e-9);
		assert!((pivot_graph.1 - after.1).abs() < 1e-9);
		assert!((t.k - 1.5).abs() < 1e-9);
	}

	#[test]
	fn zoom_clamps_to_scale_range() {
		let mut t = ViewTransform::default();
		for _ in 0..100 {
			t.zoom_about(0.0, 0.0, 2.0);
		}
		assert_eq!(t.k, MAX_SCALE);
		for _ in 0..200 {
			t.zoom_about(0.0, 0.0, 0.5);
		}
		assert_eq!(t.k, MIN_SCALE);
	}

	#[test]
	fn fit_centers_bounds_in_viewport() {
		let b = Bounds {
			min_x: 100.0,
			min_y: 100.0,
			max_x: 300.0,
			max_y: 200.0,
		};
		let t = ViewTransform::fit(b, 800.0, 600.0);
		// Bounds center maps to viewport center.
		let (sx, sy) = (t.x + t.k * 200.0, t.y + t.k * 150.0);
		assert!((sx - 400.0).abs() < 1e-9);
		assert!((sy - 300.0).abs() < 1e-9);
		// Fitted extent stays inside the padded viewport.
		assert!(t.k * 200.0 <= 800.0 - 2.0 * FIT_PADDING + 1e-9);
		assert!(t.k * 100.0 <= 600.0 - 2.0 * FIT_PADDING + 1e-9);
	}

	#[test]
	fn fit_of_single_point_is_unit_scale() {
		let b = Bounds {
			min_x: 50.0,
			min_y: 60.0,
			max_x: 50.0,
			max_y: 60.0,
		};
		let t = ViewTransform::fit(b, 400.0, 400.0);
		assert_eq!(t.k, 1.0);
		assert!((t.x + 50.0 - 200.0).abs() < 1e-9);
	}

	#[test]
	fn reset_restores_identity() {
		let mut t = ViewTransform { x: 5.0, y: 6.0, k: 3.0 };
		t.apply(ViewCommand::Reset, None, 800.0, 600.0);
		assert_eq!(t, ViewTransform::default());
	}

	#[test]
	fn bounds_of_empty_set_is_none() {
		assert_eq!(Bounds::of_nodes(&[]), None);
	}

	#[test]
	fn mount_baseline_swallows_latched_command() {
		// A backend mounted while the signal still holds an older request
		// starts at that request's seq, so the request does not replay;
		// the next issued command (seq + 1) still fires.
		let latched = ViewRequest {
			seq: 7,
			command: ViewCommand::Fit,
		};
		assert_eq!(initial_seq(Some(latched)), 7);
		assert_eq!(initial_seq(None), 0);
	}
}
