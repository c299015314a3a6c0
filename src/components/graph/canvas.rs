//! Interactive canvas backend. Owns one force engine and one canvas
//! element for its lifetime; rebuilds the engine's element set whenever
//! the adapter output changes and tears everything down on unmount.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::adapter::RenderElements;
use super::render;
use super::state::{CanvasState, CLICK_THRESHOLD};
use super::view::{self, ViewRequest};

/// Canvas-rendered graph view.
///
/// `elements` is the adapter output for the active lens; any change to it
/// (including a lens switch) clears and rebuilds the engine's element set.
/// `view_request` carries the toolbar's zoom/fit commands.
#[component]
pub fn GraphCanvas(
	#[prop(into)] elements: Signal<RenderElements>,
	#[prop(into)] view_request: Signal<Option<ViewRequest>>,
	#[prop(into)] on_node_click: Callback<String>,
	#[prop(into)] on_node_hover: Callback<Option<String>>,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<CanvasState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let stopped: Rc<Cell<bool>> = Rc::new(Cell::new(false));

	let (state_init, animate_init, stopped_init) = (state.clone(), animate.clone(), stopped.clone());
	Effect::new(move |_| {
		let elements = elements.get();
		// Initialization is gated on the container; without it this pass
		// is skipped entirely.
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();

		let (w, h) = (
			width.unwrap_or_else(|| {
				canvas
					.parent_element()
					.map(|p| p.client_width() as f64)
					.unwrap_or(800.0)
			}),
			height.unwrap_or_else(|| {
				canvas
					.parent_element()
					.map(|p| p.client_height() as f64)
					.unwrap_or(600.0)
			}),
		);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		// Full rebuild on every data or lens change; only the view
		// transform survives.
		let carried = state_init.borrow().as_ref().map(|s| s.transform);
		let mut next = CanvasState::new(&elements, w, h);
		if let Some(t) = carried {
			next.transform = t;
		}
		*state_init.borrow_mut() = Some(next);

		if animate_init.borrow().is_some() {
			return;
		}
		let Ok(Some(ctx_obj)) = canvas.get_context("2d") else {
			log::error!("canvas 2d context unavailable, graph rendering disabled");
			return;
		};
		let Ok(ctx) = ctx_obj.dyn_into::<CanvasRenderingContext2d>() else {
			return;
		};

		let (state_anim, animate_inner, stopped_anim) =
			(state_init.clone(), animate_init.clone(), stopped_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if stopped_anim.get() {
				return;
			}
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				if s.animation_running {
					s.tick(0.016);
				}
				render::render(s, &ctx);
			}
			if let (Some(win), Some(cb)) = (web_sys::window(), &*animate_inner.borrow()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let (Some(win), Some(cb)) = (web_sys::window(), &*animate_init.borrow()) {
			let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let state_cmd = state.clone();
	let last_seq = Cell::new(view::initial_seq(view_request.get_untracked()));
	Effect::new(move |_| {
		let Some(req) = view_request.get() else {
			return;
		};
		if req.seq == last_seq.get() {
			return;
		}
		last_seq.set(req.seq);
		if let Some(ref mut s) = *state_cmd.borrow_mut() {
			s.apply(req.command);
		}
	});

	// Engine teardown: stop the frame loop and release the state on every
	// unmount path. The cleanup closure must be Send + Sync, so it reaches
	// the thread-local Rc's through local-storage arena handles rather than
	// capturing them directly. The animate closure stays allocated until
	// its final no-op frame fires.
	let state_drop = StoredValue::new_local(state.clone());
	let stopped_drop = StoredValue::new_local(stopped.clone());
	on_cleanup(move || {
		stopped_drop.with_value(|stop| stop.set(true));
		state_drop.with_value(|state| {
			state.borrow_mut().take();
		});
	});

	let pointer = move |ev: &MouseEvent| -> Option<(f64, f64)> {
		let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
		let rect = canvas.get_bounding_client_rect();
		Some((
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		))
	};

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = pointer(&ev) else { return };
		if let Some(ref mut s) = *state_md.borrow_mut() {
			s.drag.travel = 0.0;
			if let Some(idx) = s.node_at_position(x, y) {
				s.drag.active = true;
				s.drag.node_idx = Some(idx);
				s.drag.start_x = x;
				s.drag.start_y = y;
				s.graph.visit_nodes(|node| {
					if node.index() == idx {
						s.drag.node_start_x = node.x();
						s.drag.node_start_y = node.y();
					}
				});
			} else {
				s.pan.active = true;
				s.pan.start_x = x;
				s.pan.start_y = y;
				s.pan.transform_start_x = s.transform.x;
				s.pan.transform_start_y = s.transform.y;
			}
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = pointer(&ev) else { return };
		let mut hover_change: Option<Option<String>> = None;

		if let Some(ref mut s) = *state_mm.borrow_mut() {
			if !s.drag.active && !s.pan.active {
				let hovered = s.node_at_position(x, y);
				if s.set_hover(hovered) {
					hover_change = Some(hovered.and_then(|idx| s.node_id(idx)));
				}
			}

			if s.drag.active {
				let (dx, dy) = (x - s.drag.start_x, y - s.drag.start_y);
				s.drag.travel = s.drag.travel.max((dx * dx + dy * dy).sqrt());
				if let Some(idx) = s.drag.node_idx {
					let (nx, ny) = (
						s.drag.node_start_x + (dx / s.transform.k) as f32,
						s.drag.node_start_y + (dy / s.transform.k) as f32,
					);
					s.graph.visit_nodes_mut(|node| {
						if node.index() == idx {
							node.data.x = nx;
							node.data.y = ny;
							node.data.is_anchor = true;
						}
					});
				}
			} else if s.pan.active {
				s.transform.x = s.pan.transform_start_x + (x - s.pan.start_x);
				s.transform.y = s.pan.transform_start_y + (y - s.pan.start_y);
			}
		}

		if let Some(hovered) = hover_change {
			on_node_hover.run(hovered);
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		let mut clicked = None;
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			if s.drag.active && s.drag.travel < CLICK_THRESHOLD {
				clicked = s.drag.node_idx.and_then(|idx| s.node_id(idx));
			}
			s.drag.active = false;
			s.drag.node_idx = None;
			s.pan.active = false;
		}
		if let Some(id) = clicked {
			on_node_click.run(id);
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		let mut left_node = false;
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.drag.active = false;
			s.drag.node_idx = None;
			s.pan.active = false;
			left_node = s.set_hover(None);
		}
		if left_node {
			on_node_hover.run(None);
		}
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some((x, y)) = pointer(&ev) else { return };
		if let Some(ref mut s) = *state_wh.borrow_mut() {
			let factor = if ev.delta_y() > 0.0 { 0.9 } else { 1.1 };
			s.transform.zoom_about(x, y, factor);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; cursor: grab;"
		/>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	// on_cleanup requires a Send + Sync closure; the teardown closure only
	// captures local-storage arena handles, which satisfy that even though
	// the values behind them are thread-local.
	#[test]
	fn teardown_captures_are_send_and_sync() {
		fn assert_send_sync<T: Send + Sync>() {}
		assert_send_sync::<StoredValue<Rc<Cell<bool>>, LocalStorage>>();
		assert_send_sync::<StoredValue<Rc<RefCell<Option<CanvasState>>>, LocalStorage>>();
	}
}
