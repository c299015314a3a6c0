//! Canvas 2d drawing for the interactive backend. Edges take the active
//! lens accent; nodes take their adapter-resolved color category.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::{CanvasState, NODE_RADIUS};

const BACKGROUND: &str = "#0f172a";
const DASH_ON: f64 = 8.0;
const DASH_OFF: f64 = 4.0;

/// Draw one full frame.
pub fn render(state: &CanvasState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
}

fn draw_edges(state: &CanvasState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let positions = state.positions();
	let (r, g, b) = state.lens.accent_rgb();
	let arrow_size = 8.0 / k;
	let dimmed = state.has_active_highlight();

	for edge in state.edges() {
		let (Some(&(x1, y1)), Some(&(x2, y2))) =
			(positions.get(&edge.source), positions.get(&edge.target))
		else {
			continue;
		};
		let (dx, dy) = (x2 - x1, y2 - y1);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			continue;
		}

		let on_highlight_path =
			state.is_highlighted(edge.source) && state.is_highlighted(edge.target);
		let alpha = if dimmed && !on_highlight_path { 0.15 } else { 0.6 };

		ctx.set_stroke_style_str(&format!("rgba({r}, {g}, {b}, {alpha})"));
		ctx.set_line_width(edge.width / k);
		if edge.dashed {
			let _ = ctx.set_line_dash(&js_sys::Array::of2(
				&JsValue::from_f64(DASH_ON / k),
				&JsValue::from_f64(DASH_OFF / k),
			));
		}

		let (ux, uy) = (dx / dist, dy / dist);
		ctx.begin_path();
		ctx.move_to(x1 + ux * NODE_RADIUS, y1 + uy * NODE_RADIUS);
		ctx.line_to(
			x2 - ux * (NODE_RADIUS + arrow_size),
			y2 - uy * (NODE_RADIUS + arrow_size),
		);
		ctx.stroke();
		if edge.dashed {
			let _ = ctx.set_line_dash(&js_sys::Array::new());
		}

		ctx.set_fill_style_str(&format!("rgba({r}, {g}, {b}, {})", alpha + 0.2));
		let (tip_x, tip_y) = (x2 - ux * NODE_RADIUS, y2 - uy * NODE_RADIUS);
		let (back_x, back_y) = (tip_x - ux * arrow_size, tip_y - uy * arrow_size);
		let (px, py) = (-uy * arrow_size * 0.5, ux * arrow_size * 0.5);
		ctx.begin_path();
		ctx.move_to(tip_x, tip_y);
		ctx.line_to(back_x + px, back_y + py);
		ctx.line_to(back_x - px, back_y - py);
		ctx.close_path();
		ctx.fill();
	}
}

fn draw_nodes(state: &CanvasState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let dimmed = state.has_active_highlight();

	state.graph.visit_nodes(|node| {
		let idx = node.index();
		let (x, y) = (node.x() as f64, node.y() as f64);
		let highlighted = state.is_highlighted(idx);
		let alpha = if dimmed && !highlighted { 0.3 } else { 1.0 };

		ctx.set_global_alpha(alpha);
		ctx.begin_path();
		let _ = ctx.arc(x, y, NODE_RADIUS, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(node.data.user_data.color.hex());
		ctx.fill();

		if state.hover.node == Some(idx) {
			ctx.begin_path();
			let _ = ctx.arc(x, y, NODE_RADIUS + 2.5 / k, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str("rgba(255, 255, 255, 0.8)");
			ctx.set_line_width(1.5 / k);
			ctx.stroke();
		}

		ctx.set_fill_style_str(&format!("rgba(226, 232, 240, {})", alpha * 0.9));
		ctx.set_font(&format!("{}px sans-serif", 11.0 / k.max(0.5)));
		let _ = ctx.fill_text(&node.data.user_data.label, x + NODE_RADIUS + 4.0, y + 3.5);
		ctx.set_global_alpha(1.0);
	});
}
