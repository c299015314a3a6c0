//! Simplified SVG diagram backend. Positions come from the selected layout
//! mode rather than a live simulation; relayout animates nodes to their new
//! positions over a fixed duration.

use std::cell::Cell;

use leptos::prelude::*;
use web_sys::WheelEvent;

use super::adapter::RenderElements;
use super::layout::{compute_positions, DiagramLayout, LAYOUT_ANIMATION_MS};
use super::state::NODE_RADIUS;
use super::view::{Bounds, ViewRequest, ViewTransform, initial_seq};

/// SVG-rendered graph view with selectable layout.
#[component]
pub fn GraphDiagram(
	#[prop(into)] elements: Signal<RenderElements>,
	#[prop(into)] layout: Signal<DiagramLayout>,
	#[prop(into)] view_request: Signal<Option<ViewRequest>>,
	#[prop(into)] on_node_click: Callback<String>,
	#[prop(into)] on_node_hover: Callback<Option<String>>,
	#[prop(default = 800.0)] width: f64,
	#[prop(default = 600.0)] height: f64,
) -> impl IntoView {
	let positions = Memo::new(move |_| {
		compute_positions(layout.get(), &elements.get(), width, height)
	});
	let transform = RwSignal::new(ViewTransform::default());
	let hovered = RwSignal::new(None::<String>);

	let last_seq = Cell::new(initial_seq(view_request.get_untracked()));
	Effect::new(move |_| {
		let Some(req) = view_request.get() else {
			return;
		};
		if req.seq == last_seq.get() {
			return;
		}
		last_seq.set(req.seq);
		let bounds = positions.with(|pos| Bounds::of(pos.values().copied()));
		transform.update(|t| t.apply(req.command, bounds, width, height));
	});

	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let factor = if ev.delta_y() > 0.0 { 0.9 } else { 1.1 };
		transform.update(|t| t.zoom_about(width / 2.0, height / 2.0, factor));
	};

	let group_style = move || {
		let t = transform.get();
		format!(
			"transform: translate({}px, {}px) scale({}); transform-origin: 0 0;",
			t.x, t.y, t.k
		)
	};

	let edge_lines = move || {
		let els = elements.get();
		let accent = els.lens.accent();
		positions.with(|pos| {
			els.edges
				.iter()
				.filter_map(|edge| {
					let &(x1, y1) = pos.get(&edge.source)?;
					let &(x2, y2) = pos.get(&edge.target)?;
					let dash = if edge.dashed { "8 4" } else { "" };
					Some(view! {
						<line
							x1=x1.to_string()
							y1=y1.to_string()
							x2=x2.to_string()
							y2=y2.to_string()
							stroke=accent
							stroke-opacity="0.6"
							stroke-width=edge.width.to_string()
							stroke-dasharray=dash
						/>
					})
				})
				.collect_view()
		})
	};

	let node_marks = move || {
		let els = elements.get();
		positions.with(|pos| {
			els.nodes
				.iter()
				.filter_map(|node| {
					let &(x, y) = pos.get(&node.id)?;
					let id = node.id.clone();
					let (click_id, enter_id) = (id.clone(), id.clone());
					let is_hovered = move || hovered.get().as_deref() == Some(id.as_str());
					Some(view! {
						<g
							style=format!(
								"transform: translate({x}px, {y}px); transition: transform {LAYOUT_ANIMATION_MS}ms ease; cursor: pointer;"
							)
							on:click=move |_| on_node_click.run(click_id.clone())
							on:mouseenter=move |_| {
								hovered.set(Some(enter_id.clone()));
								on_node_hover.run(Some(enter_id.clone()));
							}
							on:mouseleave=move |_| {
								hovered.set(None);
								on_node_hover.run(None);
							}
						>
							<circle
								r=NODE_RADIUS.to_string()
								fill=node.color.hex()
								stroke="rgba(255, 255, 255, 0.8)"
								stroke-width=move || if is_hovered() { "2" } else { "0" }
							/>
							<text
								x=(NODE_RADIUS + 4.0).to_string()
								y="3.5"
								fill="#e2e8f0"
								font-size="11"
								font-family="sans-serif"
							>
								{node.label.clone()}
							</text>
						</g>
					})
				})
				.collect_view()
		})
	};

	view! {
		<svg
			class="graph-diagram"
			viewBox=format!("0 0 {width} {height}")
			style="display: block; width: 100%; height: 100%; background: #0f172a;"
			on:wheel=on_wheel
		>
			<g style=group_style>
				{edge_lines}
				{node_marks}
			</g>
		</svg>
	}
}
