//! Dashboard page. Owns every piece of UI state (active lens, backend and
//! layout selection, view commands, selection, hover) and threads it
//! explicitly through the toolbar, panels, and the mounted backend.

use leptos::prelude::*;

use crate::components::graph::{
	compute_visible_elements, DiagramLayout, GraphCanvas, GraphDiagram, Lens, ViewCommand,
	ViewRequest,
};
use crate::components::legend::Legend;
use crate::components::lens_panel::LensPanel;
use crate::components::toolbar::{BackendKind, Toolbar};
use crate::data;

/// Architecture graph dashboard.
#[component]
pub fn Home() -> impl IntoView {
	let dataset = StoredValue::new(data::load_sample());

	let lens = RwSignal::new(Lens::Reality);
	let backend = RwSignal::new(BackendKind::Canvas);
	let layout = RwSignal::new(DiagramLayout::default());
	let view_request = RwSignal::new(None::<ViewRequest>);
	let view_seq = StoredValue::new(0u64);
	let selected = RwSignal::new(None::<String>);
	let hovered = RwSignal::new(None::<String>);

	let elements = Memo::new(move |_| {
		dataset.with_value(|d| compute_visible_elements(&d.nodes, &d.edges, lens.get()))
	});
	let legend_items = Signal::derive(move || dataset.with_value(|d| d.legend.clone()));
	let catalog = Signal::derive(move || dataset.with_value(|d| d.lenses.clone()));
	let integrity = Signal::derive(move || dataset.with_value(|d| d.integrity_score));
	let drift_summary = Signal::derive(move || dataset.with_value(|d| d.drift_summary.clone()));

	let on_lens = Callback::new(move |l: Lens| lens.set(l));
	let on_backend = Callback::new(move |b: BackendKind| backend.set(b));
	let on_layout = Callback::new(move |l: DiagramLayout| layout.set(l));
	let on_view = Callback::new(move |command: ViewCommand| {
		let seq = view_seq.get_value() + 1;
		view_seq.set_value(seq);
		view_request.set(Some(ViewRequest { seq, command }));
	});
	let on_node_click = Callback::new(move |id: String| selected.set(Some(id)));
	let on_node_hover = Callback::new(move |id: Option<String>| hovered.set(id));

	let selected_detail = move || {
		let id = selected.get()?;
		dataset.with_value(|d| d.nodes.iter().find(|n| n.id == id).cloned())
	};

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			<div class="dashboard">
				<Toolbar
					lens=lens
					on_lens=on_lens
					backend=backend
					on_backend=on_backend
					layout=layout
					on_layout=on_layout
					on_view=on_view
				/>
				<div class="dashboard-body">
					<div class="graph-pane">
						{move || match backend.get() {
							BackendKind::Canvas => {
								view! {
									<GraphCanvas
										elements=elements
										view_request=view_request
										on_node_click=on_node_click
										on_node_hover=on_node_hover
									/>
								}
									.into_any()
							}
							BackendKind::Diagram => {
								view! {
									<GraphDiagram
										elements=elements
										layout=layout
										view_request=view_request
										on_node_click=on_node_click
										on_node_hover=on_node_hover
									/>
								}
									.into_any()
							}
						}}
						<div class="hover-readout">{move || hovered.get().unwrap_or_default()}</div>
					</div>
					<aside class="sidebar">
						<LensPanel
							lens=lens
							catalog=catalog
							integrity_score=integrity
							drift_summary=drift_summary
						/>
						<Legend items=legend_items lens=lens />
						{move || {
							selected_detail()
								.map(|node| {
									view! {
										<div class="node-detail">
											<h3 class="panel-heading">{node.label.clone()}</h3>
											<ul class="node-meta">
												{node
													.meta
													.iter()
													.map(|(k, v)| {
														view! {
															<li class="lens-metric">
																<span class="metric-name">{k.clone()}</span>
																<span class="metric-value">{v.clone()}</span>
															</li>
														}
													})
													.collect_view()}
											</ul>
										</div>
									}
								})
						}}
					</aside>
				</div>
			</div>
		</ErrorBoundary>
	}
}
