//! Toolbar: lens switcher, backend and layout pickers, and the zoom/fit
//! control surface. All state is owned by the page and passed in
//! explicitly.

use leptos::prelude::*;

use super::graph::{DiagramLayout, Lens, ViewCommand};

/// Which rendering backend is mounted. The diagram backend is the
/// simplified fallback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackendKind {
	Canvas,
	Diagram,
}

impl BackendKind {
	/// Both backends, in picker order.
	pub const ALL: [BackendKind; 2] = [BackendKind::Canvas, BackendKind::Diagram];

	/// Picker label.
	pub fn label(self) -> &'static str {
		match self {
			BackendKind::Canvas => "Canvas",
			BackendKind::Diagram => "Diagram",
		}
	}
}

/// Graph view controls.
#[component]
pub fn Toolbar(
	#[prop(into)] lens: Signal<Lens>,
	#[prop(into)] on_lens: Callback<Lens>,
	#[prop(into)] backend: Signal<BackendKind>,
	#[prop(into)] on_backend: Callback<BackendKind>,
	#[prop(into)] layout: Signal<DiagramLayout>,
	#[prop(into)] on_layout: Callback<DiagramLayout>,
	#[prop(into)] on_view: Callback<ViewCommand>,
) -> impl IntoView {
	view! {
		<div class="toolbar">
			<div class="toolbar-group">
				{Lens::ALL
					.into_iter()
					.map(|l| {
						view! {
							<button
								class="toolbar-button lens-button"
								class:active=move || lens.get() == l
								style=move || {
									if lens.get() == l {
										format!("border-color: {};", l.accent())
									} else {
										String::new()
									}
								}
								on:click=move |_| on_lens.run(l)
							>
								{l.label()}
							</button>
						}
					})
					.collect_view()}
			</div>
			<div class="toolbar-group">
				{BackendKind::ALL
					.into_iter()
					.map(|b| {
						view! {
							<button
								class="toolbar-button"
								class:active=move || backend.get() == b
								on:click=move |_| on_backend.run(b)
							>
								{b.label()}
							</button>
						}
					})
					.collect_view()}
			</div>
			// Layout only applies to the diagram backend.
			<Show when=move || backend.get() == BackendKind::Diagram>
				<div class="toolbar-group">
					<select
						class="toolbar-select"
						on:change=move |ev| {
							if let Some(picked) = DiagramLayout::parse(&event_target_value(&ev)) {
								on_layout.run(picked);
							}
						}
						prop:value=move || layout.get().as_str()
					>
						{DiagramLayout::ALL
							.into_iter()
							.map(|l| {
								view! {
									<option value=l.as_str() selected=move || layout.get() == l>
										{l.label()}
									</option>
								}
							})
							.collect_view()}
					</select>
				</div>
			</Show>
			<div class="toolbar-group">
				<button class="toolbar-button" on:click=move |_| on_view.run(ViewCommand::ZoomIn)>
					"+"
				</button>
				<button class="toolbar-button" on:click=move |_| on_view.run(ViewCommand::ZoomOut)>
					"\u{2212}"
				</button>
				<button class="toolbar-button" on:click=move |_| on_view.run(ViewCommand::Fit)>
					"Fit"
				</button>
				<button class="toolbar-button" on:click=move |_| on_view.run(ViewCommand::Reset)>
					"Reset"
				</button>
			</div>
		</div>
	}
}
