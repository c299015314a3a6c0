//! Side panel showing the active lens's metadata plus the precomputed
//! integrity score and drift summary, all displayed as-is.

use std::collections::HashMap;

use leptos::prelude::*;

use super::graph::{Lens, LensInfo};

/// Heading color: the catalog's accent when the mock data supplies one,
/// the lens's built-in accent otherwise.
fn heading_accent(info: &LensInfo, lens: Lens) -> String {
	if info.accent.is_empty() {
		lens.accent().to_string()
	} else {
		info.accent.clone()
	}
}

/// Metadata panel for the active lens.
#[component]
pub fn LensPanel(
	#[prop(into)] lens: Signal<Lens>,
	#[prop(into)] catalog: Signal<HashMap<Lens, LensInfo>>,
	#[prop(into)] integrity_score: Signal<u8>,
	#[prop(into)] drift_summary: Signal<String>,
) -> impl IntoView {
	let info = move || catalog.get().get(&lens.get()).cloned().unwrap_or_default();

	view! {
		<div class="lens-panel">
			<h3
				class="panel-heading"
				style=move || format!("color: {};", heading_accent(&info(), lens.get()))
			>
				{move || {
					let i = info();
					if i.label.is_empty() { lens.get().label().to_string() } else { i.label }
				}}
			</h3>
			<ul class="lens-metrics">
				{move || {
					info()
						.metrics
						.into_iter()
						.map(|m| {
							view! {
								<li class="lens-metric">
									<span class="metric-name">{m.name}</span>
									<span class="metric-value">{m.value}</span>
								</li>
							}
						})
						.collect_view()
				}}
			</ul>
			{move || {
				info()
					.violation
					.map(|v| view! { <p class="lens-violation">{v}</p> })
			}}
			<div class="integrity">
				<span class="metric-name">"Integrity"</span>
				<span class="metric-value">{move || format!("{}/100", integrity_score.get())}</span>
			</div>
			<p class="drift-summary">{move || drift_summary.get()}</p>
		</div>
	}
}
