//! Legend overlay, filtered by the active lens with the same membership
//! rule edges use.

use leptos::prelude::*;

use super::graph::{Lens, LegendItem};

/// Legend entries applicable under the active lens.
#[component]
pub fn Legend(
	#[prop(into)] items: Signal<Vec<LegendItem>>,
	#[prop(into)] lens: Signal<Lens>,
) -> impl IntoView {
	let visible = move || {
		let active = lens.get();
		items
			.get()
			.into_iter()
			.filter(|item| item.shown_under(active))
			.collect::<Vec<_>>()
	};

	view! {
		<div class="legend">
			<h3 class="panel-heading">"Legend"</h3>
			<ul class="legend-entries">
				{move || {
					visible()
						.into_iter()
						.map(|item| {
							let swatch_style = if item.dashed {
								format!(
									"border-top: 2px dashed {}; width: 14px; height: 0;",
									item.category.hex()
								)
							} else {
								format!(
									"background: {}; width: 10px; height: 10px; border-radius: 50%;",
									item.category.hex()
								)
							};
							view! {
								<li class="legend-entry">
									<span class="legend-swatch" style=swatch_style></span>
									{item.label.clone()}
								</li>
							}
						})
						.collect_view()
				}}
			</ul>
		</div>
	}
}
