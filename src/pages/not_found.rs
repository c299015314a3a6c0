use leptos::prelude::*;

/// 404 Not Found Page
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="not-found">
			<h1>"Uh oh!"</h1>
			<h2>"We couldn't find that page!"</h2>
			<a href="/">"Back to the dashboard"</a>
		</div>
	}
}
