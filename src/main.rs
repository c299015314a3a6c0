use archlens::{init_logging, App};

fn main() {
	init_logging();
	leptos::mount::mount_to_body(App);
}
