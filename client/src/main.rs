mod actions;
mod app;
mod components;
mod net;
mod util;

fn main() {
    console_error_panic_hook::set_once();
    // Fails only when a logger is already registered (hot reload).
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
