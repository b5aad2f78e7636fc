mod app;
mod config;
mod dom;
mod error;
mod file_calc;
mod interactive_plot;
mod plotly_bindings;
mod render;
mod static_plot;

use app::*;
use leptos::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logging unavailable: {err}").into());
    }

    mount_to_body(|| {
        view! { <App/> }
    })
}
