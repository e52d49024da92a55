mod app;
mod components;
mod error;
mod hooks;
mod models;
mod routes;
mod services;
mod utils;
mod views;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🚗 ParkEase starting...");

    yew::Renderer::<App>::new().render();
}
