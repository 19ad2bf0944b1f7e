/// NOVAURL - management console for the URL shortener
/// Built with Rust + WASM + Yew

pub mod api;
pub mod link_data;
pub mod operations;
pub mod ui;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Start the Yew app for the console page
#[wasm_bindgen]
pub fn start_console() {
    yew::Renderer::<ui::app::App>::new().render();
}
