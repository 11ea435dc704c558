use yew::prelude::*;

mod components;
mod mock_data;
pub mod common;
pub mod hooks;
pub mod mapbox;
pub mod settings;

use components::infographic::Infographic;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class="min-h-screen w-full bg-base-200 p-4">
            <div class="w-full max-w-7xl mx-auto">
                <Infographic />
            </div>
        </div>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Housing Survey Infographic Starting ===");
    log::info!("Application settings: {:?}", settings);
    if settings.mapbox_access_token.is_empty() {
        log::warn!("No mapbox access token configured; the map panel will render a fallback");
    }

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
