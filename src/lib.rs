use yew::prelude::*;
use yew_router::prelude::*;

mod components;
pub mod api_client;
pub mod chart;
pub mod common;
pub mod hooks;
pub mod settings;

use components::report::Report;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/tasks/report")]
    Report,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home | Route::Report => {
            log::trace!("Rendering Report page");
            html! { <Report /> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <h1 class="text-2xl font-bold p-6">{"404 Not Found"}</h1> }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== TaskList Report Dashboard Starting ===");
    log::debug!("API base URL: {}", settings.api_base_url());
    log::debug!("Debug mode: {}", settings.debug_mode);

    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
