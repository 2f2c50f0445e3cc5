use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod viewport;
mod state {
    pub mod navigation;
    pub mod viewer;
}
mod hooks {
    pub mod scroll_tracker;
    pub mod section_navigator;
}
mod components {
    pub mod agents;
    pub mod footer;
    pub mod hero;
    pub mod image_viewer;
    pub mod mission;
    pub mod nav_bar;
    pub mod process;
    pub mod sponsors;
    pub mod star_field;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use pages::{home::Home, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting TUKUNA FOR MARS");
    yew::Renderer::<App>::new().render();
}
