use log::debug;
use yew::prelude::*;

use crate::components::{
    agents::Agents, footer::Footer, hero::Hero, image_viewer::ImageViewer, mission::Mission,
    nav_bar::NavBar, process::Process, sponsors::Sponsors,
};
use crate::hooks::scroll_tracker::use_scroll_tracker;
use crate::hooks::section_navigator::use_section_navigator;
use crate::state::navigation::NavigationState;
use crate::state::viewer::{ViewerAction, ViewerState};

/// The whole landing page. Owns all UI state; children only get values and
/// intent callbacks.
#[function_component(Home)]
pub fn home() -> Html {
    let navigation = use_reducer(NavigationState::default);
    let viewer = use_reducer(ViewerState::default);

    use_scroll_tracker(navigation.dispatcher());
    let on_navigate = use_section_navigator(navigation.dispatcher());

    let on_open_image = {
        let viewer = viewer.dispatcher();
        Callback::from(move |image: AttrValue| {
            debug!("opening preview {}", image);
            viewer.dispatch(ViewerAction::Open(image));
        })
    };
    let on_close_image = {
        let viewer = viewer.dispatcher();
        Callback::from(move |_: ()| {
            debug!("closing preview");
            viewer.dispatch(ViewerAction::Close);
        })
    };

    html! {
        <div class="landing">
            <NavBar
                active_section={navigation.active_section}
                is_scrolled={navigation.is_scrolled}
                on_navigate={on_navigate.clone()}
            />
            <Hero {on_navigate} />
            <Mission />
            <Agents {on_open_image} />
            <Process />
            <Sponsors />
            <Footer />
            <ImageViewer selected_image={viewer.selected_image.clone()} on_close={on_close_image} />
            <style>
                {r#"
                body {
                    margin: 0;
                    background: #000;
                    color: #fff;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }
                .landing {
                    min-height: 100vh;
                    overflow-x: hidden;
                }
                .landing h1, .landing h2, .landing h3, .landing p, .landing figure {
                    margin: 0;
                }
                .page-section {
                    padding: 5rem 1.5rem;
                }
                .section-tinted {
                    background: rgba(17, 24, 39, 0.5);
                }
                .section-inner {
                    max-width: 72rem;
                    margin: 0 auto;
                }
                .section-wide {
                    max-width: 80rem;
                }
                .section-heading {
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .section-heading h2 {
                    font-size: clamp(2.25rem, 5vw, 3rem);
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                }
                .section-heading p {
                    font-size: 1.25rem;
                    color: #d1d5db;
                    max-width: 48rem;
                    margin: 0 auto;
                }
                .accent {
                    color: #fbbf24;
                }
                .card {
                    background: rgba(31, 41, 55, 0.5);
                    border: 1px solid #374151;
                    border-radius: 1rem;
                    transition: border-color 0.2s ease;
                }
                .card:hover {
                    border-color: #fbbf24;
                }
                "#}
            </style>
        </div>
    }
}
