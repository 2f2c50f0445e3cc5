use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::{LOGO, SITE_NAME};
use crate::state::navigation::Section;

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub active_section: Section,
    pub is_scrolled: bool,
    pub on_navigate: Callback<Section>,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let NavBarProps { active_section, is_scrolled, on_navigate } = props;
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let go_home = {
        let on_navigate = on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Section::Hero))
    };

    let links = Section::ALL.iter().map(|&section| {
        let onclick = {
            let on_navigate = on_navigate.clone();
            let menu_open = menu_open.clone();
            Callback::from(move |_: MouseEvent| {
                menu_open.set(false);
                on_navigate.emit(section);
            })
        };
        html! {
            <button
                key={section.id()}
                {onclick}
                class={classes!("nav-link", (section == *active_section).then(|| "active"))}
            >
                {section.label()}
            </button>
        }
    });

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <button class="nav-logo" onclick={go_home}>
                    <img src={LOGO} alt={SITE_NAME} />
                    <span>{SITE_NAME}</span>
                </button>

                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={classes!("nav-right", (*menu_open).then(|| "mobile-menu-open"))}>
                    { for links }
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 50;
                    padding: 1rem 0;
                    background: transparent;
                    transition: all 0.3s ease;
                }
                .top-nav.scrolled {
                    padding: 0.5rem 0;
                    background: rgba(17, 24, 39, 0.9);
                    backdrop-filter: blur(4px);
                }
                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    background: none;
                    border: none;
                    cursor: pointer;
                    font-size: 1.25rem;
                    font-weight: 700;
                }
                .nav-logo img {
                    width: 2rem;
                    height: 2rem;
                }
                .nav-logo span {
                    background: linear-gradient(to right, #34d399, #fbbf24);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .nav-right {
                    display: flex;
                    gap: 2rem;
                }
                .nav-link {
                    background: none;
                    border: none;
                    cursor: pointer;
                    color: #d1d5db;
                    font-size: 1rem;
                    transition: color 0.2s ease;
                }
                .nav-link:hover,
                .nav-link.active {
                    color: #34d399;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 22px;
                    height: 2px;
                    background: #d1d5db;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-right {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        gap: 1rem;
                        padding: 1rem 1.5rem;
                        background: rgba(17, 24, 39, 0.95);
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                    }
                }
                "#}
            </style>
        </nav>
    }
}
