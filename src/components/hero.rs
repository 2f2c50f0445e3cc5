use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::star_field::StarField;
use crate::content::{LOGO, SITE_NAME};
use crate::state::navigation::Section;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_navigate: Callback<Section>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let goto = |section: Section| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(section))
    };

    html! {
        <section id={Section::Hero.id()} class="hero">
            <div class="hero-backdrop"></div>
            <StarField />

            <div class="hero-content">
                <img src={LOGO} alt={SITE_NAME} class="hero-logo" />
                <h1>
                    <span class="hero-title-accent">{"TUKUNA"}</span>
                    <br />
                    <span>{"FOR MARS"}</span>
                </h1>
                <p class="hero-tagline">
                    {"Pioneering sustainable space ecosystems by transforming orbital waste into Martian life resources"}
                </p>
                <div class="hero-buttons">
                    <button class="cta-primary" onclick={goto(Section::Mission)}>
                        {"Join the 2025 Mission"}
                    </button>
                    <button class="cta-secondary" onclick={goto(Section::Agents)}>
                        {"Meet Our Agents"}
                    </button>
                </div>
                <p class="hero-launch">{"🚀 Launching operations in 2025"}</p>
            </div>

            <div class="hero-arrow">{"⌄"}</div>
            <style>
                {r#"
                .hero {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    position: relative;
                    overflow: hidden;
                }
                .hero-backdrop {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, #111827, #000, rgba(120, 53, 15, 0.1));
                }
                .hero-content {
                    position: relative;
                    z-index: 10;
                    text-align: center;
                    padding: 0 1.5rem;
                    max-width: 72rem;
                }
                .hero-logo {
                    width: 8rem;
                    height: 8rem;
                    margin-bottom: 2rem;
                    animation: spin 15s linear infinite;
                }
                @keyframes spin {
                    to { transform: rotate(360deg); }
                }
                .hero h1 {
                    font-size: clamp(3rem, 8vw, 4.5rem);
                    font-weight: 800;
                    margin-bottom: 1.5rem;
                    line-height: 1.1;
                }
                .hero-title-accent {
                    background: linear-gradient(to right, #34d399, #fbbf24, #fb923c);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero-tagline {
                    font-size: 1.4rem;
                    color: #d1d5db;
                    margin-bottom: 2rem;
                }
                .hero-buttons {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    justify-content: center;
                }
                .cta-primary,
                .cta-secondary {
                    padding: 1rem 2rem;
                    border-radius: 9999px;
                    font-weight: 600;
                    font-size: 1rem;
                    cursor: pointer;
                    transition: transform 0.2s ease;
                }
                .cta-primary {
                    border: none;
                    color: white;
                    background: linear-gradient(to right, #10b981, #f59e0b);
                }
                .cta-secondary {
                    background: transparent;
                    border: 2px solid #fbbf24;
                    color: #fbbf24;
                }
                .cta-primary:hover,
                .cta-secondary:hover {
                    transform: scale(1.05);
                }
                .hero-launch {
                    margin-top: 1.5rem;
                    color: #fcd34d;
                }
                .hero-arrow {
                    position: absolute;
                    bottom: 2rem;
                    left: 50%;
                    color: #fbbf24;
                    font-size: 1.5rem;
                    animation: bounce 1s infinite;
                }
                @keyframes bounce {
                    50% { transform: translateY(-25%); }
                }
                "#}
            </style>
        </section>
    }
}
