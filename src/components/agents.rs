use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::{AGENTS, PROTOTYPE_PHOTO, PROTOTYPE_STATUS, RENDERS};
use crate::state::navigation::Section;

#[derive(Properties, PartialEq)]
pub struct AgentsProps {
    pub on_open_image: Callback<AttrValue>,
}

#[function_component(Agents)]
pub fn agents(props: &AgentsProps) -> Html {
    let thumbnails = RENDERS.iter().map(|render| {
        let onclick = {
            let on_open_image = props.on_open_image.clone();
            let src = AttrValue::Static(render.src);
            Callback::from(move |_: MouseEvent| on_open_image.emit(src.clone()))
        };
        html! {
            <figure class="thumbnail" key={render.src}>
                <button {onclick} aria-label={format!("Enlarge {}", render.caption)}>
                    <img src={render.src} alt={render.caption} loading="lazy" />
                </button>
                <figcaption>{render.caption}</figcaption>
            </figure>
        }
    });

    html! {
        <section id={Section::Agents.id()} class="page-section">
            <div class="section-inner">
                <div class="section-heading">
                    <h2>{"TUKUNA "}<span class="accent">{"Agents"}</span></h2>
                    <p>{"Autonomous bio-inspired robots designed for zero-gravity waste processing"}</p>
                </div>
                <div class="agents-layout">
                    <div class="agent-list">
                        {
                            AGENTS.iter().map(|agent| html! {
                                <div class="card agent" key={agent.name}>
                                    <div class="agent-badge">{"⚡"}</div>
                                    <div>
                                        <h3>{agent.name}</h3>
                                        <p class="agent-specialty">{agent.specialty}</p>
                                        <p class="agent-stats">{agent.stats}</p>
                                    </div>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                    <div class="card prototype">
                        <div class="prototype-photo">
                            <img src={PROTOTYPE_PHOTO} alt="TUKUNA Prototype" />
                        </div>
                        <h3>{"TUKUNA Prototype — Mars Ready"}</h3>
                        {
                            PROTOTYPE_STATUS.iter().map(|&(label, value)| html! {
                                <div class="status-row" key={label}>
                                    <span>{label}</span>
                                    <span class="status-value">{value}</span>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>

                <h3 class="gallery-title">{"Component "}<span class="accent">{"Renders"}</span></h3>
                <div class="gallery">
                    { for thumbnails }
                </div>
            </div>
            <style>
                {r#"
                .agents-layout {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr));
                    gap: 2rem;
                    align-items: center;
                }
                .agent-list {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .agent {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    padding: 1.5rem;
                }
                .agent-badge {
                    width: 4rem;
                    height: 4rem;
                    flex-shrink: 0;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 2rem;
                    background: linear-gradient(135deg, #10b981, #f59e0b);
                }
                .agent h3 {
                    font-size: 1.25rem;
                }
                .agent-specialty {
                    color: #fbbf24;
                    font-size: 0.875rem;
                }
                .agent-stats {
                    color: #9ca3af;
                    font-size: 0.875rem;
                }
                .prototype {
                    padding: 2rem;
                    background: linear-gradient(135deg, #1f2937, rgba(120, 53, 15, 0.2));
                }
                .prototype-photo {
                    aspect-ratio: 1;
                    overflow: hidden;
                    border-radius: 0.75rem;
                    margin-bottom: 1.5rem;
                    background: #111827;
                }
                .prototype-photo img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .prototype h3 {
                    text-align: center;
                    color: #fcd34d;
                    font-size: 1.5rem;
                    margin-bottom: 1rem;
                }
                .status-row {
                    display: flex;
                    justify-content: space-between;
                    color: #d1d5db;
                    margin-top: 0.75rem;
                }
                .status-value {
                    color: #fbbf24;
                    font-weight: 700;
                }
                .gallery-title {
                    text-align: center;
                    font-size: 2rem;
                    margin: 4rem 0 2rem;
                }
                .gallery {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr));
                    gap: 1.5rem;
                }
                .thumbnail button {
                    display: block;
                    width: 100%;
                    padding: 0;
                    border: 1px solid #374151;
                    border-radius: 0.75rem;
                    overflow: hidden;
                    cursor: zoom-in;
                    background: #111827;
                }
                .thumbnail img {
                    width: 100%;
                    aspect-ratio: 4 / 3;
                    object-fit: cover;
                    transition: transform 0.3s ease;
                }
                .thumbnail button:hover img {
                    transform: scale(1.05);
                }
                .thumbnail figcaption {
                    text-align: center;
                    color: #9ca3af;
                    margin-top: 0.5rem;
                }
                "#}
            </style>
        </section>
    }
}
