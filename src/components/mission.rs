use yew::prelude::*;

use crate::content::PILLARS;
use crate::state::navigation::Section;

#[function_component(Mission)]
pub fn mission() -> Html {
    html! {
        <section id={Section::Mission.id()} class="page-section section-tinted">
            <div class="section-inner">
                <div class="section-heading">
                    <h2>{"Our "}<span class="accent">{"Mission"}</span></h2>
                    <p>{"To build a regenerative loop between Earth's orbit and Mars colonies using AI-driven waste transformation"}</p>
                </div>
                <div class="pillar-grid">
                    {
                        PILLARS.iter().map(|pillar| html! {
                            <div class="card pillar" key={pillar.title}>
                                <div class="pillar-icon">{pillar.icon}</div>
                                <h3>{pillar.title}</h3>
                                <p>{pillar.description}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
            <style>
                {r#"
                .pillar-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
                    gap: 2rem;
                }
                .pillar {
                    padding: 2rem;
                }
                .pillar-icon {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                    transition: transform 0.2s ease;
                }
                .pillar:hover .pillar-icon {
                    transform: scale(1.1);
                }
                .pillar h3 {
                    font-size: 1.5rem;
                    margin-bottom: 1rem;
                }
                .pillar p {
                    color: #d1d5db;
                }
                "#}
            </style>
        </section>
    }
}
