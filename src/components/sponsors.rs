use yew::prelude::*;

use crate::content::SPONSORS;
use crate::state::navigation::Section;

#[function_component(Sponsors)]
pub fn sponsors() -> Html {
    html! {
        <section id={Section::Sponsors.id()} class="page-section">
            <div class="section-inner">
                <div class="section-heading">
                    <h2>{"Visionary "}<span class="accent">{"Partners"}</span></h2>
                    <p>{"Organizations pioneering the future of interplanetary sustainability"}</p>
                </div>
                <div class="sponsor-grid">
                    { for SPONSORS.iter().map(|&name| html! {
                        <div class="card sponsor" key={name}>
                            <span>{name}</span>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .sponsor-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(10rem, 1fr));
                    gap: 2rem;
                }
                .sponsor {
                    padding: 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .sponsor span {
                    font-size: 1.5rem;
                    font-weight: 700;
                    background: linear-gradient(to right, #34d399, #fbbf24);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                "#}
            </style>
        </section>
    }
}
