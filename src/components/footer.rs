use yew::prelude::*;

use crate::content::SITE_NAME;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-mark">{"🌿♻"}</div>
            <p>{format!("{} — Turning space waste into Martian life since 2025.", SITE_NAME)}</p>
            <div class="footer-meta">
                <span>{format!("© 2025 {}", SITE_NAME)}</span>
                <span>{"•"}</span>
                <span>{"Regenerating the cosmos, one orbit at a time"}</span>
            </div>
            <style>
                {r#"
                .site-footer {
                    padding: 3rem 1.5rem;
                    background: #111827;
                    border-top: 1px solid rgba(146, 64, 14, 0.3);
                    text-align: center;
                    color: #9ca3af;
                }
                .footer-mark {
                    font-size: 2.5rem;
                    margin-bottom: 1.5rem;
                }
                .footer-meta {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1.5rem;
                    margin-top: 1rem;
                    color: #6b7280;
                }
                "#}
            </style>
        </footer>
    }
}
