use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"This orbit is empty."}</p>
            <Link<Route> to={Route::Home} classes="not-found-link">
                {"Back to TUKUNA FOR MARS"}
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    background: #000;
                    color: #fff;
                }
                .not-found h1 {
                    font-size: 5rem;
                    color: #fbbf24;
                }
                .not-found-link {
                    color: #34d399;
                }
                "#}
            </style>
        </div>
    }
}
