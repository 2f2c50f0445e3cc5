use web_sys::js_sys::Math;
use yew::prelude::*;

use crate::config::STAR_COUNT;

#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub left_pct: f64,
    pub top_pct: f64,
    pub delay_s: f64,
    pub duration_s: f64,
}

impl Star {
    fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; animation-delay: {:.2}s; animation-duration: {:.2}s;",
            self.left_pct, self.top_pct, self.delay_s, self.duration_s
        )
    }
}

/// `rand` must yield values in `[0, 1)`.
pub fn scatter_stars(count: usize, mut rand: impl FnMut() -> f64) -> Vec<Star> {
    (0..count)
        .map(|_| Star {
            left_pct: rand() * 100.0,
            top_pct: rand() * 100.0,
            delay_s: rand() * 3.0,
            duration_s: 2.0 + rand() * 3.0,
        })
        .collect()
}

#[function_component(StarField)]
pub fn star_field() -> Html {
    // Positions are fixed for the lifetime of the component.
    let stars = use_memo(|_| scatter_stars(STAR_COUNT, Math::random), ());

    html! {
        <div class="star-field">
            { for stars.iter().map(|star| html! { <div class="star" style={star.style()}></div> }) }
            <style>
                {r#"
                .star-field {
                    position: absolute;
                    inset: 0;
                    opacity: 0.2;
                    pointer-events: none;
                }
                .star {
                    position: absolute;
                    width: 4px;
                    height: 4px;
                    border-radius: 50%;
                    background: #fde68a;
                    animation-name: twinkle;
                    animation-iteration-count: infinite;
                }
                @keyframes twinkle {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.3; }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scatter_count_and_ranges() {
        let mut seq = [0.0, 0.25, 0.5, 0.999].into_iter().cycle();
        let stars = scatter_stars(80, || seq.next().unwrap());
        assert_eq!(stars.len(), 80);
        for star in &stars {
            assert!((0.0..100.0).contains(&star.left_pct));
            assert!((0.0..100.0).contains(&star.top_pct));
            assert!((0.0..3.0).contains(&star.delay_s));
            assert!((2.0..5.0).contains(&star.duration_s));
        }
    }

    #[test]
    fn test_star_style() {
        let star = Star {
            left_pct: 12.5,
            top_pct: 40.0,
            delay_s: 1.0,
            duration_s: 2.5,
        };
        assert_eq!(
            star.style(),
            "left: 12.50%; top: 40.00%; animation-delay: 1.00s; animation-duration: 2.50s;"
        );
    }
}
