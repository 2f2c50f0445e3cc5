use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::viewport::set_body_scroll_locked;

/// Where a click inside the open viewer landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerClick {
    Backdrop,
    CloseButton,
    Panel,
}

impl ViewerClick {
    pub fn closes(&self) -> bool {
        match self {
            ViewerClick::Backdrop | ViewerClick::CloseButton => true,
            ViewerClick::Panel => false,
        }
    }
}

pub fn closes_on_key(is_open: bool, key: &str) -> bool {
    is_open && key == "Escape"
}

/// The image to show in the overlay; `None` means no overlay is rendered.
pub fn overlay_image(selected_image: &Option<AttrValue>) -> Option<AttrValue> {
    selected_image.clone()
}

fn click_handler(target: ViewerClick, on_close: &Callback<()>) -> Callback<MouseEvent> {
    let on_close = on_close.clone();
    Callback::from(move |e: MouseEvent| {
        // Each layer decides for itself; nothing bubbles to the backdrop.
        e.stop_propagation();
        if target.closes() {
            on_close.emit(());
        }
    })
}

#[derive(Properties, PartialEq)]
pub struct ImageViewerProps {
    pub selected_image: Option<AttrValue>,
    pub on_close: Callback<()>,
}

/// Full-screen overlay showing the selected render. Renders nothing while
/// the slot is empty.
#[function_component(ImageViewer)]
pub fn image_viewer(props: &ImageViewerProps) -> Html {
    let is_open = props.selected_image.is_some();

    {
        let on_close = props.on_close.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if closes_on_key(is_open, &e.key()) {
                on_close.emit(());
            }
        });
    }

    use_effect_with_deps(
        |is_open| {
            set_body_scroll_locked(*is_open);
            || set_body_scroll_locked(false)
        },
        is_open,
    );

    let Some(src) = overlay_image(&props.selected_image) else {
        return html! {};
    };

    let on_backdrop = click_handler(ViewerClick::Backdrop, &props.on_close);
    let on_panel = click_handler(ViewerClick::Panel, &props.on_close);
    let on_close_button = click_handler(ViewerClick::CloseButton, &props.on_close);

    html! {
        <div class="viewer-overlay" onclick={on_backdrop} role="dialog" aria-modal="true">
            <div class="viewer-panel" onclick={on_panel}>
                <button class="viewer-close" aria-label="Close preview" onclick={on_close_button}>
                    {"×"}
                </button>
                <img src={src} alt="Enlarged component render" />
            </div>
            <style>
                {r#"
                .viewer-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(0, 0, 0, 0.85);
                    backdrop-filter: blur(4px);
                    cursor: zoom-out;
                }
                .viewer-panel {
                    position: relative;
                    max-width: 90vw;
                    max-height: 90vh;
                    cursor: default;
                }
                .viewer-panel img {
                    max-width: 90vw;
                    max-height: 90vh;
                    border-radius: 0.75rem;
                    box-shadow: 0 20px 50px rgba(0, 0, 0, 0.8);
                }
                .viewer-close {
                    position: absolute;
                    top: -1rem;
                    right: -1rem;
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    border: none;
                    cursor: pointer;
                    font-size: 1.5rem;
                    color: #111827;
                    background: #fbbf24;
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
    fn test_no_overlay_when_slot_empty() {
        assert_eq!(overlay_image(&None), None);
    }

    #[test]
    fn test_overlay_shows_selected_image() {
        let selected = Some(AttrValue::Static("/renders/head.jpg"));
        assert_eq!(overlay_image(&selected).as_deref(), Some("/renders/head.jpg"));
    }

    #[test]
    fn test_backdrop_and_close_button_close() {
        assert!(ViewerClick::Backdrop.closes());
        assert!(ViewerClick::CloseButton.closes());
    }

    #[test]
    fn test_click_inside_panel_keeps_viewer_open() {
        assert!(!ViewerClick::Panel.closes());
    }

    #[test]
    fn test_escape_closes_only_when_open() {
        assert!(closes_on_key(true, "Escape"));
        assert!(!closes_on_key(false, "Escape"));
        assert!(!closes_on_key(true, "Enter"));
        assert!(!closes_on_key(true, "Esc "));
    }
}
