//! Thin layer over the browser window.
//!
//! Navigation logic talks to [`Viewport`] so it can be exercised natively;
//! [`BrowserViewport`] is the only implementation used at runtime.

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

pub trait Viewport {
    /// Current vertical scroll offset in CSS pixels.
    fn scroll_offset(&self) -> f64;

    /// Smoothly scrolls the element with `id` to the top of the viewport.
    /// Returns `false` without scrolling when no such element exists.
    fn smooth_scroll_to(&self, id: &str) -> bool;

    /// Calls `on_scroll` with the vertical offset on every scroll event until
    /// the returned guard is dropped.
    fn subscribe_scroll(&self, on_scroll: Box<dyn Fn(f64)>) -> Option<ScrollSubscription>;

    /// URL fragment without the leading `#`, if any.
    fn fragment(&self) -> Option<String>;
}

/// Scroll listener registration. Dropping it releases the listener once.
pub struct ScrollSubscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl ScrollSubscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserViewport;

impl Viewport for BrowserViewport {
    fn scroll_offset(&self) -> f64 {
        window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }

    fn smooth_scroll_to(&self, id: &str) -> bool {
        let Some(element) = window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            return false;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    fn subscribe_scroll(&self, on_scroll: Box<dyn Fn(f64)>) -> Option<ScrollSubscription> {
        let window = window()?;
        let listener = Closure::<dyn Fn()>::new({
            let window = window.clone();
            move || {
                if let Ok(offset) = window.scroll_y() {
                    on_scroll(offset);
                }
            }
        });

        if let Err(err) =
            window.add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
        {
            warn!("could not subscribe to scroll events: {:?}", err);
            return None;
        }
        debug!("scroll listener attached");

        Some(ScrollSubscription::new(move || {
            match window
                .remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
            {
                Ok(()) => debug!("scroll listener released"),
                Err(err) => warn!("could not remove scroll listener: {:?}", err),
            }
        }))
    }

    fn fragment(&self) -> Option<String> {
        let hash = window()?.location().hash().ok()?;
        let fragment = hash.trim_start_matches('#');
        (!fragment.is_empty()).then(|| fragment.to_string())
    }
}

/// Stops the page behind a modal from scrolling.
pub fn set_body_scroll_locked(locked: bool) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let style = body.style();
    let result = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
    if let Err(err) = result {
        warn!("could not toggle body scroll lock: {:?}", err);
    }
}

#[cfg(test)]
pub mod fake {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// In-memory viewport that records scroll requests and listener
    /// attach/detach counts.
    #[derive(Default)]
    pub struct FakeViewport {
        pub ids: Vec<&'static str>,
        pub offset: f64,
        pub hash: Option<String>,
        pub requests: RefCell<Vec<String>>,
        pub attached: Cell<usize>,
        pub detached: Rc<Cell<usize>>,
        pub listener: RefCell<Option<Box<dyn Fn(f64)>>>,
    }

    impl FakeViewport {
        pub fn with_ids(ids: &[&'static str]) -> Self {
            Self {
                ids: ids.to_vec(),
                ..Self::default()
            }
        }

        pub fn full_page() -> Self {
            Self::with_ids(&["hero", "mission", "agents", "process", "sponsors"])
        }

        /// Delivers a scroll event to the registered listener, if any.
        pub fn scroll(&self, offset: f64) {
            if let Some(listener) = self.listener.borrow().as_ref() {
                listener(offset);
            }
        }
    }

    impl Viewport for FakeViewport {
        fn scroll_offset(&self) -> f64 {
            self.offset
        }

        fn smooth_scroll_to(&self, id: &str) -> bool {
            if !self.ids.iter().any(|known| *known == id) {
                return false;
            }
            self.requests.borrow_mut().push(id.to_string());
            true
        }

        fn subscribe_scroll(&self, on_scroll: Box<dyn Fn(f64)>) -> Option<ScrollSubscription> {
            self.attached.set(self.attached.get() + 1);
            *self.listener.borrow_mut() = Some(on_scroll);
            let detached = self.detached.clone();
            Some(ScrollSubscription::new(move || detached.set(detached.get() + 1)))
        }

        fn fragment(&self) -> Option<String> {
            self.hash.clone()
        }
    }

    #[test]
    fn test_subscription_releases_once() {
        let viewport = FakeViewport::default();
        let subscription = viewport.subscribe_scroll(Box::new(|_| {}));
        assert_eq!(viewport.attached.get(), 1);
        assert_eq!(viewport.detached.get(), 0);
        drop(subscription);
        assert_eq!(viewport.detached.get(), 1);
    }
}
