use yew::prelude::*;

use crate::state::navigation::{NavAction, NavigationState};
use crate::viewport::{BrowserViewport, ScrollSubscription, Viewport};

/// Samples the current offset, then forwards every scroll event as a
/// [`NavAction::Scrolled`]. Events stop when the guard is dropped.
pub fn track_scroll<V, D>(viewport: &V, dispatch: D) -> Option<ScrollSubscription>
where
    V: Viewport + ?Sized,
    D: Fn(NavAction) + 'static,
{
    // Pick up the offset a reload may have restored.
    dispatch(NavAction::Scrolled(viewport.scroll_offset()));
    viewport.subscribe_scroll(Box::new(move |offset| dispatch(NavAction::Scrolled(offset))))
}

/// Feeds window scroll offsets into the navigation reducer for as long as
/// the calling component is mounted.
#[hook]
pub fn use_scroll_tracker(dispatcher: UseReducerDispatcher<NavigationState>) {
    use_effect_with_deps(
        move |_| {
            let subscription =
                track_scroll(&BrowserViewport, move |action| dispatcher.dispatch(action));
            move || drop(subscription)
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::fake::FakeViewport;
    use std::cell::RefCell;
    use std::rc::Rc;
    use yew::Reducible;

    type SharedState = Rc<RefCell<Rc<NavigationState>>>;

    fn recording_reducer() -> (SharedState, impl Fn(NavAction) + 'static) {
        let state = Rc::new(RefCell::new(Rc::new(NavigationState::default())));
        let dispatch = {
            let state = state.clone();
            move |action: NavAction| {
                let next = state.borrow().clone().reduce(action);
                *state.borrow_mut() = next;
            }
        };
        (state, dispatch)
    }

    #[test]
    fn test_subscribes_once_and_follows_offsets() {
        let viewport = FakeViewport::default();
        let (state, dispatch) = recording_reducer();

        let subscription = track_scroll(&viewport, dispatch);
        assert!(subscription.is_some());
        assert_eq!(viewport.attached.get(), 1);
        assert!(!state.borrow().is_scrolled);

        viewport.scroll(120.0);
        assert!(state.borrow().is_scrolled);
        viewport.scroll(30.0);
        assert!(!state.borrow().is_scrolled);
        assert_eq!(viewport.attached.get(), 1);
    }

    #[test]
    fn test_initial_offset_is_sampled() {
        let viewport = FakeViewport {
            offset: 400.0,
            ..FakeViewport::default()
        };
        let (state, dispatch) = recording_reducer();
        let _subscription = track_scroll(&viewport, dispatch);
        assert!(state.borrow().is_scrolled);
    }

    #[test]
    fn test_dropping_guard_detaches_exactly_once() {
        let viewport = FakeViewport::default();
        let (_state, dispatch) = recording_reducer();

        let subscription = track_scroll(&viewport, dispatch);
        assert_eq!(viewport.detached.get(), 0);
        drop(subscription);
        assert_eq!(viewport.detached.get(), 1);
        assert_eq!(viewport.attached.get(), 1);
    }
}
