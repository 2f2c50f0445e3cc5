use log::debug;
use yew::prelude::*;

use crate::state::navigation::{NavAction, NavigationState, Section};
use crate::viewport::{BrowserViewport, Viewport};

/// Marks `section` active, then asks the viewport to bring it into view.
///
/// The active section is updated even when the element is missing, in which
/// case no scroll is issued. Returns whether a scroll was requested.
pub fn go_to<V, D>(viewport: &V, dispatch: D, section: Section) -> bool
where
    V: Viewport + ?Sized,
    D: Fn(NavAction),
{
    dispatch(NavAction::Activate(section));
    let scrolled = viewport.smooth_scroll_to(section.id());
    if !scrolled {
        debug!("no element with id `{}`, skipping scroll", section.id());
    }
    scrolled
}

/// Section named by the URL fragment (`/#agents`), if it names one.
pub fn linked_section<V: Viewport + ?Sized>(viewport: &V) -> Option<Section> {
    let fragment = viewport.fragment()?;
    match fragment.parse() {
        Ok(section) => Some(section),
        Err(err) => {
            debug!("ignoring fragment: {}", err);
            None
        }
    }
}

/// Stable callback that navigates through the browser viewport. On mount it
/// also follows a `#section` deep link.
#[hook]
pub fn use_section_navigator(
    dispatcher: UseReducerDispatcher<NavigationState>,
) -> Callback<Section> {
    let navigate = use_memo(
        move |_| {
            Callback::from(move |section: Section| {
                debug!("navigating to {}", section);
                go_to(&BrowserViewport, |action| dispatcher.dispatch(action), section);
            })
        },
        (),
    );

    {
        let navigate = (*navigate).clone();
        use_effect_with_deps(
            move |_| {
                if let Some(section) = linked_section(&BrowserViewport) {
                    navigate.emit(section);
                }
                || ()
            },
            (),
        );
    }

    (*navigate).clone()
}
