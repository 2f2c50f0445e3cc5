//! Navigation state for the single-page layout.
//!
//! The home page owns one [`NavigationState`] through `use_reducer`; the nav
//! bar and the section components only see a copy of it and dispatch
//! [`NavAction`]s back through callbacks.

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use yew::Reducible;

use crate::config::SCROLL_THRESHOLD_PX;

/// One vertically stacked region of the page, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Hero,
    Mission,
    Agents,
    Process,
    Sponsors,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::Mission,
        Section::Agents,
        Section::Process,
        Section::Sponsors,
    ];

    /// DOM id of the `<section>` element.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Mission => "mission",
            Section::Agents => "agents",
            Section::Process => "process",
            Section::Sponsors => "sponsors",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::Mission => "Mission",
            Section::Agents => "Agents",
            Section::Process => "Process",
            Section::Sponsors => "Sponsors",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSection(pub String);

impl fmt::Display for UnknownSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown section id `{}`", self.0)
    }
}

impl std::error::Error for UnknownSection {}

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// True when the page has scrolled strictly past the nav threshold.
pub fn is_past_threshold(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD_PX
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NavigationState {
    pub active_section: Section,
    pub is_scrolled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavAction {
    /// A scroll event reported this vertical offset.
    Scrolled(f64),
    /// The user picked a section. Applied before the scroll animation runs.
    Activate(Section),
}

impl Reducible for NavigationState {
    type Action = NavAction;

    // Returning `self` unchanged keeps the same Rc, which tells yew to skip
    // the re-render.
    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            NavAction::Scrolled(offset) => {
                let is_scrolled = is_past_threshold(offset);
                if is_scrolled == self.is_scrolled {
                    return self;
                }
                Rc::new(NavigationState {
                    is_scrolled,
                    ..*self
                })
            }
            NavAction::Activate(section) => {
                if section == self.active_section {
                    return self;
                }
                Rc::new(NavigationState {
                    active_section: section,
                    ..*self
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: NavigationState, action: NavAction) -> NavigationState {
        *Rc::new(state).reduce(action)
    }

    #[test]
    fn test_initial_state() {
        let state = NavigationState::default();
        assert_eq!(state.active_section, Section::Hero);
        assert!(!state.is_scrolled);
    }

    #[test]
    fn test_threshold_is_strict() {
        assert!(!is_past_threshold(0.0));
        assert!(!is_past_threshold(50.0));
        assert!(is_past_threshold(50.5));
        assert!(is_past_threshold(4000.0));
    }

    #[test]
    fn test_scrolled_tracks_every_observation() {
        let mut state = NavigationState::default();
        for offset in [10.0, 51.0, 300.0, 50.0, 0.0, 120.0] {
            state = reduce(state, NavAction::Scrolled(offset));
            assert_eq!(state.is_scrolled, offset > 50.0, "offset {offset}");
        }
    }

    #[test]
    fn test_redundant_scroll_keeps_same_instance() {
        let state = Rc::new(NavigationState::default());
        let next = state.clone().reduce(NavAction::Scrolled(20.0));
        assert!(Rc::ptr_eq(&state, &next));

        let scrolled = next.reduce(NavAction::Scrolled(80.0));
        let again = scrolled.clone().reduce(NavAction::Scrolled(900.0));
        assert!(Rc::ptr_eq(&scrolled, &again));
    }

    #[test]
    fn test_activate_from_any_state() {
        for from in Section::ALL {
            for to in Section::ALL {
                let start = NavigationState {
                    active_section: from,
                    is_scrolled: true,
                };
                let state = reduce(start, NavAction::Activate(to));
                assert_eq!(state.active_section, to);
                assert!(state.is_scrolled);
            }
        }
    }

    #[test]
    fn test_scroll_leaves_active_section_alone() {
        let state = reduce(NavigationState::default(), NavAction::Scrolled(120.0));
        assert!(state.is_scrolled);
        assert_eq!(state.active_section, Section::Hero);
    }

    #[test]
    fn test_section_ids_parse_back() {
        for section in Section::ALL {
            assert_eq!(section.id().parse::<Section>(), Ok(section));
        }
    }

    #[test]
    fn test_unknown_section_id() {
        let err = "launchpad".parse::<Section>().unwrap_err();
        assert_eq!(err, UnknownSection("launchpad".to_string()));
        assert_eq!(err.to_string(), "unknown section id `launchpad`");
    }

    #[test]
    fn test_section_labels() {
        assert_eq!(Section::Hero.label(), "Home");
        assert_eq!(Section::Sponsors.label(), "Sponsors");
        assert_eq!(Section::Agents.to_string(), "agents");
    }
}
