use std::rc::Rc;

use yew::{AttrValue, Reducible};

/// Single-slot lightbox. At most one image is enlarged at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewerState {
    pub selected_image: Option<AttrValue>,
}

impl ViewerState {
    pub fn is_open(&self) -> bool {
        self.selected_image.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewerAction {
    Open(AttrValue),
    Close,
}

impl Reducible for ViewerState {
    type Action = ViewerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ViewerAction::Open(image) => Rc::new(ViewerState {
                selected_image: Some(image),
            }),
            ViewerAction::Close if !self.is_open() => self,
            ViewerAction::Close => Rc::new(ViewerState::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(image: &'static str) -> ViewerAction {
        ViewerAction::Open(AttrValue::Static(image))
    }

    #[test]
    fn test_starts_closed() {
        assert!(!ViewerState::default().is_open());
    }

    #[test]
    fn test_last_open_wins() {
        let state = Rc::new(ViewerState::default())
            .reduce(open("/renders/head.jpg"))
            .reduce(open("/renders/arm.jpg"));
        assert_eq!(state.selected_image.as_deref(), Some("/renders/arm.jpg"));
    }

    #[test]
    fn test_open_then_close() {
        let state = Rc::new(ViewerState::default())
            .reduce(open("/renders/head.jpg"))
            .reduce(ViewerAction::Close);
        assert_eq!(state.selected_image, None);
    }

    #[test]
    fn test_close_when_closed_is_noop() {
        let closed = Rc::new(ViewerState::default());
        let after = closed.clone().reduce(ViewerAction::Close);
        assert!(Rc::ptr_eq(&closed, &after));
        assert_eq!(*after, ViewerState::default());
    }

    #[test]
    fn test_thumbnail_then_backdrop() {
        let opened = Rc::new(ViewerState::default()).reduce(open("/renders/head.jpg"));
        assert_eq!(opened.selected_image.as_deref(), Some("/renders/head.jpg"));
        let closed = opened.reduce(ViewerAction::Close);
        assert!(!closed.is_open());
    }
}
