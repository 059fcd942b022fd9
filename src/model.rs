//! Panel state for the sign-in / sign-up page.
//!
//! The page shows one of two panels. Which one is visible is decided by the
//! stylesheet from a single marker class on the container element, so the
//! whole state is a two-valued flag.

use std::rc::Rc;
use yew::Reducible;

/// Class on the container that moves the overlay to show the sign-up form.
pub const MARKER_CLASS: &str = "right-panel-active";
/// Base class the stylesheet uses for the container.
pub const CONTAINER_CLASS: &str = "container";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelState {
    #[default]
    SignIn,
    SignUp,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelAction {
    ActivateSignUp,
    ActivateSignIn,
}

impl PanelState {
    /// Initial panel from the `panel` query value. Anything but `signup`
    /// starts on sign-in.
    pub fn from_query(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()) {
            Some(v) if v == "signup" || v == "sign-up" => PanelState::SignUp,
            _ => PanelState::SignIn,
        }
    }

    pub fn is_right_panel_active(self) -> bool {
        matches!(self, PanelState::SignUp)
    }

    pub fn apply(self, action: PanelAction) -> Self {
        // Unconditional: the last click wins.
        match action {
            PanelAction::ActivateSignUp => PanelState::SignUp,
            PanelAction::ActivateSignIn => PanelState::SignIn,
        }
    }

    pub fn container_classes(self) -> Vec<&'static str> {
        let mut classes = vec![CONTAINER_CLASS];
        if self.is_right_panel_active() {
            classes.push(MARKER_CLASS);
        }
        classes
    }
}

impl Reducible for PanelState {
    type Action = PanelAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).apply(action);
        if next == *self {
            // Same state: hand back the old Rc so Yew skips the re-render.
            return self;
        }
        Rc::new(next)
    }
}
