pub mod double_tap;
pub mod focus_scroll;

pub use double_tap::DoubleTapGuard;
pub use focus_scroll::FocusScroll;
