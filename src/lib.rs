//! Sign-in / sign-up page with a sliding two-panel layout and a few mobile
//! input fixes.

pub mod components;
pub mod config;
pub mod error;
pub mod model;
pub mod state;
pub mod util;
