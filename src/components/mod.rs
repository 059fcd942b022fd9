pub mod app;
pub mod auth_panels;
pub mod error_banner;
pub mod mobile_ux;

pub use app::{App, AppProps};
pub use auth_panels::AuthPanels;
pub use mobile_ux::{MobileInputUx, use_mobile_input_ux};
