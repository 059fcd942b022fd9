use auth_panels::components::{App, AppProps};
use auth_panels::config::UxConfig;
use auth_panels::util::{cwarn, set_debug};

fn load_config() -> UxConfig {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return UxConfig::default();
    };
    UxConfig::from_document(&document).unwrap_or_else(|err| {
        cwarn(&format!("using default UX config: {err}"));
        UxConfig::default()
    })
}

fn main() {
    console_error_panic_hook::set_once();
    let config = load_config();
    set_debug(config.debug);
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
