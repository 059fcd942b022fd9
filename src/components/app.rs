use super::{auth_panels::AuthPanels, error_banner::ErrorBanner, mobile_ux::use_mobile_input_ux};
use crate::config::UxConfig;
use crate::model::PanelState;
use crate::util::query_param;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone, Default)]
pub struct AppProps {
    #[prop_or_default]
    pub config: UxConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let root_ref = use_node_ref();
    // The server redirects back here with `?error=...` after a failed login or signup.
    let error = use_state(|| query_param("error").map(AttrValue::from));
    let initial = *use_memo((), |_| PanelState::from_query(query_param("panel").as_deref()));

    use_mobile_input_ux(root_ref.clone(), props.config.clone());

    let dismiss_error = {
        let error = error.clone();
        Callback::from(move |_| error.set(None))
    };

    html! {
        <main class="auth-page" ref={root_ref}>
            <ErrorBanner message={(*error).clone()} on_dismiss={dismiss_error} />
            <AuthPanels {initial} />
        </main>
    }
}
