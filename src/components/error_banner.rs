use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ErrorBannerProps {
    pub message: Option<AttrValue>,
    pub on_dismiss: Callback<()>,
}

#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let Some(message) = props.message.clone() else {
        return html! {};
    };
    let dismiss = {
        let cb = props.on_dismiss.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div class="error-banner" role="alert">
            <span>{ message.to_string() }</span>
            <button type="button" class="error-dismiss" aria-label="Dismiss" onclick={dismiss}>{"×"}</button>
        </div>
    }
}
