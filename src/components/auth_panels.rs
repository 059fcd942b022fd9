use crate::model::{PanelAction, PanelState};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AuthPanelsProps {
    #[prop_or_default]
    pub initial: PanelState,
}

/// Both forms plus the sliding overlay. The overlay buttons flip the marker
/// class on `#container`; the stylesheet does the rest.
#[function_component(AuthPanels)]
pub fn auth_panels(props: &AuthPanelsProps) -> Html {
    let initial = props.initial;
    let panel = use_reducer(move || initial);

    let activate_sign_up = {
        let panel = panel.clone();
        Callback::from(move |_: MouseEvent| panel.dispatch(PanelAction::ActivateSignUp))
    };
    let activate_sign_in = {
        let panel = panel.clone();
        Callback::from(move |_: MouseEvent| panel.dispatch(PanelAction::ActivateSignIn))
    };

    html! {
        <div class={classes!(panel.container_classes())} id="container">
            <div class="form-container sign-up-container">
                <form action="/signup" method="post">
                    <h1>{"Create Account"}</h1>
                    <input type="text" name="name" placeholder="Name" autocomplete="name" required=true />
                    <input type="email" name="email" placeholder="Email" autocomplete="email" required=true />
                    <input type="password" name="password" placeholder="Password" autocomplete="new-password" required=true />
                    <button type="submit">{"Sign Up"}</button>
                </form>
            </div>
            <div class="form-container sign-in-container">
                <form action="/" method="post">
                    <h1>{"Sign in"}</h1>
                    <input type="email" name="email" placeholder="Email" autocomplete="username" required=true />
                    <input type="password" name="password" placeholder="Password" autocomplete="current-password" required=true />
                    <button type="submit">{"Sign In"}</button>
                </form>
            </div>
            <div class="overlay-container">
                <div class="overlay">
                    <div class="overlay-panel overlay-left">
                        <h1>{"Welcome Back!"}</h1>
                        <p>{"Already registered? Sign in with your work email."}</p>
                        <button type="button" class="ghost" id="signIn" onclick={activate_sign_in}>{"Sign In"}</button>
                    </div>
                    <div class="overlay-panel overlay-right">
                        <h1>{"Hello, Friend!"}</h1>
                        <p>{"New here? Create an account to get started."}</p>
                        <button type="button" class="ghost" id="signUp" onclick={activate_sign_up}>{"Sign Up"}</button>
                    </div>
                </div>
            </div>
        </div>
    }
}
