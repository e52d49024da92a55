use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::{default_landing, Route};
use crate::services::AuthService;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let navigator = use_navigator().expect("router context");
    let username_ref = use_node_ref();
    let password_ref = use_node_ref();
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    // Already logged in: straight to the right dashboard
    if let Some(user) = AuthService::current_user() {
        return html! { <Redirect<Route> to={default_landing(user.role)} /> };
    }

    let on_submit = {
        let navigator = navigator.clone();
        let username_ref = username_ref.clone();
        let password_ref = password_ref.clone();
        let error = error.clone();
        let loading = loading.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (Some(username_input), Some(password_input)) = (
                username_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };

            let username = username_input.value();
            let password = password_input.value();

            if username.trim().is_empty() || password.is_empty() {
                error.set(Some("Username and password are required.".to_string()));
                return;
            }

            error.set(None);
            loading.set(true);

            let navigator = navigator.clone();
            let error = error.clone();
            let loading = loading.clone();
            spawn_local(async move {
                match AuthService::new().login(username.trim(), &password).await {
                    Ok(session) => {
                        navigator.push(&default_landing(session.user.role));
                    }
                    Err(err) => {
                        error.set(Some(err.to_string()));
                        loading.set(false);
                    }
                }
            });
        })
    };

    html! {
        <div class="auth-container">
            <div class="auth-form-container">
                <div class="auth-header">
                    <h2>{ "Login" }</h2>
                    <p>{ "Sign in to ParkEase" }</p>
                </div>

                if let Some(message) = &*error {
                    <div class="error-message">{ message }</div>
                }

                <form class="auth-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="username">{ "Username" }</label>
                        <input
                            type="text"
                            id="username"
                            placeholder="Enter username"
                            ref={username_ref}
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{ "Password" }</label>
                        <input
                            type="password"
                            id="password"
                            placeholder="Enter password"
                            ref={password_ref}
                        />
                    </div>

                    <button class="btn btn-primary" type="submit" disabled={*loading}>
                        { if *loading { "Logging in..." } else { "Login" } }
                    </button>
                </form>

                <div class="auth-footer">
                    { "No account yet? " }
                    <Link<Route> to={Route::Register}>{ "Register" }</Link<Route>>
                </div>
            </div>
        </div>
    }
}
