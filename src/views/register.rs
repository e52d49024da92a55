use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::models::{RegisterRequest, Role};
use crate::routes::{default_landing, Route};
use crate::services::AuthService;
use crate::utils::validate;

/// Validated before dispatch; anything failing here never reaches the wire.
fn validate_form(request: &RegisterRequest) -> Result<(), String> {
    if request.full_name.trim().is_empty() || request.username.trim().is_empty() {
        return Err("Full name and username are required.".to_string());
    }
    if !validate::is_valid_email(&request.email) {
        return Err("Please enter a valid email address.".to_string());
    }
    if !validate::is_valid_phone(&request.phone_number) {
        return Err("Phone number must be exactly 10 digits.".to_string());
    }
    if !validate::is_valid_password(&request.password) {
        return Err("Password must be at least 6 characters.".to_string());
    }
    Ok(())
}

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let navigator = use_navigator().expect("router context");
    let full_name_ref = use_node_ref();
    let username_ref = use_node_ref();
    let email_ref = use_node_ref();
    let phone_ref = use_node_ref();
    let password_ref = use_node_ref();
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    if let Some(user) = AuthService::current_user() {
        return html! { <Redirect<Route> to={default_landing(user.role)} /> };
    }

    let on_submit = {
        let navigator = navigator.clone();
        let full_name_ref = full_name_ref.clone();
        let username_ref = username_ref.clone();
        let email_ref = email_ref.clone();
        let phone_ref = phone_ref.clone();
        let password_ref = password_ref.clone();
        let error = error.clone();
        let loading = loading.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let value = |node_ref: &NodeRef| {
                node_ref
                    .cast::<HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default()
            };

            let request = RegisterRequest {
                full_name: value(&full_name_ref).trim().to_string(),
                username: value(&username_ref).trim().to_string(),
                email: value(&email_ref).trim().to_string(),
                password: value(&password_ref),
                phone_number: value(&phone_ref).trim().to_string(),
                role: Role::Customer,
            };

            if let Err(message) = validate_form(&request) {
                error.set(Some(message));
                return;
            }

            error.set(None);
            loading.set(true);

            let navigator = navigator.clone();
            let error = error.clone();
            let loading = loading.clone();
            spawn_local(async move {
                match AuthService::new().register(&request).await {
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
            <div class="auth-form-container register-form-container">
                <div class="auth-header">
                    <h2>{ "Create Account" }</h2>
                    <p>{ "Register to use ParkEase" }</p>
                </div>

                if let Some(message) = &*error {
                    <div class="error-message">{ message }</div>
                }

                <form class="auth-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <input placeholder="Full Name" ref={full_name_ref} />
                    </div>
                    <div class="form-group">
                        <input placeholder="Username" ref={username_ref} />
                    </div>
                    <div class="form-group">
                        <input type="email" placeholder="Email" ref={email_ref} />
                    </div>
                    <div class="form-group">
                        <input placeholder="Phone Number" maxlength="10" ref={phone_ref} />
                    </div>
                    <div class="form-group">
                        <input type="password" placeholder="Password" ref={password_ref} />
                    </div>

                    <button class="btn btn-primary btn-block" disabled={*loading}>
                        { if *loading { "Registering..." } else { "Register" } }
                    </button>
                </form>

                <div class="auth-footer">
                    { "Already have an account? " }
                    <Link<Route> to={Route::Login}>{ "Login" }</Link<Route>>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> RegisterRequest {
        RegisterRequest {
            full_name: "Alice K".to_string(),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "secret".to_string(),
            phone_number: "9876543210".to_string(),
            role: Role::Customer,
        }
    }

    #[test]
    fn complete_form_passes() {
        assert!(validate_form(&request()).is_ok());
    }

    #[test]
    fn each_field_is_checked() {
        let mut r = request();
        r.full_name = "  ".to_string();
        assert!(validate_form(&r).is_err());

        let mut r = request();
        r.email = "not-an-email".to_string();
        assert!(validate_form(&r).is_err());

        let mut r = request();
        r.phone_number = "12345".to_string();
        assert!(validate_form(&r).is_err());

        let mut r = request();
        r.password = "short".to_string();
        assert!(validate_form(&r).is_err());
    }
}
