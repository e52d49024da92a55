use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::{LoadingScreen, Notification, Toast};
use crate::models::{Role, User};
use crate::services::AuthService;

/// Registered accounts. A plain one-shot fetch; nothing here changes often
/// enough to poll.
#[function_component(AllUsers)]
pub fn all_users() -> Html {
    let users = use_state(Vec::<User>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let users = users.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match AuthService::new().all_users().await {
                    Ok(list) => users.set(list),
                    Err(err) => error.set(Some(err.to_string())),
                }
                loading.set(false);
            });
            || ()
        });
    }

    if *loading {
        return html! { <LoadingScreen message="Loading users..." /> };
    }

    let on_error_close = {
        let error = error.clone();
        Callback::from(move |_| error.set(None))
    };

    html! {
        <div class="page-container">
            if let Some(message) = (*error).clone() {
                <Notification toast={Toast::error(message)} on_close={on_error_close} />
            }

            <div class="page-header">
                <h1 class="page-title">{ "All Users" }</h1>
                <p class="page-subtitle">{ format!("{} registered accounts", users.len()) }</p>
            </div>

            <div class="card">
                if users.is_empty() {
                    <div class="empty-state"><p>{ "No users registered yet" }</p></div>
                } else {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>{ "Name" }</th>
                                <th>{ "Username" }</th>
                                <th>{ "Email" }</th>
                                <th>{ "Phone" }</th>
                                <th>{ "Role" }</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for users.iter().map(|user| html! {
                                <tr key={user.id}>
                                    <td>{ user.full_name.clone() }</td>
                                    <td>{ user.username.clone() }</td>
                                    <td>{ user.email.clone() }</td>
                                    <td>{ user.phone_number.clone().unwrap_or_else(|| "-".to_string()) }</td>
                                    <td>
                                        <span class={if user.role == Role::Admin { "badge warning" } else { "badge info" }}>
                                            { if user.role == Role::Admin { "ADMIN" } else { "CUSTOMER" } }
                                        </span>
                                    </td>
                                </tr>
                            }) }
                        </tbody>
                    </table>
                }
            </div>
        </div>
    }
}
