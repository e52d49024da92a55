use yew::prelude::*;
use yew_router::prelude::*;

use crate::models::Role;
use crate::routes::{default_landing, Route, RouteGuard};
use crate::services::AuthService;
use crate::views::{AdminDashboard, LoginPage, RegisterPage, UserDashboard};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

/// Guard evaluation happens here, on every navigation: the guard reads the
/// persisted session fresh each time and holds no state of its own.
fn switch(route: Route) -> Html {
    match route {
        Route::Login => html! { <LoginPage /> },
        Route::Register => html! { <RegisterPage /> },
        Route::UserDashboard => html! {
            <RouteGuard allowed_roles={vec![Role::Customer]}>
                <UserDashboard />
            </RouteGuard>
        },
        Route::AdminDashboard => html! {
            <RouteGuard allowed_roles={vec![Role::Admin]}>
                <AdminDashboard />
            </RouteGuard>
        },
        // Landing and unknown paths resolve by session: dashboards when
        // logged in, login otherwise.
        Route::Home | Route::NotFound => match AuthService::current_user() {
            Some(user) => html! { <Redirect<Route> to={default_landing(user.role)} /> },
            None => html! { <Redirect<Route> to={Route::Login} /> },
        },
    }
}
