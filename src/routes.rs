use yew::prelude::*;
use yew_router::prelude::*;

use crate::models::Role;
use crate::services::AuthService;

#[derive(Clone, Copy, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/user")]
    UserDashboard,
    #[at("/admin")]
    AdminDashboard,
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Outcome of evaluating a navigation against the current session.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RouteDecision {
    /// No session: everything guarded bounces to the login entry point.
    RedirectToLogin,
    RenderChildren,
    /// Authenticated but in the wrong subtree: back to the user's own
    /// landing page, NOT to login.
    RedirectToDefault,
}

/// Pure, stateless access rule; re-run on every navigation. An empty
/// `allowed_roles` means any authenticated role may enter.
pub fn evaluate_access(role: Option<Role>, allowed_roles: &[Role]) -> RouteDecision {
    match role {
        None => RouteDecision::RedirectToLogin,
        Some(_) if allowed_roles.is_empty() => RouteDecision::RenderChildren,
        Some(role) if allowed_roles.contains(&role) => RouteDecision::RenderChildren,
        Some(_) => RouteDecision::RedirectToDefault,
    }
}

pub fn default_landing(role: Role) -> Route {
    match role {
        Role::Admin => Route::AdminDashboard,
        Role::Customer => Route::UserDashboard,
    }
}

#[derive(Properties, PartialEq)]
pub struct RouteGuardProps {
    #[prop_or_default]
    pub allowed_roles: Vec<Role>,
    pub children: Children,
}

#[function_component(RouteGuard)]
pub fn route_guard(props: &RouteGuardProps) -> Html {
    let user = AuthService::current_user();

    match evaluate_access(user.as_ref().map(|u| u.role), &props.allowed_roles) {
        RouteDecision::RedirectToLogin => html! { <Redirect<Route> to={Route::Login} /> },
        RouteDecision::RedirectToDefault => {
            let target = user.map(|u| default_landing(u.role)).unwrap_or(Route::Login);
            html! { <Redirect<Route> to={target} /> }
        }
        RouteDecision::RenderChildren => html! { <>{ for props.children.iter() }</> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_session_always_goes_to_login() {
        assert_eq!(
            evaluate_access(None, &[Role::Admin]),
            RouteDecision::RedirectToLogin
        );
        assert_eq!(evaluate_access(None, &[]), RouteDecision::RedirectToLogin);
    }

    #[test]
    fn matching_role_renders() {
        assert_eq!(
            evaluate_access(Some(Role::Admin), &[Role::Admin]),
            RouteDecision::RenderChildren
        );
        assert_eq!(
            evaluate_access(Some(Role::Customer), &[Role::Admin, Role::Customer]),
            RouteDecision::RenderChildren
        );
    }

    #[test]
    fn empty_allow_list_admits_any_authenticated_role() {
        assert_eq!(
            evaluate_access(Some(Role::Customer), &[]),
            RouteDecision::RenderChildren
        );
    }

    #[test]
    fn wrong_role_goes_to_default_landing_not_login() {
        assert_eq!(
            evaluate_access(Some(Role::Customer), &[Role::Admin]),
            RouteDecision::RedirectToDefault
        );
    }

    #[test]
    fn evaluation_is_idempotent() {
        let inputs: &[(Option<Role>, &[Role])] = &[
            (None, &[Role::Admin]),
            (Some(Role::Admin), &[Role::Admin]),
            (Some(Role::Customer), &[Role::Admin]),
            (Some(Role::Admin), &[]),
        ];
        for (role, allowed) in inputs {
            assert_eq!(
                evaluate_access(*role, allowed),
                evaluate_access(*role, allowed)
            );
        }
    }

    #[test]
    fn landing_pages_by_role() {
        assert_eq!(default_landing(Role::Admin), Route::AdminDashboard);
        assert_eq!(default_landing(Role::Customer), Route::UserDashboard);
    }
}
