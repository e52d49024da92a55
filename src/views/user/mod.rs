mod my_bookings;
mod park_vehicle;
mod view_slots;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::models::User;
use crate::routes::Route;
use crate::services::AuthService;

use my_bookings::MyBookings;
use park_vehicle::ParkVehicle;
use view_slots::ViewSlots;

#[derive(Clone, Copy, PartialEq, Eq)]
enum UserTab {
    MyBookings,
    ParkVehicle,
    ViewSlots,
}

#[function_component(UserDashboard)]
pub fn user_dashboard() -> Html {
    let navigator = use_navigator().expect("router context");
    let tab = use_state(|| UserTab::MyBookings);
    let sidebar_open = use_state(|| true);

    // The route guard has already admitted us; a vanished session mid-render
    // still bounces cleanly.
    let Some(user) = AuthService::current_user() else {
        return html! { <Redirect<Route> to={Route::Login} /> };
    };

    let on_logout = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            AuthService::logout();
            navigator.push(&Route::Login);
        })
    };

    let on_toggle_sidebar = {
        let sidebar_open = sidebar_open.clone();
        Callback::from(move |_: MouseEvent| sidebar_open.set(!*sidebar_open))
    };

    let tab_button = |target: UserTab, label: &'static str| {
        let tab = tab.clone();
        let active = if *tab == target { " active" } else { "" };
        let onclick = Callback::from(move |_: MouseEvent| tab.set(target));
        html! {
            <button class={format!("sidebar-link{}", active)} {onclick}>{ label }</button>
        }
    };

    let content = match *tab {
        UserTab::MyBookings => html! { <MyBookings user={user.clone()} /> },
        UserTab::ParkVehicle => html! { <ParkVehicle user={user.clone()} /> },
        UserTab::ViewSlots => html! { <ViewSlots /> },
    };

    html! {
        <div class="dashboard-container">
            <aside class={if *sidebar_open { "sidebar open" } else { "sidebar closed" }}>
                <button class="sidebar-toggle" onclick={on_toggle_sidebar} aria-label="Toggle Sidebar">
                    { "☰" }
                </button>
                <div class="sidebar-user">
                    <div class="sidebar-user-name">{ user.full_name.clone() }</div>
                    <div class="sidebar-user-role">{ "Customer" }</div>
                </div>
                <nav class="sidebar-nav">
                    { tab_button(UserTab::MyBookings, "📋 My Bookings") }
                    { tab_button(UserTab::ParkVehicle, "🚗 Park Vehicle") }
                    { tab_button(UserTab::ViewSlots, "🅿️ View Slots") }
                </nav>
                <button class="sidebar-logout" onclick={on_logout}>{ "Logout" }</button>
            </aside>

            <main class="dashboard-content">
                { content }
            </main>
        </div>
    }
}
