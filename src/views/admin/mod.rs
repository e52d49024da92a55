mod all_bookings;
mod all_users;
mod home;
mod manage_slots;
mod search_vehicle;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;
use crate::services::AuthService;

use all_bookings::AllBookings;
use all_users::AllUsers;
use home::AdminHome;
use manage_slots::ManageSlots;
use search_vehicle::SearchVehicle;

#[derive(Clone, Copy, PartialEq, Eq)]
enum AdminTab {
    Home,
    AllBookings,
    ManageSlots,
    AllUsers,
    SearchVehicle,
}

#[function_component(AdminDashboard)]
pub fn admin_dashboard() -> Html {
    let navigator = use_navigator().expect("router context");
    let tab = use_state(|| AdminTab::Home);
    let sidebar_open = use_state(|| true);

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

    let tab_button = |target: AdminTab, label: &'static str| {
        let tab = tab.clone();
        let active = if *tab == target { " active" } else { "" };
        let onclick = Callback::from(move |_: MouseEvent| tab.set(target));
        html! {
            <button class={format!("sidebar-link{}", active)} {onclick}>{ label }</button>
        }
    };

    let content = match *tab {
        AdminTab::Home => html! { <AdminHome /> },
        AdminTab::AllBookings => html! { <AllBookings /> },
        AdminTab::ManageSlots => html! { <ManageSlots /> },
        AdminTab::AllUsers => html! { <AllUsers /> },
        AdminTab::SearchVehicle => html! { <SearchVehicle /> },
    };

    html! {
        <div class="dashboard-container">
            <aside class={if *sidebar_open { "sidebar open" } else { "sidebar closed" }}>
                <button class="sidebar-toggle" onclick={on_toggle_sidebar} aria-label="Toggle Sidebar">
                    { "☰" }
                </button>
                <div class="sidebar-user">
                    <div class="sidebar-user-name">{ user.full_name.clone() }</div>
                    <div class="sidebar-user-role">{ "Administrator" }</div>
                </div>
                <nav class="sidebar-nav">
                    { tab_button(AdminTab::Home, "📊 Dashboard") }
                    { tab_button(AdminTab::AllBookings, "📋 All Bookings") }
                    { tab_button(AdminTab::ManageSlots, "🅿️ Manage Slots") }
                    { tab_button(AdminTab::AllUsers, "👥 All Users") }
                    { tab_button(AdminTab::SearchVehicle, "🔍 Search Vehicle") }
                </nav>
                <button class="sidebar-logout" onclick={on_logout}>{ "Logout" }</button>
            </aside>

            <main class="dashboard-content">
                { content }
            </main>
        </div>
    }
}
