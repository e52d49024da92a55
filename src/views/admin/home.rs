use yew::prelude::*;

use crate::components::{LoadingScreen, Notification, StatCard, Toast};
use crate::hooks::use_polling;
use crate::models::UsageReport;
use crate::services::ParkingService;
use crate::utils::constants::REPORT_POLL_MS;

/// System-wide counters from the usage report, refreshed on a slow cadence.
#[function_component(AdminHome)]
pub fn admin_home() -> Html {
    let polling = use_polling(REPORT_POLL_MS, || {
        let service = ParkingService::new();
        async move { service.usage_report().await }
    });

    if polling.loading {
        return html! { <LoadingScreen message="Loading dashboard..." /> };
    }

    let report: UsageReport = polling.snapshot.as_deref().cloned().unwrap_or_default();

    html! {
        <div class="page-container">
            if let Some(message) = polling.error.clone() {
                <Notification toast={Toast::error(message)} on_close={polling.dismiss_error.clone()} />
            }

            <div class="page-header">
                <h1 class="page-title">{ "Admin Dashboard" }</h1>
                <p class="page-subtitle">
                    { "Real-time parking system overview" }
                    if let Some(updated) = polling.last_updated {
                        <span class="last-updated">
                            { format!(" • Updated at {}", updated.format("%H:%M:%S")) }
                        </span>
                    }
                </p>
            </div>

            <div class="stats-grid">
                <StatCard label="Total Bookings" value={report.total_bookings.to_string()} />
                <StatCard label="Active Vehicles" value={report.active_bookings.to_string()} tone="success" />
                <StatCard label="Total Revenue" value={format!("₹{}", report.total_revenue)} tone="warning" />
                <StatCard label="Parking Slots" value={report.total_slots.to_string()} tone="info" />
            </div>
        </div>
    }
}
