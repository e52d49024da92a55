use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::components::{LoadingScreen, Notification, SlotCard, StatCard, Toast};
use crate::hooks::use_polling;
use crate::models::{filter_slots, slot_stats, ParkingSlot, StatusFilter};
use crate::services::ParkingService;
use crate::utils::constants::SLOT_POLL_MS;

/// Live slot overview: refreshed every 5 seconds, filterable by status and
/// slot type. Filters are recomputed against each new snapshot.
#[function_component(ViewSlots)]
pub fn view_slots() -> Html {
    let polling = use_polling(SLOT_POLL_MS, || {
        let service = ParkingService::new();
        async move { service.slots().await }
    });

    let status_filter = use_state(|| StatusFilter::All);
    let type_filter = use_state(|| "ALL".to_string());

    if polling.loading {
        return html! { <LoadingScreen message="Loading parking slots..." /> };
    }

    let slots: &[ParkingSlot] = polling.snapshot.as_deref().map(Vec::as_slice).unwrap_or(&[]);
    let stats = slot_stats(slots);
    let filtered = filter_slots(slots, *status_filter, &type_filter);

    let status_button = |filter: StatusFilter, label: &'static str, extra: &'static str| {
        let status_filter = status_filter.clone();
        let active = if *status_filter == filter { " active" } else { "" };
        let onclick = Callback::from(move |_: MouseEvent| status_filter.set(filter));
        html! {
            <button class={format!("btn {}{}", extra, active)} {onclick}>{ label }</button>
        }
    };

    let on_type_change = {
        let type_filter = type_filter.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            type_filter.set(select.value());
        })
    };

    let on_refresh = polling.refresh.reform(|_: MouseEvent| ());

    html! {
        <div class="page-container">
            if let Some(message) = polling.error.clone() {
                <Notification toast={Toast::error(message)} on_close={polling.dismiss_error.clone()} />
            }

            <div class="page-header">
                <div>
                    <h1 class="page-title">{ "Parking Slots Overview" }</h1>
                    <p class="page-subtitle">
                        { "Live monitoring of parking availability" }
                        if let Some(updated) = polling.last_updated {
                            <span class="last-updated">
                                { format!(" • Updated at {}", updated.format("%H:%M:%S")) }
                            </span>
                        }
                    </p>
                </div>
                <button class="btn btn-secondary" onclick={on_refresh}>{ "🔄 Refresh" }</button>
            </div>

            <div class="stats-grid">
                <StatCard label="Total Slots" value={stats.total.to_string()} />
                <StatCard label="Available" value={stats.available.to_string()} tone="success" />
                <StatCard label="Occupied" value={stats.occupied.to_string()} tone="danger" />
                <StatCard label="Unavailable" value={stats.unavailable.to_string()} tone="warning" />
            </div>

            <div class="card">
                <div class="card-header">
                    <h3 class="card-title">{ "All Parking Slots" }</h3>
                    <div class="filter-buttons">
                        { status_button(StatusFilter::All, "All", "") }
                        { status_button(StatusFilter::Available, "Available", "btn-success ") }
                        { status_button(StatusFilter::Occupied, "Occupied", "btn-danger ") }
                        { status_button(StatusFilter::Unavailable, "Unavailable", "btn-warning ") }

                        <select class="slot-type-filter" onchange={on_type_change}>
                            <option value="ALL" selected={*type_filter == "ALL"}>{ "All Types" }</option>
                            <option value="BIKE" selected={*type_filter == "BIKE"}>{ "Bike" }</option>
                            <option value="CAR" selected={*type_filter == "CAR"}>{ "Car" }</option>
                            <option value="OTHERS" selected={*type_filter == "OTHERS"}>{ "Others" }</option>
                        </select>
                    </div>
                </div>

                <div class="slots-grid">
                    if filtered.is_empty() {
                        <div class="empty-state">
                            <p>{ "No slots found for selected filter" }</p>
                        </div>
                    } else {
                        { for filtered.into_iter().map(|slot| html! {
                            <SlotCard key={slot.id} {slot} />
                        }) }
                    }
                </div>
            </div>
        </div>
    }
}
