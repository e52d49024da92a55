use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::{LoadingScreen, Notification, StatCard, Toast};
use crate::hooks::{use_clock, use_polling};
use crate::models::{booking_stats, Booking};
use crate::services::ParkingService;
use crate::utils::constants::{BOOKING_POLL_MS, HOURLY_RATE};
use crate::utils::format::{amount_due, elapsed_between, format_datetime, parse_backend_datetime};

/// Every booking in the system, with live timers on the active ones and a
/// force-checkout action for the counter staff.
#[function_component(AllBookings)]
pub fn all_bookings() -> Html {
    let polling = use_polling(BOOKING_POLL_MS, || {
        let service = ParkingService::new();
        async move { service.bookings().await }
    });
    let now = use_clock();
    let toast = use_state(|| None::<Toast>);

    if polling.loading {
        return html! { <LoadingScreen message="Loading bookings..." /> };
    }

    let bookings: Vec<Booking> = polling.snapshot.as_deref().cloned().unwrap_or_default();
    let stats = booking_stats(&bookings);

    let on_checkout = {
        let toast = toast.clone();
        let refresh = polling.refresh.clone();
        Callback::from(move |booking_id: i64| {
            let toast = toast.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                match ParkingService::new().checkout(booking_id).await {
                    Ok(response) if response.success => {
                        let fee = response
                            .total_amount
                            .map(|amount| format!(" Fee: ₹{}", amount))
                            .unwrap_or_default();
                        toast.set(Some(Toast::success(format!("Vehicle checked out.{}", fee))));
                        refresh.emit(());
                    }
                    Ok(response) => {
                        toast.set(Some(Toast::error(
                            response.message.unwrap_or_else(|| "Checkout failed".to_string()),
                        )));
                    }
                    Err(err) => toast.set(Some(Toast::error(err.to_string()))),
                }
            });
        })
    };

    let on_toast_close = {
        let toast = toast.clone();
        Callback::from(move |_| toast.set(None))
    };

    html! {
        <div class="page-container">
            if let Some(t) = (*toast).clone() {
                <Notification toast={t} on_close={on_toast_close} />
            }
            if let Some(message) = polling.error.clone() {
                <Notification toast={Toast::error(message)} on_close={polling.dismiss_error.clone()} />
            }

            <div class="page-header">
                <h1 class="page-title">{ "All Bookings" }</h1>
                <p class="page-subtitle">
                    { "Every booking across the lot" }
                    if let Some(updated) = polling.last_updated {
                        <span class="last-updated">
                            { format!(" • Updated at {}", updated.format("%H:%M:%S")) }
                        </span>
                    }
                </p>
            </div>

            <div class="stats-grid">
                <StatCard label="Total" value={stats.total.to_string()} />
                <StatCard label="Active" value={stats.active.to_string()} tone="success" />
                <StatCard label="Completed" value={stats.completed.to_string()} tone="info" />
                <StatCard label="Revenue" value={format!("₹{}", stats.total_fees)} tone="warning" />
            </div>

            <div class="card">
                if bookings.is_empty() {
                    <div class="empty-state"><p>{ "No bookings yet" }</p></div>
                } else {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>{ "Booking" }</th>
                                <th>{ "Vehicle" }</th>
                                <th>{ "Slot" }</th>
                                <th>{ "Entry" }</th>
                                <th>{ "Duration" }</th>
                                <th>{ "Amount" }</th>
                                <th>{ "Status" }</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            { for bookings.iter().map(|booking| {
                                let is_active = booking.is_active();
                                let entry = parse_backend_datetime(&booking.entry_time);

                                let duration = entry
                                    .filter(|_| is_active)
                                    .map(|entry| elapsed_between(entry, now).to_string())
                                    .unwrap_or_else(|| "-".to_string());
                                let amount = if is_active {
                                    entry
                                        .map(|entry| format!("₹{}", amount_due(entry, now, HOURLY_RATE)))
                                        .unwrap_or_else(|| "-".to_string())
                                } else {
                                    booking
                                        .total_amount
                                        .map(|a| format!("₹{}", a))
                                        .unwrap_or_else(|| "-".to_string())
                                };

                                let action = is_active.then(|| {
                                    let on_checkout = on_checkout.clone();
                                    let id = booking.id;
                                    html! {
                                        <button
                                            class="btn btn-small btn-danger"
                                            onclick={Callback::from(move |_: MouseEvent| on_checkout.emit(id))}
                                        >
                                            { "Checkout" }
                                        </button>
                                    }
                                });

                                html! {
                                    <tr key={booking.id}>
                                        <td>{ format!("#{}", booking.booking_number) }</td>
                                        <td>{ booking.vehicle.license_plate.clone() }</td>
                                        <td>{ format!("#{}", booking.parking_slot.slot_number) }</td>
                                        <td>{ format_datetime(&booking.entry_time) }</td>
                                        <td>{ duration }</td>
                                        <td>{ amount }</td>
                                        <td>
                                            <span class={if is_active { "badge success" } else { "badge info" }}>
                                                { booking.status.clone() }
                                            </span>
                                        </td>
                                        <td>{ action }</td>
                                    </tr>
                                }
                            }) }
                        </tbody>
                    </table>
                }
            </div>
        </div>
    }
}
