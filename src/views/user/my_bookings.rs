use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::{LoadingScreen, Notification, StatCard, Toast};
use crate::hooks::{use_clock, use_polling};
use crate::models::{booking_stats, Booking, User};
use crate::services::ParkingService;
use crate::utils::constants::{BOOKING_POLL_MS, HOURLY_RATE};
use crate::utils::format::{amount_due, elapsed_between, format_datetime, parse_backend_datetime};

#[derive(Properties, PartialEq)]
pub struct MyBookingsProps {
    pub user: User,
}

/// Booking history with live duration and running fee for active entries.
/// The list is re-fetched on a fixed cadence; the timers tick locally.
#[function_component(MyBookings)]
pub fn my_bookings(props: &MyBookingsProps) -> Html {
    let user_id = props.user.id;
    let polling = use_polling(BOOKING_POLL_MS, move || {
        let service = ParkingService::new();
        async move { service.user_bookings(user_id).await }
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
                        toast.set(Some(Toast::success("Payment successful! Slot released.")));
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
                <h1 class="page-title">{ "My Bookings" }</h1>
                <p class="page-subtitle">{ "Live status, parking duration & payments" }</p>
            </div>

            <div class="stats-grid">
                <StatCard label="Total Bookings" value={stats.total.to_string()} />
                <StatCard label="Active" value={stats.active.to_string()} tone="success" />
                <StatCard label="Completed" value={stats.completed.to_string()} tone="info" />
                <StatCard label="Total Fees" value={format!("₹{}", stats.total_fees)} tone="warning" />
            </div>

            if bookings.is_empty() {
                <div class="empty-state">
                    <p>{ "No bookings yet" }</p>
                </div>
            } else {
                <div class="bookings-grid">
                    { for bookings.iter().map(|booking| {
                        let is_active = booking.is_active();
                        let entry = parse_backend_datetime(&booking.entry_time);

                        let timer = entry
                            .filter(|_| is_active)
                            .map(|entry| elapsed_between(entry, now));
                        let amount = if is_active {
                            entry.map(|entry| amount_due(entry, now, HOURLY_RATE) as f64)
                        } else {
                            booking.total_amount
                        };

                        let checkout_button = is_active.then(|| {
                            let on_checkout = on_checkout.clone();
                            let id = booking.id;
                            html! {
                                <button
                                    class="btn btn-danger"
                                    onclick={Callback::from(move |_: MouseEvent| on_checkout.emit(id))}
                                >
                                    { "⏹ Checkout & Pay" }
                                </button>
                            }
                        });

                        html! {
                            <div key={booking.id} class="booking-card">
                                <div class="booking-header">
                                    <span>{ format!("#{}", booking.booking_number) }</span>
                                    <span class={if is_active { "badge success" } else { "badge info" }}>
                                        { booking.status.clone() }
                                    </span>
                                </div>
                                <div class="booking-body">
                                    <p>{ format!("🚗 {} ({})", booking.vehicle.license_plate, booking.vehicle.vehicle_type) }</p>
                                    <p>{ format!("📍 Slot #{}", booking.parking_slot.slot_number) }</p>
                                    <p>{ format!("🕐 Entry: {}", format_datetime(&booking.entry_time)) }</p>
                                    if let Some(elapsed) = timer {
                                        <p class="timer">{ format!("⏱ {}", elapsed) }</p>
                                    }
                                    if let Some(amount) = amount {
                                        <p class="amount">{ format!("💵 ₹{} (₹{}/hour)", amount, HOURLY_RATE) }</p>
                                    }
                                    { checkout_button }
                                </div>
                            </div>
                        }
                    }) }
                </div>
            }
        </div>
    }
}
