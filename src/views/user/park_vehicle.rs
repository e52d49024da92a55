use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::{Notification, SlotCard, Toast};
use crate::hooks::{use_clock, use_polling};
use crate::models::{ParkRequest, ParkingSlot, User};
use crate::services::payment_service::{
    initiate_payment, mock_transaction_id, verify_payment, PaymentMethod,
};
use crate::services::ParkingService;
use crate::utils::constants::{vehicle_rate, PARK_SLOT_POLL_MS, VEHICLE_TYPES};
use crate::utils::format::elapsed_between;
use crate::utils::validate::is_valid_phone;

#[derive(Clone, PartialEq)]
struct BookingDetails {
    booking_number: Option<String>,
    slot_number: i32,
    license_plate: String,
    amount: Option<u32>,
    started_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Properties, PartialEq)]
pub struct ParkVehicleProps {
    pub user: User,
}

#[function_component(ParkVehicle)]
pub fn park_vehicle(props: &ParkVehicleProps) -> Html {
    let user = props.user.clone();

    // Slot grid refreshes while the form is open so a slot taken by someone
    // else disappears before it can be submitted.
    let polling = use_polling(PARK_SLOT_POLL_MS, || {
        let service = ParkingService::new();
        async move { service.slots().await }
    });
    let now = use_clock();

    let plate_ref = use_node_ref();
    let phone_ref = use_node_ref();
    let vehicle_type = use_state(|| "CAR".to_string());
    let payment_method = use_state(|| "cash".to_string());
    let selected_slot = use_state(|| None::<ParkingSlot>);
    let toast = use_state(|| None::<Toast>);
    let submitting = use_state(|| false);
    let show_upi_modal = use_state(|| false);
    let booking = use_state(|| None::<BookingDetails>);

    let show_toast = {
        let toast = toast.clone();
        move |t: Toast| toast.set(Some(t))
    };

    // Shared parking submission, reached from both the cash branch and a
    // verified UPI payment.
    let start_parking = {
        let user = user.clone();
        let plate_ref = plate_ref.clone();
        let phone_ref = phone_ref.clone();
        let vehicle_type = vehicle_type.clone();
        let payment_method = payment_method.clone();
        let selected_slot = selected_slot.clone();
        let toast = toast.clone();
        let submitting = submitting.clone();
        let show_upi_modal = show_upi_modal.clone();
        let booking = booking.clone();
        let refresh = polling.refresh.clone();

        move |transaction_id: Option<String>| {
            let Some(slot) = (*selected_slot).clone() else {
                return;
            };
            let plate = plate_ref
                .cast::<HtmlInputElement>()
                .map(|i| i.value().to_uppercase())
                .unwrap_or_default();
            let phone = phone_ref
                .cast::<HtmlInputElement>()
                .map(|i| i.value())
                .unwrap_or_default();

            let is_cash = *payment_method == "cash";
            let rate = vehicle_rate(&vehicle_type);
            let request = ParkRequest {
                user_id: user.id,
                slot_number: slot.slot_number,
                license_plate: plate.clone(),
                vehicle_type: (*vehicle_type).clone(),
                owner_name: user.full_name.clone(),
                phone_number: phone,
                payment_method: (*payment_method).clone(),
                transaction_id,
            };

            submitting.set(true);

            let toast = toast.clone();
            let submitting = submitting.clone();
            let show_upi_modal = show_upi_modal.clone();
            let booking = booking.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                match ParkingService::new().park(&request).await {
                    Ok(response) if response.success => {
                        booking.set(Some(BookingDetails {
                            booking_number: response.booking_number,
                            slot_number: request.slot_number,
                            license_plate: request.license_plate.clone(),
                            amount: is_cash.then_some(rate),
                            started_at: chrono::Utc::now(),
                        }));
                        refresh.emit(());
                    }
                    Ok(response) => {
                        toast.set(Some(Toast::error(
                            response.message.unwrap_or_else(|| "Parking failed".to_string()),
                        )));
                    }
                    Err(err) => {
                        toast.set(Some(Toast::error(err.to_string())));
                    }
                }
                submitting.set(false);
                show_upi_modal.set(false);
            });
        }
    };

    let on_submit = {
        let plate_ref = plate_ref.clone();
        let phone_ref = phone_ref.clone();
        let payment_method = payment_method.clone();
        let selected_slot = selected_slot.clone();
        let show_upi_modal = show_upi_modal.clone();
        let show_toast = show_toast.clone();
        let start_parking = start_parking.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let plate = plate_ref
                .cast::<HtmlInputElement>()
                .map(|i| i.value())
                .unwrap_or_default();
            let phone = phone_ref
                .cast::<HtmlInputElement>()
                .map(|i| i.value())
                .unwrap_or_default();

            if plate.trim().is_empty() || !is_valid_phone(&phone) {
                show_toast(Toast::error("Enter valid license plate & phone number"));
                return;
            }
            if selected_slot.is_none() {
                show_toast(Toast::error("Select a parking slot first"));
                return;
            }

            if *payment_method == "cash" {
                start_parking(None);
            } else {
                show_upi_modal.set(true);
            }
        })
    };

    let on_upi_pay = {
        let vehicle_type = vehicle_type.clone();
        let show_toast = show_toast.clone();
        let start_parking = start_parking.clone();

        Callback::from(move |method: PaymentMethod| {
            let amount = vehicle_rate(&vehicle_type);
            match initiate_payment(amount, method) {
                Ok(intent) => {
                    show_toast(Toast::info(format!(
                        "Pay ₹{} to {} - confirming...",
                        intent.amount, intent.upi_id
                    )));
                    let txn = mock_transaction_id();
                    match verify_payment(&txn, amount) {
                        Ok(receipt) => start_parking(Some(receipt.transaction_id)),
                        Err(message) => show_toast(Toast::error(message)),
                    }
                }
                Err(message) => show_toast(Toast::error(message)),
            }
        })
    };

    let on_slot_select = {
        let selected_slot = selected_slot.clone();
        let show_toast = show_toast.clone();
        Callback::from(move |slot: ParkingSlot| {
            if slot.is_free() {
                selected_slot.set(Some(slot));
            } else {
                show_toast(Toast::error("Slot not available"));
            }
        })
    };

    let on_toast_close = {
        let toast = toast.clone();
        Callback::from(move |_| toast.set(None))
    };

    // Success screen with a live timer replaces the form after booking
    if let Some(details) = &*booking {
        let elapsed = elapsed_between(details.started_at, now);
        let on_reset = {
            let booking = booking.clone();
            let selected_slot = selected_slot.clone();
            Callback::from(move |_: MouseEvent| {
                booking.set(None);
                selected_slot.set(None);
            })
        };

        return html! {
            <div class="success-screen">
                <div class="success-icon">{ "✅" }</div>
                <h2>{ "Parking Started" }</h2>
                if let Some(number) = &details.booking_number {
                    <p>{ format!("Booking #{}", number) }</p>
                }
                <p>{ format!("🚗 {}", details.license_plate) }</p>
                <p>{ format!("📍 Slot #{}", details.slot_number) }</p>
                <p class="timer">{ format!("⏱ Timer: {}m {}s", elapsed.hours * 60 + elapsed.minutes, elapsed.seconds) }</p>
                if let Some(amount) = details.amount {
                    <p>{ format!("💵 Amount Due: ₹{}", amount) }</p>
                }
                <button class="btn btn-primary" onclick={on_reset}>{ "Back to Dashboard" }</button>
            </div>
        };
    }

    let slots = polling.snapshot.as_deref().cloned().unwrap_or_default();

    html! {
        <div class="page-container">
            if let Some(t) = (*toast).clone() {
                <Notification toast={t} on_close={on_toast_close} />
            }
            if let Some(message) = polling.error.clone() {
                <Notification toast={Toast::error(message)} on_close={polling.dismiss_error.clone()} />
            }

            <div class="page-header">
                <h1 class="page-title">{ "Park Vehicle" }</h1>
                <p class="page-subtitle">{ "Pick a free slot and start the timer" }</p>
            </div>

            <form class="card park-form" onsubmit={on_submit}>
                <div class="form-group">
                    <input placeholder="License Plate" ref={plate_ref} />
                </div>
                <div class="form-group">
                    <input placeholder="Phone Number" maxlength="10" ref={phone_ref} />
                </div>

                <select
                    value={(*vehicle_type).clone()}
                    onchange={{
                        let vehicle_type = vehicle_type.clone();
                        Callback::from(move |e: Event| {
                            let select: HtmlSelectElement = e.target_unchecked_into();
                            vehicle_type.set(select.value());
                        })
                    }}
                >
                    { for VEHICLE_TYPES.iter().map(|(value, label, rate)| html! {
                        <option value={*value} selected={*vehicle_type == *value}>
                            { format!("{} - ₹{}", label, rate) }
                        </option>
                    }) }
                </select>

                <select
                    value={(*payment_method).clone()}
                    onchange={{
                        let payment_method = payment_method.clone();
                        Callback::from(move |e: Event| {
                            let select: HtmlSelectElement = e.target_unchecked_into();
                            payment_method.set(select.value());
                        })
                    }}
                >
                    <option value="cash" selected={*payment_method == "cash"}>{ "Cash" }</option>
                    <option value="online" selected={*payment_method == "online"}>{ "UPI" }</option>
                </select>

                <button class="btn btn-primary" disabled={*submitting}>
                    { if *submitting { "Processing..." } else { "Start Parking" } }
                </button>
            </form>

            if *show_upi_modal {
                <div class="upi-modal">
                    <h4>{ "Select UPI Payment" }</h4>
                    { for [PaymentMethod::Gpay, PaymentMethod::Phonepe, PaymentMethod::Paytm]
                        .into_iter()
                        .map(|method| {
                            let on_upi_pay = on_upi_pay.clone();
                            html! {
                                <button
                                    class="btn"
                                    onclick={Callback::from(move |_: MouseEvent| on_upi_pay.emit(method))}
                                >
                                    { format!("Pay via {}", method.label()) }
                                </button>
                            }
                        }) }
                    <button
                        class="btn btn-secondary"
                        onclick={{
                            let show_upi_modal = show_upi_modal.clone();
                            Callback::from(move |_: MouseEvent| show_upi_modal.set(false))
                        }}
                    >
                        { "Cancel" }
                    </button>
                </div>
            }

            <div class="slots-grid">
                { for slots.into_iter().map(|slot| {
                    let selected = selected_slot
                        .as_ref()
                        .map(|s| s.id == slot.id)
                        .unwrap_or(false);
                    html! {
                        <SlotCard
                            key={slot.id}
                            {slot}
                            {selected}
                            on_select={on_slot_select.clone()}
                        />
                    }
                }) }
            </div>
        </div>
    }
}
