use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::{Notification, Toast};
use crate::models::SearchResult;
use crate::services::ParkingService;
use crate::utils::format::format_datetime;

fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}

/// Plate lookup with a remove-and-bill action for parked vehicles.
#[function_component(SearchVehicle)]
pub fn search_vehicle() -> Html {
    let query_ref = use_node_ref();
    let result = use_state(|| None::<SearchResult>);
    let loading = use_state(|| false);
    let toast = use_state(|| None::<Toast>);

    let on_search = {
        let query_ref = query_ref.clone();
        let result = result.clone();
        let loading = loading.clone();
        let toast = toast.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let plate = query_ref
                .cast::<HtmlInputElement>()
                .map(|i| i.value().trim().to_uppercase())
                .unwrap_or_default();
            if plate.is_empty() {
                toast.set(Some(Toast::error("Please enter a license plate number")));
                return;
            }

            loading.set(true);
            result.set(None);

            let result = result.clone();
            let loading = loading.clone();
            let toast = toast.clone();
            spawn_local(async move {
                match ParkingService::new().search_vehicle(&plate).await {
                    Ok(found) if found.success => result.set(Some(found)),
                    Ok(found) => {
                        toast.set(Some(Toast::error(
                            found.message.unwrap_or_else(|| "Vehicle not found".to_string()),
                        )));
                    }
                    Err(err) => toast.set(Some(Toast::error(err.to_string()))),
                }
                loading.set(false);
            });
        })
    };

    let on_remove = {
        let query_ref = query_ref.clone();
        let result = result.clone();
        let toast = toast.clone();

        Callback::from(move |plate: String| {
            if !confirm(&format!("Remove vehicle {}?", plate)) {
                return;
            }

            let query_ref = query_ref.clone();
            let result = result.clone();
            let toast = toast.clone();
            spawn_local(async move {
                match ParkingService::new().remove_vehicle(&plate).await {
                    Ok(response) if response.success => {
                        let fee = response
                            .total_amount
                            .map(|amount| format!(" Fee: ₹{}", amount))
                            .unwrap_or_default();
                        toast.set(Some(Toast::success(format!(
                            "Vehicle removed successfully!{}",
                            fee
                        ))));
                        result.set(None);
                        if let Some(input) = query_ref.cast::<HtmlInputElement>() {
                            input.set_value("");
                        }
                    }
                    Ok(response) => {
                        toast.set(Some(Toast::error(
                            response.message.unwrap_or_else(|| "Removal failed".to_string()),
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

    let result_card = result.as_ref().filter(|r| r.success).map(|found| {
        let detail = |label: &str, value: String| {
            html! {
                <div class="result-item">
                    <div class="result-label">{ label.to_string() }</div>
                    <div class="result-value">{ value }</div>
                </div>
            }
        };

        let vehicle = found.vehicle.clone();
        let plate = vehicle
            .as_ref()
            .map(|v| v.license_plate.clone())
            .unwrap_or_default();

        let remove_button = found.is_parked.then(|| {
            let on_remove = on_remove.clone();
            let plate = plate.clone();
            html! {
                <button
                    class="btn btn-danger btn-block"
                    onclick={Callback::from(move |_: MouseEvent| on_remove.emit(plate.clone()))}
                >
                    { "🗑 Remove Vehicle & Calculate Fee" }
                </button>
            }
        });

        html! {
            <div class="card search-result-card">
                <div class="result-header">
                    <h3>{ "Vehicle Details" }</h3>
                    <span class={if found.is_parked { "badge success" } else { "badge info" }}>
                        { if found.is_parked { "PARKED" } else { "NOT PARKED" } }
                    </span>
                </div>

                <div class="result-grid">
                    { detail("License Plate", plate.clone()) }
                    { detail("Vehicle Type", vehicle.as_ref().map(|v| v.vehicle_type.clone()).unwrap_or_default()) }
                    { detail("Owner Name", vehicle.as_ref().and_then(|v| v.owner_name.clone()).unwrap_or_else(|| "-".to_string())) }
                    { detail("Phone Number", vehicle.as_ref().and_then(|v| v.phone_number.clone()).unwrap_or_else(|| "-".to_string())) }
                    if found.is_parked {
                        { detail("Slot Number", found.slot_number.map(|n| format!("#{}", n)).unwrap_or_else(|| "-".to_string())) }
                        { detail(
                            "Entry Time",
                            found.booking.as_ref().map(|b| format_datetime(&b.entry_time)).unwrap_or_else(|| "-".to_string()),
                        ) }
                    }
                </div>

                { remove_button }
            </div>
        }
    });

    html! {
        <div class="page-container">
            if let Some(t) = (*toast).clone() {
                <Notification toast={t} on_close={on_toast_close} />
            }

            <div class="page-header">
                <h1 class="page-title">{ "Search Vehicle" }</h1>
                <p class="page-subtitle">{ "Find parked vehicle using license plate" }</p>
            </div>

            <div class="card search-container">
                <form class="search-form" onsubmit={on_search}>
                    <input class="search-input" placeholder="AP39CK1234" ref={query_ref} />
                    <button class="btn btn-primary" type="submit" disabled={*loading}>
                        { if *loading { "Searching..." } else { "🔍 Search" } }
                    </button>
                </form>
            </div>

            { result_card }
        </div>
    }
}
