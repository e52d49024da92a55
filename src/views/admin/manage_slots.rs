use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::{LoadingScreen, Notification, Toast};
use crate::hooks::use_polling;
use crate::models::{ParkingSlot, SlotRequest};
use crate::services::ParkingService;
use crate::utils::constants::SLOT_POLL_MS;

fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}

/// Slot CRUD for admins, on top of the same live slot feed users see.
#[function_component(ManageSlots)]
pub fn manage_slots() -> Html {
    let polling = use_polling(SLOT_POLL_MS, || {
        let service = ParkingService::new();
        async move { service.slots().await }
    });

    let number_ref = use_node_ref();
    let slot_type = use_state(|| "CAR".to_string());
    let available = use_state(|| true);
    let editing = use_state(|| None::<i64>);
    let toast = use_state(|| None::<Toast>);
    let saving = use_state(|| false);

    if polling.loading {
        return html! { <LoadingScreen message="Loading slots..." /> };
    }

    let slots: Vec<ParkingSlot> = polling.snapshot.as_deref().cloned().unwrap_or_default();

    let reset_form = {
        let number_ref = number_ref.clone();
        let slot_type = slot_type.clone();
        let available = available.clone();
        let editing = editing.clone();
        move || {
            if let Some(input) = number_ref.cast::<HtmlInputElement>() {
                input.set_value("");
            }
            slot_type.set("CAR".to_string());
            available.set(true);
            editing.set(None);
        }
    };

    let on_submit = {
        let number_ref = number_ref.clone();
        let slot_type = slot_type.clone();
        let available = available.clone();
        let editing = editing.clone();
        let toast = toast.clone();
        let saving = saving.clone();
        let refresh = polling.refresh.clone();
        let reset_form = reset_form.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let raw_number = number_ref
                .cast::<HtmlInputElement>()
                .map(|i| i.value())
                .unwrap_or_default();
            let Ok(slot_number) = raw_number.trim().parse::<i32>() else {
                toast.set(Some(Toast::error("Slot number must be a positive number")));
                return;
            };
            if slot_number <= 0 {
                toast.set(Some(Toast::error("Slot number must be a positive number")));
                return;
            }

            let request = SlotRequest {
                slot_number,
                slot_type: (*slot_type).clone(),
                is_available: *available,
            };
            let editing_id = *editing;

            saving.set(true);

            let toast = toast.clone();
            let saving = saving.clone();
            let refresh = refresh.clone();
            let reset_form = reset_form.clone();
            spawn_local(async move {
                let service = ParkingService::new();
                let result = match editing_id {
                    Some(id) => service.update_slot(id, &request).await,
                    None => service.create_slot(&request).await,
                };
                match result {
                    Ok(_) => {
                        toast.set(Some(Toast::success(if editing_id.is_some() {
                            "Slot updated"
                        } else {
                            "Slot added"
                        })));
                        reset_form();
                        refresh.emit(());
                    }
                    Err(err) => toast.set(Some(Toast::error(err.to_string()))),
                }
                saving.set(false);
            });
        })
    };

    let on_edit = {
        let number_ref = number_ref.clone();
        let slot_type = slot_type.clone();
        let available = available.clone();
        let editing = editing.clone();
        Callback::from(move |slot: ParkingSlot| {
            if let Some(input) = number_ref.cast::<HtmlInputElement>() {
                input.set_value(&slot.slot_number.to_string());
            }
            slot_type.set(slot.slot_type.clone());
            available.set(slot.is_available);
            editing.set(Some(slot.id));
        })
    };

    let on_delete = {
        let toast = toast.clone();
        let refresh = polling.refresh.clone();
        Callback::from(move |slot_id: i64| {
            if !confirm("Delete this slot?") {
                return;
            }
            let toast = toast.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                match ParkingService::new().delete_slot(slot_id).await {
                    Ok(()) => {
                        toast.set(Some(Toast::success("Slot deleted")));
                        refresh.emit(());
                    }
                    Err(err) => toast.set(Some(Toast::error(err.to_string()))),
                }
            });
        })
    };

    let on_cancel_edit = {
        let reset_form = reset_form.clone();
        Callback::from(move |_: MouseEvent| reset_form())
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
                <h1 class="page-title">{ "Manage Slots" }</h1>
                <p class="page-subtitle">{ "Add, edit and remove parking slots" }</p>
            </div>

            <form class="card slot-form" onsubmit={on_submit}>
                <div class="form-group">
                    <input placeholder="Slot Number" ref={number_ref} />
                </div>

                <select
                    value={(*slot_type).clone()}
                    onchange={{
                        let slot_type = slot_type.clone();
                        Callback::from(move |e: Event| {
                            let select: HtmlSelectElement = e.target_unchecked_into();
                            slot_type.set(select.value());
                        })
                    }}
                >
                    <option value="BIKE" selected={*slot_type == "BIKE"}>{ "Bike" }</option>
                    <option value="CAR" selected={*slot_type == "CAR"}>{ "Car" }</option>
                    <option value="OTHERS" selected={*slot_type == "OTHERS"}>{ "Others" }</option>
                </select>

                <label class="checkbox-label">
                    <input
                        type="checkbox"
                        checked={*available}
                        onchange={{
                            let available = available.clone();
                            Callback::from(move |e: Event| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                available.set(input.checked());
                            })
                        }}
                    />
                    { "Available" }
                </label>

                <button class="btn btn-primary" disabled={*saving}>
                    { match (*saving, editing.is_some()) {
                        (true, _) => "Saving...",
                        (false, true) => "Update Slot",
                        (false, false) => "Add Slot",
                    } }
                </button>
                if editing.is_some() {
                    <button type="button" class="btn btn-secondary" onclick={on_cancel_edit}>
                        { "Cancel" }
                    </button>
                }
            </form>

            <div class="card">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{ "Slot" }</th>
                            <th>{ "Type" }</th>
                            <th>{ "Status" }</th>
                            <th>{ "Vehicle" }</th>
                            <th>{ "Actions" }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for slots.iter().map(|slot| {
                            let on_edit = on_edit.clone();
                            let on_delete = on_delete.clone();
                            let edit_slot = slot.clone();
                            let slot_id = slot.id;
                            html! {
                                <tr key={slot.id}>
                                    <td>{ format!("#{}", slot.slot_number) }</td>
                                    <td>{ slot.slot_type.clone() }</td>
                                    <td>{ slot.status_label() }</td>
                                    <td>
                                        { slot.current_booking
                                            .as_ref()
                                            .map(|b| b.vehicle.license_plate.clone())
                                            .unwrap_or_else(|| "-".to_string()) }
                                    </td>
                                    <td>
                                        <button
                                            class="btn btn-small"
                                            onclick={Callback::from(move |_: MouseEvent| on_edit.emit(edit_slot.clone()))}
                                        >
                                            { "Edit" }
                                        </button>
                                        <button
                                            class="btn btn-small btn-danger"
                                            onclick={Callback::from(move |_: MouseEvent| on_delete.emit(slot_id))}
                                        >
                                            { "Delete" }
                                        </button>
                                    </td>
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
                if slots.is_empty() {
                    <div class="empty-state"><p>{ "No slots configured yet" }</p></div>
                }
            </div>
        </div>
    }
}
