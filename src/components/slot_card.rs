use yew::prelude::*;

use crate::models::ParkingSlot;

#[derive(Properties, PartialEq)]
pub struct SlotCardProps {
    pub slot: ParkingSlot,
    #[prop_or_default]
    pub selected: bool,
    /// When present, free slots become clickable.
    #[prop_or_default]
    pub on_select: Option<Callback<ParkingSlot>>,
}

#[function_component(SlotCard)]
pub fn slot_card(props: &SlotCardProps) -> Html {
    let slot = &props.slot;

    let mut class = String::from("slot-card");
    if !slot.is_available {
        class.push_str(" slot-unavailable");
    } else if slot.is_occupied {
        class.push_str(" slot-occupied");
    } else {
        class.push_str(" slot-available");
    }
    if props.selected {
        class.push_str(" slot-selected");
    }

    let icon = match slot.slot_type.as_str() {
        "BIKE" | "SMALL" => "🏍️",
        "TRUCK" | "LARGE" | "OTHERS" => "🚛",
        _ => "🚗",
    };

    let onclick = {
        let slot = slot.clone();
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(on_select) = &on_select {
                if slot.is_free() {
                    on_select.emit(slot.clone());
                }
            }
        })
    };

    let occupant = slot
        .current_booking
        .as_ref()
        .map(|booking| booking.vehicle.license_plate.clone());

    html! {
        <div {class} {onclick} role="button" aria-label={format!("Parking Slot {}", slot.slot_number)}>
            <div class="slot-number">{ format!("#{}", slot.slot_number) }</div>
            <div class="slot-icon">{ if slot.is_available { icon } else { "🚫" } }</div>
            <div class="slot-type">{ slot.slot_type.clone() }</div>
            if let Some(plate) = occupant {
                <div class="slot-vehicle-number">{ plate }</div>
            }
            <div class={format!("slot-status {}", slot.status_label().to_lowercase())}>
                { slot.status_label() }
            </div>
            if props.selected {
                <div class="slot-selected-badge">{ "SELECTED" }</div>
            }
        </div>
    }
}
