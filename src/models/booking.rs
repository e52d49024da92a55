use serde::{Deserialize, Serialize};

pub const STATUS_ACTIVE: &str = "ACTIVE";
pub const STATUS_COMPLETED: &str = "COMPLETED";

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub license_plate: String,
    pub vehicle_type: String,
    #[serde(default)]
    pub owner_name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

/// Slim slot reference embedded in a booking (the full slot carries the
/// booking itself, so nesting is cut here).
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SlotSummary {
    pub id: i64,
    pub slot_number: i32,
    #[serde(default)]
    pub slot_type: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    pub booking_number: String,
    pub status: String,
    pub entry_time: String,
    #[serde(default)]
    pub exit_time: Option<String>,
    #[serde(default)]
    pub total_amount: Option<f64>,
    pub vehicle: Vehicle,
    pub parking_slot: SlotSummary,
}

impl Booking {
    pub fn is_active(&self) -> bool {
        self.status == STATUS_ACTIVE
    }

    pub fn is_completed(&self) -> bool {
        self.status == STATUS_COMPLETED
    }
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct BookingsResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub bookings: Vec<Booking>,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ParkRequest {
    pub user_id: i64,
    pub slot_number: i32,
    pub license_plate: String,
    pub vehicle_type: String,
    pub owner_name: String,
    pub phone_number: String,
    pub payment_method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ParkResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub booking_id: Option<i64>,
    #[serde(default)]
    pub booking_number: Option<String>,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub total_amount: Option<f64>,
}

#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct BookingStats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
    pub total_fees: f64,
}

/// Pure reduction over the latest snapshot; fees count completed bookings only.
pub fn booking_stats(bookings: &[Booking]) -> BookingStats {
    let completed: Vec<&Booking> = bookings.iter().filter(|b| b.is_completed()).collect();
    BookingStats {
        total: bookings.len(),
        active: bookings.iter().filter(|b| b.is_active()).count(),
        completed: completed.len(),
        total_fees: completed.iter().filter_map(|b| b.total_amount).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(id: i64, status: &str, amount: Option<f64>) -> Booking {
        Booking {
            id,
            booking_number: format!("BK-{:04}", id),
            status: status.to_string(),
            entry_time: "2026-08-02T10:00:00".to_string(),
            exit_time: None,
            total_amount: amount,
            vehicle: Vehicle {
                license_plate: "AP39CK1234".to_string(),
                vehicle_type: "CAR".to_string(),
                owner_name: None,
                phone_number: None,
            },
            parking_slot: SlotSummary {
                id,
                slot_number: id as i32,
                slot_type: None,
            },
        }
    }

    #[test]
    fn stats_count_active_and_completed_separately() {
        let bookings = vec![
            booking(1, STATUS_ACTIVE, None),
            booking(2, STATUS_COMPLETED, Some(150.0)),
            booking(3, STATUS_COMPLETED, Some(50.0)),
            booking(4, "CANCELLED", Some(999.0)),
        ];
        let stats = booking_stats(&bookings);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.active, 1);
        assert_eq!(stats.completed, 2);
        // cancelled amounts are not revenue
        assert_eq!(stats.total_fees, 200.0);
    }

    #[test]
    fn completed_booking_without_amount_adds_nothing() {
        let stats = booking_stats(&[booking(1, STATUS_COMPLETED, None)]);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.total_fees, 0.0);
    }

    #[test]
    fn empty_snapshot_resets_everything() {
        assert_eq!(booking_stats(&[]), BookingStats::default());
    }

    #[test]
    fn booking_decodes_from_backend_shape() {
        let json = r#"{
            "id": 7,
            "bookingNumber": "BK-0007",
            "status": "ACTIVE",
            "entryTime": "2026-08-02T10:00:00",
            "vehicle": {"licensePlate": "AP39CK1234", "vehicleType": "CAR"},
            "parkingSlot": {"id": 3, "slotNumber": 3}
        }"#;
        let booking: Booking = serde_json::from_str(json).expect("booking json");
        assert!(booking.is_active());
        assert_eq!(booking.parking_slot.slot_number, 3);
        assert_eq!(booking.total_amount, None);
    }
}
