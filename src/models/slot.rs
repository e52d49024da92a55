use serde::{Deserialize, Serialize};

use super::booking::Booking;

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ParkingSlot {
    pub id: i64,
    pub slot_number: i32,
    pub slot_type: String,
    pub is_available: bool,
    pub is_occupied: bool,
    #[serde(default)]
    pub current_booking: Option<Box<Booking>>,
}

impl ParkingSlot {
    /// Free = bookable right now.
    pub fn is_free(&self) -> bool {
        self.is_available && !self.is_occupied
    }

    pub fn status_label(&self) -> &'static str {
        if !self.is_available {
            "UNAVAILABLE"
        } else if self.is_occupied {
            "OCCUPIED"
        } else {
            "AVAILABLE"
        }
    }
}

/// Payload for admin slot create/update.
#[derive(Clone, PartialEq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SlotRequest {
    pub slot_number: i32,
    pub slot_type: String,
    pub is_available: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StatusFilter {
    All,
    Available,
    Occupied,
    Unavailable,
}

/// Recomputed from scratch against every snapshot; never patched.
pub fn filter_slots(
    slots: &[ParkingSlot],
    status: StatusFilter,
    slot_type: &str,
) -> Vec<ParkingSlot> {
    slots
        .iter()
        .filter(|slot| match status {
            StatusFilter::All => true,
            StatusFilter::Available => slot.is_free(),
            StatusFilter::Occupied => slot.is_occupied,
            StatusFilter::Unavailable => !slot.is_available,
        })
        .filter(|slot| slot_type == "ALL" || slot.slot_type == slot_type)
        .cloned()
        .collect()
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct SlotStats {
    pub total: usize,
    pub available: usize,
    pub occupied: usize,
    pub unavailable: usize,
}

pub fn slot_stats(slots: &[ParkingSlot]) -> SlotStats {
    SlotStats {
        total: slots.len(),
        available: slots.iter().filter(|s| s.is_free()).count(),
        occupied: slots.iter().filter(|s| s.is_occupied).count(),
        unavailable: slots.iter().filter(|s| !s.is_available).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(number: i32, slot_type: &str, available: bool, occupied: bool) -> ParkingSlot {
        ParkingSlot {
            id: number as i64,
            slot_number: number,
            slot_type: slot_type.to_string(),
            is_available: available,
            is_occupied: occupied,
            current_booking: None,
        }
    }

    fn sample() -> Vec<ParkingSlot> {
        vec![
            slot(1, "CAR", true, false),
            slot(2, "CAR", true, true),
            slot(3, "BIKE", true, false),
            slot(4, "BIKE", false, false),
        ]
    }

    #[test]
    fn stats_are_a_pure_reduction() {
        let stats = slot_stats(&sample());
        assert_eq!(
            stats,
            SlotStats {
                total: 4,
                available: 2,
                occupied: 1,
                unavailable: 1
            }
        );
    }

    #[test]
    fn stats_of_empty_snapshot_are_zero() {
        // A poll returning nothing after a non-empty one must drop counts to zero.
        assert_eq!(slot_stats(&[]), SlotStats::default());
    }

    #[test]
    fn status_filter_selects_the_right_slots() {
        let slots = sample();
        let available = filter_slots(&slots, StatusFilter::Available, "ALL");
        assert_eq!(
            available.iter().map(|s| s.slot_number).collect::<Vec<_>>(),
            vec![1, 3]
        );

        let occupied = filter_slots(&slots, StatusFilter::Occupied, "ALL");
        assert_eq!(occupied.len(), 1);
        assert_eq!(occupied[0].slot_number, 2);

        let unavailable = filter_slots(&slots, StatusFilter::Unavailable, "ALL");
        assert_eq!(unavailable[0].slot_number, 4);
    }

    #[test]
    fn type_filter_composes_with_status_filter() {
        let slots = sample();
        let bikes = filter_slots(&slots, StatusFilter::All, "BIKE");
        assert_eq!(bikes.len(), 2);

        let free_bikes = filter_slots(&slots, StatusFilter::Available, "BIKE");
        assert_eq!(free_bikes.len(), 1);
        assert_eq!(free_bikes[0].slot_number, 3);
    }

    #[test]
    fn filtering_an_empty_snapshot_yields_nothing() {
        assert!(filter_slots(&[], StatusFilter::Occupied, "ALL").is_empty());
    }

    #[test]
    fn status_labels() {
        assert_eq!(slot(1, "CAR", true, false).status_label(), "AVAILABLE");
        assert_eq!(slot(1, "CAR", true, true).status_label(), "OCCUPIED");
        assert_eq!(slot(1, "CAR", false, false).status_label(), "UNAVAILABLE");
    }
}
