/// Backend base URL, resolved at compile time:
/// - development: http://localhost:8080 (default)
/// - production: via API_BASE_URL env var / .env (see build.rs)
pub const API_BASE_URL: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "http://localhost:8080",
};

pub const AUTH_API: &str = "/api/auth";
pub const PARKING_API: &str = "/api/parking";
pub const ADMIN_API: &str = "/api/admin";

// localStorage keys for the persisted session (user profile + JWT)
pub const STORAGE_KEY_USER: &str = "parkingUser";
pub const STORAGE_KEY_TOKEN: &str = "parkingToken";

// Polling cadence per view, in milliseconds
pub const SLOT_POLL_MS: u32 = 5_000;
pub const PARK_SLOT_POLL_MS: u32 = 4_000;
pub const BOOKING_POLL_MS: u32 = 5_000;
pub const REPORT_POLL_MS: u32 = 10_000;
pub const CLOCK_TICK_MS: u32 = 1_000;

pub const NOTIFICATION_DISMISS_MS: u32 = 4_000;

/// Hourly parking fee in rupees, applied to active bookings
pub const HOURLY_RATE: u32 = 50;

/// Vehicle types offered in the park form: (value, label, flat day rate)
pub const VEHICLE_TYPES: &[(&str, &str, u32)] = &[
    ("BIKE", "🏍️ Bike", 10),
    ("CAR", "🚗 Car", 20),
    ("SUV", "🚙 SUV", 30),
    ("TRUCK", "🚛 Truck", 50),
];

pub fn vehicle_rate(vehicle_type: &str) -> u32 {
    VEHICLE_TYPES
        .iter()
        .find(|(value, _, _)| *value == vehicle_type)
        .map(|(_, _, rate)| *rate)
        .unwrap_or(20)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vehicle_types_have_their_rate() {
        assert_eq!(vehicle_rate("BIKE"), 10);
        assert_eq!(vehicle_rate("TRUCK"), 50);
    }

    #[test]
    fn unknown_vehicle_type_gets_car_rate() {
        assert_eq!(vehicle_rate("HOVERCRAFT"), 20);
    }
}
