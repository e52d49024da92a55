use chrono::{Datelike, Utc};

use crate::error::ApiError;
use crate::models::{
    Booking, BookingsResponse, CheckoutResponse, ParkRequest, ParkResponse, ParkingSlot,
    RemoveResponse, SearchResult, SlotRequest, UsageReport,
};
use crate::services::api_client::ApiClient;
use crate::utils::constants::{ADMIN_API, PARKING_API};

/// Stateless client for the parking endpoints. No caching, no retries -
/// the polling views own their refresh cadence.
#[derive(Clone)]
pub struct ParkingService {
    api: ApiClient,
}

impl ParkingService {
    pub fn new() -> Self {
        Self {
            api: ApiClient::new(),
        }
    }

    pub async fn slots(&self) -> Result<Vec<ParkingSlot>, ApiError> {
        self.api.get(&format!("{}/slots", PARKING_API)).await
    }

    pub async fn create_slot(&self, request: &SlotRequest) -> Result<ParkingSlot, ApiError> {
        self.api.post(&format!("{}/slots", PARKING_API), request).await
    }

    pub async fn update_slot(&self, id: i64, request: &SlotRequest) -> Result<ParkingSlot, ApiError> {
        self.api
            .put(&format!("{}/slots/{}", PARKING_API, id), request)
            .await
    }

    pub async fn delete_slot(&self, id: i64) -> Result<(), ApiError> {
        self.api.delete(&format!("{}/slots/{}", PARKING_API, id)).await
    }

    pub async fn bookings(&self) -> Result<Vec<Booking>, ApiError> {
        let response: BookingsResponse = self.api.get(&format!("{}/bookings", PARKING_API)).await?;
        Self::unwrap_bookings(response)
    }

    pub async fn user_bookings(&self, user_id: i64) -> Result<Vec<Booking>, ApiError> {
        let response: BookingsResponse = self
            .api
            .get(&format!("{}/user/{}/bookings", PARKING_API, user_id))
            .await?;
        Self::unwrap_bookings(response)
    }

    // An empty list is a normal answer, not an error; only success=false is.
    fn unwrap_bookings(response: BookingsResponse) -> Result<Vec<Booking>, ApiError> {
        if !response.success {
            return Err(ApiError::Business {
                status: None,
                message: response
                    .message
                    .unwrap_or_else(|| "Failed to fetch bookings".to_string()),
            });
        }
        Ok(response.bookings)
    }

    pub async fn park(&self, request: &ParkRequest) -> Result<ParkResponse, ApiError> {
        log::info!(
            "🅿️ Parking {} in slot #{}",
            request.license_plate,
            request.slot_number
        );
        self.api.post(&format!("{}/park", PARKING_API), request).await
    }

    pub async fn checkout(&self, booking_id: i64) -> Result<CheckoutResponse, ApiError> {
        log::info!("🧾 Checkout booking {}", booking_id);
        self.api
            .post_empty(&format!("{}/checkout/{}", PARKING_API, booking_id))
            .await
    }

    pub async fn search_vehicle(&self, plate: &str) -> Result<SearchResult, ApiError> {
        self.api
            .get(&format!("{}/search/{}", PARKING_API, plate))
            .await
    }

    pub async fn remove_vehicle(&self, plate: &str) -> Result<RemoveResponse, ApiError> {
        self.api
            .delete_json(&format!("{}/remove/{}", PARKING_API, plate))
            .await
    }

    /// Usage aggregates for the current calendar year.
    pub async fn usage_report(&self) -> Result<UsageReport, ApiError> {
        let year = Utc::now().year();
        self.api
            .get(&format!(
                "{}/reports/usage?from={}-01-01&to={}-12-31",
                ADMIN_API, year, year
            ))
            .await
    }
}

impl Default for ParkingService {
    fn default() -> Self {
        Self::new()
    }
}
