use serde::Deserialize;

/// Aggregates from `GET /api/admin/reports/usage`. Fields default to zero so
/// a sparse report still renders.
#[derive(Clone, PartialEq, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UsageReport {
    #[serde(default)]
    pub total_bookings: u64,
    #[serde(default)]
    pub active_bookings: u64,
    #[serde(default)]
    pub total_revenue: f64,
    #[serde(default)]
    pub total_slots: u64,
}

/// `GET /api/parking/search/:plate` result.
#[derive(Clone, PartialEq, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub is_parked: bool,
    #[serde(default)]
    pub vehicle: Option<super::booking::Vehicle>,
    #[serde(default)]
    pub booking: Option<super::booking::Booking>,
    #[serde(default)]
    pub slot_number: Option<i32>,
}

/// `DELETE /api/parking/remove/:plate` result.
#[derive(Clone, PartialEq, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RemoveResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub total_amount: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_report_defaults_to_zero() {
        let report: UsageReport = serde_json::from_str(r#"{"totalBookings": 12}"#).expect("json");
        assert_eq!(report.total_bookings, 12);
        assert_eq!(report.active_bookings, 0);
        assert_eq!(report.total_revenue, 0.0);
    }

    #[test]
    fn search_miss_decodes_without_vehicle() {
        let result: SearchResult =
            serde_json::from_str(r#"{"success": false, "message": "Vehicle not found"}"#)
                .expect("json");
        assert!(!result.success);
        assert!(!result.is_parked);
        assert!(result.vehicle.is_none());
    }
}
