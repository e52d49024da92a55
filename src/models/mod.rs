pub mod booking;
pub mod report;
pub mod slot;
pub mod user;

pub use booking::{
    booking_stats, Booking, BookingStats, BookingsResponse, CheckoutResponse, ParkRequest,
    ParkResponse, Vehicle,
};
pub use report::{RemoveResponse, SearchResult, UsageReport};
pub use slot::{filter_slots, slot_stats, ParkingSlot, SlotRequest, SlotStats, StatusFilter};
pub use user::{AuthResponse, LoginRequest, RegisterRequest, Role, Session, User, UsersResponse};
