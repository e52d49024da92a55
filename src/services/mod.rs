pub mod api_client;
pub mod auth_service;
pub mod parking_service;
pub mod payment_service;
pub mod session_store;

pub use api_client::ApiClient;
pub use auth_service::AuthService;
pub use parking_service::ParkingService;
pub use session_store::SessionStore;
