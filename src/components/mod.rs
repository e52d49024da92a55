pub mod loading_screen;
pub mod notification;
pub mod slot_card;
pub mod stat_card;

pub use loading_screen::LoadingScreen;
pub use notification::{Notification, Toast};
pub use slot_card::SlotCard;
pub use stat_card::StatCard;
