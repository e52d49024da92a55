pub mod use_clock;
pub mod use_polling;

pub use use_clock::use_clock;
pub use use_polling::{use_polling, UsePollingHandle};
