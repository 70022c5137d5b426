pub mod alerts;
pub mod booking;
pub mod logic;
pub mod notes;
pub mod status;

pub use alerts::{summarize, Summary};
pub use booking::BookingRecord;
pub use logic::{build_window, DayStatus};
pub use notes::{merge_notes, DayNote};
