pub mod export_xlsx;

pub use export_xlsx::{export_schedule_xlsx, schedule_workbook};
