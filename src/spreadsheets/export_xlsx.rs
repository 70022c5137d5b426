use crate::errors::ServerError;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use crate::schedule::Schedule;
use rust_xlsxwriter::{Color, Format, Workbook};

const HEADERS: [(&str, f64); 4] = [
    ("Date", 14.0),
    ("Status", 24.0),
    ("Changeovers", 48.0),
    ("Notes", 48.0),
];

pub fn export_schedule_xlsx(schedule: &Schedule) -> ResultResp {
    let buffer = schedule_workbook(schedule)?;
    xlsx_response(buffer, &format!("cleaning_schedule_{}.xlsx", schedule.today))
}

/// One row per day of the window, status cell filled with its color.
pub fn schedule_workbook(schedule: &Schedule) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let bold = Format::new().set_bold();

    // Headers
    for (col, (header, width)) in HEADERS.iter().enumerate() {
        let col = col as u16;
        worksheet
            .write_string_with_format(0, col, *header, &bold)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{}': {}", header, e))
            })?;
        worksheet
            .set_column_width(col, *width)
            .map_err(|e| ServerError::XlsxError(format!("Failed to size column: {}", e)))?;
    }

    // Rows
    for (i, day) in schedule.days.iter().enumerate() {
        let r = (i + 1) as u32;

        worksheet
            .write_string(r, 0, day.date.format("%Y-%m-%d").to_string())
            .map_err(|e| ServerError::XlsxError(format!("Failed to write date: {}", e)))?;

        let fill = Format::new().set_background_color(Color::RGB(day.label.rgb()));
        worksheet
            .write_string_with_format(r, 1, day.label.as_str(), &fill)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write status: {}", e)))?;

        worksheet
            .write_string(r, 2, day.changeover_detail.join(", "))
            .map_err(|e| ServerError::XlsxError(format!("Failed to write changeovers: {}", e)))?;

        worksheet
            .write_string(r, 3, &day.note_text)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write notes: {}", e)))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))
}
