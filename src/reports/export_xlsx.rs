// src/reports/export_xlsx.rs
use crate::errors::ServerError;
use crate::reports::ReportSpec;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use rust_xlsxwriter::Workbook;

/// One exporter for every registered report: headers on row 0, data rows
/// below, streamed back as an attachment.
pub fn export_report_xlsx(spec: &ReportSpec, rows: &[Vec<String>]) -> ResultResp {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in spec.headers.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{header}': {e}"))
            })?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        for (col, cell) in row.iter().enumerate() {
            worksheet
                .write_string(r, col as u16, cell)
                .map_err(|e| ServerError::XlsxError(format!("Failed to write cell: {e}")))?;
        }
    }

    let buffer = workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {e}")))?;

    xlsx_response(buffer, &format!("{}.xlsx", spec.key))
}
