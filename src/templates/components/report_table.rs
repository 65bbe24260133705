// src/templates/components/report_table.rs
use crate::reports::ReportSpec;
use maud::{html, Markup};

/// The single generic renderer behind every registered report.
pub fn report_table(spec: &ReportSpec, rows: &[Vec<String>]) -> Markup {
    html! {
        div style="overflow-x: auto;" {
            table style="width: 100%; border-collapse: collapse; margin-top: 1rem;" {
                thead {
                    tr {
                        @for header in spec.headers {
                            th style="padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { (header) }
                        }
                    }
                }
                tbody {
                    @if rows.is_empty() {
                        tr {
                            td colspan=(spec.headers.len()) style="padding: 8px; color: #6b7280;" { "No records" }
                        }
                    }
                    @for row in rows {
                        tr {
                            @for cell in row {
                                td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (cell) }
                            }
                        }
                    }
                }
            }
        }
    }
}
