// src/templates/pages/admin_reports.rs
use crate::auth::Session;
use crate::reports::ReportSpec;
use crate::templates::components::report_table;
use crate::templates::portal_layout;
use maud::{html, Markup};

pub fn report_page(session: &Session, spec: &ReportSpec, rows: &[Vec<String>]) -> Markup {
    portal_layout(
        spec.title,
        session,
        html! {
            main class="container" {
                h1 { (spec.title) }
                p {
                    a href=(format!("/admin/reports/{}/export", spec.key)) { "Download xlsx" }
                    " | "
                    a href=(format!("/admin/reports/{}/data.json", spec.key)) { "Raw data" }
                    " | "
                    a href="/admin" { "Back to dashboard" }
                }
                (report_table(spec, rows))
            }
        },
    )
}
