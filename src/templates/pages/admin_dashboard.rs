// src/templates/pages/admin_dashboard.rs
use crate::auth::Session;
use crate::reports::{StatusSlice, REPORTS};
use crate::templates::portal_layout;
use maud::{html, Markup};

pub struct DashboardVm {
    pub resident_count: i64,
    pub appointment_slices: Vec<StatusSlice>,
    pub incident_slices: Vec<StatusSlice>,
    pub document_slices: Vec<StatusSlice>,
}

const PIE_COLORS: &[&str] = &["#6b7280", "#3b82f6", "#10b981", "#dc2626", "#f59e0b"];

pub fn dashboard_page(session: &Session, vm: &DashboardVm) -> Markup {
    portal_layout(
        "Dashboard",
        session,
        html! {
            main class="container" {
                h1 { "Chairperson Dashboard" }

                div class="card" style="margin-bottom: 2rem;" {
                    h3 { "Residents" }
                    p style="font-size: 2rem; margin: 0;" { (vm.resident_count) }
                    a href="/admin/residents" { "Manage residents" }
                }

                div style="display: flex; gap: 1rem; flex-wrap: wrap;" {
                    (status_chart("Appointments", "/admin/appointments", &vm.appointment_slices))
                    (status_chart("Incident Reports", "/admin/incidents", &vm.incident_slices))
                    (status_chart("Document Requests", "/admin/documents", &vm.document_slices))
                }

                div class="card" style="margin-top: 2rem;" {
                    h3 { "Reports" }
                    ul {
                        @for spec in REPORTS {
                            li {
                                a href=(format!("/admin/reports/{}", spec.key)) { (spec.title) }
                                " ("
                                a href=(format!("/admin/reports/{}/export", spec.key)) { "xlsx" }
                                ")"
                            }
                        }
                    }
                }
            }
        },
    )
}

fn status_chart(title: &str, href: &str, slices: &[StatusSlice]) -> Markup {
    html! {
        div class="card" {
            h3 { (title) }
            div style=(format!(
                "width: 120px; height: 120px; border-radius: 50%; background: {};",
                conic_gradient(slices)
            )) {}
            ul style="list-style: none; padding: 0; margin-top: 8px;" {
                @for (i, slice) in slices.iter().enumerate() {
                    li {
                        span style=(format!("color: {};", PIE_COLORS[i % PIE_COLORS.len()])) { "\u{25A0} " }
                        (slice.label) ": " (slice.count)
                    }
                }
            }
            a href=(href) { "View" }
        }
    }
}

/// Percentage stops for a conic-gradient pie, one segment per slice.
fn conic_gradient(slices: &[StatusSlice]) -> String {
    let mut stops = Vec::new();
    let mut acc = 0.0;

    for (i, slice) in slices.iter().enumerate() {
        let from = acc;
        acc += slice.percent;
        stops.push(format!(
            "{} {:.1}% {:.1}%",
            PIE_COLORS[i % PIE_COLORS.len()],
            from,
            acc
        ));
    }

    if stops.is_empty() {
        return "#e5e7eb".to_string();
    }
    format!("conic-gradient({})", stops.join(", "))
}
