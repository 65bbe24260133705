// src/templates/pages/admin_appointments.rs
use crate::auth::Session;
use crate::db::appointments::Appointment;
use crate::domain::query::{QueryPage, QueryState, FILTER_ALL};
use crate::domain::status::AppointmentStatus;
use crate::templates::components::{pagination, status_badge};
use crate::templates::portal_layout;
use maud::{html, Markup};

pub fn appointments_admin_page(
    session: &Session,
    state: &QueryState,
    out: &QueryPage<'_, Appointment>,
) -> Markup {
    let active_status = state.filter("status").unwrap_or(FILTER_ALL);

    portal_layout(
        "Appointments",
        session,
        html! {
            main class="container" {
                h1 { "Appointments" }
                p style="color: #6b7280;" { (out.total_matching) " matching" }

                form action="/admin/appointments" method="get" style="display: flex; gap: 8px; margin-bottom: 1rem;" {
                    input type="text" name="search" value=(state.search_term())
                        placeholder="Search resident, ID, subject, official...";
                    select name="status" {
                        option value=(FILTER_ALL) selected[active_status == FILTER_ALL] { (FILTER_ALL) }
                        @for s in AppointmentStatus::ALL {
                            option value=(s.label()) selected[active_status == s.label()] { (s.label()) }
                        }
                    }
                    input type="hidden" name="per_page" value=(state.page_size());
                    button type="submit" { "Apply" }
                }

                div style="overflow-x: auto;" {
                    table style="width: 100%; border-collapse: collapse;" {
                        thead {
                            tr {
                                @for h in ["ID", "Resident", "Subject", "Official", "Schedule", "Status", "Action"] {
                                    th style="padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { (h) }
                                }
                            }
                        }
                        tbody {
                            @if out.page.is_empty() {
                                tr { td colspan="7" style="padding: 8px; color: #6b7280;" { "No appointments found" } }
                            }
                            @for a in &out.page {
                                tr {
                                    td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (a.id) }
                                    td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (a.resident_name) }
                                    td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (a.subject) }
                                    td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (a.official_name) }
                                    td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (a.scheduled_at.format("%Y-%m-%d %H:%M")) }
                                    td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (status_badge(a.status.label())) }
                                    td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" {
                                        @if a.status == AppointmentStatus::Awaiting {
                                            form action=(format!("/admin/appointments/{}/status", a.id)) method="post" style="display: flex; gap: 6px; margin: 0;" {
                                                button type="submit" name="status" value="accepted" { "Accept" }
                                                button type="submit" name="status" value="declined" { "Decline" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                (pagination("/admin/appointments", state, out.page_index, out.total_pages))
            }
        },
    )
}
