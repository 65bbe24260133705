// src/templates/pages/admin_incidents.rs
use crate::auth::Session;
use crate::db::incidents::IncidentReport;
use crate::domain::query::{QueryPage, QueryState, FILTER_ALL};
use crate::domain::status::IncidentStatus;
use crate::templates::components::{pagination, status_badge};
use crate::templates::pages::incidents::INCIDENT_CATEGORIES;
use crate::templates::portal_layout;
use maud::{html, Markup};

pub fn incidents_admin_page(
    session: &Session,
    state: &QueryState,
    out: &QueryPage<'_, IncidentReport>,
) -> Markup {
    let active_status = state.filter("status").unwrap_or(FILTER_ALL);
    let active_category = state.filter("category").unwrap_or(FILTER_ALL);

    portal_layout(
        "Incident Reports",
        session,
        html! {
            main class="container" {
                h1 { "Incident Reports" }
                p style="color: #6b7280;" { (out.total_matching) " matching" }

                form action="/admin/incidents" method="get" style="display: flex; gap: 8px; margin-bottom: 1rem;" {
                    input type="text" name="search" value=(state.search_term())
                        placeholder="Search reporter, category, location...";
                    select name="status" {
                        option value=(FILTER_ALL) selected[active_status == FILTER_ALL] { (FILTER_ALL) }
                        @for s in IncidentStatus::ALL {
                            option value=(s.label()) selected[active_status == s.label()] { (s.label()) }
                        }
                    }
                    select name="category" {
                        option value=(FILTER_ALL) selected[active_category == FILTER_ALL] { (FILTER_ALL) }
                        @for cat in INCIDENT_CATEGORIES {
                            option value=(cat) selected[active_category == *cat] { (cat) }
                        }
                    }
                    input type="hidden" name="per_page" value=(state.page_size());
                    button type="submit" { "Apply" }
                }

                div style="overflow-x: auto;" {
                    table style="width: 100%; border-collapse: collapse;" {
                        thead {
                            tr {
                                @for h in ["ID", "Reporter", "Category", "Location", "Description", "Reported", "Status", "Action"] {
                                    th style="padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { (h) }
                                }
                            }
                        }
                        tbody {
                            @if out.page.is_empty() {
                                tr { td colspan="8" style="padding: 8px; color: #6b7280;" { "No reports found" } }
                            }
                            @for i in &out.page {
                                tr {
                                    td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (i.id) }
                                    td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (i.reporter_name) }
                                    td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (i.category) }
                                    td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (i.location) }
                                    td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (i.description) }
                                    td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (i.reported_at.format("%Y-%m-%d")) }
                                    td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (status_badge(i.status.label())) }
                                    td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" {
                                        form action=(format!("/admin/incidents/{}/status", i.id)) method="post" style="display: flex; gap: 6px; margin: 0;" {
                                            select name="status" {
                                                @for s in IncidentStatus::ALL {
                                                    option value=(s.as_str()) selected[i.status == s] { (s.label()) }
                                                }
                                            }
                                            button type="submit" { "Update" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                (pagination("/admin/incidents", state, out.page_index, out.total_pages))
            }
        },
    )
}
