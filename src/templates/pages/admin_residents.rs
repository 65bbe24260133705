// src/templates/pages/admin_residents.rs
use crate::auth::Session;
use crate::db::residents::Resident;
use crate::domain::query::{QueryPage, QueryState};
use crate::templates::components::pagination;
use crate::templates::portal_layout;
use maud::{html, Markup};

pub fn residents_page(
    session: &Session,
    state: &QueryState,
    out: &QueryPage<'_, Resident>,
) -> Markup {
    portal_layout(
        "Residents",
        session,
        html! {
            main class="container" {
                h1 { "Residents" }
                p style="color: #6b7280;" { (out.total_matching) " matching" }

                form action="/admin/residents" method="get" style="display: flex; gap: 8px; margin-bottom: 1rem;" {
                    input type="text" name="search" value=(state.search_term())
                        placeholder="Search name, username, contact...";
                    input type="hidden" name="per_page" value=(state.page_size());
                    button type="submit" { "Search" }
                }

                div style="overflow-x: auto;" {
                    table style="width: 100%; border-collapse: collapse;" {
                        thead {
                            tr {
                                @for h in ["ID", "Name", "Age", "Contact", "Address", "Username", "Registered"] {
                                    th style="padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { (h) }
                                }
                            }
                        }
                        tbody {
                            @if out.page.is_empty() {
                                tr { td colspan="7" style="padding: 8px; color: #6b7280;" { "No residents found" } }
                            }
                            @for r in &out.page {
                                tr {
                                    td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (r.id) }
                                    td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (r.full_name()) }
                                    td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (r.age) }
                                    td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (r.contact_number) }
                                    td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (r.address) }
                                    td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (r.username) }
                                    td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (r.registered_at.format("%Y-%m-%d")) }
                                }
                            }
                        }
                    }
                }

                (pagination("/admin/residents", state, out.page_index, out.total_pages))
            }
        },
    )
}
