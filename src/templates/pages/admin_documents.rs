// src/templates/pages/admin_documents.rs
use crate::auth::Session;
use crate::db::documents::{DocumentRequest, DOCUMENT_TYPES};
use crate::domain::query::{QueryPage, QueryState, FILTER_ALL};
use crate::domain::status::DocumentStatus;
use crate::templates::components::{pagination, status_badge};
use crate::templates::portal_layout;
use maud::{html, Markup};

pub fn documents_admin_page(
    session: &Session,
    state: &QueryState,
    out: &QueryPage<'_, DocumentRequest>,
) -> Markup {
    let active_status = state.filter("status").unwrap_or(FILTER_ALL);
    let active_type = state.filter("document_type").unwrap_or(FILTER_ALL);

    portal_layout(
        "Document Requests",
        session,
        html! {
            main class="container" {
                h1 { "Document Requests" }
                p style="color: #6b7280;" { (out.total_matching) " matching" }

                form action="/admin/documents" method="get" style="display: flex; gap: 8px; margin-bottom: 1rem;" {
                    input type="text" name="search" value=(state.search_term())
                        placeholder="Search resident, document, purpose...";
                    select name="status" {
                        option value=(FILTER_ALL) selected[active_status == FILTER_ALL] { (FILTER_ALL) }
                        @for s in DocumentStatus::ALL {
                            option value=(s.label()) selected[active_status == s.label()] { (s.label()) }
                        }
                    }
                    select name="document_type" {
                        option value=(FILTER_ALL) selected[active_type == FILTER_ALL] { (FILTER_ALL) }
                        @for doc in DOCUMENT_TYPES {
                            option value=(doc) selected[active_type == *doc] { (doc) }
                        }
                    }
                    input type="hidden" name="per_page" value=(state.page_size());
                    button type="submit" { "Apply" }
                }

                div style="overflow-x: auto;" {
                    table style="width: 100%; border-collapse: collapse;" {
                        thead {
                            tr {
                                @for h in ["ID", "Resident", "Document", "Purpose", "Requested", "Status", "Action"] {
                                    th style="padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { (h) }
                                }
                            }
                        }
                        tbody {
                            @if out.page.is_empty() {
                                tr { td colspan="7" style="padding: 8px; color: #6b7280;" { "No requests found" } }
                            }
                            @for d in &out.page {
                                tr {
                                    td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (d.id) }
                                    td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (d.resident_name) }
                                    td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (d.document_type) }
                                    td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (d.purpose) }
                                    td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (d.requested_at.format("%Y-%m-%d")) }
                                    td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (status_badge(d.status.label())) }
                                    td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" {
                                        form action=(format!("/admin/documents/{}/status", d.id)) method="post" style="display: flex; gap: 6px; margin: 0;" {
                                            select name="status" {
                                                @for s in DocumentStatus::ALL {
                                                    option value=(s.as_str()) selected[d.status == s] { (s.label()) }
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

                (pagination("/admin/documents", state, out.page_index, out.total_pages))
            }
        },
    )
}
