// src/templates/pages/admin_messages.rs
use crate::auth::Session;
use crate::db::messages::SentMessage;
use crate::db::residents::Resident;
use crate::domain::query::{QueryPage, QueryState};
use crate::domain::selection::SelectionSet;
use crate::templates::portal_layout;
use maud::{html, Markup};

pub struct MessagesVm<'a> {
    pub state: &'a QueryState,
    pub out: &'a QueryPage<'a, Resident>,
    pub selection: &'a SelectionSet,
    pub recent: &'a [SentMessage],
    pub sent_count: Option<usize>,
}

/// Serialize the selection for round-tripping through forms and links.
pub fn selection_param(selection: &SelectionSet) -> String {
    selection
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

pub fn messages_page(session: &Session, vm: &MessagesVm<'_>) -> Markup {
    let selected_param = selection_param(vm.selection);
    let page_ids: Vec<i64> = vm.out.page.iter().map(|r| r.id).collect();
    let page_ids_param = page_ids
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",");
    let all_selected = vm.selection.all_selected(&page_ids);

    portal_layout(
        "Messaging",
        session,
        html! {
            main class="container" {
                h1 { "Resident Messaging" }

                @if let Some(n) = vm.sent_count {
                    div style="border: 1px solid #10b981; background: #ecfdf5; padding: 12px; margin-bottom: 1rem;" {
                        "Message sent to " (n) " recipient(s)."
                    }
                }

                form action="/admin/messages" method="get" style="display: flex; gap: 8px; margin-bottom: 1rem;" {
                    input type="text" name="search" value=(vm.state.search_term())
                        placeholder="Search recipients...";
                    input type="hidden" name="per_page" value=(vm.state.page_size());
                    input type="hidden" name="selected" value=(selected_param);
                    button type="submit" { "Search" }
                }

                div style="overflow-x: auto;" {
                    table style="width: 100%; border-collapse: collapse;" {
                        thead {
                            tr {
                                th style="padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" {
                                    // toggles exactly this page's ids
                                    form action="/admin/messages/select-all" method="post" style="margin: 0;" {
                                        (state_inputs(vm.state, &selected_param))
                                        input type="hidden" name="page_ids" value=(page_ids_param);
                                        button type="submit" title="Select all on this page" {
                                            @if all_selected { "\u{2611} All" } @else { "\u{2610} All" }
                                        }
                                    }
                                }
                                @for h in ["Name", "Contact", "Address"] {
                                    th style="padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { (h) }
                                }
                            }
                        }
                        tbody {
                            @if vm.out.page.is_empty() {
                                tr { td colspan="4" style="padding: 8px; color: #6b7280;" { "No recipients found" } }
                            }
                            @for r in &vm.out.page {
                                tr {
                                    td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" {
                                        form action="/admin/messages/toggle" method="post" style="margin: 0;" {
                                            (state_inputs(vm.state, &selected_param))
                                            input type="hidden" name="id" value=(r.id);
                                            button type="submit" {
                                                @if vm.selection.contains(r.id) { "\u{2611}" } @else { "\u{2610}" }
                                            }
                                        }
                                    }
                                    td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (r.full_name()) }
                                    td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (r.contact_number) }
                                    td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (r.address) }
                                }
                            }
                        }
                    }
                }

                (pagination_with_selection(vm, &selected_param))

                div class="card" style="margin-top: 2rem;" {
                    h3 { (vm.selection.len()) " recipient(s) selected" }
                    form action="/admin/messages/send" method="post" {
                        input type="hidden" name="selected" value=(selected_param);
                        textarea name="body" rows="3" placeholder="Announcement text..."
                            style="display: block; width: 100%; padding: 8px; margin-bottom: 12px;" {}
                        button type="submit" disabled[vm.selection.is_empty()] { "Send message" }
                    }
                }

                div class="card" style="margin-top: 2rem;" {
                    h3 { "Recent messages" }
                    @if vm.recent.is_empty() {
                        p style="color: #6b7280;" { "Nothing sent yet." }
                    }
                    ul {
                        @for m in vm.recent {
                            li {
                                (m.sent_at.format("%Y-%m-%d %H:%M")) " - "
                                (m.body) " (" (m.recipient_count) " recipients)"
                            }
                        }
                    }
                }
            }
        },
    )
}

fn state_inputs(state: &QueryState, selected_param: &str) -> Markup {
    html! {
        input type="hidden" name="search" value=(state.search_term());
        input type="hidden" name="per_page" value=(state.page_size());
        input type="hidden" name="page" value=(state.page_index());
        input type="hidden" name="selected" value=(selected_param);
    }
}

// The stock pagination component rebuilds links from QueryState alone;
// messaging links must also carry the selection.
fn pagination_with_selection(vm: &MessagesVm<'_>, selected_param: &str) -> Markup {
    if vm.out.total_pages <= 1 {
        return html! {};
    }

    html! {
        nav class="pagination" style="display: flex; gap: 6px; margin-top: 1rem;" {
            @for p in 1..=vm.out.total_pages {
                @if p == vm.out.page_index {
                    strong { (p) }
                } @else {
                    a href=(format!(
                        "/admin/messages?search={}&per_page={}&page={}&selected={}",
                        crate::templates::components::pagination::urlencode(vm.state.search_term()),
                        vm.state.page_size(),
                        p,
                        selected_param
                    )) { (p) }
                }
            }
        }
    }
}
