// src/templates/components/pagination.rs
use crate::domain::query::QueryState;
use maud::{html, Markup};

/// Pager shared by every admin list page. Links carry the current search,
/// filters and page size so only the page index changes; submitting the
/// search/filter form omits the page param, which is what resets it.
pub fn pagination(base_path: &str, state: &QueryState, page_index: usize, total_pages: usize) -> Markup {
    if total_pages <= 1 {
        return html! {};
    }

    html! {
        nav class="pagination" style="display: flex; gap: 6px; margin-top: 1rem;" {
            @if page_index > 1 {
                a href=(page_url(base_path, state, 1)) { "First" }
                a href=(page_url(base_path, state, page_index - 1)) { "Prev" }
            }
            @for p in 1..=total_pages {
                @if p == page_index {
                    strong { (p) }
                } @else {
                    a href=(page_url(base_path, state, p)) { (p) }
                }
            }
            @if page_index < total_pages {
                a href=(page_url(base_path, state, page_index + 1)) { "Next" }
                a href=(page_url(base_path, state, total_pages)) { "Last" }
            }
        }
    }
}

fn page_url(base_path: &str, state: &QueryState, page: usize) -> String {
    let mut params: Vec<String> = Vec::new();

    if !state.search_term().is_empty() {
        params.push(format!("search={}", urlencode(state.search_term())));
    }
    for (name, value) in state.active_filters() {
        params.push(format!("{}={}", urlencode(name), urlencode(value)));
    }
    params.push(format!("per_page={}", state.page_size()));
    params.push(format!("page={page}"));

    format!("{}?{}", base_path, params.join("&"))
}

/// Minimal percent-encoding for the few characters our params can carry.
pub(crate) fn urlencode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            ' ' => out.push_str("%20"),
            '&' => out.push_str("%26"),
            '=' => out.push_str("%3D"),
            '?' => out.push_str("%3F"),
            '#' => out.push_str("%23"),
            '%' => out.push_str("%25"),
            '+' => out.push_str("%2B"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_preserve_search_and_filters() {
        let mut state = QueryState::default();
        state.set_search_term("juan cruz");
        state.set_filter("status", "Awaiting");

        let url = page_url("/admin/appointments", &state, 2);
        assert!(url.contains("search=juan%20cruz"));
        assert!(url.contains("status=Awaiting"));
        assert!(url.ends_with("page=2"));
    }

    #[test]
    fn single_page_renders_nothing() {
        let state = QueryState::default();
        assert!(pagination("/admin/residents", &state, 1, 1)
            .into_string()
            .is_empty());
    }
}
