// src/domain/query.rs
//
// Shared list pipeline for every admin page: search -> categorical filters
// -> stable sort -> paginate. The same engine drives residents,
// appointments, incident reports and messaging recipients; each record kind
// only implements `ListRecord`.

use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Filter value meaning "filter disabled".
pub const FILTER_ALL: &str = "All";

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// A record kind that can be driven through `run_query`.
pub trait ListRecord {
    /// Textual fields tested by the case-insensitive substring search.
    fn search_text(&self) -> Vec<String>;

    /// Value of the named categorical attribute, or `None` if the record
    /// kind has no such filter. An active filter a record cannot answer
    /// excludes the record.
    fn filter_value(&self, filter: &str) -> Option<String>;

    /// Ordering under the named sort key. Date-valued keys must compare by
    /// the underlying instant, not by rendered string. Unknown keys should
    /// return `Ordering::Equal` (stable sort then preserves input order).
    fn compare_by(&self, other: &Self, key: &str) -> Ordering;
}

/// The combined search/filter/sort/pagination state of one list view.
///
/// Fields are private so the page-reset rule cannot be bypassed: any change
/// to the search term, a filter, or the page size snaps `page_index` back
/// to 1, while plain page navigation leaves the rest untouched.
#[derive(Debug, Clone)]
pub struct QueryState {
    search_term: String,
    active_filters: BTreeMap<String, String>,
    sort_key: Option<String>,
    sort_direction: SortDirection,
    page_size: usize,
    page_index: usize, // 1-based
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            active_filters: BTreeMap::new(),
            sort_key: None,
            sort_direction: SortDirection::Ascending,
            page_size: DEFAULT_PAGE_SIZE,
            page_index: 1,
        }
    }
}

impl QueryState {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            ..Self::default()
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn filter(&self, name: &str) -> Option<&str> {
        self.active_filters.get(name).map(String::as_str)
    }

    pub fn sort_key(&self) -> Option<&str> {
        self.sort_key.as_deref()
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Change the search term. Resets to the first page.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.page_index = 1;
    }

    /// Set or clear a categorical filter ("All" clears). Resets to the
    /// first page.
    pub fn set_filter(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        if value == FILTER_ALL || value.is_empty() {
            self.active_filters.remove(&name.into());
        } else {
            self.active_filters.insert(name.into(), value);
        }
        self.page_index = 1;
    }

    /// Change the page size (clamped to at least 1). Resets to the first page.
    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
        self.page_index = 1;
    }

    /// Sorting is orthogonal to pagination; changing it keeps the page.
    pub fn set_sort(&mut self, key: Option<String>, direction: SortDirection) {
        self.sort_key = key;
        self.sort_direction = direction;
    }

    /// Direct page navigation. Does not reset search, filters or size;
    /// `run_query` clamps out-of-range indices.
    pub fn set_page_index(&mut self, index: usize) {
        self.page_index = index.max(1);
    }

    pub fn active_filters(&self) -> impl Iterator<Item = (&str, &str)> {
        self.active_filters
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// One rendered page plus the counts the pagination UI needs.
#[derive(Debug)]
pub struct QueryPage<'a, R> {
    pub page: Vec<&'a R>,
    pub total_matching: usize,
    pub total_pages: usize,
    /// Page index after clamping into `[1, max(1, total_pages)]`.
    pub page_index: usize,
}

/// Reduce the full collection plus the current state to the exact page to
/// display. Pure: never mutates `records`, identical inputs yield identical
/// output, and `page.len() <= state.page_size()` always holds.
pub fn run_query<'a, R: ListRecord>(records: &'a [R], state: &QueryState) -> QueryPage<'a, R> {
    let needle = state.search_term.trim().to_lowercase();

    let mut matching: Vec<&R> = records
        .iter()
        .filter(|r| matches_search(*r, &needle))
        .filter(|r| matches_filters(*r, state))
        .collect();

    if let Some(key) = state.sort_key.as_deref() {
        // sort_by is stable: equal keys keep their filtered order.
        matching.sort_by(|a, b| {
            let ord = a.compare_by(b, key);
            match state.sort_direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
    }

    let total_matching = matching.len();
    let page_size = state.page_size.max(1);
    let total_pages = total_matching.div_ceil(page_size);
    let page_index = state.page_index.clamp(1, total_pages.max(1));

    let start = (page_index - 1) * page_size;
    let page = if start >= total_matching {
        Vec::new()
    } else {
        matching[start..(start + page_size).min(total_matching)].to_vec()
    };

    QueryPage {
        page,
        total_matching,
        total_pages,
        page_index,
    }
}

fn matches_search<R: ListRecord>(record: &R, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    record
        .search_text()
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

fn matches_filters<R: ListRecord>(record: &R, state: &QueryState) -> bool {
    state
        .active_filters
        .iter()
        .all(|(name, wanted)| record.filter_value(name).as_deref() == Some(wanted.as_str()))
}
