// src/domain/selection.rs
//
// Recipient selection for the messaging page. Selection survives page
// navigation; "select all" only ever touches the ids on the page it was
// clicked on.

use std::collections::BTreeSet;

#[derive(Debug, Default, Clone)]
pub struct SelectionSet {
    ids: BTreeSet<i64>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn toggle(&mut self, id: i64) {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }

    /// The "select all" checkbox is checked iff every id on the current
    /// page is selected. An empty page is never checked.
    pub fn all_selected(&self, page_ids: &[i64]) -> bool {
        !page_ids.is_empty() && page_ids.iter().all(|id| self.ids.contains(id))
    }

    /// Toggle exactly the current page's ids: if all are selected, deselect
    /// them; otherwise select them. Ids selected on other pages are never
    /// touched.
    pub fn toggle_select_all(&mut self, page_ids: &[i64]) {
        if self.all_selected(page_ids) {
            for id in page_ids {
                self.ids.remove(id);
            }
        } else {
            self.ids.extend(page_ids.iter().copied());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.ids.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_membership() {
        let mut sel = SelectionSet::new();
        sel.toggle(7);
        assert!(sel.contains(7));
        sel.toggle(7);
        assert!(!sel.contains(7));
    }

    #[test]
    fn select_all_adds_exactly_the_page() {
        let mut sel = SelectionSet::new();
        // ids 11..=15 were selected on another page earlier
        for id in 11..=15 {
            sel.toggle(id);
        }

        let page: Vec<i64> = (1..=10).collect();
        sel.toggle_select_all(&page);

        assert_eq!(sel.len(), 15);
        assert!(sel.all_selected(&page));
        assert!(sel.contains(13));
    }

    #[test]
    fn select_all_again_removes_only_the_page() {
        let mut sel = SelectionSet::new();
        sel.toggle(99);
        let page: Vec<i64> = (1..=10).collect();

        sel.toggle_select_all(&page);
        sel.toggle_select_all(&page);

        assert_eq!(sel.len(), 1);
        assert!(sel.contains(99));
    }

    #[test]
    fn partial_page_selection_counts_as_unchecked() {
        let mut sel = SelectionSet::new();
        let page: Vec<i64> = (1..=10).collect();
        sel.toggle(3);

        assert!(!sel.all_selected(&page));
        // toggling selects the full page, keeping 3 selected once
        sel.toggle_select_all(&page);
        assert_eq!(sel.len(), 10);
    }

    #[test]
    fn empty_page_is_never_all_selected_and_toggle_is_noop() {
        let mut sel = SelectionSet::new();
        sel.toggle(1);
        assert!(!sel.all_selected(&[]));
        sel.toggle_select_all(&[]);
        assert_eq!(sel.len(), 1);
    }
}
