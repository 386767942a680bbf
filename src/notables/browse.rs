//! UI state owned by a front-end: active filters, the grid cursor, the
//! selected personality and the display language.
//!
//! Invariant: any change to the filter output moves the cursor back to page 1.
//! That covers filter edits and records being added, replaced or removed. The
//! selection is independent of the filter, so a selected person stays
//! selected even when the grid no longer shows them.

use crate::error::Result;
use crate::filter::{FilterField, FilterSpec};
use crate::model::Language;
use crate::paginate::PageCursor;

#[derive(Debug, Clone, Default)]
pub struct BrowseState {
    filter: FilterSpec,
    cursor: PageCursor,
    selected: Option<u32>,
    pub language: Language,
}

impl BrowseState {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    pub fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    pub fn page(&self) -> usize {
        self.cursor.page()
    }

    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    /// Updates one filter field. On success the cursor returns to page 1;
    /// a rejected value leaves both filter and cursor as they were.
    pub fn set_filter(&mut self, field: FilterField, value: &str) -> Result<()> {
        self.filter.set(field, value)?;
        self.cursor.reset();
        Ok(())
    }

    pub fn reset_filters(&mut self) {
        self.filter.reset();
        self.cursor.reset();
    }

    /// Records were added, replaced or removed; the current page may be gone.
    pub fn collection_changed(&mut self) {
        self.cursor.reset();
    }

    pub fn next_page(&mut self, total_pages: usize) {
        self.cursor.next(total_pages);
    }

    pub fn previous_page(&mut self) {
        self.cursor.previous();
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.cursor.go_to(page);
    }

    pub fn select(&mut self, id: u32) {
        self.selected = Some(id);
    }

    /// Back to the grid. Also used when leaving for the admin or login views.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn is_selected(&self, id: u32) -> bool {
        self.selected == Some(id)
    }
}
