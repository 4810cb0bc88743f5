use crate::shared::list_utils::filter_list;
use crate::shared::pagination::{clamp_page, page_count, page_slice, PageSummary};
use contracts::domain::a025_receipt::aggregate::Receipt;
use leptos::prelude::*;

pub const DEFAULT_PAGE_SIZE: usize = 10;

pub const EMPTY_SEARCH_MESSAGE: &str = "No receipts found matching your search.";
pub const EMPTY_MESSAGE: &str = "No receipts found.";

#[derive(Clone, Debug)]
pub struct ReceiptListState {
    /// Snapshot from the last successful fetch
    pub items: Vec<Receipt>,
    pub search: String,
    // Клиентская пагинация, страницы с 1
    pub page: usize,
    pub page_size: usize,
    pub is_loading: bool,
    pub is_loaded: bool,
    /// Persists until the next successful fetch
    pub error: Option<String>,
    pub selected_id: Option<String>,
    pub show_details: bool,
}

impl Default for ReceiptListState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ReceiptListState {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            search: String::new(),
            page: 1,
            page_size: page_size.max(1),
            is_loading: false,
            is_loaded: false,
            error: None,
            selected_id: None,
            show_details: false,
        }
    }

    pub fn filtered(&self) -> Vec<&Receipt> {
        filter_list(self.items.iter().collect(), &self.search)
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered().len()
    }

    pub fn total_pages(&self) -> usize {
        page_count(self.filtered_count(), self.page_size)
    }

    pub fn current_page_items(&self) -> Vec<Receipt> {
        let filtered = self.filtered();
        page_slice(&filtered, self.page, self.page_size)
            .iter()
            .map(|r| (*r).clone())
            .collect()
    }

    pub fn page_summary(&self) -> PageSummary {
        PageSummary::new(self.filtered_count(), self.page, self.page_size)
    }

    pub fn empty_message(&self) -> &'static str {
        if self.search.is_empty() {
            EMPTY_MESSAGE
        } else {
            EMPTY_SEARCH_MESSAGE
        }
    }

    /// New search term; jumps back to the first page of results
    pub fn set_search(&mut self, term: String) {
        if self.search != term {
            self.search = term;
            self.page = 1;
        }
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.page = clamp_page(page, self.total_pages());
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.page + 1);
    }

    pub fn prev_page(&mut self) {
        self.go_to_page(self.page.saturating_sub(1));
    }

    pub fn begin_loading(&mut self) {
        self.is_loading = true;
    }

    /// Replace the held collection wholesale
    pub fn apply_loaded(&mut self, items: Vec<Receipt>) {
        self.items = items;
        self.is_loading = false;
        self.is_loaded = true;
        self.error = None;
        self.page = clamp_page(self.page, self.total_pages());
    }

    /// Keeps the previous snapshot, if any
    pub fn apply_failed(&mut self, message: String) {
        self.is_loading = false;
        self.error = Some(message);
    }

    pub fn open_details(&mut self, id: &str) {
        if self.items.iter().any(|r| r.id == id) {
            self.selected_id = Some(id.to_string());
            self.show_details = true;
        }
    }

    pub fn close_details(&mut self) {
        self.show_details = false;
        self.selected_id = None;
    }

    pub fn selected_receipt(&self) -> Option<Receipt> {
        let id = self.selected_id.as_deref()?;
        self.items.iter().find(|r| r.id == id).cloned()
    }
}

pub fn create_state(page_size: usize) -> RwSignal<ReceiptListState> {
    RwSignal::new(ReceiptListState::new(page_size))
}
