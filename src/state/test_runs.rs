//! Test-run list/detail state for the public views.
//!
//! DESIGN
//! ======
//! The list is always a wholesale copy of the last successful server
//! response; pagination and filters only shape the next query, never the
//! cached rows. Fetch failures are logged by the pipeline, not toasted;
//! they load in the background on page entry.

#[cfg(test)]
#[path = "test_runs_test.rs"]
mod test_runs_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::{TestCase, TestFile, TestRun};

/// Default page size for the run list.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Current page selection, 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// User-selected list filters. Empty fields are omitted from the query;
/// `status` uses `"all"` as its no-filter sentinel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestRunFilters {
    pub branch: String,
    pub commit_id: String,
    pub start_time: String,
    pub end_time: String,
    pub status: String,
    pub test_case_name: String,
}

impl Default for TestRunFilters {
    fn default() -> Self {
        Self {
            branch: String::new(),
            commit_id: String::new(),
            start_time: String::new(),
            end_time: String::new(),
            status: "all".to_owned(),
            test_case_name: String::new(),
        }
    }
}

/// Shared state for the run list and the currently open run.
#[derive(Clone, Debug, Default)]
pub struct TestRunsState {
    pub items: Vec<TestRun>,
    pub total: i64,
    pub pagination: Pagination,
    pub filters: TestRunFilters,
    pub loading: bool,
    pub current: Option<TestRun>,
    pub current_cases: Vec<TestCase>,
    pub current_files: Vec<TestFile>,
}

impl TestRunsState {
    /// Replace the list with a full server response.
    pub fn apply_page(&mut self, items: Vec<TestRun>, total: i64) {
        self.items = items;
        self.total = total;
    }

    /// Clear all filters and return to the first page.
    pub fn reset_filters(&mut self) {
        self.filters = TestRunFilters::default();
        self.pagination.page = 1;
    }

    /// Number of pages implied by `total`, at least 1.
    pub fn total_pages(&self) -> u32 {
        let size = i64::from(self.pagination.page_size.max(1));
        let pages = (self.total + size - 1) / size;
        u32::try_from(pages.max(1)).unwrap_or(1)
    }
}

/// Build the `GET /test-runs` query string from the current selection.
pub fn list_query(filters: &TestRunFilters, pagination: Pagination) -> String {
    let mut query = format!(
        "?page={}&page_size={}",
        pagination.page, pagination.page_size
    );
    push_param(&mut query, "branch", &filters.branch);
    push_param(&mut query, "commit_id", &filters.commit_id);
    push_param(&mut query, "start_time", &filters.start_time);
    push_param(&mut query, "end_time", &filters.end_time);
    if !filters.status.is_empty() && filters.status != "all" {
        push_param(&mut query, "status", &filters.status);
    }
    push_param(&mut query, "test_case_name", &filters.test_case_name);
    query
}

fn push_param(query: &mut String, key: &str, value: &str) {
    if !value.is_empty() {
        query.push('&');
        query.push_str(key);
        query.push('=');
        query.push_str(&urlencoding::encode(value));
    }
}

/// Fetch the run list for the current filters and pagination.
pub async fn fetch_test_runs(state: RwSignal<TestRunsState>) {
    let query = {
        let snapshot = state.get_untracked();
        list_query(&snapshot.filters, snapshot.pagination)
    };
    state.update(|s| s.loading = true);
    if let Ok(list) = api::test_runs(&query).await {
        state.update(|s| s.apply_page(list.test_runs, list.total));
    }
    state.update(|s| s.loading = false);
}

/// Fetch one run plus its cases and output files.
pub async fn fetch_test_run(state: RwSignal<TestRunsState>, id: i64) {
    state.update(|s| s.loading = true);
    if let Ok(run) = api::test_run(id).await {
        state.update(|s| s.current = Some(run));
    }
    if let Ok(cases) = api::test_cases(id).await {
        state.update(|s| s.current_cases = cases);
    }
    if let Ok(files) = api::test_files(id).await {
        state.update(|s| s.current_files = files);
    }
    state.update(|s| s.loading = false);
}
