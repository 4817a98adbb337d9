use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_pagination_starts_on_first_page() {
    let pagination = Pagination::default();
    assert_eq!(pagination.page, 1);
    assert_eq!(pagination.page_size, DEFAULT_PAGE_SIZE);
}

#[test]
fn default_filters_use_all_status_sentinel() {
    let filters = TestRunFilters::default();
    assert_eq!(filters.status, "all");
    assert!(filters.branch.is_empty());
}

// =============================================================
// Query construction
// =============================================================

#[test]
fn list_query_carries_pagination_only_by_default() {
    let query = list_query(&TestRunFilters::default(), Pagination::default());
    assert_eq!(query, "?page=1&page_size=20");
}

#[test]
fn list_query_includes_non_empty_filters() {
    let filters = TestRunFilters {
        branch: "master".to_owned(),
        commit_id: "abc123".to_owned(),
        status: "failed".to_owned(),
        ..TestRunFilters::default()
    };
    let query = list_query(&filters, Pagination { page: 2, page_size: 50 });
    assert_eq!(
        query,
        "?page=2&page_size=50&branch=master&commit_id=abc123&status=failed"
    );
}

#[test]
fn list_query_skips_all_status_sentinel() {
    let filters = TestRunFilters {
        status: "all".to_owned(),
        ..TestRunFilters::default()
    };
    assert!(!list_query(&filters, Pagination::default()).contains("status="));
}

#[test]
fn list_query_percent_encodes_values() {
    let filters = TestRunFilters {
        branch: "feature/new parser".to_owned(),
        ..TestRunFilters::default()
    };
    let query = list_query(&filters, Pagination::default());
    assert!(query.contains("branch=feature%2Fnew%20parser"));
}

// =============================================================
// State transitions
// =============================================================

#[test]
fn apply_page_replaces_items_wholesale() {
    let mut state = TestRunsState::default();
    state.items = vec![];
    state.apply_page(Vec::new(), 0);
    assert!(state.items.is_empty());
    assert_eq!(state.total, 0);
}

#[test]
fn reset_filters_returns_to_first_page() {
    let mut state = TestRunsState {
        pagination: Pagination { page: 5, page_size: 20 },
        filters: TestRunFilters {
            branch: "master".to_owned(),
            ..TestRunFilters::default()
        },
        ..TestRunsState::default()
    };
    state.reset_filters();
    assert_eq!(state.pagination.page, 1);
    assert_eq!(state.filters, TestRunFilters::default());
}

#[test]
fn total_pages_rounds_up_and_never_hits_zero() {
    let mut state = TestRunsState::default();
    assert_eq!(state.total_pages(), 1);
    state.total = 41;
    assert_eq!(state.total_pages(), 3);
    state.total = 40;
    assert_eq!(state.total_pages(), 2);
}
