//! Prev/next pager for the test-run list.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use leptos::prelude::*;

/// Human-readable position label.
pub fn page_label(page: u32, total_pages: u32) -> String {
    format!("Page {page} of {total_pages}")
}

/// Pager with prev/next buttons, disabled at the range edges.
#[component]
pub fn Pagination(
    page: Signal<u32>,
    total_pages: Signal<u32>,
    on_prev: Callback<()>,
    on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="pagination">
            <button
                class="pagination__button"
                disabled=move || page.get() <= 1
                on:click=move |_| on_prev.run(())
            >
                "Previous"
            </button>
            <span class="pagination__label">
                {move || page_label(page.get(), total_pages.get())}
            </span>
            <button
                class="pagination__button"
                disabled=move || page.get() >= total_pages.get()
                on:click=move |_| on_next.run(())
            >
                "Next"
            </button>
        </div>
    }
}
