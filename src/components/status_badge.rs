//! Colored badge for test-run and test-case statuses.

#[cfg(test)]
#[path = "status_badge_test.rs"]
mod status_badge_test;

use leptos::prelude::*;

/// CSS modifier class for a server-reported status string.
pub fn status_modifier(status: &str) -> &'static str {
    match status.to_ascii_lowercase().as_str() {
        "passed" | "success" | "completed" => "status-badge--passed",
        "failed" | "error" => "status-badge--failed",
        "running" | "pending" | "in_progress" => "status-badge--running",
        "skipped" => "status-badge--skipped",
        _ => "status-badge--unknown",
    }
}

/// Inline badge showing `status` with a per-status color.
#[component]
pub fn StatusBadge(status: String) -> impl IntoView {
    let class = format!("status-badge {}", status_modifier(&status));

    view! { <span class=class>{status}</span> }
}
