//! Public home page: master-branch summary and the paged test-run list.

use leptos::prelude::*;

use crate::components::pagination::Pagination;
use crate::components::status_badge::StatusBadge;
use crate::net::types::MasterBranchStats;
use crate::state::test_runs::TestRunsState;

fn reload(state: RwSignal<TestRunsState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        crate::state::test_runs::fetch_test_runs(state).await;
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = state;
}

#[component]
pub fn HomePage() -> impl IntoView {
    let runs = expect_context::<RwSignal<TestRunsState>>();
    let master = RwSignal::new(None::<MasterBranchStats>);

    // Initial load: list plus the master-branch banner.
    reload(runs);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Ok(stats) = crate::net::api::master_stats().await {
            master.set(Some(stats));
        }
    });

    let branch = RwSignal::new(String::new());
    let commit = RwSignal::new(String::new());
    let status = RwSignal::new("all".to_owned());

    let on_apply = move |_| {
        runs.update(|s| {
            s.filters.branch = branch.get().trim().to_owned();
            s.filters.commit_id = commit.get().trim().to_owned();
            s.filters.status = status.get();
            s.pagination.page = 1;
        });
        reload(runs);
    };

    let on_reset = move |_| {
        branch.set(String::new());
        commit.set(String::new());
        status.set("all".to_owned());
        runs.update(TestRunsState::reset_filters);
        reload(runs);
    };

    let page = Signal::derive(move || runs.get().pagination.page);
    let total_pages = Signal::derive(move || runs.get().total_pages());
    let on_prev = Callback::new(move |()| {
        runs.update(|s| s.pagination.page = s.pagination.page.saturating_sub(1).max(1));
        reload(runs);
    });
    let on_next = Callback::new(move |()| {
        runs.update(|s| s.pagination.page += 1);
        reload(runs);
    });

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1>"CI Test Results"</h1>
                <a class="home-page__admin-link" href="/admin/dashboard">"Admin"</a>
            </header>

            <Show when=move || master.get().is_some()>
                {move || {
                    master
                        .get()
                        .map(|stats| {
                            view! {
                                <section class="master-banner">
                                    <span class="master-banner__branch">{stats.branch_name.clone()}</span>
                                    <span class="master-banner__commit">{stats.commit_short_id.clone()}</span>
                                    <StatusBadge status=stats.status.clone()/>
                                    <span class="master-banner__cases">
                                        {format!(
                                            "{}/{} passed ({:.1}%)",
                                            stats.passed_cases,
                                            stats.total_cases,
                                            stats.pass_rate,
                                        )}
                                    </span>
                                </section>
                            }
                        })
                }}
            </Show>

            <div class="run-filters">
                <input
                    class="run-filters__input"
                    type="text"
                    placeholder="Branch"
                    prop:value=move || branch.get()
                    on:input=move |ev| branch.set(event_target_value(&ev))
                />
                <input
                    class="run-filters__input"
                    type="text"
                    placeholder="Commit"
                    prop:value=move || commit.get()
                    on:input=move |ev| commit.set(event_target_value(&ev))
                />
                <select
                    class="run-filters__select"
                    on:change=move |ev| status.set(event_target_value(&ev))
                >
                    <option value="all">"All statuses"</option>
                    <option value="passed">"Passed"</option>
                    <option value="failed">"Failed"</option>
                    <option value="running">"Running"</option>
                </select>
                <button class="btn btn--primary" on:click=on_apply>"Apply"</button>
                <button class="btn" on:click=on_reset>"Reset"</button>
            </div>

            <table class="run-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Project"</th>
                        <th>"Branch"</th>
                        <th>"Commit"</th>
                        <th>"Status"</th>
                        <th>"Created"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        runs.get()
                            .items
                            .into_iter()
                            .map(|run| {
                                let href = format!("/test-runs/{}", run.id);
                                let commit_short = run
                                    .commit_hash
                                    .as_deref()
                                    .map(|hash| hash.chars().take(8).collect::<String>())
                                    .unwrap_or_default();
                                view! {
                                    <tr class="run-table__row">
                                        <td><a href=href>{run.id}</a></td>
                                        <td>{run.project_name}</td>
                                        <td>{run.branch.unwrap_or_default()}</td>
                                        <td class="run-table__commit">{commit_short}</td>
                                        <td><StatusBadge status=run.status/></td>
                                        <td>{run.created_at}</td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>

            <Show when=move || runs.get().loading>
                <p class="run-table__loading">"Loading test runs..."</p>
            </Show>

            <Pagination page=page total_pages=total_pages on_prev=on_prev on_next=on_next/>
        </div>
    }
}
