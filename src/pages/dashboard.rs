//! Admin dashboard: aggregate counters and the runs-per-day trend.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::admin_layout::AdminLayout;
use crate::net::types::{DashboardStats, TrendPoint};
use crate::state::session::SessionState;
use crate::util::guard;

/// Days of history shown in the trend strip.
const TREND_DAYS: u32 = 7;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    guard::install_admin_guard(session, "/admin/dashboard", navigate);

    let stats = RwSignal::new(DashboardStats::default());
    let trend = RwSignal::new(Vec::<TrendPoint>::new());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        crate::state::session::fetch_profile(session).await;
        if let Ok(loaded) = crate::net::api::dashboard_stats().await {
            stats.set(loaded);
        }
        if let Ok(points) = crate::net::api::dashboard_trend(TREND_DAYS).await {
            trend.set(points);
        }
    });

    view! {
        <AdminLayout>
            <div class="dashboard-page">
                <h1>"Dashboard"</h1>

                <div class="stat-tiles">
                    <StatTile
                        label="Total tests"
                        value=Signal::derive(move || stats.get().total_tests.to_string())
                    />
                    <StatTile
                        label="Runs today"
                        value=Signal::derive(move || stats.get().today_runs.to_string())
                    />
                    <StatTile
                        label="Success rate"
                        value=Signal::derive(move || format!("{:.1}%", stats.get().success_rate))
                    />
                    <StatTile
                        label="Avg duration"
                        value=Signal::derive(move || format!("{:.1}s", stats.get().avg_duration))
                    />
                </div>

                <section class="trend">
                    <h2>{format!("Runs, last {TREND_DAYS} days")}</h2>
                    <ul class="trend__bars">
                        {move || {
                            let points = trend.get();
                            let peak = points.iter().map(|p| p.count).max().unwrap_or(1).max(1);
                            points
                                .into_iter()
                                .map(|point| {
                                    let height = (point.count * 100 / peak).max(2);
                                    view! {
                                        <li class="trend__bar">
                                            <span
                                                class="trend__fill"
                                                style=format!("height: {height}%")
                                            ></span>
                                            <span class="trend__date">{point.date}</span>
                                            <span class="trend__count">{point.count}</span>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </section>

                <section class="outcome-split">
                    <span class="outcome-split__passed">
                        {move || format!("{} passed", stats.get().success_count)}
                    </span>
                    <span class="outcome-split__failed">
                        {move || format!("{} failed", stats.get().failed_count)}
                    </span>
                    <span class="outcome-split__skipped">
                        {move || format!("{} skipped", stats.get().skipped_count)}
                    </span>
                </section>
            </div>
        </AdminLayout>
    }
}

/// One labeled number on the dashboard.
#[component]
fn StatTile(label: &'static str, value: Signal<String>) -> impl IntoView {
    view! {
        <div class="stat-tile">
            <span class="stat-tile__value">{move || value.get()}</span>
            <span class="stat-tile__label">{label}</span>
        </div>
    }
}
