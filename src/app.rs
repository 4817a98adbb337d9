//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_host::ToastHost;
use crate::pages::{
    api_keys::ApiKeysPage, dashboard::DashboardPage, home::HomePage, login::LoginPage,
    profile::ProfilePage, test_run_detail::TestRunDetailPage,
};
use crate::state::session::SessionState;
use crate::state::test_runs::TestRunsState;
use crate::state::toast::Toasts;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
/// The session is restored from the persisted credential before the first
/// route renders, so guards see the returning user's token immediately.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::restored());
    let test_runs = RwSignal::new(TestRunsState::default());
    let toasts = Toasts::new();

    provide_context(session);
    provide_context(test_runs);
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/dashboard-client.css"/>
        <Title text="CI Dashboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route
                    path=(StaticSegment("test-runs"), ParamSegment("id"))
                    view=TestRunDetailPage
                />
                <Route path=(StaticSegment("admin"), StaticSegment("login")) view=LoginPage/>
                <Route
                    path=(StaticSegment("admin"), StaticSegment("dashboard"))
                    view=DashboardPage
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("api-keys"))
                    view=ApiKeysPage
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("profile"))
                    view=ProfilePage
                />
            </Routes>
        </Router>

        <ToastHost/>
    }
}
