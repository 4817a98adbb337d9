//! Shared chrome for the admin pages: top bar, section nav, sign-out.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{self, SessionState};
use crate::util::guard;

/// Admin page wrapper with navigation and the signed-in account name.
#[component]
pub fn AdminLayout(children: Children) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let username = move || {
        session
            .get()
            .user
            .map(|user| user.username)
            .unwrap_or_default()
    };

    let on_sign_out = move |_| {
        session::logout(session);
        navigate(guard::LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <div class="admin-layout">
            <header class="admin-layout__header">
                <span class="admin-layout__title">"CI Dashboard Admin"</span>
                <nav class="admin-layout__nav">
                    <a href="/admin/dashboard">"Dashboard"</a>
                    <a href="/admin/api-keys">"API Keys"</a>
                    <a href="/admin/profile">"Profile"</a>
                </nav>
                <span class="admin-layout__spacer"></span>
                <span class="admin-layout__user">{username}</span>
                <button class="admin-layout__sign-out" on:click=on_sign_out>
                    "Sign out"
                </button>
            </header>
            <main class="admin-layout__content">{children()}</main>
        </div>
    }
}
