//! Admin login page.
//!
//! Carries an optional `redirect` query parameter placed there by the
//! route guard; a successful sign-in returns the user to the page they
//! originally asked for.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::state::session::SessionState;
use crate::state::toast::Toasts;
use crate::util::guard;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<Toasts>();
    let navigate = use_navigate();
    let query = use_query_map();

    // Already-authenticated visitors bounce straight to the dashboard.
    guard::install_login_guard(session, navigate.clone());

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let username_value = username.get().trim().to_owned();
        let password_value = password.get();
        if username_value.is_empty() || password_value.is_empty() {
            info.set("Enter both username and password.".to_owned());
            return;
        }
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let redirect = query.get_untracked().get("redirect");
            leptos::task::spawn_local(async move {
                if crate::state::session::login(session, toasts, &username_value, &password_value).await {
                    navigate(
                        &guard::post_login_target(redirect),
                        leptos_router::NavigateOptions::default(),
                    );
                } else {
                    info.set("Sign-in failed. Check your credentials.".to_owned());
                    busy.set(false);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&username_value, &password_value);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"CI Dashboard"</h1>
                <p class="login-card__subtitle">"Administrator Sign-in"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
