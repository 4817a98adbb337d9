//! Admin profile page: account details and password change.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::admin_layout::AdminLayout;
use crate::state::session::SessionState;
use crate::state::toast::Toasts;
use crate::util::guard;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<Toasts>();
    let navigate = use_navigate();

    guard::install_admin_guard(session, "/admin/profile", navigate);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        crate::state::session::fetch_profile(session).await;
    });

    let old_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let old_value = old_password.get();
        let new_value = new_password.get();
        let confirm_value = confirm_password.get();
        if old_value.is_empty() || new_value.is_empty() || confirm_value.is_empty() {
            toasts.error("Fill in all three password fields");
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let changed =
                crate::state::session::change_password(session, toasts, &old_value, &new_value, &confirm_value)
                    .await;
            busy.set(false);
            if changed {
                old_password.set(String::new());
                new_password.set(String::new());
                confirm_password.set(String::new());
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (old_value, new_value, confirm_value);
    };

    view! {
        <AdminLayout>
            <div class="profile-page">
                <h1>"Profile"</h1>

                <section class="profile-card">
                    {move || {
                        session
                            .get()
                            .user
                            .map(|user| {
                                view! {
                                    <dl class="profile-card__fields">
                                        <dt>"Username"</dt>
                                        <dd>{user.username}</dd>
                                        <dt>"Account created"</dt>
                                        <dd>{user.created_at}</dd>
                                        <dt>"Last updated"</dt>
                                        <dd>{user.updated_at}</dd>
                                    </dl>
                                }
                            })
                    }}
                </section>

                <section class="password-form">
                    <h2>"Change Password"</h2>
                    <form on:submit=on_submit>
                        <input
                            class="password-form__input"
                            type="password"
                            placeholder="Current password"
                            prop:value=move || old_password.get()
                            on:input=move |ev| old_password.set(event_target_value(&ev))
                        />
                        <input
                            class="password-form__input"
                            type="password"
                            placeholder="New password"
                            prop:value=move || new_password.get()
                            on:input=move |ev| new_password.set(event_target_value(&ev))
                        />
                        <input
                            class="password-form__input"
                            type="password"
                            placeholder="Confirm new password"
                            prop:value=move || confirm_password.get()
                            on:input=move |ev| confirm_password.set(event_target_value(&ev))
                        />
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            "Update password"
                        </button>
                    </form>
                </section>
            </div>
        </AdminLayout>
    }
}
