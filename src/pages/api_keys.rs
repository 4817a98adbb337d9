//! Admin API-key management: list, create (with one-time secret reveal),
//! delete, and opt-in use of a key for browser-side uploads.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::admin_layout::AdminLayout;
use crate::net::types::ApiKey;
use crate::state::session::SessionState;
use crate::state::toast::Toasts;
use crate::util::credentials;
use crate::util::guard;

#[component]
pub fn ApiKeysPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<Toasts>();
    let navigate = use_navigate();

    guard::install_admin_guard(session, "/admin/api-keys", navigate);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        crate::state::session::fetch_api_keys(session).await;
    });

    let show_create = RwSignal::new(false);
    let created = RwSignal::new(None::<ApiKey>);

    let on_open_create = move |_| show_create.set(true);
    let on_cancel = Callback::new(move |()| show_create.set(false));
    let on_created = Callback::new(move |key: ApiKey| {
        show_create.set(false);
        created.set(Some(key));
    });

    view! {
        <AdminLayout>
            <div class="api-keys-page">
                <header class="api-keys-page__header">
                    <h1>"API Keys"</h1>
                    <button class="btn btn--primary" on:click=on_open_create>
                        "+ New Key"
                    </button>
                    <button
                        class="btn"
                        on:click=move |_| {
                            credentials::clear_api_key();
                            toasts.success("Upload key cleared from this browser");
                        }
                    >
                        "Clear upload key"
                    </button>
                </header>

                <Show when=move || created.get().is_some()>
                    {move || {
                        created
                            .get()
                            .map(|key| {
                                let secret = key.key.clone();
                                let on_use = move |_| {
                                    credentials::store_api_key(&secret);
                                    toasts.success("API key saved for uploads");
                                };
                                view! {
                                    <div class="key-reveal">
                                        <p class="key-reveal__hint">
                                            "Copy this key now; it will not be shown again."
                                        </p>
                                        <code class="key-reveal__value">{key.key.clone()}</code>
                                        <button class="btn" on:click=on_use>
                                            "Use for uploads from this browser"
                                        </button>
                                        <button
                                            class="btn"
                                            on:click=move |_| created.set(None)
                                        >
                                            "Dismiss"
                                        </button>
                                    </div>
                                }
                            })
                    }}
                </Show>

                <table class="key-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Description"</th>
                            <th>"Expires"</th>
                            <th>"Created"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            session
                                .get()
                                .api_keys
                                .into_iter()
                                .map(|key| {
                                    let id = key.id.clone();
                                    let on_delete = move |_| {
                                        let id = id.clone();
                                        #[cfg(feature = "hydrate")]
                                        leptos::task::spawn_local(async move {
                                            crate::state::session::remove_key(session, toasts, &id).await;
                                        });
                                        #[cfg(not(feature = "hydrate"))]
                                        let _ = id;
                                    };
                                    view! {
                                        <tr>
                                            <td>{key.name}</td>
                                            <td>{key.description.unwrap_or_default()}</td>
                                            <td>{key.expires_at.unwrap_or_else(|| "Never".to_owned())}</td>
                                            <td>{key.created_at}</td>
                                            <td>
                                                <button class="btn btn--danger" on:click=on_delete>
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </div>

            <Show when=move || show_create.get()>
                <CreateKeyDialog on_cancel=on_cancel on_created=on_created/>
            </Show>
        </AdminLayout>
    }
}

/// Modal dialog collecting the new key's name, description, and expiry.
#[component]
fn CreateKeyDialog(on_cancel: Callback<()>, on_created: Callback<ApiKey>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<Toasts>();

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let expires_at = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let name_value = name.get().trim().to_owned();
        if name_value.is_empty() {
            return;
        }
        let description_value = Some(description.get().trim().to_owned()).filter(|d| !d.is_empty());
        let expires_value = Some(expires_at.get().trim().to_owned()).filter(|e| !e.is_empty());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result =
                crate::state::session::create_key(session, toasts, &name_value, description_value, expires_value)
                    .await;
            busy.set(false);
            if let Some(key) = result {
                on_created.run(key);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (name_value, description_value, expires_value);
    };

    view! {
        <div class="dialog-backdrop">
            <form class="dialog" on:submit=on_submit>
                <h2>"Create API Key"</h2>
                <input
                    class="dialog__input"
                    type="text"
                    placeholder="Name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    class="dialog__input"
                    type="text"
                    placeholder="Description (optional)"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                />
                <input
                    class="dialog__input"
                    type="text"
                    placeholder="Expires at (optional, RFC 3339)"
                    prop:value=move || expires_at.get()
                    on:input=move |ev| expires_at.set(event_target_value(&ev))
                />
                <div class="dialog__actions">
                    <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Create"
                    </button>
                </div>
            </form>
        </div>
    }
}
