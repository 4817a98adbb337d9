//! Fixed overlay rendering the toast queue.

use leptos::prelude::*;

use crate::state::toast::{ToastLevel, Toasts};

/// Renders every queued toast; entries expire on their own timers and a
/// click dismisses early.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<Toasts>();

    view! {
        <div class="toast-host">
            {move || {
                toasts
                    .0
                    .get()
                    .entries
                    .into_iter()
                    .map(|toast| {
                        let class = match toast.level {
                            ToastLevel::Success => "toast toast--success",
                            ToastLevel::Error => "toast toast--error",
                        };
                        let id = toast.id;
                        view! {
                            <div
                                class=class
                                on:click=move |_| toasts.0.update(|state| state.dismiss(id))
                            >
                                {toast.text}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
