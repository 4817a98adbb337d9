//! Public test-run detail page: summary, test cases, output files.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::status_badge::StatusBadge;
use crate::state::test_runs::TestRunsState;
use crate::state::toast::Toasts;

/// Trigger a browser download for fetched file bytes.
#[cfg(feature = "hydrate")]
fn save_bytes(filename: &str, bytes: &[u8]) {
    use wasm_bindgen::JsCast;

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let Ok(blob) = web_sys::Blob::new_with_u8_array_sequence(&parts) else {
        return;
    };
    let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
        return;
    };
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Ok(element) = document.create_element("a") {
            if let Ok(anchor) = element.dyn_into::<web_sys::HtmlAnchorElement>() {
                anchor.set_href(&url);
                anchor.set_download(filename);
                anchor.click();
            }
        }
    }
    let _ = web_sys::Url::revoke_object_url(&url);
}

#[component]
pub fn TestRunDetailPage() -> impl IntoView {
    let runs = expect_context::<RwSignal<TestRunsState>>();
    let toasts = expect_context::<Toasts>();
    let params = use_params_map();

    let run_id = move || {
        params
            .get()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok())
    };

    // Load (and reload on param change); effects only run in the browser.
    Effect::new(move || {
        if let Some(id) = run_id() {
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                crate::state::test_runs::fetch_test_run(runs, id).await;
            });
            #[cfg(not(feature = "hydrate"))]
            let _ = id;
        }
    });

    let upload_input = NodeRef::<leptos::html::Input>::new();

    let on_upload = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let Some(id) = run_id() else {
                return;
            };
            let Some(input) = upload_input.get_untracked() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                toasts.error("Choose a file first");
                return;
            };
            let Ok(form) = web_sys::FormData::new() else {
                return;
            };
            let _ = form.append_with_blob("file", &file);
            leptos::task::spawn_local(async move {
                if crate::net::api::upload_file(toasts, id, &form).await.is_ok() {
                    toasts.success("File uploaded");
                    crate::state::test_runs::fetch_test_run(runs, id).await;
                }
            });
        }
    };

    view! {
        <div class="run-detail-page">
            <a class="run-detail-page__back" href="/">"< Back to results"</a>

            {move || {
                runs.get()
                    .current
                    .map(|run| {
                        view! {
                            <section class="run-summary">
                                <h1>{format!("Run #{}", run.id)}</h1>
                                <div class="run-summary__meta">
                                    <span>{run.project_name}</span>
                                    <span>{run.branch.unwrap_or_default()}</span>
                                    <span class="run-summary__commit">
                                        {run.commit_hash.unwrap_or_default()}
                                    </span>
                                    <StatusBadge status=run.status/>
                                    <span>
                                        {run
                                            .duration
                                            .map(|secs| format!("{secs:.1}s"))
                                            .unwrap_or_default()}
                                    </span>
                                </div>
                            </section>
                        }
                    })
            }}

            <section class="run-cases">
                <h2>"Test Cases"</h2>
                <table class="case-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Status"</th>
                            <th>"Duration"</th>
                            <th>"Error"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            runs.get()
                                .current_cases
                                .into_iter()
                                .map(|case| {
                                    view! {
                                        <tr>
                                            <td>{case.name}</td>
                                            <td><StatusBadge status=case.status/></td>
                                            <td>
                                                {case
                                                    .duration
                                                    .map(|secs| format!("{secs:.2}s"))
                                                    .unwrap_or_default()}
                                            </td>
                                            <td class="case-table__error">
                                                {case.error_msg.unwrap_or_default()}
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </section>

            <section class="run-files">
                <h2>"Output Files"</h2>
                <ul class="file-list">
                    {move || {
                        runs.get()
                            .current_files
                            .into_iter()
                            .map(|file| {
                                let file_id = file.id.clone();
                                let filename = file.filename.clone();
                                let on_download = move |_| {
                                    #[cfg(feature = "hydrate")]
                                    {
                                        let Some(id) = run_id() else {
                                            return;
                                        };
                                        let file_id = file_id.clone();
                                        let filename = filename.clone();
                                        leptos::task::spawn_local(async move {
                                            if let Ok(bytes) = crate::net::api::download_file(
                                                    toasts, id, &file_id,
                                                )
                                                .await
                                            {
                                                save_bytes(&filename, &bytes);
                                            }
                                        });
                                    }
                                };
                                view! {
                                    <li class="file-list__item">
                                        <span class="file-list__name">{file.filename}</span>
                                        <span class="file-list__size">
                                            {format!("{} bytes", file.size)}
                                        </span>
                                        <button class="btn" on:click=on_download>
                                            "Download"
                                        </button>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
                <div class="run-files__upload">
                    <input type="file" node_ref=upload_input/>
                    <button class="btn" on:click=on_upload>"Upload output file"</button>
                </div>
            </section>
        </div>
    }
}
