//! Typed wrappers for the dashboard REST endpoints.
//!
//! Each wrapper names one endpoint, shapes its payload, and picks the
//! notification mode: user-triggered mutations toast through the
//! pipeline, background reads log only. List payloads default to empty
//! when the server omits `data`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::request::{self, ApiError, Notify};
use super::types::{
    ApiKey, DashboardStats, LoginRequest, LoginResponse, MasterBranchStats, NewApiKey, NewTestRun,
    PasswordChange, Profile, TestCase, TestFile, TestRun, TestRunList, TrendPoint,
};
use crate::state::toast::Toasts;

fn api_key_endpoint(id: &str) -> String {
    format!("/admin/api-keys/{id}")
}

fn test_run_endpoint(id: i64) -> String {
    format!("/test-runs/{id}")
}

fn test_cases_endpoint(id: i64) -> String {
    format!("/test-runs/{id}/test-cases")
}

fn test_files_endpoint(id: i64) -> String {
    format!("/test-runs/{id}/files")
}

fn output_files_endpoint(run_id: i64) -> String {
    format!("/test-runs/{run_id}/output-files")
}

fn output_file_endpoint(run_id: i64, file_id: &str) -> String {
    format!("/test-runs/{run_id}/output-files/{file_id}")
}

fn trend_endpoint(days: u32) -> String {
    format!("/admin/dashboard/trend?days={days}")
}

/// `POST /admin/login`.
pub async fn admin_login(
    toasts: Toasts,
    username: &str,
    password: &str,
) -> Result<LoginResponse, ApiError> {
    let payload = LoginRequest {
        username: username.to_owned(),
        password: password.to_owned(),
    };
    request::post(Notify::Toast(toasts), "/admin/login", &payload)
        .await
        .and_then(request::require_data)
}

/// `GET /admin/profile`. Background fetch; failures are logged, not toasted.
pub async fn profile() -> Result<Profile, ApiError> {
    request::get(Notify::Log, "/admin/profile")
        .await
        .and_then(request::require_data)
}

/// `PUT /admin/profile/password`.
pub async fn update_password(toasts: Toasts, change: &PasswordChange) -> Result<(), ApiError> {
    request::put::<_, serde_json::Value>(Notify::Toast(toasts), "/admin/profile/password", change)
        .await
        .map(|_| ())
}

/// `GET /admin/api-keys`. Background fetch.
pub async fn api_keys() -> Result<Vec<ApiKey>, ApiError> {
    request::get(Notify::Log, "/admin/api-keys")
        .await
        .map(Option::unwrap_or_default)
}

/// `POST /admin/api-keys`.
pub async fn create_api_key(toasts: Toasts, payload: &NewApiKey) -> Result<ApiKey, ApiError> {
    request::post(Notify::Toast(toasts), "/admin/api-keys", payload)
        .await
        .and_then(request::require_data)
}

/// `DELETE /admin/api-keys/:id`.
pub async fn delete_api_key(toasts: Toasts, id: &str) -> Result<(), ApiError> {
    request::delete::<serde_json::Value>(Notify::Toast(toasts), &api_key_endpoint(id))
        .await
        .map(|_| ())
}

/// `GET /admin/dashboard/stats`. Background fetch.
pub async fn dashboard_stats() -> Result<DashboardStats, ApiError> {
    request::get(Notify::Log, "/admin/dashboard/stats")
        .await
        .and_then(request::require_data)
}

/// `GET /admin/dashboard/trend?days=N`. Background fetch.
pub async fn dashboard_trend(days: u32) -> Result<Vec<TrendPoint>, ApiError> {
    request::get(Notify::Log, &trend_endpoint(days))
        .await
        .map(Option::unwrap_or_default)
}

/// `GET /test-runs?<query>`. Background fetch; `query` comes from
/// [`crate::state::test_runs::list_query`].
pub async fn test_runs(query: &str) -> Result<TestRunList, ApiError> {
    request::get(Notify::Log, &format!("/test-runs{query}"))
        .await
        .and_then(request::require_data)
}

/// `GET /test-runs/:id`. Background fetch.
pub async fn test_run(id: i64) -> Result<TestRun, ApiError> {
    request::get(Notify::Log, &test_run_endpoint(id))
        .await
        .and_then(request::require_data)
}

/// `POST /test-runs` (API-key authenticated, used by CI agents).
pub async fn create_test_run(toasts: Toasts, payload: &NewTestRun) -> Result<TestRun, ApiError> {
    request::post(Notify::Toast(toasts), "/test-runs", payload)
        .await
        .and_then(request::require_data)
}

/// `GET /test-runs/:id/test-cases`. Background fetch.
pub async fn test_cases(id: i64) -> Result<Vec<TestCase>, ApiError> {
    request::get(Notify::Log, &test_cases_endpoint(id))
        .await
        .map(Option::unwrap_or_default)
}

/// `GET /test-runs/:id/files`. Background fetch.
pub async fn test_files(id: i64) -> Result<Vec<TestFile>, ApiError> {
    request::get(Notify::Log, &test_files_endpoint(id))
        .await
        .map(Option::unwrap_or_default)
}

/// `GET /stats/master`. Background fetch for the public home banner.
pub async fn master_stats() -> Result<MasterBranchStats, ApiError> {
    request::get(Notify::Log, "/stats/master")
        .await
        .and_then(request::require_data)
}

/// `GET /test-runs/:id/output-files/:fileId`, raw file download.
pub async fn download_file(toasts: Toasts, run_id: i64, file_id: &str) -> Result<Vec<u8>, ApiError> {
    request::get_bytes(Notify::Toast(toasts), &output_file_endpoint(run_id, file_id)).await
}

/// `POST /test-runs/:id/output-files`, multipart file upload
/// (API-key authenticated).
#[cfg(feature = "hydrate")]
pub async fn upload_file(
    toasts: Toasts,
    run_id: i64,
    form: &web_sys::FormData,
) -> Result<(), ApiError> {
    request::post_form::<serde_json::Value>(
        Notify::Toast(toasts),
        &output_files_endpoint(run_id),
        form,
    )
    .await
    .map(|_| ())
}
