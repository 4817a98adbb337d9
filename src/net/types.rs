//! Wire DTOs for the dashboard REST API.
//!
//! DESIGN
//! ======
//! These types mirror the server's response payloads field-for-field so
//! serde round-trips stay lossless. Every endpoint wraps its payload in
//! [`Envelope`]; the request pipeline strips the wrapper before callers
//! see the data.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Uniform response wrapper returned by every endpoint.
///
/// `code == 200` is the sole success sentinel; any other value is a
/// logical failure regardless of HTTP status. `data` is omitted by the
/// server for operations with no payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<T>,
}

/// Admin account profile. Replaced wholesale on each fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Payload of a successful `POST /admin/login`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: Profile,
}

/// Credentials submitted to `POST /admin/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Password-change payload for `PUT /admin/profile/password`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordChange {
    pub old_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

/// An upload credential for CI agents, managed on the admin pages.
///
/// `key` carries the secret value only in the creation response; list
/// responses return it masked.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKey {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub key: String,
    #[serde(default)]
    pub expires_at: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Creation payload for `POST /admin/api-keys`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewApiKey {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

/// A single CI test run as returned by the public list/detail endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TestRun {
    pub id: i64,
    pub project_name: String,
    #[serde(default)]
    pub branch: Option<String>,
    #[serde(default)]
    pub commit_hash: Option<String>,
    pub status: String,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Paged payload of `GET /test-runs`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TestRunList {
    #[serde(default)]
    pub test_runs: Vec<TestRun>,
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub page: i64,
    #[serde(default)]
    pub page_size: i64,
}

/// Submission payload for `POST /test-runs` (API-key authenticated).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTestRun {
    pub project_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_type: Option<String>,
}

/// One test case inside a run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    pub id: String,
    pub name: String,
    pub status: String,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub error_msg: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// An output file attached to a run (logs, serial console dumps, ...).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestFile {
    pub id: String,
    pub filename: String,
    #[serde(default)]
    pub filepath: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub file_type: String,
    #[serde(default)]
    pub created_at: String,
}

/// Aggregate counters for the admin dashboard, with previous-period
/// values for delta display.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_tests: i64,
    pub today_runs: i64,
    pub success_rate: f64,
    pub avg_duration: f64,
    #[serde(default)]
    pub total_tests_prev: i64,
    #[serde(default)]
    pub today_runs_prev: i64,
    #[serde(default)]
    pub success_rate_prev: f64,
    #[serde(default)]
    pub avg_duration_prev: f64,
    #[serde(default)]
    pub success_count: i64,
    #[serde(default)]
    pub failed_count: i64,
    #[serde(default)]
    pub skipped_count: i64,
}

/// One point of the runs-per-day trend series.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: String,
    pub count: i64,
}

/// Latest master-branch run summary shown on the public home page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MasterBranchStats {
    pub test_run_id: i64,
    pub branch_name: String,
    pub commit_id: String,
    #[serde(default)]
    pub commit_short_id: String,
    #[serde(default)]
    pub test_type: String,
    pub status: String,
    #[serde(default)]
    pub created_at: String,
    pub total_cases: i64,
    pub passed_cases: i64,
    pub failed_cases: i64,
    pub skipped_cases: i64,
    pub pass_rate: f64,
    #[serde(default)]
    pub duration: f64,
}
