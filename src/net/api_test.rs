use super::*;

#[test]
fn api_key_endpoint_formats_expected_path() {
    assert_eq!(api_key_endpoint("k-9"), "/admin/api-keys/k-9");
}

#[test]
fn test_run_endpoints_format_expected_paths() {
    assert_eq!(test_run_endpoint(42), "/test-runs/42");
    assert_eq!(test_cases_endpoint(42), "/test-runs/42/test-cases");
    assert_eq!(test_files_endpoint(42), "/test-runs/42/files");
}

#[test]
fn output_file_endpoints_format_expected_paths() {
    assert_eq!(output_files_endpoint(42), "/test-runs/42/output-files");
    assert_eq!(
        output_file_endpoint(42, "f-1"),
        "/test-runs/42/output-files/f-1"
    );
}

#[test]
fn trend_endpoint_carries_day_window() {
    assert_eq!(trend_endpoint(7), "/admin/dashboard/trend?days=7");
}
