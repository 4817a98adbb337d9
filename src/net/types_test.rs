use super::*;

#[test]
fn envelope_decodes_with_payload() {
    let envelope: Envelope<LoginResponse> = serde_json::from_str(
        r#"{
            "code": 200,
            "message": "success",
            "data": {
                "token": "jwt-abc",
                "user": {
                    "id": "1",
                    "username": "admin",
                    "created_at": "2025-01-01T00:00:00Z",
                    "updated_at": "2025-01-01T00:00:00Z"
                }
            }
        }"#,
    )
    .expect("valid envelope");
    assert_eq!(envelope.code, 200);
    let data = envelope.data.expect("payload present");
    assert_eq!(data.token, "jwt-abc");
    assert_eq!(data.user.username, "admin");
}

#[test]
fn envelope_decodes_without_data_or_message() {
    let envelope: Envelope<Profile> = serde_json::from_str(r#"{"code": 200}"#).expect("valid");
    assert_eq!(envelope.code, 200);
    assert!(envelope.message.is_empty());
    assert!(envelope.data.is_none());
}

#[test]
fn test_run_list_decodes_with_defaults() {
    let list: TestRunList = serde_json::from_str(
        r#"{
            "test_runs": [
                {
                    "id": 7,
                    "project_name": "kernel",
                    "status": "passed",
                    "created_at": "2025-06-01T10:00:00Z",
                    "updated_at": "2025-06-01T10:05:00Z"
                }
            ],
            "total": 1,
            "page": 1,
            "page_size": 20
        }"#,
    )
    .expect("valid list");
    assert_eq!(list.total, 1);
    let run = &list.test_runs[0];
    assert_eq!(run.id, 7);
    assert!(run.branch.is_none());
    assert!(run.duration.is_none());
}

#[test]
fn new_api_key_omits_empty_optionals() {
    let payload = NewApiKey {
        name: "ci-uploader".to_owned(),
        description: None,
        expires_at: None,
    };
    let json = serde_json::to_value(&payload).expect("serializable");
    assert_eq!(json, serde_json::json!({ "name": "ci-uploader" }));
}

#[test]
fn new_test_run_serializes_provided_fields() {
    let payload = NewTestRun {
        project_name: "kernel".to_owned(),
        branch: Some("master".to_owned()),
        commit_hash: None,
        test_type: None,
    };
    let json = serde_json::to_value(&payload).expect("serializable");
    assert_eq!(
        json,
        serde_json::json!({ "project_name": "kernel", "branch": "master" })
    );
}
