use super::*;

#[test]
fn passed_variants_map_to_passed_modifier() {
    assert_eq!(status_modifier("passed"), "status-badge--passed");
    assert_eq!(status_modifier("SUCCESS"), "status-badge--passed");
    assert_eq!(status_modifier("completed"), "status-badge--passed");
}

#[test]
fn failed_and_running_variants_map_to_their_modifiers() {
    assert_eq!(status_modifier("failed"), "status-badge--failed");
    assert_eq!(status_modifier("running"), "status-badge--running");
    assert_eq!(status_modifier("skipped"), "status-badge--skipped");
}

#[test]
fn unknown_status_gets_fallback_modifier() {
    assert_eq!(status_modifier("mystery"), "status-badge--unknown");
}
