use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastLevel::Success, "one".to_owned());
    let b = state.push(ToastLevel::Error, "two".to_owned());
    assert!(b > a);
    assert_eq!(state.entries.len(), 2);
}

#[test]
fn push_evicts_oldest_past_cap() {
    let mut state = ToastState::default();
    for n in 0..=TOAST_CAP {
        state.push(ToastLevel::Error, format!("toast {n}"));
    }
    assert_eq!(state.entries.len(), TOAST_CAP);
    assert_eq!(state.entries[0].text, "toast 1");
}

#[test]
fn dismiss_removes_only_matching_id() {
    let mut state = ToastState::default();
    let a = state.push(ToastLevel::Success, "keep".to_owned());
    let b = state.push(ToastLevel::Error, "drop".to_owned());
    state.dismiss(b);
    assert_eq!(state.entries.len(), 1);
    assert_eq!(state.entries[0].id, a);
}

#[test]
fn dismiss_unknown_id_is_a_no_op() {
    let mut state = ToastState::default();
    state.push(ToastLevel::Success, "only".to_owned());
    state.dismiss(999);
    assert_eq!(state.entries.len(), 1);
}
