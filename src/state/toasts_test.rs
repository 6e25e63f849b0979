use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let first = state.push(ToastKind::Success, "um");
    let second = state.push(ToastKind::Error, "dois");
    assert!(second > first);
    assert_eq!(state.toasts.len(), 2);
}

#[test]
fn dismiss_removes_only_the_matching_toast() {
    let mut state = ToastState::default();
    let first = state.push(ToastKind::Success, "fica");
    let second = state.push(ToastKind::Success, "fica");
    state.dismiss(first);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, second);
}

#[test]
fn dismiss_of_unknown_id_is_a_noop() {
    let mut state = ToastState::default();
    state.push(ToastKind::Error, "erro");
    state.dismiss(999);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = ToastState::default();
    let first = state.push(ToastKind::Success, "a");
    state.dismiss(first);
    let second = state.push(ToastKind::Success, "b");
    assert!(second > first);
}
