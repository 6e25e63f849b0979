//! Transient notification queue.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fills the role of a toast library: session and page operations push
//! success/failure messages here and `components::toast_stack` renders them.
//! Ids increase monotonically so dismissal is unambiguous even when two
//! toasts carry identical text.

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

use leptos::prelude::*;

/// How long a toast stays on screen.
#[cfg(feature = "hydrate")]
const DISMISS_AFTER_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Append a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, kind, message: message.into() });
        id
    }

    /// Remove the toast with `id`; other entries are untouched.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }
}

/// Push a success toast and schedule its dismissal.
pub fn push_success(toasts: RwSignal<ToastState>, message: impl Into<String>) {
    push(toasts, ToastKind::Success, message.into());
}

/// Push an error toast and schedule its dismissal.
pub fn push_error(toasts: RwSignal<ToastState>, message: impl Into<String>) {
    push(toasts, ToastKind::Error, message.into());
}

fn push(toasts: RwSignal<ToastState>, kind: ToastKind, message: String) {
    let id = toasts.try_update(|t| t.push(kind, message)).unwrap_or_default();
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(DISMISS_AFTER_MS.into()))
            .await;
        toasts.try_update(|t| t.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}
