//! Transient user notifications ("toasts").
//!
//! DESIGN
//! ======
//! The request pipeline and the session operations report outcomes here
//! instead of talking to a concrete widget library. The queue is bounded
//! so a burst of failing requests cannot grow memory without limit; each
//! entry auto-expires a few seconds after being pushed.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

/// Maximum number of toasts retained at once; older entries are evicted.
pub const TOAST_CAP: usize = 5;

/// How long a toast stays visible.
#[cfg(feature = "hydrate")]
const TOAST_TTL_MS: u32 = 4_000;

/// Visual category of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

/// One visible notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub text: String,
}

/// Queue of visible notifications, newest last.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub entries: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Append a toast, evicting the oldest entry past [`TOAST_CAP`].
    /// Returns the id assigned to the new entry.
    pub fn push(&mut self, level: ToastLevel, text: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        if self.entries.len() >= TOAST_CAP {
            self.entries.remove(0);
        }
        self.entries.push(Toast { id, level, text });
        id
    }

    /// Remove the toast with `id`, if still present.
    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|t| t.id != id);
    }
}

/// Shared handle to the toast queue, provided as context at the app root.
#[derive(Clone, Copy)]
pub struct Toasts(pub RwSignal<ToastState>);

impl Toasts {
    pub fn new() -> Self {
        Self(RwSignal::new(ToastState::default()))
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(ToastLevel::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(ToastLevel::Error, text.into());
    }

    fn show(&self, level: ToastLevel, text: String) {
        let signal = self.0;
        let mut id = 0;
        signal.update(|state| id = state.push(level, text));

        // Schedule expiry. The signal may already be disposed by the time
        // the timer fires, hence try_update.
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_TTL_MS).await;
            let _ = signal.try_update(|state| state.dismiss(id));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}
