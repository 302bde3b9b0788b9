//! Transient notification queue.
//!
//! Fetch and submit failures surface here instead of crashing a screen.
//! Toasts are dismissed by click and the queue is capped, oldest first.

use dioxus::prelude::*;

const MAX_TOASTS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct ToastState {
    next_id: u64,
    pub toasts: Vec<Toast>,
}

impl ToastState {
    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.next_id += 1;
        self.toasts.push(Toast {
            id: self.next_id,
            level,
            message: message.into(),
        });
        if self.toasts.len() > MAX_TOASTS {
            self.toasts.remove(0);
        }
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }
}

pub type ToastStore = Signal<ToastState>;

pub trait ToastStoreExt {
    fn success(self, message: impl Into<String>);
    fn error(self, message: impl Into<String>);
    fn dismiss(self, id: u64);
}

impl ToastStoreExt for ToastStore {
    fn success(mut self, message: impl Into<String>) {
        self.write().push(ToastLevel::Success, message);
    }

    fn error(mut self, message: impl Into<String>) {
        self.write().push(ToastLevel::Error, message);
    }

    fn dismiss(mut self, id: u64) {
        self.write().dismiss(id);
    }
}

#[cfg(test)]
mod tests {
    use super::{ToastLevel, ToastState};

    /// Tests that the queue drops its oldest entry once full.
    ///
    /// Expected: queue stays at the cap, first message gone.
    #[test]
    fn caps_queue_dropping_oldest() {
        let mut state = ToastState::default();
        for n in 0..6 {
            state.push(ToastLevel::Error, format!("toast {n}"));
        }

        assert_eq!(state.toasts.len(), 4);
        assert_eq!(state.toasts[0].message, "toast 2");
    }

    /// Tests dismissal by id.
    ///
    /// Expected: only the dismissed toast is removed.
    #[test]
    fn dismisses_by_id() {
        let mut state = ToastState::default();
        state.push(ToastLevel::Success, "keep");
        state.push(ToastLevel::Error, "drop");
        let drop_id = state.toasts[1].id;

        state.dismiss(drop_id);

        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].message, "keep");
    }
}
