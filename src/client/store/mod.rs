pub mod auth;
pub mod toast;

pub use auth::{admin_gate, AuthState, AuthStore, AuthStoreExt};
pub use toast::{ToastLevel, ToastState, ToastStore, ToastStoreExt};
