pub mod actors;
pub mod dashboard;
pub mod dramas;
pub mod genres;
pub mod login;
pub mod not_found;
pub mod users;

pub use actors::Actors;
pub use dashboard::Dashboard;
pub use dramas::{DramaDetail, Dramas};
pub use genres::Genres;
pub use login::Login;
pub use not_found::NotFound;
pub use users::Users;

use dioxus::router::Navigator;

use crate::client::api::ApiError;
use crate::client::router::Route;
use crate::client::store::{AuthStore, AuthStoreExt, ToastStore, ToastStoreExt};

/// Shared failure policy for fetches and submits: a dead session goes
/// back to the login screen, everything else becomes a toast and the
/// screen keeps whatever it was showing.
pub(crate) fn report_error(err: &ApiError, auth: AuthStore, toasts: ToastStore, nav: Navigator) {
    match err {
        ApiError::Unauthorized => {
            auth.logout();
            nav.push(Route::Login {});
        }
        _ => toasts.error(err.to_string()),
    }
}

/// Thousands-grouped display for view counts and dashboard totals.
pub(crate) fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::format_count;

    /// Tests thousands grouping across magnitudes.
    ///
    /// Expected: commas every three digits, none below 1000.
    #[test]
    fn groups_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }
}
