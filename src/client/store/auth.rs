//! Process-wide authentication state.
//!
//! The store is created once at the app root and injected everywhere else
//! (including the API client) through context. `login` and `logout` are
//! the only mutators; both keep LocalStorage in sync so a reload restores
//! the session.

use dioxus::prelude::*;

use crate::model::user::UserDto;

const TOKEN_KEY: &str = "marquee.token";

#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub user: Option<UserDto>,
    pub token: Option<String>,
    /// True once session restoration has settled, whichever way it went.
    pub fetched: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Only administrators may use this console. Called after a login request
/// succeeds; a non-admin credential is valid to the server but rejected
/// here, before the store is touched.
pub fn admin_gate(user: &UserDto) -> Result<(), &'static str> {
    if user.is_admin() {
        Ok(())
    } else {
        Err("This console is restricted to administrators")
    }
}

pub type AuthStore = Signal<AuthState>;

pub trait AuthStoreExt {
    /// Completes a login: stores the user and token and persists the token.
    fn login(self, user: UserDto, token: String);
    /// Ends the session and removes the persisted token.
    fn logout(self);
    /// Loads the persisted token, if any, into the store at startup.
    fn restore_token(self) -> Option<String>;
}

impl AuthStoreExt for AuthStore {
    fn login(mut self, user: UserDto, token: String) {
        persist_token(Some(&token));
        let mut state = self.write();
        state.user = Some(user);
        state.token = Some(token);
        state.fetched = true;
    }

    fn logout(mut self) {
        persist_token(None);
        let mut state = self.write();
        state.user = None;
        state.token = None;
        state.fetched = true;
    }

    fn restore_token(mut self) -> Option<String> {
        let token = stored_token();
        self.write().token = token.clone();
        token
    }
}

fn persist_token(token: Option<&str>) {
    #[cfg(feature = "web")]
    {
        use gloo_storage::{LocalStorage, Storage};

        match token {
            Some(token) => {
                if let Err(err) = LocalStorage::set(TOKEN_KEY, token) {
                    dioxus_logger::tracing::warn!("failed to persist token: {err}");
                }
            }
            None => LocalStorage::delete(TOKEN_KEY),
        }
    }
    #[cfg(not(feature = "web"))]
    let _ = token;
}

fn stored_token() -> Option<String> {
    #[cfg(feature = "web")]
    {
        use gloo_storage::{LocalStorage, Storage};

        LocalStorage::get::<String>(TOKEN_KEY).ok()
    }
    #[cfg(not(feature = "web"))]
    None
}

#[cfg(test)]
mod tests {
    use super::admin_gate;
    use crate::model::user::{UserDto, UserRole};

    fn user_with_role(role: UserRole) -> UserDto {
        UserDto {
            id: 1,
            email: "admin@marquee.tv".into(),
            name: "Admin".into(),
            role,
            banned: false,
        }
    }

    /// Tests that an administrator passes the login gate.
    ///
    /// Expected: Ok.
    #[test]
    fn admits_admin_users() {
        assert!(admin_gate(&user_with_role(UserRole::Admin)).is_ok());
    }

    /// Tests that a regular user is refused before the store is touched.
    ///
    /// Expected: Err with the access-denied message.
    #[test]
    fn rejects_non_admin_users() {
        let denied = admin_gate(&user_with_role(UserRole::User));
        assert!(denied.is_err());
    }
}
