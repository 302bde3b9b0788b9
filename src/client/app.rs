use dioxus::prelude::*;

use crate::client::api::ApiClient;
#[cfg(feature = "web")]
use crate::client::api::auth as auth_api;
use crate::client::components::ToastHost;
use crate::client::router::Route;
use crate::client::store::{AuthState, AuthStoreExt, ToastState};

/// Compile-time API base; wasm has no runtime environment to read.
const API_BASE: &str = match option_env!("MARQUEE_API_BASE") {
    Some(base) => base,
    None => "/api",
};

#[component]
pub fn App() -> Element {
    let auth = use_context_provider(|| Signal::new(AuthState::default()));
    use_context_provider(|| Signal::new(ToastState::default()));
    let api = use_context_provider(|| ApiClient::new(API_BASE, auth));

    // restore a persisted session before the first protected render:
    // with a stored token, `/auth/me` decides whether it still stands
    use_effect(move || {
        let mut auth = auth;
        match auth.restore_token() {
            Some(_) => {
                #[cfg(feature = "web")]
                {
                    spawn(async move {
                        match auth_api::me(&api).await {
                            Ok(user) if user.is_admin() => {
                                let mut state = auth.write();
                                state.user = Some(user);
                                state.fetched = true;
                            }
                            Ok(_) | Err(_) => auth.logout(),
                        }
                    });
                }
            }
            None => auth.write().fetched = true,
        }
    });

    rsx! {
        Router::<Route> {}
        ToastHost {}
    }
}
