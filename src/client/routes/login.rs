use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaClapperboard;
use dioxus_free_icons::Icon;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::client::api::ApiClient;
#[cfg(feature = "web")]
use crate::client::api::{auth as auth_api, ApiError};
use crate::client::components::TextField;
use crate::client::form::{check, FormErrors, LoginForm};
use crate::client::router::Route;
use crate::client::store::{AuthStore, ToastStore, ToastStoreExt};
#[cfg(feature = "web")]
use crate::client::store::{admin_gate, AuthStoreExt};

#[component]
pub fn Login() -> Element {
    let api = use_context::<ApiClient>();
    let auth = use_context::<AuthStore>();
    let toasts = use_context::<ToastStore>();
    let nav = use_navigator();

    // an authenticated session has no business on the login screen
    use_effect(move || {
        if auth.read().user.is_some() {
            nav.replace(Route::Dashboard {});
        }
    });

    let mut form = use_signal(LoginForm::default);
    let mut errors = use_signal(FormErrors::default);
    let mut busy = use_signal(|| false);

    let submit = move |event: FormEvent| {
        event.prevent_default();
        let current = form.peek().clone();
        match check(&current) {
            Err(validation) => errors.set(validation),
            Ok(()) => {
                errors.set(FormErrors::default());
                #[cfg(feature = "web")]
                {
                    busy.set(true);
                    let payload = current.to_payload();
                    spawn(async move {
                        match auth_api::login(&api, &payload).await {
                            Ok(data) => match admin_gate(&data.user) {
                                Ok(()) => {
                                    auth.login(data.user, data.token);
                                    nav.push(Route::Dashboard {});
                                }
                                Err(message) => {
                                    // valid credentials, wrong role; the
                                    // store stays untouched
                                    tracing::warn!("non-admin login attempt refused");
                                    toasts.error(message);
                                }
                            },
                            Err(ApiError::Unauthorized) => {
                                toasts.error("Invalid email or password");
                            }
                            Err(err) => toasts.error(err.to_string()),
                        }
                        busy.set(false);
                    });
                }
            }
        }
    };

    rsx! {
        Title { "Sign in | Marquee Admin" }
        Meta {
            name: "description",
            content: "Administrative console for the Marquee video-streaming catalog."
        }
        div { class: "min-h-screen flex items-center justify-center bg-base-200",
            div { class: "card bg-base-100 shadow-xl w-full max-w-md",
                div { class: "card-body",
                    div { class: "flex items-center justify-center gap-2 mb-2",
                        Icon { width: 28, height: 28, icon: FaClapperboard }
                        h1 { class: "text-2xl font-bold", "Marquee Admin" }
                    }
                    p { class: "text-center text-base-content/60 text-sm mb-4",
                        "Sign in with an administrator account"
                    }
                    form { class: "flex flex-col gap-3", onsubmit: submit,
                        TextField {
                            label: "Email",
                            value: form.read().email.clone(),
                            input_type: "email",
                            placeholder: "admin@marquee.tv",
                            error: errors.read().get("email"),
                            on_input: move |value: String| form.write().email = value,
                        }
                        TextField {
                            label: "Password",
                            value: form.read().password.clone(),
                            input_type: "password",
                            error: errors.read().get("password"),
                            on_input: move |value: String| form.write().password = value,
                        }
                        button {
                            class: "btn btn-primary mt-2",
                            r#type: "submit",
                            disabled: busy(),
                            if busy() {
                                span { class: "loading loading-spinner loading-sm" }
                            }
                            "Sign in"
                        }
                    }
                }
            }
        }
    }
}
