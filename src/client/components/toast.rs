use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCircleCheck, FaCircleExclamation};
use dioxus_free_icons::Icon;

use crate::client::store::{ToastLevel, ToastStore, ToastStoreExt};

/// Renders the toast queue bottom-right; a click dismisses a toast.
#[component]
pub fn ToastHost() -> Element {
    let toasts = use_context::<ToastStore>();
    let state = toasts.read();

    rsx! {
        div { class: "toast toast-end z-50",
            for toast in state.toasts.iter() {
                {
                    let id = toast.id;
                    let class = match toast.level {
                        ToastLevel::Success => "alert alert-success cursor-pointer",
                        ToastLevel::Error => "alert alert-error cursor-pointer",
                    };
                    let icon = match toast.level {
                        ToastLevel::Success => rsx! {
                            Icon { width: 20, height: 20, icon: FaCircleCheck }
                        },
                        ToastLevel::Error => rsx! {
                            Icon { width: 20, height: 20, icon: FaCircleExclamation }
                        },
                    };
                    rsx! {
                        div {
                            key: "{id}",
                            class: "{class}",
                            onclick: move |_| toasts.dismiss(id),
                            {icon}
                            span { "{toast.message}" }
                        }
                    }
                }
            }
        }
    }
}
