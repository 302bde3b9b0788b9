use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCircleExclamation, FaFolderOpen};
use dioxus_free_icons::Icon;

#[component]
pub fn EmptyState(message: String) -> Element {
    rsx! {
        div { class: "flex flex-col items-center gap-2 py-12 text-base-content/60",
            Icon { width: 32, height: 32, icon: FaFolderOpen }
            p { "{message}" }
        }
    }
}

/// Shown above a table whose refresh failed; the stale rows stay visible
/// below it.
#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div { class: "alert alert-error my-2",
            Icon { width: 20, height: 20, icon: FaCircleExclamation }
            span { "{message}" }
        }
    }
}
