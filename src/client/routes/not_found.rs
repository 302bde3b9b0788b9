use dioxus::prelude::*;

use crate::client::router::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "flex flex-col items-center justify-center gap-3 py-24",
            h1 { class: "text-4xl font-bold", "404" }
            p { class: "text-base-content/60", "There is nothing at /{path}" }
            Link { to: Route::Dashboard {}, class: "btn btn-primary btn-sm", "Back to dashboard" }
        }
    }
}
