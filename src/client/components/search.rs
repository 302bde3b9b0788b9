use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaMagnifyingGlass;
use dioxus_free_icons::Icon;

/// Search box with an explicit submit. The draft only reaches the owner
/// (and therefore the URL) on submit; the owner resets pagination.
#[component]
pub fn SearchBar(
    value: ReadOnlySignal<String>,
    placeholder: Option<String>,
    on_search: EventHandler<String>,
) -> Element {
    let mut draft = use_signal(|| value.peek().clone());

    // keep the draft in step when navigation rewrites the URL state
    use_effect(move || {
        let canonical = value();
        draft.set(canonical);
    });

    rsx! {
        form {
            class: "join",
            onsubmit: move |event| {
                event.prevent_default();
                on_search.call(draft.peek().clone());
            },
            input {
                class: "input input-bordered join-item w-64",
                r#type: "text",
                placeholder: placeholder.unwrap_or_else(|| "Search".to_string()),
                value: "{draft}",
                oninput: move |event| draft.set(event.value()),
            }
            button { class: "btn join-item", r#type: "submit",
                Icon { width: 16, height: 16, icon: FaMagnifyingGlass }
            }
        }
    }
}
