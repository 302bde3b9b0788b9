use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaXmark;
use dioxus_free_icons::Icon;

/// Modal shell used by every create/edit dialog. The caller controls
/// whether it is mounted; closing goes through `on_close` so the owner
/// can drop its state.
#[component]
pub fn Modal(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div { class: "modal modal-open",
            div { class: "modal-box max-w-2xl",
                div { class: "flex items-center justify-between mb-4",
                    h3 { class: "text-lg font-bold", "{title}" }
                    button {
                        class: "btn btn-sm btn-circle btn-ghost",
                        onclick: move |_| on_close.call(()),
                        Icon { width: 16, height: 16, icon: FaXmark }
                    }
                }
                {children}
            }
            div { class: "modal-backdrop", onclick: move |_| on_close.call(()) }
        }
    }
}

/// Yes/no confirmation used by every delete action.
#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    confirm_label: Option<String>,
    busy: Option<bool>,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let busy = busy.unwrap_or(false);

    rsx! {
        div { class: "modal modal-open",
            div { class: "modal-box",
                h3 { class: "text-lg font-bold", "{title}" }
                p { class: "py-4", "{message}" }
                div { class: "modal-action",
                    button {
                        class: "btn btn-ghost",
                        disabled: busy,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-error",
                        disabled: busy,
                        onclick: move |_| on_confirm.call(()),
                        if busy {
                            span { class: "loading loading-spinner loading-sm" }
                        }
                        {confirm_label.clone().unwrap_or_else(|| "Delete".to_string())}
                    }
                }
            }
            div { class: "modal-backdrop", onclick: move |_| on_cancel.call(()) }
        }
    }
}
