use dioxus::prelude::*;

#[component]
pub fn TextField(
    label: String,
    value: String,
    on_input: EventHandler<String>,
    error: Option<String>,
    placeholder: Option<String>,
    input_type: Option<String>,
    step: Option<String>,
) -> Element {
    let error_class = if error.is_some() { " input-error" } else { "" };

    rsx! {
        div { class: "form-control w-full",
            label { class: "label",
                span { class: "label-text", "{label}" }
            }
            input {
                class: "input input-bordered w-full{error_class}",
                r#type: input_type.unwrap_or_else(|| "text".to_string()),
                step: step.unwrap_or_default(),
                placeholder: placeholder.unwrap_or_default(),
                value: "{value}",
                oninput: move |event| on_input.call(event.value()),
            }
            if let Some(error) = error {
                label { class: "label",
                    span { class: "label-text-alt text-error", "{error}" }
                }
            }
        }
    }
}

#[component]
pub fn TextAreaField(
    label: String,
    value: String,
    on_input: EventHandler<String>,
    error: Option<String>,
    rows: Option<u32>,
) -> Element {
    let error_class = if error.is_some() { " textarea-error" } else { "" };

    rsx! {
        div { class: "form-control w-full",
            label { class: "label",
                span { class: "label-text", "{label}" }
            }
            textarea {
                class: "textarea textarea-bordered w-full{error_class}",
                rows: rows.unwrap_or(3) as i64,
                value: "{value}",
                oninput: move |event| on_input.call(event.value()),
            }
            if let Some(error) = error {
                label { class: "label",
                    span { class: "label-text-alt text-error", "{error}" }
                }
            }
        }
    }
}

/// A labelled select. `options` pairs the submitted value with its label.
#[component]
pub fn SelectField(
    label: String,
    value: String,
    options: Vec<(String, String)>,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "form-control w-full",
            label { class: "label",
                span { class: "label-text", "{label}" }
            }
            select {
                class: "select select-bordered w-full",
                onchange: move |event| on_change.call(event.value()),
                for (option_value, option_label) in options.iter() {
                    option {
                        value: "{option_value}",
                        selected: *option_value == value,
                        "{option_label}"
                    }
                }
            }
        }
    }
}
