use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::client::api::ApiClient;
#[cfg(feature = "web")]
use crate::client::api::{dramas, genres};
use crate::client::components::{Modal, SelectField, TextAreaField, TextField};
use crate::client::form::{check, DramaForm, FormErrors};
#[cfg(feature = "web")]
use crate::client::routes::report_error;
use crate::client::store::{AuthStore, ToastStore, ToastStoreExt};
use crate::model::drama::DramaStatus;
use crate::model::genre::GenreDto;

use super::cast::CastPicker;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DramaDialogMode {
    Create,
    /// Edit re-fetches the drama so the form starts from the server's
    /// current state, cast and genres included.
    Edit(i64),
}

#[component]
pub fn DramaFormDialog(
    mode: DramaDialogMode,
    on_close: EventHandler<()>,
    on_saved: EventHandler<()>,
) -> Element {
    let api = use_context::<ApiClient>();
    let auth = use_context::<AuthStore>();
    let toasts = use_context::<ToastStore>();
    let nav = use_navigator();

    let edit_id = match mode {
        DramaDialogMode::Create => None,
        DramaDialogMode::Edit(id) => Some(id),
    };

    let mut form = use_signal(DramaForm::default);
    let mut errors = use_signal(FormErrors::default);
    let mut busy = use_signal(|| false);
    let mut loading = use_signal(|| edit_id.is_some());
    let mut genre_options = use_signal(Vec::<GenreDto>::new);

    // the genre options and (in edit mode) the drama load together
    use_effect(move || {
        #[cfg(feature = "web")]
        {
            spawn(async move {
                match edit_id {
                    Some(id) => {
                        let (options, drama) =
                            futures::join!(genres::options(&api), dramas::get(&api, id));
                        match options {
                            Ok(options) => genre_options.set(options),
                            Err(err) => tracing::warn!("failed to load genre options: {err}"),
                        }
                        match drama {
                            Ok(drama) => form.set(DramaForm::from_dto(&drama)),
                            Err(err) => {
                                report_error(&err, auth, toasts, nav);
                                on_close.call(());
                            }
                        }
                    }
                    None => match genres::options(&api).await {
                        Ok(options) => genre_options.set(options),
                        Err(err) => tracing::warn!("failed to load genre options: {err}"),
                    },
                }
                loading.set(false);
            });
        }
    });

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
                        let result = match edit_id {
                            Some(id) => dramas::update(&api, id, &payload).await.map(|_| ()),
                            None => dramas::create(&api, &payload).await.map(|_| ()),
                        };
                        match result {
                            Ok(()) => {
                                toasts.success(if edit_id.is_some() {
                                    "Drama updated"
                                } else {
                                    "Drama created"
                                });
                                on_saved.call(());
                            }
                            // leave the dialog open with the entered
                            // values so the user can correct and retry
                            Err(err) => report_error(&err, auth, toasts, nav),
                        }
                        busy.set(false);
                    });
                }
            }
        }
    };

    let title = if edit_id.is_some() {
        "Edit drama"
    } else {
        "New drama"
    };

    let status_options = vec![
        ("ongoing".to_string(), "Ongoing".to_string()),
        ("completed".to_string(), "Completed".to_string()),
    ];

    rsx! {
        Modal { title, on_close: move |_| on_close.call(()),
            if loading() {
                div { class: "flex justify-center py-12",
                    span { class: "loading loading-spinner loading-lg" }
                }
            } else {
                form { class: "flex flex-col gap-3", onsubmit: submit,
                    TextField {
                        label: "Title",
                        value: form.read().title.clone(),
                        error: errors.read().get("title"),
                        on_input: move |value: String| form.write().title = value,
                    }
                    TextAreaField {
                        label: "Synopsis",
                        value: form.read().synopsis.clone(),
                        error: errors.read().get("synopsis"),
                        on_input: move |value: String| form.write().synopsis = value,
                    }
                    TextField {
                        label: "Poster URL",
                        value: form.read().poster_url.clone(),
                        placeholder: "https://",
                        error: errors.read().get("poster_url"),
                        on_input: move |value: String| form.write().poster_url = value,
                    }
                    div { class: "grid grid-cols-2 md:grid-cols-4 gap-3",
                        TextField {
                            label: "Year",
                            value: form.read().year.to_string(),
                            input_type: "number",
                            error: errors.read().get("year"),
                            on_input: move |value: String| {
                                form.write().year = value.parse().unwrap_or(0);
                            },
                        }
                        TextField {
                            label: "Rating",
                            value: form.read().rating.to_string(),
                            input_type: "number",
                            step: "0.1",
                            error: errors.read().get("rating"),
                            on_input: move |value: String| {
                                form.write().rating = value.parse().unwrap_or(-1.0);
                            },
                        }
                        TextField {
                            label: "Seasons",
                            value: form.read().total_seasons.to_string(),
                            input_type: "number",
                            error: errors.read().get("total_seasons"),
                            on_input: move |value: String| {
                                form.write().total_seasons = value.parse().unwrap_or(-1);
                            },
                        }
                        SelectField {
                            label: "Status",
                            value: form.read().status.as_str().to_string(),
                            options: status_options,
                            on_change: move |value: String| {
                                if let Some(status) = DramaStatus::parse(&value) {
                                    form.write().status = status;
                                }
                            },
                        }
                    }

                    div { class: "form-control",
                        label { class: "label",
                            span { class: "label-text", "Genres" }
                        }
                        div { class: "flex flex-wrap gap-2",
                            for genre in genre_options.read().iter() {
                                {
                                    let genre_id = genre.id;
                                    let selected = form.read().has_genre(genre_id);
                                    let chip = if selected {
                                        "badge badge-primary cursor-pointer"
                                    } else {
                                        "badge badge-outline cursor-pointer"
                                    };
                                    rsx! {
                                        button {
                                            key: "{genre_id}",
                                            r#type: "button",
                                            class: "{chip}",
                                            onclick: move |_| form.write().toggle_genre(genre_id),
                                            "{genre.name}"
                                        }
                                    }
                                }
                            }
                        }
                    }

                    CastPicker { form }

                    div { class: "modal-action",
                        button {
                            class: "btn btn-ghost",
                            r#type: "button",
                            disabled: busy(),
                            onclick: move |_| on_close.call(()),
                            "Cancel"
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: busy(),
                            if busy() {
                                span { class: "loading loading-spinner loading-sm" }
                            }
                            "Save"
                        }
                    }
                }
            }
        }
    }
}
