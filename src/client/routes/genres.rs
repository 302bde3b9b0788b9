use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPencil, FaPlus, FaTrash};
use dioxus_free_icons::Icon;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::client::api::ApiClient;
#[cfg(feature = "web")]
use crate::client::api::genres;
use crate::client::components::{
    ConfirmDialog, EmptyState, ErrorBanner, Modal, Pagination, SearchBar, TableSkeleton, TextField,
};
use crate::client::form::{check, FormErrors, GenreForm};
use crate::client::list::{ListPhase, ListQuery, ListState};
use crate::client::router::Route;
#[cfg(feature = "web")]
use crate::client::routes::report_error;
use crate::client::store::{AuthStore, ToastStore, ToastStoreExt};
use crate::model::genre::GenreDto;

#[component]
pub fn Genres(page: ReadOnlySignal<u64>, search: ReadOnlySignal<String>) -> Element {
    let api = use_context::<ApiClient>();
    let auth = use_context::<AuthStore>();
    let toasts = use_context::<ToastStore>();
    let nav = use_navigator();

    let query = use_memo(move || ListQuery::from_route(page(), &search()));

    let mut list = use_signal(ListState::<GenreDto>::default);
    let mut reload = use_signal(|| 0u32);
    let mut dialog = use_signal(|| None::<Option<GenreDto>>);
    let mut pending_delete = use_signal(|| None::<GenreDto>);
    let mut deleting = use_signal(|| false);

    use_effect(move || {
        let current = query();
        let _ = reload();
        #[cfg(feature = "web")]
        {
            let generation = list.write().begin();
            spawn(async move {
                match genres::list(&api, &current).await {
                    Ok(data) => {
                        list.write().resolve(generation, data);
                    }
                    Err(err) => {
                        tracing::error!("failed to load genres: {err}");
                        if list.write().reject(generation) {
                            report_error(&err, auth, toasts, nav);
                        }
                    }
                }
            });
        }
        #[cfg(not(feature = "web"))]
        let _ = current;
    });

    let go = move |next: ListQuery| {
        nav.push(Route::Genres {
            page: next.page,
            search: next.search.clone(),
        });
    };

    let confirm_delete = move |_: ()| {
        #[cfg(feature = "web")]
        {
            let Some(target) = pending_delete.peek().as_ref().cloned() else {
                return;
            };
            deleting.set(true);
            spawn(async move {
                match genres::delete(&api, target.id).await {
                    Ok(()) => {
                        toasts.success(format!("\"{}\" deleted", target.name));
                        pending_delete.set(None);
                        reload += 1;
                    }
                    Err(err) => report_error(&err, auth, toasts, nav),
                }
                deleting.set(false);
            });
        }
    };

    let state = list.read();
    let phase = state.phase();
    let data = state.data();
    let initial_load = phase == ListPhase::Loading && state.rows().is_empty();
    let current = query();

    rsx! {
        Title { "Genres | Marquee Admin" }
        Meta {
            name: "description",
            content: "Administrative console for the Marquee video-streaming catalog."
        }
        div { class: "flex items-center justify-between mb-4",
            div { class: "flex items-center gap-3",
                h1 { class: "text-2xl font-bold", "Genres" }
                if phase == ListPhase::Loading && !initial_load {
                    span { class: "loading loading-spinner loading-sm" }
                }
            }
            button {
                class: "btn btn-primary flex gap-2",
                onclick: move |_| dialog.set(Some(None)),
                Icon { width: 16, height: 16, icon: FaPlus }
                "New genre"
            }
        }

        div { class: "mb-4",
            SearchBar {
                value: search,
                placeholder: "Search genres",
                on_search: move |term: String| go(query.peek().with_search(&term)),
            }
        }

        if phase == ListPhase::Errored {
            ErrorBanner { message: "The list could not be refreshed; showing the last loaded data." }
        }

        div { class: "overflow-x-auto",
            table { class: "table table-md",
                thead {
                    tr {
                        th { "Name" }
                        th { "Slug" }
                        th { class: "text-right", "Actions" }
                    }
                }
                tbody {
                    if initial_load {
                        TableSkeleton { rows: 5, columns: 3 }
                    } else {
                        for genre in state.rows().iter() {
                            {
                                let id = genre.id;
                                let for_edit = genre.clone();
                                let for_delete = genre.clone();
                                rsx! {
                                    tr { key: "{id}", class: "hover",
                                        td { span { class: "font-semibold", "{genre.name}" } }
                                        td {
                                            code { class: "text-sm text-base-content/70", "{genre.slug}" }
                                        }
                                        td { class: "text-right",
                                            div { class: "flex gap-1 justify-end",
                                                button {
                                                    class: "btn btn-ghost btn-sm",
                                                    onclick: move |_| {
                                                        dialog.set(Some(Some(for_edit.clone())));
                                                    },
                                                    Icon { width: 14, height: 14, icon: FaPencil }
                                                }
                                                button {
                                                    class: "btn btn-ghost btn-sm text-error",
                                                    onclick: move |_| {
                                                        pending_delete.set(Some(for_delete.clone()));
                                                    },
                                                    Icon { width: 14, height: 14, icon: FaTrash }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        if phase == ListPhase::Empty {
            EmptyState { message: "No genres match this view." }
        }

        Pagination {
            page: current.page,
            total_pages: data.total_pages(),
            has_prev: data.has_prev(current.page),
            has_next: data.has_next(current.page),
            on_prev: move |_| go(query.peek().with_page(query.peek().page - 1)),
            on_next: move |_| go(query.peek().with_page(query.peek().page + 1)),
        }

        if let Some(editing) = dialog() {
            GenreFormDialog {
                editing,
                on_close: move |_| dialog.set(None),
                on_saved: move |_| {
                    dialog.set(None);
                    reload += 1;
                },
            }
        }

        if let Some(target) = pending_delete() {
            ConfirmDialog {
                title: "Delete genre",
                message: format!(
                    "\"{}\" will be removed and detached from every drama. This cannot be undone.",
                    target.name
                ),
                busy: deleting(),
                on_confirm: confirm_delete,
                on_cancel: move |_| pending_delete.set(None),
            }
        }
    }
}

#[component]
fn GenreFormDialog(
    editing: Option<GenreDto>,
    on_close: EventHandler<()>,
    on_saved: EventHandler<()>,
) -> Element {
    let api = use_context::<ApiClient>();
    let auth = use_context::<AuthStore>();
    let toasts = use_context::<ToastStore>();
    let nav = use_navigator();

    let edit_id = editing.as_ref().map(|genre| genre.id);
    let initial = editing
        .as_ref()
        .map(GenreForm::from_dto)
        .unwrap_or_default();

    let mut form = use_signal(move || initial.clone());
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
                        let result = match edit_id {
                            Some(id) => genres::update(&api, id, &payload).await.map(|_| ()),
                            None => genres::create(&api, &payload).await.map(|_| ()),
                        };
                        match result {
                            Ok(()) => {
                                toasts.success(if edit_id.is_some() {
                                    "Genre updated"
                                } else {
                                    "Genre created"
                                });
                                on_saved.call(());
                            }
                            Err(err) => report_error(&err, auth, toasts, nav),
                        }
                        busy.set(false);
                    });
                }
            }
        }
    };

    let title = if edit_id.is_some() {
        "Edit genre"
    } else {
        "New genre"
    };

    rsx! {
        Modal { title, on_close: move |_| on_close.call(()),
            form { class: "flex flex-col gap-3", onsubmit: submit,
                TextField {
                    label: "Name",
                    value: form.read().name.clone(),
                    error: errors.read().get("name"),
                    on_input: move |value: String| form.write().name = value,
                }
                TextField {
                    label: "Slug",
                    value: form.read().slug.clone(),
                    placeholder: "slice-of-life",
                    error: errors.read().get("slug"),
                    on_input: move |value: String| form.write().slug = value,
                }
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
