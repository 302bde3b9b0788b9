mod cast;
mod detail;
mod form;

pub use detail::DramaDetail;

use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPencil, FaPlus, FaTrash};
use dioxus_free_icons::Icon;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::client::api::ApiClient;
#[cfg(feature = "web")]
use crate::client::api::{dramas, genres};
use crate::client::components::{
    ConfirmDialog, EmptyState, ErrorBanner, Pagination, SearchBar, SelectField, TableSkeleton,
};
use crate::client::list::{DramaQuery, DramaSort, ListPhase, ListState};
use crate::client::router::Route;
#[cfg(feature = "web")]
use crate::client::routes::report_error;
use crate::client::routes::format_count;
use crate::client::store::{AuthStore, ToastStore, ToastStoreExt};
use crate::model::drama::{DramaDto, DramaStatus};
use crate::model::genre::GenreDto;

use self::form::{DramaDialogMode, DramaFormDialog};

#[component]
pub fn Dramas(
    page: ReadOnlySignal<u64>,
    search: ReadOnlySignal<String>,
    status: ReadOnlySignal<String>,
    genre: ReadOnlySignal<String>,
    sort: ReadOnlySignal<String>,
) -> Element {
    let api = use_context::<ApiClient>();
    let auth = use_context::<AuthStore>();
    let toasts = use_context::<ToastStore>();
    let nav = use_navigator();

    let query = use_memo(move || {
        DramaQuery::from_route(page(), &search(), &status(), &genre(), &sort())
    });

    let mut list = use_signal(ListState::<DramaDto>::default);
    let mut reload = use_signal(|| 0u32);
    let mut dialog = use_signal(|| None::<DramaDialogMode>);
    let mut pending_delete = use_signal(|| None::<DramaDto>);
    let mut deleting = use_signal(|| false);
    let mut genre_options = use_signal(Vec::<GenreDto>::new);

    // one fetch per query change; stale responses die at the generation gate
    use_effect(move || {
        let current = query();
        let _ = reload();
        #[cfg(feature = "web")]
        {
            let generation = list.write().begin();
            spawn(async move {
                match dramas::list(&api, &current).await {
                    Ok(data) => {
                        list.write().resolve(generation, data);
                    }
                    Err(err) => {
                        tracing::error!("failed to load dramas: {err}");
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

    // genre filter options load once
    use_effect(move || {
        #[cfg(feature = "web")]
        {
            spawn(async move {
                match genres::options(&api).await {
                    Ok(options) => genre_options.set(options),
                    Err(err) => tracing::warn!("failed to load genre filter options: {err}"),
                }
            });
        }
    });

    let go = move |next: DramaQuery| {
        nav.push(Route::Dramas {
            page: next.page,
            search: next.search.clone(),
            status: next.status_param(),
            genre: next.genre_param(),
            sort: next.sort_param(),
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
                match dramas::delete(&api, target.id).await {
                    Ok(()) => {
                        toasts.success(format!("\"{}\" deleted", target.title));
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

    let status_options = vec![
        (String::new(), "All statuses".to_string()),
        ("ongoing".to_string(), "Ongoing".to_string()),
        ("completed".to_string(), "Completed".to_string()),
    ];
    let mut genre_filter_options = vec![(String::new(), "All genres".to_string())];
    genre_filter_options.extend(
        genre_options
            .read()
            .iter()
            .map(|genre| (genre.slug.clone(), genre.name.clone())),
    );
    let sort_options = DramaSort::ALL
        .iter()
        .map(|sort| {
            let label = match sort {
                DramaSort::Newest => "Newest first",
                DramaSort::Title => "By title",
                DramaSort::Rating => "By rating",
                DramaSort::Views => "By views",
            };
            (sort.as_str().to_string(), label.to_string())
        })
        .collect::<Vec<_>>();

    rsx! {
        Title { "Dramas | Marquee Admin" }
        Meta {
            name: "description",
            content: "Administrative console for the Marquee video-streaming catalog."
        }
        div { class: "flex items-center justify-between mb-4",
            div { class: "flex items-center gap-3",
                h1 { class: "text-2xl font-bold", "Dramas" }
                if phase == ListPhase::Loading && !initial_load {
                    span { class: "loading loading-spinner loading-sm" }
                }
            }
            button {
                class: "btn btn-primary flex gap-2",
                onclick: move |_| dialog.set(Some(DramaDialogMode::Create)),
                Icon { width: 16, height: 16, icon: FaPlus }
                "New drama"
            }
        }

        div { class: "flex flex-wrap items-end gap-3 mb-4",
            SearchBar {
                value: search,
                placeholder: "Search dramas",
                on_search: move |term: String| go(query.peek().with_search(&term)),
            }
            div { class: "w-44",
                SelectField {
                    label: "Status",
                    value: current.status_param(),
                    options: status_options,
                    on_change: move |value: String| {
                        go(query.peek().with_status(DramaStatus::parse(&value)));
                    },
                }
            }
            div { class: "w-44",
                SelectField {
                    label: "Genre",
                    value: current.genre_param(),
                    options: genre_filter_options,
                    on_change: move |value: String| {
                        let genre = (!value.is_empty()).then_some(value);
                        go(query.peek().with_genre(genre));
                    },
                }
            }
            div { class: "w-44",
                SelectField {
                    label: "Sort",
                    value: current.sort_param(),
                    options: sort_options,
                    on_change: move |value: String| {
                        go(query.peek().with_sort(DramaSort::parse(&value)));
                    },
                }
            }
        }

        if phase == ListPhase::Errored {
            ErrorBanner { message: "The list could not be refreshed; showing the last loaded data." }
        }

        div { class: "overflow-x-auto",
            table { class: "table table-md",
                thead {
                    tr {
                        th { "Title" }
                        th { "Year" }
                        th { "Status" }
                        th { "Seasons" }
                        th { "Views" }
                        th { "Added" }
                        th { class: "text-right", "Actions" }
                    }
                }
                tbody {
                    if initial_load {
                        TableSkeleton { rows: 5, columns: 7 }
                    } else {
                        for drama in state.rows().iter() {
                            {
                                let id = drama.id;
                                let for_delete = drama.clone();
                                let status_badge = match drama.status {
                                    DramaStatus::Ongoing => "badge badge-info",
                                    DramaStatus::Completed => "badge badge-success",
                                };
                                let status_label = drama.status.as_str();
                                rsx! {
                                    tr { key: "{id}", class: "hover",
                                        td {
                                            div { class: "flex gap-3 items-center",
                                                div { class: "avatar",
                                                    div { class: "w-10 h-14 rounded",
                                                        img {
                                                            src: "{drama.poster_url}",
                                                            alt: "{drama.title}",
                                                        }
                                                    }
                                                }
                                                Link {
                                                    to: Route::DramaDetail { id },
                                                    class: "font-semibold link link-hover",
                                                    "{drama.title}"
                                                }
                                            }
                                        }
                                        td { "{drama.year}" }
                                        td {
                                            span { class: "{status_badge}", "{status_label}" }
                                        }
                                        td { "{drama.total_seasons}" }
                                        td { {format_count(drama.view_count)} }
                                        td { {drama.created_at.format("%Y-%m-%d").to_string()} }
                                        td { class: "text-right",
                                            div { class: "flex gap-1 justify-end",
                                                button {
                                                    class: "btn btn-ghost btn-sm",
                                                    onclick: move |_| {
                                                        dialog.set(Some(DramaDialogMode::Edit(id)));
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
            EmptyState { message: "No dramas match this view." }
        }

        Pagination {
            page: current.page,
            total_pages: data.total_pages(),
            has_prev: data.has_prev(current.page),
            has_next: data.has_next(current.page),
            on_prev: move |_| go(query.peek().with_page(query.peek().page - 1)),
            on_next: move |_| go(query.peek().with_page(query.peek().page + 1)),
        }

        if let Some(mode) = dialog() {
            DramaFormDialog {
                mode,
                on_close: move |_| dialog.set(None),
                on_saved: move |_| {
                    dialog.set(None);
                    reload += 1;
                },
            }
        }

        if let Some(target) = pending_delete() {
            ConfirmDialog {
                title: "Delete drama",
                message: format!(
                    "\"{}\" and all of its seasons and episodes will be removed. This cannot be undone.",
                    target.title
                ),
                busy: deleting(),
                on_confirm: confirm_delete,
                on_cancel: move |_| pending_delete.set(None),
            }
        }
    }
}
