use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaChevronDown, FaChevronRight, FaPencil, FaPlus, FaTrash,
};
use dioxus_free_icons::Icon;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::client::api::ApiClient;
#[cfg(feature = "web")]
use crate::client::api::{dramas, episodes as episodes_api, seasons as seasons_api};
use crate::client::components::{ConfirmDialog, EmptyState, ErrorBanner, Modal, TextAreaField, TextField};
use crate::client::form::{check, EpisodeForm, FormErrors, SeasonForm};
use crate::client::list::{ListPhase, ListState};
use crate::client::routes::format_count;
#[cfg(feature = "web")]
use crate::client::routes::report_error;
use crate::client::store::{AuthStore, ToastStore, ToastStoreExt};
use crate::model::drama::{DramaDto, DramaStatus};
use crate::model::episode::{seconds_to_minutes, EpisodeDto};
#[cfg(feature = "web")]
use crate::model::api::PageData;
use crate::model::season::SeasonDto;

use super::form::{DramaDialogMode, DramaFormDialog};

#[derive(Debug, Clone, PartialEq)]
enum SeasonDialogMode {
    Create { drama_id: i64, next_number: i32 },
    Edit(SeasonDto),
}

#[derive(Debug, Clone, PartialEq)]
enum EpisodeDialogMode {
    Create { season_id: i64, next_number: i32 },
    Edit(EpisodeDto),
}

#[component]
pub fn DramaDetail(id: ReadOnlySignal<i64>) -> Element {
    let api = use_context::<ApiClient>();
    let auth = use_context::<AuthStore>();
    let toasts = use_context::<ToastStore>();
    let nav = use_navigator();

    let mut drama = use_signal(|| None::<DramaDto>);
    let mut drama_reload = use_signal(|| 0u32);
    let mut seasons = use_signal(ListState::<SeasonDto>::default);
    let mut seasons_reload = use_signal(|| 0u32);
    let mut expanded = use_signal(|| None::<i64>);
    let mut drama_dialog = use_signal(|| false);
    let mut season_dialog = use_signal(|| None::<SeasonDialogMode>);
    let mut season_delete = use_signal(|| None::<SeasonDto>);
    let mut deleting = use_signal(|| false);

    use_effect(move || {
        let drama_id = id();
        let _ = drama_reload();
        #[cfg(feature = "web")]
        {
            spawn(async move {
                match dramas::get(&api, drama_id).await {
                    Ok(dto) => drama.set(Some(dto)),
                    Err(err) => {
                        tracing::error!("failed to load drama {drama_id}: {err}");
                        report_error(&err, auth, toasts, nav);
                    }
                }
            });
        }
        #[cfg(not(feature = "web"))]
        let _ = drama_id;
    });

    use_effect(move || {
        let drama_id = id();
        let _ = seasons_reload();
        #[cfg(feature = "web")]
        {
            let generation = seasons.write().begin();
            spawn(async move {
                match seasons_api::list(&api, drama_id).await {
                    Ok(items) => {
                        seasons.write().resolve(generation, PageData::from_items(items));
                    }
                    Err(err) => {
                        tracing::error!("failed to load seasons: {err}");
                        if seasons.write().reject(generation) {
                            report_error(&err, auth, toasts, nav);
                        }
                    }
                }
            });
        }
        #[cfg(not(feature = "web"))]
        let _ = drama_id;
    });

    let confirm_season_delete = move |_: ()| {
        #[cfg(feature = "web")]
        {
            let Some(target) = season_delete.peek().as_ref().cloned() else {
                return;
            };
            deleting.set(true);
            spawn(async move {
                match seasons_api::delete(&api, target.id).await {
                    Ok(()) => {
                        toasts.success(format!("Season {} deleted", target.season_number));
                        season_delete.set(None);
                        seasons_reload += 1;
                    }
                    Err(err) => report_error(&err, auth, toasts, nav),
                }
                deleting.set(false);
            });
        }
    };

    let season_state = seasons.read();
    let season_phase = season_state.phase();
    let next_season_number = season_state
        .rows()
        .iter()
        .map(|season| season.season_number)
        .max()
        .unwrap_or(0)
        + 1;
    let header = drama.read().clone();

    rsx! {
        Title { "Drama | Marquee Admin" }
        Meta {
            name: "description",
            content: "Administrative console for the Marquee video-streaming catalog."
        }

        if let Some(drama) = header {
            div { class: "flex gap-6 mb-8",
                div { class: "w-40 shrink-0",
                    img {
                        class: "rounded-lg shadow-xl w-full",
                        src: "{drama.poster_url}",
                        alt: "{drama.title}",
                    }
                }
                div { class: "flex-1 min-w-0",
                    div { class: "flex items-center justify-between",
                        h1 { class: "text-3xl font-bold", "{drama.title}" }
                        button {
                            class: "btn btn-outline btn-sm flex gap-2",
                            onclick: move |_| drama_dialog.set(true),
                            Icon { width: 14, height: 14, icon: FaPencil }
                            "Edit"
                        }
                    }
                    div { class: "flex flex-wrap items-center gap-2 mt-2",
                        span { class: "badge badge-outline", "{drama.year}" }
                        span {
                            class: match drama.status {
                                DramaStatus::Ongoing => "badge badge-info",
                                DramaStatus::Completed => "badge badge-success",
                            },
                            {drama.status.as_str()}
                        }
                        span { class: "badge badge-outline", "★ {drama.rating}" }
                        span { class: "text-sm text-base-content/60",
                            {format_count(drama.view_count)}
                            " views"
                        }
                    }
                    p { class: "py-4 text-base-content/80", "{drama.synopsis}" }
                    div { class: "flex flex-wrap gap-1",
                        for genre in drama.genres.iter() {
                            span { key: "{genre.id}", class: "badge badge-ghost", "{genre.name}" }
                        }
                    }
                    if !drama.cast.is_empty() {
                        div { class: "mt-3",
                            span { class: "text-sm font-semibold", "Cast: " }
                            span { class: "text-sm text-base-content/70",
                                {
                                    drama
                                        .cast
                                        .iter()
                                        .map(|member| member.actor.name.clone())
                                        .collect::<Vec<_>>()
                                        .join(", ")
                                }
                            }
                        }
                    }
                }
            }
        } else {
            div { class: "flex gap-6 mb-8",
                div { class: "skeleton w-40 h-56 rounded-lg" }
                div { class: "flex-1 flex flex-col gap-3",
                    div { class: "skeleton h-8 w-64" }
                    div { class: "skeleton h-4 w-40" }
                    div { class: "skeleton h-24 w-full" }
                }
            }
        }

        div { class: "flex items-center justify-between mb-3",
            h2 { class: "text-xl font-bold", "Seasons" }
            button {
                class: "btn btn-primary btn-sm flex gap-2",
                onclick: move |_| {
                    season_dialog.set(Some(SeasonDialogMode::Create {
                        drama_id: id(),
                        next_number: next_season_number,
                    }));
                },
                Icon { width: 14, height: 14, icon: FaPlus }
                "New season"
            }
        }

        if season_phase == ListPhase::Errored {
            ErrorBanner { message: "Seasons could not be refreshed; showing the last loaded data." }
        }

        if season_phase == ListPhase::Loading && season_state.rows().is_empty() {
            div { class: "flex flex-col gap-2",
                div { class: "skeleton h-14 w-full" }
                div { class: "skeleton h-14 w-full" }
            }
        }

        div { class: "flex flex-col gap-2",
            for season in season_state.rows().iter() {
                {
                    let season_id = season.id;
                    let for_edit = season.clone();
                    let for_delete = season.clone();
                    rsx! {
                        SeasonPanel {
                            key: "{season_id}",
                            season: season.clone(),
                            expanded: expanded() == Some(season_id),
                            on_toggle: move |_| {
                                let current = *expanded.peek();
                                expanded.set(if current == Some(season_id) {
                                    None
                                } else {
                                    Some(season_id)
                                });
                            },
                            on_edit: move |_| {
                                season_dialog.set(Some(SeasonDialogMode::Edit(for_edit.clone())));
                            },
                            on_delete: move |_| season_delete.set(Some(for_delete.clone())),
                        }
                    }
                }
            }
        }

        if season_phase == ListPhase::Empty {
            EmptyState { message: "No seasons yet." }
        }

        if drama_dialog() {
            DramaFormDialog {
                mode: DramaDialogMode::Edit(id()),
                on_close: move |_| drama_dialog.set(false),
                on_saved: move |_| {
                    drama_dialog.set(false);
                    drama_reload += 1;
                },
            }
        }

        if let Some(mode) = season_dialog() {
            SeasonFormDialog {
                mode,
                on_close: move |_| season_dialog.set(None),
                on_saved: move |_| {
                    season_dialog.set(None);
                    seasons_reload += 1;
                },
            }
        }

        if let Some(target) = season_delete() {
            ConfirmDialog {
                title: "Delete season",
                message: format!(
                    "Season {} (\"{}\") and its episodes will be removed. This cannot be undone.",
                    target.season_number, target.title
                ),
                busy: deleting(),
                on_confirm: confirm_season_delete,
                on_cancel: move |_| season_delete.set(None),
            }
        }
    }
}

/// One collapsible season row; episodes are fetched lazily the first time
/// the panel is expanded.
#[component]
fn SeasonPanel(
    season: SeasonDto,
    expanded: ReadOnlySignal<bool>,
    on_toggle: EventHandler<()>,
    on_edit: EventHandler<()>,
    on_delete: EventHandler<()>,
) -> Element {
    let api = use_context::<ApiClient>();
    let auth = use_context::<AuthStore>();
    let toasts = use_context::<ToastStore>();
    let nav = use_navigator();

    let season_id = season.id;
    let mut episodes = use_signal(ListState::<EpisodeDto>::default);
    let mut episodes_reload = use_signal(|| 0u32);
    let mut episode_dialog = use_signal(|| None::<EpisodeDialogMode>);
    let mut episode_delete = use_signal(|| None::<EpisodeDto>);
    let mut deleting = use_signal(|| false);

    use_effect(move || {
        let open = expanded();
        let _ = episodes_reload();
        #[cfg(feature = "web")]
        {
            if !open {
                return;
            }
            let generation = episodes.write().begin();
            spawn(async move {
                match episodes_api::list(&api, season_id).await {
                    Ok(items) => {
                        episodes.write().resolve(generation, PageData::from_items(items));
                    }
                    Err(err) => {
                        tracing::error!("failed to load episodes: {err}");
                        if episodes.write().reject(generation) {
                            report_error(&err, auth, toasts, nav);
                        }
                    }
                }
            });
        }
        #[cfg(not(feature = "web"))]
        let _ = open;
    });

    let confirm_episode_delete = move |_: ()| {
        #[cfg(feature = "web")]
        {
            let Some(target) = episode_delete.peek().as_ref().cloned() else {
                return;
            };
            deleting.set(true);
            spawn(async move {
                match episodes_api::delete(&api, target.id).await {
                    Ok(()) => {
                        toasts.success(format!("Episode {} deleted", target.episode_number));
                        episode_delete.set(None);
                        episodes_reload += 1;
                    }
                    Err(err) => report_error(&err, auth, toasts, nav),
                }
                deleting.set(false);
            });
        }
    };

    let episode_state = episodes.read();
    let episode_phase = episode_state.phase();
    let next_episode_number = episode_state
        .rows()
        .iter()
        .map(|episode| episode.episode_number)
        .max()
        .unwrap_or(0)
        + 1;
    let release = season
        .release_date
        .map(|date| date.format("%Y-%m-%d").to_string());
    let season_label = format!("Season {:02} · {}", season.season_number, season.title);

    rsx! {
        div { class: "bg-base-200 rounded-lg",
            div { class: "flex items-center gap-3 p-3",
                button {
                    class: "btn btn-ghost btn-sm",
                    onclick: move |_| on_toggle.call(()),
                    if expanded() {
                        Icon { width: 14, height: 14, icon: FaChevronDown }
                    } else {
                        Icon { width: 14, height: 14, icon: FaChevronRight }
                    }
                }
                div { class: "flex-1",
                    span { class: "font-semibold", "{season_label}" }
                    if let Some(release) = release {
                        span { class: "text-sm text-base-content/60 ml-2", "{release}" }
                    }
                }
                button {
                    class: "btn btn-ghost btn-sm",
                    onclick: move |_| on_edit.call(()),
                    Icon { width: 14, height: 14, icon: FaPencil }
                }
                button {
                    class: "btn btn-ghost btn-sm text-error",
                    onclick: move |_| on_delete.call(()),
                    Icon { width: 14, height: 14, icon: FaTrash }
                }
            }

            if expanded() {
                div { class: "px-4 pb-4",
                    div { class: "flex justify-end mb-2",
                        button {
                            class: "btn btn-outline btn-xs flex gap-1",
                            onclick: move |_| {
                                episode_dialog.set(Some(EpisodeDialogMode::Create {
                                    season_id,
                                    next_number: next_episode_number,
                                }));
                            },
                            Icon { width: 12, height: 12, icon: FaPlus }
                            "New episode"
                        }
                    }

                    if episode_phase == ListPhase::Errored {
                        ErrorBanner { message: "Episodes could not be refreshed." }
                    }

                    if episode_phase == ListPhase::Loading && episode_state.rows().is_empty() {
                        div { class: "skeleton h-10 w-full" }
                    } else if episode_phase == ListPhase::Empty {
                        p { class: "text-sm text-base-content/60 py-2", "No episodes yet." }
                    } else {
                        table { class: "table table-sm",
                            thead {
                                tr {
                                    th { "#" }
                                    th { "Title" }
                                    th { "Duration" }
                                    th { "Views" }
                                    th { class: "text-right", "Actions" }
                                }
                            }
                            tbody {
                                for episode in episode_state.rows().iter() {
                                    {
                                        let episode_id = episode.id;
                                        let minutes = seconds_to_minutes(episode.duration);
                                        let for_edit = episode.clone();
                                        let for_delete = episode.clone();
                                        rsx! {
                                            tr { key: "{episode_id}",
                                                td { "{episode.episode_number}" }
                                                td { "{episode.title}" }
                                                td { "{minutes} min" }
                                                td { {format_count(episode.view_count)} }
                                                td { class: "text-right",
                                                    div { class: "flex gap-1 justify-end",
                                                        button {
                                                            class: "btn btn-ghost btn-xs",
                                                            onclick: move |_| {
                                                                episode_dialog.set(Some(
                                                                    EpisodeDialogMode::Edit(for_edit.clone()),
                                                                ));
                                                            },
                                                            Icon { width: 12, height: 12, icon: FaPencil }
                                                        }
                                                        button {
                                                            class: "btn btn-ghost btn-xs text-error",
                                                            onclick: move |_| {
                                                                episode_delete.set(Some(for_delete.clone()));
                                                            },
                                                            Icon { width: 12, height: 12, icon: FaTrash }
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
            }
        }

        if let Some(mode) = episode_dialog() {
            EpisodeFormDialog {
                mode,
                on_close: move |_| episode_dialog.set(None),
                on_saved: move |_| {
                    episode_dialog.set(None);
                    episodes_reload += 1;
                },
            }
        }

        if let Some(target) = episode_delete() {
            ConfirmDialog {
                title: "Delete episode",
                message: format!(
                    "Episode {} (\"{}\") will be removed. This cannot be undone.",
                    target.episode_number, target.title
                ),
                busy: deleting(),
                on_confirm: confirm_episode_delete,
                on_cancel: move |_| episode_delete.set(None),
            }
        }
    }
}

#[component]
fn SeasonFormDialog(
    mode: SeasonDialogMode,
    on_close: EventHandler<()>,
    on_saved: EventHandler<()>,
) -> Element {
    let api = use_context::<ApiClient>();
    let auth = use_context::<AuthStore>();
    let toasts = use_context::<ToastStore>();
    let nav = use_navigator();

    let edit_id = match &mode {
        SeasonDialogMode::Create { .. } => None,
        SeasonDialogMode::Edit(season) => Some(season.id),
    };
    let initial = match &mode {
        SeasonDialogMode::Create {
            drama_id,
            next_number,
        } => SeasonForm::new(*drama_id, *next_number),
        SeasonDialogMode::Edit(season) => SeasonForm::from_dto(season),
    };

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
                            Some(id) => seasons_api::update(&api, id, &payload).await.map(|_| ()),
                            None => seasons_api::create(&api, &payload).await.map(|_| ()),
                        };
                        match result {
                            Ok(()) => {
                                toasts.success(if edit_id.is_some() {
                                    "Season updated"
                                } else {
                                    "Season created"
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
        "Edit season"
    } else {
        "New season"
    };

    rsx! {
        Modal { title, on_close: move |_| on_close.call(()),
            form { class: "flex flex-col gap-3", onsubmit: submit,
                div { class: "grid grid-cols-2 gap-3",
                    TextField {
                        label: "Season number",
                        value: form.read().season_number.to_string(),
                        input_type: "number",
                        error: errors.read().get("season_number"),
                        on_input: move |value: String| {
                            form.write().season_number = value.parse().unwrap_or(0);
                        },
                    }
                    TextField {
                        label: "Release date",
                        value: form.read().release_date.clone(),
                        placeholder: "YYYY-MM-DD",
                        error: errors.read().get("release_date"),
                        on_input: move |value: String| form.write().release_date = value,
                    }
                }
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

#[component]
fn EpisodeFormDialog(
    mode: EpisodeDialogMode,
    on_close: EventHandler<()>,
    on_saved: EventHandler<()>,
) -> Element {
    let api = use_context::<ApiClient>();
    let auth = use_context::<AuthStore>();
    let toasts = use_context::<ToastStore>();
    let nav = use_navigator();

    let edit_id = match &mode {
        EpisodeDialogMode::Create { .. } => None,
        EpisodeDialogMode::Edit(episode) => Some(episode.id),
    };
    let initial = match &mode {
        EpisodeDialogMode::Create {
            season_id,
            next_number,
        } => EpisodeForm::new(*season_id, *next_number),
        EpisodeDialogMode::Edit(episode) => EpisodeForm::from_dto(episode),
    };

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
                            Some(id) => episodes_api::update(&api, id, &payload).await.map(|_| ()),
                            None => episodes_api::create(&api, &payload).await.map(|_| ()),
                        };
                        match result {
                            Ok(()) => {
                                toasts.success(if edit_id.is_some() {
                                    "Episode updated"
                                } else {
                                    "Episode created"
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
        "Edit episode"
    } else {
        "New episode"
    };

    rsx! {
        Modal { title, on_close: move |_| on_close.call(()),
            form { class: "flex flex-col gap-3", onsubmit: submit,
                div { class: "grid grid-cols-2 gap-3",
                    TextField {
                        label: "Episode number",
                        value: form.read().episode_number.to_string(),
                        input_type: "number",
                        error: errors.read().get("episode_number"),
                        on_input: move |value: String| {
                            form.write().episode_number = value.parse().unwrap_or(0);
                        },
                    }
                    TextField {
                        label: "Duration (minutes)",
                        value: form.read().duration_minutes.to_string(),
                        input_type: "number",
                        error: errors.read().get("duration_minutes"),
                        on_input: move |value: String| {
                            form.write().duration_minutes = value.parse().unwrap_or(0);
                        },
                    }
                }
                TextField {
                    label: "Title",
                    value: form.read().title.clone(),
                    error: errors.read().get("title"),
                    on_input: move |value: String| form.write().title = value,
                }
                TextField {
                    label: "Video URL",
                    value: form.read().video_url.clone(),
                    placeholder: "https://",
                    error: errors.read().get("video_url"),
                    on_input: move |value: String| form.write().video_url = value,
                }
                TextField {
                    label: "Thumbnail URL",
                    value: form.read().thumbnail_url.clone(),
                    placeholder: "https://",
                    error: errors.read().get("thumbnail_url"),
                    on_input: move |value: String| form.write().thumbnail_url = value,
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
