use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPlus, FaXmark};
use dioxus_free_icons::Icon;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::client::api::ApiClient;
#[cfg(feature = "web")]
use crate::client::api::actors;
use crate::client::form::DramaForm;
use crate::client::list::ListState;
#[cfg(feature = "web")]
use crate::client::list::ListQuery;
use crate::client::store::{ToastStore, ToastStoreExt};
use crate::model::actor::ActorDto;
#[cfg(feature = "web")]
use crate::model::api::PageData;
use crate::model::drama::CastRole;

/// Cast assignment inside the drama form: a debounced server-side actor
/// search on the left feeds the client-side selected-cast list on the
/// right. Nothing here talks to the server about the cast itself; the
/// full list ships with the drama payload on submit.
#[component]
pub fn CastPicker(form: Signal<DramaForm>) -> Element {
    let api = use_context::<ApiClient>();
    let toasts = use_context::<ToastStore>();

    let mut term = use_signal(String::new);
    let mut role = use_signal(|| CastRole::Main);
    let mut results = use_signal(ListState::<ActorDto>::default);

    // typeahead: wait out the debounce window, then search; the
    // generation gate drops both superseded timers and stale responses
    use_effect(move || {
        let needle = term();
        #[cfg(feature = "web")]
        {
            let generation = results.write().begin();
            let trimmed = needle.trim().to_string();
            if trimmed.is_empty() {
                results.write().resolve(generation, PageData::default());
            } else {
                spawn(async move {
                    gloo_timers::future::TimeoutFuture::new(300).await;
                    if generation != results.peek().generation() {
                        return;
                    }
                    let query = ListQuery {
                        page: 1,
                        search: trimmed,
                    };
                    match actors::list(&api, &query).await {
                        Ok(data) => {
                            results.write().resolve(generation, data);
                        }
                        Err(err) => {
                            tracing::warn!("actor search failed: {err}");
                            if results.write().reject(generation) {
                                toasts.error(err.to_string());
                            }
                        }
                    }
                });
            }
        }
        #[cfg(not(feature = "web"))]
        let _ = needle;
    });

    let mut add_cast = move |actor: ActorDto| {
        let chosen = *role.peek();
        if let Err(message) = form.write().add_cast(actor, chosen) {
            toasts.error(message);
        }
    };

    let cast = form.read().cast.clone();
    let search_state = results.read();

    rsx! {
        div { class: "form-control",
            label { class: "label",
                span { class: "label-text", "Cast" }
            }
            div { class: "grid md:grid-cols-2 gap-3",
                div {
                    div { class: "flex gap-2 mb-2",
                        input {
                            class: "input input-bordered input-sm flex-1",
                            r#type: "text",
                            placeholder: "Search actors",
                            value: "{term}",
                            oninput: move |event| term.set(event.value()),
                        }
                        select {
                            class: "select select-bordered select-sm w-28",
                            onchange: move |event| {
                                role.set(if event.value() == "support" {
                                    CastRole::Support
                                } else {
                                    CastRole::Main
                                });
                            },
                            option { value: "main", selected: *role.read() == CastRole::Main, "Main" }
                            option {
                                value: "support",
                                selected: *role.read() == CastRole::Support,
                                "Support"
                            }
                        }
                    }
                    ul { class: "menu bg-base-200 rounded-box max-h-48 overflow-y-auto",
                        if search_state.is_loading() {
                            li { class: "p-2",
                                span { class: "loading loading-dots loading-sm" }
                            }
                        }
                        for actor in search_state.rows().iter() {
                            {
                                let candidate = actor.clone();
                                rsx! {
                                    li { key: "{actor.id}",
                                        button {
                                            r#type: "button",
                                            class: "flex justify-between",
                                            onclick: move |_| add_cast(candidate.clone()),
                                            span { "{actor.name}" }
                                            Icon { width: 12, height: 12, icon: FaPlus }
                                        }
                                    }
                                }
                            }
                        }
                        if !search_state.is_loading() && search_state.rows().is_empty()
                            && !term.read().trim().is_empty()
                        {
                            li { class: "p-2 text-base-content/60", "No actors found" }
                        }
                    }
                }
                div {
                    if cast.is_empty() {
                        p { class: "text-sm text-base-content/60 py-2",
                            "No cast assigned yet."
                        }
                    }
                    ul { class: "flex flex-col gap-1",
                        for member in cast.iter() {
                            {
                                let actor_id = member.actor.id;
                                let role_badge = match member.role {
                                    CastRole::Main => "badge badge-primary badge-sm",
                                    CastRole::Support => "badge badge-ghost badge-sm",
                                };
                                rsx! {
                                    li {
                                        key: "{actor_id}",
                                        class: "flex items-center justify-between bg-base-200 rounded px-3 py-1",
                                        div { class: "flex items-center gap-2",
                                            span { "{member.actor.name}" }
                                            span { class: "{role_badge}", {member.role.as_str()} }
                                        }
                                        button {
                                            r#type: "button",
                                            class: "btn btn-ghost btn-xs",
                                            onclick: move |_| form.write().remove_cast(actor_id),
                                            Icon { width: 12, height: 12, icon: FaXmark }
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
