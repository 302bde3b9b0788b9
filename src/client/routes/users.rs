use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaTrash, FaUserShield};
use dioxus_free_icons::Icon;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::client::api::ApiClient;
#[cfg(feature = "web")]
use crate::client::api::users;
use crate::client::components::{
    ConfirmDialog, EmptyState, ErrorBanner, Modal, Pagination, SearchBar, SelectField,
    TableSkeleton,
};
use crate::client::list::{ListPhase, ListQuery, ListState};
use crate::client::router::Route;
#[cfg(feature = "web")]
use crate::client::routes::report_error;
use crate::client::store::{AuthStore, ToastStore, ToastStoreExt};
use crate::model::user::{UserDto, UserRole};

#[component]
pub fn Users(page: ReadOnlySignal<u64>, search: ReadOnlySignal<String>) -> Element {
    let api = use_context::<ApiClient>();
    let auth = use_context::<AuthStore>();
    let toasts = use_context::<ToastStore>();
    let nav = use_navigator();

    let query = use_memo(move || ListQuery::from_route(page(), &search()));

    let mut list = use_signal(ListState::<UserDto>::default);
    let mut reload = use_signal(|| 0u32);
    let mut role_dialog = use_signal(|| None::<UserDto>);
    let mut pending_delete = use_signal(|| None::<UserDto>);
    let mut deleting = use_signal(|| false);

    use_effect(move || {
        let current = query();
        let _ = reload();
        #[cfg(feature = "web")]
        {
            let generation = list.write().begin();
            spawn(async move {
                match users::list(&api, &current).await {
                    Ok(data) => {
                        list.write().resolve(generation, data);
                    }
                    Err(err) => {
                        tracing::error!("failed to load users: {err}");
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
        nav.push(Route::Users {
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
                match users::delete(&api, target.id).await {
                    Ok(()) => {
                        toasts.success(format!("{} deleted", target.email));
                        pending_delete.set(None);
                        reload += 1;
                    }
                    Err(err) => report_error(&err, auth, toasts, nav),
                }
                deleting.set(false);
            });
        }
    };

    // the signed-in administrator cannot delete their own account
    let own_id = auth.read().user.as_ref().map(|user| user.id);

    let state = list.read();
    let phase = state.phase();
    let data = state.data();
    let initial_load = phase == ListPhase::Loading && state.rows().is_empty();
    let current = query();

    rsx! {
        Title { "Users | Marquee Admin" }
        Meta {
            name: "description",
            content: "Administrative console for the Marquee video-streaming catalog."
        }
        div { class: "flex items-center justify-between mb-4",
            div { class: "flex items-center gap-3",
                h1 { class: "text-2xl font-bold", "Users" }
                if phase == ListPhase::Loading && !initial_load {
                    span { class: "loading loading-spinner loading-sm" }
                }
            }
        }

        div { class: "mb-4",
            SearchBar {
                value: search,
                placeholder: "Search users",
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
                        th { "Email" }
                        th { "Role" }
                        th { "Status" }
                        th { class: "text-right", "Actions" }
                    }
                }
                tbody {
                    if initial_load {
                        TableSkeleton { rows: 5, columns: 5 }
                    } else {
                        for user in state.rows().iter() {
                            {
                                let id = user.id;
                                let is_self = own_id == Some(id);
                                let for_role = user.clone();
                                let for_delete = user.clone();
                                let role_badge = match user.role {
                                    UserRole::Admin => "badge badge-primary",
                                    UserRole::User => "badge badge-ghost",
                                };
                                rsx! {
                                    tr { key: "{id}", class: "hover",
                                        td { span { class: "font-semibold", "{user.name}" } }
                                        td { "{user.email}" }
                                        td {
                                            span { class: "{role_badge}", {user.role.as_str()} }
                                        }
                                        td {
                                            if user.banned {
                                                span { class: "badge badge-error", "banned" }
                                            } else {
                                                span { class: "badge badge-outline", "active" }
                                            }
                                        }
                                        td { class: "text-right",
                                            div { class: "flex gap-1 justify-end",
                                                button {
                                                    class: "btn btn-ghost btn-sm",
                                                    title: "Change role",
                                                    onclick: move |_| {
                                                        role_dialog.set(Some(for_role.clone()));
                                                    },
                                                    Icon { width: 14, height: 14, icon: FaUserShield }
                                                }
                                                button {
                                                    class: "btn btn-ghost btn-sm text-error",
                                                    disabled: is_self,
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
            EmptyState { message: "No users match this view." }
        }

        Pagination {
            page: current.page,
            total_pages: data.total_pages(),
            has_prev: data.has_prev(current.page),
            has_next: data.has_next(current.page),
            on_prev: move |_| go(query.peek().with_page(query.peek().page - 1)),
            on_next: move |_| go(query.peek().with_page(query.peek().page + 1)),
        }

        if let Some(target) = role_dialog() {
            RoleDialog {
                user: target,
                on_close: move |_| role_dialog.set(None),
                on_saved: move |_| {
                    role_dialog.set(None);
                    reload += 1;
                },
            }
        }

        if let Some(target) = pending_delete() {
            ConfirmDialog {
                title: "Delete user",
                message: format!(
                    "{} will lose access and their watch history will be removed. This cannot be undone.",
                    target.email
                ),
                busy: deleting(),
                on_confirm: confirm_delete,
                on_cancel: move |_| pending_delete.set(None),
            }
        }
    }
}

#[component]
fn RoleDialog(user: UserDto, on_close: EventHandler<()>, on_saved: EventHandler<()>) -> Element {
    let api = use_context::<ApiClient>();
    let auth = use_context::<AuthStore>();
    let toasts = use_context::<ToastStore>();
    let nav = use_navigator();

    let user_id = user.id;
    let mut role = use_signal(|| user.role);
    let mut busy = use_signal(|| false);

    let submit = move |event: FormEvent| {
        event.prevent_default();
        #[cfg(feature = "web")]
        {
            busy.set(true);
            let chosen = *role.peek();
            spawn(async move {
                match users::update_role(&api, user_id, chosen).await {
                    Ok(updated) => {
                        toasts.success(format!(
                            "{} is now {}",
                            updated.email,
                            updated.role.as_str()
                        ));
                        on_saved.call(());
                    }
                    Err(err) => report_error(&err, auth, toasts, nav),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "web"))]
        let _ = event;
    };

    let role_options = vec![
        ("admin".to_string(), "Administrator".to_string()),
        ("user".to_string(), "Member".to_string()),
    ];

    rsx! {
        Modal { title: "Change role", on_close: move |_| on_close.call(()),
            form { class: "flex flex-col gap-3", onsubmit: submit,
                p { class: "text-sm text-base-content/70",
                    "Set the role for {user.email}."
                }
                SelectField {
                    label: "Role",
                    value: role.read().as_str().to_string(),
                    options: role_options,
                    on_change: move |value: String| {
                        role.set(if value == "admin" {
                            UserRole::Admin
                        } else {
                            UserRole::User
                        });
                    },
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
