use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaClapperboard, FaEye, FaFilm, FaUsers};
use dioxus_free_icons::Icon;

#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::client::api::ApiClient;
#[cfg(feature = "web")]
use crate::client::api::analytics;
use crate::client::components::StatSkeleton;
use crate::client::routes::format_count;
#[cfg(feature = "web")]
use crate::client::routes::report_error;
use crate::client::store::{AuthStore, ToastStore};
use crate::model::stats::DashboardStats;

#[component]
pub fn Dashboard() -> Element {
    let api = use_context::<ApiClient>();
    let auth = use_context::<AuthStore>();
    let toasts = use_context::<ToastStore>();
    let nav = use_navigator();

    let mut stats = use_signal(|| None::<DashboardStats>);

    use_effect(move || {
        #[cfg(feature = "web")]
        {
            spawn(async move {
                match analytics::dashboard(&api).await {
                    Ok(data) => stats.set(Some(data)),
                    Err(err) => {
                        tracing::error!("failed to load dashboard stats: {err}");
                        report_error(&err, auth, toasts, nav);
                    }
                }
            });
        }
    });

    let loaded = *stats.read();

    rsx! {
        Title { "Dashboard | Marquee Admin" }
        Meta {
            name: "description",
            content: "Administrative console for the Marquee video-streaming catalog."
        }
        h1 { class: "text-2xl font-bold mb-6", "Dashboard" }
        div { class: "grid grid-cols-1 sm:grid-cols-2 xl:grid-cols-4 gap-4",
            if let Some(stats) = loaded {
                StatCard {
                    label: "Users",
                    value: format_count(stats.total_users),
                    icon: rsx! { Icon { width: 28, height: 28, icon: FaUsers } },
                }
                StatCard {
                    label: "Dramas",
                    value: format_count(stats.total_dramas),
                    icon: rsx! { Icon { width: 28, height: 28, icon: FaClapperboard } },
                }
                StatCard {
                    label: "Episodes",
                    value: format_count(stats.total_episodes),
                    icon: rsx! { Icon { width: 28, height: 28, icon: FaFilm } },
                }
                StatCard {
                    label: "Total views",
                    value: format_count(stats.total_views),
                    icon: rsx! { Icon { width: 28, height: 28, icon: FaEye } },
                }
            } else {
                for index in 0..4 {
                    StatSkeleton { key: "{index}" }
                }
            }
        }
    }
}

#[component]
fn StatCard(label: &'static str, value: String, icon: Element) -> Element {
    rsx! {
        div { class: "card bg-base-200 shadow-sm",
            div { class: "card-body flex-row items-center gap-4",
                div { class: "text-primary", {icon} }
                div {
                    p { class: "text-sm text-base-content/60", "{label}" }
                    p { class: "text-2xl font-bold", "{value}" }
                }
            }
        }
    }
}
