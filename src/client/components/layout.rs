use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaChartLine, FaClapperboard, FaMasksTheater, FaRightFromBracket, FaTags, FaUserShield,
};
use dioxus_free_icons::Icon;

use crate::client::router::Route;
use crate::client::store::{AuthStore, AuthStoreExt};

/// Shell around every protected screen: redirects unauthenticated
/// sessions to the login page, otherwise renders the sidebar, the header,
/// and the matched child route.
#[component]
pub fn AdminLayout() -> Element {
    let auth = use_context::<AuthStore>();
    let nav = use_navigator();

    use_effect(move || {
        let state = auth.read();
        if state.fetched && state.user.is_none() {
            nav.replace(Route::Login {});
        }
    });

    let authenticated = auth.read().is_authenticated();
    if !authenticated {
        // session restore still in flight, or the redirect is about to land
        return rsx! {
            div { class: "min-h-screen flex items-center justify-center",
                span { class: "loading loading-spinner loading-lg" }
            }
        };
    }

    rsx! {
        div { class: "flex min-h-screen bg-base-100",
            Sidebar {}
            div { class: "flex-1 flex flex-col min-w-0",
                Topbar {}
                main { class: "flex-1 p-6",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    let route = use_route::<Route>();

    let active = |matched: bool| if matched { "menu-active" } else { "" };
    let on_dramas = matches!(route, Route::Dramas { .. } | Route::DramaDetail { .. });

    rsx! {
        aside { class: "w-60 bg-base-200 flex flex-col",
            div { class: "p-4 flex items-center gap-2",
                Icon { width: 24, height: 24, icon: FaClapperboard }
                span { class: "text-lg font-bold", "Marquee Admin" }
            }
            ul { class: "menu w-full flex-1 gap-1",
                li {
                    Link {
                        to: Route::Dashboard {},
                        class: active(matches!(route, Route::Dashboard {})),
                        Icon { width: 18, height: 18, icon: FaChartLine }
                        "Dashboard"
                    }
                }
                li {
                    Link {
                        to: Route::dramas(),
                        class: active(on_dramas),
                        Icon { width: 18, height: 18, icon: FaClapperboard }
                        "Dramas"
                    }
                }
                li {
                    Link {
                        to: Route::actors(),
                        class: active(matches!(route, Route::Actors { .. })),
                        Icon { width: 18, height: 18, icon: FaMasksTheater }
                        "Actors"
                    }
                }
                li {
                    Link {
                        to: Route::genres(),
                        class: active(matches!(route, Route::Genres { .. })),
                        Icon { width: 18, height: 18, icon: FaTags }
                        "Genres"
                    }
                }
                li {
                    Link {
                        to: Route::users(),
                        class: active(matches!(route, Route::Users { .. })),
                        Icon { width: 18, height: 18, icon: FaUserShield }
                        "Users"
                    }
                }
            }
        }
    }
}

#[component]
fn Topbar() -> Element {
    let auth = use_context::<AuthStore>();
    let nav = use_navigator();

    let state = auth.read();
    let identity = state
        .user
        .as_ref()
        .map(|user| (user.name.clone(), user.email.clone()));

    rsx! {
        header { class: "navbar bg-base-200 border-b border-base-300",
            div { class: "navbar-start" }
            div { class: "navbar-end gap-3",
                if let Some((name, email)) = identity {
                    div { class: "flex flex-col items-end",
                        span { class: "font-semibold text-sm", "{name}" }
                        span { class: "text-xs text-base-content/60", "{email}" }
                    }
                }
                button {
                    class: "btn btn-outline btn-sm flex gap-2",
                    onclick: move |_| {
                        auth.logout();
                        nav.push(Route::Login {});
                    },
                    Icon { width: 16, height: 16, icon: FaRightFromBracket }
                    "Logout"
                }
            }
        }
    }
}
