use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaChevronLeft, FaChevronRight};
use dioxus_free_icons::Icon;

/// Previous/next page controls under every paginated table.
#[component]
pub fn Pagination(
    page: u64,
    total_pages: u64,
    has_prev: bool,
    has_next: bool,
    on_prev: EventHandler<()>,
    on_next: EventHandler<()>,
) -> Element {
    let total_display = total_pages.max(1);

    rsx! {
        nav { class: "flex justify-center p-4",
            div { class: "join",
                button {
                    id: "goto-prev",
                    class: "join-item btn",
                    disabled: !has_prev,
                    onclick: move |_| on_prev.call(()),
                    Icon { width: 16, height: 16, icon: FaChevronLeft }
                }
                span { class: "join-item btn btn-ghost pointer-events-none",
                    "Page {page} of {total_display}"
                }
                button {
                    id: "goto-next",
                    class: "join-item btn",
                    disabled: !has_next,
                    onclick: move |_| on_next.call(()),
                    Icon { width: 16, height: 16, icon: FaChevronRight }
                }
            }
        }
    }
}
