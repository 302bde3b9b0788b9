use dioxus::prelude::*;

/// Placeholder rows shown while a table loads for the first time.
#[component]
pub fn TableSkeleton(rows: Option<usize>, columns: Option<usize>) -> Element {
    let rows = rows.unwrap_or(5);
    let columns = columns.unwrap_or(4);

    rsx! {
        for row in 0..rows {
            tr { key: "{row}",
                for column in 0..columns {
                    td { key: "{column}",
                        div { class: "skeleton h-4 w-full" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn StatSkeleton() -> Element {
    rsx! {
        div { class: "skeleton h-28 w-full rounded-box" }
    }
}
