use dioxus::prelude::*;

/// Responsive grid for filter inputs and selects.
#[component]
pub fn FilterGrid(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "filter-grid",
            {children}
        }
    }
}
