use dioxus::prelude::*;

use crate::routes::Route;

/// Fallback for unknown paths.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-code", "404" }
            h1 { class: "not-found-title", "Page Not Found" }
            p { class: "not-found-message",
                "No page at "
                code { "{path}" }
            }
            Link { to: Route::DoctorsDashboard {}, class: "not-found-link", "Back to Doctors" }
        }
    }
}
