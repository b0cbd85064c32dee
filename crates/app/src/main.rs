use client::DoctorsClient;
use dioxus::prelude::*;

mod components;
mod format_helpers;
mod hooks;
mod routes;
#[cfg(test)]
mod test_fixtures;

use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(DoctorsClient::from_app_config);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
