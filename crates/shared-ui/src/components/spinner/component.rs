use dioxus::prelude::*;

/// Spinner size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SpinnerSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl SpinnerSize {
    fn class(&self) -> &'static str {
        match self {
            SpinnerSize::Small => "sm",
            SpinnerSize::Medium => "md",
            SpinnerSize::Large => "lg",
        }
    }
}

/// Rotating loading indicator announced to assistive technology.
#[component]
pub fn Spinner(#[props(default)] size: SpinnerSize) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "spinner-wrapper", role: "status",
            div { class: "spinner", "data-size": size.class() }
            span { class: "sr-only", "Loading..." }
        }
    }
}
