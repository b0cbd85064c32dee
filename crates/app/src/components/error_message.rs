use dioxus::prelude::*;
use shared_ui::components::{Button, ButtonVariant};

/// Error panel with a retry action.
#[component]
pub fn ErrorMessage(message: String, on_retry: EventHandler<()>) -> Element {
    rsx! {
        div { class: "error-message", role: "alert",
            div { class: "error-message-text",
                h3 { class: "error-message-title", "Error" }
                p { "{message}" }
            }
            Button {
                variant: ButtonVariant::Secondary,
                label: "Retry request",
                onclick: move |_| on_retry.call(()),
                "Retry"
            }
        }
    }
}
