use dioxus::prelude::*;

/// Labelled text input.
#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    /// Screen-reader hint linked through `aria-describedby`.
    #[props(default)]
    help: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let help_id = format!("{id}-help");

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-wrapper",
            if !label.is_empty() {
                label { class: "input-label", r#for: "{id}", "{label}" }
            }
            input {
                r#type: "text",
                id: "{id}",
                value: value,
                placeholder: placeholder,
                "aria-describedby": if help.is_empty() { None } else { Some(help_id.clone()) },
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
            if !help.is_empty() {
                span { id: "{help_id}", class: "sr-only", "{help}" }
            }
        }
    }
}
