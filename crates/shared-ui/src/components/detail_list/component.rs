use dioxus::prelude::*;

/// Vertical list of labelled sections in a detail view.
#[component]
pub fn DetailList(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "detail-list", {children} }
    }
}

/// One labelled section inside a `DetailList`.
///
/// Pass `value` for plain text, or children for rich content such as badges.
#[component]
pub fn DetailItem(
    label: &'static str,
    #[props(default)] value: String,
    children: Element,
) -> Element {
    let has_children = children != Ok(VNode::placeholder());

    rsx! {
        div { class: "detail-item",
            h4 { class: "detail-item-label", "{label}" }
            div { class: "detail-item-value",
                if has_children {
                    {children}
                } else {
                    p { "{value}" }
                }
            }
        }
    }
}

/// Two-column grid of `DetailItem`s.
#[component]
pub fn DetailGrid(children: Element) -> Element {
    rsx! {
        div { class: "detail-grid", {children} }
    }
}

/// Muted footer row for metadata like timestamps.
#[component]
pub fn DetailFooter(children: Element) -> Element {
    rsx! {
        div { class: "detail-footer", {children} }
    }
}
