use dioxus::prelude::*;

/// Centered modal dialog over a dimmed backdrop.
///
/// Renders nothing while `open` is false, so callers can keep it mounted
/// and toggle visibility with a flag. Clicking the backdrop calls `on_close`.
#[component]
pub fn Dialog(
    open: bool,
    on_close: EventHandler<()>,
    /// Id of the element that names the dialog.
    #[props(default)]
    labelled_by: String,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "dialog-root",
            div {
                class: "dialog-overlay",
                "aria-hidden": "true",
                onclick: move |_| on_close.call(()),
            }
            div {
                class: "dialog-panel",
                role: "dialog",
                "aria-modal": "true",
                "aria-labelledby": labelled_by,
                {children}
            }
        }
    }
}

/// Scrollable body of a Dialog.
#[component]
pub fn DialogBody(children: Element) -> Element {
    rsx! {
        div { class: "dialog-body", {children} }
    }
}

/// Action row at the bottom of a Dialog.
#[component]
pub fn DialogFooter(children: Element) -> Element {
    rsx! {
        div { class: "dialog-footer", {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn closed_dialog_renders_nothing() {
        fn app() -> Element {
            rsx! {
                Dialog { open: false, on_close: move |_| {}, p { "hidden body" } }
            }
        }
        assert!(!render(app).contains("hidden body"));
    }

    #[test]
    fn open_dialog_renders_children() {
        fn app() -> Element {
            rsx! {
                Dialog { open: true, on_close: move |_| {}, labelled_by: "title",
                    DialogBody { h3 { id: "title", "Visible" } }
                }
            }
        }
        let html = render(app);
        assert!(html.contains("role=\"dialog\""));
        assert!(html.contains("aria-labelledby=\"title\""));
        assert!(html.contains("Visible"));
    }
}
