use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdChevronLeft, LdChevronRight};
use dioxus_free_icons::Icon;
use shared_types::{next_page, page_window, prev_page, PageItem};

use crate::components::button::{Button, ButtonVariant};

/// Numbered page chips with previous/next controls.
///
/// Shows page 1, the last page, and a window around `page`, with ellipses
/// for the gaps. Renders nothing when there is at most one page. Every
/// click reports the literal target page through `on_page_change`.
#[component]
pub fn Pagination(page: u32, total_pages: u32, on_page_change: EventHandler<u32>) -> Element {
    let items = page_window(page, total_pages);
    if items.is_empty() {
        return rsx! {};
    }

    let prev = prev_page(page);
    let next = next_page(page, total_pages);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        nav { class: "pagination", "aria-label": "Pagination Navigation",
            Button {
                variant: ButtonVariant::Outline,
                label: "Go to previous page",
                disabled: prev.is_none(),
                onclick: move |_| {
                    if let Some(target) = prev {
                        on_page_change.call(target);
                    }
                },
                Icon::<LdChevronLeft> { icon: LdChevronLeft, width: 16, height: 16 }
                span { class: "sr-only", "Previous" }
            }
            for (index, item) in items.into_iter().enumerate() {
                match item {
                    PageItem::Ellipsis => rsx! {
                        span { key: "ellipsis-{index}", class: "pagination-ellipsis", "aria-hidden": "true", "..." }
                    },
                    PageItem::Page(number) => rsx! {
                        button {
                            key: "{number}",
                            class: "button",
                            "data-style": "outline",
                            r#type: "button",
                            "aria-label": "Go to page {number}",
                            "aria-current": if number == page { Some("page") } else { None },
                            onclick: move |_| on_page_change.call(number),
                            "{number}"
                        }
                    },
                }
            }
            Button {
                variant: ButtonVariant::Outline,
                label: "Go to next page",
                disabled: next.is_none(),
                onclick: move |_| {
                    if let Some(target) = next {
                        on_page_change.call(target);
                    }
                },
                span { class: "sr-only", "Next" }
                Icon::<LdChevronRight> { icon: LdChevronRight, width: 16, height: 16 }
            }
        }
    }
}
