use dioxus::prelude::*;
use shared_types::Pagination as PageMeta;
use shared_ui::components::Pagination;

/// Result summary plus page chips. Hidden when everything fits on one page.
#[component]
pub fn DoctorPagination(pagination: PageMeta, on_page_change: EventHandler<u32>) -> Element {
    if pagination.total_pages <= 1 {
        return rsx! {};
    }

    rsx! {
        div { class: "doctor-pagination",
            p { class: "doctor-pagination-summary",
                "Showing {pagination.first_shown()} to {pagination.last_shown()} of {pagination.total} results"
            }
            Pagination {
                page: pagination.page,
                total_pages: pagination.total_pages,
                on_page_change,
            }
        }
    }
}
