use client::app_config;
use dioxus::prelude::*;
use shared_types::{Doctor, FetchDoctorsParams, FetchState, ParamChange};
use shared_ui::components::{
    Button, ButtonVariant, Card, CardContent, PageHeader, Spinner, SpinnerSize,
};

use crate::components::{DoctorCard, DoctorFilters, DoctorModal, DoctorPagination, ErrorMessage};
use crate::hooks::use_doctors;

/// Which doctor the profile dialog shows, and whether it is open.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub doctor: Option<Doctor>,
    pub open: bool,
}

impl Selection {
    pub fn open_with(&mut self, doctor: Doctor) {
        self.doctor = Some(doctor);
        self.open = true;
    }

    pub fn close(&mut self) {
        self.doctor = None;
        self.open = false;
    }
}

/// Changes for a filter edit. Any filter edit returns to the first page.
pub fn filter_patch(change: ParamChange) -> Vec<ParamChange> {
    vec![change, ParamChange::Page(1)]
}

pub fn page_patch(page: u32) -> Vec<ParamChange> {
    vec![ParamChange::Page(page)]
}

/// Dashboard route: wires the fetch hook into [`DashboardView`].
#[component]
pub fn DoctorsDashboard() -> Element {
    let doctors = use_doctors(FetchDoctorsParams::dashboard_defaults(
        app_config().dashboard.page_size,
    ));

    rsx! {
        DashboardView {
            state: doctors.state(),
            params: doctors.params(),
            on_params_change: move |changes| doctors.update_params(changes),
            on_retry: move |_| doctors.refetch(),
            on_reset: move |_| doctors.reset_params(),
        }
    }
}

/// Filters, result cards, pagination and the profile dialog for one
/// snapshot of fetch state.
#[component]
pub fn DashboardView(
    state: FetchState,
    params: FetchDoctorsParams,
    on_params_change: EventHandler<Vec<ParamChange>>,
    on_retry: EventHandler<()>,
    on_reset: EventHandler<()>,
) -> Element {
    let mut selection = use_signal(Selection::default);

    if state.loading && !state.has_doctors() {
        return rsx! {
            div { class: "dashboard-loading",
                Spinner { size: SpinnerSize::Large }
            }
        };
    }

    if let (Some(message), false) = (&state.error, state.has_doctors()) {
        return rsx! {
            div { class: "container",
                ErrorMessage { message: message.clone(), on_retry }
            }
        };
    }

    let current = selection();
    let show_empty = !state.has_doctors() && !state.loading && state.error.is_none();

    rsx! {
        div { class: "container doctors-dashboard",
            PageHeader {
                title: "Doctors Dashboard",
                subtitle: "Browse and manage doctor profiles",
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_reset.call(()),
                    "Reset Filters"
                }
            }

            DoctorFilters {
                params,
                on_filter_change: move |change| on_params_change.call(filter_patch(change)),
            }

            section { class: "dashboard-results",
                if state.loading {
                    div { class: "dashboard-inline-status",
                        Spinner { size: SpinnerSize::Small }
                        span { "Updating results..." }
                    }
                }

                if let Some(message) = state.error.clone() {
                    ErrorMessage { message, on_retry }
                }

                if show_empty {
                    Card { class: "dashboard-empty",
                        CardContent {
                            h3 { "No doctors found" }
                            p { "Try adjusting your filters or search terms" }
                        }
                    }
                } else {
                    div { class: "doctor-grid",
                        for doctor in state.doctors.iter().cloned() {
                            DoctorCard {
                                key: "{doctor.id}",
                                doctor,
                                on_view_profile: move |doctor| selection.write().open_with(doctor),
                            }
                        }
                    }
                }

                if let Some(pagination) = state.pagination {
                    DoctorPagination {
                        pagination,
                        on_page_change: move |page| on_params_change.call(page_patch(page)),
                    }
                }
            }

            DoctorModal {
                doctor: current.doctor,
                open: current.open,
                on_close: move |_| selection.write().close(),
            }
        }
    }
}
