use dioxus::prelude::*;
use shared_types::DoctorState;
use shared_ui::components::{Card, CardContent, Spinner, SpinnerSize};

use crate::components::{DoctorDetails, DoctorSummary, ErrorMessage};
use crate::hooks::use_doctor;
use crate::routes::Route;

/// Standalone profile page at `/doctors/:id`.
#[component]
pub fn DoctorProfilePage(id: String) -> Element {
    let doctor = use_doctor(id);

    rsx! {
        div { class: "container doctor-profile-page",
            Link { to: Route::DoctorsDashboard {}, class: "back-link", "Back to Doctors" }
            DoctorProfileView {
                state: doctor.state(),
                on_retry: move |_| doctor.refetch(),
            }
        }
    }
}

#[component]
pub fn DoctorProfileView(state: DoctorState, on_retry: EventHandler<()>) -> Element {
    match (state.doctor, state.error) {
        (_, Some(message)) => rsx! {
            ErrorMessage { message, on_retry }
        },
        (Some(doctor), None) => rsx! {
            Card { class: "doctor-profile",
                CardContent {
                    DoctorSummary { doctor: doctor.clone() }
                    DoctorDetails { doctor }
                }
            }
        },
        (None, None) if state.loading => rsx! {
            Spinner { size: SpinnerSize::Large }
        },
        (None, None) => rsx! {
            p { class: "doctor-profile-missing", "Doctor not found" }
        },
    }
}
