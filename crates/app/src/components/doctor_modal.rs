use dioxus::prelude::*;
use shared_types::Doctor;
use shared_ui::components::{Button, ButtonVariant, Dialog, DialogBody, DialogFooter};

use crate::components::{DoctorDetails, DoctorSummary};

const TITLE_ID: &str = "doctor-modal-title";

/// Profile dialog for the selected doctor.
///
/// Renders nothing unless `open` is set and a doctor is given.
#[component]
pub fn DoctorModal(doctor: Option<Doctor>, open: bool, on_close: EventHandler<()>) -> Element {
    let Some(doctor) = doctor.filter(|_| open) else {
        return rsx! {};
    };
    let profile_href = format!("/doctors/{}", urlencoding::encode(&doctor.id));

    rsx! {
        Dialog { open, on_close, labelled_by: TITLE_ID,
            DialogBody {
                DoctorSummary { doctor: doctor.clone(), title_id: TITLE_ID }
                DoctorDetails { doctor }
            }
            DialogFooter {
                a { class: "doctor-profile-link", href: "{profile_href}", "Open full profile" }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_close.call(()),
                    "Close"
                }
            }
        }
    }
}
