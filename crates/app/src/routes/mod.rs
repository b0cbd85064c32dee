pub mod doctor_profile;
pub mod doctors;
pub mod not_found;

use dioxus::prelude::*;

use doctor_profile::DoctorProfilePage;
use doctors::DoctorsDashboard;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    DoctorsDashboard {},
    #[route("/doctors/:id")]
    DoctorProfilePage { id: String },
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}
