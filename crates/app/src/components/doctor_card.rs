use dioxus::prelude::*;
use shared_types::Doctor;
use shared_ui::components::{Badge, BadgeVariant, Button, Card, CardContent, CardFooter};

use crate::components::StarRating;
use crate::format_helpers::{avatar_src, format_review_count};

/// Summary card for one doctor in the results grid.
#[component]
pub fn DoctorCard(doctor: Doctor, on_view_profile: EventHandler<Doctor>) -> Element {
    let profile = &doctor.doctor_profile;
    let avatar = avatar_src(doctor.profile_picture.as_deref()).to_string();
    let reviews = format_review_count(profile.rating_count);
    let view_label = format!("View full profile for {}", doctor.name);
    let selected = doctor.clone();

    rsx! {
        Card { class: "doctor-card",
            CardContent {
                div { class: "doctor-card-header",
                    img {
                        class: "doctor-avatar",
                        src: "{avatar}",
                        alt: "{doctor.name}",
                        width: "64",
                        height: "64",
                    }
                    div { class: "doctor-card-heading",
                        h3 { class: "doctor-name", "{doctor.name}" }
                        p { class: "doctor-specialisation", "{profile.specialisation}" }
                        div { class: "doctor-rating",
                            StarRating { rating: profile.rating }
                            span { class: "doctor-rating-value", "{profile.rating}" }
                            span { class: "doctor-rating-count", "({reviews})" }
                        }
                    }
                }

                if let Some(bio) = profile.bio.as_deref().filter(|b| !b.is_empty()) {
                    p { class: "doctor-bio", "{bio}" }
                }

                if !profile.languages().is_empty() {
                    div { class: "doctor-languages",
                        for lang in profile.languages().iter() {
                            Badge { key: "{lang}", variant: BadgeVariant::Neutral, "{lang}" }
                        }
                    }
                }

                div { class: "doctor-card-status",
                    if profile.is_listed {
                        Badge { variant: BadgeVariant::Success, "Listed" }
                    } else {
                        Badge { variant: BadgeVariant::Neutral, "Unlisted" }
                    }
                }
            }
            CardFooter {
                Button {
                    label: view_label,
                    onclick: move |_| on_view_profile.call(selected.clone()),
                    "View Profile"
                }
            }
        }
    }
}
