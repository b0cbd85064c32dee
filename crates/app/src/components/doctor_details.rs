use dioxus::prelude::*;
use shared_types::{Doctor, DoctorStatus};
use shared_ui::components::{
    Badge, BadgeVariant, DetailFooter, DetailGrid, DetailItem, DetailList,
};

use crate::components::StarRating;
use crate::format_helpers::{avatar_src, format_date_human, format_review_count};

fn status_variant(status: DoctorStatus) -> BadgeVariant {
    match status {
        DoctorStatus::Active => BadgeVariant::Success,
        DoctorStatus::Pending => BadgeVariant::Info,
        DoctorStatus::Blocked => BadgeVariant::Destructive,
    }
}

/// Heading block: avatar, name, specialisation and rating.
///
/// `title_id` is placed on the name so a dialog can reference it.
#[component]
pub fn DoctorSummary(doctor: Doctor, #[props(default)] title_id: String) -> Element {
    let profile = &doctor.doctor_profile;
    let avatar = avatar_src(doctor.profile_picture.as_deref()).to_string();
    let reviews = format_review_count(profile.rating_count);

    rsx! {
        div { class: "doctor-summary",
            img {
                class: "doctor-avatar doctor-avatar-large",
                src: "{avatar}",
                alt: "{doctor.name}",
                width: "96",
                height: "96",
            }
            div {
                h2 { class: "doctor-name", id: "{title_id}", "{doctor.name}" }
                p { class: "doctor-specialisation", "{profile.specialisation}" }
                div { class: "doctor-rating",
                    StarRating { rating: profile.rating, size: 20 }
                    span { class: "doctor-rating-value", "{profile.rating}" }
                    span { class: "doctor-rating-count", "({reviews})" }
                }
            }
        }
    }
}

/// Full profile sections for one doctor.
#[component]
pub fn DoctorDetails(doctor: Doctor) -> Element {
    let profile = &doctor.doctor_profile;
    let member_since = format_date_human(&doctor.created_at);
    let last_updated = format_date_human(&doctor.updated_at);
    let hours = profile.working_hours_display();

    rsx! {
        DetailList {
            DetailGrid {
                DetailItem { label: "Email", value: doctor.email.clone() }
                DetailItem { label: "Phone", value: doctor.phone.clone() }
                DetailItem { label: "Status",
                    Badge { variant: status_variant(doctor.is_status), "{doctor.is_status}" }
                }
                DetailItem { label: "Listing",
                    if profile.is_listed {
                        Badge { variant: BadgeVariant::Success, "Listed" }
                    } else {
                        Badge { variant: BadgeVariant::Neutral, "Unlisted" }
                    }
                }
            }

            if let Some(address) = profile.address.as_deref().filter(|a| !a.is_empty()) {
                DetailItem { label: "Address", value: address.to_string() }
            }

            if !profile.languages().is_empty() {
                DetailItem { label: "Languages",
                    div { class: "doctor-languages",
                        for lang in profile.languages().iter() {
                            Badge { key: "{lang}", variant: BadgeVariant::Neutral, "{lang}" }
                        }
                    }
                }
            }

            DetailItem { label: "Working Hours", value: hours }

            if let Some(bio) = profile.bio.as_deref().filter(|b| !b.is_empty()) {
                DetailItem { label: "About", value: bio.to_string() }
            }

            DetailFooter {
                span { "Member since {member_since}" }
                span { "Last updated {last_updated}" }
            }
        }
    }
}
