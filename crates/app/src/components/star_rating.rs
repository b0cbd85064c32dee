use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdStar;
use dioxus_free_icons::Icon;
use shared_types::filled_stars;

const STAR_COUNT: usize = 5;

/// Five-star row with `floor(rating)` stars filled.
#[component]
pub fn StarRating(rating: f64, #[props(default = 16)] size: u32) -> Element {
    let filled = filled_stars(rating);

    rsx! {
        div {
            class: "star-rating",
            role: "img",
            "aria-label": "Rating: {rating} out of 5 stars",
            for i in 0..STAR_COUNT {
                span {
                    key: "{i}",
                    class: if i < filled { "star star-filled" } else { "star star-empty" },
                    "aria-hidden": "true",
                    Icon::<LdStar> { icon: LdStar, width: size, height: size }
                }
            }
        }
    }
}
