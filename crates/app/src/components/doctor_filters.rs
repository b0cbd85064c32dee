use dioxus::prelude::*;
use shared_types::{FetchDoctorsParams, ParamChange, SortBy, SortOrder};
use shared_ui::components::{Card, CardContent, CardHeader, CardTitle, FilterGrid, FormSelect, Input};

use crate::format_helpers::text_filter_value;

/// Minimum-rating choices as (value, label). The empty value means "any".
const MIN_RATING_OPTIONS: [(&str, &str); 4] =
    [("", "Any Rating"), ("3", "3+ Stars"), ("4", "4+ Stars"), ("4.5", "4.5+ Stars")];

const LISTING_OPTIONS: [(&str, &str); 3] =
    [("", "All"), ("true", "Listed Only"), ("false", "Unlisted Only")];

pub fn parse_min_rating(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|r| r.is_finite())
}

pub fn parse_listed(raw: &str) -> Option<bool> {
    match raw {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

fn min_rating_key(min_rating: Option<f64>) -> String {
    min_rating.map(|r| r.to_string()).unwrap_or_default()
}

fn listed_key(is_listed: Option<bool>) -> &'static str {
    match is_listed {
        Some(true) => "true",
        Some(false) => "false",
        None => "",
    }
}

/// Controlled filter form. Each edit is reported immediately as a single
/// [`ParamChange`]; the form keeps no state of its own.
#[component]
pub fn DoctorFilters(params: FetchDoctorsParams, on_filter_change: EventHandler<ParamChange>) -> Element {
    let sort_by = params.sort_by.unwrap_or_default();
    let sort_order = params.sort_order.unwrap_or_default();

    rsx! {
        Card { class: "doctor-filters",
            CardHeader {
                CardTitle { "Filters" }
            }
            CardContent {
                FilterGrid {
                    Input {
                        id: "filter-search",
                        label: "Search",
                        placeholder: "Search by name, specialization...",
                        help: "Matches doctor names and specialisations",
                        value: params.search.clone().unwrap_or_default(),
                        on_input: move |evt: FormEvent| {
                            on_filter_change.call(ParamChange::Search(text_filter_value(&evt.value())))
                        },
                    }
                    Input {
                        id: "filter-specialisation",
                        label: "Specialisation",
                        placeholder: "e.g., Cardiology",
                        value: params.specialisation.clone().unwrap_or_default(),
                        on_input: move |evt: FormEvent| {
                            on_filter_change.call(ParamChange::Specialisation(text_filter_value(&evt.value())))
                        },
                    }
                    FormSelect {
                        id: "filter-min-rating",
                        label: "Minimum Rating",
                        value: min_rating_key(params.min_rating),
                        onchange: move |evt: FormEvent| {
                            on_filter_change.call(ParamChange::MinRating(parse_min_rating(&evt.value())))
                        },
                        for (value, text) in MIN_RATING_OPTIONS {
                            option { key: "{value}", value: value, "{text}" }
                        }
                    }
                    FormSelect {
                        id: "filter-listing",
                        label: "Listing Status",
                        value: listed_key(params.is_listed),
                        onchange: move |evt: FormEvent| {
                            on_filter_change.call(ParamChange::IsListed(parse_listed(&evt.value())))
                        },
                        for (value, text) in LISTING_OPTIONS {
                            option { key: "{value}", value: value, "{text}" }
                        }
                    }
                    Input {
                        id: "filter-language",
                        label: "Language",
                        placeholder: "e.g., English",
                        value: params.language.clone().unwrap_or_default(),
                        on_input: move |evt: FormEvent| {
                            on_filter_change.call(ParamChange::Language(text_filter_value(&evt.value())))
                        },
                    }
                    FormSelect {
                        id: "filter-sort-by",
                        label: "Sort By",
                        value: sort_by.as_str(),
                        onchange: move |evt: FormEvent| {
                            on_filter_change.call(ParamChange::SortBy(SortBy::from_key(&evt.value())))
                        },
                        for option_sort in SortBy::ALL {
                            option { key: "{option_sort.as_str()}", value: option_sort.as_str(), "{option_sort.label()}" }
                        }
                    }
                    FormSelect {
                        id: "filter-sort-order",
                        label: "Order",
                        value: sort_order.as_str(),
                        onchange: move |evt: FormEvent| {
                            on_filter_change.call(ParamChange::SortOrder(SortOrder::from_key(&evt.value())))
                        },
                        option { value: SortOrder::Desc.as_str(), "{SortOrder::Desc.label()}" }
                        option { value: SortOrder::Asc.as_str(), "{SortOrder::Asc.label()}" }
                    }
                }
            }
        }
    }
}
