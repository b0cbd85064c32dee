use serde::{Deserialize, Serialize};

/// Default number of doctors per page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Field the doctor list is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    #[default]
    Rating,
    RatingCount,
    CreatedAt,
}

impl SortBy {
    pub const ALL: [SortBy; 3] = [SortBy::Rating, SortBy::RatingCount, SortBy::CreatedAt];

    /// Wire value used in the `sortBy` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Rating => "rating",
            SortBy::RatingCount => "rating_count",
            SortBy::CreatedAt => "created_at",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortBy::Rating => "Rating",
            SortBy::RatingCount => "Review Count",
            SortBy::CreatedAt => "Date Added",
        }
    }

    pub fn from_key(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s2| s2.as_str() == s)
    }
}

/// Direction of the doctor list ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Asc => "Lowest First",
            SortOrder::Desc => "Highest First",
        }
    }

    pub fn from_key(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

/// Filter and pagination parameters for `GET /v1/doctors`.
///
/// Every field is optional; `None` means "no constraint" and the field is
/// left out of the query string.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FetchDoctorsParams {
    pub search: Option<String>,
    pub specialisation: Option<String>,
    pub language: Option<String>,
    pub min_rating: Option<f64>,
    pub is_listed: Option<bool>,
    pub sort_by: Option<SortBy>,
    pub sort_order: Option<SortOrder>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

/// A single-field edit to [`FetchDoctorsParams`].
///
/// Text and optional fields carry `None` to clear the constraint.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamChange {
    Search(Option<String>),
    Specialisation(Option<String>),
    Language(Option<String>),
    MinRating(Option<f64>),
    IsListed(Option<bool>),
    SortBy(Option<SortBy>),
    SortOrder(Option<SortOrder>),
    Page(u32),
    Limit(u32),
}

impl FetchDoctorsParams {
    /// Dashboard defaults: first page, rating descending.
    pub fn dashboard_defaults(page_size: u32) -> Self {
        Self {
            page: Some(1),
            limit: Some(page_size),
            sort_by: Some(SortBy::Rating),
            sort_order: Some(SortOrder::Desc),
            ..Self::default()
        }
    }

    pub fn apply(&mut self, change: ParamChange) {
        match change {
            ParamChange::Search(v) => self.search = v,
            ParamChange::Specialisation(v) => self.specialisation = v,
            ParamChange::Language(v) => self.language = v,
            ParamChange::MinRating(v) => self.min_rating = v,
            ParamChange::IsListed(v) => self.is_listed = v,
            ParamChange::SortBy(v) => self.sort_by = v,
            ParamChange::SortOrder(v) => self.sort_order = v,
            ParamChange::Page(v) => self.page = Some(v),
            ParamChange::Limit(v) => self.limit = Some(v),
        }
    }

    /// Shallow merge: a copy of `self` with every change applied in order.
    pub fn merged<I>(&self, changes: I) -> Self
    where
        I: IntoIterator<Item = ParamChange>,
    {
        let mut next = self.clone();
        for change in changes {
            next.apply(change);
        }
        next
    }

    /// Query parameters in wire order, skipping undefined and empty fields.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        for (key, value) in [
            ("search", &self.search),
            ("specialisation", &self.specialisation),
            ("language", &self.language),
        ] {
            if let Some(v) = value.as_deref().filter(|v| !v.is_empty()) {
                pairs.push((key, v.to_string()));
            }
        }
        if let Some(min_rating) = self.min_rating {
            pairs.push(("minRating", min_rating.to_string()));
        }
        if let Some(is_listed) = self.is_listed {
            pairs.push(("isListed", is_listed.to_string()));
        }
        if let Some(sort_by) = self.sort_by {
            pairs.push(("sortBy", sort_by.as_str().to_string()));
        }
        if let Some(sort_order) = self.sort_order {
            pairs.push(("sortOrder", sort_order.as_str().to_string()));
        }

        pairs
    }

    /// Percent-encoded query string without the leading `?`.
    pub fn query_string(&self) -> String {
        self.query_pairs()
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Endpoint path relative to the API base URL.
    pub fn endpoint(&self) -> String {
        let query = self.query_string();
        if query.is_empty() {
            "/v1/doctors".to_string()
        } else {
            format!("/v1/doctors?{query}")
        }
    }
}

/// Path of the single-doctor endpoint, with the id percent-encoded.
pub fn doctor_endpoint(id: &str) -> String {
    format!("/v1/doctors/{}", urlencoding::encode(id))
}
