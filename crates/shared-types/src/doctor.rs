use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

/// Text shown wherever working hours are missing or cannot be read.
pub const HOURS_NOT_SPECIFIED: &str = "Not specified";

/// Account lifecycle status of a doctor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoctorStatus {
    Active,
    Pending,
    Blocked,
}

impl DoctorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Pending => "pending",
            Self::Blocked => "blocked",
        }
    }
}

impl std::fmt::Display for DoctorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A doctor record as returned by the directory API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Avatar URL. The API sends `null`, an empty string, or omits it
    /// when there is no picture.
    #[serde(default)]
    pub profile_picture: Option<String>,
    pub is_status: DoctorStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[cfg_attr(feature = "validation", validate(nested))]
    pub doctor_profile: DoctorProfile,
}

/// Practice details embedded in every [`Doctor`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct DoctorProfile {
    pub specialisation: String,
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 0.0, max = 5.0, message = "Rating must be between 0 and 5"))
    )]
    pub rating: f64,
    pub rating_count: u32,
    #[serde(default)]
    pub address: Option<String>,
    /// Day name to free-text hours. The API does not contract this shape,
    /// so it is kept as raw JSON and only interpreted for display.
    #[serde(default)]
    pub working_hours: Option<serde_json::Value>,
    #[serde(default)]
    pub bio: Option<String>,
    pub is_listed: bool,
    #[serde(default)]
    pub supported_languages: Option<Vec<String>>,
}

impl DoctorProfile {
    /// Number of filled stars in a five-star row.
    pub fn filled_stars(&self) -> usize {
        filled_stars(self.rating)
    }

    /// Working hours as ordered `(day, hours)` pairs.
    ///
    /// Returns `None` when the value is absent, is not an object, is empty,
    /// or holds a non-string hours entry.
    pub fn working_hours_entries(&self) -> Option<Vec<(String, String)>> {
        let map = self.working_hours.as_ref()?.as_object()?;
        if map.is_empty() {
            return None;
        }
        map.iter()
            .map(|(day, hours)| hours.as_str().map(|h| (day.clone(), h.to_string())))
            .collect()
    }

    /// Working hours flattened to `"Monday: 9-5, Tuesday: 9-5"`.
    pub fn working_hours_display(&self) -> String {
        match self.working_hours_entries() {
            Some(entries) => entries
                .iter()
                .map(|(day, hours)| format!("{day}: {hours}"))
                .collect::<Vec<_>>()
                .join(", "),
            None => HOURS_NOT_SPECIFIED.to_string(),
        }
    }

    /// Languages as a slice, empty when the API sent none.
    pub fn languages(&self) -> &[String] {
        self.supported_languages.as_deref().unwrap_or_default()
    }
}

/// `floor(rating)` clamped to the 0..=5 star range.
pub fn filled_stars(rating: f64) -> usize {
    if rating.is_nan() {
        return 0;
    }
    rating.clamp(0.0, 5.0).floor() as usize
}
