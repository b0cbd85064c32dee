use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

use crate::doctor::Doctor;

/// Pagination metadata echoed by the API alongside each page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct Pagination {
    #[cfg_attr(feature = "validation", validate(range(min = 1)))]
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
}

impl Pagination {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// 1-based index of the first record on this page.
    pub fn first_shown(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.limit) + 1
    }

    /// 1-based index of the last record on this page.
    pub fn last_shown(&self) -> u64 {
        (u64::from(self.page) * u64::from(self.limit)).min(self.total)
    }
}

/// Response body of `GET /v1/doctors`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct DoctorsResponse {
    #[cfg_attr(feature = "validation", validate(nested))]
    pub doctors: Vec<Doctor>,
    #[cfg_attr(feature = "validation", validate(nested))]
    pub pagination: Pagination,
}

/// Response body of `GET /v1/doctors/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct DoctorResponse {
    #[cfg_attr(feature = "validation", validate(nested))]
    pub doctor: Doctor,
}
