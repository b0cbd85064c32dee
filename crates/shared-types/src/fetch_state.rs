use crate::common::{DoctorsResponse, Pagination};
use crate::doctor::Doctor;
use crate::error::ApiError;

/// Handle for one issued fetch. Only the most recent ticket may update state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn seq(&self) -> u64 {
        self.0
    }
}

/// Snapshot of the doctor list as seen by the dashboard.
///
/// A failed fetch never clears `doctors`, so the last good page stays
/// visible alongside the error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchState {
    pub doctors: Vec<Doctor>,
    pub pagination: Option<Pagination>,
    pub loading: bool,
    pub error: Option<String>,
    latest: u64,
}

impl FetchState {
    /// State for a view whose first fetch is about to start.
    pub fn pending() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    /// Mark a new fetch as in flight and return its ticket.
    pub fn begin(&mut self) -> RequestTicket {
        self.latest += 1;
        self.loading = true;
        self.error = None;
        RequestTicket(self.latest)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Apply a fetch outcome. Returns `false` when the ticket is stale and
    /// the outcome was discarded.
    pub fn finish(&mut self, ticket: RequestTicket, result: Result<DoctorsResponse, ApiError>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        match result {
            Ok(resp) => {
                self.doctors = resp.doctors;
                self.pagination = Some(resp.pagination);
                self.loading = false;
                self.error = None;
            }
            Err(err) => {
                self.loading = false;
                self.error = Some(err.message);
            }
        }
        true
    }

    pub fn has_doctors(&self) -> bool {
        !self.doctors.is_empty()
    }
}

/// State of a single-doctor lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DoctorState {
    pub doctor: Option<Doctor>,
    pub loading: bool,
    pub error: Option<String>,
    latest: u64,
}

impl DoctorState {
    pub fn pending() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    pub fn begin(&mut self) -> RequestTicket {
        self.latest += 1;
        self.loading = true;
        self.error = None;
        RequestTicket(self.latest)
    }

    pub fn finish(&mut self, ticket: RequestTicket, result: Result<Doctor, ApiError>) -> bool {
        if ticket.0 != self.latest {
            return false;
        }
        self.loading = false;
        match result {
            Ok(doctor) => {
                self.doctor = Some(doctor);
                self.error = None;
            }
            Err(err) => self.error = Some(err.message),
        }
        true
    }

    /// No doctor to look up: settle without a request and drop any lookup
    /// still in flight.
    pub fn clear(&mut self) {
        self.latest += 1;
        self.loading = false;
        self.doctor = None;
        self.error = None;
    }
}
