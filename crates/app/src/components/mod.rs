mod doctor_card;
mod doctor_details;
mod doctor_filters;
mod doctor_modal;
mod doctor_pagination;
mod error_message;
mod star_rating;

pub use doctor_card::DoctorCard;
pub use doctor_details::{DoctorDetails, DoctorSummary};
pub use doctor_filters::DoctorFilters;
pub use doctor_modal::DoctorModal;
pub use doctor_pagination::DoctorPagination;
pub use error_message::ErrorMessage;
pub use star_rating::StarRating;
