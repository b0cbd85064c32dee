pub mod error;

pub mod common;
pub mod config;
pub mod doctor;
pub mod fetch_state;
pub mod pagination;
pub mod requests;

pub use common::*;
pub use config::*;
pub use doctor::*;
pub use error::*;
pub use fetch_state::*;
pub use pagination::*;
pub use requests::*;
