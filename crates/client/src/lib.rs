pub mod api;
pub mod config;

pub use api::DoctorsClient;
pub use config::app_config;
