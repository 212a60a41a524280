mod error;
mod schedule_service;
mod views;

pub use error::*;
pub use schedule_service::*;
pub use views::*;
