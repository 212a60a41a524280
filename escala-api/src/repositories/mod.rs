mod employee_repo;
mod holiday_repo;
#[cfg(test)]
mod mock;
mod repo_error;
mod schedule_repo;
mod shift_type_repo;
mod unit_repo;
mod vacation_repo;

pub use employee_repo::*;
pub use holiday_repo::*;
#[cfg(test)]
pub use mock::*;
pub use repo_error::RepositoryError;
pub use schedule_repo::*;
pub use shift_type_repo::*;
pub use unit_repo::*;
pub use vacation_repo::*;
