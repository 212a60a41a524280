pub(crate) mod coverage;
pub(crate) mod error;
pub(crate) mod reference;
pub(crate) mod schedules;
pub(crate) mod shift_types;
pub(crate) mod units;

pub(crate) use error::ApiError;
