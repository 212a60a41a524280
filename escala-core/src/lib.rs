mod calendar;
mod coverage;
mod employee;
mod error;
mod hours;
mod ids;
mod locale;
mod schedule;
mod shift;

pub use calendar::*;
pub use coverage::*;
pub use employee::*;
pub use error::*;
pub use hours::*;
pub use ids::*;
pub use locale::*;
pub use schedule::*;
pub use shift::*;
