//! Fiscal calendar: declaration quarters and selectable years.

pub mod error;
pub mod quarter;
pub mod years;


pub use error::QuarterError;
pub use quarter::{Quarter, is_date_between, is_in_quarter};
pub use years::{is_selectable_year, years_to_fetch};
