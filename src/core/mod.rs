pub mod aggregate;
pub mod period;
pub mod service;

pub use aggregate::{PeriodReport, aggregate};
pub use period::{Period, parse_period};
pub use service::DataService;
