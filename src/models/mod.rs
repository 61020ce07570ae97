pub mod advance;
pub mod expense;
pub mod settings;
pub mod stats;
pub mod status;
pub mod work_entry;

pub use advance::AdvanceEntry;
pub use expense::ExpenseEntry;
pub use settings::{PartialSettings, Theme, UserSettings};
pub use stats::PeriodStats;
pub use status::DayStatus;
pub use work_entry::{DayEntry, ExtraServiceEntry, WorkEntry, WorkLog};
