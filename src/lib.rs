//! Computational core of the PH input widgets: calendar-aware age
//! arithmetic, its Portuguese rendering, and the state behind the numeric
//! stepper and the date picker.

pub mod age;
pub mod config;
pub mod error;
pub mod format;
pub mod hello;
pub mod input_date;
pub mod input_number;
pub mod instant;
pub mod logging;
pub mod messages;

pub use age::{AgeBreakdown, Detail, diff};
pub use error::{Result, WidgetError};
pub use format::{AgeOptions, Relative, age_to_string, age_to_string_str, format_age};
pub use input_date::{DateChange, DateInput};
pub use input_number::{Key, KeyOutcome, KeyPress, NumberInput, accepts_key};
