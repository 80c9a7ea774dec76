//! Widget and demo configuration, deserialized from JSON.
//!
//! Every field has a default, so `{}` is a valid configuration. Instants are
//! written in any layout [`parse_instant`] understands.

use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

use crate::error::Result;
use crate::format::AgeOptions;
use crate::instant::parse_instant;

/// Birthdate used when neither the file nor `BIRTHDATE` provides one.
const DEFAULT_BIRTHDATE: (i32, u32, u32) = (1992, 6, 14);

/// Bounds and step of a numeric stepper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NumberInputConfig {
    pub value: i64,
    pub min: i64,
    /// `i64::MAX` leaves the stepper unbounded above.
    pub max: i64,
    pub step: i64,
}

impl Default for NumberInputConfig {
    fn default() -> Self {
        Self {
            value: 0,
            min: 0,
            max: i64::MAX,
            step: 1,
        }
    }
}

/// Behaviour of a date picker.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DateInputConfig {
    pub label: Option<String>,
    pub show_age_calculation: bool,
    pub can_be_future_date: bool,
    pub can_be_past_date: bool,
    pub required: bool,
    /// Select date and time instead of a whole day.
    pub show_time: bool,
    #[serde(deserialize_with = "deserialize_optional_instant")]
    pub initial_value: Option<NaiveDateTime>,
    /// Instant the timeline and age are measured against; `None` means now.
    #[serde(deserialize_with = "deserialize_optional_instant")]
    pub reference_date: Option<NaiveDateTime>,
}

impl Default for DateInputConfig {
    fn default() -> Self {
        Self {
            label: None,
            show_age_calculation: false,
            can_be_future_date: true,
            can_be_past_date: true,
            required: false,
            show_time: false,
            initial_value: None,
            reference_date: None,
        }
    }
}

/// Configuration of the demo binary.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    #[serde(deserialize_with = "deserialize_instant")]
    pub birthdate: NaiveDateTime,
    #[serde(deserialize_with = "deserialize_optional_instant")]
    pub reference: Option<NaiveDateTime>,
    #[serde(flatten)]
    pub age: AgeOptions,
    pub log_level: String,
    pub number_input: NumberInputConfig,
    pub date_input: DateInputConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        let (year, month, day) = DEFAULT_BIRTHDATE;
        let birthdate = NaiveDate::from_ymd_opt(year, month, day)
            .unwrap_or_default()
            .and_time(chrono::NaiveTime::MIN);

        Self {
            birthdate,
            reference: None,
            age: AgeOptions::default(),
            log_level: "info".to_string(),
            number_input: NumberInputConfig::default(),
            date_input: DateInputConfig::default(),
        }
    }
}

impl DemoConfig {
    /// Load from an optional JSON file, then apply `BIRTHDATE` and
    /// `LOG_LEVEL` from the environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(
            std::env::var("BIRTHDATE").ok().as_deref(),
            std::env::var("LOG_LEVEL").ok().as_deref(),
        )?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn apply_overrides(&mut self, birthdate: Option<&str>, log_level: Option<&str>) -> Result<()> {
        if let Some(raw) = birthdate {
            self.birthdate = parse_instant(raw)?;
        }
        if let Some(level) = log_level {
            self.log_level = level.to_string();
        }
        Ok(())
    }
}

fn deserialize_instant<'de, D>(deserializer: D) -> std::result::Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_instant(&raw).map_err(serde::de::Error::custom)
}

fn deserialize_optional_instant<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    raw.map(|raw| parse_instant(&raw).map_err(serde::de::Error::custom))
        .transpose()
}
