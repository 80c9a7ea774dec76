//! State of a date picker: the selection, whether it falls on an allowed
//! side of the reference instant, the optional age caption and validation.
//!
//! Every change to the selection runs the same pipeline, in order:
//! timeline check, age caption, re-validation (only once `validate` has been
//! called), and finally a [`DateChange`] for the owner.

use chrono::{Local, NaiveDateTime};
use rand::Rng;
use tracing::info;

use crate::config::DateInputConfig;
use crate::format::{AgeOptions, age_to_string_str};
use crate::instant::{format_instant, parse_instant};
use crate::messages;

const GENERATED_ID_PREFIX: &str = "input-date-";
const GENERATED_ID_LEN: usize = 7;

/// Emitted after every selection change that went through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateChange {
    /// Selection text as stored by the widget.
    pub selected: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DateInput {
    config: DateInputConfig,
    reference: NaiveDateTime,
    input_id: String,
    selected: Option<String>,
    age_text: Option<String>,
    invalid_timeline: bool,
    validated: bool,
    valid: bool,
    error_message: String,
}

impl DateInput {
    /// Builds the widget and applies `initial_value`, if any.
    ///
    /// Without a configured reference date the widget measures against the
    /// local time at construction.
    pub fn new(config: DateInputConfig) -> Self {
        let reference = config
            .reference_date
            .unwrap_or_else(|| Local::now().naive_local());
        let input_id = input_id_for(config.label.as_deref());
        let initial = config.initial_value;

        let mut input = Self {
            config,
            reference,
            input_id,
            selected: None,
            age_text: None,
            invalid_timeline: false,
            validated: false,
            valid: true,
            error_message: String::new(),
        };
        input.change_date(initial);
        input
    }

    pub fn input_id(&self) -> &str {
        &self.input_id
    }

    pub fn reference(&self) -> NaiveDateTime {
        self.reference
    }

    /// Selection exactly as stored.
    pub fn selected_text(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The selection as an instant; `None` when nothing is selected or the
    /// text does not parse.
    pub fn selected_date(&self) -> Option<NaiveDateTime> {
        self.selected
            .as_deref()
            .and_then(|raw| parse_instant(raw).ok())
    }

    pub fn age_text(&self) -> Option<&str> {
        self.age_text.as_deref()
    }

    pub fn is_in_invalid_timeline(&self) -> bool {
        self.invalid_timeline
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Message from the last failed validation, empty while valid.
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    /// Programmatic selection.
    ///
    /// `Some` stores the canonical text (date only, or date and minutes when
    /// the widget shows time) and runs the change pipeline. `None` clears
    /// the selection without notifying.
    pub fn change_date(&mut self, date: Option<NaiveDateTime>) -> Option<DateChange> {
        match date {
            Some(date) => {
                self.selected = Some(format_instant(date, self.config.show_time));
                Some(self.on_change())
            }
            None => {
                self.selected = None;
                None
            }
        }
    }

    /// Text typed into the field. Empty text clears the selection.
    pub fn set_text(&mut self, raw: &str) -> DateChange {
        let raw = raw.trim();
        self.selected = (!raw.is_empty()).then(|| raw.to_string());
        self.on_change()
    }

    /// Checks the current selection and records the outcome.
    pub fn validate(&mut self) -> bool {
        self.validated = true;
        self.valid = true;
        self.error_message.clear();

        let label = self.config.label.clone().unwrap_or_default();
        let label = label.as_str();

        if self.selected.is_none() {
            if self.config.required {
                self.fail(messages::input_field_required(label));
                info!(label, "date input invalid: required");
            }
        } else if self.selected_date().is_none() {
            self.fail(messages::date_timeline_invalid(label, false, false));
            info!(label, "date input invalid: unparseable date");
        } else if self.invalid_timeline {
            self.fail(messages::date_timeline_invalid(
                label,
                !self.config.can_be_past_date,
                !self.config.can_be_future_date,
            ));
            info!(label, "date input invalid: outside allowed timeline");
        }

        self.valid
    }

    fn fail(&mut self, message: String) {
        self.valid = false;
        self.error_message = message;
    }

    fn on_change(&mut self) -> DateChange {
        self.invalid_timeline = self
            .selected_date()
            .is_some_and(|date| self.is_wrong_timeline(date));
        self.refresh_age();
        if self.validated {
            self.validate();
        }

        DateChange {
            selected: self.selected.clone(),
        }
    }

    /// With time shown the reference instant itself is the boundary;
    /// otherwise any moment of the reference day is acceptable.
    fn is_wrong_timeline(&self, date: NaiveDateTime) -> bool {
        let (in_past, in_future) = if self.config.show_time {
            (date < self.reference, date > self.reference)
        } else {
            let day = self.reference.date();
            (date.date() < day, date.date() > day)
        };

        (!self.config.can_be_past_date && in_past) || (!self.config.can_be_future_date && in_future)
    }

    fn refresh_age(&mut self) {
        self.age_text = None;
        if !self.config.show_age_calculation || self.invalid_timeline {
            return;
        }
        let Some(raw) = self.selected.as_deref() else {
            return;
        };

        let text = age_to_string_str(raw, self.reference, &AgeOptions::default());
        if !text.is_empty() {
            self.age_text = Some(text);
        }
    }
}

/// Slug of the label, or a random id when there is none.
fn input_id_for(label: Option<&str>) -> String {
    match label.filter(|label| !label.is_empty()) {
        Some(label) => slugify(label),
        None => {
            let mut rng = rand::rng();
            let suffix: String = (0..GENERATED_ID_LEN)
                .filter_map(|_| char::from_digit(rng.random_range(0..36), 36))
                .collect();
            format!("{GENERATED_ID_PREFIX}{suffix}")
        }
    }
}

/// Lower-case, whitespace runs become `-`, anything outside `[a-z0-9-]` is
/// dropped.
fn slugify(label: &str) -> String {
    let mut slug = String::with_capacity(label.len());
    let mut in_whitespace = false;

    for c in label.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
            slug.push(c);
        }
    }

    slug
}
