//! State of a bounded integer stepper.
//!
//! The widget keeps two things apart: the committed value, always within
//! `[min, max]`, and the text the user sees. While typing the text may be
//! empty or hold characters that are not digits; it is reconciled with the
//! committed value on blur, on stepping, and on external updates unless the
//! user is in the middle of an invalid edit.
//!
//! Every operation that can commit returns `Some(new_value)` when the
//! committed value actually changed, and `None` otherwise.

use tracing::debug;

use crate::config::NumberInputConfig;

/// A key as reported by the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Character(char),
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Enter,
    Backspace,
    Delete,
    Tab,
    Escape,
    Home,
    End,
    /// Any other named key (function keys, media keys, ...).
    Other,
}

impl Key {
    fn is_control(self) -> bool {
        matches!(
            self,
            Key::Backspace
                | Key::Delete
                | Key::Tab
                | Key::Escape
                | Key::Enter
                | Key::ArrowLeft
                | Key::ArrowRight
                | Key::Home
                | Key::End
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub ctrl: bool,
    /// Cmd on macOS.
    pub meta: bool,
}

impl KeyPress {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            meta: false,
        }
    }

    pub fn with_ctrl(key: Key) -> Self {
        Self {
            key,
            ctrl: true,
            meta: false,
        }
    }

    pub fn with_meta(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            meta: true,
        }
    }
}

/// What the UI layer should do with a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyOutcome {
    /// Suppress the key's default effect on the text field.
    pub prevented: bool,
    pub change: Option<i64>,
}

/// Whether a key may reach the text buffer.
///
/// Control and navigation keys and Ctrl/Cmd combinations pass; of the
/// character keys only ASCII digits do.
pub fn accepts_key(press: &KeyPress) -> bool {
    if press.key.is_control() || press.ctrl || press.meta {
        return true;
    }
    matches!(press.key, Key::Character(c) if c.is_ascii_digit())
}

/// Digits of `raw` as a number. Signs, separators and letters are dropped;
/// values too large for `i64` saturate.
fn parse_digits(raw: &str) -> Option<i64> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    Some(digits.parse::<i64>().unwrap_or(i64::MAX))
}

#[derive(Debug, Clone)]
pub struct NumberInput {
    value: i64,
    min: i64,
    max: i64,
    step: i64,
    text: String,
}

impl NumberInput {
    pub fn new(config: &NumberInputConfig) -> Self {
        let mut input = Self {
            value: config.value,
            min: config.min,
            max: config.max,
            step: config.step,
            text: String::new(),
        };
        input.value = input.clamp(config.value);
        input.text = input.value.to_string();
        input
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    /// Text currently shown in the field.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    /// Restrict `n` to `[min, max]`. When `min > max`, `max` wins.
    pub fn clamp(&self, n: i64) -> i64 {
        let mut x = n;
        if x < self.min {
            x = self.min;
        }
        if x > self.max {
            x = self.max;
        }
        x
    }

    /// True while the text is empty or has no digits in it.
    pub fn is_typing_invalid(&self) -> bool {
        self.text.is_empty() || parse_digits(&self.text).is_none()
    }

    /// Value pushed from outside the widget.
    ///
    /// The value is adopted, but the text is only rewritten when it holds a
    /// usable number, so an in-progress empty or invalid edit survives.
    pub fn set_external_value(&mut self, value: i64) {
        self.value = self.clamp(value);
        if !self.is_typing_invalid() {
            self.text = self.value.to_string();
        }
    }

    /// Text field contents changed.
    ///
    /// The raw text is kept as typed; a parseable value is clamped and
    /// committed without rewriting the text.
    pub fn on_input(&mut self, raw: &str) -> Option<i64> {
        self.text = raw.to_string();
        if raw.is_empty() {
            return None;
        }

        let parsed = parse_digits(raw)?;
        let clamped = self.clamp(parsed);
        self.commit(clamped, false)
    }

    pub fn increment(&mut self) -> Option<i64> {
        let next = self.clamp(self.value.saturating_add(self.step));
        self.commit(next, true)
    }

    pub fn decrement(&mut self) -> Option<i64> {
        let next = self.clamp(self.value.saturating_sub(self.step));
        self.commit(next, true)
    }

    /// Blur: settle the text into a committed value, falling back to the
    /// last committed value when the text has no digits.
    pub fn finalize(&mut self) -> Option<i64> {
        let parsed = parse_digits(&self.text).unwrap_or(self.value);
        let value = self.clamp(parsed);
        self.commit(value, true)
    }

    /// ArrowUp/ArrowDown step the value, Enter blurs the field, and the digit
    /// filter decides whether the key reaches the text.
    pub fn on_key_down(&mut self, press: &KeyPress) -> KeyOutcome {
        let (stepped, change) = match press.key {
            Key::ArrowUp => (true, self.increment()),
            Key::ArrowDown => (true, self.decrement()),
            Key::Enter => (false, self.finalize()),
            _ => (false, None),
        };

        let prevented = stepped || !accepts_key(press);
        if prevented && !stepped {
            debug!(key = ?press.key, "rejected key in number input");
        }

        KeyOutcome { prevented, change }
    }

    /// Scrolling over a focused field blurs it rather than stepping.
    pub fn on_wheel(&mut self) -> Option<i64> {
        self.finalize()
    }

    fn commit(&mut self, value: i64, sync_text: bool) -> Option<i64> {
        if sync_text {
            self.text = value.to_string();
        }
        if value == self.value {
            return None;
        }
        self.value = value;
        debug!(value, "number input committed");
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(value: i64, min: i64, max: i64, step: i64) -> NumberInput {
        NumberInput::new(&NumberInputConfig {
            value,
            min,
            max,
            step,
        })
    }

    #[test]
    fn test_new_clamps_initial_value() {
        let n = input(50, 0, 10, 1);
        assert_eq!(n.value(), 10);
        assert_eq!(n.text(), "10");
    }

    #[test]
    fn test_increment_then_decrement_to_floor() {
        let mut n = input(5, 0, 10, 1);
        assert_eq!(n.increment(), Some(6));
        assert_eq!(n.text(), "6");

        let changes: Vec<_> = (0..10).map(|_| n.decrement()).collect();
        assert_eq!(n.value(), 0);
        assert_eq!(n.text(), "0");
        assert_eq!(changes.iter().flatten().count(), 6);
        assert_eq!(changes.last(), Some(&None));
        assert_eq!(n.decrement(), None);
    }

    #[test]
    fn test_increment_stops_at_max() {
        let mut n = input(9, 0, 10, 3);
        assert_eq!(n.increment(), Some(10));
        assert_eq!(n.increment(), None);
    }

    #[test]
    fn test_unbounded_increment_saturates() {
        let mut n = input(i64::MAX - 1, 0, i64::MAX, 5);
        assert_eq!(n.increment(), Some(i64::MAX));
        assert_eq!(n.increment(), None);
    }

    #[test]
    fn test_clamp_is_idempotent() {
        for (min, max) in [(0, 10), (-5, 5), (3, 3), (10, 0)] {
            let n = input(0, min, max, 1);
            for x in [-100, -5, 0, 3, 7, 10, 11, 1_000] {
                let once = n.clamp(x);
                assert_eq!(n.clamp(once), once, "min={min} max={max} x={x}");
            }
        }
    }

    #[test]
    fn test_on_input_keeps_raw_text() {
        let mut n = input(0, 0, 100, 1);
        assert_eq!(n.on_input("007"), Some(7));
        assert_eq!(n.text(), "007");
    }

    #[test]
    fn test_on_input_clamps_without_resync() {
        let mut n = input(0, 0, 10, 1);
        assert_eq!(n.on_input("123"), Some(10));
        assert_eq!(n.text(), "123");
        assert_eq!(n.finalize(), None);
        assert_eq!(n.text(), "10");
    }

    #[test]
    fn test_on_input_empty_and_invalid_do_not_commit() {
        let mut n = input(4, 0, 10, 1);
        assert_eq!(n.on_input(""), None);
        assert_eq!(n.value(), 4);
        assert!(n.is_typing_invalid());

        assert_eq!(n.on_input("-"), None);
        assert_eq!(n.text(), "-");
        assert_eq!(n.value(), 4);
    }

    #[test]
    fn test_finalize_falls_back_to_committed_value() {
        let mut n = input(4, 0, 10, 1);
        n.on_input("");
        assert_eq!(n.finalize(), None);
        assert_eq!(n.text(), "4");
        assert!(!n.is_typing_invalid());
    }

    #[test]
    fn test_external_value_syncs_when_text_is_valid() {
        let mut n = input(1, 0, 10, 1);
        n.set_external_value(8);
        assert_eq!(n.value(), 8);
        assert_eq!(n.text(), "8");

        n.set_external_value(42);
        assert_eq!(n.value(), 10);
        assert_eq!(n.text(), "10");
    }

    #[test]
    fn test_external_value_does_not_clobber_empty_edit() {
        let mut n = input(0, 0, 100, 1);
        n.set_external_value(3);
        n.on_input("");
        n.set_external_value(9);
        assert_eq!(n.text(), "");

        // a valid keystroke resumes sync
        n.on_input("5");
        n.set_external_value(12);
        assert_eq!(n.text(), "12");
    }

    #[test]
    fn test_finalize_after_ignored_external_value() {
        let mut n = input(0, 0, 100, 1);
        n.on_input("x");
        n.set_external_value(9);
        assert_eq!(n.text(), "x");
        assert_eq!(n.finalize(), None);
        assert_eq!(n.value(), 9);
        assert_eq!(n.text(), "9");
    }

    #[test]
    fn test_key_filter() {
        assert!(accepts_key(&KeyPress::new(Key::Character('7'))));
        assert!(accepts_key(&KeyPress::new(Key::Backspace)));
        assert!(accepts_key(&KeyPress::new(Key::Home)));
        assert!(accepts_key(&KeyPress::with_ctrl(Key::Character('v'))));
        assert!(accepts_key(&KeyPress::with_meta(Key::Character('a'))));

        assert!(!accepts_key(&KeyPress::new(Key::Character('a'))));
        assert!(!accepts_key(&KeyPress::new(Key::Character('-'))));
        assert!(!accepts_key(&KeyPress::new(Key::Character('.'))));
        assert!(!accepts_key(&KeyPress::new(Key::Character('٣'))));
        assert!(!accepts_key(&KeyPress::new(Key::Other)));
    }

    #[test]
    fn test_typed_keys_are_filtered_before_the_buffer() {
        let mut n = input(0, 0, 100, 1);
        let mut text = String::new();
        for c in "12a3".chars() {
            let outcome = n.on_key_down(&KeyPress::new(Key::Character(c)));
            if !outcome.prevented {
                text.push(c);
                n.on_input(&text);
            }
        }
        assert_eq!(n.text(), "123");
        assert_eq!(n.value(), 100);
    }

    #[test]
    fn test_arrow_keys_step_and_are_prevented() {
        let mut n = input(5, 0, 10, 2);
        let up = n.on_key_down(&KeyPress::new(Key::ArrowUp));
        assert_eq!(
            up,
            KeyOutcome {
                prevented: true,
                change: Some(7)
            }
        );
        let down = n.on_key_down(&KeyPress::with_ctrl(Key::ArrowDown));
        assert_eq!(
            down,
            KeyOutcome {
                prevented: true,
                change: Some(5)
            }
        );
    }

    #[test]
    fn test_enter_finalizes() {
        let mut n = input(5, 0, 10, 1);
        n.on_input("");
        let outcome = n.on_key_down(&KeyPress::new(Key::Enter));
        assert!(!outcome.prevented);
        assert_eq!(outcome.change, None);
        assert_eq!(n.text(), "5");
    }

    #[test]
    fn test_wheel_finalizes() {
        let mut n = input(0, 0, 10, 1);
        n.on_input("0042");
        assert_eq!(n.text(), "0042");
        assert_eq!(n.on_wheel(), None);
        assert_eq!(n.value(), 10);
        assert_eq!(n.text(), "10");
    }

    #[test]
    fn test_huge_digit_run_saturates_then_clamps() {
        let mut n = input(0, 0, 500, 1);
        assert_eq!(n.on_input("99999999999999999999999"), Some(500));
    }
}
