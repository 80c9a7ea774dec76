//! User-facing validation messages. All templates are Portuguese.

pub fn input_field_required(field_name: &str) -> String {
    format!("O campo '{field_name}' é obrigatório.")
}

/// Message for a date outside its allowed timeline.
///
/// `should_be_in_future` wins over `should_be_in_past`; with neither set the
/// date is simply reported as invalid.
pub fn date_timeline_invalid(
    field_name: &str,
    should_be_in_future: bool,
    should_be_in_past: bool,
) -> String {
    if should_be_in_future {
        return format!(
            "O campo '{field_name}' precisa ser uma data igual ou posterior a data atual."
        );
    }
    if should_be_in_past {
        return format!(
            "O campo '{field_name}' precisa ser uma data igual ou anterior a data atual."
        );
    }
    format!("O campo '{field_name}' precisa ser uma data válida.")
}
