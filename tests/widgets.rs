use chrono::NaiveDate;
use ph_widgets::config::{DateInputConfig, NumberInputConfig};
use ph_widgets::{DateChange, DateInput, Key, KeyPress, NumberInput};

#[test]
fn stepper_session() {
    let mut input = NumberInput::new(&NumberInputConfig {
        value: 5,
        min: 0,
        max: 10,
        step: 1,
    });

    assert_eq!(input.increment(), Some(6));
    assert_eq!(input.text(), "6");

    let mut notifications = Vec::new();
    for _ in 0..10 {
        if let Some(value) = input.decrement() {
            notifications.push(value);
        }
    }
    assert_eq!(notifications, vec![5, 4, 3, 2, 1, 0]);
    assert_eq!(input.value(), 0);
}

#[test]
fn stepper_anti_clobber() {
    let mut input = NumberInput::new(&NumberInputConfig {
        value: 3,
        max: 50,
        ..NumberInputConfig::default()
    });

    input.set_external_value(7);
    assert_eq!(input.text(), "7");
    input.on_input("");
    input.set_external_value(20);
    assert_eq!(input.text(), "");

    // blur settles on the latest committed value
    assert_eq!(input.on_key_down(&KeyPress::new(Key::Enter)).change, None);
    assert_eq!(input.value(), 20);
    assert_eq!(input.text(), "20");
}

#[test]
fn date_picker_flow() {
    let reference = NaiveDate::from_ymd_opt(2024, 6, 15)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap();
    let mut picker = DateInput::new(DateInputConfig {
        label: Some("Nascimento".to_string()),
        show_age_calculation: true,
        can_be_future_date: false,
        required: true,
        reference_date: Some(reference),
        ..DateInputConfig::default()
    });
    assert_eq!(picker.input_id(), "nascimento");

    assert!(!picker.validate());
    assert_eq!(picker.error_message(), "O campo 'Nascimento' é obrigatório.");

    let change = picker.set_text("2023-06-10");
    assert_eq!(
        change,
        DateChange {
            selected: Some("2023-06-10".to_string())
        }
    );
    assert!(picker.is_valid());
    assert_eq!(picker.age_text(), Some("1 ano e 5 dias"));

    picker.set_text("2024-07-01");
    assert!(!picker.is_valid());
    assert_eq!(picker.age_text(), None);
    assert!(picker.error_message().contains("igual ou anterior"));

    picker.set_text("");
    assert_eq!(picker.selected_text(), None);
    assert!(!picker.is_valid());
    assert_eq!(picker.error_message(), "O campo 'Nascimento' é obrigatório.");
}
