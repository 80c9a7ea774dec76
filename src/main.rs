use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use ph_widgets::config::DemoConfig;
use ph_widgets::logging::{LoggingConfig, init_logging};
use ph_widgets::{DateInput, Key, KeyPress, NumberInput, age_to_string, hello};

fn main() -> Result<()> {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = DemoConfig::load(config_path.as_deref()).context("Failed to load configuration")?;

    let log_config = LoggingConfig::from_level_name(&config.log_level)?;
    init_logging(&log_config)?;

    println!("{}", hello::greeting());

    // Calculate age
    let reference = config
        .reference
        .unwrap_or_else(|| Local::now().naive_local());
    let age = age_to_string(config.birthdate, reference, &config.age);
    println!("Age: {age}");

    // Scripted stepper session
    let mut number = NumberInput::new(&config.number_input);
    println!("Number: {} (min {}, max {})", number.text(), number.min(), number.max());
    number.increment();
    for c in "12a3".chars() {
        let press = KeyPress::new(Key::Character(c));
        if !number.on_key_down(&press).prevented {
            let typed = format!("{}{c}", number.text());
            number.on_input(&typed);
        }
    }
    number.finalize();
    println!("Number after typing: {}", number.text());

    // Date picker
    let mut date = DateInput::new(config.date_input.clone());
    let valid = date.validate();
    println!(
        "Date '{}' ({}): {}",
        date.selected_text().unwrap_or("-"),
        date.input_id(),
        if valid {
            date.age_text().unwrap_or("ok").to_string()
        } else {
            date.error_message().to_string()
        }
    );

    Ok(())
}
