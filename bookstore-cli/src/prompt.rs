use anyhow::Context;
use inquire::{
    CustomType, CustomUserError, InquireError, Password, PasswordDisplayMode, Select, Text,
    validator::Validation,
};
use std::fmt::Display;

/// Map Esc / Ctrl-C to `None` so callers can leave a loop cleanly.
fn cancelable<T>(answer: Result<T, InquireError>) -> anyhow::Result<Option<T>> {
    match answer {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(err) => Err(err).context("Failed to read input"),
    }
}

pub fn text(message: &str) -> anyhow::Result<Option<String>> {
    cancelable(Text::new(message).prompt())
}

pub fn select<T: Display>(message: &str, options: Vec<T>) -> anyhow::Result<Option<T>> {
    let page_size = options.len().max(1);
    cancelable(Select::new(message, options).with_page_size(page_size).prompt())
}

pub fn password(message: &str) -> anyhow::Result<Option<String>> {
    cancelable(
        Password::new(message)
            .without_confirmation()
            .with_display_mode(PasswordDisplayMode::Masked)
            .prompt(),
    )
}

pub fn new_password(message: &str) -> anyhow::Result<Option<String>> {
    cancelable(
        Password::new(message)
            .with_display_mode(PasswordDisplayMode::Masked)
            .with_custom_confirmation_message("Confirm new password:")
            .with_custom_confirmation_error_message("The passwords don't match.")
            .prompt(),
    )
}

/// Ask for a whole number of at least 1, re-prompting on anything else.
pub fn quantity(message: &str) -> anyhow::Result<Option<u32>> {
    cancelable(
        CustomType::<u32>::new(message)
            .with_error_message("Please enter a whole number.")
            .with_validator(|q: &u32| -> Result<Validation, CustomUserError> {
                if *q > 0 {
                    Ok(Validation::Valid)
                } else {
                    Ok(Validation::Invalid("Quantity must be at least 1.".into()))
                }
            })
            .prompt(),
    )
}
