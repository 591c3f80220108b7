//! Validators for interactive input.
//!
//! These never touch the console. The `Display` text of each rejection is
//! what the prompt loop prints before asking again.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TextError {
    #[error("Input can not be blank.")]
    Blank,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum YearError {
    #[error("Invalid input; enter a valid number.")]
    NotANumber,

    #[error("Number must be > 0.")]
    NotPositive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SongNumberError {
    #[error("Invalid song number")]
    NotANumber,

    #[error("Number must be > 0.")]
    NotPositive,

    #[error("Invalid song number")]
    OutOfRange,
}

/// Accept any text that is not blank, trimmed.
pub fn required_text(input: &str) -> Result<String, TextError> {
    let text = input.trim();
    if text.is_empty() {
        return Err(TextError::Blank);
    }
    Ok(text.to_string())
}

/// Accept a whole number greater than zero.
pub fn year(input: &str) -> Result<i64, YearError> {
    let value: i64 = input.trim().parse().map_err(|_| YearError::NotANumber)?;
    if value <= 0 {
        return Err(YearError::NotPositive);
    }
    Ok(value)
}

/// Accept a song number in `1..=count`.
pub fn song_number(input: &str, count: usize) -> Result<usize, SongNumberError> {
    let value: i64 = input
        .trim()
        .parse()
        .map_err(|_| SongNumberError::NotANumber)?;
    if value <= 0 {
        return Err(SongNumberError::NotPositive);
    }
    usize::try_from(value)
        .ok()
        .filter(|number| *number <= count)
        .ok_or(SongNumberError::OutOfRange)
}
