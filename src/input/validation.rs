use super::definitions::{
    is_integer_literal, Channel, TriState, DISK_SIZE_SUFFIXES, FIELD_API_LEVEL, FIELD_ARCH,
    FIELD_CHANNEL, FIELD_DISK_SIZE, FIELD_EMULATOR_BUILD, FIELD_EMULATOR_PORT, MAX_PORT,
    MIN_API_LEVEL, MIN_PORT, VALID_ARCHS, VALID_CHANNELS,
};
use crate::error::{AppError, AppResult};
use std::num::IntErrorKind;

fn one_of(values: &[&str]) -> String {
    format!("one of: {}", values.join(", "))
}

/// Validates the system image architecture
pub fn check_architecture(value: &str) -> AppResult<()> {
    if !VALID_ARCHS.contains(&value) {
        return Err(AppError::invalid_value(FIELD_ARCH, value, one_of(VALID_ARCHS)));
    }
    Ok(())
}

/// Parses an SDK release channel name
pub fn parse_channel(value: &str) -> AppResult<Channel> {
    Channel::from_name(value)
        .ok_or_else(|| AppError::invalid_value(FIELD_CHANNEL, value, one_of(VALID_CHANNELS)))
}

/// Validates an SDK release channel name
pub fn check_channel(value: &str) -> AppResult<()> {
    parse_channel(value).map(|_| ())
}

/// Parses a flag that must be exactly "true" or "false"
pub fn parse_boolean_flag(value: &str, flag_name: &str) -> AppResult<bool> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(AppError::invalid_value(
            flag_name,
            value,
            "either 'true' or 'false'",
        )),
    }
}

pub fn check_boolean_flag(value: &str, flag_name: &str) -> AppResult<()> {
    parse_boolean_flag(value, flag_name).map(|_| ())
}

/// Parses a flag that accepts "auto" on top of "true" and "false"
pub fn parse_tri_state_flag(value: &str, flag_name: &str) -> AppResult<TriState> {
    match value {
        "true" => Ok(TriState::True),
        "false" => Ok(TriState::False),
        "auto" => Ok(TriState::Auto),
        _ => Err(AppError::invalid_value(
            flag_name,
            value,
            "either 'true' or 'false' or 'auto'",
        )),
    }
}

pub fn check_tri_state_flag(value: &str, flag_name: &str) -> AppResult<()> {
    parse_tri_state_flag(value, flag_name).map(|_| ())
}

/// Validates the emulator console port
///
/// The range check runs first, so a value that is both out of range and odd
/// reports the range violation.
pub fn check_port(value: i64) -> AppResult<()> {
    if !(MIN_PORT..=MAX_PORT).contains(&value) {
        return Err(AppError::invalid_value(
            FIELD_EMULATOR_PORT,
            &value.to_string(),
            format!(
                "a port within the supported range [{}, {}]",
                MIN_PORT, MAX_PORT
            ),
        ));
    }
    if value % 2 != 0 {
        return Err(AppError::invalid_value(
            FIELD_EMULATOR_PORT,
            &value.to_string(),
            "an even port number",
        ));
    }
    Ok(())
}

/// Validates an emulator build number
pub fn check_build_number(value: &str) -> AppResult<()> {
    if !is_integer_literal(value) {
        return Err(AppError::invalid_value(
            FIELD_EMULATOR_BUILD,
            value,
            "an integer build number",
        ));
    }
    Ok(())
}

/// Validates a disk size
///
/// Accepted shapes:
/// - empty, meaning the default size
/// - an integer byte count
/// - an integer followed by one of `K`, `M`, `G` (any case)
///
/// Anything else is rejected, including a trailing unit letter that is not
/// one of the three.
pub fn check_disk_size(value: &str) -> AppResult<()> {
    if value.is_empty() || is_integer_literal(value) {
        return Ok(());
    }

    let invalid = || {
        AppError::invalid_value(
            FIELD_DISK_SIZE,
            value,
            "an integer byte count, optionally followed by K, M or G",
        )
    };

    let mut chars = value.chars();
    let suffix = chars.next_back().ok_or_else(invalid)?;
    if !DISK_SIZE_SUFFIXES.contains(&suffix.to_ascii_uppercase()) {
        return Err(invalid());
    }

    let number = chars.as_str();
    if number.is_empty() || !is_integer_literal(number) {
        return Err(invalid());
    }
    Ok(())
}

/// Parses a platform API level, which must be at least [`MIN_API_LEVEL`]
pub fn parse_api_level(value: &str) -> AppResult<u32> {
    let expected = || format!("an integer API level of at least {}", MIN_API_LEVEL);
    if !is_integer_literal(value) {
        return Err(AppError::invalid_value(FIELD_API_LEVEL, value, expected()));
    }
    let level = match value.parse::<u32>() {
        Ok(level) => level,
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => {
            return Err(AppError::invalid_value(
                FIELD_API_LEVEL,
                value,
                format!("an integer API level no greater than {}", u32::MAX),
            ))
        }
        Err(_) => return Err(AppError::invalid_value(FIELD_API_LEVEL, value, expected())),
    };
    if level < MIN_API_LEVEL {
        return Err(AppError::invalid_value(FIELD_API_LEVEL, value, expected()));
    }
    Ok(level)
}

pub fn check_api_level(value: &str) -> AppResult<()> {
    parse_api_level(value).map(|_| ())
}
