//! Emulator input knowledge
//!
//! This module centralizes the accepted value domains for every emulator
//! input. Supporting a new architecture or channel should be done here.

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

/// Lowest platform API level the emulator images are provided for
pub const MIN_API_LEVEL: u32 = 15;

/// Supported system image architectures, in display order
pub const VALID_ARCHS: &[&str] = &["x86", "x86_64", "arm64-v8a"];

/// SDK release channels, in channel id order
pub const VALID_CHANNELS: &[&str] = &["stable", "beta", "dev", "canary"];

/// Console port range the emulator accepts
pub const MIN_PORT: i64 = 5554;
pub const MAX_PORT: i64 = 5584;

/// Input names as they appear in the workflow configuration
pub const FIELD_API_LEVEL: &str = "api-level";
pub const FIELD_TARGET: &str = "target";
pub const FIELD_ARCH: &str = "arch";
pub const FIELD_CHANNEL: &str = "channel";
pub const FIELD_DISK_SIZE: &str = "disk-size";
pub const FIELD_EMULATOR_PORT: &str = "emulator-port";
pub const FIELD_EMULATOR_BUILD: &str = "emulator-build";
pub const FIELD_FORCE_AVD_CREATION: &str = "force-avd-creation";
pub const FIELD_DISABLE_ANIMATIONS: &str = "disable-animations";
pub const FIELD_DISABLE_SPELLCHECKER: &str = "disable-spellchecker";
pub const FIELD_DISABLE_LINUX_HW_ACCEL: &str = "disable-linux-hw-accel";
pub const FIELD_ENABLE_HW_KEYBOARD: &str = "enable-hw-keyboard";

/// Shorthand target names and the system image tags they stand for
pub const TARGET_ALIASES: &[(&str, &str)] = &[
    ("playstore", "google_apis_playstore"),
    ("playstore_ps16k", "google_apis_playstore_ps16k"),
];

/// Unit suffixes accepted after a disk size, compared case-insensitively
pub const DISK_SIZE_SUFFIXES: &[char] = &['K', 'M', 'G'];

lazy_static! {
    /// An optionally signed run of ASCII digits and nothing else
    pub static ref INTEGER_LITERAL: Regex = Regex::new(r"^[+-]?[0-9]+$").unwrap();
}

/// Returns true when `value` is a plain integer literal
pub fn is_integer_literal(value: &str) -> bool {
    INTEGER_LITERAL.is_match(value)
}

/// Value of a flag that may also be left to auto-detection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriState {
    True,
    False,
    Auto,
}

impl TriState {
    pub fn as_str(&self) -> &'static str {
        match self {
            TriState::True => "true",
            TriState::False => "false",
            TriState::Auto => "auto",
        }
    }
}

impl fmt::Display for TriState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// SDK release channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Stable,
    Beta,
    Dev,
    Canary,
}

impl Channel {
    /// Channel id understood by `sdkmanager --channel=<id>`
    pub fn id(&self) -> u8 {
        match self {
            Channel::Stable => 0,
            Channel::Beta => 1,
            Channel::Dev => 2,
            Channel::Canary => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        VALID_CHANNELS[self.id() as usize]
    }

    pub(crate) fn from_name(name: &str) -> Option<Self> {
        match name {
            "stable" => Some(Channel::Stable),
            "beta" => Some(Channel::Beta),
            "dev" => Some(Channel::Dev),
            "canary" => Some(Channel::Canary),
            _ => None,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
