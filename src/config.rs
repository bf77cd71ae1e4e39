use crate::error::{AppError, AppResult};
use crate::input::definitions::{
    FIELD_DISABLE_ANIMATIONS, FIELD_DISABLE_LINUX_HW_ACCEL, FIELD_DISABLE_SPELLCHECKER,
    FIELD_EMULATOR_PORT, FIELD_ENABLE_HW_KEYBOARD, FIELD_FORCE_AVD_CREATION, MAX_PORT, MIN_PORT,
};
use crate::input::{self, Channel, TriState};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, info};

lazy_static! {
    /// `${VAR}` or `${VAR:-default}`
    static ref ENV_VAR_REFERENCE: Regex =
        Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}").unwrap();
}

/// Raw emulator inputs as supplied by the workflow configuration
///
/// Values are kept as text. Unquoted YAML integers are read through their
/// numeric value, so hex and octal forms (`0x1F`, `0o17`) arrive in decimal.
/// Unknown keys are rejected. Nothing here is trusted until
/// [`EmulatorInputs::validate`] has run.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct EmulatorInputs {
    #[serde(deserialize_with = "scalar_as_string")]
    pub api_level: String,
    #[serde(default = "default_target", deserialize_with = "scalar_as_string")]
    pub target: String,
    #[serde(default = "default_arch", deserialize_with = "scalar_as_string")]
    pub arch: String,
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub profile: String,
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub disk_size: String,
    #[serde(default = "default_avd_name", deserialize_with = "scalar_as_string")]
    pub avd_name: String,
    #[serde(default = "default_true", deserialize_with = "scalar_as_string")]
    pub force_avd_creation: String,
    #[serde(default = "default_emulator_port", deserialize_with = "scalar_as_string")]
    pub emulator_port: String,
    #[serde(default = "default_true", deserialize_with = "scalar_as_string")]
    pub disable_animations: String,
    #[serde(default = "default_false", deserialize_with = "scalar_as_string")]
    pub disable_spellchecker: String,
    #[serde(default = "default_auto", deserialize_with = "scalar_as_string")]
    pub disable_linux_hw_accel: String,
    #[serde(default = "default_false", deserialize_with = "scalar_as_string")]
    pub enable_hw_keyboard: String,
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub emulator_build: String,
    #[serde(default = "default_channel", deserialize_with = "scalar_as_string")]
    pub channel: String,
}

fn default_target() -> String {
    "default".to_string()
}

fn default_arch() -> String {
    "x86".to_string()
}

fn default_avd_name() -> String {
    "test".to_string()
}

fn default_emulator_port() -> String {
    MIN_PORT.to_string()
}

fn default_true() -> String {
    "true".to_string()
}

fn default_false() -> String {
    "false".to_string()
}

fn default_auto() -> String {
    "auto".to_string()
}

fn default_channel() -> String {
    "stable".to_string()
}

/// Accept unquoted YAML booleans and integers (`true`, `5554`) as text
///
/// Floats are rejected since their text does not survive the round trip
/// (`1.10` would become `1.1`).
fn scalar_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match serde_yaml::Value::deserialize(deserializer)? {
        serde_yaml::Value::String(s) => Ok(s),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        serde_yaml::Value::Number(n) if n.is_i64() || n.is_u64() => Ok(n.to_string()),
        serde_yaml::Value::Number(n) => Err(D::Error::custom(format!(
            "unquoted number {} is not an integer, quote the value to keep it as written",
            n
        ))),
        serde_yaml::Value::Null => Ok(String::new()),
        other => Err(D::Error::custom(format!(
            "expected a scalar value, found {:?}",
            other
        ))),
    }
}

/// Emulator inputs after every check has passed
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInputs {
    pub api_level: u32,
    /// Target with shorthand aliases expanded
    pub target: String,
    pub arch: String,
    pub profile: Option<String>,
    /// `None` keeps the default disk size
    pub disk_size: Option<String>,
    pub avd_name: String,
    pub force_avd_creation: bool,
    pub emulator_port: u16,
    pub disable_animations: bool,
    pub disable_spellchecker: bool,
    pub disable_linux_hw_accel: TriState,
    pub enable_hw_keyboard: bool,
    /// `None` uses the latest emulator build
    pub emulator_build: Option<String>,
    pub channel: Channel,
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

impl EmulatorInputs {
    /// Parse inputs from a YAML document, expanding environment variables first
    pub fn from_yaml_str(content: &str) -> AppResult<Self> {
        let expanded = expand_env_vars(content)?;
        let inputs: EmulatorInputs = serde_yaml::from_str(&expanded)?;
        Ok(inputs)
    }

    /// Inputs with every optional value at its default
    pub fn with_api_level(api_level: &str) -> Self {
        EmulatorInputs {
            api_level: api_level.to_string(),
            target: default_target(),
            arch: default_arch(),
            profile: String::new(),
            disk_size: String::new(),
            avd_name: default_avd_name(),
            force_avd_creation: default_true(),
            emulator_port: default_emulator_port(),
            disable_animations: default_true(),
            disable_spellchecker: default_false(),
            disable_linux_hw_accel: default_auto(),
            enable_hw_keyboard: default_false(),
            emulator_build: String::new(),
            channel: default_channel(),
        }
    }

    /// Run every input check, stopping at the first failure
    pub fn validate(&self) -> AppResult<ValidatedInputs> {
        let api_level = input::parse_api_level(&self.api_level)?;
        debug!("api-level: {}", api_level);

        let target = input::normalize_target_alias(&self.target);
        if target != self.target {
            info!("Using target '{}' for '{}'", target, self.target);
        }

        input::check_architecture(&self.arch)?;
        debug!("arch: {}", self.arch);

        input::check_disk_size(&self.disk_size)?;
        debug!("disk-size: '{}'", self.disk_size);

        let force_avd_creation =
            input::parse_boolean_flag(&self.force_avd_creation, FIELD_FORCE_AVD_CREATION)?;

        let emulator_port = parse_port(&self.emulator_port)?;
        debug!("emulator-port: {}", emulator_port);

        let disable_animations =
            input::parse_boolean_flag(&self.disable_animations, FIELD_DISABLE_ANIMATIONS)?;
        let disable_spellchecker =
            input::parse_boolean_flag(&self.disable_spellchecker, FIELD_DISABLE_SPELLCHECKER)?;
        let disable_linux_hw_accel = input::parse_tri_state_flag(
            &self.disable_linux_hw_accel,
            FIELD_DISABLE_LINUX_HW_ACCEL,
        )?;
        let enable_hw_keyboard =
            input::parse_boolean_flag(&self.enable_hw_keyboard, FIELD_ENABLE_HW_KEYBOARD)?;

        if !self.emulator_build.is_empty() {
            input::check_build_number(&self.emulator_build)?;
            debug!("emulator-build: {}", self.emulator_build);
        }

        let channel = input::parse_channel(&self.channel)?;
        debug!("channel: {} (id {})", channel, channel.id());

        info!(
            "Validated inputs for API {} {} {} on port {}",
            api_level, target, self.arch, emulator_port
        );

        Ok(ValidatedInputs {
            api_level,
            target,
            arch: self.arch.clone(),
            profile: non_empty(&self.profile),
            disk_size: non_empty(&self.disk_size),
            avd_name: self.avd_name.clone(),
            force_avd_creation,
            emulator_port,
            disable_animations,
            disable_spellchecker,
            disable_linux_hw_accel,
            enable_hw_keyboard,
            emulator_build: non_empty(&self.emulator_build),
            channel,
        })
    }
}

fn parse_port(value: &str) -> AppResult<u16> {
    let port = value.parse::<i64>().map_err(|_| {
        AppError::invalid_value(
            FIELD_EMULATOR_PORT,
            value,
            format!("an integer port in the range [{}, {}]", MIN_PORT, MAX_PORT),
        )
    })?;
    input::check_port(port)?;
    // In range, so it fits
    Ok(port as u16)
}

/// Expand environment variables in format ${VAR_NAME} or ${VAR_NAME:-default}
pub fn expand_env_vars(content: &str) -> AppResult<String> {
    let mut expanded = String::with_capacity(content.len());
    let mut last = 0;

    for caps in ENV_VAR_REFERENCE.captures_iter(content) {
        let whole = caps.get(0).map(|m| m.range()).unwrap_or(last..last);
        let var_name = &caps[1];

        let value = match std::env::var(var_name) {
            Ok(val) => val,
            Err(_) => match caps.get(2) {
                Some(default) => default.as_str().to_string(),
                None => {
                    return Err(AppError::Configuration(format!(
                        "Environment variable {} not found and no default provided",
                        var_name
                    )))
                }
            },
        };

        expanded.push_str(&content[last..whole.start]);
        expanded.push_str(&value);
        last = whole.end;
    }

    expanded.push_str(&content[last..]);
    Ok(expanded)
}
