use emulator_input_validator::EmulatorInputs;

/// A document exercising every input with non-default values
pub const FULL_INPUTS_YAML: &str = r#"
api-level: "33"
target: playstore
arch: arm64-v8a
profile: pixel_6
disk-size: 6G
avd-name: ci-device
force-avd-creation: "false"
emulator-port: 5560
disable-animations: "false"
disable-spellchecker: "true"
disable-linux-hw-accel: "true"
enable-hw-keyboard: "true"
emulator-build: "7425822"
channel: canary
"#;

/// Inputs with defaults and a single field overridden
pub fn inputs_with(field: &str, value: &str) -> EmulatorInputs {
    let yaml = if field == "api-level" {
        format!("api-level: \"{}\"", value)
    } else {
        format!("api-level: \"30\"\n{}: \"{}\"", field, value)
    };
    EmulatorInputs::from_yaml_str(&yaml).unwrap()
}
