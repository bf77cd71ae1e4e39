use emulator_input_validator::input::{Channel, TriState};
use emulator_input_validator::{AppError, EmulatorInputs};

mod common;

#[test]
fn test_full_document_validates() {
    let inputs = EmulatorInputs::from_yaml_str(common::FULL_INPUTS_YAML).unwrap();
    let validated = inputs.validate().unwrap();

    assert_eq!(validated.api_level, 33);
    assert_eq!(validated.target, "google_apis_playstore");
    assert_eq!(validated.arch, "arm64-v8a");
    assert_eq!(validated.profile.as_deref(), Some("pixel_6"));
    assert_eq!(validated.disk_size.as_deref(), Some("6G"));
    assert_eq!(validated.avd_name, "ci-device");
    assert!(!validated.force_avd_creation);
    assert_eq!(validated.emulator_port, 5560);
    assert!(!validated.disable_animations);
    assert!(validated.disable_spellchecker);
    assert_eq!(validated.disable_linux_hw_accel, TriState::True);
    assert!(validated.enable_hw_keyboard);
    assert_eq!(validated.emulator_build.as_deref(), Some("7425822"));
    assert_eq!(validated.channel, Channel::Canary);
    assert_eq!(validated.channel.id(), 3);
}

#[test]
fn test_env_expansion_in_document() {
    std::env::set_var("EIV_DOC_TEST_ARCH", "x86_64");

    let yaml = r#"
api-level: "${EIV_DOC_TEST_API_LEVEL:-31}"
arch: "${EIV_DOC_TEST_ARCH}"
"#;
    let validated = EmulatorInputs::from_yaml_str(yaml)
        .unwrap()
        .validate()
        .unwrap();
    assert_eq!(validated.api_level, 31);
    assert_eq!(validated.arch, "x86_64");

    std::env::remove_var("EIV_DOC_TEST_ARCH");
}

#[test]
fn test_unresolved_env_var() {
    let result = EmulatorInputs::from_yaml_str("api-level: ${EIV_DOC_TEST_NEVER_SET}");
    assert!(matches!(result, Err(AppError::Configuration(_))));
}

#[test]
fn test_misspelled_keys_rejected() {
    let result = EmulatorInputs::from_yaml_str("api-level: 30\ndisksize: 4X\nchanel: nightly");
    assert!(matches!(result, Err(AppError::Yaml(_))));
}

#[test]
fn test_unquoted_float_disk_size_rejected() {
    let result = EmulatorInputs::from_yaml_str("api-level: 30\ndisk-size: 1e3");
    assert!(matches!(result, Err(AppError::Yaml(_))));
}

#[test]
fn test_unquoted_hex_api_level_normalized() {
    let validated = EmulatorInputs::from_yaml_str("api-level: 0x1F")
        .unwrap()
        .validate()
        .unwrap();
    assert_eq!(validated.api_level, 31);
}

#[test]
fn test_invalid_yaml() {
    let result = EmulatorInputs::from_yaml_str("api-level: [");
    assert!(matches!(result, Err(AppError::Yaml(_))));
}

#[test]
fn test_each_invalid_field_is_reported() {
    let cases = [
        ("api-level", "9", "api-level"),
        ("arch", "mips", "arch"),
        ("disk-size", "4X", "disk-size"),
        ("force-avd-creation", "yes", "force-avd-creation"),
        ("emulator-port", "5555", "emulator-port"),
        ("emulator-port", "port", "emulator-port"),
        ("disable-animations", "True", "disable-animations"),
        ("disable-spellchecker", "0", "disable-spellchecker"),
        ("disable-linux-hw-accel", "maybe", "disable-linux-hw-accel"),
        ("enable-hw-keyboard", "off", "enable-hw-keyboard"),
        ("emulator-build", "12.5", "emulator-build"),
        ("channel", "nightly", "channel"),
    ];

    for (field, value, expected_field) in cases {
        let err = common::inputs_with(field, value).validate().unwrap_err();
        assert_eq!(err.field(), Some(expected_field), "{}={}", field, value);
        assert!(err.to_string().contains(value), "{}", err);
    }
}

#[test]
fn test_first_failure_wins() {
    let yaml = r#"
api-level: "30"
arch: mips
channel: nightly
"#;
    let err = EmulatorInputs::from_yaml_str(yaml)
        .unwrap()
        .validate()
        .unwrap_err();
    assert_eq!(err.field(), Some("arch"));
}

#[test]
fn test_empty_build_means_latest() {
    let validated = common::inputs_with("emulator-build", "").validate().unwrap();
    assert_eq!(validated.emulator_build, None);
}

#[test]
fn test_unknown_target_kept() {
    let validated = common::inputs_with("target", "google_apis").validate().unwrap();
    assert_eq!(validated.target, "google_apis");
}
