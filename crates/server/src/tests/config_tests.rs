use super::*;

use std::{
    collections::HashMap,
    env,
    time::{SystemTime, UNIX_EPOCH},
};

fn no_env(_: &str) -> Option<String> {
    None
}

fn temp_settings_file(name: &str, contents: &str) -> std::path::PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = env::temp_dir().join(format!("brevets_settings_{name}_{suffix}.toml"));
    fs::write(&path, contents).expect("write settings");
    path
}

#[test]
fn missing_file_yields_defaults() {
    let path = env::temp_dir().join("brevets_settings_that_do_not_exist.toml");
    let settings = load_settings_from(&path, no_env).expect("settings");
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.log_filter(), "info");
}

#[test]
fn file_values_override_defaults() {
    let path = temp_settings_file(
        "file_values",
        "port = 8080\ndebug = true\ndefault_brevet_km = 400\ndefault_control_km = 0.0\n",
    );
    let settings = load_settings_from(&path, no_env).expect("settings");
    fs::remove_file(&path).expect("cleanup");

    assert_eq!(settings.server_bind, "0.0.0.0:8080");
    assert!(settings.debug);
    assert_eq!(settings.log_filter(), "debug");
    assert_eq!(settings.default_brevet_km, 400);
    assert_eq!(settings.default_control_km, 0.0);
}

#[test]
fn environment_wins_over_file() {
    let path = temp_settings_file("env_wins", "bind_addr = \"127.0.0.1:9000\"\ndebug = true\n");
    let env: HashMap<&str, &str> = HashMap::from([
        ("APP__BIND_ADDR", "127.0.0.1:9100"),
        ("APP__DEBUG", "false"),
        ("APP__DEFAULT_BREVET_KM", "1000"),
    ]);
    let settings =
        load_settings_from(&path, |key| env.get(key).map(|v| v.to_string())).expect("settings");
    fs::remove_file(&path).expect("cleanup");

    assert_eq!(settings.server_bind, "127.0.0.1:9100");
    assert!(!settings.debug);
    assert_eq!(settings.default_brevet_km, 1000);
}

#[test]
fn unparseable_env_values_are_ignored() {
    let env: HashMap<&str, &str> =
        HashMap::from([("PORT", "eighty"), ("APP__DEFAULT_CONTROL_KM", "far")]);
    let mut settings = Settings::default();
    settings.apply_env(|key| env.get(key).map(|v| v.to_string()));
    assert_eq!(settings, Settings::default());
}

#[test]
fn malformed_file_is_an_error() {
    let path = temp_settings_file("malformed", "port = \"not a number\"\n");
    let err = load_settings_from(&path, no_env).expect_err("should fail");
    fs::remove_file(&path).expect("cleanup");
    assert!(err.to_string().contains("failed to parse settings file"));
}

#[test]
fn unknown_keys_are_rejected() {
    let mut settings = Settings::default();
    assert!(settings.apply_file("timezone = \"UTC\"\n").is_err());
}
