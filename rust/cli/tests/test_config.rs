use std::collections::HashMap;
use std::io::Write;

use boardrank_cli::config::{StrengthMode, ValueSource, View, load_with_sources_from};
use serde_json::Value;
use tempfile::NamedTempFile;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn env_with(pairs: Vec<(&str, String)>) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect();
    move |key| map.get(key).cloned()
}

fn cfg(env: &dyn Fn(&str) -> Option<String>) -> (i32, Value, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = boardrank_cli::run_with_env(["boardrank", "cfg"], env, &mut out, &mut err);
    let json = serde_json::from_slice(&out).unwrap_or(Value::Null);
    (code, json, String::from_utf8(err).unwrap())
}

#[test]
fn file_values_are_applied_with_their_source() {
    let file = config_file("strength = \"street\"\nflop_divisor = 1000\nview = \"full\"\n");
    let path = file.path().to_string_lossy().to_string();
    let resolved = load_with_sources_from(env_with(vec![("BOARDRANK_CONFIG", path)])).unwrap();
    assert_eq!(resolved.settings.strength, StrengthMode::Street);
    assert_eq!(resolved.settings.flop_divisor, 1000);
    assert_eq!(resolved.settings.view, View::Full);
    assert_eq!(resolved.sources.strength, ValueSource::File);
    assert_eq!(resolved.sources.turn_divisor, ValueSource::Default);
}

#[test]
fn env_overrides_file() {
    let file = config_file("seed = 5\nriver_divisor = 100\n");
    let env = env_with(vec![
        ("BOARDRANK_CONFIG", file.path().to_string_lossy().to_string()),
        ("BOARDRANK_SEED", "9".to_string()),
    ]);
    let (code, json, err) = cfg(&env);
    assert_eq!(code, 0, "stderr: {err}");
    assert_eq!(json["seed"]["value"], 9);
    assert_eq!(json["seed"]["source"], "env");
    assert_eq!(json["river_divisor"]["value"], 100);
    assert_eq!(json["river_divisor"]["source"], "file");
}

#[test]
fn flags_override_env() {
    let env = env_with(vec![
        ("BOARDRANK_STRENGTH", "street".to_string()),
        ("BOARDRANK_SEED", "77".to_string()),
    ]);
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = boardrank_cli::run_with_env(
        [
            "boardrank", "analyze", "--strength", "relative", "--seed", "3", "--format", "json",
        ],
        &env,
        &mut out,
        &mut err,
    );
    assert_eq!(code, 0);
    let json: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["seed"], 3);
    assert_eq!(json["streets"][0]["scoring"]["strategy"], "relative_position");
}

#[test]
fn configured_seed_is_used_without_a_flag() {
    let env = env_with(vec![("BOARDRANK_SEED", "77".to_string())]);
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = boardrank_cli::run_with_env(
        ["boardrank", "analyze", "--format", "json"],
        &env,
        &mut out,
        &mut err,
    );
    assert_eq!(code, 0);
    let json: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["seed"], 77);
}

#[test]
fn zero_divisor_in_file_is_rejected() {
    let file = config_file("turn_divisor = 0\n");
    let env = env_with(vec![(
        "BOARDRANK_CONFIG",
        file.path().to_string_lossy().to_string(),
    )]);
    let (code, json, err) = cfg(&env);
    assert_eq!(code, 2);
    assert!(json.is_null());
    assert!(err.contains("turn_divisor must be >0"));
}

#[test]
fn unknown_file_key_is_rejected() {
    let file = config_file("level = 3\n");
    let env = env_with(vec![(
        "BOARDRANK_CONFIG",
        file.path().to_string_lossy().to_string(),
    )]);
    let (code, _, err) = cfg(&env);
    assert_eq!(code, 2);
    assert!(err.starts_with("Error: Configuration error: cannot parse config file"));
}
