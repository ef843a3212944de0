// shared-core - bitdrift's common client/server libraries
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

#![allow(clippy::unwrap_used)]

use crate::{ConfigError, DEBUG_MODE_ENV, DebugMode, LoggerOptions};
use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::io::Write;

#[rstest]
#[case("", DebugMode::Global(false))]
#[case("false", DebugMode::Global(false))]
#[case("FALSE", DebugMode::Global(false))]
#[case("0", DebugMode::Global(false))]
#[case("true", DebugMode::Global(true))]
#[case(" 1 ", DebugMode::Global(true))]
#[case("query", DebugMode::namespaces(["query"]))]
#[case("query, schema,,", DebugMode::namespaces(["query", "schema"]))]
fn parse_debug_mode(#[case] input: &str, #[case] expected: DebugMode) {
  assert_eq!(DebugMode::parse(input), expected);
  assert_eq!(input.parse::<DebugMode>().unwrap(), expected);
}

#[test]
fn debug_mode_membership() {
  assert!(DebugMode::Global(true).is_enabled("anything"));
  assert!(!DebugMode::Global(false).is_enabled("query"));

  let mode: DebugMode = ["query", "schema", "query"].into_iter().collect();
  assert!(mode.is_enabled("query"));
  assert!(mode.is_enabled("schema"));
  assert!(!mode.is_enabled("Query"));
  assert!(!mode.is_enabled("query "));

  assert!(!DebugMode::namespaces(Vec::<String>::new()).is_enabled(""));
}

#[test]
fn yaml_options() {
  let options = LoggerOptions::from_yaml_str("debug_mode: true").unwrap();
  assert_eq!(options.debug_mode, Some(DebugMode::Global(true)));
  assert!(options.extra.is_empty());

  let options = LoggerOptions::from_yaml_str(
    r"
debugMode:
  - query
  - discovery
highlight: false
",
  )
  .unwrap();
  assert_eq!(
    options.debug_mode,
    Some(DebugMode::namespaces(["query", "discovery"]))
  );
  assert_eq!(options.extra.get("highlight"), Some(&serde_json::json!(false)));

  let options = LoggerOptions::from_yaml_str("  \n").unwrap();
  assert_eq!(options, LoggerOptions::default());
  assert_eq!(options.debug_mode, None);
}

#[test]
fn json_options() {
  let options =
    LoggerOptions::from_json_str(r#"{"debugMode": ["schema"], "writer": "stdout"}"#).unwrap();
  assert_eq!(options.debug_mode, Some(DebugMode::namespaces(["schema"])));
  assert_eq!(options.extra.get("writer"), Some(&serde_json::json!("stdout")));

  assert_matches!(
    LoggerOptions::from_json_str(r#"{"debug_mode": 3}"#),
    Err(ConfigError::Json(_))
  );
}

#[test]
fn options_from_file() {
  let dir = tempfile::tempdir().unwrap();

  let yaml_path = dir.path().join("logger.yaml");
  std::fs::File::create(&yaml_path)
    .unwrap()
    .write_all(b"debug_mode: [query]\n")
    .unwrap();
  let options = LoggerOptions::from_file(&yaml_path).unwrap();
  assert_eq!(options.debug_mode, Some(DebugMode::namespaces(["query"])));

  let json_path = dir.path().join("logger.JSON");
  std::fs::write(&json_path, r#"{"debug_mode": false}"#).unwrap();
  let options = LoggerOptions::from_file(&json_path).unwrap();
  assert_eq!(options.debug_mode, Some(DebugMode::Global(false)));

  let toml_path = dir.path().join("logger.toml");
  std::fs::write(&toml_path, "debug_mode = true").unwrap();
  assert_matches!(
    LoggerOptions::from_file(&toml_path),
    Err(ConfigError::UnsupportedFormat(path)) if path == toml_path
  );

  assert_matches!(
    LoggerOptions::from_file(dir.path().join("missing.yml")),
    Err(ConfigError::Io { .. })
  );
}

#[test]
fn overrides() {
  let options = LoggerOptions::default()
    .with_debug_mode(true)
    .apply_overrides(|key| (key == DEBUG_MODE_ENV).then(|| "query,schema".to_string()));
  assert_eq!(
    options.debug_mode,
    Some(DebugMode::namespaces(["query", "schema"]))
  );

  let options = LoggerOptions::default()
    .with_debug_mode(true)
    .apply_overrides(|_| None);
  assert_eq!(options.debug_mode, Some(DebugMode::Global(true)));
}
