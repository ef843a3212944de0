// shared-core - bitdrift's common client/server libraries
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

#![deny(
  clippy::expect_used,
  clippy::panic,
  clippy::todo,
  clippy::unimplemented,
  clippy::unreachable,
  clippy::unwrap_used
)]

#[cfg(test)]
#[path = "./lib_test.rs"]
mod lib_test;

pub mod debug_mode;

pub use debug_mode::DebugMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that, when set, replaces the configured debug mode.
pub const DEBUG_MODE_ENV: &str = "ORMLOG_DEBUG";

//
// ConfigError
//

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
  #[error("unable to read config file {path}: {source}")]
  Io {
    path: PathBuf,
    source: std::io::Error,
  },
  #[error("invalid yaml config: {0}")]
  Yaml(#[from] serde_yaml::Error),
  #[error("invalid json config: {0}")]
  Json(#[from] serde_json::Error),
  #[error("unsupported config format for {0}, expected .yaml, .yml or .json")]
  UnsupportedFormat(PathBuf),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

//
// LoggerOptions
//

/// Options handed to the logger by the ORM host. Only the debug mode is interpreted, everything
/// else is kept as-is in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggerOptions {
  #[serde(default, alias = "debugMode", skip_serializing_if = "Option::is_none")]
  pub debug_mode: Option<DebugMode>,

  #[serde(flatten)]
  pub extra: serde_json::Map<String, serde_json::Value>,
}

impl LoggerOptions {
  #[must_use]
  pub fn with_debug_mode(mut self, debug_mode: impl Into<DebugMode>) -> Self {
    self.debug_mode = Some(debug_mode.into());
    self
  }

  pub fn from_yaml_str(yaml: &str) -> Result<Self> {
    // An empty document is a valid, empty config.
    if yaml.trim().is_empty() {
      return Ok(Self::default());
    }
    Ok(serde_yaml::from_str(yaml)?)
  }

  pub fn from_json_str(json: &str) -> Result<Self> {
    if json.trim().is_empty() {
      return Ok(Self::default());
    }
    Ok(serde_json::from_str(json)?)
  }

  /// Loads options from a file, picking the format from the file extension.
  pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let extension = path
      .extension()
      .and_then(|extension| extension.to_str())
      .map(str::to_ascii_lowercase);

    let parse: fn(&str) -> Result<Self> = match extension.as_deref() {
      Some("yaml" | "yml") => Self::from_yaml_str,
      Some("json") => Self::from_json_str,
      _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    };

    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
      path: path.to_path_buf(),
      source,
    })?;

    let options = parse(&contents)?;
    log::debug!(
      "loaded logger options from {}: debug_mode={:?}",
      path.display(),
      options.debug_mode
    );
    Ok(options)
  }

  /// Applies overrides resolved through `lookup`, which maps an environment variable name to its
  /// value.
  #[must_use]
  pub fn apply_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
    if let Some(value) = lookup(DEBUG_MODE_ENV) {
      let debug_mode = DebugMode::parse(&value);
      log::debug!("{DEBUG_MODE_ENV} overrides debug mode with {debug_mode:?}");
      self.debug_mode = Some(debug_mode);
    }
    self
  }
}
