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


pub mod attributes;
pub mod namespace;

pub use attributes::{AttributeValue, Attributes};
use serde::{Deserialize, Serialize};

pub const ATTRIBUTE_NAME_SQL: &str = "db.statement";
pub const ATTRIBUTE_NAME_PARAMS: &str = "db.params";
pub const ATTRIBUTE_NAME_CONNECTION_TYPE: &str = "db.connection.type";
pub const ATTRIBUTE_NAME_CONNECTION_NAME: &str = "db.connection.name";
pub const ATTRIBUTE_NAME_TOOK: &str = "db.took";

//
// Severity
//

/// The severity a log line is written at by the downstream structured logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
  Info,
  Warn,
  Error,
}

impl Severity {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Info => "info",
      Self::Warn => "warn",
      Self::Error => "error",
    }
  }
}

impl std::fmt::Display for Severity {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

//
// ContextLevel
//

/// The severity hint carried by an ORM log context. Unknown levels deserialize as `Info` so that
/// anything the host sends that is not an error or a warning is logged at info.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ContextLevel {
  #[default]
  Info,
  Warning,
  Error,
}

impl From<&str> for ContextLevel {
  fn from(level: &str) -> Self {
    match level {
      "error" => Self::Error,
      "warning" => Self::Warning,
      _ => Self::Info,
    }
  }
}

impl From<String> for ContextLevel {
  fn from(level: String) -> Self {
    level.as_str().into()
  }
}

impl From<ContextLevel> for Severity {
  fn from(level: ContextLevel) -> Self {
    match level {
      ContextLevel::Error => Self::Error,
      ContextLevel::Warning => Self::Warn,
      ContextLevel::Info => Self::Info,
    }
  }
}
