// shared-core - bitdrift's common client/server libraries
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

#[cfg(test)]
#[path = "./context_test.rs"]
mod context_test;

use orm_log_primitives::ContextLevel;
use serde::{Deserialize, Serialize};

//
// ConnectionInfo
//

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionInfo {
  /// Connection role, e.g. `write` or `read`.
  #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
  pub kind: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
}

//
// LogContext
//

/// Optional detail attached to an ORM log call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogContext {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub query: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub params: Option<Vec<serde_json::Value>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub connection: Option<ConnectionInfo>,
  /// Elapsed time in milliseconds.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub took: Option<f64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub level: Option<ContextLevel>,
}

impl LogContext {
  /// Copies `context`, or starts from an empty one, with the level replaced.
  #[must_use]
  pub fn with_forced_level(context: Option<&Self>, level: ContextLevel) -> Self {
    Self {
      level: Some(level),
      ..context.cloned().unwrap_or_default()
    }
  }

  /// The elapsed time, if set to something other than zero or NaN.
  #[must_use]
  pub fn took_ms(&self) -> Option<f64> {
    self.took.filter(|took| *took != 0.0 && !took.is_nan())
  }

  #[must_use]
  pub fn query(&self) -> Option<&str> {
    non_empty(self.query.as_deref())
  }

  #[must_use]
  pub fn connection_type(&self) -> Option<&str> {
    non_empty(self.connection.as_ref().and_then(|c| c.kind.as_deref()))
  }

  #[must_use]
  pub fn connection_name(&self) -> Option<&str> {
    non_empty(self.connection.as_ref().and_then(|c| c.name.as_deref()))
  }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
  value.filter(|value| !value.is_empty())
}
