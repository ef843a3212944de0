// shared-core - bitdrift's common client/server libraries
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

#[cfg(test)]
#[path = "./lib_test.rs"]
mod lib_test;

pub use orm_log_primitives::{Attributes, Severity};
use std::sync::Arc;

/// The tracing target all events written through `TracingLogger` use.
pub const TRACING_TARGET: &str = "orm_log";

//
// StructuredLogger
//

/// A leveled logger accepting a message plus structured attributes. Loggers form a hierarchy:
/// `child` derives a logger scoped by an additional tag, which is how the adapter scopes output
/// per component and per namespace.
pub trait StructuredLogger: Send + Sync {
  /// Returns a logger scoped under `tag`.
  #[must_use]
  fn child(&self, tag: &str) -> Self
  where
    Self: Sized;

  /// Writes a single log line.
  fn log(&self, severity: Severity, message: &str, attributes: Attributes);

  fn info(&self, message: &str, attributes: Attributes) {
    self.log(Severity::Info, message, attributes);
  }

  fn warn(&self, message: &str, attributes: Attributes) {
    self.log(Severity::Warn, message, attributes);
  }

  fn error(&self, message: &str, attributes: Attributes) {
    self.log(Severity::Error, message, attributes);
  }
}

//
// TracingLogger
//

/// Writes log lines as `tracing` events. The logger name is recorded in the `logger` field and
/// the attributes as a JSON object in the `attributes` field.
#[derive(Debug, Clone)]
pub struct TracingLogger {
  name: Arc<str>,
}

impl TracingLogger {
  #[must_use]
  pub fn new(name: impl Into<Arc<str>>) -> Self {
    Self { name: name.into() }
  }

  #[must_use]
  pub fn name(&self) -> &str {
    &self.name
  }
}

impl Default for TracingLogger {
  fn default() -> Self {
    Self::new("")
  }
}

impl StructuredLogger for TracingLogger {
  fn child(&self, tag: &str) -> Self {
    if self.name.is_empty() {
      return Self::new(tag);
    }
    Self::new(format!("{}:{tag}", self.name))
  }

  fn log(&self, severity: Severity, message: &str, attributes: Attributes) {
    let attributes = render_attributes(&attributes);

    match severity {
      Severity::Info => {
        tracing::info!(
          target: TRACING_TARGET,
          logger = %self.name,
          attributes = %attributes,
          "{message}"
        );
      },
      Severity::Warn => {
        tracing::warn!(
          target: TRACING_TARGET,
          logger = %self.name,
          attributes = %attributes,
          "{message}"
        );
      },
      Severity::Error => {
        tracing::error!(
          target: TRACING_TARGET,
          logger = %self.name,
          attributes = %attributes,
          "{message}"
        );
      },
    }
  }
}

fn render_attributes(attributes: &Attributes) -> String {
  serde_json::to_string(attributes)
    .unwrap_or_else(|e| format!("<unserializable attributes: {e}>"))
}

//
// NoopLogger
//

/// A logger that does nothing. Used when the ORM output should not go anywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl StructuredLogger for NoopLogger {
  fn child(&self, _tag: &str) -> Self {
    Self
  }

  fn log(&self, _severity: Severity, _message: &str, _attributes: Attributes) {}
}
