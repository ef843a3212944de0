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
#[ctor::ctor]
fn test_global_init() {
  orm_log_test_helpers::test_global_init();
}

pub mod adapter;
pub mod context;
pub mod message;

pub use adapter::{COMPONENT, LoggerAdapter, extract_attributes};
pub use context::{ConnectionInfo, LogContext};
pub use orm_log_config::{DebugMode, LoggerOptions};
pub use orm_log_primitives::{ContextLevel, Severity, namespace};

//
// Logger
//

/// The logging contract the ORM host calls into. Only `log` and the debug mode accessors need to
/// be provided; `error`, `warn` and `log_query` are defined in terms of `log`.
pub trait Logger: Send + Sync {
  /// Logs a message under `namespace` if the namespace is enabled. The severity comes from the
  /// context level, defaulting to info.
  fn log(&self, namespace: &str, message: &str, context: Option<&LogContext>);

  /// Logs at error severity. All other context fields are kept.
  fn error(&self, namespace: &str, message: &str, context: Option<&LogContext>) {
    self.log(
      namespace,
      message,
      Some(&LogContext::with_forced_level(context, ContextLevel::Error)),
    );
  }

  /// Logs at warn severity. All other context fields are kept.
  fn warn(&self, namespace: &str, message: &str, context: Option<&LogContext>) {
    self.log(
      namespace,
      message,
      Some(&LogContext::with_forced_level(context, ContextLevel::Warning)),
    );
  }

  /// Logs an executed query under the `query` namespace.
  fn log_query(&self, context: &LogContext) {
    self.log(
      namespace::QUERY,
      &message::query_message(context),
      Some(context),
    );
  }

  fn is_enabled(&self, namespace: &str) -> bool;

  fn set_debug_mode(&mut self, debug_mode: DebugMode);

  fn debug_mode(&self) -> &DebugMode;
}
