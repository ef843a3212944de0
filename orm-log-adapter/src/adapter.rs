// shared-core - bitdrift's common client/server libraries
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

use crate::message::normalize_message;
use crate::{LogContext, Logger};
use orm_log_config::{DebugMode, LoggerOptions};
use orm_log_primitives::{
  ATTRIBUTE_NAME_CONNECTION_NAME,
  ATTRIBUTE_NAME_CONNECTION_TYPE,
  ATTRIBUTE_NAME_PARAMS,
  ATTRIBUTE_NAME_SQL,
  ATTRIBUTE_NAME_TOOK,
  Attributes,
  Severity,
};
use orm_log_sink::{StructuredLogger, TracingLogger};

/// The tag the downstream logger is scoped under before the per-namespace tag.
pub const COMPONENT: &str = "mikro-orm";

//
// LoggerAdapter
//

/// Translates ORM log calls into structured log lines. Calls for disabled namespaces are dropped,
/// enabled ones are written to `logger.child(namespace)` with the context flattened into
/// attributes.
///
/// `set_debug_mode` takes `&mut self`; sharing an adapter across threads while toggling the debug
/// mode requires an outer lock.
pub struct LoggerAdapter<L = TracingLogger> {
  debug_mode: DebugMode,
  options: LoggerOptions,
  logger: L,
}

impl LoggerAdapter<TracingLogger> {
  /// Creates an adapter writing through `tracing`.
  #[must_use]
  pub fn new(options: LoggerOptions) -> Self {
    Self::with_logger(options, TracingLogger::default())
  }
}

impl<L: StructuredLogger> LoggerAdapter<L> {
  /// Creates an adapter writing to `logger`, scoped under `COMPONENT`.
  pub fn with_logger(options: LoggerOptions, logger: L) -> Self {
    Self {
      debug_mode: options.debug_mode.clone().unwrap_or_default(),
      options,
      logger: logger.child(COMPONENT),
    }
  }

  #[must_use]
  pub const fn options(&self) -> &LoggerOptions {
    &self.options
  }

  #[must_use]
  pub const fn logger(&self) -> &L {
    &self.logger
  }
}

impl<L: StructuredLogger> Logger for LoggerAdapter<L> {
  fn log(&self, namespace: &str, message: &str, context: Option<&LogContext>) {
    if !self.is_enabled(namespace) {
      return;
    }

    let message = normalize_message(message);
    let attributes = extract_attributes(context);
    let logger = self.logger.child(namespace);

    match context
      .and_then(|context| context.level)
      .map_or(Severity::Info, Severity::from)
    {
      Severity::Error => logger.error(&message, attributes),
      Severity::Warn => logger.warn(&message, attributes),
      Severity::Info => logger.info(&message, attributes),
    }
  }

  fn is_enabled(&self, namespace: &str) -> bool {
    self.debug_mode.is_enabled(namespace)
  }

  fn set_debug_mode(&mut self, debug_mode: DebugMode) {
    self.debug_mode = debug_mode;
  }

  fn debug_mode(&self) -> &DebugMode {
    &self.debug_mode
  }
}

/// Flattens a log context into attributes. Fields that are unset, empty strings, or a zero
/// elapsed time are left out entirely. Parameters are kept even when the list is empty.
#[must_use]
pub fn extract_attributes(context: Option<&LogContext>) -> Attributes {
  let mut attributes = Attributes::new();
  let Some(context) = context else {
    return attributes;
  };

  if let Some(query) = context.query() {
    attributes.insert(ATTRIBUTE_NAME_SQL, query);
  }

  if let Some(params) = &context.params {
    attributes.insert(ATTRIBUTE_NAME_PARAMS, params.clone());
  }

  if let Some(kind) = context.connection_type() {
    attributes.insert(ATTRIBUTE_NAME_CONNECTION_TYPE, kind);
  }

  if let Some(name) = context.connection_name() {
    attributes.insert(ATTRIBUTE_NAME_CONNECTION_NAME, name);
  }

  if let Some(took) = context.took_ms() {
    attributes.insert(ATTRIBUTE_NAME_TOOK, took);
  }

  attributes
}
