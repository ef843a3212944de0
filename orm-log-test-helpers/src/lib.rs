// shared-core - bitdrift's common client/server libraries
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

use orm_log_primitives::{Attributes, Severity};
use orm_log_sink::StructuredLogger;
use parking_lot::Mutex;
use std::sync::Arc;

pub fn test_global_init() {
  orm_log_subscriber::SwapLogger::initialize();
}

//
// RecordedLog
//

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedLog {
  /// The logger path, tags joined with `:`.
  pub logger: String,
  pub severity: Severity,
  pub message: String,
  pub attributes: Attributes,
}

//
// RecordingLogger
//

/// Test helper capturing every log line written through it or any of its children.
#[derive(Clone, Default)]
pub struct RecordingLogger {
  path: Vec<String>,
  records: Arc<Mutex<Vec<RecordedLog>>>,
}

impl RecordingLogger {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Returns a copy of everything recorded so far.
  #[must_use]
  pub fn records(&self) -> Vec<RecordedLog> {
    self.records.lock().clone()
  }

  /// Returns and clears everything recorded so far.
  pub fn take(&self) -> Vec<RecordedLog> {
    std::mem::take(&mut *self.records.lock())
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.records.lock().is_empty()
  }

  /// Asserts exactly one line was recorded, and returns it.
  pub fn single(&self) -> RecordedLog {
    let mut records = self.take();
    assert_eq!(records.len(), 1, "expected a single log, got {records:?}");
    records.remove(0)
  }
}

impl StructuredLogger for RecordingLogger {
  fn child(&self, tag: &str) -> Self {
    let mut path = self.path.clone();
    path.push(tag.to_string());
    Self {
      path,
      records: self.records.clone(),
    }
  }

  fn log(&self, severity: Severity, message: &str, attributes: Attributes) {
    self.records.lock().push(RecordedLog {
      logger: self.path.join(":"),
      severity,
      message: message.to_string(),
      attributes,
    });
  }
}
