// shared-core - bitdrift's common client/server libraries
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

#[cfg(test)]
#[path = "./message_test.rs"]
mod message_test;

use crate::LogContext;

/// Flattens a multi-line ORM message onto one line: newlines are removed, runs of spaces collapse
/// to a single space and surrounding whitespace is trimmed. Tabs and other whitespace inside the
/// message are kept.
#[must_use]
pub fn normalize_message(message: &str) -> String {
  let mut normalized = String::with_capacity(message.len());
  let mut previous_space = false;

  for c in message.chars().filter(|c| *c != '\n') {
    let space = c == ' ';
    if !(space && previous_space) {
      normalized.push(c);
    }
    previous_space = space;
  }

  normalized.trim().to_string()
}

#[must_use]
pub fn query_message(context: &LogContext) -> String {
  context.took_ms().map_or_else(
    || "Exec query".to_string(),
    |took| format!("Exec query took {took} ms"),
  )
}
