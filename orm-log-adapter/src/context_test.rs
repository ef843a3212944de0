// shared-core - bitdrift's common client/server libraries
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

#![allow(clippy::unwrap_used)]

use super::{ConnectionInfo, LogContext};
use orm_log_primitives::ContextLevel;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn deserialize_full_context() {
  let context: LogContext = serde_json::from_value(json!({
    "query": "select * from book where id = ?",
    "params": [1, "two", null, {"nested": true}],
    "connection": {"type": "read", "name": "replica-1"},
    "took": 4.25,
    "level": "warning",
  }))
  .unwrap();

  assert_eq!(
    context,
    LogContext {
      query: Some("select * from book where id = ?".to_string()),
      params: Some(vec![json!(1), json!("two"), json!(null), json!({"nested": true})]),
      connection: Some(ConnectionInfo {
        kind: Some("read".to_string()),
        name: Some("replica-1".to_string()),
      }),
      took: Some(4.25),
      level: Some(ContextLevel::Warning),
    }
  );
}

#[test]
fn deserialize_sparse_context() {
  let context: LogContext = serde_json::from_value(json!({"level": "verbose"})).unwrap();
  assert_eq!(
    context,
    LogContext {
      level: Some(ContextLevel::Info),
      ..Default::default()
    }
  );

  let context: LogContext = serde_json::from_value(json!({})).unwrap();
  assert_eq!(context, LogContext::default());
}

#[test]
fn forced_level_keeps_other_fields() {
  let context = LogContext {
    query: Some("select 1".to_string()),
    took: Some(2.0),
    level: Some(ContextLevel::Info),
    ..Default::default()
  };

  let forced = LogContext::with_forced_level(Some(&context), ContextLevel::Error);
  assert_eq!(
    forced,
    LogContext {
      level: Some(ContextLevel::Error),
      ..context
    }
  );

  assert_eq!(
    LogContext::with_forced_level(None, ContextLevel::Warning),
    LogContext {
      level: Some(ContextLevel::Warning),
      ..Default::default()
    }
  );
}

#[test]
fn empty_values_count_as_absent() {
  let context = LogContext {
    query: Some(String::new()),
    connection: Some(ConnectionInfo {
      kind: Some(String::new()),
      name: Some("primary".to_string()),
    }),
    took: Some(f64::NAN),
    ..Default::default()
  };

  assert_eq!(context.query(), None);
  assert_eq!(context.connection_type(), None);
  assert_eq!(context.connection_name(), Some("primary"));
  assert_eq!(context.took_ms(), None);
}
