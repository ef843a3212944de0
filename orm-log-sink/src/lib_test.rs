// shared-core - bitdrift's common client/server libraries
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

use crate::{Attributes, NoopLogger, Severity, StructuredLogger, TracingLogger};
use orm_log_primitives::{ATTRIBUTE_NAME_SQL, ATTRIBUTE_NAME_TOOK};
use pretty_assertions::assert_eq;
use std::io::Write;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

impl CapturedOutput {
  fn contents(&self) -> String {
    String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
  }
}

impl Write for CapturedOutput {
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    self.0.lock().unwrap().extend_from_slice(buf);
    Ok(buf.len())
  }

  fn flush(&mut self) -> std::io::Result<()> {
    Ok(())
  }
}

fn capture(f: impl FnOnce()) -> String {
  let output = CapturedOutput::default();
  let writer = output.clone();
  let subscriber = tracing_subscriber::fmt()
    .with_writer(move || writer.clone())
    .with_ansi(false)
    .with_max_level(tracing::Level::TRACE)
    .finish();

  tracing::subscriber::with_default(subscriber, f);
  output.contents()
}

#[test]
fn child_names() {
  let root = TracingLogger::default();
  assert_eq!(root.name(), "");

  let component = root.child("mikro-orm");
  assert_eq!(component.name(), "mikro-orm");
  assert_eq!(component.child("query").name(), "mikro-orm:query");
  assert_eq!(
    TracingLogger::new("app").child("mikro-orm").child("schema").name(),
    "app:mikro-orm:schema"
  );
}

#[test]
fn tracing_output() {
  let logger = TracingLogger::new("mikro-orm").child("query");

  let output = capture(|| {
    let mut attributes = Attributes::new();
    attributes.insert(ATTRIBUTE_NAME_SQL, "select 1");
    attributes.insert(ATTRIBUTE_NAME_TOOK, 3.0);
    logger.info("Exec query", attributes);
    logger.warn("slow", Attributes::new());
    logger.log(Severity::Error, "failed", Attributes::new());
  });

  let lines: Vec<_> = output.lines().collect();
  assert_eq!(lines.len(), 3, "{output}");

  assert!(lines[0].contains("INFO"), "{}", lines[0]);
  assert!(lines[0].contains("Exec query"), "{}", lines[0]);
  assert!(lines[0].contains("logger=mikro-orm:query"), "{}", lines[0]);
  assert!(
    lines[0].contains(r#"attributes={"db.statement":"select 1","db.took":3}"#),
    "{}",
    lines[0]
  );

  assert!(lines[1].contains("WARN"), "{}", lines[1]);
  assert!(lines[1].contains("attributes={}"), "{}", lines[1]);
  assert!(lines[2].contains("ERROR"), "{}", lines[2]);
  assert!(lines[2].contains("failed"), "{}", lines[2]);
}

#[test]
fn noop_logger_writes_nothing() {
  let output = capture(|| {
    let logger = NoopLogger.child("query");
    logger.error("failed", Attributes::new());
  });
  assert!(output.is_empty(), "{output}");
}
