// shared-core - bitdrift's common client/server libraries
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

#[cfg(test)]
#[path = "./replay_test.rs"]
mod replay_test;

use orm_log_adapter::{LogContext, Logger};
use serde::Deserialize;
use std::io::BufRead;

//
// ReplayError
//

#[derive(thiserror::Error, Debug)]
pub enum ReplayError {
  #[error("unable to read invocations: {0}")]
  Io(#[from] std::io::Error),
  #[error("invalid invocation on line {line}: {source}")]
  Parse {
    line: usize,
    source: serde_json::Error,
  },
}

//
// Invocation
//

/// A single recorded call into the ORM logger, one JSON object per line.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Invocation {
  Log {
    namespace: String,
    message: String,
    #[serde(default)]
    context: Option<LogContext>,
  },
  Error {
    namespace: String,
    message: String,
    #[serde(default)]
    context: Option<LogContext>,
  },
  Warn {
    namespace: String,
    message: String,
    #[serde(default)]
    context: Option<LogContext>,
  },
  Query {
    context: LogContext,
  },
}

impl Invocation {
  pub fn dispatch(&self, logger: &dyn Logger) {
    match self {
      Self::Log {
        namespace,
        message,
        context,
      } => logger.log(namespace, message, context.as_ref()),
      Self::Error {
        namespace,
        message,
        context,
      } => logger.error(namespace, message, context.as_ref()),
      Self::Warn {
        namespace,
        message,
        context,
      } => logger.warn(namespace, message, context.as_ref()),
      Self::Query { context } => logger.log_query(context),
    }
  }
}

/// Reads JSON lines invocations from `reader` and dispatches each one to `logger`. Blank lines are
/// skipped. Returns the number of dispatched invocations; stops at the first malformed line.
pub fn replay(reader: impl BufRead, logger: &dyn Logger) -> Result<usize, ReplayError> {
  let mut dispatched = 0;

  for (index, line) in reader.lines().enumerate() {
    let line = line?;
    if line.trim().is_empty() {
      continue;
    }

    let invocation: Invocation =
      serde_json::from_str(&line).map_err(|source| ReplayError::Parse {
        line: index + 1,
        source,
      })?;

    log::trace!("replaying {invocation:?}");
    invocation.dispatch(logger);
    dispatched += 1;
  }

  Ok(dispatched)
}
