// shared-core - bitdrift's common client/server libraries
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt


#[cfg(test)]
#[ctor::ctor]
fn test_global_init() {
  orm_log_test_helpers::test_global_init();
}

pub mod cli;
pub mod replay;

use crate::cli::Options;
use anyhow::Context as _;
use orm_log_adapter::{Logger, LoggerOptions};

/// Builds the logger options from, in increasing precedence: the options file, the
/// `ORMLOG_DEBUG` override resolved through `lookup`, and the `--debug-mode` flag.
pub fn resolve_options(
  args: &Options,
  lookup: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<LoggerOptions> {
  let mut options = match &args.config {
    Some(path) => LoggerOptions::from_file(path)
      .with_context(|| format!("unable to load logger options from {}", path.display()))?,
    None => LoggerOptions::default(),
  }
  .apply_overrides(lookup);

  if let Some(debug_mode) = &args.debug_mode {
    options = options.with_debug_mode(debug_mode.clone());
  }

  Ok(options)
}

/// Renders one `<namespace>: enabled|disabled` line per namespace.
pub fn check_lines(logger: &dyn Logger, namespaces: &[String]) -> Vec<String> {
  namespaces
    .iter()
    .map(|namespace| {
      let state = if logger.is_enabled(namespace) {
        "enabled"
      } else {
        "disabled"
      };
      format!("{namespace}: {state}")
    })
    .collect()
}
