// shared-core - bitdrift's common client/server libraries
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

use anyhow::Context as _;
use clap::Parser;
use orm_log_adapter::{Logger, LoggerAdapter};
use orm_log_cli::cli::{Command, Options};
use orm_log_cli::replay::replay;
use orm_log_cli::{check_lines, resolve_options};
use orm_log_subscriber::SwapLogger;
use std::fs::File;
use std::io::BufReader;

fn main() -> anyhow::Result<()> {
  SwapLogger::initialize();
  let args = Options::parse();

  if let Some(rules) = &args.log_filter {
    SwapLogger::swap(rules).context("invalid log filter")?;
  }

  let options = resolve_options(&args, |key| std::env::var(key).ok())?;
  let adapter = LoggerAdapter::new(options);
  log::debug!("debug mode: {:?}", adapter.debug_mode());

  match args.command {
    Command::Replay(cmd) => {
      let count = match &cmd.input {
        Some(path) => {
          let file =
            File::open(path).with_context(|| format!("unable to open {}", path.display()))?;
          replay(BufReader::new(file), &adapter)?
        },
        None => replay(std::io::stdin().lock(), &adapter)?,
      };
      eprintln!("replayed {count} invocations");
    },
    Command::Check(cmd) => {
      for line in check_lines(&adapter, &cmd.namespaces) {
        println!("{line}");
      }
    },
  }

  Ok(())
}
