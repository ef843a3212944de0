// shared-core - bitdrift's common client/server libraries
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

use clap::{Args, Parser, Subcommand};
use orm_log_config::DebugMode;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Options {
  /// Logger options file (.yaml, .yml or .json)
  #[clap(env = "ORMLOG_CONFIG", long)]
  pub config: Option<PathBuf>,

  /// Debug mode override: true, false, or a comma separated namespace list. Takes precedence over
  /// both the options file and ORMLOG_DEBUG.
  #[clap(long)]
  pub debug_mode: Option<DebugMode>,

  /// Tracing filter rules, using the RUST_LOG syntax
  #[clap(env = "ORMLOG_FILTER", long)]
  pub log_filter: Option<String>,

  /// Command to run
  #[command(subcommand)]
  pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
  /// Replay recorded logger invocations through the adapter
  Replay(ReplayCommand),

  /// Print whether each namespace is enabled
  Check(CheckCommand),
}

#[derive(Args, Debug)]
pub struct ReplayCommand {
  /// JSON lines file to read invocations from, stdin when omitted
  #[arg(long)]
  pub input: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct CheckCommand {
  /// Namespaces to check
  #[arg(required = true)]
  pub namespaces: Vec<String>,
}
