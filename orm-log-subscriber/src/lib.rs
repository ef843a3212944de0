// shared-core - bitdrift's common client/server libraries
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

#[cfg(test)]
#[path = "./lib_test.rs"]
mod lib_test;

use parking_lot::Mutex;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::reload::Handle as ReloadHandle;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

const DEFAULT_FILTER_RULES: &str = "info";

/// Enables ANSI colors on stderr output when set.
pub const ANSI_ENV: &str = "ORMLOG_LOG_ANSI";

//
// SwapLogger
//

// Process wide tracing subscriber whose filter rules can be swapped at runtime.
pub struct SwapLogger {
  handle: Mutex<Option<ReloadHandle<EnvFilter, Registry>>>,
}

impl SwapLogger {
  const fn new() -> Self {
    Self {
      handle: parking_lot::const_mutex(None),
    }
  }

  fn get() -> &'static Self {
    static LOGGER: SwapLogger = SwapLogger::new();

    &LOGGER
  }

  // Installs the global subscriber. Should be called as early as possible in the program. If a
  // global subscriber is already installed this is a no-op and `swap` keeps failing.
  pub fn initialize() {
    let stderr = tracing_subscriber::fmt::layer()
      .with_writer(std::io::stderr)
      .with_ansi(std::env::var(ANSI_ENV).is_ok())
      .with_line_number(true)
      .with_thread_ids(true)
      .compact();

    let filter = EnvFilter::new(
      std::env::var("RUST_LOG")
        .as_deref()
        .unwrap_or(DEFAULT_FILTER_RULES),
    );

    let (filter, reload_handle) = tracing_subscriber::reload::Layer::new(filter);
    if Registry::default()
      .with(filter)
      .with(stderr)
      .try_init()
      .is_ok()
    {
      *Self::get().handle.lock() = Some(reload_handle);
    }
  }

  // Swap in new filter rules, using the RUST_LOG syntax.
  pub fn swap(new_rules: &str) -> anyhow::Result<()> {
    let handle = Self::get().handle.lock();
    let Some(handle) = handle.as_ref() else {
      anyhow::bail!("logger has not been initialized");
    };

    handle.reload(EnvFilter::try_new(new_rules)?)?;

    // The log crate max level is only computed on init, so it has to be resynced each time the
    // filter changes.
    log::set_max_level(tracing_log::AsLog::as_log(&LevelFilter::current()));

    Ok(())
  }
}
