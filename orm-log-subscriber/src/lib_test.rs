// shared-core - bitdrift's common client/server libraries
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

use crate::SwapLogger;

// The subscriber is process wide, so the whole lifecycle is checked in a single test.
#[test]
fn swap_lifecycle() {
  assert!(SwapLogger::swap("info").is_err());

  SwapLogger::initialize();
  assert!(SwapLogger::swap("debug").is_ok());
  assert_eq!(log::max_level(), log::LevelFilter::Debug);

  assert!(SwapLogger::swap("[[[").is_err());

  // A second initialize leaves the installed subscriber and its reload handle in place.
  SwapLogger::initialize();
  assert!(SwapLogger::swap("warn").is_ok());
  assert_eq!(log::max_level(), log::LevelFilter::Warn);
}
