// shared-core - bitdrift's common client/server libraries
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;

//
// DebugMode
//

/// Controls which ORM namespaces are logged. Either a global switch or an explicit set of enabled
/// namespaces. Serialized untagged so that configuration can say `debug_mode: true` or
/// `debug_mode: [query, schema]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DebugMode {
  Global(bool),
  Namespaces(AHashSet<String>),
}

impl DebugMode {
  pub fn namespaces<I, S>(namespaces: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self::Namespaces(namespaces.into_iter().map(Into::into).collect())
  }

  /// Exact string set membership for a namespace list, the switch value otherwise.
  #[must_use]
  pub fn is_enabled(&self, namespace: &str) -> bool {
    match self {
      Self::Global(enabled) => *enabled,
      Self::Namespaces(namespaces) => namespaces.contains(namespace),
    }
  }

  /// Parses the textual form used by environment variables and command line flags: booleans
  /// (`true`, `false`, `1`, `0`, or an empty value) or a comma separated namespace list.
  #[must_use]
  pub fn parse(value: &str) -> Self {
    let value = value.trim();
    if value.is_empty() || value == "0" || value.eq_ignore_ascii_case("false") {
      return Self::Global(false);
    }
    if value == "1" || value.eq_ignore_ascii_case("true") {
      return Self::Global(true);
    }

    Self::namespaces(
      value
        .split(',')
        .map(str::trim)
        .filter(|namespace| !namespace.is_empty()),
    )
  }
}

impl Default for DebugMode {
  fn default() -> Self {
    Self::Global(false)
  }
}

impl From<bool> for DebugMode {
  fn from(enabled: bool) -> Self {
    Self::Global(enabled)
  }
}

impl<S: Into<String>> FromIterator<S> for DebugMode {
  fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
    Self::namespaces(iter)
  }
}

impl FromStr for DebugMode {
  type Err = Infallible;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Ok(Self::parse(s))
  }
}
