// shared-core - bitdrift's common client/server libraries
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

//
// AttributeValue
//

/// A single structured attribute value. Bound query parameters are carried through untouched as
/// JSON values since the ORM binds arbitrary types.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
  String(String),
  Number(f64),
  List(Vec<serde_json::Value>),
}

impl AttributeValue {
  /// Extracts the underlying str if the value is a string, None otherwise.
  #[must_use]
  pub fn as_str(&self) -> Option<&str> {
    match self {
      Self::String(s) => Some(s),
      Self::Number(_) | Self::List(_) => None,
    }
  }

  #[must_use]
  pub fn as_f64(&self) -> Option<f64> {
    match self {
      Self::Number(n) => Some(*n),
      Self::String(_) | Self::List(_) => None,
    }
  }

  #[must_use]
  pub fn as_list(&self) -> Option<&[serde_json::Value]> {
    match self {
      Self::List(values) => Some(values),
      Self::String(_) | Self::Number(_) => None,
    }
  }
}

// Integers beyond this are not exactly representable as f64.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

impl Serialize for AttributeValue {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    match self {
      Self::String(s) => serializer.serialize_str(s),
      // Whole numbers are written without a fraction, matching how they read in log messages.
      #[allow(clippy::cast_possible_truncation)]
      Self::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_EXACT_INTEGER => {
        serializer.serialize_i64(*n as i64)
      },
      Self::Number(n) => serializer.serialize_f64(*n),
      Self::List(values) => values.serialize(serializer),
    }
  }
}

impl From<String> for AttributeValue {
  fn from(s: String) -> Self {
    Self::String(s)
  }
}

impl From<&str> for AttributeValue {
  fn from(s: &str) -> Self {
    Self::String(s.to_string())
  }
}

impl From<f64> for AttributeValue {
  fn from(n: f64) -> Self {
    Self::Number(n)
  }
}

impl From<Vec<serde_json::Value>> for AttributeValue {
  fn from(values: Vec<serde_json::Value>) -> Self {
    Self::List(values)
  }
}

//
// Attributes
//

/// An insertion ordered mapping from fixed attribute names to values. Keys are always one of the
/// `ATTRIBUTE_NAME_*` constants, so lookups are linear over a handful of entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
  entries: Vec<(&'static str, AttributeValue)>,
}

impl Attributes {
  #[must_use]
  pub const fn new() -> Self {
    Self {
      entries: Vec::new(),
    }
  }

  /// Inserts a value. An existing entry with the same key is replaced in place, keeping its
  /// original position.
  pub fn insert(&mut self, key: &'static str, value: impl Into<AttributeValue>) {
    let value = value.into();
    if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
      entry.1 = value;
    } else {
      self.entries.push((key, value));
    }
  }

  #[must_use]
  pub fn get(&self, key: &str) -> Option<&AttributeValue> {
    self
      .entries
      .iter()
      .find(|(k, _)| *k == key)
      .map(|(_, value)| value)
  }

  #[must_use]
  pub fn contains_key(&self, key: &str) -> bool {
    self.get(key).is_some()
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
    self.entries.iter().map(|(k, _)| *k)
  }

  pub fn iter(&self) -> impl Iterator<Item = (&'static str, &AttributeValue)> {
    self.entries.iter().map(|(k, v)| (*k, v))
  }
}

impl Serialize for Attributes {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(self.entries.len()))?;
    for (key, value) in &self.entries {
      map.serialize_entry(key, value)?;
    }
    map.end()
  }
}

impl<V: Into<AttributeValue>> FromIterator<(&'static str, V)> for Attributes {
  fn from_iter<T: IntoIterator<Item = (&'static str, V)>>(iter: T) -> Self {
    let mut attributes = Self::new();
    for (key, value) in iter {
      attributes.insert(key, value);
    }
    attributes
  }
}
