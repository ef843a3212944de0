// shared-core - bitdrift's common client/server libraries
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

//! Namespaces the ORM emits log calls under. Namespaces are plain strings on the wire; these are
//! the ones the ORM itself uses, and hosts are free to emit others.

pub const QUERY: &str = "query";
pub const QUERY_PARAMS: &str = "query-params";
pub const SCHEMA: &str = "schema";
pub const DISCOVERY: &str = "discovery";
pub const INFO: &str = "info";
pub const DEPRECATED: &str = "deprecated";
pub const SLOW_QUERY: &str = "slow-query";

pub const ALL: &[&str] = &[
  QUERY,
  QUERY_PARAMS,
  SCHEMA,
  DISCOVERY,
  INFO,
  DEPRECATED,
  SLOW_QUERY,
];
