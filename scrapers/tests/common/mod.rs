//! Common test utilities for integration tests.
//!
//! This module provides:
//!
//! - [`http_mock::MockHttpServer`] - wiremock-backed stub for the portrait origins
//! - [`ROSTER_YAML`] - a small roster in the congress-legislators format
//!
//! Each test binary uses a different subset.
#![allow(dead_code)]

pub mod http_mock;

/// User agent the tests configure and expect on the wire.
pub const TEST_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";

/// Two current representatives, one senator who used to be a representative,
/// one entry with no terms, and a third representative.
pub const ROSTER_YAML: &str = r"
- id:
    bioguide: P000197
  name:
    first: Nancy
    last: Pelosi
  terms:
  - type: rep
    start: '2023-01-03'
    state: CA
    district: 11
    party: Democrat
- id:
    bioguide: S000148
  name:
    first: Charles
    last: Schumer
    official_full: Charles E. Schumer
  terms:
  - type: rep
    state: NY
    district: 9
    party: Democrat
  - type: sen
    state: NY
    party: Democrat
- id:
    bioguide: Z000000
  name:
    first: No
    last: Terms
  terms: []
- id:
    bioguide: J000299
  name:
    first: Mike
    last: Johnson
    official_full: Mike Johnson
  terms:
  - type: rep
    state: LA
    district: 4
    party: Republican
- id:
    bioguide: A000370
  name:
    first: Alma
    last: Adams
  terms:
  - type: rep
    state: NC
    district: 12
    party: Democrat
";
