//! Congress portrait client module.
//!
//! Provides the roster data types and an HTTP client abstraction for
//! downloading member portraits from public image origins.
//!
//! # Architecture
//!
//! The module uses a trait-based design for testability:
//!
//! - [`PortraitClient`] - Trait defining the download operation
//! - [`HttpPortraitClient`] - Real HTTP implementation using reqwest
//! - [`PortraitSource`] - Origin URL layouts (Bioguide, unitedstates mirror)
//! - [`mock::MockPortraitClient`] - Mock for unit tests (behind `test-utils` feature)
//!
//! # Testing Patterns
//!
//! ## Unit Tests (Mock Implementation)
//!
//! ```ignore
//! use tinycongress_scrapers::congress::mock::MockPortraitClient;
//!
//! let mock = MockPortraitClient::new();
//! mock.respond_with_body("https://example.test/P000197.jpg", b"jpeg".to_vec());
//! mock.respond_with_status("https://example.test/X000001.jpg", 404);
//! ```
//!
//! ## Integration Tests (HTTP Stubbing)
//!
//! ```ignore
//! use crate::common::http_mock::MockHttpServer;
//!
//! let server = MockHttpServer::start().await;
//! server
//!     .expect_get("/P000197.jpg")
//!     .with_header("User-Agent", "test-agent")
//!     .respond_with_bytes(b"jpeg".to_vec())
//!     .mount()
//!     .await;
//! ```

mod client;
mod source;
mod types;

pub use client::{HttpPortraitClient, PortraitApiError, PortraitClient};
pub use source::PortraitSource;
pub use types::{Legislator, LegislatorIds, LegislatorName, Role, Term};

#[cfg(any(test, feature = "test-utils"))]
pub use client::mock;
