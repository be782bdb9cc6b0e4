//! Testing utilities
//!
//! Two tools meant to be used together:
//!
//! 1. [`ZrxpSamples`] gives access to the vetted sample files under
//!    `tests/fixtures/`. Prefer them over ZRXP text written inline in a test;
//!    small inline snippets are fine for single-production checks.
//! 2. [`assert_document`] is a fluent assertion API over the document model
//!    that reports which block, entry or record failed.
//!
//! ```rust,ignore
//! use zrxp::testing::{assert_document, ZrxpSamples};
//!
//! let doc = ZrxpSamples::parse("single.zrx", ParseStrategy::Eager)?;
//! assert_document(&doc)
//!     .block_count(1)
//!     .block(0, |block| {
//!         block
//!             .metadata_count(2)
//!             .entry(0, Some(MetadataKey::StationName), "station A")
//!             .record(1, &["20210101010000", "1.45"]);
//!     });
//! ```

mod assertions;
mod samples;

pub use assertions::{assert_document, BlockAssertion, DocumentAssertion};
pub use samples::{ZrxpSamples, AVAILABLE_SAMPLES};
