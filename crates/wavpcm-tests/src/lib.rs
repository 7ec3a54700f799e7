//! wavpcm End-to-End Test Infrastructure
//!
//! This crate holds integration tests that span the codec and the CLI:
//!
//! - **CLI flows**: inspect, process and hash against files on disk
//! - **Properties**: proptest coverage of encode/decode invariants
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p wavpcm-tests
//! cargo test -p wavpcm-tests --test proptest_codec
//! ```

pub mod fixtures;
