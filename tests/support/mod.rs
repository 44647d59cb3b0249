// tests/support/mod.rs
// Record and lookup doubles shared by the integration test binaries. Some
// symbols go unused in individual test crates; allow the resulting warnings
// at the module level to keep CI output clean.
#[allow(dead_code)]
pub mod mocks;

#[allow(unused_imports)]
pub use mocks::*;
