// tests/support/mod.rs
// Shared by several integration test binaries; each one uses only a subset,
// so unused items are allowed at the module level.
#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(unused_imports)]
pub use mocks::*;
