// Shared helpers for integration tests. Each aggregator pulls this in with
// `#[path = "../common/mod.rs"] mod common;` from its per-topic files.
#![allow(dead_code)]


pub use fixtures::*;

/// Route `log` output through the test harness; safe to call repeatedly.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
