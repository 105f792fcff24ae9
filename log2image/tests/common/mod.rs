// Shared fixtures for integration tests; each test file pulls this in with
// `#[path = "../common/mod.rs"] mod common;`.
#![allow(dead_code)]
