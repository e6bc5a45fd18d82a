// Library target exists solely for the integration tests.
// The binary entry point is main.rs; this file re-declares the module tree so
// the tests can drive the app via `tafel::app::*` / `tafel::dataset::*`.
// Most code is only exercised through the binary, so suppress dead_code warnings.
#![allow(dead_code)]

// Public: driven directly by the integration tests
pub mod app;
pub mod config;
pub mod dataset;
pub mod session;
pub mod timer;
pub mod ui;

// Private: only the binary's run loop uses it
mod event;
