//! Common test utilities for deployurl CLI tests.
//!
//! - `TestEnv`: temp working directory + temp HOME, with a fake deploy tool
//! - Fixtures: canned deploy tool output

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
