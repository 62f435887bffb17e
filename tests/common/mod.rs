//! Shared test utilities for mmquery integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Fake models are deterministic and work with
//! `#[tokio::test(start_paused = true)]` for timeout tests.

pub mod assertions;
pub mod fake_model;
pub mod fixtures;
pub mod mock_server;

pub use assertions::*;
pub use fake_model::*;
pub use fixtures::*;
pub use mock_server::*;
