//! Test harness for the surface-points add-in.
//!
//! Provides programmatic tools for scripting export and import runs against
//! the mock host, verifying what they produced, and reporting failures with
//! enough context to debug them.
//!
//! # Key Components
//!
//! - [`PipelineBuilder`]: Fluent API for running commands through dispatch
//! - [`oracle`]: Verification functions returning pass/fail verdicts
//! - [`helpers`]: Error type, tracing setup, CSV fixtures
//! - [`assertions`]: Rich assertion helpers with diagnostics

pub mod assertions;
pub mod helpers;
pub mod oracle;
pub mod workflow;

pub use helpers::{init_tracing, HarnessError};
pub use oracle::OracleVerdict;
pub use workflow::PipelineBuilder;
