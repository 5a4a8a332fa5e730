//! Deterministic triage guidance for community health volunteer encounters.
//!
//! The [`triage`] module holds the decision engine and the intake layer that
//! validates form submissions before they reach it. The remaining modules carry
//! the configuration, error and telemetry plumbing shared with the API service.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod triage;
