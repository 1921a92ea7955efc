//! Embeddable validation engine for glosscheck.
//!
//! Hosts build a [`Registry`] of checks, pick [`ValidateSettings`] (directly or from a
//! `glosscheck.toml` via [`config`]), and call [`validate`](pipeline::validate). Loading the
//! glossary and rendering the report stay with the host.
//!
//! # Entry points
//!
//! - [`validate`](pipeline::validate) runs every check once
//! - [`run_with_rerun`](pipeline::run_with_rerun) adds the single rerun after fixes
//! - [`Orchestrator`] is the same engine as a reusable value

pub mod config;
mod orchestrator;
pub mod pipeline;
pub mod settings;

pub use orchestrator::Orchestrator;
pub use pipeline::{ValidateError, run_with_rerun, validate};
pub use settings::{Discipline, ValidateSettings};

// Re-export the domain surface so hosts can depend on this crate alone.
pub use glosscheck_domain::{
    CheckUnit, FnCheck, Registry, RegistryError, RunContext, RunOptions, run_guarded,
};
pub use glosscheck_types::{
    Artifact, CheckOutcome, CheckResult, FixResult, Status, StatusCounts, Summary,
};
