//! Domain logic: the check contract and the registry that holds checks.
//!
//! This crate owns *what* a check is and how checks are ordered and guarded. It does not own
//! *how* a run is sequenced; that's the `glosscheck-core` crate.

mod context;
mod guard;
mod options;
mod registry;
mod unit;

pub use context::RunContext;
pub use guard::run_guarded;
pub use options::RunOptions;
pub use registry::{Registry, RegistryError, stable_unit_sort_key};
pub use unit::{CheckUnit, FnCheck};
