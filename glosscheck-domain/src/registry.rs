use crate::unit::CheckUnit;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("check name must not be empty")]
    EmptyName,

    #[error("check '{name}' is already registered")]
    Duplicate { name: String },
}

/// Ordered collection of check units, owned by the caller.
///
/// One registry is built per process or run and passed by reference into the
/// orchestrator. [`Registry::reset`] exists for test scaffolding.
#[derive(Default, Clone)]
pub struct Registry {
    units: Vec<Arc<dyn CheckUnit>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a unit. Empty and duplicate names are rejected; an existing unit is never replaced.
    pub fn register(&mut self, unit: Arc<dyn CheckUnit>) -> Result<(), RegistryError> {
        let name = unit.name();
        if name.trim().is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if self.get(name).is_some() {
            return Err(RegistryError::Duplicate {
                name: name.to_string(),
            });
        }

        debug!(
            check = %name,
            priority = unit.priority(),
            fail_fast = unit.fail_fast(),
            "registered check"
        );
        self.units.push(unit);
        Ok(())
    }

    /// Register several units, stopping at the first rejection.
    pub fn register_all<I>(&mut self, units: I) -> Result<(), RegistryError>
    where
        I: IntoIterator<Item = Arc<dyn CheckUnit>>,
    {
        for unit in units {
            self.register(unit)?;
        }
        Ok(())
    }

    pub fn reset(&mut self) {
        self.units.clear();
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn CheckUnit>> {
        self.units.iter().find(|u| u.name() == name)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Units ordered by `(priority asc, name asc)`.
    pub fn list_sorted(&self) -> Vec<Arc<dyn CheckUnit>> {
        let mut units = self.units.clone();
        units.sort_by_key(|u| stable_unit_sort_key(u.as_ref()));
        units
    }

    /// Names in execution order.
    pub fn names(&self) -> Vec<String> {
        self.list_sorted()
            .iter()
            .map(|u| u.name().to_string())
            .collect()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("units", &self.names())
            .finish()
    }
}

/// Total order key for units. Names are unique within a registry, so no two units tie.
pub fn stable_unit_sort_key(unit: &dyn CheckUnit) -> (i32, String) {
    (unit.priority(), unit.name().to_string())
}
