//! Wavefunction data model: named orbital sets of immutable orbital records.
//!
//! The panel only ever reads from this model. Orbital sets are kept in a
//! `BTreeMap`, so iterating over orbital types is lexicographic and stable.

mod energy;
mod orbital;

use std::collections::BTreeMap;

pub use energy::{Energy, EnergyUnit};
pub use orbital::Orbital;
use serde::{Deserialize, Serialize};

use crate::error::OrbviewError;

/// Orbital type preferred as the initial selection when present.
pub const CANONICAL: &str = "canonical";

/// Identifies one orbital: its type plus its position within that type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrbitalRef {
    /// Orbital type (key into [`Wavefunction::orbitals`]).
    pub orbital_type: String,
    /// Position in the ordered orbital sequence.
    pub index: usize,
}

impl OrbitalRef {
    /// Reference to orbital `index` of `orbital_type`.
    #[must_use]
    pub fn new(orbital_type: impl Into<String>, index: usize) -> Self {
        Self {
            orbital_type: orbital_type.into(),
            index,
        }
    }
}

/// Quantum-chemical wavefunction holding named orbital sets.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Wavefunction {
    /// Orbital type name → ordered orbitals (e.g. `"canonical"`,
    /// `"natural"`).
    #[serde(default)]
    pub orbitals: BTreeMap<String, Vec<Orbital>>,
}

impl Wavefunction {
    /// Empty wavefunction.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) an orbital set, builder style.
    #[must_use]
    pub fn with_orbitals(
        mut self,
        orbital_type: impl Into<String>,
        orbitals: Vec<Orbital>,
    ) -> Self {
        let _ = self.orbitals.insert(orbital_type.into(), orbitals);
        self
    }

    /// Orbital type names in iteration (lexicographic) order.
    pub fn orbital_types(&self) -> impl Iterator<Item = &str> {
        self.orbitals.keys().map(String::as_str)
    }

    /// Type selected when a panel first opens: `preferred` if present,
    /// otherwise the lexicographically first type.
    #[must_use]
    pub fn initial_orbital_type(&self, preferred: &str) -> Option<&str> {
        self.orbitals
            .get_key_value(preferred)
            .map(|(k, _)| k.as_str())
            .or_else(|| self.orbital_types().next())
    }

    /// Orbitals of one type.
    pub fn orbitals_of(
        &self,
        orbital_type: &str,
    ) -> Result<&[Orbital], OrbviewError> {
        self.orbitals.get(orbital_type).map(Vec::as_slice).ok_or_else(|| {
            OrbviewError::UnknownOrbitalType(orbital_type.to_owned())
        })
    }

    /// Resolve an [`OrbitalRef`].
    pub fn orbital(
        &self,
        orbital: &OrbitalRef,
    ) -> Result<&Orbital, OrbviewError> {
        let set = self.orbitals_of(&orbital.orbital_type)?;
        set.get(orbital.index).ok_or_else(|| OrbviewError::OrbitalIndex {
            orbital_type: orbital.orbital_type.clone(),
            index: orbital.index,
            len: set.len(),
        })
    }
}
