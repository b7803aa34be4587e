//! Molecule records as loaded from JSON: atoms, basis and wavefunction.

use std::path::Path;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::OrbviewError;
use crate::model::BasisFunction;
use crate::wavefunction::Wavefunction;

/// A single atom. Positions are in bohr.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    /// Element symbol.
    pub symbol: String,
    /// Cartesian position `[x, y, z]`.
    pub position: [f64; 3],
}

/// A molecule with an optional computed wavefunction.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Molecule {
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Atoms in input order.
    #[serde(default)]
    pub atoms: Vec<Atom>,
    /// Basis functions the orbital coefficients refer to.
    #[serde(default)]
    pub basis: Vec<BasisFunction>,
    /// Wavefunction from the last energy calculation, if any.
    #[serde(default)]
    pub wfn: Option<Wavefunction>,
}

impl Molecule {
    /// Load a molecule from a JSON file.
    pub fn load(path: &Path) -> Result<Self, OrbviewError> {
        let content = std::fs::read_to_string(path)?;
        let molecule: Self = serde_json::from_str(&content)
            .map_err(|e| OrbviewError::MoleculeLoad(e.to_string()))?;
        log::info!(
            "Loaded molecule '{}' ({} atoms, {} basis functions)",
            molecule.name,
            molecule.atoms.len(),
            molecule.basis.len()
        );
        Ok(molecule)
    }

    /// The wavefunction, or [`OrbviewError::NoWavefunction`].
    pub fn wavefunction(&self) -> Result<&Wavefunction, OrbviewError> {
        self.wfn.as_ref().ok_or(OrbviewError::NoWavefunction)
    }

    /// Axis-aligned bounds of all atom and basis centers, `None` when the
    /// molecule has neither.
    #[must_use]
    pub fn bounds(&self) -> Option<(DVec3, DVec3)> {
        self.atoms
            .iter()
            .map(|a| DVec3::from_array(a.position))
            .chain(self.basis.iter().map(|b| DVec3::from_array(b.center)))
            .fold(None, |acc, p| match acc {
                None => Some((p, p)),
                Some((lo, hi)) => Some((lo.min(p), hi.max(p))),
            })
    }
}
