use glam::DVec3;
use serde::{Deserialize, Serialize};

use super::{GridRequest, OrbitalGridModel, VolumeGrid};
use crate::error::OrbviewError;
use crate::molecule::Molecule;
use crate::wavefunction::Orbital;

/// One primitive Gaussian `c · exp(-α r²)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaussianPrimitive {
    /// Exponent α.
    pub exponent: f64,
    /// Contraction coefficient c.
    pub coefficient: f64,
}

/// Contracted s-type Gaussian basis function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasisFunction {
    /// Center `[x, y, z]` in bohr.
    pub center: [f64; 3],
    /// Primitives summed into this function.
    pub primitives: Vec<GaussianPrimitive>,
}

impl BasisFunction {
    /// Value of the function at `point`.
    #[must_use]
    pub fn evaluate(&self, point: DVec3) -> f64 {
        let r2 = point.distance_squared(DVec3::from_array(self.center));
        self.primitives
            .iter()
            .map(|p| p.coefficient * (-p.exponent * r2).exp())
            .sum()
    }
}

/// Evaluates ψ(r) = Σᵢ cᵢ φᵢ(r) over the molecule's basis.
#[derive(Debug, Clone, Copy, Default)]
pub struct GaussianBasisModel;

impl OrbitalGridModel for GaussianBasisModel {
    fn calculate_orbital_grid(
        &self,
        molecule: &Molecule,
        orbital: &Orbital,
        request: &GridRequest,
    ) -> Result<VolumeGrid, OrbviewError> {
        if molecule.basis.is_empty() {
            return Err(OrbviewError::GridModel(
                "molecule has no basis functions".to_owned(),
            ));
        }
        if orbital.coefficients.len() != molecule.basis.len() {
            return Err(OrbviewError::GridModel(format!(
                "orbital '{}' has {} coefficients for {} basis functions",
                orbital.name,
                orbital.coefficients.len(),
                molecule.basis.len()
            )));
        }
        let Some((lo, hi)) = molecule.bounds() else {
            return Err(OrbviewError::GridModel(
                "molecule has no coordinates".to_owned(),
            ));
        };

        let pad = DVec3::splat(request.padding);
        let mut grid = VolumeGrid::new(lo - pad, hi + pad, request.npts)?;
        grid.fill(|point| {
            molecule
                .basis
                .iter()
                .zip(&orbital.coefficients)
                .map(|(phi, c)| c * phi.evaluate(point))
                .sum()
        });
        Ok(grid)
    }
}
