//! Energy-model side of orbital rendering: sampling an orbital onto a
//! regular 3D grid.
//!
//! The viewer asks an [`OrbitalGridModel`] for a [`VolumeGrid`] every time
//! it (re)draws an orbital; isosurface extraction happens on the result.

mod basis;

pub use basis::{BasisFunction, GaussianBasisModel, GaussianPrimitive};
use glam::DVec3;

use crate::error::OrbviewError;
use crate::molecule::Molecule;
use crate::wavefunction::Orbital;

/// Sampling parameters for one grid computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridRequest {
    /// Points per axis.
    pub npts: u32,
    /// Margin added around the molecule's bounding box, in bohr.
    pub padding: f64,
}

impl Default for GridRequest {
    fn default() -> Self {
        Self {
            npts: 40,
            padding: 3.0,
        }
    }
}

/// Something that can evaluate an orbital on a grid (the molecule's energy
/// model).
pub trait OrbitalGridModel {
    /// Sample `orbital` on an `npts³` grid spanning the padded molecule.
    fn calculate_orbital_grid(
        &self,
        molecule: &Molecule,
        orbital: &Orbital,
        request: &GridRequest,
    ) -> Result<VolumeGrid, OrbviewError>;
}

/// Scalar field sampled on a regular cubic lattice, x-major.
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeGrid {
    origin: DVec3,
    spacing: DVec3,
    npts: u32,
    values: Vec<f64>,
}

impl VolumeGrid {
    /// Zero-filled grid spanning `[lo, hi]` with `npts` points per axis.
    ///
    /// Degenerate axes (`lo == hi`) get unit spacing centred on the point.
    pub fn new(lo: DVec3, hi: DVec3, npts: u32) -> Result<Self, OrbviewError> {
        if npts < 2 {
            return Err(OrbviewError::GridModel(format!(
                "grid needs at least 2 points per axis, got {npts}"
            )));
        }
        let extent = hi - lo;
        let steps = f64::from(npts - 1);
        let spacing = DVec3::select(
            extent.cmpgt(DVec3::ZERO),
            extent / steps,
            DVec3::ONE,
        );
        // Centre degenerate axes on their coordinate.
        let origin = DVec3::select(
            extent.cmpgt(DVec3::ZERO),
            lo,
            lo - spacing * steps * 0.5,
        );
        let n = npts as usize;
        let len = n
            .checked_mul(n)
            .and_then(|nn| nn.checked_mul(n))
            .ok_or_else(|| {
                OrbviewError::GridModel(format!(
                    "{npts}³ grid points do not fit in memory"
                ))
            })?;
        Ok(Self {
            origin,
            spacing,
            npts,
            values: vec![0.0; len],
        })
    }

    /// Points per axis.
    #[must_use]
    pub fn npts(&self) -> u32 {
        self.npts
    }

    /// Position of the first lattice point.
    #[must_use]
    pub fn origin(&self) -> DVec3 {
        self.origin
    }

    /// Lattice spacing per axis.
    #[must_use]
    pub fn spacing(&self) -> DVec3 {
        self.spacing
    }

    /// Raw values, index `(i * n + j) * n + k` for lattice point `(i, j, k)`.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Position of lattice point `(i, j, k)`.
    #[must_use]
    pub fn point(&self, i: u32, j: u32, k: u32) -> DVec3 {
        self.origin
            + self.spacing
                * DVec3::new(f64::from(i), f64::from(j), f64::from(k))
    }

    /// Evaluate `f` at every lattice point.
    pub fn fill(&mut self, f: impl Fn(DVec3) -> f64) {
        let n = self.npts;
        let mut idx = 0;
        for i in 0..n {
            for j in 0..n {
                for k in 0..n {
                    self.values[idx] = f(self.point(i, j, k));
                    idx += 1;
                }
            }
        }
    }

    /// Minimum and maximum sampled value.
    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        self.values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }

    /// Number of lattice points inside the positive and negative
    /// isosurfaces at `isovalue`.
    #[must_use]
    pub fn count_enclosed(&self, isovalue: f64) -> IsosurfaceStats {
        let level = isovalue.abs();
        self.values.iter().fold(
            IsosurfaceStats::default(),
            |mut stats, &v| {
                if v >= level {
                    stats.positive += 1;
                } else if v <= -level {
                    stats.negative += 1;
                }
                stats
            },
        )
    }
}

/// Lattice-point counts enclosed by the two isosurface lobes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IsosurfaceStats {
    /// Points with ψ ≥ +isovalue.
    pub positive: usize,
    /// Points with ψ ≤ −isovalue.
    pub negative: usize,
}
