use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::OrbviewError;

/// Largest grid resolution a preset may allow (`npts³` samples per draw).
pub const RESOLUTION_LIMIT: u32 = 400;

/// Isovalue slider and grid resolution bounds and defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Orbital", inline)]
#[serde(default)]
pub struct OrbitalOptions {
    /// Initial isosurface level.
    #[schemars(title = "Isovalue", range(min = 0.0, max = 0.075), extend("step" = 0.00075))]
    pub isovalue: f64,
    /// Lower slider bound.
    #[schemars(skip)]
    pub isovalue_min: f64,
    /// Upper slider bound.
    #[schemars(skip)]
    pub isovalue_max: f64,
    /// Slider step.
    #[schemars(skip)]
    pub isovalue_step: f64,
    /// Initial grid points per axis.
    #[schemars(title = "Orbital Resolution", range(min = 2, max = 200))]
    pub resolution: u32,
    /// Smallest accepted resolution.
    #[schemars(skip)]
    pub resolution_min: u32,
    /// Largest accepted resolution.
    #[schemars(skip)]
    pub resolution_max: u32,
    /// Margin around the molecule when sampling grids, in bohr.
    #[schemars(title = "Grid Padding", range(min = 0.0, max = 10.0), extend("step" = 0.5))]
    pub padding: f64,
}

impl Default for OrbitalOptions {
    fn default() -> Self {
        Self {
            isovalue: 0.01,
            isovalue_min: 0.0,
            isovalue_max: 0.075,
            isovalue_step: 0.00075,
            resolution: 40,
            resolution_min: 2,
            resolution_max: 200,
            padding: 3.0,
        }
    }
}

impl OrbitalOptions {
    /// Check that bounds are ordered and defaults lie within them.
    pub fn validate(&self) -> Result<(), OrbviewError> {
        let bad = |msg: String| Err(OrbviewError::Configuration(msg));
        if !(self.isovalue_min.is_finite()
            && self.isovalue_max.is_finite()
            && self.isovalue_min < self.isovalue_max)
        {
            return bad(format!(
                "isovalue bounds [{}, {}] are not an interval",
                self.isovalue_min, self.isovalue_max
            ));
        }
        if self.isovalue_step.is_nan() || self.isovalue_step <= 0.0 {
            return bad(format!(
                "isovalue step {} must be positive",
                self.isovalue_step
            ));
        }
        if !(self.isovalue_min..=self.isovalue_max).contains(&self.isovalue) {
            return bad(format!(
                "isovalue {} outside [{}, {}]",
                self.isovalue, self.isovalue_min, self.isovalue_max
            ));
        }
        if self.resolution_min < 2
            || self.resolution_min > self.resolution_max
            || self.resolution_max > RESOLUTION_LIMIT
        {
            return bad(format!(
                "resolution bounds [{}, {}] invalid (must lie within [2, \
                 {RESOLUTION_LIMIT}])",
                self.resolution_min, self.resolution_max
            ));
        }
        if !(self.resolution_min..=self.resolution_max)
            .contains(&self.resolution)
        {
            return bad(format!(
                "resolution {} outside [{}, {}]",
                self.resolution, self.resolution_min, self.resolution_max
            ));
        }
        if self.padding.is_nan() || self.padding < 0.0 {
            return bad(format!("padding {} must be >= 0", self.padding));
        }
        Ok(())
    }
}
