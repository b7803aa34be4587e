use serde::{Deserialize, Serialize};

use super::energy::Energy;

/// A single molecular orbital record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Orbital {
    /// Plain-text orbital name (e.g. `"2a1"`).
    pub name: String,
    /// Name with Unicode symbols (e.g. `"σ*"`), preferred for display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unicode_name: Option<String>,
    /// Orbital energy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy: Option<Energy>,
    /// Electron occupation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<f64>,
    /// Expansion coefficients over the molecule's basis functions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub coefficients: Vec<f64>,
}

impl Orbital {
    /// Orbital with only a name; everything else unset.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            unicode_name: None,
            energy: None,
            occupation: None,
            coefficients: Vec::new(),
        }
    }

    /// Set the Unicode display name.
    #[must_use]
    pub fn with_unicode_name(mut self, name: impl Into<String>) -> Self {
        self.unicode_name = Some(name.into());
        self
    }

    /// Set the orbital energy.
    #[must_use]
    pub fn with_energy(mut self, energy: Energy) -> Self {
        self.energy = Some(energy);
        self
    }

    /// Set the electron occupation.
    #[must_use]
    pub fn with_occupation(mut self, occupation: f64) -> Self {
        self.occupation = Some(occupation);
        self
    }

    /// Set the basis expansion coefficients.
    #[must_use]
    pub fn with_coefficients(mut self, coefficients: Vec<f64>) -> Self {
        self.coefficients = coefficients;
        self
    }

    /// Name to show in the UI: the Unicode name when there is one.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.unicode_name.as_deref().unwrap_or(&self.name)
    }
}
