use std::fmt;

use serde::{Deserialize, Serialize};

/// Electron volts per hartree (CODATA 2018).
const EV_PER_HARTREE: f64 = 27.211_386_245_988;
/// Kilocalories per mole per electron volt.
const KCAL_PER_MOL_PER_EV: f64 = 23.060_547_830_619;
/// Kilojoules per mole per electron volt.
const KJ_PER_MOL_PER_EV: f64 = 96.485_332_123;

/// Units an orbital energy can be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyUnit {
    /// Atomic unit of energy.
    Hartree,
    /// Electron volt, the default display unit.
    #[default]
    #[serde(rename = "ev", alias = "eV")]
    ElectronVolt,
    /// Kilocalories per mole.
    KcalPerMol,
    /// Kilojoules per mole.
    KjPerMol,
}

impl EnergyUnit {
    /// Unit used when energies are shown to the user.
    pub const DISPLAY: Self = Self::ElectronVolt;

    /// Size of one of this unit in electron volts.
    fn in_ev(self) -> f64 {
        match self {
            Self::Hartree => EV_PER_HARTREE,
            Self::ElectronVolt => 1.0,
            Self::KcalPerMol => 1.0 / KCAL_PER_MOL_PER_EV,
            Self::KjPerMol => 1.0 / KJ_PER_MOL_PER_EV,
        }
    }

    /// Short symbol printed after the magnitude.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Hartree => "Ha",
            Self::ElectronVolt => "eV",
            Self::KcalPerMol => "kcal/mol",
            Self::KjPerMol => "kJ/mol",
        }
    }
}

/// A unit-bearing energy value.
///
/// `Display` prints two decimals followed by the unit symbol, so callers
/// usually go through [`Energy::to_display_units`] first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Energy {
    /// Magnitude in `unit`.
    pub value: f64,
    /// Unit of `value`.
    #[serde(default)]
    pub unit: EnergyUnit,
}

impl Energy {
    /// Energy of `value` in `unit`.
    #[must_use]
    pub fn new(value: f64, unit: EnergyUnit) -> Self {
        Self { value, unit }
    }

    /// Energy given in hartree.
    #[must_use]
    pub fn hartree(value: f64) -> Self {
        Self::new(value, EnergyUnit::Hartree)
    }

    /// Energy given in electron volts.
    #[must_use]
    pub fn ev(value: f64) -> Self {
        Self::new(value, EnergyUnit::ElectronVolt)
    }

    /// Convert to another unit.
    #[must_use]
    pub fn to_unit(self, unit: EnergyUnit) -> Self {
        if unit == self.unit {
            return self;
        }
        Self::new(self.value * self.unit.in_ev() / unit.in_ev(), unit)
    }

    /// Convert to the default display unit.
    #[must_use]
    pub fn to_display_units(self) -> Self {
        self.to_unit(EnergyUnit::DISPLAY)
    }
}

impl fmt::Display for Energy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.value, self.unit.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hartree_displays_in_ev() {
        let e = Energy::hartree(-0.5).to_display_units();
        assert_eq!(e.unit, EnergyUnit::ElectronVolt);
        assert_eq!(e.to_string(), "-13.61 eV");
    }

    #[test]
    fn molar_units_convert_through_ev() {
        let e = Energy::new(96.485_332_123, EnergyUnit::KjPerMol);
        assert!((e.to_display_units().value - 1.0).abs() < 1e-9);

        let kcal = Energy::ev(1.0).to_unit(EnergyUnit::KcalPerMol);
        assert!((kcal.value - 23.060_547_830_619).abs() < 1e-9);
        assert_eq!(kcal.to_string(), "23.06 kcal/mol");
    }

    #[test]
    fn same_unit_conversion_is_identity() {
        let e = Energy::ev(-3.25);
        assert_eq!(e.to_display_units(), e);
    }

    #[test]
    fn unit_deserializes_from_symbol_alias() {
        let e: Energy =
            serde_json::from_str(r#"{"value": 1.5, "unit": "eV"}"#).unwrap();
        assert_eq!(e, Energy::ev(1.5));
        let e: Energy = serde_json::from_str(r#"{"value": 1.5}"#).unwrap();
        assert_eq!(e.unit, EnergyUnit::ElectronVolt);
    }
}
