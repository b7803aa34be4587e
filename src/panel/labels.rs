//! Orbital instance choices and their display labels.

use serde::{Deserialize, Serialize};

use super::controls::DropdownOption;
use crate::wavefunction::Orbital;

/// Label of the "no orbital" entry.
pub const NONE_LABEL: &str = "None";

/// Choice in the orbital instance selector.
///
/// Serializes as `null` / the orbital index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<usize>", into = "Option<usize>")]
pub enum InstanceChoice {
    /// Nothing selected.
    #[default]
    None,
    /// Orbital at this position of the selected type.
    Selected(usize),
}

impl InstanceChoice {
    /// The selected index, if any.
    #[must_use]
    pub fn index(self) -> Option<usize> {
        match self {
            Self::None => None,
            Self::Selected(i) => Some(i),
        }
    }
}

impl From<Option<usize>> for InstanceChoice {
    fn from(index: Option<usize>) -> Self {
        index.map_or(Self::None, Self::Selected)
    }
}

impl From<InstanceChoice> for Option<usize> {
    fn from(choice: InstanceChoice) -> Self {
        choice.index()
    }
}

/// Display label for the orbital at `index`, e.g. `"3. σ*   (-13.61 eV, occ
/// 2.00)"`.
#[must_use]
pub fn orbital_label(index: usize, orbital: &Orbital) -> String {
    let mut meta = Vec::with_capacity(2);
    if let Some(energy) = orbital.energy {
        meta.push(energy.to_display_units().to_string());
    }
    if let Some(occupation) = orbital.occupation {
        meta.push(format!("occ {occupation:.2}"));
    }

    let name = orbital.display_name();
    if meta.is_empty() {
        format!("{index}. {name}")
    } else {
        format!("{index}. {name}   ({})", meta.join(", "))
    }
}

/// Instance selector options: the none entry followed by every orbital in
/// sequence order.
#[must_use]
pub fn instance_options(orbitals: &[Orbital]) -> Vec<DropdownOption<InstanceChoice>> {
    std::iter::once(DropdownOption::new(NONE_LABEL, InstanceChoice::None))
        .chain(orbitals.iter().enumerate().map(|(i, orb)| {
            DropdownOption::new(orbital_label(i, orb), InstanceChoice::Selected(i))
        }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wavefunction::Energy;

    #[test]
    fn bare_name_has_no_metadata() {
        assert_eq!(orbital_label(0, &Orbital::named("2a1")), "0. 2a1");
    }

    #[test]
    fn unicode_name_energy_and_occupation() {
        let orb = Orbital::named("4a1")
            .with_unicode_name("σ*")
            .with_energy(Energy::hartree(-0.5))
            .with_occupation(2.0);
        assert_eq!(orbital_label(3, &orb), "3. σ*   (-13.61 eV, occ 2.00)");
    }

    #[test]
    fn single_metadata_field() {
        let occ_only = Orbital::named("1b2").with_occupation(1.996);
        assert_eq!(orbital_label(7, &occ_only), "7. 1b2   (occ 2.00)");

        let energy_only = Orbital::named("1b1").with_energy(Energy::ev(-12.5));
        assert_eq!(orbital_label(1, &energy_only), "1. 1b1   (-12.50 eV)");
    }

    #[test]
    fn options_lead_with_none_and_keep_order() {
        let orbs = vec![Orbital::named("a"), Orbital::named("b")];
        let opts = instance_options(&orbs);
        assert_eq!(opts.len(), 3);
        assert_eq!(opts[0].value, InstanceChoice::None);
        assert_eq!(opts[0].label, NONE_LABEL);
        assert_eq!(opts[1].value, InstanceChoice::Selected(0));
        assert_eq!(opts[2].label, "1. b");
    }

    #[test]
    fn empty_set_yields_only_none() {
        let opts = instance_options(&[]);
        assert_eq!(opts.len(), 1);
        assert_eq!(opts[0].value, InstanceChoice::None);
    }

    #[test]
    fn choice_serializes_as_nullable_index() {
        assert_eq!(serde_json::to_string(&InstanceChoice::None).unwrap(), "null");
        assert_eq!(
            serde_json::from_str::<InstanceChoice>("4").unwrap(),
            InstanceChoice::Selected(4)
        );
    }
}
