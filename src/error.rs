//! Crate-level error types.

use std::fmt;

/// Errors produced by the orbview crate.
#[derive(Debug)]
pub enum OrbviewError {
    /// A caller-supplied dimension or option value is unusable.
    Configuration(String),
    /// User-entered text could not be parsed into the control's value.
    Parse(String),
    /// The molecule (or viewer) carries no wavefunction.
    NoWavefunction,
    /// The wavefunction has no orbital sets at all.
    NoOrbitals,
    /// An orbital type name that the wavefunction does not define.
    UnknownOrbitalType(String),
    /// An orbital index past the end of its orbital set.
    OrbitalIndex {
        /// Orbital type the index was looked up in.
        orbital_type: String,
        /// Requested index.
        index: usize,
        /// Number of orbitals of that type.
        len: usize,
    },
    /// The energy model could not compute an orbital grid.
    GridModel(String),
    /// Failed to read or decode a molecule file.
    MoleculeLoad(String),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for OrbviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration(msg) => {
                write!(f, "configuration error: {msg}")
            }
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
            Self::NoWavefunction => write!(f, "molecule has no wavefunction"),
            Self::NoOrbitals => write!(f, "wavefunction has no orbitals"),
            Self::UnknownOrbitalType(name) => {
                write!(f, "unknown orbital type '{name}'")
            }
            Self::OrbitalIndex {
                orbital_type,
                index,
                len,
            } => write!(
                f,
                "orbital index {index} out of range for '{orbital_type}' \
                 ({len} orbitals)"
            ),
            Self::GridModel(msg) => write!(f, "orbital grid error: {msg}"),
            Self::MoleculeLoad(msg) => {
                write!(f, "molecule load error: {msg}")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for OrbviewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for OrbviewError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
