//! Panel, orbital-rendering and viewer options with TOML preset support.
//!
//! Options serialize to/from TOML; every section uses `#[serde(default)]` so
//! a preset can override just one field.

mod orbital;
mod panel;
mod viewer;

use std::path::Path;

pub use orbital::{OrbitalOptions, RESOLUTION_LIMIT};
pub use panel::PanelOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use viewer::ViewerOptions;

use crate::error::OrbviewError;

/// Top-level options container.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Side panel layout.
    pub panel: PanelOptions,
    /// Isovalue and resolution controls.
    pub orbital: OrbitalOptions,
    /// Viewer display size.
    pub viewer: ViewerOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Check cross-field constraints.
    pub fn validate(&self) -> Result<(), OrbviewError> {
        self.orbital.validate()
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, OrbviewError> {
        let content = std::fs::read_to_string(path).map_err(OrbviewError::Io)?;
        let opts: Self = toml::from_str(&content)
            .map_err(|e| OrbviewError::OptionsParse(e.to_string()))?;
        opts.validate()?;
        Ok(opts)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), OrbviewError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| OrbviewError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(OrbviewError::Io)?;
        }
        std::fs::write(path, content).map_err(OrbviewError::Io)
    }
}
