use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::wavefunction::CANONICAL;

/// Layout and default-selection settings for the orbital side panel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Panel", inline)]
#[serde(default)]
pub struct PanelOptions {
    /// Panel width as a CSS pixel dimension.
    #[schemars(skip)]
    pub width: String,
    /// Pixels subtracted from the host height for the panel itself.
    #[schemars(skip)]
    pub host_height_inset: u32,
    /// Pixels subtracted from the host height for the orbital list.
    #[schemars(skip)]
    pub list_height_inset: u32,
    /// Width of the resolution field.
    #[schemars(skip)]
    pub resolution_field_width: String,
    /// Orbital type selected on open, when the wavefunction has it.
    #[schemars(title = "Initial Orbital Type")]
    pub initial_type: String,
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            width: "325px".to_owned(),
            host_height_inset: 50,
            list_height_inset: 125,
            resolution_field_width: "75px".to_owned(),
            initial_type: CANONICAL.to_owned(),
        }
    }
}
