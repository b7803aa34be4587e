use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Display options forwarded to the geometry viewer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Viewer", inline)]
#[serde(default)]
pub struct ViewerOptions {
    /// Viewer width as a CSS pixel dimension.
    #[schemars(title = "Width")]
    pub width: String,
    /// Viewer height; the side panel derives its heights from this.
    #[schemars(title = "Height")]
    pub height: String,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            width: "500px".to_owned(),
            height: "500px".to_owned(),
        }
    }
}
