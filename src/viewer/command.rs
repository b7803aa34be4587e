//! Everything a panel can ask the viewer to do.
//!
//! Panels never touch viewer state directly. They construct a
//! `ViewerCommand` and hand it to
//! [`OrbitalDisplay::execute`](super::OrbitalDisplay::execute):
//!
//! ```ignore
//! viewer.execute(ViewerCommand::RenderConfigChanged(
//!     RenderConfigChange::resolution(64),
//! ))?;
//! viewer.execute(ViewerCommand::DrawOrbital(OrbitalRef::new("canonical", 3)))?;
//! ```

use serde::{Deserialize, Serialize};

use crate::wavefunction::OrbitalRef;

// ── Command payload types ────────────────────────────────────────────────

/// Partial update of the viewer's orbital rendering configuration.
///
/// Unset fields keep their current value.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RenderConfigChange {
    /// New grid points per axis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub npts: Option<u32>,
    /// New isosurface level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isovalue: Option<f64>,
}

impl RenderConfigChange {
    /// Change only the grid resolution.
    #[must_use]
    pub fn resolution(npts: u32) -> Self {
        Self {
            npts: Some(npts),
            isovalue: None,
        }
    }

    /// Change only the isovalue.
    #[must_use]
    pub fn isovalue(isovalue: f64) -> Self {
        Self {
            npts: None,
            isovalue: Some(isovalue),
        }
    }

    /// Whether the change carries no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.npts.is_none() && self.isovalue.is_none()
    }
}

// ── Commands ─────────────────────────────────────────────────────────────

/// An operation on the viewer's orbital display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum ViewerCommand {
    /// Merge a configuration change and redraw the displayed orbital, if
    /// there is one.
    RenderConfigChanged(RenderConfigChange),

    /// Compute and display an orbital's isosurface.
    DrawOrbital(OrbitalRef),

    /// Remove the displayed orbital.
    ClearOrbital,
}
