//! JSON IPC between the orbital panel and a web front-end.
//!
//! **Inbound** (front-end → native): `{"action": ...}` messages parsed into
//! [`UiAction`]s.
//!
//! **Outbound** (native → front-end): a [`Snapshot`] of every control and of
//! the viewer's orbital display, re-sent after each action.

use serde::{Deserialize, Serialize};

use crate::layout::{HBoxLayout, Px};
use crate::panel::{Dropdown, InstanceChoice, OrbitalUIPane};
use crate::viewer::{GeometryViewer, OrbitalDisplay};
use crate::wavefunction::OrbitalRef;

/// Actions sent from the front-end to the native panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UiAction {
    /// Orbital type dropdown changed.
    SelectType {
        /// New type name.
        value: String,
    },
    /// Orbital instance dropdown changed (`null` for none).
    SelectOrbital {
        /// New orbital index.
        index: InstanceChoice,
    },
    /// Isovalue slider moved.
    SetIsovalue {
        /// New slider value.
        value: f64,
    },
    /// Resolution text submitted.
    SubmitResolution {
        /// Raw field text.
        text: String,
    },
}

/// Parse an IPC message into a [`UiAction`]. Malformed messages are logged
/// and dropped.
#[must_use]
pub fn parse_action(json: &str) -> Option<UiAction> {
    match serde_json::from_str(json) {
        Ok(action) => Some(action),
        Err(e) => {
            log::warn!("ignoring IPC message {json:?}: {e}");
            None
        }
    }
}

// ── Outbound state ───────────────────────────────────────────────────────

/// A dropdown entry as the front-end sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionView<T> {
    /// Text to show.
    pub label: String,
    /// Value to send back when picked.
    pub value: T,
}

/// Dropdown state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropdownView<T> {
    /// Entries in display order.
    pub options: Vec<OptionView<T>>,
    /// Selected value.
    pub value: T,
}

/// Isovalue slider state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderView {
    /// Label.
    pub description: String,
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
    /// Step.
    pub step: f64,
    /// Current value.
    pub value: f64,
    /// Formatted value.
    pub readout: String,
}

/// Resolution field state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldView {
    /// Label.
    pub description: String,
    /// Text to show.
    pub text: String,
    /// Error from the last submission, if it was rejected.
    pub error: Option<String>,
    /// Field width.
    pub width: Px,
}

/// Everything needed to render the orbital panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaneSnapshot {
    /// Panel width.
    pub width: Px,
    /// Panel height.
    pub height: Px,
    /// Orbital type selector.
    pub orbital_type: DropdownView<String>,
    /// Orbital instance selector.
    pub orbital: DropdownView<InstanceChoice>,
    /// Orbital list height.
    pub list_height: Px,
    /// Isovalue slider.
    pub isovalue: SliderView,
    /// Resolution field.
    pub resolution: FieldView,
}

impl From<&OrbitalUIPane> for PaneSnapshot {
    fn from(pane: &OrbitalUIPane) -> Self {
        fn dropdown<T: Clone + PartialEq>(d: &Dropdown<T>) -> DropdownView<T> {
            DropdownView {
                options: d
                    .options()
                    .iter()
                    .map(|o| OptionView {
                        label: o.label.clone(),
                        value: o.value.clone(),
                    })
                    .collect(),
                value: d.value().clone(),
            }
        }

        let slider = pane.isoval_selector();
        let field = pane.orb_resolution();
        Self {
            width: pane.width(),
            height: pane.height(),
            orbital_type: dropdown(pane.type_dropdown()),
            orbital: dropdown(pane.orblist()),
            list_height: pane.list_height(),
            isovalue: SliderView {
                description: slider.description.clone(),
                min: slider.min(),
                max: slider.max(),
                step: slider.step(),
                value: slider.value(),
                readout: slider.readout(),
            },
            resolution: FieldView {
                description: field.description.clone(),
                text: field.text().to_owned(),
                error: field.error().map(str::to_owned),
                width: pane.resolution_width(),
            },
        }
    }
}

/// The viewer's orbital display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerView {
    /// Orbital on screen.
    pub current_orbital: Option<OrbitalRef>,
    /// Grid points per axis.
    pub npts: u32,
    /// Isosurface level.
    pub isovalue: f64,
    /// Lattice points inside the positive lobe.
    pub positive_points: usize,
    /// Lattice points inside the negative lobe.
    pub negative_points: usize,
    /// Draws performed so far.
    pub draw_count: usize,
}

impl From<&GeometryViewer> for ViewerView {
    fn from(viewer: &GeometryViewer) -> Self {
        let spec = viewer.orbital_spec();
        let stats = viewer.displayed().map(|d| d.stats).unwrap_or_default();
        Self {
            current_orbital: viewer.current_orbital().cloned(),
            npts: spec.npts,
            isovalue: spec.isovalue,
            positive_points: stats.positive,
            negative_points: stats.negative,
            draw_count: viewer.draw_count(),
        }
    }
}

/// Full state pushed to the front-end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Side-by-side layout.
    pub layout: HBoxLayout,
    /// Panel controls.
    pub pane: PaneSnapshot,
    /// Viewer display.
    pub viewer: ViewerView,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_action() {
        assert_eq!(
            parse_action(r#"{"action": "select_type", "value": "natural"}"#),
            Some(UiAction::SelectType {
                value: "natural".to_owned()
            })
        );
        assert_eq!(
            parse_action(r#"{"action": "select_orbital", "index": 2}"#),
            Some(UiAction::SelectOrbital {
                index: InstanceChoice::Selected(2)
            })
        );
        assert_eq!(
            parse_action(r#"{"action": "select_orbital", "index": null}"#),
            Some(UiAction::SelectOrbital {
                index: InstanceChoice::None
            })
        );
        assert_eq!(
            parse_action(r#"{"action": "set_isovalue", "value": 0.02}"#),
            Some(UiAction::SetIsovalue { value: 0.02 })
        );
        assert_eq!(
            parse_action(r#"{"action": "submit_resolution", "text": "64"}"#),
            Some(UiAction::SubmitResolution {
                text: "64".to_owned()
            })
        );
    }

    #[test]
    fn malformed_messages_dropped() {
        assert_eq!(parse_action("not json"), None);
        assert_eq!(parse_action(r#"{"action": "explode"}"#), None);
        assert_eq!(parse_action(r#"{"action": "set_isovalue"}"#), None);
    }
}
