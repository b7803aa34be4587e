//! Orbital selection side panel.
//!
//! [`OrbitalUIPane`] owns four controls: orbital type, orbital instance,
//! isovalue and grid resolution. Its handlers return [`ViewerCommand`]s
//! and [`SelectionEvent`]s instead of mutating the viewer, so whoever owns
//! both decides when they are applied.
//!
//! [`ViewerCommand`]: crate::viewer::ViewerCommand
//! [`SelectionEvent`]: crate::selection::SelectionEvent

mod controls;
mod labels;
mod pane;

pub use controls::{Dropdown, DropdownOption, FloatSlider, IntField};
pub use labels::{instance_options, orbital_label, InstanceChoice, NONE_LABEL};
pub use pane::{OrbitalUIPane, SelectionState};
