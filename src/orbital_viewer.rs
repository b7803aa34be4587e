//! The orbital viewer widget: a [`GeometryViewer`] and an
//! [`OrbitalUIPane`] laid out side by side, linked by a [`SelectionBus`].
//!
//! The pane never touches the viewer. Front-end actions go through
//! [`OrbitalViewer::handle_action`], which applies the pane's commands to
//! the viewer and fires its selection events onto the bus; the viewer picks
//! those up in [`OrbitalViewer::drain_and_apply`].

use std::sync::mpsc;

use crate::error::OrbviewError;
use crate::gui::ipc::{Snapshot, UiAction};
use crate::layout::{HBoxLayout, Size};
use crate::model::OrbitalGridModel;
use crate::molecule::Molecule;
use crate::options::Options;
use crate::panel::OrbitalUIPane;
use crate::selection::{Selection, SelectionBus, SelectionEvent, SelectorId};
use crate::viewer::{
    GeometryViewer, OrbitalDisplay, OrbitalSpec, RenderConfigChange,
    ViewerCommand,
};

/// Molecular viewer with an orbital selection side panel.
pub struct OrbitalViewer {
    viewer: GeometryViewer,
    pane: OrbitalUIPane,
    bus: SelectionBus,
    viewer_rx: mpsc::Receiver<SelectionEvent>,
    pane_rx: mpsc::Receiver<SelectionEvent>,
    layout: HBoxLayout,
}

// ── Construction ─────────────────────────────────────────────────────────

impl OrbitalViewer {
    /// Build the viewer for `molecule`, sampling orbitals with `model`.
    ///
    /// # Errors
    ///
    /// - [`OrbviewError::NoWavefunction`] if the molecule has no
    ///   wavefunction.
    /// - [`OrbviewError::NoOrbitals`] if it has no orbital sets.
    /// - [`OrbviewError::Configuration`] for invalid display options.
    pub fn new(
        molecule: Molecule,
        model: impl OrbitalGridModel + 'static,
        options: &Options,
    ) -> Result<Self, OrbviewError> {
        options.validate()?;
        let wfn = molecule.wavefunction()?.clone();
        if wfn.orbitals.is_empty() {
            return Err(OrbviewError::NoOrbitals);
        }

        let mut viewer = GeometryViewer::new(molecule, model, &options.viewer)?;
        viewer.set_wavefunctions(vec![wfn]);
        viewer.set_orbital_spec(OrbitalSpec::from(&options.orbital));

        let mut bus = SelectionBus::new();
        let (_viewer_id, viewer_rx) = bus.subscribe();
        let (pane_id, pane_rx) = bus.subscribe();

        let pane =
            OrbitalUIPane::new(pane_id, &viewer, &options.viewer.height, options)?;
        for command in pane.initial_commands() {
            viewer.execute(command)?;
        }

        let layout = HBoxLayout {
            viewer: viewer.size(),
            panel: Size {
                width: pane.width(),
                height: pane.height(),
            },
        };
        log::info!(
            "orbital viewer ready: {} orbital types, {}x{}",
            pane.type_dropdown().options().len(),
            layout.width(),
            layout.height()
        );

        Ok(Self {
            viewer,
            pane,
            bus,
            viewer_rx,
            pane_rx,
            layout,
        })
    }
}

// ── Accessors ────────────────────────────────────────────────────────────

impl OrbitalViewer {
    /// The molecular viewer.
    #[must_use]
    pub fn viewer(&self) -> &GeometryViewer {
        &self.viewer
    }

    /// The orbital selection pane.
    #[must_use]
    pub fn pane(&self) -> &OrbitalUIPane {
        &self.pane
    }

    /// Side-by-side layout of viewer and pane.
    #[must_use]
    pub fn layout(&self) -> HBoxLayout {
        self.layout
    }

    /// Link another selector (e.g. a second panel) to this widget. Events it
    /// fires via [`selection_bus_mut`](Self::selection_bus_mut) reach the
    /// pane and the viewer on the next
    /// [`drain_and_apply`](Self::drain_and_apply).
    pub fn subscribe(&mut self) -> (SelectorId, mpsc::Receiver<SelectionEvent>) {
        self.bus.subscribe()
    }

    /// The selection bus shared with linked selectors.
    pub fn selection_bus_mut(&mut self) -> &mut SelectionBus {
        &mut self.bus
    }

    /// Current state of every control and of the viewer's display.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            layout: self.layout,
            pane: (&self.pane).into(),
            viewer: (&self.viewer).into(),
        }
    }
}

// ── Runtime ──────────────────────────────────────────────────────────────

impl OrbitalViewer {
    /// Route a front-end action through the pane and apply what it produces.
    ///
    /// # Errors
    ///
    /// Whatever the pane or viewer rejects: unknown types, out-of-range
    /// indices, unparseable resolution text, or a failed orbital draw. The
    /// pane's state is left consistent in every case.
    pub fn handle_action(&mut self, action: UiAction) -> Result<(), OrbviewError> {
        log::debug!("ui action: {action:?}");
        match action {
            UiAction::SelectType { value } => {
                let wfn = self.viewer.wfn()?;
                self.pane.on_type_changed(wfn, &value)
            }
            UiAction::SelectOrbital { index } => {
                if let Some(event) = self.pane.on_instance_changed(index)? {
                    self.bus.fire(&event);
                }
                self.drain_and_apply()
            }
            UiAction::SetIsovalue { value } => {
                let Some((command, event)) = self.pane.on_isovalue_changed(value)
                else {
                    return Ok(());
                };
                self.viewer.execute(command)?;
                self.bus.fire(&event);
                self.drain_and_apply()
            }
            UiAction::SubmitResolution { text } => {
                let command = self.pane.on_resolution_submitted(&text)?;
                self.viewer.execute(command)
            }
        }
    }

    /// Deliver pending selection events: the viewer draws each selected
    /// orbital and adopts each new isovalue, and the pane silently follows
    /// selections made elsewhere.
    ///
    /// Every pending event is processed; the first failure is returned.
    pub fn drain_and_apply(&mut self) -> Result<(), OrbviewError> {
        let mut first_error = None;

        while let Ok(event) = self.viewer_rx.try_recv() {
            let Some(command) = self.viewer_command(event.selection) else {
                continue;
            };
            if let Err(e) = self.viewer.execute(command) {
                log::warn!("failed to apply selection to viewer: {e}");
                let _ = first_error.get_or_insert(e);
            }
        }

        while let Ok(event) = self.pane_rx.try_recv() {
            let result = self
                .viewer
                .wfn()
                .and_then(|wfn| self.pane.handle_selection_event(wfn, &event));
            if let Err(e) = result {
                log::warn!("ignoring selection from {:?}: {e}", event.source);
                let _ = first_error.get_or_insert(e);
            }
        }

        first_error.map_or(Ok(()), Err)
    }

    /// What the viewer does with a selection; `None` when it already shows
    /// it.
    fn viewer_command(&self, selection: Selection) -> Option<ViewerCommand> {
        match selection {
            Selection::Orbital(orbital) => {
                Some(ViewerCommand::DrawOrbital(orbital))
            }
            Selection::OrbitalIsovalue(isovalue) => {
                if !isovalue.is_finite() {
                    log::warn!("ignoring non-finite isovalue {isovalue}");
                    return None;
                }
                (self.viewer.orbital_spec().isovalue != isovalue).then(|| {
                    ViewerCommand::RenderConfigChanged(
                        RenderConfigChange::isovalue(isovalue),
                    )
                })
            }
        }
    }
}
