//! The orbital selection pane: keeps the instance list in step with the
//! selected orbital type and turns control edits into viewer commands and
//! selection events.

use serde::{Deserialize, Serialize};

use super::controls::{Dropdown, DropdownOption, FloatSlider, IntField};
use super::labels::{instance_options, InstanceChoice};
use crate::error::OrbviewError;
use crate::layout::Px;
use crate::options::Options;
use crate::selection::{Selection, SelectionEvent, SelectorId};
use crate::viewer::{OrbitalDisplay, RenderConfigChange, ViewerCommand};
use crate::wavefunction::{Orbital, OrbitalRef, Wavefunction};

/// Snapshot of what the user has picked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionState {
    /// Selected orbital type.
    pub orbital_type: String,
    /// Selected orbital of that type.
    pub instance: InstanceChoice,
    /// Isosurface level.
    pub isovalue: f64,
    /// Grid points per axis.
    pub resolution: u32,
}

impl SelectionState {
    /// The selected orbital, if an instance is chosen.
    #[must_use]
    pub fn orbital(&self) -> Option<OrbitalRef> {
        self.instance
            .index()
            .map(|i| OrbitalRef::new(self.orbital_type.clone(), i))
    }
}

/// Side panel with orbital type, orbital instance, isovalue and resolution
/// controls.
#[derive(Debug, Clone)]
pub struct OrbitalUIPane {
    id: SelectorId,
    type_dropdown: Dropdown<String>,
    orblist: Dropdown<InstanceChoice>,
    isoval_selector: FloatSlider,
    orb_resolution: IntField,
    width: Px,
    height: Px,
    list_height: Px,
    resolution_width: Px,
}

// ── Construction ─────────────────────────────────────────────────────────

impl OrbitalUIPane {
    /// Build the pane for `viewer`'s wavefunction.
    ///
    /// `host_height` is the height available to the pane (the viewer's
    /// height); the pane takes `host_height - 50px` and its orbital list
    /// `host_height - 125px` with default options.
    ///
    /// # Errors
    ///
    /// - [`OrbviewError::Configuration`] if `host_height` or a panel width
    ///   is not a pixel dimension, or the orbital options are inconsistent.
    /// - [`OrbviewError::NoWavefunction`] / [`OrbviewError::NoOrbitals`] if
    ///   the viewer has nothing to select from.
    pub fn new(
        id: SelectorId,
        viewer: &impl OrbitalDisplay,
        host_height: &str,
        options: &Options,
    ) -> Result<Self, OrbviewError> {
        options.validate()?;
        let host_height = host_height.parse::<Px>()?;
        let panel = &options.panel;
        let width = panel.width.parse::<Px>()?;
        let resolution_width = panel.resolution_field_width.parse::<Px>()?;

        let wfn = viewer.wfn()?;
        let initial_type = wfn
            .initial_orbital_type(&panel.initial_type)
            .ok_or(OrbviewError::NoOrbitals)?
            .to_owned();
        let type_options = wfn
            .orbital_types()
            .map(|t| DropdownOption::new(t, t.to_owned()))
            .collect();

        let orb = &options.orbital;
        let mut pane = Self {
            id,
            type_dropdown: Dropdown::new(type_options, initial_type),
            orblist: Dropdown::new(
                instance_options(&[]),
                InstanceChoice::None,
            ),
            isoval_selector: FloatSlider::new(
                "Isovalue",
                orb.isovalue_min,
                orb.isovalue_max,
                orb.isovalue_step,
                orb.isovalue,
            )?,
            orb_resolution: IntField::new(
                "Orbital resolution",
                orb.resolution_min,
                orb.resolution_max,
                orb.resolution,
            )?,
            width,
            height: host_height.inset(panel.host_height_inset),
            list_height: host_height.inset(panel.list_height_inset),
            resolution_width,
        };
        pane.rebuild_instance_list(wfn)?;
        Ok(pane)
    }

    /// Commands that bring the viewer in line with the pane's initial
    /// isovalue and resolution.
    #[must_use]
    pub fn initial_commands(&self) -> Vec<ViewerCommand> {
        vec![ViewerCommand::RenderConfigChanged(RenderConfigChange {
            npts: Some(self.orb_resolution.value()),
            isovalue: Some(self.isoval_selector.value()),
        })]
    }
}

// ── Accessors ────────────────────────────────────────────────────────────

impl OrbitalUIPane {
    /// This pane's id on the selection bus.
    #[must_use]
    pub fn id(&self) -> SelectorId {
        self.id
    }

    /// Orbital type selector.
    #[must_use]
    pub fn type_dropdown(&self) -> &Dropdown<String> {
        &self.type_dropdown
    }

    /// Orbital instance selector.
    #[must_use]
    pub fn orblist(&self) -> &Dropdown<InstanceChoice> {
        &self.orblist
    }

    /// Isovalue slider.
    #[must_use]
    pub fn isoval_selector(&self) -> &FloatSlider {
        &self.isoval_selector
    }

    /// Resolution field.
    #[must_use]
    pub fn orb_resolution(&self) -> &IntField {
        &self.orb_resolution
    }

    /// Pane width.
    #[must_use]
    pub fn width(&self) -> Px {
        self.width
    }

    /// Pane height.
    #[must_use]
    pub fn height(&self) -> Px {
        self.height
    }

    /// Orbital list height.
    #[must_use]
    pub fn list_height(&self) -> Px {
        self.list_height
    }

    /// Resolution field width.
    #[must_use]
    pub fn resolution_width(&self) -> Px {
        self.resolution_width
    }

    /// Current selection.
    #[must_use]
    pub fn state(&self) -> SelectionState {
        SelectionState {
            orbital_type: self.type_dropdown.value().clone(),
            instance: *self.orblist.value(),
            isovalue: self.isoval_selector.value(),
            resolution: self.orb_resolution.value(),
        }
    }
}

// ── Event handlers ───────────────────────────────────────────────────────

impl OrbitalUIPane {
    /// The user picked an orbital type: rebuild the instance list and reset
    /// the instance to none.
    pub fn on_type_changed(
        &mut self,
        wfn: &Wavefunction,
        new_type: &str,
    ) -> Result<(), OrbviewError> {
        let orbitals = wfn.orbitals_of(new_type)?;
        match self.type_dropdown.select(&new_type.to_owned()) {
            None => Err(OrbviewError::UnknownOrbitalType(new_type.to_owned())),
            Some(false) => Ok(()),
            Some(true) => {
                self.reset_instances(new_type, orbitals);
                Ok(())
            }
        }
    }

    /// The user picked an orbital instance. Returns the selection event to
    /// broadcast, if any.
    pub fn on_instance_changed(
        &mut self,
        choice: InstanceChoice,
    ) -> Result<Option<SelectionEvent>, OrbviewError> {
        match self.orblist.select(&choice) {
            None => Err(self.index_error(choice)),
            Some(false) => Ok(None),
            Some(true) => Ok(self.state().orbital().map(|orbital| {
                log::debug!("orbital selected: {orbital:?}");
                SelectionEvent::orbital(self.id, orbital)
            })),
        }
    }

    /// The user moved the isovalue slider. Returns the viewer command and
    /// the event to broadcast to linked selectors, if the value changed.
    pub fn on_isovalue_changed(
        &mut self,
        value: f64,
    ) -> Option<(ViewerCommand, SelectionEvent)> {
        self.isoval_selector.set(value).map(|v| {
            (
                ViewerCommand::RenderConfigChanged(RenderConfigChange::isovalue(v)),
                SelectionEvent::isovalue(self.id, v),
            )
        })
    }

    /// The user submitted resolution text.
    ///
    /// # Errors
    ///
    /// [`OrbviewError::Parse`] if the text is not an in-range integer; the
    /// field is flagged and the stored resolution is unchanged.
    pub fn on_resolution_submitted(
        &mut self,
        text: &str,
    ) -> Result<ViewerCommand, OrbviewError> {
        let npts = self.orb_resolution.submit_text(text)?;
        Ok(ViewerCommand::RenderConfigChanged(
            RenderConfigChange::resolution(npts),
        ))
    }

    /// Typed resolution change (numeric input or stepper).
    pub fn on_resolution_changed(
        &mut self,
        npts: u32,
    ) -> Result<ViewerCommand, OrbviewError> {
        let npts = self.orb_resolution.set(npts)?;
        Ok(ViewerCommand::RenderConfigChanged(
            RenderConfigChange::resolution(npts),
        ))
    }

    /// Adopt a selection made by another selector on the bus. Controls are
    /// updated silently, so nothing is re-broadcast.
    pub fn handle_selection_event(
        &mut self,
        wfn: &Wavefunction,
        event: &SelectionEvent,
    ) -> Result<(), OrbviewError> {
        if event.source == self.id {
            return Ok(());
        }
        match &event.selection {
            Selection::Orbital(orbital) => self.sync_orbital(wfn, orbital),
            Selection::OrbitalIsovalue(isovalue) => {
                let _ = self.isoval_selector.set_silently(*isovalue)?;
                Ok(())
            }
        }
    }

    /// Recompute the instance options for the selected type and reset the
    /// instance to none.
    pub fn rebuild_instance_list(
        &mut self,
        wfn: &Wavefunction,
    ) -> Result<(), OrbviewError> {
        let orbital_type = self.type_dropdown.value().clone();
        let orbitals = wfn.orbitals_of(&orbital_type)?;
        self.reset_instances(&orbital_type, orbitals);
        Ok(())
    }

    fn sync_orbital(
        &mut self,
        wfn: &Wavefunction,
        orbital: &OrbitalRef,
    ) -> Result<(), OrbviewError> {
        let orbitals = wfn.orbitals_of(&orbital.orbital_type)?;
        let len = orbitals.len();
        if orbital.index >= len {
            return Err(OrbviewError::OrbitalIndex {
                orbital_type: orbital.orbital_type.clone(),
                index: orbital.index,
                len,
            });
        }

        if *self.type_dropdown.value() != orbital.orbital_type {
            if !self.type_dropdown.set_silently(orbital.orbital_type.clone()) {
                return Err(OrbviewError::UnknownOrbitalType(
                    orbital.orbital_type.clone(),
                ));
            }
            self.reset_instances(&orbital.orbital_type, orbitals);
        }
        let choice = InstanceChoice::Selected(orbital.index);
        if !self.orblist.set_silently(choice) {
            return Err(self.index_error(choice));
        }
        Ok(())
    }

    fn reset_instances(&mut self, orbital_type: &str, orbitals: &[Orbital]) {
        log::debug!(
            "rebuilding orbital list for '{orbital_type}' ({} orbitals)",
            orbitals.len()
        );
        self.orblist
            .replace_silently(instance_options(orbitals), InstanceChoice::None);
    }

    fn index_error(&self, choice: InstanceChoice) -> OrbviewError {
        OrbviewError::OrbitalIndex {
            orbital_type: self.type_dropdown.value().clone(),
            index: choice.index().unwrap_or_default(),
            len: self.orblist.options().len().saturating_sub(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GaussianBasisModel;
    use crate::options::ViewerOptions;
    use crate::viewer::testing::{water, water_wfn};
    use crate::viewer::GeometryViewer;

    fn viewer() -> GeometryViewer {
        GeometryViewer::new(water(), GaussianBasisModel, &ViewerOptions::default())
            .unwrap()
    }

    fn pane() -> OrbitalUIPane {
        OrbitalUIPane::new(SelectorId(7), &viewer(), "600px", &Options::default())
            .unwrap()
    }

    #[test]
    fn initial_state_defaults() {
        let p = pane();
        assert_eq!(
            p.state(),
            SelectionState {
                orbital_type: "canonical".to_owned(),
                instance: InstanceChoice::None,
                isovalue: 0.01,
                resolution: 40,
            }
        );
        assert_eq!(p.width(), Px(325));
        assert_eq!(p.height(), Px(550));
        assert_eq!(p.list_height(), Px(475));
        assert_eq!(p.orblist().options().len(), 5);
        let types: Vec<_> =
            p.type_dropdown().options().iter().map(|o| o.label.as_str()).collect();
        assert_eq!(types, ["canonical", "empty", "natural"]);
    }

    #[test]
    fn initial_commands_push_resolution() {
        let cmds = pane().initial_commands();
        assert_eq!(
            cmds,
            vec![ViewerCommand::RenderConfigChanged(RenderConfigChange {
                npts: Some(40),
                isovalue: Some(0.01),
            })]
        );
    }

    #[test]
    fn falls_back_to_first_type_without_canonical() {
        let wfn = Wavefunction::new()
            .with_orbitals("natural", Vec::new())
            .with_orbitals("localized", Vec::new());
        let mut v = viewer();
        v.set_wavefunctions(vec![wfn]);
        let p = OrbitalUIPane::new(SelectorId(0), &v, "400", &Options::default())
            .unwrap();
        assert_eq!(p.state().orbital_type, "localized");
    }

    #[test]
    fn configured_initial_type_is_honoured() {
        let mut opts = Options::default();
        opts.panel.initial_type = "natural".to_owned();
        let p = OrbitalUIPane::new(SelectorId(0), &viewer(), "600px", &opts)
            .unwrap();
        assert_eq!(p.state().orbital_type, "natural");
    }

    #[test]
    fn bad_host_height_is_configuration_error() {
        let err = OrbitalUIPane::new(
            SelectorId(0),
            &viewer(),
            "tall",
            &Options::default(),
        )
        .unwrap_err();
        assert!(matches!(err, OrbviewError::Configuration(_)));
    }

    #[test]
    fn empty_wavefunction_is_rejected() {
        let mut v = viewer();
        v.set_wavefunctions(vec![Wavefunction::new()]);
        let err = OrbitalUIPane::new(SelectorId(0), &v, "600px", &Options::default())
            .unwrap_err();
        assert!(matches!(err, OrbviewError::NoOrbitals));
    }

    #[test]
    fn instance_list_tracks_every_type() {
        let wfn = water_wfn();
        let mut p = pane();
        for (name, orbitals) in &wfn.orbitals {
            p.on_type_changed(&wfn, name).unwrap();
            let opts = p.orblist().options();
            assert_eq!(opts.len(), orbitals.len() + 1);
            for (i, opt) in opts.iter().skip(1).enumerate() {
                assert_eq!(opt.value, InstanceChoice::Selected(i));
                assert!(opt.label.starts_with(&format!("{i}. ")));
            }
        }
    }

    #[test]
    fn type_change_resets_instance() {
        let wfn = water_wfn();
        let mut p = pane();
        let event = p
            .on_instance_changed(InstanceChoice::Selected(3))
            .unwrap()
            .unwrap();
        assert_eq!(
            event.selection,
            Selection::Orbital(OrbitalRef::new("canonical", 3))
        );
        assert_eq!(event.source, SelectorId(7));

        p.on_type_changed(&wfn, "natural").unwrap();
        assert_eq!(p.state().instance, InstanceChoice::None);
        assert_eq!(p.orblist().options().len(), 3);
    }

    #[test]
    fn empty_type_lists_only_none() {
        let wfn = water_wfn();
        let mut p = pane();
        p.on_type_changed(&wfn, "empty").unwrap();
        assert_eq!(p.orblist().options().len(), 1);
        assert_eq!(p.state().instance, InstanceChoice::None);
    }

    #[test]
    fn unknown_type_leaves_state_alone() {
        let wfn = water_wfn();
        let mut p = pane();
        let _ = p.on_instance_changed(InstanceChoice::Selected(1)).unwrap();
        let err = p.on_type_changed(&wfn, "bogus").unwrap_err();
        assert!(matches!(err, OrbviewError::UnknownOrbitalType(_)));
        assert_eq!(p.state().orbital(), Some(OrbitalRef::new("canonical", 1)));
    }

    #[test]
    fn reselecting_current_type_keeps_instance() {
        let wfn = water_wfn();
        let mut p = pane();
        let _ = p.on_instance_changed(InstanceChoice::Selected(2)).unwrap();
        p.on_type_changed(&wfn, "canonical").unwrap();
        assert_eq!(p.state().orbital(), Some(OrbitalRef::new("canonical", 2)));
        assert_eq!(p.orblist().options().len(), 5);
    }

    #[test]
    fn picking_none_or_same_emits_nothing() {
        let mut p = pane();
        assert!(p.on_instance_changed(InstanceChoice::None).unwrap().is_none());
        assert!(p
            .on_instance_changed(InstanceChoice::Selected(0))
            .unwrap()
            .is_some());
        assert!(p
            .on_instance_changed(InstanceChoice::Selected(0))
            .unwrap()
            .is_none());
        assert!(p.on_instance_changed(InstanceChoice::None).unwrap().is_none());
    }

    #[test]
    fn out_of_range_instance_is_an_error() {
        let mut p = pane();
        let err = p
            .on_instance_changed(InstanceChoice::Selected(4))
            .unwrap_err();
        assert!(matches!(
            err,
            OrbviewError::OrbitalIndex { index: 4, len: 4, .. }
        ));
    }

    #[test]
    fn resolution_submission() {
        let mut p = pane();
        assert_eq!(
            p.on_resolution_submitted("64").unwrap(),
            ViewerCommand::RenderConfigChanged(RenderConfigChange::resolution(64))
        );
        assert_eq!(p.state().resolution, 64);

        let err = p.on_resolution_submitted("abc").unwrap_err();
        assert!(matches!(err, OrbviewError::Parse(_)));
        assert_eq!(p.state().resolution, 64);
        assert!(p.orb_resolution().error().is_some());

        assert!(p.on_resolution_changed(500).is_err());
        assert_eq!(
            p.on_resolution_changed(80).unwrap(),
            ViewerCommand::RenderConfigChanged(RenderConfigChange::resolution(80))
        );
    }

    #[test]
    fn isovalue_is_clamped_by_slider() {
        let mut p = pane();
        let (command, event) = p.on_isovalue_changed(1.0).unwrap();
        assert_eq!(
            command,
            ViewerCommand::RenderConfigChanged(RenderConfigChange::isovalue(0.075))
        );
        assert_eq!(event, SelectionEvent::isovalue(SelectorId(7), 0.075));
        assert_eq!(p.on_isovalue_changed(0.2), None);
        assert_eq!(p.state().isovalue, 0.075);
    }

    #[test]
    fn linked_isovalue_syncs_silently() {
        let wfn = water_wfn();
        let mut p = pane();
        p.handle_selection_event(&wfn, &SelectionEvent::isovalue(SelectorId(99), 0.03))
            .unwrap();
        assert_eq!(p.state().isovalue, 0.03);
        // Already at 0.03, so moving the slider there is not a change.
        assert_eq!(p.on_isovalue_changed(0.03), None);

        p.handle_selection_event(&wfn, &SelectionEvent::isovalue(SelectorId(99), 9.0))
            .unwrap();
        assert_eq!(p.state().isovalue, 0.075);
        assert!(p
            .handle_selection_event(
                &wfn,
                &SelectionEvent::isovalue(SelectorId(99), f64::NAN)
            )
            .is_err());
        assert_eq!(p.state().isovalue, 0.075);
    }

    #[test]
    fn linked_selection_syncs_silently() {
        let wfn = water_wfn();
        let mut p = pane();
        let other = SelectionEvent::orbital(
            SelectorId(99),
            OrbitalRef::new("natural", 1),
        );
        p.handle_selection_event(&wfn, &other).unwrap();
        assert_eq!(p.state().orbital(), Some(OrbitalRef::new("natural", 1)));
        assert_eq!(p.orblist().options().len(), 3);

        // Re-picking the synced orbital is not a change, so nothing fires.
        assert!(p
            .on_instance_changed(InstanceChoice::Selected(1))
            .unwrap()
            .is_none());
    }

    #[test]
    fn own_and_invalid_events_ignored_or_rejected() {
        let wfn = water_wfn();
        let mut p = pane();
        let own = SelectionEvent::orbital(p.id(), OrbitalRef::new("natural", 0));
        p.handle_selection_event(&wfn, &own).unwrap();
        assert_eq!(p.state().orbital_type, "canonical");

        let bad = SelectionEvent::orbital(
            SelectorId(1),
            OrbitalRef::new("natural", 5),
        );
        assert!(p.handle_selection_event(&wfn, &bad).is_err());
        assert_eq!(p.state().orbital_type, "canonical");
    }
}
