//! Orbital display: the viewer-side half of the orbital panel.
//!
//! [`OrbitalDisplay`] is the seam panels talk to. [`GeometryViewer`] is the
//! headless implementation: it samples orbitals through an
//! [`OrbitalGridModel`] and keeps the resulting isosurface data, so a
//! rendering backend only has to draw [`DisplayedOrbital`]s.

mod command;

pub use command::{RenderConfigChange, ViewerCommand};
use serde::{Deserialize, Serialize};

use crate::error::OrbviewError;
use crate::layout::{Px, Size};
use crate::model::{GridRequest, IsosurfaceStats, OrbitalGridModel, VolumeGrid};
use crate::molecule::Molecule;
use crate::options::{OrbitalOptions, ViewerOptions};
use crate::wavefunction::{OrbitalRef, Wavefunction};

/// Orbital rendering configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalSpec {
    /// Grid points per axis.
    pub npts: u32,
    /// Isosurface level (applied symmetrically to both lobes).
    pub isovalue: f64,
    /// Margin around the molecule, in bohr.
    pub padding: f64,
}

impl OrbitalSpec {
    /// Merge a partial change.
    pub fn apply(&mut self, change: &RenderConfigChange) {
        if let Some(npts) = change.npts {
            self.npts = npts;
        }
        if let Some(isovalue) = change.isovalue {
            self.isovalue = isovalue;
        }
    }
}

impl Default for OrbitalSpec {
    fn default() -> Self {
        Self::from(&OrbitalOptions::default())
    }
}

impl From<&OrbitalOptions> for OrbitalSpec {
    fn from(opts: &OrbitalOptions) -> Self {
        Self {
            npts: opts.resolution,
            isovalue: opts.isovalue,
            padding: opts.padding,
        }
    }
}

/// An orbital currently shown by the viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayedOrbital {
    /// Which orbital.
    pub orbital: OrbitalRef,
    /// Sampled values.
    pub grid: VolumeGrid,
    /// Padding the grid was sampled with.
    pub padding: f64,
    /// Isovalue the surfaces were extracted at.
    pub isovalue: f64,
    /// Enclosed lattice points per lobe.
    pub stats: IsosurfaceStats,
}

/// What an orbital panel needs from a viewer.
pub trait OrbitalDisplay {
    /// The active wavefunction.
    fn wfn(&self) -> Result<&Wavefunction, OrbviewError>;

    /// Current rendering configuration.
    fn orbital_spec(&self) -> &OrbitalSpec;

    /// Orbital on screen, if any.
    fn current_orbital(&self) -> Option<&OrbitalRef>;

    /// Apply a command.
    fn execute(&mut self, command: ViewerCommand) -> Result<(), OrbviewError>;
}

/// Headless molecular viewer with orbital isosurface support.
pub struct GeometryViewer {
    molecule: Molecule,
    model: Box<dyn OrbitalGridModel>,
    wfns: Vec<Wavefunction>,
    orbital_spec: OrbitalSpec,
    current_orbital: Option<OrbitalRef>,
    displayed: Option<DisplayedOrbital>,
    size: Size,
    draw_count: usize,
}

// ── Construction ─────────────────────────────────────────────────────────

impl GeometryViewer {
    /// Viewer bound to `molecule`, sampling orbitals with `model`.
    ///
    /// The molecule's own wavefunction (if any) becomes the active one.
    ///
    /// # Errors
    ///
    /// Returns [`OrbviewError::Configuration`] if the display size in
    /// `options` is not a pixel dimension.
    pub fn new(
        molecule: Molecule,
        model: impl OrbitalGridModel + 'static,
        options: &ViewerOptions,
    ) -> Result<Self, OrbviewError> {
        let size = Size {
            width: options.width.parse::<Px>()?,
            height: options.height.parse::<Px>()?,
        };
        let wfns = molecule.wfn.iter().cloned().collect();
        Ok(Self {
            molecule,
            model: Box::new(model),
            wfns,
            orbital_spec: OrbitalSpec::default(),
            current_orbital: None,
            displayed: None,
            size,
            draw_count: 0,
        })
    }

    /// Replace the active wavefunctions. The first one is used for
    /// orbital lookup; any displayed orbital is cleared.
    pub fn set_wavefunctions(&mut self, wfns: Vec<Wavefunction>) {
        self.wfns = wfns;
        self.clear_orbital();
    }

    /// Replace the rendering configuration without redrawing.
    pub fn set_orbital_spec(&mut self, spec: OrbitalSpec) {
        self.orbital_spec = spec;
    }
}

// ── Accessors ────────────────────────────────────────────────────────────

impl GeometryViewer {
    /// The molecule being shown.
    #[must_use]
    pub fn molecule(&self) -> &Molecule {
        &self.molecule
    }

    /// Display size.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Orbital isosurface data on screen, if any.
    #[must_use]
    pub fn displayed(&self) -> Option<&DisplayedOrbital> {
        self.displayed.as_ref()
    }

    /// Number of orbital draws performed so far.
    #[must_use]
    pub fn draw_count(&self) -> usize {
        self.draw_count
    }
}

// ── Drawing ──────────────────────────────────────────────────────────────

impl GeometryViewer {
    /// Sample `orbital` with the current spec and display it.
    ///
    /// The previous grid is reused when only the isovalue changed.
    pub fn draw_orbital(&mut self, orbital: &OrbitalRef) -> Result<(), OrbviewError> {
        let spec = self.orbital_spec;
        let reusable = self.displayed.as_ref().is_some_and(|d| {
            d.orbital == *orbital
                && d.grid.npts() == spec.npts
                && d.padding == spec.padding
        });

        let grid = match self.displayed.take() {
            Some(d) if reusable => d.grid,
            previous => {
                self.displayed = previous;
                let record = self.wfn()?.orbital(orbital)?;
                self.model.calculate_orbital_grid(
                    &self.molecule,
                    record,
                    &GridRequest {
                        npts: spec.npts,
                        padding: spec.padding,
                    },
                )?
            }
        };

        let stats = grid.count_enclosed(spec.isovalue);
        log::debug!(
            "drew {}[{}] at npts={} isovalue={}: {} / {} points in lobes",
            orbital.orbital_type,
            orbital.index,
            spec.npts,
            spec.isovalue,
            stats.positive,
            stats.negative
        );
        self.displayed = Some(DisplayedOrbital {
            orbital: orbital.clone(),
            grid,
            padding: spec.padding,
            isovalue: spec.isovalue,
            stats,
        });
        self.current_orbital = Some(orbital.clone());
        self.draw_count += 1;
        Ok(())
    }

    /// Remove the displayed orbital.
    pub fn clear_orbital(&mut self) {
        self.current_orbital = None;
        self.displayed = None;
    }

    fn apply_render_config(
        &mut self,
        change: &RenderConfigChange,
    ) -> Result<(), OrbviewError> {
        if change.is_empty() {
            return Ok(());
        }
        self.orbital_spec.apply(change);
        match self.current_orbital.clone() {
            Some(current) => self.draw_orbital(&current),
            None => Ok(()),
        }
    }
}

impl OrbitalDisplay for GeometryViewer {
    fn wfn(&self) -> Result<&Wavefunction, OrbviewError> {
        self.wfns.first().ok_or(OrbviewError::NoWavefunction)
    }

    fn orbital_spec(&self) -> &OrbitalSpec {
        &self.orbital_spec
    }

    fn current_orbital(&self) -> Option<&OrbitalRef> {
        self.current_orbital.as_ref()
    }

    fn execute(&mut self, command: ViewerCommand) -> Result<(), OrbviewError> {
        match command {
            ViewerCommand::RenderConfigChanged(change) => {
                self.apply_render_config(&change)
            }
            ViewerCommand::DrawOrbital(orbital) => self.draw_orbital(&orbital),
            ViewerCommand::ClearOrbital => {
                self.clear_orbital();
                Ok(())
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::Cell;
    use std::rc::Rc;

    use glam::DVec3;

    use crate::error::OrbviewError;
    use crate::model::{GridRequest, OrbitalGridModel, VolumeGrid};
    use crate::molecule::Molecule;
    use crate::wavefunction::{Energy, Orbital, Wavefunction};

    /// Grid model returning ψ(r) = x, counting how often it is called.
    #[derive(Default, Clone)]
    pub(crate) struct LinearModel {
        pub(crate) calls: Rc<Cell<usize>>,
    }

    impl OrbitalGridModel for LinearModel {
        fn calculate_orbital_grid(
            &self,
            _molecule: &Molecule,
            _orbital: &Orbital,
            request: &GridRequest,
        ) -> Result<VolumeGrid, OrbviewError> {
            self.calls.set(self.calls.get() + 1);
            let mut grid = VolumeGrid::new(
                DVec3::splat(-0.05),
                DVec3::splat(0.05),
                request.npts,
            )?;
            grid.fill(|p| p.x);
            Ok(grid)
        }
    }

    pub(crate) fn water_wfn() -> Wavefunction {
        Wavefunction::new()
            .with_orbitals(
                "canonical",
                vec![
                    Orbital::named("1a1")
                        .with_energy(Energy::hartree(-20.55))
                        .with_occupation(2.0),
                    Orbital::named("2a1"),
                    Orbital::named("1b2").with_occupation(2.0),
                    Orbital::named("4a1")
                        .with_unicode_name("σ*")
                        .with_energy(Energy::hartree(-0.5))
                        .with_occupation(2.0),
                ],
            )
            .with_orbitals(
                "natural",
                vec![Orbital::named("n1"), Orbital::named("n2")],
            )
            .with_orbitals("empty", Vec::new())
    }

    pub(crate) fn water() -> Molecule {
        Molecule {
            name: "water".to_owned(),
            wfn: Some(water_wfn()),
            ..Molecule::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{water, LinearModel};
    use super::*;

    fn viewer() -> (GeometryViewer, LinearModel) {
        let model = LinearModel::default();
        let viewer =
            GeometryViewer::new(water(), model.clone(), &ViewerOptions::default())
                .unwrap();
        (viewer, model)
    }

    #[test]
    fn molecule_wavefunction_is_active() {
        let (v, _) = viewer();
        assert!(v.wfn().unwrap().orbitals.contains_key("canonical"));
        assert_eq!(v.size().width, Px(500));
        assert!(v.current_orbital().is_none());
    }

    #[test]
    fn draw_records_isosurface() {
        let (mut v, model) = viewer();
        v.execute(ViewerCommand::DrawOrbital(OrbitalRef::new("canonical", 1)))
            .unwrap();
        let shown = v.displayed().unwrap();
        assert_eq!(shown.orbital, OrbitalRef::new("canonical", 1));
        assert_eq!(shown.grid.npts(), 40);
        assert!(shown.stats.positive > 0);
        assert_eq!(shown.stats.positive, shown.stats.negative);
        assert_eq!(model.calls.get(), 1);
        assert_eq!(v.draw_count(), 1);
    }

    #[test]
    fn config_change_redraws_only_when_displayed() {
        let (mut v, model) = viewer();
        v.execute(ViewerCommand::RenderConfigChanged(
            RenderConfigChange::resolution(64),
        ))
        .unwrap();
        assert_eq!(v.orbital_spec().npts, 64);
        assert_eq!(v.draw_count(), 0);

        v.execute(ViewerCommand::DrawOrbital(OrbitalRef::new("natural", 0)))
            .unwrap();
        v.execute(ViewerCommand::RenderConfigChanged(
            RenderConfigChange::resolution(10),
        ))
        .unwrap();
        assert_eq!(v.draw_count(), 2);
        assert_eq!(model.calls.get(), 2);
        assert_eq!(v.displayed().unwrap().grid.npts(), 10);
    }

    #[test]
    fn isovalue_change_reuses_grid() {
        let (mut v, model) = viewer();
        v.execute(ViewerCommand::DrawOrbital(OrbitalRef::new("canonical", 0)))
            .unwrap();
        let before = v.displayed().unwrap().stats;
        v.execute(ViewerCommand::RenderConfigChanged(
            RenderConfigChange::isovalue(0.04),
        ))
        .unwrap();
        assert_eq!(model.calls.get(), 1);
        assert_eq!(v.draw_count(), 2);
        let after = v.displayed().unwrap();
        assert_eq!(after.isovalue, 0.04);
        assert!(after.stats.positive < before.positive);
    }

    #[test]
    fn bad_reference_keeps_previous_display() {
        let (mut v, _) = viewer();
        v.execute(ViewerCommand::DrawOrbital(OrbitalRef::new("canonical", 0)))
            .unwrap();
        let err = v
            .execute(ViewerCommand::DrawOrbital(OrbitalRef::new("canonical", 9)))
            .unwrap_err();
        assert!(matches!(err, OrbviewError::OrbitalIndex { .. }));
        assert_eq!(
            v.current_orbital(),
            Some(&OrbitalRef::new("canonical", 0))
        );
        assert!(v.displayed().is_some());
    }

    #[test]
    fn clear_and_replace_wavefunctions() {
        let (mut v, _) = viewer();
        v.execute(ViewerCommand::DrawOrbital(OrbitalRef::new("canonical", 0)))
            .unwrap();
        v.execute(ViewerCommand::ClearOrbital).unwrap();
        assert!(v.displayed().is_none());

        v.set_wavefunctions(Vec::new());
        assert!(matches!(v.wfn(), Err(OrbviewError::NoWavefunction)));
    }
}
