// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Molecular orbital selection panel with a headless orbital viewer.
//!
//! An [`OrbitalViewer`] pairs a [`viewer::GeometryViewer`] with an
//! [`panel::OrbitalUIPane`]: pick an orbital type, pick one of its orbitals,
//! tune the isosurface level and the sampling grid, and the viewer redraws.
//!
//! # Key entry points
//!
//! - [`OrbitalViewer`] - the side-by-side widget and its action loop
//! - [`panel::OrbitalUIPane`] - the selection synchronizer
//! - [`viewer::OrbitalDisplay`] - what a panel needs from a viewer
//! - [`model::OrbitalGridModel`] - orbital sampling on a 3-D grid
//! - [`options::Options`] - panel, orbital and viewer configuration
//! - [`gui::ipc`] - JSON actions in, state snapshots out
//!
//! # Architecture
//!
//! The pane never mutates the viewer. Its handlers return
//! [`viewer::ViewerCommand`]s and [`selection::SelectionEvent`]s; the
//! container executes the commands and fires the events onto a
//! [`selection::SelectionBus`], which the viewer and any linked panels
//! drain on the UI thread.

pub mod error;
pub mod gui;
pub mod layout;
pub mod model;
pub mod molecule;
pub mod options;
mod orbital_viewer;
pub mod panel;
pub mod selection;
pub mod viewer;
pub mod wavefunction;

pub use error::OrbviewError;
pub use molecule::Molecule;
pub use orbital_viewer::OrbitalViewer;
