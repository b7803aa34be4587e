//! `orbview`: drive the orbital panel over JSON lines.
//!
//! ```text
//! orbview <molecule.json> [options.toml]
//! orbview --schema
//! ```
//!
//! Writes a state snapshot to stdout on startup, then reads one
//! `{"action": ...}` message per stdin line and answers each with a fresh
//! snapshot. `--schema` prints the options JSON Schema and exits.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process;

use orbview::gui::ipc;
use orbview::model::GaussianBasisModel;
use orbview::options::Options;
use orbview::{Molecule, OrbitalViewer, OrbviewError};

const USAGE: &str = "usage: orbview <molecule.json> [options.toml] | orbview --schema";

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = match args.first().map(String::as_str) {
        Some("--schema") => write_json(&mut io::stdout().lock(), &Options::json_schema()),
        Some(molecule) => run(Path::new(molecule), args.get(1).map(Path::new)),
        None => {
            log::error!("{USAGE}");
            process::exit(2);
        }
    };

    if let Err(e) = result {
        log::error!("{e}");
        process::exit(1);
    }
}

fn run(molecule_path: &Path, options_path: Option<&Path>) -> Result<(), OrbviewError> {
    let options = match options_path {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    let molecule = Molecule::load(molecule_path)?;
    let mut viewer = OrbitalViewer::new(molecule, GaussianBasisModel, &options)?;

    let mut out = io::stdout().lock();
    write_json(&mut out, &viewer.snapshot())?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let Some(action) = ipc::parse_action(&line) else {
            continue;
        };
        if let Err(e) = viewer.handle_action(action) {
            log::warn!("{e}");
        }
        write_json(&mut out, &viewer.snapshot())?;
    }

    log::info!("stdin closed, exiting");
    Ok(())
}

fn write_json(out: &mut impl Write, value: &impl serde::Serialize) -> Result<(), OrbviewError> {
    let json =
        serde_json::to_string(value).map_err(|e| OrbviewError::Parse(e.to_string()))?;
    writeln!(out, "{json}")?;
    out.flush()?;
    Ok(())
}
