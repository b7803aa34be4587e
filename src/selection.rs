//! Selection broadcast shared by linked panels and viewers.
//!
//! Selectors fire [`SelectionEvent`]s onto a [`SelectionBus`]; every other
//! subscriber receives them on its own channel and drains it on the UI
//! thread. A selector never hears its own events back.

use std::sync::mpsc;

use serde::{Deserialize, Serialize};

use crate::wavefunction::OrbitalRef;

/// Identity of a selector on the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectorId(pub u32);

/// What was selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    /// An orbital, serialized as `{"orbname": [type, index]}`.
    #[serde(rename = "orbname", with = "orbname")]
    Orbital(OrbitalRef),
    /// An isosurface level, serialized as `{"orbital_isovalue": v}`.
    OrbitalIsovalue(f64),
}

/// One selection broadcast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionEvent {
    /// Selector that fired the event.
    pub source: SelectorId,
    /// The new selection.
    pub selection: Selection,
}

impl SelectionEvent {
    /// Orbital selection event.
    #[must_use]
    pub fn orbital(source: SelectorId, orbital: OrbitalRef) -> Self {
        Self {
            source,
            selection: Selection::Orbital(orbital),
        }
    }

    /// Isovalue selection event.
    #[must_use]
    pub fn isovalue(source: SelectorId, isovalue: f64) -> Self {
        Self {
            source,
            selection: Selection::OrbitalIsovalue(isovalue),
        }
    }
}

/// Fan-out of selection events to subscribed selectors.
#[derive(Debug, Default)]
pub struct SelectionBus {
    subscribers: Vec<(SelectorId, mpsc::Sender<SelectionEvent>)>,
    next_id: u32,
}

impl SelectionBus {
    /// Bus with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn register(&mut self) -> SelectorId {
        let id = SelectorId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Allocate an id and subscribe it; events from other selectors arrive
    /// on the returned receiver.
    pub fn subscribe(&mut self) -> (SelectorId, mpsc::Receiver<SelectionEvent>) {
        let id = self.register();
        let (tx, rx) = mpsc::channel();
        self.subscribers.push((id, tx));
        (id, rx)
    }

    /// Deliver `event` to every subscriber except its source. Subscribers
    /// whose receiver was dropped are removed.
    pub fn fire(&mut self, event: &SelectionEvent) {
        log::debug!("selection from {:?}: {:?}", event.source, event.selection);
        self.subscribers.retain(|(id, tx)| {
            *id == event.source || tx.send(event.clone()).is_ok()
        });
    }

    /// Number of live subscribers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    /// Whether nobody is subscribed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

/// `OrbitalRef` as a `(type, index)` tuple on the wire.
mod orbname {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::wavefunction::OrbitalRef;

    pub(super) fn serialize<S: Serializer>(
        orbital: &OrbitalRef,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        (&orbital.orbital_type, orbital.index).serialize(serializer)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<OrbitalRef, D::Error> {
        let (orbital_type, index) = <(String, usize)>::deserialize(deserializer)?;
        Ok(OrbitalRef {
            orbital_type,
            index,
        })
    }
}
