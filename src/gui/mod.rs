//! Front-end boundary: the panel's controls are rendered by whatever host
//! drives the `orbview` binary, which talks JSON lines through a minimal
//! IPC vocabulary.

/// Action parsing and state snapshots.
pub mod ipc;
