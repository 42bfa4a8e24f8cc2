//! Entity module - wire-level data shapes exchanged with the PM API server.
//! The server owns all persistence; these types only mirror its JSON.

pub mod machine;

pub use machine::{MachineFields, MachineRecord};
