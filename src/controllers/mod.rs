//! Form controllers, one per modal dialog.
//!
//! Each controller is a small open/closed state machine that owns its own
//! field state, validates required fields locally (no network call on
//! rejection), calls the gateway on submit, and closes itself on success.
//! The application shell triggers a full cache reload after every
//! successful mutation.

/// Complete-PM modal
pub mod complete_pm;
/// Edit-machine modal with single-record auto-fill
pub mod edit_machine;
/// Spreadsheet import modal
pub mod import;
/// New-machine modal
pub mod new_machine;
/// Notes modal keyed by the clicked identifier
pub mod notes;
/// Update-PM modal with cache-backed pre-fill
pub mod update_pm;

pub use complete_pm::CompletePmController;
pub use edit_machine::EditMachineController;
pub use import::ImportController;
pub use new_machine::NewMachineController;
pub use notes::NotesController;
pub use update_pm::UpdatePmController;
