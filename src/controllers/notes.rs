//! Notes modal controller.
//!
//! Opened by clicking an identifier cell in the table. The identifier of
//! the record being annotated is part of this controller's own transient
//! state: it is set on open and cleared on close, so a save can never
//! target a leftover identifier from a previous editing session.

use crate::{
    entities::MachineRecord,
    errors::{Error, Result},
    gateway::MachineGateway,
};
use tracing::info;

/// Edits the free-text notes of one machine.
#[derive(Debug, Default)]
pub struct NotesController {
    open: bool,
    current_id: Option<String>,
    /// Notes text being edited; empty notes are allowed
    pub notes: String,
}

impl NotesController {
    /// Opens the modal for the clicked record, pre-filling its notes.
    pub fn open_for(&mut self, machine: &MachineRecord) {
        self.open = true;
        self.current_id = Some(machine.id_msn.clone());
        self.notes = machine.notes.clone();
    }

    /// Closes the modal, dropping the target identifier with it.
    pub fn close(&mut self) {
        *self = Self::default();
    }

    /// Whether the modal is currently open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Identifier of the record being annotated, if the modal is open.
    #[must_use]
    pub fn current_id(&self) -> Option<&str> {
        self.current_id.as_deref()
    }

    /// Saves the notes for the record the modal was opened for. There is no
    /// required-field check; clearing the notes is a valid save.
    pub async fn submit(&mut self, gateway: &dyn MachineGateway) -> Result<()> {
        let id_msn = self.current_id.clone().ok_or_else(|| Error::Validation {
            message: "Tidak ada mesin yang dipilih".to_string(),
        })?;
        gateway.set_notes(&id_msn, &self.notes).await?;
        info!("Saved notes for {id_msn}");
        self.close();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{FakeGateway, sample_record};

    #[tokio::test]
    async fn test_open_prefills_notes_and_submit_targets_that_record() -> Result<()> {
        let mut record = sample_record("M-001");
        record.notes = "ganti filter".to_string();
        let gateway = FakeGateway::with_records(vec![record.clone()]);

        let mut controller = NotesController::default();
        controller.open_for(&record);
        assert_eq!(controller.notes, "ganti filter");

        controller.notes = "ganti filter + oli".to_string();
        controller.submit(&gateway).await?;

        assert_eq!(
            gateway.calls(),
            vec!["set_notes M-001|ganti filter + oli".to_string()]
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_close_drops_target_identifier() {
        let record = sample_record("M-001");
        let gateway = FakeGateway::with_records(vec![record.clone()]);

        let mut controller = NotesController::default();
        controller.open_for(&record);
        controller.close();

        // A save after close must not silently target the previous record
        let result = controller.submit(&gateway).await;
        assert!(matches!(result, Err(Error::Validation { .. })));
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn test_empty_notes_are_a_valid_save() -> Result<()> {
        let mut record = sample_record("M-001");
        record.notes = "old".to_string();
        let gateway = FakeGateway::with_records(vec![record.clone()]);

        let mut controller = NotesController::default();
        controller.open_for(&record);
        controller.notes.clear();
        controller.submit(&gateway).await?;

        assert_eq!(gateway.calls(), vec!["set_notes M-001|".to_string()]);
        Ok(())
    }

    #[test]
    fn test_reopening_replaces_previous_session() {
        let first = sample_record("M-001");
        let mut second = sample_record("M-002");
        second.notes = "periksa belt".to_string();

        let mut controller = NotesController::default();
        controller.open_for(&first);
        controller.open_for(&second);

        assert_eq!(controller.current_id(), Some("M-002"));
        assert_eq!(controller.notes, "periksa belt");
    }
}
