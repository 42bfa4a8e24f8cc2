//! Complete-PM modal controller.
//!
//! Only machines with a PM period set are eligible targets (the dropdown
//! filter lives in the view layer). Selection pre-fills the scheduled
//! period and technician from the store for context; the completion date
//! defaults to today.

use crate::{
    errors::{Error, Result},
    gateway::MachineGateway,
    store::MachineStore,
};
use chrono::Local;
use tracing::info;

/// Records the completion date of a scheduled PM.
#[derive(Debug, Default)]
pub struct CompletePmController {
    open: bool,
    /// Selected machine identifier
    pub id_msn: String,
    /// Completion date being recorded (YYYY-MM-DD)
    pub tgl_selesai_pm: String,
    /// Read-only context: the scheduled PM period
    pub periode_pm: String,
    /// Read-only context: technician
    pub teknisi: String,
}

impl CompletePmController {
    /// Opens the modal with a blank selection and today's date pre-filled.
    pub fn open(&mut self) {
        *self = Self {
            open: true,
            tgl_selesai_pm: Local::now().format("%Y-%m-%d").to_string(),
            ..Self::default()
        };
    }

    /// Closes the modal and discards its field state.
    pub fn close(&mut self) {
        *self = Self::default();
    }

    /// Whether the modal is currently open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Handles a selection change: pre-fills period and technician from the
    /// store, or clears them when the selection is empty or unknown.
    pub fn select(&mut self, id_msn: &str, store: &MachineStore) {
        self.id_msn = id_msn.to_string();
        self.periode_pm.clear();
        self.teknisi.clear();

        if id_msn.is_empty() {
            return;
        }
        if let Some(machine) = store.find(id_msn) {
            self.periode_pm = machine.periode_pm.clone();
            self.teknisi = machine.teknisi.clone();
        }
    }

    fn validate(&self) -> Result<()> {
        if self.id_msn.is_empty() || self.tgl_selesai_pm.is_empty() {
            return Err(Error::Validation {
                message: "Id Msn dan Tanggal Selesai PM harus diisi".to_string(),
            });
        }
        Ok(())
    }

    /// Validates and records the completion; on success the modal closes.
    pub async fn submit(&mut self, gateway: &dyn MachineGateway) -> Result<()> {
        self.validate()?;
        gateway
            .complete_pm(&self.id_msn, &self.tgl_selesai_pm)
            .await?;
        info!("Completed PM for {}", self.id_msn);
        self.close();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{FakeGateway, sample_records, store_with};

    #[test]
    fn test_open_defaults_completion_date_to_today() {
        let mut controller = CompletePmController::default();
        controller.open();

        let today = Local::now().format("%Y-%m-%d").to_string();
        assert_eq!(controller.tgl_selesai_pm, today);
    }

    #[test]
    fn test_select_prefills_period_and_technician() {
        let store = store_with(sample_records());
        let mut controller = CompletePmController::default();
        controller.open();

        controller.select("M-001", &store);

        assert_eq!(controller.periode_pm, "2026-08");
        assert_eq!(controller.teknisi, "Budi");
    }

    #[test]
    fn test_clearing_selection_clears_context() {
        let store = store_with(sample_records());
        let mut controller = CompletePmController::default();
        controller.open();
        controller.select("M-001", &store);

        controller.select("", &store);

        assert!(controller.periode_pm.is_empty());
        assert!(controller.teknisi.is_empty());
    }

    #[tokio::test]
    async fn test_submit_records_completion() -> Result<()> {
        let gateway = FakeGateway::with_records(sample_records());
        let store = store_with(sample_records());
        let mut controller = CompletePmController::default();
        controller.open();
        controller.select("M-001", &store);
        controller.tgl_selesai_pm = "2026-08-07".to_string();

        controller.submit(&gateway).await?;

        assert_eq!(
            gateway.calls(),
            vec!["complete_pm M-001|2026-08-07".to_string()]
        );
        assert!(!controller.is_open());
        Ok(())
    }

    #[tokio::test]
    async fn test_submit_requires_identifier_and_date() {
        let gateway = FakeGateway::empty();
        let mut controller = CompletePmController::default();
        controller.open();
        controller.tgl_selesai_pm.clear();

        let result = controller.submit(&gateway).await;

        match result {
            Err(Error::Validation { message }) => {
                assert_eq!(message, "Id Msn dan Tanggal Selesai PM harus diisi");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert!(gateway.calls().is_empty());
    }
}
