//! Update-PM modal controller.
//!
//! The target machine is picked from a dropdown; changing the selection
//! pre-fills read-only context (address, managing party, technician) from
//! the already-loaded store, with no network round trip. An identifier
//! missing from the store leaves the context blank but does not block
//! submission - the typed period is still sent to the server.

use crate::{
    errors::{Error, Result},
    gateway::MachineGateway,
    store::MachineStore,
};
use tracing::info;

/// Sets the scheduled PM period for a machine.
#[derive(Debug, Default)]
pub struct UpdatePmController {
    open: bool,
    /// Selected machine identifier
    pub id_msn: String,
    /// PM period being assigned
    pub periode_pm: String,
    /// Read-only context: address of the selected machine
    pub alamat: String,
    /// Read-only context: managing party
    pub pengelola: String,
    /// Read-only context: technician
    pub teknisi: String,
}

impl UpdatePmController {
    /// Opens the modal with a blank form.
    pub fn open(&mut self) {
        *self = Self {
            open: true,
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

    /// Handles a selection change: pre-fills the context fields from the
    /// store, or clears them when the selection is empty or unknown.
    pub fn select(&mut self, id_msn: &str, store: &MachineStore) {
        self.id_msn = id_msn.to_string();
        self.alamat.clear();
        self.pengelola.clear();
        self.teknisi.clear();

        if id_msn.is_empty() {
            return;
        }
        if let Some(machine) = store.find(id_msn) {
            self.alamat = machine.alamat.clone();
            self.pengelola = machine.pengelola.clone();
            self.teknisi = machine.teknisi.clone();
        }
    }

    fn validate(&self) -> Result<()> {
        if self.id_msn.is_empty() || self.periode_pm.is_empty() {
            return Err(Error::Validation {
                message: "Id Msn dan Periode PM harus diisi".to_string(),
            });
        }
        Ok(())
    }

    /// Validates and submits the new PM period; on success the modal closes.
    pub async fn submit(&mut self, gateway: &dyn MachineGateway) -> Result<()> {
        self.validate()?;
        gateway.update_pm(&self.id_msn, &self.periode_pm).await?;
        info!("Updated PM period for {}", self.id_msn);
        self.close();
        Ok(())
    }
}
