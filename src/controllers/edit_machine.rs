//! Edit-machine modal controller.
//!
//! When the identifier field loses focus the controller fetches that single
//! record and pre-fills the editable fields. A not-found answer or a
//! transport failure clears them instead - stale data from a previous
//! lookup must never stay visible.

use crate::{
    entities::MachineFields,
    errors::{Error, Result},
    gateway::MachineGateway,
};
use tracing::{info, warn};

/// Edits address, managing party, and technician of an existing machine.
/// The identifier keys the record and is never renamed.
#[derive(Debug, Default)]
pub struct EditMachineController {
    open: bool,
    /// Identifier of the record being edited
    pub id_msn: String,
    /// Machine address / location
    pub alamat: String,
    /// Managing party
    pub pengelola: String,
    /// Assigned technician
    pub teknisi: String,
}

impl EditMachineController {
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

    fn clear_prefill(&mut self) {
        self.alamat.clear();
        self.pengelola.clear();
        self.teknisi.clear();
    }

    /// Pre-fills the editable fields from a single-record fetch, triggered
    /// when the identifier field loses focus. Best-effort: failures clear
    /// the fields and are only logged, never surfaced as a toast.
    pub async fn autofill(&mut self, gateway: &dyn MachineGateway) {
        if self.id_msn.is_empty() {
            return;
        }
        match gateway.get_machine(&self.id_msn).await {
            Ok(Some(machine)) => {
                self.alamat = machine.alamat;
                self.pengelola = machine.pengelola;
                self.teknisi = machine.teknisi;
            }
            Ok(None) => self.clear_prefill(),
            Err(error) => {
                warn!("Auto-fill lookup for {} failed: {error}", self.id_msn);
                self.clear_prefill();
            }
        }
    }

    fn validate(&self) -> Result<MachineFields> {
        if self.id_msn.is_empty()
            || self.alamat.is_empty()
            || self.pengelola.is_empty()
            || self.teknisi.is_empty()
        {
            return Err(Error::Validation {
                message: "Semua field harus diisi".to_string(),
            });
        }
        Ok(MachineFields {
            id_msn: self.id_msn.clone(),
            alamat: self.alamat.clone(),
            pengelola: self.pengelola.clone(),
            teknisi: self.teknisi.clone(),
        })
    }

    /// Validates the form and updates the record; on success the modal
    /// closes. Server-side errors (e.g. unknown identifier) pass through
    /// verbatim.
    pub async fn submit(&mut self, gateway: &dyn MachineGateway) -> Result<()> {
        let fields = self.validate()?;
        gateway.edit_machine(&fields).await?;
        info!("Updated machine {}", fields.id_msn);
        self.close();
        Ok(())
    }
}
