//! New-machine modal controller.

use crate::{
    entities::MachineFields,
    errors::{Error, Result},
    gateway::MachineGateway,
};
use tracing::info;

/// Collects the four required fields of a new machine record.
#[derive(Debug, Default)]
pub struct NewMachineController {
    open: bool,
    /// Unique machine identifier
    pub id_msn: String,
    /// Machine address / location
    pub alamat: String,
    /// Managing party
    pub pengelola: String,
    /// Assigned technician
    pub teknisi: String,
}

impl NewMachineController {
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

    /// Validates the form and creates the record. Rejection happens locally,
    /// before the gateway is touched; on success the modal closes.
    pub async fn submit(&mut self, gateway: &dyn MachineGateway) -> Result<()> {
        let fields = self.validate()?;
        gateway.create_machine(&fields).await?;
        info!("Created machine {}", fields.id_msn);
        self.close();
        Ok(())
    }
}
