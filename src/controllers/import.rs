//! Spreadsheet import modal controller.
//!
//! The spreadsheet parsing itself is server-side; this controller only
//! reads the chosen file and uploads it. The server's summary message
//! ("Successfully imported N records") is returned for the success toast.

use crate::{
    errors::{Error, Result},
    gateway::MachineGateway,
};
use std::path::PathBuf;
use tracing::info;

/// Uploads a spreadsheet for bulk import.
#[derive(Debug, Default)]
pub struct ImportController {
    open: bool,
    /// Path of the file chosen for upload
    pub file: Option<PathBuf>,
}

impl ImportController {
    /// Opens the modal with no file selected.
    pub fn open(&mut self) {
        *self = Self {
            open: true,
            ..Self::default()
        };
    }

    /// Closes the modal and discards the selection.
    pub fn close(&mut self) {
        *self = Self::default();
    }

    /// Whether the modal is currently open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Reads the selected file and uploads it. Returns the server's summary
    /// message; on success the modal closes.
    pub async fn submit(&mut self, gateway: &dyn MachineGateway) -> Result<String> {
        let path = self.file.clone().ok_or_else(|| Error::Validation {
            message: "Pilih file untuk diimport".to_string(),
        })?;

        let bytes = tokio::fs::read(&path).await?;
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("import.xlsx")
            .to_string();

        let message = gateway.import_spreadsheet(&filename, bytes).await?;
        info!("Imported spreadsheet {filename}: {message}");
        self.close();
        Ok(message)
    }
}
