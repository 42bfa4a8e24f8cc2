//! Remote data gateway - the only seam between the client and the PM API
//! server.
//!
//! The gateway does request/response marshalling and nothing else. Every
//! mutating endpoint answers `{success, error?, message?}`; a `false` success
//! flag becomes [`Error::Application`] carrying the server's string verbatim,
//! and transport failures become [`Error::Transport`]. No call is retried.
//!
//! Controllers and the application shell depend on the [`MachineGateway`]
//! trait so they can be exercised against an in-memory gateway in tests.

/// HTTP implementation backed by `reqwest`
pub mod http;

use crate::{
    entities::{MachineFields, MachineRecord},
    errors::{Error, Result},
};
use async_trait::async_trait;
use serde::Deserialize;

pub use http::HttpGateway;

/// Response envelope shared by every mutating endpoint.
#[derive(Debug, Deserialize)]
pub struct MutationResponse {
    /// Whether the operation succeeded server-side
    pub success: bool,
    /// Human-readable failure description when `success` is false
    #[serde(default)]
    pub error: Option<String>,
    /// Human-readable success detail (only the import endpoint sets this)
    #[serde(default)]
    pub message: Option<String>,
}

impl MutationResponse {
    /// Converts the envelope into a `Result`, yielding the optional success
    /// message. The failure string is passed through unchanged; the client
    /// never distinguishes validation, not-found, and conflict errors.
    pub fn into_result(self) -> Result<Option<String>> {
        if self.success {
            Ok(self.message)
        } else {
            let message = self
                .error
                .or(self.message)
                .unwrap_or_else(|| "Unknown server error".to_string());
            Err(Error::Application { message })
        }
    }
}

/// Operations exposed by the PM API server.
///
/// One method per endpoint; see the module docs for the error contract.
#[async_trait]
pub trait MachineGateway: Send + Sync {
    /// Fetches the full machine list, ordered by sequence number.
    async fn list_machines(&self) -> Result<Vec<MachineRecord>>;

    /// Fetches a single machine by identifier. Not-found is an explicit
    /// `Ok(None)`, not an error.
    async fn get_machine(&self, id_msn: &str) -> Result<Option<MachineRecord>>;

    /// Server-side search over managing party, PM period, and status.
    /// An empty query returns the full list.
    async fn search(&self, query: &str) -> Result<Vec<MachineRecord>>;

    /// Creates a new machine record. All four fields are required.
    async fn create_machine(&self, fields: &MachineFields) -> Result<()>;

    /// Updates address, managing party, and technician of an existing
    /// machine. The identifier keys the record and is never renamed.
    async fn edit_machine(&self, fields: &MachineFields) -> Result<()>;

    /// Sets the scheduled PM period for a machine.
    async fn update_pm(&self, id_msn: &str, periode_pm: &str) -> Result<()>;

    /// Records the completion date of a scheduled PM.
    async fn complete_pm(&self, id_msn: &str, tgl_selesai_pm: &str) -> Result<()>;

    /// Replaces the free-text notes of a machine.
    async fn set_notes(&self, id_msn: &str, notes: &str) -> Result<()>;

    /// Clears both the PM period and the completion date. The record
    /// itself persists.
    async fn delete_pm(&self, id_msn: &str) -> Result<()>;

    /// Destroys the entire machine record. No undo.
    async fn delete_machine(&self, id_msn: &str) -> Result<()>;

    /// Uploads a spreadsheet for bulk import. Returns the server's
    /// human-readable summary message.
    async fn import_spreadsheet(&self, filename: &str, bytes: Vec<u8>) -> Result<String>;

    /// Downloads the PDF export of the full table.
    async fn export_pdf(&self) -> Result<Vec<u8>>;
}
