//! Machine record entity - the single row type of the maintenance table.
//!
//! Mirrors the wire shape the server produces for every list/get/search
//! response. The server serializes unset PM fields as empty strings, so the
//! client treats `""` as "not set" and never distinguishes it from null.

use serde::{Deserialize, Serialize};

/// One machine in the preventive-maintenance fleet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineRecord {
    /// Display-only sequence number assigned by the server
    pub no: i64,
    /// Unique machine identifier; immutable once created
    pub id_msn: String,
    /// Machine address / location
    pub alamat: String,
    /// Managing party responsible for the machine
    pub pengelola: String,
    /// Scheduled PM period; empty when no PM has been scheduled
    #[serde(default)]
    pub periode_pm: String,
    /// Date the last scheduled PM was finished; empty when none recorded
    #[serde(default)]
    pub tgl_selesai_pm: String,
    /// Server-derived display status (e.g. "Outstanding", "Done").
    /// Opaque to the client; only lower-cased to pick a badge style.
    pub status: String,
    /// Assigned technician
    pub teknisi: String,
    /// Free-text notes, edited independently of all other fields
    #[serde(default)]
    pub notes: String,
}

impl MachineRecord {
    /// Whether a PM period has been scheduled for this machine.
    /// Gates eligibility for the complete-PM selection: a PM cannot be
    /// marked complete before a period has been set.
    #[must_use]
    pub fn has_pm_period(&self) -> bool {
        !self.periode_pm.is_empty()
    }

    /// CSS class suffix for the status badge, derived by lower-casing the
    /// server-supplied status string.
    #[must_use]
    pub fn status_class(&self) -> String {
        self.status.to_lowercase()
    }
}

/// The editable identity fields shared by the create and edit operations.
/// All four are required; the server rejects anything else.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineFields {
    /// Unique machine identifier
    pub id_msn: String,
    /// Machine address / location
    pub alamat: String,
    /// Managing party
    pub pengelola: String,
    /// Assigned technician
    pub teknisi: String,
}
