//! Confirmation flow for destructive operations.
//!
//! Delete-PM and delete-all have no undo, so they require two sequential
//! affirmative answers before the gateway is called: first the target
//! identifier, then an explicit yes to the warning. Declining at either
//! stage returns to idle and guarantees no call is made. The flow is an
//! explicit pending-action state machine rather than a blocking dialog, so
//! any front-end can drive it.

/// The destructive operation being confirmed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DestructiveAction {
    /// Clear the PM period and completion date; the record persists
    DeletePm,
    /// Destroy the entire machine record
    DeleteAll,
}

#[derive(Debug, PartialEq, Eq)]
enum Stage {
    Idle,
    AwaitingTarget {
        action: DestructiveAction,
    },
    AwaitingConfirmation {
        action: DestructiveAction,
        id_msn: String,
    },
}

/// Two-step confirmation state machine.
#[derive(Debug)]
pub struct ConfirmationFlow {
    stage: Stage,
}

impl Default for ConfirmationFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfirmationFlow {
    /// Creates an idle flow.
    #[must_use]
    pub const fn new() -> Self {
        Self { stage: Stage::Idle }
    }

    /// Starts confirming an action. Any confirmation already in progress is
    /// discarded.
    pub fn begin(&mut self, action: DestructiveAction) {
        self.stage = Stage::AwaitingTarget { action };
    }

    /// Supplies the target identifier (the first affirmative step).
    /// An empty identifier counts as declining and resets the flow.
    pub fn provide_target(&mut self, id_msn: &str) {
        let Stage::AwaitingTarget { action } = &self.stage else {
            return;
        };
        let action = *action;
        if id_msn.trim().is_empty() {
            self.stage = Stage::Idle;
            return;
        }
        self.stage = Stage::AwaitingConfirmation {
            action,
            id_msn: id_msn.trim().to_string(),
        };
    }

    /// Gives the second affirmative answer. Returns the armed action and its
    /// target when the flow completes; the flow resets either way.
    pub fn confirm(&mut self) -> Option<(DestructiveAction, String)> {
        match std::mem::replace(&mut self.stage, Stage::Idle) {
            Stage::AwaitingConfirmation { action, id_msn } => Some((action, id_msn)),
            _ => None,
        }
    }

    /// Declines at any stage; the flow returns to idle.
    pub fn cancel(&mut self) {
        self.stage = Stage::Idle;
    }

    /// The question to put to the user at the current stage, if any.
    #[must_use]
    pub fn prompt(&self) -> Option<String> {
        match &self.stage {
            Stage::Idle => None,
            Stage::AwaitingTarget { action } => Some(match action {
                DestructiveAction::DeletePm => {
                    "Masukkan Id Msn yang akan dihapus PM-nya:".to_string()
                }
                DestructiveAction::DeleteAll => {
                    "Masukkan Id Msn yang akan dihapus seluruhnya:".to_string()
                }
            }),
            Stage::AwaitingConfirmation { action, id_msn } => Some(match action {
                DestructiveAction::DeletePm => format!(
                    "Apakah Anda yakin ingin menghapus data PM untuk mesin {id_msn}?"
                ),
                DestructiveAction::DeleteAll => format!(
                    "Apakah Anda yakin ingin menghapus SEMUA data untuk mesin {id_msn}? \
                     Data tidak dapat dikembalikan!"
                ),
            }),
        }
    }

    /// Whether a confirmation is in progress.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.stage != Stage::Idle
    }
}
