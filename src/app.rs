//! Application shell - binds the store, gateway, controllers, confirmation
//! flow, and notifier together.
//!
//! Control flow mirrors the panel: a user action feeds a controller, the
//! controller calls the gateway, and every successful mutation triggers a
//! full reload of the store followed by a repaint. Failures never touch the
//! store; they only produce a toast. Racing responses are resolved
//! last-fetch-wins - whichever reload completes later overwrites the store.

use crate::{
    confirm::{ConfirmationFlow, DestructiveAction},
    controllers::{
        CompletePmController, EditMachineController, ImportController, NewMachineController,
        NotesController, UpdatePmController,
    },
    errors::Error,
    gateway::MachineGateway,
    notify::Notifier,
    store::MachineStore,
    view::{self, SelectOption},
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info};

/// The admin panel's single top-level object. Owns all client-side state;
/// handlers run to completion, suspending only at gateway calls.
pub struct App {
    gateway: Arc<dyn MachineGateway>,
    /// Client-side copy of the last fetched machine list
    pub store: MachineStore,
    /// Single-slot toast notifications
    pub notifier: Notifier,
    /// New-machine modal
    pub new_machine: NewMachineController,
    /// Edit-machine modal
    pub edit_machine: EditMachineController,
    /// Update-PM modal
    pub update_pm: UpdatePmController,
    /// Complete-PM modal
    pub complete_pm: CompletePmController,
    /// Notes modal
    pub notes: NotesController,
    /// Import modal
    pub import: ImportController,
    /// Pending destructive-action confirmation
    pub confirmation: ConfirmationFlow,
    export_path: PathBuf,
}

impl App {
    /// Creates the shell around a gateway. `export_path` is where the PDF
    /// export is written (the browser-download stand-in).
    #[must_use]
    pub fn new(gateway: Arc<dyn MachineGateway>, export_path: PathBuf) -> Self {
        Self {
            gateway,
            store: MachineStore::new(),
            notifier: Notifier::new(),
            new_machine: NewMachineController::default(),
            edit_machine: EditMachineController::default(),
            update_pm: UpdatePmController::default(),
            complete_pm: CompletePmController::default(),
            notes: NotesController::default(),
            import: ImportController::default(),
            confirmation: ConfirmationFlow::new(),
            export_path,
        }
    }

    fn report_failure(&mut self, failure: &Error, transport_fallback: &str) {
        error!("{transport_fallback}: {failure}");
        let message = match failure {
            // Server-side errors keep the original's "Error: " prefix
            Error::Application { message } => format!("Error: {message}"),
            // Local validation messages are already user-facing
            Error::Validation { message } => message.clone(),
            _ => transport_fallback.to_string(),
        };
        self.notifier.danger(message, Instant::now());
    }

    /// Reloads the full machine list from the server. On failure the store
    /// keeps its previous contents and a generic toast is shown.
    pub async fn reload(&mut self) {
        match self.gateway.list_machines().await {
            Ok(records) => self.store.replace_all(records),
            Err(failure) => {
                error!("Error loading machine data: {failure}");
                self.notifier
                    .danger("Error loading machine data", Instant::now());
            }
        }
    }

    /// Runs a server-side search and replaces the store with the result.
    pub async fn search(&mut self, query: &str) {
        match self.gateway.search(query).await {
            Ok(records) => self.store.replace_all(records),
            Err(failure) => {
                error!("Error searching machines: {failure}");
                self.notifier
                    .danger("Error searching machines", Instant::now());
            }
        }
    }

    /// Renders the machine table from the current store contents.
    #[must_use]
    pub fn render_table(&self) -> String {
        view::render_table(self.store.records())
    }

    /// Options for the update-PM target selector.
    #[must_use]
    pub fn update_pm_options(&self) -> Vec<SelectOption> {
        view::update_pm_options(self.store.records())
    }

    /// Options for the complete-PM target selector (period-holders only).
    #[must_use]
    pub fn complete_pm_options(&self) -> Vec<SelectOption> {
        view::complete_pm_options(self.store.records())
    }

    /// Submits the new-machine form; on success closes the modal, toasts,
    /// and reloads.
    pub async fn save_new_machine(&mut self) {
        match self.new_machine.submit(self.gateway.as_ref()).await {
            Ok(()) => {
                self.notifier
                    .success("Mesin berhasil ditambahkan", Instant::now());
                self.reload().await;
            }
            Err(failure) => self.report_failure(&failure, "Error saving machine"),
        }
    }

    /// Runs the edit modal's identifier auto-fill against the gateway.
    pub async fn autofill_edit(&mut self) {
        self.edit_machine.autofill(self.gateway.as_ref()).await;
    }

    /// Submits the edit-machine form.
    pub async fn save_edit_machine(&mut self) {
        match self.edit_machine.submit(self.gateway.as_ref()).await {
            Ok(()) => {
                self.notifier
                    .success("Mesin berhasil diupdate", Instant::now());
                self.reload().await;
            }
            Err(failure) => self.report_failure(&failure, "Error updating machine"),
        }
    }

    /// Submits the update-PM form.
    pub async fn save_update_pm(&mut self) {
        match self.update_pm.submit(self.gateway.as_ref()).await {
            Ok(()) => {
                self.notifier.success("PM berhasil diupdate", Instant::now());
                self.reload().await;
            }
            Err(failure) => self.report_failure(&failure, "Error updating PM"),
        }
    }

    /// Submits the complete-PM form.
    pub async fn save_complete_pm(&mut self) {
        match self.complete_pm.submit(self.gateway.as_ref()).await {
            Ok(()) => {
                self.notifier
                    .success("PM berhasil diselesaikan", Instant::now());
                self.reload().await;
            }
            Err(failure) => self.report_failure(&failure, "Error completing PM"),
        }
    }

    /// Opens the notes modal for the clicked identifier, pre-filling from
    /// the store.
    pub fn open_notes(&mut self, id_msn: &str) {
        if let Some(machine) = self.store.find(id_msn) {
            self.notes.open_for(machine);
        } else {
            let failure = Error::MachineNotFound {
                id: id_msn.to_string(),
            };
            self.notifier.danger(failure.to_string(), Instant::now());
        }
    }

    /// Submits the notes form.
    pub async fn save_notes(&mut self) {
        match self.notes.submit(self.gateway.as_ref()).await {
            Ok(()) => {
                self.notifier
                    .success("Notes berhasil disimpan", Instant::now());
                self.reload().await;
            }
            Err(failure) => self.report_failure(&failure, "Error saving notes"),
        }
    }

    /// Uploads the selected spreadsheet; the server's summary message
    /// becomes the success toast.
    pub async fn run_import(&mut self) {
        match self.import.submit(self.gateway.as_ref()).await {
            Ok(message) => {
                self.notifier.success(message, Instant::now());
                self.reload().await;
            }
            Err(failure) => self.report_failure(&failure, "Error importing data"),
        }
    }

    /// Starts the two-step confirmation for a destructive action.
    pub fn begin_delete(&mut self, action: DestructiveAction) {
        self.confirmation.begin(action);
    }

    /// Supplies the target identifier for the pending destructive action.
    pub fn provide_delete_target(&mut self, id_msn: &str) {
        self.confirmation.provide_target(id_msn);
    }

    /// Declines the pending destructive action.
    pub fn cancel_delete(&mut self) {
        self.confirmation.cancel();
    }

    /// Gives the final affirmative answer. Only a fully confirmed flow
    /// reaches the gateway.
    pub async fn confirm_delete(&mut self) {
        let Some((action, id_msn)) = self.confirmation.confirm() else {
            return;
        };
        match action {
            DestructiveAction::DeletePm => match self.gateway.delete_pm(&id_msn).await {
                Ok(()) => {
                    info!("Deleted PM data for {id_msn}");
                    self.notifier
                        .success("Data PM berhasil dihapus", Instant::now());
                    self.reload().await;
                }
                Err(failure) => self.report_failure(&failure, "Error deleting PM"),
            },
            DestructiveAction::DeleteAll => match self.gateway.delete_machine(&id_msn).await {
                Ok(()) => {
                    info!("Deleted machine {id_msn}");
                    self.notifier
                        .success("Semua data mesin berhasil dihapus", Instant::now());
                    self.reload().await;
                }
                Err(failure) => self.report_failure(&failure, "Error deleting machine"),
            },
        }
    }

    /// Downloads the PDF export and writes it next to the configured
    /// export path.
    pub async fn export_pdf(&mut self) {
        let outcome = async {
            let bytes = self.gateway.export_pdf().await?;
            tokio::fs::write(&self.export_path, bytes).await?;
            Ok::<(), Error>(())
        }
        .await;

        match outcome {
            Ok(()) => {
                let message = format!("PDF tersimpan di {}", self.export_path.display());
                self.notifier.success(message, Instant::now());
            }
            Err(failure) => self.report_failure(&failure, "Error exporting PDF"),
        }
    }
}
