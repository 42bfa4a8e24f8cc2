//! Shared test utilities for `pm-console`.
//!
//! Provides sample machine records and an in-memory [`FakeGateway`] that
//! mimics the PM API server's observable behavior (sequence numbering,
//! status transitions, search fields) while recording every call so tests
//! can assert exactly what reached the wire.

use crate::{
    app::App,
    entities::{MachineFields, MachineRecord},
    errors::{Error, Result},
    gateway::MachineGateway,
    store::MachineStore,
};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// A machine record with sensible defaults for tests.
#[must_use]
pub fn sample_record(id_msn: &str) -> MachineRecord {
    MachineRecord {
        no: 1,
        id_msn: id_msn.to_string(),
        alamat: "Jl. Merdeka 1".to_string(),
        pengelola: "Dept A".to_string(),
        periode_pm: "2026-08".to_string(),
        tgl_selesai_pm: String::new(),
        status: "Outstanding".to_string(),
        teknisi: "Budi".to_string(),
        notes: String::new(),
    }
}

/// Three machines covering the interesting PM states: one scheduled, one
/// completed, one with no PM period at all.
#[must_use]
pub fn sample_records() -> Vec<MachineRecord> {
    vec![
        MachineRecord {
            no: 1,
            id_msn: "M-001".to_string(),
            alamat: "Jl. Merdeka 1".to_string(),
            pengelola: "Dept A".to_string(),
            periode_pm: "2026-08".to_string(),
            tgl_selesai_pm: String::new(),
            status: "Outstanding".to_string(),
            teknisi: "Budi".to_string(),
            notes: String::new(),
        },
        MachineRecord {
            no: 2,
            id_msn: "M-002".to_string(),
            alamat: "Jl. Merdeka 2".to_string(),
            pengelola: "Dept B".to_string(),
            periode_pm: "2026-07".to_string(),
            tgl_selesai_pm: "2026-07-15".to_string(),
            status: "Done".to_string(),
            teknisi: "Sari".to_string(),
            notes: "ganti oli".to_string(),
        },
        MachineRecord {
            no: 3,
            id_msn: "M-003".to_string(),
            alamat: "Jl. Merdeka 3".to_string(),
            pengelola: "Dept C".to_string(),
            periode_pm: String::new(),
            tgl_selesai_pm: String::new(),
            status: "Outstanding".to_string(),
            teknisi: "Andi".to_string(),
            notes: String::new(),
        },
    ]
}

/// A store pre-loaded with the given records.
#[must_use]
pub fn store_with(records: Vec<MachineRecord>) -> MachineStore {
    let mut store = MachineStore::new();
    store.replace_all(records);
    store
}

/// An [`App`] wired to a fresh [`FakeGateway`] seeded with `records`.
/// The gateway handle is returned alongside so tests can inspect calls.
#[must_use]
pub fn app_with(records: Vec<MachineRecord>) -> (App, Arc<FakeGateway>) {
    let gateway = Arc::new(FakeGateway::with_records(records));
    let app = App::new(
        Arc::clone(&gateway) as Arc<dyn MachineGateway>,
        std::env::temp_dir().join("pm_console_test_export.pdf"),
    );
    (app, gateway)
}

enum FailMode {
    Application(String),
    Transport,
}

/// In-memory stand-in for the PM API server.
pub struct FakeGateway {
    records: Mutex<Vec<MachineRecord>>,
    calls: Mutex<Vec<String>>,
    fail_next: Mutex<Option<FailMode>>,
}

impl FakeGateway {
    /// Gateway over an empty fleet.
    #[must_use]
    pub fn empty() -> Self {
        Self::with_records(Vec::new())
    }

    /// Gateway pre-seeded with records.
    #[must_use]
    pub fn with_records(records: Vec<MachineRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            calls: Mutex::new(Vec::new()),
            fail_next: Mutex::new(None),
        }
    }

    /// Every call made so far, in order, as compact `"name args"` strings.
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }

    /// Snapshot of the server-side records.
    #[must_use]
    pub fn records_snapshot(&self) -> Vec<MachineRecord> {
        self.records.lock().expect("records lock").clone()
    }

    /// Makes the next call fail as an application error with this message.
    pub fn fail_next_with(&self, message: &str) {
        *self.fail_next.lock().expect("fail lock") =
            Some(FailMode::Application(message.to_string()));
    }

    /// Makes the next call fail at the transport level.
    pub fn fail_transport_next(&self) {
        *self.fail_next.lock().expect("fail lock") = Some(FailMode::Transport);
    }

    fn record_call(&self, call: String) {
        self.calls.lock().expect("calls lock").push(call);
    }

    fn take_failure(&self) -> Result<()> {
        match self.fail_next.lock().expect("fail lock").take() {
            Some(FailMode::Application(message)) => Err(Error::Application { message }),
            Some(FailMode::Transport) => Err(Error::Transport {
                message: "connection refused".to_string(),
            }),
            None => Ok(()),
        }
    }

    fn next_no(records: &[MachineRecord]) -> i64 {
        records.iter().map(|record| record.no).max().unwrap_or(0) + 1
    }
}

#[async_trait]
impl MachineGateway for FakeGateway {
    async fn list_machines(&self) -> Result<Vec<MachineRecord>> {
        self.record_call("list_machines".to_string());
        self.take_failure()?;
        let mut records = self.records.lock().expect("records lock").clone();
        records.sort_by_key(|record| record.no);
        Ok(records)
    }

    async fn get_machine(&self, id_msn: &str) -> Result<Option<MachineRecord>> {
        self.record_call(format!("get_machine {id_msn}"));
        self.take_failure()?;
        let records = self.records.lock().expect("records lock");
        Ok(records.iter().find(|record| record.id_msn == id_msn).cloned())
    }

    async fn search(&self, query: &str) -> Result<Vec<MachineRecord>> {
        self.record_call(format!("search {query}"));
        self.take_failure()?;
        let records = self.records.lock().expect("records lock");
        if query.is_empty() {
            return Ok(records.clone());
        }
        let needle = query.to_lowercase();
        Ok(records
            .iter()
            .filter(|record| {
                record.pengelola.to_lowercase().contains(&needle)
                    || record.periode_pm.to_lowercase().contains(&needle)
                    || record.status.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect())
    }

    async fn create_machine(&self, fields: &MachineFields) -> Result<()> {
        self.record_call(format!(
            "create_machine {}|{}|{}|{}",
            fields.id_msn, fields.alamat, fields.pengelola, fields.teknisi
        ));
        self.take_failure()?;
        let mut records = self.records.lock().expect("records lock");
        let no = Self::next_no(&records);
        records.push(MachineRecord {
            no,
            id_msn: fields.id_msn.clone(),
            alamat: fields.alamat.clone(),
            pengelola: fields.pengelola.clone(),
            periode_pm: String::new(),
            tgl_selesai_pm: String::new(),
            status: "Outstanding".to_string(),
            teknisi: fields.teknisi.clone(),
            notes: String::new(),
        });
        Ok(())
    }

    async fn edit_machine(&self, fields: &MachineFields) -> Result<()> {
        self.record_call(format!(
            "edit_machine {}|{}|{}|{}",
            fields.id_msn, fields.alamat, fields.pengelola, fields.teknisi
        ));
        self.take_failure()?;
        let mut records = self.records.lock().expect("records lock");
        let Some(record) = records
            .iter_mut()
            .find(|record| record.id_msn == fields.id_msn)
        else {
            return Err(Error::Application {
                message: "Machine not found".to_string(),
            });
        };
        record.alamat = fields.alamat.clone();
        record.pengelola = fields.pengelola.clone();
        record.teknisi = fields.teknisi.clone();
        Ok(())
    }

    async fn update_pm(&self, id_msn: &str, periode_pm: &str) -> Result<()> {
        self.record_call(format!("update_pm {id_msn}|{periode_pm}"));
        self.take_failure()?;
        let mut records = self.records.lock().expect("records lock");
        let Some(record) = records.iter_mut().find(|record| record.id_msn == id_msn) else {
            return Err(Error::Application {
                message: "Machine not found".to_string(),
            });
        };
        record.periode_pm = periode_pm.to_string();
        record.status = "Outstanding".to_string();
        Ok(())
    }

    async fn complete_pm(&self, id_msn: &str, tgl_selesai_pm: &str) -> Result<()> {
        self.record_call(format!("complete_pm {id_msn}|{tgl_selesai_pm}"));
        self.take_failure()?;
        let mut records = self.records.lock().expect("records lock");
        let Some(record) = records.iter_mut().find(|record| record.id_msn == id_msn) else {
            return Err(Error::Application {
                message: "Machine not found".to_string(),
            });
        };
        record.tgl_selesai_pm = tgl_selesai_pm.to_string();
        record.status = "Done".to_string();
        Ok(())
    }

    async fn set_notes(&self, id_msn: &str, notes: &str) -> Result<()> {
        self.record_call(format!("set_notes {id_msn}|{notes}"));
        self.take_failure()?;
        let mut records = self.records.lock().expect("records lock");
        let Some(record) = records.iter_mut().find(|record| record.id_msn == id_msn) else {
            return Err(Error::Application {
                message: "Machine not found".to_string(),
            });
        };
        record.notes = notes.to_string();
        Ok(())
    }

    async fn delete_pm(&self, id_msn: &str) -> Result<()> {
        self.record_call(format!("delete_pm {id_msn}"));
        self.take_failure()?;
        let mut records = self.records.lock().expect("records lock");
        let Some(record) = records.iter_mut().find(|record| record.id_msn == id_msn) else {
            return Err(Error::Application {
                message: "Machine not found".to_string(),
            });
        };
        record.periode_pm.clear();
        record.tgl_selesai_pm.clear();
        record.status = "Outstanding".to_string();
        Ok(())
    }

    async fn delete_machine(&self, id_msn: &str) -> Result<()> {
        self.record_call(format!("delete_machine {id_msn}"));
        self.take_failure()?;
        let mut records = self.records.lock().expect("records lock");
        let before = records.len();
        records.retain(|record| record.id_msn != id_msn);
        if records.len() == before {
            return Err(Error::Application {
                message: "Machine not found".to_string(),
            });
        }
        Ok(())
    }

    async fn import_spreadsheet(&self, filename: &str, bytes: Vec<u8>) -> Result<String> {
        self.record_call(format!("import_spreadsheet {filename}|{} bytes", bytes.len()));
        self.take_failure()?;
        // Canned summary; the real parsing is server-side
        Ok("Successfully imported 3 records".to_string())
    }

    async fn export_pdf(&self) -> Result<Vec<u8>> {
        self.record_call("export_pdf".to_string());
        self.take_failure()?;
        Ok(b"%PDF-1.4 fake export".to_vec())
    }
}
