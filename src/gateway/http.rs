//! HTTP gateway implementation backed by `reqwest`.
//!
//! One client, one base URL, no retries. Mutating endpoints may answer with
//! a 4xx status and a JSON body (`{success: false, error: "..."}`); the body
//! is parsed regardless of status so the server's message reaches the user.

use crate::{
    entities::{MachineFields, MachineRecord},
    errors::Result,
    gateway::{MachineGateway, MutationResponse},
};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

/// Gateway speaking JSON over HTTP to the PM API server.
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGateway {
    /// Builds a gateway for the given base URL with a per-request timeout.
    #[must_use]
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn send_mutation(&self, request: reqwest::RequestBuilder) -> Result<Option<String>> {
        let response = request.send().await?;
        let outcome: MutationResponse = response.json().await?;
        outcome.into_result()
    }
}

#[async_trait]
impl MachineGateway for HttpGateway {
    async fn list_machines(&self) -> Result<Vec<MachineRecord>> {
        let machines = self
            .client
            .get(self.url("/api/machines"))
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<MachineRecord>>()
            .await?;
        debug!("Fetched {} machine records", machines.len());
        Ok(machines)
    }

    async fn get_machine(&self, id_msn: &str) -> Result<Option<MachineRecord>> {
        let response = self
            .client
            .get(self.url(&format!("/api/machine/{id_msn}")))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let machine = response.error_for_status()?.json::<MachineRecord>().await?;
        Ok(Some(machine))
    }

    async fn search(&self, query: &str) -> Result<Vec<MachineRecord>> {
        let machines = self
            .client
            .get(self.url("/api/search"))
            .query(&[("query", query)])
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<MachineRecord>>()
            .await?;
        debug!("Search '{query}' matched {} records", machines.len());
        Ok(machines)
    }

    async fn create_machine(&self, fields: &MachineFields) -> Result<()> {
        self.send_mutation(self.client.post(self.url("/api/machine/new")).json(fields))
            .await
            .map(|_| ())
    }

    async fn edit_machine(&self, fields: &MachineFields) -> Result<()> {
        self.send_mutation(self.client.put(self.url("/api/machine/edit")).json(fields))
            .await
            .map(|_| ())
    }

    async fn update_pm(&self, id_msn: &str, periode_pm: &str) -> Result<()> {
        let body = json!({ "id_msn": id_msn, "periode_pm": periode_pm });
        self.send_mutation(
            self.client
                .put(self.url("/api/machine/update-pm"))
                .json(&body),
        )
        .await
        .map(|_| ())
    }

    async fn complete_pm(&self, id_msn: &str, tgl_selesai_pm: &str) -> Result<()> {
        let body = json!({ "id_msn": id_msn, "tgl_selesai_pm": tgl_selesai_pm });
        self.send_mutation(
            self.client
                .put(self.url("/api/machine/complete-pm"))
                .json(&body),
        )
        .await
        .map(|_| ())
    }

    async fn set_notes(&self, id_msn: &str, notes: &str) -> Result<()> {
        let body = json!({ "id_msn": id_msn, "notes": notes });
        self.send_mutation(self.client.put(self.url("/api/machine/notes")).json(&body))
            .await
            .map(|_| ())
    }

    async fn delete_pm(&self, id_msn: &str) -> Result<()> {
        let body = json!({ "id_msn": id_msn });
        self.send_mutation(
            self.client
                .put(self.url("/api/machine/delete-pm"))
                .json(&body),
        )
        .await
        .map(|_| ())
    }

    async fn delete_machine(&self, id_msn: &str) -> Result<()> {
        let body = json!({ "id_msn": id_msn });
        self.send_mutation(
            self.client
                .delete(self.url("/api/machine/delete-all"))
                .json(&body),
        )
        .await
        .map(|_| ())
    }

    async fn import_spreadsheet(&self, filename: &str, bytes: Vec<u8>) -> Result<String> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(filename.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);

        let message = self
            .send_mutation(self.client.post(self.url("/import/excel")).multipart(form))
            .await?;
        Ok(message.unwrap_or_else(|| "Import selesai".to_string()))
    }

    async fn export_pdf(&self) -> Result<Vec<u8>> {
        let bytes = self
            .client
            .get(self.url("/export/pdf"))
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        Ok(bytes.to_vec())
    }
}
