//! HTTP/JSON implementation of `RemoteStore`.
//!
//! # Responsibility
//! - Map store operations onto the memo REST endpoints under one base URL.
//! - Translate reqwest errors and non-2xx statuses into `RemoteFailure`.
//!
//! # Invariants
//! - List endpoints coerce non-array bodies to empty lists.
//! - Paths are joined with exactly one `/` regardless of base suffix.

use super::{coerce_sequence, RemoteFailure, RemoteResult, RemoteStore};
use crate::config::AppConfig;
use crate::model::memo::{Category, CategoryId, Memo, MemoDraft, MemoId, NewMemo};
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;

/// Remote store backed by the memo REST API.
#[derive(Debug, Clone)]
pub struct HttpRemoteStore {
    client: Client,
    api_base: String,
}

impl HttpRemoteStore {
    /// Builds a store from application config.
    ///
    /// # Errors
    /// - Returns `RemoteFailure::Transport` when the HTTP client cannot be
    ///   constructed (TLS backend setup).
    pub fn from_config(config: &AppConfig) -> RemoteResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|err| RemoteFailure::Transport(format!("http client error: {err}")))?;
        Ok(Self::with_client(client, config.api_base.as_str()))
    }

    /// Builds a store around an existing client.
    pub fn with_client(client: Client, api_base: &str) -> Self {
        Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }

    async fn send(&self, request: RequestBuilder, op: &'static str) -> RemoteResult<Response> {
        let response = request
            .send()
            .await
            .map_err(|err| RemoteFailure::Transport(err.to_string()))?;
        let status = response.status();
        debug!(
            "event=remote_call module=remote op={} status_code={}",
            op,
            status.as_u16()
        );
        if !status.is_success() {
            return Err(RemoteFailure::Status(status.as_u16()));
        }
        Ok(response)
    }

    async fn send_json(&self, request: RequestBuilder, op: &'static str) -> RemoteResult<Value> {
        let response = self.send(request, op).await?;
        response
            .json::<Value>()
            .await
            .map_err(|err| RemoteFailure::Decode(err.to_string()))
    }
}

#[async_trait]
impl RemoteStore for HttpRemoteStore {
    async fn list_categories(&self) -> RemoteResult<Vec<Category>> {
        let request = self.client.get(self.url("category"));
        let body = self.send_json(request, "list_categories").await?;
        coerce_sequence(body)
    }

    async fn list_memos(&self, category_id: CategoryId) -> RemoteResult<Vec<Memo>> {
        let request = self
            .client
            .get(self.url("memo"))
            .query(&[("category_id", category_id.0)]);
        let body = self.send_json(request, "list_memos").await?;
        coerce_sequence(body)
    }

    async fn get_memo(&self, memo_id: MemoId) -> RemoteResult<Memo> {
        let request = self.client.get(self.url(&format!("memo/{memo_id}")));
        let body = self.send_json(request, "get_memo").await?;
        Ok(serde_json::from_value(body)?)
    }

    async fn create_memo(&self, payload: &NewMemo) -> RemoteResult<Memo> {
        let request = self.client.post(self.url("memo")).json(payload);
        let body = self.send_json(request, "create_memo").await?;
        Ok(serde_json::from_value(body)?)
    }

    async fn update_memo(&self, memo_id: MemoId, payload: &MemoDraft) -> RemoteResult<()> {
        let request = self
            .client
            .put(self.url(&format!("memo/{memo_id}")))
            .json(payload);
        self.send(request, "update_memo").await.map(|_| ())
    }

    async fn delete_memo(&self, memo_id: MemoId) -> RemoteResult<()> {
        let request = self.client.delete(self.url(&format!("memo/{memo_id}")));
        self.send(request, "delete_memo").await.map(|_| ())
    }
}
