//! Upstream history source
//!
//! Fetches the session feed and adapts its shape (single object or array,
//! most recent first) into validated records.

use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

use crate::{AppError, AppResult};
use crate::models::{Outcome, SessionRecord};

/// Anything that can hand back the raw upstream payload
#[async_trait]
pub trait HistorySource: Send + Sync {
    async fn fetch(&self) -> AppResult<Value>;
}

/// HTTP client for the upstream feed
pub struct HttpHistorySource {
    url: String,
    http_client: reqwest::Client,
}

impl HttpHistorySource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self {
            url: url.into(),
            http_client,
        })
    }
}

#[async_trait]
impl HistorySource for HttpHistorySource {
    async fn fetch(&self) -> AppResult<Value> {
        let response = self.http_client
            .get(&self.url)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::UpstreamUnreachable(format!(
                "{} returned {}",
                self.url, status
            )));
        }

        Ok(response.json().await?)
    }
}

/// Validated history, most recent record first
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    records: Vec<SessionRecord>,
    outcomes: Vec<Outcome>,
    next_session_id: i64,
}

impl History {
    /// Session the prediction follows on from
    pub fn current(&self) -> &SessionRecord {
        // non-empty by construction
        &self.records[0]
    }

    /// Outcomes in feed order (most recent first)
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    pub fn next_session_id(&self) -> i64 {
        self.next_session_id
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

/// A bare object is treated as a one-element collection
pub fn into_collection(payload: Value) -> Vec<Value> {
    match payload {
        Value::Array(items) => items,
        other => vec![other],
    }
}

/// Validate an upstream payload into a non-empty history.
///
/// Outcomes keep the feed's order; the predictor's window is the tail of
/// that sequence.
pub fn parse_history(payload: Value) -> AppResult<History> {
    let items = into_collection(payload);
    if items.is_empty() {
        return Err(AppError::DataUnavailable);
    }

    let records = items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            serde_json::from_value::<SessionRecord>(item)
                .map_err(|e| AppError::MalformedRecord(format!("record {}: {}", i, e)))
        })
        .collect::<AppResult<Vec<_>>>()?;

    let outcomes = records
        .iter()
        .enumerate()
        .map(|(i, r)| {
            r.outcome()
                .map_err(|e| AppError::MalformedRecord(format!("record {}: {}", i, e)))
        })
        .collect::<AppResult<Vec<_>>>()?;

    let current = &records[0];
    let next_session_id = current.next_session_id().ok_or_else(|| {
        AppError::MalformedRecord(format!("session id {} cannot be incremented", current.session_id))
    })?;

    Ok(History { records, outcomes, next_session_id })
}
