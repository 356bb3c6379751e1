//! reqwest implementation of the event log port

use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use qp_core::domain::value_objects::qr_event::QrEvent;
use qp_core::services::verification::EventLogTrait;
use qp_shared::config::EventLogConfig;

use crate::InfrastructureError;

/// HTTP client for the event-logging service
#[derive(Debug, Clone)]
pub struct HttpEventLogClient {
    client: reqwest::Client,
    events_url: String,
}

impl HttpEventLogClient {
    /// Build a client with the configured request timeout
    pub fn new(config: &EventLogConfig) -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            events_url: config.events_url(),
        })
    }

    /// Collection endpoint this client talks to
    pub fn events_url(&self) -> &str {
        &self.events_url
    }

    /// Fetch the event listing and count its entries
    ///
    /// Accepts a bare JSON array, an object wrapping the array in `data`, or
    /// an object carrying a numeric `count`.
    pub async fn fetch_event_count(&self) -> Result<usize, InfrastructureError> {
        let response = self.client.get(&self.events_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(InfrastructureError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| InfrastructureError::Decode(e.to_string()))?;

        count_events(&body).ok_or_else(|| {
            InfrastructureError::Decode("expected an event array or a count".to_string())
        })
    }

    /// Append a scan event to the log
    pub async fn post_event(&self, event: &QrEvent) -> Result<(), InfrastructureError> {
        let response = self
            .client
            .post(&self.events_url)
            .json(event)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Event log rejected scan event");
            return Err(InfrastructureError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        debug!(status = status.as_u16(), "Scan event recorded");
        Ok(())
    }
}

fn count_events(body: &Value) -> Option<usize> {
    match body {
        Value::Array(items) => Some(items.len()),
        Value::Object(map) => match (map.get("data"), map.get("count")) {
            (Some(Value::Array(items)), _) => Some(items.len()),
            (_, Some(count)) => count.as_u64().map(|n| n as usize),
            _ => None,
        },
        _ => None,
    }
}

#[async_trait]
impl EventLogTrait for HttpEventLogClient {
    async fn list_events(&self) -> Result<usize, String> {
        self.fetch_event_count().await.map_err(|e| e.to_string())
    }

    async fn submit_event(&self, event: &QrEvent) -> Result<(), String> {
        self.post_event(event).await.map_err(|e| e.to_string())
    }
}
