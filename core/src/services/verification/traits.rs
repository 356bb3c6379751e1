//! Traits for event-log integration

use async_trait::async_trait;

use crate::domain::value_objects::qr_event::QrEvent;

/// Trait for the external event-logging service
#[async_trait]
pub trait EventLogTrait: Send + Sync {
    /// Fetch the current event listing and return how many events it holds
    async fn list_events(&self) -> Result<usize, String>;
    /// Record a scan event
    async fn submit_event(&self, event: &QrEvent) -> Result<(), String>;
}
