//! Client for the external event-logging service
//!
//! The service exposes a single collection at `{base}/qr-events`:
//! `GET` lists recorded events, `POST` appends one.

pub mod client;

pub use client::HttpEventLogClient;

#[cfg(test)]
mod tests;
