//! Value objects exchanged with external collaborators.

pub mod qr_event;

pub use qr_event::{QrEvent, QrEventClient, QrEventData};
