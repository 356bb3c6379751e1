//! QR code rendering

pub mod svg;

pub use svg::SvgQrRenderer;
