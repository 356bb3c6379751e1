//! SVG QR renderer returning base64 `data:` URLs

use base64::{engine::general_purpose::STANDARD, Engine as _};
use qrcode::render::svg;
use qrcode::QrCode;

use qp_core::services::issuance::QrRendererTrait;

use crate::InfrastructureError;

const DATA_URL_PREFIX: &str = "data:image/svg+xml;base64,";

/// Renders QR codes as SVG images
#[derive(Debug, Clone)]
pub struct SvgQrRenderer {
    /// Minimum edge length of the image in pixels
    min_size: u32,
}

impl Default for SvgQrRenderer {
    fn default() -> Self {
        Self { min_size: 240 }
    }
}

impl SvgQrRenderer {
    pub fn new(min_size: u32) -> Self {
        Self { min_size }
    }

    /// Encode `content` into an SVG document
    pub fn render_svg(&self, content: &str) -> Result<String, InfrastructureError> {
        let code = QrCode::new(content.as_bytes())
            .map_err(|e| InfrastructureError::Qr(e.to_string()))?;

        Ok(code
            .render::<svg::Color>()
            .min_dimensions(self.min_size, self.min_size)
            .build())
    }

    /// Encode `content` and wrap the SVG in a `data:` URL
    pub fn render_data_url(&self, content: &str) -> Result<String, InfrastructureError> {
        let svg = self.render_svg(content)?;
        Ok(format!("{}{}", DATA_URL_PREFIX, STANDARD.encode(svg)))
    }
}

impl QrRendererTrait for SvgQrRenderer {
    fn render(&self, content: &str) -> Result<String, String> {
        self.render_data_url(content).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_produces_svg_data_url() {
        let renderer = SvgQrRenderer::default();
        let url = renderer
            .render("https://gate.example.com/verify?token=5d1f0c3e-8a4b-4c52-9f57-0e2f6b7d9a10")
            .unwrap();

        let encoded = url.strip_prefix(DATA_URL_PREFIX).unwrap();
        let svg = String::from_utf8(STANDARD.decode(encoded).unwrap()).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_same_content_renders_identically() {
        let renderer = SvgQrRenderer::new(120);
        assert_eq!(
            renderer.render_svg("abc").unwrap(),
            renderer.render_svg("abc").unwrap()
        );
    }

    #[test]
    fn test_oversized_content_fails() {
        let renderer = SvgQrRenderer::default();
        let huge = "x".repeat(8000);
        let result = renderer.render(&huge);
        assert!(result.unwrap_err().contains("QR encoding error"));
    }
}
