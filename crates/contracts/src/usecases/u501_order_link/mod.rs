//! Shareable order-form link and its QR code.

use crate::system::routing::{Route, ACCESS_PARAM};
use crate::usecases::common::UseCaseMetadata;
use qrcode::render::svg;
use qrcode::{EcLevel, QrCode};
use thiserror::Error;

pub const DEFAULT_ACCESS_TOKEN: &str = "12345";
pub const QR_SIZE_PX: u32 = 256;
pub const QR_FILE_NAME: &str = "QRCode.svg";

pub const MSG_GENERATED: &str = "QR code generated successfully!";
pub const MSG_GENERATE_FAILED: &str = "Failed to generate QR code.";
pub const MSG_DOWNLOADED: &str = "QR code downloaded successfully!";
pub const MSG_COPIED: &str = "Link copied to clipboard!";
pub const MSG_COPY_FAILED: &str = "Failed to copy the link.";
pub const REGENERATE_PROMPT: &str = "Are you sure you want to generate a new QR code?";

pub struct OrderLink;

impl UseCaseMetadata for OrderLink {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "order_link"
    }

    fn display_name() -> &'static str {
        "QR Code Generator"
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrderLinkError {
    #[error("QR encoding failed: {0}")]
    Encode(String),
}

pub fn order_form_url(origin: &str, token: &str) -> String {
    format!(
        "{}{}?{}={}",
        origin.trim_end_matches('/'),
        Route::OrderForm.path(),
        ACCESS_PARAM,
        urlencoding::encode(token)
    )
}

/// Encodes `data` with high error correction as an SVG document.
pub fn render_qr_svg(data: &str) -> Result<String, OrderLinkError> {
    let code = QrCode::with_error_correction_level(data.as_bytes(), EcLevel::H)
        .map_err(|e| OrderLinkError::Encode(e.to_string()))?;
    Ok(code
        .render::<svg::Color>()
        .min_dimensions(QR_SIZE_PX, QR_SIZE_PX)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build())
}

/// `data:` URL of an SVG, usable as `<img src>` and as a download href.
pub fn svg_data_url(svg: &str) -> String {
    format!("data:image/svg+xml;charset=utf-8,{}", urlencoding::encode(svg))
}

/// State of the QR page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLinkState {
    pub url: String,
    pub svg: Option<String>,
    pub message: Option<String>,
}

impl OrderLinkState {
    pub fn new(origin: &str) -> Self {
        let mut state = Self {
            url: order_form_url(origin, DEFAULT_ACCESS_TOKEN),
            svg: None,
            message: None,
        };
        let _ = state.generate();
        state
    }

    /// Encodes the current link. Failures end up in `message`; the previous
    /// image is dropped either way.
    pub fn generate(&mut self) -> Result<(), OrderLinkError> {
        self.generate_with(render_qr_svg)
    }

    pub fn generate_with<F>(&mut self, encode: F) -> Result<(), OrderLinkError>
    where
        F: FnOnce(&str) -> Result<String, OrderLinkError>,
    {
        match encode(&self.url) {
            Ok(svg) => {
                self.svg = Some(svg);
                self.message = Some(MSG_GENERATED.to_string());
                Ok(())
            }
            Err(e) => {
                self.svg = None;
                self.message = Some(MSG_GENERATE_FAILED.to_string());
                Err(e)
            }
        }
    }

    /// Confirmed "Generate New QR Code": a fresh token from the clock.
    pub fn regenerate(&mut self, origin: &str, now_millis: i64) -> Result<(), OrderLinkError> {
        self.url = order_form_url(origin, &now_millis.to_string());
        self.message = None;
        self.generate()
    }

    /// Download payload, if an image exists.
    pub fn download(&mut self) -> Option<String> {
        let svg = self.svg.clone()?;
        self.message = Some(MSG_DOWNLOADED.to_string());
        Some(svg)
    }

    pub fn copied(&mut self, ok: bool) {
        self.message = Some(if ok { MSG_COPIED } else { MSG_COPY_FAILED }.to_string());
    }
}
