//! HTTP service turning text into QR code images (PNG, JPEG or GIF).

pub mod api;
pub mod config;
pub mod encoder;
pub mod error;
pub mod qr;
pub mod validation;
