// src/qr.rs
use std::io::Cursor;

use image::{DynamicImage, ImageBuffer, Rgb, RgbImage};

use crate::encoder::{BitMatrix, MatrixEncoder, QrCodeEncoder};
use crate::error::RenderError;
use crate::validation::QrRequest;

const DARK: Rgb<u8> = Rgb([0, 0, 0]);
const LIGHT: Rgb<u8> = Rgb([255, 255, 255]);

/// Serialized image ready to be sent to the client.
#[derive(Debug, Clone)]
pub struct QrImageResult {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
}

#[derive(Debug, Clone)]
pub struct QrImageRenderer<E = QrCodeEncoder> {
    encoder: E,
}

impl QrImageRenderer<QrCodeEncoder> {
    pub fn new() -> Self {
        Self::with_encoder(QrCodeEncoder::new())
    }
}

impl<E: MatrixEncoder> QrImageRenderer<E> {
    pub fn with_encoder(encoder: E) -> Self {
        Self { encoder }
    }

    /// Encode the request contents and serialize the bitmap in the requested format.
    pub fn render(&self, request: &QrRequest) -> Result<QrImageResult, RenderError> {
        let matrix = self.encoder.encode(
            request.contents(),
            request.size(),
            request.correction_level(),
        )?;

        let img = to_image(&matrix);

        let output_type = request.output_type();
        let mut bytes = Vec::new();
        DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut bytes), output_type.image_format())?;

        log::debug!(
            "Rendered {}x{} {} ({} bytes)",
            matrix.width(),
            matrix.height(),
            output_type.as_str(),
            bytes.len()
        );

        Ok(QrImageResult {
            bytes,
            content_type: output_type.content_type(),
        })
    }
}

/// Paint dark modules black and light modules white, one pixel per matrix cell.
fn to_image(matrix: &BitMatrix) -> RgbImage {
    ImageBuffer::from_fn(matrix.width() as u32, matrix.height() as u32, |x, y| {
        if matrix.get(x as usize, y as usize) {
            DARK
        } else {
            LIGHT
        }
    })
}
