use qrcode::{Color, EcLevel, QrCode};

use crate::error::EncodeError;
use crate::validation::CorrectionLevel;

/// Modules of light border required around a QR symbol.
pub const QUIET_ZONE: usize = 4;

/// Two-dimensional grid of dark (`true`) and light (`false`) pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    width: usize,
    height: usize,
    bits: Vec<bool>,
}

impl BitMatrix {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            bits: vec![false; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.bits[y * self.width + x]
    }

    #[cfg(test)]
    pub(crate) fn set(&mut self, x: usize, y: usize) {
        self.bits[y * self.width + x] = true;
    }

    /// Mark a `size`×`size` square whose top-left corner is at `(left, top)`.
    fn fill_square(&mut self, left: usize, top: usize, size: usize) {
        for y in top..top + size {
            let row = y * self.width;
            self.bits[row + left..row + left + size].fill(true);
        }
    }
}

/// Anything able to turn text into a scaled QR module grid.
pub trait MatrixEncoder {
    fn encode(
        &self,
        contents: &str,
        dimension: u32,
        level: CorrectionLevel,
    ) -> Result<BitMatrix, EncodeError>;
}

/// Default encoder backed by the `qrcode` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct QrCodeEncoder;

impl QrCodeEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl MatrixEncoder for QrCodeEncoder {
    fn encode(
        &self,
        contents: &str,
        dimension: u32,
        level: CorrectionLevel,
    ) -> Result<BitMatrix, EncodeError> {
        let code = QrCode::with_error_correction_level(contents.as_bytes(), ec_level(level))
            .map_err(|e| EncodeError(e.to_string()))?;

        let symbol_width = code.width();
        let padded_width = symbol_width + 2 * QUIET_ZONE;

        // Never crop: a symbol wider than the canvas gets one pixel per module.
        let output = (dimension as usize).max(padded_width);
        let scale = output / padded_width;
        let padding = (output - symbol_width * scale) / 2;

        let mut matrix = BitMatrix::new(output, output);
        for (i, color) in code.to_colors().into_iter().enumerate() {
            if color == Color::Dark {
                let x = i % symbol_width;
                let y = i / symbol_width;
                matrix.fill_square(padding + x * scale, padding + y * scale, scale);
            }
        }

        log::debug!(
            "Encoded {} bytes as {}x{} symbol, scale {} on {}px canvas",
            contents.len(),
            symbol_width,
            symbol_width,
            scale,
            output
        );

        Ok(matrix)
    }
}

fn ec_level(level: CorrectionLevel) -> EcLevel {
    match level {
        CorrectionLevel::L => EcLevel::L,
        CorrectionLevel::M => EcLevel::M,
        CorrectionLevel::Q => EcLevel::Q,
        CorrectionLevel::H => EcLevel::H,
    }
}
