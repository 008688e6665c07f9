use crate::error::ValidationError;

pub const MIN_SIZE: i32 = 150;
pub const MAX_SIZE: i32 = 350;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputType {
    Png,
    Jpeg,
    Gif,
}

impl OutputType {
    pub const ALL: [OutputType; 3] = [OutputType::Png, OutputType::Jpeg, OutputType::Gif];

    /// Case-insensitive match against `png`, `jpeg` and `gif`.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(value))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputType::Png => "png",
            OutputType::Jpeg => "jpeg",
            OutputType::Gif => "gif",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            OutputType::Png => "image/png",
            OutputType::Jpeg => "image/jpeg",
            OutputType::Gif => "image/gif",
        }
    }

    pub fn image_format(&self) -> image::ImageFormat {
        match self {
            OutputType::Png => image::ImageFormat::Png,
            OutputType::Jpeg => image::ImageFormat::Jpeg,
            OutputType::Gif => image::ImageFormat::Gif,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorrectionLevel {
    L,
    M,
    Q,
    H,
}

impl CorrectionLevel {
    pub const ALL: [CorrectionLevel; 4] = [
        CorrectionLevel::L,
        CorrectionLevel::M,
        CorrectionLevel::Q,
        CorrectionLevel::H,
    ];

    /// Exact, case-sensitive match of a single letter.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "L" => Some(CorrectionLevel::L),
            "M" => Some(CorrectionLevel::M),
            "Q" => Some(CorrectionLevel::Q),
            "H" => Some(CorrectionLevel::H),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CorrectionLevel::L => "L",
            CorrectionLevel::M => "M",
            CorrectionLevel::Q => "Q",
            CorrectionLevel::H => "H",
        }
    }
}

/// Whitespace as counted by the blank check: ASCII controls `\t`..`\r` and
/// `\u{1C}`..`\u{1F}`, plus Unicode separators except the non-breaking ones.
fn is_separator(c: char) -> bool {
    match c {
        '\u{1C}'..='\u{1F}' => true,
        '\u{85}' | '\u{A0}' | '\u{2007}' | '\u{202F}' => false,
        _ => c.is_whitespace(),
    }
}

fn is_blank(contents: &str) -> bool {
    contents.chars().all(is_separator)
}

/// A request that has passed every check. Only [`validate`] builds one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrRequest {
    contents: String,
    size: u32,
    output_type: OutputType,
    correction_level: CorrectionLevel,
}

impl QrRequest {
    pub fn contents(&self) -> &str {
        &self.contents
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn output_type(&self) -> OutputType {
        self.output_type
    }

    pub fn correction_level(&self) -> CorrectionLevel {
        self.correction_level
    }
}

/// Validate raw request parameters in order: contents, size, correction, type.
/// The first failing check decides the error.
pub fn validate(
    contents: &str,
    size: i32,
    output_type: &str,
    correction_level: &str,
) -> Result<QrRequest, ValidationError> {
    if is_blank(contents) {
        return Err(ValidationError::EmptyContents);
    }

    if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
        return Err(ValidationError::SizeOutOfRange);
    }

    let correction_level =
        CorrectionLevel::parse(correction_level).ok_or(ValidationError::InvalidCorrectionLevel)?;

    let output_type = OutputType::parse(output_type).ok_or(ValidationError::InvalidOutputType)?;

    Ok(QrRequest {
        contents: contents.to_string(),
        size: size as u32,
        output_type,
        correction_level,
    })
}
