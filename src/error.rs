use serde::Serialize;
use thiserror::Error;

/// Client-side rejection of a `/api/qrcode` request.
///
/// The `Display` text of every variant is the message returned to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Contents cannot be null or blank")]
    EmptyContents,

    #[error("Image size must be between 150 and 350 pixels")]
    SizeOutOfRange,

    #[error("Permitted error correction levels are L, M, Q, H")]
    InvalidCorrectionLevel,

    #[error("Only png, jpeg and gif image types are supported")]
    InvalidOutputType,
}

/// The matrix encoder could not produce a symbol for the given input.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct EncodeError(pub String);

/// Server-side failure while producing an image for a valid request.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("QR encoding failed: {0}")]
    EncodingFailed(#[from] EncodeError),

    #[error("Image serialization failed: {0}")]
    SerializationFailed(#[from] image::ImageError),
}

/// JSON body of every non-200 response.
#[derive(Debug, Serialize)]
pub struct ErrorMessage {
    pub message: String,
}

impl ErrorMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<ValidationError> for ErrorMessage {
    fn from(error: ValidationError) -> Self {
        Self::new(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::EmptyContents.to_string(),
            "Contents cannot be null or blank"
        );
        assert_eq!(
            ValidationError::SizeOutOfRange.to_string(),
            "Image size must be between 150 and 350 pixels"
        );
        assert_eq!(
            ValidationError::InvalidCorrectionLevel.to_string(),
            "Permitted error correction levels are L, M, Q, H"
        );
        assert_eq!(
            ValidationError::InvalidOutputType.to_string(),
            "Only png, jpeg and gif image types are supported"
        );
    }

    #[test]
    fn test_error_message_body() {
        let body = serde_json::to_string(&ErrorMessage::from(ValidationError::SizeOutOfRange))
            .unwrap();
        assert_eq!(
            body,
            r#"{"message":"Image size must be between 150 and 350 pixels"}"#
        );
    }
}
