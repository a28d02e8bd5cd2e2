//! Errors raised while replacing a plant image.

use thiserror::Error;

use crate::i18n::keys;

/// Recoverable failures of the image replacement flow.
///
/// These never propagate past the card; each one is surfaced to the user as a
/// destructive toast built from its title and description keys.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ImageIntakeError {
    #[error("invalid file type: {mime:?} is not an image")]
    InvalidFileType { mime: Option<String> },
    #[error("error reading file: {reason}")]
    FileRead { reason: String },
}

impl ImageIntakeError {
    pub fn title_key(&self) -> &'static str {
        match self {
            Self::InvalidFileType { .. } => keys::INVALID_FILE_TYPE_TITLE,
            Self::FileRead { .. } => keys::ERROR_READING_FILE_TITLE,
        }
    }

    pub fn description_key(&self) -> &'static str {
        match self {
            Self::InvalidFileType { .. } => keys::INVALID_FILE_TYPE_DESCRIPTION,
            Self::FileRead { .. } => keys::ERROR_READING_FILE_DESCRIPTION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_each_variant_to_its_message_keys() {
        let invalid = ImageIntakeError::InvalidFileType { mime: Some("text/plain".into()) };
        assert_eq!(invalid.title_key(), "invalid_file_type_title");
        assert_eq!(invalid.description_key(), "invalid_file_type_description_image");

        let read = ImageIntakeError::FileRead { reason: "gone".into() };
        assert_eq!(read.title_key(), "error_reading_file_title");
        assert_eq!(read.description_key(), "error_reading_file_description");
        assert_eq!(read.to_string(), "error reading file: gone");
    }
}
