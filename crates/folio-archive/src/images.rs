//! Decoding uploaded images back to bytes.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use folio_wizard::ImageRef;

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("Invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Image payload is empty")]
    Empty,
}

/// Decode the base64 payload of a data URI.
pub fn decode_data_uri(image: &ImageRef) -> Result<Vec<u8>, DecodeError> {
    let payload = image.payload().trim();
    if payload.is_empty() {
        return Err(DecodeError::Empty);
    }

    Ok(STANDARD.decode(payload)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_to_original_bytes() {
        let bytes: Vec<u8> = (0..=255).rev().collect();
        let image = ImageRef::from_bytes("image/jpeg", &bytes);

        assert_eq!(decode_data_uri(&image).unwrap(), bytes);
    }

    #[test]
    fn rejects_corrupt_payload() {
        let image = ImageRef::parse("data:image/png;base64,@@not-base64@@").unwrap();

        assert!(matches!(decode_data_uri(&image), Err(DecodeError::Base64(_))));
    }

    #[test]
    fn rejects_empty_payload() {
        let image = ImageRef::parse("data:image/png;base64,").unwrap();

        assert!(matches!(decode_data_uri(&image), Err(DecodeError::Empty)));
    }
}
