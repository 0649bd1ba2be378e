// src/core/image.rs
use base64::{Engine as _, engine::general_purpose::STANDARD};

/// Headshot bytes → base64 text (standard alphabet, padded).
pub fn to_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

pub fn from_base64(text: &str) -> Result<Vec<u8>, base64::DecodeError> {
    STANDARD.decode(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input() {
        assert_eq!(to_base64(&[]), "");
        assert_eq!(from_base64("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn known_values() {
        assert_eq!(to_base64(b"f"), "Zg==");
        assert_eq!(to_base64(b"fo"), "Zm8=");
        assert_eq!(to_base64(b"foo"), "Zm9v");
        // PNG magic
        assert_eq!(to_base64(&[0x89, b'P', b'N', b'G']), "iVBORw==");
    }

    #[test]
    fn every_byte_survives() {
        let all: Vec<u8> = (0..=255u8).collect();
        assert_eq!(from_base64(&to_base64(&all)).unwrap(), all);
    }

    #[test]
    fn rejects_garbage() {
        assert!(from_base64("not base64!").is_err());
    }
}
