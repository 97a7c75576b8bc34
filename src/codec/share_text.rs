//! Hexadecimal text form of raw shares

use zeroize::Zeroizing;

use crate::error::{Error, Result};

/// Encodes share bytes as lowercase hexadecimal, two digits per byte
#[must_use]
pub fn encode(share: &[u8]) -> String {
    hex::encode(share)
}

/// Decodes share text produced by [`encode`]
///
/// # Errors
/// Returns [`Error::MalformedShare`] on odd-length text or non-hex digits
pub fn decode(text: &str) -> Result<Zeroizing<Vec<u8>>> {
    hex::decode(text)
        .map(Zeroizing::new)
        .map_err(|source| Error::MalformedShare {
            position: None,
            raw: text.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_is_lowercase_without_separators() {
        assert_eq!(encode(&[0x01, 0xAB, 0xFF, 0x00]), "01abff00");
        assert_eq!(encode(&[]), "");
    }

    #[test]
    fn test_decode_inverts_encode() {
        let share = vec![0x00, 0x7F, 0x80, 0xFF];
        assert_eq!(*decode(&encode(&share)).unwrap(), share);
    }

    #[test]
    fn test_decode_odd_length() {
        let err = decode("abc").unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedShare {
                position: None,
                ref raw,
                source: hex::FromHexError::OddLength,
            } if raw == "abc"
        ));
    }

    #[test]
    fn test_decode_non_hex_digit() {
        let err = decode("0g").unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedShare {
                source: hex::FromHexError::InvalidHexCharacter { c: 'g', index: 1 },
                ..
            }
        ));
    }
}
