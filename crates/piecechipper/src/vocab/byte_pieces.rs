//! # Byte Piece Literals

use crate::errors::{PCError, PCResult};

/// Format a byte as a byte piece literal, `<0xHH>`.
///
/// ## Arguments
/// * `byte` - the raw byte.
///
/// ## Returns
/// The literal, with upper-case hex digits.
pub fn format_byte_piece(byte: u8) -> String {
    format!("<0x{byte:02X}>")
}

/// Parse a byte piece literal, `<0xHH>`, into its byte.
///
/// ## Arguments
/// * `text` - the literal.
///
/// ## Returns
/// The byte, or [`PCError::MalformedVocabulary`] if `text` is not a byte literal.
pub fn parse_byte_piece(text: &str) -> PCResult<u8> {
    let digits = text
        .strip_prefix("<0x")
        .and_then(|rest| rest.strip_suffix('>'))
        .filter(|digits| digits.len() == 2 && digits.bytes().all(|b| b.is_ascii_hexdigit()))
        .ok_or_else(|| PCError::malformed(format!("invalid byte piece {text:?}")))?;

    u8::from_str_radix(digits, 16)
        .map_err(|err| PCError::malformed(format!("invalid byte piece {text:?}: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_byte_piece() {
        assert_eq!(format_byte_piece(0), "<0x00>");
        assert_eq!(format_byte_piece(0x0A), "<0x0A>");
        assert_eq!(format_byte_piece(0xFF), "<0xFF>");
    }

    #[test]
    fn test_parse_byte_piece() {
        for b in 0..=255u8 {
            assert_eq!(parse_byte_piece(&format_byte_piece(b)).unwrap(), b);
        }
        assert_eq!(parse_byte_piece("<0xab>").unwrap(), 0xAB);
    }

    #[test]
    fn test_parse_byte_piece_rejects() {
        for bad in ["<0xZZ>", "<0x1>", "<0x123>", "0x12", "<0x12", "<1x12>", "", "<0x+1>"] {
            assert!(
                matches!(
                    parse_byte_piece(bad),
                    Err(PCError::MalformedVocabulary { .. })
                ),
                "{bad:?}"
            );
        }
    }
}
