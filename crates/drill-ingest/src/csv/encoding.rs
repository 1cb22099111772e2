//! Text encoding detection for uploaded extracts.
//!
//! Field exports arrive either as UTF-8 (with or without BOM) or as UTF-16
//! written by spreadsheet tools. UTF-8 is always tried first.

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE};

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: [u8; 2] = [0xFF, 0xFE];
const UTF16_BE_BOM: [u8; 2] = [0xFE, 0xFF];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Utf16Le,
    Utf16Be,
}

impl TextEncoding {
    pub fn label(self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Utf16Le => "UTF-16LE",
            Self::Utf16Be => "UTF-16BE",
        }
    }
}

/// Decodes raw file bytes, preferring UTF-8 and falling back to UTF-16.
///
/// A BOM-less UTF-16 fallback is only accepted when the decoded text contains
/// a field delimiter; otherwise arbitrary 8-bit bytes would "decode" as CJK.
pub fn decode_text(bytes: &[u8]) -> Result<(String, TextEncoding), String> {
    if let Some(rest) = bytes.strip_prefix(&UTF8_BOM) {
        return std::str::from_utf8(rest)
            .map(|text| (text.to_string(), TextEncoding::Utf8))
            .map_err(|err| format!("invalid UTF-8 after byte order mark: {err}"));
    }
    if bytes.starts_with(&UTF16_LE_BOM) || bytes.starts_with(&UTF16_BE_BOM) {
        return decode_utf16(bytes, UTF_16LE);
    }
    // NUL never appears in delimited text but is every other byte of BOM-less UTF-16.
    if bytes.contains(&0) {
        let fallback = if bytes.first() == Some(&0) {
            UTF_16BE
        } else {
            UTF_16LE
        };
        return decode_utf16(bytes, fallback);
    }
    match std::str::from_utf8(bytes) {
        Ok(text) => Ok((text.to_string(), TextEncoding::Utf8)),
        Err(utf8_err) => {
            tracing::debug!(error = %utf8_err, "UTF-8 decoding failed, trying UTF-16");
            let (text, encoding) = decode_utf16(bytes, UTF_16LE)
                .map_err(|_| format!("not valid UTF-8 ({utf8_err}) or UTF-16"))?;
            if text.contains(',') {
                Ok((text, encoding))
            } else {
                Err(format!("not valid UTF-8 ({utf8_err}) or UTF-16"))
            }
        }
    }
}

/// Decodes UTF-16; a BOM, when present, overrides `fallback`.
fn decode_utf16(
    bytes: &[u8],
    fallback: &'static Encoding,
) -> Result<(String, TextEncoding), String> {
    let (text, used, had_errors) = fallback.decode(bytes);
    if had_errors || bytes.len() % 2 != 0 {
        return Err(format!("malformed {} data", used.name()));
    }
    let encoding = if used == UTF_16BE {
        TextEncoding::Utf16Be
    } else {
        TextEncoding::Utf16Le
    };
    Ok((text.into_owned(), encoding))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf16le(text: &str, bom: bool) -> Vec<u8> {
        let mut bytes = Vec::new();
        if bom {
            bytes.extend_from_slice(&UTF16_LE_BOM);
        }
        for unit in text.encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        bytes
    }

    #[test]
    fn test_plain_utf8() {
        let (text, encoding) = decode_text(b"a,b\n1,2\n").unwrap();
        assert_eq!(text, "a,b\n1,2\n");
        assert_eq!(encoding, TextEncoding::Utf8);
    }

    #[test]
    fn test_utf8_bom_is_stripped() {
        let (text, encoding) = decode_text(b"\xEF\xBB\xBFa,b\n").unwrap();
        assert_eq!(text, "a,b\n");
        assert_eq!(encoding, TextEncoding::Utf8);
    }

    #[test]
    fn test_utf16_with_bom() {
        let (text, encoding) = decode_text(&utf16le("hole_number,unit\n", true)).unwrap();
        assert_eq!(text, "hole_number,unit\n");
        assert_eq!(encoding, TextEncoding::Utf16Le);
    }

    #[test]
    fn test_utf16_without_bom_falls_back() {
        let (text, encoding) = decode_text(&utf16le("hole_number,unit\nPE-1,Dó\n", false)).unwrap();
        assert_eq!(text, "hole_number,unit\nPE-1,Dó\n");
        assert_eq!(encoding, TextEncoding::Utf16Le);
    }

    #[test]
    fn test_undecodable_bytes() {
        assert!(decode_text(&[0xC3, 0x28, 0xA0]).is_err());
    }
}
