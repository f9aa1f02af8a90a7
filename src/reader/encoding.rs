//! Text encoding detection and chunk decoding.
//!
//! Sensor logs come from Windows tooling and arrive as UTF-8 with a BOM,
//! plain UTF-8, or Windows-1252 ("latin-1"). Detection runs once against
//! the header line; the detected encoding then decodes every later chunk.
//! Windows-1252 accepts any byte, so the ladder always terminates.

use std::borrow::Cow;

use encoding_rs::WINDOWS_1252;

/// UTF-8 byte-order mark.
const BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Detected log text encoding; fixed for the lifetime of a reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogEncoding {
    /// UTF-8 with a leading byte-order mark.
    Utf8Bom,
    Utf8,
    /// Windows-1252, the single-byte fallback.
    Latin1,
}

impl LogEncoding {
    /// Pick the first encoding in the ladder that decodes `header` cleanly
    /// and return it with the decoded header text.
    ///
    /// `None` only for empty input; the Windows-1252 rung cannot fail.
    pub fn detect(header: &[u8]) -> Option<(Self, String)> {
        if header.is_empty() {
            return None;
        }

        if let Some(rest) = header.strip_prefix(BOM) {
            if let Ok(text) = std::str::from_utf8(rest) {
                return Some((Self::Utf8Bom, text.to_string()));
            }
        } else if let Ok(text) = std::str::from_utf8(header) {
            return Some((Self::Utf8, text.to_string()));
        }

        let (text, _, _) = WINDOWS_1252.decode(header);
        Some((Self::Latin1, text.into_owned()))
    }

    /// Decode a chunk read with this encoding.
    ///
    /// Chunks always end on a line boundary, which is also a character
    /// boundary in both encodings; stray invalid bytes decode to the
    /// replacement character and get rejected later as cell-level skips.
    pub fn decode<'a>(&self, bytes: &'a [u8]) -> Cow<'a, str> {
        match self {
            LogEncoding::Utf8Bom | LogEncoding::Utf8 => String::from_utf8_lossy(bytes),
            LogEncoding::Latin1 => WINDOWS_1252.decode_without_bom_handling(bytes).0,
        }
    }

    /// Name for diagnostics, matching the usual codec spellings.
    pub fn name(&self) -> &'static str {
        match self {
            LogEncoding::Utf8Bom => "utf-8-sig",
            LogEncoding::Utf8 => "utf-8",
            LogEncoding::Latin1 => "latin-1",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_utf8_with_bom() {
        let mut bytes = BOM.to_vec();
        bytes.extend_from_slice("Date,Time,CPU [\u{b0}C]".as_bytes());

        let (encoding, text) = LogEncoding::detect(&bytes).unwrap();
        assert_eq!(encoding, LogEncoding::Utf8Bom);
        assert_eq!(text, "Date,Time,CPU [°C]");
        assert_eq!(encoding.name(), "utf-8-sig");
    }

    #[test]
    fn test_detect_plain_utf8() {
        let (encoding, text) = LogEncoding::detect("Date,Time,Fan [RPM]".as_bytes()).unwrap();
        assert_eq!(encoding, LogEncoding::Utf8);
        assert_eq!(text, "Date,Time,Fan [RPM]");
    }

    #[test]
    fn test_detect_falls_back_to_latin1() {
        // 0xB0 is the degree sign in Windows-1252 and invalid as UTF-8.
        let bytes = b"Date,Time,CPU [\xB0C]";
        let (encoding, text) = LogEncoding::detect(bytes).unwrap();
        assert_eq!(encoding, LogEncoding::Latin1);
        assert_eq!(text, "Date,Time,CPU [°C]");
    }

    #[test]
    fn test_detect_rejects_empty_input() {
        assert!(LogEncoding::detect(b"").is_none());
    }

    #[test]
    fn test_decode_uses_detected_encoding() {
        let utf8 = LogEncoding::Utf8.decode("42.5,\u{b0}C".as_bytes());
        assert_eq!(utf8, "42.5,°C");

        let latin1 = LogEncoding::Latin1.decode(b"42.5,\xB0C");
        assert_eq!(latin1, "42.5,°C");
    }
}
