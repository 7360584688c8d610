//! Best-effort decoding of console output
//!
//! The game server writes its console in whatever encoding the host locale
//! uses and never says which. Decoding tries, in order:
//!
//! 1. charset detection, when the detector is confident in its guess
//! 2. a fixed list of codecs, first clean decode wins
//! 3. lossy UTF-8
//!
//! Latin-1 sits at the end of the list and maps every byte, so the lossy
//! step only runs if the list is changed.

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, GBK, SHIFT_JIS, WINDOWS_1252};
use std::borrow::Cow;

/// Bytes Windows-1252 leaves unassigned
const WINDOWS_1252_UNDEFINED: [u8; 5] = [0x81, 0x8D, 0x8F, 0x90, 0x9D];

#[derive(Debug, Clone, Copy)]
enum Fallback {
    Utf8,
    Windows1252,
    Legacy(&'static Encoding),
    Latin1,
}

impl Fallback {
    fn decode(self, bytes: &[u8]) -> Option<String> {
        match self {
            Fallback::Utf8 => std::str::from_utf8(bytes).ok().map(str::to_owned),
            Fallback::Windows1252 => {
                if bytes.iter().any(|b| WINDOWS_1252_UNDEFINED.contains(b)) {
                    return None;
                }
                decode_strict(WINDOWS_1252, bytes)
            }
            Fallback::Legacy(encoding) => decode_strict(encoding, bytes),
            Fallback::Latin1 => Some(bytes.iter().map(|&b| char::from(b)).collect()),
        }
    }
}

fn decode_strict(encoding: &'static Encoding, bytes: &[u8]) -> Option<String> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(Cow::into_owned)
}

/// Run charset detection, returning the decoded text if the guess is confident
fn detect(bytes: &[u8]) -> Option<String> {
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);

    let (encoding, confident) = detector.guess_assess(None, true);
    if !confident {
        tracing::trace!("Charset detection unsure (best guess {})", encoding.name());
        return None;
    }

    decode_strict(encoding, bytes)
}

/// Decode console output into text. Never fails.
pub fn decode_text(bytes: &[u8]) -> String {
    if bytes.is_empty() {
        return String::new();
    }

    if let Some(text) = detect(bytes) {
        return text;
    }

    let fallbacks = [
        Fallback::Utf8,
        Fallback::Windows1252,
        Fallback::Legacy(SHIFT_JIS),
        Fallback::Legacy(GBK),
        Fallback::Latin1,
    ];

    for fallback in fallbacks {
        if let Some(text) = fallback.decode(bytes) {
            tracing::trace!("Decoded console output with {:?}", fallback);
            return text;
        }
    }

    String::from_utf8_lossy(bytes).into_owned()
}
