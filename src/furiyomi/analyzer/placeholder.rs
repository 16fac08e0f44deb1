//! Placeholder substitution for the legacy encodings spoken to the analyzer
//! tools.
//!
//! Characters that do not survive an encode/decode round trip through the
//! target encoding (emoji, rare CJK code points, `¥` and the other characters
//! the WHATWG encoders fold onto neighbours, line terminators, NUL and the
//! placeholder itself) are pulled out of the request and replaced with
//! [`PLACEHOLDER`]. The tools pass the placeholder
//! through untouched, and it is swapped back for the extracted characters
//! first-in-first-out once the response has been decoded.

use crate::error::{FuriError, Result};
use encoding_rs::Encoding;
use std::collections::VecDeque;

/// Single-byte stand-in for characters outside the legacy encoding.
pub const PLACEHOLDER: char = '\u{1}';

/// A request line ready to be written to a tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedLine {
    pub bytes: Vec<u8>,
    pub extracted: VecDeque<char>,
}

fn needs_placeholder(ch: char, encoding: &'static Encoding) -> bool {
    if matches!(ch, PLACEHOLDER | '\n' | '\r' | '\0') {
        return true;
    }
    let mut buf = [0u8; 4];
    let (bytes, _, unmappable) = encoding.encode(ch.encode_utf8(&mut buf));
    if unmappable {
        return true;
    }
    let (decoded, malformed) = encoding.decode_without_bom_handling(&bytes);
    malformed || decoded.chars().ne(std::iter::once(ch))
}

/// Encodes `text` for a tool, substituting unrepresentable characters.
pub fn encode_line(text: &str, encoding: &'static Encoding) -> EncodedLine {
    let mut extracted = VecDeque::new();
    let escaped: String = text
        .chars()
        .map(|ch| {
            if needs_placeholder(ch, encoding) {
                extracted.push_back(ch);
                PLACEHOLDER
            } else {
                ch
            }
        })
        .collect();
    let (bytes, _, _) = encoding.encode(&escaped);
    EncodedLine {
        bytes: bytes.into_owned(),
        extracted,
    }
}

/// Decodes a response line, rejecting malformed byte sequences.
pub fn decode_line(bytes: &[u8], encoding: &'static Encoding) -> Result<String> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
        .ok_or_else(|| {
            FuriError::ProtocolViolation(format!(
                "response is not valid {}: {:?}",
                encoding.name(),
                String::from_utf8_lossy(bytes)
            ))
        })
}

/// Replaces each placeholder in `text` with the next character from
/// `extracted`, returning the restored text and the characters consumed.
pub fn restore(text: &str, extracted: &mut VecDeque<char>) -> Result<(String, Vec<char>)> {
    let mut used = Vec::new();
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch == PLACEHOLDER {
            let original = extracted.pop_front().ok_or_else(|| {
                FuriError::ProtocolViolation(format!(
                    "more placeholders than extracted characters in {:?}",
                    text
                ))
            })?;
            used.push(original);
            out.push(original);
        } else {
            out.push(ch);
        }
    }
    Ok((out, used))
}

/// Fails if characters were extracted but never given back by the tool.
pub fn ensure_drained(extracted: &VecDeque<char>) -> Result<()> {
    if extracted.is_empty() {
        Ok(())
    } else {
        Err(FuriError::EncodingLoss(format!(
            "{} substituted character(s) were not returned: {:?}",
            extracted.len(),
            extracted.iter().collect::<String>()
        )))
    }
}
