// ============================================================
// Layer 4 — Byte Decoding Policy
// ============================================================
// Newsgroup postings are mostly ASCII but a few files contain
// Latin-1 or otherwise malformed bytes. What happens to those
// bytes is an explicit choice:
//
//   Replace → each malformed sequence becomes U+FFFD
//   Drop    → malformed bytes are removed (default)
//   Fail    → the whole load stops with an error
//
// The cleaner removes every non-ASCII character anyway, so
// Replace and Drop only differ in where a token boundary
// appears: U+FFFD turns into a space, a dropped byte joins
// its neighbours.
//
// Reference: Rust Book §8 (Storing UTF-8 Encoded Text)

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How to treat byte sequences that are not valid UTF-8.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodePolicy {
    Replace,
    #[default]
    Drop,
    Fail,
}

impl DecodePolicy {
    /// Decode `bytes` as UTF-8 according to this policy.
    pub fn decode(self, bytes: &[u8]) -> Result<String> {
        match self {
            DecodePolicy::Replace => Ok(String::from_utf8_lossy(bytes).into_owned()),
            DecodePolicy::Drop    => Ok(drop_invalid(bytes)),
            DecodePolicy::Fail    => match std::str::from_utf8(bytes) {
                Ok(text) => Ok(text.to_string()),
                Err(e)   => bail!("invalid UTF-8 at byte offset {}", e.valid_up_to()),
            },
        }
    }
}

/// Copy every valid UTF-8 run and skip each malformed sequence.
fn drop_invalid(mut bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());

    loop {
        match std::str::from_utf8(bytes) {
            Ok(valid) => {
                out.push_str(valid);
                return out;
            }
            Err(e) => {
                let (valid, rest) = bytes.split_at(e.valid_up_to());
                out.push_str(std::str::from_utf8(valid).unwrap_or_default());

                // error_len() is None when the input ends mid-sequence
                let skip = e.error_len().unwrap_or(rest.len());
                bytes = &rest[skip..];
            }
        }
    }
}

impl FromStr for DecodePolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "replace" => Ok(DecodePolicy::Replace),
            "drop" | "ignore" => Ok(DecodePolicy::Drop),
            "fail" | "strict" => Ok(DecodePolicy::Fail),
            other => bail!("unknown decode policy '{}' (expected replace, drop or fail)", other),
        }
    }
}
