// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shareable tokens for option text.
//!
//! A token is the URL-safe base64 (no padding) of the option text's UTF-8
//! bytes, so it can sit in a link fragment as `#w=<token>` without escaping.
//! Decoding never fails loudly: anything that is not a valid token decodes to
//! an empty string.

use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use base64::Engine;
use regex::Regex;
use std::sync::LazyLock;

/// Fragment key carrying the token.
pub const FRAGMENT_KEY: &str = "w";

static FRAGMENT_REGEX: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"#w=([^&]+)").ok());

/// Encode option text into a fragment-safe token.
pub fn encode_share_token(text: &str) -> String {
    URL_SAFE_NO_PAD.encode(text.as_bytes())
}

/// Decode a token back into option text.
///
/// Accepts padded tokens and the standard base64 alphabet as well. Returns an
/// empty string for malformed input or a payload that is not UTF-8.
pub fn decode_share_token(token: &str) -> String {
    let token = token.trim().trim_end_matches('=');
    let bytes = URL_SAFE_NO_PAD
        .decode(token)
        .or_else(|_| STANDARD_NO_PAD.decode(token));
    match bytes {
        Ok(bytes) => String::from_utf8(bytes).unwrap_or_default(),
        Err(_) => String::new(),
    }
}

/// Build a shareable link for `text` on top of `base`.
///
/// Any existing fragment on `base` is replaced.
pub fn share_url(base: &str, text: &str) -> String {
    let base = base.split('#').next().unwrap_or(base);
    format!("{}#{}={}", base, FRAGMENT_KEY, encode_share_token(text))
}

/// Extract the token from a location such as `https://host/page#w=abc&x=1`.
pub fn token_from_location(location: &str) -> Option<&str> {
    let re = FRAGMENT_REGEX.as_ref()?;
    re.captures(location)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Decode option text from a link, a bare fragment, or a bare token.
///
/// Returns an empty string when nothing decodable is present.
pub fn decode_location(location: &str) -> String {
    let location = location.trim();
    match token_from_location(location) {
        Some(token) => decode_share_token(token),
        None if !location.contains('#') => decode_share_token(location),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "share_tests.rs"]
mod tests;
