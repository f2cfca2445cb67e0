// SPDX-License-Identifier: MPL-2.0
//! Conversion of the server's push key between its URL-safe base64 form and
//! raw bytes.

use crate::domain::notifications::ApplicationServerKey;
use crate::error::PushError;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

/// Decodes a URL-safe base64 key (padding optional) into raw bytes.
///
/// Standard-alphabet input (`+`, `/`) is accepted as well.
pub fn decode_server_key(encoded: &str) -> Result<ApplicationServerKey, PushError> {
    let normalized: String = encoded
        .trim()
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();

    let bytes = URL_SAFE_NO_PAD
        .decode(normalized.as_bytes())
        .map_err(|e| PushError::InvalidServerKey(e.to_string()))?;

    ApplicationServerKey::from_bytes(bytes).ok_or(PushError::MissingServerKey)
}

/// Encodes raw key bytes as unpadded URL-safe base64.
#[must_use]
pub fn encode_server_key(key: &ApplicationServerKey) -> String {
    URL_SAFE_NO_PAD.encode(key.as_bytes())
}

/// Returns whether two encoded keys denote the same bytes.
#[must_use]
pub fn same_key(a: &str, b: &ApplicationServerKey) -> bool {
    decode_server_key(a).is_ok_and(|decoded| &decoded == b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_unpadded_url_safe_key() {
        let key = decode_server_key("BP-_AQ").expect("valid key");
        assert_eq!(key.as_bytes(), &[0x04, 0xff, 0xbf, 0x01]);
    }

    #[test]
    fn padding_and_standard_alphabet_are_accepted() {
        let url_safe = decode_server_key("BP-_AQ").unwrap();
        assert_eq!(decode_server_key("BP+/AQ==").unwrap(), url_safe);
        assert_eq!(decode_server_key("  BP-_AQ==\n").unwrap(), url_safe);
    }

    #[test]
    fn invalid_characters_are_rejected() {
        let result = decode_server_key("not base64!");
        assert!(matches!(result, Err(PushError::InvalidServerKey(_))));
    }

    #[test]
    fn empty_key_is_missing() {
        assert_eq!(decode_server_key(""), Err(PushError::MissingServerKey));
        assert_eq!(decode_server_key("=="), Err(PushError::MissingServerKey));
    }

    #[test]
    fn encode_is_inverse_of_decode() {
        let key = decode_server_key("BP-_AQ").unwrap();
        assert_eq!(encode_server_key(&key), "BP-_AQ");
        assert!(same_key("BP+/AQ==", &key));
        assert!(!same_key("AAAA", &key));
    }
}
