//! Salt hash generation

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::RngCore;

/// Number of random bytes behind a generated salt
const SALT_BYTES: usize = 55;

/// Generate a random salt suitable for the `hash_salt` setting.
///
/// URL-safe base64 without padding, so the value can be dropped into a
/// settings file or a sibling `salt.txt` verbatim.
pub fn generate_salt_hash() -> String {
    let mut bytes = [0u8; SALT_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salt_uses_url_safe_alphabet() {
        let salt = generate_salt_hash();
        assert!(!salt.contains('+'));
        assert!(!salt.contains('/'));
        assert!(!salt.contains('='));
    }

    #[test]
    fn test_salt_length() {
        // 55 bytes -> ceil(55 * 4 / 3) characters without padding
        assert_eq!(generate_salt_hash().len(), 74);
    }

    #[test]
    fn test_salts_are_unique() {
        assert_ne!(generate_salt_hash(), generate_salt_hash());
    }
}
