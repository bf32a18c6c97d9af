//! External configuration.
//!
//! The only external setting the core consumes is the commentary-service
//! credential. Its absence is a non-fatal condition: clustering proceeds and
//! the commentary channel degrades to placeholder text.

use std::env;

/// Environment variable holding the commentary-service API key.
pub const API_KEY_VAR: &str = "CLUSTERLAB_API_KEY";

/// The commentary-service credential, if configured.
///
/// Empty or whitespace-only values count as missing.
pub fn commentary_api_key() -> Option<String> {
    match env::var(API_KEY_VAR) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_key_counts_as_missing() {
        env::set_var(API_KEY_VAR, "   ");
        assert!(commentary_api_key().is_none());
        env::set_var(API_KEY_VAR, "abc123");
        assert_eq!(commentary_api_key().as_deref(), Some("abc123"));
        env::remove_var(API_KEY_VAR);
        assert!(commentary_api_key().is_none());
    }
}
