//! Gemini API credential resolution.

/// Environment variable holding the Gemini API key.
pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";

/// Read the API key from the environment.
///
/// Returns `None` when the variable is unset or blank. Callers warn once at
/// startup and continue with an empty key; requests sent without a
/// credential fail through the normal service error path.
pub fn resolve_api_key() -> Option<String> {
    match std::env::var(API_KEY_VAR) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_follows_env_var() {
        // One sequential test: set_var/remove_var race across parallel tests.
        std::env::remove_var(API_KEY_VAR);
        assert_eq!(resolve_api_key(), None);

        std::env::set_var(API_KEY_VAR, "   ");
        assert_eq!(resolve_api_key(), None);

        std::env::set_var(API_KEY_VAR, "test-key-123");
        assert_eq!(resolve_api_key(), Some("test-key-123".to_string()));

        std::env::remove_var(API_KEY_VAR);
    }
}
