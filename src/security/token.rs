use chrono::Utc;

/// Generate the opaque login token: the hex MD5 digest of
/// `"{user_id}:{email}:{unix_seconds}"`.
///
/// The token is handed to the client and never stored; later requests are
/// checked only for the presence of *a* token, not this one.
pub fn generate_token(user_id: i64, email: &str) -> String {
    token_at(user_id, email, Utc::now().timestamp())
}

fn token_at(user_id: i64, email: &str, unix_seconds: i64) -> String {
    let data = format!("{}:{}:{}", user_id, email, unix_seconds);
    format!("{:x}", md5::compute(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_is_32_hex_chars() {
        let token = generate_token(42, "ana@example.com");
        assert_eq!(token.len(), 32);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_token_depends_on_user() {
        let ts = 1_700_000_000;
        let a = token_at(1, "ana@example.com", ts);
        let b = token_at(2, "ana@example.com", ts);
        assert_ne!(a, b);
    }

    #[test]
    fn test_token_is_deterministic_for_fixed_input() {
        let ts = 1_700_000_000;
        assert_eq!(
            token_at(7, "bob@example.com", ts),
            token_at(7, "bob@example.com", ts)
        );
    }
}
