//! Email-shape check shared with the browser client.

use once_cell::sync::Lazy;
use regex::Regex;

/// Same pattern the form client uses: something, an `@`, something, a dot,
/// something, with no whitespace or extra `@` anywhere.
static EMAIL_SHAPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email shape regex"));

pub fn is_email_shaped(candidate: &str) -> bool {
    EMAIL_SHAPE_RE.is_match(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_simple_addresses() {
        assert!(is_email_shaped("a@b.co"));
        assert!(is_email_shaped("boss@co.com"));
        assert!(is_email_shaped("first.last+tag@sub.example.org"));
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        for candidate in ["not-an-email", "", "a@b", "@b.co", "a@.co x", "a b@c.de", "a@@b.co"] {
            assert!(!is_email_shaped(candidate), "{candidate:?} should be rejected");
        }
    }
}
