use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Check that a string is syntactically an email address.
/// No DNS lookup, just `local@domain.tld` with a tld of 2+ letters.
pub fn is_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_email_accepts_common_addresses() {
        assert!(is_email("a@b.com"));
        assert!(is_email("x@y.com"));
        assert!(is_email("first.last+tag@mail.example.co.uk"));
        assert!(is_email("under_score%pct-dash@sub-domain.io"));
    }

    #[test]
    fn test_is_email_rejects_malformed() {
        // No @
        assert!(!is_email("not-an-email"));
        // No tld
        assert!(!is_email("a@b"));
        // Single letter tld
        assert!(!is_email("a@b.c"));
        // Numeric tld
        assert!(!is_email("a@b.c0m"));
        assert!(!is_email(""));
        assert!(!is_email("@b.com"));
        assert!(!is_email("a@.com"));
        assert!(!is_email("a b@c.com"));
        assert!(!is_email(" a@b.com"));
        assert!(!is_email("a@b.com\n"));
    }
}
