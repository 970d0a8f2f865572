//! Email address syntax checks and normalisation.

/// Returns `true` if `candidate` has the shape `local@domain.tld`.
///
/// The check is deliberately shallow: one `@` with something on both sides,
/// no whitespace anywhere, and a `.` inside the domain that has at least one
/// character on each side of it. Deliverability is not our concern.
pub fn is_valid_email(candidate: &str) -> bool {
    if candidate.is_empty() || candidate.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = candidate.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Canonical form used as the dedupe key: trimmed and lower-cased.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_simple_addresses() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last+tag@mail.example.co.uk"));
    }

    #[test]
    fn test_case_does_not_matter() {
        assert!(is_valid_email("A@B.C"));
        assert!(is_valid_email("Test@Example.COM"));
    }

    #[test]
    fn test_rejects_missing_at() {
        for candidate in ["", "not-an-email", "example.com", "user.example.com"] {
            assert!(!is_valid_email(candidate), "{candidate:?} should be invalid");
        }
    }

    #[test]
    fn test_rejects_domain_without_dot() {
        for candidate in ["user@localhost", "a@b", "a@.", "a@b.", "a@.b"] {
            assert!(!is_valid_email(candidate), "{candidate:?} should be invalid");
        }
    }

    #[test]
    fn test_dot_only_in_local_part_is_not_enough() {
        assert!(!is_valid_email("first.last@example"));
    }

    #[test]
    fn test_rejects_empty_sides_and_double_at() {
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("a@b@c.com"));
    }

    #[test]
    fn test_rejects_whitespace() {
        assert!(!is_valid_email("us er@example.com"));
        assert!(!is_valid_email("user@exa mple.com"));
        assert!(!is_valid_email(" user@example.com"));
        assert!(!is_valid_email("user@example.com\n"));
    }

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize_email(" USER@Example.COM "), "user@example.com");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize_email("\tMixed@Case.Org ");
        assert_eq!(normalize_email(&once), once);
        assert_eq!(normalize_email("user@example.com"), "user@example.com");
    }
}
