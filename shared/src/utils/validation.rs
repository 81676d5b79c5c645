//! Common validation utilities

/// Common validation functions
pub mod validators {
    /// Check if a string is not empty after trimming
    pub fn not_empty(value: &str) -> bool {
        !value.trim().is_empty()
    }

    /// Check if a string length is within bounds
    pub fn length_between(value: &str, min: usize, max: usize) -> bool {
        let len = value.len();
        len >= min && len <= max
    }

    /// Check if a string is at least `min` characters long
    pub fn min_length(value: &str, min: usize) -> bool {
        value.len() >= min
    }

    /// Check if a string matches a pattern
    pub fn matches_pattern(value: &str, pattern: &regex::Regex) -> bool {
        pattern.is_match(value)
    }
}

#[cfg(test)]
mod tests {
    use super::validators;

    #[test]
    fn test_not_empty() {
        assert!(validators::not_empty("value"));
        assert!(!validators::not_empty(""));
        assert!(!validators::not_empty("   "));
    }

    #[test]
    fn test_length_between() {
        assert!(validators::length_between("abcd", 2, 8));
        assert!(!validators::length_between("a", 2, 8));
        assert!(!validators::length_between("abcdefghi", 2, 8));
    }

    #[test]
    fn test_min_length() {
        assert!(validators::min_length("12345678901", 11));
        assert!(!validators::min_length("1234567890", 11));
    }
}
