//! String utilities for the domain layer.

/// Truncate a string to a maximum length with ellipsis (UTF-8 safe)
///
/// Uses byte length for max_len but ensures truncation occurs at valid
/// UTF-8 character boundaries.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let target = max_len.saturating_sub(3);
        let mut end = target.min(s.len());
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}

/// Collapse all whitespace runs (newlines included) into single spaces.
pub fn single_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_multibyte() {
        // 'é' and 'ó' are 2 bytes each
        assert_eq!(truncate("canción", 30), "canción");
        // target = 6 lands inside 'ó' (bytes 5..7), backs up to 5
        assert_eq!(truncate("canción larga", 9), "canci...");
    }

    #[test]
    fn test_single_line() {
        assert_eq!(single_line("uno\n  dos\t tres \n"), "uno dos tres");
        assert_eq!(single_line(""), "");
    }
}
