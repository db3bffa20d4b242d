use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Character appended to text that had to be cut short
pub const ELLIPSIS: char = '…';

/// Truncate a string so that it occupies at most `max` terminal columns
///
/// Wide characters that would straddle the limit are dropped entirely.
pub fn truncate_to_width(s: &str, max: usize) -> String {
    let mut out = String::new();
    let mut used = 0;

    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max {
            break;
        }
        used += w;
        out.push(c);
    }

    out
}

/// Truncate a string to `max` columns, ending it with an ellipsis when it
/// does not fit
pub fn truncate_with_ellipsis(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = truncate_to_width(s, max - 1);
    out.push(ELLIPSIS);
    out
}

/// Truncate or right-pad a string so it occupies exactly `width` columns
pub fn fit_width(s: &str, width: usize) -> String {
    let mut out = truncate_to_width(s, width);
    let used = out.width();
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(used)));
    out
}

/// Replace control characters (newlines, escapes, ...) with spaces so the
/// text stays on one terminal row
pub fn strip_controls(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_to_width_ascii() {
        assert_eq!(truncate_to_width("Coffee", 3), "Cof");
        assert_eq!(truncate_to_width("Tea", 10), "Tea");
        assert_eq!(truncate_to_width("Tea", 0), "");
    }

    #[test]
    fn test_truncate_to_width_wide_chars() {
        // Each CJK character is two columns wide
        assert_eq!(truncate_to_width("日本語", 4), "日本");
        assert_eq!(truncate_to_width("日本語", 5), "日本");
    }

    #[test]
    fn test_truncate_with_ellipsis() {
        assert_eq!(truncate_with_ellipsis("short", 10), "short");
        assert_eq!(truncate_with_ellipsis("exactly10!", 10), "exactly10!");
        assert_eq!(truncate_with_ellipsis("much too long", 8), "much to…");
        assert_eq!(truncate_with_ellipsis("anything", 1), "…");
        assert_eq!(truncate_with_ellipsis("anything", 0), "");
    }

    #[test]
    fn test_fit_width_pads_and_truncates() {
        assert_eq!(fit_width("ab", 5), "ab   ");
        assert_eq!(fit_width("abcdef", 4), "abcd");
        assert_eq!(fit_width("日本", 5), "日本 ");
        assert_eq!(fit_width("", 3), "   ");
    }

    #[test]
    fn test_strip_controls() {
        assert_eq!(strip_controls("plain"), "plain");
        assert_eq!(strip_controls("a\nb\r\tc"), "a b  c");
        assert_eq!(strip_controls("\x1b[2Jgone"), " [2Jgone");
    }
}
