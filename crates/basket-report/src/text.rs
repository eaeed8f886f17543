//! Text helpers for the standard Helvetica fonts.
//!
//! The report uses the PDF base-14 fonts, so there is no font file to read
//! metrics from. Widths are approximated per character class, close enough
//! to center titles and right-align amounts.

/// Approximate advance width of `s` in points.
pub(crate) fn text_width(s: &str, size: f32, bold: bool) -> f32 {
    let em: f32 = s
        .chars()
        .map(|c| match c {
            ' ' | '.' | ',' | ':' | ';' | '\'' | '|' | '!' | 'i' | 'j' | 'l' => 0.278,
            'f' | 't' | 'r' | '-' | '(' | ')' | '/' => 0.333,
            '0'..='9' | '$' | '?' => 0.556,
            'm' | 'M' | 'W' => 0.833,
            'w' => 0.722,
            c if c.is_uppercase() => 0.667,
            _ => 0.556,
        })
        .sum();

    let weight = if bold { 1.06 } else { 1.0 };
    em * size * weight
}

/// Shortens `s` with a trailing `...` so it fits in `max_width`.
pub(crate) fn fit_text(s: &str, max_width: f32, size: f32, bold: bool) -> String {
    if text_width(s, size, bold) <= max_width {
        return s.to_string();
    }

    let ellipsis = "...";
    let budget = max_width - text_width(ellipsis, size, bold);
    let mut out = String::new();
    for c in s.chars() {
        let mut candidate = out.clone();
        candidate.push(c);
        if text_width(&candidate, size, bold) > budget {
            break;
        }
        out = candidate;
    }
    out.push_str(ellipsis);
    out
}

/// Greedy word wrap against an approximate width.
pub(crate) fn wrap_text(s: &str, max_width: f32, size: f32, bold: bool) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in s.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };

        if text_width(&candidate, size, bold) > max_width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        } else {
            current = candidate;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Encodes text for a WinAnsi-encoded base font.
///
/// Latin-1 characters map to their own byte; control characters become
/// spaces and anything outside Latin-1 becomes `?`.
pub(crate) fn encode_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| match c as u32 {
            0x00..=0x1F | 0x7F => b' ',
            code @ 0x20..=0x7E => code as u8,
            code @ 0xA0..=0xFF => code as u8,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_ascii_and_latin1() {
        assert_eq!(encode_win_ansi("Rice"), b"Rice".to_vec());
        assert_eq!(encode_win_ansi("Café"), vec![b'C', b'a', b'f', 0xE9]);
        assert_eq!(encode_win_ansi("Ñame"), vec![0xD1, b'a', b'm', b'e']);
    }

    #[test]
    fn test_encode_replaces_unsupported() {
        assert_eq!(encode_win_ansi("🛒 cart"), b"? cart".to_vec());
        assert_eq!(encode_win_ansi("a\tb\nc"), b"a b c".to_vec());
    }

    #[test]
    fn test_width_grows_with_size_and_length() {
        let small = text_width("Total", 10.0, false);
        assert!(small > 0.0);
        assert!(text_width("Total", 20.0, false) > small);
        assert!(text_width("Totals", 10.0, false) > small);
        assert!(text_width("Total", 10.0, true) > small);
        assert_eq!(text_width("", 10.0, false), 0.0);
    }

    #[test]
    fn test_fit_text() {
        assert_eq!(fit_text("Rice", 200.0, 10.0, false), "Rice");

        let long = "A very long product name that will never fit in the column";
        let fitted = fit_text(long, 80.0, 10.0, false);
        assert!(fitted.ends_with("..."));
        assert!(fitted.len() < long.len());
        assert!(text_width(&fitted, 10.0, false) <= 80.0);
    }

    #[test]
    fn test_wrap_text() {
        let lines = wrap_text("one two three four five six", 60.0, 10.0, false);
        assert!(lines.len() > 1);
        assert_eq!(lines.join(" "), "one two three four five six");
        for line in &lines[..lines.len() - 1] {
            assert!(text_width(line, 10.0, false) <= 60.0);
        }

        assert!(wrap_text("   ", 60.0, 10.0, false).is_empty());
    }
}
