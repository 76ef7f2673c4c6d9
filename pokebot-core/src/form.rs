//! Small input helpers shared by the configuration drafts.

/// Parse the leading integer of `raw`, ignoring surrounding whitespace and
/// any trailing garbage (`"12abc"` parses as 12). Returns `None` when no
/// digits lead the input. Digit runs past `i64` saturate.
#[must_use]
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude = digits[..end].bytes().fold(0_i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(magnitude.saturating_mul(sign))
}

/// Percentage entry: unparseable input becomes 0, the result is clamped to 0..=100.
#[must_use]
pub fn percentage_input(raw: &str) -> u8 {
    let value = parse_leading_int(raw).unwrap_or(0).clamp(0, 100);
    u8::try_from(value).unwrap_or(0)
}

/// Quantity entry: unparseable input becomes 1, the result is at least 1.
#[must_use]
pub fn quantity_input(raw: &str) -> u32 {
    let value = parse_leading_int(raw).unwrap_or(1).max(1);
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Non-negative count entry: unparseable or negative input becomes 0.
#[must_use]
pub fn count_input(raw: &str) -> u32 {
    let value = parse_leading_int(raw).unwrap_or(0).max(0);
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Add `id` to `selection` when absent, remove it when present.
pub fn toggle_selection(selection: &mut Vec<String>, id: &str) {
    if let Some(pos) = selection.iter().position(|existing| existing == id) {
        selection.remove(pos);
    } else {
        selection.push(id.to_string());
    }
}

#[must_use]
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Uppercase the first character, leaving the rest untouched.
#[must_use]
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_int_matches_lenient_browser_parsing() {
        assert_eq!(parse_leading_int("42"), Some(42));
        assert_eq!(parse_leading_int("  7kg"), Some(7));
        assert_eq!(parse_leading_int("-5"), Some(-5));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-"), None);
    }

    #[test]
    fn percentage_and_quantity_inputs_clamp() {
        assert_eq!(percentage_input("150"), 100);
        assert_eq!(percentage_input("-3"), 0);
        assert_eq!(percentage_input("x"), 0);
        assert_eq!(quantity_input("0"), 1);
        assert_eq!(quantity_input(""), 1);
        assert_eq!(quantity_input("12"), 12);
        assert_eq!(count_input("-9"), 0);
    }

    #[test]
    fn overflowing_inputs_saturate() {
        let huge = "100000000000000000000";
        assert_eq!(parse_leading_int(huge), Some(i64::MAX));
        assert_eq!(parse_leading_int("-100000000000000000000"), Some(-i64::MAX));
        assert_eq!(percentage_input(huge), 100);
        assert_eq!(quantity_input(huge), u32::MAX);
        assert_eq!(count_input(huge), u32::MAX);
    }

    #[test]
    fn toggle_selection_adds_then_removes() {
        let mut selected = vec!["channel-1".to_string()];
        toggle_selection(&mut selected, "channel-2");
        assert_eq!(selected, ["channel-1", "channel-2"]);
        toggle_selection(&mut selected, "channel-1");
        assert_eq!(selected, ["channel-2"]);
    }

    #[test]
    fn capitalize_handles_empty_and_ascii() {
        assert_eq!(capitalize("pikachu"), "Pikachu");
        assert_eq!(capitalize(""), "");
    }
}
