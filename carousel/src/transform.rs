use alloc::format;
use alloc::string::String;

/// Formats a horizontal offset as an inline `transform` value.
pub fn format_translate_x(offset: f32) -> String {
    // `-0` would otherwise print as "-0px".
    let offset = if offset == 0.0 { 0.0 } else { offset };
    format!("translateX({offset}px)")
}

/// Extracts the horizontal offset from an inline `transform` value.
///
/// The first run of `-`/digit characters is located and its leading integer is parsed, so
/// `translateX(-300px)` yields `-300` and fractional parts are truncated. Returns `None` when no
/// integer can be read; callers treat that as offset `0`.
pub fn parse_translate_x(transform: &str) -> Option<f32> {
    let start = transform.find(is_number_char)?;
    let rest = &transform[start..];
    let end = rest.find(|c: char| !is_number_char(c)).unwrap_or(rest.len());
    parse_leading_int(&rest[..end]).map(|v| v as f32)
}

fn is_number_char(c: char) -> bool {
    c == '-' || c.is_ascii_digit()
}

fn parse_leading_int(run: &str) -> Option<i64> {
    let (negative, digits) = match run.strip_prefix('-') {
        Some(tail) => (true, tail),
        None => (false, run),
    };
    let len = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if len == 0 {
        return None;
    }
    let value: i64 = digits[..len].parse().ok()?;
    Some(if negative { -value } else { value })
}
