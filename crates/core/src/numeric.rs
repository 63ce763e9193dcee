//! Lenient numeric helpers.
//!
//! Book records keep some numeric-looking fields as free text (publication
//! years like `"1605"` or `"s/f"`). Everything that needs a number out of them
//! goes through these helpers so the fallback rules live in one place.

/// Parse the leading integer of `raw`, returning 0 when there is none.
///
/// Leading whitespace and a single `+`/`-` sign are accepted; parsing stops at
/// the first non-digit, so `"1954 (1st ed.)"` yields 1954. Inputs without a
/// leading digit (`"abc"`, `""`, `"-"`) yield 0. Values too large for `i64`
/// saturate.
pub fn parse_year_or_zero(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, d| {
            acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
        });

    if negative { -value } else { value }
}

/// Decade bucket of a year: `floor(year / 10) * 10`.
///
/// Years within 10 of `i64::MIN` have no representable decade and saturate to
/// `i64::MIN`.
pub fn decade_of(year: i64) -> i64 {
    year.div_euclid(10).saturating_mul(10)
}

/// Round to two decimal places (display precision for prices).
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Arithmetic mean, or `None` for an empty input.
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}
