//! Currency formatting and input masking for salary fields.
//!
//! Salaries are stored as integer cents end to end. [`mask_price`] turns
//! free-form keystrokes into a formatted en-US currency string for display,
//! and [`parse_masked_price`] turns the masked string back into cents for
//! submission. Both are total functions: malformed input degrades to zero
//! rather than failing.

/// Format an amount of cents as an en-US currency string.
///
/// `123456` becomes `"$1,234.56"`; negative amounts render as `"-$…"`.
pub fn format_price(cents: i64) -> String {
    let negative = cents < 0;
    let cents = cents.unsigned_abs();
    let dollars = group_thousands(cents / 100);
    let fraction = cents % 100;

    if negative {
        format!("-${dollars}.{fraction:02}")
    } else {
        format!("${dollars}.{fraction:02}")
    }
}

/// Convert raw input into a formatted currency string.
///
/// Every non-digit character is discarded and the remaining digit string is
/// interpreted as cents, so typing into a masked field always yields a valid
/// rendering: `"12a34"` becomes `"$12.34"`, empty input becomes `"$0.00"`.
/// Digit strings beyond `i64` saturate.
pub fn mask_price(raw: &str) -> String {
    format_price(digits_as_cents(raw))
}

/// Recover the cent amount from a masked currency string.
///
/// Inverse of [`mask_price`]: `"$1,234.56"` yields `123456`. Any string is
/// accepted; non-digits are ignored.
pub fn parse_masked_price(masked: &str) -> i64 {
    digits_as_cents(masked)
}

fn digits_as_cents(s: &str) -> i64 {
    s.chars()
        .filter(char::is_ascii_digit)
        .fold(0i64, |acc, c| {
            acc.saturating_mul(10)
                .saturating_add(i64::from(c as u8 - b'0'))
        })
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
