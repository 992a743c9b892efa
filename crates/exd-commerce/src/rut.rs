//! Chilean RUT validation.
//!
//! A RUT is a national tax/identity number of the form `12.345.678-5`:
//! a numeric body plus a modulo-11 check digit, where the check digit
//! may be `K`. Validation is a pure function of the input string; no
//! network call or lookup is involved.

/// Compute the expected check digit for a numeric RUT body.
///
/// Walks the body right-to-left with multipliers cycling 2..=7 and maps
/// the modulo-11 remainder: 11 -> '0', 10 -> 'K', otherwise the digit.
pub fn check_digit(body: &str) -> Option<char> {
    if body.is_empty() || !body.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let mut sum: u32 = 0;
    let mut multiplier = 2;
    for c in body.chars().rev() {
        let digit = c.to_digit(10)?;
        sum += digit * multiplier;
        multiplier = if multiplier == 7 { 2 } else { multiplier + 1 };
    }

    let expected = 11 - (sum % 11);
    Some(match expected {
        11 => '0',
        10 => 'K',
        d => char::from_digit(d, 10)?,
    })
}

/// Validate a raw RUT string, punctuation tolerated.
///
/// Accepts `12.345.678-5`, `12345678-5`, or `123456785`; the check
/// digit is case-insensitive.
pub fn is_valid_rut(raw: &str) -> bool {
    let mut chars: Vec<char> = raw.chars().filter(|c| *c != '.' && *c != '-').collect();

    if chars.len() < 2 {
        return false;
    }

    let dv = match chars.pop() {
        Some(c) => c.to_ascii_uppercase(),
        None => return false,
    };
    let body: String = chars.into_iter().collect();

    match check_digit(&body) {
        Some(expected) => dv == expected,
        None => false,
    }
}

/// Format a bare RUT body + check digit as `12.345.678-5`.
///
/// Returns the input unchanged when it is not a plausible RUT.
pub fn format_rut(raw: &str) -> String {
    let mut chars: Vec<char> = raw.chars().filter(|c| *c != '.' && *c != '-').collect();
    if chars.len() < 2 {
        return raw.to_string();
    }

    let dv = match chars.pop() {
        Some(c) => c.to_ascii_uppercase(),
        None => return raw.to_string(),
    };
    let digits = chars;
    if !digits.iter().all(|c| c.is_ascii_digit()) {
        return raw.to_string();
    }

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*c);
    }

    format!("{}-{}", grouped, dv)
}
