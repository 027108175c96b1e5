//! Cell value resolution
//!
//! Inventory cells are read through their *resolved* value: the plain scalar
//! a user sees, with rich text flattened and formulas replaced by their last
//! calculated result. Search, quantity reads and audit slot allocation all
//! work on resolved values.

use stockbook_core::CellValue;

/// Largest quantity magnitude a cell can hold exactly (2^53)
pub const MAX_QUANTITY: i64 = 1 << 53;

/// Resolve a cell value to its plain scalar form
///
/// - `Empty` becomes the empty string
/// - rich text becomes the concatenation of its runs
/// - a formula becomes its resolved cached result, or its text when it was
///   never calculated
/// - everything else is returned unchanged
pub fn resolve(value: &CellValue) -> CellValue {
    match value {
        CellValue::Empty => CellValue::string(""),
        CellValue::RichText(runs) => {
            CellValue::string(runs.iter().map(|run| run.text.as_str()).collect::<String>())
        }
        CellValue::Formula {
            cached_value: Some(cached),
            ..
        } => resolve(cached),
        CellValue::Formula {
            text,
            cached_value: None,
        } => CellValue::string(text.as_str()),
        other => other.clone(),
    }
}

/// Resolve a possibly absent cell
pub fn resolve_cell(value: Option<&CellValue>) -> CellValue {
    value.map(resolve).unwrap_or_else(|| CellValue::string(""))
}

/// Check if a resolved value counts as an empty slot
pub fn is_blank(resolved: &CellValue) -> bool {
    match resolved {
        CellValue::Empty => true,
        CellValue::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Text form of a resolved value, as compared against search queries
///
/// Whole numbers print without a fractional part (`100`, not `100.0`).
pub fn display_text(resolved: &CellValue) -> String {
    resolved.to_string()
}

/// Check if a resolved value holds something
///
/// Blank strings, zero, NaN and `FALSE` do not.
pub fn is_truthy(resolved: &CellValue) -> bool {
    match resolved {
        CellValue::Empty => false,
        CellValue::Boolean(b) => *b,
        CellValue::Number(n) => *n != 0.0 && !n.is_nan(),
        CellValue::String(s) => !s.is_empty(),
        _ => true,
    }
}

/// Read a resolved value as a whole quantity
///
/// Numbers truncate toward zero. Strings take their leading integer (after
/// whitespace and an optional sign), so `"42 boxes"` reads as 42. Anything
/// else reads as 0. The result is clamped to `±MAX_QUANTITY`.
pub fn coerce_quantity(resolved: &CellValue) -> i64 {
    match resolved {
        CellValue::Number(n) if n.is_finite() => {
            let limit = MAX_QUANTITY as f64;
            n.trunc().clamp(-limit, limit) as i64
        }
        CellValue::String(s) => match leading_integer(s.as_str()) {
            Some(n) => n.clamp(-MAX_QUANTITY, MAX_QUANTITY),
            None if has_digits(s.as_str()) => {
                if s.as_str().trim_start().starts_with('-') {
                    -MAX_QUANTITY
                } else {
                    MAX_QUANTITY
                }
            }
            None => 0,
        },
        _ => 0,
    }
}

fn has_digits(s: &str) -> bool {
    let s = s.trim_start();
    let s = s.strip_prefix(['-', '+']).unwrap_or(s);
    s.bytes().next().map_or(false, |b| b.is_ascii_digit())
}

/// Parse the integer prefix of a string
///
/// `None` when there are no digits or the prefix overflows `i64`.
pub(crate) fn leading_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude = digits[..end].bytes().try_fold(0i64, |acc, b| {
        acc.checked_mul(10)?.checked_add(i64::from(b - b'0'))
    })?;
    Some(if negative { -magnitude } else { magnitude })
}
