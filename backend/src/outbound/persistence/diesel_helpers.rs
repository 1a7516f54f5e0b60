//! Shared helpers for Diesel repository implementations.
//!
//! Error mapping lives here so every adapter reports pool and query failures
//! the same way: the full cause goes to the debug log, a terse message goes
//! into the port error, and the inbound layer decides what (if anything) the
//! caller may see.

use tracing::debug;

use super::pool::PoolError;

/// Extract a readable message from a pool error.
pub(crate) fn map_pool_error_message(error: PoolError) -> String {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    }
}

/// Extract a readable message from a Diesel error and emit debug context.
pub(crate) fn map_diesel_error_message(error: diesel::result::Error, operation: &str) -> String {
    let error_message = error.to_string();
    debug!(%error_message, %operation, "diesel operation failed");
    error_message
}

/// Collect converted rows, mapping the first conversion failure into a port
/// error. Row conversion failures indicate stored data the domain refuses,
/// such as a negative headcount.
pub(crate) fn collect_rows<T, E>(
    results: impl Iterator<Item = Result<T, String>>,
    map_err: impl FnOnce(String) -> E,
) -> Result<Vec<T>, E> {
    results.collect::<Result<Vec<_>, _>>().map_err(map_err)
}

/// Saturate an i64 query bound onto the i32 range of the headcount column.
///
/// Stored headcounts always fit in i32, so a bound beyond that range matches
/// exactly the same rows as the saturated bound.
pub(crate) fn saturate_to_i32(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

/// Escape LIKE/ILIKE metacharacters so a search term matches literally.
pub(crate) fn escape_like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::fits(1200, 1200)]
    #[case::negative_fits(-7, -7)]
    #[case::too_large(i64::MAX, i32::MAX)]
    #[case::too_small(i64::MIN, i32::MIN)]
    fn saturate_to_i32_clamps_out_of_range_bounds(#[case] input: i64, #[case] expected: i32) {
        assert_eq!(saturate_to_i32(input), expected);
    }

    #[rstest]
    #[case::plain("Bangalore", "Bangalore")]
    #[case::percent("100% remote", "100\\% remote")]
    #[case::underscore("New_Town", "New\\_Town")]
    #[case::backslash("a\\b", "a\\\\b")]
    fn escape_like_pattern_neutralises_metacharacters(#[case] term: &str, #[case] expected: &str) {
        assert_eq!(escape_like_pattern(term), expected);
    }
}
