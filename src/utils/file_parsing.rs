use std::num::ParseIntError;

/// Parses one sample record as an integer.
///
/// Surrounding whitespace, including a trailing `\r`, is ignored. Empty
/// records and decimals are rejected. Values must fit in an `i64`; digit
/// separators such as `1_000` are not accepted.
#[inline]
pub fn parse_integer_record(raw: &str) -> Result<i64, ParseIntError> {
    raw.trim().parse::<i64>()
}

/// Splits an inline list such as `"1, 2,3"` into trimmed records.
///
/// Empty trailing entries (e.g. from `"1,2,"`) are dropped; empty entries in
/// the middle are kept so they surface as parse errors.
pub fn split_inline_records(line: &str) -> Vec<String> {
    let mut out: Vec<String> = line.split(',').map(|s| s.trim().to_string()).collect();
    while out.last().is_some_and(|s| s.is_empty()) {
        out.pop();
    }
    out
}
