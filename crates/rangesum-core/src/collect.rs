use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::CollectError;

/// Shape of a whitespace-free list: signed decimal fields separated by single commas.
const LIST_PATTERN: &str = r"^-?[0-9]+(,-?[0-9]+)*$";

fn list_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(LIST_PATTERN).expect("list pattern is a valid regex"))
}

/// Space, tab, line feed, vertical tab, form feed and carriage return.
/// Other Unicode whitespace such as NBSP is not stripped and fails the grammar.
fn is_list_whitespace(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0B'
}

/// Parse a comma-separated list of integers into its distinct values.
///
/// `None` and `""` yield an empty list. ASCII whitespace is removed before the
/// input is checked against the list grammar, so `" 1, 2,\n3"` is accepted
/// and `"1 2"` reads as `12`. Duplicates are dropped, keeping the first
/// occurrence; no ordering is promised beyond that.
///
/// Any grammar violation, and any field outside the `i32` range, fails with
/// [`CollectError::InvalidFormat`].
pub fn collect(input: Option<&str>) -> Result<Vec<i32>, CollectError> {
    let input = match input {
        None | Some("") => return Ok(Vec::new()),
        Some(s) => s,
    };

    let compact: String = input.chars().filter(|&c| !is_list_whitespace(c)).collect();

    if !list_regex().is_match(&compact) {
        log::debug!("rejecting input of {} chars: pattern mismatch", input.len());
        return Err(CollectError::InvalidFormat);
    }

    let mut seen = HashSet::new();
    let mut numbers = Vec::new();
    for field in compact.split(',') {
        let value: i32 = field.parse().map_err(|_| {
            log::debug!("rejecting field {field}: outside i32 range");
            CollectError::InvalidFormat
        })?;
        if seen.insert(value) {
            numbers.push(value);
        }
    }

    log::debug!("collected {} distinct numbers", numbers.len());
    Ok(numbers)
}
