use std::sync::OnceLock;

use regex::Regex;

use crate::error::ExpandError;
use crate::summarize::Run;

fn entry_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(-?[0-9]+)(?:-(-?[0-9]+))?$").expect("entry pattern is a valid regex")
    })
}

/// Most values a single summary may expand to.
pub const MAX_EXPANDED_VALUES: u64 = 10_000_000;

/// Expand range notation such as `"-3--2, 5-6, 9"` back into every value it
/// names, in entry order.
///
/// Entries are separated by commas and may be padded with whitespace. An
/// empty summary expands to an empty list. A summary covering more than
/// [`MAX_EXPANDED_VALUES`] values fails with [`ExpandError::TooLarge`]
/// before anything is allocated.
pub fn expand(summary: &str) -> Result<Vec<i32>, ExpandError> {
    if summary.trim().is_empty() {
        return Ok(Vec::new());
    }

    let runs = summary
        .split(',')
        .map(str::trim)
        .map(parse_entry)
        .collect::<Result<Vec<Run>, _>>()?;

    let count: u64 = runs.iter().map(Run::count).sum();
    if count > MAX_EXPANDED_VALUES {
        return Err(ExpandError::TooLarge {
            count,
            limit: MAX_EXPANDED_VALUES,
        });
    }

    let mut values = Vec::with_capacity(count as usize);
    for run in &runs {
        values.extend(run.start..=run.end);
    }

    log::debug!("expanded {} entries into {} values", runs.len(), values.len());
    Ok(values)
}

fn parse_entry(entry: &str) -> Result<Run, ExpandError> {
    let invalid = || ExpandError::InvalidEntry(entry.to_string());
    let caps = entry_regex().captures(entry).ok_or_else(invalid)?;

    let start: i32 = caps[1].parse().map_err(|_| invalid())?;
    let end: i32 = match caps.get(2) {
        Some(m) => m.as_str().parse().map_err(|_| invalid())?,
        None => start,
    };

    if start > end {
        return Err(ExpandError::Descending { start, end });
    }
    Ok(Run { start, end })
}
