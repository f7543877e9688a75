use std::fmt;

/// A maximal run of consecutive integers, `start..=end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub start: i32,
    pub end: i32,
}

impl Run {
    fn single(value: i32) -> Self {
        Run {
            start: value,
            end: value,
        }
    }

    pub fn is_single(&self) -> bool {
        self.start == self.end
    }

    /// Number of integers covered by the run.
    pub fn count(&self) -> u64 {
        (i64::from(self.end) - i64::from(self.start)) as u64 + 1
    }
}

/// `7` for a single value, `start-end` otherwise. A negative end keeps its
/// sign, so `-3..=-2` renders as `-3--2`.
impl fmt::Display for Run {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single() {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// Group values into ascending runs of consecutive integers.
///
/// Input order and duplicates do not matter.
pub fn runs<I: IntoIterator<Item = i32>>(input: I) -> Vec<Run> {
    let mut sorted: Vec<i32> = input.into_iter().collect();
    sorted.sort_unstable();
    sorted.dedup();

    let mut iter = sorted.into_iter();
    let Some(first) = iter.next() else {
        return Vec::new();
    };

    let mut result = Vec::new();
    let mut current = Run::single(first);
    for value in iter {
        if current.end.checked_add(1) == Some(value) {
            current.end = value;
        } else {
            result.push(current);
            current = Run::single(value);
        }
    }
    result.push(current);
    result
}

/// Render a collection of integers in compact range notation, e.g.
/// `[1, 2, 3, 5, 6, 7, 9]` becomes `"1-3, 5-7, 9"`.
///
/// An empty collection renders as `""`.
pub fn summarize_collection<I: IntoIterator<Item = i32>>(input: I) -> String {
    let runs = runs(input);
    log::debug!("summarizing {} runs", runs.len());
    runs.iter()
        .map(Run::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input() {
        assert_eq!(summarize_collection(Vec::new()), "");
        assert!(runs(Vec::new()).is_empty());
    }

    #[test]
    fn consecutive_runs() {
        assert_eq!(summarize_collection(vec![1, 2, 3, 5, 6, 7, 9]), "1-3, 5-7, 9");
    }

    #[test]
    fn no_consecutive_numbers() {
        assert_eq!(summarize_collection(vec![1, 3, 5, 7]), "1, 3, 5, 7");
    }

    #[test]
    fn mixed_runs_and_singles() {
        assert_eq!(summarize_collection(vec![1, 2, 4, 5, 7, 9]), "1-2, 4-5, 7, 9");
    }

    #[test]
    fn negative_numbers_keep_double_hyphen() {
        assert_eq!(summarize_collection(vec![-8, -6, -3, -2]), "-8, -6, -3--2");
        assert_eq!(
            summarize_collection(vec![-3, -2, 0, 4, 5, 7, 9]),
            "-3--2, 0, 4-5, 7, 9"
        );
    }

    #[test]
    fn run_crossing_zero() {
        assert_eq!(summarize_collection(vec![1, -1, 0]), "-1-1");
    }

    #[test]
    fn unsorted_input() {
        assert_eq!(
            summarize_collection(vec![9, -3, -2, 6, 5, 12]),
            "-3--2, 5-6, 9, 12"
        );
    }

    #[test]
    fn duplicates_do_not_repeat() {
        assert_eq!(summarize_collection(vec![1, 1, 2, 2, 3, 5, 5]), "1-3, 5");
        assert_eq!(summarize_collection(vec![4, 4, 4]), "4");
    }

    #[test]
    fn single_value() {
        assert_eq!(summarize_collection([42]), "42");
    }

    #[test]
    fn accepts_borrowed_collections() {
        let values = vec![3, 2, 1];
        assert_eq!(summarize_collection(values.iter().copied()), "1-3");
        assert_eq!(values, vec![3, 2, 1]);
    }

    #[test]
    fn i32_extremes_do_not_wrap() {
        assert_eq!(
            summarize_collection(vec![i32::MAX, i32::MIN]),
            "-2147483648, 2147483647"
        );
        assert_eq!(
            summarize_collection(vec![i32::MAX - 1, i32::MAX]),
            "2147483646-2147483647"
        );
    }

    #[test]
    fn run_lengths() {
        let r = runs(vec![5, 6, 7, 10]);
        assert_eq!(r, vec![Run { start: 5, end: 7 }, Run { start: 10, end: 10 }]);
        assert_eq!(r[0].count(), 3);
        assert!(r[1].is_single());
        assert_eq!(
            Run {
                start: i32::MIN,
                end: i32::MAX
            }
            .count(),
            1u64 << 32
        );
    }
}
