/// Message carried by every `collect` failure. Callers display it verbatim.
pub const INVALID_FORMAT_MESSAGE: &str = "The input doesn't match the expected pattern.";

/// Failure of [`crate::collect::collect`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectError {
    /// The whitespace-stripped input is not a comma-separated list of
    /// integers, or one of its fields does not fit in an `i32`.
    #[error("{}", INVALID_FORMAT_MESSAGE)]
    InvalidFormat,
}

/// Failure of [`crate::expand::expand`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpandError {
    #[error("invalid range entry '{0}'")]
    InvalidEntry(String),
    #[error("range {start}-{end} is descending")]
    Descending { start: i32, end: i32 },
    #[error("summary covers {count} values, more than the limit of {limit}")]
    TooLarge { count: u64, limit: u64 },
}
