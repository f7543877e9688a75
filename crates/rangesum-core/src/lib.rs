pub mod collect;
pub mod config;
pub mod error;
pub mod expand;
pub mod summarize;
pub mod summarizer;

pub use collect::collect;
pub use error::{CollectError, ExpandError};
pub use expand::expand;
pub use summarize::{runs, summarize_collection, Run};
pub use summarizer::{NumberRangeSummarizer, RangeSummarizer};

/// Core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
