use crate::collect::collect;
use crate::error::CollectError;
use crate::summarize::summarize_collection;

/// Parse integer lists and render integer collections as ranges.
pub trait NumberRangeSummarizer {
    fn collect(&self, input: Option<&str>) -> Result<Vec<i32>, CollectError>;

    fn summarize_collection(&self, input: &[i32]) -> String;

    /// `collect` followed by `summarize_collection`.
    fn summarize(&self, input: Option<&str>) -> Result<String, CollectError> {
        let numbers = self.collect(input)?;
        Ok(self.summarize_collection(&numbers))
    }
}

/// The stateless default implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct RangeSummarizer;

impl NumberRangeSummarizer for RangeSummarizer {
    fn collect(&self, input: Option<&str>) -> Result<Vec<i32>, CollectError> {
        collect(input)
    }

    fn summarize_collection(&self, input: &[i32]) -> String {
        summarize_collection(input.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarize_runs_the_pipeline() {
        let s = RangeSummarizer;
        assert_eq!(s.summarize(Some("5,4,-4,-2,1,3,6,9")).unwrap(), "-4, -2, 1-6, 9");
    }

    #[test]
    fn summarize_propagates_invalid_format() {
        let s = RangeSummarizer;
        assert_eq!(s.summarize(Some(",123,")), Err(CollectError::InvalidFormat));
    }

    #[test]
    fn usable_as_trait_object() {
        let s: Box<dyn NumberRangeSummarizer> = Box::new(RangeSummarizer);
        assert_eq!(s.summarize_collection(&[1, 2, 4]), "1-2, 4");
        assert!(s.collect(None).unwrap().is_empty());
    }
}
