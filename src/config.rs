//! Run configuration shared by the binary and the pipeline.

/// Review export read when no `--input` is given.
pub const DEFAULT_INPUT_PATH: &str = "Course Reviews.csv";

/// Front-end asset written when no `--output` is given.
pub const DEFAULT_OUTPUT_PATH: &str = "src/assets/data/reviews.json";

/// Number of five-star reviews shown in the featured carousel.
pub const DEFAULT_FEATURED_LIMIT: usize = 9;

/// Knobs for a single pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    pub featured_limit: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            featured_limit: DEFAULT_FEATURED_LIMIT,
        }
    }
}

impl PipelineConfig {
    pub fn with_featured_limit(mut self, featured_limit: usize) -> Self {
        self.featured_limit = featured_limit;
        self
    }
}
