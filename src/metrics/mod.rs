mod counter;

pub use counter::{FileMetrics, KeywordCounter, MetricsCounter};
