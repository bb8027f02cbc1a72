pub mod normalize;
pub mod transform;
pub mod partition;
pub mod pipeline;

pub use normalize::{normalize_review, normalize_reviews};
pub use transform::{display_name, relative_age, sort_by_recency, stars, transform_reviews, DEFAULT_NAME_MAX_LENGTH};
pub use partition::partition;
pub use pipeline::{build_widget, build_widget_now, summarize, PipelineOptions};
