// Module declarations
pub mod assignment;
pub mod labeling;
pub mod representative;
pub mod summary;
pub mod types;

pub use types::*;

pub use assignment::{cluster_titles, cluster_titles_with, jaccard, ClusterOptions};
pub use labeling::{label_cluster, label_clusters};
pub use representative::representative_title;
pub use summary::{build_clean_paragraph, compose_paragraph};

/// Minimum similarity score required to assign an item to an existing cluster
pub const MIN_CLUSTER_SIMILARITY: f64 = 0.33;

/// Number of most frequent tokens that form a cluster centroid
pub const CENTROID_SIZE: usize = 25;

/// Maximum number of storylines rendered into the summary paragraph
pub const MAX_STORYLINES: usize = 3;
