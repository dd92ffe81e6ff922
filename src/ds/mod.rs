pub mod node_set;
pub mod weight_buckets;

pub use node_set::NodeSet;
pub use weight_buckets::{DEFAULT_BUCKET_CAPACITY, WeightBuckets};
