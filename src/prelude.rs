pub use crate::ds::{DEFAULT_BUCKET_CAPACITY, NodeSet, WeightBuckets};
pub use crate::error::StaleKeyError;
