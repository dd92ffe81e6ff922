//! bucketq: bucket-indexed min-priority queues for integer-weighted graph search.
//!
//! See `DESIGN.md` for internal architecture and invariants.

pub mod ds;
pub mod error;
pub mod prelude;
