//! Parallel per-station min/mean/max aggregation over large `station;value`
//! measurement files.
//!
//! The pipeline has four stages: a planner splits the file into line-aligned
//! byte ranges, one worker per range streams and aggregates its records into
//! a private table, a reducer merges the tables in arrival order (the merge
//! is associative and commutative, so order never shows in the result), and
//! a formatter renders the sorted single-line report.

pub mod chunk;
pub mod error;
pub mod merge;
pub mod pipeline;
pub mod report;
pub mod source;
pub mod stats;
pub mod worker;

pub use error::{Error, Result};
pub use pipeline::run;
