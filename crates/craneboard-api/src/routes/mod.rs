//! Route handlers, grouped by aggregate.

pub mod companies;
pub mod jobs;
pub mod skills;
pub mod technologies;
