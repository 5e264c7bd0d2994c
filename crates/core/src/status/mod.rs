//! Status aggregation: flat summaries and the organization roll-up

pub mod organization;
pub mod summary;
