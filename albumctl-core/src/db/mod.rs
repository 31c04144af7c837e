//! Database layer - connection pool and repositories
//!
//! - The pool is verified with a ping before it is returned
//! - Queries bind every caller-supplied value
//! - No retries; errors propagate to the caller

pub mod pool;
pub mod repos;

pub use pool::{connect, ping};
pub use repos::*;
