//! Command implementations

pub mod simple;
pub mod stats;

pub use simple::run_simple;
pub use stats::print_stats;
