//! Flight enumeration.
//!
//! - [`Flight`]: a canonical sorted triple of board positions
//! - [`solve`]: O(n²) pair-completion search over a board's cards

mod flight;
mod search;

pub use flight::Flight;
pub use search::solve;
