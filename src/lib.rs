//! Shared pieces of the `greeter` and `summer` programs.

pub mod counting;
pub mod logging;
pub mod output;
pub mod speaker;
pub mod sum;
