//! Command implementations.
//!
//! Each command exposes an `execute` function taking its parsed arguments.

pub mod check;
pub mod generate;
pub mod targets;
pub(crate) mod utils;

pub use check::execute as check_execute;
pub use generate::execute as generate_execute;
pub use targets::execute as targets_execute;
