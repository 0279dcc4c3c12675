//! Binary-local application orchestration helpers.
//!
//! The main binary keeps wiring logic in `entry`, while the other modules
//! host the per-mode loops and rendering helpers.

pub(crate) mod commands;
pub(crate) mod entry;
pub(crate) mod exec_mode;
pub(crate) mod repl_mode;
pub(crate) mod startup;
#[cfg(test)]
pub(crate) mod test_doubles;
