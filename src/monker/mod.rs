pub mod action;
pub use action::*;

pub mod line;
pub use line::*;

/// file extension of MonkerSolver range exports
pub const SUFFIX: &str = "rng";
