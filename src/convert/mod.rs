pub mod batch;
pub use batch::*;

pub mod job;
pub use job::*;

pub mod validate;
pub mod walk;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub use cli::*;
