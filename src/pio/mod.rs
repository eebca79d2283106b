pub mod layout;
pub use layout::*;

pub mod range;
pub use range::*;
