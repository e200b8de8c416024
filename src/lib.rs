mod base;
pub use base::*;

pub mod dense;
