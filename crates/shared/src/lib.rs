mod error;
mod field;
mod rule;

pub use error::*;
pub use field::*;
pub use rule::*;
