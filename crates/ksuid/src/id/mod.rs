mod ksuid;
mod sequence;

pub use ksuid::*;
pub use sequence::*;
