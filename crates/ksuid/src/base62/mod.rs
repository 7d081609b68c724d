//! Fixed-width, order-preserving base62 codec for the 20-byte binary form.

mod alphabet;
mod codec;
mod error;
mod formatter;

pub use alphabet::*;
pub use codec::*;
pub use error::*;
pub use formatter::*;
