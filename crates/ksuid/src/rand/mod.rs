//! Entropy sources for KSUID payloads.

mod global;
mod interface;
mod os_random;
mod reader;
mod thread_random;

pub use global::*;
pub use interface::*;
pub use os_random::*;
pub use reader::*;
pub use thread_random::*;
