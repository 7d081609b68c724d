//! K-Sortable Unique Identifiers.
//!
//! A [`Ksuid`] is 20 bytes: a 32-bit timestamp counting seconds since
//! [`KSUID_EPOCH`] followed by 128 bits of random payload. Its 27-character
//! base62 text form is fixed-width and sorts exactly like the binary form, so
//! identifiers order by creation time whether they are stored as bytes or as
//! strings.
//!
//! ```
//! use ksuid::Ksuid;
//!
//! let id = Ksuid::new();
//! let text = id.to_string();
//! assert_eq!(text.len(), 27);
//! assert_eq!(text.parse::<Ksuid>().unwrap(), id);
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Ksuid`], plus the
//!   `serde::as_base62` and `serde::as_bytes` field adapters
//! - `rusqlite`: `ToSql`/`FromSql` for [`Ksuid`]
//! - `tracing`: spans and events around generation and entropy swaps
//! - `all`: every feature above

pub mod base62;
mod error;
mod id;
mod rand;
#[cfg(feature = "serde")]
pub mod serde;
#[cfg(feature = "rusqlite")]
mod sql;
mod time;

pub use crate::base62::Base62Formatter;
pub use crate::error::*;
pub use crate::id::*;
pub use crate::rand::*;
pub use crate::time::*;
