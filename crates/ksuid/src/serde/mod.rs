//! Serde support for [`Ksuid`](crate::Ksuid).
//!
//! The [`Serialize`](::serde::Serialize) impl picks the representation from
//! the format: human-readable formats (JSON, TOML, YAML) get the 27-character
//! text form, compact binary formats get the 20 raw bytes. Deserialization
//! accepts either representation in any format.
//!
//! To force one representation regardless of format, use [`as_base62`] or
//! [`as_bytes`] with `#[serde(with = ...)]`.

mod ksuid;

pub use ksuid::*;
