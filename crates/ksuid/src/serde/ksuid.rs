use crate::{BYTE_LEN, Error, Ksuid};
use core::fmt;
use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for Ksuid {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if s.is_human_readable() {
            as_base62::serialize(self, s)
        } else {
            as_bytes::serialize(self, s)
        }
    }
}

impl<'de> Deserialize<'de> for Ksuid {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if d.is_human_readable() {
            d.deserialize_any(KsuidVisitor)
        } else {
            d.deserialize_bytes(KsuidVisitor)
        }
    }
}

/// Accepts the text form as a string, or the binary form as bytes or as a
/// sequence of `u8`.
struct KsuidVisitor;

impl<'de> Visitor<'de> for KsuidVisitor {
    type Value = Ksuid;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a 27-character base62 string or 20 bytes")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ksuid::parse(v).map_err(de::Error::custom)
    }

    fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ksuid::from_bytes(v).map_err(de::Error::custom)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut bytes = [0_u8; BYTE_LEN];
        let mut len = 0;
        while let Some(byte) = seq.next_element::<u8>()? {
            if let Some(slot) = bytes.get_mut(len) {
                *slot = byte;
            }
            len += 1;
        }
        if len != BYTE_LEN {
            return Err(de::Error::custom(Error::binary_size(len)));
        }
        Ok(Ksuid::from_array(bytes))
    }
}

/// Always (de)serializes a [`Ksuid`] as its 27-character text form.
///
/// # Example
///
/// ```
/// use ksuid::Ksuid;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Event {
///     #[serde(with = "ksuid::serde::as_base62")]
///     id: Ksuid,
/// }
///
/// let event = Event { id: Ksuid::MAX };
/// let json = serde_json::to_string(&event).unwrap();
/// assert_eq!(json, r#"{"id":"aWgEPTl1tmebfsQzFP4bxwgy80V"}"#);
/// ```
pub mod as_base62 {
    use super::{Deserializer, KsuidVisitor, Serializer};
    use crate::Ksuid;

    /// Serializes `id` as a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying serializer fails.
    pub fn serialize<S>(id: &Ksuid, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(id.encode().as_str())
    }

    /// Deserializes a [`Ksuid`] from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying deserializer fails or the string is
    /// not a valid KSUID.
    pub fn deserialize<'de, D>(d: D) -> Result<Ksuid, D::Error>
    where
        D: Deserializer<'de>,
    {
        d.deserialize_str(KsuidVisitor)
    }
}

/// Always (de)serializes a [`Ksuid`] as its 20 raw bytes.
pub mod as_bytes {
    use super::{Deserializer, KsuidVisitor, Serializer};
    use crate::Ksuid;

    /// Serializes `id` as a byte array.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying serializer fails.
    pub fn serialize<S>(id: &Ksuid, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_bytes(id.as_bytes())
    }

    /// Deserializes a [`Ksuid`] from bytes or a sequence of `u8`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying deserializer fails or the input is
    /// not exactly 20 bytes.
    pub fn deserialize<'de, D>(d: D) -> Result<Ksuid, D::Error>
    where
        D: Deserializer<'de>,
    {
        d.deserialize_bytes(KsuidVisitor)
    }
}
