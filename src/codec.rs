//! Sequence encoding of [`Position`].
//!
//! A position is stored as an ordered `[x, y, z]` sequence of integers. The
//! slice form ([`Position::encode`] / [`Position::decode`]) does not depend on
//! any serialization library; the serde impls below reuse the same layout so
//! any serde format (JSON, YAML, bincode...) stores a position as a 3-element
//! array.

use std::fmt;

use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::error::PositionError;
use crate::types::Position;

const LEN: usize = 3;

impl Position {
    /// Encodes as `[x, y, z]`.
    pub fn encode(&self) -> [i32; LEN] {
        [self.x, self.y, self.z]
    }

    /// Decodes from an `[x, y, z]` sequence.
    ///
    /// Fails with [`PositionError::Decode`] unless `seq` has exactly 3 elements.
    pub fn decode(seq: &[i32]) -> Result<Self, PositionError> {
        match *seq {
            [x, y, z] => Ok(Self::new(x, y, z)),
            _ => {
                debug!(len = seq.len(), "Rejected position sequence");
                Err(PositionError::Decode { len: seq.len() })
            }
        }
    }

    /// Decodes `seq` into `self`. On failure `self` is left untouched.
    pub fn decode_into(&mut self, seq: &[i32]) -> Result<(), PositionError> {
        *self = Self::decode(seq)?;
        Ok(())
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(LEN))?;
        for value in self.encode() {
            seq.serialize_element(&value)?;
        }
        seq.end()
    }
}

struct PositionVisitor;

impl<'de> Visitor<'de> for PositionVisitor {
    type Value = Position;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence of 3 integers")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Position, A::Error> {
        let mut values = [0; LEN];
        for (i, value) in values.iter_mut().enumerate() {
            *value = match seq.next_element()? {
                Some(v) => v,
                None => {
                    debug!(len = i, "Rejected position sequence");
                    return Err(de::Error::invalid_length(i, &self));
                }
            };
        }

        // Drain the rest so the error reports the real length.
        let mut len = LEN;
        while seq.next_element::<IgnoredAny>()?.is_some() {
            len += 1;
        }
        if len != LEN {
            debug!(len, "Rejected position sequence");
            return Err(de::Error::invalid_length(len, &self));
        }

        Ok(Position::from(values))
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(PositionVisitor)
    }
}
