//! `serde` support, enabled by the `serde` feature.
//!
//! Vectors are (de)serialized as a tuple of their `N` elements, quaternions as the tuple
//! `(x, y, z, w)`. In self-describing formats like JSON, both look like arrays.

use std::fmt;

use serde::{
    de::{self, SeqAccess, Visitor},
    ser::SerializeTuple,
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::{Quat, Vec4f, Vector};

impl<const N: usize> Serialize for Vector<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tup = serializer.serialize_tuple(N)?;
        for elem in self.as_array() {
            tup.serialize_element(elem)?;
        }
        tup.end()
    }
}

struct VectorVisitor<const N: usize>;

impl<'de, const N: usize> Visitor<'de> for VectorVisitor<N> {
    type Value = Vector<N>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a sequence of {N} floats")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut vec = Vector::<N>::ZERO;
        for i in 0..N {
            vec[i] = seq
                .next_element()?
                .ok_or_else(|| de::Error::invalid_length(i, &self))?;
        }
        Ok(vec)
    }
}

impl<'de, const N: usize> Deserialize<'de> for Vector<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_tuple(N, VectorVisitor::<N>)
    }
}

impl Serialize for Quat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_vec().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Quat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec4f::deserialize(deserializer).map(Quat::from_vec)
    }
}
