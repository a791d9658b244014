//! Lenient deserialization helpers for remote and inbound JSON.

use serde::{Deserialize, Deserializer};

/// Treat an explicit `null` like an absent field.
pub fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
