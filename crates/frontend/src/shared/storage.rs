//! localStorage helpers.
//!
//! Persisted UX state is best effort: reads fail open to a default value and
//! write failures are ignored. Corrupt JSON under a key is indistinguishable
//! from a missing key for callers.

use serde::de::DeserializeOwned;
use serde::Serialize;

pub fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Collapse an optional raw JSON string to a value, falling back to
/// `T::default()` when the string is absent or malformed.
pub fn parse_json_or_default<T>(raw: Option<&str>) -> T
where
    T: DeserializeOwned + Default,
{
    raw.and_then(|r| serde_json::from_str::<T>(r).ok())
        .unwrap_or_default()
}

/// Read and deserialize a JSON value, collapsing every failure mode
/// (no storage, missing key, malformed JSON) to `T::default()`.
pub fn read_json_or_default<T>(key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    let raw = local_storage().and_then(|storage| storage.get_item(key).ok().flatten());
    parse_json_or_default(raw.as_deref())
}

/// Serialize and persist a JSON value. Best effort: storage errors are dropped.
pub fn write_json<T: Serialize>(key: &str, value: &T) {
    if let Ok(json) = serde_json::to_string(value) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, &json);
        }
    }
}
