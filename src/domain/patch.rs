//! Three-state update field.
//!
//! A merge update must tell apart "the caller did not mention this field"
//! from "the caller sent an explicit null" from "the caller sent a value".
//! Plain `Option` collapses the first two, so update request types carry
//! [`Patch`] fields instead.

use serde::{Deserialize, Deserializer};

/// State of a single field in a partial-update request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    /// Field was absent from the request; leave the stored value untouched.
    Unset,
    /// Field was an explicit null.
    Cleared,
    /// Field carried a value.
    Value(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Unset
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(value) => Patch::Value(value),
            None => Patch::Cleared,
        }
    }
}

impl<T> Patch<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, Patch::Unset)
    }

    pub fn is_cleared(&self) -> bool {
        matches!(self, Patch::Cleared)
    }

    /// Borrow the carried value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Patch::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Consume the patch, yielding the carried value.
    pub fn into_value(self) -> Option<T> {
        match self {
            Patch::Value(value) => Some(value),
            _ => None,
        }
    }
}

impl Patch<String> {
    /// The carried text, if it is non-empty.
    ///
    /// Merge rules treat an empty string the same as an absent field:
    /// "no change", never "clear".
    pub fn non_empty(&self) -> Option<&str> {
        match self {
            Patch::Value(text) if !text.is_empty() => Some(text),
            _ => None,
        }
    }
}

// Absent fields fall back to `Default` (= `Unset`) via #[serde(default)]
// on the containing struct; a present field deserializes here, where null
// becomes `Cleared`.
impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Patch::from)
    }
}
