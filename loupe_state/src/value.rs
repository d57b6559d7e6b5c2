// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tagged state value and its merge.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

/// Keyed children of a [`StateValue::Map`].
pub type StateMap = HashMap<String, StateValue>;

/// A node of viewer state.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum StateValue {
    /// Explicitly empty.
    #[default]
    Null,
    /// A flag.
    Bool(bool),
    /// Any numeric setting.
    Number(f64),
    /// Text.
    String(String),
    /// An ordered list, always replaced as a whole by a merge.
    List(Vec<StateValue>),
    /// Named children, merged key by key.
    Map(StateMap),
}

impl StateValue {
    /// Builds a map from `(key, value)` pairs.
    #[must_use]
    pub fn map<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Self)>,
    {
        Self::Map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Merges `patch` into `self`.
    ///
    /// Two maps merge key by key, recursing into values present on both
    /// sides. Every other combination replaces `self` with `patch`.
    pub fn merge_from(&mut self, patch: Self) {
        match (self, patch) {
            (Self::Map(base), Self::Map(patch)) => {
                for (key, value) in patch {
                    match base.get_mut(&key) {
                        Some(existing) => existing.merge_from(value),
                        None => {
                            base.insert(key, value);
                        }
                    }
                }
            }
            (this, patch) => *this = patch,
        }
    }

    /// Consuming form of [`StateValue::merge_from`].
    #[must_use]
    pub fn merged(mut self, patch: Self) -> Self {
        self.merge_from(patch);
        self
    }

    /// Returns the child at `key` if this is a map.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Self> {
        self.as_map()?.get(key)
    }

    /// Follows `path` through nested maps.
    ///
    /// An empty path returns `self`.
    #[must_use]
    pub fn get_path(&self, path: &[&str]) -> Option<&Self> {
        path.iter().try_fold(self, |node, key| node.get(key))
    }

    /// Returns `true` for [`StateValue::Null`].
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the flag if this is a [`StateValue::Bool`].
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the number if this is a [`StateValue::Number`].
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the text if this is a [`StateValue::String`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the items if this is a [`StateValue::List`].
    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the children if this is a [`StateValue::Map`].
    #[must_use]
    pub fn as_map(&self) -> Option<&StateMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }
}

/// Returns `base` with `patch` merged into it.
///
/// See [`StateValue::merge_from`] for the rules.
#[must_use]
pub fn merge(base: StateValue, patch: StateValue) -> StateValue {
    base.merged(patch)
}

impl From<bool> for StateValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for StateValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for StateValue {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for StateValue {
    fn from(value: &str) -> Self {
        Self::String(value.into())
    }
}

impl From<String> for StateValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<Self>> for StateValue {
    fn from(value: Vec<Self>) -> Self {
        Self::List(value)
    }
}

impl From<StateMap> for StateValue {
    fn from(value: StateMap) -> Self {
        Self::Map(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for StateValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::{StateValue, merge};

    #[test]
    fn primitives_overwrite() {
        assert_eq!(merge(1.into(), 2.into()), StateValue::Number(2.0));
        assert_eq!(merge(true.into(), "x".into()), StateValue::from("x"));
        assert_eq!(merge("x".into(), StateValue::Null), StateValue::Null);
    }

    #[test]
    fn lists_replace_wholesale() {
        let base = StateValue::List(vec![1.into(), 2.into(), 3.into()]);
        let patch = StateValue::List(vec![9.into()]);
        assert_eq!(merge(base, patch.clone()), patch);
    }

    #[test]
    fn map_replaces_non_map_and_vice_versa() {
        let map = StateValue::map([("a", 1.into())]);
        assert_eq!(merge(5.into(), map.clone()), map);
        assert_eq!(merge(map, 5.into()), StateValue::Number(5.0));
    }

    #[test]
    fn maps_merge_recursively() {
        let base = StateValue::map([
            ("a", 1.into()),
            ("nested", StateValue::map([("x", 1.into()), ("y", 2.into())])),
        ]);
        let patch = StateValue::map([
            ("b", 2.into()),
            ("nested", StateValue::map([("y", 20.into()), ("z", 30.into())])),
        ]);
        let merged = merge(base, patch);
        let expected = StateValue::map([
            ("a", 1.into()),
            ("b", 2.into()),
            (
                "nested",
                StateValue::map([("x", 1.into()), ("y", 20.into()), ("z", 30.into())]),
            ),
        ]);
        assert_eq!(merged, expected);
    }

    #[test]
    fn null_in_patch_clears_key_value() {
        let base = StateValue::map([("selected", "abc".into())]);
        let merged = base.merged(StateValue::map([("selected", StateValue::Null)]));
        assert_eq!(merged.get("selected"), Some(&StateValue::Null));
    }

    #[test]
    fn accessors() {
        let v = StateValue::map([("opts", StateValue::map([("fps", 30.into())]))]);
        assert_eq!(v.get_path(&[]), Some(&v));
        assert_eq!(v.get_path(&["opts", "fps"]).and_then(StateValue::as_f64), Some(30.0));
        assert_eq!(v.get_path(&["opts", "fps", "deeper"]), None);
        assert_eq!(v.get("missing"), None);
        assert!(StateValue::from(None::<bool>).is_null());
        assert_eq!(StateValue::from(Some(true)).as_bool(), Some(true));
        assert_eq!(StateValue::from("hi").as_str(), Some("hi"));
        assert_eq!(StateValue::Null.as_list(), None);
    }
}
