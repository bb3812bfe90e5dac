// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Request parameter sets.

use std::fmt;

/// Query key under which the API key travels on the JSON endpoint.
pub const API_KEY_PARAM: &str = "key";

/// Ordered set of command parameters sent as the request query.
///
/// Keys are IPX800 command names (`Get`, `SetR`, `SetG03`, `Time`, ...).
/// Inserting an existing key replaces its value in place, so the order of
/// first insertion is kept.
///
/// # Examples
///
/// ```
/// use ipx800_lib::protocol::RequestParams;
///
/// let params = RequestParams::new()
///     .with("SetG03", 101)
///     .with("Time", 500);
/// assert_eq!(params.to_query_string(), "SetG03=101&Time=500");
///
/// let get = RequestParams::get("XPWM|1-24");
/// assert_eq!(get.to_query_string(), "Get=XPWM%7C1-24");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams {
    entries: Vec<(String, String)>,
}

impl RequestParams {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a read command `Get=<category>`.
    #[must_use]
    pub fn get(category: impl fmt::Display) -> Self {
        Self::new().with("Get", category)
    }

    /// Adds a parameter, consuming and returning the set.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.insert(key, value);
        self
    }

    /// Adds a parameter or replaces the value of an existing key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl fmt::Display) {
        let key = key.into();
        let value = value.to_string();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Returns the value of a key.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns `true` if the key is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.value(key).is_some()
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no parameter is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Renders the set as a percent-encoded query string.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        self.entries
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Returns a copy with the API key placed first.
    ///
    /// A `key` entry supplied by the caller is left untouched and no second
    /// one is added.
    pub(crate) fn with_api_key(&self, api_key: &str) -> Self {
        if self.contains_key(API_KEY_PARAM) {
            return self.clone();
        }
        let mut entries = Vec::with_capacity(self.entries.len() + 1);
        entries.push((API_KEY_PARAM.to_string(), api_key.to_string()));
        entries.extend(self.entries.iter().cloned());
        Self { entries }
    }
}

impl fmt::Display for RequestParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

impl<K, V> FromIterator<(K, V)> for RequestParams
where
    K: Into<String>,
    V: fmt::Display,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replaces_in_place() {
        let mut params = RequestParams::new().with("SetR", 1).with("Time", 500);
        params.insert("SetR", 2);
        assert_eq!(params.len(), 2);
        assert_eq!(params.to_query_string(), "SetR=2&Time=500");
    }

    #[test]
    fn increment_tokens_are_encoded() {
        let params = RequestParams::new().with("SetC01", "+5");
        assert_eq!(params.to_query_string(), "SetC01=%2B5");
    }

    #[test]
    fn api_key_is_prepended_once() {
        let params = RequestParams::get("R").with("SetR", 3);
        let with_key = params.with_api_key("secret");

        assert_eq!(with_key.len(), params.len() + 1);
        assert_eq!(with_key.value(API_KEY_PARAM), Some("secret"));
        for (key, value) in params.iter() {
            assert_eq!(with_key.value(key), Some(value));
        }
        assert_eq!(with_key.to_query_string(), "key=secret&Get=R&SetR=3");
    }

    #[test]
    fn api_key_never_overwrites_caller_entry() {
        let params = RequestParams::get("R").with(API_KEY_PARAM, "caller");
        let with_key = params.with_api_key("secret");
        assert_eq!(with_key, params);
    }

    #[test]
    fn from_iterator_keeps_order() {
        let params: RequestParams = [("SetPWM", "4"), ("PWMValue", "100"), ("PWMDelay", "500")]
            .into_iter()
            .collect();
        assert_eq!(
            params.to_query_string(),
            "SetPWM=4&PWMValue=100&PWMDelay=500"
        );
    }

    #[test]
    fn empty_set() {
        let params = RequestParams::new();
        assert!(params.is_empty());
        assert_eq!(params.to_query_string(), "");
    }
}
