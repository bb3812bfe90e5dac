// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decoded answers of the JSON endpoint.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::ParseError;

/// Top-level key carrying the logical status of a JSON answer.
pub const STATUS_FIELD: &str = "status";

/// Value of [`STATUS_FIELD`] acknowledging a request.
pub const SUCCESS_STATUS: &str = "Success";

/// A flat key/value answer from the JSON endpoint.
///
/// The gateway encodes booleans as `0`/`1` and levels as integers; X-Dimmer
/// channels are nested objects.
///
/// # Examples
///
/// ```
/// use ipx800_lib::protocol::ApiResponse;
///
/// let response = ApiResponse::parse(r#"{"status": "Success", "R1": 1, "R2": 0}"#).unwrap();
/// assert!(response.is_success());
/// assert!(response.flag("R1").unwrap());
/// assert!(!response.flag("R2").unwrap());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiResponse {
    values: Map<String, Value>,
}

impl ApiResponse {
    /// Wraps an already decoded JSON object.
    #[must_use]
    pub fn new(values: Map<String, Value>) -> Self {
        Self { values }
    }

    /// Decodes a response body.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if the body is not JSON and
    /// `ParseError::UnexpectedFormat` if it is not a JSON object.
    pub fn parse(body: &str) -> Result<Self, ParseError> {
        match serde_json::from_str::<Value>(body)? {
            Value::Object(values) => Ok(Self { values }),
            other => Err(ParseError::UnexpectedFormat(format!(
                "expected a JSON object, got {other}"
            ))),
        }
    }

    /// Returns the logical status reported by the gateway, if any.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.values.get(STATUS_FIELD).and_then(Value::as_str)
    }

    /// Returns `true` if the gateway acknowledged the request.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status() == Some(SUCCESS_STATUS)
    }

    /// Returns the raw value of a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Returns the raw value of a key.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MissingField` if the key is absent.
    pub fn value(&self, key: &str) -> Result<&Value, ParseError> {
        self.values
            .get(key)
            .ok_or_else(|| ParseError::MissingField(key.to_string()))
    }

    /// Reads a `0`/`1` flag.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the key is absent or not numeric.
    pub fn flag(&self, key: &str) -> Result<bool, ParseError> {
        if let Some(b) = self.value(key)?.as_bool() {
            return Ok(b);
        }
        Ok(self.integer(key)? == 1)
    }

    /// Reads an integer.
    ///
    /// Numeric strings are accepted as well.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the key is absent or not an integer.
    pub fn integer(&self, key: &str) -> Result<i64, ParseError> {
        let value = self.value(key)?;
        value
            .as_i64()
            .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
            .ok_or_else(|| invalid(key, "an integer", value))
    }

    /// Reads a number.
    ///
    /// Numeric strings are accepted as well.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the key is absent or not numeric.
    pub fn number(&self, key: &str) -> Result<f64, ParseError> {
        let value = self.value(key)?;
        value
            .as_f64()
            .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
            .ok_or_else(|| invalid(key, "a number", value))
    }

    /// Reads a string.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the key is absent or not a string.
    pub fn text(&self, key: &str) -> Result<&str, ParseError> {
        let value = self.value(key)?;
        value.as_str().ok_or_else(|| invalid(key, "a string", value))
    }

    /// Deserializes the value of a key into `T`.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the key is absent or does not match `T`.
    pub fn field<T: DeserializeOwned>(&self, key: &str) -> Result<T, ParseError> {
        T::deserialize(self.value(key)?).map_err(|e| ParseError::InvalidValue {
            field: key.to_string(),
            message: e.to_string(),
        })
    }

    /// Adds every key of `other`, replacing existing keys.
    pub fn merge(&mut self, other: ApiResponse) {
        self.values.extend(other.values);
    }

    /// Returns the number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the answer holds no key.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over keys and raw values.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }

    /// Returns the underlying JSON object.
    #[must_use]
    pub fn into_inner(self) -> Map<String, Value> {
        self.values
    }
}

impl From<Map<String, Value>> for ApiResponse {
    fn from(values: Map<String, Value>) -> Self {
        Self::new(values)
    }
}

fn invalid(key: &str, expected: &str, value: &Value) -> ParseError {
    ParseError::InvalidValue {
        field: key.to_string(),
        message: format!("expected {expected}, got {value}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[test]
    fn parse_rejects_non_objects() {
        assert!(matches!(
            ApiResponse::parse("[1, 2]"),
            Err(ParseError::UnexpectedFormat(_))
        ));
        assert!(matches!(
            ApiResponse::parse("Success"),
            Err(ParseError::Json(_))
        ));
    }

    #[test]
    fn status_detection() {
        let ok = ApiResponse::parse(r#"{"status": "Success"}"#).unwrap();
        assert!(ok.is_success());

        let missing = ApiResponse::parse(r#"{"R1": 1}"#).unwrap();
        assert_eq!(missing.status(), None);
        assert!(!missing.is_success());

        let wrong_case = ApiResponse::parse(r#"{"status": "success"}"#).unwrap();
        assert!(!wrong_case.is_success());
    }

    #[test]
    fn typed_reads() {
        let response =
            ApiResponse::parse(r#"{"A1": 512, "THL1-TEMP": 21.5, "C3": "42", "FP1 Zone 1": 2}"#)
                .unwrap();
        assert_eq!(response.integer("A1").unwrap(), 512);
        assert!((response.number("THL1-TEMP").unwrap() - 21.5).abs() < f64::EPSILON);
        assert_eq!(response.integer("C3").unwrap(), 42);
        assert_eq!(response.integer("FP1 Zone 1").unwrap(), 2);
    }

    #[test]
    fn missing_and_invalid_fields() {
        let response = ApiResponse::parse(r#"{"R1": "on"}"#).unwrap();
        assert!(matches!(
            response.flag("R2"),
            Err(ParseError::MissingField(key)) if key == "R2"
        ));
        assert!(matches!(
            response.integer("R1"),
            Err(ParseError::InvalidValue { .. })
        ));
    }

    #[test]
    fn nested_field() {
        #[derive(Deserialize)]
        struct Channel {
            #[serde(rename = "Valeur")]
            value: u8,
        }

        let response = ApiResponse::parse(r#"{"G1": {"Etat": "ON", "Valeur": 80}}"#).unwrap();
        let channel: Channel = response.field("G1").unwrap();
        assert_eq!(channel.value, 80);
    }

    #[test]
    fn merge_is_a_flat_union() {
        let mut bulk = ApiResponse::parse(r#"{"R1": 1}"#).unwrap();
        bulk.merge(ApiResponse::parse(r#"{"PWM1": 50}"#).unwrap());
        assert_eq!(bulk.len(), 2);
        assert_eq!(bulk.integer("PWM1").unwrap(), 50);
    }
}
