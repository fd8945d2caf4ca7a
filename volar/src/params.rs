// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Request parameters and bodies.

use serde_json::Value;
use volar_core::Result;

/// A query parameter value: a plain string or a nested string mapping that
/// is sent as `key[subkey]=value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// A plain value.
    Scalar(String),
    /// A nested mapping, kept in insertion order.
    Map(Vec<(String, String)>),
}

impl ParamValue {
    /// Build a nested mapping value.
    ///
    /// Later duplicates of a subkey replace earlier ones in place.
    pub fn map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut map: Vec<(String, String)> = Vec::new();
        for (k, v) in entries {
            let (k, v) = (k.into(), v.into());
            match map.iter_mut().find(|(key, _)| *key == k) {
                Some(entry) => entry.1 = v,
                None => map.push((k, v)),
            }
        }
        ParamValue::Map(map)
    }

    /// Returns the scalar value, if this is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Scalar(v) => Some(v),
            ParamValue::Map(_) => None,
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Scalar(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Scalar(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Scalar(value.clone())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Scalar(value.to_string())
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        ParamValue::Scalar(value.to_string())
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Scalar(value.to_string())
    }
}

/// Booleans travel the way the API has always received them: `1` and an
/// empty string.
impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Scalar(if value { "1" } else { "" }.to_string())
    }
}

/// Insertion-ordered query parameters.
///
/// Insertion order is what goes on the wire; signing sorts a borrowed view
/// and never reorders the collection itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, ParamValue)>);

impl Params {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`Params::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a parameter. An existing key keeps its position and gets the
    /// new value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let (key, value) = (key.into(), value.into());
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    /// Add every parameter of `other` whose key is not present yet.
    ///
    /// Values already in `self` win, so a caller can't have its own
    /// parameters overwritten by server-issued ones.
    pub fn union(mut self, other: Params) -> Self {
        for (k, v) in other.0 {
            if !self.contains_key(&k) {
                self.0.push((k, v));
            }
        }
        self
    }

    /// Get a parameter by key.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Check whether the key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of top-level parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

/// A POST body.
///
/// Only [`Body::Text`] takes part in the request signature. A structured body
/// is sent serialized but is never signed, so the server can only verify it
/// if the caller turned it into text first (see [`Body::canonicalize`]).
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Body {
    /// No body.
    #[default]
    Empty,
    /// A pre-serialized body, signed verbatim.
    Text(String),
    /// A structured body, serialized with `serde_json` on the wire only.
    Structured(Value),
}

impl Body {
    /// Whether the body counts as absent for a POST.
    pub fn is_empty(&self) -> bool {
        match self {
            Body::Empty => true,
            Body::Text(s) => s.is_empty(),
            Body::Structured(v) => is_empty_value(v),
        }
    }

    /// Turn a non-empty structured body into its JSON text so that it is
    /// signed the same way it is sent. Other bodies are returned unchanged.
    pub fn canonicalize(self) -> Result<Body> {
        match self {
            Body::Structured(v) if !is_empty_value(&v) => {
                Ok(Body::Text(serde_json::to_string(&v)?))
            }
            body => Ok(body),
        }
    }

    /// The bytes that go on the wire.
    pub fn to_bytes(&self) -> Result<bytes::Bytes> {
        Ok(match self {
            Body::Empty => bytes::Bytes::new(),
            Body::Text(s) => bytes::Bytes::copy_from_slice(s.as_bytes()),
            Body::Structured(v) => bytes::Bytes::from(serde_json::to_vec(v)?),
        })
    }
}

fn is_empty_value(v: &Value) -> bool {
    match v {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
        _ => false,
    }
}

impl From<&str> for Body {
    fn from(value: &str) -> Self {
        Body::Text(value.to_string())
    }
}

impl From<String> for Body {
    fn from(value: String) -> Self {
        Body::Text(value)
    }
}

impl From<Value> for Body {
    fn from(value: Value) -> Self {
        Body::Structured(value)
    }
}
