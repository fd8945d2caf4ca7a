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

//! Decoding of API responses.

use serde_json::Value;
use std::fmt::{Display, Formatter};
use volar_core::{Error, Result};

/// A decoded API response: either the success payload or the structured
/// error the API answered with. Never both.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiEnvelope {
    /// Any payload without a populated `error` member.
    Success(Value),
    /// `{"error": {"code": .., "message": ..}}`
    Error(ApiError),
}

/// The `error` member of a failed API response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// Error code as sent by the API, usually an integer.
    pub code: String,
    /// Human readable message.
    pub message: String,
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}) {}", self.code, self.message)
    }
}

impl ApiError {
    fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(obj) => Self {
                code: obj.get("code").map(scalar_to_string).unwrap_or_default(),
                message: obj.get("message").map(scalar_to_string).unwrap_or_default(),
            },
            other => Self {
                code: String::new(),
                message: scalar_to_string(other),
            },
        }
    }
}

impl ApiEnvelope {
    /// Decode a raw response body.
    ///
    /// An empty body or invalid JSON is a decode error.
    pub fn decode(body: &[u8]) -> Result<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(Error::decode("empty response body"));
        }

        let value: Value = serde_json::from_slice(body)
            .map_err(|e| Error::decode(format!("invalid JSON in response: {e}")).with_source(e))?;

        match value.get("error") {
            Some(err) if is_populated(err) => Ok(ApiEnvelope::Error(ApiError::from_value(err))),
            _ => Ok(ApiEnvelope::Success(value)),
        }
    }

    /// Turn the envelope into the success payload, or a protocol error
    /// carrying `"(<code>) <message>"`.
    pub fn into_result(self) -> Result<Value> {
        match self {
            ApiEnvelope::Success(v) => Ok(v),
            ApiEnvelope::Error(e) => Err(Error::protocol(e.to_string())),
        }
    }
}

/// Mirrors what the API treats as "no error": null, false, zero, empty
/// strings, `"0"` and empty containers.
pub(crate) fn is_populated(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Render a JSON scalar the way it would appear in a query string.
pub(crate) fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
