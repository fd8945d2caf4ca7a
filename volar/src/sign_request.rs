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

use crate::constants::SIGNATURE_LENGTH;
use crate::params::{Body, ParamValue, Params};
use std::fmt::{Debug, Formatter};
use volar_core::hash::{base64_hmac_sha256, url_encode};
use volar_core::utils::Redact;

/// RequestSigner computes the `signature` query parameter of an API call.
///
/// The string to sign is `secret + METHOD + route`, followed by every
/// parameter as `key=value` (nested maps as `key[subkey]=value`), keys sorted
/// byte-wise at both levels, values unencoded, and finally a text body. The
/// signature is the HMAC-SHA256 of that string keyed with the secret, base64
/// encoded, cut to 43 characters and URL encoded.
///
/// Signing is a pure function of its inputs.
#[derive(Clone)]
pub struct RequestSigner {
    secret: String,
}

impl Debug for RequestSigner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSigner")
            .field("secret", &Redact::from(&self.secret))
            .finish()
    }
}

impl RequestSigner {
    /// Create a signer for the given shared secret.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Build the canonical string to sign.
    ///
    /// An empty `method` means `GET`. Structured bodies are not part of the
    /// string; see [`Body`].
    pub fn string_to_sign(
        &self,
        route: &str,
        method: &str,
        params: &Params,
        body: &Body,
    ) -> String {
        let method = if method.is_empty() {
            "GET".to_string()
        } else {
            method.to_ascii_uppercase()
        };

        let mut s = String::with_capacity(self.secret.len() + route.len() + 64);
        s.push_str(&self.secret);
        s.push_str(&method);
        s.push_str(route.trim_matches('/'));

        let mut sorted: Vec<(&str, &ParamValue)> = params.iter().collect();
        sorted.sort_by(|a, b| a.0.cmp(b.0));

        for (key, value) in sorted {
            match value {
                ParamValue::Scalar(v) => {
                    s.push_str(key);
                    s.push('=');
                    s.push_str(v);
                }
                ParamValue::Map(map) => {
                    let mut entries: Vec<&(String, String)> = map.iter().collect();
                    entries.sort_by(|a, b| a.0.cmp(&b.0));

                    for (sub_key, sub_value) in entries {
                        s.push_str(key);
                        s.push('[');
                        s.push_str(sub_key);
                        s.push_str("]=");
                        s.push_str(sub_value);
                    }
                }
            }
        }

        if let Body::Text(text) = body {
            s.push_str(text);
        }

        s
    }

    /// Calculate the URL-safe signature for a request.
    pub fn sign(&self, route: &str, method: &str, params: &Params, body: &Body) -> String {
        let string_to_sign = self.string_to_sign(route, method, params, body);
        let encoded = base64_hmac_sha256(self.secret.as_bytes(), string_to_sign.as_bytes());

        // base64 output is ascii, slicing by byte is safe.
        let truncated = &encoded[..SIGNATURE_LENGTH.min(encoded.len())];
        url_encode(truncated).trim_end_matches('=').to_string()
    }
}
