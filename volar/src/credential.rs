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

use std::fmt::{Debug, Formatter};
use volar_core::utils::Redact;

/// Credential holds everything needed to address and authenticate against
/// the API. It never changes for the lifetime of a client.
#[derive(Default, Clone, PartialEq, Eq)]
pub struct Credential {
    /// Api key issued for the account, sent with every request.
    pub api_key: String,
    /// Shared secret used to sign requests. Never sent.
    pub secret: String,
    /// Host name of the API, without scheme.
    pub host: String,
    /// Talk to the API over https instead of http.
    pub secure: bool,
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("api_key", &Redact::from(&self.api_key))
            .field("secret", &Redact::from(&self.secret))
            .field("host", &self.host)
            .field("secure", &self.secure)
            .finish()
    }
}

impl Credential {
    /// Create a credential talking to `host` over http.
    pub fn new(api_key: &str, secret: &str, host: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            secret: secret.to_string(),
            host: host.to_string(),
            secure: false,
        }
    }

    /// Use https.
    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Scheme matching the transport security flag.
    pub fn scheme(&self) -> &'static str {
        if self.secure {
            "https"
        } else {
            "http"
        }
    }

    /// `scheme://host/route` with the route's surrounding slashes removed.
    pub fn endpoint(&self, route: &str) -> String {
        format!("{}://{}/{}", self.scheme(), self.host, route.trim_matches('/'))
    }
}
