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

use crate::constants::*;
use crate::credential::Credential;
use std::time::Duration;
use volar_core::{Context, Error, Result};

/// Config carries all the configuration for a volar client.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// `api_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `VOLAR_API_KEY`
    pub api_key: Option<String>,
    /// `secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `VOLAR_SECRET`
    pub secret: Option<String>,
    /// `host` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `VOLAR_HOST`
    /// - default to `vcloud.volarvideo.com`
    pub host: Option<String>,
    /// `secure` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `VOLAR_SECURE`, `true`, `1` or `on` enable it
    /// - default to `false`
    pub secure: Option<bool>,
    /// `timeout` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `VOLAR_TIMEOUT` in seconds
    ///
    /// No timeout is applied when unset.
    pub timeout: Option<Duration>,
}

impl Config {
    /// Set the api key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the shared secret.
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    /// Set the API host.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Use https.
    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = Some(secure);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(VOLAR_API_KEY) {
            self.api_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(VOLAR_SECRET) {
            self.secret.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(VOLAR_HOST) {
            self.host.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(VOLAR_SECURE) {
            self.secure
                .get_or_insert(matches!(v.to_ascii_lowercase().as_str(), "true" | "1" | "on"));
        }
        if let Some(v) = ctx.env_var(VOLAR_TIMEOUT) {
            match v.trim().parse::<u64>() {
                Ok(secs) => {
                    self.timeout.get_or_insert(Duration::from_secs(secs));
                }
                Err(_) => log::warn!("ignoring {VOLAR_TIMEOUT}={v}: not a number of seconds"),
            }
        }

        self
    }

    /// Build the client credential, failing if the api key or secret is missing.
    pub fn credential(&self) -> Result<Credential> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::config_invalid("api_key is required"))?;
        let secret = self
            .secret
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::config_invalid("secret is required"))?;

        Ok(Credential::new(
            api_key,
            secret,
            self.host.as_deref().unwrap_or(DEFAULT_HOST),
        )
        .with_secure(self.secure.unwrap_or(false)))
    }
}
