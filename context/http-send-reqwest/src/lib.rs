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

//! Reqwest-based HTTP sending implementation for volar.
//!
//! `ReqwestHttpSend` implements the `HttpSend` trait from `volar_core` on top
//! of a `reqwest::Client`. Both signed API calls and storage transfers go
//! through it.
//!
//! ## Example
//!
//! ```no_run
//! use std::time::Duration;
//! use volar_core::Context;
//! use volar_http_send_reqwest::ReqwestHttpSend;
//!
//! # fn example() -> volar_core::Result<()> {
//! let ctx = Context::new()
//!     .with_http_send(ReqwestHttpSend::with_timeout(Duration::from_secs(30))?);
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::BodyExt;
use reqwest::{Client, Request};
use std::time::Duration;
use volar_core::{Error, HttpSend, Result};

/// Reqwest-based implementation of the `HttpSend` trait.
///
/// The default client has no request timeout; use [`ReqwestHttpSend::with_timeout`]
/// or hand in a configured client when one is needed.
#[derive(Debug, Default, Clone)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create a new ReqwestHttpSend whose requests give up after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::config_invalid("failed to build http client").with_source(e))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let req = Request::try_from(req)
            .map_err(|e| Error::config_invalid(e.to_string()).with_source(e))?;
        let resp: http::Response<_> = self
            .client
            .execute(req)
            .await
            .map_err(|e| Error::transport(e.to_string()).with_source(e))?
            .into();

        let (parts, body) = resp.into_parts();
        let bs = BodyExt::collect(body)
            .await
            .map(|buf| buf.to_bytes())
            .map_err(|e| Error::transport(e.to_string()).with_source(e))?;
        Ok(http::Response::from_parts(parts, bs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use volar_core::ErrorKind;

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let send = ReqwestHttpSend::with_timeout(Duration::from_secs(2)).unwrap();
        let req = http::Request::get("http://127.0.0.1:1/api/client/info")
            .body(Bytes::new())
            .unwrap();

        let err = send.http_send(req).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transport);
    }
}
