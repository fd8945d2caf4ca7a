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

use crate::config::Config;
use crate::constants::{API_KEY, FORM_CONTENT_TYPE, SIGNATURE};
use crate::credential::Credential;
use crate::envelope::ApiEnvelope;
use crate::params::{Body, ParamValue, Params};
use crate::sign_request::RequestSigner;
use crate::upload::{HttpTransfer, Transfer};
use bytes::Bytes;
use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use http::Method;
use log::{debug, warn};
use serde_json::Value;
use std::fmt::{Debug, Formatter};
use std::sync::{Arc, Mutex};
use volar_core::hash::url_encode;
use volar_core::{Context, Error, Result};

/// A single API call: route, method, query parameters and body.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    /// Route relative to the host, e.g. `api/client/broadcast`.
    pub route: String,
    /// `GET` or `POST`.
    pub method: Method,
    /// Query parameters. `api_key` is added by the client.
    pub params: Params,
    /// Body, only sent with `POST`.
    pub body: Body,
}

impl RequestSpec {
    /// A `GET` request without parameters.
    pub fn get(route: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            method: Method::GET,
            params: Params::new(),
            body: Body::Empty,
        }
    }

    /// A `POST` request carrying `body`.
    pub fn post(route: impl Into<String>, body: impl Into<Body>) -> Self {
        Self {
            route: route.into(),
            method: Method::POST,
            params: Params::new(),
            body: body.into(),
        }
    }

    /// Replace the parameters.
    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    /// Add a single parameter.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(key, value);
        self
    }
}

/// URL and raw response of the most recent call, kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    /// Full request URL, signature included.
    pub url: String,
    /// Raw response body, `None` when nothing came back.
    pub response: Option<String>,
}

/// ClientState holds the credential and the diagnostic slots of a client.
///
/// The slots keep only the most recent failure and call. They are shared by
/// every clone of a client, so when calls run concurrently on one client the
/// slots show whichever finished last; the `Result` of each call is the
/// reliable source.
pub struct ClientState {
    credential: Credential,
    last_error: Mutex<Option<String>>,
    last_trace: Mutex<Option<Trace>>,
}

impl Debug for ClientState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientState")
            .field("credential", &self.credential)
            .finish_non_exhaustive()
    }
}

impl ClientState {
    fn new(credential: Credential) -> Self {
        Self {
            credential,
            last_error: Mutex::new(None),
            last_trace: Mutex::new(None),
        }
    }

    /// Overwrite the last error.
    pub fn record_error(&self, message: impl Into<String>) {
        *self.last_error.lock().expect("lock poisoned") = Some(message.into());
    }

    /// The most recent error message, if any call failed yet.
    pub fn error(&self) -> Option<String> {
        self.last_error.lock().expect("lock poisoned").clone()
    }

    fn record_trace(&self, trace: Trace) {
        *self.last_trace.lock().expect("lock poisoned") = Some(trace);
    }

    /// The most recent call.
    pub fn trace(&self) -> Option<Trace> {
        self.last_trace.lock().expect("lock poisoned").clone()
    }
}

/// Client signs and sends API calls.
///
/// Every call returns its own `Result`; failures are additionally recorded
/// so that [`Client::last_error`] keeps working for call-then-check callers.
#[derive(Clone)]
pub struct Client {
    ctx: Context,
    signer: RequestSigner,
    state: Arc<ClientState>,
    transfer: Arc<dyn Transfer>,
}

impl Debug for Client {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("ctx", &self.ctx)
            .field("state", &self.state)
            .field("transfer", &self.transfer)
            .finish()
    }
}

impl Client {
    /// Create a client. Uploads use [`HttpTransfer`] until another
    /// [`Transfer`] is configured.
    pub fn new(ctx: Context, credential: Credential) -> Self {
        Self {
            ctx,
            signer: RequestSigner::new(credential.secret.clone()),
            state: Arc::new(ClientState::new(credential)),
            transfer: Arc::new(HttpTransfer),
        }
    }

    /// Create a client from config, failing when the api key or secret is
    /// missing.
    ///
    /// `config.timeout` is not applied here: the timeout belongs to the
    /// [`volar_core::HttpSend`] in `ctx`.
    pub fn from_config(ctx: Context, config: &Config) -> Result<Self> {
        Ok(Self::new(ctx, config.credential()?))
    }

    /// Replace the mechanism used to move upload bytes to storage.
    pub fn with_transfer(mut self, transfer: impl Transfer) -> Self {
        self.transfer = Arc::new(transfer);
        self
    }

    /// The context this client runs in.
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// The credential this client signs with.
    pub fn credential(&self) -> &Credential {
        &self.state.credential
    }

    /// The shared diagnostic state.
    pub fn state(&self) -> &ClientState {
        &self.state
    }

    /// The most recent error message.
    pub fn last_error(&self) -> Option<String> {
        self.state.error()
    }

    /// The most recent request URL and response body.
    pub fn last_trace(&self) -> Option<Trace> {
        self.state.trace()
    }

    pub(crate) fn transfer(&self) -> &dyn Transfer {
        self.transfer.as_ref()
    }

    /// Sign and send an API call, returning the decoded success payload.
    ///
    /// Fails with:
    ///
    /// - `ConfigInvalid` for a `POST` without body or a method other than
    ///   `GET`/`POST`, before anything is sent
    /// - `Transport` when no response came back
    /// - `Decode` when the response isn't JSON, with the message
    ///   `"(<url>) <reason>"`
    /// - `Protocol` when the API answered `{"error": {...}}`, with the
    ///   message `"(<code>) <message>"`
    pub async fn request(&self, spec: RequestSpec) -> Result<Value> {
        self.send(spec).await.map_err(|e| self.fail(e))
    }

    /// Record an error as the last error and hand it back.
    pub(crate) fn fail(&self, err: Error) -> Error {
        warn!("volar call failed: {err:?}");
        self.state.record_error(err.to_string());
        err
    }

    /// [`Client::request`] without recording the failure.
    pub(crate) async fn send(&self, spec: RequestSpec) -> Result<Value> {
        let RequestSpec {
            route,
            method,
            mut params,
            body,
        } = spec;

        if method != Method::GET && method != Method::POST {
            return Err(Error::config_invalid(format!(
                "unsupported method {method}, only GET and POST are allowed"
            )));
        }
        if method == Method::POST && body.is_empty() {
            return Err(Error::config_invalid(
                "If type is POST, post_body is expected to be populated as an array or as a non-empty string",
            )
            .with_context(format!("route: {route}")));
        }

        params.insert(API_KEY, self.credential().api_key.clone());
        let signature = self.signer.sign(&route, method.as_str(), &params, &body);
        let url = format!(
            "{}{}",
            self.credential().endpoint(&route),
            build_query(&params, &signature)
        );

        let mut req = http::Request::builder().method(method.clone()).uri(&url);
        let payload = if method == Method::POST {
            let payload = body.to_bytes()?;
            req = req
                .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
                .header(CONTENT_LENGTH, payload.len());
            payload
        } else {
            Bytes::new()
        };
        let req = req.body(payload).map_err(|e| {
            Error::config_invalid(format!("({url}) invalid request: {e}")).with_source(e)
        })?;

        debug!("sending {method} {url}");
        let resp = match self.ctx.http_send(req).await {
            Ok(resp) => resp,
            Err(e) => {
                self.state.record_trace(Trace {
                    url: url.clone(),
                    response: None,
                });
                return Err(Error::transport(format!("({url}) {e}"))
                    .with_source(e)
                    .with_context(format!("route: {route}")));
            }
        };

        let body = resp.into_body();
        let trace = Trace {
            url: url.clone(),
            response: Some(String::from_utf8_lossy(&body).to_string()),
        };
        debug!("got response for {url}: {:?}", trace.response);
        self.state.record_trace(trace);

        let envelope = ApiEnvelope::decode(&body).map_err(|e| {
            Error::decode(format!("({url}) {}", e.message()))
                .with_source(e)
                .with_context(format!("route: {route}"))
        })?;
        envelope
            .into_result()
            .map_err(|e| e.with_context(format!("url: {url}")))
    }
}

/// Build `?k=v&...&signature=<sig>` in insertion order. Values are URL
/// encoded, nested maps become `key[subkey]=value`, the signature is already
/// URL safe.
fn build_query(params: &Params, signature: &str) -> String {
    let mut query = String::new();
    let mut push = |pair: String| {
        query.push(if query.is_empty() { '?' } else { '&' });
        query.push_str(&pair);
    };

    for (key, value) in params.iter() {
        match value {
            ParamValue::Scalar(v) => push(format!("{key}={}", url_encode(v))),
            ParamValue::Map(map) => {
                for (sub_key, sub_value) in map {
                    push(format!(
                        "{key}[{}]={}",
                        url_encode(sub_key),
                        url_encode(sub_value)
                    ));
                }
            }
        }
    }
    push(format!("{SIGNATURE}={signature}"));

    query
}
