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

//! Client for the Volar media-management API.
//!
//! Every call is signed with the account secret: the method, route, sorted
//! parameters and text body are hashed with HMAC-SHA256 and the truncated
//! digest travels as the `signature` query parameter. Media files go through
//! a two-phase upload: the API hands out a pre-authorized storage
//! destination, the bytes go there directly, and the resulting receipt is
//! attached to a broadcast or video clip in a final call.
//!
//! ## Example
//!
//! ```no_run
//! use volar::{Client, Config, Params};
//!
//! #[tokio::main]
//! async fn main() -> volar::Result<()> {
//!     let config = Config::default()
//!         .with_api_key("my-api-key")
//!         .with_secret("my-secret")
//!         .with_secure(true);
//!     let client = Client::from_config(volar::default_context(config.timeout)?, &config)?;
//!
//!     let broadcasts = client
//!         .broadcasts(Params::new().with("site", "mysite").with("per_page", 10u32))
//!         .await?;
//!     println!("{broadcasts}");
//!
//!     client
//!         .broadcast_poster(Params::new().with("id", 42u64), "/tmp/poster.jpg")
//!         .await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Errors
//!
//! Every call returns its own [`Result`]. The message of the most recent
//! failure is also kept on the client, see [`Client::last_error`].
//!
//! ## Features
//!
//! - `default-context` (default): [`default_context`] and [`default_client`],
//!   wiring reqwest, tokio file reading and the OS environment into a
//!   [`Context`].

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod client;
pub use client::Client;
pub use client::ClientState;
pub use client::RequestSpec;
pub use client::Trace;

mod config;
pub use config::Config;

mod constants;

mod credential;
pub use credential::Credential;

mod envelope;
pub use envelope::ApiEnvelope;
pub use envelope::ApiError;

mod params;
pub use params::Body;
pub use params::ParamValue;
pub use params::Params;

mod resources;

mod sign_request;
pub use sign_request::RequestSigner;

mod upload;
pub use upload::check_transfer_response;
pub use upload::Destination;
pub use upload::HttpTransfer;
pub use upload::StorageError;
pub use upload::Transfer;
pub use upload::UploadCoordinator;
pub use upload::UploadHandshake;
pub use upload::UploadReceipt;
pub use upload::UploadState;

pub use volar_core::{Context, Env, Error, ErrorKind, FileRead, HttpSend, OsEnv, Result};

#[cfg(feature = "default-context")]
use std::time::Duration;

/// Build a [`Context`] backed by reqwest, tokio and the OS environment.
///
/// Requests give up after `timeout` when one is given.
#[cfg(feature = "default-context")]
pub fn default_context(timeout: Option<Duration>) -> Result<Context> {
    use volar_file_read_tokio::TokioFileRead;
    use volar_http_send_reqwest::ReqwestHttpSend;

    let http = match timeout {
        Some(timeout) => ReqwestHttpSend::with_timeout(timeout)?,
        None => ReqwestHttpSend::default(),
    };

    Ok(Context::new()
        .with_file_read(TokioFileRead)
        .with_http_send(http)
        .with_env(OsEnv))
}

/// Create a client configured from `VOLAR_*` environment variables.
///
/// ```no_run
/// # async fn example() -> volar::Result<()> {
/// let client = volar::default_client()?;
/// let sites = client.sites(volar::Params::new()).await?;
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "default-context")]
pub fn default_client() -> Result<Client> {
    let probe = Context::new().with_env(OsEnv);
    let config = Config::default().from_env(&probe);

    Client::from_config(default_context(config.timeout)?, &config)
}
