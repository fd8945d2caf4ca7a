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

//! Endpoint methods of [`Client`], one module per resource family.
//!
//! Every method is a thin wrapper around [`Client::request`]: it checks the
//! parameters the API insists on, then signs and sends one call. Methods that
//! attach a media file first run an [`UploadCoordinator`] and merge the
//! receipt into their parameters.

mod broadcast;
mod info;
mod playlist;
mod section;
mod template;
mod videoclip;

use crate::client::{Client, RequestSpec};
use crate::params::{Body, Params};
use crate::upload::UploadCoordinator;
use log::debug;
use serde_json::Value;
use volar_core::{Error, Result};

impl Client {
    async fn call_get(&self, route: &str, params: Params) -> Result<Value> {
        self.request(RequestSpec::get(route).with_params(params)).await
    }

    /// Structured bodies are turned into JSON text first so the server can
    /// verify them against the signature.
    async fn call_post(&self, route: &str, body: Body) -> Result<Value> {
        let body = body.canonicalize().map_err(|e| self.fail(e))?;
        self.request(RequestSpec::post(route, body)).await
    }

    /// Fail unless at least one of `keys` is present.
    fn require(&self, params: &Params, keys: &[&str], message: &str) -> Result<()> {
        if keys.iter().any(|k| params.contains_key(k)) {
            return Ok(());
        }
        Err(self.fail(Error::config_invalid(message)))
    }

    /// Upload `path`, then send `params` plus the receipt to `route`.
    ///
    /// Values already in `params` win over the receipt's.
    async fn call_with_upload(&self, route: &str, params: Params, path: &str) -> Result<Value> {
        let receipt = UploadCoordinator::new(self).upload(path).await?;
        debug!("attaching upload {} to {route}", receipt.upload_id);

        self.call_get(route, params.union(receipt.into_params())).await
    }

    async fn poster(&self, route: &str, params: Params, image_path: &str) -> Result<Value> {
        self.require(&params, &["id"], "id is required")?;
        self.call_with_upload(route, params, image_path).await
    }

    async fn archive(&self, route: &str, params: Params, file_path: Option<&str>) -> Result<Value> {
        self.require(&params, &["id"], "id is required")?;
        match file_path.filter(|p| !p.is_empty()) {
            None => self.call_get(route, params).await,
            Some(path) => self.call_with_upload(route, params, path).await,
        }
    }
}
