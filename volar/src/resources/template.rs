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

use crate::constants::{
    ROUTE_TEMPLATE, ROUTE_TEMPLATE_CREATE, ROUTE_TEMPLATE_DELETE, ROUTE_TEMPLATE_UPDATE,
};
use crate::{Body, Client, Params};
use serde_json::Value;
use volar_core::Result;

impl Client {
    /// List the metadata templates of a site. `site` is required.
    pub async fn templates(&self, params: Params) -> Result<Value> {
        self.require(&params, &["site"], "\"site\" parameter is required")?;
        self.call_get(ROUTE_TEMPLATE, params).await
    }

    /// Create a metadata template.
    pub async fn template_create(&self, body: impl Into<Body>) -> Result<Value> {
        self.call_post(ROUTE_TEMPLATE_CREATE, body.into()).await
    }

    /// Update a metadata template.
    pub async fn template_update(&self, body: impl Into<Body>) -> Result<Value> {
        self.call_post(ROUTE_TEMPLATE_UPDATE, body.into()).await
    }

    /// Delete a metadata template.
    pub async fn template_delete(&self, body: impl Into<Body>) -> Result<Value> {
        self.call_post(ROUTE_TEMPLATE_DELETE, body.into()).await
    }
}
