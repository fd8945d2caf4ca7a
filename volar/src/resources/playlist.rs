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
    ROUTE_PLAYLIST, ROUTE_PLAYLIST_CREATE, ROUTE_PLAYLIST_DELETE, ROUTE_PLAYLIST_UPDATE,
};
use crate::{Body, Client, Params};
use serde_json::Value;
use volar_core::Result;

impl Client {
    /// List playlists.
    pub async fn playlists(&self, params: Params) -> Result<Value> {
        self.call_get(ROUTE_PLAYLIST, params).await
    }

    /// Create a playlist.
    pub async fn playlist_create(&self, body: impl Into<Body>) -> Result<Value> {
        self.call_post(ROUTE_PLAYLIST_CREATE, body.into()).await
    }

    /// Update a playlist.
    pub async fn playlist_update(&self, body: impl Into<Body>) -> Result<Value> {
        self.call_post(ROUTE_PLAYLIST_UPDATE, body.into()).await
    }

    /// Delete a playlist.
    pub async fn playlist_delete(&self, body: impl Into<Body>) -> Result<Value> {
        self.call_post(ROUTE_PLAYLIST_DELETE, body.into()).await
    }
}
