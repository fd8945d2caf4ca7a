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
    ROUTE_BROADCAST, ROUTE_BROADCAST_ARCHIVE, ROUTE_BROADCAST_ASSIGN_PLAYLIST,
    ROUTE_BROADCAST_CREATE, ROUTE_BROADCAST_DELETE, ROUTE_BROADCAST_DELETED,
    ROUTE_BROADCAST_POSTER, ROUTE_BROADCAST_REMOVE_PLAYLIST, ROUTE_BROADCAST_UPDATE,
};
use crate::{Body, Client, Params};
use serde_json::Value;
use volar_core::Result;

impl Client {
    /// List broadcasts. `site` narrows the list to one site.
    pub async fn broadcasts(&self, params: Params) -> Result<Value> {
        self.call_get(ROUTE_BROADCAST, params).await
    }

    /// List deleted broadcasts.
    pub async fn broadcasts_deleted(&self, params: Params) -> Result<Value> {
        self.call_get(ROUTE_BROADCAST_DELETED, params).await
    }

    /// Create a broadcast.
    ///
    /// `body` is either JSON text or a JSON value; `site` and `title` are
    /// required by the API.
    pub async fn broadcast_create(&self, body: impl Into<Body>) -> Result<Value> {
        self.call_post(ROUTE_BROADCAST_CREATE, body.into()).await
    }

    /// Update a broadcast identified by `id` in `body`.
    pub async fn broadcast_update(&self, body: impl Into<Body>) -> Result<Value> {
        self.call_post(ROUTE_BROADCAST_UPDATE, body.into()).await
    }

    /// Delete a broadcast identified by `id` in `body`.
    pub async fn broadcast_delete(&self, body: impl Into<Body>) -> Result<Value> {
        self.call_post(ROUTE_BROADCAST_DELETE, body.into()).await
    }

    /// Add a broadcast to a playlist.
    pub async fn broadcast_assign_playlist(&self, params: Params) -> Result<Value> {
        self.call_get(ROUTE_BROADCAST_ASSIGN_PLAYLIST, params).await
    }

    /// Take a broadcast out of a playlist.
    pub async fn broadcast_remove_playlist(&self, params: Params) -> Result<Value> {
        self.call_get(ROUTE_BROADCAST_REMOVE_PLAYLIST, params).await
    }

    /// Upload `image_path` and make it the poster of the broadcast `id`.
    pub async fn broadcast_poster(&self, params: Params, image_path: &str) -> Result<Value> {
        self.poster(ROUTE_BROADCAST_POSTER, params, image_path).await
    }

    /// Archive the broadcast `id`.
    ///
    /// With `file_path` the file is uploaded and becomes the archived video.
    /// Without it the API archives what was streamed, or downloads the `url`
    /// parameter when given.
    pub async fn broadcast_archive(
        &self,
        params: Params,
        file_path: Option<&str>,
    ) -> Result<Value> {
        self.archive(ROUTE_BROADCAST_ARCHIVE, params, file_path).await
    }
}
