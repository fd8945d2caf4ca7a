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
    ROUTE_VIDEOCLIP, ROUTE_VIDEOCLIP_ARCHIVE, ROUTE_VIDEOCLIP_ASSIGN_PLAYLIST,
    ROUTE_VIDEOCLIP_CREATE, ROUTE_VIDEOCLIP_DELETE, ROUTE_VIDEOCLIP_POSTER,
    ROUTE_VIDEOCLIP_REMOVE_PLAYLIST, ROUTE_VIDEOCLIP_UPDATE,
};
use crate::{Body, Client, Params};
use serde_json::Value;
use volar_core::Result;

impl Client {
    /// List video clips.
    pub async fn videoclips(&self, params: Params) -> Result<Value> {
        self.call_get(ROUTE_VIDEOCLIP, params).await
    }

    /// Create a video clip.
    pub async fn videoclip_create(&self, body: impl Into<Body>) -> Result<Value> {
        self.call_post(ROUTE_VIDEOCLIP_CREATE, body.into()).await
    }

    /// Update a video clip.
    pub async fn videoclip_update(&self, body: impl Into<Body>) -> Result<Value> {
        self.call_post(ROUTE_VIDEOCLIP_UPDATE, body.into()).await
    }

    /// Delete a video clip.
    pub async fn videoclip_delete(&self, body: impl Into<Body>) -> Result<Value> {
        self.call_post(ROUTE_VIDEOCLIP_DELETE, body.into()).await
    }

    /// Add a video clip to a playlist.
    pub async fn videoclip_assign_playlist(&self, params: Params) -> Result<Value> {
        self.call_get(ROUTE_VIDEOCLIP_ASSIGN_PLAYLIST, params).await
    }

    /// Take a video clip out of a playlist.
    pub async fn videoclip_remove_playlist(&self, params: Params) -> Result<Value> {
        self.call_get(ROUTE_VIDEOCLIP_REMOVE_PLAYLIST, params).await
    }

    /// Upload `image_path` as the poster of the video clip `id`.
    pub async fn videoclip_poster(&self, params: Params, image_path: &str) -> Result<Value> {
        self.poster(ROUTE_VIDEOCLIP_POSTER, params, image_path).await
    }

    /// Archive the video clip `id`, uploading `file_path` as its video when
    /// given.
    pub async fn videoclip_archive(
        &self,
        params: Params,
        file_path: Option<&str>,
    ) -> Result<Value> {
        self.archive(ROUTE_VIDEOCLIP_ARCHIVE, params, file_path).await
    }
}
