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

// Env values used to configure the client.
pub const VOLAR_API_KEY: &str = "VOLAR_API_KEY";
pub const VOLAR_SECRET: &str = "VOLAR_SECRET";
pub const VOLAR_HOST: &str = "VOLAR_HOST";
pub const VOLAR_SECURE: &str = "VOLAR_SECURE";
pub const VOLAR_TIMEOUT: &str = "VOLAR_TIMEOUT";

pub const DEFAULT_HOST: &str = "vcloud.volarvideo.com";

// Query parameters owned by the protocol.
pub const API_KEY: &str = "api_key";
pub const SIGNATURE: &str = "signature";
pub const FILENAME: &str = "filename";
pub const TMP_FILE_ID: &str = "tmp_file_id";
pub const TMP_FILE_NAME: &str = "tmp_file_name";

/// Characters of the base64 HMAC kept in the signature.
pub const SIGNATURE_LENGTH: usize = 43;

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

// Routes.
pub const ROUTE_SITES: &str = "api/client/info";
pub const ROUTE_TIMEZONES: &str = "api/client/info/timezones";

pub const ROUTE_BROADCAST: &str = "api/client/broadcast";
pub const ROUTE_BROADCAST_DELETED: &str = "api/client/broadcast/deleted";
pub const ROUTE_BROADCAST_CREATE: &str = "api/client/broadcast/create";
pub const ROUTE_BROADCAST_UPDATE: &str = "api/client/broadcast/update";
pub const ROUTE_BROADCAST_DELETE: &str = "api/client/broadcast/delete";
pub const ROUTE_BROADCAST_ASSIGN_PLAYLIST: &str = "api/client/broadcast/assignplaylist";
pub const ROUTE_BROADCAST_REMOVE_PLAYLIST: &str = "api/client/broadcast/removeplaylist";
pub const ROUTE_BROADCAST_POSTER: &str = "api/client/broadcast/poster";
pub const ROUTE_BROADCAST_ARCHIVE: &str = "api/client/broadcast/archive";

pub const ROUTE_VIDEOCLIP: &str = "api/client/videoclip";
pub const ROUTE_VIDEOCLIP_CREATE: &str = "api/client/videoclip/create";
pub const ROUTE_VIDEOCLIP_UPDATE: &str = "api/client/videoclip/update";
pub const ROUTE_VIDEOCLIP_DELETE: &str = "api/client/videoclip/delete";
pub const ROUTE_VIDEOCLIP_ASSIGN_PLAYLIST: &str = "api/client/videoclip/assignplaylist";
pub const ROUTE_VIDEOCLIP_REMOVE_PLAYLIST: &str = "api/client/videoclip/removeplaylist";
pub const ROUTE_VIDEOCLIP_POSTER: &str = "api/client/videoclip/poster";
pub const ROUTE_VIDEOCLIP_ARCHIVE: &str = "api/client/videoclip/archive";

pub const ROUTE_TEMPLATE: &str = "api/client/template";
pub const ROUTE_TEMPLATE_CREATE: &str = "api/client/template/create";
pub const ROUTE_TEMPLATE_UPDATE: &str = "api/client/template/update";
pub const ROUTE_TEMPLATE_DELETE: &str = "api/client/template/delete";

pub const ROUTE_SECTION: &str = "api/client/section";

pub const ROUTE_PLAYLIST: &str = "api/client/playlist";
pub const ROUTE_PLAYLIST_CREATE: &str = "api/client/playlist/create";
pub const ROUTE_PLAYLIST_UPDATE: &str = "api/client/playlist/update";
pub const ROUTE_PLAYLIST_DELETE: &str = "api/client/playlist/delete";

/// Handshake issuing upload destinations. Video clip uploads use it too.
pub const ROUTE_UPLOAD_HANDSHAKE: &str = "api/client/broadcast/s3handshake";
