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

use crate::constants::{ROUTE_SITES, ROUTE_TIMEZONES};
use crate::{Client, Params};
use serde_json::Value;
use volar_core::Result;

impl Client {
    /// List the sites the api user has access to.
    ///
    /// Recognized parameters include `page`, `per_page`, `id`, `slug` and
    /// `title`.
    pub async fn sites(&self, params: Params) -> Result<Value> {
        self.call_get(ROUTE_SITES, params).await
    }

    /// List the timezones accepted by date parameters.
    pub async fn timezones(&self, params: Params) -> Result<Value> {
        self.call_get(ROUTE_TIMEZONES, params).await
    }
}
