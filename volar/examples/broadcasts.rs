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

//! List the broadcasts of a site and optionally attach a poster.
//!
//! ```shell
//! VOLAR_API_KEY=... VOLAR_SECRET=... VOLAR_SECURE=on \
//!     cargo run --example broadcasts -- mysite [broadcast-id poster.jpg]
//! ```

use anyhow::Result;
use log::info;
use std::env;
use volar::Params;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let _ = dotenv::dotenv();

    let mut args = env::args().skip(1);
    let site = args.next().unwrap_or_else(|| "mysite".to_string());

    let client = volar::default_client()?;

    let resp = client
        .broadcasts(Params::new().with("site", site.as_str()).with("per_page", 5u32))
        .await?;
    info!("last trace: {:?}", client.last_trace());

    for broadcast in resp["broadcasts"].as_array().into_iter().flatten() {
        println!(
            "{}\t{}\t{}",
            broadcast["id"], broadcast["status"], broadcast["title"]
        );
    }

    if let (Some(id), Some(poster)) = (args.next(), args.next()) {
        let resp = client
            .broadcast_poster(
                Params::new().with("site", site.as_str()).with("id", id),
                &poster,
            )
            .await?;
        println!("poster attached: {resp}");
    }

    Ok(())
}
