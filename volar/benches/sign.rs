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

use criterion::{criterion_group, criterion_main, Criterion};
use serde_json::json;
use std::hint::black_box;
use volar::{Body, ParamValue, Params, RequestSigner};

criterion_group!(benches, bench);
criterion_main!(benches);

pub fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("sign");
    let signer = RequestSigner::new("secret");

    group.bench_function("get", |b| {
        let params = Params::new()
            .with("site", "mysite")
            .with("per_page", 50u32)
            .with("page", 3u32)
            .with("filter", ParamValue::map([("title", "Game"), ("status", "live")]))
            .with("api_key", "api_key");

        b.iter(|| {
            signer.sign(
                black_box("api/client/broadcast"),
                "GET",
                black_box(&params),
                &Body::Empty,
            )
        })
    });

    group.bench_function("post", |b| {
        let body = Body::Structured(json!({
            "site": "mysite",
            "title": "Opening night",
            "description": "<p>Home opener</p>",
            "date": "2026-09-01 19:00:00",
        }))
        .canonicalize()
        .expect("body must serialize");
        let params = Params::new().with("api_key", "api_key");

        b.iter(|| {
            signer.sign(
                black_box("api/client/broadcast/create"),
                "POST",
                &params,
                black_box(&body),
            )
        })
    });

    group.finish();
}
