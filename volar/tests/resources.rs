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

use crate::mock::{client, MockFileRead, MockHttpSend, MockTransfer};
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;
use volar::{ErrorKind, Params};

const POSTER: &str = "/images/poster.jpg";

fn handshake() -> serde_json::Value {
    json!({"id": "id7", "path": "path/key7", "signed_url": "https://storage.example.com/k"})
}

#[test_case(Params::new(), Some("\"site\" parameter is required"); "missing site")]
#[test_case(Params::new().with("site", "mysite"), None; "with site")]
#[tokio::test]
async fn test_templates_require_site(params: Params, error: Option<&str>) {
    let http = MockHttpSend::default().json(json!({"templates": []}));
    let client = client(&http, &MockFileRead::default());

    let result = client.templates(params).await;
    assert_eq!(result.err().map(|e| e.to_string()).as_deref(), error);
    assert_eq!(http.calls(), usize::from(error.is_none()));
}

#[test_case(Params::new(), false; "neither")]
#[test_case(Params::new().with("site", "mysite"), true; "site")]
#[test_case(Params::new().with("sites", "a,b"), true; "sites")]
#[tokio::test]
async fn test_sections_require_site_or_sites(params: Params, ok: bool) {
    let http = MockHttpSend::default().json(json!({"sections": []}));
    let client = client(&http, &MockFileRead::default());

    let result = client.sections(params).await;
    assert_eq!(result.is_ok(), ok);
    if !ok {
        assert_eq!(
            client.last_error().as_deref(),
            Some("\"site\" or \"sites\" parameter is required")
        );
    }
}

#[tokio::test]
async fn test_poster_requires_id() {
    let http = MockHttpSend::default();
    let fs = MockFileRead::with_file(POSTER, b"jpeg");
    let client = client(&http, &fs);

    let err = client
        .broadcast_poster(Params::new().with("site", "mysite"), POSTER)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    assert_eq!(err.to_string(), "id is required");
    assert_eq!(http.calls(), 0);
    assert_eq!(fs.reads(), 0);
}

#[tokio::test]
async fn test_poster_attaches_upload() {
    let http = MockHttpSend::default()
        .json(handshake())
        .json(json!({"success": true}));
    let fs = MockFileRead::with_file(POSTER, b"jpeg");
    let client = client(&http, &fs).with_transfer(MockTransfer::default());

    client
        .broadcast_poster(Params::new().with("id", 42u64), POSTER)
        .await
        .unwrap();

    let requests = http.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests[1].uri.starts_with(
        "http://localhost/api/client/broadcast/poster?id=42&tmp_file_id=id7&tmp_file_name=path%2Fkey7&api_key=key&signature="
    ));
}

#[tokio::test]
async fn test_poster_upload_failure_skips_finalize() {
    let http = MockHttpSend::default().json(handshake());
    let fs = MockFileRead::with_file(POSTER, b"jpeg");
    let client = client(&http, &fs).with_transfer(MockTransfer::failing("timed out"));

    let err = client
        .videoclip_poster(Params::new().with("id", 3u64), POSTER)
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "timed out");
    assert_eq!(http.calls(), 1);
}

#[tokio::test]
async fn test_archive_without_file() {
    let http = MockHttpSend::default().json(json!({"success": true}));
    let fs = MockFileRead::default();
    let client = client(&http, &fs);

    client
        .broadcast_archive(Params::new().with("id", 42u64), None)
        .await
        .unwrap();
    client
        .broadcast_archive(Params::new(), Some(""))
        .await
        .unwrap_err();

    assert_eq!(fs.reads(), 0);
    let requests = http.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0]
        .uri
        .starts_with("http://localhost/api/client/broadcast/archive?id=42&api_key=key&signature="));
}

#[tokio::test]
async fn test_archive_caller_params_win() {
    let http = MockHttpSend::default()
        .json(handshake())
        .json(json!({"success": true}));
    let fs = MockFileRead::with_file("/videos/clip.mov", b"mov");
    let client = client(&http, &fs).with_transfer(MockTransfer::default());

    client
        .videoclip_archive(
            Params::new()
                .with("id", 7u64)
                .with("tmp_file_name", "mine.mov"),
            Some("/videos/clip.mov"),
        )
        .await
        .unwrap();

    let finalize = &http.requests()[1];
    assert!(finalize.uri.starts_with(
        "http://localhost/api/client/videoclip/archive?id=7&tmp_file_name=mine.mov&tmp_file_id=id7&api_key=key&signature="
    ));
}

#[tokio::test]
async fn test_playlist_assignment_routes() {
    let http = MockHttpSend::default()
        .json(json!({"success": true}))
        .json(json!({"success": true}));
    let client = client(&http, &MockFileRead::default());

    let params = Params::new().with("id", 1u64).with("playlist_id", 2u64);
    client.broadcast_assign_playlist(params.clone()).await.unwrap();
    client.videoclip_remove_playlist(params).await.unwrap();

    let requests = http.requests();
    assert!(requests[0]
        .uri
        .starts_with("http://localhost/api/client/broadcast/assignplaylist?id=1&playlist_id=2&"));
    assert!(requests[1]
        .uri
        .starts_with("http://localhost/api/client/videoclip/removeplaylist?id=1&playlist_id=2&"));
}

#[tokio::test]
async fn test_text_bodies_are_sent_verbatim() {
    let http = MockHttpSend::default().json(json!({"success": true}));
    let client = client(&http, &MockFileRead::default());

    client
        .playlist_delete(r#"{"id": 12, "site": "mysite"}"#)
        .await
        .unwrap();

    assert_eq!(
        http.requests()[0].body.as_ref(),
        br#"{"id": 12, "site": "mysite"}"#
    );
}
