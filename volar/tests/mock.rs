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

//! Recording fakes for the context and the upload transfer.

use async_trait::async_trait;
use bytes::Bytes;
use http::StatusCode;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use volar::{Client, Context, Credential, Destination, Error, FileRead, HttpSend, Result, Transfer};

pub const API_KEY: &str = "key";
pub const SECRET: &str = "secret";
pub const HOST: &str = "localhost";

#[derive(Debug)]
enum Reply {
    Answer(StatusCode, String),
    Fail(String),
}

/// A request as the fake saw it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: http::Method,
    pub uri: String,
    pub headers: http::HeaderMap,
    pub body: Bytes,
}

/// Answers requests from a queue and records them.
#[derive(Debug, Clone, Default)]
pub struct MockHttpSend {
    replies: Arc<Mutex<VecDeque<Reply>>>,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl MockHttpSend {
    pub fn reply(self, status: u16, body: &str) -> Self {
        self.replies.lock().unwrap().push_back(Reply::Answer(
            StatusCode::from_u16(status).unwrap(),
            body.to_string(),
        ));
        self
    }

    pub fn json(self, body: serde_json::Value) -> Self {
        self.reply(200, &body.to_string())
    }

    pub fn fail(self, message: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Reply::Fail(message.to_string()));
        self
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl HttpSend for MockHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let (parts, body) = req.into_parts();
        self.requests.lock().unwrap().push(Recorded {
            method: parts.method,
            uri: parts.uri.to_string(),
            headers: parts.headers,
            body,
        });

        match self.replies.lock().unwrap().pop_front() {
            Some(Reply::Answer(status, body)) => Ok(http::Response::builder()
                .status(status)
                .body(Bytes::from(body))
                .unwrap()),
            Some(Reply::Fail(message)) => Err(Error::transport(message)),
            None => Err(Error::transport("no reply queued")),
        }
    }
}

/// Serves files from memory and counts reads.
#[derive(Debug, Clone, Default)]
pub struct MockFileRead {
    files: Arc<HashMap<String, Vec<u8>>>,
    reads: Arc<AtomicUsize>,
}

impl MockFileRead {
    pub fn with_file(path: &str, content: &[u8]) -> Self {
        Self {
            files: Arc::new(HashMap::from([(path.to_string(), content.to_vec())])),
            reads: Arc::default(),
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FileRead for MockFileRead {
    async fn file_read(&self, path: &str) -> Result<Vec<u8>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| Error::config_invalid(format!("\"{path}\" does not appear to exist")))
    }
}

/// Records transfers instead of performing them.
#[derive(Debug, Clone, Default)]
pub struct MockTransfer {
    calls: Arc<Mutex<Vec<(Destination, Bytes)>>>,
    failure: Option<String>,
}

impl MockTransfer {
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<(Destination, Bytes)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transfer for MockTransfer {
    async fn transfer(
        &self,
        _ctx: &Context,
        destination: &Destination,
        content: Bytes,
    ) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push((destination.clone(), content));
        match &self.failure {
            Some(message) => Err(Error::transport(message.clone())),
            None => Ok(()),
        }
    }
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A client over the given fakes, talking to `http://localhost`.
pub fn client(http: &MockHttpSend, fs: &MockFileRead) -> Client {
    init_logger();

    let ctx = Context::new()
        .with_http_send(http.clone())
        .with_file_read(fs.clone());
    Client::new(ctx, Credential::new(API_KEY, SECRET, HOST))
}
