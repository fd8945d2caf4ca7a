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

//! Tokio-based file reading implementation for volar.
//!
//! This crate provides `TokioFileRead`, an async file reader that implements
//! the `FileRead` trait from `volar_core` using Tokio's file system operations.
//! Uploads read the local media file through it.
//!
//! ## Example
//!
//! ```no_run
//! use volar_core::Context;
//! use volar_file_read_tokio::TokioFileRead;
//!
//! #[tokio::main]
//! async fn main() {
//!     let ctx = Context::new().with_file_read(TokioFileRead::default());
//!
//!     match ctx.file_read("/path/to/poster.jpg").await {
//!         Ok(content) => println!("Read {} bytes", content.len()),
//!         Err(e) => eprintln!("Failed to read file: {}", e),
//!     }
//! }
//! ```

use async_trait::async_trait;
use tokio::io::AsyncReadExt;
use volar_core::{Error, FileRead, Result};

/// Tokio-based implementation of the `FileRead` trait.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFileRead;

#[async_trait]
impl FileRead for TokioFileRead {
    async fn file_read(&self, path: &str) -> Result<Vec<u8>> {
        let mut file = tokio::fs::File::open(path).await.map_err(|e| {
            let message = if e.kind() == std::io::ErrorKind::NotFound {
                format!("\"{path}\" does not appear to exist")
            } else {
                format!("\"{path}\" can not be opened")
            };
            Error::config_invalid(message).with_source(e)
        })?;
        let size = file
            .metadata()
            .await
            .map_err(|e| Error::unexpected("failed to stat file").with_source(e))?
            .len();

        let mut content = Vec::with_capacity(size as usize);
        file.read_to_end(&mut content)
            .await
            .map_err(|e| Error::unexpected("failed to read file").with_source(e))?;
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use volar_core::ErrorKind;

    #[tokio::test]
    async fn test_read_whole_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"not really a jpeg").unwrap();

        let content = TokioFileRead
            .file_read(f.path().to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(content, b"not really a jpeg");
    }

    #[tokio::test]
    async fn test_missing_file() {
        let err = TokioFileRead
            .file_read("/definitely/not/here/poster.jpg")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
        assert_eq!(
            err.to_string(),
            "\"/definitely/not/here/poster.jpg\" does not appear to exist"
        );
    }
}
