//! Backend API Layer
//!
//! Defines the abstract interface to the REST backend.
//! The browser build uses `HttpApi`; tests use an in-memory backend.

mod http;
mod routes;

#[cfg(test)]
pub mod mock;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ApiResult;
use crate::models::{items_from_value, CollectionItem};

pub use http::HttpApi;
pub use routes::*;

/// A file ready to be sent, read fully into memory
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Single point of contact with the backend.
///
/// Futures are not `Send`: the browser runs everything on one thread.
#[async_trait(?Send)]
pub trait ApiClient {
    /// GET an endpoint and return its JSON body
    async fn fetch_json(&self, endpoint: &str) -> ApiResult<Value>;

    /// POST a JSON payload. Non-success answers become typed errors.
    async fn mutate(&self, endpoint: &str, payload: Value) -> ApiResult<()>;

    /// Multipart upload of one file tagged with its owning item
    async fn upload_file(&self, endpoint: &str, file: UploadFile, owner_id: u32) -> ApiResult<()>;

    /// GET a collection endpoint and parse every row
    async fn fetch_collection(&self, endpoint: &str, id_field: &str) -> ApiResult<Vec<CollectionItem>> {
        let body = self.fetch_json(endpoint).await?;
        items_from_value(body, id_field)
    }
}
