//! File Sources
//!
//! Anything the upload panel can read a name, a declared type and bytes from.

use async_trait::async_trait;
use wasm_bindgen_futures::JsFuture;

use crate::api::UploadFile;
use crate::error::{ApiError, ApiResult};

#[async_trait(?Send)]
pub trait FileSource {
    fn name(&self) -> String;

    /// Type as declared by the browser; never sniffed from content
    fn declared_type(&self) -> String;

    async fn read(&self) -> ApiResult<Vec<u8>>;

    async fn into_upload(&self) -> ApiResult<UploadFile> {
        Ok(UploadFile {
            name: self.name(),
            mime: self.declared_type(),
            bytes: self.read().await?,
        })
    }
}

#[async_trait(?Send)]
impl FileSource for web_sys::File {
    fn name(&self) -> String {
        web_sys::File::name(self)
    }

    fn declared_type(&self) -> String {
        self.type_()
    }

    async fn read(&self) -> ApiResult<Vec<u8>> {
        let buffer = JsFuture::from(self.array_buffer())
            .await
            .map_err(|e| ApiError::Network(format!("could not read file: {:?}", e)))?;
        Ok(js_sys::Uint8Array::new(&buffer).to_vec())
    }
}

#[cfg(test)]
pub use memory::MemoryFile;

#[cfg(test)]
mod memory {
    use super::*;

    pub struct MemoryFile {
        pub name: &'static str,
        pub mime: &'static str,
        pub bytes: &'static [u8],
    }

    #[async_trait(?Send)]
    impl FileSource for MemoryFile {
        fn name(&self) -> String {
            self.name.to_string()
        }

        fn declared_type(&self) -> String {
            self.mime.to_string()
        }

        async fn read(&self) -> ApiResult<Vec<u8>> {
            Ok(self.bytes.to_vec())
        }
    }
}
