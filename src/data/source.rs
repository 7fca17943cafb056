//! Resource sources
//!
//! Where the loader gets raw resource bodies from. The browser front-end
//! provides its own implementation on top of `fetch`; native builds read from
//! a directory or from an HTTP base URL.

use async_trait::async_trait;

use super::error::LoadResult;

/// Retrieves the raw body of a resource by relative path
#[async_trait(?Send)]
pub trait ResourceSource {
    /// Short label used in logs
    fn describe(&self) -> String;

    /// Fetch the resource at `path` (relative, e.g. "resources/data/x.json")
    async fn fetch(&self, path: &str) -> LoadResult<String>;
}

#[async_trait(?Send)]
impl<T: ResourceSource + ?Sized> ResourceSource for Box<T> {
    fn describe(&self) -> String {
        (**self).describe()
    }

    async fn fetch(&self, path: &str) -> LoadResult<String> {
        (**self).fetch(path).await
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::{FsSource, HttpSource};

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use super::*;
    use crate::data::error::LoadError;
    use std::path::PathBuf;
    use std::time::Duration;

    /// Reads resources from files below a root directory
    pub struct FsSource {
        root: PathBuf,
    }

    impl FsSource {
        pub fn new(root: impl Into<PathBuf>) -> Self {
            Self { root: root.into() }
        }
    }

    #[async_trait(?Send)]
    impl ResourceSource for FsSource {
        fn describe(&self) -> String {
            format!("dir:{}", self.root.display())
        }

        async fn fetch(&self, path: &str) -> LoadResult<String> {
            tokio::fs::read_to_string(self.root.join(path))
                .await
                .map_err(|e| LoadError::fetch(path, e))
        }
    }

    /// Fetches resources over HTTP relative to a base URL
    pub struct HttpSource {
        client: reqwest::Client,
        base_url: String,
    }

    impl HttpSource {
        pub fn new(base_url: &str, timeout: Duration) -> LoadResult<Self> {
            let client = reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .map_err(|e| LoadError::fetch(base_url, e))?;

            Ok(Self {
                client,
                base_url: base_url.trim_end_matches('/').to_string(),
            })
        }

        fn url_for(&self, path: &str) -> String {
            format!("{}/{}", self.base_url, path.trim_start_matches('/'))
        }
    }

    #[async_trait(?Send)]
    impl ResourceSource for HttpSource {
        fn describe(&self) -> String {
            self.base_url.clone()
        }

        async fn fetch(&self, path: &str) -> LoadResult<String> {
            let response = self
                .client
                .get(self.url_for(path))
                .send()
                .await
                .map_err(|e| LoadError::fetch(path, e))?;

            if !response.status().is_success() {
                return Err(LoadError::fetch(path, format!("HTTP {}", response.status())));
            }

            response.text().await.map_err(|e| LoadError::fetch(path, e))
        }
    }

}
