//! Browser resource source
//!
//! Fetches the dashboard resources with `gloo-net`, relative to the page
//! unless a base URL is given.

use async_trait::async_trait;
use cryptodash::{LoadError, LoadResult, ResourceSource};
use gloo_net::http::Request;

pub struct GlooSource {
    base: String,
}

impl GlooSource {
    /// Source resolving paths against `base` (empty for page-relative)
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    fn url_for(&self, path: &str) -> String {
        if self.base.is_empty() || self.base == "." {
            path.to_string()
        } else {
            format!("{}/{}", self.base, path.trim_start_matches('/'))
        }
    }
}

#[async_trait(?Send)]
impl ResourceSource for GlooSource {
    fn describe(&self) -> String {
        if self.base.is_empty() {
            "page".to_string()
        } else {
            self.base.clone()
        }
    }

    async fn fetch(&self, path: &str) -> LoadResult<String> {
        let response = Request::get(&self.url_for(path))
            .send()
            .await
            .map_err(|e| LoadError::fetch(path, format!("Network error: {}", e)))?;

        if !response.ok() {
            return Err(LoadError::fetch(
                path,
                format!("HTTP {} {}", response.status(), response.status_text()),
            ));
        }

        response
            .text()
            .await
            .map_err(|e| LoadError::fetch(path, format!("Body error: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_url_for() {
        assert_eq!(GlooSource::new("").url_for("resources/data/a.json"), "resources/data/a.json");
        assert_eq!(
            GlooSource::new("https://cdn.example/").url_for("/resources/data/a.json"),
            "https://cdn.example/resources/data/a.json"
        );
    }
}
