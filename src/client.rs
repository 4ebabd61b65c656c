//! Synchronous, authenticated access to the Figma REST API.
//!
//! One client per invocation; every call is a blocking GET with the token in
//! the `X-Figma-Token` header. There are no retries and no explicit timeouts.

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{FigrError, Result};
use crate::types::{ComponentsResponse, FileResponse, ImagesResponse, StylesResponse};

/// Production API base.
pub const DEFAULT_API_BASE: &str = "https://api.figma.com/v1/";

/// Header carrying the personal access token.
pub const TOKEN_HEADER: &str = "X-Figma-Token";

/// Image formats supported by the images endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Svg,
}

impl ImageFormat {
    /// Wire value, also used as the file extension.
    pub fn as_str(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }
}

/// API base for this invocation; `FIGR_API_BASE` overrides the production
/// endpoint so tests can point the binary at a local stub.
pub fn api_base_from_env() -> String {
    std::env::var("FIGR_API_BASE")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

pub struct FigmaClient {
    http: Client,
    base: Url,
    token: String,
}

impl FigmaClient {
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_base(DEFAULT_API_BASE, token)
    }

    pub fn with_base(base: &str, token: impl Into<String>) -> Result<Self> {
        // A base without a trailing slash would swallow the last path
        // segment on join.
        let mut base = base.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base = Url::parse(&base)?;
        let http = Client::builder().build()?;
        Ok(FigmaClient {
            http,
            base,
            token: token.into(),
        })
    }

    /// `GET files/:key`, optionally limited to `depth` levels of the tree.
    pub fn get_file(&self, file_key: &str, depth: Option<u32>) -> Result<FileResponse> {
        let mut url = self.base.join(&format!("files/{file_key}"))?;
        if let Some(depth) = depth {
            url.set_query(Some(&format!("depth={depth}")));
        }
        self.get_json(url)
    }

    /// `GET files/:key/styles` - published style metadata.
    pub fn get_published_styles(&self, file_key: &str) -> Result<StylesResponse> {
        let url = self.base.join(&format!("files/{file_key}/styles"))?;
        self.get_json(url)
    }

    /// `GET files/:key/components` - published components.
    pub fn get_components(&self, file_key: &str) -> Result<ComponentsResponse> {
        let url = self.base.join(&format!("files/{file_key}/components"))?;
        self.get_json(url)
    }

    /// `GET images/:key` - render the given nodes and return asset URLs.
    /// `scale` only applies to PNG exports.
    pub fn get_images(
        &self,
        file_key: &str,
        node_ids: &[String],
        format: ImageFormat,
        scale: u32,
    ) -> Result<ImagesResponse> {
        let mut url = self.base.join(&format!("images/{file_key}"))?;
        let mut query = format!("ids={}&format={}", node_ids.join(","), format.as_str());
        if format == ImageFormat::Png {
            query.push_str(&format!("&scale={scale}"));
        }
        url.set_query(Some(&query));
        self.get_json(url)
    }

    /// Fetch an asset URL returned by the images endpoint. Asset URLs are
    /// pre-signed; no auth header is sent.
    pub fn download_asset(&self, url: &str) -> Result<Vec<u8>> {
        let url = Url::parse(url)?;
        let response = self.http.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(FigrError::http(status, body));
        }
        Ok(response.bytes()?.to_vec())
    }

    fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let response = self
            .http
            .get(url)
            .header(TOKEN_HEADER, &self.token)
            .send()?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(FigrError::http(status, body));
        }
        Ok(response.json()?)
    }
}
