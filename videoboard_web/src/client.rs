// Copyright 2026 the Videoboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! HTTP client for the dashboard's three endpoints.
//!
//! The server exposes `tags` (the run/tag index), `videos?run=..&tag=..`
//! (per-tag instance lists), and `individualVideo?<query>` (the bytes the
//! media element streams directly). [`DataClient`] fetches and decodes the
//! first two; the third only ever appears as a `src` attribute.
//!
//! Nothing is cached: every call re-fetches, and concurrent calls for
//! distinct `(run, tag)` pairs are independent.

use videoboard_core::DashboardError;
use videoboard_core::model::{self, RunTagIndex, VideoInstance};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

const TAGS_PATH: &str = "tags";
const VIDEOS_PATH: &str = "videos";
const VIDEO_BINARY_PATH: &str = "individualVideo";

/// Client for the index and video-list endpoints under one base URL.
#[derive(Clone, Debug)]
pub struct DataClient {
    base: String,
}

impl DataClient {
    /// Creates a client for endpoints under `base` (trailing slash optional).
    ///
    /// The dashboard is normally served next to its endpoints, so the usual
    /// base is `"."`.
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base)
    }

    /// The media URI for one video instance's opaque query string.
    #[must_use]
    pub fn video_src(&self, query: &str) -> String {
        format!("{}?{query}", self.endpoint(VIDEO_BINARY_PATH))
    }

    /// Fetches and parses the run/tag index.
    ///
    /// # Errors
    ///
    /// [`DashboardError::IndexFetch`] on network or non-2xx failure,
    /// [`DashboardError::MalformedIndex`] when the payload is not a
    /// two-level mapping.
    pub async fn fetch_index(&self) -> Result<RunTagIndex, DashboardError> {
        let payload = fetch_text(&self.endpoint(TAGS_PATH))
            .await
            .map_err(|cause| DashboardError::IndexFetch { cause })?;
        model::parse_index(&payload)
    }

    /// Fetches and parses the video list for one `(run, tag)` pair.
    ///
    /// # Errors
    ///
    /// [`DashboardError::VideoFetch`] on network or non-2xx failure,
    /// [`DashboardError::MalformedVideoList`] when entries lack required
    /// fields.
    pub async fn fetch_videos(
        &self,
        run: &str,
        tag: &str,
    ) -> Result<Vec<VideoInstance>, DashboardError> {
        let url = format!(
            "{}?run={}&tag={}",
            self.endpoint(VIDEOS_PATH),
            encode_component(run),
            encode_component(tag),
        );
        let payload = fetch_text(&url)
            .await
            .map_err(|cause| DashboardError::VideoFetch {
                run: run.to_owned(),
                tag: tag.to_owned(),
                cause,
            })?;
        model::parse_video_list(run, tag, &payload)
    }
}

fn encode_component(value: &str) -> String {
    js_sys::encode_uri_component(value).into()
}

/// One GET, resolved to the response body text; any failure becomes a
/// transport-level cause string for the error taxonomy.
async fn fetch_text(url: &str) -> Result<String, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_owned())?;

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_error_text)?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| "fetch did not yield a Response".to_owned())?;

    if !response.ok() {
        return Err(format!(
            "HTTP {} {}",
            response.status(),
            response.status_text()
        ));
    }

    let text = JsFuture::from(response.text().map_err(js_error_text)?)
        .await
        .map_err(js_error_text)?;
    text.as_string()
        .ok_or_else(|| "response body is not text".to_owned())
}

fn js_error_text(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_normalization_and_endpoints() {
        let client = DataClient::new("./");
        assert_eq!(client.endpoint(TAGS_PATH), "./tags");
        assert_eq!(client.endpoint(VIDEOS_PATH), "./videos");

        let rooted = DataClient::new("/data/plugin/videos");
        assert_eq!(rooted.endpoint(TAGS_PATH), "/data/plugin/videos/tags");
    }

    #[test]
    fn video_src_embeds_the_opaque_query() {
        let client = DataClient::new(".");
        assert_eq!(client.video_src("a=1"), "./individualVideo?a=1");
        assert_eq!(
            client.video_src("blob_key=abc123"),
            "./individualVideo?blob_key=abc123"
        );
    }
}
