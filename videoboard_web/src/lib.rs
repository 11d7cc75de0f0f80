// Copyright 2026 the Videoboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser dashboard for run/tag video streams.
//!
//! This crate is the wasm half of videoboard: it fetches the run/tag index
//! and the per-tag video lists, renders one interactive card per video
//! instance, and keeps the dashboard-wide controls (speed, brightness,
//! contrast, tag filter, play/pause all) synchronized with the live grid.
//! All the behavioral logic lives in [`videoboard_core`]; this crate owns
//! the fetches, the DOM, and the event wiring.
//!
//! - [`dom`]: declarative element construction ([`ElementBuilder`])
//! - [`client`]: the three-endpoint HTTP client ([`DataClient`])
//! - [`card`]: one video instance → one interactive card
//! - [`dashboard`]: fetch fan-out and the one-pass page build
//! - `controls`: stateless global-control handlers over the live DOM
//!
//! The host page gets a single entry point, [`mount`]:
//!
//! ```js
//! import init, { mount } from "./videoboard_web.js";
//! await init();
//! mount(document.body);
//! ```
//!
//! Build with: `wasm-pack build --target web videoboard_web`

pub mod card;
pub mod client;
mod controls;
pub mod dashboard;
pub mod dom;

pub use card::ControlMode;
pub use client::DataClient;
pub use dom::{Child, ElementBuilder};

use wasm_bindgen::prelude::*;

/// Mounts the dashboard into `container` and starts the fetch-and-render
/// sequence.
///
/// Endpoints are resolved relative to the page (`./tags`, `./videos`,
/// `./individualVideo`), matching a dashboard served next to its data.
/// Fetch failures surface as a message inside `container`; only DOM-level
/// failures are reported to the console.
#[wasm_bindgen]
pub fn mount(container: web_sys::HtmlElement) {
    let client = DataClient::new(".");
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(err) = dashboard::render(client, container).await {
            web_sys::console::error_2(&"videoboard: render failed".into(), &err);
        }
    });
}
