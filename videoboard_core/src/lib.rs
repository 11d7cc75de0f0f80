// Copyright 2026 the Videoboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Data model and pure dashboard logic for videoboard.
//!
//! `videoboard_core` holds everything about the video dashboard that does not
//! touch a browser API: the run/tag index and video-list payload types, the
//! error taxonomy, and the small pieces of math behind the global controls.
//! It is `no_std` compatible (with `alloc`) and has no wasm dependency, so
//! the whole behavioral surface tests natively.
//!
//! # Architecture
//!
//! The dashboard turns two JSON payloads into a grid of interactive cards:
//!
//! ```text
//!   GET tags ──► RunTagIndex ──► fetch_plan() ──► (run, tag) fan-out
//!                                                       │
//!   GET videos?run=..&tag=.. ──► Vec<VideoInstance> ◄───┘
//!                                       │
//!   card_specs() ──► Vec<CardSpec> ──► card renderer (videoboard_web)
//! ```
//!
//! **[`model`]** — payload types and the order-preserving index parse. The
//! server controls run/tag iteration order, so the index deserializes
//! through a map visitor into entry vectors instead of a sorted map.
//!
//! **[`error`]** — [`DashboardError`], the whole-dashboard failure taxonomy.
//! Any fetch or parse failure aborts the render; there is no per-card
//! isolation.
//!
//! **[`controls`]** — pure value→effect computations for the global sliders
//! and the tag filter: CSS filter strings, slider labels, scrub-bar math.
//!
//! **[`format`]** — playback-time (`M:SS`) and wall-clock rendering.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod controls;
pub mod error;
pub mod format;
pub mod model;

pub use error::DashboardError;
pub use model::{CardSpec, RunTagIndex, TagMetadata, VideoInstance};
