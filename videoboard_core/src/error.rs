// Copyright 2026 the Videoboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dashboard failure taxonomy.
//!
//! Every variant aborts the entire render: a dashboard silently missing some
//! tags would misrepresent data completeness, so a single malformed video
//! list invalidates the whole page rather than dropping that tag. The
//! composer surfaces the [`Display`](core::fmt::Display) output of the error
//! in place of the loading placeholder.

use alloc::string::String;
use thiserror::Error;

/// A fatal dashboard error, surfaced as a single user-visible message.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DashboardError {
    /// The index (tags) request failed at the network or HTTP level.
    #[error("failed to fetch the run/tag index: {cause}")]
    IndexFetch {
        /// Transport-level detail (status line or network error text).
        cause: String,
    },

    /// The index payload was not a two-level mapping of strings to objects.
    #[error("the run/tag index payload is not a two-level run/tag mapping")]
    MalformedIndex,

    /// A per-(run, tag) video-list request failed at the network or HTTP level.
    #[error("failed to fetch videos for run {run:?}, tag {tag:?}: {cause}")]
    VideoFetch {
        /// Run whose list was requested.
        run: String,
        /// Tag whose list was requested.
        tag: String,
        /// Transport-level detail (status line or network error text).
        cause: String,
    },

    /// A video-list entry lacked a required field (`step`, `wall_time`, `query`).
    #[error("malformed video list for run {run:?}, tag {tag:?}")]
    MalformedVideoList {
        /// Run whose list was malformed.
        run: String,
        /// Tag whose list was malformed.
        tag: String,
    },
}
