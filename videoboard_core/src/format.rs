// Copyright 2026 the Videoboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time rendering for card readouts.

use alloc::format;
use alloc::string::{String, ToString as _};

use chrono::DateTime;

/// Renders a playback position as `M:SS`, seconds zero-padded to two digits.
///
/// Media elements report `NaN` duration before metadata loads and can report
/// infinity for live streams; both render as `0:00` instead of leaking a NaN
/// into the readout.
#[must_use]
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "whole-second truncation of a checked non-negative finite value"
    )]
    let total = seconds as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Renders a seconds-since-epoch wall time as a human-readable UTC timestamp.
///
/// Timestamps outside chrono's representable range fall back to the raw
/// second count rather than failing the card render.
#[must_use]
pub fn format_wall_time(epoch_seconds: f64) -> String {
    if epoch_seconds.is_finite() {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "sub-second precision is not displayed"
        )]
        let secs = epoch_seconds as i64;
        if let Some(dt) = DateTime::from_timestamp(secs, 0) {
            return dt.format("%Y-%m-%d %H:%M:%S UTC").to_string();
        }
    }
    format!("{epoch_seconds}s since epoch")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minutes_and_zero_padded_seconds() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(65.0), "1:05");
        assert_eq!(format_time(3599.0), "59:59");
        assert_eq!(format_time(3600.0), "60:00");
    }

    #[test]
    fn fractional_seconds_truncate() {
        assert_eq!(format_time(65.9), "1:05");
    }

    #[test]
    fn unloaded_durations_render_as_zero() {
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(f64::INFINITY), "0:00");
        assert_eq!(format_time(-1.0), "0:00");
    }

    #[test]
    fn wall_time_renders_utc() {
        assert_eq!(format_wall_time(0.0), "1970-01-01 00:00:00 UTC");
        assert_eq!(format_wall_time(1_700_000_000.0), "2023-11-14 22:13:20 UTC");
    }

    #[test]
    fn out_of_range_wall_time_falls_back_to_raw_seconds() {
        let rendered = format_wall_time(f64::NAN);
        assert!(rendered.contains("since epoch"), "fallback path: {rendered}");
    }
}
