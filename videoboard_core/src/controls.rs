// Copyright 2026 the Videoboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure value→effect math for the global controls and per-card transport.
//!
//! The web crate's handlers stay stateless: on every input event they read
//! the slider, run one of these functions, and apply the result to the
//! freshly queried live element set. Nothing here caches element handles or
//! control state.

use alloc::format;
use alloc::string::String;

/// A global slider's identity and range, used to build the sidebar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderSpec {
    /// DOM id of the `<input type="range">`.
    pub id: &'static str,
    /// DOM id of the adjacent value label.
    pub label_id: &'static str,
    /// Visible label text.
    pub label: &'static str,
    /// Minimum value.
    pub min: &'static str,
    /// Maximum value.
    pub max: &'static str,
    /// Slider step.
    pub step: &'static str,
    /// Initial value.
    pub initial: &'static str,
}

/// Playback-speed slider: 0.25–2.0 in steps of 0.25, default 1.
pub const SPEED: SliderSpec = SliderSpec {
    id: "speed",
    label_id: "speedValue",
    label: "Playback Speed: ",
    min: "0.25",
    max: "2",
    step: "0.25",
    initial: "1",
};

/// Brightness slider: 0–2 in steps of 0.1, default 1.
pub const BRIGHTNESS: SliderSpec = SliderSpec {
    id: "brightness",
    label_id: "brightnessValue",
    label: "Brightness: ",
    min: "0",
    max: "2",
    step: "0.1",
    initial: "1",
};

/// Contrast slider: 0–200% in steps of 1, default 100.
pub const CONTRAST: SliderSpec = SliderSpec {
    id: "contrast",
    label_id: "contrastValue",
    label: "Contrast: ",
    min: "0",
    max: "200",
    step: "1",
    initial: "100",
};

/// Label next to the speed slider: `"{value}x"`.
#[must_use]
pub fn speed_label(value: f64) -> String {
    format!("{value}x")
}

/// Label next to the brightness slider: the raw value.
///
/// Relies on `f64`'s shortest-roundtrip `Display`: every value the
/// 0.1-step slider can produce prints exactly as the input's own string
/// ("0.5", "1", "1.5"), so the label never shows float noise.
#[must_use]
pub fn brightness_label(value: f64) -> String {
    format!("{value}")
}

/// Label next to the contrast slider: `"{value}%"`.
#[must_use]
pub fn contrast_label(value: f64) -> String {
    format!("{value}%")
}

/// The CSS filter expression applied to every video element.
///
/// Brightness and contrast are always recomputed together; changing either
/// slider rebuilds the whole expression.
#[must_use]
pub fn css_filter(brightness: f64, contrast: f64) -> String {
    format!("brightness({brightness}) contrast({contrast}%)")
}

/// Whether a card stays visible under the current filter text.
///
/// Case-insensitive substring match on the canonical tag id; the empty
/// filter matches everything.
#[must_use]
pub fn tag_matches(tag: &str, filter: &str) -> bool {
    if filter.is_empty() {
        return true;
    }
    tag.to_lowercase().contains(&filter.to_lowercase())
}

/// Scrub-bar position for a playback state, as an integer percentage.
///
/// Rounded to the nearest percent; a zero, negative, or non-finite duration
/// (metadata not yet loaded) yields `0` rather than propagating a NaN into
/// the DOM.
#[must_use]
pub fn scrub_percent(current: f64, duration: f64) -> u32 {
    if !duration.is_finite() || duration <= 0.0 || !current.is_finite() || current < 0.0 {
        return 0;
    }
    let pct = (current / duration * 100.0).clamp(0.0, 100.0);
    // `.round()` is std-only; nearest-integer by cast truncation.
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "pct is clamped to [0, 100]"
    )]
    let rounded = (pct + 0.5) as u32;
    rounded.min(100)
}

/// Seek target for a scrub-bar value in `0..=100`.
///
/// Returns `0.0` when the duration is unknown, mirroring [`scrub_percent`].
#[must_use]
pub fn seek_position(percent: f64, duration: f64) -> f64 {
    if !duration.is_finite() || duration <= 0.0 || !percent.is_finite() {
        return 0.0;
    }
    (percent.clamp(0.0, 100.0) / 100.0) * duration
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_labels_for_boundary_and_default_values() {
        assert_eq!(speed_label(0.25), "0.25x");
        assert_eq!(speed_label(1.0), "1x");
        assert_eq!(speed_label(2.0), "2x");
    }

    #[test]
    fn filter_expression_shape() {
        assert_eq!(css_filter(1.5, 150.0), "brightness(1.5) contrast(150%)");
        assert_eq!(css_filter(1.0, 100.0), "brightness(1) contrast(100%)");
    }

    #[test]
    fn slider_value_labels() {
        assert_eq!(brightness_label(0.5), "0.5");
        assert_eq!(contrast_label(150.0), "150%");
    }

    #[test]
    fn brightness_labels_match_slider_strings_across_the_step_range() {
        // The label must echo the slider's own value string; shortest-
        // roundtrip f64 formatting keeps that true for every 0.1 step.
        for tenths in 0..=20 {
            let text = format!("{}.{}", tenths / 10, tenths % 10);
            let trimmed = if text.ends_with(".0") {
                &text[..text.len() - 2]
            } else {
                text.as_str()
            };
            let value: f64 = trimmed.parse().unwrap();
            assert_eq!(brightness_label(value), trimmed);
        }
    }

    #[test]
    fn tag_filter_is_case_insensitive_substring() {
        assert!(tag_matches("Rollout/Eval", "eval"));
        assert!(tag_matches("loss", "LOSS"));
        assert!(!tag_matches("loss", "rollout"));
    }

    #[test]
    fn empty_filter_matches_all_tags() {
        assert!(tag_matches("loss", ""));
        assert!(tag_matches("", ""));
    }

    #[test]
    fn scrub_percent_rounds_and_guards_bad_durations() {
        assert_eq!(scrub_percent(5.0, 10.0), 50);
        assert_eq!(scrub_percent(1.0, 3.0), 33);
        assert_eq!(scrub_percent(2.0, 3.0), 67);
        assert_eq!(scrub_percent(10.0, 10.0), 100);

        // Before metadata loads, duration is 0 or NaN; never emit NaN.
        assert_eq!(scrub_percent(1.0, 0.0), 0);
        assert_eq!(scrub_percent(1.0, f64::NAN), 0);
        assert_eq!(scrub_percent(f64::NAN, 10.0), 0);
        assert_eq!(scrub_percent(1.0, f64::INFINITY), 0);
    }

    #[test]
    fn seek_position_maps_percent_onto_duration() {
        assert_eq!(seek_position(50.0, 10.0), 5.0);
        assert_eq!(seek_position(0.0, 10.0), 0.0);
        assert_eq!(seek_position(100.0, 7.5), 7.5);
        assert_eq!(seek_position(50.0, f64::NAN), 0.0);
    }
}
