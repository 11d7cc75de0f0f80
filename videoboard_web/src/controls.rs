// Copyright 2026 the Videoboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Global control side effects.
//!
//! Every handler here is stateless: it re-queries the live set of rendered
//! video elements (or cards) at event time and applies the new value to each
//! one. No element handles are cached between events, so membership changes
//! from filtering or later insertion can never leave a stale reference
//! behind.

use videoboard_core::controls::{css_filter, tag_matches};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement, HtmlVideoElement};

/// The live set of rendered video elements, queried fresh.
fn video_elements(document: &Document) -> Vec<HtmlVideoElement> {
    query_all(document, ".tensor-video")
}

/// The live set of card containers, queried fresh.
fn card_elements(document: &Document) -> Vec<HtmlElement> {
    query_all(document, ".video-card")
}

fn query_all<T: JsCast>(document: &Document, selector: &str) -> Vec<T> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into().ok())
        .collect()
}

/// Reads a slider's current numeric value by element id.
pub(crate) fn slider_value(document: &Document, id: &str) -> Option<f64> {
    let input: HtmlInputElement = document.get_element_by_id(id)?.dyn_into().ok()?;
    let value = input.value_as_number();
    value.is_finite().then_some(value)
}

/// Replaces a value label's text by element id.
pub(crate) fn set_label(document: &Document, id: &str, text: &str) {
    if let Some(label) = document.get_element_by_id(id) {
        label.set_text_content(Some(text));
    }
}

/// Sets the playback rate on every currently rendered video element.
pub(crate) fn apply_speed(document: &Document, rate: f64) {
    for video in video_elements(document) {
        video.set_playback_rate(rate);
    }
}

/// Recomputes brightness and contrast into one CSS filter expression and
/// applies it to every currently rendered video element.
///
/// Both sliders are read here no matter which one fired, so the two effects
/// can never disagree about the composed expression.
pub(crate) fn apply_video_filters(document: &Document, brightness_id: &str, contrast_id: &str) {
    let Some(brightness) = slider_value(document, brightness_id) else {
        return;
    };
    let Some(contrast) = slider_value(document, contrast_id) else {
        return;
    };
    let filter = css_filter(brightness, contrast);
    for video in video_elements(document) {
        let _ = video.style().set_property("filter", &filter);
    }
}

/// Shows or hides every card by matching its `data-tag` against the filter
/// text. One linear pass; no debouncing at dashboard scale.
pub(crate) fn apply_tag_filter(document: &Document, filter: &str) {
    for card in card_elements(document) {
        let tag = card.get_attribute("data-tag").unwrap_or_default();
        if tag_matches(&tag, filter) {
            let _ = card.style().remove_property("display");
        } else {
            let _ = card.style().set_property("display", "none");
        }
    }
}

/// Starts playback on every currently present video element. Elements
/// inserted later are unaffected.
pub(crate) fn play_all(document: &Document) {
    for video in video_elements(document) {
        let _ = video.play();
    }
}

/// Pauses every currently present video element.
pub(crate) fn pause_all(document: &Document) {
    for video in video_elements(document) {
        let _ = video.pause();
    }
}
