// Copyright 2026 the Videoboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One video instance → one self-contained interactive card.
//!
//! A card owns a `<video>` element, its transport controls, and a read-only
//! info panel. Transport comes in two modes: the dashboard grid delegates to
//! the browser's native controls, while [`ControlMode::Transport`] builds an
//! explicit play/pause button, scrub bar, and time readout for deployments
//! that need finer UI control.

use videoboard_core::controls::{scrub_percent, seek_position};
use videoboard_core::format::{format_time, format_wall_time};
use videoboard_core::model::CardSpec;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, HtmlButtonElement, HtmlInputElement, HtmlVideoElement};

use crate::client::DataClient;
use crate::dom::{Child, ElementBuilder};

/// How a card's playback is controlled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ControlMode {
    /// Browser-native transport (`controls` attribute on the element).
    #[default]
    Native,
    /// Explicit play/pause button, 0–100 scrub bar, and `M:SS / M:SS`
    /// readout built by the card.
    Transport,
}

/// Builds the card subtree for one video instance.
///
/// The card container carries `data-tag` (the canonical tag id) so the
/// global filter can match it without re-fetching.
///
/// # Errors
///
/// Propagates DOM construction failures; malformed instance data is
/// rejected upstream by the data client.
pub fn render_card(
    document: &Document,
    client: &DataClient,
    spec: &CardSpec,
    mode: ControlMode,
) -> Result<Element, JsValue> {
    let video: HtmlVideoElement = document.create_element("video")?.unchecked_into();
    video.set_class_name("tensor-video");
    video.set_src(&client.video_src(&spec.video.query));
    video.set_loop(true);
    video.set_controls(mode == ControlMode::Native);

    let transport = match mode {
        ControlMode::Native => Child::Skip,
        ControlMode::Transport => Child::Node(build_transport(document, &video)?),
    };

    let description = match spec.description() {
        Some(text) => Child::Node(info_line(document, &format!("Description: {text}"))?),
        None => Child::Skip,
    };
    let info = ElementBuilder::new("div")
        .class("video-info")
        .child(info_line(document, &format!("Run: {}", spec.run))?)
        .child(info_line(document, &format!("Tag: {}", spec.title()))?)
        .child(info_line(document, &format!("Step: {}", spec.video.step))?)
        .child(info_line(
            document,
            &format!("Wall Time: {}", format_wall_time(spec.video.wall_time)),
        )?)
        .child(description)
        .build(document)?;

    ElementBuilder::new("div")
        .class("video-card")
        .attr("data-tag", &spec.tag)
        .child(Element::from(video))
        .child(transport)
        .child(info)
        .build(document)
}

fn info_line(document: &Document, text: &str) -> Result<Element, JsValue> {
    ElementBuilder::new("div").child(text).build(document)
}

/// Builds the explicit transport row and wires it bidirectionally to the
/// video element.
fn build_transport(document: &Document, video: &HtmlVideoElement) -> Result<Element, JsValue> {
    let button: HtmlButtonElement = document.create_element("button")?.unchecked_into();
    button.set_class_name("play-pause");
    button.set_text_content(Some("Play"));

    let progress: HtmlInputElement = document.create_element("input")?.unchecked_into();
    progress.set_class_name("video-progress");
    progress.set_type("range");
    progress.set_min("0");
    progress.set_max("100");
    progress.set_value("0");

    let time_display = document.create_element("span")?;
    time_display.set_class_name("time-display");
    time_display.set_text_content(Some("0:00 / 0:00"));

    // Play/pause toggles off the element's live paused state at click time,
    // never a tracked flag, so the label cannot drift from reality.
    let video_for_click = video.clone();
    let button_for_click = button.clone();
    let on_click = Closure::wrap(Box::new(move |_event: Event| {
        if video_for_click.paused() {
            let _ = video_for_click.play();
            button_for_click.set_text_content(Some("Pause"));
        } else {
            let _ = video_for_click.pause();
            button_for_click.set_text_content(Some("Play"));
        }
    }) as Box<dyn FnMut(_)>);
    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    // Native timeupdate drives the scrub position and the readout.
    let video_for_update = video.clone();
    let progress_for_update = progress.clone();
    let display_for_update = time_display.clone();
    let on_timeupdate = Closure::wrap(Box::new(move |_event: Event| {
        let current = video_for_update.current_time();
        let duration = video_for_update.duration();
        progress_for_update.set_value_as_number(f64::from(scrub_percent(current, duration)));
        display_for_update.set_text_content(Some(&format!(
            "{} / {}",
            format_time(current),
            format_time(duration)
        )));
    }) as Box<dyn FnMut(_)>);
    video.add_event_listener_with_callback("timeupdate", on_timeupdate.as_ref().unchecked_ref())?;
    on_timeupdate.forget();

    // Dragging the scrub bar seeks.
    let video_for_seek = video.clone();
    let progress_for_seek = progress.clone();
    let on_seek = Closure::wrap(Box::new(move |_event: Event| {
        let duration = video_for_seek.duration();
        let target = seek_position(progress_for_seek.value_as_number(), duration);
        video_for_seek.set_current_time(target);
    }) as Box<dyn FnMut(_)>);
    progress.add_event_listener_with_callback("input", on_seek.as_ref().unchecked_ref())?;
    on_seek.forget();

    ElementBuilder::new("div")
        .class("video-controls")
        .child(Element::from(button))
        .child(Element::from(progress))
        .child(time_display)
        .build(document)
}
