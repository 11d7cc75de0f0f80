// Copyright 2026 the Videoboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Full-page composition.
//!
//! One render pass per dashboard load: show a placeholder, fetch the index,
//! fan the per-tag video fetches out concurrently, join them all, then build
//! the sidebar and grid in one pass and swap them in atomically. A failing
//! fetch fails the whole render — a partially populated grid would
//! misrepresent data completeness — and the error text replaces the
//! placeholder in place.

use futures_util::future::try_join_all;
use videoboard_core::DashboardError;
use videoboard_core::controls::{
    BRIGHTNESS, CONTRAST, SPEED, SliderSpec, brightness_label, contrast_label, speed_label,
};
use videoboard_core::model::{self, RunTagIndex, VideoInstance};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement, console};

use crate::card::{ControlMode, render_card};
use crate::client::DataClient;
use crate::controls;
use crate::dom::ElementBuilder;

/// Minimal layout for the sidebar/grid split and the card classes.
const STYLESHEET: &str = "
.dashboard-layout {
  display: flex;
  height: 100vh;
}
.sidebar {
  width: 300px;
  padding: 20px;
  border-right: 1px solid #ccc;
}
.center-content {
  flex: 1;
  padding: 20px;
  overflow-y: auto;
}
.controls {
  margin-bottom: 20px;
}
.slider-container {
  margin: 10px 0;
}
.video-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
  gap: 20px;
  padding: 20px;
}
.video-card {
  border: 1px solid #ddd;
  border-radius: 4px;
  padding: 10px;
}
.tensor-video {
  width: 100%;
  background: #000;
}
.video-info {
  margin-top: 10px;
  font-size: 0.9em;
}
";

/// Runs the full fetch-and-render sequence against `mount`.
///
/// A loading placeholder appears immediately; the completed tree replaces it
/// only once every fetch has resolved. On any fetch or parse failure the
/// placeholder's text becomes the error message and nothing else is
/// attached.
///
/// # Errors
///
/// Propagates DOM construction failures. Data-fetch failures do not
/// propagate; they surface as the in-place message.
pub async fn render(client: DataClient, mount: HtmlElement) -> Result<(), JsValue> {
    let document = mount
        .owner_document()
        .ok_or_else(|| JsValue::from_str("mount point has no document"))?;

    let placeholder = ElementBuilder::new("p")
        .child("Fetching video data\u{2026}")
        .build(&document)?;
    mount.append_child(&placeholder)?;
    inject_stylesheet(&document)?;

    match fetch_all(&client).await {
        Ok((index, lists)) => {
            let tree = build_layout(&document, &client, &index, &lists)?;
            placeholder.remove();
            mount.append_child(&tree)?;
        }
        Err(err) => {
            placeholder.set_text_content(Some(&format!("Error loading video data: {err}")));
        }
    }

    Ok(())
}

/// Fetches the index, then every tag's video list concurrently, joining on
/// the full set. First failure aborts the join.
async fn fetch_all(
    client: &DataClient,
) -> Result<(RunTagIndex, Vec<Vec<VideoInstance>>), DashboardError> {
    let index = client.fetch_index().await?;
    console::log_1(&format!("videoboard: fetched {} runs", index.runs.len()).into());

    let plan = model::fetch_plan(&index);
    let lists = try_join_all(
        plan.iter()
            .map(|(run, tag)| client.fetch_videos(run, tag)),
    )
    .await?;
    console::log_1(&format!("videoboard: fetched {} video lists", lists.len()).into());

    Ok((index, lists))
}

/// Builds the whole layout tree in one pass: sidebar, filter box, and one
/// card per video instance in fetch order.
fn build_layout(
    document: &Document,
    client: &DataClient,
    index: &RunTagIndex,
    lists: &[Vec<VideoInstance>],
) -> Result<Element, JsValue> {
    let mut grid = ElementBuilder::new("div").class("video-grid");
    for spec in model::card_specs(index, lists) {
        grid = grid.child(render_card(document, client, &spec, ControlMode::Native)?);
    }

    let filter_doc = document.clone();
    let filter_box = ElementBuilder::new("input")
        .attr("type", "text")
        .attr("id", "tagFilter")
        .attr("placeholder", "Filter tags...")
        .on("input", move |event| {
            if let Some(text) = input_text(&event) {
                controls::apply_tag_filter(&filter_doc, &text);
            }
        })
        .build(document)?;

    let content = ElementBuilder::new("div")
        .class("center-content")
        .child(filter_box)
        .child(grid.build(document)?)
        .build(document)?;

    ElementBuilder::new("div")
        .class("dashboard-layout")
        .child(build_sidebar(document)?)
        .child(content)
        .build(document)
}

fn build_sidebar(document: &Document) -> Result<Element, JsValue> {
    let speed_doc = document.clone();
    let speed = slider_row(document, SPEED, speed_label, move |event| {
        if let Some(value) = input_value(&event) {
            controls::set_label(&speed_doc, SPEED.label_id, &speed_label(value));
            controls::apply_speed(&speed_doc, value);
        }
    })?;

    let brightness_doc = document.clone();
    let brightness = slider_row(document, BRIGHTNESS, brightness_label, move |event| {
        if let Some(value) = input_value(&event) {
            controls::set_label(&brightness_doc, BRIGHTNESS.label_id, &brightness_label(value));
            controls::apply_video_filters(&brightness_doc, BRIGHTNESS.id, CONTRAST.id);
        }
    })?;

    let contrast_doc = document.clone();
    let contrast = slider_row(document, CONTRAST, contrast_label, move |event| {
        if let Some(value) = input_value(&event) {
            controls::set_label(&contrast_doc, CONTRAST.label_id, &contrast_label(value));
            controls::apply_video_filters(&contrast_doc, BRIGHTNESS.id, CONTRAST.id);
        }
    })?;

    let play_doc = document.clone();
    let pause_doc = document.clone();
    let global = ElementBuilder::new("div")
        .class("global-controls")
        .child(
            ElementBuilder::new("button")
                .attr("id", "playAll")
                .on("click", move |_event| controls::play_all(&play_doc))
                .child("Play All")
                .build(document)?,
        )
        .child(
            ElementBuilder::new("button")
                .attr("id", "pauseAll")
                .on("click", move |_event| controls::pause_all(&pause_doc))
                .child("Pause All")
                .build(document)?,
        )
        .build(document)?;

    let panel = ElementBuilder::new("div")
        .class("controls")
        .child(speed)
        .child(brightness)
        .child(contrast)
        .child(global)
        .build(document)?;

    ElementBuilder::new("div")
        .class("sidebar")
        .child(panel)
        .build(document)
}

/// One labelled slider row. The value label starts at the formatted initial
/// value and is updated by the row's own input handler thereafter.
fn slider_row(
    document: &Document,
    spec: SliderSpec,
    format: fn(f64) -> String,
    on_input: impl FnMut(Event) + 'static,
) -> Result<Element, JsValue> {
    let initial_label = spec
        .initial
        .parse::<f64>()
        .map(format)
        .unwrap_or_default();

    let label = ElementBuilder::new("label")
        .child(spec.label)
        .child(
            ElementBuilder::new("span")
                .attr("id", spec.label_id)
                .child(initial_label)
                .build(document)?,
        )
        .build(document)?;

    let slider = ElementBuilder::new("input")
        .attr("type", "range")
        .attr("id", spec.id)
        .attr("min", spec.min)
        .attr("max", spec.max)
        .attr("step", spec.step)
        .attr("value", spec.initial)
        .on("input", on_input)
        .build(document)?;

    ElementBuilder::new("div")
        .class("slider-container")
        .child(label)
        .child(slider)
        .build(document)
}

fn inject_stylesheet(document: &Document) -> Result<(), JsValue> {
    let style = ElementBuilder::new("style").child(STYLESHEET).build(document)?;
    if let Some(head) = document.head() {
        head.append_child(&style)?;
    }
    Ok(())
}

/// The slider value behind an input event, if the target is a finite-valued
/// input element.
fn input_value(event: &Event) -> Option<f64> {
    let input: HtmlInputElement = event.target()?.dyn_into().ok()?;
    let value = input.value_as_number();
    value.is_finite().then_some(value)
}

/// The text behind an input event.
fn input_text(event: &Event) -> Option<String> {
    let input: HtmlInputElement = event.target()?.dyn_into().ok()?;
    Some(input.value())
}
