// Copyright 2026 the Videoboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Payload types for the index and video-list endpoints.
//!
//! The tags endpoint serves `{ [run]: { [tag]: TagMetadata } }` and the
//! videos endpoint serves an ordered array of [`VideoInstance`]. Both orders
//! are server-determined and must be preserved for display, so the index
//! deserializes through a map visitor into entry vectors ([`RunTagIndex`])
//! rather than into a sorted or hashed map.

use alloc::string::{String, ToString as _};
use alloc::vec::Vec;
use core::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::error::DashboardError;

/// Display hints attached to one tag of one run.
///
/// Mirrors the metadata object emitted by the tags endpoint. Unknown fields
/// are ignored so the payload can grow without breaking older dashboards.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct TagMetadata {
    /// Human-oriented name shown in place of the raw tag id when non-empty.
    #[serde(default, rename = "displayName")]
    pub display_name: Option<String>,
    /// Free-form tag description; omitted from the card when empty.
    #[serde(default)]
    pub description: Option<String>,
    /// Number of samples logged per step, if the server reports it.
    #[serde(default)]
    pub samples: Option<u64>,
}

/// One tag of a run together with its display metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct TagEntry {
    /// Tag identifier, the canonical key for filtering.
    pub tag: String,
    /// Display hints for this tag.
    pub metadata: TagMetadata,
}

/// One run and its tags, in server order.
#[derive(Clone, Debug, PartialEq)]
pub struct RunEntry {
    /// Run identifier.
    pub run: String,
    /// Tags of this run, in the order the server returned them.
    pub tags: Vec<TagEntry>,
}

/// The two-level run → tag → metadata index, in server order.
///
/// Built once per dashboard load and immutable thereafter. Every tag listed
/// here has a video list fetchable via its `(run, tag)` pair.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunTagIndex {
    /// Runs in the order the server returned them.
    pub runs: Vec<RunEntry>,
}

impl RunTagIndex {
    /// Total number of `(run, tag)` pairs, i.e. the fan-out width.
    #[must_use]
    pub fn tag_count(&self) -> usize {
        self.runs.iter().map(|r| r.tags.len()).sum()
    }
}

/// Inner tag → metadata map, deserialized in document order.
struct TagEntries(Vec<TagEntry>);

impl<'de> Deserialize<'de> for TagEntries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TagVisitor;

        impl<'de> Visitor<'de> for TagVisitor {
            type Value = TagEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of tag names to metadata objects")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((tag, metadata)) = map.next_entry::<String, TagMetadata>()? {
                    entries.push(TagEntry { tag, metadata });
                }
                Ok(TagEntries(entries))
            }
        }

        deserializer.deserialize_map(TagVisitor)
    }
}

impl<'de> Deserialize<'de> for RunTagIndex {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct IndexVisitor;

        impl<'de> Visitor<'de> for IndexVisitor {
            type Value = RunTagIndex;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of run names to tag maps")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut runs = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((run, tags)) = map.next_entry::<String, TagEntries>()? {
                    runs.push(RunEntry { run, tags: tags.0 });
                }
                Ok(RunTagIndex { runs })
            }
        }

        deserializer.deserialize_map(IndexVisitor)
    }
}

/// One logged video at a point in a run's timeline.
///
/// `query` is an opaque query string identifying the binary resource on the
/// individual-video endpoint; the dashboard never parses it.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct VideoInstance {
    /// Logical time index within the run.
    pub step: u64,
    /// Seconds since the Unix epoch when the instance was recorded.
    pub wall_time: f64,
    /// Opaque query string for the video bytes.
    pub query: String,
}

/// Parses the tags-endpoint payload, preserving server order.
///
/// # Errors
///
/// [`DashboardError::MalformedIndex`] if the payload is not a two-level
/// mapping of strings to metadata objects.
pub fn parse_index(payload: &str) -> Result<RunTagIndex, DashboardError> {
    serde_json::from_str(payload).map_err(|_| DashboardError::MalformedIndex)
}

/// Parses a videos-endpoint payload for `(run, tag)`.
///
/// # Errors
///
/// [`DashboardError::MalformedVideoList`] if the payload is not an array or
/// an entry lacks `step`, `wall_time`, or `query`.
pub fn parse_video_list(
    run: &str,
    tag: &str,
    payload: &str,
) -> Result<Vec<VideoInstance>, DashboardError> {
    serde_json::from_str(payload).map_err(|_| DashboardError::MalformedVideoList {
        run: run.to_string(),
        tag: tag.to_string(),
    })
}

/// Flattens the index into the ordered list of `(run, tag)` pairs to fetch.
///
/// The composer issues exactly one video-list fetch per returned pair, in
/// this order, and joins them all before rendering.
#[must_use]
pub fn fetch_plan(index: &RunTagIndex) -> Vec<(String, String)> {
    index
        .runs
        .iter()
        .flat_map(|run| {
            run.tags
                .iter()
                .map(|entry| (run.run.clone(), entry.tag.clone()))
        })
        .collect()
}

/// Everything the card renderer needs for one video instance.
#[derive(Clone, Debug, PartialEq)]
pub struct CardSpec {
    /// Run identifier.
    pub run: String,
    /// Canonical tag identifier (drives filtering).
    pub tag: String,
    /// Display hints for the tag.
    pub metadata: TagMetadata,
    /// The video instance this card shows.
    pub video: VideoInstance,
}

impl CardSpec {
    /// The heading for the card's tag line: the display name when present
    /// and non-empty, otherwise the raw tag id.
    #[must_use]
    pub fn title(&self) -> &str {
        match self.metadata.display_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.tag,
        }
    }

    /// The description line, or `None` when absent or empty (the card omits
    /// the line entirely rather than rendering it blank).
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.metadata
            .description
            .as_deref()
            .filter(|d| !d.is_empty())
    }
}

/// Joins the index with the fetched video lists into card specs.
///
/// `lists` must be aligned with [`fetch_plan`] order: one list per `(run,
/// tag)` pair, in the same order. Cards come out in fetch order, and within
/// a tag in the order the server returned the list.
#[must_use]
pub fn card_specs(index: &RunTagIndex, lists: &[Vec<VideoInstance>]) -> Vec<CardSpec> {
    debug_assert_eq!(
        index.tag_count(),
        lists.len(),
        "one video list per (run, tag) pair"
    );

    let mut cards = Vec::new();
    let mut slot = 0usize;
    for run in &index.runs {
        for entry in &run.tags {
            let Some(list) = lists.get(slot) else { break };
            slot += 1;
            for video in list {
                cards.push(CardSpec {
                    run: run.run.clone(),
                    tag: entry.tag.clone(),
                    metadata: entry.metadata.clone(),
                    video: video.clone(),
                });
            }
        }
    }
    cards
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[test]
    fn index_preserves_server_order() {
        // Keys deliberately out of lexicographic order.
        let payload = r#"{
            "zeta": {"b_loss": {}, "a_loss": {}},
            "alpha": {"rollout": {"description": "eval rollouts"}}
        }"#;
        let index = parse_index(payload).unwrap();

        assert_eq!(index.runs.len(), 2, "two runs");
        assert_eq!(index.runs[0].run, "zeta");
        assert_eq!(index.runs[1].run, "alpha");
        assert_eq!(index.runs[0].tags[0].tag, "b_loss");
        assert_eq!(index.runs[0].tags[1].tag, "a_loss");
        assert_eq!(
            index.runs[1].tags[0].metadata.description.as_deref(),
            Some("eval rollouts")
        );
    }

    #[test]
    fn index_rejects_non_mapping_payloads() {
        assert_eq!(parse_index("[]"), Err(DashboardError::MalformedIndex));
        assert_eq!(parse_index("42"), Err(DashboardError::MalformedIndex));
        assert_eq!(
            parse_index(r#"{"run1": "not a tag map"}"#),
            Err(DashboardError::MalformedIndex)
        );
        assert_eq!(
            parse_index(r#"{"run1": {"loss": "not metadata"}}"#),
            Err(DashboardError::MalformedIndex)
        );
    }

    #[test]
    fn metadata_accepts_server_fields_and_ignores_unknown_ones() {
        let payload = r#"{
            "run1": {
                "loss": {
                    "displayName": "Training loss",
                    "description": "per-batch loss clips",
                    "samples": 3,
                    "futureField": [1, 2, 3]
                }
            }
        }"#;
        let index = parse_index(payload).unwrap();
        let md = &index.runs[0].tags[0].metadata;

        assert_eq!(md.display_name.as_deref(), Some("Training loss"));
        assert_eq!(md.samples, Some(3));
    }

    #[test]
    fn video_list_preserves_order_and_fields() {
        let payload = r#"[
            {"step": 7, "wall_time": 1700000001.5, "query": "blob_key=b"},
            {"step": 3, "wall_time": 1700000000.0, "query": "blob_key=a"}
        ]"#;
        let list = parse_video_list("run1", "loss", payload).unwrap();

        // Server order kept even though steps are unsorted.
        assert_eq!(list[0].step, 7);
        assert_eq!(list[1].step, 3);
        assert_eq!(list[0].query, "blob_key=b");
    }

    #[test]
    fn video_list_rejects_missing_fields() {
        let missing_query = r#"[{"step": 0, "wall_time": 1.0}]"#;
        assert_eq!(
            parse_video_list("r", "t", missing_query),
            Err(DashboardError::MalformedVideoList {
                run: "r".into(),
                tag: "t".into(),
            })
        );

        let missing_step = r#"[{"wall_time": 1.0, "query": "a=1"}]"#;
        assert!(parse_video_list("r", "t", missing_step).is_err(), "step is required");

        assert!(parse_video_list("r", "t", "{}").is_err(), "list must be an array");
    }

    #[test]
    fn fetch_plan_flattens_in_index_order() {
        let payload = r#"{
            "run2": {"loss": {}, "rollout": {}},
            "run1": {"loss": {}}
        }"#;
        let index = parse_index(payload).unwrap();
        let plan = fetch_plan(&index);

        assert_eq!(plan.len(), index.tag_count(), "one fetch per tag");
        assert_eq!(
            plan,
            vec![
                ("run2".into(), "loss".into()),
                ("run2".into(), "rollout".into()),
                ("run1".into(), "loss".into()),
            ]
        );
    }

    #[test]
    fn card_specs_follow_fetch_order_then_list_order() {
        let index = parse_index(r#"{"r1": {"a": {}, "b": {}}}"#).unwrap();
        let lists = vec![
            vec![
                VideoInstance {
                    step: 5,
                    wall_time: 2.0,
                    query: "q=a5".into(),
                },
                VideoInstance {
                    step: 1,
                    wall_time: 1.0,
                    query: "q=a1".into(),
                },
            ],
            vec![VideoInstance {
                step: 0,
                wall_time: 0.0,
                query: "q=b0".into(),
            }],
        ];
        let cards = card_specs(&index, &lists);

        let order: Vec<(&str, u64)> = cards
            .iter()
            .map(|c| (c.tag.as_str(), c.video.step))
            .collect();
        assert_eq!(order, vec![("a", 5), ("a", 1), ("b", 0)]);
    }

    #[test]
    fn single_run_single_tag_scenario() {
        let index = parse_index(r#"{"run1": {"loss": {}}}"#).unwrap();
        let lists = vec![
            parse_video_list(
                "run1",
                "loss",
                r#"[{"step": 0, "wall_time": 1700000000, "query": "a=1"}]"#,
            )
            .unwrap(),
        ];
        let cards = card_specs(&index, &lists);

        assert_eq!(cards.len(), 1, "exactly one card");
        assert_eq!(cards[0].run, "run1");
        assert_eq!(cards[0].tag, "loss");
        assert_eq!(cards[0].video.step, 0);
        assert_eq!(cards[0].video.query, "a=1");
        assert_eq!(cards[0].title(), "loss");
        assert_eq!(cards[0].description(), None);
    }

    #[test]
    fn empty_description_is_omitted() {
        let spec = CardSpec {
            run: "r".into(),
            tag: "t".into(),
            metadata: TagMetadata {
                display_name: Some(String::new()),
                description: Some(String::new()),
                samples: None,
            },
            video: VideoInstance {
                step: 0,
                wall_time: 0.0,
                query: String::new(),
            },
        };

        assert_eq!(spec.title(), "t", "empty display name falls back to tag");
        assert_eq!(spec.description(), None, "empty description is omitted");
    }
}
