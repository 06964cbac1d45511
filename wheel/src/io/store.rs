//! Segment collection persistence with default fallback.
//!
//! The store owns the current collection and writes the full serialized
//! state through its [`StatePort`] after every successful mutation, before
//! the operation is considered complete. Absent or undecodable state falls
//! back to the default seven areas so the chart always renders.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::edit;
use crate::core::segment::{
    DEFAULT_NAME, Segment, clamp_score, default_segments, fresh_color, palette_color,
};
use crate::io::port::StatePort;

/// Storage key under which the collection lives.
pub const STATE_KEY: &str = "wheel";

const STATE_VERSION: u32 = 1;

/// Versioned on-disk envelope. Legacy state is a bare record array; both
/// shapes decode.
#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    version: u32,
    segments: Vec<Record>,
}

/// One persisted segment record. `color` was not present in the baseline
/// format, so it stays optional on the way in.
#[derive(Debug, Serialize, Deserialize)]
struct Record {
    name: String,
    value: u8,
    #[serde(default)]
    color: Option<String>,
}

/// Ordered segment collection bound to one storage key.
pub struct SegmentStore<P: StatePort> {
    port: P,
    key: String,
    segments: Vec<Segment>,
}

impl<P: StatePort> SegmentStore<P> {
    /// Load the collection under [`STATE_KEY`], falling back to the default
    /// seven areas when the key is absent or its content is malformed.
    pub fn load(port: P) -> Result<Self> {
        Self::load_with_key(port, STATE_KEY)
    }

    pub fn load_with_key(port: P, key: &str) -> Result<Self> {
        let segments = match port.get(key).context("load wheel state")? {
            Some(contents) => decode(&contents).unwrap_or_else(|| {
                warn!(key, "malformed wheel state, using defaults");
                default_segments()
            }),
            None => default_segments(),
        };
        Ok(Self {
            port,
            key: key.to_string(),
            segments,
        })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Replace the name of the segment at `index` and persist.
    pub fn rename(&mut self, index: usize, name: &str) -> Result<()> {
        let next = edit::rename(&self.segments, index, name)?;
        self.commit(next)
    }

    /// Replace the score of the segment at `index` (clamped) and persist.
    pub fn rescore(&mut self, index: usize, value: u8) -> Result<()> {
        let next = edit::rescore(&self.segments, index, value)?;
        self.commit(next)
    }

    /// Append a new area with a fresh random color and persist.
    pub fn add(&mut self, name: Option<&str>) -> Result<()> {
        let color = fresh_color(&mut rand::thread_rng());
        let next = edit::add(&self.segments, name.unwrap_or(DEFAULT_NAME), color);
        self.commit(next)
    }

    /// Delete the segment at `index` and persist.
    pub fn remove(&mut self, index: usize) -> Result<()> {
        let next = edit::remove(&self.segments, index)?;
        self.commit(next)
    }

    /// Replace the collection with the defaults and persist.
    pub fn reset(&mut self) -> Result<()> {
        self.commit(default_segments())
    }

    /// Persist the current collection without mutating it.
    pub fn save(&self) -> Result<()> {
        self.port
            .set(&self.key, &encode(&self.segments)?)
            .context("persist wheel state")
    }

    /// The write happens before the in-memory swap: a failed write leaves
    /// the store on its previous collection.
    fn commit(&mut self, next: Vec<Segment>) -> Result<()> {
        self.port
            .set(&self.key, &encode(&next)?)
            .context("persist wheel state")?;
        self.segments = next;
        Ok(())
    }
}

fn encode(segments: &[Segment]) -> Result<String> {
    let envelope = Envelope {
        version: STATE_VERSION,
        segments: segments
            .iter()
            .map(|s| Record {
                name: s.name.clone(),
                value: s.value,
                color: Some(s.color.clone()),
            })
            .collect(),
    };
    let mut buf = serde_json::to_string_pretty(&envelope).context("serialize wheel state")?;
    buf.push('\n');
    Ok(buf)
}

/// Decode either the versioned envelope or the baseline bare array.
/// Returns `None` for anything else; the caller substitutes defaults.
fn decode(contents: &str) -> Option<Vec<Segment>> {
    let records = serde_json::from_str::<Envelope>(contents)
        .map(|envelope| envelope.segments)
        .or_else(|_| serde_json::from_str::<Vec<Record>>(contents))
        .ok()?;
    Some(
        records
            .into_iter()
            .enumerate()
            .map(|(index, record)| Segment {
                name: record.name,
                value: clamp_score(record.value),
                color: record
                    .color
                    .unwrap_or_else(|| palette_color(index).to_string()),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::port::MemoryPort;

    fn store(port: &MemoryPort) -> SegmentStore<&MemoryPort> {
        SegmentStore::load(port).expect("load store")
    }

    #[test]
    fn absent_state_loads_the_defaults() {
        let port = MemoryPort::default();
        let store = store(&port);
        assert_eq!(store.segments(), default_segments());
        // Plain load does not write.
        assert_eq!(port.get(STATE_KEY).expect("get"), None);
    }

    #[test]
    fn malformed_state_loads_the_defaults() {
        let port = MemoryPort::default();
        for junk in ["", "not json", "{\"version\": 1}", "[{\"value\": 3}]", "42"] {
            port.set(STATE_KEY, junk).expect("seed");
            assert_eq!(store(&port).segments(), default_segments(), "junk: {junk}");
        }
    }

    #[test]
    fn save_then_load_round_trips() {
        let port = MemoryPort::default();
        let mut first = store(&port);
        first.rename(0, "Sleep").expect("rename");
        first.rescore(3, 9).expect("rescore");

        let reloaded = store(&port);
        assert_eq!(reloaded.segments(), first.segments());
    }

    #[test]
    fn every_mutation_persists_before_returning() {
        let port = MemoryPort::default();
        let mut editing = store(&port);

        editing.rescore(2, 8).expect("rescore");
        assert_eq!(store(&port).segments()[2].value, 8);

        editing.rename(2, "Friends").expect("rename");
        assert_eq!(store(&port).segments()[2].name, "Friends");

        editing.add(None).expect("add");
        assert_eq!(store(&port).segments().len(), 8);

        editing.remove(7).expect("remove");
        assert_eq!(store(&port).segments().len(), 7);
    }

    #[test]
    fn add_uses_the_default_name_and_mid_score() {
        let port = MemoryPort::default();
        let mut editing = store(&port);
        editing.add(None).expect("add");
        let added = &editing.segments()[7];
        assert_eq!(added.name, DEFAULT_NAME);
        assert_eq!(added.value, 5);
        assert!(added.color.starts_with('#'));
    }

    #[test]
    fn out_of_bounds_index_is_an_error_and_does_not_persist() {
        let port = MemoryPort::default();
        let mut editing = store(&port);
        assert!(editing.rescore(7, 8).is_err());
        assert!(editing.rename(99, "x").is_err());
        assert!(editing.remove(7).is_err());
        assert_eq!(port.get(STATE_KEY).expect("get"), None);
    }

    #[test]
    fn baseline_bare_array_still_decodes() {
        let port = MemoryPort::default();
        port.set(
            STATE_KEY,
            r##"[{"name": "Health", "value": 7, "color": "#112233"},
                {"name": "Rest", "value": 4}]"##,
        )
        .expect("seed");
        let loaded = store(&port);
        assert_eq!(loaded.segments().len(), 2);
        assert_eq!(loaded.segments()[0].color, "#112233");
        // Missing color falls back to the palette by index.
        assert_eq!(loaded.segments()[1].color, palette_color(1));
    }

    #[test]
    fn stored_scores_outside_bounds_are_clamped_on_load() {
        let port = MemoryPort::default();
        port.set(STATE_KEY, r#"[{"name": "a", "value": 0}, {"name": "b", "value": 99}]"#)
            .expect("seed");
        let loaded = store(&port);
        assert_eq!(loaded.segments()[0].value, 1);
        assert_eq!(loaded.segments()[1].value, 10);
    }

    #[test]
    fn reset_restores_and_persists_the_defaults() {
        let port = MemoryPort::default();
        let mut editing = store(&port);
        editing.remove(6).expect("remove");
        editing.reset().expect("reset");
        assert_eq!(editing.segments(), default_segments());
        assert_eq!(store(&port).segments(), default_segments());
    }

    #[test]
    fn save_writes_the_versioned_envelope() {
        let port = MemoryPort::default();
        let editing = store(&port);
        editing.save().expect("save");
        let raw = port.get(STATE_KEY).expect("get").expect("written");
        let envelope: serde_json::Value = serde_json::from_str(&raw).expect("json");
        assert_eq!(envelope["version"], 1);
        assert_eq!(envelope["segments"].as_array().expect("array").len(), 7);
    }

    #[test]
    fn custom_key_is_honored() {
        let port = MemoryPort::default();
        let mut editing =
            SegmentStore::load_with_key(&port, "other").expect("load");
        editing.rescore(0, 9).expect("rescore");
        assert!(port.get("other").expect("get").is_some());
        assert_eq!(port.get(STATE_KEY).expect("get"), None);
    }

    #[test]
    fn loaded_collections_compare_structurally() {
        let port = MemoryPort::default();
        let mut editing = store(&port);
        for (index, value) in [9, 2, 7].into_iter().enumerate() {
            editing.rescore(index, value).expect("rescore");
        }
        let expected: Vec<u8> = editing.segments().iter().map(|s| s.value).collect();
        let reloaded = store(&port);
        let actual: Vec<u8> = reloaded.segments().iter().map(|s| s.value).collect();
        assert_eq!(actual, expected);
    }
}
