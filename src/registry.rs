//! Metric identifiers and the registry seam.
//!
//! The collector emits through the [`Registry`] trait. [`RecorderRegistry`]
//! forwards to whichever `metrics` recorder is installed (global, or
//! thread-local via `metrics::with_local_recorder`); without a recorder all
//! calls are no-ops.

use std::collections::BTreeMap;

use metrics::{Counter, Histogram, Key, Label, Level, Metadata};

use crate::tags::BaseTags;

static METADATA: Metadata<'static> =
    Metadata::new(module_path!(), Level::INFO, Some(module_path!()));

/// Name plus tags identifying one metric.
///
/// Tags are kept sorted, so two identifiers with the same name and tags
/// compare equal regardless of the order tags were added in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MetricId {
    name: String,
    tags: BTreeMap<String, String>,
}

impl MetricId {
    pub fn new(name: impl Into<String>, tags: &BaseTags) -> Self {
        Self {
            name: name.into(),
            tags: tags.as_map().clone(),
        }
    }

    /// Copy of this identifier with one extra (or replaced) tag.
    pub fn with_tag(&self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut id = self.clone();
        id.tags.insert(key.into(), value.into());
        id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    pub fn tags(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tags.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The equivalent `metrics` key.
    pub fn to_key(&self) -> Key {
        let labels: Vec<Label> = self
            .tags
            .iter()
            .map(|(k, v)| Label::new(k.clone(), v.clone()))
            .collect();
        Key::from_parts(self.name.clone(), labels)
    }
}

/// Where the collector sends metric updates.
///
/// Implementations must be safe to call from many requests at once.
pub trait Registry: Send + Sync {
    /// Counter handle for `id`.
    fn counter(&self, id: &MetricId) -> Counter;

    /// Timer handle for `id`. Durations are recorded via
    /// [`Histogram::record`] with a [`std::time::Duration`].
    fn timer(&self, id: &MetricId) -> Histogram;
}

/// [`Registry`] backed by the currently installed `metrics` recorder.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecorderRegistry;

impl Registry for RecorderRegistry {
    fn counter(&self, id: &MetricId) -> Counter {
        let key = id.to_key();
        metrics::with_recorder(|recorder| recorder.register_counter(&key, &METADATA))
    }

    fn timer(&self, id: &MetricId) -> Histogram {
        let key = id.to_key();
        metrics::with_recorder(|recorder| recorder.register_histogram(&key, &METADATA))
    }
}
