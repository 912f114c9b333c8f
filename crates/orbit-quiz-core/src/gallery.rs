//! Collectible rewards won by completing the activity.

use crate::constants::GALLERY_KEY;
use crate::persistence::{get_json, set_json, KeyValueStore};
use rand::seq::SliceRandom;
use rand::RngCore;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectibleCount {
    pub item: String,
    pub count: u32,
}

/// Reward source consumed by the completion flow.
pub trait CollectibleStore {
    /// Draws one item uniformly from the pool and records it. `None` when the
    /// pool is empty.
    fn award_random(&mut self, rng: &mut dyn RngCore, won_at_ms: f64) -> Option<String>;
    /// Won items, most recent first, with how often each was won.
    fn summary(&self) -> Vec<CollectibleCount>;
}

/// Persisted shape of the gallery.
///
/// Fields decode independently: a malformed field reads as its default so the
/// remaining counts survive. Older records store `lastWonAt` as a date string,
/// which reads as `None`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryRecord {
    #[serde(default, deserialize_with = "lenient_counts")]
    pub counts: BTreeMap<String, u32>,
    #[serde(default, deserialize_with = "lenient_order")]
    pub order: Vec<String>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub last_won_at: Option<f64>,
}

fn lenient_counts<'de, D: Deserializer<'de>>(d: D) -> Result<BTreeMap<String, u32>, D::Error> {
    let Value::Object(map) = Value::deserialize(d)? else {
        return Ok(BTreeMap::new());
    };
    Ok(map
        .into_iter()
        .filter_map(|(item, count)| {
            let n = count.as_f64().filter(|n| n.is_finite() && *n >= 1.0)?;
            Some((item, n.min(u32::MAX as f64) as u32))
        })
        .collect())
}

fn lenient_order<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
    let Value::Array(items) = Value::deserialize(d)? else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|v| match v {
            Value::String(s) => Some(s),
            _ => None,
        })
        .collect())
}

fn lenient_timestamp<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    Ok(Value::deserialize(d)?.as_f64().filter(|t| t.is_finite()))
}

impl GalleryRecord {
    /// Drops items outside `pool` and zero counts; `order` lists each counted
    /// item exactly once.
    pub fn normalize(mut self, pool: &[String]) -> Self {
        self.counts
            .retain(|item, count| *count > 0 && pool.iter().any(|p| p == item));
        let mut order: Vec<String> = Vec::with_capacity(self.counts.len());
        for item in self.order.drain(..) {
            if self.counts.contains_key(&item) && !order.contains(&item) {
                order.push(item);
            }
        }
        for item in self.counts.keys() {
            if !order.contains(item) {
                order.push(item.clone());
            }
        }
        self.order = order;
        self
    }
}

pub struct Gallery<S> {
    store: S,
    pool: Vec<String>,
}

impl<S: KeyValueStore> Gallery<S> {
    pub fn new(store: S, pool: Vec<String>) -> Self {
        Self { store, pool }
    }

    pub fn pool(&self) -> &[String] {
        &self.pool
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current record; anything undecodable reads as an empty gallery.
    pub fn read(&self) -> GalleryRecord {
        match get_json::<GalleryRecord, _>(&self.store, GALLERY_KEY) {
            Ok(Some(record)) => record.normalize(&self.pool),
            Ok(None) => GalleryRecord::default(),
            Err(e) => {
                log::warn!("[gallery] {}", e);
                GalleryRecord::default()
            }
        }
    }

    fn write(&mut self, record: &GalleryRecord) {
        if let Err(e) = set_json(&mut self.store, GALLERY_KEY, record) {
            log::warn!("[gallery] {}", e);
        }
    }
}

impl<S: KeyValueStore> CollectibleStore for Gallery<S> {
    fn award_random(&mut self, rng: &mut dyn RngCore, won_at_ms: f64) -> Option<String> {
        let selected = self.pool.choose(rng)?.clone();
        let mut record = self.read();
        *record.counts.entry(selected.clone()).or_insert(0) += 1;
        record.order.retain(|item| item != &selected);
        record.order.insert(0, selected.clone());
        record.last_won_at = Some(won_at_ms);
        self.write(&record);
        log::info!("[gallery] awarded {}", selected);
        Some(selected)
    }

    fn summary(&self) -> Vec<CollectibleCount> {
        let record = self.read();
        record
            .order
            .iter()
            .filter_map(|item| {
                record.counts.get(item).map(|&count| CollectibleCount {
                    item: item.clone(),
                    count,
                })
            })
            .collect()
    }
}
