//! Loading of persisted player and farm blobs.
//!
//! Saved blobs may come from older builds or be hand-edited, so every field is merged on its own: anything missing,
//! `null` or of the wrong shape falls back to its default while the rest of the snapshot is kept.

use alloc::string::String;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::*;

fn merge_field<T: DeserializeOwned>(object: &Map<String, Value>, key: &str, default: T) -> T {
    match object.get(key) {
        None | Some(Value::Null) => default,
        Some(value) => serde_json::from_value(value.clone()).unwrap_or_else(|err| {
            log::warn!("snapshot field {:?} is malformed, using default: {}", key, err);
            default
        }),
    }
}

impl PlayerState {
    pub fn from_snapshot(snapshot: &Value) -> Self {
        let defaults = Self::default();
        let Some(object) = snapshot.as_object() else {
            log::warn!("player snapshot is not an object, using defaults");
            return defaults;
        };

        let level = merge_field(object, "level", defaults.level);
        let level = if level == 0 {
            log::warn!("player snapshot has level 0, using 1");
            1
        } else {
            level
        };

        Self {
            coins: merge_field(object, "coins", defaults.coins),
            seeds: merge_field(object, "seeds", defaults.seeds),
            usd: merge_field(object, "usd", defaults.usd),
            experience: merge_field(object, "exp", defaults.experience),
            level,
        }
    }

    /// Parses a stored JSON string, an unparsable string loads as a new player.
    pub fn from_snapshot_str(snapshot: &str) -> Self {
        match serde_json::from_str(snapshot) {
            Ok(value) => Self::from_snapshot(&value),
            Err(err) => {
                log::warn!("player snapshot is not valid JSON, using defaults: {}", err);
                Self::default()
            }
        }
    }
}

impl Tile {
    pub fn from_snapshot(snapshot: &Value) -> Self {
        let Some(object) = snapshot.as_object() else {
            log::warn!("tile snapshot is not an object, using an empty tile");
            return Self::EMPTY;
        };

        let stage: Stage = merge_field(object, "stage", 0);
        Self {
            stage: stage.min(MATURE_STAGE),
            dryness: merge_field(object, "dryness", 0),
            pest: merge_field(object, "pest", false),
        }
    }
}

impl Farm {
    pub fn from_snapshot(snapshot: &Value) -> Self {
        let Some(records) = snapshot.as_array() else {
            log::warn!("farm snapshot is not an array, using an empty farm");
            return Self::default();
        };
        if records.len() != TILE_COUNT {
            log::warn!(
                "farm snapshot has {} tiles, expected {}",
                records.len(),
                TILE_COUNT
            );
        }

        let mut tiles = [Tile::EMPTY; TILE_COUNT];
        for (tile, record) in tiles.iter_mut().zip(records) {
            *tile = Tile::from_snapshot(record);
        }
        Self::from_tiles(tiles)
    }

    /// Parses a stored JSON string, an unparsable string loads as an empty farm.
    pub fn from_snapshot_str(snapshot: &str) -> Self {
        match serde_json::from_str(snapshot) {
            Ok(value) => Self::from_snapshot(&value),
            Err(err) => {
                log::warn!("farm snapshot is not valid JSON, using an empty farm: {}", err);
                Self::default()
            }
        }
    }
}
