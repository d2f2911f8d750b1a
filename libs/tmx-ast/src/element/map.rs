use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::layer::TmxLayer;
use super::properties::TmxProperties;
use super::tileset::TmxTileset;

/// How the map's tile grid is projected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Orthogonal,
    Isometric,
}

impl Orientation {
    /// Case-insensitive match against the TMX attribute value.
    pub(crate) fn from_attr(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("orthogonal") {
            Some(Self::Orthogonal)
        } else if value.eq_ignore_ascii_case("isometric") {
            Some(Self::Isometric)
        } else {
            None
        }
    }
}

/// Root of a TMX document.
///
/// Tilesets are keyed by their first global tile id; inserting a tileset with
/// an already-present firstgid replaces the previous entry. Layers keep
/// document order, which is compositing order (first is topmost).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TmxMap {
    pub version: String,
    pub orientation: Orientation,
    /// Map size in tiles.
    pub width: u32,
    pub height: u32,
    /// Tile size in pixels.
    pub tile_width: u32,
    pub tile_height: u32,
    pub tilesets: BTreeMap<u32, TmxTileset>,
    pub layers: Vec<TmxLayer>,
    pub properties: TmxProperties,
}

impl Default for TmxMap {
    fn default() -> Self {
        Self {
            version: "1.0".to_owned(),
            orientation: Orientation::Orthogonal,
            width: 0,
            height: 0,
            tile_width: 0,
            tile_height: 0,
            tilesets: BTreeMap::new(),
            layers: Vec::new(),
            properties: TmxProperties::default(),
        }
    }
}

impl TmxMap {
    /// Indexes `tileset` by its firstgid, replacing any previous tileset with
    /// the same key.
    pub fn add_tileset(&mut self, tileset: TmxTileset) {
        self.tilesets.insert(tileset.firstgid, tileset);
    }

    pub fn tileset(&self, firstgid: u32) -> Option<&TmxTileset> {
        self.tilesets.get(&firstgid)
    }

    pub fn add_layer(&mut self, layer: TmxLayer) {
        self.layers.push(layer);
    }
}
