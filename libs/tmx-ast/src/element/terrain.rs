use serde::{Deserialize, Serialize};

use super::properties::TmxProperties;

/// A terrain type defined by a tileset, anchored at one of its local tiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TmxTerrain {
    pub name: String,
    /// Tileset-local id of the tile representing this terrain.
    pub tile: u32,
    pub properties: TmxProperties,
}

/// The ordered terrain list of a tileset, indexable by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TmxTerrainTypes {
    pub terrains: Vec<TmxTerrain>,
}

impl TmxTerrainTypes {
    pub fn add_terrain(&mut self, terrain: TmxTerrain) {
        self.terrains.push(terrain);
    }

    pub fn terrain(&self, index: usize) -> Option<&TmxTerrain> {
        self.terrains.get(index)
    }

    pub fn len(&self) -> usize {
        self.terrains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terrains.is_empty()
    }
}
