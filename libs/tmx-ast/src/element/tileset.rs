use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::properties::TmxProperties;

/// A named collection of tiles cut from one source image, addressed by a
/// contiguous global id range starting at `firstgid`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TmxTileset {
    /// First global tile id of this tileset; its key within the map.
    pub firstgid: u32,
    /// Path of an external TSX file, empty when the tileset is inline.
    pub source: String,
    pub name: String,
    pub tile_width: u32,
    pub tile_height: u32,
    /// Spacing in pixels between tiles in the source image.
    pub spacing: u32,
    /// Margin around the tiles in the source image.
    pub margin: u32,
    pub offset: TmxTileOffset,
    pub image: Option<TmxImage>,
    /// Custom tiles, keyed by tileset-local id.
    pub tiles: BTreeMap<u32, TmxTile>,
    pub properties: TmxProperties,
}

impl Default for TmxTileset {
    fn default() -> Self {
        Self {
            firstgid: 0,
            source: String::new(),
            name: String::new(),
            tile_width: 0,
            tile_height: 0,
            spacing: 0,
            margin: 0,
            offset: TmxTileOffset::default(),
            image: None,
            tiles: BTreeMap::new(),
            properties: TmxProperties::default(),
        }
    }
}

impl TmxTileset {
    pub fn add_tile(&mut self, tile: TmxTile) {
        self.tiles.insert(tile.id, tile);
    }

    pub fn tile(&self, id: u32) -> Option<&TmxTile> {
        self.tiles.get(&id)
    }
}

/// Source image backing a tileset. The renderer resolves the path itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TmxImage {
    pub source: String,
    /// Transparent color as a 24-bit integer, from the `trans` attribute.
    pub alpha: Option<u32>,
    pub width: u32,
    pub height: u32,
}

/// Pixel offset applied when drawing tiles from a tileset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TmxTileOffset {
    pub x: i32,
    pub y: i32,
}

/// A tileset-local tile carrying extra metadata.
///
/// The flip flags are part of the model but never set by the parser; a
/// renderer derives them from the high bits of layer gids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TmxTile {
    pub id: u32,
    pub flipped_horizontally: bool,
    pub flipped_vertically: bool,
    pub flipped_diagonally: bool,
    pub properties: TmxProperties,
}
