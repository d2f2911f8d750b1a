use serde::{Deserialize, Serialize};

use super::data::TmxData;
use super::object::TmxObjectVariant;
use super::properties::TmxProperties;

/// One compositable plane of the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TmxLayer {
    Tile(TmxTileLayer),
    ObjectGroup(TmxObjectGroup),
}

/// A grid of tile references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TmxTileLayer {
    pub name: String,
    /// In [0, 1].
    pub opacity: f32,
    pub visible: bool,
    pub data: Option<TmxData>,
    pub properties: TmxProperties,
}

impl Default for TmxTileLayer {
    fn default() -> Self {
        Self {
            name: String::new(),
            opacity: 1.0,
            visible: true,
            data: None,
            properties: TmxProperties::default(),
        }
    }
}

/// A collection of free-form shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TmxObjectGroup {
    pub name: String,
    /// Display color as a 24-bit integer.
    pub color: u32,
    /// In [0, 1].
    pub opacity: f32,
    pub visible: bool,
    pub objects: Vec<TmxObjectVariant>,
    pub properties: TmxProperties,
}

impl Default for TmxObjectGroup {
    fn default() -> Self {
        Self {
            name: String::new(),
            color: 0,
            opacity: 1.0,
            visible: true,
            objects: Vec::new(),
            properties: TmxProperties::default(),
        }
    }
}

impl TmxObjectGroup {
    pub fn add_object(&mut self, object: TmxObjectVariant) {
        self.objects.push(object);
    }
}
