use serde::{Deserialize, Serialize};

use super::properties::TmxProperties;

/// One point of a polygon or polyline, in pixels relative to the owning
/// object's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

/// Fields shared by every object kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TmxObject {
    pub name: String,
    pub object_type: String,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub visible: bool,
    pub properties: TmxProperties,
}

impl Default for TmxObject {
    fn default() -> Self {
        Self {
            name: String::new(),
            object_type: String::new(),
            x: 0,
            y: 0,
            width: 0,
            height: 0,
            visible: true,
            properties: TmxProperties::default(),
        }
    }
}

/// An object that places a tile by global id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TmxObjectTile {
    pub object: TmxObject,
    pub gid: u32,
}

/// A closed shape. Point order is geometric and preserved exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TmxObjectPolygon {
    pub object: TmxObject,
    pub points: Vec<Coord>,
}

/// An open shape. Point order is geometric and preserved exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TmxObjectPolyline {
    pub object: TmxObject,
    pub points: Vec<Coord>,
}

/// The four object kinds an object group can hold, distinguished by variant
/// tag rather than downcasting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TmxObjectVariant {
    Plain(TmxObject),
    Tile(TmxObjectTile),
    Polygon(TmxObjectPolygon),
    Polyline(TmxObjectPolyline),
}
