//! The element model: every node kind a TMX document can contain.
//!
//! Concrete nodes are plain structs with value equality; [`TmxElement`] is
//! the closed union over all of them, used by the parser and the assembly
//! protocol where a node of any kind has to travel as one value.

pub mod data;
pub mod layer;
pub mod map;
pub mod object;
pub mod properties;
pub mod terrain;
pub mod tileset;

pub use data::{Compression, Encoding, TmxData, TmxDataTile};
pub use layer::{TmxLayer, TmxObjectGroup, TmxTileLayer};
pub use map::{Orientation, TmxMap};
pub use object::{Coord, TmxObject, TmxObjectPolygon, TmxObjectPolyline, TmxObjectTile, TmxObjectVariant};
pub use properties::{TmxProperties, TmxProperty};
pub use terrain::{TmxTerrain, TmxTerrainTypes};
pub use tileset::{TmxImage, TmxTile, TmxTileOffset, TmxTileset};

use crate::visitor::TmxVisitor;

/// A node of any kind.
#[derive(Debug, Clone, PartialEq)]
pub enum TmxElement {
    Map(TmxMap),
    Tileset(TmxTileset),
    Image(TmxImage),
    TileOffset(TmxTileOffset),
    Tile(TmxTile),
    Terrain(TmxTerrain),
    TerrainTypes(TmxTerrainTypes),
    Properties(TmxProperties),
    Property(TmxProperty),
    TileLayer(TmxTileLayer),
    ObjectGroup(TmxObjectGroup),
    Data(TmxData),
    DataTile(TmxDataTile),
    Object(TmxObject),
    ObjectTile(TmxObjectTile),
    ObjectPolygon(TmxObjectPolygon),
    ObjectPolyline(TmxObjectPolyline),
}

impl TmxElement {
    /// Human-readable kind name, used in diagnostics.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Map(_) => "TMX Map",
            Self::Tileset(_) => "TMX Tileset",
            Self::Image(_) => "TMX Image",
            Self::TileOffset(_) => "TMX Tile Offset",
            Self::Tile(_) => "TMX Tile",
            Self::Terrain(_) => "TMX Terrain",
            Self::TerrainTypes(_) => "TMX Terrain Types",
            Self::Properties(_) => "TMX Properties",
            Self::Property(_) => "TMX Property",
            Self::TileLayer(_) => "TMX Tile Layer",
            Self::ObjectGroup(_) => "TMX Object Group",
            Self::Data(_) => "TMX Tile Layer Data",
            Self::DataTile(_) => "TMX Data Tile",
            Self::Object(_) => "TMX Object",
            Self::ObjectTile(_) => "TMX Object Tile",
            Self::ObjectPolygon(_) => "TMX Object Polygon",
            Self::ObjectPolyline(_) => "TMX Object Polyline",
        }
    }

    /// Double-dispatch entry point for visitors.
    pub fn accept<V: TmxVisitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            Self::Map(map) => visitor.visit_map(map),
            Self::Tileset(tileset) => tileset.accept(visitor),
            Self::Image(image) => visitor.visit_image(image),
            Self::TileOffset(offset) => visitor.visit_tile_offset(offset),
            Self::Tile(tile) => visitor.visit_tile(tile),
            Self::Terrain(terrain) => terrain.accept(visitor),
            Self::TerrainTypes(types) => types.accept(visitor),
            Self::Properties(properties) => visitor.visit_properties(properties),
            Self::Property(property) => visitor.visit_property(property),
            Self::TileLayer(layer) => visitor.visit_tile_layer(layer),
            Self::ObjectGroup(group) => group.accept(visitor),
            Self::Data(data) => visitor.visit_data(data),
            Self::DataTile(tile) => visitor.visit_data_tile(tile),
            Self::Object(object) => visitor.visit_object(object),
            Self::ObjectTile(tile) => visitor.visit_object_tile(tile),
            Self::ObjectPolygon(polygon) => visitor.visit_object_polygon(polygon),
            Self::ObjectPolyline(polyline) => visitor.visit_object_polyline(polyline),
        }
    }
}
