//! Read-only traversal of a parsed tree without type inspection.
//!
//! Every method defaults to a no-op, so a visitor implements only the node
//! kinds it cares about. Tilesets, object groups, and terrains visit
//! themselves first and then forward to their owned children in storage
//! order; maps, tile layers, and data blocks visit only themselves, and
//! callers walk into them through their fields.

use crate::element::{
    TmxData, TmxDataTile, TmxImage, TmxLayer, TmxMap, TmxObject, TmxObjectGroup,
    TmxObjectPolygon, TmxObjectPolyline, TmxObjectTile, TmxObjectVariant, TmxProperties,
    TmxProperty, TmxTerrain, TmxTerrainTypes, TmxTile, TmxTileLayer, TmxTileOffset, TmxTileset,
};

pub trait TmxVisitor {
    fn visit_map(&mut self, _map: &TmxMap) {}
    fn visit_tileset(&mut self, _tileset: &TmxTileset) {}
    fn visit_image(&mut self, _image: &TmxImage) {}
    fn visit_tile_offset(&mut self, _offset: &TmxTileOffset) {}
    fn visit_tile(&mut self, _tile: &TmxTile) {}
    fn visit_terrain(&mut self, _terrain: &TmxTerrain) {}
    fn visit_terrain_types(&mut self, _types: &TmxTerrainTypes) {}
    fn visit_properties(&mut self, _properties: &TmxProperties) {}
    fn visit_property(&mut self, _property: &TmxProperty) {}
    fn visit_tile_layer(&mut self, _layer: &TmxTileLayer) {}
    fn visit_object_group(&mut self, _group: &TmxObjectGroup) {}
    fn visit_data(&mut self, _data: &TmxData) {}
    fn visit_data_tile(&mut self, _tile: &TmxDataTile) {}
    fn visit_object(&mut self, _object: &TmxObject) {}
    fn visit_object_tile(&mut self, _tile: &TmxObjectTile) {}
    fn visit_object_polygon(&mut self, _polygon: &TmxObjectPolygon) {}
    fn visit_object_polyline(&mut self, _polyline: &TmxObjectPolyline) {}
}

impl TmxTileset {
    /// Visits the tileset, then its properties, offset, image, and custom
    /// tiles in id order.
    pub fn accept<V: TmxVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_tileset(self);
        visitor.visit_properties(&self.properties);
        visitor.visit_tile_offset(&self.offset);
        if let Some(image) = &self.image {
            visitor.visit_image(image);
        }
        for tile in self.tiles.values() {
            visitor.visit_tile(tile);
        }
    }
}

impl TmxObjectGroup {
    /// Visits the group, then its objects in document order, then its
    /// properties.
    pub fn accept<V: TmxVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_object_group(self);
        for object in &self.objects {
            object.accept(visitor);
        }
        visitor.visit_properties(&self.properties);
    }
}

impl TmxObjectVariant {
    pub fn accept<V: TmxVisitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            Self::Plain(object) => visitor.visit_object(object),
            Self::Tile(tile) => visitor.visit_object_tile(tile),
            Self::Polygon(polygon) => visitor.visit_object_polygon(polygon),
            Self::Polyline(polyline) => visitor.visit_object_polyline(polyline),
        }
    }
}

impl TmxTerrain {
    pub fn accept<V: TmxVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_terrain(self);
        visitor.visit_properties(&self.properties);
    }
}

impl TmxTerrainTypes {
    pub fn accept<V: TmxVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_terrain_types(self);
        for terrain in &self.terrains {
            terrain.accept(visitor);
        }
    }
}

impl TmxLayer {
    pub fn accept<V: TmxVisitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            Self::Tile(layer) => visitor.visit_tile_layer(layer),
            Self::ObjectGroup(group) => group.accept(visitor),
        }
    }
}
