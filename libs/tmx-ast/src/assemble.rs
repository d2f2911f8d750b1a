//! The assembly protocol: which child kinds may attach to which parent
//! kinds, and how.
//!
//! The whole compatibility matrix lives in one match so it can be reviewed
//! and tested cell by cell. Accepting arms perform the parent-specific
//! attachment; every other (parent, child) pair is rejected with a
//! diagnostic naming both kinds.

use crate::element::{TmxElement, TmxLayer, TmxObjectVariant};
use crate::error::TmxError;

impl TmxElement {
    /// Attaches a freshly built `child` to this node, or fails when the
    /// child kind is not a legal child of this kind.
    pub fn assemble(&mut self, child: TmxElement) -> Result<(), TmxError> {
        use TmxElement::*;

        match (self, child) {
            (Map(map), Tileset(tileset)) => map.add_tileset(tileset),
            (Map(map), TileLayer(layer)) => map.add_layer(TmxLayer::Tile(layer)),
            (Map(map), ObjectGroup(group)) => map.add_layer(TmxLayer::ObjectGroup(group)),
            (Map(map), Properties(properties)) => map.properties = properties,

            (Tileset(tileset), TileOffset(offset)) => tileset.offset = offset,
            (Tileset(tileset), Properties(properties)) => tileset.properties = properties,
            (Tileset(tileset), Image(image)) => tileset.image = Some(image),
            (Tileset(tileset), Tile(tile)) => tileset.add_tile(tile),

            (Tile(tile), Properties(properties)) => tile.properties = properties,

            (TileLayer(layer), Data(data)) => layer.data = Some(data),
            (TileLayer(layer), Properties(properties)) => layer.properties = properties,

            (Data(data), DataTile(tile)) => data.add_tile(tile),

            (ObjectGroup(group), Object(object)) => {
                group.add_object(TmxObjectVariant::Plain(object));
            }
            (ObjectGroup(group), ObjectTile(tile)) => {
                group.add_object(TmxObjectVariant::Tile(tile));
            }
            (ObjectGroup(group), ObjectPolygon(polygon)) => {
                group.add_object(TmxObjectVariant::Polygon(polygon));
            }
            (ObjectGroup(group), ObjectPolyline(polyline)) => {
                group.add_object(TmxObjectVariant::Polyline(polyline));
            }
            (ObjectGroup(group), Properties(properties)) => group.properties = properties,

            (Properties(properties), Property(property)) => {
                properties.add(property.name, property.value);
            }

            (Object(object), Properties(properties)) => object.properties = properties,
            (ObjectTile(tile), Properties(properties)) => tile.object.properties = properties,
            // A tile object keeps its gid classification; a stray shape child
            // is accepted so the document still parses, and dropped.
            (ObjectTile(_), ObjectPolygon(_) | ObjectPolyline(_)) => {}

            (ObjectPolygon(polygon), ObjectPolygon(child)) => {
                polygon.points.extend(child.points);
            }
            (ObjectPolygon(polygon), Properties(properties)) => {
                polygon.object.properties = properties;
            }
            (ObjectPolyline(polyline), ObjectPolyline(child)) => {
                polyline.points.extend(child.points);
            }
            (ObjectPolyline(polyline), Properties(properties)) => {
                polyline.object.properties = properties;
            }

            (Terrain(terrain), Properties(properties)) => terrain.properties = properties,
            (TerrainTypes(types), Terrain(terrain)) => types.add_terrain(terrain),

            (parent, child) => {
                return Err(TmxError::InvalidAssembly {
                    child: child.description(),
                    parent: parent.description(),
                })
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::element::{
        Coord, TmxData, TmxDataTile, TmxElement, TmxImage, TmxLayer, TmxMap, TmxObject,
        TmxObjectPolygon, TmxObjectTile, TmxProperties, TmxProperty, TmxTerrain,
        TmxTerrainTypes, TmxTile, TmxTileLayer, TmxTileset,
    };
    use crate::error::TmxError;

    #[test]
    fn map_indexes_tilesets_by_firstgid() {
        let mut map = TmxElement::Map(TmxMap::default());
        map.assemble(TmxElement::Tileset(TmxTileset { firstgid: 1, ..TmxTileset::default() }))
            .unwrap();
        map.assemble(TmxElement::Tileset(TmxTileset { firstgid: 10, ..TmxTileset::default() }))
            .unwrap();

        let TmxElement::Map(map) = map else { unreachable!() };
        assert!(map.tileset(1).is_some());
        assert!(map.tileset(10).is_some());
    }

    #[test]
    fn duplicate_firstgid_replaces_prior_tileset() {
        let mut map = TmxElement::Map(TmxMap::default());
        map.assemble(TmxElement::Tileset(TmxTileset {
            firstgid: 1,
            name: "first".to_owned(),
            ..TmxTileset::default()
        }))
        .unwrap();
        map.assemble(TmxElement::Tileset(TmxTileset {
            firstgid: 1,
            name: "second".to_owned(),
            ..TmxTileset::default()
        }))
        .unwrap();

        let TmxElement::Map(map) = map else { unreachable!() };
        assert_eq!(map.tilesets.len(), 1);
        assert_eq!(map.tileset(1).unwrap().name, "second");
    }

    #[test]
    fn layers_keep_document_order() {
        let mut map = TmxElement::Map(TmxMap::default());
        map.assemble(TmxElement::TileLayer(TmxTileLayer {
            name: "top".to_owned(),
            ..TmxTileLayer::default()
        }))
        .unwrap();
        map.assemble(TmxElement::TileLayer(TmxTileLayer {
            name: "bottom".to_owned(),
            ..TmxTileLayer::default()
        }))
        .unwrap();

        let TmxElement::Map(map) = map else { unreachable!() };
        let names: Vec<_> = map
            .layers
            .iter()
            .map(|layer| match layer {
                TmxLayer::Tile(l) => l.name.as_str(),
                TmxLayer::ObjectGroup(g) => g.name.as_str(),
            })
            .collect();
        assert_eq!(names, vec!["top", "bottom"]);
    }

    #[test]
    fn properties_collect_property_entries() {
        let mut properties = TmxElement::Properties(TmxProperties::default());
        properties
            .assemble(TmxElement::Property(TmxProperty {
                name: "spawn".to_owned(),
                value: "east".to_owned(),
            }))
            .unwrap();

        let TmxElement::Properties(properties) = properties else { unreachable!() };
        assert_eq!(properties.get("spawn"), Some("east"));
    }

    #[test]
    fn polygon_child_merges_points_into_classified_object() {
        let mut polygon = TmxElement::ObjectPolygon(TmxObjectPolygon::default());
        polygon
            .assemble(TmxElement::ObjectPolygon(TmxObjectPolygon {
                points: vec![Coord { x: 0, y: 0 }, Coord { x: 4, y: -2 }],
                ..TmxObjectPolygon::default()
            }))
            .unwrap();

        let TmxElement::ObjectPolygon(polygon) = polygon else { unreachable!() };
        assert_eq!(polygon.points, vec![Coord { x: 0, y: 0 }, Coord { x: 4, y: -2 }]);
    }

    #[test]
    fn tile_object_drops_stray_shape_children() {
        let mut tile = TmxElement::ObjectTile(TmxObjectTile { gid: 5, ..TmxObjectTile::default() });
        tile.assemble(TmxElement::ObjectPolygon(TmxObjectPolygon::default()))
            .unwrap();
        let TmxElement::ObjectTile(tile) = tile else { unreachable!() };
        assert_eq!(tile.gid, 5);
    }

    #[test]
    fn terrain_types_collect_terrains() {
        let mut types = TmxElement::TerrainTypes(TmxTerrainTypes::default());
        types
            .assemble(TmxElement::Terrain(TmxTerrain {
                name: "grass".to_owned(),
                ..TmxTerrain::default()
            }))
            .unwrap();
        let TmxElement::TerrainTypes(types) = types else { unreachable!() };
        assert_eq!(types.terrain(0).unwrap().name, "grass");
    }

    #[test]
    fn tileset_tiles_collect_their_properties() {
        let mut tile = TmxElement::Tile(TmxTile { id: 1, ..TmxTile::default() });
        let mut properties = TmxProperties::default();
        properties.add("kind", "water");
        tile.assemble(TmxElement::Properties(properties)).unwrap();

        let TmxElement::Tile(tile) = tile else { unreachable!() };
        assert_eq!(tile.properties.get("kind"), Some("water"));
    }

    #[test]
    fn rejections_name_both_kinds() {
        let mut layer = TmxElement::TileLayer(TmxTileLayer::default());
        let err = layer
            .assemble(TmxElement::Property(TmxProperty::default()))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cannot assemble a TMX Property into a TMX Tile Layer"
        );
    }

    #[test]
    fn reject_object_under_map() {
        let mut map = TmxElement::Map(TmxMap::default());
        let err = map.assemble(TmxElement::Object(TmxObject::default())).unwrap_err();
        assert!(matches!(err, TmxError::InvalidAssembly { .. }));
    }

    #[test]
    fn reject_data_outside_tile_layer() {
        let mut tileset = TmxElement::Tileset(TmxTileset::default());
        assert!(tileset.assemble(TmxElement::Data(TmxData::default())).is_err());
    }

    #[test]
    fn reject_data_tile_outside_data() {
        let mut layer = TmxElement::TileLayer(TmxTileLayer::default());
        assert!(layer.assemble(TmxElement::DataTile(TmxDataTile { gid: 1 })).is_err());
    }

    #[test]
    fn reject_terrain_under_tileset() {
        // The original never wired terrains into tilesets; preserved.
        let mut tileset = TmxElement::Tileset(TmxTileset::default());
        assert!(tileset
            .assemble(TmxElement::TerrainTypes(TmxTerrainTypes::default()))
            .is_err());
    }

    #[test]
    fn reject_image_under_tile() {
        let mut tile = TmxElement::Tile(TmxTile::default());
        assert!(tile.assemble(TmxElement::Image(TmxImage::default())).is_err());
    }

    #[test]
    fn reject_map_anywhere() {
        let mut group = TmxElement::ObjectGroup(crate::element::TmxObjectGroup::default());
        assert!(group.assemble(TmxElement::Map(TmxMap::default())).is_err());
    }
}
