//! Per-tag builders: turn one XML element's attributes (and, for objects,
//! the shape of its children) into an unattached tree node. Children are
//! attached afterwards through the assembly protocol.

use roxmltree::Node;

use crate::element::{
    Compression, Encoding, Orientation, TmxData, TmxDataTile, TmxElement, TmxImage, TmxMap,
    TmxObject, TmxObjectGroup, TmxObjectPolygon, TmxObjectPolyline, TmxObjectTile, TmxProperties,
    TmxProperty, TmxTile, TmxTileLayer, TmxTileOffset, TmxTileset,
};
use crate::error::TmxError;

use super::attr;

pub(super) fn map(node: Node) -> Result<TmxElement, TmxError> {
    let mut map = TmxMap::default();
    if let Some(version) = node.attribute("version") {
        map.version = version.to_owned();
    }
    if let Some(value) = node.attribute("orientation") {
        map.orientation =
            Orientation::from_attr(value).ok_or_else(|| TmxError::InvalidVariant {
                context: "map orientation".to_owned(),
                value: value.to_owned(),
            })?;
    }
    map.width = attr::optional_number(node, "Map", "width", 0)?;
    map.height = attr::optional_number(node, "Map", "height", 0)?;
    map.tile_width = attr::optional_number(node, "Map", "tilewidth", 0)?;
    map.tile_height = attr::optional_number(node, "Map", "tileheight", 0)?;
    Ok(TmxElement::Map(map))
}

pub(super) fn tileset(node: Node) -> Result<TmxElement, TmxError> {
    Ok(TmxElement::Tileset(TmxTileset {
        firstgid: attr::required_number(node, "Tileset", "firstgid")?,
        source: node.attribute("source").unwrap_or_default().to_owned(),
        name: node.attribute("name").unwrap_or_default().to_owned(),
        tile_width: attr::optional_number(node, "Tileset", "tilewidth", 0)?,
        tile_height: attr::optional_number(node, "Tileset", "tileheight", 0)?,
        spacing: attr::optional_number(node, "Tileset", "spacing", 0)?,
        margin: attr::optional_number(node, "Tileset", "margin", 0)?,
        ..TmxTileset::default()
    }))
}

pub(super) fn image(node: Node) -> Result<TmxElement, TmxError> {
    Ok(TmxElement::Image(TmxImage {
        source: attr::required(node, "Image", "source")?.to_owned(),
        alpha: node
            .attribute("trans")
            .map(|value| attr::hex("Image trans", value))
            .transpose()?,
        width: attr::required_number(node, "Image", "width")?,
        height: attr::required_number(node, "Image", "height")?,
    }))
}

pub(super) fn tile_offset(node: Node) -> Result<TmxElement, TmxError> {
    Ok(TmxElement::TileOffset(TmxTileOffset {
        x: attr::required_number(node, "Tile offset", "x")?,
        y: attr::required_number(node, "Tile offset", "y")?,
    }))
}

/// `<tile>` under `<tileset>`: a tileset-local tile carrying metadata.
pub(super) fn tileset_tile(node: Node) -> Result<TmxElement, TmxError> {
    Ok(TmxElement::Tile(TmxTile {
        id: attr::required_number(node, "Tile", "id")?,
        ..TmxTile::default()
    }))
}

/// `<tile>` under `<data>`: one cell of an inline layer payload.
pub(super) fn data_tile(node: Node) -> Result<TmxElement, TmxError> {
    Ok(TmxElement::DataTile(TmxDataTile {
        gid: attr::required_number(node, "Tile", "gid")?,
    }))
}

pub(super) fn data(node: Node) -> Result<TmxElement, TmxError> {
    let encoding = match node.attribute("encoding") {
        Some(value) => Encoding::from_attr(value).ok_or_else(|| TmxError::InvalidVariant {
            context: "data encoding".to_owned(),
            value: value.to_owned(),
        })?,
        None => Encoding::Base64,
    };
    let compression = match node.attribute("compression") {
        Some(value) => Compression::from_attr(value).ok_or_else(|| TmxError::InvalidVariant {
            context: "data compression".to_owned(),
            value: value.to_owned(),
        })?,
        None => Compression::Zlib,
    };
    Ok(TmxElement::Data(TmxData {
        encoding,
        compression,
        raw: node.text().map(str::trim).unwrap_or_default().to_owned(),
        tiles: Vec::new(),
    }))
}

pub(super) fn tile_layer(node: Node) -> Result<TmxElement, TmxError> {
    Ok(TmxElement::TileLayer(TmxTileLayer {
        name: attr::required(node, "Tile layer", "name")?.to_owned(),
        opacity: attr::opacity(node, "Tile layer")?,
        visible: attr::visible(node, "Tile layer")?,
        ..TmxTileLayer::default()
    }))
}

pub(super) fn object_group(node: Node) -> Result<TmxElement, TmxError> {
    Ok(TmxElement::ObjectGroup(TmxObjectGroup {
        name: node.attribute("name").unwrap_or_default().to_owned(),
        color: node
            .attribute("color")
            .map(|value| attr::color("Object group", value))
            .transpose()?
            .unwrap_or(0),
        opacity: attr::opacity(node, "Tile obj group")?,
        visible: attr::visible(node, "Object group")?,
        ..TmxObjectGroup::default()
    }))
}

/// Classifies the object from its gid attribute and child shapes before any
/// children are assembled: gid wins over a polygon child, polygon over
/// polyline, and a bare object stays plain.
pub(super) fn object(node: Node) -> Result<TmxElement, TmxError> {
    let gid = node
        .attribute("gid")
        .map(|value| attr::number::<u32>("Object gid", value))
        .transpose()?;

    let object = TmxObject {
        name: node.attribute("name").unwrap_or_default().to_owned(),
        object_type: node.attribute("type").unwrap_or_default().to_owned(),
        x: attr::required_number(node, "Object", "x")?,
        y: attr::required_number(node, "Object", "y")?,
        width: attr::optional_number(node, "Object", "width", 0)?,
        height: attr::optional_number(node, "Object", "height", 0)?,
        visible: attr::visible(node, "Object")?,
        properties: TmxProperties::default(),
    };

    if let Some(gid) = gid {
        return Ok(TmxElement::ObjectTile(TmxObjectTile { object, gid }));
    }
    if node.children().any(|child| child.has_tag_name("polygon")) {
        return Ok(TmxElement::ObjectPolygon(TmxObjectPolygon {
            object,
            points: Vec::new(),
        }));
    }
    if node.children().any(|child| child.has_tag_name("polyline")) {
        return Ok(TmxElement::ObjectPolyline(TmxObjectPolyline {
            object,
            points: Vec::new(),
        }));
    }
    Ok(TmxElement::Object(object))
}

pub(super) fn polygon(node: Node) -> Result<TmxElement, TmxError> {
    Ok(TmxElement::ObjectPolygon(TmxObjectPolygon {
        points: attr::points(attr::required(node, "Object polygon", "points")?)?,
        ..TmxObjectPolygon::default()
    }))
}

pub(super) fn polyline(node: Node) -> Result<TmxElement, TmxError> {
    Ok(TmxElement::ObjectPolyline(TmxObjectPolyline {
        points: attr::points(attr::required(node, "Object polyline", "points")?)?,
        ..TmxObjectPolyline::default()
    }))
}

pub(super) fn properties(_node: Node) -> Result<TmxElement, TmxError> {
    Ok(TmxElement::Properties(TmxProperties::default()))
}

pub(super) fn property(node: Node) -> Result<TmxElement, TmxError> {
    Ok(TmxElement::Property(TmxProperty {
        name: attr::required(node, "Property", "name")?.to_owned(),
        value: attr::required(node, "Property", "value")?.to_owned(),
    }))
}
