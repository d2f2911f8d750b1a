//! Recursive-descent parsing over a tokenized XML tree.
//!
//! Each element tag is resolved to a [`TagKind`], built into an unattached
//! node by its builder, and the node's parsed children are attached one by
//! one through the assembly protocol. The `<tile>` tag is ambiguous and is
//! resolved by the tag of its parent.

mod attr;
mod build;

use std::fs;
use std::path::Path;

use roxmltree::Node;

use crate::element::{TmxElement, TmxMap};
use crate::error::TmxError;

/// The tag vocabulary the parser understands, with the two `<tile>` readings
/// already disambiguated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TagKind {
    Map,
    Tileset,
    Image,
    TileOffset,
    TilesetTile,
    DataTile,
    Data,
    TileLayer,
    ObjectGroup,
    Object,
    Polygon,
    Polyline,
    Properties,
    Property,
}

/// Resolves a tag name, using the parent tag to pick between the two
/// `<tile>` readings.
fn resolve(tag: &str, parent: Option<&str>) -> Result<TagKind, TmxError> {
    Ok(match tag {
        "map" => TagKind::Map,
        "tileset" => TagKind::Tileset,
        "image" => TagKind::Image,
        "tileoffset" => TagKind::TileOffset,
        "data" => TagKind::Data,
        "layer" => TagKind::TileLayer,
        "objectgroup" => TagKind::ObjectGroup,
        "object" => TagKind::Object,
        "polygon" => TagKind::Polygon,
        "polyline" => TagKind::Polyline,
        "properties" => TagKind::Properties,
        "property" => TagKind::Property,
        "tile" => match parent {
            Some("tileset") => TagKind::TilesetTile,
            Some("data") => TagKind::DataTile,
            other => {
                return Err(TmxError::UnknownTag(format!(
                    "{}tile",
                    other.unwrap_or_default()
                )))
            }
        },
        other => return Err(TmxError::UnknownTag(other.to_owned())),
    })
}

/// Builds the subtree rooted at `node`: the node itself from its attributes,
/// then each element child recursively, attached through assembly. A failure
/// anywhere below surfaces unchanged, so the innermost problem is reported.
fn parse_subtree(node: Node, parent: Option<&str>) -> Result<TmxElement, TmxError> {
    let tag = node.tag_name().name();
    let mut element = match resolve(tag, parent)? {
        TagKind::Map => build::map(node)?,
        TagKind::Tileset => build::tileset(node)?,
        TagKind::Image => build::image(node)?,
        TagKind::TileOffset => build::tile_offset(node)?,
        TagKind::TilesetTile => build::tileset_tile(node)?,
        TagKind::DataTile => build::data_tile(node)?,
        TagKind::Data => build::data(node)?,
        TagKind::TileLayer => build::tile_layer(node)?,
        TagKind::ObjectGroup => build::object_group(node)?,
        TagKind::Object => build::object(node)?,
        TagKind::Polygon => build::polygon(node)?,
        TagKind::Polyline => build::polyline(node)?,
        TagKind::Properties => build::properties(node)?,
        TagKind::Property => build::property(node)?,
    };

    for child in node.children().filter(Node::is_element) {
        let built = parse_subtree(child, Some(tag))?;
        element.assemble(built)?;
    }

    Ok(element)
}

/// Parses a whole TMX document into its map.
pub fn parse(xml: &str) -> Result<TmxMap, TmxError> {
    let document = roxmltree::Document::parse(xml)?;
    let root = document.root_element();
    if !root.has_tag_name("map") {
        return Err(TmxError::UnexpectedRoot(
            root.tag_name().name().to_owned(),
        ));
    }
    match parse_subtree(root, None)? {
        TmxElement::Map(map) => Ok(map),
        other => Err(TmxError::UnexpectedRoot(other.description().to_owned())),
    }
}

/// Reads and parses a TMX file.
pub fn parse_file(path: impl AsRef<Path>) -> Result<TmxMap, TmxError> {
    let path = path.as_ref();
    let xml = fs::read_to_string(path).map_err(|source| TmxError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&xml)
}
