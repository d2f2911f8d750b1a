//! Typed attribute extraction shared by the per-tag builders.
//!
//! Diagnostics carry the tag and attribute they refer to, so builders pass
//! the human-readable tag name along instead of formatting messages
//! themselves.

use std::str::FromStr;

use roxmltree::Node;

use crate::element::Coord;
use crate::error::TmxError;

pub(super) fn required<'a>(
    node: Node<'a, '_>,
    tag: &'static str,
    attribute: &'static str,
) -> Result<&'a str, TmxError> {
    node.attribute(attribute)
        .ok_or(TmxError::MissingAttribute { tag, attribute })
}

pub(super) fn number<T: FromStr>(
    context: impl Into<String>,
    value: &str,
) -> Result<T, TmxError> {
    value.trim().parse().map_err(|_| TmxError::NotANumber {
        context: context.into(),
        value: value.to_owned(),
    })
}

pub(super) fn required_number<T: FromStr>(
    node: Node,
    tag: &'static str,
    attribute: &'static str,
) -> Result<T, TmxError> {
    let value = required(node, tag, attribute)?;
    number(format!("{tag} {attribute}"), value)
}

pub(super) fn optional_number<T: FromStr>(
    node: Node,
    tag: &'static str,
    attribute: &'static str,
    default: T,
) -> Result<T, TmxError> {
    match node.attribute(attribute) {
        Some(value) => number(format!("{tag} {attribute}"), value),
        None => Ok(default),
    }
}

/// The `visible` attribute is an integer flag; anything above zero is
/// visible, absence means visible.
pub(super) fn visible(node: Node, tag: &'static str) -> Result<bool, TmxError> {
    Ok(optional_number::<i32>(node, tag, "visible", 1)? > 0)
}

pub(super) fn opacity(node: Node, tag: &'static str) -> Result<f32, TmxError> {
    let value: f32 = optional_number(node, tag, "opacity", 1.0)?;
    if !(0.0..=1.0).contains(&value) {
        return Err(TmxError::OpacityRange {
            context: tag,
            value,
        });
    }
    Ok(value)
}

/// Colors are written as `#rrggbb`; the leading `#` is mandatory.
pub(super) fn color(tag: &'static str, value: &str) -> Result<u32, TmxError> {
    let digits = value.strip_prefix('#').ok_or_else(|| TmxError::ColorFormat {
        context: tag,
        value: value.to_owned(),
    })?;
    u32::from_str_radix(digits, 16).map_err(|_| TmxError::NotANumber {
        context: format!("{tag} color"),
        value: value.to_owned(),
    })
}

/// Bare hex without the `#` prefix, as used by the image `trans` attribute.
pub(super) fn hex(context: impl Into<String>, value: &str) -> Result<u32, TmxError> {
    u32::from_str_radix(value.trim(), 16).map_err(|_| TmxError::NotANumber {
        context: context.into(),
        value: value.to_owned(),
    })
}

/// Parses a `points` attribute: whitespace-separated `x,y` pairs.
pub(super) fn points(value: &str) -> Result<Vec<Coord>, TmxError> {
    let mut coords = Vec::new();
    for pair in value.split_whitespace() {
        let Some((x, y)) = pair.split_once(',') else {
            return Err(TmxError::MalformedPoints(value.to_owned()));
        };
        if x.is_empty() || y.is_empty() {
            return Err(TmxError::MalformedPoints(value.to_owned()));
        }
        match (x.parse(), y.parse()) {
            (Ok(x), Ok(y)) => coords.push(Coord { x, y }),
            _ => {
                return Err(TmxError::NonNumericCoord {
                    x: x.to_owned(),
                    y: y.to_owned(),
                })
            }
        }
    }
    Ok(coords)
}
