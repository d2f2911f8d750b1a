use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while turning a TMX document into a tree.
///
/// Failures are detected eagerly at the offending tag or attribute and abort
/// the parse; the caller never sees a partial tree.
#[derive(Debug, Error)]
pub enum TmxError {
    #[error("error parsing the TMX XML: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("error reading {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Expecting a <map> tag as the root tag of the TMX, found <{0}>")]
    UnexpectedRoot(String),

    #[error("Unknown TMX tag: {0}")]
    UnknownTag(String),

    #[error("{tag} tag is missing {attribute} attribute")]
    MissingAttribute {
        tag: &'static str,
        attribute: &'static str,
    },

    #[error("{context} attribute not a number: {value}")]
    NotANumber { context: String, value: String },

    #[error("Invalid {context} attribute value: {value}")]
    InvalidVariant { context: String, value: String },

    #[error("{context} opacity has to be between 0 and 1: {value}")]
    OpacityRange { context: &'static str, value: f32 },

    #[error("Color in {context} should start with '#': {value}")]
    ColorFormat { context: &'static str, value: String },

    #[error("Wrong formatted coordinates: {0}")]
    MalformedPoints(String),

    #[error("non-numeric coordinate {x},{y}")]
    NonNumericCoord { x: String, y: String },

    #[error("Cannot assemble a {child} into a {parent}")]
    InvalidAssembly {
        child: &'static str,
        parent: &'static str,
    },

    #[error("error decoding tile data: {0}")]
    Data(String),
}
