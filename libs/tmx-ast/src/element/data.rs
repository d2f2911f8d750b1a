use std::io::Read;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use flate2::read::{GzDecoder, ZlibDecoder};
use serde::{Deserialize, Serialize};

use crate::error::TmxError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Encoding {
    Base64,
    Csv,
}

impl Encoding {
    pub(crate) fn from_attr(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("base64") {
            Some(Self::Base64)
        } else if value.eq_ignore_ascii_case("csv") {
            Some(Self::Csv)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Compression {
    None,
    Gzip,
    Zlib,
}

impl Compression {
    pub(crate) fn from_attr(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("none") {
            Some(Self::None)
        } else if value.eq_ignore_ascii_case("gzip") {
            Some(Self::Gzip)
        } else if value.eq_ignore_ascii_case("zlib") {
            Some(Self::Zlib)
        } else {
            None
        }
    }
}

/// Tile payload of a tile layer.
///
/// A layer carries either a bulk payload in `raw` (Base64 or CSV text, kept
/// as found in the document) or, for the inline form, one [`TmxDataTile`]
/// child per cell in `tiles`. Which one is meaningful follows from how the
/// document was written; [`TmxData::gids`] hides the difference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TmxData {
    pub encoding: Encoding,
    pub compression: Compression,
    /// Still-encoded payload text.
    pub raw: String,
    pub tiles: Vec<TmxDataTile>,
}

impl Default for TmxData {
    fn default() -> Self {
        Self {
            encoding: Encoding::Base64,
            compression: Compression::Zlib,
            raw: String::new(),
            tiles: Vec::new(),
        }
    }
}

impl TmxData {
    pub fn add_tile(&mut self, tile: TmxDataTile) {
        self.tiles.push(tile);
    }

    /// Decodes the payload into the flat sequence of global tile ids, in
    /// row-major layer order.
    ///
    /// Inline tiles take precedence when present. CSV payloads are split on
    /// commas with surrounding whitespace ignored; the compression field does
    /// not apply to CSV. Base64 payloads are decoded after stripping ASCII
    /// whitespace, inflated per `compression`, and read as little-endian u32
    /// values.
    pub fn gids(&self) -> Result<Vec<u32>, TmxError> {
        if !self.tiles.is_empty() {
            return Ok(self.tiles.iter().map(|tile| tile.gid).collect());
        }

        match self.encoding {
            Encoding::Csv => self
                .raw
                .split(',')
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .map(|token| {
                    token
                        .parse::<u32>()
                        .map_err(|_| TmxError::Data(format!("invalid CSV gid: {token}")))
                })
                .collect(),
            Encoding::Base64 => {
                let cleaned: String = self
                    .raw
                    .chars()
                    .filter(|c| !c.is_ascii_whitespace())
                    .collect();
                let decoded = STANDARD
                    .decode(cleaned)
                    .map_err(|e| TmxError::Data(e.to_string()))?;

                let bytes = match self.compression {
                    Compression::None => decoded,
                    Compression::Gzip => inflate(GzDecoder::new(decoded.as_slice()))?,
                    Compression::Zlib => inflate(ZlibDecoder::new(decoded.as_slice()))?,
                };

                if bytes.len() % 4 != 0 {
                    return Err(TmxError::Data(format!(
                        "tile data length {} is not a multiple of 4",
                        bytes.len()
                    )));
                }

                Ok(bytes
                    .chunks_exact(4)
                    .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
                    .collect())
            }
        }
    }
}

fn inflate(mut decoder: impl Read) -> Result<Vec<u8>, TmxError> {
    let mut bytes = Vec::new();
    decoder
        .read_to_end(&mut bytes)
        .map_err(|e| TmxError::Data(e.to_string()))?;
    Ok(bytes)
}

/// A single explicit tile reference inside an inline `<data>` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TmxDataTile {
    pub gid: u32,
}
