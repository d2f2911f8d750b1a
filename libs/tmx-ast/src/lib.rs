//! # TMX AST Crate
//!
//! Converts a tokenized XML tree into a typed document tree for TMX tile
//! maps. Tags are dispatched by name, attributes are parsed eagerly, and
//! parent/child attachment goes through one reviewed compatibility matrix.
//!
//! ## Architecture
//!
//! ```text
//! TMX Source → roxmltree (XML tree) → tmx-ast (typed tree)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tmx_ast::parse_file;
//!
//! let map = parse_file("assets/level1.tmx")?;
//! for (firstgid, tileset) in &map.tilesets {
//!     println!("{firstgid}: {}", tileset.name);
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **Typed Tree**: Every node kind is a plain struct with value equality
//! - **Eager Validation**: A bad tag or attribute aborts the parse with a
//!   diagnostic naming the offender; callers never see a partial tree
//! - **Closed Assembly**: Which child attaches to which parent is one
//!   exhaustive match, testable cell by cell
//! - **No Rendering**: Pure document structure, no image loading or drawing

mod assemble;
pub mod element;
pub mod error;
pub mod parser;
pub mod visitor;

// Re-exports for convenience
pub use element::*;
pub use error::TmxError;
pub use parser::{parse, parse_file};
pub use visitor::TmxVisitor;
