//! # acadrust
//!
//! A pure Rust library for reading AutoCAD DWG binary drawing files
//! (R13 through R2018, version codes AC1012–AC1032), inspired by
//! [ACadSharp](https://github.com/DomCR/ACadSharp).
//!
//! The primary surface is [`Catalog`]: a lazy, handle-addressable view over
//! an open DWG file that decodes object payloads on demand instead of
//! eagerly materializing a full document graph. For callers that do want
//! the whole file resolved up front, [`io::dwg::DwgReader::read`] still
//! builds a complete [`CadDocument`].
//!
//! ## Features
//!
//! - Read DWG files across every version this crate supports
//! - Lazy, per-handle decoding with write-once caching ([`Catalog`])
//! - Support for 30+ entity types
//! - Complete table system (Layers, LineTypes, Blocks, TextStyles, DimensionStyles)
//! - Extended data (XData) support
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use acadrust::Catalog;
//!
//! let catalog = Catalog::open("sample.dwg")?;
//! for (handle, entity) in catalog.query(Some(&["LINE", "ARC"])) {
//!     println!("{handle:#X}: {entity:?}");
//! }
//! # Ok::<(), acadrust::error::DxfError>(())
//! ```
//!
//! ## Architecture
//!
//! - `Catalog` - lazy, handle-addressable decode surface
//! - `Entity` - trait for graphical entities
//! - `TableEntry` - trait for table entries
//! - `CadDocument` - eager document structure built by [`io::dwg::DwgReader::read`]

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod catalog;
pub mod classes;
pub mod entities;
pub mod error;
pub mod notification;
pub mod preview;
pub mod summary_info;
pub mod types;
pub mod tables;
pub mod document;
pub mod io;
pub mod xdata;
pub mod objects;

// Re-export commonly used types
pub use error::{DxfError, Result};
pub use types::{
    DxfVersion, BoundingBox2D, BoundingBox3D, Color, Handle, LineWeight, Transparency, Vector2,
    Vector3,
};

// Re-export entity types
pub use entities::{
    Arc, Circle, Ellipse, Entity, EntityType, Line, LwPolyline, MText, Point, Polyline, Spline,
    Text,
};

// Re-export table types
pub use tables::{
    AppId, BlockRecord, DimStyle, Layer, LineType, Table, TableEntry, TextStyle, Ucs, VPort, View,
};

// Re-export document
pub use document::CadDocument;

// Re-export the lazy catalog surface
pub use catalog::{Catalog, EntityRecord, EntityStyle, HandleState, ObjectHeader, RawObjectRecord};

// Re-export I/O types. `DxfReader` is kept only to read paired reference
// DXF fixtures in tests; there is no DXF or DWG writer (out of scope).
pub use io::dxf::DxfReader;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_cad_document_creation() {
        let doc = CadDocument::new();
        assert_eq!(doc.version, DxfVersion::AC1032);

        let doc2 = CadDocument::with_version(DxfVersion::AC1015);
        assert_eq!(doc2.version, DxfVersion::AC1015);
    }
}


