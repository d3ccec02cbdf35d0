//! I/O module for reading CAD files in DXF and DWG formats.
//!
//! DWG is this crate's actual decode target; DXF reading is kept only as
//! fixture support for tests comparing decoded DWG entities against a
//! paired reference DXF. Neither format has a writer here — producing
//! output files is the out-of-scope façade's job.

pub mod dxf;
pub mod dwg;

pub use dxf::DxfReader;
pub use dwg::{DwgReader, DwgReaderConfiguration};

