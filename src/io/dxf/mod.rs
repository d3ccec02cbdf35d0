//! DXF (Drawing Exchange Format) reading.
//!
//! This crate is a DWG decoder; DXF reading is kept only as fixture
//! support for tests that validate decoded DWG entities against a paired
//! reference DXF (see the seed test cases in `spec.md` §8). There is no
//! DXF writer: producing DXF output is the out-of-scope façade's job.

pub mod code_page;
mod dxf_code;
mod group_code_value;
mod reader;

pub use dxf_code::DxfCode;
pub use group_code_value::GroupCodeValueType;
pub use reader::{DxfReader, DxfReaderConfiguration};

