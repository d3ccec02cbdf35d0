//! DXF group code value type classification.
//!
//! The DXF group code ranges (0-9 string, 10-59 double, 60-79 int16, ...)
//! are fixed by the format; this module turns a [`DxfCode`] into the
//! primitive type its paired value decodes as, and identifies the
//! coordinate-triplet codes (10/20/30, 11/21/31, ...) so a reader can pair
//! up X/Y/Z values belonging to the same point.

use super::DxfCode;

/// The primitive value type a DXF group code's payload decodes as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupCodeValueType {
    String,
    Double,
    Int16,
    Int32,
    Int64,
    Byte,
    Bool,
    Handle,
    BinaryChunk,
}

impl GroupCodeValueType {
    /// Classify a group code's value type per the DXF reference's group-code-range table.
    pub fn from_code(code: DxfCode) -> Self {
        match code.to_i32() {
            0..=9 => GroupCodeValueType::String,
            10..=59 => GroupCodeValueType::Double,
            60..=79 => GroupCodeValueType::Int16,
            90..=99 => GroupCodeValueType::Int32,
            100..=102 => GroupCodeValueType::String,
            105 => GroupCodeValueType::Handle,
            110..=149 => GroupCodeValueType::Double,
            160..=169 => GroupCodeValueType::Int64,
            170..=179 => GroupCodeValueType::Int16,
            210..=239 => GroupCodeValueType::Double,
            270..=279 => GroupCodeValueType::Int16,
            280..=289 => GroupCodeValueType::Byte,
            290..=299 => GroupCodeValueType::Bool,
            300..=309 => GroupCodeValueType::String,
            310..=319 => GroupCodeValueType::BinaryChunk,
            320..=369 => GroupCodeValueType::Handle,
            370..=389 => GroupCodeValueType::Int16,
            390..=399 => GroupCodeValueType::Handle,
            400..=409 => GroupCodeValueType::Int16,
            410..=419 => GroupCodeValueType::String,
            420..=429 => GroupCodeValueType::Int32,
            430..=439 => GroupCodeValueType::String,
            440..=459 => GroupCodeValueType::Int32,
            460..=469 => GroupCodeValueType::Double,
            470..=481 => GroupCodeValueType::String,
            999 => GroupCodeValueType::String,
            1000..=1009 => GroupCodeValueType::String,
            1010..=1059 => GroupCodeValueType::Double,
            1060..=1070 => GroupCodeValueType::Int16,
            1071 => GroupCodeValueType::Int32,
            _ => GroupCodeValueType::String,
        }
    }

    /// Which axis (0=X, 1=Y, 2=Z) a coordinate group code belongs to.
    /// `None` for codes that aren't part of a coordinate triplet.
    pub fn coordinate_axis(code: DxfCode) -> Option<usize> {
        match code.to_i32() {
            10..=18 | 110..=112 | 210 | 1010..=1013 => Some(0),
            20..=28 | 120..=122 | 220 | 1020..=1023 => Some(1),
            30..=38 | 130..=132 | 230 | 1030..=1033 => Some(2),
            _ => None,
        }
    }

    /// Which point this coordinate code belongs to (so the matching X/Y/Z
    /// triplet can be assembled), independent of axis.
    pub fn coordinate_group(code: DxfCode) -> Option<usize> {
        match code.to_i32() {
            c @ 10..=18 => Some((c - 10) as usize),
            c @ 20..=28 => Some((c - 20) as usize),
            c @ 30..=38 => Some((c - 30) as usize),
            110 | 120 | 130 => Some(0),
            111 | 121 | 131 => Some(1),
            112 | 122 | 132 => Some(2),
            210 | 220 | 230 => Some(0),
            1010 | 1020 | 1030 => Some(0),
            1011 | 1021 | 1031 => Some(1),
            1012 | 1022 | 1032 => Some(2),
            1013 | 1023 | 1033 => Some(3),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_known_ranges() {
        assert_eq!(GroupCodeValueType::from_code(DxfCode::Start), GroupCodeValueType::String);
        assert_eq!(GroupCodeValueType::from_code(DxfCode::XCoordinate), GroupCodeValueType::Double);
        assert_eq!(GroupCodeValueType::from_code(DxfCode::Visibility), GroupCodeValueType::Int16);
        assert_eq!(GroupCodeValueType::from_code(DxfCode::Int90), GroupCodeValueType::Int32);
        assert_eq!(GroupCodeValueType::from_code(DxfCode::Bool290), GroupCodeValueType::Bool);
    }

    #[test]
    fn groups_coordinate_triplets() {
        assert_eq!(GroupCodeValueType::coordinate_axis(DxfCode::XCoordinate), Some(0));
        assert_eq!(GroupCodeValueType::coordinate_axis(DxfCode::YCoordinate), Some(1));
        assert_eq!(GroupCodeValueType::coordinate_axis(DxfCode::ZCoordinate), Some(2));
        assert_eq!(GroupCodeValueType::coordinate_group(DxfCode::XCoordinate), Some(0));
        assert_eq!(GroupCodeValueType::coordinate_group(DxfCode::XCoordinate1), Some(1));
        assert_eq!(GroupCodeValueType::coordinate_axis(DxfCode::Thickness), None);
    }
}
