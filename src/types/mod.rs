//! Common value types shared across the crate: vectors, bounding boxes,
//! colors, handles, transforms, and the DWG/DXF version enum.

mod bounds;
mod color;
mod handle;
mod line_weight;
mod transform;
mod transparency;
mod vector;

pub use bounds::{BoundingBox2D, BoundingBox3D};
pub use color::Color;
pub use handle::Handle;
pub use line_weight::LineWeight;
pub use transform::{is_zero_angle, rotate_point_2d, Matrix3, Matrix4, Transform};
pub use transparency::Transparency;
pub use vector::{Vector2, Vector3};

/// CAD file version, identified by its DWG/DXF "AC10xx" sentinel string.
///
/// Ordered by release date (`PartialOrd`/`Ord`) so version-gated behavior
/// can be written as `version >= DxfVersion::AC1018` the way ACadSharp's
/// `ACadVersion` enum is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DxfVersion {
    /// Version could not be determined (default for freshly-created documents).
    Unknown,
    /// R11/R12.
    AC1009,
    /// R13.
    AC1012,
    /// R14.
    AC1014,
    /// R2000/R2000i/R2002.
    AC1015,
    /// R2004/R2005/R2006.
    AC1018,
    /// R2007/R2008/R2009.
    AC1021,
    /// R2010/R2011/R2012.
    AC1024,
    /// R2013/R2014/R2015/R2016.
    AC1027,
    /// R2017/R2018+.
    AC1032,
}

impl DxfVersion {
    /// Parse a 6-byte DWG version sentinel (e.g. `"AC1015"`) into a known
    /// version, or `None` if the sentinel is not a version this crate reads.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "AC1009" => Some(Self::AC1009),
            "AC1012" => Some(Self::AC1012),
            "AC1014" => Some(Self::AC1014),
            "AC1015" => Some(Self::AC1015),
            "AC1018" => Some(Self::AC1018),
            "AC1021" => Some(Self::AC1021),
            "AC1024" => Some(Self::AC1024),
            "AC1027" => Some(Self::AC1027),
            "AC1032" => Some(Self::AC1032),
            _ => None,
        }
    }

    /// Parse a DXF `$ACADVER` header string (e.g. `"AC1027"`), falling back
    /// to [`DxfVersion::Unknown`] instead of failing outright. Used by the
    /// DXF text-format reader, which discovers its version mid-stream.
    pub fn from_version_string(s: &str) -> Self {
        Self::parse(s).unwrap_or(Self::Unknown)
    }

    /// The 6-byte version sentinel string written at the start of a DWG
    /// file, or `None` for [`DxfVersion::Unknown`].
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            Self::Unknown => None,
            Self::AC1009 => Some("AC1009"),
            Self::AC1012 => Some("AC1012"),
            Self::AC1014 => Some("AC1014"),
            Self::AC1015 => Some("AC1015"),
            Self::AC1018 => Some("AC1018"),
            Self::AC1021 => Some("AC1021"),
            Self::AC1024 => Some("AC1024"),
            Self::AC1027 => Some("AC1027"),
            Self::AC1032 => Some("AC1032"),
        }
    }
}

impl Default for DxfVersion {
    fn default() -> Self {
        Self::Unknown
    }
}

impl std::fmt::Display for DxfVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.as_str() {
            Some(s) => write!(f, "{}", s),
            None => write!(f, "Unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_versions() {
        assert_eq!(DxfVersion::parse("AC1014"), Some(DxfVersion::AC1014));
        assert_eq!(DxfVersion::parse("AC1032"), Some(DxfVersion::AC1032));
        assert_eq!(DxfVersion::parse("AC9999"), None);
    }

    #[test]
    fn test_ordering() {
        assert!(DxfVersion::AC1014 < DxfVersion::AC1015);
        assert!(DxfVersion::AC1032 >= DxfVersion::AC1024);
        assert!(DxfVersion::AC1012 <= DxfVersion::AC1015);
    }

    #[test]
    fn test_from_version_string_fallback() {
        assert_eq!(DxfVersion::from_version_string("garbage"), DxfVersion::Unknown);
        assert_eq!(DxfVersion::from_version_string("AC1021"), DxfVersion::AC1021);
    }

    #[test]
    fn test_roundtrip_str() {
        for v in [
            DxfVersion::AC1009,
            DxfVersion::AC1012,
            DxfVersion::AC1014,
            DxfVersion::AC1015,
            DxfVersion::AC1018,
            DxfVersion::AC1021,
            DxfVersion::AC1024,
            DxfVersion::AC1027,
            DxfVersion::AC1032,
        ] {
            let s = v.as_str().unwrap();
            assert_eq!(DxfVersion::parse(s), Some(v));
        }
    }
}
