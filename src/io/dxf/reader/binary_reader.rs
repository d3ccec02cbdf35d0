//! Binary DXF stream reader.
//!
//! Binary DXF uses the same (code, value) pair structure as the ASCII
//! flavor but packs the group code as a single byte (or `0xFF` followed by
//! a little-endian `i16` once codes run past 255) and the value as a
//! fixed-width field whose width is determined by the group code's
//! [`GroupCodeValueType`], rather than two newline-terminated text lines.

use super::stream_reader::{DxfCodePair, DxfStreamReader};
use crate::error::{DxfError, Result};
use crate::io::dxf::{DxfCode, GroupCodeValueType};
use std::io::{BufReader, Read, Seek, SeekFrom};

/// Binary DXF sentinel, including the trailing CR LF SUB NUL that follows
/// the ASCII text `AutoCAD Binary DXF`.
const SENTINEL_LEN: u64 = 22;

/// DXF binary file reader.
pub struct DxfBinaryReader<R: Read + Seek> {
    reader: BufReader<R>,
    peeked_pair: Option<DxfCodePair>,
}

impl<R: Read + Seek> DxfBinaryReader<R> {
    /// Create a new binary DXF reader, positioned just past the sentinel.
    pub fn new(mut reader: BufReader<R>) -> Result<Self> {
        reader.seek(SeekFrom::Start(SENTINEL_LEN))?;
        Ok(Self {
            reader,
            peeked_pair: None,
        })
    }

    fn read_u8(&mut self) -> Result<Option<u8>> {
        let mut buf = [0u8; 1];
        match self.reader.read(&mut buf)? {
            0 => Ok(None),
            _ => Ok(Some(buf[0])),
        }
    }

    fn read_exact_bytes(&mut self, n: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; n];
        self.reader
            .read_exact(&mut buf)
            .map_err(|e| DxfError::Parse(format!("binary DXF: truncated field: {e}")))?;
        Ok(buf)
    }

    fn read_group_code(&mut self) -> Result<Option<i32>> {
        let first = match self.read_u8()? {
            Some(b) => b,
            None => return Ok(None),
        };
        if first == 0xFF {
            let bytes = self.read_exact_bytes(2)?;
            Ok(Some(i16::from_le_bytes([bytes[0], bytes[1]]) as i32))
        } else {
            Ok(Some(first as i32))
        }
    }

    fn read_cstring(&mut self) -> Result<String> {
        let mut bytes = Vec::new();
        loop {
            let b = self
                .read_u8()?
                .ok_or_else(|| DxfError::Parse("binary DXF: unterminated string".to_string()))?;
            if b == 0 {
                break;
            }
            bytes.push(b);
        }
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn read_pair_internal(&mut self) -> Result<Option<DxfCodePair>> {
        let code = match self.read_group_code()? {
            Some(c) => c,
            None => return Ok(None),
        };
        let dxf_code = DxfCode::from_i32(code);
        let value_type = GroupCodeValueType::from_code(dxf_code);

        let value_string = match value_type {
            GroupCodeValueType::Double => {
                let bytes = self.read_exact_bytes(8)?;
                let v = f64::from_le_bytes(bytes.try_into().unwrap());
                v.to_string()
            }
            GroupCodeValueType::Int16 => {
                let bytes = self.read_exact_bytes(2)?;
                i16::from_le_bytes([bytes[0], bytes[1]]).to_string()
            }
            GroupCodeValueType::Int32 => {
                let bytes = self.read_exact_bytes(4)?;
                i32::from_le_bytes(bytes.try_into().unwrap()).to_string()
            }
            GroupCodeValueType::Int64 => {
                let bytes = self.read_exact_bytes(8)?;
                i64::from_le_bytes(bytes.try_into().unwrap()).to_string()
            }
            GroupCodeValueType::Byte => {
                let b = self.read_exact_bytes(1)?[0];
                b.to_string()
            }
            GroupCodeValueType::Bool => {
                let b = self.read_exact_bytes(1)?[0];
                (b != 0).to_string()
            }
            GroupCodeValueType::BinaryChunk => {
                let len = self.read_exact_bytes(1)?[0] as usize;
                let bytes = self.read_exact_bytes(len)?;
                bytes.iter().map(|b| format!("{b:02X}")).collect()
            }
            GroupCodeValueType::String | GroupCodeValueType::Handle => self.read_cstring()?,
        };

        Ok(Some(DxfCodePair::new(code, value_string)))
    }
}

impl<R: Read + Seek> DxfStreamReader for DxfBinaryReader<R> {
    fn read_pair(&mut self) -> Result<Option<DxfCodePair>> {
        if let Some(pair) = self.peeked_pair.take() {
            return Ok(Some(pair));
        }
        self.read_pair_internal()
    }

    fn peek_code(&mut self) -> Result<Option<i32>> {
        if let Some(ref pair) = self.peeked_pair {
            return Ok(Some(pair.code));
        }
        if let Some(pair) = self.read_pair_internal()? {
            let code = pair.code;
            self.peeked_pair = Some(pair);
            Ok(Some(code))
        } else {
            Ok(None)
        }
    }

    fn push_back(&mut self, pair: DxfCodePair) {
        self.peeked_pair = Some(pair);
    }

    fn reset(&mut self) -> Result<()> {
        self.reader.seek(SeekFrom::Start(SENTINEL_LEN))?;
        self.peeked_pair = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn sentinel() -> Vec<u8> {
        let mut v = b"AutoCAD Binary DXF".to_vec();
        v.extend_from_slice(b"\r\n\x1a\0");
        v
    }

    #[test]
    fn reads_short_group_code_and_string_value() {
        let mut data = sentinel();
        data.push(0); // group code 0
        data.extend_from_slice(b"SECTION\0");
        let reader = BufReader::new(Cursor::new(data));
        let mut r = DxfBinaryReader::new(reader).unwrap();
        let pair = r.read_pair().unwrap().unwrap();
        assert_eq!(pair.code, 0);
        assert_eq!(pair.value_string, "SECTION");
    }

    #[test]
    fn reads_extended_group_code_and_double_value() {
        let mut data = sentinel();
        data.push(0xFF);
        data.extend_from_slice(&10i16.to_le_bytes());
        data.extend_from_slice(&42.5f64.to_le_bytes());
        let reader = BufReader::new(Cursor::new(data));
        let mut r = DxfBinaryReader::new(reader).unwrap();
        let pair = r.read_pair().unwrap().unwrap();
        assert_eq!(pair.code, 10);
        assert_eq!(pair.as_double(), Some(42.5));
    }

    #[test]
    fn reads_int16_value() {
        let mut data = sentinel();
        data.push(70);
        data.extend_from_slice(&7i16.to_le_bytes());
        let reader = BufReader::new(Cursor::new(data));
        let mut r = DxfBinaryReader::new(reader).unwrap();
        let pair = r.read_pair().unwrap().unwrap();
        assert_eq!(pair.as_int(), Some(7));
    }
}
