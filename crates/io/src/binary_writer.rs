// Copyright (C) 2017-2025 The ela-rs Project.
//
// binary_writer.rs file belongs to the ela-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::IoResult;

/// A binary writer that appends little-endian encoded values to a byte buffer.
///
/// # Examples
///
/// ```rust
/// use ela_io::BinaryWriter;
///
/// let mut writer = BinaryWriter::new();
/// writer.write_u32(42).unwrap();
/// writer.write_var_string("ELA").unwrap();
///
/// assert_eq!(writer.to_bytes(), vec![42, 0, 0, 0, 3, b'E', b'L', b'A']);
/// ```
#[derive(Debug, Default, Clone)]
pub struct BinaryWriter {
    inner: Vec<u8>,
}

impl BinaryWriter {
    pub fn new() -> Self {
        Self { inner: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Vec::with_capacity(capacity),
        }
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.inner
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.inner.clone()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.inner
    }

    pub fn write_u8(&mut self, value: u8) -> IoResult<()> {
        self.inner.push(value);
        Ok(())
    }

    pub fn write_u16(&mut self, value: u16) -> IoResult<()> {
        self.inner.extend_from_slice(&value.to_le_bytes());
        Ok(())
    }

    pub fn write_u32(&mut self, value: u32) -> IoResult<()> {
        self.inner.extend_from_slice(&value.to_le_bytes());
        Ok(())
    }

    pub fn write_u64(&mut self, value: u64) -> IoResult<()> {
        self.inner.extend_from_slice(&value.to_le_bytes());
        Ok(())
    }

    pub fn write_i64(&mut self, value: i64) -> IoResult<()> {
        self.inner.extend_from_slice(&value.to_le_bytes());
        Ok(())
    }

    pub fn write_bytes(&mut self, buffer: &[u8]) -> IoResult<()> {
        self.inner.extend_from_slice(buffer);
        Ok(())
    }

    /// Writes a compact variable-length unsigned integer.
    pub fn write_var_int(&mut self, value: u64) -> IoResult<()> {
        if value < 0xfd {
            self.write_u8(value as u8)
        } else if value <= 0xffff {
            self.write_u8(0xfd)?;
            self.write_u16(value as u16)
        } else if value <= 0xffff_ffff {
            self.write_u8(0xfe)?;
            self.write_u32(value as u32)
        } else {
            self.write_u8(0xff)?;
            self.write_u64(value)
        }
    }

    /// Writes a var-int length prefix followed by the bytes.
    pub fn write_var_bytes(&mut self, value: &[u8]) -> IoResult<()> {
        self.write_var_int(value.len() as u64)?;
        self.write_bytes(value)
    }

    /// Writes a UTF-8 string as var-bytes.
    pub fn write_var_string(&mut self, value: &str) -> IoResult<()> {
        self.write_var_bytes(value.as_bytes())
    }
}
