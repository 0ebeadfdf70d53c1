// Copyright (C) 2017-2025 The ela-rs Project.
//
// memory_reader.rs file belongs to the ela-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Sequential little-endian reader over a borrowed byte slice.

use crate::{IoError, IoResult};
use byteorder::{ByteOrder, LittleEndian};
use std::mem::size_of;

/// Reads primitive values from an in-memory buffer.
///
/// Fixed-width reads either consume exactly the bytes they need or fail with
/// [`IoError::UnexpectedEof`] without moving the cursor.
#[derive(Debug, Clone)]
pub struct MemoryReader<'a> {
    memory: &'a [u8],
    pos: usize,
}

impl<'a> MemoryReader<'a> {
    /// Creates a reader positioned at the start of `memory`.
    pub fn new(memory: &'a [u8]) -> Self {
        Self { memory, pos: 0 }
    }

    #[inline(always)]
    fn ensure_position(&self, move_by: usize) -> IoResult<()> {
        let remaining = self.remaining();
        if move_by > remaining {
            Err(IoError::UnexpectedEof {
                needed: move_by,
                remaining,
            })
        } else {
            Ok(())
        }
    }

    /// Current offset from the start of the buffer.
    #[inline(always)]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of unread bytes.
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.memory.len() - self.pos
    }

    /// True once every byte has been consumed.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    #[inline(always)]
    pub fn read_u8(&mut self) -> IoResult<u8> {
        self.ensure_position(1)?;
        let value = self.memory[self.pos];
        self.pos += 1;
        Ok(value)
    }

    #[inline(always)]
    pub fn read_u16(&mut self) -> IoResult<u16> {
        self.ensure_position(size_of::<u16>())?;
        let value = LittleEndian::read_u16(&self.memory[self.pos..]);
        self.pos += size_of::<u16>();
        Ok(value)
    }

    #[inline(always)]
    pub fn read_u32(&mut self) -> IoResult<u32> {
        self.ensure_position(size_of::<u32>())?;
        let value = LittleEndian::read_u32(&self.memory[self.pos..]);
        self.pos += size_of::<u32>();
        Ok(value)
    }

    #[inline(always)]
    pub fn read_u64(&mut self) -> IoResult<u64> {
        self.ensure_position(size_of::<u64>())?;
        let value = LittleEndian::read_u64(&self.memory[self.pos..]);
        self.pos += size_of::<u64>();
        Ok(value)
    }

    #[inline(always)]
    pub fn read_i64(&mut self) -> IoResult<i64> {
        self.ensure_position(size_of::<i64>())?;
        let value = LittleEndian::read_i64(&self.memory[self.pos..]);
        self.pos += size_of::<i64>();
        Ok(value)
    }

    /// Reads a compact variable-length integer and rejects values above `max`.
    ///
    /// The marker byte selects the width: `0xfd` for u16, `0xfe` for u32,
    /// `0xff` for u64; anything lower is the value itself.
    pub fn read_var_int(&mut self, max: u64) -> IoResult<u64> {
        let b = self.read_u8()?;
        let value = match b {
            0xfd => self.read_u16()? as u64,
            0xfe => self.read_u32()? as u64,
            0xff => self.read_u64()?,
            _ => b as u64,
        };
        if value > max {
            return Err(IoError::ExceedsMaximum { value, max });
        }
        Ok(value)
    }

    /// Borrows the next `count` bytes.
    #[inline(always)]
    pub fn read_memory(&mut self, count: usize) -> IoResult<&'a [u8]> {
        self.ensure_position(count)?;
        let result = &self.memory[self.pos..self.pos + count];
        self.pos += count;
        Ok(result)
    }

    /// Copies the next `count` bytes.
    pub fn read_bytes(&mut self, count: usize) -> IoResult<Vec<u8>> {
        self.read_memory(count).map(<[u8]>::to_vec)
    }

    /// Reads exactly `N` bytes into an array.
    pub fn read_array<const N: usize>(&mut self) -> IoResult<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_memory(N)?);
        Ok(out)
    }

    /// Reads a var-int length prefix followed by that many bytes.
    pub fn read_var_bytes(&mut self, max: usize) -> IoResult<Vec<u8>> {
        let length = self.read_var_int(max as u64)? as usize;
        self.read_bytes(length)
    }

    /// Reads a var-int length prefix followed by UTF-8 bytes.
    pub fn read_var_string(&mut self, max: usize) -> IoResult<String> {
        let length = self.read_var_int(max as u64)? as usize;
        let data = self.read_memory(length)?;
        String::from_utf8(data.to_vec())
            .map_err(|_| IoError::invalid_data("invalid UTF-8 sequence"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_fixed_width_little_endian() {
        let data = [0x01, 0x34, 0x12, 0x56, 0x34, 0x12];
        let mut reader = MemoryReader::new(&data);
        assert_eq!(reader.read_u8().unwrap(), 0x01);
        assert_eq!(reader.read_u16().unwrap(), 0x1234);
        assert_eq!(
            reader.read_u32(),
            Err(IoError::UnexpectedEof {
                needed: 4,
                remaining: 3
            })
        );
        // a failed read leaves the cursor untouched
        assert_eq!(reader.position(), 3);
        assert_eq!(reader.remaining(), 3);
        assert_eq!(reader.read_memory(3).unwrap(), &[0x56, 0x34, 0x12]);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_read_var_int_markers() {
        let data = hex::decode("fcfdfd00fe00000100ff0000000001000000").unwrap();
        let mut reader = MemoryReader::new(&data);
        assert_eq!(reader.read_var_int(u64::MAX).unwrap(), 0xfc);
        assert_eq!(reader.read_var_int(u64::MAX).unwrap(), 0xfd);
        assert_eq!(reader.read_var_int(u64::MAX).unwrap(), 0x1_0000);
        assert_eq!(reader.read_var_int(u64::MAX).unwrap(), 0x1_0000_0000);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_read_var_int_rejects_over_maximum() {
        let mut reader = MemoryReader::new(&[0x05]);
        assert_eq!(
            reader.read_var_int(4),
            Err(IoError::ExceedsMaximum { value: 5, max: 4 })
        );
    }

    #[test]
    fn test_read_var_bytes_truncated() {
        let mut reader = MemoryReader::new(&[0x03, 0xaa, 0xbb]);
        assert_eq!(
            reader.read_var_bytes(16),
            Err(IoError::UnexpectedEof {
                needed: 3,
                remaining: 2
            })
        );
    }

    #[test]
    fn test_read_var_string() {
        let mut reader = MemoryReader::new(b"\x03ELA\x02\xff\xfe");
        assert_eq!(reader.read_var_string(16).unwrap(), "ELA");
        assert!(matches!(
            reader.read_var_string(16),
            Err(IoError::InvalidData(_))
        ));
    }
}
