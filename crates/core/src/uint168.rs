// Copyright (C) 2017-2025 The ela-rs Project.
//
// uint168.rs file belongs to the ela-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::{CoreError, CoreResult};
use ela_io::{BinaryWriter, IoResult, MemoryReader, Serializable};
use std::fmt;

/// A 168-bit program hash: a one-byte prefix followed by a 20-byte script hash.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
pub struct UInt168([u8; UInt168::LENGTH]);

impl UInt168 {
    /// The length of UInt168 values in bytes.
    pub const LENGTH: usize = 21;

    pub const ZERO: Self = Self([0; Self::LENGTH]);

    pub const fn new(bytes: [u8; Self::LENGTH]) -> Self {
        Self(bytes)
    }

    pub fn from_slice(slice: &[u8]) -> CoreResult<Self> {
        let bytes: [u8; Self::LENGTH] =
            slice.try_into().map_err(|_| CoreError::InvalidLength {
                expected: Self::LENGTH,
                actual: slice.len(),
            })?;
        Ok(Self(bytes))
    }

    /// The address-type prefix byte.
    pub fn prefix(&self) -> u8 {
        self.0[0]
    }

    pub fn as_bytes(&self) -> &[u8; Self::LENGTH] {
        &self.0
    }
}

impl Serializable for UInt168 {
    fn size(&self) -> usize {
        Self::LENGTH
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_bytes(&self.0)
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        reader.read_array().map(Self)
    }
}

impl fmt::Display for UInt168 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for UInt168 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UInt168({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uint168_prefix_and_display() {
        let mut bytes = [0u8; 21];
        bytes[0] = 0x21;
        let hash = UInt168::new(bytes);
        assert_eq!(hash.prefix(), 0x21);
        assert_eq!(hash.to_string(), format!("21{}", "00".repeat(20)));
    }

    #[test]
    fn test_uint168_from_slice() {
        assert!(UInt168::from_slice(&[0u8; 21]).is_ok());
        assert!(UInt168::from_slice(&[0u8; 20]).is_err());
    }
}
