// Copyright (C) 2017-2025 The ela-rs Project.
//
// uint256.rs file belongs to the ela-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::{CoreError, CoreResult};
use ela_io::{BinaryWriter, IoResult, MemoryReader, Serializable};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

/// A 256-bit value stored as 32 raw bytes, used for transaction and asset ids.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
pub struct UInt256([u8; UInt256::LENGTH]);

impl UInt256 {
    /// The length of UInt256 values in bytes.
    pub const LENGTH: usize = 32;

    /// Represents 0.
    pub const ZERO: Self = Self([0; Self::LENGTH]);

    pub const fn new(bytes: [u8; Self::LENGTH]) -> Self {
        Self(bytes)
    }

    /// Creates a UInt256 from a slice that must be exactly 32 bytes long.
    pub fn from_slice(slice: &[u8]) -> CoreResult<Self> {
        let bytes: [u8; Self::LENGTH] =
            slice.try_into().map_err(|_| CoreError::InvalidLength {
                expected: Self::LENGTH,
                actual: slice.len(),
            })?;
        Ok(Self(bytes))
    }

    /// SHA-256 applied twice.
    pub fn double_sha256(data: &[u8]) -> Self {
        let first = Sha256::digest(data);
        Self(Sha256::digest(first).into())
    }

    pub fn as_bytes(&self) -> &[u8; Self::LENGTH] {
        &self.0
    }

    pub fn to_array(&self) -> [u8; Self::LENGTH] {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0; Self::LENGTH]
    }
}

impl From<[u8; UInt256::LENGTH]> for UInt256 {
    fn from(bytes: [u8; UInt256::LENGTH]) -> Self {
        Self(bytes)
    }
}

impl Serializable for UInt256 {
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

/// Hex of the byte-reversed value, the conventional display order for hashes.
impl fmt::Display for UInt256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut reversed = self.0;
        reversed.reverse();
        f.write_str(&hex::encode(reversed))
    }
}

impl fmt::Debug for UInt256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UInt256({self})")
    }
}

impl FromStr for UInt256 {
    type Err = CoreError;

    /// Parses the display form (reversed hex, optional `0x` prefix).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let mut bytes = hex::decode(s)?;
        bytes.reverse();
        Self::from_slice(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ela_io::SerializableExt;

    #[test]
    fn test_wire_codec_alongside_serde() {
        let value = UInt256::new([0x5a; 32]);

        let mut writer = BinaryWriter::new();
        value.serialize(&mut writer).unwrap();
        let bytes = writer.into_bytes();
        assert_eq!(bytes, vec![0x5a; 32]);
        assert_eq!(UInt256::deserialize(&mut MemoryReader::new(&bytes)).unwrap(), value);

        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(serde_json::from_str::<UInt256>(&json).unwrap(), value);
    }

    #[test]
    fn test_uint256_zero() {
        assert_eq!(UInt256::ZERO.to_array(), [0u8; 32]);
        assert!(UInt256::default().is_zero());
    }

    #[test]
    fn test_uint256_from_slice_length() {
        assert!(UInt256::from_slice(&[1u8; 32]).is_ok());
        assert_eq!(
            UInt256::from_slice(&[1u8; 31]),
            Err(CoreError::InvalidLength {
                expected: 32,
                actual: 31
            })
        );
    }

    #[test]
    fn test_uint256_display_is_reversed() {
        let mut bytes = [0u8; 32];
        bytes[0] = 0x01;
        bytes[31] = 0xff;
        let value = UInt256::new(bytes);
        let text = value.to_string();
        assert!(text.starts_with("ff"));
        assert!(text.ends_with("01"));
        assert_eq!(text.parse::<UInt256>().unwrap(), value);
    }

    #[test]
    fn test_uint256_wire_is_raw_bytes() {
        let value = UInt256::new([7u8; 32]);
        let bytes = value.to_array().to_vec();
        assert_eq!(SerializableExt::to_array(&value).unwrap(), bytes);
        assert_eq!(UInt256::from_array(&bytes).unwrap(), value);
    }

    #[test]
    fn test_double_sha256_empty() {
        // sha256(sha256("")) in wire order
        let digest = UInt256::double_sha256(&[]);
        assert_eq!(
            hex::encode(digest.as_bytes()),
            "5df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456"
        );
    }
}
