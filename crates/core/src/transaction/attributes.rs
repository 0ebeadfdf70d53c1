// Copyright (C) 2017-2025 The ela-rs Project.
//
// attributes.rs file belongs to the ela-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Transaction attributes: a usage byte followed by var-bytes data.

use ela_config::MAX_SCRIPT_SIZE;
use ela_io::serializable::helper::{ensure_max, get_var_bytes_size};
use ela_io::{BinaryWriter, IoError, IoResult, MemoryReader, Serializable};
use std::fmt;

/// Attribute usages accepted on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[repr(u8)]
pub enum AttributeUsage {
    /// Random bytes that make otherwise identical transactions distinct.
    Nonce = 0x00,
    /// An extra program hash that must sign the transaction.
    Script = 0x20,
    /// Free-form memo.
    Memo = 0x81,
    /// Human-readable description.
    Description = 0x90,
    /// URL pointing at a description.
    DescriptionUrl = 0x91,
}

impl AttributeUsage {
    pub fn name(&self) -> &'static str {
        match self {
            AttributeUsage::Nonce => "Nonce",
            AttributeUsage::Script => "Script",
            AttributeUsage::Memo => "Memo",
            AttributeUsage::Description => "Description",
            AttributeUsage::DescriptionUrl => "DescriptionUrl",
        }
    }
}

impl TryFrom<u8> for AttributeUsage {
    type Error = IoError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x00 => Ok(AttributeUsage::Nonce),
            0x20 => Ok(AttributeUsage::Script),
            0x81 => Ok(AttributeUsage::Memo),
            0x90 => Ok(AttributeUsage::Description),
            0x91 => Ok(AttributeUsage::DescriptionUrl),
            other => Err(IoError::invalid_data(format!(
                "unsupported attribute usage {other:#04x}"
            ))),
        }
    }
}

/// A metadata entry attached to a transaction.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TxAttribute {
    pub usage: AttributeUsage,
    pub data: Vec<u8>,
}

impl TxAttribute {
    pub fn new(usage: AttributeUsage, data: Vec<u8>) -> Self {
        Self { usage, data }
    }

    /// A nonce attribute carrying the little-endian bytes of `nonce`.
    pub fn nonce(nonce: u64) -> Self {
        Self::new(AttributeUsage::Nonce, nonce.to_le_bytes().to_vec())
    }

    /// Encodes an attribute whose data must fit `max_data_size`.
    pub fn serialize_with(&self, writer: &mut BinaryWriter, max_data_size: usize) -> IoResult<()> {
        ensure_max(self.data.len(), max_data_size)?;
        writer.write_u8(self.usage as u8)?;
        writer.write_var_bytes(&self.data)
    }

    /// Decodes an attribute, bounding its data by `max_data_size`.
    pub fn deserialize_with(reader: &mut MemoryReader, max_data_size: usize) -> IoResult<Self> {
        let usage = AttributeUsage::try_from(reader.read_u8()?)?;
        let data = reader.read_var_bytes(max_data_size)?;
        Ok(Self { usage, data })
    }
}

impl Serializable for TxAttribute {
    fn size(&self) -> usize {
        1 + get_var_bytes_size(&self.data)
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        self.serialize_with(writer, MAX_SCRIPT_SIZE)
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        Self::deserialize_with(reader, MAX_SCRIPT_SIZE)
    }
}

impl fmt::Display for TxAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TxAttribute: {{ Usage: {}, Data: {} }}",
            self.usage.name(),
            hex::encode(&self.data)
        )
    }
}
