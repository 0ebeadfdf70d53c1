// Copyright (C) 2017-2025 The ela-rs Project.
//
// output.rs file belongs to the ela-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::{Fixed64, UInt168, UInt256};
use ela_io::{BinaryWriter, IoResult, MemoryReader, Serializable};
use std::fmt;

/// An amount of an asset locked to a program hash.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TxOutput {
    pub asset_id: UInt256,
    pub value: Fixed64,
    /// Block height before which the output cannot be spent.
    pub output_lock: u32,
    pub program_hash: UInt168,
}

impl TxOutput {
    pub const SIZE: usize = UInt256::LENGTH + 8 + 4 + UInt168::LENGTH;

    pub fn new(asset_id: UInt256, value: Fixed64, program_hash: UInt168) -> Self {
        Self {
            asset_id,
            value,
            output_lock: 0,
            program_hash,
        }
    }
}

impl Serializable for TxOutput {
    fn size(&self) -> usize {
        Self::SIZE
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        self.asset_id.serialize(writer)?;
        self.value.serialize(writer)?;
        writer.write_u32(self.output_lock)?;
        self.program_hash.serialize(writer)
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        Ok(Self {
            asset_id: UInt256::deserialize(reader)?,
            value: Fixed64::deserialize(reader)?,
            output_lock: reader.read_u32()?,
            program_hash: UInt168::deserialize(reader)?,
        })
    }
}

impl fmt::Display for TxOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Output: {{ AssetID: {}, Value: {}, OutputLock: {}, ProgramHash: {} }}",
            self.asset_id, self.value, self.output_lock, self.program_hash
        )
    }
}
