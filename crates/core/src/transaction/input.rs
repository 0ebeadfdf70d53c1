// Copyright (C) 2017-2025 The ela-rs Project.
//
// input.rs file belongs to the ela-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::UInt256;
use ela_io::{BinaryWriter, IoResult, MemoryReader, Serializable};
use std::fmt;

/// A reference to a previous transaction's output being spent.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct UtxoInput {
    /// Hash of the transaction that created the output.
    pub refer_tx_id: UInt256,
    /// Index of the output within that transaction.
    pub refer_tx_output_index: u16,
    pub sequence: u32,
}

impl UtxoInput {
    /// Encoded size: hash, u16 index, u32 sequence.
    pub const SIZE: usize = UInt256::LENGTH + 2 + 4;

    pub fn new(refer_tx_id: UInt256, refer_tx_output_index: u16) -> Self {
        Self {
            refer_tx_id,
            refer_tx_output_index,
            sequence: 0,
        }
    }

    /// The `hash:index` key identifying the referenced output.
    pub fn refer_key(&self) -> String {
        format!("{}:{}", self.refer_tx_id, self.refer_tx_output_index)
    }
}

impl Serializable for UtxoInput {
    fn size(&self) -> usize {
        Self::SIZE
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        self.refer_tx_id.serialize(writer)?;
        writer.write_u16(self.refer_tx_output_index)?;
        writer.write_u32(self.sequence)
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        Ok(Self {
            refer_tx_id: UInt256::deserialize(reader)?,
            refer_tx_output_index: reader.read_u16()?,
            sequence: reader.read_u32()?,
        })
    }
}

impl fmt::Display for UtxoInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "UTXOInput: {{ ReferTxID: {}, ReferTxOutputIndex: {}, Sequence: {} }}",
            self.refer_tx_id, self.refer_tx_output_index, self.sequence
        )
    }
}
