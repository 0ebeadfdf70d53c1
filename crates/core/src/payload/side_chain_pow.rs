// Copyright (C) 2017-2025 The ela-rs Project.
//
// side_chain_pow.rs file belongs to the ela-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use super::VersionedPayload;
use crate::UInt256;
use ela_config::CodecSettings;
use ela_io::serializable::helper::ensure_max;
use ela_io::{BinaryWriter, IoResult, MemoryReader, Serializable};

/// Anchors a side-chain block on the main chain.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SideChainPow {
    pub side_block_hash: UInt256,
    pub side_genesis_hash: UInt256,
    pub block_height: u32,
    /// Arbiter signature over the hashes and height.
    pub signed_data: Vec<u8>,
}

impl VersionedPayload for SideChainPow {
    fn serialize(&self, writer: &mut BinaryWriter, _version: u8) -> IoResult<()> {
        self.side_block_hash.serialize(writer)?;
        self.side_genesis_hash.serialize(writer)?;
        writer.write_u32(self.block_height)?;
        writer.write_var_bytes(&self.signed_data)
    }

    fn deserialize(
        reader: &mut MemoryReader,
        _version: u8,
        settings: &CodecSettings,
    ) -> IoResult<Self> {
        Ok(Self {
            side_block_hash: UInt256::deserialize(reader)?,
            side_genesis_hash: UInt256::deserialize(reader)?,
            block_height: reader.read_u32()?,
            signed_data: reader.read_var_bytes(settings.max_script_size)?,
        })
    }

    fn check_bounds(&self, _version: u8, settings: &CodecSettings) -> IoResult<()> {
        ensure_max(self.signed_data.len(), settings.max_script_size)
    }
}
