// Copyright (C) 2017-2025 The ela-rs Project.
//
// withdraw_from_side_chain.rs file belongs to the ela-rs project and is free
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
use ela_io::serializable::helper::{deserialize_array, ensure_max, serialize_array};
use ela_io::{BinaryWriter, IoResult, MemoryReader};

/// Releases funds on the main chain for side-chain withdrawals.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WithdrawFromSideChain {
    pub block_height: u32,
    pub genesis_block_address: String,
    pub side_chain_transaction_hashes: Vec<UInt256>,
}

impl VersionedPayload for WithdrawFromSideChain {
    fn serialize(&self, writer: &mut BinaryWriter, _version: u8) -> IoResult<()> {
        writer.write_u32(self.block_height)?;
        writer.write_var_string(&self.genesis_block_address)?;
        serialize_array(&self.side_chain_transaction_hashes, writer)
    }

    fn deserialize(
        reader: &mut MemoryReader,
        _version: u8,
        settings: &CodecSettings,
    ) -> IoResult<Self> {
        Ok(Self {
            block_height: reader.read_u32()?,
            genesis_block_address: reader.read_var_string(settings.max_string_length)?,
            side_chain_transaction_hashes: deserialize_array(
                reader,
                settings.max_side_chain_hashes,
            )?,
        })
    }

    fn check_bounds(&self, _version: u8, settings: &CodecSettings) -> IoResult<()> {
        ensure_max(self.genesis_block_address.len(), settings.max_string_length)?;
        ensure_max(
            self.side_chain_transaction_hashes.len(),
            settings.max_side_chain_hashes,
        )
    }
}
