// Copyright (C) 2017-2025 The ela-rs Project.
//
// transfer_cross_chain_asset.rs file belongs to the ela-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use super::VersionedPayload;
use crate::Fixed64;
use ela_config::CodecSettings;
use ela_io::serializable::helper::{ensure_max, MAX_PREALLOCATED_ITEMS};
use ela_io::{BinaryWriter, IoError, IoResult, MemoryReader, Serializable};

/// One destination of a cross-chain transfer, bound to an output by index.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CrossChainTransfer {
    pub cross_chain_address: String,
    pub output_index: u64,
    pub cross_chain_amount: Fixed64,
}

/// Moves assets from the main chain to addresses on a side chain.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TransferCrossChainAsset {
    pub transfers: Vec<CrossChainTransfer>,
}

impl VersionedPayload for TransferCrossChainAsset {
    fn serialize(&self, writer: &mut BinaryWriter, _version: u8) -> IoResult<()> {
        writer.write_var_int(self.transfers.len() as u64)?;
        for transfer in &self.transfers {
            writer.write_var_string(&transfer.cross_chain_address)?;
            writer.write_var_int(transfer.output_index)?;
            transfer.cross_chain_amount.serialize(writer)?;
        }
        Ok(())
    }

    fn deserialize(
        reader: &mut MemoryReader,
        _version: u8,
        settings: &CodecSettings,
    ) -> IoResult<Self> {
        let count = reader.read_var_int(settings.max_outputs as u64)? as usize;
        let mut transfers = Vec::with_capacity(count.min(MAX_PREALLOCATED_ITEMS));
        for _ in 0..count {
            transfers.push(CrossChainTransfer {
                cross_chain_address: reader.read_var_string(settings.max_string_length)?,
                output_index: reader.read_var_int(settings.max_outputs as u64)?,
                cross_chain_amount: Fixed64::deserialize(reader)?,
            });
        }
        Ok(Self { transfers })
    }

    fn check_bounds(&self, _version: u8, settings: &CodecSettings) -> IoResult<()> {
        ensure_max(self.transfers.len(), settings.max_outputs)?;
        for transfer in &self.transfers {
            ensure_max(transfer.cross_chain_address.len(), settings.max_string_length)?;
            if transfer.output_index > settings.max_outputs as u64 {
                return Err(IoError::ExceedsMaximum {
                    value: transfer.output_index,
                    max: settings.max_outputs as u64,
                });
            }
        }
        Ok(())
    }
}
