// Copyright (C) 2017-2025 The ela-rs Project.
//
// mod.rs file belongs to the ela-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Type-specific transaction payloads.
//!
//! Every transaction carries exactly one payload whose variant is selected by
//! the transaction's type tag. Each variant owns its own versioned encoding:
//!
//! - `coinbase` - fee-collecting transactions
//! - `register_asset` - new asset registration
//! - `record` - arbitrary typed records
//! - `deploy` - contract deployment
//! - `side_chain_pow` - side-chain proof of work anchoring
//! - `recharge_to_side_chain` / `withdraw_from_side_chain` - cross-chain deposits and withdrawals
//! - `transfer_cross_chain_asset` - cross-chain transfer instructions

pub mod coinbase;
pub mod deploy;
pub mod recharge_to_side_chain;
pub mod record;
pub mod register_asset;
pub mod side_chain_pow;
pub mod transfer_cross_chain_asset;
pub mod withdraw_from_side_chain;

pub use coinbase::CoinBase;
pub use deploy::{Deploy, FunctionCode};
pub use recharge_to_side_chain::RechargeToSideChain;
pub use record::Record;
pub use register_asset::{Asset, RegisterAsset};
pub use side_chain_pow::SideChainPow;
pub use transfer_cross_chain_asset::{CrossChainTransfer, TransferCrossChainAsset};
pub use withdraw_from_side_chain::WithdrawFromSideChain;

use crate::transaction::TransactionType;
use ela_config::CodecSettings;
use ela_io::{BinaryWriter, IoResult, MemoryReader};

/// Encoding contract shared by every payload variant.
///
/// `version` is the transaction's payload version; variants that have a
/// single layout ignore it.
pub trait VersionedPayload: Sized {
    /// Writes the payload body.
    fn serialize(&self, writer: &mut BinaryWriter, version: u8) -> IoResult<()>;

    /// Reads the payload body, bounding every length prefix by `settings`.
    fn deserialize(
        reader: &mut MemoryReader,
        version: u8,
        settings: &CodecSettings,
    ) -> IoResult<Self>;

    /// Checks every length the encoding would write against the bounds the
    /// decoder applies under `settings`.
    fn check_bounds(&self, _version: u8, _settings: &CodecSettings) -> IoResult<()> {
        Ok(())
    }

    /// The content view of the payload; by default its encoded bytes.
    fn data(&self, version: u8) -> IoResult<Vec<u8>> {
        let mut writer = BinaryWriter::new();
        self.serialize(&mut writer, version)?;
        Ok(writer.into_bytes())
    }
}

/// The payload of a transaction, one variant per transaction type.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Payload {
    CoinBase(CoinBase),
    RegisterAsset(RegisterAsset),
    /// Plain transfers carry no payload bytes.
    TransferAsset,
    Record(Record),
    Deploy(Deploy),
    SideChainPow(SideChainPow),
    RechargeToSideChain(RechargeToSideChain),
    WithdrawFromSideChain(WithdrawFromSideChain),
    TransferCrossChainAsset(TransferCrossChainAsset),
}

impl Payload {
    /// Creates the empty payload variant for `tx_type`, ready to be filled by
    /// [`Payload::deserialize`].
    pub fn create(tx_type: TransactionType) -> Self {
        match tx_type {
            TransactionType::CoinBase => Payload::CoinBase(CoinBase::default()),
            TransactionType::RegisterAsset => Payload::RegisterAsset(RegisterAsset::default()),
            TransactionType::TransferAsset => Payload::TransferAsset,
            TransactionType::Record => Payload::Record(Record::default()),
            TransactionType::Deploy => Payload::Deploy(Deploy::default()),
            TransactionType::SideChainPow => Payload::SideChainPow(SideChainPow::default()),
            TransactionType::RechargeToSideChain => {
                Payload::RechargeToSideChain(RechargeToSideChain::default())
            }
            TransactionType::WithdrawFromSideChain => {
                Payload::WithdrawFromSideChain(WithdrawFromSideChain::default())
            }
            TransactionType::TransferCrossChainAsset => {
                Payload::TransferCrossChainAsset(TransferCrossChainAsset::default())
            }
        }
    }

    /// The transaction type this variant belongs to.
    pub fn tx_type(&self) -> TransactionType {
        match self {
            Payload::CoinBase(_) => TransactionType::CoinBase,
            Payload::RegisterAsset(_) => TransactionType::RegisterAsset,
            Payload::TransferAsset => TransactionType::TransferAsset,
            Payload::Record(_) => TransactionType::Record,
            Payload::Deploy(_) => TransactionType::Deploy,
            Payload::SideChainPow(_) => TransactionType::SideChainPow,
            Payload::RechargeToSideChain(_) => TransactionType::RechargeToSideChain,
            Payload::WithdrawFromSideChain(_) => TransactionType::WithdrawFromSideChain,
            Payload::TransferCrossChainAsset(_) => TransactionType::TransferCrossChainAsset,
        }
    }

    /// The content view used for display.
    pub fn data(&self, version: u8) -> IoResult<Vec<u8>> {
        match self {
            Payload::CoinBase(p) => p.data(version),
            Payload::RegisterAsset(p) => p.data(version),
            Payload::TransferAsset => Ok(vec![0]),
            Payload::Record(p) => p.data(version),
            Payload::Deploy(p) => p.data(version),
            Payload::SideChainPow(p) => p.data(version),
            Payload::RechargeToSideChain(p) => p.data(version),
            Payload::WithdrawFromSideChain(p) => p.data(version),
            Payload::TransferCrossChainAsset(p) => p.data(version),
        }
    }

    /// Fails when the payload would not decode under `settings`.
    pub fn check_bounds(&self, version: u8, settings: &CodecSettings) -> IoResult<()> {
        match self {
            Payload::CoinBase(p) => p.check_bounds(version, settings),
            Payload::RegisterAsset(p) => p.check_bounds(version, settings),
            Payload::TransferAsset => Ok(()),
            Payload::Record(p) => p.check_bounds(version, settings),
            Payload::Deploy(p) => p.check_bounds(version, settings),
            Payload::SideChainPow(p) => p.check_bounds(version, settings),
            Payload::RechargeToSideChain(p) => p.check_bounds(version, settings),
            Payload::WithdrawFromSideChain(p) => p.check_bounds(version, settings),
            Payload::TransferCrossChainAsset(p) => p.check_bounds(version, settings),
        }
    }

    pub fn serialize(&self, writer: &mut BinaryWriter, version: u8) -> IoResult<()> {
        match self {
            Payload::CoinBase(p) => p.serialize(writer, version),
            Payload::RegisterAsset(p) => p.serialize(writer, version),
            Payload::TransferAsset => Ok(()),
            Payload::Record(p) => p.serialize(writer, version),
            Payload::Deploy(p) => p.serialize(writer, version),
            Payload::SideChainPow(p) => p.serialize(writer, version),
            Payload::RechargeToSideChain(p) => p.serialize(writer, version),
            Payload::WithdrawFromSideChain(p) => p.serialize(writer, version),
            Payload::TransferCrossChainAsset(p) => p.serialize(writer, version),
        }
    }

    /// Fills this variant from the stream, keeping the variant unchanged.
    pub fn deserialize(
        &mut self,
        reader: &mut MemoryReader,
        version: u8,
        settings: &CodecSettings,
    ) -> IoResult<()> {
        match self {
            Payload::CoinBase(p) => *p = CoinBase::deserialize(reader, version, settings)?,
            Payload::RegisterAsset(p) => {
                *p = RegisterAsset::deserialize(reader, version, settings)?
            }
            Payload::TransferAsset => {}
            Payload::Record(p) => *p = Record::deserialize(reader, version, settings)?,
            Payload::Deploy(p) => *p = Deploy::deserialize(reader, version, settings)?,
            Payload::SideChainPow(p) => *p = SideChainPow::deserialize(reader, version, settings)?,
            Payload::RechargeToSideChain(p) => {
                *p = RechargeToSideChain::deserialize(reader, version, settings)?
            }
            Payload::WithdrawFromSideChain(p) => {
                *p = WithdrawFromSideChain::deserialize(reader, version, settings)?
            }
            Payload::TransferCrossChainAsset(p) => {
                *p = TransferCrossChainAsset::deserialize(reader, version, settings)?
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_TYPES: [TransactionType; 9] = [
        TransactionType::CoinBase,
        TransactionType::RegisterAsset,
        TransactionType::TransferAsset,
        TransactionType::Record,
        TransactionType::Deploy,
        TransactionType::SideChainPow,
        TransactionType::RechargeToSideChain,
        TransactionType::WithdrawFromSideChain,
        TransactionType::TransferCrossChainAsset,
    ];

    #[test]
    fn test_create_matches_tag() {
        for tx_type in ALL_TYPES {
            assert_eq!(Payload::create(tx_type).tx_type(), tx_type);
        }
    }

    #[test]
    fn test_transfer_asset_is_empty_on_wire() {
        let mut writer = BinaryWriter::new();
        Payload::TransferAsset.serialize(&mut writer, 0).unwrap();
        assert!(writer.is_empty());
        assert_eq!(Payload::TransferAsset.data(0).unwrap(), vec![0]);
    }

    #[test]
    fn test_deserialize_fills_created_variant() {
        let source = Payload::Record(Record {
            record_type: "note".to_string(),
            record_data: vec![1, 2, 3],
        });
        let mut writer = BinaryWriter::new();
        source.serialize(&mut writer, 0).unwrap();
        let bytes = writer.into_bytes();

        let mut payload = Payload::create(TransactionType::Record);
        payload
            .deserialize(&mut MemoryReader::new(&bytes), 0, &CodecSettings::default())
            .unwrap();
        assert_eq!(payload, source);
    }

    #[test]
    fn test_check_bounds_mirrors_decode_limits() {
        let settings = CodecSettings {
            max_string_length: 4,
            ..CodecSettings::default()
        };
        let at_limit = Payload::Record(Record {
            record_type: "note".to_string(),
            record_data: vec![],
        });
        assert!(at_limit.check_bounds(0, &settings).is_ok());

        let over_limit = Payload::Record(Record {
            record_type: "notes".to_string(),
            record_data: vec![],
        });
        assert_eq!(
            over_limit.check_bounds(0, &settings),
            Err(ela_io::IoError::ExceedsMaximum { value: 5, max: 4 })
        );
        assert!(Payload::TransferAsset.check_bounds(0, &settings).is_ok());
    }
}
