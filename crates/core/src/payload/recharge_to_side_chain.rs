// Copyright (C) 2017-2025 The ela-rs Project.
//
// recharge_to_side_chain.rs file belongs to the ela-rs project and is free
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
use ela_io::{BinaryWriter, IoError, IoResult, MemoryReader, Serializable};

/// Proof-carrying layout.
pub const RECHARGE_TO_SIDE_CHAIN_VERSION_0: u8 = 0x00;
/// Hash-only layout.
pub const RECHARGE_TO_SIDE_CHAIN_VERSION_1: u8 = 0x01;

/// Deposits main-chain funds onto a side chain.
///
/// The transaction's payload version selects the layout, and encoding fails
/// when the variant does not match it.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RechargeToSideChain {
    /// Version 0: the main-chain transaction and its merkle proof.
    Proof {
        merkle_proof: Vec<u8>,
        main_chain_transaction: Vec<u8>,
    },
    /// Version 1: the main-chain transaction referred to by hash.
    Hash { main_chain_transaction_hash: UInt256 },
}

impl Default for RechargeToSideChain {
    fn default() -> Self {
        RechargeToSideChain::Proof {
            merkle_proof: Vec::new(),
            main_chain_transaction: Vec::new(),
        }
    }
}

impl RechargeToSideChain {
    /// The payload version this layout is written under.
    pub fn version(&self) -> u8 {
        match self {
            RechargeToSideChain::Proof { .. } => RECHARGE_TO_SIDE_CHAIN_VERSION_0,
            RechargeToSideChain::Hash { .. } => RECHARGE_TO_SIDE_CHAIN_VERSION_1,
        }
    }

    fn ensure_version(&self, version: u8) -> IoResult<()> {
        match version {
            RECHARGE_TO_SIDE_CHAIN_VERSION_0 | RECHARGE_TO_SIDE_CHAIN_VERSION_1 => {
                if version != self.version() {
                    return Err(IoError::invalid_data(format!(
                        "recharge to side chain layout is version {}, transaction declares {version}",
                        self.version()
                    )));
                }
                Ok(())
            }
            other => Err(unsupported_version(other)),
        }
    }
}

fn unsupported_version(version: u8) -> IoError {
    IoError::invalid_data(format!(
        "invalid recharge to side chain payload version {version}"
    ))
}

impl VersionedPayload for RechargeToSideChain {
    fn serialize(&self, writer: &mut BinaryWriter, version: u8) -> IoResult<()> {
        self.ensure_version(version)?;
        match self {
            RechargeToSideChain::Proof {
                merkle_proof,
                main_chain_transaction,
            } => {
                writer.write_var_bytes(merkle_proof)?;
                writer.write_var_bytes(main_chain_transaction)
            }
            RechargeToSideChain::Hash {
                main_chain_transaction_hash,
            } => main_chain_transaction_hash.serialize(writer),
        }
    }

    fn deserialize(
        reader: &mut MemoryReader,
        version: u8,
        settings: &CodecSettings,
    ) -> IoResult<Self> {
        match version {
            RECHARGE_TO_SIDE_CHAIN_VERSION_0 => Ok(RechargeToSideChain::Proof {
                merkle_proof: reader.read_var_bytes(settings.max_payload_data_size)?,
                main_chain_transaction: reader.read_var_bytes(settings.max_payload_data_size)?,
            }),
            RECHARGE_TO_SIDE_CHAIN_VERSION_1 => Ok(RechargeToSideChain::Hash {
                main_chain_transaction_hash: UInt256::deserialize(reader)?,
            }),
            other => Err(unsupported_version(other)),
        }
    }

    fn check_bounds(&self, version: u8, settings: &CodecSettings) -> IoResult<()> {
        self.ensure_version(version)?;
        if let RechargeToSideChain::Proof {
            merkle_proof,
            main_chain_transaction,
        } = self
        {
            ensure_max(merkle_proof.len(), settings.max_payload_data_size)?;
            ensure_max(main_chain_transaction.len(), settings.max_payload_data_size)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proof() -> RechargeToSideChain {
        RechargeToSideChain::Proof {
            merkle_proof: vec![1, 2, 3],
            main_chain_transaction: vec![4, 5],
        }
    }

    fn by_hash() -> RechargeToSideChain {
        RechargeToSideChain::Hash {
            main_chain_transaction_hash: UInt256::new([9; 32]),
        }
    }

    fn decode(bytes: &[u8], version: u8) -> IoResult<RechargeToSideChain> {
        RechargeToSideChain::deserialize(
            &mut MemoryReader::new(bytes),
            version,
            &CodecSettings::default(),
        )
    }

    #[test]
    fn test_each_layout_round_trips() {
        let v0 = proof().data(RECHARGE_TO_SIDE_CHAIN_VERSION_0).unwrap();
        assert_eq!(v0, vec![3, 1, 2, 3, 2, 4, 5]);
        assert_eq!(decode(&v0, RECHARGE_TO_SIDE_CHAIN_VERSION_0).unwrap(), proof());

        let v1 = by_hash().data(RECHARGE_TO_SIDE_CHAIN_VERSION_1).unwrap();
        assert_eq!(v1, vec![9; 32]);
        assert_eq!(decode(&v1, RECHARGE_TO_SIDE_CHAIN_VERSION_1).unwrap(), by_hash());
    }

    #[test]
    fn test_layout_must_match_declared_version() {
        let mut writer = BinaryWriter::new();
        assert!(matches!(
            by_hash().serialize(&mut writer, RECHARGE_TO_SIDE_CHAIN_VERSION_0),
            Err(IoError::InvalidData(_))
        ));
        assert!(writer.is_empty());
        assert!(matches!(
            proof().check_bounds(RECHARGE_TO_SIDE_CHAIN_VERSION_1, &CodecSettings::default()),
            Err(IoError::InvalidData(_))
        ));
    }

    #[test]
    fn test_unknown_version_rejected() {
        let mut writer = BinaryWriter::new();
        assert!(matches!(
            proof().serialize(&mut writer, 2),
            Err(IoError::InvalidData(_))
        ));
        assert!(matches!(decode(&[0u8; 40], 2), Err(IoError::InvalidData(_))));
    }

    #[test]
    fn test_default_is_proof_layout() {
        assert_eq!(
            RechargeToSideChain::default().version(),
            RECHARGE_TO_SIDE_CHAIN_VERSION_0
        );
    }
}
