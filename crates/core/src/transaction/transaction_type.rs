// Copyright (C) 2017-2025 The ela-rs Project.
//
// transaction_type.rs file belongs to the ela-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::CoreError;
use std::fmt;

/// The leading type tag of a transaction; selects the payload variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[repr(u8)]
pub enum TransactionType {
    CoinBase = 0x00,
    RegisterAsset = 0x01,
    TransferAsset = 0x02,
    Record = 0x03,
    Deploy = 0x04,
    SideChainPow = 0x05,
    RechargeToSideChain = 0x06,
    WithdrawFromSideChain = 0x07,
    TransferCrossChainAsset = 0x08,
}

impl TransactionType {
    pub fn name(&self) -> &'static str {
        match self {
            TransactionType::CoinBase => "CoinBase",
            TransactionType::RegisterAsset => "RegisterAsset",
            TransactionType::TransferAsset => "TransferAsset",
            TransactionType::Record => "Record",
            TransactionType::Deploy => "Deploy",
            TransactionType::SideChainPow => "SideChainPow",
            TransactionType::RechargeToSideChain => "RechargeToSideChain",
            TransactionType::WithdrawFromSideChain => "WithdrawFromSideChain",
            TransactionType::TransferCrossChainAsset => "TransferCrossChainAsset",
        }
    }
}

impl From<TransactionType> for u8 {
    fn from(value: TransactionType) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for TransactionType {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x00 => Ok(TransactionType::CoinBase),
            0x01 => Ok(TransactionType::RegisterAsset),
            0x02 => Ok(TransactionType::TransferAsset),
            0x03 => Ok(TransactionType::Record),
            0x04 => Ok(TransactionType::Deploy),
            0x05 => Ok(TransactionType::SideChainPow),
            0x06 => Ok(TransactionType::RechargeToSideChain),
            0x07 => Ok(TransactionType::WithdrawFromSideChain),
            0x08 => Ok(TransactionType::TransferCrossChainAsset),
            other => Err(CoreError::UnknownPayloadType(other)),
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
