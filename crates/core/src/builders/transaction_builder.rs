// Copyright (C) 2017-2025 The ela-rs Project.
//
// transaction_builder.rs file belongs to the ela-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Builder for transactions.

use crate::payload::Payload;
use crate::transaction::{Program, Transaction, TxAttribute, TxOutput, UtxoInput};

/// Chainable construction of a [`Transaction`].
///
/// The transaction type follows the payload, so a built transaction never
/// carries a payload of the wrong variant.
#[derive(Debug)]
pub struct TransactionBuilder {
    tx: Transaction,
}

impl TransactionBuilder {
    /// Starts a transaction around `payload`.
    pub fn new(payload: Payload) -> Self {
        Self {
            tx: Transaction::with_payload(payload),
        }
    }

    /// Starts a plain asset transfer.
    pub fn transfer() -> Self {
        Self::new(Payload::TransferAsset)
    }

    pub fn payload_version(mut self, version: u8) -> Self {
        self.tx.set_payload_version(version);
        self
    }

    pub fn attribute(mut self, attribute: TxAttribute) -> Self {
        self.tx.add_attribute(attribute);
        self
    }

    /// Adds a nonce attribute so otherwise identical transactions hash apart.
    pub fn nonce(self, nonce: u64) -> Self {
        self.attribute(TxAttribute::nonce(nonce))
    }

    pub fn input(mut self, input: UtxoInput) -> Self {
        self.tx.add_input(input);
        self
    }

    pub fn output(mut self, output: TxOutput) -> Self {
        self.tx.add_output(output);
        self
    }

    pub fn lock_time(mut self, lock_time: u32) -> Self {
        self.tx.set_lock_time(lock_time);
        self
    }

    pub fn program(mut self, program: Program) -> Self {
        self.tx.add_program(program);
        self
    }

    /// Builds the transaction.
    pub fn build(self) -> Transaction {
        self.tx
    }
}

impl Default for TransactionBuilder {
    fn default() -> Self {
        Self::transfer()
    }
}
