// Copyright (C) 2017-2025 The ela-rs Project.
//
// core.rs file belongs to the ela-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Core Transaction struct, its accessors and the identity hash.

use super::{Program, TransactionType, TxAttribute, TxOutput, UtxoInput};
use crate::payload::Payload;
use crate::script;
use crate::{CoreError, CoreResult, UInt256};
use parking_lot::Mutex;
use std::fmt;
use tracing::{trace, warn};

/// Returned by [`Transaction::get_size`] when the transaction cannot be serialized.
pub const INVALID_TRANSACTION_SIZE: isize = -1;

/// An ELA transaction.
///
/// The unsigned encoding covers everything except `programs`; it is both the
/// signing target and the input of the identity hash. Every setter that
/// touches the unsigned encoding drops the cached hash.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct Transaction {
    pub(crate) tx_type: TransactionType,
    pub(crate) payload_version: u8,
    pub(crate) payload: Option<Payload>,
    pub(crate) attributes: Vec<TxAttribute>,
    pub(crate) inputs: Vec<UtxoInput>,
    pub(crate) outputs: Vec<TxOutput>,
    pub(crate) lock_time: u32,
    pub(crate) programs: Vec<Program>,

    /// Cached identity hash.
    #[serde(skip)]
    pub(crate) hash: Mutex<Option<UInt256>>,
}

impl Transaction {
    /// Creates an empty transaction of the given type without a payload.
    pub fn new(tx_type: TransactionType) -> Self {
        Self {
            tx_type,
            payload_version: 0,
            payload: None,
            attributes: Vec::new(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            lock_time: 0,
            programs: Vec::new(),
            hash: Mutex::new(None),
        }
    }

    /// Creates a transaction whose type is taken from the payload variant.
    pub fn with_payload(payload: Payload) -> Self {
        let mut tx = Self::new(payload.tx_type());
        tx.payload = Some(payload);
        tx
    }

    pub fn tx_type(&self) -> TransactionType {
        self.tx_type
    }

    pub fn set_tx_type(&mut self, tx_type: TransactionType) {
        self.tx_type = tx_type;
        self.clear_hash();
    }

    pub fn payload_version(&self) -> u8 {
        self.payload_version
    }

    pub fn set_payload_version(&mut self, version: u8) {
        self.payload_version = version;
        self.clear_hash();
    }

    pub fn payload(&self) -> Option<&Payload> {
        self.payload.as_ref()
    }

    pub fn set_payload(&mut self, payload: Payload) {
        self.payload = Some(payload);
        self.clear_hash();
    }

    pub fn attributes(&self) -> &[TxAttribute] {
        &self.attributes
    }

    pub fn set_attributes(&mut self, attributes: Vec<TxAttribute>) {
        self.attributes = attributes;
        self.clear_hash();
    }

    pub fn add_attribute(&mut self, attribute: TxAttribute) {
        self.attributes.push(attribute);
        self.clear_hash();
    }

    pub fn inputs(&self) -> &[UtxoInput] {
        &self.inputs
    }

    pub fn set_inputs(&mut self, inputs: Vec<UtxoInput>) {
        self.inputs = inputs;
        self.clear_hash();
    }

    pub fn add_input(&mut self, input: UtxoInput) {
        self.inputs.push(input);
        self.clear_hash();
    }

    pub fn outputs(&self) -> &[TxOutput] {
        &self.outputs
    }

    pub fn set_outputs(&mut self, outputs: Vec<TxOutput>) {
        self.outputs = outputs;
        self.clear_hash();
    }

    pub fn add_output(&mut self, output: TxOutput) {
        self.outputs.push(output);
        self.clear_hash();
    }

    pub fn lock_time(&self) -> u32 {
        self.lock_time
    }

    pub fn set_lock_time(&mut self, lock_time: u32) {
        self.lock_time = lock_time;
        self.clear_hash();
    }

    pub fn programs(&self) -> &[Program] {
        &self.programs
    }

    // Programs are outside the unsigned encoding, so the hash stays valid.
    pub fn set_programs(&mut self, programs: Vec<Program>) {
        self.programs = programs;
    }

    pub fn add_program(&mut self, program: Program) {
        self.programs.push(program);
    }

    pub fn is_coinbase(&self) -> bool {
        self.tx_type == TransactionType::CoinBase
    }

    /// Returns the identity hash: double SHA-256 of the unsigned encoding.
    ///
    /// The value is computed once and cached until a field of the unsigned
    /// encoding changes or [`Transaction::set_hash`] overrides it.
    pub fn hash(&self) -> CoreResult<UInt256> {
        let mut cached = self.hash.lock();
        if let Some(hash) = *cached {
            return Ok(hash);
        }
        let hash = UInt256::double_sha256(&self.to_unsigned_bytes()?);
        trace!(target: "ela::transaction", %hash, "computed transaction hash");
        *cached = Some(hash);
        Ok(hash)
    }

    /// Overwrites the cached identity hash without verifying it.
    ///
    /// Only use this with hashes that were validated elsewhere, for example
    /// when loading a transaction from a store that checked it on insert.
    /// [`Transaction::hash`] returns `hash` verbatim until the next mutation.
    pub fn set_hash(&mut self, hash: UInt256) {
        let previous = self.hash.get_mut().replace(hash);
        if let Some(previous) = previous.filter(|previous| *previous != hash) {
            warn!(
                target: "ela::transaction",
                %previous,
                injected = %hash,
                "trusted hash replaces a different cached hash"
            );
        }
    }

    /// The cached hash, if one has been computed or injected.
    pub fn cached_hash(&self) -> Option<UInt256> {
        *self.hash.lock()
    }

    /// Drops the cached hash so the next [`Transaction::hash`] recomputes it.
    pub fn clear_hash(&mut self) {
        *self.hash.get_mut() = None;
    }

    /// The redeem script of the first attached program.
    pub fn get_transaction_code(&self) -> CoreResult<&[u8]> {
        self.programs
            .first()
            .map(|program| program.code.as_slice())
            .ok_or(CoreError::NoProgramAttached)
    }

    /// The final opcode of the first program's redeem script.
    ///
    /// See [`script::transaction_type`].
    pub fn get_transaction_type(&self) -> CoreResult<u8> {
        script::transaction_type(self.get_transaction_code()?)
    }

    /// The 34-byte public key chunks of a multi-signature redeem script.
    ///
    /// See [`script::multi_sign_public_keys`].
    pub fn get_multi_sign_public_keys(&self) -> CoreResult<Vec<Vec<u8>>> {
        script::multi_sign_public_keys(self.get_transaction_code()?)
    }
}

impl Clone for Transaction {
    fn clone(&self) -> Self {
        Self {
            tx_type: self.tx_type,
            payload_version: self.payload_version,
            payload: self.payload.clone(),
            attributes: self.attributes.clone(),
            inputs: self.inputs.clone(),
            outputs: self.outputs.clone(),
            lock_time: self.lock_time,
            programs: self.programs.clone(),
            hash: Mutex::new(None),
        }
    }
}

impl PartialEq for Transaction {
    fn eq(&self, other: &Self) -> bool {
        self.tx_type == other.tx_type
            && self.payload_version == other.payload_version
            && self.payload == other.payload
            && self.attributes == other.attributes
            && self.inputs == other.inputs
            && self.outputs == other.outputs
            && self.lock_time == other.lock_time
            && self.programs == other.programs
    }
}

impl Eq for Transaction {}

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, name: &str, items: &[T]) -> fmt::Result {
    write!(f, "\t{name}: [")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    writeln!(f, "]")
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hash = match self.hash() {
            Ok(hash) => hash.to_string(),
            Err(err) => format!("<{err}>"),
        };
        let payload = match &self.payload {
            Some(payload) => payload
                .data(self.payload_version)
                .map(hex::encode)
                .unwrap_or_else(|err| format!("<{err}>")),
            None => "<missing>".to_string(),
        };

        writeln!(f, "Transaction: {{")?;
        writeln!(f, "\tHash: {hash}")?;
        writeln!(f, "\tTxType: {}", self.tx_type)?;
        writeln!(f, "\tPayloadVersion: {}", self.payload_version)?;
        writeln!(f, "\tPayload: {payload}")?;
        write_list(f, "Attributes", &self.attributes)?;
        write_list(f, "UTXOInputs", &self.inputs)?;
        write_list(f, "Outputs", &self.outputs)?;
        writeln!(f, "\tLockTime: {}", self.lock_time)?;
        write_list(f, "Programs", &self.programs)?;
        writeln!(f, "}}")
    }
}
