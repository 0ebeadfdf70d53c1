// Copyright (C) 2017-2025 The ela-rs Project.
//
// error.rs file belongs to the ela-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Error types for the ELA core crate.

use crate::transaction::TransactionType;
use ela_io::IoError;
use std::fmt;
use thiserror::Error;

/// The part of the transaction layout an encode or decode step was handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// The leading transaction type byte.
    TxType,
    /// The payload version byte.
    PayloadVersion,
    /// The type-specific payload.
    Payload,
    /// The attribute count or an attribute entry.
    Attributes,
    /// The input count or an input entry.
    Inputs,
    /// The output count or an output entry.
    Outputs,
    /// The trailing lock time.
    LockTime,
    /// The program count or a program entry.
    Programs,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::TxType => "transaction type",
            Section::PayloadVersion => "payload version",
            Section::Payload => "payload",
            Section::Attributes => "attributes",
            Section::Inputs => "inputs",
            Section::Outputs => "outputs",
            Section::LockTime => "lock time",
            Section::Programs => "programs",
        };
        f.write_str(name)
    }
}

/// Core module errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Serialization was attempted before a payload was set.
    #[error("transaction payload is missing")]
    PayloadMissing,

    /// The type tag does not name a known payload variant.
    #[error("unknown payload type {0:#04x}")]
    UnknownPayloadType(u8),

    /// The payload variant does not belong to the transaction's type tag.
    #[error("payload of type {payload} does not match transaction type {tx_type}")]
    PayloadTypeMismatch {
        /// Type tag stored on the transaction.
        tx_type: TransactionType,
        /// Type the payload variant belongs to.
        payload: TransactionType,
    },

    /// Writing one section of the transaction failed.
    #[error("failed to serialize transaction {section}")]
    Encode {
        /// Section being written.
        section: Section,
        /// Underlying writer error.
        #[source]
        source: IoError,
    },

    /// Reading one section of the transaction failed.
    #[error("failed to deserialize transaction {section}")]
    Decode {
        /// Section being read.
        section: Section,
        /// Underlying reader error.
        #[source]
        source: IoError,
    },

    /// A whole-buffer decode left unread bytes behind.
    #[error("{0} trailing bytes after transaction")]
    TrailingBytes(usize),

    /// Script queries need at least one attached program.
    #[error("no program attached, redeem script not found")]
    NoProgramAttached,

    /// The redeem script is neither a standard nor a multi-signature script.
    #[error("invalid redeem script length {0}, not a standard or multi sign script")]
    InvalidScriptLength(usize),

    /// The redeem script is not a multi-signature script.
    #[error("not a valid multi sign script (length {length}, opcode {opcode:?})")]
    NotMultiSign {
        /// Script length in bytes.
        length: usize,
        /// Final byte of the script, if any.
        opcode: Option<u8>,
    },

    /// The public key section is not a whole number of key chunks.
    #[error("multi sign public key section of {0} bytes is not a multiple of 34")]
    ScriptLengthMismatch(usize),

    /// The byte is not a known signature type opcode.
    #[error("unknown signature type {0:#04x}")]
    UnknownSignatureType(u8),

    /// A fixed-size value was built from a slice of the wrong length.
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Required length.
        expected: usize,
        /// Supplied length.
        actual: usize,
    },

    /// Hex text could not be decoded.
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),
}

impl CoreError {
    pub(crate) fn encode(section: Section) -> impl FnOnce(IoError) -> Self {
        move |source| CoreError::Encode { section, source }
    }

    pub(crate) fn decode(section: Section) -> impl FnOnce(IoError) -> Self {
        move |source| CoreError::Decode { section, source }
    }

    /// The section an encode or decode failure happened in.
    pub fn section(&self) -> Option<Section> {
        match self {
            CoreError::Encode { section, .. } | CoreError::Decode { section, .. } => Some(*section),
            _ => None,
        }
    }

    /// Returns true when the failure was caused by a truncated byte stream.
    pub fn is_truncation(&self) -> bool {
        match self {
            CoreError::Encode { source, .. } | CoreError::Decode { source, .. } => source.is_eof(),
            _ => false,
        }
    }
}

/// Result type for core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
