// Copyright (C) 2017-2025 The ela-rs Project.
//
// lib.rs file belongs to the ela-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! # ELA Core
//!
//! The ELA transaction model and its canonical binary encoding.
//!
//! ## Example
//!
//! ```rust
//! use ela_core::payload::Payload;
//! use ela_core::{Transaction, TransactionBuilder};
//!
//! let tx = TransactionBuilder::new(Payload::TransferAsset)
//!     .nonce(42)
//!     .lock_time(100)
//!     .build();
//!
//! let bytes = tx.to_bytes().unwrap();
//! let decoded = Transaction::from_bytes(&bytes).unwrap();
//! assert_eq!(decoded.hash().unwrap(), tx.hash().unwrap());
//! ```
//!
//! ## Architecture
//!
//! - **Basic Types**: `uint256`, `uint168`, `fixed64`
//! - **Transactions**: `transaction`, `payload` - the entity, its codec and payload variants
//! - **Scripts**: `script` - redeem script classification
//! - **Builders**: `builders` - chainable transaction construction

/// Builder pattern implementations
pub mod builders;
/// Core error types
pub mod error;
/// Fixed-point amounts
pub mod fixed64;
/// Type-specific transaction payloads
pub mod payload;
/// Redeem script classification
pub mod script;
/// Transaction entity and codec
pub mod transaction;
/// 168-bit program hash
pub mod uint168;
/// 256-bit hash value
pub mod uint256;

pub use builders::TransactionBuilder;
pub use error::{CoreError, CoreResult, Section};
pub use fixed64::Fixed64;
pub use payload::{Payload, VersionedPayload};
pub use script::SignatureType;
pub use transaction::{
    AttributeUsage, Program, Transaction, TransactionType, TxAttribute, TxOutput, UtxoInput,
    INVALID_TRANSACTION_SIZE,
};
pub use uint168::UInt168;
pub use uint256::UInt256;
