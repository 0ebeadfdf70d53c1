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

//! # ela-rs: ELA transaction encoding in Rust
//!
//! The canonical binary codec of ELA transactions, their identity hash and
//! the redeem-script queries used to classify signers.
//!
//! ## Quick Start
//!
//! ```rust
//! use ela_rs::prelude::*;
//!
//! let tx = TransactionBuilder::new(Payload::TransferAsset)
//!     .nonce(7)
//!     .build();
//!
//! let hex = tx.to_hex().unwrap();
//! let decoded = Transaction::from_hex(&hex).unwrap();
//! assert_eq!(decoded, tx);
//! ```
//!
//! ## Architecture
//!
//! - [`ela_io`] - little-endian reader and writer, var-int framing
//! - [`ela_config`] - codec limits loaded from TOML
//! - [`ela_core`] - transactions, payloads, identity hash and script decoding

pub use ela_config as config;
pub use ela_core as core;
pub use ela_io as io;

mod logging;

pub use logging::{init_logging, init_tracing, LogConfig, LogFormat, LoggingError};

/// Common imports for ELA transaction handling
pub mod prelude {
    pub use crate::config::CodecSettings;
    pub use crate::core::payload::Payload;
    pub use crate::core::script::SignatureType;
    pub use crate::core::{
        CoreError, CoreResult, Fixed64, Program, Transaction, TransactionBuilder, TransactionType,
        TxAttribute, TxOutput, UInt168, UInt256, UtxoInput,
    };
}
