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

//! Transaction module for ELA transactions.
//!
//! - `core` - the Transaction struct, accessors and identity hash
//! - `serialization` - the canonical unsigned and full encodings
//! - `attributes`, `input`, `output`, `program` - sub-element codecs
//! - `transaction_type` - the type tag selecting the payload variant

pub mod attributes;
pub mod core;
pub mod input;
pub mod output;
pub mod program;
pub mod serialization;
pub mod transaction_type;

pub use attributes::{AttributeUsage, TxAttribute};
pub use self::core::{Transaction, INVALID_TRANSACTION_SIZE};
pub use input::UtxoInput;
pub use output::TxOutput;
pub use program::Program;
pub use transaction_type::TransactionType;
