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

//! Builder patterns for ELA transactions.

pub mod transaction_builder;

pub use transaction_builder::TransactionBuilder;
