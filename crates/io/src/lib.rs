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

//! # ELA IO
//!
//! Byte-stream primitives shared by every ELA wire structure: a little-endian
//! [`BinaryWriter`], a bounds-checked [`MemoryReader`], the compact var-int
//! encoding, and the [`Serializable`] contract for self-delimiting elements.

mod binary_writer;
mod error;
mod memory_reader;
pub mod serializable;

pub use binary_writer::BinaryWriter;
pub use error::{IoError, IoResult};
pub use memory_reader::MemoryReader;
pub use serializable::{helper, Serializable, SerializableExt};
