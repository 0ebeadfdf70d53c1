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

use thiserror::Error;

/// Errors raised by the primitive reader and writer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IoError {
    /// The stream ended before the requested number of bytes was available.
    #[error("unexpected end of stream: needed {needed} bytes, {remaining} remaining")]
    UnexpectedEof {
        /// Bytes the read required.
        needed: usize,
        /// Bytes that were left in the stream.
        remaining: usize,
    },

    /// A length or count prefix exceeded the caller's bound.
    #[error("value {value} exceeds maximum {max}")]
    ExceedsMaximum {
        /// Decoded value.
        value: u64,
        /// Maximum accepted by the caller.
        max: u64,
    },

    /// The bytes were present but did not describe a valid value.
    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl IoError {
    /// Builds an [`IoError::InvalidData`] from anything printable.
    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::InvalidData(message.into())
    }

    /// Returns true when the error was caused by a truncated stream.
    pub fn is_eof(&self) -> bool {
        matches!(self, Self::UnexpectedEof { .. })
    }
}

/// Result alias used throughout the IO layer.
pub type IoResult<T> = Result<T, IoError>;
