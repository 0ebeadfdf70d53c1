// Copyright (C) 2017-2025 The ela-rs Project.
//
// script.rs file belongs to the ela-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Redeem script classification.
//!
//! A standard script is `[0x21][33-byte key][CHECKSIG]`. A multi-signature
//! script is `[m][n x (0x21 + 33-byte key)][n][CHECKMULTISIG | CROSSCHAIN]`.
//! Scripts are attacker-supplied; every query checks lengths before slicing.

use crate::{CoreError, CoreResult};
use std::fmt;

/// Length of a standard single-key redeem script.
pub const PUBLIC_KEY_SCRIPT_LENGTH: usize = 35;

/// Length of one public key chunk: push opcode plus compressed key.
pub const PUBLIC_KEY_CHUNK_LENGTH: usize = PUBLIC_KEY_SCRIPT_LENGTH - 1;

/// Shortest multi-signature script: m, three key chunks, n and the opcode.
pub const MIN_MULTI_SIGN_CODE_LENGTH: usize = 1 + 3 * PUBLIC_KEY_CHUNK_LENGTH + 1 + 1;

/// Pushes the next 33 bytes.
pub const PUSH_BYTES33: u8 = 0x21;
/// CHECKSIG, final byte of a standard script.
pub const STANDARD: u8 = 0xac;
/// CHECKMULTISIG, final byte of a multi-signature script.
pub const MULTISIG: u8 = 0xae;
/// Final byte of a cross-chain multi-signature script.
pub const CROSSCHAIN: u8 = 0xaf;

/// The spending condition named by a redeem script's final opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignatureType {
    Standard,
    MultiSig,
    CrossChain,
}

impl SignatureType {
    pub fn opcode(&self) -> u8 {
        match self {
            SignatureType::Standard => STANDARD,
            SignatureType::MultiSig => MULTISIG,
            SignatureType::CrossChain => CROSSCHAIN,
        }
    }
}

impl TryFrom<u8> for SignatureType {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            STANDARD => Ok(SignatureType::Standard),
            MULTISIG => Ok(SignatureType::MultiSig),
            CROSSCHAIN => Ok(SignatureType::CrossChain),
            other => Err(CoreError::UnknownSignatureType(other)),
        }
    }
}

impl fmt::Display for SignatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SignatureType::Standard => "Standard",
            SignatureType::MultiSig => "MultiSig",
            SignatureType::CrossChain => "CrossChain",
        };
        f.write_str(name)
    }
}

/// Returns the final byte of a standard or candidate multi-signature script.
///
/// Only the length is checked: exactly 35 bytes, or at least 105. The
/// returned opcode is not validated; pass it to [`SignatureType::try_from`]
/// to interpret it.
pub fn transaction_type(code: &[u8]) -> CoreResult<u8> {
    let length = code.len();
    if length != PUBLIC_KEY_SCRIPT_LENGTH && length < MIN_MULTI_SIGN_CODE_LENGTH {
        return Err(CoreError::InvalidScriptLength(length));
    }
    code.last()
        .copied()
        .ok_or(CoreError::InvalidScriptLength(length))
}

/// Extracts the public key chunks of a multi-signature script, in order.
///
/// Each chunk keeps its leading push opcode.
pub fn multi_sign_public_keys(code: &[u8]) -> CoreResult<Vec<Vec<u8>>> {
    let opcode = code.last().copied();
    let is_multi_sign = matches!(opcode, Some(MULTISIG) | Some(CROSSCHAIN));
    if code.len() < MIN_MULTI_SIGN_CODE_LENGTH || !is_multi_sign {
        return Err(CoreError::NotMultiSign {
            length: code.len(),
            opcode,
        });
    }

    // strip m, then n and the opcode
    let keys = &code[1..code.len() - 2];
    if keys.len() % PUBLIC_KEY_CHUNK_LENGTH != 0 {
        return Err(CoreError::ScriptLengthMismatch(keys.len()));
    }
    Ok(keys
        .chunks_exact(PUBLIC_KEY_CHUNK_LENGTH)
        .map(<[u8]>::to_vec)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn multi_sign(n: u8, opcode: u8) -> Vec<u8> {
        let mut code = vec![0x52];
        for i in 0..n {
            code.push(PUSH_BYTES33);
            code.extend_from_slice(&[i; 33]);
        }
        code.push(0x50 + n);
        code.push(opcode);
        code
    }

    #[test]
    fn test_min_multi_sign_length() {
        assert_eq!(MIN_MULTI_SIGN_CODE_LENGTH, 105);
        assert_eq!(multi_sign(3, MULTISIG).len(), 105);
    }

    #[test]
    fn test_standard_type() {
        let mut code = vec![PUSH_BYTES33];
        code.extend_from_slice(&[2; 33]);
        code.push(STANDARD);
        assert_eq!(transaction_type(&code), Ok(STANDARD));
        assert_eq!(
            SignatureType::try_from(STANDARD),
            Ok(SignatureType::Standard)
        );
    }

    #[test]
    fn test_cross_chain_keys() {
        let keys = multi_sign_public_keys(&multi_sign(4, CROSSCHAIN)).unwrap();
        assert_eq!(keys.len(), 4);
        assert_eq!(keys[3][0], PUSH_BYTES33);
        assert_eq!(&keys[3][1..], &[3; 33]);
    }

    #[test]
    fn test_ragged_key_section() {
        let mut code = multi_sign(3, MULTISIG);
        code.insert(5, 0x00);
        assert_eq!(
            multi_sign_public_keys(&code),
            Err(CoreError::ScriptLengthMismatch(103))
        );
    }

    #[test]
    fn test_empty_script() {
        assert_eq!(transaction_type(&[]), Err(CoreError::InvalidScriptLength(0)));
        assert_eq!(
            multi_sign_public_keys(&[]),
            Err(CoreError::NotMultiSign {
                length: 0,
                opcode: None
            })
        );
    }

    #[test]
    fn test_unknown_signature_type() {
        assert_eq!(
            SignatureType::try_from(0x00),
            Err(CoreError::UnknownSignatureType(0x00))
        );
        assert_eq!(SignatureType::MultiSig.opcode(), MULTISIG);
    }
}
