// Copyright (C) 2017-2025 The ela-rs Project.
//
// program.rs file belongs to the ela-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use ela_config::MAX_SCRIPT_SIZE;
use ela_io::serializable::helper::{ensure_max, get_var_bytes_size};
use ela_io::{BinaryWriter, IoResult, MemoryReader, Serializable};
use std::fmt;

/// A signer's proof: the redeem script and the invocation script satisfying it.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Program {
    /// The redeem script defining the spending condition.
    pub code: Vec<u8>,
    /// The invocation script, usually the pushed signatures.
    pub parameter: Vec<u8>,
}

impl Program {
    pub fn new(code: Vec<u8>, parameter: Vec<u8>) -> Self {
        Self { code, parameter }
    }

    /// Encodes a program whose scripts must each fit `max_script_size`.
    pub fn serialize_with(&self, writer: &mut BinaryWriter, max_script_size: usize) -> IoResult<()> {
        ensure_max(self.parameter.len(), max_script_size)?;
        ensure_max(self.code.len(), max_script_size)?;
        writer.write_var_bytes(&self.parameter)?;
        writer.write_var_bytes(&self.code)
    }

    /// Decodes a program, bounding each script by `max_script_size`.
    pub fn deserialize_with(reader: &mut MemoryReader, max_script_size: usize) -> IoResult<Self> {
        // parameter precedes code on the wire
        let parameter = reader.read_var_bytes(max_script_size)?;
        let code = reader.read_var_bytes(max_script_size)?;
        Ok(Self { code, parameter })
    }
}

impl Serializable for Program {
    fn size(&self) -> usize {
        get_var_bytes_size(&self.parameter) + get_var_bytes_size(&self.code)
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        self.serialize_with(writer, MAX_SCRIPT_SIZE)
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        Self::deserialize_with(reader, MAX_SCRIPT_SIZE)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Program: {{ Code: {}, Parameter: {} }}",
            hex::encode(&self.code),
            hex::encode(&self.parameter)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ela_io::{IoError, SerializableExt};

    #[test]
    fn test_parameter_written_first() {
        let program = Program::new(vec![0xac], vec![0x40, 0x41]);
        let bytes = program.to_array().unwrap();
        assert_eq!(bytes, vec![0x02, 0x40, 0x41, 0x01, 0xac]);
        assert_eq!(Program::from_array(&bytes).unwrap(), program);
    }

    #[test]
    fn test_script_size_bound() {
        let program = Program::new(vec![0; 40], vec![]);
        let bytes = program.to_array().unwrap();
        let mut reader = MemoryReader::new(&bytes);
        assert_eq!(
            Program::deserialize_with(&mut reader, 35),
            Err(IoError::ExceedsMaximum { value: 40, max: 35 })
        );

        let mut writer = BinaryWriter::new();
        assert_eq!(
            program.serialize_with(&mut writer, 35),
            Err(IoError::ExceedsMaximum { value: 40, max: 35 })
        );
        assert!(writer.is_empty());
    }
}
