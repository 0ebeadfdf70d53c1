// Copyright (C) 2017-2025 The ela-rs Project.
//
// deploy.rs file belongs to the ela-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use super::VersionedPayload;
use crate::UInt168;
use ela_config::CodecSettings;
use ela_io::serializable::helper::ensure_max;
use ela_io::{BinaryWriter, IoResult, MemoryReader, Serializable};

/// Contract code together with its calling convention.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FunctionCode {
    pub code: Vec<u8>,
    pub parameter_types: Vec<u8>,
    pub return_type: u8,
}

/// Deploys a contract with its descriptive metadata.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Deploy {
    pub code: FunctionCode,
    pub name: String,
    pub code_version: String,
    pub author: String,
    pub email: String,
    pub description: String,
    pub program_hash: UInt168,
}

impl VersionedPayload for Deploy {
    fn serialize(&self, writer: &mut BinaryWriter, _version: u8) -> IoResult<()> {
        writer.write_var_bytes(&self.code.code)?;
        writer.write_var_bytes(&self.code.parameter_types)?;
        writer.write_u8(self.code.return_type)?;
        for field in [
            &self.name,
            &self.code_version,
            &self.author,
            &self.email,
            &self.description,
        ] {
            writer.write_var_string(field)?;
        }
        self.program_hash.serialize(writer)
    }

    fn deserialize(
        reader: &mut MemoryReader,
        _version: u8,
        settings: &CodecSettings,
    ) -> IoResult<Self> {
        let code = FunctionCode {
            code: reader.read_var_bytes(settings.max_payload_data_size)?,
            parameter_types: reader.read_var_bytes(settings.max_string_length)?,
            return_type: reader.read_u8()?,
        };
        let max = settings.max_string_length;
        Ok(Self {
            code,
            name: reader.read_var_string(max)?,
            code_version: reader.read_var_string(max)?,
            author: reader.read_var_string(max)?,
            email: reader.read_var_string(max)?,
            description: reader.read_var_string(max)?,
            program_hash: UInt168::deserialize(reader)?,
        })
    }

    fn check_bounds(&self, _version: u8, settings: &CodecSettings) -> IoResult<()> {
        ensure_max(self.code.code.len(), settings.max_payload_data_size)?;
        ensure_max(self.code.parameter_types.len(), settings.max_string_length)?;
        for field in [
            &self.name,
            &self.code_version,
            &self.author,
            &self.email,
            &self.description,
        ] {
            ensure_max(field.len(), settings.max_string_length)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deploy_round_trip() {
        let payload = Deploy {
            code: FunctionCode {
                code: vec![0x51, 0x52, 0x93],
                parameter_types: vec![0x05],
                return_type: 0x02,
            },
            name: "adder".to_string(),
            code_version: "1.0".to_string(),
            author: "dev".to_string(),
            email: "dev@example.org".to_string(),
            description: "adds two numbers".to_string(),
            program_hash: UInt168::new([0x1f; 21]),
        };
        let bytes = payload.data(0).unwrap();
        let decoded =
            Deploy::deserialize(&mut MemoryReader::new(&bytes), 0, &CodecSettings::default())
                .unwrap();
        assert_eq!(decoded, payload);
    }
}
