// Copyright (C) 2017-2025 The ela-rs Project.
//
// record.rs file belongs to the ela-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use super::VersionedPayload;
use ela_config::CodecSettings;
use ela_io::serializable::helper::ensure_max;
use ela_io::{BinaryWriter, IoResult, MemoryReader};

/// An application-defined record stored on chain.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Record {
    pub record_type: String,
    pub record_data: Vec<u8>,
}

impl VersionedPayload for Record {
    fn serialize(&self, writer: &mut BinaryWriter, _version: u8) -> IoResult<()> {
        writer.write_var_string(&self.record_type)?;
        writer.write_var_bytes(&self.record_data)
    }

    fn deserialize(
        reader: &mut MemoryReader,
        _version: u8,
        settings: &CodecSettings,
    ) -> IoResult<Self> {
        Ok(Self {
            record_type: reader.read_var_string(settings.max_string_length)?,
            record_data: reader.read_var_bytes(settings.max_payload_data_size)?,
        })
    }

    fn check_bounds(&self, _version: u8, settings: &CodecSettings) -> IoResult<()> {
        ensure_max(self.record_type.len(), settings.max_string_length)?;
        ensure_max(self.record_data.len(), settings.max_payload_data_size)
    }
}
