// Copyright (C) 2017-2025 The ela-rs Project.
//
// register_asset.rs file belongs to the ela-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use super::VersionedPayload;
use crate::{Fixed64, UInt168};
use ela_config::CodecSettings;
use ela_io::serializable::helper::ensure_max;
use ela_io::{BinaryWriter, IoResult, MemoryReader, Serializable};

/// Description of a registered asset.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Asset {
    pub name: String,
    pub description: String,
    /// Number of decimal places the asset can be divided into.
    pub precision: u8,
    pub asset_type: u8,
    pub record_type: u8,
}

impl Asset {
    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_var_string(&self.name)?;
        writer.write_var_string(&self.description)?;
        writer.write_u8(self.precision)?;
        writer.write_u8(self.asset_type)?;
        writer.write_u8(self.record_type)
    }

    fn deserialize(reader: &mut MemoryReader, settings: &CodecSettings) -> IoResult<Self> {
        Ok(Self {
            name: reader.read_var_string(settings.max_string_length)?,
            description: reader.read_var_string(settings.max_string_length)?,
            precision: reader.read_u8()?,
            asset_type: reader.read_u8()?,
            record_type: reader.read_u8()?,
        })
    }
}

/// Registers a new asset with its total amount and controlling program.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RegisterAsset {
    pub asset: Asset,
    pub amount: Fixed64,
    pub controller: UInt168,
}

impl VersionedPayload for RegisterAsset {
    fn serialize(&self, writer: &mut BinaryWriter, _version: u8) -> IoResult<()> {
        self.asset.serialize(writer)?;
        self.amount.serialize(writer)?;
        self.controller.serialize(writer)
    }

    fn deserialize(
        reader: &mut MemoryReader,
        _version: u8,
        settings: &CodecSettings,
    ) -> IoResult<Self> {
        Ok(Self {
            asset: Asset::deserialize(reader, settings)?,
            amount: Fixed64::deserialize(reader)?,
            controller: UInt168::deserialize(reader)?,
        })
    }

    fn check_bounds(&self, _version: u8, settings: &CodecSettings) -> IoResult<()> {
        ensure_max(self.asset.name.len(), settings.max_string_length)?;
        ensure_max(self.asset.description.len(), settings.max_string_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_asset_layout() {
        let payload = RegisterAsset {
            asset: Asset {
                name: "ELA".to_string(),
                description: String::new(),
                precision: 8,
                asset_type: 0,
                record_type: 0,
            },
            amount: Fixed64::from_coins(33_000_000),
            controller: UInt168::new([0x12; 21]),
        };
        let bytes = payload.data(0).unwrap();
        // name(4) + description(1) + 3 flags + amount(8) + controller(21)
        assert_eq!(bytes.len(), 37);
        assert_eq!(&bytes[..4], b"\x03ELA");
        assert_eq!(bytes[5], 8);

        let decoded = RegisterAsset::deserialize(
            &mut MemoryReader::new(&bytes),
            0,
            &CodecSettings::default(),
        )
        .unwrap();
        assert_eq!(decoded, payload);
    }

    #[test]
    fn test_asset_name_bounded() {
        let payload = RegisterAsset {
            asset: Asset {
                name: "x".repeat(20),
                ..Asset::default()
            },
            ..RegisterAsset::default()
        };
        let bytes = payload.data(0).unwrap();
        let settings = CodecSettings {
            max_string_length: 10,
            ..CodecSettings::default()
        };
        assert!(RegisterAsset::deserialize(&mut MemoryReader::new(&bytes), 0, &settings).is_err());
    }
}
