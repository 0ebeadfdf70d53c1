// Copyright (C) 2017-2025 The ela-rs Project.
//
// coinbase.rs file belongs to the ela-rs project and is free
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

/// Payload of a coinbase transaction: opaque miner-chosen bytes.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CoinBase {
    pub coinbase_data: Vec<u8>,
}

impl CoinBase {
    pub fn new(coinbase_data: Vec<u8>) -> Self {
        Self { coinbase_data }
    }
}

impl VersionedPayload for CoinBase {
    fn serialize(&self, writer: &mut BinaryWriter, _version: u8) -> IoResult<()> {
        writer.write_var_bytes(&self.coinbase_data)
    }

    fn deserialize(
        reader: &mut MemoryReader,
        _version: u8,
        settings: &CodecSettings,
    ) -> IoResult<Self> {
        let coinbase_data = reader.read_var_bytes(settings.max_payload_data_size)?;
        Ok(Self { coinbase_data })
    }

    fn check_bounds(&self, _version: u8, settings: &CodecSettings) -> IoResult<()> {
        ensure_max(self.coinbase_data.len(), settings.max_payload_data_size)
    }

    /// The raw coinbase bytes, without their length prefix.
    fn data(&self, _version: u8) -> IoResult<Vec<u8>> {
        Ok(self.coinbase_data.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coinbase_data_is_raw() {
        let payload = CoinBase::new(vec![0xde, 0xad]);
        assert_eq!(payload.data(0).unwrap(), vec![0xde, 0xad]);

        let mut writer = BinaryWriter::new();
        payload.serialize(&mut writer, 0).unwrap();
        assert_eq!(writer.as_bytes(), &[0x02, 0xde, 0xad]);
    }
}
