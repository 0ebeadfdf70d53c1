// Copyright (C) 2017-2025 The ela-rs Project.
//
// serialization.rs file belongs to the ela-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Canonical binary encoding of transactions.
//!
//! Layout of the unsigned form:
//!
//! ```text
//! tx_type u8 | payload_version u8 | payload | var_int + attributes
//!     | var_int + inputs | var_int + outputs | lock_time u32 LE
//! ```
//!
//! The full form appends `var_int + programs`.

use super::core::{Transaction, INVALID_TRANSACTION_SIZE};
use super::{Program, TransactionType, TxAttribute, TxOutput, UtxoInput};
use crate::error::Section;
use crate::payload::Payload;
use crate::{CoreError, CoreResult};
use ela_config::CodecSettings;
use ela_io::serializable::helper::{ensure_max, serialize_array_bounded, MAX_PREALLOCATED_ITEMS};
use ela_io::{BinaryWriter, IoResult, MemoryReader, Serializable};
use tracing::debug;

/// Reads a var-int count bounded by `max`, then that many elements.
fn read_list<T>(
    reader: &mut MemoryReader,
    max: usize,
    mut read: impl FnMut(&mut MemoryReader) -> IoResult<T>,
) -> IoResult<Vec<T>> {
    let count = reader.read_var_int(max as u64)? as usize;
    let mut items = Vec::with_capacity(count.min(MAX_PREALLOCATED_ITEMS));
    for _ in 0..count {
        items.push(read(reader)?);
    }
    Ok(items)
}

/// Writes a var-int count bounded by `max`, then every element.
fn write_list<T>(
    writer: &mut BinaryWriter,
    items: &[T],
    max: usize,
    mut write: impl FnMut(&T, &mut BinaryWriter) -> IoResult<()>,
) -> IoResult<()> {
    ensure_max(items.len(), max)?;
    writer.write_var_int(items.len() as u64)?;
    for item in items {
        write(item, writer)?;
    }
    Ok(())
}

impl Transaction {
    /// Writes the unsigned encoding with default limits.
    pub fn serialize_unsigned(&self, writer: &mut BinaryWriter) -> CoreResult<()> {
        self.serialize_unsigned_with(writer, &CodecSettings::default())
    }

    /// Writes the unsigned encoding: everything but the programs.
    ///
    /// Counts and lengths are checked against the same `settings` bounds the
    /// decoder applies.
    pub fn serialize_unsigned_with(
        &self,
        writer: &mut BinaryWriter,
        settings: &CodecSettings,
    ) -> CoreResult<()> {
        let payload = self.payload.as_ref().ok_or(CoreError::PayloadMissing)?;
        if payload.tx_type() != self.tx_type {
            return Err(CoreError::PayloadTypeMismatch {
                tx_type: self.tx_type,
                payload: payload.tx_type(),
            });
        }

        writer
            .write_u8(self.tx_type.into())
            .map_err(CoreError::encode(Section::TxType))?;
        writer
            .write_u8(self.payload_version)
            .map_err(CoreError::encode(Section::PayloadVersion))?;
        payload
            .check_bounds(self.payload_version, settings)
            .and_then(|()| payload.serialize(writer, self.payload_version))
            .map_err(CoreError::encode(Section::Payload))?;
        write_list(writer, &self.attributes, settings.max_attributes, |attr, w| {
            attr.serialize_with(w, settings.max_script_size)
        })
        .map_err(CoreError::encode(Section::Attributes))?;
        serialize_array_bounded(&self.inputs, settings.max_inputs, writer)
            .map_err(CoreError::encode(Section::Inputs))?;
        serialize_array_bounded(&self.outputs, settings.max_outputs, writer)
            .map_err(CoreError::encode(Section::Outputs))?;
        writer
            .write_u32(self.lock_time)
            .map_err(CoreError::encode(Section::LockTime))
    }

    /// Writes the full encoding with default limits.
    pub fn serialize(&self, writer: &mut BinaryWriter) -> CoreResult<()> {
        self.serialize_with(writer, &CodecSettings::default())
    }

    /// Writes the full encoding: the unsigned form followed by the programs.
    pub fn serialize_with(&self, writer: &mut BinaryWriter, settings: &CodecSettings) -> CoreResult<()> {
        self.serialize_unsigned_with(writer, settings)?;
        write_list(writer, &self.programs, settings.max_programs, |program, w| {
            program.serialize_with(w, settings.max_script_size)
        })
        .map_err(CoreError::encode(Section::Programs))
    }

    /// Decodes an unsigned transaction with default limits.
    pub fn deserialize_unsigned(reader: &mut MemoryReader) -> CoreResult<Self> {
        Self::deserialize_unsigned_with(reader, &CodecSettings::default())
    }

    /// Decodes an unsigned transaction, bounding every count by `settings`.
    pub fn deserialize_unsigned_with(
        reader: &mut MemoryReader,
        settings: &CodecSettings,
    ) -> CoreResult<Self> {
        let tag = reader
            .read_u8()
            .map_err(CoreError::decode(Section::TxType))?;
        let tx_type = TransactionType::try_from(tag)?;
        Self::deserialize_unsigned_without_type(reader, tx_type, settings)
    }

    /// Decodes the rest of an unsigned transaction whose type tag has already
    /// been consumed from `reader`.
    pub fn deserialize_unsigned_without_type(
        reader: &mut MemoryReader,
        tx_type: TransactionType,
        settings: &CodecSettings,
    ) -> CoreResult<Self> {
        let payload_version = reader
            .read_u8()
            .map_err(CoreError::decode(Section::PayloadVersion))?;

        let mut payload = Payload::create(tx_type);
        payload
            .deserialize(reader, payload_version, settings)
            .map_err(CoreError::decode(Section::Payload))?;

        let attributes = read_list(reader, settings.max_attributes, |r| {
            TxAttribute::deserialize_with(r, settings.max_script_size)
        })
        .map_err(CoreError::decode(Section::Attributes))?;
        let inputs = read_list(reader, settings.max_inputs, UtxoInput::deserialize)
            .map_err(CoreError::decode(Section::Inputs))?;
        let outputs = read_list(reader, settings.max_outputs, TxOutput::deserialize)
            .map_err(CoreError::decode(Section::Outputs))?;
        let lock_time = reader
            .read_u32()
            .map_err(CoreError::decode(Section::LockTime))?;

        let mut tx = Transaction::new(tx_type);
        tx.payload_version = payload_version;
        tx.payload = Some(payload);
        tx.attributes = attributes;
        tx.inputs = inputs;
        tx.outputs = outputs;
        tx.lock_time = lock_time;
        Ok(tx)
    }

    /// Decodes a full transaction with default limits.
    pub fn deserialize(reader: &mut MemoryReader) -> CoreResult<Self> {
        Self::deserialize_with(reader, &CodecSettings::default())
    }

    /// Decodes a full transaction, bounding every count by `settings`.
    pub fn deserialize_with(reader: &mut MemoryReader, settings: &CodecSettings) -> CoreResult<Self> {
        let mut tx = Self::deserialize_unsigned_with(reader, settings)?;
        tx.programs = read_list(reader, settings.max_programs, |r| {
            Program::deserialize_with(r, settings.max_script_size)
        })
        .map_err(CoreError::decode(Section::Programs))?;

        debug!(
            target: "ela::transaction",
            tx_type = %tx.tx_type,
            attributes = tx.attributes.len(),
            inputs = tx.inputs.len(),
            outputs = tx.outputs.len(),
            programs = tx.programs.len(),
            "decoded transaction"
        );
        Ok(tx)
    }

    /// Byte length of the full encoding, or [`INVALID_TRANSACTION_SIZE`] if
    /// the transaction cannot be serialized.
    pub fn get_size(&self) -> isize {
        match self.to_bytes() {
            Ok(bytes) => bytes.len() as isize,
            Err(_) => INVALID_TRANSACTION_SIZE,
        }
    }

    /// The full encoding as a byte vector.
    pub fn to_bytes(&self) -> CoreResult<Vec<u8>> {
        self.to_bytes_with(&CodecSettings::default())
    }

    /// The full encoding, checked against `settings`.
    pub fn to_bytes_with(&self, settings: &CodecSettings) -> CoreResult<Vec<u8>> {
        let mut writer = BinaryWriter::new();
        self.serialize_with(&mut writer, settings)?;
        Ok(writer.into_bytes())
    }

    /// The unsigned encoding as a byte vector.
    pub fn to_unsigned_bytes(&self) -> CoreResult<Vec<u8>> {
        let mut writer = BinaryWriter::new();
        self.serialize_unsigned(&mut writer)?;
        Ok(writer.into_bytes())
    }

    /// The full encoding as lowercase hex.
    pub fn to_hex(&self) -> CoreResult<String> {
        self.to_bytes().map(hex::encode)
    }

    /// Decodes a full transaction from the start of `data`.
    ///
    /// Bytes after the transaction are ignored; use
    /// [`Transaction::from_bytes_with`] with strict settings to reject them.
    pub fn from_bytes(data: &[u8]) -> CoreResult<Self> {
        Self::from_bytes_with(data, &CodecSettings::default())
    }

    /// Decodes a full transaction from `data` using `settings`.
    pub fn from_bytes_with(data: &[u8], settings: &CodecSettings) -> CoreResult<Self> {
        let mut reader = MemoryReader::new(data);
        let tx = Self::deserialize_with(&mut reader, settings)?;
        if settings.reject_trailing_bytes && !reader.is_empty() {
            return Err(CoreError::TrailingBytes(reader.remaining()));
        }
        Ok(tx)
    }

    /// Decodes a full transaction from hex, with or without a `0x` prefix.
    pub fn from_hex(text: &str) -> CoreResult<Self> {
        let text = text.strip_prefix("0x").unwrap_or(text);
        Self::from_bytes(&hex::decode(text)?)
    }
}
