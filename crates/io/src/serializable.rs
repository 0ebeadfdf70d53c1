// Copyright (C) 2017-2025 The ela-rs Project.
//
// serializable.rs file belongs to the ela-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Serialization traits and utilities for self-delimiting wire elements.

use crate::{BinaryWriter, IoResult, MemoryReader};

/// A value with a self-contained binary encoding.
///
/// `deserialize` must consume exactly the bytes `serialize` produced, since
/// containing structures concatenate elements without outer framing.
pub trait Serializable {
    /// The size of the object in bytes after serialization.
    fn size(&self) -> usize;

    /// Serializes the object using the specified BinaryWriter.
    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()>;

    /// Deserializes the object using the specified MemoryReader.
    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self>
    where
        Self: Sized;
}

/// Extension methods for serializable objects.
pub trait SerializableExt: Serializable {
    /// Converts the object to a byte array.
    fn to_array(&self) -> IoResult<Vec<u8>> {
        let mut writer = BinaryWriter::with_capacity(self.size());
        self.serialize(&mut writer)?;
        Ok(writer.into_bytes())
    }

    /// Creates an object from a byte array.
    fn from_array(data: &[u8]) -> IoResult<Self>
    where
        Self: Sized,
    {
        let mut reader = MemoryReader::new(data);
        Self::deserialize(&mut reader)
    }
}

impl<T: Serializable> SerializableExt for T {}

/// Helper functions for serialization.
pub mod helper {
    use super::Serializable;
    use crate::{BinaryWriter, IoError, IoResult, MemoryReader};

    /// Upper bound on speculative pre-allocation for decoded arrays.
    ///
    /// A declared count is attacker-controlled; past this many slots the
    /// vector grows only as elements actually decode.
    pub const MAX_PREALLOCATED_ITEMS: usize = 1024;

    /// Serializes a collection of serializable objects.
    pub fn serialize_array<T: Serializable>(
        items: &[T],
        writer: &mut BinaryWriter,
    ) -> IoResult<()> {
        writer.write_var_int(items.len() as u64)?;
        for item in items {
            item.serialize(writer)?;
        }
        Ok(())
    }

    /// Deserializes a var-int count followed by that many items.
    pub fn deserialize_array<T: Serializable>(
        reader: &mut MemoryReader,
        max: usize,
    ) -> IoResult<Vec<T>> {
        let count = reader.read_var_int(max as u64)? as usize;
        let mut items = Vec::with_capacity(count.min(MAX_PREALLOCATED_ITEMS));
        for _ in 0..count {
            items.push(T::deserialize(reader)?);
        }
        Ok(items)
    }

    /// Fails with [`IoError::ExceedsMaximum`] when `value` is above `max`.
    ///
    /// Encoders call this with the same bound the decoder passes to
    /// `read_var_int`.
    pub fn ensure_max(value: usize, max: usize) -> IoResult<()> {
        if value > max {
            return Err(IoError::ExceedsMaximum {
                value: value as u64,
                max: max as u64,
            });
        }
        Ok(())
    }

    /// Serializes a collection whose length must not exceed `max`.
    pub fn serialize_array_bounded<T: Serializable>(
        items: &[T],
        max: usize,
        writer: &mut BinaryWriter,
    ) -> IoResult<()> {
        ensure_max(items.len(), max)?;
        serialize_array(items, writer)
    }

    /// Gets the size of a variable-length integer.
    pub fn get_var_size(value: u64) -> usize {
        if value < 0xFD {
            1
        } else if value <= 0xFFFF {
            3
        } else if value <= 0xFFFFFFFF {
            5
        } else {
            9
        }
    }

    /// Size of a byte slice written with `write_var_bytes`.
    pub fn get_var_bytes_size(bytes: &[u8]) -> usize {
        get_var_size(bytes.len() as u64) + bytes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IoError;

    #[derive(Debug, PartialEq)]
    struct TestStruct {
        value: u32,
    }

    impl Serializable for TestStruct {
        fn size(&self) -> usize {
            4
        }

        fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
            writer.write_u32(self.value)
        }

        fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
            Ok(TestStruct {
                value: reader.read_u32()?,
            })
        }
    }

    #[test]
    fn test_serialize_array() {
        let items = vec![
            TestStruct { value: 1 },
            TestStruct { value: 2 },
            TestStruct { value: 3 },
        ];

        let mut writer = BinaryWriter::new();
        helper::serialize_array(&items, &mut writer).unwrap();
        let bytes = writer.to_bytes();
        assert_eq!(bytes.len(), 1 + 3 * 4);

        let mut reader = MemoryReader::new(&bytes);
        let deserialized: Vec<TestStruct> = helper::deserialize_array(&mut reader, 1000).unwrap();

        assert_eq!(items, deserialized);
    }

    #[test]
    fn test_deserialize_array_declared_count_exceeds_data() {
        // count 5, only two elements present
        let bytes = [0x05, 1, 0, 0, 0, 2, 0, 0, 0];
        let mut reader = MemoryReader::new(&bytes);
        let err = helper::deserialize_array::<TestStruct>(&mut reader, 16).unwrap_err();
        assert!(err.is_eof());
    }

    #[test]
    fn test_deserialize_array_huge_count_does_not_preallocate() {
        let bytes = [0xfe, 0xff, 0xff, 0xff, 0x7f];
        let mut reader = MemoryReader::new(&bytes);
        let err = helper::deserialize_array::<TestStruct>(&mut reader, usize::MAX).unwrap_err();
        assert!(matches!(err, IoError::UnexpectedEof { .. }));
    }

    #[test]
    fn test_serialize_array_bounded_matches_decode_bound() {
        let items = vec![TestStruct { value: 1 }, TestStruct { value: 2 }];

        let mut writer = BinaryWriter::new();
        helper::serialize_array_bounded(&items, 2, &mut writer).unwrap();
        let bytes = writer.into_bytes();
        let decoded: Vec<TestStruct> =
            helper::deserialize_array(&mut MemoryReader::new(&bytes), 2).unwrap();
        assert_eq!(decoded, items);

        let mut writer = BinaryWriter::new();
        assert_eq!(
            helper::serialize_array_bounded(&items, 1, &mut writer),
            Err(IoError::ExceedsMaximum { value: 2, max: 1 })
        );
        assert!(writer.is_empty());
    }

    #[test]
    fn test_get_var_size() {
        assert_eq!(helper::get_var_size(0), 1);
        assert_eq!(helper::get_var_size(252), 1);
        assert_eq!(helper::get_var_size(253), 3);
        assert_eq!(helper::get_var_size(u16::MAX as u64), 3);
        assert_eq!(helper::get_var_size(65536), 5);
        assert_eq!(helper::get_var_size(0xFFFFFFFF), 5);
        assert_eq!(helper::get_var_size(0x100000000), 9);
        assert_eq!(helper::get_var_bytes_size(b"abc"), 4);
    }
}
