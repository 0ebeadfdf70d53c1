//! Integration tests for the ELA IO primitives.

use ela_io::{helper, BinaryWriter, IoError, IoResult, MemoryReader, Serializable, SerializableExt};
use proptest::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct MockProgram {
    parameter: Vec<u8>,
    code: Vec<u8>,
}

impl Serializable for MockProgram {
    fn size(&self) -> usize {
        helper::get_var_bytes_size(&self.parameter) + helper::get_var_bytes_size(&self.code)
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_var_bytes(&self.parameter)?;
        writer.write_var_bytes(&self.code)
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        let parameter = reader.read_var_bytes(1024)?;
        let code = reader.read_var_bytes(1024)?;
        Ok(Self { parameter, code })
    }
}

#[test]
fn test_self_delimiting_elements_concatenate() {
    let programs = vec![
        MockProgram {
            parameter: vec![0x40; 65],
            code: vec![0x21, 0x02, 0xac],
        },
        MockProgram {
            parameter: vec![],
            code: vec![0x51],
        },
    ];

    let mut writer = BinaryWriter::new();
    helper::serialize_array(&programs, &mut writer).unwrap();
    writer.write_u32(0xdeadbeef).unwrap();
    let bytes = writer.into_bytes();

    let mut reader = MemoryReader::new(&bytes);
    let decoded: Vec<MockProgram> = helper::deserialize_array(&mut reader, 16).unwrap();
    assert_eq!(decoded, programs);
    assert_eq!(reader.read_u32().unwrap(), 0xdeadbeef);
    assert!(reader.is_empty());
}

#[test]
fn test_to_array_matches_size() {
    let program = MockProgram {
        parameter: vec![1; 300],
        code: vec![2; 35],
    };
    let bytes = program.to_array().unwrap();
    assert_eq!(bytes.len(), program.size());
    assert_eq!(&bytes[..3], &[0xfd, 0x2c, 0x01]);
    assert_eq!(MockProgram::from_array(&bytes).unwrap(), program);
}

#[test]
fn test_truncated_element_reports_eof() {
    let bytes = hex::decode("02aa").unwrap();
    let err = MockProgram::from_array(&bytes).unwrap_err();
    assert_eq!(
        err,
        IoError::UnexpectedEof {
            needed: 2,
            remaining: 1
        }
    );
}

proptest! {
    #[test]
    fn prop_var_int_round_trip(value in any::<u64>()) {
        let mut writer = BinaryWriter::new();
        writer.write_var_int(value).unwrap();
        prop_assert_eq!(writer.len(), helper::get_var_size(value));

        let bytes = writer.into_bytes();
        let mut reader = MemoryReader::new(&bytes);
        prop_assert_eq!(reader.read_var_int(u64::MAX).unwrap(), value);
        prop_assert!(reader.is_empty());
    }
}
