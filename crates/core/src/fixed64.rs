// Copyright (C) 2017-2025 The ela-rs Project.
//
// fixed64.rs file belongs to the ela-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use ela_io::{BinaryWriter, IoResult, MemoryReader, Serializable};
use std::fmt;

/// A fixed-point amount with eight decimal places, stored as a signed 64-bit count of 1e-8 units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
pub struct Fixed64(pub i64);

impl Fixed64 {
    /// Units per whole coin.
    pub const SCALE: i64 = 100_000_000;

    pub const fn from_coins(coins: i64) -> Self {
        Self(coins * Self::SCALE)
    }

    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl Serializable for Fixed64 {
    fn size(&self) -> usize {
        8
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_i64(self.0)
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        reader.read_i64().map(Self)
    }
}

/// Whole part, then the fraction with trailing zeros trimmed.
impl fmt::Display for Fixed64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            f.write_str("-")?;
        }
        let magnitude = self.0.unsigned_abs();
        let scale = Self::SCALE as u64;
        write!(f, "{}", magnitude / scale)?;
        let fraction = magnitude % scale;
        if fraction > 0 {
            let digits = format!("{fraction:08}");
            write!(f, ".{}", digits.trim_end_matches('0'))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed64_display() {
        assert_eq!(Fixed64::from_coins(5).to_string(), "5");
        assert_eq!(Fixed64(150_000_000).to_string(), "1.5");
        assert_eq!(Fixed64(1).to_string(), "0.00000001");
        assert_eq!(Fixed64(-250_000_000).to_string(), "-2.5");
        assert_eq!(Fixed64(i64::MIN).to_string(), "-92233720368.54775808");
    }
}
