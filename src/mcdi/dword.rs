/*
 * SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
 *
 * SPDX-License-Identifier: GPL-2.0-or-later
 */
//! Bit-field access inside little-endian dwords and qwords.

use std::fmt;

/// A bit range inside a dword or qword, described by its lowest bit number
/// and width, exactly as the `*_LBN` / `*_WIDTH` constant pairs do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub lbn: u32,
    pub width: u32,
}

impl Field {
    pub const fn new(lbn: u32, width: u32) -> Self {
        Field { lbn, width }
    }

    /// Single-bit field.
    pub const fn bit(lbn: u32) -> Self {
        Field { lbn, width: 1 }
    }

    /// Mask for the field value, not shifted.
    pub const fn mask(&self) -> u64 {
        if self.width >= 64 {
            u64::MAX
        } else {
            (1u64 << self.width) - 1
        }
    }

    /// One past the highest bit of the field.
    pub const fn end(&self) -> u32 {
        self.lbn + self.width
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EfxDword(pub u32);

impl EfxDword {
    pub fn from_le_bytes(bytes: [u8; 4]) -> Self {
        EfxDword(u32::from_le_bytes(bytes))
    }

    pub fn to_le_bytes(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }

    pub fn get(&self, field: Field) -> u32 {
        debug_assert!(field.end() <= 32, "field {:?} outside dword", field);
        ((self.0 as u64 >> field.lbn) & field.mask()) as u32
    }

    /// Replace the bits of `field`; `value` is truncated to the field width.
    pub fn set(&mut self, field: Field, value: u32) {
        debug_assert!(field.end() <= 32, "field {:?} outside dword", field);
        let mask = field.mask() << field.lbn;
        let bits = ((value as u64) & field.mask()) << field.lbn;
        self.0 = ((self.0 as u64 & !mask) | bits) as u32;
    }

    pub fn is_set(&self, field: Field) -> bool {
        self.get(field) != 0
    }

    pub fn populate(pairs: &[(Field, u32)]) -> Self {
        let mut dword = EfxDword(0);
        for (field, value) in pairs {
            dword.set(*field, *value);
        }
        dword
    }
}

impl fmt::Display for EfxDword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EfxQword(pub u64);

impl EfxQword {
    pub fn from_le_bytes(bytes: [u8; 8]) -> Self {
        EfxQword(u64::from_le_bytes(bytes))
    }

    pub fn to_le_bytes(self) -> [u8; 8] {
        self.0.to_le_bytes()
    }

    pub fn get(&self, field: Field) -> u64 {
        debug_assert!(field.end() <= 64, "field {:?} outside qword", field);
        (self.0 >> field.lbn) & field.mask()
    }

    pub fn set(&mut self, field: Field, value: u64) {
        debug_assert!(field.end() <= 64, "field {:?} outside qword", field);
        let mask = field.mask() << field.lbn;
        self.0 = (self.0 & !mask) | ((value & field.mask()) << field.lbn);
    }

    pub fn is_set(&self, field: Field) -> bool {
        self.get(field) != 0
    }

    pub fn populate(pairs: &[(Field, u64)]) -> Self {
        let mut qword = EfxQword(0);
        for (field, value) in pairs {
            qword.set(*field, *value);
        }
        qword
    }

    /// Low dword, i.e. bits [0,32).
    pub fn low(&self) -> EfxDword {
        EfxDword(self.0 as u32)
    }

    pub fn high(&self) -> EfxDword {
        EfxDword((self.0 >> 32) as u32)
    }
}

impl fmt::Display for EfxQword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dword_get_set() {
        let mut d = EfxDword(0);
        d.set(Field::new(8, 8), 0x1ab);
        assert_eq!(d.0, 0x0000ab00);
        d.set(Field::bit(23), 1);
        assert_eq!(d.get(Field::new(8, 8)), 0xab);
        assert!(d.is_set(Field::bit(23)));
        d.set(Field::new(8, 8), 0);
        assert_eq!(d.0, 0x0080_0000);
    }

    #[test]
    fn test_full_width_masks() {
        let mut d = EfxDword(0);
        d.set(Field::new(0, 32), 0xdeadbeef);
        assert_eq!(d.get(Field::new(0, 32)), 0xdeadbeef);

        let mut q = EfxQword(0);
        q.set(Field::new(0, 64), u64::MAX);
        assert_eq!(q.get(Field::new(0, 64)), u64::MAX);
        assert_eq!(Field::new(0, 64).mask(), u64::MAX);
    }

    #[test]
    fn test_populate() {
        let d = EfxDword::populate(&[(Field::new(0, 7), 0x01), (Field::new(16, 4), 0x5)]);
        assert_eq!(d.0, 0x0005_0001);
        assert_eq!(d.to_le_bytes(), [0x01, 0x00, 0x05, 0x00]);
        assert_eq!(EfxDword::from_le_bytes([0x01, 0x00, 0x05, 0x00]), d);
    }

    #[test]
    fn test_qword_halves() {
        let q = EfxQword::populate(&[(Field::new(0, 32), 0x1234), (Field::new(44, 8), 0x03)]);
        assert_eq!(q.low().0, 0x1234);
        assert_eq!(q.high().get(Field::new(12, 8)), 0x03);
        assert_eq!(format!("{}", q), "0000300000001234");
    }
}
