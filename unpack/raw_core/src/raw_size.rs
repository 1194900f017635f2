/*
 * SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
 *
 * SPDX-License-Identifier: GPL-2.0-or-later
 */
use crate::{Endianness, RawError};

/// A type with a fixed wire size that can be read from and written to a
/// byte buffer.
///
/// `RAW_SIZE` is the packed size on the wire, which is not necessarily
/// `size_of::<Self>()`: structs are laid out back to back with no padding.
pub trait RawSize: Sized {
    /// 编译期确定的静态大小
    const RAW_SIZE: usize;
    const ENDIAN: Endianness = Endianness::Native;

    fn raw_size(&self) -> usize {
        Self::RAW_SIZE
    }

    fn from_bytes_with_endian(bytes: &[u8], endian: Endianness) -> Result<Self, RawError>;

    fn write_bytes_with_endian(&self, out: &mut [u8], endian: Endianness) -> Result<(), RawError>;

    /// Decode using the layout's declared byte order.
    fn from_bytes(bytes: &[u8]) -> Result<Self, RawError> {
        Self::from_bytes_with_endian(bytes, Self::ENDIAN)
    }

    /// Encode into a freshly allocated buffer of exactly `RAW_SIZE` bytes.
    fn to_bytes(&self) -> Result<Vec<u8>, RawError> {
        let mut out = vec![0u8; Self::RAW_SIZE];
        self.write_bytes_with_endian(&mut out, Self::ENDIAN)?;
        Ok(out)
    }
}

macro_rules! impl_raw_size_for_numeric {
    ($($ty:ty),*) => {
        $(
            impl RawSize for $ty {
                const RAW_SIZE: usize = std::mem::size_of::<$ty>();

                fn from_bytes_with_endian(bytes: &[u8], endian: Endianness) -> Result<Self, RawError> {
                    let mut raw = [0u8; std::mem::size_of::<$ty>()];
                    raw.copy_from_slice(
                        bytes
                            .get(..Self::RAW_SIZE)
                            .ok_or_else(|| RawError::insufficient::<$ty>(Self::RAW_SIZE, bytes.len()))?,
                    );
                    Ok(match endian {
                        Endianness::Little => Self::from_le_bytes(raw),
                        Endianness::Big => Self::from_be_bytes(raw),
                        Endianness::Native => Self::from_ne_bytes(raw),
                    })
                }

                fn write_bytes_with_endian(&self, out: &mut [u8], endian: Endianness) -> Result<(), RawError> {
                    let got = out.len();
                    let dst = out
                        .get_mut(..Self::RAW_SIZE)
                        .ok_or_else(|| RawError::insufficient::<$ty>(Self::RAW_SIZE, got))?;
                    let raw = match endian {
                        Endianness::Little => self.to_le_bytes(),
                        Endianness::Big => self.to_be_bytes(),
                        Endianness::Native => self.to_ne_bytes(),
                    };
                    dst.copy_from_slice(&raw);
                    Ok(())
                }
            }
        )*
    };
}

impl_raw_size_for_numeric!(u8, u16, u32, u64, i8, i16, i32, i64);

impl RawSize for bool {
    const RAW_SIZE: usize = 1;

    fn from_bytes_with_endian(bytes: &[u8], _endian: Endianness) -> Result<Self, RawError> {
        match bytes.first() {
            Some(b) => Ok(*b != 0),
            None => Err(RawError::insufficient::<bool>(1, 0)),
        }
    }

    fn write_bytes_with_endian(&self, out: &mut [u8], _endian: Endianness) -> Result<(), RawError> {
        match out.first_mut() {
            Some(b) => {
                *b = u8::from(*self);
                Ok(())
            }
            None => Err(RawError::insufficient::<bool>(1, 0)),
        }
    }
}

// 数组按元素依次排列，没有填充
impl<T, const N: usize> RawSize for [T; N]
where
    T: RawSize,
{
    const RAW_SIZE: usize = T::RAW_SIZE * N;

    fn from_bytes_with_endian(bytes: &[u8], endian: Endianness) -> Result<Self, RawError> {
        if bytes.len() < Self::RAW_SIZE {
            return Err(RawError::insufficient::<Self>(Self::RAW_SIZE, bytes.len()));
        }

        let mut items = Vec::with_capacity(N);
        for i in 0..N {
            let offset = i * T::RAW_SIZE;
            items.push(T::from_bytes_with_endian(
                &bytes[offset..offset + T::RAW_SIZE],
                endian,
            )?);
        }

        items
            .try_into()
            .map_err(|_| RawError::Invalid("array length mismatch".to_string()))
    }

    fn write_bytes_with_endian(&self, out: &mut [u8], endian: Endianness) -> Result<(), RawError> {
        if out.len() < Self::RAW_SIZE {
            return Err(RawError::insufficient::<Self>(Self::RAW_SIZE, out.len()));
        }
        for (i, item) in self.iter().enumerate() {
            let offset = i * T::RAW_SIZE;
            item.write_bytes_with_endian(&mut out[offset..offset + T::RAW_SIZE], endian)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_sizes() {
        assert_eq!(u8::RAW_SIZE, 1);
        assert_eq!(u16::RAW_SIZE, 2);
        assert_eq!(u32::RAW_SIZE, 4);
        assert_eq!(u64::RAW_SIZE, 8);
        assert_eq!(<[u16; 4]>::RAW_SIZE, 8);
    }

    #[test]
    fn test_numeric_endianness() {
        let data = [0x78u8, 0x56, 0x34, 0x12];
        assert_eq!(
            u32::from_bytes_with_endian(&data, Endianness::Little).unwrap(),
            0x12345678
        );
        assert_eq!(
            u32::from_bytes_with_endian(&data, Endianness::Big).unwrap(),
            0x78563412
        );
    }

    #[test]
    fn test_short_input_is_rejected() {
        let err = u32::from_bytes_with_endian(&[1, 2, 3], Endianness::Little).unwrap_err();
        assert!(matches!(
            err,
            RawError::Insufficient {
                needed: 4,
                got: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_array_elements_advance() {
        let data = [0x01u8, 0x00, 0x02, 0x00, 0x03, 0x00];
        let arr = <[u16; 3]>::from_bytes_with_endian(&data, Endianness::Little).unwrap();
        assert_eq!(arr, [1, 2, 3]);

        let mut out = [0u8; 6];
        arr.write_bytes_with_endian(&mut out, Endianness::Big).unwrap();
        assert_eq!(out, [0x00, 0x01, 0x00, 0x02, 0x00, 0x03]);
    }

    #[test]
    fn test_write_into_short_buffer_fails() {
        let mut out = [0u8; 1];
        assert!(0xabcdu16
            .write_bytes_with_endian(&mut out, Endianness::Little)
            .is_err());
    }
}
