/*
 * SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
 *
 * SPDX-License-Identifier: GPL-2.0-or-later
 */
use unpack::{Endianness, RawError, RawSize, RAWDATA};

// 基础嵌套结构体
#[derive(Debug, PartialEq, RAWDATA)]
#[repr(C)]
struct Inner {
    a: u16,
    b: u8,
}

#[derive(Debug, PartialEq, RAWDATA)]
#[repr(C)]
#[raw_data(endian = "little")]
struct TestStruct {
    id: u8,
    values: [u16; 3],
    inner: Inner,
    flag: u8,
}

#[derive(Debug, PartialEq, RAWDATA)]
#[repr(C)]
#[raw_data(endian = "big")]
struct PortPair(u16, u16);

#[test]
fn test_rawdata_derive() {
    let data = vec![
        0x01, // id
        0x34, 0x12, // values[0]
        0x78, 0x56, // values[1]
        0xBC, 0x9A, // values[2]
        0xEF, 0xCD, // inner.a
        0x11, // inner.b
        0xFF, // flag
    ];

    let result = TestStruct::from_bytes(&data).unwrap();

    assert_eq!(result.id, 0x01);
    assert_eq!(result.values, [0x1234, 0x5678, 0x9ABC]);
    assert_eq!(result.inner, Inner { a: 0xCDEF, b: 0x11 });
    assert_eq!(result.flag, 0xFF);

    // no padding between members
    assert_eq!(TestStruct::RAW_SIZE, 1 + 6 + 3 + 1);
    assert_eq!(Inner::RAW_SIZE, 2 + 1);
}

#[test]
fn test_rawdata_encode_matches_decode_input() {
    let data = [0x01u8, 0x34, 0x12, 0x78, 0x56, 0xBC, 0x9A, 0xEF, 0xCD, 0x11, 0xFF];
    let parsed = TestStruct::from_bytes(&data).unwrap();
    assert_eq!(parsed.to_bytes().unwrap(), data.to_vec());
}

#[test]
fn test_nested_layout_follows_outer_endianness() {
    let data = [0xCDu8, 0xEF, 0x11];
    let inner = Inner::from_bytes_with_endian(&data, Endianness::Big).unwrap();
    assert_eq!(inner.a, 0xCDEF);
}

#[test]
fn test_tuple_struct_big_endian() {
    let pair = PortPair::from_bytes(&[0x00, 0x50, 0x01, 0xbb]).unwrap();
    assert_eq!(pair, PortPair(80, 443));
    assert_eq!(PortPair::ENDIAN, Endianness::Big);
}

#[test]
fn test_short_buffer() {
    let err = TestStruct::from_bytes(&[0x01, 0x02]).unwrap_err();
    match err {
        RawError::Insufficient { needed, got, .. } => {
            assert_eq!(needed, 11);
            assert_eq!(got, 2);
        }
        other => panic!("unexpected error {:?}", other),
    }
}
