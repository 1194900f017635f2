/*
 * SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
 *
 * SPDX-License-Identifier: GPL-2.0-or-later
 */
use crate::error::{McdiError, McdiResult};

pub fn buf2str(data: &[u8]) -> String {
    data.iter()
        .map(|byte| format!("{:02x}", byte))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Multi-line dump, 16 bytes per line with an offset column.
pub fn hexdump(data: &[u8]) -> String {
    data.chunks(16)
        .enumerate()
        .map(|(i, chunk)| format!("{:04x}: {}", i * 16, buf2str(chunk)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse hex bytes. Accepts an optional `0x` prefix per token and
/// whitespace, `:` or `-` as separators; unseparated runs are split into
/// byte pairs.
pub fn parse_hex(input: &str) -> McdiResult<Vec<u8>> {
    let mut out = Vec::new();
    for token in input.split(|c: char| c.is_whitespace() || c == ':' || c == '-' || c == ',') {
        if token.is_empty() {
            continue;
        }
        let digits = token
            .strip_prefix("0x")
            .or_else(|| token.strip_prefix("0X"))
            .unwrap_or(token);
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(McdiError::InvalidData(format!("Invalid hex data: {}", token)));
        }
        // a lone nibble per token is a byte, e.g. "0:1:a"
        if digits.len() == 1 {
            out.push(u8::from_str_radix(digits, 16).map_err(|e| {
                McdiError::InvalidData(format!("Invalid hex data {}: {}", token, e))
            })?);
            continue;
        }
        if digits.len() % 2 != 0 {
            return Err(McdiError::InvalidData(format!(
                "Odd number of hex digits: {}",
                token
            )));
        }
        for pair in digits.as_bytes().chunks(2) {
            let pair = std::str::from_utf8(pair)
                .map_err(|e| McdiError::InvalidData(e.to_string()))?;
            out.push(u8::from_str_radix(pair, 16).map_err(|e| {
                McdiError::InvalidData(format!("Invalid hex data {}: {}", token, e))
            })?);
        }
    }
    Ok(out)
}

/// Parse a number given in decimal or with a `0x` prefix.
pub fn parse_u32(input: &str) -> McdiResult<u32> {
    let s = input.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse::<u32>(),
    };
    parsed.map_err(|_| McdiError::InvalidData(format!("Invalid number: {}", input)))
}

pub fn parse_u64(input: &str) -> McdiResult<u64> {
    let s = input.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => s.parse::<u64>(),
    };
    parsed.map_err(|_| McdiError::InvalidData(format!("Invalid number: {}", input)))
}

pub fn parse_mac(input: &str) -> McdiResult<[u8; 6]> {
    let bytes = parse_hex(input)?;
    bytes
        .as_slice()
        .try_into()
        .map_err(|_| McdiError::InvalidData(format!("Invalid MAC address: {}", input)))
}

pub fn format_mac(mac: &[u8]) -> String {
    mac.iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(":")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_separators() {
        assert_eq!(parse_hex("0x08 00 00 00").unwrap(), vec![0x08, 0, 0, 0]);
        assert_eq!(parse_hex("00:0f:53:01:02:03").unwrap(), vec![0, 0x0f, 0x53, 1, 2, 3]);
        assert_eq!(parse_hex("de-ad-be-ef").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(parse_hex("deadbeef").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(parse_hex("0:1:a").unwrap(), vec![0, 1, 0xa]);
        assert_eq!(parse_hex("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_parse_hex_rejects_garbage() {
        assert!(parse_hex("zz").is_err());
        assert!(parse_hex("abc").is_err());
        assert!(parse_hex("0x").is_err());
    }

    #[test]
    fn test_numbers_and_mac() {
        assert_eq!(parse_u32("0x29").unwrap(), 0x29);
        assert_eq!(parse_u32("41").unwrap(), 41);
        assert!(parse_u32("x").is_err());
        assert_eq!(parse_u64("0x100000000").unwrap(), 1 << 32);
        let mac = parse_mac("00:0f:53:aa:bb:cc").unwrap();
        assert_eq!(format_mac(&mac), "00:0f:53:aa:bb:cc");
        assert!(parse_mac("00:0f").is_err());
    }

    #[test]
    fn test_hexdump() {
        let data: Vec<u8> = (0..18).collect();
        let dump = hexdump(&data);
        assert_eq!(dump.lines().count(), 2);
        assert!(dump.starts_with("0000: 00 01 02"));
        assert!(dump.ends_with("0010: 10 11"));
    }
}
