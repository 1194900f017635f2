/*
 * SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
 *
 * SPDX-License-Identifier: GPL-2.0-or-later
 */
//! Request/response payload buffers addressed with `*_OFST` constants.
//!
//! Every access is bounds-checked: a short or malformed response from the
//! firmware is reported as an error rather than a panic.

use std::fmt;

use crate::error::{McdiError, McdiResult};
use crate::mcdi::dword::{EfxDword, Field};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct McdiBuf {
    data: Vec<u8>,
}

impl McdiBuf {
    /// Zero-filled buffer of `len` bytes.
    pub fn new(len: usize) -> Self {
        McdiBuf {
            data: vec![0; len],
        }
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        McdiBuf {
            data: bytes.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Fail unless at least `min` bytes are present.
    pub fn check_len(&self, min: usize) -> McdiResult<()> {
        if self.data.len() < min {
            return Err(McdiError::Truncated {
                expected: min,
                actual: self.data.len(),
            });
        }
        Ok(())
    }

    fn range(&self, ofst: usize, len: usize) -> McdiResult<std::ops::Range<usize>> {
        let end = ofst.checked_add(len).filter(|end| *end <= self.data.len());
        match end {
            Some(end) => Ok(ofst..end),
            None => Err(McdiError::InvalidData(format!(
                "field at offset {} length {} overruns {} byte payload",
                ofst,
                len,
                self.data.len()
            ))),
        }
    }

    pub fn set_bytes(&mut self, ofst: usize, bytes: &[u8]) -> McdiResult<()> {
        let r = self.range(ofst, bytes.len())?;
        self.data[r].copy_from_slice(bytes);
        Ok(())
    }

    pub fn get_bytes(&self, ofst: usize, len: usize) -> McdiResult<&[u8]> {
        let r = self.range(ofst, len)?;
        Ok(&self.data[r])
    }

    pub fn set_byte(&mut self, ofst: usize, value: u8) -> McdiResult<()> {
        self.set_bytes(ofst, &[value])
    }

    pub fn get_byte(&self, ofst: usize) -> McdiResult<u8> {
        Ok(self.get_bytes(ofst, 1)?[0])
    }

    pub fn set_word(&mut self, ofst: usize, value: u16) -> McdiResult<()> {
        self.set_bytes(ofst, &value.to_le_bytes())
    }

    pub fn get_word(&self, ofst: usize) -> McdiResult<u16> {
        let mut raw = [0u8; 2];
        raw.copy_from_slice(self.get_bytes(ofst, 2)?);
        Ok(u16::from_le_bytes(raw))
    }

    pub fn set_dword(&mut self, ofst: usize, value: u32) -> McdiResult<()> {
        self.set_bytes(ofst, &value.to_le_bytes())
    }

    pub fn get_dword(&self, ofst: usize) -> McdiResult<u32> {
        let mut raw = [0u8; 4];
        raw.copy_from_slice(self.get_bytes(ofst, 4)?);
        Ok(u32::from_le_bytes(raw))
    }

    /// 64-bit field stored as two little-endian dwords (`_LO` then `_HI`).
    pub fn set_qword(&mut self, ofst: usize, value: u64) -> McdiResult<()> {
        self.set_bytes(ofst, &value.to_le_bytes())
    }

    pub fn get_qword(&self, ofst: usize) -> McdiResult<u64> {
        let mut raw = [0u8; 8];
        raw.copy_from_slice(self.get_bytes(ofst, 8)?);
        Ok(u64::from_le_bytes(raw))
    }

    /// Update a bit field inside the dword at `ofst`, keeping other bits.
    pub fn set_field(&mut self, ofst: usize, field: Field, value: u32) -> McdiResult<()> {
        let mut dword = EfxDword(self.get_dword(ofst)?);
        dword.set(field, value);
        self.set_dword(ofst, dword.0)
    }

    pub fn get_field(&self, ofst: usize, field: Field) -> McdiResult<u32> {
        Ok(EfxDword(self.get_dword(ofst)?).get(field))
    }

    fn element(ofst: usize, index: usize, size: usize) -> McdiResult<usize> {
        index
            .checked_mul(size)
            .and_then(|o| o.checked_add(ofst))
            .ok_or_else(|| McdiError::InvalidData(format!("array index {} out of range", index)))
    }

    /// Element `index` of a dword array starting at `ofst`.
    pub fn get_array_dword(&self, ofst: usize, index: usize) -> McdiResult<u32> {
        self.get_dword(Self::element(ofst, index, 4)?)
    }

    pub fn set_array_dword(&mut self, ofst: usize, index: usize, value: u32) -> McdiResult<()> {
        self.set_dword(Self::element(ofst, index, 4)?, value)
    }

    pub fn set_array_qword(&mut self, ofst: usize, index: usize, value: u64) -> McdiResult<()> {
        self.set_qword(Self::element(ofst, index, 8)?, value)
    }

    /// NUL-padded ASCII field, trimmed at the first NUL.
    pub fn get_string(&self, ofst: usize, len: usize) -> McdiResult<String> {
        let raw = self.get_bytes(ofst, len)?;
        let end = raw.iter().position(|b| *b == 0).unwrap_or(raw.len());
        Ok(String::from_utf8_lossy(&raw[..end]).into_owned())
    }
}

impl From<Vec<u8>> for McdiBuf {
    fn from(data: Vec<u8>) -> Self {
        McdiBuf { data }
    }
}

impl fmt::Display for McdiBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::helper::buf2str(&self.data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcdi::pcol::*;

    #[test]
    fn test_set_get() {
        let mut buf = McdiBuf::new(MC_CMD_INIT_RXQ_IN_LEN(1));
        buf.set_dword(MC_CMD_INIT_RXQ_IN_SIZE_OFST, 512).unwrap();
        buf.set_qword(MC_CMD_INIT_RXQ_IN_DMA_ADDR_OFST, 0x1_2345_6000).unwrap();
        assert_eq!(buf.get_dword(MC_CMD_INIT_RXQ_IN_SIZE_OFST).unwrap(), 512);
        assert_eq!(
            buf.get_bytes(MC_CMD_INIT_RXQ_IN_DMA_ADDR_OFST, 8).unwrap(),
            &[0x00, 0x60, 0x45, 0x23, 0x01, 0x00, 0x00, 0x00]
        );
        assert_eq!(buf.len(), 36);
    }

    #[test]
    fn test_bit_fields() {
        let mut buf = McdiBuf::new(MC_CMD_SET_LINK_IN_LEN);
        let txdis = Field::new(MC_CMD_SET_LINK_IN_TXDIS_LBN, MC_CMD_SET_LINK_IN_TXDIS_WIDTH);
        let lowpower = Field::new(MC_CMD_SET_LINK_IN_LOWPOWER_LBN, MC_CMD_SET_LINK_IN_LOWPOWER_WIDTH);
        buf.set_field(MC_CMD_SET_LINK_IN_FLAGS_OFST, txdis, 1).unwrap();
        buf.set_field(MC_CMD_SET_LINK_IN_FLAGS_OFST, lowpower, 1).unwrap();
        assert_eq!(buf.get_dword(MC_CMD_SET_LINK_IN_FLAGS_OFST).unwrap(), 0x5);
        buf.set_field(MC_CMD_SET_LINK_IN_FLAGS_OFST, txdis, 0).unwrap();
        assert_eq!(buf.get_field(MC_CMD_SET_LINK_IN_FLAGS_OFST, lowpower).unwrap(), 1);
        assert_eq!(buf.get_dword(MC_CMD_SET_LINK_IN_FLAGS_OFST).unwrap(), 0x1);
    }

    #[test]
    fn test_overrun_is_an_error() {
        let buf = McdiBuf::from_bytes(&[1, 2, 3]);
        assert!(matches!(buf.get_dword(0), Err(McdiError::InvalidData(_))));
        assert!(buf.get_array_dword(0, usize::MAX).is_err());
        assert_eq!(
            buf.check_len(MC_CMD_GET_CLOCK_OUT_LEN),
            Err(McdiError::Truncated {
                expected: 8,
                actual: 3
            })
        );
    }

    #[test]
    fn test_string_field() {
        let mut buf = McdiBuf::new(MC_CMD_GET_PHY_CFG_OUT_LEN);
        buf.set_bytes(MC_CMD_GET_PHY_CFG_OUT_NAME_OFST, b"SFX7101").unwrap();
        assert_eq!(
            buf.get_string(MC_CMD_GET_PHY_CFG_OUT_NAME_OFST, MC_CMD_GET_PHY_CFG_OUT_NAME_LEN)
                .unwrap(),
            "SFX7101"
        );
    }
}
