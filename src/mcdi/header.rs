/*
 * SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
 *
 * SPDX-License-Identifier: GPL-2.0-or-later
 */
//! MCDI PDU header codec.
//!
//! A PDU starts with one header dword. Commands that do not fit the v1
//! header (opcode above 0x7e or payload above `MCDI_CTL_SDU_LEN_MAX_V1`)
//! put `MC_CMD_V2_EXTN` in CODE and carry the real opcode and length in a
//! second dword.

use std::fmt;

use crate::error::{McdiError, McdiResult};
use crate::mcdi::dword::{EfxDword, Field};
use crate::mcdi::pcol::*;
use crate::mcdi::strings::cmd_name;

const CODE: Field = Field::new(MCDI_HEADER_CODE_LBN, MCDI_HEADER_CODE_WIDTH);
const RESYNC: Field = Field::new(MCDI_HEADER_RESYNC_LBN, MCDI_HEADER_RESYNC_WIDTH);
const DATALEN: Field = Field::new(MCDI_HEADER_DATALEN_LBN, MCDI_HEADER_DATALEN_WIDTH);
const SEQ: Field = Field::new(MCDI_HEADER_SEQ_LBN, MCDI_HEADER_SEQ_WIDTH);
const NOT_EPOCH: Field = Field::new(MCDI_HEADER_NOT_EPOCH_LBN, MCDI_HEADER_NOT_EPOCH_WIDTH);
const ERROR: Field = Field::new(MCDI_HEADER_ERROR_LBN, MCDI_HEADER_ERROR_WIDTH);
const RESPONSE: Field = Field::new(MCDI_HEADER_RESPONSE_LBN, MCDI_HEADER_RESPONSE_WIDTH);
const XFLAGS: Field = Field::new(MCDI_HEADER_XFLAGS_LBN, MCDI_HEADER_XFLAGS_WIDTH);

const EXTENDED_CMD: Field = Field::new(
    MC_CMD_V2_EXTN_IN_EXTENDED_CMD_LBN,
    MC_CMD_V2_EXTN_IN_EXTENDED_CMD_WIDTH,
);
const ACTUAL_LEN: Field = Field::new(
    MC_CMD_V2_EXTN_IN_ACTUAL_LEN_LBN,
    MC_CMD_V2_EXTN_IN_ACTUAL_LEN_WIDTH,
);
const MESSAGE_TYPE: Field = Field::new(
    MC_CMD_V2_EXTN_IN_MESSAGE_TYPE_LBN,
    MC_CMD_V2_EXTN_IN_MESSAGE_TYPE_WIDTH,
);

/// Largest opcode the 15-bit EXTENDED_CMD field can carry.
pub const MCDI_CMD_MAX: u32 = (1 << MC_CMD_V2_EXTN_IN_EXTENDED_CMD_WIDTH) - 1;

/// Largest payload ACTUAL_LEN can describe. One short of
/// `MCDI_CTL_SDU_LEN_MAX_V2`, which would wrap to zero.
pub const MCDI_V2_DATALEN_MAX: usize = (1 << MC_CMD_V2_EXTN_IN_ACTUAL_LEN_WIDTH) - 1;

const DWORD_LEN: usize = 4;

fn max_datalen(v2: bool) -> usize {
    if v2 {
        MCDI_CTL_SDU_LEN_MAX_V2.min(MCDI_V2_DATALEN_MAX)
    } else {
        MCDI_CTL_SDU_LEN_MAX_V1
    }
}

fn check_datalen(datalen: usize, v2: bool) -> McdiResult<()> {
    let max = max_datalen(v2);
    if datalen > max {
        return Err(McdiError::InvalidData(format!(
            "MCDI payload of {} bytes exceeds the {} byte limit",
            datalen, max
        )));
    }
    Ok(())
}

/// Second header dword of a v2 PDU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct McdiV2Ext {
    pub extended_cmd: u32,
    pub actual_len: usize,
    pub message_type: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct McdiHeader {
    pub code: u32,
    pub resync: bool,
    pub datalen: usize,
    pub seq: u8,
    pub not_epoch: bool,
    pub error: bool,
    pub response: bool,
    pub xflags: u8,
    pub ext: Option<McdiV2Ext>,
}

/// Whether `cmd`/`datalen` can only be expressed with the v2 header.
pub fn needs_v2(cmd: u32, datalen: usize) -> bool {
    cmd >= MC_CMD_V1_OPCODE_LIMIT || datalen > MCDI_CTL_SDU_LEN_MAX_V1
}

impl McdiHeader {
    /// Build a request header. With `v2` unset the command must fit the
    /// v1 header.
    pub fn request(cmd: u32, datalen: usize, seq: u8, v2: bool) -> McdiResult<Self> {
        if cmd > MCDI_CMD_MAX {
            return Err(McdiError::InvalidData(format!(
                "MCDI command 0x{:x} out of range",
                cmd
            )));
        }
        check_datalen(datalen, v2)?;
        if !v2 && needs_v2(cmd, datalen) {
            return Err(McdiError::InvalidData(format!(
                "MCDI command 0x{:x} requires the v2 header",
                cmd
            )));
        }

        let mut header = McdiHeader {
            code: cmd,
            resync: true,
            datalen,
            seq: seq & 0xf,
            not_epoch: false,
            error: false,
            response: false,
            xflags: 0,
            ext: None,
        };
        if v2 {
            header.code = MC_CMD_V2_EXTN;
            header.datalen = 0;
            header.ext = Some(McdiV2Ext {
                extended_cmd: cmd,
                actual_len: datalen,
                message_type: MC_CMD_V2_EXTN_IN_MCDI_MESSAGE_TYPE_MC,
            });
        }
        Ok(header)
    }

    /// Response header as the MC would write it for `request`.
    pub fn response_to(request: &McdiHeader, datalen: usize, error: bool) -> McdiResult<Self> {
        check_datalen(datalen, request.is_v2())?;
        let mut header = *request;
        header.response = true;
        header.error = error;
        header.xflags = 0;
        match header.ext.as_mut() {
            Some(ext) => ext.actual_len = datalen,
            None => header.datalen = datalen,
        }
        Ok(header)
    }

    pub fn with_xflags(mut self, xflags: u8) -> Self {
        self.xflags = xflags;
        self
    }

    pub fn with_not_epoch(mut self, not_epoch: bool) -> Self {
        self.not_epoch = not_epoch;
        self
    }

    pub fn is_v2(&self) -> bool {
        self.ext.is_some()
    }

    /// Opcode, resolved through the v2 extension when present.
    pub fn command(&self) -> u32 {
        match &self.ext {
            Some(ext) => ext.extended_cmd,
            None => self.code,
        }
    }

    pub fn payload_len(&self) -> usize {
        match &self.ext {
            Some(ext) => ext.actual_len,
            None => self.datalen,
        }
    }

    pub fn header_len(&self) -> usize {
        if self.is_v2() {
            2 * DWORD_LEN
        } else {
            DWORD_LEN
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        let first = EfxDword::populate(&[
            (CODE, self.code),
            (RESYNC, self.resync as u32),
            (DATALEN, self.datalen as u32),
            (SEQ, self.seq as u32),
            (NOT_EPOCH, self.not_epoch as u32),
            (ERROR, self.error as u32),
            (RESPONSE, self.response as u32),
            (XFLAGS, self.xflags as u32),
        ]);
        let mut out = first.to_le_bytes().to_vec();
        if let Some(ext) = &self.ext {
            let second = EfxDword::populate(&[
                (EXTENDED_CMD, ext.extended_cmd),
                (ACTUAL_LEN, ext.actual_len as u32),
                (MESSAGE_TYPE, ext.message_type),
            ]);
            out.extend_from_slice(&second.to_le_bytes());
        }
        out
    }

    /// Decode a header, returning it with the number of bytes it occupies.
    pub fn decode(bytes: &[u8]) -> McdiResult<(Self, usize)> {
        let first = read_dword(bytes, 0).ok_or_else(|| {
            McdiError::InvalidData(format!(
                "MCDI header needs {} bytes, got {}",
                DWORD_LEN,
                bytes.len()
            ))
        })?;

        let code = first.get(CODE);
        let mut header = McdiHeader {
            code,
            resync: first.is_set(RESYNC),
            datalen: first.get(DATALEN) as usize,
            seq: first.get(SEQ) as u8,
            not_epoch: first.is_set(NOT_EPOCH),
            error: first.is_set(ERROR),
            response: first.is_set(RESPONSE),
            xflags: first.get(XFLAGS) as u8,
            ext: None,
        };

        if code == MC_CMD_V2_EXTN {
            let second = read_dword(bytes, DWORD_LEN).ok_or_else(|| {
                McdiError::InvalidData(format!(
                    "MCDI v2 header needs {} bytes, got {}",
                    2 * DWORD_LEN,
                    bytes.len()
                ))
            })?;
            header.ext = Some(McdiV2Ext {
                extended_cmd: second.get(EXTENDED_CMD),
                actual_len: second.get(ACTUAL_LEN) as usize,
                message_type: second.get(MESSAGE_TYPE),
            });
        }

        let len = header.header_len();
        Ok((header, len))
    }
}

fn read_dword(bytes: &[u8], ofst: usize) -> Option<EfxDword> {
    let raw: [u8; DWORD_LEN] = bytes.get(ofst..ofst + DWORD_LEN)?.try_into().ok()?;
    Some(EfxDword::from_le_bytes(raw))
}

impl fmt::Display for McdiHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (0x{:02x}) len {} seq {}",
            if self.response { "response" } else { "request" },
            cmd_name(self.command()),
            self.command(),
            self.payload_len(),
            self.seq
        )?;
        if self.is_v2() {
            write!(f, " v2")?;
        }
        if self.error {
            write!(f, " ERROR")?;
        }
        if self.not_epoch {
            write!(f, " not-epoch")?;
        }
        if self.xflags & MCDI_HEADER_XFLAGS_EVREQ as u8 != 0 {
            write!(f, " evreq")?;
        }
        if self.xflags & MCDI_HEADER_XFLAGS_DBRET as u8 != 0 {
            write!(f, " dbret")?;
        }
        Ok(())
    }
}

/// A whole PDU: header plus payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct McdiPdu {
    pub header: McdiHeader,
    pub payload: Vec<u8>,
}

impl McdiPdu {
    pub fn request(cmd: u32, payload: &[u8], seq: u8, v2: bool) -> McdiResult<Self> {
        let header = McdiHeader::request(cmd, payload.len(), seq, v2)?;
        Ok(McdiPdu {
            header,
            payload: payload.to_vec(),
        })
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = self.header.encode();
        out.extend_from_slice(&self.payload);
        out
    }

    /// Split a captured PDU. Bytes past the declared payload length are
    /// ignored (the PDU buffer is usually larger than the message).
    pub fn decode(bytes: &[u8]) -> McdiResult<Self> {
        let (header, hdr_len) = McdiHeader::decode(bytes)?;
        let len = header.payload_len();
        let payload = bytes.get(hdr_len..hdr_len + len).ok_or(McdiError::Truncated {
            expected: hdr_len + len,
            actual: bytes.len(),
        })?;
        Ok(McdiPdu {
            header,
            payload: payload.to_vec(),
        })
    }

    /// Turn an error response into `McdiError::Mc`.
    pub fn check_error(&self) -> McdiResult<()> {
        if !self.header.error {
            return Ok(());
        }
        Err(mc_error_from_payload(self.header.command(), &self.payload))
    }
}

/// Decode the `MC_CMD_ERR_CODE`/`MC_CMD_ERR_ARG` pair of an error payload.
/// A missing argument reads as zero; a missing code reads as EIO.
pub fn mc_error_from_payload(cmd: u32, payload: &[u8]) -> McdiError {
    let code = read_dword(payload, MC_CMD_ERR_CODE_OFST)
        .map(|d| d.0)
        .unwrap_or(MC_CMD_ERR_EIO);
    let arg = read_dword(payload, MC_CMD_ERR_ARG_OFST)
        .map(|d| d.0)
        .unwrap_or(0);
    McdiError::Mc { cmd, code, arg }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_v1_request_encoding() {
        let hdr = McdiHeader::request(MC_CMD_GET_VERSION, 4, 3, false).unwrap();
        // code 0x08, resync, datalen 4, seq 3
        assert_eq!(hdr.encode(), vec![0x88, 0x04, 0x03, 0x00]);
        let (decoded, len) = McdiHeader::decode(&hdr.encode()).unwrap();
        assert_eq!(len, 4);
        assert_eq!(decoded, hdr);
        assert_eq!(decoded.command(), MC_CMD_GET_VERSION);
    }

    #[test]
    fn test_v2_request_encoding() {
        let hdr = McdiHeader::request(MC_CMD_INIT_EVQ, 0x224, 1, true).unwrap();
        let bytes = hdr.encode();
        assert_eq!(bytes.len(), 8);
        // CODE is V2_EXTN and DATALEN is zero
        assert_eq!(bytes[0] & 0x7f, 0x7f);
        assert_eq!(bytes[1], 0);
        let (decoded, len) = McdiHeader::decode(&bytes).unwrap();
        assert_eq!(len, 8);
        assert_eq!(decoded.command(), MC_CMD_INIT_EVQ);
        assert_eq!(decoded.payload_len(), 0x224);
        assert_eq!(
            decoded.ext.map(|e| e.message_type),
            Some(MC_CMD_V2_EXTN_IN_MCDI_MESSAGE_TYPE_MC)
        );
    }

    #[test]
    fn test_v1_limits() {
        assert!(McdiHeader::request(MC_CMD_GET_VERSION, MCDI_CTL_SDU_LEN_MAX_V1 + 1, 0, false)
            .is_err());
        assert!(McdiHeader::request(MC_CMD_READ_ATB, 0, 0, false).is_err());
        assert!(McdiHeader::request(MC_CMD_READ_ATB, 0, 0, true).is_ok());
        assert!(McdiHeader::request(0x8000, 0, 0, true).is_err());
        assert!(McdiHeader::request(MC_CMD_GET_VERSION, MCDI_CTL_SDU_LEN_MAX_V2 + 1, 0, true)
            .is_err());
    }

    #[test]
    fn test_v2_actual_len_boundary() {
        let hdr = McdiHeader::request(MC_CMD_INIT_EVQ, MCDI_V2_DATALEN_MAX, 0, true).unwrap();
        let (decoded, _) = McdiHeader::decode(&hdr.encode()).unwrap();
        assert_eq!(decoded.payload_len(), 0x3ff);

        // 0x400 does not fit the 10-bit ACTUAL_LEN and would decode as 0
        assert!(matches!(
            McdiHeader::request(MC_CMD_INIT_EVQ, MCDI_CTL_SDU_LEN_MAX_V2, 0, true),
            Err(McdiError::InvalidData(_))
        ));
    }

    #[test]
    fn test_response_length_limits() {
        let v1 = McdiHeader::request(MC_CMD_GET_LINK, 0, 0, false).unwrap();
        let resp = McdiHeader::response_to(&v1, MCDI_CTL_SDU_LEN_MAX_V1, false).unwrap();
        let (decoded, _) = McdiHeader::decode(&resp.encode()).unwrap();
        assert_eq!(decoded.payload_len(), MCDI_CTL_SDU_LEN_MAX_V1);
        assert!(McdiHeader::response_to(&v1, 300, false).is_err());

        let v2 = McdiHeader::request(MC_CMD_GET_CAPABILITIES, 0, 0, true).unwrap();
        let resp = McdiHeader::response_to(&v2, 300, false).unwrap();
        let (decoded, _) = McdiHeader::decode(&resp.encode()).unwrap();
        assert_eq!(decoded.payload_len(), 300);
        assert!(McdiHeader::response_to(&v2, MCDI_CTL_SDU_LEN_MAX_V2, false).is_err());
    }

    #[test]
    fn test_short_headers() {
        assert!(matches!(
            McdiHeader::decode(&[0x01, 0x02]),
            Err(McdiError::InvalidData(_))
        ));
        // v2 code but only one dword present
        assert!(matches!(
            McdiHeader::decode(&[0x7f, 0x00, 0x00, 0x00]),
            Err(McdiError::InvalidData(_))
        ));
    }

    #[test]
    fn test_response_flags() {
        let req = McdiHeader::request(MC_CMD_GET_LINK, 0, 5, false).unwrap();
        let resp = McdiHeader::response_to(&req, 28, true).unwrap();
        let bytes = resp.encode();
        // RESPONSE is bit 23, ERROR is bit 22
        assert_eq!(bytes[2] & 0xc0, 0xc0);
        let (decoded, _) = McdiHeader::decode(&bytes).unwrap();
        assert!(decoded.response && decoded.error);
        assert_eq!(decoded.payload_len(), 28);
    }

    #[test]
    fn test_pdu_decode_truncates_to_datalen() {
        let mut bytes = McdiHeader::request(MC_CMD_GET_VERSION, 4, 0, false)
            .unwrap()
            .encode();
        bytes.extend_from_slice(&[1, 2, 3, 4, 0xee, 0xee]);
        let pdu = McdiPdu::decode(&bytes).unwrap();
        assert_eq!(pdu.payload, vec![1, 2, 3, 4]);

        let short = &bytes[..6];
        assert_eq!(
            McdiPdu::decode(short),
            Err(McdiError::Truncated {
                expected: 8,
                actual: 6
            })
        );
    }

    #[test]
    fn test_error_response() {
        let req = McdiHeader::request(MC_CMD_GET_ASSERTS, 4, 0, false).unwrap();
        let mut payload = MC_CMD_ERR_EPERM.to_le_bytes().to_vec();
        payload.extend_from_slice(&7u32.to_le_bytes());
        let pdu = McdiPdu {
            header: McdiHeader::response_to(&req, payload.len(), true).unwrap(),
            payload,
        };
        assert_eq!(
            pdu.check_error(),
            Err(McdiError::Mc {
                cmd: MC_CMD_GET_ASSERTS,
                code: MC_CMD_ERR_EPERM,
                arg: 7
            })
        );
        assert_eq!(
            mc_error_from_payload(MC_CMD_REBOOT, &[]),
            McdiError::Mc {
                cmd: MC_CMD_REBOOT,
                code: MC_CMD_ERR_EIO,
                arg: 0
            }
        );
    }

    #[test]
    fn test_display() {
        let hdr = McdiHeader::request(MC_CMD_GET_LINK, 0, 2, false)
            .unwrap()
            .with_xflags(MCDI_HEADER_XFLAGS_EVREQ as u8);
        assert_eq!(hdr.to_string(), "request GET_LINK (0x29) len 0 seq 2 evreq");
    }
}
