/*
 * SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
 *
 * SPDX-License-Identifier: GPL-2.0-or-later
 */
//! MC event decode.

use std::fmt;

use crate::error::{McdiError, McdiResult};
use crate::mcdi::dword::{EfxDword, EfxQword, Field};
use crate::mcdi::pcol::*;
use crate::mcdi::strings::{event_name, fcntl_name, sensor_name, sensor_state_name, EVENT_LEVEL_VALS};

const DATA: Field = Field::new(MCDI_EVENT_DATA_LBN, MCDI_EVENT_DATA_WIDTH);
const CONT: Field = Field::new(MCDI_EVENT_CONT_LBN, MCDI_EVENT_CONT_WIDTH);
const LEVEL: Field = Field::new(MCDI_EVENT_LEVEL_LBN, MCDI_EVENT_LEVEL_WIDTH);
const SRC: Field = Field::new(MCDI_EVENT_SRC_LBN, MCDI_EVENT_SRC_WIDTH);
const CODE: Field = Field::new(MCDI_EVENT_CODE_LBN, MCDI_EVENT_CODE_WIDTH);

/// Decoded payload of an MC event, by event code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum McdiEventKind {
    CmdDone { seq: u8, datalen: u8, errno: u8 },
    LinkChange { lp_cap: u16, speed_mbps: u32, fcntl: u8, link_flags: u8 },
    SensorEvt { monitor: u8, state: u8, value: u16 },
    FwAlert { reason: u8, data: u32 },
    Flr { vf: u8 },
    TxErr { txq: u16, kind: u8, info: u16 },
    TxFlush { txq: u16, to_driver: bool },
    RxErr { rxq: u16, kind: u8, info: u16 },
    RxFlush { rxq: u16, to_driver: bool },
    McReboot { count: u16 },
    Reboot,
    BadAssert,
    MacStatsDma,
    PtpFault { kind: u8 },
    Other(u32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct McdiEvent {
    pub code: u32,
    pub level: u32,
    pub src: u32,
    pub cont: bool,
    pub data: u32,
    pub kind: McdiEventKind,
}

/// Link speed in Mb/s for a `MCDI_EVENT_LINKCHANGE_SPEED_*` code; 0 when
/// the link is down or the code is unknown.
pub fn link_speed_mbps(speed: u32) -> u32 {
    match speed {
        MCDI_EVENT_LINKCHANGE_SPEED_100M => 100,
        MCDI_EVENT_LINKCHANGE_SPEED_1G => 1000,
        MCDI_EVENT_LINKCHANGE_SPEED_10G => 10000,
        MCDI_EVENT_LINKCHANGE_SPEED_40G => 40000,
        MCDI_EVENT_LINKCHANGE_SPEED_25G => 25000,
        MCDI_EVENT_LINKCHANGE_SPEED_50G => 50000,
        MCDI_EVENT_LINKCHANGE_SPEED_100G => 100000,
        _ => 0,
    }
}

fn sub(data: EfxDword, lbn: u32, width: u32) -> u32 {
    data.get(Field::new(lbn, width))
}

impl McdiEvent {
    pub fn from_qword(raw: u64) -> Self {
        let q = EfxQword(raw);
        let code = q.get(CODE) as u32;
        let data = q.get(DATA) as u32;
        let d = EfxDword(data);

        let kind = match code {
            MCDI_EVENT_CODE_CMDDONE => McdiEventKind::CmdDone {
                seq: sub(d, MCDI_EVENT_CMDDONE_SEQ_LBN, MCDI_EVENT_CMDDONE_SEQ_WIDTH) as u8,
                datalen: sub(d, MCDI_EVENT_CMDDONE_DATALEN_LBN, MCDI_EVENT_CMDDONE_DATALEN_WIDTH)
                    as u8,
                errno: sub(d, MCDI_EVENT_CMDDONE_ERRNO_LBN, MCDI_EVENT_CMDDONE_ERRNO_WIDTH) as u8,
            },
            MCDI_EVENT_CODE_LINKCHANGE => McdiEventKind::LinkChange {
                lp_cap: sub(d, MCDI_EVENT_LINKCHANGE_LP_CAP_LBN, MCDI_EVENT_LINKCHANGE_LP_CAP_WIDTH)
                    as u16,
                speed_mbps: link_speed_mbps(sub(
                    d,
                    MCDI_EVENT_LINKCHANGE_SPEED_LBN,
                    MCDI_EVENT_LINKCHANGE_SPEED_WIDTH,
                )),
                fcntl: sub(d, MCDI_EVENT_LINKCHANGE_FCNTL_LBN, MCDI_EVENT_LINKCHANGE_FCNTL_WIDTH)
                    as u8,
                link_flags: sub(
                    d,
                    MCDI_EVENT_LINKCHANGE_LINK_FLAGS_LBN,
                    MCDI_EVENT_LINKCHANGE_LINK_FLAGS_WIDTH,
                ) as u8,
            },
            MCDI_EVENT_CODE_SENSOREVT => McdiEventKind::SensorEvt {
                monitor: sub(d, MCDI_EVENT_SENSOREVT_MONITOR_LBN, MCDI_EVENT_SENSOREVT_MONITOR_WIDTH)
                    as u8,
                state: sub(d, MCDI_EVENT_SENSOREVT_STATE_LBN, MCDI_EVENT_SENSOREVT_STATE_WIDTH) as u8,
                value: sub(d, MCDI_EVENT_SENSOREVT_VALUE_LBN, MCDI_EVENT_SENSOREVT_VALUE_WIDTH) as u16,
            },
            MCDI_EVENT_CODE_FWALERT => McdiEventKind::FwAlert {
                reason: sub(d, MCDI_EVENT_FWALERT_REASON_LBN, MCDI_EVENT_FWALERT_REASON_WIDTH) as u8,
                data: sub(d, MCDI_EVENT_FWALERT_DATA_LBN, MCDI_EVENT_FWALERT_DATA_WIDTH),
            },
            MCDI_EVENT_CODE_FLR => McdiEventKind::Flr {
                vf: sub(d, MCDI_EVENT_FLR_VF_LBN, MCDI_EVENT_FLR_VF_WIDTH) as u8,
            },
            MCDI_EVENT_CODE_TX_ERR => McdiEventKind::TxErr {
                txq: sub(d, MCDI_EVENT_TX_ERR_TXQ_LBN, MCDI_EVENT_TX_ERR_TXQ_WIDTH) as u16,
                kind: sub(d, MCDI_EVENT_TX_ERR_TYPE_LBN, MCDI_EVENT_TX_ERR_TYPE_WIDTH) as u8,
                info: sub(d, MCDI_EVENT_TX_ERR_INFO_LBN, MCDI_EVENT_TX_ERR_INFO_WIDTH) as u16,
            },
            MCDI_EVENT_CODE_TX_FLUSH => McdiEventKind::TxFlush {
                txq: sub(d, MCDI_EVENT_TX_FLUSH_TXQ_LBN, MCDI_EVENT_TX_FLUSH_TXQ_WIDTH) as u16,
                to_driver: sub(
                    d,
                    MCDI_EVENT_TX_FLUSH_TO_DRIVER_LBN,
                    MCDI_EVENT_TX_FLUSH_TO_DRIVER_WIDTH,
                ) != 0,
            },
            MCDI_EVENT_CODE_RX_ERR => McdiEventKind::RxErr {
                rxq: sub(d, MCDI_EVENT_RX_ERR_RXQ_LBN, MCDI_EVENT_RX_ERR_RXQ_WIDTH) as u16,
                kind: sub(d, MCDI_EVENT_RX_ERR_TYPE_LBN, MCDI_EVENT_RX_ERR_TYPE_WIDTH) as u8,
                info: sub(d, MCDI_EVENT_RX_ERR_INFO_LBN, MCDI_EVENT_RX_ERR_INFO_WIDTH) as u16,
            },
            MCDI_EVENT_CODE_RX_FLUSH => McdiEventKind::RxFlush {
                rxq: sub(d, MCDI_EVENT_RX_FLUSH_RXQ_LBN, MCDI_EVENT_RX_FLUSH_RXQ_WIDTH) as u16,
                to_driver: sub(
                    d,
                    MCDI_EVENT_RX_FLUSH_TO_DRIVER_LBN,
                    MCDI_EVENT_RX_FLUSH_TO_DRIVER_WIDTH,
                ) != 0,
            },
            MCDI_EVENT_CODE_MC_REBOOT => McdiEventKind::McReboot {
                count: sub(d, MCDI_EVENT_MC_REBOOT_COUNT_LBN, MCDI_EVENT_MC_REBOOT_COUNT_WIDTH) as u16,
            },
            MCDI_EVENT_CODE_REBOOT => McdiEventKind::Reboot,
            MCDI_EVENT_CODE_BADSSERT => McdiEventKind::BadAssert,
            MCDI_EVENT_CODE_MAC_STATS_DMA => McdiEventKind::MacStatsDma,
            MCDI_EVENT_CODE_PTP_FAULT => McdiEventKind::PtpFault {
                kind: sub(d, MCDI_EVENT_PTP_ERR_TYPE_LBN, MCDI_EVENT_PTP_ERR_TYPE_WIDTH) as u8,
            },
            other => McdiEventKind::Other(other),
        };

        McdiEvent {
            code,
            level: q.get(LEVEL) as u32,
            src: q.get(SRC) as u32,
            cont: q.is_set(CONT),
            data,
            kind,
        }
    }

    /// Decode an event from its 8 little-endian bytes.
    pub fn from_bytes(bytes: &[u8]) -> McdiResult<Self> {
        let raw: [u8; 8] = bytes.try_into().map_err(|_| {
            McdiError::InvalidData(format!("MC event must be 8 bytes, got {}", bytes.len()))
        })?;
        Ok(Self::from_qword(u64::from_le_bytes(raw)))
    }
}

impl fmt::Display for McdiEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) level {}",
            event_name(self.code),
            self.code,
            crate::error::val2str(self.level, &EVENT_LEVEL_VALS)
        )?;
        if self.cont {
            write!(f, " cont")?;
        }
        match &self.kind {
            McdiEventKind::CmdDone { seq, datalen, errno } => {
                write!(f, ": seq {} datalen {} errno {}", seq, datalen, errno)
            }
            McdiEventKind::LinkChange {
                lp_cap,
                speed_mbps,
                fcntl,
                link_flags,
            } => write!(
                f,
                ": speed {} Mb/s fcntl {} flags 0x{:02x} lp_cap 0x{:04x}",
                speed_mbps,
                fcntl_name(*fcntl as u32),
                link_flags,
                lp_cap
            ),
            McdiEventKind::SensorEvt {
                monitor,
                state,
                value,
            } => write!(
                f,
                ": sensor {} state {} value {}",
                sensor_name(*monitor as u32),
                sensor_state_name(*state as u32),
                value
            ),
            McdiEventKind::FwAlert { reason, data } => {
                write!(f, ": reason {} data 0x{:06x}", reason, data)
            }
            McdiEventKind::Flr { vf } => write!(f, ": vf {}", vf),
            McdiEventKind::TxErr { txq, kind, info } => {
                write!(f, ": txq {} type {} info 0x{:04x}", txq, kind, info)
            }
            McdiEventKind::TxFlush { txq, to_driver } => {
                write!(f, ": txq {} to_driver {}", txq, to_driver)
            }
            McdiEventKind::RxErr { rxq, kind, info } => {
                write!(f, ": rxq {} type {} info 0x{:04x}", rxq, kind, info)
            }
            McdiEventKind::RxFlush { rxq, to_driver } => {
                write!(f, ": rxq {} to_driver {}", rxq, to_driver)
            }
            McdiEventKind::McReboot { count } => write!(f, ": boot count {}", count),
            McdiEventKind::PtpFault { kind } => write!(f, ": ptp error {}", kind),
            McdiEventKind::Reboot
            | McdiEventKind::BadAssert
            | McdiEventKind::MacStatsDma
            | McdiEventKind::Other(_) => write!(f, ": data 0x{:08x}", self.data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(code: u32, data: u32) -> u64 {
        EfxQword::populate(&[(CODE, code as u64), (DATA, data as u64)]).0
    }

    #[test]
    fn test_cmddone() {
        let ev = McdiEvent::from_qword(event(MCDI_EVENT_CODE_CMDDONE, 0x00_05_1c_03));
        assert_eq!(
            ev.kind,
            McdiEventKind::CmdDone {
                seq: 3,
                datalen: 0x1c,
                errno: 5
            }
        );
    }

    #[test]
    fn test_linkchange() {
        let data = EfxDword::populate(&[
            (Field::new(MCDI_EVENT_LINKCHANGE_LP_CAP_LBN, 16), 0x0040),
            (
                Field::new(MCDI_EVENT_LINKCHANGE_SPEED_LBN, 4),
                MCDI_EVENT_LINKCHANGE_SPEED_10G,
            ),
            (Field::new(MCDI_EVENT_LINKCHANGE_FCNTL_LBN, 4), MC_CMD_FCNTL_BIDIR),
            (Field::new(MCDI_EVENT_LINKCHANGE_LINK_FLAGS_LBN, 8), 0x01),
        ]);
        let ev = McdiEvent::from_qword(event(MCDI_EVENT_CODE_LINKCHANGE, data.0));
        assert_eq!(
            ev.kind,
            McdiEventKind::LinkChange {
                lp_cap: 0x40,
                speed_mbps: 10000,
                fcntl: MC_CMD_FCNTL_BIDIR as u8,
                link_flags: 1
            }
        );
        assert_eq!(
            ev.to_string(),
            "LINKCHANGE (4) level info: speed 10000 Mb/s fcntl BIDIR flags 0x01 lp_cap 0x0040"
        );
    }

    #[test]
    fn test_speed_codes() {
        assert_eq!(link_speed_mbps(MCDI_EVENT_LINKCHANGE_SPEED_UNKNOWN), 0);
        assert_eq!(link_speed_mbps(MCDI_EVENT_LINKCHANGE_SPEED_25G), 25000);
        assert_eq!(link_speed_mbps(MCDI_EVENT_LINKCHANGE_SPEED_100G), 100000);
        assert_eq!(link_speed_mbps(0xf), 0);
    }

    #[test]
    fn test_flush_and_reboot() {
        let ev = McdiEvent::from_qword(event(MCDI_EVENT_CODE_TX_FLUSH, 0x1000 | 0x2a));
        assert_eq!(
            ev.kind,
            McdiEventKind::TxFlush {
                txq: 0x2a,
                to_driver: true
            }
        );
        let ev = McdiEvent::from_qword(event(MCDI_EVENT_CODE_MC_REBOOT, 0x0007));
        assert_eq!(ev.kind, McdiEventKind::McReboot { count: 7 });
    }

    #[test]
    fn test_header_bits_and_unknown_code() {
        let raw = EfxQword::populate(&[
            (CODE, MCDI_EVENT_CODE_TESTGEN as u64),
            (LEVEL, MCDI_EVENT_LEVEL_FATAL as u64),
            (CONT, 1),
            (SRC, 0x12),
        ])
        .0;
        let ev = McdiEvent::from_bytes(&raw.to_le_bytes()).unwrap();
        assert_eq!(ev.kind, McdiEventKind::Other(MCDI_EVENT_CODE_TESTGEN));
        assert_eq!(ev.level, MCDI_EVENT_LEVEL_FATAL);
        assert_eq!(ev.src, 0x12);
        assert!(ev.cont);
        assert!(McdiEvent::from_bytes(&[0u8; 4]).is_err());
    }
}
