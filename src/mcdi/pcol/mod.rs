/*
 * SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
 *
 * SPDX-License-Identifier: GPL-2.0-or-later
 */
//! MCDI wire protocol catalogue.
//!
//! Names follow the firmware's own naming so that a constant can be found
//! by grepping for the same identifier on either side of the interface:
//!
//! * `*_OFST` / `*_LEN`: byte offset and length of a payload field
//! * `*_LBN` / `*_WIDTH`: lowest bit number and width inside a dword
//! * `*_LENMIN` / `*_LENMAX` / `*_MINNUM` / `*_MAXNUM`: variable-length bounds
//!
//! All payload fields are little-endian unless noted otherwise.
#![allow(clippy::identity_op)]

/// Define a group of named values together with a `(value, name)` table.
///
/// The table is what the string lookups use, so a printed name always
/// belongs to the value it is printed for.
macro_rules! mcdi_table {
    ($(#[$meta:meta])* $table:ident: $ty:ty { $($(#[$vmeta:meta])* $name:ident = $val:expr,)* }) => {
        $($(#[$vmeta])* pub const $name: $ty = $val;)*
        $(#[$meta])*
        pub const $table: &[($ty, &str)] = &[$(($name, stringify!($name)),)*];
    };
}

mod cmds;
mod errors;
mod events;
mod opcodes;

pub use cmds::*;
pub use errors::*;
pub use events::*;
pub use opcodes::*;

/* Shared memory mailbox (Siena-era SMEM transport). */
pub const MC_SMEM_P0_DOORBELL_OFST: u32 = 0x000;
pub const MC_SMEM_P1_DOORBELL_OFST: u32 = 0x004;
pub const MC_SMEM_P0_PDU_OFST: u32 = 0x008;
pub const MC_SMEM_P1_PDU_OFST: u32 = 0x108;
pub const MC_SMEM_PDU_LEN: u32 = 0x100;
pub const MC_SMEM_P0_PTP_TIME_OFST: u32 = 0x7f0;
pub const MC_SMEM_P0_STATUS_OFST: u32 = 0x7f8;
pub const MC_SMEM_P1_STATUS_OFST: u32 = 0x7fc;

/* Values written to the status dword by the MC. */
pub const MC_STATUS_DWORD_REBOOT: u32 = 0xb007b007;
pub const MC_STATUS_DWORD_ASSERT: u32 = 0xdeaddead;

/* Current MCDI protocol version. */
pub const MCDI_PCOL_VERSION: u32 = 2;

/* MCDI v1 header, one dword at the start of every PDU. */
pub const MCDI_HEADER_OFST: usize = 0;
pub const MCDI_HEADER_CODE_LBN: u32 = 0;
pub const MCDI_HEADER_CODE_WIDTH: u32 = 7;
pub const MCDI_HEADER_RESYNC_LBN: u32 = 7;
pub const MCDI_HEADER_RESYNC_WIDTH: u32 = 1;
pub const MCDI_HEADER_DATALEN_LBN: u32 = 8;
pub const MCDI_HEADER_DATALEN_WIDTH: u32 = 8;
pub const MCDI_HEADER_SEQ_LBN: u32 = 16;
pub const MCDI_HEADER_SEQ_WIDTH: u32 = 4;
pub const MCDI_HEADER_RSVD_LBN: u32 = 20;
pub const MCDI_HEADER_RSVD_WIDTH: u32 = 1;
pub const MCDI_HEADER_NOT_EPOCH_LBN: u32 = 21;
pub const MCDI_HEADER_NOT_EPOCH_WIDTH: u32 = 1;
pub const MCDI_HEADER_ERROR_LBN: u32 = 22;
pub const MCDI_HEADER_ERROR_WIDTH: u32 = 1;
pub const MCDI_HEADER_RESPONSE_LBN: u32 = 23;
pub const MCDI_HEADER_RESPONSE_WIDTH: u32 = 1;
pub const MCDI_HEADER_XFLAGS_LBN: u32 = 24;
pub const MCDI_HEADER_XFLAGS_WIDTH: u32 = 8;
/* Request response using event */
pub const MCDI_HEADER_XFLAGS_EVREQ: u32 = 0x01;
/* Request (and signal) early doorbell return */
pub const MCDI_HEADER_XFLAGS_DBRET: u32 = 0x02;

/* Maximum number of payload bytes */
pub const MCDI_CTL_SDU_LEN_MAX_V1: usize = 0xfc;
pub const MCDI_CTL_SDU_LEN_MAX_V2: usize = 0x400;
pub const MCDI_CTL_SDU_LEN_MAX: usize = MCDI_CTL_SDU_LEN_MAX_V2;

/* The MC can generate events for two reasons: command completion and
 * asynchronous notification. Both share the layout below.
 */
pub const MCDI_EVENT_DATA_OFST: usize = 0;
pub const MCDI_EVENT_DATA_LEN: usize = 4;
pub const MCDI_EVENT_DATA_LBN: u32 = 0;
pub const MCDI_EVENT_DATA_WIDTH: u32 = 32;
pub const MCDI_EVENT_CONT_LBN: u32 = 32;
pub const MCDI_EVENT_CONT_WIDTH: u32 = 1;
pub const MCDI_EVENT_LEVEL_LBN: u32 = 33;
pub const MCDI_EVENT_LEVEL_WIDTH: u32 = 3;
/* enum: Info. */
pub const MCDI_EVENT_LEVEL_INFO: u32 = 0x0;
/* enum: Warning. */
pub const MCDI_EVENT_LEVEL_WARN: u32 = 0x1;
/* enum: Error. */
pub const MCDI_EVENT_LEVEL_ERR: u32 = 0x2;
/* enum: Fatal. */
pub const MCDI_EVENT_LEVEL_FATAL: u32 = 0x3;
pub const MCDI_EVENT_SRC_LBN: u32 = 36;
pub const MCDI_EVENT_SRC_WIDTH: u32 = 8;
pub const MCDI_EVENT_CODE_LBN: u32 = 44;
pub const MCDI_EVENT_CODE_WIDTH: u32 = 8;

/* Completion of a command. */
pub const MCDI_EVENT_CMDDONE_SEQ_LBN: u32 = 0;
pub const MCDI_EVENT_CMDDONE_SEQ_WIDTH: u32 = 8;
pub const MCDI_EVENT_CMDDONE_DATALEN_LBN: u32 = 8;
pub const MCDI_EVENT_CMDDONE_DATALEN_WIDTH: u32 = 8;
pub const MCDI_EVENT_CMDDONE_ERRNO_LBN: u32 = 16;
pub const MCDI_EVENT_CMDDONE_ERRNO_WIDTH: u32 = 8;

pub const MCDI_EVENT_LINKCHANGE_LP_CAP_LBN: u32 = 0;
pub const MCDI_EVENT_LINKCHANGE_LP_CAP_WIDTH: u32 = 16;
pub const MCDI_EVENT_LINKCHANGE_SPEED_LBN: u32 = 16;
pub const MCDI_EVENT_LINKCHANGE_SPEED_WIDTH: u32 = 4;
/* enum: Link is down or link speed could not be determined */
pub const MCDI_EVENT_LINKCHANGE_SPEED_UNKNOWN: u32 = 0x0;
/* enum: 100Mbs */
pub const MCDI_EVENT_LINKCHANGE_SPEED_100M: u32 = 0x1;
/* enum: 1Gbs */
pub const MCDI_EVENT_LINKCHANGE_SPEED_1G: u32 = 0x2;
/* enum: 10Gbs */
pub const MCDI_EVENT_LINKCHANGE_SPEED_10G: u32 = 0x3;
/* enum: 40Gbs */
pub const MCDI_EVENT_LINKCHANGE_SPEED_40G: u32 = 0x4;
/* enum: 25Gbs */
pub const MCDI_EVENT_LINKCHANGE_SPEED_25G: u32 = 0x5;
/* enum: 50Gbs */
pub const MCDI_EVENT_LINKCHANGE_SPEED_50G: u32 = 0x6;
/* enum: 100Gbs */
pub const MCDI_EVENT_LINKCHANGE_SPEED_100G: u32 = 0x7;
pub const MCDI_EVENT_LINKCHANGE_FCNTL_LBN: u32 = 20;
pub const MCDI_EVENT_LINKCHANGE_FCNTL_WIDTH: u32 = 4;
pub const MCDI_EVENT_LINKCHANGE_LINK_FLAGS_LBN: u32 = 24;
pub const MCDI_EVENT_LINKCHANGE_LINK_FLAGS_WIDTH: u32 = 8;

pub const MCDI_EVENT_SENSOREVT_MONITOR_LBN: u32 = 0;
pub const MCDI_EVENT_SENSOREVT_MONITOR_WIDTH: u32 = 8;
pub const MCDI_EVENT_SENSOREVT_STATE_LBN: u32 = 8;
pub const MCDI_EVENT_SENSOREVT_STATE_WIDTH: u32 = 8;
pub const MCDI_EVENT_SENSOREVT_VALUE_LBN: u32 = 16;
pub const MCDI_EVENT_SENSOREVT_VALUE_WIDTH: u32 = 16;

pub const MCDI_EVENT_FWALERT_DATA_LBN: u32 = 8;
pub const MCDI_EVENT_FWALERT_DATA_WIDTH: u32 = 24;
pub const MCDI_EVENT_FWALERT_REASON_LBN: u32 = 0;
pub const MCDI_EVENT_FWALERT_REASON_WIDTH: u32 = 8;
/* enum: Physical Memory Access MCDI Fault */
pub const MCDI_EVENT_FWALERT_REASON_SRAM_ACCESS: u32 = 0x1;

pub const MCDI_EVENT_FLR_VF_LBN: u32 = 0;
pub const MCDI_EVENT_FLR_VF_WIDTH: u32 = 8;

pub const MCDI_EVENT_TX_ERR_TXQ_LBN: u32 = 0;
pub const MCDI_EVENT_TX_ERR_TXQ_WIDTH: u32 = 12;
pub const MCDI_EVENT_TX_ERR_TYPE_LBN: u32 = 12;
pub const MCDI_EVENT_TX_ERR_TYPE_WIDTH: u32 = 4;
/* enum: Descriptor loader reported failure */
pub const MCDI_EVENT_TX_ERR_DL_FAIL: u32 = 0x1;
/* enum: Descriptor ring empty and no EOP seen for packet */
pub const MCDI_EVENT_TX_ERR_NO_EOP: u32 = 0x2;
/* enum: Overlength packet */
pub const MCDI_EVENT_TX_ERR_2BIG: u32 = 0x3;
/* enum: Malformed option descriptor */
pub const MCDI_EVENT_TX_BAD_OPTDESC: u32 = 0x5;
/* enum: Option descriptor part way through a packet */
pub const MCDI_EVENT_TX_OPT_IN_PKT: u32 = 0x8;
/* enum: DMA or PIO data access error */
pub const MCDI_EVENT_TX_ERR_BAD_DMA_OR_PIO: u32 = 0x9;
pub const MCDI_EVENT_TX_ERR_INFO_LBN: u32 = 16;
pub const MCDI_EVENT_TX_ERR_INFO_WIDTH: u32 = 16;

pub const MCDI_EVENT_TX_FLUSH_TO_DRIVER_LBN: u32 = 12;
pub const MCDI_EVENT_TX_FLUSH_TO_DRIVER_WIDTH: u32 = 1;
pub const MCDI_EVENT_TX_FLUSH_TXQ_LBN: u32 = 0;
pub const MCDI_EVENT_TX_FLUSH_TXQ_WIDTH: u32 = 12;

pub const MCDI_EVENT_PTP_ERR_TYPE_LBN: u32 = 0;
pub const MCDI_EVENT_PTP_ERR_TYPE_WIDTH: u32 = 8;
/* enum: PLL lost lock */
pub const MCDI_EVENT_PTP_ERR_PLL_LOST: u32 = 0x1;
/* enum: Filter overflow (PDMA) */
pub const MCDI_EVENT_PTP_ERR_FILTER: u32 = 0x2;
/* enum: FIFO overflow (FPGA) */
pub const MCDI_EVENT_PTP_ERR_FIFO: u32 = 0x3;
/* enum: Merge queue overflow */
pub const MCDI_EVENT_PTP_ERR_QUEUE: u32 = 0x4;

pub const MCDI_EVENT_RX_ERR_RXQ_LBN: u32 = 0;
pub const MCDI_EVENT_RX_ERR_RXQ_WIDTH: u32 = 12;
pub const MCDI_EVENT_RX_ERR_TYPE_LBN: u32 = 12;
pub const MCDI_EVENT_RX_ERR_TYPE_WIDTH: u32 = 4;
pub const MCDI_EVENT_RX_ERR_INFO_LBN: u32 = 16;
pub const MCDI_EVENT_RX_ERR_INFO_WIDTH: u32 = 16;

pub const MCDI_EVENT_RX_FLUSH_TO_DRIVER_LBN: u32 = 12;
pub const MCDI_EVENT_RX_FLUSH_TO_DRIVER_WIDTH: u32 = 1;
pub const MCDI_EVENT_RX_FLUSH_RXQ_LBN: u32 = 0;
pub const MCDI_EVENT_RX_FLUSH_RXQ_WIDTH: u32 = 12;

pub const MCDI_EVENT_MC_REBOOT_COUNT_LBN: u32 = 0;
pub const MCDI_EVENT_MC_REBOOT_COUNT_WIDTH: u32 = 16;

/* Error responses: the payload holds the MC error code and an argument. */
pub const MC_CMD_ERR_CODE_OFST: usize = 0;
pub const MC_CMD_ERR_CODE_LEN: usize = 4;
pub const MC_CMD_ERR_ARG_OFST: usize = 4;
pub const MC_CMD_ERR_ARG_LEN: usize = 4;
pub const MC_CMD_ERR_PROXY_PENDING_HANDLE_OFST: usize = 4;

/* Second header dword for v2 (extended) requests and responses. */
pub const MC_CMD_V2_EXTN_IN_LEN: usize = 4;
pub const MC_CMD_V2_EXTN_IN_EXTENDED_CMD_LBN: u32 = 0;
pub const MC_CMD_V2_EXTN_IN_EXTENDED_CMD_WIDTH: u32 = 15;
pub const MC_CMD_V2_EXTN_IN_UNUSED_LBN: u32 = 15;
pub const MC_CMD_V2_EXTN_IN_UNUSED_WIDTH: u32 = 1;
pub const MC_CMD_V2_EXTN_IN_ACTUAL_LEN_LBN: u32 = 16;
pub const MC_CMD_V2_EXTN_IN_ACTUAL_LEN_WIDTH: u32 = 10;
pub const MC_CMD_V2_EXTN_IN_UNUSED2_LBN: u32 = 26;
pub const MC_CMD_V2_EXTN_IN_UNUSED2_WIDTH: u32 = 2;
pub const MC_CMD_V2_EXTN_IN_MESSAGE_TYPE_LBN: u32 = 28;
pub const MC_CMD_V2_EXTN_IN_MESSAGE_TYPE_WIDTH: u32 = 4;
/* enum: MCDI command directed to or response originating from the MC. */
pub const MC_CMD_V2_EXTN_IN_MCDI_MESSAGE_TYPE_MC: u32 = 0x0;
/* enum: MCDI command directed to a TSA controller. */
pub const MC_CMD_V2_EXTN_IN_MCDI_MESSAGE_TYPE_TSA: u32 = 0x1;

/* Instance number meaning "allocate any free instance". */
pub const MC_CMD_RESOURCE_INSTANCE_ANY: u32 = 0xffffffff;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_fields_tile_the_dword() {
        let fields = [
            (MCDI_HEADER_CODE_LBN, MCDI_HEADER_CODE_WIDTH),
            (MCDI_HEADER_RESYNC_LBN, MCDI_HEADER_RESYNC_WIDTH),
            (MCDI_HEADER_DATALEN_LBN, MCDI_HEADER_DATALEN_WIDTH),
            (MCDI_HEADER_SEQ_LBN, MCDI_HEADER_SEQ_WIDTH),
            (MCDI_HEADER_RSVD_LBN, MCDI_HEADER_RSVD_WIDTH),
            (MCDI_HEADER_NOT_EPOCH_LBN, MCDI_HEADER_NOT_EPOCH_WIDTH),
            (MCDI_HEADER_ERROR_LBN, MCDI_HEADER_ERROR_WIDTH),
            (MCDI_HEADER_RESPONSE_LBN, MCDI_HEADER_RESPONSE_WIDTH),
            (MCDI_HEADER_XFLAGS_LBN, MCDI_HEADER_XFLAGS_WIDTH),
        ];
        let mut next = 0;
        for (lbn, width) in fields {
            assert_eq!(lbn, next);
            next = lbn + width;
        }
        assert_eq!(next, 32);
    }

    #[test]
    fn test_v2_extension_fields_tile_the_dword() {
        assert_eq!(
            MC_CMD_V2_EXTN_IN_ACTUAL_LEN_LBN,
            MC_CMD_V2_EXTN_IN_UNUSED_LBN + MC_CMD_V2_EXTN_IN_UNUSED_WIDTH
        );
        assert_eq!(
            MC_CMD_V2_EXTN_IN_MESSAGE_TYPE_LBN + MC_CMD_V2_EXTN_IN_MESSAGE_TYPE_WIDTH,
            32
        );
        // ACTUAL_LEN tops out one byte short of the v2 SDU limit
        assert!(MCDI_CTL_SDU_LEN_MAX_V2 <= 1 << MC_CMD_V2_EXTN_IN_ACTUAL_LEN_WIDTH);
    }

    #[test]
    fn test_smem_layout() {
        assert_eq!(
            MC_SMEM_P1_PDU_OFST - MC_SMEM_P0_PDU_OFST,
            MC_SMEM_PDU_LEN
        );
        assert_eq!(MCDI_CTL_SDU_LEN_MAX_V1, MC_SMEM_PDU_LEN as usize - 4);
        assert_eq!(MC_SMEM_P1_STATUS_OFST, MC_SMEM_P0_STATUS_OFST + 4);
    }

    #[test]
    fn test_event_layout() {
        assert_eq!(MCDI_EVENT_CODE_LBN + MCDI_EVENT_CODE_WIDTH, 52);
        assert_eq!(MCDI_EVENT_SRC_LBN, MCDI_EVENT_LEVEL_LBN + MCDI_EVENT_LEVEL_WIDTH);
        assert_eq!(MCDI_EVENT_CONT_LBN, MCDI_EVENT_DATA_WIDTH);
    }
}
