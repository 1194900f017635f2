/*
 * SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
 *
 * SPDX-License-Identifier: GPL-2.0-or-later
 */
// 各命令请求/响应的字段布局

/* MC_CMD_READ32
 * Read data from the MC memory map.
 */
pub const MC_CMD_READ32_IN_LEN: usize = 8;
pub const MC_CMD_READ32_IN_ADDR_OFST: usize = 0;
pub const MC_CMD_READ32_IN_ADDR_LEN: usize = 4;
pub const MC_CMD_READ32_IN_NUMWORDS_OFST: usize = 4;
pub const MC_CMD_READ32_IN_NUMWORDS_LEN: usize = 4;
pub const MC_CMD_READ32_OUT_LENMIN: usize = 4;
pub const MC_CMD_READ32_OUT_LENMAX: usize = 252;
#[allow(non_snake_case)]
pub const fn MC_CMD_READ32_OUT_LEN(num: usize) -> usize {
    4 * num
}
pub const MC_CMD_READ32_OUT_BUFFER_OFST: usize = 0;
pub const MC_CMD_READ32_OUT_BUFFER_LEN: usize = 4;
pub const MC_CMD_READ32_OUT_BUFFER_MINNUM: usize = 1;
pub const MC_CMD_READ32_OUT_BUFFER_MAXNUM: usize = 63;

/* MC_CMD_WRITE32
 * Write data into the MC memory map.
 */
pub const MC_CMD_WRITE32_IN_LENMIN: usize = 8;
pub const MC_CMD_WRITE32_IN_LENMAX: usize = 252;
#[allow(non_snake_case)]
pub const fn MC_CMD_WRITE32_IN_LEN(num: usize) -> usize {
    4 + 4 * num
}
pub const MC_CMD_WRITE32_IN_ADDR_OFST: usize = 0;
pub const MC_CMD_WRITE32_IN_ADDR_LEN: usize = 4;
pub const MC_CMD_WRITE32_IN_BUFFER_OFST: usize = 4;
pub const MC_CMD_WRITE32_IN_BUFFER_LEN: usize = 4;
pub const MC_CMD_WRITE32_IN_BUFFER_MINNUM: usize = 1;
pub const MC_CMD_WRITE32_IN_BUFFER_MAXNUM: usize = 62;
pub const MC_CMD_WRITE32_OUT_LEN: usize = 0;

/* MC_CMD_GET_BOOT_STATUS
 * Get the instruction address from which the MC booted.
 */
pub const MC_CMD_GET_BOOT_STATUS_IN_LEN: usize = 0;
pub const MC_CMD_GET_BOOT_STATUS_OUT_LEN: usize = 8;
pub const MC_CMD_GET_BOOT_STATUS_OUT_BOOT_OFFSET_OFST: usize = 0;
pub const MC_CMD_GET_BOOT_STATUS_OUT_BOOT_OFFSET_LEN: usize = 4;
/* enum: indicates that the MC wasn't flash booted */
pub const MC_CMD_GET_BOOT_STATUS_OUT_BOOT_OFFSET_NULL: u32 = 0xdeadbeef;
pub const MC_CMD_GET_BOOT_STATUS_OUT_FLAGS_OFST: usize = 4;
pub const MC_CMD_GET_BOOT_STATUS_OUT_FLAGS_LEN: usize = 4;
pub const MC_CMD_GET_BOOT_STATUS_OUT_FLAGS_WATCHDOG_LBN: u32 = 0;
pub const MC_CMD_GET_BOOT_STATUS_OUT_FLAGS_WATCHDOG_WIDTH: u32 = 1;
pub const MC_CMD_GET_BOOT_STATUS_OUT_FLAGS_PRIMARY_LBN: u32 = 1;
pub const MC_CMD_GET_BOOT_STATUS_OUT_FLAGS_PRIMARY_WIDTH: u32 = 1;
pub const MC_CMD_GET_BOOT_STATUS_OUT_FLAGS_BACKUP_LBN: u32 = 2;
pub const MC_CMD_GET_BOOT_STATUS_OUT_FLAGS_BACKUP_WIDTH: u32 = 1;

/* MC_CMD_GET_ASSERTS
 * Get (and optionally clear) the current assertion status. Only
 * OUT.GLOBAL_FLAGS is guaranteed to exist in the completion payload. The
 * other fields will only be present if OUT.GLOBAL_FLAGS != NO_FAILS
 */
pub const MC_CMD_GET_ASSERTS_IN_LEN: usize = 4;
/* Set to clear assertion */
pub const MC_CMD_GET_ASSERTS_IN_CLEAR_OFST: usize = 0;
pub const MC_CMD_GET_ASSERTS_IN_CLEAR_LEN: usize = 4;
pub const MC_CMD_GET_ASSERTS_OUT_LEN: usize = 140;
/* Assertion status flag. */
pub const MC_CMD_GET_ASSERTS_OUT_GLOBAL_FLAGS_OFST: usize = 0;
pub const MC_CMD_GET_ASSERTS_OUT_GLOBAL_FLAGS_LEN: usize = 4;
mcdi_table! {
    MC_CMD_GET_ASSERTS_FLAGS_TABLE: u32 {
        /* No assertions have failed. */
        MC_CMD_GET_ASSERTS_FLAGS_NO_FAILS = 0x1,
        /* A system-level assertion has failed. */
        MC_CMD_GET_ASSERTS_FLAGS_SYS_FAIL = 0x2,
        /* A thread-level assertion has failed. */
        MC_CMD_GET_ASSERTS_FLAGS_THR_FAIL = 0x3,
        /* The system was reset by the watchdog. */
        MC_CMD_GET_ASSERTS_FLAGS_WDOG_FIRED = 0x4,
        /* An illegal address trap stopped the system (huntington and later) */
        MC_CMD_GET_ASSERTS_FLAGS_ADDR_TRAP = 0x5,
    }
}
/* Failing PC value */
pub const MC_CMD_GET_ASSERTS_OUT_SAVED_PC_OFFS_OFST: usize = 4;
pub const MC_CMD_GET_ASSERTS_OUT_SAVED_PC_OFFS_LEN: usize = 4;
/* Saved GP regs */
pub const MC_CMD_GET_ASSERTS_OUT_GP_REGS_OFFS_OFST: usize = 8;
pub const MC_CMD_GET_ASSERTS_OUT_GP_REGS_OFFS_LEN: usize = 4;
pub const MC_CMD_GET_ASSERTS_OUT_GP_REGS_OFFS_NUM: usize = 31;
/* Failing thread address */
pub const MC_CMD_GET_ASSERTS_OUT_THREAD_OFFS_OFST: usize = 132;
pub const MC_CMD_GET_ASSERTS_OUT_THREAD_OFFS_LEN: usize = 4;
pub const MC_CMD_GET_ASSERTS_OUT_RESERVED_OFST: usize = 136;
pub const MC_CMD_GET_ASSERTS_OUT_RESERVED_LEN: usize = 4;

/* MC_CMD_LOG_CTRL
 * Configure the output stream for log events such as link state changes,
 * sensor notifications and MCDI completions
 */
pub const MC_CMD_LOG_CTRL_IN_LEN: usize = 8;
pub const MC_CMD_LOG_CTRL_IN_LOG_DEST_OFST: usize = 0;
pub const MC_CMD_LOG_CTRL_IN_LOG_DEST_LEN: usize = 4;
pub const MC_CMD_LOG_CTRL_IN_LOG_DEST_UART: u32 = 0x1;
pub const MC_CMD_LOG_CTRL_IN_LOG_DEST_EVQ: u32 = 0x2;
pub const MC_CMD_LOG_CTRL_IN_LOG_DEST_EVQ_OFST: usize = 4;
pub const MC_CMD_LOG_CTRL_IN_LOG_DEST_EVQ_LEN: usize = 4;
pub const MC_CMD_LOG_CTRL_OUT_LEN: usize = 0;

/* MC_CMD_GET_VERSION
 * Get version information about adapter components.
 */
pub const MC_CMD_GET_VERSION_IN_LEN: usize = 0;
pub const MC_CMD_GET_VERSION_EXT_IN_LEN: usize = 4;
/* placeholder, set to 0 */
pub const MC_CMD_GET_VERSION_EXT_IN_EXT_FLAGS_OFST: usize = 0;
pub const MC_CMD_GET_VERSION_EXT_IN_EXT_FLAGS_LEN: usize = 4;
pub const MC_CMD_GET_VERSION_V0_OUT_LEN: usize = 4;
pub const MC_CMD_GET_VERSION_OUT_FIRMWARE_OFST: usize = 0;
pub const MC_CMD_GET_VERSION_OUT_FIRMWARE_LEN: usize = 4;
/* enum: Reserved version number to indicate "any" version. */
pub const MC_CMD_GET_VERSION_OUT_FIRMWARE_ANY: u32 = 0xffffffff;
/* enum: Bootrom version value for Siena. */
pub const MC_CMD_GET_VERSION_OUT_FIRMWARE_SIENA_BOOTROM: u32 = 0xb0070000;
/* enum: Bootrom version value for Huntington. */
pub const MC_CMD_GET_VERSION_OUT_FIRMWARE_HUNT_BOOTROM: u32 = 0xb0070001;
/* enum: Bootrom version value for Medford2. */
pub const MC_CMD_GET_VERSION_OUT_FIRMWARE_MEDFORD2_BOOTROM: u32 = 0xb0070002;
pub const MC_CMD_GET_VERSION_OUT_LEN: usize = 32;
pub const MC_CMD_GET_VERSION_OUT_PCOL_OFST: usize = 4;
pub const MC_CMD_GET_VERSION_OUT_PCOL_LEN: usize = 4;
/* 128bit mask of functions supported by the current firmware */
pub const MC_CMD_GET_VERSION_OUT_SUPPORTED_FUNCS_OFST: usize = 8;
pub const MC_CMD_GET_VERSION_OUT_SUPPORTED_FUNCS_LEN: usize = 16;
pub const MC_CMD_GET_VERSION_OUT_VERSION_OFST: usize = 24;
pub const MC_CMD_GET_VERSION_OUT_VERSION_LEN: usize = 8;
pub const MC_CMD_GET_VERSION_EXT_OUT_LEN: usize = 48;
/* extra info */
pub const MC_CMD_GET_VERSION_EXT_OUT_EXTRA_OFST: usize = 32;
pub const MC_CMD_GET_VERSION_EXT_OUT_EXTRA_LEN: usize = 16;

/* MC_CMD_DRV_ATTACH
 * Inform MCPU that this port is managed on the host (i.e. driver active).
 * For Huntington, also request the preferred datapath firmware to use if
 * possible.
 */
pub const MC_CMD_DRV_ATTACH_IN_LEN: usize = 12;
/* new state to set if UPDATE=1 */
pub const MC_CMD_DRV_ATTACH_IN_NEW_STATE_OFST: usize = 0;
pub const MC_CMD_DRV_ATTACH_IN_NEW_STATE_LEN: usize = 4;
pub const MC_CMD_DRV_ATTACH_IN_ATTACH_LBN: u32 = 0;
pub const MC_CMD_DRV_ATTACH_IN_ATTACH_WIDTH: u32 = 1;
pub const MC_CMD_DRV_ATTACH_IN_PREBOOT_LBN: u32 = 1;
pub const MC_CMD_DRV_ATTACH_IN_PREBOOT_WIDTH: u32 = 1;
pub const MC_CMD_DRV_ATTACH_IN_SUBVARIANT_AWARE_LBN: u32 = 2;
pub const MC_CMD_DRV_ATTACH_IN_SUBVARIANT_AWARE_WIDTH: u32 = 1;
pub const MC_CMD_DRV_ATTACH_IN_WANT_VI_SPREADING_LBN: u32 = 3;
pub const MC_CMD_DRV_ATTACH_IN_WANT_VI_SPREADING_WIDTH: u32 = 1;
pub const MC_CMD_DRV_ATTACH_IN_WANT_V2_LINKCHANGES_LBN: u32 = 4;
pub const MC_CMD_DRV_ATTACH_IN_WANT_V2_LINKCHANGES_WIDTH: u32 = 1;
/* 1 to set new state, or 0 to just report the existing state */
pub const MC_CMD_DRV_ATTACH_IN_UPDATE_OFST: usize = 4;
pub const MC_CMD_DRV_ATTACH_IN_UPDATE_LEN: usize = 4;
/* preferred datapath firmware (for Huntington; ignored for Siena) */
pub const MC_CMD_DRV_ATTACH_IN_FIRMWARE_ID_OFST: usize = 8;
pub const MC_CMD_DRV_ATTACH_IN_FIRMWARE_ID_LEN: usize = 4;
mcdi_table! {
    MC_CMD_FW_TABLE: u32 {
        /* Prefer to use full featured firmware */
        MC_CMD_FW_FULL_FEATURED = 0x0,
        /* Prefer to use firmware with fewer features but lower latency */
        MC_CMD_FW_LOW_LATENCY = 0x1,
        /* Prefer to use firmware for SolarCapture packed stream mode */
        MC_CMD_FW_PACKED_STREAM = 0x2,
        /* Prefer to use firmware with fewer features and simpler TX event
         * batching but higher TX packet rate
         */
        MC_CMD_FW_HIGH_TX_RATE = 0x3,
        /* Reserved value */
        MC_CMD_FW_PACKED_STREAM_HASH_MODE_1 = 0x4,
        /* Prefer to use firmware with additional "rules engine" filtering
         * support
         */
        MC_CMD_FW_RULES_ENGINE = 0x5,
        /* Prefer to use firmware with additional DPDK support */
        MC_CMD_FW_DPDK = 0x6,
        /* Prefer to use full featured firmware with L3xUDP support */
        MC_CMD_FW_L3XUDP = 0x7,
        /* Only this option is allowed for non-admin functions */
        MC_CMD_FW_DONT_CARE = 0xffffffff,
    }
}
pub const MC_CMD_DRV_ATTACH_OUT_LEN: usize = 4;
/* previous or existing state, see the bitmask at NEW_STATE */
pub const MC_CMD_DRV_ATTACH_OUT_OLD_STATE_OFST: usize = 0;
pub const MC_CMD_DRV_ATTACH_OUT_OLD_STATE_LEN: usize = 4;
pub const MC_CMD_DRV_ATTACH_EXT_OUT_LEN: usize = 8;
pub const MC_CMD_DRV_ATTACH_EXT_OUT_OLD_STATE_OFST: usize = 0;
pub const MC_CMD_DRV_ATTACH_EXT_OUT_OLD_STATE_LEN: usize = 4;
/* Flags associated with this function */
pub const MC_CMD_DRV_ATTACH_EXT_OUT_FUNC_FLAGS_OFST: usize = 4;
pub const MC_CMD_DRV_ATTACH_EXT_OUT_FUNC_FLAGS_LEN: usize = 4;
/* enum: Labels the lowest-numbered function visible to the OS */
pub const MC_CMD_DRV_ATTACH_EXT_OUT_FLAG_PRIMARY: u32 = 0x0;
/* enum: The function can control the link state of the physical port it is
 * bound to.
 */
pub const MC_CMD_DRV_ATTACH_EXT_OUT_FLAG_LINKCTRL: u32 = 0x1;
/* enum: The function can perform privileged operations */
pub const MC_CMD_DRV_ATTACH_EXT_OUT_FLAG_TRUSTED: u32 = 0x2;
/* enum: The function does not have an active port associated with it. */
pub const MC_CMD_DRV_ATTACH_EXT_OUT_FLAG_NO_ACTIVE_PORT: u32 = 0x3;

/* MC_CMD_ENTITY_RESET
 * Generic per-resource reset. There is no equivalent for per-board reset.
 */
pub const MC_CMD_ENTITY_RESET_IN_LEN: usize = 4;
/* Optional flags field. Omitting this will perform a "legacy" reset action
 * (TBD).
 */
pub const MC_CMD_ENTITY_RESET_IN_FLAG_OFST: usize = 0;
pub const MC_CMD_ENTITY_RESET_IN_FLAG_LEN: usize = 4;
pub const MC_CMD_ENTITY_RESET_IN_FUNCTION_RESOURCE_RESET_LBN: u32 = 0;
pub const MC_CMD_ENTITY_RESET_IN_FUNCTION_RESOURCE_RESET_WIDTH: u32 = 1;
pub const MC_CMD_ENTITY_RESET_OUT_LEN: usize = 0;

/* MC_CMD_GET_PHY_CFG
 * Report PHY configuration. This guarantees to succeed even if the PHY is
 * in a 'zombie' state.
 */
pub const MC_CMD_GET_PHY_CFG_IN_LEN: usize = 0;
pub const MC_CMD_GET_PHY_CFG_OUT_LEN: usize = 72;
/* flags */
pub const MC_CMD_GET_PHY_CFG_OUT_FLAGS_OFST: usize = 0;
pub const MC_CMD_GET_PHY_CFG_OUT_FLAGS_LEN: usize = 4;
pub const MC_CMD_GET_PHY_CFG_OUT_PRESENT_LBN: u32 = 0;
pub const MC_CMD_GET_PHY_CFG_OUT_PRESENT_WIDTH: u32 = 1;
pub const MC_CMD_GET_PHY_CFG_OUT_BIST_CABLE_SHORT_LBN: u32 = 1;
pub const MC_CMD_GET_PHY_CFG_OUT_BIST_CABLE_SHORT_WIDTH: u32 = 1;
pub const MC_CMD_GET_PHY_CFG_OUT_BIST_CABLE_LONG_LBN: u32 = 2;
pub const MC_CMD_GET_PHY_CFG_OUT_BIST_CABLE_LONG_WIDTH: u32 = 1;
pub const MC_CMD_GET_PHY_CFG_OUT_LOWPOWER_LBN: u32 = 3;
pub const MC_CMD_GET_PHY_CFG_OUT_LOWPOWER_WIDTH: u32 = 1;
pub const MC_CMD_GET_PHY_CFG_OUT_POWEROFF_LBN: u32 = 4;
pub const MC_CMD_GET_PHY_CFG_OUT_POWEROFF_WIDTH: u32 = 1;
pub const MC_CMD_GET_PHY_CFG_OUT_TXDIS_LBN: u32 = 5;
pub const MC_CMD_GET_PHY_CFG_OUT_TXDIS_WIDTH: u32 = 1;
pub const MC_CMD_GET_PHY_CFG_OUT_BIST_LBN: u32 = 6;
pub const MC_CMD_GET_PHY_CFG_OUT_BIST_WIDTH: u32 = 1;
/* ? */
pub const MC_CMD_GET_PHY_CFG_OUT_TYPE_OFST: usize = 4;
pub const MC_CMD_GET_PHY_CFG_OUT_TYPE_LEN: usize = 4;
/* Bitmask of supported capabilities */
pub const MC_CMD_GET_PHY_CFG_OUT_SUPPORTED_CAP_OFST: usize = 8;
pub const MC_CMD_GET_PHY_CFG_OUT_SUPPORTED_CAP_LEN: usize = 4;
/* ? */
pub const MC_CMD_GET_PHY_CFG_OUT_CHANNEL_OFST: usize = 12;
pub const MC_CMD_GET_PHY_CFG_OUT_CHANNEL_LEN: usize = 4;
/* ? */
pub const MC_CMD_GET_PHY_CFG_OUT_PRT_OFST: usize = 16;
pub const MC_CMD_GET_PHY_CFG_OUT_PRT_LEN: usize = 4;
/* ? */
pub const MC_CMD_GET_PHY_CFG_OUT_STATS_MASK_OFST: usize = 20;
pub const MC_CMD_GET_PHY_CFG_OUT_STATS_MASK_LEN: usize = 4;
/* ? */
pub const MC_CMD_GET_PHY_CFG_OUT_NAME_OFST: usize = 24;
pub const MC_CMD_GET_PHY_CFG_OUT_NAME_LEN: usize = 20;
/* ? */
pub const MC_CMD_GET_PHY_CFG_OUT_MEDIA_TYPE_OFST: usize = 44;
pub const MC_CMD_GET_PHY_CFG_OUT_MEDIA_TYPE_LEN: usize = 4;
mcdi_table! {
    MC_CMD_MEDIA_TABLE: u32 {
        /* XAUI. */
        MC_CMD_MEDIA_XAUI = 0x1,
        /* CX4. */
        MC_CMD_MEDIA_CX4 = 0x2,
        /* KX4. */
        MC_CMD_MEDIA_KX4 = 0x3,
        /* XFP Far. */
        MC_CMD_MEDIA_XFP = 0x4,
        /* SFP+. */
        MC_CMD_MEDIA_SFP_PLUS = 0x5,
        /* 10GBaseT. */
        MC_CMD_MEDIA_BASE_T = 0x6,
        /* QSFP+. */
        MC_CMD_MEDIA_QSFP_PLUS = 0x7,
    }
}
pub const MC_CMD_GET_PHY_CFG_OUT_MMD_MASK_OFST: usize = 48;
pub const MC_CMD_GET_PHY_CFG_OUT_MMD_MASK_LEN: usize = 4;
mcdi_table! {
    MC_CMD_MMD_TABLE: u32 {
        /* Native clause 22 */
        MC_CMD_MMD_CLAUSE22 = 0x0,
        MC_CMD_MMD_CLAUSE45_PMAPMD = 0x1,
        MC_CMD_MMD_CLAUSE45_WIS = 0x2,
        MC_CMD_MMD_CLAUSE45_PCS = 0x3,
        MC_CMD_MMD_CLAUSE45_PHYXS = 0x4,
        MC_CMD_MMD_CLAUSE45_DTEXS = 0x5,
        MC_CMD_MMD_CLAUSE45_TC = 0x6,
        MC_CMD_MMD_CLAUSE45_AN = 0x7,
        /* Clause22 proxied over clause45 by PHY. */
        MC_CMD_MMD_CLAUSE45_C22EXT = 0x1d,
        MC_CMD_MMD_CLAUSE45_VEND1 = 0x1e,
        MC_CMD_MMD_CLAUSE45_VEND2 = 0x1f,
    }
}
pub const MC_CMD_GET_PHY_CFG_OUT_REVISION_OFST: usize = 52;
pub const MC_CMD_GET_PHY_CFG_OUT_REVISION_LEN: usize = 20;

/* MC_CMD_START_BIST
 * Start a BIST test on the PHY.
 */
pub const MC_CMD_START_BIST_IN_LEN: usize = 4;
/* Type of test. */
pub const MC_CMD_START_BIST_IN_TYPE_OFST: usize = 0;
pub const MC_CMD_START_BIST_IN_TYPE_LEN: usize = 4;
mcdi_table! {
    MC_CMD_BIST_TYPE_TABLE: u32 {
        /* Run short cable BIST. */
        MC_CMD_PHY_BIST_CABLE_SHORT = 0x1,
        /* Run long cable BIST. */
        MC_CMD_PHY_BIST_CABLE_LONG = 0x2,
        /* Run BIST on the currently selected BPX Serdes (XAUI or XFI) . */
        MC_CMD_BPX_SERDES_BIST = 0x3,
        /* Run MC loopback tests using the normal traffic path. */
        MC_CMD_MC_LOOPBACK_BIST = 0x4,
        /* Run BIST on the currently selected PHY. */
        MC_CMD_PHY_BIST = 0x5,
        /* Run a BIST on a link. */
        MC_CMD_LINK_DRIVER_BIST = 0x6,
        /* Run BIST on registers. */
        MC_CMD_REG_BIST = 0x7,
    }
}
pub const MC_CMD_START_BIST_OUT_LEN: usize = 0;

/* MC_CMD_POLL_BIST
 * Poll for BIST completion. Returns a single status code, and optionally
 * some PHY specific bist output.
 */
pub const MC_CMD_POLL_BIST_IN_LEN: usize = 0;
pub const MC_CMD_POLL_BIST_OUT_LEN: usize = 8;
/* result */
pub const MC_CMD_POLL_BIST_OUT_RESULT_OFST: usize = 0;
pub const MC_CMD_POLL_BIST_OUT_RESULT_LEN: usize = 4;
mcdi_table! {
    MC_CMD_POLL_BIST_TABLE: u32 {
        /* Running. */
        MC_CMD_POLL_BIST_RUNNING = 0x1,
        /* Passed. */
        MC_CMD_POLL_BIST_PASSED = 0x2,
        /* Failed. */
        MC_CMD_POLL_BIST_FAILED = 0x3,
        /* Timed-out. */
        MC_CMD_POLL_BIST_TIMEOUT = 0x4,
    }
}
pub const MC_CMD_POLL_BIST_OUT_PRIVATE_OFST: usize = 4;
pub const MC_CMD_POLL_BIST_OUT_PRIVATE_LEN: usize = 4;

/* MC_CMD_FLUSH_RX_QUEUES
 * Flush receive queue(s). If SRIOV is enabled (via MC_CMD_SRIOV), then RXQ
 * flushes should be initiated via this MCDI operation, rather than via CSR
 * writes.
 */
pub const MC_CMD_FLUSH_RX_QUEUES_IN_LENMIN: usize = 4;
pub const MC_CMD_FLUSH_RX_QUEUES_IN_LENMAX: usize = 252;
#[allow(non_snake_case)]
pub const fn MC_CMD_FLUSH_RX_QUEUES_IN_LEN(num: usize) -> usize {
    4 * num
}
pub const MC_CMD_FLUSH_RX_QUEUES_IN_QID_OFST_OFST: usize = 0;
pub const MC_CMD_FLUSH_RX_QUEUES_IN_QID_OFST_LEN: usize = 4;
pub const MC_CMD_FLUSH_RX_QUEUES_IN_QID_OFST_MINNUM: usize = 1;
pub const MC_CMD_FLUSH_RX_QUEUES_IN_QID_OFST_MAXNUM: usize = 63;
pub const MC_CMD_FLUSH_RX_QUEUES_OUT_LEN: usize = 0;

/* MC_CMD_GET_LOOPBACK_MODES
 * Returns a bitmask of loopback modes available at each speed.
 */
pub const MC_CMD_GET_LOOPBACK_MODES_IN_LEN: usize = 0;
pub const MC_CMD_GET_LOOPBACK_MODES_OUT_LEN: usize = 40;
/* Supported loopbacks. */
pub const MC_CMD_GET_LOOPBACK_MODES_OUT_100M_OFST: usize = 0;
pub const MC_CMD_GET_LOOPBACK_MODES_OUT_100M_LEN: usize = 8;
/* Supported loopbacks. */
pub const MC_CMD_GET_LOOPBACK_MODES_OUT_1G_OFST: usize = 8;
pub const MC_CMD_GET_LOOPBACK_MODES_OUT_1G_LEN: usize = 8;
/* Supported loopbacks. */
pub const MC_CMD_GET_LOOPBACK_MODES_OUT_10G_OFST: usize = 16;
pub const MC_CMD_GET_LOOPBACK_MODES_OUT_10G_LEN: usize = 8;
/* Supported loopbacks. */
pub const MC_CMD_GET_LOOPBACK_MODES_OUT_SUGGESTED_OFST: usize = 24;
pub const MC_CMD_GET_LOOPBACK_MODES_OUT_SUGGESTED_LEN: usize = 8;
/* Supported 40G loopbacks. */
pub const MC_CMD_GET_LOOPBACK_MODES_OUT_40G_OFST: usize = 32;
pub const MC_CMD_GET_LOOPBACK_MODES_OUT_40G_LEN: usize = 8;
mcdi_table! {
    MC_CMD_LOOPBACK_TABLE: u32 {
        /* None. */
        MC_CMD_LOOPBACK_NONE = 0x0,
        /* Data. */
        MC_CMD_LOOPBACK_DATA = 0x1,
        /* GMAC. */
        MC_CMD_LOOPBACK_GMAC = 0x2,
        /* XGMII. */
        MC_CMD_LOOPBACK_XGMII = 0x3,
        /* XGXS. */
        MC_CMD_LOOPBACK_XGXS = 0x4,
        /* XAUI. */
        MC_CMD_LOOPBACK_XAUI = 0x5,
        /* GMII. */
        MC_CMD_LOOPBACK_GMII = 0x6,
        /* SGMII. */
        MC_CMD_LOOPBACK_SGMII = 0x7,
        /* XGBR. */
        MC_CMD_LOOPBACK_XGBR = 0x8,
        /* XFI. */
        MC_CMD_LOOPBACK_XFI = 0x9,
        /* XAUI Far. */
        MC_CMD_LOOPBACK_XAUI_FAR = 0xa,
        /* GMII Far. */
        MC_CMD_LOOPBACK_GMII_FAR = 0xb,
        /* SGMII Far. */
        MC_CMD_LOOPBACK_SGMII_FAR = 0xc,
        /* XFI Far. */
        MC_CMD_LOOPBACK_XFI_FAR = 0xd,
        /* GPhy. */
        MC_CMD_LOOPBACK_GPHY = 0xe,
        /* PhyXS. */
        MC_CMD_LOOPBACK_PHYXS = 0xf,
        /* PCS. */
        MC_CMD_LOOPBACK_PCS = 0x10,
        /* PMA-PMD. */
        MC_CMD_LOOPBACK_PMAPMD = 0x11,
        /* Cross-Port. */
        MC_CMD_LOOPBACK_XPORT = 0x12,
        /* XGMII-Wireside. */
        MC_CMD_LOOPBACK_XGMII_WS = 0x13,
        /* XAUI Wireside. */
        MC_CMD_LOOPBACK_XAUI_WS = 0x14,
        /* XAUI Wireside Far. */
        MC_CMD_LOOPBACK_XAUI_WS_FAR = 0x15,
        /* XAUI Wireside near. */
        MC_CMD_LOOPBACK_XAUI_WS_NEAR = 0x16,
        /* GMII Wireside. */
        MC_CMD_LOOPBACK_GMII_WS = 0x17,
        /* XFI Wireside. */
        MC_CMD_LOOPBACK_XFI_WS = 0x18,
        /* XFI Wireside Far. */
        MC_CMD_LOOPBACK_XFI_WS_FAR = 0x19,
        /* PhyXS Wireside. */
        MC_CMD_LOOPBACK_PHYXS_WS = 0x1a,
        /* PMA lanes MAC-Serdes. */
        MC_CMD_LOOPBACK_PMA_INT = 0x1b,
        /* MAC-Serdes Near. */
        MC_CMD_LOOPBACK_SD_NEAR = 0x1c,
        /* MAC-Serdes Far. */
        MC_CMD_LOOPBACK_SD_FAR = 0x1d,
        /* PMA lanes MAC-Serdes Wireside. */
        MC_CMD_LOOPBACK_PMA_INT_WS = 0x1e,
        /* MAC-Serdes FES Wireside. */
        MC_CMD_LOOPBACK_SD_FEP2_WS = 0x1f,
        /* MAC-Serdes FES Wireside. */
        MC_CMD_LOOPBACK_SD_FEP1_5_WS = 0x20,
        /* MAC-Serdes FEP Wireside. */
        MC_CMD_LOOPBACK_SD_FEP_WS = 0x21,
        /* MAC-Serdes FES Wireside. */
        MC_CMD_LOOPBACK_SD_FES_WS = 0x22,
        /* Near side of AOE Siena side port */
        MC_CMD_LOOPBACK_AOE_INT_NEAR = 0x23,
        /* Medford Wireside datapath loopback */
        MC_CMD_LOOPBACK_DATA_WS = 0x24,
        /* Force link up without setting up any physical loopback */
        MC_CMD_LOOPBACK_FORCE_EXT_LINK = 0x25,
    }
}

/* PHY capability bits, shared by GET_LINK, SET_LINK and GET_PHY_CFG. */
pub const MC_CMD_PHY_CAP_10HDX_LBN: u32 = 1;
pub const MC_CMD_PHY_CAP_10HDX_WIDTH: u32 = 1;
pub const MC_CMD_PHY_CAP_10FDX_LBN: u32 = 2;
pub const MC_CMD_PHY_CAP_10FDX_WIDTH: u32 = 1;
pub const MC_CMD_PHY_CAP_100HDX_LBN: u32 = 3;
pub const MC_CMD_PHY_CAP_100HDX_WIDTH: u32 = 1;
pub const MC_CMD_PHY_CAP_100FDX_LBN: u32 = 4;
pub const MC_CMD_PHY_CAP_100FDX_WIDTH: u32 = 1;
pub const MC_CMD_PHY_CAP_1000HDX_LBN: u32 = 5;
pub const MC_CMD_PHY_CAP_1000HDX_WIDTH: u32 = 1;
pub const MC_CMD_PHY_CAP_1000FDX_LBN: u32 = 6;
pub const MC_CMD_PHY_CAP_1000FDX_WIDTH: u32 = 1;
pub const MC_CMD_PHY_CAP_10000FDX_LBN: u32 = 7;
pub const MC_CMD_PHY_CAP_10000FDX_WIDTH: u32 = 1;
pub const MC_CMD_PHY_CAP_PAUSE_LBN: u32 = 8;
pub const MC_CMD_PHY_CAP_PAUSE_WIDTH: u32 = 1;
pub const MC_CMD_PHY_CAP_ASYM_LBN: u32 = 9;
pub const MC_CMD_PHY_CAP_ASYM_WIDTH: u32 = 1;
pub const MC_CMD_PHY_CAP_AN_LBN: u32 = 10;
pub const MC_CMD_PHY_CAP_AN_WIDTH: u32 = 1;
pub const MC_CMD_PHY_CAP_40000FDX_LBN: u32 = 11;
pub const MC_CMD_PHY_CAP_40000FDX_WIDTH: u32 = 1;
pub const MC_CMD_PHY_CAP_DDM_LBN: u32 = 12;
pub const MC_CMD_PHY_CAP_DDM_WIDTH: u32 = 1;
pub const MC_CMD_PHY_CAP_100000FDX_LBN: u32 = 13;
pub const MC_CMD_PHY_CAP_100000FDX_WIDTH: u32 = 1;
pub const MC_CMD_PHY_CAP_25000FDX_LBN: u32 = 14;
pub const MC_CMD_PHY_CAP_25000FDX_WIDTH: u32 = 1;
pub const MC_CMD_PHY_CAP_50000FDX_LBN: u32 = 15;
pub const MC_CMD_PHY_CAP_50000FDX_WIDTH: u32 = 1;
pub const MC_CMD_PHY_CAP_BASER_FEC_LBN: u32 = 16;
pub const MC_CMD_PHY_CAP_BASER_FEC_WIDTH: u32 = 1;
pub const MC_CMD_PHY_CAP_BASER_FEC_REQUESTED_LBN: u32 = 17;
pub const MC_CMD_PHY_CAP_BASER_FEC_REQUESTED_WIDTH: u32 = 1;
pub const MC_CMD_PHY_CAP_RS_FEC_LBN: u32 = 18;
pub const MC_CMD_PHY_CAP_RS_FEC_WIDTH: u32 = 1;
pub const MC_CMD_PHY_CAP_RS_FEC_REQUESTED_LBN: u32 = 19;
pub const MC_CMD_PHY_CAP_RS_FEC_REQUESTED_WIDTH: u32 = 1;
pub const MC_CMD_PHY_CAP_25G_BASER_FEC_LBN: u32 = 20;
pub const MC_CMD_PHY_CAP_25G_BASER_FEC_WIDTH: u32 = 1;
pub const MC_CMD_PHY_CAP_25G_BASER_FEC_REQUESTED_LBN: u32 = 21;
pub const MC_CMD_PHY_CAP_25G_BASER_FEC_REQUESTED_WIDTH: u32 = 1;

/* MC_CMD_GET_LINK
 * Read the unified MAC/PHY link state. Note that this command can fail if
 * the link is disabled.
 */
pub const MC_CMD_GET_LINK_IN_LEN: usize = 0;
pub const MC_CMD_GET_LINK_OUT_LEN: usize = 28;
/* near-side advertised capabilities */
pub const MC_CMD_GET_LINK_OUT_CAP_OFST: usize = 0;
pub const MC_CMD_GET_LINK_OUT_CAP_LEN: usize = 4;
/* link-partner advertised capabilities */
pub const MC_CMD_GET_LINK_OUT_LP_CAP_OFST: usize = 4;
pub const MC_CMD_GET_LINK_OUT_LP_CAP_LEN: usize = 4;
/* Autonegotiated speed in mbit/s. The link may still be down even if this
 * reads non-zero.
 */
pub const MC_CMD_GET_LINK_OUT_LINK_SPEED_OFST: usize = 8;
pub const MC_CMD_GET_LINK_OUT_LINK_SPEED_LEN: usize = 4;
/* Current loopback setting. */
pub const MC_CMD_GET_LINK_OUT_LOOPBACK_MODE_OFST: usize = 12;
pub const MC_CMD_GET_LINK_OUT_LOOPBACK_MODE_LEN: usize = 4;
pub const MC_CMD_GET_LINK_OUT_FLAGS_OFST: usize = 16;
pub const MC_CMD_GET_LINK_OUT_FLAGS_LEN: usize = 4;
pub const MC_CMD_GET_LINK_OUT_LINK_UP_LBN: u32 = 0;
pub const MC_CMD_GET_LINK_OUT_LINK_UP_WIDTH: u32 = 1;
pub const MC_CMD_GET_LINK_OUT_FULL_DUPLEX_LBN: u32 = 1;
pub const MC_CMD_GET_LINK_OUT_FULL_DUPLEX_WIDTH: u32 = 1;
pub const MC_CMD_GET_LINK_OUT_BPX_LINK_LBN: u32 = 2;
pub const MC_CMD_GET_LINK_OUT_BPX_LINK_WIDTH: u32 = 1;
pub const MC_CMD_GET_LINK_OUT_PHY_LINK_LBN: u32 = 3;
pub const MC_CMD_GET_LINK_OUT_PHY_LINK_WIDTH: u32 = 1;
pub const MC_CMD_GET_LINK_OUT_LINK_FAULT_RX_LBN: u32 = 6;
pub const MC_CMD_GET_LINK_OUT_LINK_FAULT_RX_WIDTH: u32 = 1;
pub const MC_CMD_GET_LINK_OUT_LINK_FAULT_TX_LBN: u32 = 7;
pub const MC_CMD_GET_LINK_OUT_LINK_FAULT_TX_WIDTH: u32 = 1;
/* This returns the negotiated flow control value. */
pub const MC_CMD_GET_LINK_OUT_FCNTL_OFST: usize = 20;
pub const MC_CMD_GET_LINK_OUT_FCNTL_LEN: usize = 4;
mcdi_table! {
    MC_CMD_FCNTL_TABLE: u32 {
        /* Flow control is off. */
        MC_CMD_FCNTL_OFF = 0x0,
        /* Respond to flow control. */
        MC_CMD_FCNTL_RESPOND = 0x1,
        /* Respond to and Issue flow control. */
        MC_CMD_FCNTL_BIDIR = 0x2,
        /* Auto neg flow control. */
        MC_CMD_FCNTL_AUTO = 0x3,
        /* Priority flow control (eftest builds only). */
        MC_CMD_FCNTL_QBB = 0x4,
        /* Issue flow control. */
        MC_CMD_FCNTL_GENERATE = 0x5,
    }
}
pub const MC_CMD_GET_LINK_OUT_MAC_FAULT_OFST: usize = 24;
pub const MC_CMD_GET_LINK_OUT_MAC_FAULT_LEN: usize = 4;
pub const MC_CMD_MAC_FAULT_XGMII_LOCAL_LBN: u32 = 0;
pub const MC_CMD_MAC_FAULT_XGMII_LOCAL_WIDTH: u32 = 1;
pub const MC_CMD_MAC_FAULT_XGMII_REMOTE_LBN: u32 = 1;
pub const MC_CMD_MAC_FAULT_XGMII_REMOTE_WIDTH: u32 = 1;
pub const MC_CMD_MAC_FAULT_SGMII_REMOTE_LBN: u32 = 2;
pub const MC_CMD_MAC_FAULT_SGMII_REMOTE_WIDTH: u32 = 1;
pub const MC_CMD_MAC_FAULT_PENDING_RECONFIG_LBN: u32 = 3;
pub const MC_CMD_MAC_FAULT_PENDING_RECONFIG_WIDTH: u32 = 1;

/* MC_CMD_SET_LINK
 * Write the unified MAC/PHY link configuration. Locks required: None.
 * Return code: 0, EINVAL, ETIME
 */
pub const MC_CMD_SET_LINK_IN_LEN: usize = 16;
/* Near-side advertised capabilities. */
pub const MC_CMD_SET_LINK_IN_CAP_OFST: usize = 0;
pub const MC_CMD_SET_LINK_IN_CAP_LEN: usize = 4;
/* Flags */
pub const MC_CMD_SET_LINK_IN_FLAGS_OFST: usize = 4;
pub const MC_CMD_SET_LINK_IN_FLAGS_LEN: usize = 4;
pub const MC_CMD_SET_LINK_IN_LOWPOWER_LBN: u32 = 0;
pub const MC_CMD_SET_LINK_IN_LOWPOWER_WIDTH: u32 = 1;
pub const MC_CMD_SET_LINK_IN_POWEROFF_LBN: u32 = 1;
pub const MC_CMD_SET_LINK_IN_POWEROFF_WIDTH: u32 = 1;
pub const MC_CMD_SET_LINK_IN_TXDIS_LBN: u32 = 2;
pub const MC_CMD_SET_LINK_IN_TXDIS_WIDTH: u32 = 1;
/* Loopback mode. */
pub const MC_CMD_SET_LINK_IN_LOOPBACK_MODE_OFST: usize = 8;
pub const MC_CMD_SET_LINK_IN_LOOPBACK_MODE_LEN: usize = 4;
/* A loopback speed of "0" is supported, and means (choose any available
 * speed).
 */
pub const MC_CMD_SET_LINK_IN_LOOPBACK_SPEED_OFST: usize = 12;
pub const MC_CMD_SET_LINK_IN_LOOPBACK_SPEED_LEN: usize = 4;
pub const MC_CMD_SET_LINK_OUT_LEN: usize = 0;

/* MC_CMD_SET_ID_LED
 * Set identification LED state. Locks required: None. Return code: 0,
 * EINVAL
 */
pub const MC_CMD_SET_ID_LED_IN_LEN: usize = 4;
/* Set LED state. */
pub const MC_CMD_SET_ID_LED_IN_STATE_OFST: usize = 0;
pub const MC_CMD_SET_ID_LED_IN_STATE_LEN: usize = 4;
mcdi_table! {
    MC_CMD_LED_TABLE: u32 {
        MC_CMD_LED_OFF = 0x0,
        MC_CMD_LED_ON = 0x1,
        /* Default. */
        MC_CMD_LED_DEFAULT = 0x2,
    }
}
pub const MC_CMD_SET_ID_LED_OUT_LEN: usize = 0;

/* MC_CMD_SET_MAC
 * Set MAC configuration.
 */
pub const MC_CMD_SET_MAC_IN_LEN: usize = 28;
/* The MTU is the MTU programmed directly into the XMAC/GMAC (inclusive of
 * EtherII, VLAN, bug16011 padding).
 */
pub const MC_CMD_SET_MAC_IN_MTU_OFST: usize = 0;
pub const MC_CMD_SET_MAC_IN_MTU_LEN: usize = 4;
pub const MC_CMD_SET_MAC_IN_DRAIN_OFST: usize = 4;
pub const MC_CMD_SET_MAC_IN_DRAIN_LEN: usize = 4;
pub const MC_CMD_SET_MAC_IN_ADDR_OFST: usize = 8;
pub const MC_CMD_SET_MAC_IN_ADDR_LEN: usize = 8;
pub const MC_CMD_SET_MAC_IN_REJECT_OFST: usize = 16;
pub const MC_CMD_SET_MAC_IN_REJECT_LEN: usize = 4;
pub const MC_CMD_SET_MAC_IN_REJECT_UNCST_LBN: u32 = 0;
pub const MC_CMD_SET_MAC_IN_REJECT_UNCST_WIDTH: u32 = 1;
pub const MC_CMD_SET_MAC_IN_REJECT_BRDCST_LBN: u32 = 1;
pub const MC_CMD_SET_MAC_IN_REJECT_BRDCST_WIDTH: u32 = 1;
pub const MC_CMD_SET_MAC_IN_FCNTL_OFST: usize = 20;
pub const MC_CMD_SET_MAC_IN_FCNTL_LEN: usize = 4;
pub const MC_CMD_SET_MAC_IN_FLAGS_OFST: usize = 24;
pub const MC_CMD_SET_MAC_IN_FLAGS_LEN: usize = 4;
pub const MC_CMD_SET_MAC_IN_FLAG_INCLUDE_FCS_LBN: u32 = 0;
pub const MC_CMD_SET_MAC_IN_FLAG_INCLUDE_FCS_WIDTH: u32 = 1;
pub const MC_CMD_SET_MAC_OUT_LEN: usize = 0;

/* MC_CMD_MAC_STATS
 * Get generic MAC statistics. This call returns unified statistics
 * maintained by the MC as cumulative 64-bit counters.
 */
pub const MC_CMD_MAC_STATS_IN_LEN: usize = 20;
/* ??? Leave as 0 if not a DMA. */
pub const MC_CMD_MAC_STATS_IN_DMA_ADDR_OFST: usize = 0;
pub const MC_CMD_MAC_STATS_IN_DMA_ADDR_LEN: usize = 8;
pub const MC_CMD_MAC_STATS_IN_CMD_OFST: usize = 8;
pub const MC_CMD_MAC_STATS_IN_CMD_LEN: usize = 4;
pub const MC_CMD_MAC_STATS_IN_DMA_LBN: u32 = 0;
pub const MC_CMD_MAC_STATS_IN_DMA_WIDTH: u32 = 1;
pub const MC_CMD_MAC_STATS_IN_CLEAR_LBN: u32 = 1;
pub const MC_CMD_MAC_STATS_IN_CLEAR_WIDTH: u32 = 1;
pub const MC_CMD_MAC_STATS_IN_PERIODIC_CHANGE_LBN: u32 = 2;
pub const MC_CMD_MAC_STATS_IN_PERIODIC_CHANGE_WIDTH: u32 = 1;
pub const MC_CMD_MAC_STATS_IN_PERIODIC_ENABLE_LBN: u32 = 3;
pub const MC_CMD_MAC_STATS_IN_PERIODIC_ENABLE_WIDTH: u32 = 1;
pub const MC_CMD_MAC_STATS_IN_PERIODIC_CLEAR_LBN: u32 = 4;
pub const MC_CMD_MAC_STATS_IN_PERIODIC_CLEAR_WIDTH: u32 = 1;
pub const MC_CMD_MAC_STATS_IN_PERIODIC_NOEVENT_LBN: u32 = 5;
pub const MC_CMD_MAC_STATS_IN_PERIODIC_NOEVENT_WIDTH: u32 = 1;
pub const MC_CMD_MAC_STATS_IN_PERIOD_MS_LBN: u32 = 16;
pub const MC_CMD_MAC_STATS_IN_PERIOD_MS_WIDTH: u32 = 16;
/* DMA length. Should be set to MAC_STATS_NUM_STATS * sizeof(uint64_t) */
pub const MC_CMD_MAC_STATS_IN_DMA_LEN_OFST: usize = 12;
pub const MC_CMD_MAC_STATS_IN_DMA_LEN_LEN: usize = 4;
/* port id so vadapter stats can be provided */
pub const MC_CMD_MAC_STATS_IN_PORT_ID_OFST: usize = 16;
pub const MC_CMD_MAC_STATS_IN_PORT_ID_LEN: usize = 4;
pub const MC_CMD_MAC_STATS_OUT_DMA_LEN: usize = 0;

/* MC_CMD_NVRAM_TYPES
 * Return bitfield indicating available types of virtual NVRAM partitions.
 */
pub const MC_CMD_NVRAM_TYPES_IN_LEN: usize = 0;
pub const MC_CMD_NVRAM_TYPES_OUT_LEN: usize = 4;
/* Bit mask of supported types. */
pub const MC_CMD_NVRAM_TYPES_OUT_TYPES_OFST: usize = 0;
pub const MC_CMD_NVRAM_TYPES_OUT_TYPES_LEN: usize = 4;
mcdi_table! {
    MC_CMD_NVRAM_TYPE_TABLE: u32 {
        /* Disabled callisto. */
        MC_CMD_NVRAM_TYPE_DISABLED_CALLISTO = 0x0,
        /* MC firmware. */
        MC_CMD_NVRAM_TYPE_MC_FW = 0x1,
        /* MC backup firmware. */
        MC_CMD_NVRAM_TYPE_MC_FW_BACKUP = 0x2,
        /* Static configuration Port0. */
        MC_CMD_NVRAM_TYPE_STATIC_CFG_PORT0 = 0x3,
        /* Static configuration Port1. */
        MC_CMD_NVRAM_TYPE_STATIC_CFG_PORT1 = 0x4,
        /* Dynamic configuration Port0. */
        MC_CMD_NVRAM_TYPE_DYNAMIC_CFG_PORT0 = 0x5,
        /* Dynamic configuration Port1. */
        MC_CMD_NVRAM_TYPE_DYNAMIC_CFG_PORT1 = 0x6,
        /* Expansion Rom. */
        MC_CMD_NVRAM_TYPE_EXP_ROM = 0x7,
        /* Expansion Rom Configuration Port0. */
        MC_CMD_NVRAM_TYPE_EXP_ROM_CFG_PORT0 = 0x8,
        /* Expansion Rom Configuration Port0. */
        MC_CMD_NVRAM_TYPE_EXP_ROM_CFG_PORT1 = 0x9,
        /* Phy Configuration Port0. */
        MC_CMD_NVRAM_TYPE_PHY_PORT0 = 0xa,
        /* Phy Configuration Port1. */
        MC_CMD_NVRAM_TYPE_PHY_PORT1 = 0xb,
        /* Log. */
        MC_CMD_NVRAM_TYPE_LOG = 0xc,
        /* FPGA image. */
        MC_CMD_NVRAM_TYPE_FPGA = 0xd,
        /* FPGA backup image */
        MC_CMD_NVRAM_TYPE_FPGA_BACKUP = 0xe,
        /* FC firmware. */
        MC_CMD_NVRAM_TYPE_FC_FW = 0xf,
        /* FC backup firmware. */
        MC_CMD_NVRAM_TYPE_FC_FW_BACKUP = 0x10,
        /* CPLD image. */
        MC_CMD_NVRAM_TYPE_CPLD = 0x11,
        /* Licensing information. */
        MC_CMD_NVRAM_TYPE_LICENSE = 0x12,
        /* FC Log. */
        MC_CMD_NVRAM_TYPE_FC_LOG = 0x13,
    }
}

/* MC_CMD_NVRAM_INFO
 * Read info about a virtual NVRAM partition.
 */
pub const MC_CMD_NVRAM_INFO_IN_LEN: usize = 4;
pub const MC_CMD_NVRAM_INFO_IN_TYPE_OFST: usize = 0;
pub const MC_CMD_NVRAM_INFO_IN_TYPE_LEN: usize = 4;
pub const MC_CMD_NVRAM_INFO_OUT_LEN: usize = 24;
pub const MC_CMD_NVRAM_INFO_OUT_TYPE_OFST: usize = 0;
pub const MC_CMD_NVRAM_INFO_OUT_TYPE_LEN: usize = 4;
pub const MC_CMD_NVRAM_INFO_OUT_SIZE_OFST: usize = 4;
pub const MC_CMD_NVRAM_INFO_OUT_SIZE_LEN: usize = 4;
pub const MC_CMD_NVRAM_INFO_OUT_ERASESIZE_OFST: usize = 8;
pub const MC_CMD_NVRAM_INFO_OUT_ERASESIZE_LEN: usize = 4;
pub const MC_CMD_NVRAM_INFO_OUT_FLAGS_OFST: usize = 12;
pub const MC_CMD_NVRAM_INFO_OUT_FLAGS_LEN: usize = 4;
pub const MC_CMD_NVRAM_INFO_OUT_PROTECTED_LBN: u32 = 0;
pub const MC_CMD_NVRAM_INFO_OUT_PROTECTED_WIDTH: u32 = 1;
pub const MC_CMD_NVRAM_INFO_OUT_TLV_LBN: u32 = 1;
pub const MC_CMD_NVRAM_INFO_OUT_TLV_WIDTH: u32 = 1;
pub const MC_CMD_NVRAM_INFO_OUT_READ_ONLY_IF_TSA_BOUND_LBN: u32 = 2;
pub const MC_CMD_NVRAM_INFO_OUT_READ_ONLY_IF_TSA_BOUND_WIDTH: u32 = 1;
pub const MC_CMD_NVRAM_INFO_OUT_CRC_LBN: u32 = 3;
pub const MC_CMD_NVRAM_INFO_OUT_CRC_WIDTH: u32 = 1;
pub const MC_CMD_NVRAM_INFO_OUT_READ_ONLY_LBN: u32 = 5;
pub const MC_CMD_NVRAM_INFO_OUT_READ_ONLY_WIDTH: u32 = 1;
pub const MC_CMD_NVRAM_INFO_OUT_CMAC_LBN: u32 = 6;
pub const MC_CMD_NVRAM_INFO_OUT_CMAC_WIDTH: u32 = 1;
pub const MC_CMD_NVRAM_INFO_OUT_A_B_LBN: u32 = 7;
pub const MC_CMD_NVRAM_INFO_OUT_A_B_WIDTH: u32 = 1;
pub const MC_CMD_NVRAM_INFO_OUT_PHYSDEV_OFST: usize = 16;
pub const MC_CMD_NVRAM_INFO_OUT_PHYSDEV_LEN: usize = 4;
pub const MC_CMD_NVRAM_INFO_OUT_PHYSADDR_OFST: usize = 20;
pub const MC_CMD_NVRAM_INFO_OUT_PHYSADDR_LEN: usize = 4;

/* MC_CMD_NVRAM_READ
 * Read data from a virtual NVRAM partition.
 */
pub const MC_CMD_NVRAM_READ_IN_LEN: usize = 12;
pub const MC_CMD_NVRAM_READ_IN_TYPE_OFST: usize = 0;
pub const MC_CMD_NVRAM_READ_IN_TYPE_LEN: usize = 4;
pub const MC_CMD_NVRAM_READ_IN_OFFSET_OFST: usize = 4;
pub const MC_CMD_NVRAM_READ_IN_OFFSET_LEN: usize = 4;
/* amount to read in bytes */
pub const MC_CMD_NVRAM_READ_IN_LENGTH_OFST: usize = 8;
pub const MC_CMD_NVRAM_READ_IN_LENGTH_LEN: usize = 4;
pub const MC_CMD_NVRAM_READ_OUT_LENMIN: usize = 1;
pub const MC_CMD_NVRAM_READ_OUT_LENMAX: usize = 252;
#[allow(non_snake_case)]
pub const fn MC_CMD_NVRAM_READ_OUT_LEN(num: usize) -> usize {
    num
}
pub const MC_CMD_NVRAM_READ_OUT_READ_BUFFER_OFST: usize = 0;
pub const MC_CMD_NVRAM_READ_OUT_READ_BUFFER_LEN: usize = 1;
pub const MC_CMD_NVRAM_READ_OUT_READ_BUFFER_MINNUM: usize = 1;
pub const MC_CMD_NVRAM_READ_OUT_READ_BUFFER_MAXNUM: usize = 252;

/* MC_CMD_NVRAM_PARTITIONS
 * Reads the list of available virtual NVRAM partition types.
 */
pub const MC_CMD_NVRAM_PARTITIONS_IN_LEN: usize = 0;
pub const MC_CMD_NVRAM_PARTITIONS_OUT_LENMIN: usize = 4;
pub const MC_CMD_NVRAM_PARTITIONS_OUT_LENMAX: usize = 252;
#[allow(non_snake_case)]
pub const fn MC_CMD_NVRAM_PARTITIONS_OUT_LEN(num: usize) -> usize {
    4 + 4 * num
}
/* total number of partitions */
pub const MC_CMD_NVRAM_PARTITIONS_OUT_NUM_PARTITIONS_OFST: usize = 0;
pub const MC_CMD_NVRAM_PARTITIONS_OUT_NUM_PARTITIONS_LEN: usize = 4;
/* type ID code for each of NUM_PARTITIONS partitions */
pub const MC_CMD_NVRAM_PARTITIONS_OUT_TYPE_ID_OFST: usize = 4;
pub const MC_CMD_NVRAM_PARTITIONS_OUT_TYPE_ID_LEN: usize = 4;
pub const MC_CMD_NVRAM_PARTITIONS_OUT_TYPE_ID_MINNUM: usize = 0;
pub const MC_CMD_NVRAM_PARTITIONS_OUT_TYPE_ID_MAXNUM: usize = 62;

/* MC_CMD_REBOOT
 * Reboot the MC. The AFTER_ASSERTION flag is intended to be used when the
 * driver notices an assertion failure (at which point it is expected to
 * perform a complete tear down and reinitialise), to allow both ports to
 * reset the MC once in an atomic fashion.
 */
pub const MC_CMD_REBOOT_IN_LEN: usize = 4;
pub const MC_CMD_REBOOT_IN_FLAGS_OFST: usize = 0;
pub const MC_CMD_REBOOT_IN_FLAGS_LEN: usize = 4;
pub const MC_CMD_REBOOT_FLAGS_AFTER_ASSERTION: u32 = 0x1;
pub const MC_CMD_REBOOT_OUT_LEN: usize = 0;

/* MC_CMD_SENSOR_INFO
 * Returns information about every available sensor.
 */
pub const MC_CMD_SENSOR_INFO_IN_LEN: usize = 0;
pub const MC_CMD_SENSOR_INFO_EXT_IN_LEN: usize = 4;
/* Which page of sensors to report. Page 0 contains sensors 0 to 30 (sensor 31
 * is the next page bit).
 */
pub const MC_CMD_SENSOR_INFO_EXT_IN_PAGE_OFST: usize = 0;
pub const MC_CMD_SENSOR_INFO_EXT_IN_PAGE_LEN: usize = 4;
pub const MC_CMD_SENSOR_INFO_OUT_LENMIN: usize = 4;
pub const MC_CMD_SENSOR_INFO_OUT_LENMAX: usize = 252;
#[allow(non_snake_case)]
pub const fn MC_CMD_SENSOR_INFO_OUT_LEN(num: usize) -> usize {
    4 + 8 * num
}
pub const MC_CMD_SENSOR_INFO_OUT_MASK_OFST: usize = 0;
pub const MC_CMD_SENSOR_INFO_OUT_MASK_LEN: usize = 4;
mcdi_table! {
    MC_CMD_SENSOR_TABLE: u32 {
        /* Controller temperature: degC */
        MC_CMD_SENSOR_CONTROLLER_TEMP = 0x0,
        /* Phy common temperature: degC */
        MC_CMD_SENSOR_PHY_COMMON_TEMP = 0x1,
        /* Controller cooling: bool */
        MC_CMD_SENSOR_CONTROLLER_COOLING = 0x2,
        /* Phy 0 temperature: degC */
        MC_CMD_SENSOR_PHY0_TEMP = 0x3,
        /* Phy 0 cooling: bool */
        MC_CMD_SENSOR_PHY0_COOLING = 0x4,
        /* Phy 1 temperature: degC */
        MC_CMD_SENSOR_PHY1_TEMP = 0x5,
        /* Phy 1 cooling: bool */
        MC_CMD_SENSOR_PHY1_COOLING = 0x6,
        /* 1.0v power: mV */
        MC_CMD_SENSOR_IN_1V0 = 0x7,
        /* 1.2v power: mV */
        MC_CMD_SENSOR_IN_1V2 = 0x8,
        /* 1.8v power: mV */
        MC_CMD_SENSOR_IN_1V8 = 0x9,
        /* 2.5v power: mV */
        MC_CMD_SENSOR_IN_2V5 = 0xa,
        /* 3.3v power: mV */
        MC_CMD_SENSOR_IN_3V3 = 0xb,
        /* 12v power: mV */
        MC_CMD_SENSOR_IN_12V0 = 0xc,
        /* 1.2v analogue power: mV */
        MC_CMD_SENSOR_IN_1V2A = 0xd,
        /* reference voltage: mV */
        MC_CMD_SENSOR_IN_VREF = 0xe,
        /* AOE FPGA power: mV */
        MC_CMD_SENSOR_OUT_VAOE = 0xf,
        /* AOE FPGA temperature: degC */
        MC_CMD_SENSOR_AOE_TEMP = 0x10,
        /* AOE FPGA PSU temperature: degC */
        MC_CMD_SENSOR_PSU_AOE_TEMP = 0x11,
        /* AOE PSU temperature: degC */
        MC_CMD_SENSOR_PSU_TEMP = 0x12,
        /* Fan 0 speed: RPM */
        MC_CMD_SENSOR_FAN_0 = 0x13,
        /* Fan 1 speed: RPM */
        MC_CMD_SENSOR_FAN_1 = 0x14,
        /* Fan 2 speed: RPM */
        MC_CMD_SENSOR_FAN_2 = 0x15,
        /* Fan 3 speed: RPM */
        MC_CMD_SENSOR_FAN_3 = 0x16,
        /* Fan 4 speed: RPM */
        MC_CMD_SENSOR_FAN_4 = 0x17,
        /* AOE FPGA input power: mV */
        MC_CMD_SENSOR_IN_VAOE = 0x18,
        /* AOE FPGA current: mA */
        MC_CMD_SENSOR_OUT_IAOE = 0x19,
        /* AOE FPGA input current: mA */
        MC_CMD_SENSOR_IN_IAOE = 0x1a,
        /* NIC power consumption: W */
        MC_CMD_SENSOR_NIC_POWER = 0x1b,
        /* 0.9v power voltage: mV */
        MC_CMD_SENSOR_IN_0V9 = 0x1c,
        /* 0.9v power current: mA */
        MC_CMD_SENSOR_IN_I0V9 = 0x1d,
        /* 1.2v power current: mA */
        MC_CMD_SENSOR_IN_I1V2 = 0x1e,
        /* Not a sensor: reserved for the next page flag */
        MC_CMD_SENSOR_PAGE0_NEXT = 0x1f,
        /* 0.9v power voltage (at ADC): mV */
        MC_CMD_SENSOR_IN_0V9_ADC = 0x20,
        /* Controller temperature 2: degC */
        MC_CMD_SENSOR_CONTROLLER_2_TEMP = 0x21,
        /* Voltage regulator internal temperature: degC */
        MC_CMD_SENSOR_VREG_INTERNAL_TEMP = 0x22,
        /* 0.9V voltage regulator temperature: degC */
        MC_CMD_SENSOR_VREG_0V9_TEMP = 0x23,
        /* 1.2V voltage regulator temperature: degC */
        MC_CMD_SENSOR_VREG_1V2_TEMP = 0x24,
        /* controller internal temperature sensor voltage (internal ADC): mV */
        MC_CMD_SENSOR_CONTROLLER_VPTAT = 0x25,
        /* controller internal temperature (internal ADC): degC */
        MC_CMD_SENSOR_CONTROLLER_INTERNAL_TEMP = 0x26,
        /* controller internal temperature sensor voltage (external ADC): mV */
        MC_CMD_SENSOR_CONTROLLER_VPTAT_EXTADC = 0x27,
        /* controller internal temperature (external ADC): degC */
        MC_CMD_SENSOR_CONTROLLER_INTERNAL_TEMP_EXTADC = 0x28,
        /* ambient temperature: degC */
        MC_CMD_SENSOR_AMBIENT_TEMP = 0x29,
        /* air flow: bool */
        MC_CMD_SENSOR_AIRFLOW = 0x2a,
        /* voltage between VSS08D and VSS08D at CSR: mV */
        MC_CMD_SENSOR_VDD08D_VSS08D_CSR = 0x2b,
        /* voltage between VSS08D and VSS08D at CSR (external ADC): mV */
        MC_CMD_SENSOR_VDD08D_VSS08D_CSR_EXTADC = 0x2c,
        /* Hotpoint temperature: degC */
        MC_CMD_SENSOR_HOTPOINT_TEMP = 0x2d,
        /* Port 0 PHY power switch over-current: bool */
        MC_CMD_SENSOR_PHY_POWER_PORT0 = 0x2e,
        /* Port 1 PHY power switch over-current: bool */
        MC_CMD_SENSOR_PHY_POWER_PORT1 = 0x2f,
        /* Mop-up microcontroller reference voltage: mV */
        MC_CMD_SENSOR_MUM_VCC = 0x30,
        /* 0.9v power phase A voltage: mV */
        MC_CMD_SENSOR_IN_0V9_A = 0x31,
        /* 0.9v power phase A current: mA */
        MC_CMD_SENSOR_IN_I0V9_A = 0x32,
        /* 0.9V voltage regulator phase A temperature: degC */
        MC_CMD_SENSOR_VREG_0V9_A_TEMP = 0x33,
        /* 0.9v power phase B voltage: mV */
        MC_CMD_SENSOR_IN_0V9_B = 0x34,
        /* 0.9v power phase B current: mA */
        MC_CMD_SENSOR_IN_I0V9_B = 0x35,
        /* 0.9V voltage regulator phase B temperature: degC */
        MC_CMD_SENSOR_VREG_0V9_B_TEMP = 0x36,
        /* CCOM AVREG 1v2 supply (interval ADC): mV */
        MC_CMD_SENSOR_CCOM_AVREG_1V2_SUPPLY = 0x37,
        /* CCOM AVREG 1v2 supply (external ADC): mV */
        MC_CMD_SENSOR_CCOM_AVREG_1V2_SUPPLY_EXTADC = 0x38,
        /* CCOM AVREG 1v8 supply (interval ADC): mV */
        MC_CMD_SENSOR_CCOM_AVREG_1V8_SUPPLY = 0x39,
        /* CCOM AVREG 1v8 supply (external ADC): mV */
        MC_CMD_SENSOR_CCOM_AVREG_1V8_SUPPLY_EXTADC = 0x3a,
        /* CCOM RTS temperature: degC */
        MC_CMD_SENSOR_CONTROLLER_RTS = 0x3b,
        /* Not a sensor: reserved for the next page flag */
        MC_CMD_SENSOR_PAGE1_NEXT = 0x3f,
        /* controller internal temperature sensor voltage on master core
         * (internal ADC): mV
         */
        MC_CMD_SENSOR_CONTROLLER_MASTER_VPTAT = 0x40,
        /* Not a sensor: reserved for the next page flag */
        MC_CMD_SENSOR_PAGE2_NEXT = 0x5f,
    }
}
pub const MC_CMD_SENSOR_PAGE0_NEXT_LBN: u32 = 31;
pub const MC_CMD_SENSOR_PAGE0_NEXT_WIDTH: u32 = 1;
pub const MC_CMD_SENSOR_ENTRY_OFST: usize = 4;
pub const MC_CMD_SENSOR_ENTRY_LEN: usize = 8;
pub const MC_CMD_SENSOR_ENTRY_MINNUM: usize = 0;
pub const MC_CMD_SENSOR_ENTRY_MAXNUM: usize = 31;
/* Per-sensor limits, one entry for each bit set in MASK. */
pub const MC_CMD_SENSOR_INFO_ENTRY_TYPEDEF_LEN: usize = 8;
pub const MC_CMD_SENSOR_INFO_ENTRY_TYPEDEF_MIN1_OFST: usize = 0;
pub const MC_CMD_SENSOR_INFO_ENTRY_TYPEDEF_MIN1_LEN: usize = 2;
pub const MC_CMD_SENSOR_INFO_ENTRY_TYPEDEF_MAX1_OFST: usize = 2;
pub const MC_CMD_SENSOR_INFO_ENTRY_TYPEDEF_MAX1_LEN: usize = 2;
pub const MC_CMD_SENSOR_INFO_ENTRY_TYPEDEF_MIN2_OFST: usize = 4;
pub const MC_CMD_SENSOR_INFO_ENTRY_TYPEDEF_MIN2_LEN: usize = 2;
pub const MC_CMD_SENSOR_INFO_ENTRY_TYPEDEF_MAX2_OFST: usize = 6;
pub const MC_CMD_SENSOR_INFO_ENTRY_TYPEDEF_MAX2_LEN: usize = 2;

/* MC_CMD_READ_SENSORS
 * Returns the current reading from each sensor. DMAs an array of sensor
 * readings, in order of sensor type (but without gaps for unimplemented
 * sensors), into host memory.
 */
pub const MC_CMD_READ_SENSORS_IN_LEN: usize = 8;
/* DMA address of host buffer for sensor readings (must be 4Kbyte aligned). */
pub const MC_CMD_READ_SENSORS_IN_DMA_ADDR_OFST: usize = 0;
pub const MC_CMD_READ_SENSORS_IN_DMA_ADDR_LEN: usize = 8;
pub const MC_CMD_READ_SENSORS_EXT_IN_LEN: usize = 12;
pub const MC_CMD_READ_SENSORS_EXT_IN_DMA_ADDR_OFST: usize = 0;
pub const MC_CMD_READ_SENSORS_EXT_IN_DMA_ADDR_LEN: usize = 8;
/* Size in bytes of host buffer. */
pub const MC_CMD_READ_SENSORS_EXT_IN_LENGTH_OFST: usize = 8;
pub const MC_CMD_READ_SENSORS_EXT_IN_LENGTH_LEN: usize = 4;
pub const MC_CMD_READ_SENSORS_OUT_LEN: usize = 0;
/* Sensor reading as returned by MC_CMD_READ_SENSORS. */
pub const MC_CMD_SENSOR_VALUE_ENTRY_TYPEDEF_LEN: usize = 4;
pub const MC_CMD_SENSOR_VALUE_ENTRY_TYPEDEF_VALUE_OFST: usize = 0;
pub const MC_CMD_SENSOR_VALUE_ENTRY_TYPEDEF_VALUE_LEN: usize = 2;
pub const MC_CMD_SENSOR_VALUE_ENTRY_TYPEDEF_STATE_OFST: usize = 2;
pub const MC_CMD_SENSOR_VALUE_ENTRY_TYPEDEF_STATE_LEN: usize = 1;
mcdi_table! {
    MC_CMD_SENSOR_STATE_TABLE: u32 {
        /* Ok. */
        MC_CMD_SENSOR_STATE_OK = 0x0,
        /* Breached warning threshold. */
        MC_CMD_SENSOR_STATE_WARNING = 0x1,
        /* Breached fatal threshold. */
        MC_CMD_SENSOR_STATE_FATAL = 0x2,
        /* Fault with sensor. */
        MC_CMD_SENSOR_STATE_BROKEN = 0x3,
        /* Sensor is working but does not currently have a reading. */
        MC_CMD_SENSOR_STATE_NO_READING = 0x4,
        /* Sensor initialisation failed. */
        MC_CMD_SENSOR_STATE_INIT_FAILED = 0x5,
    }
}
pub const MC_CMD_SENSOR_VALUE_ENTRY_TYPEDEF_TYPE_OFST: usize = 3;
pub const MC_CMD_SENSOR_VALUE_ENTRY_TYPEDEF_TYPE_LEN: usize = 1;

/* MC_CMD_WORKAROUND
 * Enable/Disable a given workaround. The mcfw will return EINVAL if it
 * doesn't understand the request.
 */
pub const MC_CMD_WORKAROUND_IN_LEN: usize = 8;
/* The enums here must correspond with those in MC_CMD_GET_WORKAROUNDS. */
pub const MC_CMD_WORKAROUND_IN_TYPE_OFST: usize = 0;
pub const MC_CMD_WORKAROUND_IN_TYPE_LEN: usize = 4;
mcdi_table! {
    MC_CMD_WORKAROUND_TABLE: u32 {
        /* Bug 17230 work around. */
        MC_CMD_WORKAROUND_BUG17230 = 0x1,
        /* Bug 35388 work around (unsafe EVQ writes). */
        MC_CMD_WORKAROUND_BUG35388 = 0x2,
        /* Bug35017 workaround (A64 tables must be identity map) */
        MC_CMD_WORKAROUND_BUG35017 = 0x3,
        /* Bug 41750 present (MC_CMD_TRIGGER_INTERRUPT won't work) */
        MC_CMD_WORKAROUND_BUG41750 = 0x4,
        /* Bug 42008 present (Interrupts can overtake associated events). */
        MC_CMD_WORKAROUND_BUG42008 = 0x5,
        /* Bug 26807 features present in firmware (multicast filter chaining) */
        MC_CMD_WORKAROUND_BUG26807 = 0x6,
        /* Bug 61265 work around (broken EVQ TMR writes). */
        MC_CMD_WORKAROUND_BUG61265 = 0x7,
    }
}
/* 0 = disable the workaround indicated by TYPE; any non-zero value = enable
 * the workaround
 */
pub const MC_CMD_WORKAROUND_IN_ENABLED_OFST: usize = 4;
pub const MC_CMD_WORKAROUND_IN_ENABLED_LEN: usize = 4;
pub const MC_CMD_WORKAROUND_OUT_LEN: usize = 0;
pub const MC_CMD_WORKAROUND_EXT_OUT_LEN: usize = 4;
pub const MC_CMD_WORKAROUND_EXT_OUT_FLAGS_OFST: usize = 0;
pub const MC_CMD_WORKAROUND_EXT_OUT_FLAGS_LEN: usize = 4;
pub const MC_CMD_WORKAROUND_EXT_OUT_FLR_DONE_LBN: u32 = 0;
pub const MC_CMD_WORKAROUND_EXT_OUT_FLR_DONE_WIDTH: u32 = 1;

/* MC_CMD_GET_WORKAROUNDS
 * Read the list of all implemented and all currently enabled workarounds.
 * The enums here must correspond with those in MC_CMD_WORKAROUND.
 */
pub const MC_CMD_GET_WORKAROUNDS_OUT_LEN: usize = 8;
/* Each workaround is represented by a single bit according to the enums below. */
pub const MC_CMD_GET_WORKAROUNDS_OUT_IMPLEMENTED_OFST: usize = 0;
pub const MC_CMD_GET_WORKAROUNDS_OUT_IMPLEMENTED_LEN: usize = 4;
pub const MC_CMD_GET_WORKAROUNDS_OUT_ENABLED_OFST: usize = 4;
pub const MC_CMD_GET_WORKAROUNDS_OUT_ENABLED_LEN: usize = 4;
/* enum: Bug 17230 work around. */
pub const MC_CMD_GET_WORKAROUNDS_OUT_BUG17230: u32 = 0x2;
/* enum: Bug 35388 work around (unsafe EVQ writes). */
pub const MC_CMD_GET_WORKAROUNDS_OUT_BUG35388: u32 = 0x4;
/* enum: Bug35017 workaround (A64 tables must be identity map) */
pub const MC_CMD_GET_WORKAROUNDS_OUT_BUG35017: u32 = 0x8;
/* enum: Bug 41750 present (MC_CMD_TRIGGER_INTERRUPT won't work) */
pub const MC_CMD_GET_WORKAROUNDS_OUT_BUG41750: u32 = 0x10;
/* enum: Bug 42008 present (Interrupts can overtake associated events). */
pub const MC_CMD_GET_WORKAROUNDS_OUT_BUG42008: u32 = 0x20;
/* enum: Bug 26807 features present in firmware (multicast filter chaining) */
pub const MC_CMD_GET_WORKAROUNDS_OUT_BUG26807: u32 = 0x40;
/* enum: Bug 61265 work around (broken EVQ TMR writes). */
pub const MC_CMD_GET_WORKAROUNDS_OUT_BUG61265: u32 = 0x80;

/* MC_CMD_GET_RESOURCE_LIMITS
 * Retrieve maximum number of resources that can be allocated to this
 * function.
 */
pub const MC_CMD_GET_RESOURCE_LIMITS_IN_LEN: usize = 0;
pub const MC_CMD_GET_RESOURCE_LIMITS_OUT_LEN: usize = 16;
pub const MC_CMD_GET_RESOURCE_LIMITS_OUT_BUFTBL_OFST: usize = 0;
pub const MC_CMD_GET_RESOURCE_LIMITS_OUT_BUFTBL_LEN: usize = 4;
pub const MC_CMD_GET_RESOURCE_LIMITS_OUT_EVQ_OFST: usize = 4;
pub const MC_CMD_GET_RESOURCE_LIMITS_OUT_EVQ_LEN: usize = 4;
pub const MC_CMD_GET_RESOURCE_LIMITS_OUT_RXQ_OFST: usize = 8;
pub const MC_CMD_GET_RESOURCE_LIMITS_OUT_RXQ_LEN: usize = 4;
pub const MC_CMD_GET_RESOURCE_LIMITS_OUT_TXQ_OFST: usize = 12;
pub const MC_CMD_GET_RESOURCE_LIMITS_OUT_TXQ_LEN: usize = 4;

/* MC_CMD_GET_MAC_ADDRESSES
 * Returns the base MAC, count and stride for the requesting function
 */
pub const MC_CMD_GET_MAC_ADDRESSES_IN_LEN: usize = 0;
pub const MC_CMD_GET_MAC_ADDRESSES_OUT_LEN: usize = 16;
/* Base MAC address */
pub const MC_CMD_GET_MAC_ADDRESSES_OUT_MAC_ADDR_BASE_OFST: usize = 0;
pub const MC_CMD_GET_MAC_ADDRESSES_OUT_MAC_ADDR_BASE_LEN: usize = 6;
/* Padding */
pub const MC_CMD_GET_MAC_ADDRESSES_OUT_RESERVED_OFST: usize = 6;
pub const MC_CMD_GET_MAC_ADDRESSES_OUT_RESERVED_LEN: usize = 2;
/* Number of allocated MAC addresses */
pub const MC_CMD_GET_MAC_ADDRESSES_OUT_MAC_COUNT_OFST: usize = 8;
pub const MC_CMD_GET_MAC_ADDRESSES_OUT_MAC_COUNT_LEN: usize = 4;
/* Spacing of allocated MAC addresses */
pub const MC_CMD_GET_MAC_ADDRESSES_OUT_MAC_STRIDE_OFST: usize = 12;
pub const MC_CMD_GET_MAC_ADDRESSES_OUT_MAC_STRIDE_LEN: usize = 4;

/* MC_CMD_PRIVILEGE_MASK
 * Read/set privileges of an arbitrary PCIe function
 */
pub const MC_CMD_PRIVILEGE_MASK_IN_LEN: usize = 8;
/* The target function to have its mask read or set e.g. PF 0 = 0xFFFF0000, VF
 * 1,3 = 0x00030001
 */
pub const MC_CMD_PRIVILEGE_MASK_IN_FUNCTION_OFST: usize = 0;
pub const MC_CMD_PRIVILEGE_MASK_IN_FUNCTION_LEN: usize = 4;
pub const MC_CMD_PRIVILEGE_MASK_IN_FUNCTION_PF_LBN: u32 = 0;
pub const MC_CMD_PRIVILEGE_MASK_IN_FUNCTION_PF_WIDTH: u32 = 16;
pub const MC_CMD_PRIVILEGE_MASK_IN_FUNCTION_VF_LBN: u32 = 16;
pub const MC_CMD_PRIVILEGE_MASK_IN_FUNCTION_VF_WIDTH: u32 = 16;
pub const MC_CMD_PRIVILEGE_MASK_IN_VF_NULL: u32 = 0xffff;
/* New privilege mask to be set. The mask will only be changed if the MSB is
 * set to 1.
 */
pub const MC_CMD_PRIVILEGE_MASK_IN_NEW_MASK_OFST: usize = 4;
pub const MC_CMD_PRIVILEGE_MASK_IN_NEW_MASK_LEN: usize = 4;
pub const MC_CMD_PRIVILEGE_MASK_IN_GRP_ADMIN: u32 = 0x1;
pub const MC_CMD_PRIVILEGE_MASK_IN_GRP_LINK: u32 = 0x2;
pub const MC_CMD_PRIVILEGE_MASK_IN_GRP_ONLOAD: u32 = 0x4;
pub const MC_CMD_PRIVILEGE_MASK_IN_GRP_PTP: u32 = 0x8;
pub const MC_CMD_PRIVILEGE_MASK_IN_GRP_INSECURE_FILTERS: u32 = 0x10;
/* enum: Deprecated. Equivalent to MAC_SPOOFING_TX combined with CHANGE_MAC. */
pub const MC_CMD_PRIVILEGE_MASK_IN_GRP_MAC_SPOOFING: u32 = 0x20;
pub const MC_CMD_PRIVILEGE_MASK_IN_GRP_UNICAST: u32 = 0x40;
pub const MC_CMD_PRIVILEGE_MASK_IN_GRP_MULTICAST: u32 = 0x80;
pub const MC_CMD_PRIVILEGE_MASK_IN_GRP_BROADCAST: u32 = 0x100;
pub const MC_CMD_PRIVILEGE_MASK_IN_GRP_ALL_MULTICAST: u32 = 0x200;
pub const MC_CMD_PRIVILEGE_MASK_IN_GRP_PROMISCUOUS: u32 = 0x400;
/* enum: Allows to set the TX packets' source MAC address to any arbitrary MAC
 * address.
 */
pub const MC_CMD_PRIVILEGE_MASK_IN_GRP_MAC_SPOOFING_TX: u32 = 0x800;
/* enum: Privilege that allows a Function to change the MAC address configured
 * in its associated vAdapter/vPort.
 */
pub const MC_CMD_PRIVILEGE_MASK_IN_GRP_CHANGE_MAC: u32 = 0x1000;
/* enum: Privilege that allows a Function to install filters that specify VLANs
 * that are not in the permit list for the associated vPort.
 */
pub const MC_CMD_PRIVILEGE_MASK_IN_GRP_UNRESTRICTED_VLAN: u32 = 0x2000;
/* enum: Privilege for insecure commands. Commands that belong to this group
 * are not permitted on secure adapters regardless of the privilege mask.
 */
pub const MC_CMD_PRIVILEGE_MASK_IN_GRP_INSECURE: u32 = 0x4000;
/* enum: Set this bit to indicate that a new privilege mask is to be set,
 * otherwise the command will only read the existing mask.
 */
pub const MC_CMD_PRIVILEGE_MASK_IN_DO_CHANGE: u32 = 0x80000000;
pub const MC_CMD_PRIVILEGE_MASK_OUT_LEN: usize = 4;
/* For an admin function, always all the privileges are reported. */
pub const MC_CMD_PRIVILEGE_MASK_OUT_OLD_MASK_OFST: usize = 0;
pub const MC_CMD_PRIVILEGE_MASK_OUT_OLD_MASK_LEN: usize = 4;

/* MC_CMD_INIT_EVQ
 * Set up an event queue according to the supplied parameters. The IN
 * arguments end with an address for each 4k of host memory required to
 * back the EVQ.
 */
pub const MC_CMD_INIT_EVQ_IN_LENMIN: usize = 44;
pub const MC_CMD_INIT_EVQ_IN_LENMAX: usize = 548;
#[allow(non_snake_case)]
pub const fn MC_CMD_INIT_EVQ_IN_LEN(num: usize) -> usize {
    36 + 8 * num
}
/* Size, in entries */
pub const MC_CMD_INIT_EVQ_IN_SIZE_OFST: usize = 0;
pub const MC_CMD_INIT_EVQ_IN_SIZE_LEN: usize = 4;
/* Desired instance. Must be set to a specific instance, which is a function
 * local queue index.
 */
pub const MC_CMD_INIT_EVQ_IN_INSTANCE_OFST: usize = 4;
pub const MC_CMD_INIT_EVQ_IN_INSTANCE_LEN: usize = 4;
/* The initial timer value. The load value is ignored if the timer mode is DIS. */
pub const MC_CMD_INIT_EVQ_IN_TMR_LOAD_OFST: usize = 8;
pub const MC_CMD_INIT_EVQ_IN_TMR_LOAD_LEN: usize = 4;
/* The reload value is ignored in one-shot modes */
pub const MC_CMD_INIT_EVQ_IN_TMR_RELOAD_OFST: usize = 12;
pub const MC_CMD_INIT_EVQ_IN_TMR_RELOAD_LEN: usize = 4;
/* tbd */
pub const MC_CMD_INIT_EVQ_IN_FLAGS_OFST: usize = 16;
pub const MC_CMD_INIT_EVQ_IN_FLAGS_LEN: usize = 4;
pub const MC_CMD_INIT_EVQ_IN_FLAG_INTERRUPTING_LBN: u32 = 0;
pub const MC_CMD_INIT_EVQ_IN_FLAG_INTERRUPTING_WIDTH: u32 = 1;
pub const MC_CMD_INIT_EVQ_IN_FLAG_RPTR_DOS_LBN: u32 = 1;
pub const MC_CMD_INIT_EVQ_IN_FLAG_RPTR_DOS_WIDTH: u32 = 1;
pub const MC_CMD_INIT_EVQ_IN_FLAG_INT_ARMD_LBN: u32 = 2;
pub const MC_CMD_INIT_EVQ_IN_FLAG_INT_ARMD_WIDTH: u32 = 1;
pub const MC_CMD_INIT_EVQ_IN_FLAG_CUT_THRU_LBN: u32 = 3;
pub const MC_CMD_INIT_EVQ_IN_FLAG_CUT_THRU_WIDTH: u32 = 1;
pub const MC_CMD_INIT_EVQ_IN_FLAG_RX_MERGE_LBN: u32 = 4;
pub const MC_CMD_INIT_EVQ_IN_FLAG_RX_MERGE_WIDTH: u32 = 1;
pub const MC_CMD_INIT_EVQ_IN_FLAG_TX_MERGE_LBN: u32 = 5;
pub const MC_CMD_INIT_EVQ_IN_FLAG_TX_MERGE_WIDTH: u32 = 1;
pub const MC_CMD_INIT_EVQ_IN_FLAG_USE_TIMER_LBN: u32 = 6;
pub const MC_CMD_INIT_EVQ_IN_FLAG_USE_TIMER_WIDTH: u32 = 1;
pub const MC_CMD_INIT_EVQ_IN_TMR_MODE_OFST: usize = 20;
pub const MC_CMD_INIT_EVQ_IN_TMR_MODE_LEN: usize = 4;
/* enum: Disabled */
pub const MC_CMD_INIT_EVQ_IN_TMR_MODE_DIS: u32 = 0x0;
/* enum: Immediate */
pub const MC_CMD_INIT_EVQ_IN_TMR_IMMED_START: u32 = 0x1;
/* enum: Triggered */
pub const MC_CMD_INIT_EVQ_IN_TMR_TRIG_START: u32 = 0x2;
/* enum: Hold-off */
pub const MC_CMD_INIT_EVQ_IN_TMR_INT_HLDOFF: u32 = 0x3;
/* Target EVQ for wakeups if in wakeup mode. */
pub const MC_CMD_INIT_EVQ_IN_TARGET_EVQ_OFST: usize = 24;
pub const MC_CMD_INIT_EVQ_IN_TARGET_EVQ_LEN: usize = 4;
/* Target interrupt if in interrupting mode (note union with target EVQ). Use
 * MC_CMD_RESOURCE_INSTANCE_ANY unless a specific one required for test
 * purposes.
 */
pub const MC_CMD_INIT_EVQ_IN_IRQ_NUM_OFST: usize = 24;
pub const MC_CMD_INIT_EVQ_IN_IRQ_NUM_LEN: usize = 4;
/* Event Counter Mode. */
pub const MC_CMD_INIT_EVQ_IN_COUNT_MODE_OFST: usize = 28;
pub const MC_CMD_INIT_EVQ_IN_COUNT_MODE_LEN: usize = 4;
/* enum: Disabled */
pub const MC_CMD_INIT_EVQ_IN_COUNT_MODE_DIS: u32 = 0x0;
/* enum: Disabled */
pub const MC_CMD_INIT_EVQ_IN_COUNT_MODE_CYCLES: u32 = 0x1;
/* enum: Disabled */
pub const MC_CMD_INIT_EVQ_IN_COUNT_MODE_RX: u32 = 0x2;
/* enum: Disabled */
pub const MC_CMD_INIT_EVQ_IN_COUNT_MODE_TX: u32 = 0x3;
/* Event queue packet count threshold. */
pub const MC_CMD_INIT_EVQ_IN_COUNT_THRSHLD_OFST: usize = 32;
pub const MC_CMD_INIT_EVQ_IN_COUNT_THRSHLD_LEN: usize = 4;
/* 64-bit address of 4k of 4k-aligned host memory buffer */
pub const MC_CMD_INIT_EVQ_IN_DMA_ADDR_OFST: usize = 36;
pub const MC_CMD_INIT_EVQ_IN_DMA_ADDR_LEN: usize = 8;
pub const MC_CMD_INIT_EVQ_IN_DMA_ADDR_MINNUM: usize = 1;
pub const MC_CMD_INIT_EVQ_IN_DMA_ADDR_MAXNUM: usize = 64;
pub const MC_CMD_INIT_EVQ_OUT_LEN: usize = 4;
/* Only valid if INTRFLAG was true */
pub const MC_CMD_INIT_EVQ_OUT_IRQ_OFST: usize = 0;
pub const MC_CMD_INIT_EVQ_OUT_IRQ_LEN: usize = 4;

/* MC_CMD_INIT_RXQ
 * set up a receive queue according to the supplied parameters. The IN
 * arguments end with an address for each 4k of host memory required to
 * back the RXQ.
 */
pub const MC_CMD_INIT_RXQ_IN_LENMIN: usize = 36;
pub const MC_CMD_INIT_RXQ_IN_LENMAX: usize = 252;
#[allow(non_snake_case)]
pub const fn MC_CMD_INIT_RXQ_IN_LEN(num: usize) -> usize {
    28 + 8 * num
}
/* Size, in entries */
pub const MC_CMD_INIT_RXQ_IN_SIZE_OFST: usize = 0;
pub const MC_CMD_INIT_RXQ_IN_SIZE_LEN: usize = 4;
/* The EVQ to send events to. This is an index originally specified to INIT_EVQ */
pub const MC_CMD_INIT_RXQ_IN_TARGET_EVQ_OFST: usize = 4;
pub const MC_CMD_INIT_RXQ_IN_TARGET_EVQ_LEN: usize = 4;
/* The value to put in the event data. Check hardware spec. for valid range. */
pub const MC_CMD_INIT_RXQ_IN_LABEL_OFST: usize = 8;
pub const MC_CMD_INIT_RXQ_IN_LABEL_LEN: usize = 4;
/* Desired instance. Must be set to a specific instance, which is a function
 * local queue index.
 */
pub const MC_CMD_INIT_RXQ_IN_INSTANCE_OFST: usize = 12;
pub const MC_CMD_INIT_RXQ_IN_INSTANCE_LEN: usize = 4;
/* There will be more flags here. */
pub const MC_CMD_INIT_RXQ_IN_FLAGS_OFST: usize = 16;
pub const MC_CMD_INIT_RXQ_IN_FLAGS_LEN: usize = 4;
pub const MC_CMD_INIT_RXQ_IN_FLAG_BUFF_MODE_LBN: u32 = 0;
pub const MC_CMD_INIT_RXQ_IN_FLAG_BUFF_MODE_WIDTH: u32 = 1;
pub const MC_CMD_INIT_RXQ_IN_FLAG_HDR_SPLIT_LBN: u32 = 1;
pub const MC_CMD_INIT_RXQ_IN_FLAG_HDR_SPLIT_WIDTH: u32 = 1;
pub const MC_CMD_INIT_RXQ_IN_FLAG_TIMESTAMP_LBN: u32 = 2;
pub const MC_CMD_INIT_RXQ_IN_FLAG_TIMESTAMP_WIDTH: u32 = 1;
pub const MC_CMD_INIT_RXQ_IN_CRC_MODE_LBN: u32 = 3;
pub const MC_CMD_INIT_RXQ_IN_CRC_MODE_WIDTH: u32 = 4;
/* enum: No CRC. */
pub const MC_CMD_INIT_RXQ_IN_CRC_MODE_NONE: u32 = 0x0;
pub const MC_CMD_INIT_RXQ_IN_FLAG_CHAIN_LBN: u32 = 7;
pub const MC_CMD_INIT_RXQ_IN_FLAG_CHAIN_WIDTH: u32 = 1;
pub const MC_CMD_INIT_RXQ_IN_FLAG_PREFIX_LBN: u32 = 8;
pub const MC_CMD_INIT_RXQ_IN_FLAG_PREFIX_WIDTH: u32 = 1;
pub const MC_CMD_INIT_RXQ_IN_FLAG_DISABLE_SCATTER_LBN: u32 = 9;
pub const MC_CMD_INIT_RXQ_IN_FLAG_DISABLE_SCATTER_WIDTH: u32 = 1;
/* Owner ID to use if in buffer mode (zero if physical) */
pub const MC_CMD_INIT_RXQ_IN_OWNER_ID_OFST: usize = 20;
pub const MC_CMD_INIT_RXQ_IN_OWNER_ID_LEN: usize = 4;
/* The port ID associated with the v-adaptor which should contain this DMAQ. */
pub const MC_CMD_INIT_RXQ_IN_PORT_ID_OFST: usize = 24;
pub const MC_CMD_INIT_RXQ_IN_PORT_ID_LEN: usize = 4;
/* 64-bit address of 4k of 4k-aligned host memory buffer */
pub const MC_CMD_INIT_RXQ_IN_DMA_ADDR_OFST: usize = 28;
pub const MC_CMD_INIT_RXQ_IN_DMA_ADDR_LEN: usize = 8;
pub const MC_CMD_INIT_RXQ_IN_DMA_ADDR_MINNUM: usize = 1;
pub const MC_CMD_INIT_RXQ_IN_DMA_ADDR_MAXNUM: usize = 28;
pub const MC_CMD_INIT_RXQ_OUT_LEN: usize = 0;

/* MC_CMD_INIT_TXQ */
pub const MC_CMD_INIT_TXQ_IN_LENMIN: usize = 36;
pub const MC_CMD_INIT_TXQ_IN_LENMAX: usize = 252;
#[allow(non_snake_case)]
pub const fn MC_CMD_INIT_TXQ_IN_LEN(num: usize) -> usize {
    28 + 8 * num
}
/* Size, in entries */
pub const MC_CMD_INIT_TXQ_IN_SIZE_OFST: usize = 0;
pub const MC_CMD_INIT_TXQ_IN_SIZE_LEN: usize = 4;
/* The EVQ to send events to. This is an index originally specified to
 * INIT_EVQ.
 */
pub const MC_CMD_INIT_TXQ_IN_TARGET_EVQ_OFST: usize = 4;
pub const MC_CMD_INIT_TXQ_IN_TARGET_EVQ_LEN: usize = 4;
/* The value to put in the event data. Check hardware spec. for valid range. */
pub const MC_CMD_INIT_TXQ_IN_LABEL_OFST: usize = 8;
pub const MC_CMD_INIT_TXQ_IN_LABEL_LEN: usize = 4;
/* Desired instance. Must be set to a specific instance, which is a function
 * local queue index.
 */
pub const MC_CMD_INIT_TXQ_IN_INSTANCE_OFST: usize = 12;
pub const MC_CMD_INIT_TXQ_IN_INSTANCE_LEN: usize = 4;
/* There will be more flags here. */
pub const MC_CMD_INIT_TXQ_IN_FLAGS_OFST: usize = 16;
pub const MC_CMD_INIT_TXQ_IN_FLAGS_LEN: usize = 4;
pub const MC_CMD_INIT_TXQ_IN_FLAG_BUFF_MODE_LBN: u32 = 0;
pub const MC_CMD_INIT_TXQ_IN_FLAG_BUFF_MODE_WIDTH: u32 = 1;
pub const MC_CMD_INIT_TXQ_IN_FLAG_IP_CSUM_DIS_LBN: u32 = 1;
pub const MC_CMD_INIT_TXQ_IN_FLAG_IP_CSUM_DIS_WIDTH: u32 = 1;
pub const MC_CMD_INIT_TXQ_IN_FLAG_TCP_CSUM_DIS_LBN: u32 = 2;
pub const MC_CMD_INIT_TXQ_IN_FLAG_TCP_CSUM_DIS_WIDTH: u32 = 1;
pub const MC_CMD_INIT_TXQ_IN_FLAG_TCP_UDP_ONLY_LBN: u32 = 3;
pub const MC_CMD_INIT_TXQ_IN_FLAG_TCP_UDP_ONLY_WIDTH: u32 = 1;
pub const MC_CMD_INIT_TXQ_IN_CRC_MODE_LBN: u32 = 4;
pub const MC_CMD_INIT_TXQ_IN_CRC_MODE_WIDTH: u32 = 4;
pub const MC_CMD_INIT_TXQ_IN_FLAG_TIMESTAMP_LBN: u32 = 8;
pub const MC_CMD_INIT_TXQ_IN_FLAG_TIMESTAMP_WIDTH: u32 = 1;
pub const MC_CMD_INIT_TXQ_IN_FLAG_PACER_BYPASS_LBN: u32 = 9;
pub const MC_CMD_INIT_TXQ_IN_FLAG_PACER_BYPASS_WIDTH: u32 = 1;
pub const MC_CMD_INIT_TXQ_IN_FLAG_INNER_IP_CSUM_EN_LBN: u32 = 10;
pub const MC_CMD_INIT_TXQ_IN_FLAG_INNER_IP_CSUM_EN_WIDTH: u32 = 1;
pub const MC_CMD_INIT_TXQ_IN_FLAG_INNER_TCP_CSUM_EN_LBN: u32 = 11;
pub const MC_CMD_INIT_TXQ_IN_FLAG_INNER_TCP_CSUM_EN_WIDTH: u32 = 1;
/* Owner ID to use if in buffer mode (zero if physical) */
pub const MC_CMD_INIT_TXQ_IN_OWNER_ID_OFST: usize = 20;
pub const MC_CMD_INIT_TXQ_IN_OWNER_ID_LEN: usize = 4;
/* The port ID associated with the v-adaptor which should contain this DMAQ. */
pub const MC_CMD_INIT_TXQ_IN_PORT_ID_OFST: usize = 24;
pub const MC_CMD_INIT_TXQ_IN_PORT_ID_LEN: usize = 4;
/* 64-bit address of 4k of 4k-aligned host memory buffer */
pub const MC_CMD_INIT_TXQ_IN_DMA_ADDR_OFST: usize = 28;
pub const MC_CMD_INIT_TXQ_IN_DMA_ADDR_LEN: usize = 8;
pub const MC_CMD_INIT_TXQ_IN_DMA_ADDR_MINNUM: usize = 1;
pub const MC_CMD_INIT_TXQ_IN_DMA_ADDR_MAXNUM: usize = 28;
pub const MC_CMD_INIT_TXQ_OUT_LEN: usize = 0;

/* MC_CMD_FINI_EVQ
 * Teardown an EVQ. All DMAQs or EVQs that point to the EVQ to tear down
 * must be torn down first, or the operation will fail with EBUSY
 */
pub const MC_CMD_FINI_EVQ_IN_LEN: usize = 4;
/* Instance of EVQ to destroy. Should be the same instance as that previously
 * passed to INIT_EVQ
 */
pub const MC_CMD_FINI_EVQ_IN_INSTANCE_OFST: usize = 0;
pub const MC_CMD_FINI_EVQ_IN_INSTANCE_LEN: usize = 4;
pub const MC_CMD_FINI_EVQ_OUT_LEN: usize = 0;

/* MC_CMD_FINI_RXQ
 * Teardown a RXQ.
 */
pub const MC_CMD_FINI_RXQ_IN_LEN: usize = 4;
/* Instance of RXQ to destroy */
pub const MC_CMD_FINI_RXQ_IN_INSTANCE_OFST: usize = 0;
pub const MC_CMD_FINI_RXQ_IN_INSTANCE_LEN: usize = 4;
pub const MC_CMD_FINI_RXQ_OUT_LEN: usize = 0;

/* MC_CMD_FINI_TXQ
 * Teardown a TXQ.
 */
pub const MC_CMD_FINI_TXQ_IN_LEN: usize = 4;
/* Instance of TXQ to destroy */
pub const MC_CMD_FINI_TXQ_IN_INSTANCE_OFST: usize = 0;
pub const MC_CMD_FINI_TXQ_IN_INSTANCE_LEN: usize = 4;
pub const MC_CMD_FINI_TXQ_OUT_LEN: usize = 0;

/* MC_CMD_FILTER_OP
 * Multiplexed MCDI call for filter operations
 */
pub const MC_CMD_FILTER_OP_IN_LEN: usize = 108;
/* identifies the type of operation requested */
pub const MC_CMD_FILTER_OP_IN_OP_OFST: usize = 0;
pub const MC_CMD_FILTER_OP_IN_OP_LEN: usize = 4;
mcdi_table! {
    MC_CMD_FILTER_OP_TABLE: u32 {
        /* single-recipient filter insert */
        MC_CMD_FILTER_OP_IN_OP_INSERT = 0x0,
        /* single-recipient filter remove */
        MC_CMD_FILTER_OP_IN_OP_REMOVE = 0x1,
        /* multi-recipient filter subscribe */
        MC_CMD_FILTER_OP_IN_OP_SUBSCRIBE = 0x2,
        /* multi-recipient filter unsubscribe */
        MC_CMD_FILTER_OP_IN_OP_UNSUBSCRIBE = 0x3,
        /* replace one recipient with another (warning - the filter handle may
         * change)
         */
        MC_CMD_FILTER_OP_IN_OP_REPLACE = 0x4,
    }
}
/* filter handle (for remove / unsubscribe operations) */
pub const MC_CMD_FILTER_OP_IN_HANDLE_OFST: usize = 4;
pub const MC_CMD_FILTER_OP_IN_HANDLE_LEN: usize = 8;
/* The port ID associated with the v-adaptor which should contain this filter. */
pub const MC_CMD_FILTER_OP_IN_PORT_ID_OFST: usize = 12;
pub const MC_CMD_FILTER_OP_IN_PORT_ID_LEN: usize = 4;
/* fields to include in match criteria */
pub const MC_CMD_FILTER_OP_IN_MATCH_FIELDS_OFST: usize = 16;
pub const MC_CMD_FILTER_OP_IN_MATCH_FIELDS_LEN: usize = 4;
pub const MC_CMD_FILTER_OP_IN_MATCH_SRC_IP_LBN: u32 = 0;
pub const MC_CMD_FILTER_OP_IN_MATCH_SRC_IP_WIDTH: u32 = 1;
pub const MC_CMD_FILTER_OP_IN_MATCH_DST_IP_LBN: u32 = 1;
pub const MC_CMD_FILTER_OP_IN_MATCH_DST_IP_WIDTH: u32 = 1;
pub const MC_CMD_FILTER_OP_IN_MATCH_SRC_MAC_LBN: u32 = 2;
pub const MC_CMD_FILTER_OP_IN_MATCH_SRC_MAC_WIDTH: u32 = 1;
pub const MC_CMD_FILTER_OP_IN_MATCH_SRC_PORT_LBN: u32 = 3;
pub const MC_CMD_FILTER_OP_IN_MATCH_SRC_PORT_WIDTH: u32 = 1;
pub const MC_CMD_FILTER_OP_IN_MATCH_DST_MAC_LBN: u32 = 4;
pub const MC_CMD_FILTER_OP_IN_MATCH_DST_MAC_WIDTH: u32 = 1;
pub const MC_CMD_FILTER_OP_IN_MATCH_DST_PORT_LBN: u32 = 5;
pub const MC_CMD_FILTER_OP_IN_MATCH_DST_PORT_WIDTH: u32 = 1;
pub const MC_CMD_FILTER_OP_IN_MATCH_ETHER_TYPE_LBN: u32 = 6;
pub const MC_CMD_FILTER_OP_IN_MATCH_ETHER_TYPE_WIDTH: u32 = 1;
pub const MC_CMD_FILTER_OP_IN_MATCH_INNER_VLAN_LBN: u32 = 7;
pub const MC_CMD_FILTER_OP_IN_MATCH_INNER_VLAN_WIDTH: u32 = 1;
pub const MC_CMD_FILTER_OP_IN_MATCH_OUTER_VLAN_LBN: u32 = 8;
pub const MC_CMD_FILTER_OP_IN_MATCH_OUTER_VLAN_WIDTH: u32 = 1;
pub const MC_CMD_FILTER_OP_IN_MATCH_IP_PROTO_LBN: u32 = 9;
pub const MC_CMD_FILTER_OP_IN_MATCH_IP_PROTO_WIDTH: u32 = 1;
pub const MC_CMD_FILTER_OP_IN_MATCH_FWDEF0_LBN: u32 = 10;
pub const MC_CMD_FILTER_OP_IN_MATCH_FWDEF0_WIDTH: u32 = 1;
pub const MC_CMD_FILTER_OP_IN_MATCH_FWDEF1_LBN: u32 = 11;
pub const MC_CMD_FILTER_OP_IN_MATCH_FWDEF1_WIDTH: u32 = 1;
pub const MC_CMD_FILTER_OP_IN_MATCH_UNKNOWN_MCAST_DST_LBN: u32 = 30;
pub const MC_CMD_FILTER_OP_IN_MATCH_UNKNOWN_MCAST_DST_WIDTH: u32 = 1;
pub const MC_CMD_FILTER_OP_IN_MATCH_UNKNOWN_UCAST_DST_LBN: u32 = 31;
pub const MC_CMD_FILTER_OP_IN_MATCH_UNKNOWN_UCAST_DST_WIDTH: u32 = 1;
/* receive destination */
pub const MC_CMD_FILTER_OP_IN_RX_DEST_OFST: usize = 20;
pub const MC_CMD_FILTER_OP_IN_RX_DEST_LEN: usize = 4;
mcdi_table! {
    MC_CMD_FILTER_OP_RX_DEST_TABLE: u32 {
        /* drop packets */
        MC_CMD_FILTER_OP_IN_RX_DEST_DROP = 0x0,
        /* receive to host */
        MC_CMD_FILTER_OP_IN_RX_DEST_HOST = 0x1,
        /* receive to MC */
        MC_CMD_FILTER_OP_IN_RX_DEST_MC = 0x2,
        /* loop back to TXMAC 0 */
        MC_CMD_FILTER_OP_IN_RX_DEST_TX0 = 0x3,
        /* loop back to TXMAC 1 */
        MC_CMD_FILTER_OP_IN_RX_DEST_TX1 = 0x4,
    }
}
/* receive queue handle (for multiple queue modes, this is the base queue) */
pub const MC_CMD_FILTER_OP_IN_RX_QUEUE_OFST: usize = 24;
pub const MC_CMD_FILTER_OP_IN_RX_QUEUE_LEN: usize = 4;
/* receive mode */
pub const MC_CMD_FILTER_OP_IN_RX_MODE_OFST: usize = 28;
pub const MC_CMD_FILTER_OP_IN_RX_MODE_LEN: usize = 4;
/* enum: receive to just the specified queue */
pub const MC_CMD_FILTER_OP_IN_RX_MODE_SIMPLE: u32 = 0x0;
/* enum: receive to multiple queues using RSS context */
pub const MC_CMD_FILTER_OP_IN_RX_MODE_RSS: u32 = 0x1;
/* enum: receive to multiple queues using .1p mapping */
pub const MC_CMD_FILTER_OP_IN_RX_MODE_DOT1P_MAPPING: u32 = 0x2;
/* enum: install a filter entry that will never match; for test purposes only */
pub const MC_CMD_FILTER_OP_IN_RX_MODE_TEST_NEVER_MATCH: u32 = 0x80000000;
/* RSS context (for RX_MODE_RSS) or .1p mapping handle (for
 * RX_MODE_DOT1P_MAPPING), as returned by MC_CMD_RSS_CONTEXT_ALLOC or
 * MC_CMD_DOT1P_MAPPING_ALLOC.
 */
pub const MC_CMD_FILTER_OP_IN_RX_CONTEXT_OFST: usize = 32;
pub const MC_CMD_FILTER_OP_IN_RX_CONTEXT_LEN: usize = 4;
/* transmit domain (reserved; set to 0) */
pub const MC_CMD_FILTER_OP_IN_TX_DOMAIN_OFST: usize = 36;
pub const MC_CMD_FILTER_OP_IN_TX_DOMAIN_LEN: usize = 4;
/* transmit destination (either set the MAC and/or PM bits for explicit
 * control, or set this field to TX_DEST_DEFAULT for sensible default
 * behaviour)
 */
pub const MC_CMD_FILTER_OP_IN_TX_DEST_OFST: usize = 40;
pub const MC_CMD_FILTER_OP_IN_TX_DEST_LEN: usize = 4;
/* enum: request default behaviour (based on filter type) */
pub const MC_CMD_FILTER_OP_IN_TX_DEST_DEFAULT: u32 = 0xffffffff;
pub const MC_CMD_FILTER_OP_IN_TX_DEST_MAC_LBN: u32 = 0;
pub const MC_CMD_FILTER_OP_IN_TX_DEST_MAC_WIDTH: u32 = 1;
pub const MC_CMD_FILTER_OP_IN_TX_DEST_PM_LBN: u32 = 1;
pub const MC_CMD_FILTER_OP_IN_TX_DEST_PM_WIDTH: u32 = 1;
/* source MAC address to match (as bytes in network order) */
pub const MC_CMD_FILTER_OP_IN_SRC_MAC_OFST: usize = 44;
pub const MC_CMD_FILTER_OP_IN_SRC_MAC_LEN: usize = 6;
/* source port to match (as bytes in network order) */
pub const MC_CMD_FILTER_OP_IN_SRC_PORT_OFST: usize = 50;
pub const MC_CMD_FILTER_OP_IN_SRC_PORT_LEN: usize = 2;
/* destination MAC address to match (as bytes in network order) */
pub const MC_CMD_FILTER_OP_IN_DST_MAC_OFST: usize = 52;
pub const MC_CMD_FILTER_OP_IN_DST_MAC_LEN: usize = 6;
/* destination port to match (as bytes in network order) */
pub const MC_CMD_FILTER_OP_IN_DST_PORT_OFST: usize = 58;
pub const MC_CMD_FILTER_OP_IN_DST_PORT_LEN: usize = 2;
/* Ethernet type to match (as bytes in network order) */
pub const MC_CMD_FILTER_OP_IN_ETHER_TYPE_OFST: usize = 60;
pub const MC_CMD_FILTER_OP_IN_ETHER_TYPE_LEN: usize = 2;
/* Inner VLAN tag to match (as bytes in network order) */
pub const MC_CMD_FILTER_OP_IN_INNER_VLAN_OFST: usize = 62;
pub const MC_CMD_FILTER_OP_IN_INNER_VLAN_LEN: usize = 2;
/* Outer VLAN tag to match (as bytes in network order) */
pub const MC_CMD_FILTER_OP_IN_OUTER_VLAN_OFST: usize = 64;
pub const MC_CMD_FILTER_OP_IN_OUTER_VLAN_LEN: usize = 2;
/* IP protocol to match (in low byte; set high byte to 0) */
pub const MC_CMD_FILTER_OP_IN_IP_PROTO_OFST: usize = 66;
pub const MC_CMD_FILTER_OP_IN_IP_PROTO_LEN: usize = 2;
/* Firmware defined register 0 to match (reserved; set to 0) */
pub const MC_CMD_FILTER_OP_IN_FWDEF0_OFST: usize = 68;
pub const MC_CMD_FILTER_OP_IN_FWDEF0_LEN: usize = 4;
/* Firmware defined register 1 to match (reserved; set to 0) */
pub const MC_CMD_FILTER_OP_IN_FWDEF1_OFST: usize = 72;
pub const MC_CMD_FILTER_OP_IN_FWDEF1_LEN: usize = 4;
/* source IP address to match (as bytes in network order; set last 12 bytes to
 * 0 for IPv4 address)
 */
pub const MC_CMD_FILTER_OP_IN_SRC_IP_OFST: usize = 76;
pub const MC_CMD_FILTER_OP_IN_SRC_IP_LEN: usize = 16;
/* destination IP address to match (as bytes in network order; set last 12
 * bytes to 0 for IPv4 address)
 */
pub const MC_CMD_FILTER_OP_IN_DST_IP_OFST: usize = 92;
pub const MC_CMD_FILTER_OP_IN_DST_IP_LEN: usize = 16;
pub const MC_CMD_FILTER_OP_OUT_LEN: usize = 12;
/* identifies the type of operation requested */
pub const MC_CMD_FILTER_OP_OUT_OP_OFST: usize = 0;
pub const MC_CMD_FILTER_OP_OUT_OP_LEN: usize = 4;
/* Returned filter handle (for insert / subscribe operations). Note that these
 * handles should be considered opaque to the host, although a value of
 * 0xFFFFFFFF_FFFFFFFF is guaranteed never to be returned as a valid handle.
 */
pub const MC_CMD_FILTER_OP_OUT_HANDLE_OFST: usize = 4;
pub const MC_CMD_FILTER_OP_OUT_HANDLE_LEN: usize = 8;
/* enum: guaranteed invalid filter handle (low 32 bits) */
pub const MC_CMD_FILTER_OP_OUT_HANDLE_LO_INVALID: u32 = 0xffffffff;
/* enum: guaranteed invalid filter handle (high 32 bits) */
pub const MC_CMD_FILTER_OP_OUT_HANDLE_HI_INVALID: u32 = 0xffffffff;

/* MC_CMD_ALLOC_VIS
 * Allocate VI resources. This is called when a function is configuring
 * itself, before any other resources are allocated.
 */
pub const MC_CMD_ALLOC_VIS_IN_LEN: usize = 8;
/* The minimum number of VIs that is acceptable */
pub const MC_CMD_ALLOC_VIS_IN_MIN_VI_COUNT_OFST: usize = 0;
pub const MC_CMD_ALLOC_VIS_IN_MIN_VI_COUNT_LEN: usize = 4;
/* The maximum number of VIs that would be useful */
pub const MC_CMD_ALLOC_VIS_IN_MAX_VI_COUNT_OFST: usize = 4;
pub const MC_CMD_ALLOC_VIS_IN_MAX_VI_COUNT_LEN: usize = 4;
pub const MC_CMD_ALLOC_VIS_OUT_LEN: usize = 8;
/* The number of VIs allocated on this function */
pub const MC_CMD_ALLOC_VIS_OUT_VI_COUNT_OFST: usize = 0;
pub const MC_CMD_ALLOC_VIS_OUT_VI_COUNT_LEN: usize = 4;
/* The base absolute VI number allocated to this function. Required to
 * correctly interpret wakeup events.
 */
pub const MC_CMD_ALLOC_VIS_OUT_VI_BASE_OFST: usize = 4;
pub const MC_CMD_ALLOC_VIS_OUT_VI_BASE_LEN: usize = 4;
pub const MC_CMD_ALLOC_VIS_EXT_OUT_LEN: usize = 12;
pub const MC_CMD_ALLOC_VIS_EXT_OUT_VI_COUNT_OFST: usize = 0;
pub const MC_CMD_ALLOC_VIS_EXT_OUT_VI_COUNT_LEN: usize = 4;
pub const MC_CMD_ALLOC_VIS_EXT_OUT_VI_BASE_OFST: usize = 4;
pub const MC_CMD_ALLOC_VIS_EXT_OUT_VI_BASE_LEN: usize = 4;
/* Function's port vi_shift value (always 0 on Huntington) */
pub const MC_CMD_ALLOC_VIS_EXT_OUT_VI_SHIFT_OFST: usize = 8;
pub const MC_CMD_ALLOC_VIS_EXT_OUT_VI_SHIFT_LEN: usize = 4;

/* MC_CMD_FREE_VIS
 * Free VI resources. This is called when a function is resetting itself or
 * deconfiguring itself.
 */
pub const MC_CMD_FREE_VIS_IN_LEN: usize = 0;
pub const MC_CMD_FREE_VIS_OUT_LEN: usize = 0;

/* MC_CMD_GET_CAPABILITIES
 * Get device capabilities.
 */
pub const MC_CMD_GET_CAPABILITIES_IN_LEN: usize = 0;
pub const MC_CMD_GET_CAPABILITIES_OUT_LEN: usize = 20;
/* First word of flags. */
pub const MC_CMD_GET_CAPABILITIES_OUT_FLAGS1_OFST: usize = 0;
pub const MC_CMD_GET_CAPABILITIES_OUT_FLAGS1_LEN: usize = 4;
pub const MC_CMD_GET_CAPABILITIES_OUT_VPORT_RECONFIGURE_LBN: u32 = 3;
pub const MC_CMD_GET_CAPABILITIES_OUT_VPORT_RECONFIGURE_WIDTH: u32 = 1;
pub const MC_CMD_GET_CAPABILITIES_OUT_TX_STRIPING_LBN: u32 = 4;
pub const MC_CMD_GET_CAPABILITIES_OUT_TX_STRIPING_WIDTH: u32 = 1;
pub const MC_CMD_GET_CAPABILITIES_OUT_VADAPTOR_QUERY_LBN: u32 = 5;
pub const MC_CMD_GET_CAPABILITIES_OUT_VADAPTOR_QUERY_WIDTH: u32 = 1;
pub const MC_CMD_GET_CAPABILITIES_OUT_EVB_PORT_VLAN_RESTRICT_LBN: u32 = 6;
pub const MC_CMD_GET_CAPABILITIES_OUT_EVB_PORT_VLAN_RESTRICT_WIDTH: u32 = 1;
pub const MC_CMD_GET_CAPABILITIES_OUT_DRV_ATTACH_PREBOOT_LBN: u32 = 7;
pub const MC_CMD_GET_CAPABILITIES_OUT_DRV_ATTACH_PREBOOT_WIDTH: u32 = 1;
pub const MC_CMD_GET_CAPABILITIES_OUT_RX_FORCE_EVENT_MERGING_LBN: u32 = 8;
pub const MC_CMD_GET_CAPABILITIES_OUT_RX_FORCE_EVENT_MERGING_WIDTH: u32 = 1;
pub const MC_CMD_GET_CAPABILITIES_OUT_SET_MAC_ENHANCED_LBN: u32 = 9;
pub const MC_CMD_GET_CAPABILITIES_OUT_SET_MAC_ENHANCED_WIDTH: u32 = 1;
pub const MC_CMD_GET_CAPABILITIES_OUT_UNKNOWN_UCAST_DST_FILTER_ALWAYS_MULTI_RECIPIENT_LBN: u32 = 10;
pub const MC_CMD_GET_CAPABILITIES_OUT_UNKNOWN_UCAST_DST_FILTER_ALWAYS_MULTI_RECIPIENT_WIDTH: u32 = 1;
pub const MC_CMD_GET_CAPABILITIES_OUT_VADAPTOR_PERMIT_SET_MAC_WHEN_FILTERS_INSTALLED_LBN: u32 = 11;
pub const MC_CMD_GET_CAPABILITIES_OUT_VADAPTOR_PERMIT_SET_MAC_WHEN_FILTERS_INSTALLED_WIDTH: u32 = 1;
pub const MC_CMD_GET_CAPABILITIES_OUT_TX_MAC_SECURITY_FILTERING_LBN: u32 = 12;
pub const MC_CMD_GET_CAPABILITIES_OUT_TX_MAC_SECURITY_FILTERING_WIDTH: u32 = 1;
pub const MC_CMD_GET_CAPABILITIES_OUT_ADDITIONAL_RSS_MODES_LBN: u32 = 13;
pub const MC_CMD_GET_CAPABILITIES_OUT_ADDITIONAL_RSS_MODES_WIDTH: u32 = 1;
pub const MC_CMD_GET_CAPABILITIES_OUT_QBB_LBN: u32 = 14;
pub const MC_CMD_GET_CAPABILITIES_OUT_QBB_WIDTH: u32 = 1;
pub const MC_CMD_GET_CAPABILITIES_OUT_RX_PACKED_STREAM_VAR_BUFFERS_LBN: u32 = 15;
pub const MC_CMD_GET_CAPABILITIES_OUT_RX_PACKED_STREAM_VAR_BUFFERS_WIDTH: u32 = 1;
pub const MC_CMD_GET_CAPABILITIES_OUT_RX_RSS_LIMITED_LBN: u32 = 16;
pub const MC_CMD_GET_CAPABILITIES_OUT_RX_RSS_LIMITED_WIDTH: u32 = 1;
pub const MC_CMD_GET_CAPABILITIES_OUT_RX_PACKED_STREAM_LBN: u32 = 17;
pub const MC_CMD_GET_CAPABILITIES_OUT_RX_PACKED_STREAM_WIDTH: u32 = 1;
pub const MC_CMD_GET_CAPABILITIES_OUT_RX_INCLUDE_FCS_LBN: u32 = 18;
pub const MC_CMD_GET_CAPABILITIES_OUT_RX_INCLUDE_FCS_WIDTH: u32 = 1;
pub const MC_CMD_GET_CAPABILITIES_OUT_TX_VLAN_INSERTION_LBN: u32 = 19;
pub const MC_CMD_GET_CAPABILITIES_OUT_TX_VLAN_INSERTION_WIDTH: u32 = 1;
pub const MC_CMD_GET_CAPABILITIES_OUT_RX_VLAN_STRIPPING_LBN: u32 = 20;
pub const MC_CMD_GET_CAPABILITIES_OUT_RX_VLAN_STRIPPING_WIDTH: u32 = 1;
pub const MC_CMD_GET_CAPABILITIES_OUT_TX_TSO_LBN: u32 = 21;
pub const MC_CMD_GET_CAPABILITIES_OUT_TX_TSO_WIDTH: u32 = 1;
pub const MC_CMD_GET_CAPABILITIES_OUT_RX_PREFIX_LEN_0_LBN: u32 = 22;
pub const MC_CMD_GET_CAPABILITIES_OUT_RX_PREFIX_LEN_0_WIDTH: u32 = 1;
pub const MC_CMD_GET_CAPABILITIES_OUT_RX_PREFIX_LEN_14_LBN: u32 = 23;
pub const MC_CMD_GET_CAPABILITIES_OUT_RX_PREFIX_LEN_14_WIDTH: u32 = 1;
pub const MC_CMD_GET_CAPABILITIES_OUT_RX_TIMESTAMP_LBN: u32 = 24;
pub const MC_CMD_GET_CAPABILITIES_OUT_RX_TIMESTAMP_WIDTH: u32 = 1;
pub const MC_CMD_GET_CAPABILITIES_OUT_RX_BATCHING_LBN: u32 = 25;
pub const MC_CMD_GET_CAPABILITIES_OUT_RX_BATCHING_WIDTH: u32 = 1;
pub const MC_CMD_GET_CAPABILITIES_OUT_MCAST_FILTER_CHAINING_LBN: u32 = 26;
pub const MC_CMD_GET_CAPABILITIES_OUT_MCAST_FILTER_CHAINING_WIDTH: u32 = 1;
pub const MC_CMD_GET_CAPABILITIES_OUT_PM_AND_RXDP_COUNTERS_LBN: u32 = 27;
pub const MC_CMD_GET_CAPABILITIES_OUT_PM_AND_RXDP_COUNTERS_WIDTH: u32 = 1;
pub const MC_CMD_GET_CAPABILITIES_OUT_RX_DISABLE_SCATTER_LBN: u32 = 28;
pub const MC_CMD_GET_CAPABILITIES_OUT_RX_DISABLE_SCATTER_WIDTH: u32 = 1;
pub const MC_CMD_GET_CAPABILITIES_OUT_TX_MCAST_UDP_LOOPBACK_LBN: u32 = 29;
pub const MC_CMD_GET_CAPABILITIES_OUT_TX_MCAST_UDP_LOOPBACK_WIDTH: u32 = 1;
pub const MC_CMD_GET_CAPABILITIES_OUT_EVB_LBN: u32 = 30;
pub const MC_CMD_GET_CAPABILITIES_OUT_EVB_WIDTH: u32 = 1;
pub const MC_CMD_GET_CAPABILITIES_OUT_TX_VFIFO_ULL_MODE_LBN: u32 = 31;
pub const MC_CMD_GET_CAPABILITIES_OUT_TX_VFIFO_ULL_MODE_WIDTH: u32 = 1;
/* RxDPCPU firmware id. */
pub const MC_CMD_GET_CAPABILITIES_OUT_RX_DPCPU_FW_ID_OFST: usize = 4;
pub const MC_CMD_GET_CAPABILITIES_OUT_RX_DPCPU_FW_ID_LEN: usize = 2;
/* TxDPCPU firmware id. */
pub const MC_CMD_GET_CAPABILITIES_OUT_TX_DPCPU_FW_ID_OFST: usize = 6;
pub const MC_CMD_GET_CAPABILITIES_OUT_TX_DPCPU_FW_ID_LEN: usize = 2;
pub const MC_CMD_GET_CAPABILITIES_OUT_RXPD_FW_VERSION_OFST: usize = 8;
pub const MC_CMD_GET_CAPABILITIES_OUT_RXPD_FW_VERSION_LEN: usize = 2;
pub const MC_CMD_GET_CAPABILITIES_OUT_RXPD_FW_VERSION_REV_LBN: u32 = 0;
pub const MC_CMD_GET_CAPABILITIES_OUT_RXPD_FW_VERSION_REV_WIDTH: u32 = 12;
pub const MC_CMD_GET_CAPABILITIES_OUT_RXPD_FW_VERSION_TYPE_LBN: u32 = 12;
pub const MC_CMD_GET_CAPABILITIES_OUT_RXPD_FW_VERSION_TYPE_WIDTH: u32 = 4;
pub const MC_CMD_GET_CAPABILITIES_OUT_TXPD_FW_VERSION_OFST: usize = 10;
pub const MC_CMD_GET_CAPABILITIES_OUT_TXPD_FW_VERSION_LEN: usize = 2;
pub const MC_CMD_GET_CAPABILITIES_OUT_TXPD_FW_VERSION_REV_LBN: u32 = 0;
pub const MC_CMD_GET_CAPABILITIES_OUT_TXPD_FW_VERSION_REV_WIDTH: u32 = 12;
pub const MC_CMD_GET_CAPABILITIES_OUT_TXPD_FW_VERSION_TYPE_LBN: u32 = 12;
pub const MC_CMD_GET_CAPABILITIES_OUT_TXPD_FW_VERSION_TYPE_WIDTH: u32 = 4;
/* Hardware capabilities of NIC */
pub const MC_CMD_GET_CAPABILITIES_OUT_HW_CAPABILITIES_OFST: usize = 12;
pub const MC_CMD_GET_CAPABILITIES_OUT_HW_CAPABILITIES_LEN: usize = 4;
/* Licensed capabilities */
pub const MC_CMD_GET_CAPABILITIES_OUT_LICENSE_CAPABILITIES_OFST: usize = 16;
pub const MC_CMD_GET_CAPABILITIES_OUT_LICENSE_CAPABILITIES_LEN: usize = 4;

/* MC_CMD_VSWITCH_ALLOC
 * allocate a v-switch.
 */
pub const MC_CMD_VSWITCH_ALLOC_IN_LEN: usize = 16;
/* The port to connect to the v-switch's upstream port. */
pub const MC_CMD_VSWITCH_ALLOC_IN_UPSTREAM_PORT_ID_OFST: usize = 0;
pub const MC_CMD_VSWITCH_ALLOC_IN_UPSTREAM_PORT_ID_LEN: usize = 4;
/* The type of v-switch to create. */
pub const MC_CMD_VSWITCH_ALLOC_IN_TYPE_OFST: usize = 4;
pub const MC_CMD_VSWITCH_ALLOC_IN_TYPE_LEN: usize = 4;
mcdi_table! {
    MC_CMD_VSWITCH_TYPE_TABLE: u32 {
        /* VLAN */
        MC_CMD_VSWITCH_ALLOC_IN_VSWITCH_TYPE_VLAN = 0x1,
        /* VEB */
        MC_CMD_VSWITCH_ALLOC_IN_VSWITCH_TYPE_VEB = 0x2,
        /* VEPA (obsolete) */
        MC_CMD_VSWITCH_ALLOC_IN_VSWITCH_TYPE_VEPA = 0x3,
        /* MUX */
        MC_CMD_VSWITCH_ALLOC_IN_VSWITCH_TYPE_MUX = 0x4,
        /* Snapper specific; semantics TBD */
        MC_CMD_VSWITCH_ALLOC_IN_VSWITCH_TYPE_TEST = 0x5,
    }
}
/* Flags controlling v-port creation */
pub const MC_CMD_VSWITCH_ALLOC_IN_FLAGS_OFST: usize = 8;
pub const MC_CMD_VSWITCH_ALLOC_IN_FLAGS_LEN: usize = 4;
pub const MC_CMD_VSWITCH_ALLOC_IN_FLAG_AUTO_PORT_LBN: u32 = 0;
pub const MC_CMD_VSWITCH_ALLOC_IN_FLAG_AUTO_PORT_WIDTH: u32 = 1;
/* The number of VLAN tags to allow for attached v-ports. For VLAN aggregators,
 * this must be one or greater, and the attached v-ports must have exactly this
 * number of tags.
 */
pub const MC_CMD_VSWITCH_ALLOC_IN_NUM_VLAN_TAGS_OFST: usize = 12;
pub const MC_CMD_VSWITCH_ALLOC_IN_NUM_VLAN_TAGS_LEN: usize = 4;
pub const MC_CMD_VSWITCH_ALLOC_OUT_LEN: usize = 0;

/* MC_CMD_VSWITCH_FREE
 * de-allocate a v-switch.
 */
pub const MC_CMD_VSWITCH_FREE_IN_LEN: usize = 4;
/* The port to which the v-switch is connected. */
pub const MC_CMD_VSWITCH_FREE_IN_UPSTREAM_PORT_ID_OFST: usize = 0;
pub const MC_CMD_VSWITCH_FREE_IN_UPSTREAM_PORT_ID_LEN: usize = 4;
pub const MC_CMD_VSWITCH_FREE_OUT_LEN: usize = 0;

/* MC_CMD_VPORT_ALLOC
 * allocate a v-port.
 */
pub const MC_CMD_VPORT_ALLOC_IN_LEN: usize = 20;
/* The time-limited v-switch port to connect to the upstream port of the
 * v-port.
 */
pub const MC_CMD_VPORT_ALLOC_IN_UPSTREAM_PORT_ID_OFST: usize = 0;
pub const MC_CMD_VPORT_ALLOC_IN_UPSTREAM_PORT_ID_LEN: usize = 4;
/* The type of the new v-port. */
pub const MC_CMD_VPORT_ALLOC_IN_TYPE_OFST: usize = 4;
pub const MC_CMD_VPORT_ALLOC_IN_TYPE_LEN: usize = 4;
mcdi_table! {
    MC_CMD_VPORT_TYPE_TABLE: u32 {
        /* VLAN (obsolete) */
        MC_CMD_VPORT_ALLOC_IN_VPORT_TYPE_VLAN = 0x1,
        /* VEB (obsolete) */
        MC_CMD_VPORT_ALLOC_IN_VPORT_TYPE_VEB = 0x2,
        /* VEPA (obsolete) */
        MC_CMD_VPORT_ALLOC_IN_VPORT_TYPE_VEPA = 0x3,
        /* A normal v-port receives packets which match a specified MAC and/or
         * VLAN.
         */
        MC_CMD_VPORT_ALLOC_IN_VPORT_TYPE_NORMAL = 0x4,
        /* An expansion v-port packets traffic which don't match any other
         * v-port.
         */
        MC_CMD_VPORT_ALLOC_IN_VPORT_TYPE_EXPANSION = 0x5,
        /* An test v-port receives packets which match any filters installed by
         * its downstream components.
         */
        MC_CMD_VPORT_ALLOC_IN_VPORT_TYPE_TEST = 0x6,
    }
}
/* Flags controlling v-port creation */
pub const MC_CMD_VPORT_ALLOC_IN_FLAGS_OFST: usize = 8;
pub const MC_CMD_VPORT_ALLOC_IN_FLAGS_LEN: usize = 4;
pub const MC_CMD_VPORT_ALLOC_IN_FLAG_AUTO_PORT_LBN: u32 = 0;
pub const MC_CMD_VPORT_ALLOC_IN_FLAG_AUTO_PORT_WIDTH: u32 = 1;
pub const MC_CMD_VPORT_ALLOC_IN_FLAG_VLAN_RESTRICT_LBN: u32 = 1;
pub const MC_CMD_VPORT_ALLOC_IN_FLAG_VLAN_RESTRICT_WIDTH: u32 = 1;
/* The number of VLAN tags to insert/remove. An error will be returned if
 * incompatible with the number of VLAN tags specified for the upstream
 * v-switch.
 */
pub const MC_CMD_VPORT_ALLOC_IN_NUM_VLAN_TAGS_OFST: usize = 12;
pub const MC_CMD_VPORT_ALLOC_IN_NUM_VLAN_TAGS_LEN: usize = 4;
/* The actual VLAN tags to insert/remove */
pub const MC_CMD_VPORT_ALLOC_IN_VLAN_TAGS_OFST: usize = 16;
pub const MC_CMD_VPORT_ALLOC_IN_VLAN_TAGS_LEN: usize = 4;
pub const MC_CMD_VPORT_ALLOC_IN_VLAN_TAG_0_LBN: u32 = 0;
pub const MC_CMD_VPORT_ALLOC_IN_VLAN_TAG_0_WIDTH: u32 = 16;
pub const MC_CMD_VPORT_ALLOC_IN_VLAN_TAG_1_LBN: u32 = 16;
pub const MC_CMD_VPORT_ALLOC_IN_VLAN_TAG_1_WIDTH: u32 = 16;
pub const MC_CMD_VPORT_ALLOC_OUT_LEN: usize = 4;
/* The handle of the new v-port */
pub const MC_CMD_VPORT_ALLOC_OUT_VPORT_ID_OFST: usize = 0;
pub const MC_CMD_VPORT_ALLOC_OUT_VPORT_ID_LEN: usize = 4;

/* MC_CMD_VPORT_FREE
 * de-allocate a v-port.
 */
pub const MC_CMD_VPORT_FREE_IN_LEN: usize = 4;
/* The handle of the v-port */
pub const MC_CMD_VPORT_FREE_IN_VPORT_ID_OFST: usize = 0;
pub const MC_CMD_VPORT_FREE_IN_VPORT_ID_LEN: usize = 4;
pub const MC_CMD_VPORT_FREE_OUT_LEN: usize = 0;

/* MC_CMD_EVB_PORT_ASSIGN
 * assign a port to a PCI function.
 */
pub const MC_CMD_EVB_PORT_ASSIGN_IN_LEN: usize = 8;
/* The port to assign. */
pub const MC_CMD_EVB_PORT_ASSIGN_IN_PORT_ID_OFST: usize = 0;
pub const MC_CMD_EVB_PORT_ASSIGN_IN_PORT_ID_LEN: usize = 4;
/* The target function to modify. */
pub const MC_CMD_EVB_PORT_ASSIGN_IN_FUNCTION_OFST: usize = 4;
pub const MC_CMD_EVB_PORT_ASSIGN_IN_FUNCTION_LEN: usize = 4;
pub const MC_CMD_EVB_PORT_ASSIGN_IN_PF_LBN: u32 = 0;
pub const MC_CMD_EVB_PORT_ASSIGN_IN_PF_WIDTH: u32 = 16;
pub const MC_CMD_EVB_PORT_ASSIGN_IN_VF_LBN: u32 = 16;
pub const MC_CMD_EVB_PORT_ASSIGN_IN_VF_WIDTH: u32 = 16;
pub const MC_CMD_EVB_PORT_ASSIGN_OUT_LEN: usize = 0;

/* MC_CMD_GET_CLOCK
 * Return the system and PDCPU clock frequencies.
 */
pub const MC_CMD_GET_CLOCK_IN_LEN: usize = 0;
pub const MC_CMD_GET_CLOCK_OUT_LEN: usize = 8;
/* System frequency, MHz */
pub const MC_CMD_GET_CLOCK_OUT_SYS_FREQ_OFST: usize = 0;
pub const MC_CMD_GET_CLOCK_OUT_SYS_FREQ_LEN: usize = 4;
/* DPCPU frequency, MHz */
pub const MC_CMD_GET_CLOCK_OUT_DPCPU_FREQ_OFST: usize = 4;
pub const MC_CMD_GET_CLOCK_OUT_DPCPU_FREQ_LEN: usize = 4;

/* MC_CMD_GET_FUNCTION_INFO
 * Get function information. PF and VF number.
 */
pub const MC_CMD_GET_FUNCTION_INFO_IN_LEN: usize = 0;
pub const MC_CMD_GET_FUNCTION_INFO_OUT_LEN: usize = 8;
pub const MC_CMD_GET_FUNCTION_INFO_OUT_PF_OFST: usize = 0;
pub const MC_CMD_GET_FUNCTION_INFO_OUT_PF_LEN: usize = 4;
pub const MC_CMD_GET_FUNCTION_INFO_OUT_VF_OFST: usize = 4;
pub const MC_CMD_GET_FUNCTION_INFO_OUT_VF_LEN: usize = 4;

/* MC_CMD_GET_PF_COUNT
 * Get number of PFs on the device.
 */
pub const MC_CMD_GET_PF_COUNT_IN_LEN: usize = 0;
pub const MC_CMD_GET_PF_COUNT_OUT_LEN: usize = 1;
/* Identifies the number of PFs on the device. */
pub const MC_CMD_GET_PF_COUNT_OUT_PF_COUNT_OFST: usize = 0;
pub const MC_CMD_GET_PF_COUNT_OUT_PF_COUNT_LEN: usize = 1;

/* MC_CMD_GET_PORT_MODES
 * Find out about available port modes
 */
pub const MC_CMD_GET_PORT_MODES_IN_LEN: usize = 0;
pub const MC_CMD_GET_PORT_MODES_OUT_LEN: usize = 12;
/* Bitmask of port modes available on the board (indexed by TLV_PORT_MODE_*) */
pub const MC_CMD_GET_PORT_MODES_OUT_MODES_OFST: usize = 0;
pub const MC_CMD_GET_PORT_MODES_OUT_MODES_LEN: usize = 4;
/* Default (canonical) board mode */
pub const MC_CMD_GET_PORT_MODES_OUT_DEFAULT_MODE_OFST: usize = 4;
pub const MC_CMD_GET_PORT_MODES_OUT_DEFAULT_MODE_LEN: usize = 4;
/* Current board mode */
pub const MC_CMD_GET_PORT_MODES_OUT_CURRENT_MODE_OFST: usize = 8;
pub const MC_CMD_GET_PORT_MODES_OUT_CURRENT_MODE_LEN: usize = 4;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcdi::pcol::{MCDI_CTL_SDU_LEN_MAX_V1, MCDI_CTL_SDU_LEN_MAX_V2};

    #[test]
    fn test_fixed_layouts_end_at_declared_length() {
        assert_eq!(
            MC_CMD_GET_LINK_OUT_MAC_FAULT_OFST + MC_CMD_GET_LINK_OUT_MAC_FAULT_LEN,
            MC_CMD_GET_LINK_OUT_LEN
        );
        assert_eq!(
            MC_CMD_GET_PHY_CFG_OUT_REVISION_OFST + MC_CMD_GET_PHY_CFG_OUT_REVISION_LEN,
            MC_CMD_GET_PHY_CFG_OUT_LEN
        );
        assert_eq!(
            MC_CMD_FILTER_OP_IN_DST_IP_OFST + MC_CMD_FILTER_OP_IN_DST_IP_LEN,
            MC_CMD_FILTER_OP_IN_LEN
        );
        assert_eq!(
            MC_CMD_GET_ASSERTS_OUT_RESERVED_OFST + MC_CMD_GET_ASSERTS_OUT_RESERVED_LEN,
            MC_CMD_GET_ASSERTS_OUT_LEN
        );
        assert_eq!(
            MC_CMD_GET_ASSERTS_OUT_GP_REGS_OFFS_OFST
                + MC_CMD_GET_ASSERTS_OUT_GP_REGS_OFFS_LEN * MC_CMD_GET_ASSERTS_OUT_GP_REGS_OFFS_NUM,
            MC_CMD_GET_ASSERTS_OUT_THREAD_OFFS_OFST
        );
        assert_eq!(
            MC_CMD_GET_VERSION_EXT_OUT_EXTRA_OFST + MC_CMD_GET_VERSION_EXT_OUT_EXTRA_LEN,
            MC_CMD_GET_VERSION_EXT_OUT_LEN
        );
        assert_eq!(
            MC_CMD_GET_VERSION_OUT_VERSION_OFST + MC_CMD_GET_VERSION_OUT_VERSION_LEN,
            MC_CMD_GET_VERSION_OUT_LEN
        );
        assert_eq!(
            MC_CMD_SET_MAC_IN_FLAGS_OFST + MC_CMD_SET_MAC_IN_FLAGS_LEN,
            MC_CMD_SET_MAC_IN_LEN
        );
        assert_eq!(
            MC_CMD_GET_LOOPBACK_MODES_OUT_40G_OFST + MC_CMD_GET_LOOPBACK_MODES_OUT_40G_LEN,
            MC_CMD_GET_LOOPBACK_MODES_OUT_LEN
        );
        assert_eq!(
            MC_CMD_NVRAM_INFO_OUT_PHYSADDR_OFST + MC_CMD_NVRAM_INFO_OUT_PHYSADDR_LEN,
            MC_CMD_NVRAM_INFO_OUT_LEN
        );
        assert_eq!(
            MC_CMD_GET_CAPABILITIES_OUT_LICENSE_CAPABILITIES_OFST
                + MC_CMD_GET_CAPABILITIES_OUT_LICENSE_CAPABILITIES_LEN,
            MC_CMD_GET_CAPABILITIES_OUT_LEN
        );
    }

    #[test]
    fn test_variable_lengths_match_bounds() {
        let cases: [(fn(usize) -> usize, usize, usize, usize, usize); 9] = [
            (
                MC_CMD_READ32_OUT_LEN,
                MC_CMD_READ32_OUT_BUFFER_MINNUM,
                MC_CMD_READ32_OUT_BUFFER_MAXNUM,
                MC_CMD_READ32_OUT_LENMIN,
                MC_CMD_READ32_OUT_LENMAX,
            ),
            (
                MC_CMD_WRITE32_IN_LEN,
                MC_CMD_WRITE32_IN_BUFFER_MINNUM,
                MC_CMD_WRITE32_IN_BUFFER_MAXNUM,
                MC_CMD_WRITE32_IN_LENMIN,
                MC_CMD_WRITE32_IN_LENMAX,
            ),
            (
                MC_CMD_NVRAM_READ_OUT_LEN,
                MC_CMD_NVRAM_READ_OUT_READ_BUFFER_MINNUM,
                MC_CMD_NVRAM_READ_OUT_READ_BUFFER_MAXNUM,
                MC_CMD_NVRAM_READ_OUT_LENMIN,
                MC_CMD_NVRAM_READ_OUT_LENMAX,
            ),
            (
                MC_CMD_NVRAM_PARTITIONS_OUT_LEN,
                MC_CMD_NVRAM_PARTITIONS_OUT_TYPE_ID_MINNUM,
                MC_CMD_NVRAM_PARTITIONS_OUT_TYPE_ID_MAXNUM,
                MC_CMD_NVRAM_PARTITIONS_OUT_LENMIN,
                MC_CMD_NVRAM_PARTITIONS_OUT_LENMAX,
            ),
            (
                MC_CMD_FLUSH_RX_QUEUES_IN_LEN,
                MC_CMD_FLUSH_RX_QUEUES_IN_QID_OFST_MINNUM,
                MC_CMD_FLUSH_RX_QUEUES_IN_QID_OFST_MAXNUM,
                MC_CMD_FLUSH_RX_QUEUES_IN_LENMIN,
                MC_CMD_FLUSH_RX_QUEUES_IN_LENMAX,
            ),
            (
                MC_CMD_SENSOR_INFO_OUT_LEN,
                MC_CMD_SENSOR_ENTRY_MINNUM,
                MC_CMD_SENSOR_ENTRY_MAXNUM,
                MC_CMD_SENSOR_INFO_OUT_LENMIN,
                MC_CMD_SENSOR_INFO_OUT_LENMAX,
            ),
            (
                MC_CMD_INIT_EVQ_IN_LEN,
                MC_CMD_INIT_EVQ_IN_DMA_ADDR_MINNUM,
                MC_CMD_INIT_EVQ_IN_DMA_ADDR_MAXNUM,
                MC_CMD_INIT_EVQ_IN_LENMIN,
                MC_CMD_INIT_EVQ_IN_LENMAX,
            ),
            (
                MC_CMD_INIT_RXQ_IN_LEN,
                MC_CMD_INIT_RXQ_IN_DMA_ADDR_MINNUM,
                MC_CMD_INIT_RXQ_IN_DMA_ADDR_MAXNUM,
                MC_CMD_INIT_RXQ_IN_LENMIN,
                MC_CMD_INIT_RXQ_IN_LENMAX,
            ),
            (
                MC_CMD_INIT_TXQ_IN_LEN,
                MC_CMD_INIT_TXQ_IN_DMA_ADDR_MINNUM,
                MC_CMD_INIT_TXQ_IN_DMA_ADDR_MAXNUM,
                MC_CMD_INIT_TXQ_IN_LENMIN,
                MC_CMD_INIT_TXQ_IN_LENMAX,
            ),
        ];
        for (i, (len, minnum, maxnum, lenmin, lenmax)) in cases.iter().enumerate() {
            assert_eq!(len(*minnum), *lenmin, "case {}", i);
            assert_eq!(len(*maxnum), *lenmax, "case {}", i);
            assert!(*lenmax <= MCDI_CTL_SDU_LEN_MAX_V2, "case {}", i);
        }
    }

    #[test]
    fn test_v1_payloads_fit_v1_sdu() {
        // INIT_EVQ is the only one here that needs a v2 transport
        assert!(MC_CMD_INIT_EVQ_IN_LENMAX > MCDI_CTL_SDU_LEN_MAX_V1);
        for lenmax in [
            MC_CMD_READ32_OUT_LENMAX,
            MC_CMD_WRITE32_IN_LENMAX,
            MC_CMD_NVRAM_READ_OUT_LENMAX,
            MC_CMD_SENSOR_INFO_OUT_LENMAX,
            MC_CMD_INIT_RXQ_IN_LENMAX,
            MC_CMD_INIT_TXQ_IN_LENMAX,
        ] {
            assert!(lenmax <= MCDI_CTL_SDU_LEN_MAX_V1);
        }
    }

    #[test]
    fn test_sensor_pages() {
        assert_eq!(MC_CMD_SENSOR_PAGE0_NEXT, 31);
        assert_eq!(MC_CMD_SENSOR_PAGE1_NEXT, 63);
        assert_eq!(MC_CMD_SENSOR_PAGE2_NEXT, 95);
        assert_eq!(MC_CMD_SENSOR_PAGE0_NEXT_LBN, MC_CMD_SENSOR_PAGE0_NEXT);
        assert_eq!(
            MC_CMD_SENSOR_ENTRY_MAXNUM,
            MC_CMD_SENSOR_PAGE0_NEXT as usize
        );
        let mut last = None;
        for (value, name) in MC_CMD_SENSOR_TABLE {
            if let Some(prev) = last {
                assert!(*value > prev, "{} out of order", name);
            }
            last = Some(*value);
        }
    }

    #[test]
    fn test_loopback_modes_fit_64bit_mask() {
        for (i, (mode, name)) in MC_CMD_LOOPBACK_TABLE.iter().enumerate() {
            assert_eq!(*mode, i as u32, "{}", name);
            assert!(*mode < 64);
        }
        assert_eq!(MC_CMD_LOOPBACK_FORCE_EXT_LINK, 0x25);
    }

    #[test]
    fn test_workaround_bits_follow_types() {
        assert_eq!(
            MC_CMD_GET_WORKAROUNDS_OUT_BUG17230,
            1 << MC_CMD_WORKAROUND_BUG17230
        );
        assert_eq!(
            MC_CMD_GET_WORKAROUNDS_OUT_BUG26807,
            1 << MC_CMD_WORKAROUND_BUG26807
        );
        assert_eq!(
            MC_CMD_GET_WORKAROUNDS_OUT_BUG61265,
            1 << MC_CMD_WORKAROUND_BUG61265
        );
    }

    #[test]
    fn test_nvram_types_fit_types_mask() {
        for (ty, name) in MC_CMD_NVRAM_TYPE_TABLE {
            assert!(*ty < 32, "{}", name);
        }
        assert_eq!(MC_CMD_NVRAM_TYPE_FC_LOG, 0x13);
    }
}
