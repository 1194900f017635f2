/*
 * SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
 *
 * SPDX-License-Identifier: GPL-2.0-or-later
 */

mcdi_table! {
    /// Every `MCDI_EVENT_CODE_*` value with its constant name.
    MCDI_EVENT_CODE_TABLE: u32 {
        /* enum: Bad assert. */
        MCDI_EVENT_CODE_BADSSERT = 0x1,
        /* enum: PHY(s) have changed. */
        MCDI_EVENT_CODE_PMNOTICE = 0x2,
        /* enum: A command has completed. */
        MCDI_EVENT_CODE_CMDDONE = 0x3,
        /* enum: The link has changed. */
        MCDI_EVENT_CODE_LINKCHANGE = 0x4,
        /* enum: A sensor has changed state. */
        MCDI_EVENT_CODE_SENSOREVT = 0x5,
        /* enum: Scheduler error. */
        MCDI_EVENT_CODE_SCHEDERR = 0x6,
        /* enum: Reboot. */
        MCDI_EVENT_CODE_REBOOT = 0x7,
        /* enum: MAC stats DMA complete. */
        MCDI_EVENT_CODE_MAC_STATS_DMA = 0x8,
        /* enum: Firmware alert. */
        MCDI_EVENT_CODE_FWALERT = 0x9,
        /* enum: Function level reset. */
        MCDI_EVENT_CODE_FLR = 0xa,
        /* enum: Transmit error */
        MCDI_EVENT_CODE_TX_ERR = 0xb,
        /* enum: Tx flush has completed */
        MCDI_EVENT_CODE_TX_FLUSH = 0xc,
        /* enum: PTP packet received timestamp */
        MCDI_EVENT_CODE_PTP_RX = 0xd,
        /* enum: PTP NIC failure */
        MCDI_EVENT_CODE_PTP_FAULT = 0xe,
        /* enum: PTP PPS event */
        MCDI_EVENT_CODE_PTP_PPS = 0xf,
        /* enum: Rx flush has completed */
        MCDI_EVENT_CODE_RX_FLUSH = 0x10,
        /* enum: Receive error */
        MCDI_EVENT_CODE_RX_ERR = 0x11,
        /* enum: AOE fault */
        MCDI_EVENT_CODE_AOE = 0x12,
        /* enum: Network port calibration failed (VCAL). */
        MCDI_EVENT_CODE_VCAL_FAIL = 0x13,
        /* enum: HW PPS event */
        MCDI_EVENT_CODE_HW_PPS = 0x14,
        /* enum: The MC has rebooted (huntington and later, siena uses
         * CODE_REBOOT and a different format)
         */
        MCDI_EVENT_CODE_MC_REBOOT = 0x15,
        /* enum: the MC has detected a parity error */
        MCDI_EVENT_CODE_PAR_ERR = 0x16,
        /* enum: the MC has detected a correctable error */
        MCDI_EVENT_CODE_ECC_CORR_ERR = 0x17,
        /* enum: the MC has detected an uncorrectable error */
        MCDI_EVENT_CODE_ECC_FATAL_ERR = 0x18,
        /* enum: The MC has entered offline BIST mode */
        MCDI_EVENT_CODE_MC_BIST = 0x19,
        /* enum: PTP tick event providing current NIC time */
        MCDI_EVENT_CODE_PTP_TIME = 0x1a,
        /* enum: MUM fault */
        MCDI_EVENT_CODE_MUM = 0x1b,
        /* enum: notify the designated PF of a new authorization request */
        MCDI_EVENT_CODE_PROXY_REQUEST = 0x1c,
        /* enum: notify a function that awaits an authorization that its request
         * has been processed and it may now resend the command
         */
        MCDI_EVENT_CODE_PROXY_RESPONSE = 0x1d,
        /* enum: MCDI command accepted. New commands can be issued but this
         * command is not done yet.
         */
        MCDI_EVENT_CODE_DBRET = 0x1e,
        /* enum: The MC has detected a fault on the SUC */
        MCDI_EVENT_CODE_SUC = 0x1f,
        /* enum: Link change. This event is sent instead of LINKCHANGE if
         * WANT_V2_LINKCHANGES was set on driver attach.
         */
        MCDI_EVENT_CODE_LINKCHANGE_V2 = 0x20,
        /* enum: This event is sent if WANT_V2_LINKCHANGES was set on driver
         * attach when the local device capabilities changes.
         */
        MCDI_EVENT_CODE_MODULECHANGE = 0x21,
        /* enum: Notification that a sensor's state has changed. */
        MCDI_EVENT_CODE_DYNAMIC_SENSORS_STATE_CHANGE = 0x22,
        /* enum: Notification that the sensors have been added and/or removed
         * from the dynamic sensor table.
         */
        MCDI_EVENT_CODE_DYNAMIC_SENSORS_CHANGE = 0x23,
        /* enum: Artificial event generated by host and posted via MC for test
         * purposes.
         */
        MCDI_EVENT_CODE_TESTGEN = 0xfa,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_codes_fit_code_field() {
        for (code, name) in MCDI_EVENT_CODE_TABLE {
            assert!(*code < 1 << super::super::MCDI_EVENT_CODE_WIDTH, "{}", name);
        }
    }

    #[test]
    fn test_well_known_event_codes() {
        assert_eq!(MCDI_EVENT_CODE_CMDDONE, 0x3);
        assert_eq!(MCDI_EVENT_CODE_LINKCHANGE, 0x4);
        assert_eq!(MCDI_EVENT_CODE_MC_REBOOT, 0x15);
        assert_eq!(MCDI_EVENT_CODE_TESTGEN, 0xfa);
    }
}
