/*
 * SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
 *
 * SPDX-License-Identifier: GPL-2.0-or-later
 */
// MC 返回的错误码，errno 风格的部分与 Linux 数值一致

mcdi_table! {
    /// Every `MC_CMD_ERR_*` code with its constant name.
    MC_CMD_ERR_TABLE: u32 {
        /* Operation not permitted. */
        MC_CMD_ERR_EPERM = 0x1,
        /* Non-existent command target */
        MC_CMD_ERR_ENOENT = 0x2,
        /* assert() has killed the MC */
        MC_CMD_ERR_EINTR = 0x4,
        /* I/O failure */
        MC_CMD_ERR_EIO = 0x5,
        /* Already exists */
        MC_CMD_ERR_EEXIST = 0x6,
        /* Try again */
        MC_CMD_ERR_EAGAIN = 0xb,
        /* Out of memory */
        MC_CMD_ERR_ENOMEM = 0xc,
        /* Caller does not hold required locks */
        MC_CMD_ERR_EACCES = 0xd,
        /* Resource is currently unavailable (e.g. lock contention) */
        MC_CMD_ERR_EBUSY = 0x10,
        /* No such device */
        MC_CMD_ERR_ENODEV = 0x13,
        /* Invalid argument to target */
        MC_CMD_ERR_EINVAL = 0x16,
        /* No space */
        MC_CMD_ERR_ENOSPC = 0x1c,
        /* Read-only */
        MC_CMD_ERR_EROFS = 0x1e,
        /* Broken pipe */
        MC_CMD_ERR_EPIPE = 0x20,
        /* Out of range */
        MC_CMD_ERR_ERANGE = 0x22,
        /* Non-recursive resource is already acquired */
        MC_CMD_ERR_EDEADLK = 0x23,
        /* Operation not implemented */
        MC_CMD_ERR_ENOSYS = 0x26,
        /* Operation timed out */
        MC_CMD_ERR_ETIME = 0x3e,
        /* Link has been severed */
        MC_CMD_ERR_ENOLINK = 0x43,
        /* Protocol error */
        MC_CMD_ERR_EPROTO = 0x47,
        /* Bad message */
        MC_CMD_ERR_EBADMSG = 0x4a,
        /* Operation not supported */
        MC_CMD_ERR_ENOTSUP = 0x5f,
        /* Address not available */
        MC_CMD_ERR_EADDRNOTAVAIL = 0x63,
        /* Not connected */
        MC_CMD_ERR_ENOTCONN = 0x6b,
        /* Operation already in progress */
        MC_CMD_ERR_EALREADY = 0x72,
        /* Stale handle. The handle references a resource that no longer exists */
        MC_CMD_ERR_ESTALE = 0x74,
        /* Resource allocation failed. */
        MC_CMD_ERR_ALLOC_FAIL = 0x1000,
        /* V-adaptor not found. */
        MC_CMD_ERR_NO_VADAPTOR = 0x1001,
        /* EVB port not found. */
        MC_CMD_ERR_NO_EVB_PORT = 0x1002,
        /* V-switch not found. */
        MC_CMD_ERR_NO_VSWITCH = 0x1003,
        /* Too many VLAN tags. */
        MC_CMD_ERR_VLAN_LIMIT = 0x1004,
        /* Bad PCI function number. */
        MC_CMD_ERR_BAD_PCI_FUNC = 0x1005,
        /* Invalid VLAN mode. */
        MC_CMD_ERR_BAD_VLAN_MODE = 0x1006,
        /* Invalid v-switch type. */
        MC_CMD_ERR_BAD_VSWITCH_TYPE = 0x1007,
        /* Invalid v-port type. */
        MC_CMD_ERR_BAD_VPORT_TYPE = 0x1008,
        /* MAC address exists. */
        MC_CMD_ERR_MAC_EXIST = 0x1009,
        /* Slave core not present */
        MC_CMD_ERR_SLAVE_NOT_PRESENT = 0x100a,
        /* The datapath is disabled. */
        MC_CMD_ERR_DATAPATH_DISABLED = 0x100b,
        /* The requesting client is not a function */
        MC_CMD_ERR_CLIENT_NOT_FN = 0x100c,
        /* The requested operation might require the command to be passed
         * between MCs, and the transport doesn't support that. Should only
         * ever been seen over the UART.
         */
        MC_CMD_ERR_TRANSPORT_NOPROXY = 0x100d,
        /* VLAN tag(s) exists */
        MC_CMD_ERR_VLAN_EXIST = 0x100e,
        /* No MAC address assigned to an EVB port */
        MC_CMD_ERR_NO_MAC_ADDR = 0x100f,
        /* Notifies the driver that the request has been relayed to an admin
         * function for authorization. The driver should wait for a
         * PROXY_RESPONSE event and then resend its request.
         */
        MC_CMD_ERR_PROXY_PENDING = 0x1010,
        /* The request cannot be passed for authorization because another
         * request from the same function is currently being authorized.
         */
        MC_CMD_ERR_PROXY_INPROGRESS = 0x1011,
        /* Returned by MC_CMD_PROXY_COMPLETE if the caller is not the function
         * that has enabled proxying or BLOCK_INDEX points to a function that
         * doesn't await an authorization.
         */
        MC_CMD_ERR_PROXY_UNEXPECTED = 0x1012,
        /* This code is currently only used internally in FW. Its meaning is
         * that an operation failed due to lack of SR-IOV privilege.
         */
        MC_CMD_ERR_NO_PRIVILEGE = 0x1013,
        /* Workaround 26807 could not be turned on/off because some functions
         * have already installed filters.
         */
        MC_CMD_ERR_FILTERS_PRESENT = 0x1014,
        /* The clock whose frequency you've attempted to set doesn't exist */
        MC_CMD_ERR_NO_CLOCK = 0x1015,
        /* Returned by MC_CMD_TESTASSERT if the action that should have caused
         * an assertion failed to do so.
         */
        MC_CMD_ERR_UNREACHABLE = 0x1016,
        /* This command needs to be processed in the background but there were
         * no resources to do so. Send it again after a command has completed.
         */
        MC_CMD_ERR_QUEUE_FULL = 0x1017,
        /* The operation could not be completed because the PCIe link has gone
         * away.
         */
        MC_CMD_ERR_NO_PCIE = 0x1018,
        /* The operation could not be completed because the datapath has gone
         * away.
         */
        MC_CMD_ERR_NO_DATAPATH = 0x1019,
        /* The operation could not complete because some VIs are allocated */
        MC_CMD_ERR_VIS_PRESENT = 0x101a,
        /* The operation could not complete because some PIO buffers are
         * allocated
         */
        MC_CMD_ERR_PIOBUFS_PRESENT = 0x101b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_error_codes_are_unique() {
        let mut seen = HashSet::new();
        for (code, name) in MC_CMD_ERR_TABLE {
            assert!(seen.insert(*code), "duplicate error code for {}", name);
        }
    }

    #[test]
    fn test_errno_style_codes_match_linux() {
        assert_eq!(MC_CMD_ERR_EPERM, libc::EPERM as u32);
        assert_eq!(MC_CMD_ERR_ENOENT, libc::ENOENT as u32);
        assert_eq!(MC_CMD_ERR_EINTR, libc::EINTR as u32);
        assert_eq!(MC_CMD_ERR_EAGAIN, libc::EAGAIN as u32);
        assert_eq!(MC_CMD_ERR_EACCES, libc::EACCES as u32);
        assert_eq!(MC_CMD_ERR_EBUSY, libc::EBUSY as u32);
        assert_eq!(MC_CMD_ERR_EINVAL, libc::EINVAL as u32);
        assert_eq!(MC_CMD_ERR_ENOSPC, libc::ENOSPC as u32);
        assert_eq!(MC_CMD_ERR_EDEADLK, libc::EDEADLK as u32);
        assert_eq!(MC_CMD_ERR_ENOSYS, libc::ENOSYS as u32);
        assert_eq!(MC_CMD_ERR_ETIME, libc::ETIME as u32);
        assert_eq!(MC_CMD_ERR_EALREADY, libc::EALREADY as u32);
        assert_eq!(MC_CMD_ERR_ENOTSUP, libc::EOPNOTSUPP as u32);
    }

    #[test]
    fn test_mcdi_specific_codes_are_contiguous() {
        let specific: Vec<u32> = MC_CMD_ERR_TABLE
            .iter()
            .map(|(code, _)| *code)
            .filter(|code| *code >= MC_CMD_ERR_ALLOC_FAIL)
            .collect();
        for (i, code) in specific.iter().enumerate() {
            assert_eq!(*code, MC_CMD_ERR_ALLOC_FAIL + i as u32);
        }
        assert_eq!(MC_CMD_ERR_QUEUE_FULL, 0x1017);
    }
}
