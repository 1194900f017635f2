/*
 * SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
 *
 * SPDX-License-Identifier: GPL-2.0-or-later
 */
// MC 命令字

mcdi_table! {
    /// Every `MC_CMD_*` opcode with its constant name.
    ///
    /// `MC_CMD_ENTITY_RESET` and `MC_CMD_PORT_RESET` share an opcode; the
    /// former is listed first so lookups resolve to the current name.
    MC_CMD_TABLE: u32 {
        // Host/MC memory and boot
        /* Read data from the MC memory map */
        MC_CMD_READ32 = 0x1,
        /* Write data into the MC memory map */
        MC_CMD_WRITE32 = 0x2,
        /* Copy MC code between two locations and jump */
        MC_CMD_COPYCODE = 0x3,
        /* Select function for function-specific commands */
        MC_CMD_SET_FUNC = 0x4,
        /* Get the instruction address from which the MC booted */
        MC_CMD_GET_BOOT_STATUS = 0x5,
        /* Get (and optionally clear) the current assertion status */
        MC_CMD_GET_ASSERTS = 0x6,
        /* Configure the output stream for log events */
        MC_CMD_LOG_CTRL = 0x7,
        /* Get version information about adapter components */
        MC_CMD_GET_VERSION = 0x8,
        /* Perform PTP operation */
        MC_CMD_PTP = 0xb,
        /* Read 32bit words from the indirect memory map */
        MC_CMD_CSR_READ32 = 0xc,
        /* Write 32bit dwords to the indirect memory map */
        MC_CMD_CSR_WRITE32 = 0xd,
        /* Get stack information */
        MC_CMD_STACKINFO = 0xf,
        /* MDIO register read */
        MC_CMD_MDIO_READ = 0x10,
        /* MDIO register write */
        MC_CMD_MDIO_WRITE = 0x11,
        /* Write DBI register(s) */
        MC_CMD_DBI_WRITE = 0x12,
        /* Read a 32-bit register from the indirect port register map */
        MC_CMD_PORT_READ32 = 0x14,
        /* Write a 32-bit register to the indirect port register map */
        MC_CMD_PORT_WRITE32 = 0x15,
        /* Read a 128-bit register from the indirect port register map */
        MC_CMD_PORT_READ128 = 0x16,
        /* Write a 128-bit register to the indirect port register map */
        MC_CMD_PORT_WRITE128 = 0x17,
        /* Returns the MC firmware configuration structure */
        MC_CMD_GET_BOARD_CFG = 0x18,
        /* Read DBI register(s) */
        MC_CMD_DBI_READX = 0x19,
        /* Set the 16byte seed for the MC pseudo-random generator */
        MC_CMD_SET_RAND_SEED = 0x1a,
        /* Retrieve the history of the LTSSM */
        MC_CMD_LTSSM_HIST = 0x1b,
        /* Inform MCPU that this port is managed on the host */
        MC_CMD_DRV_ATTACH = 0x1c,
        /* Route UART output to circular buffer in shared memory instead */
        MC_CMD_SHMUART = 0x1f,
        /* Generic per-resource reset */
        MC_CMD_ENTITY_RESET = 0x20,
        /* Generic per-port reset (alias of ENTITY_RESET) */
        MC_CMD_PORT_RESET = 0x20,
        /* Read instantaneous and minimum flow control thresholds */
        MC_CMD_PCIE_CREDITS = 0x21,
        /* Get histogram of RX queue fill level */
        MC_CMD_RXD_MONITOR = 0x22,
        /* Copy the given ASCII string out onto UART and/or out of the network port */
        MC_CMD_PUTS = 0x23,
        /* Report PHY configuration */
        MC_CMD_GET_PHY_CFG = 0x24,
        /* Start a BIST test on the PHY */
        MC_CMD_START_BIST = 0x25,
        /* Poll for BIST completion */
        MC_CMD_POLL_BIST = 0x26,
        /* Flush receive queue(s) */
        MC_CMD_FLUSH_RX_QUEUES = 0x27,
        /* Returns a bitmask of loopback modes available at each speed */
        MC_CMD_GET_LOOPBACK_MODES = 0x28,
        /* Read the unified MAC/PHY link state */
        MC_CMD_GET_LINK = 0x29,
        /* Write the unified MAC/PHY link configuration */
        MC_CMD_SET_LINK = 0x2a,
        /* Set identification LED state */
        MC_CMD_SET_ID_LED = 0x2b,
        /* Set MAC configuration */
        MC_CMD_SET_MAC = 0x2c,
        /* Get generic PHY statistics */
        MC_CMD_PHY_STATS = 0x2d,
        /* Get generic MAC statistics */
        MC_CMD_MAC_STATS = 0x2e,

        // NVRAM, sensors and SR-IOV
        /* to be documented */
        MC_CMD_SRIOV = 0x30,
        /* DMA write data into (Rid,Addr), either by dma reading (RidSrc,AddrSrc) or by data embedded directly in the command */
        MC_CMD_MEMCPY = 0x31,
        /* Set a WoL filter */
        MC_CMD_WOL_FILTER_SET = 0x32,
        /* Remove a WoL filter */
        MC_CMD_WOL_FILTER_REMOVE = 0x33,
        /* Reset (i.e. remove all) WoL filters */
        MC_CMD_WOL_FILTER_RESET = 0x34,
        /* Set the MCAST hash value without otherwise reconfiguring the MAC */
        MC_CMD_SET_MCAST_HASH = 0x35,
        /* Return bitfield indicating available types of virtual NVRAM partitions */
        MC_CMD_NVRAM_TYPES = 0x36,
        /* Read info about a virtual NVRAM partition */
        MC_CMD_NVRAM_INFO = 0x37,
        /* Start a group of update operations on a virtual NVRAM partition */
        MC_CMD_NVRAM_UPDATE_START = 0x38,
        /* Read data from a virtual NVRAM partition */
        MC_CMD_NVRAM_READ = 0x39,
        /* Write data to a virtual NVRAM partition */
        MC_CMD_NVRAM_WRITE = 0x3a,
        /* Erase sector(s) from a virtual NVRAM partition */
        MC_CMD_NVRAM_ERASE = 0x3b,
        /* Finish a group of update operations on a virtual NVRAM partition */
        MC_CMD_NVRAM_UPDATE_FINISH = 0x3c,
        /* Reboot the MC */
        MC_CMD_REBOOT = 0x3d,
        /* Retrieve information about the MC's scheduler */
        MC_CMD_SCHEDINFO = 0x3e,
        /* Set the mode for the next MC reboot */
        MC_CMD_REBOOT_MODE = 0x3f,
        /* Returns information about every available sensor */
        MC_CMD_SENSOR_INFO = 0x41,
        /* Returns the current reading from each sensor */
        MC_CMD_READ_SENSORS = 0x42,
        /* Report current state of PHY */
        MC_CMD_GET_PHY_STATE = 0x43,
        /* 802.1Qbb control */
        MC_CMD_SETUP_8021QBB = 0x44,
        /* Retrieve ID of any WoL filters */
        MC_CMD_WOL_FILTER_GET = 0x45,
        /* Add a protocol offload to NIC for lights-out state */
        MC_CMD_ADD_LIGHTSOUT_OFFLOAD = 0x46,
        /* Remove a protocol offload from NIC for lights-out state */
        MC_CMD_REMOVE_LIGHTSOUT_OFFLOAD = 0x47,
        /* Restore MAC after block reset */
        MC_CMD_MAC_RESET_RESTORE = 0x48,
        /* Deliberately trigger an assert-detonation in the firmware for testing purposes */
        MC_CMD_TESTASSERT = 0x49,
        /* Enable/Disable a given workaround */
        MC_CMD_WORKAROUND = 0x4a,
        /* Read media-specific data from PHY */
        MC_CMD_GET_PHY_MEDIA_INFO = 0x4b,
        /* Test a particular NVRAM partition for valid contents */
        MC_CMD_NVRAM_TEST = 0x4c,
        /* Read status and/or set parameters for the 'mrsfp' driver */
        MC_CMD_MRSFP_TWEAK = 0x4d,
        /* Adjusts the sensor limits */
        MC_CMD_SENSOR_SET_LIMS = 0x4e,
        /* Get resource limits */
        MC_CMD_GET_RESOURCE_LIMITS = 0x4f,
        /* Reads the list of available virtual NVRAM partition types */
        MC_CMD_NVRAM_PARTITIONS = 0x51,
        /* Reads soft metadata for a virtual NVRAM partition type */
        MC_CMD_NVRAM_METADATA = 0x52,
        /* Perform HP-specific operation */
        MC_CMD_HP = 0x54,
        /* Returns the base MAC, count and stride for the requesting function */
        MC_CMD_GET_MAC_ADDRESSES = 0x55,
        /* Perform a CLP related operation */
        MC_CMD_CLP = 0x56,
        /* Perform a MUM operation */
        MC_CMD_MUM = 0x57,
        /* Enable/disable authorization of MCDI requests from unprivileged functions */
        MC_CMD_PROXY_CONFIGURE = 0x58,
        /* Read the list of all implemented and all currently enabled workarounds */
        MC_CMD_GET_WORKAROUNDS = 0x59,
        /* Read/set privileges of an arbitrary PCIe function */
        MC_CMD_PRIVILEGE_MASK = 0x5a,
        /* Execute an arbitrary MCDI command on behalf of a different function */
        MC_CMD_PROXY_CMD = 0x5b,
        /* Read/set link state mode of a VF */
        MC_CMD_LINK_STATE_MODE = 0x5c,
        /* Assign a new MAC address to a v-adaptor */
        MC_CMD_VADAPTOR_SET_MAC = 0x5d,
        /* Read the MAC address assigned to a v-adaptor */
        MC_CMD_VADAPTOR_GET_MAC = 0x5e,
        /* Tell FW to return the result of a proxied request */
        MC_CMD_PROXY_COMPLETE = 0x5f,
        /* Modify the privileges of a set of PCIe functions */
        MC_CMD_PRIVILEGE_MODIFY = 0x60,
        /* Query properties of a v-adaptor */
        MC_CMD_VADAPTOR_QUERY = 0x61,
        /* Query properties of an EVB port */
        MC_CMD_EVB_PORT_QUERY = 0x62,
        /* Query properties of a v-switch */
        MC_CMD_VSWITCH_QUERY = 0x63,

        // Extended header
        /* Encapsulation for a v2 extended command */
        MC_CMD_V2_EXTN = 0x7f,

        // Datapath resources (EF10)
        /* Set up an event queue according to the supplied parameters */
        MC_CMD_INIT_EVQ = 0x80,
        /* Set up a receive queue according to the supplied parameters */
        MC_CMD_INIT_RXQ = 0x81,
        /* Set up a transmit queue according to the supplied parameters */
        MC_CMD_INIT_TXQ = 0x82,
        /* Teardown an EVQ */
        MC_CMD_FINI_EVQ = 0x83,
        /* Teardown a RXQ */
        MC_CMD_FINI_RXQ = 0x84,
        /* Teardown a TXQ */
        MC_CMD_FINI_TXQ = 0x85,
        /* Generate an event on an EVQ belonging to the function issuing the command */
        MC_CMD_DRIVER_EVENT = 0x86,
        /* Allocate a set of buffer table entries */
        MC_CMD_ALLOC_BUFTBL_CHUNK = 0x87,
        /* Reprogram a set of buffer table entries */
        MC_CMD_PROGRAM_BUFTBL_ENTRIES = 0x88,
        /* Free a set of buffer table entries */
        MC_CMD_FREE_BUFTBL_CHUNK = 0x89,
        /* Multiplexed MCDI call for filter operations */
        MC_CMD_FILTER_OP = 0x8a,
        /* Allocate VI resources */
        MC_CMD_ALLOC_VIS = 0x8b,
        /* Free VI resources */
        MC_CMD_FREE_VIS = 0x8c,
        /* Get information about the VI resources allocated to the function */
        MC_CMD_GET_VI_ALLOC_INFO = 0x8d,
        /* For CmdClient use */
        MC_CMD_DUMP_VI_STATE = 0x8e,
        /* Allocate a push I/O buffer */
        MC_CMD_ALLOC_PIOBUF = 0x8f,
        /* Free a push I/O buffer */
        MC_CMD_FREE_PIOBUF = 0x90,
        /* Download a new set of images to the satellite CPUs */
        MC_CMD_SATELLITE_DOWNLOAD = 0x91,
        /* Link a push I/O buffer to a TxQ */
        MC_CMD_LINK_PIOBUF = 0x92,
        /* Unlink a push I/O buffer from a TxQ */
        MC_CMD_UNLINK_PIOBUF = 0x93,
        /* Allocate a v-switch */
        MC_CMD_VSWITCH_ALLOC = 0x94,
        /* Destroy a v-switch */
        MC_CMD_VSWITCH_FREE = 0x95,
        /* Allocate a v-port */
        MC_CMD_VPORT_ALLOC = 0x96,
        /* Destroy a v-port */
        MC_CMD_VPORT_FREE = 0x97,
        /* Allocate a v-adaptor */
        MC_CMD_VADAPTOR_ALLOC = 0x98,
        /* Destroy a v-adaptor */
        MC_CMD_VADAPTOR_FREE = 0x99,
        /* Assign a port to a PCI function */
        MC_CMD_EVB_PORT_ASSIGN = 0x9a,
        /* Assign the 64 bit region addresses */
        MC_CMD_RDWR_A64_REGIONS = 0x9b,
        /* Allocate an Onload stack ID */
        MC_CMD_ONLOAD_STACK_ALLOC = 0x9c,
        /* Free an Onload stack ID */
        MC_CMD_ONLOAD_STACK_FREE = 0x9d,
        /* Allocate an RSS context */
        MC_CMD_RSS_CONTEXT_ALLOC = 0x9e,
        /* Free an RSS context */
        MC_CMD_RSS_CONTEXT_FREE = 0x9f,
        /* Set the Toeplitz hash key for an RSS context */
        MC_CMD_RSS_CONTEXT_SET_KEY = 0xa0,
        /* Set the indirection table for an RSS context */
        MC_CMD_RSS_CONTEXT_SET_TABLE = 0xa1,
        /* Get the indirection table for an RSS context */
        MC_CMD_RSS_CONTEXT_GET_TABLE = 0xa2,
        /* Get the Toeplitz hash key for an RSS context */
        MC_CMD_RSS_CONTEXT_GET_KEY = 0xa3,
        /* Allocate a .1p mapping */
        MC_CMD_DOT1P_MAPPING_ALLOC = 0xa4,
        /* Free a .1p mapping */
        MC_CMD_DOT1P_MAPPING_FREE = 0xa5,
        /* Set the mapping table for a .1p mapping */
        MC_CMD_DOT1P_MAPPING_SET_TABLE = 0xa6,
        /* Get the mapping table for a .1p mapping */
        MC_CMD_DOT1P_MAPPING_GET_TABLE = 0xa7,
        /* Add a MAC address to a v-port */
        MC_CMD_VPORT_ADD_MAC_ADDRESS = 0xa8,
        /* Delete a MAC address from a v-port */
        MC_CMD_VPORT_DEL_MAC_ADDRESS = 0xa9,
        /* List MAC addresses assigned to this v-port */
        MC_CMD_VPORT_GET_MAC_ADDRESSES = 0xaa,
        /* Dump buffer table entries, mainly for command client debug use */
        MC_CMD_DUMP_BUFTBL_ENTRIES = 0xab,
        /* Return the system and PDCPU clock frequencies */
        MC_CMD_GET_CLOCK = 0xac,
        /* Control the system and DPCPU clock frequencies */
        MC_CMD_SET_CLOCK = 0xad,
        /* Send an arbitrary DPCPU message */
        MC_CMD_DPCPU_RPC = 0xae,
        /* Get TLP steering and ordering information for a VI */
        MC_CMD_GET_VI_TLP_PROCESSING = 0xb0,
        /* Set TLP steering and ordering information for a VI */
        MC_CMD_SET_VI_TLP_PROCESSING = 0xb1,
        /* Allocate a pacer bucket (for qau rp or a snapper test) */
        MC_CMD_TCM_BUCKET_ALLOC = 0xb2,
        /* Free a pacer bucket */
        MC_CMD_TCM_BUCKET_FREE = 0xb3,
        /* Initialise pacer bucket with a given rate */
        MC_CMD_TCM_BUCKET_INIT = 0xb4,
        /* Initialise txq in pacer with given options or set options */
        MC_CMD_TCM_TXQ_INIT = 0xb5,
        /* Get number of PFs on the device */
        MC_CMD_GET_PF_COUNT = 0xb6,
        /* Set number of PFs on the device */
        MC_CMD_SET_PF_COUNT = 0xb7,
        /* Get port assigned to this function */
        MC_CMD_GET_PORT_ASSIGNMENT = 0xb8,
        /* Set port assigned to this function */
        MC_CMD_SET_PORT_ASSIGNMENT = 0xb9,
        /* Get SRIOV config for this PF */
        MC_CMD_GET_SRIOV_CFG = 0xba,
        /* Set SRIOV config for this PF */
        MC_CMD_SET_SRIOV_CFG = 0xbb,
        /* Get global PCIe steering and transaction processing configuration */
        MC_CMD_GET_TLP_PROCESSING_GLOBALS = 0xbc,
        /* Set global PCIe steering and transaction processing configuration */
        MC_CMD_SET_TLP_PROCESSING_GLOBALS = 0xbd,
        /* Get device capabilities */
        MC_CMD_GET_CAPABILITIES = 0xbe,
        /* Get Interrupt Vector config for this PF */
        MC_CMD_GET_VECTOR_CFG = 0xbf,
        /* Set Interrupt Vector config for this PF */
        MC_CMD_SET_VECTOR_CFG = 0xc0,
        /* Set datapath configuration */
        MC_CMD_SET_RXDP_CONFIG = 0xc1,
        /* Get datapath configuration */
        MC_CMD_GET_RXDP_CONFIG = 0xc2,
        /* Operations on the NVRAM_PARTITION_TYPE_LICENSE application license partition */
        MC_CMD_LICENSING_V3 = 0xd0,
        /* Get ID and type from the NVRAM_PARTITION_TYPE_LICENSE partition */
        MC_CMD_LICENSING_GET_ID_V3 = 0xd1,
        /* Query the state of an individual licensed application */
        MC_CMD_GET_LICENSED_V3_APP_STATE = 0xd2,
        /* Query the state of an one or more licensed features */
        MC_CMD_GET_LICENSED_V3_FEATURE_STATES = 0xd3,
        /* Set various control flags for an RSS context */
        MC_CMD_RSS_CONTEXT_SET_FLAGS = 0xe1,
        /* Get various control flags for an RSS context */
        MC_CMD_RSS_CONTEXT_GET_FLAGS = 0xe2,
        /* Trigger an interrupt by prodding the BIU */
        MC_CMD_TRIGGER_INTERRUPT = 0xe3,
        /* Get information related to the parser-dispatcher subsystem */
        MC_CMD_GET_PARSER_DISP_INFO = 0xe4,
        /* Direct read/write of parser-dispatcher state (DICPUs and LUE) for debugging */
        MC_CMD_PARSER_DISP_RW = 0xe5,
        /* Special operations to support (for now) shmboot */
        MC_CMD_SHMBOOT_OP = 0xe6,
        /* Read multiple 64bit words from capture block memory */
        MC_CMD_CAP_BLK_READ = 0xe7,
        /* Take a dump of the DUT state */
        MC_CMD_DUMP_DO = 0xe8,
        /* Configure unsolicited dumps */
        MC_CMD_DUMP_CONFIGURE_UNSOLICITED = 0xe9,
        /* Adjusts power supply parameters */
        MC_CMD_SET_PSU = 0xea,
        /* Replace the VLAN tags and/or MAC addresses of an existing v-port */
        MC_CMD_VPORT_RECONFIGURE = 0xeb,
        /* Get function information. PF and VF number */
        MC_CMD_GET_FUNCTION_INFO = 0xec,
        /* Enter the MC command handler loop to run BIST tests */
        MC_CMD_ENABLE_OFFLINE_BIST = 0xed,
        /* Send checksummed[sic] block of data over the uart */
        MC_CMD_UART_SEND_DATA = 0xee,
        /* Request checksummed[sic] block of data over the uart */
        MC_CMD_UART_RECV_DATA = 0xef,
        /* Read data programmed into the device One-Time-Programmable (OTP) Fuses */
        MC_CMD_READ_FUSES = 0xf0,
        /* Get or set KR Serdes RXEQ and TX Driver settings */
        MC_CMD_KR_TUNE = 0xf1,
        /* Get or set PCIE Serdes RXEQ and TX Driver settings */
        MC_CMD_PCIE_TUNE = 0xf2,
        /* Operations on the NVRAM_PARTITION_TYPE_LICENSE application license partition */
        MC_CMD_LICENSING = 0xf3,
        /* Execute an arbitrary MCDI command on the slave MC of a dual-core device */
        MC_CMD_MC2MC_PROXY = 0xf4,
        /* Query the state of an individual licensed application */
        MC_CMD_GET_LICENSED_APP_STATE = 0xf5,
        /* Perform an action for an individual licensed application */
        MC_CMD_LICENSED_APP_OP = 0xf6,
        /* Configure RX port sniffing for the physical port associated with the calling function */
        MC_CMD_SET_PORT_SNIFF_CONFIG = 0xf7,
        /* Obtain the current RX port sniffing configuration */
        MC_CMD_GET_PORT_SNIFF_CONFIG = 0xf8,
        /* Change configuration related to the parser-dispatcher subsystem */
        MC_CMD_SET_PARSER_DISP_CONFIG = 0xf9,
        /* Read configuration related to the parser-dispatcher subsystem */
        MC_CMD_GET_PARSER_DISP_CONFIG = 0xfa,
        /* Configure TX port sniffing for the physical port associated with the calling function */
        MC_CMD_SET_TX_PORT_SNIFF_CONFIG = 0xfb,
        /* Obtain the current TX port sniffing configuration */
        MC_CMD_GET_TX_PORT_SNIFF_CONFIG = 0xfc,
        /* Get PCIe resource information */
        MC_CMD_GET_PCIE_RESOURCE_INFO = 0xfd,
        /* Per queue rx error stats */
        MC_CMD_RMON_STATS_RX_ERRORS = 0xfe,
        /* Find out about available port modes */
        MC_CMD_GET_PORT_MODES = 0xff,

        // v2-only commands
        /* Sample voltages on the ATB */
        MC_CMD_READ_ATB = 0x100,
        /* Get RX snapshot length */
        MC_CMD_GET_SNAPSHOT_LENGTH = 0x101,
        /* Get fuse diagnostic data */
        MC_CMD_FUSE_DIAGS = 0x102,
        /* Read XPM memory */
        MC_CMD_XPM_READ_BYTES = 0x103,
        /* Write XPM memory */
        MC_CMD_XPM_WRITE_BYTES = 0x104,
        /* Set blacklist and/or whitelist action for a particular match criteria */
        MC_CMD_SET_SECURITY_RULE = 0x10f,
        /* Reset all blacklist and whitelist actions for a particular physical port */
        MC_CMD_RESET_SECURITY_RULES = 0x110,
        /* Return a large hash value representing the set of installed rules */
        MC_CMD_GET_SECURITY_RULESET_VERSION = 0x111,
        /* Allocate counters for use with blacklist / whitelist rules */
        MC_CMD_SECURITY_RULE_COUNTER_ALLOC = 0x112,
        /* Free counters previously allocated with SECURITY_RULE_COUNTER_ALLOC */
        MC_CMD_SECURITY_RULE_COUNTER_FREE = 0x113,
        /* Atomically update a node in the 2nd stage subnet map */
        MC_CMD_SUBNET_MAP_SET_NODE = 0x114,
        /* Configure UDP ports for tunnel encapsulation hardware acceleration */
        MC_CMD_SET_TUNNEL_ENCAP_UDP_PORTS = 0x117,
        /* Configure a port's RX balancing */
        MC_CMD_RX_BALANCING = 0x118,
        /* TSAN - TSAC binding communication protocol */
        MC_CMD_TSA_BIND = 0x119,
        /* Manage the persistent NVRAM cache of security rules */
        MC_CMD_MANAGE_SECURITY_RULESET_CACHE = 0x11a,
        /* Verify the contents of XPM memory */
        MC_CMD_XPM_VERIFY_CONTENTS = 0x11b,
        /* Append a binary blob to the private partition */
        MC_CMD_NVRAM_PRIVATE_APPEND = 0x11c,
        /* Allocate a common pool for TX VFIFOs */
        MC_CMD_ALLOCATE_TX_VFIFO_CP = 0x11d,
        /* Allocate a TX VFIFO from a common pool */
        MC_CMD_ALLOCATE_TX_VFIFO_VFIFO = 0x11e,
        /* Tear down a VFIFO */
        MC_CMD_TEARDOWN_TX_VFIFO_VF = 0x11f,
        /* Deallocate a common pool */
        MC_CMD_DEALLOCATE_TX_VFIFO_CP = 0x121,
        /* Update the timer load, timer reload and timer mode values for a given EVQ */
        MC_CMD_SET_EVQ_TMR = 0x120,
        /* Query properties about the event queue timers of the device */
        MC_CMD_GET_EVQ_TMR_PROPERTIES = 0x122,
        /* Rekey the device */
        MC_CMD_REKEY = 0x123,
        /* Query the unassigned buffers in the switch */
        MC_CMD_SWITCH_GET_UNASSIGNED_BUFFERS = 0x124,
    }
}

/// Opcodes at or above this value only fit the v2 extended header.
pub const MC_CMD_V1_OPCODE_LIMIT: u32 = MC_CMD_V2_EXTN;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opcode_values() {
        assert_eq!(MC_CMD_GET_VERSION, 0x8);
        assert_eq!(MC_CMD_INIT_RXQ, 0x81);
        assert_eq!(MC_CMD_FILTER_OP, 0x8a);
        assert_eq!(MC_CMD_GET_CAPABILITIES, 0xbe);
        assert_eq!(MC_CMD_GET_PORT_MODES, 0xff);
        assert_eq!(MC_CMD_V2_EXTN, 0x7f);
    }

    #[test]
    fn test_only_reset_alias_shares_an_opcode() {
        for (i, (op, name)) in MC_CMD_TABLE.iter().enumerate() {
            for (other, other_name) in &MC_CMD_TABLE[i + 1..] {
                if op == other {
                    assert_eq!((*name, *other_name), ("MC_CMD_ENTITY_RESET", "MC_CMD_PORT_RESET"));
                }
            }
        }
    }

    #[test]
    fn test_v2_only_opcodes_exceed_header_code_field() {
        let code_max = (1u32 << super::super::MCDI_HEADER_CODE_WIDTH) - 1;
        assert_eq!(MC_CMD_V1_OPCODE_LIMIT, code_max);
        assert!(MC_CMD_READ_ATB > code_max);
        // 15-bit extended command field
        assert!(MC_CMD_TABLE.iter().all(|(op, _)| *op < 1 << 15));
    }
}
