/*
 * SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
 *
 * SPDX-License-Identifier: GPL-2.0-or-later
 */
use bitflags::bitflags;
use unpack::RAWDATA;

use crate::commands::{
    decode_fixed, execute, execute_quiet, flag_names, function_selector, CommandResult,
    McdiCommand,
};
use crate::error::McdiResult;
use crate::helper::format_mac;
use crate::mcdi::buf::McdiBuf;
use crate::mcdi::intf::McdiIntf;
use crate::mcdi::pcol::*;

bitflags! {
    /// GET_CAPABILITIES FLAGS1.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct CapabilityFlags: u32 {
        const VPORT_RECONFIGURE = 1 << MC_CMD_GET_CAPABILITIES_OUT_VPORT_RECONFIGURE_LBN;
        const TX_STRIPING = 1 << MC_CMD_GET_CAPABILITIES_OUT_TX_STRIPING_LBN;
        const VADAPTOR_QUERY = 1 << MC_CMD_GET_CAPABILITIES_OUT_VADAPTOR_QUERY_LBN;
        const EVB_PORT_VLAN_RESTRICT = 1 << MC_CMD_GET_CAPABILITIES_OUT_EVB_PORT_VLAN_RESTRICT_LBN;
        const DRV_ATTACH_PREBOOT = 1 << MC_CMD_GET_CAPABILITIES_OUT_DRV_ATTACH_PREBOOT_LBN;
        const RX_FORCE_EVENT_MERGING = 1 << MC_CMD_GET_CAPABILITIES_OUT_RX_FORCE_EVENT_MERGING_LBN;
        const SET_MAC_ENHANCED = 1 << MC_CMD_GET_CAPABILITIES_OUT_SET_MAC_ENHANCED_LBN;
        const UNKNOWN_UCAST_DST_FILTER_ALWAYS_MULTI_RECIPIENT =
            1 << MC_CMD_GET_CAPABILITIES_OUT_UNKNOWN_UCAST_DST_FILTER_ALWAYS_MULTI_RECIPIENT_LBN;
        const VADAPTOR_PERMIT_SET_MAC_WHEN_FILTERS_INSTALLED =
            1 << MC_CMD_GET_CAPABILITIES_OUT_VADAPTOR_PERMIT_SET_MAC_WHEN_FILTERS_INSTALLED_LBN;
        const TX_MAC_SECURITY_FILTERING = 1 << MC_CMD_GET_CAPABILITIES_OUT_TX_MAC_SECURITY_FILTERING_LBN;
        const ADDITIONAL_RSS_MODES = 1 << MC_CMD_GET_CAPABILITIES_OUT_ADDITIONAL_RSS_MODES_LBN;
        const QBB = 1 << MC_CMD_GET_CAPABILITIES_OUT_QBB_LBN;
        const RX_PACKED_STREAM_VAR_BUFFERS = 1 << MC_CMD_GET_CAPABILITIES_OUT_RX_PACKED_STREAM_VAR_BUFFERS_LBN;
        const RX_RSS_LIMITED = 1 << MC_CMD_GET_CAPABILITIES_OUT_RX_RSS_LIMITED_LBN;
        const RX_PACKED_STREAM = 1 << MC_CMD_GET_CAPABILITIES_OUT_RX_PACKED_STREAM_LBN;
        const RX_INCLUDE_FCS = 1 << MC_CMD_GET_CAPABILITIES_OUT_RX_INCLUDE_FCS_LBN;
        const TX_VLAN_INSERTION = 1 << MC_CMD_GET_CAPABILITIES_OUT_TX_VLAN_INSERTION_LBN;
        const RX_VLAN_STRIPPING = 1 << MC_CMD_GET_CAPABILITIES_OUT_RX_VLAN_STRIPPING_LBN;
        const TX_TSO = 1 << MC_CMD_GET_CAPABILITIES_OUT_TX_TSO_LBN;
        const RX_PREFIX_LEN_0 = 1 << MC_CMD_GET_CAPABILITIES_OUT_RX_PREFIX_LEN_0_LBN;
        const RX_PREFIX_LEN_14 = 1 << MC_CMD_GET_CAPABILITIES_OUT_RX_PREFIX_LEN_14_LBN;
        const RX_TIMESTAMP = 1 << MC_CMD_GET_CAPABILITIES_OUT_RX_TIMESTAMP_LBN;
        const RX_BATCHING = 1 << MC_CMD_GET_CAPABILITIES_OUT_RX_BATCHING_LBN;
        const MCAST_FILTER_CHAINING = 1 << MC_CMD_GET_CAPABILITIES_OUT_MCAST_FILTER_CHAINING_LBN;
        const PM_AND_RXDP_COUNTERS = 1 << MC_CMD_GET_CAPABILITIES_OUT_PM_AND_RXDP_COUNTERS_LBN;
        const RX_DISABLE_SCATTER = 1 << MC_CMD_GET_CAPABILITIES_OUT_RX_DISABLE_SCATTER_LBN;
        const TX_MCAST_UDP_LOOPBACK = 1 << MC_CMD_GET_CAPABILITIES_OUT_TX_MCAST_UDP_LOOPBACK_LBN;
        const EVB = 1 << MC_CMD_GET_CAPABILITIES_OUT_EVB_LBN;
        const TX_VFIFO_ULL_MODE = 1 << MC_CMD_GET_CAPABILITIES_OUT_TX_VFIFO_ULL_MODE_LBN;
    }
}

bitflags! {
    /// Privilege groups of a PCIe function.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Privileges: u32 {
        const ADMIN = MC_CMD_PRIVILEGE_MASK_IN_GRP_ADMIN;
        const LINK = MC_CMD_PRIVILEGE_MASK_IN_GRP_LINK;
        const ONLOAD = MC_CMD_PRIVILEGE_MASK_IN_GRP_ONLOAD;
        const PTP = MC_CMD_PRIVILEGE_MASK_IN_GRP_PTP;
        const INSECURE_FILTERS = MC_CMD_PRIVILEGE_MASK_IN_GRP_INSECURE_FILTERS;
        const MAC_SPOOFING = MC_CMD_PRIVILEGE_MASK_IN_GRP_MAC_SPOOFING;
        const UNICAST = MC_CMD_PRIVILEGE_MASK_IN_GRP_UNICAST;
        const MULTICAST = MC_CMD_PRIVILEGE_MASK_IN_GRP_MULTICAST;
        const BROADCAST = MC_CMD_PRIVILEGE_MASK_IN_GRP_BROADCAST;
        const ALL_MULTICAST = MC_CMD_PRIVILEGE_MASK_IN_GRP_ALL_MULTICAST;
        const PROMISCUOUS = MC_CMD_PRIVILEGE_MASK_IN_GRP_PROMISCUOUS;
        const MAC_SPOOFING_TX = MC_CMD_PRIVILEGE_MASK_IN_GRP_MAC_SPOOFING_TX;
        const CHANGE_MAC = MC_CMD_PRIVILEGE_MASK_IN_GRP_CHANGE_MAC;
        const UNRESTRICTED_VLAN = MC_CMD_PRIVILEGE_MASK_IN_GRP_UNRESTRICTED_VLAN;
        const INSECURE = MC_CMD_PRIVILEGE_MASK_IN_GRP_INSECURE;
    }
}

impl_rawsize_for_bitflags!(CapabilityFlags, Privileges);

/// MC_CMD_GET_CAPABILITIES
#[derive(Debug, Clone, Copy, Default)]
pub struct GetCapabilities;

#[derive(Debug, Default, Clone, PartialEq, RAWDATA)]
#[repr(C)]
#[raw_data(endian = "little")]
pub struct GetCapabilitiesOut {
    pub flags1: CapabilityFlags,
    pub rx_dpcpu_fw_id: u16,
    pub tx_dpcpu_fw_id: u16,
    pub rxpd_fw_version: u16,
    pub txpd_fw_version: u16,
    pub hw_capabilities: u32,
    pub license_capabilities: u32,
}

// 数据路径固件版本：低 12 位为修订号，高 4 位为类型
fn datapath_version(raw: u16) -> String {
    let rev = raw as u32 & ((1 << MC_CMD_GET_CAPABILITIES_OUT_RXPD_FW_VERSION_REV_WIDTH) - 1);
    let ty = (raw as u32) >> MC_CMD_GET_CAPABILITIES_OUT_RXPD_FW_VERSION_TYPE_LBN;
    format!("type {} rev {}", ty, rev)
}

impl GetCapabilitiesOut {
    pub fn format_caps(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "RX Datapath Firmware      : 0x{:04x} ({})\n",
            self.rx_dpcpu_fw_id,
            datapath_version(self.rxpd_fw_version)
        ));
        output.push_str(&format!(
            "TX Datapath Firmware      : 0x{:04x} ({})\n",
            self.tx_dpcpu_fw_id,
            datapath_version(self.txpd_fw_version)
        ));
        output.push_str(&format!(
            "HW Capabilities           : 0x{:08x}\n",
            self.hw_capabilities
        ));
        output.push_str(&format!(
            "License Capabilities      : 0x{:08x}\n",
            self.license_capabilities
        ));
        output.push_str("Capabilities              :\n");
        for (name, _) in self.flags1.iter_names() {
            output.push_str(&format!("    {}\n", name));
        }
        output
    }
}

impl McdiCommand for GetCapabilities {
    const OPCODE: u32 = MC_CMD_GET_CAPABILITIES;
    const NAME: &'static str = "GET_CAPABILITIES";
    type Output = GetCapabilitiesOut;

    fn encode(&self) -> McdiResult<McdiBuf> {
        Ok(McdiBuf::new(MC_CMD_GET_CAPABILITIES_IN_LEN))
    }

    fn decode(payload: &[u8]) -> McdiResult<GetCapabilitiesOut> {
        decode_fixed(Self::NAME, payload)
    }

    fn outlen(&self) -> usize {
        MC_CMD_GET_CAPABILITIES_OUT_LEN
    }
}

/// MC_CMD_GET_RESOURCE_LIMITS
#[derive(Debug, Clone, Copy, Default)]
pub struct GetResourceLimits;

#[derive(Debug, Default, Clone, PartialEq, RAWDATA)]
#[repr(C)]
#[raw_data(endian = "little")]
pub struct GetResourceLimitsOut {
    pub buftbl: u32,
    pub evq: u32,
    pub rxq: u32,
    pub txq: u32,
}

impl GetResourceLimitsOut {
    pub fn format_limits(&self, csv: bool) -> String {
        if csv {
            return format!("{},{},{},{}", self.buftbl, self.evq, self.rxq, self.txq);
        }
        format!(
            "Buffer Table Entries      : {}\n\
             Event Queues              : {}\n\
             RX Queues                 : {}\n\
             TX Queues                 : {}\n",
            self.buftbl, self.evq, self.rxq, self.txq
        )
    }
}

impl McdiCommand for GetResourceLimits {
    const OPCODE: u32 = MC_CMD_GET_RESOURCE_LIMITS;
    const NAME: &'static str = "GET_RESOURCE_LIMITS";
    type Output = GetResourceLimitsOut;

    fn encode(&self) -> McdiResult<McdiBuf> {
        Ok(McdiBuf::new(MC_CMD_GET_RESOURCE_LIMITS_IN_LEN))
    }

    fn decode(payload: &[u8]) -> McdiResult<GetResourceLimitsOut> {
        decode_fixed(Self::NAME, payload)
    }

    fn outlen(&self) -> usize {
        MC_CMD_GET_RESOURCE_LIMITS_OUT_LEN
    }
}

/// MC_CMD_GET_MAC_ADDRESSES
#[derive(Debug, Clone, Copy, Default)]
pub struct GetMacAddresses;

#[derive(Debug, Default, Clone, PartialEq, RAWDATA)]
#[repr(C)]
#[raw_data(endian = "little")]
pub struct GetMacAddressesOut {
    pub mac_addr_base: [u8; 6],
    pub reserved: [u8; 2],
    pub mac_count: u32,
    pub mac_stride: u32,
}

impl GetMacAddressesOut {
    /// The allocated block: `mac_count` addresses, `mac_stride` apart.
    pub fn addresses(&self) -> Vec<[u8; 6]> {
        let base = self
            .mac_addr_base
            .iter()
            .fold(0u64, |acc, b| (acc << 8) | *b as u64);
        (0..self.mac_count as u64)
            .map(|i| {
                let addr = base.wrapping_add(i * self.mac_stride as u64) & 0xffff_ffff_ffff;
                let bytes = addr.to_be_bytes();
                let mut mac = [0u8; 6];
                mac.copy_from_slice(&bytes[2..]);
                mac
            })
            .collect()
    }
}

impl McdiCommand for GetMacAddresses {
    const OPCODE: u32 = MC_CMD_GET_MAC_ADDRESSES;
    const NAME: &'static str = "GET_MAC_ADDRESSES";
    type Output = GetMacAddressesOut;

    fn encode(&self) -> McdiResult<McdiBuf> {
        Ok(McdiBuf::new(MC_CMD_GET_MAC_ADDRESSES_IN_LEN))
    }

    fn decode(payload: &[u8]) -> McdiResult<GetMacAddressesOut> {
        decode_fixed(Self::NAME, payload)
    }

    fn outlen(&self) -> usize {
        MC_CMD_GET_MAC_ADDRESSES_OUT_LEN
    }
}

/// MC_CMD_PRIVILEGE_MASK. Without `new_mask` this only reads the current
/// mask; the response always carries the mask as it was before the call.
#[derive(Debug, Clone, Copy)]
pub struct PrivilegeMask {
    pub pf: u16,
    pub vf: Option<u16>,
    pub new_mask: Option<Privileges>,
}

impl McdiCommand for PrivilegeMask {
    const OPCODE: u32 = MC_CMD_PRIVILEGE_MASK;
    const NAME: &'static str = "PRIVILEGE_MASK";
    type Output = Privileges;

    fn encode(&self) -> McdiResult<McdiBuf> {
        let mut buf = McdiBuf::new(MC_CMD_PRIVILEGE_MASK_IN_LEN);
        buf.set_dword(
            MC_CMD_PRIVILEGE_MASK_IN_FUNCTION_OFST,
            function_selector(self.pf, self.vf),
        )?;
        if let Some(mask) = self.new_mask {
            buf.set_dword(
                MC_CMD_PRIVILEGE_MASK_IN_NEW_MASK_OFST,
                mask.bits() | MC_CMD_PRIVILEGE_MASK_IN_DO_CHANGE,
            )?;
        }
        Ok(buf)
    }

    fn decode(payload: &[u8]) -> McdiResult<Privileges> {
        decode_fixed(Self::NAME, payload)
    }

    fn outlen(&self) -> usize {
        MC_CMD_PRIVILEGE_MASK_OUT_LEN
    }
}

/// MC_CMD_GET_FUNCTION_INFO
#[derive(Debug, Clone, Copy, Default)]
pub struct GetFunctionInfo;

#[derive(Debug, Default, Clone, PartialEq, RAWDATA)]
#[repr(C)]
#[raw_data(endian = "little")]
pub struct GetFunctionInfoOut {
    pub pf: u32,
    pub vf: u32,
}

impl GetFunctionInfoOut {
    /// VF index, or `None` when the caller is the PF itself.
    pub fn vf_index(&self) -> Option<u16> {
        match self.vf {
            MC_CMD_PRIVILEGE_MASK_IN_VF_NULL => None,
            vf => Some(vf as u16),
        }
    }
}

impl McdiCommand for GetFunctionInfo {
    const OPCODE: u32 = MC_CMD_GET_FUNCTION_INFO;
    const NAME: &'static str = "GET_FUNCTION_INFO";
    type Output = GetFunctionInfoOut;

    fn encode(&self) -> McdiResult<McdiBuf> {
        Ok(McdiBuf::new(MC_CMD_GET_FUNCTION_INFO_IN_LEN))
    }

    fn decode(payload: &[u8]) -> McdiResult<GetFunctionInfoOut> {
        decode_fixed(Self::NAME, payload)
    }

    fn outlen(&self) -> usize {
        MC_CMD_GET_FUNCTION_INFO_OUT_LEN
    }
}

/// MC_CMD_GET_PF_COUNT
#[derive(Debug, Clone, Copy, Default)]
pub struct GetPfCount;

#[derive(Debug, Default, Clone, PartialEq, RAWDATA)]
#[repr(C)]
#[raw_data(endian = "little")]
pub struct GetPfCountOut {
    pub pf_count: u8,
}

impl McdiCommand for GetPfCount {
    const OPCODE: u32 = MC_CMD_GET_PF_COUNT;
    const NAME: &'static str = "GET_PF_COUNT";
    type Output = u8;

    fn encode(&self) -> McdiResult<McdiBuf> {
        Ok(McdiBuf::new(MC_CMD_GET_PF_COUNT_IN_LEN))
    }

    fn decode(payload: &[u8]) -> McdiResult<u8> {
        let out: GetPfCountOut = decode_fixed(Self::NAME, payload)?;
        Ok(out.pf_count)
    }

    fn outlen(&self) -> usize {
        MC_CMD_GET_PF_COUNT_OUT_LEN
    }
}

/// MC_CMD_GET_PORT_MODES
#[derive(Debug, Clone, Copy, Default)]
pub struct GetPortModes;

#[derive(Debug, Default, Clone, PartialEq, RAWDATA)]
#[repr(C)]
#[raw_data(endian = "little")]
pub struct GetPortModesOut {
    /// Bitmask of supported port modes, bit n = mode n.
    pub modes: u32,
    pub default_mode: u32,
    pub current_mode: u32,
}

impl GetPortModesOut {
    pub fn mode_list(&self) -> Vec<u32> {
        (0..32).filter(|m| self.modes & (1 << m) != 0).collect()
    }
}

impl McdiCommand for GetPortModes {
    const OPCODE: u32 = MC_CMD_GET_PORT_MODES;
    const NAME: &'static str = "GET_PORT_MODES";
    type Output = GetPortModesOut;

    fn encode(&self) -> McdiResult<McdiBuf> {
        Ok(McdiBuf::new(MC_CMD_GET_PORT_MODES_IN_LEN))
    }

    fn decode(payload: &[u8]) -> McdiResult<GetPortModesOut> {
        decode_fixed(Self::NAME, payload)
    }

    fn outlen(&self) -> usize {
        MC_CMD_GET_PORT_MODES_OUT_LEN
    }
}

// ===========================
// 命令行处理函数
// ===========================

pub fn mcdi_caps(intf: &mut dyn McdiIntf) -> CommandResult {
    let caps = execute(intf, &GetCapabilities)?;
    print!("{}", caps.format_caps());

    if let Some(func) = execute_quiet(intf, &GetFunctionInfo)? {
        match func.vf_index() {
            Some(vf) => println!("Function                  : PF {} VF {}", func.pf, vf),
            None => println!("Function                  : PF {}", func.pf),
        }
        let privileges = execute_quiet(
            intf,
            &PrivilegeMask {
                pf: func.pf as u16,
                vf: func.vf_index(),
                new_mask: None,
            },
        )?;
        if let Some(privileges) = privileges {
            println!(
                "Privileges                : {}",
                flag_names(&privileges, " ")
            );
        }
    }
    if let Some(count) = execute_quiet(intf, &GetPfCount)? {
        println!("PF Count                  : {}", count);
    }
    if let Some(modes) = execute_quiet(intf, &GetPortModes)? {
        let list: Vec<String> = modes.mode_list().iter().map(|m| m.to_string()).collect();
        println!("Port Modes                : {}", list.join(" "));
        println!(
            "Port Mode                 : {} (default {})",
            modes.current_mode, modes.default_mode
        );
    }
    Ok(())
}

pub fn mcdi_mac_addresses(intf: &mut dyn McdiIntf) -> CommandResult {
    let out = execute(intf, &GetMacAddresses)?;
    for mac in out.addresses() {
        println!("{}", format_mac(&mac));
    }
    Ok(())
}

pub fn mcdi_resources(intf: &mut dyn McdiIntf) -> CommandResult {
    let csv = intf.context().is_csv_output();
    let limits = execute(intf, &GetResourceLimits)?;
    if csv {
        println!("{}", limits.format_limits(true));
    } else {
        print!("{}", limits.format_limits(false));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcdi::intf::mock::MockIntf;
    use unpack::RawSize;

    #[test]
    fn test_layout_sizes() {
        assert_eq!(GetCapabilitiesOut::RAW_SIZE, MC_CMD_GET_CAPABILITIES_OUT_LEN);
        assert_eq!(GetResourceLimitsOut::RAW_SIZE, MC_CMD_GET_RESOURCE_LIMITS_OUT_LEN);
        assert_eq!(GetMacAddressesOut::RAW_SIZE, MC_CMD_GET_MAC_ADDRESSES_OUT_LEN);
        assert_eq!(GetFunctionInfoOut::RAW_SIZE, MC_CMD_GET_FUNCTION_INFO_OUT_LEN);
        assert_eq!(GetPfCountOut::RAW_SIZE, MC_CMD_GET_PF_COUNT_OUT_LEN);
        assert_eq!(GetPortModesOut::RAW_SIZE, MC_CMD_GET_PORT_MODES_OUT_LEN);
        assert_eq!(Privileges::RAW_SIZE, MC_CMD_PRIVILEGE_MASK_OUT_LEN);
    }

    #[test]
    fn test_capabilities_decode() {
        let mut buf = McdiBuf::new(MC_CMD_GET_CAPABILITIES_OUT_LEN);
        buf.set_dword(MC_CMD_GET_CAPABILITIES_OUT_FLAGS1_OFST, (1 << 21) | (1 << 30))
            .unwrap();
        buf.set_word(MC_CMD_GET_CAPABILITIES_OUT_RX_DPCPU_FW_ID_OFST, 0x0101).unwrap();
        buf.set_word(MC_CMD_GET_CAPABILITIES_OUT_RXPD_FW_VERSION_OFST, 0x1023).unwrap();
        let caps = GetCapabilities::decode(buf.as_bytes()).unwrap();
        assert!(caps.flags1.contains(CapabilityFlags::TX_TSO | CapabilityFlags::EVB));
        assert!(!caps.flags1.contains(CapabilityFlags::RX_TIMESTAMP));
        let text = caps.format_caps();
        assert!(text.contains("0x0101 (type 1 rev 35)"));
        assert!(text.contains("    TX_TSO\n"));
    }

    #[test]
    fn test_mac_addresses() {
        let mut buf = McdiBuf::new(MC_CMD_GET_MAC_ADDRESSES_OUT_LEN);
        buf.set_bytes(0, &[0x00, 0x0f, 0x53, 0x00, 0x00, 0xff]).unwrap();
        buf.set_dword(MC_CMD_GET_MAC_ADDRESSES_OUT_MAC_COUNT_OFST, 3).unwrap();
        buf.set_dword(MC_CMD_GET_MAC_ADDRESSES_OUT_MAC_STRIDE_OFST, 1).unwrap();
        let out = GetMacAddresses::decode(buf.as_bytes()).unwrap();
        let macs = out.addresses();
        assert_eq!(macs.len(), 3);
        // 进位到高字节
        assert_eq!(macs[1], [0x00, 0x0f, 0x53, 0x00, 0x01, 0x00]);
        assert_eq!(format_mac(&macs[2]), "00:0f:53:00:01:01");
    }

    #[test]
    fn test_privilege_mask_read_only() {
        let req = PrivilegeMask {
            pf: 1,
            vf: None,
            new_mask: None,
        }
        .encode()
        .unwrap();
        assert_eq!(req.get_dword(MC_CMD_PRIVILEGE_MASK_IN_FUNCTION_OFST).unwrap(), 0xffff0001);
        assert_eq!(req.get_dword(MC_CMD_PRIVILEGE_MASK_IN_NEW_MASK_OFST).unwrap(), 0);
    }

    #[test]
    fn test_privilege_mask_change() {
        let mut intf = MockIntf::new();
        intf.reply(MC_CMD_PRIVILEGE_MASK, &0x3u32.to_le_bytes());
        let old = execute(
            &mut intf,
            &PrivilegeMask {
                pf: 0,
                vf: Some(2),
                new_mask: Some(Privileges::LINK | Privileges::UNICAST),
            },
        )
        .unwrap();
        assert_eq!(old, Privileges::ADMIN | Privileges::LINK);
        let sent = McdiBuf::from_bytes(&intf.last_request().unwrap().1);
        assert_eq!(sent.get_dword(MC_CMD_PRIVILEGE_MASK_IN_FUNCTION_OFST).unwrap(), 0x00020000);
        assert_eq!(
            sent.get_dword(MC_CMD_PRIVILEGE_MASK_IN_NEW_MASK_OFST).unwrap(),
            0x80000042
        );
    }

    #[test]
    fn test_function_info() {
        let mut payload = 2u32.to_le_bytes().to_vec();
        payload.extend_from_slice(&0xffffu32.to_le_bytes());
        let out = GetFunctionInfo::decode(&payload).unwrap();
        assert_eq!(out.pf, 2);
        assert_eq!(out.vf_index(), None);
    }

    #[test]
    fn test_pf_count_and_port_modes() {
        assert_eq!(GetPfCount::decode(&[4]).unwrap(), 4);
        assert!(GetPfCount::decode(&[]).is_err());

        let mut buf = McdiBuf::new(MC_CMD_GET_PORT_MODES_OUT_LEN);
        buf.set_dword(MC_CMD_GET_PORT_MODES_OUT_MODES_OFST, 0b1010).unwrap();
        buf.set_dword(MC_CMD_GET_PORT_MODES_OUT_CURRENT_MODE_OFST, 3).unwrap();
        let modes = GetPortModes::decode(buf.as_bytes()).unwrap();
        assert_eq!(modes.mode_list(), vec![1, 3]);
        assert_eq!(modes.current_mode, 3);
    }

    #[test]
    fn test_resource_limits_csv() {
        let mut intf = MockIntf::new();
        let mut buf = McdiBuf::new(MC_CMD_GET_RESOURCE_LIMITS_OUT_LEN);
        buf.set_dword(MC_CMD_GET_RESOURCE_LIMITS_OUT_EVQ_OFST, 1024).unwrap();
        intf.reply(MC_CMD_GET_RESOURCE_LIMITS, buf.as_bytes());
        let limits = execute(&mut intf, &GetResourceLimits).unwrap();
        assert_eq!(limits.format_limits(true), "0,1024,0,0");
    }
}
