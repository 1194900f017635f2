/*
 * SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
 *
 * SPDX-License-Identifier: GPL-2.0-or-later
 */
//! Port, PHY and MAC commands.

use bitflags::bitflags;
use unpack::RAWDATA;

use crate::commands::{decode_fixed, execute, execute_quiet, flag_names, CommandResult, McdiCommand};
use crate::error::{McdiError, McdiResult};
use crate::mcdi::buf::McdiBuf;
use crate::mcdi::dword::{EfxDword, Field};
use crate::mcdi::intf::McdiIntf;
use crate::mcdi::pcol::*;
use crate::mcdi::strings::{fcntl_name, loopback_name, mask_names, media_name, table_lookup};

bitflags! {
    /// MC_CMD_PHY_CAP_* bits, shared by GET_LINK, SET_LINK and GET_PHY_CFG.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PhyCaps: u32 {
        const HDX_10M = 1 << MC_CMD_PHY_CAP_10HDX_LBN;
        const FDX_10M = 1 << MC_CMD_PHY_CAP_10FDX_LBN;
        const HDX_100M = 1 << MC_CMD_PHY_CAP_100HDX_LBN;
        const FDX_100M = 1 << MC_CMD_PHY_CAP_100FDX_LBN;
        const HDX_1G = 1 << MC_CMD_PHY_CAP_1000HDX_LBN;
        const FDX_1G = 1 << MC_CMD_PHY_CAP_1000FDX_LBN;
        const FDX_10G = 1 << MC_CMD_PHY_CAP_10000FDX_LBN;
        const PAUSE = 1 << MC_CMD_PHY_CAP_PAUSE_LBN;
        const ASYM = 1 << MC_CMD_PHY_CAP_ASYM_LBN;
        const AN = 1 << MC_CMD_PHY_CAP_AN_LBN;
        const FDX_40G = 1 << MC_CMD_PHY_CAP_40000FDX_LBN;
        const DDM = 1 << MC_CMD_PHY_CAP_DDM_LBN;
        const FDX_100G = 1 << MC_CMD_PHY_CAP_100000FDX_LBN;
        const FDX_25G = 1 << MC_CMD_PHY_CAP_25000FDX_LBN;
        const FDX_50G = 1 << MC_CMD_PHY_CAP_50000FDX_LBN;
        const BASER_FEC = 1 << MC_CMD_PHY_CAP_BASER_FEC_LBN;
        const BASER_FEC_REQUESTED = 1 << MC_CMD_PHY_CAP_BASER_FEC_REQUESTED_LBN;
        const RS_FEC = 1 << MC_CMD_PHY_CAP_RS_FEC_LBN;
        const RS_FEC_REQUESTED = 1 << MC_CMD_PHY_CAP_RS_FEC_REQUESTED_LBN;
        const BASER_FEC_25G = 1 << MC_CMD_PHY_CAP_25G_BASER_FEC_LBN;
        const BASER_FEC_25G_REQUESTED = 1 << MC_CMD_PHY_CAP_25G_BASER_FEC_REQUESTED_LBN;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct LinkFlags: u32 {
        const LINK_UP = 1 << MC_CMD_GET_LINK_OUT_LINK_UP_LBN;
        const FULL_DUPLEX = 1 << MC_CMD_GET_LINK_OUT_FULL_DUPLEX_LBN;
        const BPX_LINK = 1 << MC_CMD_GET_LINK_OUT_BPX_LINK_LBN;
        const PHY_LINK = 1 << MC_CMD_GET_LINK_OUT_PHY_LINK_LBN;
        const LINK_FAULT_RX = 1 << MC_CMD_GET_LINK_OUT_LINK_FAULT_RX_LBN;
        const LINK_FAULT_TX = 1 << MC_CMD_GET_LINK_OUT_LINK_FAULT_TX_LBN;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct MacFault: u32 {
        const XGMII_LOCAL = 1 << MC_CMD_MAC_FAULT_XGMII_LOCAL_LBN;
        const XGMII_REMOTE = 1 << MC_CMD_MAC_FAULT_XGMII_REMOTE_LBN;
        const SGMII_REMOTE = 1 << MC_CMD_MAC_FAULT_SGMII_REMOTE_LBN;
        const PENDING_RECONFIG = 1 << MC_CMD_MAC_FAULT_PENDING_RECONFIG_LBN;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PhyCfgFlags: u32 {
        const PRESENT = 1 << MC_CMD_GET_PHY_CFG_OUT_PRESENT_LBN;
        const BIST_CABLE_SHORT = 1 << MC_CMD_GET_PHY_CFG_OUT_BIST_CABLE_SHORT_LBN;
        const BIST_CABLE_LONG = 1 << MC_CMD_GET_PHY_CFG_OUT_BIST_CABLE_LONG_LBN;
        const LOWPOWER = 1 << MC_CMD_GET_PHY_CFG_OUT_LOWPOWER_LBN;
        const POWEROFF = 1 << MC_CMD_GET_PHY_CFG_OUT_POWEROFF_LBN;
        const TXDIS = 1 << MC_CMD_GET_PHY_CFG_OUT_TXDIS_LBN;
        const BIST = 1 << MC_CMD_GET_PHY_CFG_OUT_BIST_LBN;
    }
}

impl_rawsize_for_bitflags!(PhyCaps, LinkFlags, MacFault, PhyCfgFlags);

impl PhyCaps {
    /// Highest full duplex speed advertised, in Mbps.
    pub fn max_speed(&self) -> u32 {
        [
            (PhyCaps::FDX_100G, 100000),
            (PhyCaps::FDX_50G, 50000),
            (PhyCaps::FDX_40G, 40000),
            (PhyCaps::FDX_25G, 25000),
            (PhyCaps::FDX_10G, 10000),
            (PhyCaps::FDX_1G, 1000),
            (PhyCaps::FDX_100M, 100),
            (PhyCaps::FDX_10M, 10),
        ]
        .iter()
        .find(|(cap, _)| self.contains(*cap))
        .map(|(_, speed)| *speed)
        .unwrap_or(0)
    }
}

/// MC_CMD_GET_LINK
#[derive(Debug, Clone, Copy, Default)]
pub struct GetLink;

#[derive(Debug, Default, Clone, PartialEq, RAWDATA)]
#[repr(C)]
#[raw_data(endian = "little")]
pub struct GetLinkOut {
    pub cap: PhyCaps,
    pub lp_cap: PhyCaps,
    /// Mbps
    pub link_speed: u32,
    pub loopback_mode: u32,
    pub flags: LinkFlags,
    pub fcntl: u32,
    pub mac_fault: MacFault,
}

impl McdiCommand for GetLink {
    const OPCODE: u32 = MC_CMD_GET_LINK;
    const NAME: &'static str = "GET_LINK";
    type Output = GetLinkOut;

    fn encode(&self) -> McdiResult<McdiBuf> {
        Ok(McdiBuf::new(MC_CMD_GET_LINK_IN_LEN))
    }

    fn decode(payload: &[u8]) -> McdiResult<GetLinkOut> {
        decode_fixed(Self::NAME, payload)
    }

    fn outlen(&self) -> usize {
        MC_CMD_GET_LINK_OUT_LEN
    }
}

impl GetLinkOut {
    pub fn is_up(&self) -> bool {
        self.flags.contains(LinkFlags::LINK_UP)
    }

    pub fn format_link(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "Link State                : {}\n",
            if self.is_up() { "up" } else { "down" }
        ));
        if self.is_up() {
            output.push_str(&format!(
                "Link Speed                : {} Mbps\n",
                self.link_speed
            ));
            output.push_str(&format!(
                "Duplex                    : {}\n",
                if self.flags.contains(LinkFlags::FULL_DUPLEX) {
                    "full"
                } else {
                    "half"
                }
            ));
        }
        output.push_str(&format!(
            "Flow Control              : {}\n",
            fcntl_name(self.fcntl)
        ));
        output.push_str(&format!(
            "Loopback Mode             : {}\n",
            loopback_name(self.loopback_mode)
        ));
        output.push_str(&format!(
            "Link Flags                : {}\n",
            flag_names(&self.flags, " ")
        ));
        output.push_str(&format!(
            "Advertised Capabilities   : {}\n",
            flag_names(&self.cap, " ")
        ));
        output.push_str(&format!(
            "Partner Capabilities      : {}\n",
            flag_names(&self.lp_cap, " ")
        ));
        if !self.mac_fault.is_empty() {
            output.push_str(&format!(
                "MAC Fault                 : {}\n",
                flag_names(&self.mac_fault, " ")
            ));
        }
        output
    }

    pub fn format_csv(&self) -> String {
        format!(
            "{},{},{},{},{}",
            if self.is_up() { "up" } else { "down" },
            self.link_speed,
            if self.flags.contains(LinkFlags::FULL_DUPLEX) {
                "full"
            } else {
                "half"
            },
            fcntl_name(self.fcntl),
            loopback_name(self.loopback_mode)
        )
    }
}

/// MC_CMD_SET_LINK
#[derive(Debug, Clone, Copy, Default)]
pub struct SetLink {
    pub cap: PhyCaps,
    pub lowpower: bool,
    pub poweroff: bool,
    pub txdis: bool,
    pub loopback_mode: u32,
    /// Mbps, 0 for the current speed
    pub loopback_speed: u32,
}

impl McdiCommand for SetLink {
    const OPCODE: u32 = MC_CMD_SET_LINK;
    const NAME: &'static str = "SET_LINK";
    type Output = ();

    fn encode(&self) -> McdiResult<McdiBuf> {
        if table_lookup(MC_CMD_LOOPBACK_TABLE, self.loopback_mode).is_none() {
            return Err(McdiError::InvalidData(format!(
                "Unknown loopback mode {}",
                self.loopback_mode
            )));
        }
        let flags = EfxDword::populate(&[
            (
                Field::new(MC_CMD_SET_LINK_IN_LOWPOWER_LBN, MC_CMD_SET_LINK_IN_LOWPOWER_WIDTH),
                self.lowpower as u32,
            ),
            (
                Field::new(MC_CMD_SET_LINK_IN_POWEROFF_LBN, MC_CMD_SET_LINK_IN_POWEROFF_WIDTH),
                self.poweroff as u32,
            ),
            (
                Field::new(MC_CMD_SET_LINK_IN_TXDIS_LBN, MC_CMD_SET_LINK_IN_TXDIS_WIDTH),
                self.txdis as u32,
            ),
        ]);
        let mut buf = McdiBuf::new(MC_CMD_SET_LINK_IN_LEN);
        buf.set_dword(MC_CMD_SET_LINK_IN_CAP_OFST, self.cap.bits())?;
        buf.set_dword(MC_CMD_SET_LINK_IN_FLAGS_OFST, flags.0)?;
        buf.set_dword(MC_CMD_SET_LINK_IN_LOOPBACK_MODE_OFST, self.loopback_mode)?;
        buf.set_dword(MC_CMD_SET_LINK_IN_LOOPBACK_SPEED_OFST, self.loopback_speed)?;
        Ok(buf)
    }

    fn decode(_payload: &[u8]) -> McdiResult<()> {
        Ok(())
    }

    fn outlen(&self) -> usize {
        MC_CMD_SET_LINK_OUT_LEN
    }
}

/// MC_CMD_GET_PHY_CFG
#[derive(Debug, Clone, Copy, Default)]
pub struct GetPhyCfg;

#[derive(Debug, Default, Clone, PartialEq, RAWDATA)]
#[repr(C)]
#[raw_data(endian = "little")]
pub struct GetPhyCfgOut {
    pub flags: PhyCfgFlags,
    pub phy_type: u32,
    pub supported_cap: PhyCaps,
    pub channel: u32,
    pub prt: u32,
    pub stats_mask: u32,
    pub name: [u8; MC_CMD_GET_PHY_CFG_OUT_NAME_LEN],
    pub media_type: u32,
    pub mmd_mask: u32,
    pub revision: [u8; MC_CMD_GET_PHY_CFG_OUT_REVISION_LEN],
}

fn nul_trimmed(raw: &[u8]) -> String {
    let end = raw.iter().position(|b| *b == 0).unwrap_or(raw.len());
    String::from_utf8_lossy(&raw[..end]).into_owned()
}

impl McdiCommand for GetPhyCfg {
    const OPCODE: u32 = MC_CMD_GET_PHY_CFG;
    const NAME: &'static str = "GET_PHY_CFG";
    type Output = GetPhyCfgOut;

    fn encode(&self) -> McdiResult<McdiBuf> {
        Ok(McdiBuf::new(MC_CMD_GET_PHY_CFG_IN_LEN))
    }

    fn decode(payload: &[u8]) -> McdiResult<GetPhyCfgOut> {
        decode_fixed(Self::NAME, payload)
    }

    fn outlen(&self) -> usize {
        MC_CMD_GET_PHY_CFG_OUT_LEN
    }
}

impl GetPhyCfgOut {
    pub fn name(&self) -> String {
        nul_trimmed(&self.name)
    }

    pub fn revision(&self) -> String {
        nul_trimmed(&self.revision)
    }

    pub fn format_phy(&self) -> String {
        let mut output = String::new();
        if !self.flags.contains(PhyCfgFlags::PRESENT) {
            output.push_str("PHY Present               : no\n");
            return output;
        }
        output.push_str(&format!("PHY Name                  : {}\n", self.name()));
        output.push_str(&format!("PHY Revision              : {}\n", self.revision()));
        output.push_str(&format!("PHY Type                  : 0x{:x}\n", self.phy_type));
        output.push_str(&format!(
            "Media Type                : {}\n",
            media_name(self.media_type)
        ));
        output.push_str(&format!("Channel                   : {}\n", self.channel));
        output.push_str(&format!("Port                      : {}\n", self.prt));
        output.push_str(&format!(
            "PHY Flags                 : {}\n",
            flag_names(&self.flags, " ")
        ));
        output.push_str(&format!(
            "Supported Capabilities    : {}\n",
            flag_names(&self.supported_cap, " ")
        ));
        output.push_str(&format!("MMD Mask                  : 0x{:08x}\n", self.mmd_mask));
        output
    }
}

/// MC_CMD_GET_LOOPBACK_MODES
#[derive(Debug, Clone, Copy, Default)]
pub struct GetLoopbackModes;

#[derive(Debug, Default, Clone, PartialEq, RAWDATA)]
#[repr(C)]
#[raw_data(endian = "little")]
pub struct GetLoopbackModesOut {
    pub modes_100m: u64,
    pub modes_1g: u64,
    pub modes_10g: u64,
    pub suggested: u64,
    pub modes_40g: u64,
}

impl McdiCommand for GetLoopbackModes {
    const OPCODE: u32 = MC_CMD_GET_LOOPBACK_MODES;
    const NAME: &'static str = "GET_LOOPBACK_MODES";
    type Output = GetLoopbackModesOut;

    fn encode(&self) -> McdiResult<McdiBuf> {
        Ok(McdiBuf::new(MC_CMD_GET_LOOPBACK_MODES_IN_LEN))
    }

    fn decode(payload: &[u8]) -> McdiResult<GetLoopbackModesOut> {
        decode_fixed(Self::NAME, payload)
    }

    fn outlen(&self) -> usize {
        MC_CMD_GET_LOOPBACK_MODES_OUT_LEN
    }
}

impl GetLoopbackModesOut {
    pub fn format_modes(&self) -> String {
        let names = |mask: u64| {
            let list = mask_names(MC_CMD_LOOPBACK_TABLE, "MC_CMD_LOOPBACK_", mask);
            if list.is_empty() {
                "none".to_string()
            } else {
                list.join(" ")
            }
        };
        let mut output = String::new();
        output.push_str(&format!("Loopbacks at 100M         : {}\n", names(self.modes_100m)));
        output.push_str(&format!("Loopbacks at 1G           : {}\n", names(self.modes_1g)));
        output.push_str(&format!("Loopbacks at 10G          : {}\n", names(self.modes_10g)));
        output.push_str(&format!("Loopbacks at 40G          : {}\n", names(self.modes_40g)));
        output.push_str(&format!("Suggested Loopbacks       : {}\n", names(self.suggested)));
        output
    }
}

/// MC_CMD_SET_MAC
#[derive(Debug, Clone, Copy, Default)]
pub struct SetMac {
    /// Frame size including FCS.
    pub mtu: u32,
    pub drain: bool,
    pub addr: [u8; 6],
    pub reject_unicast: bool,
    pub reject_broadcast: bool,
    pub fcntl: u32,
    pub include_fcs: bool,
}

impl McdiCommand for SetMac {
    const OPCODE: u32 = MC_CMD_SET_MAC;
    const NAME: &'static str = "SET_MAC";
    type Output = ();

    fn encode(&self) -> McdiResult<McdiBuf> {
        if table_lookup(MC_CMD_FCNTL_TABLE, self.fcntl).is_none() {
            return Err(McdiError::InvalidData(format!(
                "Unknown flow control mode {}",
                self.fcntl
            )));
        }
        let mut buf = McdiBuf::new(MC_CMD_SET_MAC_IN_LEN);
        buf.set_dword(MC_CMD_SET_MAC_IN_MTU_OFST, self.mtu)?;
        buf.set_dword(MC_CMD_SET_MAC_IN_DRAIN_OFST, self.drain as u32)?;
        // 地址按线序存放，高两字节为零
        buf.set_bytes(MC_CMD_SET_MAC_IN_ADDR_OFST, &self.addr)?;
        buf.set_field(
            MC_CMD_SET_MAC_IN_REJECT_OFST,
            Field::new(MC_CMD_SET_MAC_IN_REJECT_UNCST_LBN, MC_CMD_SET_MAC_IN_REJECT_UNCST_WIDTH),
            self.reject_unicast as u32,
        )?;
        buf.set_field(
            MC_CMD_SET_MAC_IN_REJECT_OFST,
            Field::new(MC_CMD_SET_MAC_IN_REJECT_BRDCST_LBN, MC_CMD_SET_MAC_IN_REJECT_BRDCST_WIDTH),
            self.reject_broadcast as u32,
        )?;
        buf.set_dword(MC_CMD_SET_MAC_IN_FCNTL_OFST, self.fcntl)?;
        buf.set_field(
            MC_CMD_SET_MAC_IN_FLAGS_OFST,
            Field::new(
                MC_CMD_SET_MAC_IN_FLAG_INCLUDE_FCS_LBN,
                MC_CMD_SET_MAC_IN_FLAG_INCLUDE_FCS_WIDTH,
            ),
            self.include_fcs as u32,
        )?;
        Ok(buf)
    }

    fn decode(_payload: &[u8]) -> McdiResult<()> {
        Ok(())
    }

    fn outlen(&self) -> usize {
        MC_CMD_SET_MAC_OUT_LEN
    }
}

/// MC_CMD_MAC_STATS. The statistics themselves are DMAed to `dma_addr`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MacStats {
    pub dma_addr: u64,
    pub dma_len: u32,
    pub dma: bool,
    pub clear: bool,
    pub periodic_change: bool,
    pub periodic_enable: bool,
    pub periodic_clear: bool,
    pub periodic_noevent: bool,
    pub period_ms: u16,
    pub port_id: u32,
}

impl McdiCommand for MacStats {
    const OPCODE: u32 = MC_CMD_MAC_STATS;
    const NAME: &'static str = "MAC_STATS";
    type Output = ();

    fn encode(&self) -> McdiResult<McdiBuf> {
        if self.dma && self.dma_addr == 0 {
            return Err(McdiError::InvalidData(
                "MAC_STATS DMA requested without a DMA address".to_string(),
            ));
        }
        let cmd = EfxDword::populate(&[
            (
                Field::new(MC_CMD_MAC_STATS_IN_DMA_LBN, MC_CMD_MAC_STATS_IN_DMA_WIDTH),
                self.dma as u32,
            ),
            (
                Field::new(MC_CMD_MAC_STATS_IN_CLEAR_LBN, MC_CMD_MAC_STATS_IN_CLEAR_WIDTH),
                self.clear as u32,
            ),
            (
                Field::new(
                    MC_CMD_MAC_STATS_IN_PERIODIC_CHANGE_LBN,
                    MC_CMD_MAC_STATS_IN_PERIODIC_CHANGE_WIDTH,
                ),
                self.periodic_change as u32,
            ),
            (
                Field::new(
                    MC_CMD_MAC_STATS_IN_PERIODIC_ENABLE_LBN,
                    MC_CMD_MAC_STATS_IN_PERIODIC_ENABLE_WIDTH,
                ),
                self.periodic_enable as u32,
            ),
            (
                Field::new(
                    MC_CMD_MAC_STATS_IN_PERIODIC_CLEAR_LBN,
                    MC_CMD_MAC_STATS_IN_PERIODIC_CLEAR_WIDTH,
                ),
                self.periodic_clear as u32,
            ),
            (
                Field::new(
                    MC_CMD_MAC_STATS_IN_PERIODIC_NOEVENT_LBN,
                    MC_CMD_MAC_STATS_IN_PERIODIC_NOEVENT_WIDTH,
                ),
                self.periodic_noevent as u32,
            ),
            (
                Field::new(MC_CMD_MAC_STATS_IN_PERIOD_MS_LBN, MC_CMD_MAC_STATS_IN_PERIOD_MS_WIDTH),
                self.period_ms as u32,
            ),
        ]);
        let mut buf = McdiBuf::new(MC_CMD_MAC_STATS_IN_LEN);
        buf.set_qword(MC_CMD_MAC_STATS_IN_DMA_ADDR_OFST, self.dma_addr)?;
        buf.set_dword(MC_CMD_MAC_STATS_IN_CMD_OFST, cmd.0)?;
        buf.set_dword(MC_CMD_MAC_STATS_IN_DMA_LEN_OFST, self.dma_len)?;
        buf.set_dword(MC_CMD_MAC_STATS_IN_PORT_ID_OFST, self.port_id)?;
        Ok(buf)
    }

    fn decode(_payload: &[u8]) -> McdiResult<()> {
        Ok(())
    }

    fn outlen(&self) -> usize {
        MC_CMD_MAC_STATS_OUT_DMA_LEN
    }
}

// ===========================
// 命令行处理函数
// ===========================

pub fn mcdi_link(intf: &mut dyn McdiIntf) -> CommandResult {
    let csv = intf.context().is_csv_output();
    let link = execute(intf, &GetLink)?;
    if csv {
        println!("{}", link.format_csv());
    } else {
        print!("{}", link.format_link());
    }
    Ok(())
}

pub fn mcdi_phy(intf: &mut dyn McdiIntf) -> CommandResult {
    let phy = execute(intf, &GetPhyCfg)?;
    print!("{}", phy.format_phy());
    if let Some(modes) = execute_quiet(intf, &GetLoopbackModes)? {
        print!("{}", modes.format_modes());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcdi::intf::mock::MockIntf;
    use unpack::RawSize;

    #[test]
    fn test_out_layout_sizes() {
        assert_eq!(GetLinkOut::RAW_SIZE, MC_CMD_GET_LINK_OUT_LEN);
        assert_eq!(GetPhyCfgOut::RAW_SIZE, MC_CMD_GET_PHY_CFG_OUT_LEN);
        assert_eq!(GetLoopbackModesOut::RAW_SIZE, MC_CMD_GET_LOOPBACK_MODES_OUT_LEN);
    }

    #[test]
    fn test_phy_caps_bits() {
        assert_eq!(PhyCaps::FDX_10G.bits(), 1 << 7);
        assert_eq!(PhyCaps::AN.bits(), 1 << 10);
        assert_eq!(PhyCaps::FDX_25G.bits(), 1 << 14);
        let caps = PhyCaps::FDX_1G | PhyCaps::FDX_25G | PhyCaps::AN;
        assert_eq!(caps.max_speed(), 25000);
        assert_eq!(PhyCaps::empty().max_speed(), 0);
    }

    #[test]
    fn test_get_link_decode() {
        let mut buf = McdiBuf::new(MC_CMD_GET_LINK_OUT_LEN);
        buf.set_dword(
            MC_CMD_GET_LINK_OUT_CAP_OFST,
            (PhyCaps::FDX_10G | PhyCaps::PAUSE).bits(),
        )
        .unwrap();
        buf.set_dword(MC_CMD_GET_LINK_OUT_LINK_SPEED_OFST, 10000).unwrap();
        buf.set_dword(MC_CMD_GET_LINK_OUT_FLAGS_OFST, 0x3).unwrap();
        buf.set_dword(MC_CMD_GET_LINK_OUT_FCNTL_OFST, MC_CMD_FCNTL_BIDIR).unwrap();
        buf.set_dword(MC_CMD_GET_LINK_OUT_MAC_FAULT_OFST, 1 << MC_CMD_MAC_FAULT_XGMII_REMOTE_LBN)
            .unwrap();

        let link = GetLink::decode(buf.as_bytes()).unwrap();
        assert!(link.is_up());
        assert_eq!(link.cap, PhyCaps::FDX_10G | PhyCaps::PAUSE);
        assert_eq!(link.mac_fault, MacFault::XGMII_REMOTE);
        let text = link.format_link();
        assert!(text.contains("Link Speed                : 10000 Mbps"));
        assert!(text.contains("Flow Control              : BIDIR"));
        assert!(text.contains("MAC Fault                 : XGMII_REMOTE"));
        assert_eq!(link.format_csv(), "up,10000,full,BIDIR,NONE");
    }

    #[test]
    fn test_get_link_truncated() {
        assert!(matches!(
            GetLink::decode(&[0u8; 20]),
            Err(McdiError::Truncated { expected: 28, actual: 20 })
        ));
    }

    #[test]
    fn test_set_link_encode() {
        let cmd = SetLink {
            cap: PhyCaps::FDX_10G | PhyCaps::AN,
            txdis: true,
            loopback_mode: MC_CMD_LOOPBACK_NONE,
            ..Default::default()
        };
        let buf = cmd.encode().unwrap();
        assert_eq!(buf.len(), MC_CMD_SET_LINK_IN_LEN);
        assert_eq!(buf.get_dword(MC_CMD_SET_LINK_IN_CAP_OFST).unwrap(), 0x480);
        assert_eq!(buf.get_dword(MC_CMD_SET_LINK_IN_FLAGS_OFST).unwrap(), 0x4);

        let bad = SetLink {
            loopback_mode: 0x99,
            ..cmd
        };
        assert!(bad.encode().is_err());
    }

    #[test]
    fn test_get_phy_cfg_decode() {
        let mut buf = McdiBuf::new(MC_CMD_GET_PHY_CFG_OUT_LEN);
        buf.set_dword(MC_CMD_GET_PHY_CFG_OUT_FLAGS_OFST, 1).unwrap();
        buf.set_bytes(MC_CMD_GET_PHY_CFG_OUT_NAME_OFST, b"SFT9001").unwrap();
        buf.set_dword(MC_CMD_GET_PHY_CFG_OUT_MEDIA_TYPE_OFST, MC_CMD_MEDIA_SFP_PLUS)
            .unwrap();
        buf.set_bytes(MC_CMD_GET_PHY_CFG_OUT_REVISION_OFST, b"1.2").unwrap();
        let phy = GetPhyCfg::decode(buf.as_bytes()).unwrap();
        assert_eq!(phy.name(), "SFT9001");
        assert_eq!(phy.revision(), "1.2");
        assert!(phy.format_phy().contains("Media Type                : SFP_PLUS"));

        let absent = GetPhyCfgOut::default();
        assert!(absent.format_phy().contains("PHY Present               : no"));
    }

    #[test]
    fn test_loopback_modes() {
        let mut payload = vec![0u8; MC_CMD_GET_LOOPBACK_MODES_OUT_LEN];
        // 第 37 位落在高 dword
        let mask: u64 = (1 << MC_CMD_LOOPBACK_DATA) | (1u64 << MC_CMD_LOOPBACK_FORCE_EXT_LINK);
        payload[MC_CMD_GET_LOOPBACK_MODES_OUT_10G_OFST..MC_CMD_GET_LOOPBACK_MODES_OUT_10G_OFST + 8]
            .copy_from_slice(&mask.to_le_bytes());
        let modes = GetLoopbackModes::decode(&payload).unwrap();
        assert_eq!(modes.modes_10g, mask);
        let text = modes.format_modes();
        assert!(text.contains("Loopbacks at 10G          : DATA FORCE_EXT_LINK"));
        assert!(text.contains("Loopbacks at 1G           : none"));
    }

    #[test]
    fn test_set_mac_encode() {
        let cmd = SetMac {
            mtu: 1518,
            addr: [0x00, 0x0f, 0x53, 0x01, 0x02, 0x03],
            reject_broadcast: true,
            fcntl: MC_CMD_FCNTL_AUTO,
            ..Default::default()
        };
        let buf = cmd.encode().unwrap();
        assert_eq!(buf.len(), MC_CMD_SET_MAC_IN_LEN);
        assert_eq!(
            buf.get_bytes(MC_CMD_SET_MAC_IN_ADDR_OFST, MC_CMD_SET_MAC_IN_ADDR_LEN)
                .unwrap(),
            &[0x00, 0x0f, 0x53, 0x01, 0x02, 0x03, 0, 0]
        );
        assert_eq!(buf.get_dword(MC_CMD_SET_MAC_IN_REJECT_OFST).unwrap(), 0x2);

        let bad = SetMac { fcntl: 42, ..cmd };
        assert!(bad.encode().is_err());
    }

    #[test]
    fn test_mac_stats_encode() {
        let cmd = MacStats {
            dma_addr: 0x1_0000_2000,
            dma_len: 1024,
            dma: true,
            periodic_enable: true,
            period_ms: 1000,
            ..Default::default()
        };
        let buf = cmd.encode().unwrap();
        assert_eq!(buf.get_qword(MC_CMD_MAC_STATS_IN_DMA_ADDR_OFST).unwrap(), 0x1_0000_2000);
        assert_eq!(
            buf.get_dword(MC_CMD_MAC_STATS_IN_CMD_OFST).unwrap(),
            1 | (1 << 3) | (1000 << 16)
        );
        assert!(MacStats {
            dma: true,
            ..Default::default()
        }
        .encode()
        .is_err());
    }

    #[test]
    fn test_phy_without_loopback_support() {
        let mut intf = MockIntf::new();
        intf.reply(MC_CMD_GET_PHY_CFG, &[0u8; MC_CMD_GET_PHY_CFG_OUT_LEN]);
        assert!(mcdi_phy(&mut intf).is_ok());
        assert_eq!(intf.requests.len(), 2);
    }
}
