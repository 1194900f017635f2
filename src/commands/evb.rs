/*
 * SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
 *
 * SPDX-License-Identifier: GPL-2.0-or-later
 */
//! Edge virtual bridging: v-switches, v-ports and port assignment.

use crate::commands::{function_selector, McdiCommand};
use crate::error::McdiResult;
use crate::mcdi::buf::McdiBuf;
use crate::mcdi::dword::{EfxDword, Field};
use crate::mcdi::pcol::*;
use crate::mcdi::strings::{table_lookup, NameTable};

/// Each v-port carries at most two VLAN tags.
pub const MAX_VLAN_TAGS: usize = 2;

fn check_type(what: &str, table: &NameTable, value: u32) -> McdiResult<()> {
    if table_lookup(table, value).is_none() {
        return command_error!("{}: unknown type {}", what, value);
    }
    Ok(())
}

fn empty_response(_payload: &[u8]) -> McdiResult<()> {
    Ok(())
}

/// MC_CMD_VSWITCH_ALLOC
#[derive(Debug, Clone, Copy)]
pub struct VswitchAlloc {
    pub upstream_port_id: u32,
    pub vswitch_type: u32,
    pub auto_port: bool,
    pub num_vlan_tags: u32,
}

impl McdiCommand for VswitchAlloc {
    const OPCODE: u32 = MC_CMD_VSWITCH_ALLOC;
    const NAME: &'static str = "VSWITCH_ALLOC";
    type Output = ();

    fn encode(&self) -> McdiResult<McdiBuf> {
        check_type("VSWITCH_ALLOC", MC_CMD_VSWITCH_TYPE_TABLE, self.vswitch_type)?;
        if self.num_vlan_tags as usize > MAX_VLAN_TAGS {
            return command_error!("VSWITCH_ALLOC: {} VLAN tags", self.num_vlan_tags);
        }
        let flags = EfxDword::populate(&[(
            Field::bit(MC_CMD_VSWITCH_ALLOC_IN_FLAG_AUTO_PORT_LBN),
            self.auto_port as u32,
        )]);
        let mut buf = McdiBuf::new(MC_CMD_VSWITCH_ALLOC_IN_LEN);
        buf.set_dword(MC_CMD_VSWITCH_ALLOC_IN_UPSTREAM_PORT_ID_OFST, self.upstream_port_id)?;
        buf.set_dword(MC_CMD_VSWITCH_ALLOC_IN_TYPE_OFST, self.vswitch_type)?;
        buf.set_dword(MC_CMD_VSWITCH_ALLOC_IN_FLAGS_OFST, flags.0)?;
        buf.set_dword(MC_CMD_VSWITCH_ALLOC_IN_NUM_VLAN_TAGS_OFST, self.num_vlan_tags)?;
        Ok(buf)
    }

    fn decode(payload: &[u8]) -> McdiResult<()> {
        empty_response(payload)
    }

    fn outlen(&self) -> usize {
        MC_CMD_VSWITCH_ALLOC_OUT_LEN
    }
}

/// MC_CMD_VSWITCH_FREE
#[derive(Debug, Clone, Copy)]
pub struct VswitchFree {
    pub upstream_port_id: u32,
}

impl McdiCommand for VswitchFree {
    const OPCODE: u32 = MC_CMD_VSWITCH_FREE;
    const NAME: &'static str = "VSWITCH_FREE";
    type Output = ();

    fn encode(&self) -> McdiResult<McdiBuf> {
        let mut buf = McdiBuf::new(MC_CMD_VSWITCH_FREE_IN_LEN);
        buf.set_dword(MC_CMD_VSWITCH_FREE_IN_UPSTREAM_PORT_ID_OFST, self.upstream_port_id)?;
        Ok(buf)
    }

    fn decode(payload: &[u8]) -> McdiResult<()> {
        empty_response(payload)
    }

    fn outlen(&self) -> usize {
        MC_CMD_VSWITCH_FREE_OUT_LEN
    }
}

/// MC_CMD_VPORT_ALLOC
#[derive(Debug, Clone, Default)]
pub struct VportAlloc {
    pub upstream_port_id: u32,
    pub vport_type: u32,
    pub auto_port: bool,
    pub vlan_restrict: bool,
    /// Outermost tag first.
    pub vlan_tags: Vec<u16>,
}

impl McdiCommand for VportAlloc {
    const OPCODE: u32 = MC_CMD_VPORT_ALLOC;
    const NAME: &'static str = "VPORT_ALLOC";
    /// The new v-port ID.
    type Output = u32;

    fn encode(&self) -> McdiResult<McdiBuf> {
        check_type("VPORT_ALLOC", MC_CMD_VPORT_TYPE_TABLE, self.vport_type)?;
        if self.vlan_tags.len() > MAX_VLAN_TAGS {
            return command_error!("VPORT_ALLOC: {} VLAN tags", self.vlan_tags.len());
        }
        let flags = EfxDword::populate(&[
            (
                Field::bit(MC_CMD_VPORT_ALLOC_IN_FLAG_AUTO_PORT_LBN),
                self.auto_port as u32,
            ),
            (
                Field::bit(MC_CMD_VPORT_ALLOC_IN_FLAG_VLAN_RESTRICT_LBN),
                self.vlan_restrict as u32,
            ),
        ]);
        let tag_fields = [
            Field::new(MC_CMD_VPORT_ALLOC_IN_VLAN_TAG_0_LBN, MC_CMD_VPORT_ALLOC_IN_VLAN_TAG_0_WIDTH),
            Field::new(MC_CMD_VPORT_ALLOC_IN_VLAN_TAG_1_LBN, MC_CMD_VPORT_ALLOC_IN_VLAN_TAG_1_WIDTH),
        ];
        let mut buf = McdiBuf::new(MC_CMD_VPORT_ALLOC_IN_LEN);
        buf.set_dword(MC_CMD_VPORT_ALLOC_IN_UPSTREAM_PORT_ID_OFST, self.upstream_port_id)?;
        buf.set_dword(MC_CMD_VPORT_ALLOC_IN_TYPE_OFST, self.vport_type)?;
        buf.set_dword(MC_CMD_VPORT_ALLOC_IN_FLAGS_OFST, flags.0)?;
        buf.set_dword(MC_CMD_VPORT_ALLOC_IN_NUM_VLAN_TAGS_OFST, self.vlan_tags.len() as u32)?;
        for (field, tag) in tag_fields.iter().zip(&self.vlan_tags) {
            buf.set_field(MC_CMD_VPORT_ALLOC_IN_VLAN_TAGS_OFST, *field, *tag as u32)?;
        }
        Ok(buf)
    }

    fn decode(payload: &[u8]) -> McdiResult<u32> {
        let buf = McdiBuf::from_bytes(payload);
        buf.check_len(MC_CMD_VPORT_ALLOC_OUT_LEN)?;
        buf.get_dword(MC_CMD_VPORT_ALLOC_OUT_VPORT_ID_OFST)
    }

    fn outlen(&self) -> usize {
        MC_CMD_VPORT_ALLOC_OUT_LEN
    }
}

/// MC_CMD_VPORT_FREE
#[derive(Debug, Clone, Copy)]
pub struct VportFree {
    pub vport_id: u32,
}

impl McdiCommand for VportFree {
    const OPCODE: u32 = MC_CMD_VPORT_FREE;
    const NAME: &'static str = "VPORT_FREE";
    type Output = ();

    fn encode(&self) -> McdiResult<McdiBuf> {
        let mut buf = McdiBuf::new(MC_CMD_VPORT_FREE_IN_LEN);
        buf.set_dword(MC_CMD_VPORT_FREE_IN_VPORT_ID_OFST, self.vport_id)?;
        Ok(buf)
    }

    fn decode(payload: &[u8]) -> McdiResult<()> {
        empty_response(payload)
    }

    fn outlen(&self) -> usize {
        MC_CMD_VPORT_FREE_OUT_LEN
    }
}

/// MC_CMD_EVB_PORT_ASSIGN: hand a v-port to a PCIe function.
#[derive(Debug, Clone, Copy)]
pub struct EvbPortAssign {
    pub port_id: u32,
    pub pf: u16,
    pub vf: Option<u16>,
}

impl McdiCommand for EvbPortAssign {
    const OPCODE: u32 = MC_CMD_EVB_PORT_ASSIGN;
    const NAME: &'static str = "EVB_PORT_ASSIGN";
    type Output = ();

    fn encode(&self) -> McdiResult<McdiBuf> {
        let mut buf = McdiBuf::new(MC_CMD_EVB_PORT_ASSIGN_IN_LEN);
        buf.set_dword(MC_CMD_EVB_PORT_ASSIGN_IN_PORT_ID_OFST, self.port_id)?;
        buf.set_dword(
            MC_CMD_EVB_PORT_ASSIGN_IN_FUNCTION_OFST,
            function_selector(self.pf, self.vf),
        )?;
        Ok(buf)
    }

    fn decode(payload: &[u8]) -> McdiResult<()> {
        empty_response(payload)
    }

    fn outlen(&self) -> usize {
        MC_CMD_EVB_PORT_ASSIGN_OUT_LEN
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::execute;
    use crate::mcdi::intf::mock::MockIntf;

    #[test]
    fn test_vswitch_alloc() {
        let req = VswitchAlloc {
            upstream_port_id: 0x100,
            vswitch_type: MC_CMD_VSWITCH_ALLOC_IN_VSWITCH_TYPE_VEB,
            auto_port: true,
            num_vlan_tags: 0,
        }
        .encode()
        .unwrap();
        assert_eq!(req.len(), MC_CMD_VSWITCH_ALLOC_IN_LEN);
        assert_eq!(req.get_dword(MC_CMD_VSWITCH_ALLOC_IN_TYPE_OFST).unwrap(), 2);
        assert_eq!(req.get_dword(MC_CMD_VSWITCH_ALLOC_IN_FLAGS_OFST).unwrap(), 1);

        let bad = VswitchAlloc {
            upstream_port_id: 0,
            vswitch_type: 0,
            auto_port: false,
            num_vlan_tags: 0,
        };
        assert!(bad.encode().is_err());
    }

    #[test]
    fn test_vport_alloc_tags() {
        let alloc = VportAlloc {
            upstream_port_id: 0x100,
            vport_type: MC_CMD_VPORT_ALLOC_IN_VPORT_TYPE_NORMAL,
            vlan_restrict: true,
            vlan_tags: vec![100, 200],
            ..Default::default()
        };
        let req = alloc.encode().unwrap();
        assert_eq!(req.get_dword(MC_CMD_VPORT_ALLOC_IN_FLAGS_OFST).unwrap(), 0x2);
        assert_eq!(req.get_dword(MC_CMD_VPORT_ALLOC_IN_NUM_VLAN_TAGS_OFST).unwrap(), 2);
        assert_eq!(
            req.get_dword(MC_CMD_VPORT_ALLOC_IN_VLAN_TAGS_OFST).unwrap(),
            (200 << 16) | 100
        );

        let mut intf = MockIntf::new();
        intf.reply(MC_CMD_VPORT_ALLOC, &0x2000001u32.to_le_bytes());
        assert_eq!(execute(&mut intf, &alloc).unwrap(), 0x2000001);
    }

    #[test]
    fn test_vport_alloc_rejects_three_tags() {
        let alloc = VportAlloc {
            vport_type: MC_CMD_VPORT_ALLOC_IN_VPORT_TYPE_NORMAL,
            vlan_tags: vec![1, 2, 3],
            ..Default::default()
        };
        assert!(alloc.encode().is_err());
    }

    #[test]
    fn test_port_assign_and_free() {
        let req = EvbPortAssign {
            port_id: 0x2000001,
            pf: 0,
            vf: Some(1),
        }
        .encode()
        .unwrap();
        assert_eq!(req.get_dword(MC_CMD_EVB_PORT_ASSIGN_IN_FUNCTION_OFST).unwrap(), 0x00010000);

        let mut intf = MockIntf::new();
        intf.reply(MC_CMD_VPORT_FREE, &[]);
        execute(&mut intf, &VportFree { vport_id: 7 }).unwrap();
        assert_eq!(intf.requests[0].1, 7u32.to_le_bytes().to_vec());
        intf.reply(MC_CMD_VSWITCH_FREE, &[]);
        execute(&mut intf, &VswitchFree { upstream_port_id: 0x100 }).unwrap();
        assert_eq!(intf.requests.len(), 2);
    }
}
