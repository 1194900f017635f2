/*
 * SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
 *
 * SPDX-License-Identifier: GPL-2.0-or-later
 */
use std::net::IpAddr;

use bitflags::bitflags;
use unpack::RAWDATA;

use crate::commands::{decode_fixed, McdiCommand};
use crate::error::McdiResult;
use crate::mcdi::buf::McdiBuf;
use crate::mcdi::pcol::*;
use crate::mcdi::strings::{filter_op_name, table_lookup};

bitflags! {
    /// FILTER_OP MATCH_FIELDS.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct MatchFields: u32 {
        const SRC_IP = 1 << MC_CMD_FILTER_OP_IN_MATCH_SRC_IP_LBN;
        const DST_IP = 1 << MC_CMD_FILTER_OP_IN_MATCH_DST_IP_LBN;
        const SRC_MAC = 1 << MC_CMD_FILTER_OP_IN_MATCH_SRC_MAC_LBN;
        const SRC_PORT = 1 << MC_CMD_FILTER_OP_IN_MATCH_SRC_PORT_LBN;
        const DST_MAC = 1 << MC_CMD_FILTER_OP_IN_MATCH_DST_MAC_LBN;
        const DST_PORT = 1 << MC_CMD_FILTER_OP_IN_MATCH_DST_PORT_LBN;
        const ETHER_TYPE = 1 << MC_CMD_FILTER_OP_IN_MATCH_ETHER_TYPE_LBN;
        const INNER_VLAN = 1 << MC_CMD_FILTER_OP_IN_MATCH_INNER_VLAN_LBN;
        const OUTER_VLAN = 1 << MC_CMD_FILTER_OP_IN_MATCH_OUTER_VLAN_LBN;
        const IP_PROTO = 1 << MC_CMD_FILTER_OP_IN_MATCH_IP_PROTO_LBN;
        const FWDEF0 = 1 << MC_CMD_FILTER_OP_IN_MATCH_FWDEF0_LBN;
        const FWDEF1 = 1 << MC_CMD_FILTER_OP_IN_MATCH_FWDEF1_LBN;
        const UNKNOWN_MCAST_DST = 1 << MC_CMD_FILTER_OP_IN_MATCH_UNKNOWN_MCAST_DST_LBN;
        const UNKNOWN_UCAST_DST = 1 << MC_CMD_FILTER_OP_IN_MATCH_UNKNOWN_UCAST_DST_LBN;
    }
}

/// What a filter matches on. Unset fields are wildcards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSpec {
    pub src_mac: Option<[u8; 6]>,
    pub dst_mac: Option<[u8; 6]>,
    pub src_port: Option<u16>,
    pub dst_port: Option<u16>,
    pub ether_type: Option<u16>,
    pub inner_vlan: Option<u16>,
    pub outer_vlan: Option<u16>,
    pub ip_proto: Option<u8>,
    pub src_ip: Option<IpAddr>,
    pub dst_ip: Option<IpAddr>,
    pub unknown_ucast_dst: bool,
    pub unknown_mcast_dst: bool,
}

impl FilterSpec {
    pub fn match_fields(&self) -> MatchFields {
        let mut fields = MatchFields::empty();
        fields.set(MatchFields::SRC_MAC, self.src_mac.is_some());
        fields.set(MatchFields::DST_MAC, self.dst_mac.is_some());
        fields.set(MatchFields::SRC_PORT, self.src_port.is_some());
        fields.set(MatchFields::DST_PORT, self.dst_port.is_some());
        fields.set(MatchFields::ETHER_TYPE, self.ether_type.is_some());
        fields.set(MatchFields::INNER_VLAN, self.inner_vlan.is_some());
        fields.set(MatchFields::OUTER_VLAN, self.outer_vlan.is_some());
        fields.set(MatchFields::IP_PROTO, self.ip_proto.is_some());
        fields.set(MatchFields::SRC_IP, self.src_ip.is_some());
        fields.set(MatchFields::DST_IP, self.dst_ip.is_some());
        fields.set(MatchFields::UNKNOWN_UCAST_DST, self.unknown_ucast_dst);
        fields.set(MatchFields::UNKNOWN_MCAST_DST, self.unknown_mcast_dst);
        fields
    }
}

// 匹配字段按网络字节序存放；IPv4 地址占 16 字节字段的前 4 字节
fn write_ip(buf: &mut McdiBuf, ofst: usize, ip: &IpAddr) -> McdiResult<()> {
    match ip {
        IpAddr::V4(v4) => buf.set_bytes(ofst, &v4.octets()),
        IpAddr::V6(v6) => buf.set_bytes(ofst, &v6.octets()),
    }
}

/// MC_CMD_FILTER_OP
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOp {
    pub op: u32,
    pub handle: u64,
    pub port_id: u32,
    pub spec: FilterSpec,
    pub rx_dest: u32,
    pub rx_queue: u32,
    pub rx_mode: u32,
    pub rx_context: u32,
    pub tx_domain: u32,
    pub tx_dest: u32,
}

impl FilterOp {
    /// Insert a filter delivering matching packets to `rx_queue`.
    pub fn insert(port_id: u32, spec: FilterSpec, rx_queue: u32) -> Self {
        FilterOp {
            op: MC_CMD_FILTER_OP_IN_OP_INSERT,
            handle: 0,
            port_id,
            spec,
            rx_dest: MC_CMD_FILTER_OP_IN_RX_DEST_HOST,
            rx_queue,
            rx_mode: MC_CMD_FILTER_OP_IN_RX_MODE_SIMPLE,
            rx_context: 0,
            tx_domain: 0,
            tx_dest: MC_CMD_FILTER_OP_IN_TX_DEST_DEFAULT,
        }
    }

    pub fn remove(handle: u64) -> Self {
        FilterOp {
            op: MC_CMD_FILTER_OP_IN_OP_REMOVE,
            handle,
            ..FilterOp::insert(0, FilterSpec::default(), 0)
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, RAWDATA)]
#[repr(C)]
#[raw_data(endian = "little")]
pub struct FilterOpOut {
    pub op: u32,
    pub handle: u64,
}

impl FilterOpOut {
    pub fn handle_valid(&self) -> bool {
        self.handle != u64::MAX
    }
}

impl std::fmt::Display for FilterOpOut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.handle_valid() {
            write!(f, "{} handle 0x{:016x}", filter_op_name(self.op), self.handle)
        } else {
            write!(f, "{} handle invalid", filter_op_name(self.op))
        }
    }
}

impl McdiCommand for FilterOp {
    const OPCODE: u32 = MC_CMD_FILTER_OP;
    const NAME: &'static str = "FILTER_OP";
    type Output = FilterOpOut;

    fn encode(&self) -> McdiResult<McdiBuf> {
        if table_lookup(MC_CMD_FILTER_OP_TABLE, self.op).is_none() {
            return command_error!("FILTER_OP: unknown operation {}", self.op);
        }
        let spec = &self.spec;
        let mut buf = McdiBuf::new(MC_CMD_FILTER_OP_IN_LEN);
        buf.set_dword(MC_CMD_FILTER_OP_IN_OP_OFST, self.op)?;
        buf.set_qword(MC_CMD_FILTER_OP_IN_HANDLE_OFST, self.handle)?;
        buf.set_dword(MC_CMD_FILTER_OP_IN_PORT_ID_OFST, self.port_id)?;
        buf.set_dword(MC_CMD_FILTER_OP_IN_MATCH_FIELDS_OFST, spec.match_fields().bits())?;
        buf.set_dword(MC_CMD_FILTER_OP_IN_RX_DEST_OFST, self.rx_dest)?;
        buf.set_dword(MC_CMD_FILTER_OP_IN_RX_QUEUE_OFST, self.rx_queue)?;
        buf.set_dword(MC_CMD_FILTER_OP_IN_RX_MODE_OFST, self.rx_mode)?;
        buf.set_dword(MC_CMD_FILTER_OP_IN_RX_CONTEXT_OFST, self.rx_context)?;
        buf.set_dword(MC_CMD_FILTER_OP_IN_TX_DOMAIN_OFST, self.tx_domain)?;
        buf.set_dword(MC_CMD_FILTER_OP_IN_TX_DEST_OFST, self.tx_dest)?;

        if let Some(mac) = &spec.src_mac {
            buf.set_bytes(MC_CMD_FILTER_OP_IN_SRC_MAC_OFST, mac)?;
        }
        if let Some(mac) = &spec.dst_mac {
            buf.set_bytes(MC_CMD_FILTER_OP_IN_DST_MAC_OFST, mac)?;
        }
        let be16 = [
            (MC_CMD_FILTER_OP_IN_SRC_PORT_OFST, spec.src_port),
            (MC_CMD_FILTER_OP_IN_DST_PORT_OFST, spec.dst_port),
            (MC_CMD_FILTER_OP_IN_ETHER_TYPE_OFST, spec.ether_type),
            (MC_CMD_FILTER_OP_IN_INNER_VLAN_OFST, spec.inner_vlan),
            (MC_CMD_FILTER_OP_IN_OUTER_VLAN_OFST, spec.outer_vlan),
            (MC_CMD_FILTER_OP_IN_IP_PROTO_OFST, spec.ip_proto.map(u16::from)),
        ];
        for (ofst, value) in be16 {
            if let Some(v) = value {
                buf.set_bytes(ofst, &v.to_be_bytes())?;
            }
        }
        if let Some(ip) = &spec.src_ip {
            write_ip(&mut buf, MC_CMD_FILTER_OP_IN_SRC_IP_OFST, ip)?;
        }
        if let Some(ip) = &spec.dst_ip {
            write_ip(&mut buf, MC_CMD_FILTER_OP_IN_DST_IP_OFST, ip)?;
        }
        Ok(buf)
    }

    fn decode(payload: &[u8]) -> McdiResult<FilterOpOut> {
        decode_fixed(Self::NAME, payload)
    }

    fn outlen(&self) -> usize {
        MC_CMD_FILTER_OP_OUT_LEN
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::execute;
    use crate::mcdi::intf::mock::MockIntf;
    use std::net::{Ipv4Addr, Ipv6Addr};
    use unpack::RawSize;

    fn tcp_spec() -> FilterSpec {
        FilterSpec {
            ether_type: Some(0x0800),
            ip_proto: Some(6),
            dst_ip: Some(IpAddr::V4(Ipv4Addr::new(192, 168, 1, 10))),
            dst_port: Some(80),
            ..Default::default()
        }
    }

    #[test]
    fn test_layout_sizes() {
        assert_eq!(FilterOpOut::RAW_SIZE, MC_CMD_FILTER_OP_OUT_LEN);
        let buf = FilterOp::insert(0, FilterSpec::default(), 0).encode().unwrap();
        assert_eq!(buf.len(), MC_CMD_FILTER_OP_IN_LEN);
    }

    #[test]
    fn test_match_fields() {
        let fields = tcp_spec().match_fields();
        assert_eq!(
            fields,
            MatchFields::ETHER_TYPE | MatchFields::IP_PROTO | MatchFields::DST_IP | MatchFields::DST_PORT
        );
        assert_eq!(fields.bits(), 0x262);
    }

    #[test]
    fn test_network_byte_order() {
        let mut spec = tcp_spec();
        spec.dst_mac = Some([0x00, 0x0f, 0x53, 0x01, 0x02, 0x03]);
        let buf = FilterOp::insert(1, spec, 4).encode().unwrap();
        assert_eq!(buf.get_bytes(MC_CMD_FILTER_OP_IN_DST_PORT_OFST, 2).unwrap(), &[0x00, 0x50]);
        assert_eq!(buf.get_bytes(MC_CMD_FILTER_OP_IN_ETHER_TYPE_OFST, 2).unwrap(), &[0x08, 0x00]);
        assert_eq!(buf.get_bytes(MC_CMD_FILTER_OP_IN_IP_PROTO_OFST, 2).unwrap(), &[0x00, 0x06]);
        assert_eq!(
            buf.get_bytes(MC_CMD_FILTER_OP_IN_DST_IP_OFST, 4).unwrap(),
            &[192, 168, 1, 10]
        );
        assert_eq!(
            buf.get_bytes(MC_CMD_FILTER_OP_IN_DST_MAC_OFST, 6).unwrap(),
            &[0x00, 0x0f, 0x53, 0x01, 0x02, 0x03]
        );
        // 非匹配字段保持小端
        assert_eq!(buf.get_dword(MC_CMD_FILTER_OP_IN_RX_QUEUE_OFST).unwrap(), 4);
        assert_eq!(buf.get_dword(MC_CMD_FILTER_OP_IN_PORT_ID_OFST).unwrap(), 1);
    }

    #[test]
    fn test_ipv6_address() {
        let spec = FilterSpec {
            src_ip: Some(IpAddr::V6(Ipv6Addr::LOCALHOST)),
            ..Default::default()
        };
        let buf = FilterOp::insert(0, spec, 0).encode().unwrap();
        let ip = buf.get_bytes(MC_CMD_FILTER_OP_IN_SRC_IP_OFST, 16).unwrap();
        assert_eq!(ip[15], 1);
        assert!(ip[..15].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_remove_and_handle() {
        let mut intf = MockIntf::new();
        let mut reply = MC_CMD_FILTER_OP_IN_OP_REMOVE.to_le_bytes().to_vec();
        reply.extend_from_slice(&0x1234u64.to_le_bytes());
        intf.reply(MC_CMD_FILTER_OP, &reply);
        let out = execute(&mut intf, &FilterOp::remove(0x1234)).unwrap();
        assert!(out.handle_valid());
        assert_eq!(out.to_string(), "REMOVE handle 0x0000000000001234");

        let sent = McdiBuf::from_bytes(&intf.last_request().unwrap().1);
        assert_eq!(sent.get_qword(MC_CMD_FILTER_OP_IN_HANDLE_OFST).unwrap(), 0x1234);
        assert_eq!(sent.get_dword(MC_CMD_FILTER_OP_IN_MATCH_FIELDS_OFST).unwrap(), 0);
    }

    #[test]
    fn test_invalid_op() {
        let mut op = FilterOp::insert(0, FilterSpec::default(), 0);
        op.op = 9;
        assert!(op.encode().is_err());
    }
}
