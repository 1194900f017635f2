/*
 * SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
 *
 * SPDX-License-Identifier: GPL-2.0-or-later
 */
//! Offline decoding of captured headers, PDUs, events and OUT payloads.

use clap::Subcommand;

use crate::commands::evb::VportAlloc;
use crate::commands::filter::FilterOp;
use crate::commands::func::{
    GetCapabilities, GetFunctionInfo, GetMacAddresses, GetPfCount, GetPortModes,
    GetResourceLimits, PrivilegeMask,
};
use crate::commands::mc::{
    DrvAttach, GetAsserts, GetBootStatus, GetClock, GetVersion, GetWorkarounds, Workaround,
};
use crate::commands::nvram::{NvramInfo, NvramPartitions, NvramTypes};
use crate::commands::port::{GetLink, GetLoopbackModes, GetPhyCfg};
use crate::commands::queue::{AllocVis, InitEvq};
use crate::commands::raw::parse_opcode;
use crate::commands::sensor::{decode_sensor_values, SensorDescriptor, SensorInfo};
use crate::commands::{flag_names, CommandResult, McdiCommand};
use crate::error::McdiResult;
use crate::helper::{format_mac, hexdump, parse_hex, parse_u64};
use crate::mcdi::context::OutputContext;
use crate::mcdi::event::McdiEvent;
use crate::mcdi::header::{McdiHeader, McdiPdu};
use crate::mcdi::pcol::*;
use crate::mcdi::strings::{cmd_name, nvram_type_name};
use crate::debug2;

#[derive(Debug, Clone, Subcommand)]
pub enum DecodeCommand {
    /// Decode a 4 or 8 byte MCDI header
    Header {
        #[arg(required = true)]
        hex: Vec<String>,
    },
    /// Decode a whole PDU, header and payload
    Pdu {
        #[arg(required = true)]
        hex: Vec<String>,
    },
    /// Decode a 64-bit MC event, as 8 bytes or a 0x-prefixed value
    Event {
        #[arg(required = true)]
        hex: Vec<String>,
    },
    /// Decode the OUT payload of a known command
    Out {
        command: String,
        hex: Vec<String>,
    },
}

fn names(list: impl IntoIterator<Item = &'static str>) -> String {
    let list: Vec<&str> = list.into_iter().collect();
    if list.is_empty() {
        return "none".to_string();
    }
    list.join(", ")
}

/// Render a response payload of `opcode` the way the device command would.
/// Commands without a typed decoder fall back to a hex dump.
pub fn decode_out(opcode: u32, payload: &[u8], csv: bool) -> McdiResult<String> {
    let text = match opcode {
        MC_CMD_GET_VERSION => GetVersion::decode(payload)?.format_version(),
        MC_CMD_GET_BOOT_STATUS => GetBootStatus::decode(payload)?.format_boot_status(),
        MC_CMD_GET_ASSERTS => GetAsserts::decode(payload)?.format_asserts(),
        MC_CMD_DRV_ATTACH => DrvAttach::decode(payload)?.format_attach(),
        MC_CMD_GET_CLOCK => {
            let clk = GetClock::decode(payload)?;
            format!(
                "System Clock              : {} MHz\nDPCPU Clock               : {} MHz",
                clk.sys_freq, clk.dpcpu_freq
            )
        }
        MC_CMD_GET_WORKAROUNDS => GetWorkarounds::decode(payload)?.format_workarounds(),
        MC_CMD_WORKAROUND => {
            let out = Workaround::decode(payload)?;
            format!("FLR Done                  : {}", out.flr_done)
        }
        MC_CMD_GET_LINK => {
            let link = GetLink::decode(payload)?;
            if csv {
                link.format_csv()
            } else {
                link.format_link()
            }
        }
        MC_CMD_GET_PHY_CFG => GetPhyCfg::decode(payload)?.format_phy(),
        MC_CMD_GET_LOOPBACK_MODES => GetLoopbackModes::decode(payload)?.format_modes(),
        MC_CMD_GET_CAPABILITIES => GetCapabilities::decode(payload)?.format_caps(),
        MC_CMD_GET_RESOURCE_LIMITS => GetResourceLimits::decode(payload)?.format_limits(csv),
        MC_CMD_GET_MAC_ADDRESSES => GetMacAddresses::decode(payload)?
            .addresses()
            .iter()
            .map(|mac| format_mac(mac))
            .collect::<Vec<_>>()
            .join("\n"),
        MC_CMD_GET_FUNCTION_INFO => {
            let info = GetFunctionInfo::decode(payload)?;
            match info.vf_index() {
                Some(vf) => format!("PF {} VF {}", info.pf, vf),
                None => format!("PF {}", info.pf),
            }
        }
        MC_CMD_GET_PF_COUNT => format!("PF Count                  : {}", GetPfCount::decode(payload)?),
        MC_CMD_GET_PORT_MODES => {
            let modes = GetPortModes::decode(payload)?;
            format!(
                "Supported Modes           : {:?}\nDefault Mode              : {}\nCurrent Mode              : {}",
                modes.mode_list(),
                modes.default_mode,
                modes.current_mode
            )
        }
        MC_CMD_PRIVILEGE_MASK => {
            format!("Privileges                : {}", flag_names(&PrivilegeMask::decode(payload)?, " "))
        }
        MC_CMD_NVRAM_TYPES => {
            names(NvramTypes::decode(payload)?.type_list().into_iter().map(nvram_type_name))
        }
        MC_CMD_NVRAM_PARTITIONS => {
            names(NvramPartitions::decode(payload)?.into_iter().map(nvram_type_name))
        }
        MC_CMD_NVRAM_INFO => NvramInfo::decode(payload)?.format_info(),
        MC_CMD_SENSOR_INFO => {
            // 单独的 OUT 负载不带页号，按第 0 页解释
            SensorInfo::decode(payload)?
                .entries
                .into_iter()
                .map(|(sensor, limits)| SensorDescriptor { sensor, limits }.format_row(csv))
                .collect::<Vec<_>>()
                .join("\n")
        }
        MC_CMD_READ_SENSORS => decode_sensor_values(payload)?
            .iter()
            .map(|entry| entry.format_row(csv))
            .collect::<Vec<_>>()
            .join("\n"),
        MC_CMD_FILTER_OP => FilterOp::decode(payload)?.to_string(),
        MC_CMD_ALLOC_VIS => {
            let vis = AllocVis::decode(payload)?;
            format!(
                "VI Count                  : {}\nVI Base                   : {}\nVI Shift                  : {}",
                vis.count, vis.base, vis.shift
            )
        }
        MC_CMD_INIT_EVQ => format!("IRQ                       : {}", InitEvq::decode(payload)?),
        MC_CMD_VPORT_ALLOC => format!("VPort ID                  : 0x{:x}", VportAlloc::decode(payload)?),
        _ => {
            debug2!("No decoder for {} (0x{:02x})", cmd_name(opcode), opcode);
            hexdump(payload)
        }
    };
    Ok(text.trim_end().to_string())
}

/// An event given as `0x...` is a 64-bit value; anything else is the
/// 8 bytes in wire order.
pub fn parse_event(hex: &[String]) -> McdiResult<McdiEvent> {
    if let [single] = hex {
        let s = single.trim();
        if s.starts_with("0x") || s.starts_with("0X") {
            return Ok(McdiEvent::from_qword(parse_u64(s)?));
        }
    }
    McdiEvent::from_bytes(&parse_hex(&hex.join(" "))?)
}

pub fn describe_pdu(bytes: &[u8], csv: bool) -> McdiResult<String> {
    let pdu = McdiPdu::decode(bytes)?;
    let mut output = format!("{}\n", pdu.header);
    if let Err(e) = pdu.check_error() {
        output.push_str(&format!("{}\n", e));
        return Ok(output);
    }
    if pdu.payload.is_empty() {
        return Ok(output);
    }
    if pdu.header.response {
        output.push_str(&decode_out(pdu.header.command(), &pdu.payload, csv)?);
        output.push('\n');
    } else {
        output.push_str(&hexdump(&pdu.payload));
        output.push('\n');
    }
    Ok(output)
}

pub fn mcdi_decode_main(subcmd: DecodeCommand, out: &OutputContext) -> CommandResult {
    match subcmd {
        DecodeCommand::Header { hex } => {
            let bytes = parse_hex(&hex.join(" "))?;
            let (header, len) = McdiHeader::decode(&bytes)?;
            if bytes.len() > len {
                debug2!("ignoring {} bytes after the header", bytes.len() - len);
            }
            println!("{}", header);
        }
        DecodeCommand::Pdu { hex } => {
            let bytes = parse_hex(&hex.join(" "))?;
            print!("{}", describe_pdu(&bytes, out.csv)?);
        }
        DecodeCommand::Event { hex } => {
            println!("{}", parse_event(&hex)?);
        }
        DecodeCommand::Out { command, hex } => {
            let opcode = parse_opcode(&command)?;
            let payload = parse_hex(&hex.join(" "))?;
            println!("{}", decode_out(opcode, &payload, out.csv)?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::McdiError;

    fn args(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn test_decode_out_clock() {
        let mut payload = Vec::new();
        payload.extend_from_slice(&800u32.to_le_bytes());
        payload.extend_from_slice(&200u32.to_le_bytes());
        let text = decode_out(MC_CMD_GET_CLOCK, &payload, false).unwrap();
        assert!(text.contains("800 MHz"));
        assert!(text.contains("200 MHz"));
    }

    #[test]
    fn test_decode_out_truncated() {
        let err = decode_out(MC_CMD_GET_CLOCK, &[0x01, 0x02], false).unwrap_err();
        assert!(matches!(err, McdiError::Truncated { .. } | McdiError::InvalidData(_)));
    }

    #[test]
    fn test_decode_out_unknown_command_hexdumps() {
        let text = decode_out(0x7abc, &[0xde, 0xad], false).unwrap();
        assert!(text.starts_with("0000: de ad"));
    }

    #[test]
    fn test_decode_out_read_sensors() {
        // 温度 45，状态 OK，类型 CONTROLLER_TEMP
        let entry = [45u8, 0, MC_CMD_SENSOR_STATE_OK as u8, MC_CMD_SENSOR_CONTROLLER_TEMP as u8];
        let text = decode_out(MC_CMD_READ_SENSORS, &entry, true).unwrap();
        assert!(text.starts_with("CONTROLLER_TEMP,45,"));
    }

    #[test]
    fn test_parse_event_forms() {
        let raw: u64 = 0x0123_4567_89ab_cdef;
        let from_value = parse_event(&args("0x0123456789abcdef")).unwrap();
        let bytes: Vec<String> = raw.to_le_bytes().iter().map(|b| format!("{:02x}", b)).collect();
        let from_bytes = parse_event(&bytes).unwrap();
        assert_eq!(from_value.code, from_bytes.code);
        assert_eq!(from_value.data, from_bytes.data);

        assert!(parse_event(&args("01 02 03")).is_err());
    }

    #[test]
    fn test_describe_pdu_error_response() {
        let req = McdiHeader::request(MC_CMD_GET_LINK, 0, 1, false).unwrap();
        let rsp = McdiHeader::response_to(&req, 4, true).unwrap();
        let mut bytes = rsp.encode();
        bytes.extend_from_slice(&MC_CMD_ERR_EPERM.to_le_bytes());
        let text = describe_pdu(&bytes, false).unwrap();
        assert!(text.contains("GET_LINK failed: EPERM"));
    }

    #[test]
    fn test_describe_pdu_request() {
        let pdu = McdiPdu::request(MC_CMD_READ32, &[0x10, 0, 0, 0], 2, false).unwrap();
        let text = describe_pdu(&pdu.encode(), false).unwrap();
        assert!(text.starts_with("request READ32 (0x01) len 4 seq 2"));
        assert!(text.contains("0000: 10 00 00 00"));
    }
}
