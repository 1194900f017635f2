/*
 * SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
 *
 * SPDX-License-Identifier: GPL-2.0-or-later
 */
use crate::commands::func::{
    GetCapabilities, GetFunctionInfo, GetMacAddresses, GetPfCount, GetPortModes,
    GetResourceLimits,
};
use crate::commands::mc::{
    GetAsserts, GetBootStatus, GetClock, GetVersion, GetWorkarounds, Reboot, SetIdLed, Workaround,
};
use crate::commands::nvram::{parse_partition, NvramInfo, NvramPartitions, NvramRead, NvramTypes};
use crate::commands::port::{GetLink, GetLoopbackModes, GetPhyCfg};
use crate::commands::raw::{parse_opcode, Raw};
use crate::commands::sensor::SensorInfo;
use crate::commands::{CommandResult, McdiCommand};
use crate::error::{McdiError, McdiResult};
use crate::helper::{buf2str, parse_hex, parse_u32};
use crate::mcdi::header::{needs_v2, McdiPdu};
use crate::mcdi::pcol::*;
use crate::mcdi::strings::workaround_name;
use crate::debug1;

fn typed<C: McdiCommand>(cmd: C) -> McdiResult<Vec<u8>> {
    Ok(cmd.encode()?.into_bytes())
}

fn arg<'a>(args: &'a [String], idx: usize, what: &str) -> McdiResult<&'a str> {
    args.get(idx)
        .map(String::as_str)
        .ok_or_else(|| McdiError::InvalidData(format!("Missing argument: {}", what)))
}

fn has_word(args: &[String], word: &str) -> bool {
    args.iter().any(|a| a.eq_ignore_ascii_case(word))
}

/// Request payload for `opcode`. Commands with a typed encoder take their
/// parameters as words; everything else takes the payload as hex.
pub fn build_payload(opcode: u32, args: &[String]) -> McdiResult<Vec<u8>> {
    match opcode {
        MC_CMD_GET_VERSION => typed(GetVersion {
            ext: !has_word(args, "v0"),
        }),
        MC_CMD_GET_BOOT_STATUS => typed(GetBootStatus),
        MC_CMD_GET_ASSERTS => typed(GetAsserts {
            clear: has_word(args, "clear"),
        }),
        MC_CMD_REBOOT => typed(Reboot {
            after_assertion: has_word(args, "after-assertion"),
        }),
        MC_CMD_SET_ID_LED => typed(SetIdLed::from_name(arg(args, 0, "LED state")?)?),
        MC_CMD_GET_CLOCK => typed(GetClock),
        MC_CMD_GET_WORKAROUNDS => typed(GetWorkarounds),
        MC_CMD_WORKAROUND => {
            let type_ = parse_u32(arg(args, 0, "workaround type")?)?;
            let enabled = parse_u32(arg(args, 1, "enable")?)? != 0;
            debug1!("WORKAROUND {} enabled {}", workaround_name(type_), enabled);
            typed(Workaround { type_, enabled })
        }
        MC_CMD_GET_LINK => typed(GetLink),
        MC_CMD_GET_PHY_CFG => typed(GetPhyCfg),
        MC_CMD_GET_LOOPBACK_MODES => typed(GetLoopbackModes),
        MC_CMD_GET_CAPABILITIES => typed(GetCapabilities),
        MC_CMD_GET_RESOURCE_LIMITS => typed(GetResourceLimits),
        MC_CMD_GET_MAC_ADDRESSES => typed(GetMacAddresses),
        MC_CMD_GET_FUNCTION_INFO => typed(GetFunctionInfo),
        MC_CMD_GET_PF_COUNT => typed(GetPfCount),
        MC_CMD_GET_PORT_MODES => typed(GetPortModes),
        MC_CMD_NVRAM_TYPES => typed(NvramTypes),
        MC_CMD_NVRAM_PARTITIONS => typed(NvramPartitions),
        MC_CMD_NVRAM_INFO => typed(NvramInfo {
            partition: parse_partition(arg(args, 0, "partition")?)?,
        }),
        MC_CMD_NVRAM_READ => typed(NvramRead {
            partition: parse_partition(arg(args, 0, "partition")?)?,
            offset: parse_u32(arg(args, 1, "offset")?)?,
            length: parse_u32(arg(args, 2, "length")?)?,
        }),
        MC_CMD_SENSOR_INFO => {
            let page = match args.first() {
                Some(p) => parse_u32(p)?,
                None => 0,
            };
            typed(SensorInfo { page })
        }
        _ => Ok(Raw::new(opcode, parse_hex(&args.join(" "))?)?.payload),
    }
}

/// The request PDU, header included, with sequence number 0.
pub fn encode_request(command: &str, args: &[String]) -> McdiResult<Vec<u8>> {
    let opcode = parse_opcode(command)?;
    let payload = build_payload(opcode, args)?;
    let pdu = McdiPdu::request(opcode, &payload, 0, needs_v2(opcode, payload.len()))?;
    Ok(pdu.encode())
}

pub fn mcdi_encode_main(command: &str, args: &[String]) -> CommandResult {
    println!("{}", buf2str(&encode_request(command, args)?));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcdi::header::McdiHeader;

    fn args(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn test_encode_typed_request() {
        let bytes = encode_request("NVRAM_INFO", &args("2")).unwrap();
        let pdu = McdiPdu::decode(&bytes).unwrap();
        assert_eq!(pdu.header.command(), MC_CMD_NVRAM_INFO);
        assert!(!pdu.header.response);
        assert_eq!(pdu.payload, 2u32.to_le_bytes().to_vec());
    }

    #[test]
    fn test_encode_raw_payload() {
        let bytes = encode_request("0x01", &args("10 00 00 00")).unwrap();
        let (header, len) = McdiHeader::decode(&bytes).unwrap();
        assert_eq!(len, 4);
        assert_eq!(header.command(), MC_CMD_READ32);
        assert_eq!(&bytes[4..], &[0x10, 0, 0, 0]);
    }

    #[test]
    fn test_encode_large_opcode_uses_v2() {
        let bytes = encode_request("GET_CAPABILITIES", &[]).unwrap();
        let (header, len) = McdiHeader::decode(&bytes).unwrap();
        assert!(header.is_v2());
        assert_eq!(len, 8);
        assert_eq!(header.command(), MC_CMD_GET_CAPABILITIES);
    }

    #[test]
    fn test_encode_missing_argument() {
        let err = encode_request("SET_ID_LED", &[]).unwrap_err();
        assert_eq!(err, McdiError::InvalidData("Missing argument: LED state".to_string()));
        assert!(encode_request("NVRAM_READ", &args("2 0")).is_err());
    }
}
