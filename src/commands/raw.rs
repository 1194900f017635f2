/*
 * SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
 *
 * SPDX-License-Identifier: GPL-2.0-or-later
 */
use crate::commands::CommandResult;
use crate::error::{McdiError, McdiResult};
use crate::helper::{hexdump, parse_hex, parse_u32};
use crate::mcdi::header::MCDI_CMD_MAX;
use crate::mcdi::intf::{McdiIntf, McdiIntfExt};
use crate::mcdi::pcol::{MC_CMD_TABLE, MCDI_CTL_SDU_LEN_MAX_V2};
use crate::mcdi::strings::{cmd_name, table_find};
use crate::debug1;

/// An arbitrary request. The opcode is only known at run time, so this
/// does not go through `McdiCommand`.
#[derive(Debug, Clone, PartialEq)]
pub struct Raw {
    pub opcode: u32,
    pub payload: Vec<u8>,
}

impl Raw {
    pub fn new(opcode: u32, payload: Vec<u8>) -> McdiResult<Self> {
        if opcode > MCDI_CMD_MAX {
            return command_error!("opcode 0x{:x} exceeds 0x{:x}", opcode, MCDI_CMD_MAX);
        }
        if payload.len() > MCDI_CTL_SDU_LEN_MAX_V2 {
            return command_error!(
                "payload of {} bytes exceeds {}",
                payload.len(),
                MCDI_CTL_SDU_LEN_MAX_V2
            );
        }
        Ok(Raw { opcode, payload })
    }

    /// Send the request and return the response payload untouched.
    pub fn execute(&self, intf: &mut dyn McdiIntf) -> McdiResult<Vec<u8>> {
        debug1!(
            "Raw request {} (0x{:02x}), {} bytes",
            cmd_name(self.opcode),
            self.opcode,
            self.payload.len()
        );
        intf.rpc_checked(self.opcode, &self.payload, MCDI_CTL_SDU_LEN_MAX_V2)
    }
}

/// Opcode by number or by name, with or without `MC_CMD_`.
pub fn parse_opcode(input: &str) -> McdiResult<u32> {
    if let Some(op) = table_find(MC_CMD_TABLE, "MC_CMD_", input) {
        return Ok(op);
    }
    parse_u32(input).map_err(|_| McdiError::InvalidData(format!("Unknown command '{}'", input)))
}

pub fn mcdi_raw(intf: &mut dyn McdiIntf, opcode: &str, data: &[String]) -> CommandResult {
    let opcode = parse_opcode(opcode)?;
    let payload = parse_hex(&data.join(" "))?;
    let raw = Raw::new(opcode, payload)?;
    let out = raw.execute(intf)?;
    if out.is_empty() {
        println!("{} completed, no response data", cmd_name(opcode));
    } else {
        println!("{}", hexdump(&out));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcdi::intf::mock::MockIntf;
    use crate::mcdi::pcol::*;

    #[test]
    fn test_parse_opcode() {
        assert_eq!(parse_opcode("GET_VERSION").unwrap(), MC_CMD_GET_VERSION);
        assert_eq!(parse_opcode("mc_cmd_get_link").unwrap(), MC_CMD_GET_LINK);
        assert_eq!(parse_opcode("0x08").unwrap(), 0x08);
        assert!(parse_opcode("NOT_A_COMMAND").is_err());
    }

    #[test]
    fn test_raw_limits() {
        assert!(Raw::new(0x8000, Vec::new()).is_err());
        assert!(Raw::new(0x7fff, vec![0; MCDI_CTL_SDU_LEN_MAX_V2 + 1]).is_err());
        assert!(Raw::new(MC_CMD_GET_LINK, Vec::new()).is_ok());
    }

    #[test]
    fn test_raw_execute() {
        let mut intf = MockIntf::new();
        intf.reply(MC_CMD_GET_CLOCK, &[0x01, 0x02, 0x03, 0x04]);
        let raw = Raw::new(MC_CMD_GET_CLOCK, vec![0xaa]).unwrap();
        assert_eq!(raw.execute(&mut intf).unwrap(), vec![1, 2, 3, 4]);
        assert_eq!(intf.requests[0], (MC_CMD_GET_CLOCK, vec![0xaa]));
    }

    #[test]
    fn test_raw_error_passthrough() {
        let mut intf = MockIntf::new();
        intf.reply_error(MC_CMD_REBOOT, MC_CMD_ERR_EPERM);
        let err = mcdi_raw(&mut intf, "REBOOT", &[]).unwrap_err();
        assert_eq!(err.mc_code(), Some(MC_CMD_ERR_EPERM));
    }
}
