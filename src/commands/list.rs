/*
 * SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
 *
 * SPDX-License-Identifier: GPL-2.0-or-later
 */
//! Offline views of the protocol catalogue. Nothing here needs a device.

use clap::Subcommand;
use nix::errno::Errno;

use crate::commands::CommandResult;
use crate::error::{mcdi_errno, McdiError};
use crate::helper::parse_u32;
use crate::mcdi::context::OutputContext;
use crate::mcdi::pcol::*;
use crate::mcdi::strings::{err_desc, err_name, sensor_desc, sensor_unit, table_find, NameTable};

#[derive(Debug, Clone, Subcommand)]
pub enum ListCommand {
    /// Command opcodes
    Commands,
    /// MC error codes
    Errors,
    /// MC event codes
    Events,
    /// Sensor types
    Sensors,
    /// Loopback modes
    Loopbacks,
    /// NVRAM partition types
    #[command(name = "nvram-types")]
    NvramTypes,
}

/// Rows of `(value, short name)` for a catalogue table.
pub fn table_rows(table: &NameTable, prefix: &str) -> Vec<(u32, &'static str)> {
    table
        .iter()
        .map(|&(val, name)| (val, name.strip_prefix(prefix).unwrap_or(name)))
        .collect()
}

fn print_table(table: &NameTable, prefix: &str, out: &OutputContext) {
    for (val, name) in table_rows(table, prefix) {
        if out.csv {
            println!("0x{:02x},{}", val, name);
        } else {
            println!("0x{:02x}  {}", val, name);
        }
    }
}

fn print_errors(out: &OutputContext) {
    for (code, name) in table_rows(MC_CMD_ERR_TABLE, "MC_CMD_ERR_") {
        if out.csv {
            println!("0x{:04x},{},{},{}", code, name, err_desc(code), mcdi_errno(code));
        } else {
            println!("0x{:04x}  {:<20} {}", code, name, err_desc(code));
        }
    }
}

fn print_sensors(out: &OutputContext) {
    for (sensor, name) in table_rows(MC_CMD_SENSOR_TABLE, "MC_CMD_SENSOR_") {
        if out.csv {
            println!("{},{},{},{}", sensor, name, sensor_desc(sensor), sensor_unit(sensor));
        } else {
            println!(
                "{:>3}  {:<28} {:<36} {}",
                sensor,
                name,
                sensor_desc(sensor),
                sensor_unit(sensor)
            );
        }
    }
}

pub fn mcdi_list_main(subcmd: ListCommand, out: &OutputContext) -> CommandResult {
    match subcmd {
        ListCommand::Commands => print_table(MC_CMD_TABLE, "MC_CMD_", out),
        ListCommand::Errors => print_errors(out),
        ListCommand::Events => print_table(MCDI_EVENT_CODE_TABLE, "MCDI_EVENT_CODE_", out),
        ListCommand::Sensors => print_sensors(out),
        ListCommand::Loopbacks => {
            print_table(MC_CMD_LOOPBACK_TABLE, "MC_CMD_LOOPBACK_", out)
        }
        ListCommand::NvramTypes => {
            print_table(MC_CMD_NVRAM_TYPE_TABLE, "MC_CMD_NVRAM_TYPE_", out)
        }
    }
    Ok(())
}

/// Explanation of one MC error code, given by number or by name.
pub fn describe_errno(input: &str) -> Result<String, McdiError> {
    let code = match table_find(MC_CMD_ERR_TABLE, "MC_CMD_ERR_", input) {
        Some(code) => code,
        None => parse_u32(input)?,
    };
    let errno = mcdi_errno(code);
    Ok(format!(
        "{} (0x{:x}): {}, host errno {} ({:?}: {})",
        err_name(code),
        code,
        err_desc(code),
        errno,
        Errno::from_raw(errno),
        Errno::from_raw(errno).desc()
    ))
}

pub fn mcdi_errno_main(code: &str) -> CommandResult {
    println!("{}", describe_errno(code)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_rows_strip_prefix() {
        let rows = table_rows(MC_CMD_TABLE, "MC_CMD_");
        assert!(rows.contains(&(MC_CMD_GET_VERSION, "GET_VERSION")));
        assert!(rows.iter().all(|(_, name)| !name.starts_with("MC_CMD_")));
    }

    #[test]
    fn test_describe_errno() {
        let text = describe_errno("2").unwrap();
        assert!(text.starts_with("ENOENT (0x2): Non-existent command target"));
        assert!(text.contains("host errno 2 (ENOENT"));

        let by_name = describe_errno("ENOSYS").unwrap();
        assert!(by_name.contains("Operation not implemented"));
        assert!(by_name.contains(&format!("host errno {}", libc::ENOSYS)));

        assert!(describe_errno("bogus").is_err());
    }

    #[test]
    fn test_unknown_errno_maps_to_eproto() {
        let text = describe_errno("0x7777").unwrap();
        assert!(text.starts_with("Unknown (0x7777)"));
        assert!(text.contains("EPROTO"));
    }
}
