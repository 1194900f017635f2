/*
 * SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
 *
 * SPDX-License-Identifier: GPL-2.0-or-later
 */
use clap::{ArgAction, Args, Parser, Subcommand};

use sfmcdi::commands::decode::DecodeCommand;
use sfmcdi::commands::list::ListCommand;
use sfmcdi::commands::nvram::NvramCommand;

// 主命令结构
#[derive(Parser, Debug)]
#[command(
    name = "sfmcdi",
    version = "0.9.0",
    about = "Solarflare MCDI management utility",
    max_term_width = 100,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: MainCommand,
}

// 全局参数
#[derive(Args, Debug)]
pub struct GlobalArgs {
    #[arg(short = 'h', long, action = ArgAction::Help)]
    pub help: Option<bool>,

    #[arg(short = 'V', long, action = ArgAction::Version)]
    pub version: Option<bool>,

    #[arg(short = 'v', action = ArgAction::Count, help = "Verbose (can use multiple times)")]
    pub verbose: u8,

    #[arg(short = 'c', long)]
    pub csv_output: bool,

    /// Network interface bound to the sfc driver
    #[arg(short = 'i', long)]
    pub interface: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum MainCommand {
    /// 列出协议常量
    List {
        #[command(subcommand)]
        subcmd: ListCommand,
    },

    /// 离线解码
    Decode {
        #[command(subcommand)]
        subcmd: DecodeCommand,
    },

    /// Explain an MC error code
    Errno { code: String },

    /// Print the request PDU for a command
    Encode {
        command: String,
        args: Vec<String>,
    },

    /// Firmware version
    Version,

    /// Link state
    Link,

    /// PHY configuration
    Phy,

    /// Function capabilities
    Caps,

    /// MAC addresses assigned to this function
    #[command(name = "mac-addresses")]
    MacAddresses,

    /// Assertion record
    Asserts {
        #[arg(long)]
        clear: bool,
    },

    /// Boot status
    #[command(name = "boot-status")]
    BootStatus,

    /// Resource limits
    Resources,

    /// Sensor limits
    Sensors,

    /// NVRAM partitions
    Nvram {
        #[command(subcommand)]
        subcmd: Option<NvramCommand>,
    },

    /// Firmware workarounds
    Workarounds,

    /// Reboot the MC
    Reboot {
        #[arg(long)]
        after_assertion: bool,
    },

    /// Identification LED
    #[command(name = "id-led")]
    IdLed { state: String },

    /// Send an arbitrary MCDI request
    Raw { opcode: String, data: Vec<String> },
}

impl MainCommand {
    /// Commands that work on tables and captured data only.
    pub fn is_offline(&self) -> bool {
        matches!(
            self,
            MainCommand::List { .. }
                | MainCommand::Decode { .. }
                | MainCommand::Errno { .. }
                | MainCommand::Encode { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_global_args() {
        let cli = Cli::try_parse_from(["sfmcdi", "-vv", "-c", "-i", "eth2", "link"]).unwrap();
        assert_eq!(cli.global.verbose, 2);
        assert!(cli.global.csv_output);
        assert_eq!(cli.global.interface.as_deref(), Some("eth2"));
        assert!(matches!(cli.command, MainCommand::Link));
        assert!(!cli.command.is_offline());
    }

    #[test]
    fn test_parse_offline_commands() {
        let cli = Cli::try_parse_from(["sfmcdi", "list", "nvram-types"]).unwrap();
        assert!(matches!(
            cli.command,
            MainCommand::List {
                subcmd: ListCommand::NvramTypes
            }
        ));
        assert!(cli.command.is_offline());

        let cli = Cli::try_parse_from(["sfmcdi", "decode", "out", "GET_CLOCK", "20", "03", "00", "00"])
            .unwrap();
        match cli.command {
            MainCommand::Decode {
                subcmd: DecodeCommand::Out { command, hex },
            } => {
                assert_eq!(command, "GET_CLOCK");
                assert_eq!(hex.len(), 4);
            }
            other => panic!("unexpected {:?}", other),
        }

        assert!(Cli::try_parse_from(["sfmcdi", "decode", "header"]).is_err());
    }

    #[test]
    fn test_parse_device_commands() {
        let cli = Cli::try_parse_from(["sfmcdi", "reboot", "--after-assertion"]).unwrap();
        assert!(matches!(
            cli.command,
            MainCommand::Reboot {
                after_assertion: true
            }
        ));

        let cli = Cli::try_parse_from(["sfmcdi", "nvram"]).unwrap();
        assert!(matches!(cli.command, MainCommand::Nvram { subcmd: None }));

        let cli = Cli::try_parse_from(["sfmcdi", "raw", "GET_VERSION", "00000000"]).unwrap();
        match cli.command {
            MainCommand::Raw { opcode, data } => {
                assert_eq!(opcode, "GET_VERSION");
                assert_eq!(data, vec!["00000000".to_string()]);
            }
            other => panic!("unexpected {:?}", other),
        }

        assert!(Cli::try_parse_from(["sfmcdi", "id-led"]).is_err());
    }

    #[test]
    fn test_sensors_help_describes_limits() {
        use clap::CommandFactory;
        let cmd = Cli::command();
        let sensors = cmd.find_subcommand("sensors").unwrap();
        assert_eq!(sensors.get_about().map(|s| s.to_string()), Some("Sensor limits".to_string()));
    }
}
