/*
 * SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
 *
 * SPDX-License-Identifier: GPL-2.0-or-later
 */
mod cli;
use clap::Parser;
use cli::{Cli, MainCommand};
use std::sync::atomic::Ordering;

use sfmcdi::commands::decode::mcdi_decode_main;
use sfmcdi::commands::encode::mcdi_encode_main;
use sfmcdi::commands::func::{mcdi_caps, mcdi_mac_addresses, mcdi_resources};
use sfmcdi::commands::list::{mcdi_errno_main, mcdi_list_main};
use sfmcdi::commands::mc::{
    mcdi_asserts, mcdi_boot_status, mcdi_id_led, mcdi_reboot, mcdi_version, mcdi_workarounds,
};
use sfmcdi::commands::nvram::{mcdi_nvram_main, NvramCommand};
use sfmcdi::commands::port::{mcdi_link, mcdi_phy};
use sfmcdi::commands::raw::mcdi_raw;
use sfmcdi::commands::sensor::mcdi_sensors;
use sfmcdi::commands::CommandResult;
use sfmcdi::error::McdiError;
use sfmcdi::interface::efx::EfxIntf;
use sfmcdi::logging;
use sfmcdi::mcdi::context::{McdiContext, OutputContext};
use sfmcdi::mcdi::intf::McdiIntf;
use sfmcdi::{debug2, debug3, VERBOSE_LEVEL};

fn main() {
    let cli = Cli::parse();
    logging::setup_logger(cli.global.verbose);
    VERBOSE_LEVEL.store(cli.global.verbose as usize, Ordering::Relaxed);

    let output = OutputContext::new(cli.global.csv_output, cli.global.verbose);
    let result = if cli.command.is_offline() {
        run_offline(cli.command, &output)
    } else {
        run_device(cli.command, cli.global.interface.as_deref(), output)
    };

    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run_offline(command: MainCommand, output: &OutputContext) -> CommandResult {
    match command {
        MainCommand::List { subcmd } => mcdi_list_main(subcmd, output),
        MainCommand::Decode { subcmd } => mcdi_decode_main(subcmd, output),
        MainCommand::Errno { code } => mcdi_errno_main(&code),
        MainCommand::Encode { command, args } => mcdi_encode_main(&command, &args),
        other => Err(McdiError::Generic(format!("{:?} needs a device", other))),
    }
}

fn run_device(command: MainCommand, ifname: Option<&str>, output: OutputContext) -> CommandResult {
    let ifname = ifname.ok_or_else(|| {
        McdiError::Interface("this command talks to a NIC, select one with -i IFNAME".to_string())
    })?;

    debug3!("Loading interface: {}", ifname);
    let mut intf = EfxIntf::new(ifname, McdiContext::with_output(output));
    intf.open()?;
    debug2!("Interface {} opened, max request {} bytes", ifname, intf.max_request_len());

    let result = dispatch(command, &mut intf);
    intf.close();
    result
}

fn dispatch(command: MainCommand, intf: &mut dyn McdiIntf) -> CommandResult {
    match command {
        MainCommand::Version => mcdi_version(intf),
        MainCommand::Link => mcdi_link(intf),
        MainCommand::Phy => mcdi_phy(intf),
        MainCommand::Caps => mcdi_caps(intf),
        MainCommand::MacAddresses => mcdi_mac_addresses(intf),
        MainCommand::Asserts { clear } => mcdi_asserts(intf, clear),
        MainCommand::BootStatus => mcdi_boot_status(intf),
        MainCommand::Resources => mcdi_resources(intf),
        MainCommand::Sensors => mcdi_sensors(intf),
        MainCommand::Nvram { subcmd } => {
            mcdi_nvram_main(subcmd.unwrap_or(NvramCommand::List), intf)
        }
        MainCommand::Workarounds => mcdi_workarounds(intf),
        MainCommand::Reboot { after_assertion } => mcdi_reboot(intf, after_assertion),
        MainCommand::IdLed { state } => mcdi_id_led(intf, &state),
        MainCommand::Raw { opcode, data } => mcdi_raw(intf, &opcode, &data),
        MainCommand::List { .. }
        | MainCommand::Decode { .. }
        | MainCommand::Errno { .. }
        | MainCommand::Encode { .. } => Err(McdiError::Generic(
            "offline command routed to a device".to_string(),
        )),
    }
}
