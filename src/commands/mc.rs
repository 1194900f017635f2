/*
 * SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
 *
 * SPDX-License-Identifier: GPL-2.0-or-later
 */
use bitflags::bitflags;
use unpack::{RawSize, RAWDATA};

use crate::commands::{decode_fixed, execute, execute_quiet, CommandResult, McdiCommand};
use crate::error::{McdiError, McdiResult};
use crate::mcdi::buf::McdiBuf;
use crate::mcdi::dword::Field;
use crate::mcdi::intf::McdiIntf;
use crate::mcdi::pcol::*;
use crate::mcdi::strings::{
    assert_flags_name, led_name, mask_names, table_find, table_lookup, workaround_name,
};
use crate::debug1;

/// MC_CMD_GET_VERSION. `ext` asks for the extended response.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetVersion {
    pub ext: bool,
}

#[derive(Debug, Default, Clone, PartialEq, RAWDATA)]
#[repr(C)]
#[raw_data(endian = "little")]
pub struct GetVersionOut {
    pub firmware: u32,
    pub pcol: u32,
    pub supported_funcs: [u32; 4],
    /// major, minor, build, revision
    pub version: [u16; 4],
}

/// Firmware identity. Old boot ROMs answer with the firmware dword only.
#[derive(Debug, Clone, PartialEq)]
pub struct FirmwareVersion {
    pub firmware: u32,
    pub detail: Option<GetVersionOut>,
    pub extra: Option<[u8; MC_CMD_GET_VERSION_EXT_OUT_EXTRA_LEN]>,
}

impl McdiCommand for GetVersion {
    const OPCODE: u32 = MC_CMD_GET_VERSION;
    const NAME: &'static str = "GET_VERSION";
    type Output = FirmwareVersion;

    fn encode(&self) -> McdiResult<McdiBuf> {
        if self.ext {
            // EXT_FLAGS 目前全部保留
            Ok(McdiBuf::new(MC_CMD_GET_VERSION_EXT_IN_LEN))
        } else {
            Ok(McdiBuf::new(MC_CMD_GET_VERSION_IN_LEN))
        }
    }

    fn decode(payload: &[u8]) -> McdiResult<FirmwareVersion> {
        let buf = McdiBuf::from_bytes(payload);
        buf.check_len(MC_CMD_GET_VERSION_V0_OUT_LEN)?;
        let firmware = buf.get_dword(MC_CMD_GET_VERSION_OUT_FIRMWARE_OFST)?;

        let detail = if payload.len() >= MC_CMD_GET_VERSION_OUT_LEN {
            Some(GetVersionOut::from_bytes(payload)?)
        } else {
            None
        };
        let extra = if payload.len() >= MC_CMD_GET_VERSION_EXT_OUT_LEN {
            let mut extra = [0u8; MC_CMD_GET_VERSION_EXT_OUT_EXTRA_LEN];
            extra.copy_from_slice(buf.get_bytes(
                MC_CMD_GET_VERSION_EXT_OUT_EXTRA_OFST,
                MC_CMD_GET_VERSION_EXT_OUT_EXTRA_LEN,
            )?);
            Some(extra)
        } else {
            None
        };
        Ok(FirmwareVersion {
            firmware,
            detail,
            extra,
        })
    }

    fn outlen(&self) -> usize {
        if self.ext {
            MC_CMD_GET_VERSION_EXT_OUT_LEN
        } else {
            MC_CMD_GET_VERSION_OUT_LEN
        }
    }
}

fn firmware_id_name(firmware: u32) -> &'static str {
    match firmware {
        MC_CMD_GET_VERSION_OUT_FIRMWARE_SIENA_BOOTROM => "Siena boot ROM",
        MC_CMD_GET_VERSION_OUT_FIRMWARE_HUNT_BOOTROM => "Huntington boot ROM",
        MC_CMD_GET_VERSION_OUT_FIRMWARE_MEDFORD2_BOOTROM => "Medford2 boot ROM",
        MC_CMD_GET_VERSION_OUT_FIRMWARE_ANY => "Any",
        _ => "Runtime firmware",
    }
}

impl FirmwareVersion {
    /// "major.minor.build.revision"
    pub fn version_string(&self) -> Option<String> {
        self.detail.as_ref().map(|d| {
            format!(
                "{}.{}.{}.{}",
                d.version[0], d.version[1], d.version[2], d.version[3]
            )
        })
    }

    pub fn format_version(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "Firmware ID               : 0x{:08x} ({})\n",
            self.firmware,
            firmware_id_name(self.firmware)
        ));
        match &self.detail {
            Some(d) => {
                output.push_str(&format!("Protocol Version          : {}\n", d.pcol));
                if let Some(ver) = self.version_string() {
                    output.push_str(&format!("Firmware Version          : {}\n", ver));
                }
                output.push_str(&format!(
                    "Supported Functions       : {}\n",
                    d.supported_funcs
                        .iter()
                        .map(|f| format!("0x{:08x}", f))
                        .collect::<Vec<_>>()
                        .join(" ")
                ));
            }
            None => output.push_str("Firmware Version          : unavailable (boot ROM)\n"),
        }
        if let Some(extra) = &self.extra {
            output.push_str(&format!(
                "Extra Information         : {}\n",
                crate::helper::buf2str(extra)
            ));
        }
        output
    }
}

/// MC_CMD_GET_BOOT_STATUS
#[derive(Debug, Clone, Copy, Default)]
pub struct GetBootStatus;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct BootFlags: u32 {
        const WATCHDOG = 1 << MC_CMD_GET_BOOT_STATUS_OUT_FLAGS_WATCHDOG_LBN;
        const PRIMARY = 1 << MC_CMD_GET_BOOT_STATUS_OUT_FLAGS_PRIMARY_LBN;
        const BACKUP = 1 << MC_CMD_GET_BOOT_STATUS_OUT_FLAGS_BACKUP_LBN;
    }
}

impl_rawsize_for_bitflags!(BootFlags);

#[derive(Debug, Default, Clone, PartialEq, RAWDATA)]
#[repr(C)]
#[raw_data(endian = "little")]
pub struct GetBootStatusOut {
    pub boot_offset: u32,
    pub flags: BootFlags,
}

impl McdiCommand for GetBootStatus {
    const OPCODE: u32 = MC_CMD_GET_BOOT_STATUS;
    const NAME: &'static str = "GET_BOOT_STATUS";
    type Output = GetBootStatusOut;

    fn encode(&self) -> McdiResult<McdiBuf> {
        Ok(McdiBuf::new(MC_CMD_GET_BOOT_STATUS_IN_LEN))
    }

    fn decode(payload: &[u8]) -> McdiResult<GetBootStatusOut> {
        decode_fixed(Self::NAME, payload)
    }

    fn outlen(&self) -> usize {
        MC_CMD_GET_BOOT_STATUS_OUT_LEN
    }
}

impl GetBootStatusOut {
    pub fn format_boot_status(&self) -> String {
        let mut output = String::new();
        if self.boot_offset == MC_CMD_GET_BOOT_STATUS_OUT_BOOT_OFFSET_NULL {
            output.push_str("Boot Offset               : none (not flash booted)\n");
        } else {
            output.push_str(&format!(
                "Boot Offset               : 0x{:08x}\n",
                self.boot_offset
            ));
        }
        let image = if self.flags.contains(BootFlags::BACKUP) {
            "backup"
        } else if self.flags.contains(BootFlags::PRIMARY) {
            "primary"
        } else {
            "unknown"
        };
        output.push_str(&format!("Boot Image                : {}\n", image));
        output.push_str(&format!(
            "Watchdog Reboot           : {}\n",
            if self.flags.contains(BootFlags::WATCHDOG) {
                "yes"
            } else {
                "no"
            }
        ));
        output
    }
}

/// MC_CMD_GET_ASSERTS. With `clear` the record is wiped after reading.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetAsserts {
    pub clear: bool,
}

#[derive(Debug, Default, Clone, PartialEq, RAWDATA)]
#[repr(C)]
#[raw_data(endian = "little")]
pub struct GetAssertsOut {
    pub global_flags: u32,
    pub saved_pc_offs: u32,
    pub gp_regs_offs: [u32; MC_CMD_GET_ASSERTS_OUT_GP_REGS_OFFS_NUM],
    pub thread_offs: u32,
    pub reserved: u32,
}

impl McdiCommand for GetAsserts {
    const OPCODE: u32 = MC_CMD_GET_ASSERTS;
    const NAME: &'static str = "GET_ASSERTS";
    type Output = GetAssertsOut;

    fn encode(&self) -> McdiResult<McdiBuf> {
        let mut buf = McdiBuf::new(MC_CMD_GET_ASSERTS_IN_LEN);
        buf.set_dword(MC_CMD_GET_ASSERTS_IN_CLEAR_OFST, self.clear as u32)?;
        Ok(buf)
    }

    fn decode(payload: &[u8]) -> McdiResult<GetAssertsOut> {
        decode_fixed(Self::NAME, payload)
    }

    fn outlen(&self) -> usize {
        MC_CMD_GET_ASSERTS_OUT_LEN
    }
}

impl GetAssertsOut {
    pub fn has_failure(&self) -> bool {
        self.global_flags != MC_CMD_GET_ASSERTS_FLAGS_NO_FAILS
    }

    pub fn format_asserts(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "Assertion Status          : {}\n",
            assert_flags_name(self.global_flags)
        ));
        if !self.has_failure() {
            return output;
        }
        output.push_str(&format!(
            "Saved PC                  : 0x{:08x}\n",
            self.saved_pc_offs
        ));
        output.push_str(&format!(
            "Thread Offset             : 0x{:08x}\n",
            self.thread_offs
        ));
        // r1..r31, r0 不保存
        for (chunk_idx, chunk) in self.gp_regs_offs.chunks(4).enumerate() {
            let line: Vec<String> = chunk
                .iter()
                .enumerate()
                .map(|(i, v)| format!("r{:02}=0x{:08x}", chunk_idx * 4 + i + 1, v))
                .collect();
            output.push_str(&format!("    {}\n", line.join(" ")));
        }
        output
    }
}

/// MC_CMD_DRV_ATTACH
#[derive(Debug, Clone, Copy, Default)]
pub struct DrvAttach {
    pub attach: bool,
    pub preboot: bool,
    pub firmware_id: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrvAttachOut {
    pub old_state: u32,
    /// Present when the firmware returns the extended response.
    pub func_flags: Option<u32>,
}

impl DrvAttachOut {
    pub fn format_attach(&self) -> String {
        let mut output = format!("Old State                 : 0x{:08x}\n", self.old_state);
        if self.func_flags.is_some() {
            output.push_str(&format!(
                "Function Flags            : {}\n",
                self.func_flag_names().join(" ")
            ));
        }
        output
    }

    pub fn func_flag_names(&self) -> Vec<&'static str> {
        let flags = self.func_flags.unwrap_or(0);
        [
            (MC_CMD_DRV_ATTACH_EXT_OUT_FLAG_PRIMARY, "PRIMARY"),
            (MC_CMD_DRV_ATTACH_EXT_OUT_FLAG_LINKCTRL, "LINKCTRL"),
            (MC_CMD_DRV_ATTACH_EXT_OUT_FLAG_TRUSTED, "TRUSTED"),
            (MC_CMD_DRV_ATTACH_EXT_OUT_FLAG_NO_ACTIVE_PORT, "NO_ACTIVE_PORT"),
        ]
        .iter()
        .filter(|(bit, _)| flags & (1 << bit) != 0)
        .map(|(_, name)| *name)
        .collect()
    }
}

impl McdiCommand for DrvAttach {
    const OPCODE: u32 = MC_CMD_DRV_ATTACH;
    const NAME: &'static str = "DRV_ATTACH";
    type Output = DrvAttachOut;

    fn encode(&self) -> McdiResult<McdiBuf> {
        if table_lookup(MC_CMD_FW_TABLE, self.firmware_id).is_none() {
            return Err(McdiError::InvalidData(format!(
                "Unknown firmware variant 0x{:x}",
                self.firmware_id
            )));
        }
        let mut buf = McdiBuf::new(MC_CMD_DRV_ATTACH_IN_LEN);
        buf.set_field(
            MC_CMD_DRV_ATTACH_IN_NEW_STATE_OFST,
            Field::new(MC_CMD_DRV_ATTACH_IN_ATTACH_LBN, MC_CMD_DRV_ATTACH_IN_ATTACH_WIDTH),
            self.attach as u32,
        )?;
        buf.set_field(
            MC_CMD_DRV_ATTACH_IN_NEW_STATE_OFST,
            Field::new(MC_CMD_DRV_ATTACH_IN_PREBOOT_LBN, MC_CMD_DRV_ATTACH_IN_PREBOOT_WIDTH),
            self.preboot as u32,
        )?;
        buf.set_dword(MC_CMD_DRV_ATTACH_IN_UPDATE_OFST, 1)?;
        buf.set_dword(MC_CMD_DRV_ATTACH_IN_FIRMWARE_ID_OFST, self.firmware_id)?;
        Ok(buf)
    }

    fn decode(payload: &[u8]) -> McdiResult<DrvAttachOut> {
        let buf = McdiBuf::from_bytes(payload);
        buf.check_len(MC_CMD_DRV_ATTACH_OUT_LEN)?;
        let old_state = buf.get_dword(MC_CMD_DRV_ATTACH_OUT_OLD_STATE_OFST)?;
        let func_flags = if payload.len() >= MC_CMD_DRV_ATTACH_EXT_OUT_LEN {
            Some(buf.get_dword(MC_CMD_DRV_ATTACH_EXT_OUT_FUNC_FLAGS_OFST)?)
        } else {
            None
        };
        Ok(DrvAttachOut {
            old_state,
            func_flags,
        })
    }

    fn outlen(&self) -> usize {
        MC_CMD_DRV_ATTACH_EXT_OUT_LEN
    }
}

/// MC_CMD_REBOOT
#[derive(Debug, Clone, Copy, Default)]
pub struct Reboot {
    pub after_assertion: bool,
}

impl McdiCommand for Reboot {
    const OPCODE: u32 = MC_CMD_REBOOT;
    const NAME: &'static str = "REBOOT";
    type Output = ();

    fn encode(&self) -> McdiResult<McdiBuf> {
        let mut buf = McdiBuf::new(MC_CMD_REBOOT_IN_LEN);
        if self.after_assertion {
            buf.set_dword(
                MC_CMD_REBOOT_IN_FLAGS_OFST,
                MC_CMD_REBOOT_FLAGS_AFTER_ASSERTION,
            )?;
        }
        Ok(buf)
    }

    fn decode(_payload: &[u8]) -> McdiResult<()> {
        Ok(())
    }

    fn outlen(&self) -> usize {
        MC_CMD_REBOOT_OUT_LEN
    }
}

/// MC_CMD_ENTITY_RESET
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityReset {
    pub function_resource_reset: bool,
}

impl McdiCommand for EntityReset {
    const OPCODE: u32 = MC_CMD_ENTITY_RESET;
    const NAME: &'static str = "ENTITY_RESET";
    type Output = ();

    fn encode(&self) -> McdiResult<McdiBuf> {
        let mut buf = McdiBuf::new(MC_CMD_ENTITY_RESET_IN_LEN);
        buf.set_field(
            MC_CMD_ENTITY_RESET_IN_FLAG_OFST,
            Field::new(
                MC_CMD_ENTITY_RESET_IN_FUNCTION_RESOURCE_RESET_LBN,
                MC_CMD_ENTITY_RESET_IN_FUNCTION_RESOURCE_RESET_WIDTH,
            ),
            self.function_resource_reset as u32,
        )?;
        Ok(buf)
    }

    fn decode(_payload: &[u8]) -> McdiResult<()> {
        Ok(())
    }

    fn outlen(&self) -> usize {
        MC_CMD_ENTITY_RESET_OUT_LEN
    }
}

/// MC_CMD_SET_ID_LED
#[derive(Debug, Clone, Copy)]
pub struct SetIdLed {
    pub state: u32,
}

impl SetIdLed {
    /// Accepts `on`, `off`, `default` or the full constant name.
    pub fn from_name(name: &str) -> McdiResult<Self> {
        match table_find(MC_CMD_LED_TABLE, "MC_CMD_LED_", name) {
            Some(state) => Ok(SetIdLed { state }),
            None => Err(McdiError::InvalidData(format!(
                "Invalid LED state '{}', expected on, off or default",
                name
            ))),
        }
    }
}

impl McdiCommand for SetIdLed {
    const OPCODE: u32 = MC_CMD_SET_ID_LED;
    const NAME: &'static str = "SET_ID_LED";
    type Output = ();

    fn encode(&self) -> McdiResult<McdiBuf> {
        if table_lookup(MC_CMD_LED_TABLE, self.state).is_none() {
            return Err(McdiError::InvalidData(format!(
                "Invalid LED state {}",
                self.state
            )));
        }
        let mut buf = McdiBuf::new(MC_CMD_SET_ID_LED_IN_LEN);
        buf.set_dword(MC_CMD_SET_ID_LED_IN_STATE_OFST, self.state)?;
        Ok(buf)
    }

    fn decode(_payload: &[u8]) -> McdiResult<()> {
        Ok(())
    }

    fn outlen(&self) -> usize {
        MC_CMD_SET_ID_LED_OUT_LEN
    }
}

/// MC_CMD_GET_CLOCK
#[derive(Debug, Clone, Copy, Default)]
pub struct GetClock;

#[derive(Debug, Default, Clone, PartialEq, RAWDATA)]
#[repr(C)]
#[raw_data(endian = "little")]
pub struct GetClockOut {
    /// MHz
    pub sys_freq: u32,
    pub dpcpu_freq: u32,
}

impl McdiCommand for GetClock {
    const OPCODE: u32 = MC_CMD_GET_CLOCK;
    const NAME: &'static str = "GET_CLOCK";
    type Output = GetClockOut;

    fn encode(&self) -> McdiResult<McdiBuf> {
        Ok(McdiBuf::new(MC_CMD_GET_CLOCK_IN_LEN))
    }

    fn decode(payload: &[u8]) -> McdiResult<GetClockOut> {
        decode_fixed(Self::NAME, payload)
    }

    fn outlen(&self) -> usize {
        MC_CMD_GET_CLOCK_OUT_LEN
    }
}

/// MC_CMD_GET_WORKAROUNDS
#[derive(Debug, Clone, Copy, Default)]
pub struct GetWorkarounds;

#[derive(Debug, Default, Clone, PartialEq, RAWDATA)]
#[repr(C)]
#[raw_data(endian = "little")]
pub struct GetWorkaroundsOut {
    pub implemented: u32,
    pub enabled: u32,
}

impl McdiCommand for GetWorkarounds {
    const OPCODE: u32 = MC_CMD_GET_WORKAROUNDS;
    const NAME: &'static str = "GET_WORKAROUNDS";
    type Output = GetWorkaroundsOut;

    fn encode(&self) -> McdiResult<McdiBuf> {
        Ok(McdiBuf::new(0))
    }

    fn decode(payload: &[u8]) -> McdiResult<GetWorkaroundsOut> {
        decode_fixed(Self::NAME, payload)
    }

    fn outlen(&self) -> usize {
        MC_CMD_GET_WORKAROUNDS_OUT_LEN
    }
}

impl GetWorkaroundsOut {
    pub fn format_workarounds(&self) -> String {
        let mut output = String::new();
        // 掩码第 n 位对应 WORKAROUND 类型 n
        for bit in 1..32u32 {
            if self.implemented & (1 << bit) == 0 {
                continue;
            }
            let state = if self.enabled & (1 << bit) != 0 {
                "enabled"
            } else {
                "disabled"
            };
            output.push_str(&format!("{:<26}: {}\n", workaround_name(bit), state));
        }
        if output.is_empty() {
            output.push_str("No workarounds implemented\n");
        }
        output
    }
}

/// MC_CMD_WORKAROUND
#[derive(Debug, Clone, Copy)]
pub struct Workaround {
    pub type_: u32,
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkaroundOut {
    /// The MC did a function level reset to apply the change.
    pub flr_done: bool,
}

impl McdiCommand for Workaround {
    const OPCODE: u32 = MC_CMD_WORKAROUND;
    const NAME: &'static str = "WORKAROUND";
    type Output = WorkaroundOut;

    fn encode(&self) -> McdiResult<McdiBuf> {
        let mut buf = McdiBuf::new(MC_CMD_WORKAROUND_IN_LEN);
        buf.set_dword(MC_CMD_WORKAROUND_IN_TYPE_OFST, self.type_)?;
        buf.set_dword(MC_CMD_WORKAROUND_IN_ENABLED_OFST, self.enabled as u32)?;
        Ok(buf)
    }

    fn decode(payload: &[u8]) -> McdiResult<WorkaroundOut> {
        if payload.len() < MC_CMD_WORKAROUND_EXT_OUT_LEN {
            return Ok(WorkaroundOut::default());
        }
        let buf = McdiBuf::from_bytes(payload);
        let flr_done = buf.get_field(
            MC_CMD_WORKAROUND_EXT_OUT_FLAGS_OFST,
            Field::new(
                MC_CMD_WORKAROUND_EXT_OUT_FLR_DONE_LBN,
                MC_CMD_WORKAROUND_EXT_OUT_FLR_DONE_WIDTH,
            ),
        )? != 0;
        Ok(WorkaroundOut { flr_done })
    }

    fn outlen(&self) -> usize {
        MC_CMD_WORKAROUND_EXT_OUT_LEN
    }
}

// ===========================
// 命令行处理函数
// ===========================

/// EXT request first. Only an MC rejection falls back to the short form;
/// transport failures are returned as they are.
pub fn get_version(intf: &mut dyn McdiIntf) -> McdiResult<FirmwareVersion> {
    match execute(intf, &GetVersion { ext: true }) {
        Err(e) if e.mc_code().is_some() => {
            debug1!("GET_VERSION EXT rejected: {}", e);
            execute(intf, &GetVersion { ext: false })
        }
        other => other,
    }
}

pub fn mcdi_version(intf: &mut dyn McdiIntf) -> CommandResult {
    let ver = get_version(intf)?;
    print!("{}", ver.format_version());
    if let Some(clock) = execute_quiet(intf, &GetClock)? {
        println!("System Clock              : {} MHz", clock.sys_freq);
        println!("Datapath Clock            : {} MHz", clock.dpcpu_freq);
    }
    Ok(())
}

pub fn mcdi_boot_status(intf: &mut dyn McdiIntf) -> CommandResult {
    let status = execute(intf, &GetBootStatus)?;
    print!("{}", status.format_boot_status());
    Ok(())
}

pub fn mcdi_asserts(intf: &mut dyn McdiIntf, clear: bool) -> CommandResult {
    let asserts = execute(intf, &GetAsserts { clear })?;
    print!("{}", asserts.format_asserts());
    if clear && asserts.has_failure() {
        println!("Assertion record cleared");
    }
    Ok(())
}

pub fn mcdi_workarounds(intf: &mut dyn McdiIntf) -> CommandResult {
    let csv = intf.context().is_csv_output();
    let out = execute(intf, &GetWorkarounds)?;
    if csv {
        println!(
            "{},{}",
            mask_names(MC_CMD_WORKAROUND_TABLE, "MC_CMD_WORKAROUND_", out.implemented as u64)
                .join(";"),
            mask_names(MC_CMD_WORKAROUND_TABLE, "MC_CMD_WORKAROUND_", out.enabled as u64)
                .join(";")
        );
    } else {
        print!("{}", out.format_workarounds());
    }
    Ok(())
}

pub fn mcdi_reboot(intf: &mut dyn McdiIntf, after_assertion: bool) -> CommandResult {
    match execute(intf, &Reboot { after_assertion }) {
        Ok(()) => {}
        // MC 重启后驱动以 EIO 结束请求
        Err(e) if e.mc_code() == Some(MC_CMD_ERR_EIO) => {
            debug1!("REBOOT completed with EIO, MC is restarting");
        }
        Err(e) => return Err(e),
    }
    println!("Sent reboot command to MC");
    Ok(())
}

pub fn mcdi_id_led(intf: &mut dyn McdiIntf, state: &str) -> CommandResult {
    let cmd = SetIdLed::from_name(state)?;
    execute(intf, &cmd)?;
    println!("Identify LED set to {}", led_name(cmd.state));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::flag_names;
    use crate::mcdi::intf::mock::MockIntf;

    fn version_payload() -> Vec<u8> {
        let mut buf = McdiBuf::new(MC_CMD_GET_VERSION_OUT_LEN);
        buf.set_dword(MC_CMD_GET_VERSION_OUT_FIRMWARE_OFST, 0x12345678)
            .unwrap();
        buf.set_dword(MC_CMD_GET_VERSION_OUT_PCOL_OFST, MCDI_PCOL_VERSION)
            .unwrap();
        buf.set_dword(MC_CMD_GET_VERSION_OUT_SUPPORTED_FUNCS_OFST, 0xf)
            .unwrap();
        buf.set_bytes(
            MC_CMD_GET_VERSION_OUT_VERSION_OFST,
            &[6, 0, 2, 0, 3, 0, 0xe8, 0x03],
        )
        .unwrap();
        buf.into_bytes()
    }

    #[test]
    fn test_out_layout_sizes() {
        assert_eq!(GetVersionOut::RAW_SIZE, MC_CMD_GET_VERSION_OUT_LEN);
        assert_eq!(GetBootStatusOut::RAW_SIZE, MC_CMD_GET_BOOT_STATUS_OUT_LEN);
        assert_eq!(GetAssertsOut::RAW_SIZE, MC_CMD_GET_ASSERTS_OUT_LEN);
        assert_eq!(GetClockOut::RAW_SIZE, MC_CMD_GET_CLOCK_OUT_LEN);
        assert_eq!(GetWorkaroundsOut::RAW_SIZE, MC_CMD_GET_WORKAROUNDS_OUT_LEN);
    }

    #[test]
    fn test_get_version_decode() {
        let ver = GetVersion::decode(&version_payload()).unwrap();
        assert_eq!(ver.firmware, 0x12345678);
        assert_eq!(ver.version_string().unwrap(), "6.2.3.1000");
        assert_eq!(ver.detail.as_ref().unwrap().pcol, 2);
        assert!(ver.extra.is_none());
        assert!(ver.format_version().contains("Firmware Version          : 6.2.3.1000"));
    }

    #[test]
    fn test_get_version_v0_response() {
        let ver = GetVersion::decode(&MC_CMD_GET_VERSION_OUT_FIRMWARE_HUNT_BOOTROM.to_le_bytes())
            .unwrap();
        assert!(ver.detail.is_none());
        assert!(ver.format_version().contains("Huntington boot ROM"));
        assert!(matches!(
            GetVersion::decode(&[1, 2]),
            Err(McdiError::Truncated { expected: 4, actual: 2 })
        ));
    }

    #[test]
    fn test_get_version_ext() {
        let mut payload = version_payload();
        payload.extend_from_slice(b"build-host-0001\0");
        let ver = GetVersion::decode(&payload).unwrap();
        assert_eq!(&ver.extra.unwrap()[..5], b"build");
        assert_eq!(
            GetVersion { ext: true }.encode().unwrap().len(),
            MC_CMD_GET_VERSION_EXT_IN_LEN
        );
    }

    #[test]
    fn test_boot_status() {
        let mut payload = MC_CMD_GET_BOOT_STATUS_OUT_BOOT_OFFSET_NULL.to_le_bytes().to_vec();
        payload.extend_from_slice(&0x5u32.to_le_bytes());
        let out = GetBootStatus::decode(&payload).unwrap();
        assert_eq!(out.flags, BootFlags::WATCHDOG | BootFlags::BACKUP);
        let text = out.format_boot_status();
        assert!(text.contains("not flash booted"));
        assert!(text.contains("backup"));
        assert_eq!(flag_names(&out.flags, " "), "WATCHDOG BACKUP");
    }

    #[test]
    fn test_get_asserts() {
        let req = GetAsserts { clear: true }.encode().unwrap();
        assert_eq!(req.as_bytes(), &[1, 0, 0, 0]);

        let mut buf = McdiBuf::new(MC_CMD_GET_ASSERTS_OUT_LEN);
        buf.set_dword(
            MC_CMD_GET_ASSERTS_OUT_GLOBAL_FLAGS_OFST,
            MC_CMD_GET_ASSERTS_FLAGS_THR_FAIL,
        )
        .unwrap();
        buf.set_dword(MC_CMD_GET_ASSERTS_OUT_SAVED_PC_OFFS_OFST, 0x1000)
            .unwrap();
        buf.set_array_dword(MC_CMD_GET_ASSERTS_OUT_GP_REGS_OFFS_OFST, 30, 0xabcd)
            .unwrap();
        let out = GetAsserts::decode(buf.as_bytes()).unwrap();
        assert!(out.has_failure());
        assert_eq!(out.gp_regs_offs[30], 0xabcd);
        let text = out.format_asserts();
        assert!(text.contains("THR_FAIL"));
        assert!(text.contains("r31=0x0000abcd"));

        let none = GetAssertsOut {
            global_flags: MC_CMD_GET_ASSERTS_FLAGS_NO_FAILS,
            ..Default::default()
        };
        assert!(!none.has_failure());
        assert!(!none.format_asserts().contains("Saved PC"));
    }

    #[test]
    fn test_drv_attach() {
        let cmd = DrvAttach {
            attach: true,
            preboot: false,
            firmware_id: MC_CMD_FW_LOW_LATENCY,
        };
        let req = cmd.encode().unwrap();
        assert_eq!(req.get_dword(MC_CMD_DRV_ATTACH_IN_NEW_STATE_OFST).unwrap(), 1);
        assert_eq!(req.get_dword(MC_CMD_DRV_ATTACH_IN_UPDATE_OFST).unwrap(), 1);
        assert_eq!(
            req.get_dword(MC_CMD_DRV_ATTACH_IN_FIRMWARE_ID_OFST).unwrap(),
            MC_CMD_FW_LOW_LATENCY
        );

        let bad = DrvAttach {
            firmware_id: 0x77,
            ..cmd
        };
        assert!(bad.encode().is_err());

        let out = DrvAttach::decode(&[1, 0, 0, 0, 0x3, 0, 0, 0]).unwrap();
        assert_eq!(out.func_flags, Some(3));
        assert_eq!(out.func_flag_names(), vec!["PRIMARY", "LINKCTRL"]);
        let short = DrvAttach::decode(&[0, 0, 0, 0]).unwrap();
        assert_eq!(short.func_flags, None);
        assert!(!short.format_attach().contains("Function Flags"));
    }

    #[test]
    fn test_set_id_led() {
        assert_eq!(SetIdLed::from_name("on").unwrap().state, MC_CMD_LED_ON);
        assert_eq!(SetIdLed::from_name("DEFAULT").unwrap().state, MC_CMD_LED_DEFAULT);
        assert!(SetIdLed::from_name("blink").is_err());
        assert!(SetIdLed { state: 9 }.encode().is_err());
    }

    #[test]
    fn test_workaround_encode_and_flr() {
        let cmd = Workaround {
            type_: MC_CMD_WORKAROUND_BUG26807,
            enabled: true,
        };
        assert_eq!(cmd.encode().unwrap().as_bytes(), &[6, 0, 0, 0, 1, 0, 0, 0]);
        assert!(Workaround::decode(&[1, 0, 0, 0]).unwrap().flr_done);
        assert!(!Workaround::decode(&[]).unwrap().flr_done);
    }

    #[test]
    fn test_format_workarounds() {
        let out = GetWorkaroundsOut {
            implemented: MC_CMD_GET_WORKAROUNDS_OUT_BUG35388 | MC_CMD_GET_WORKAROUNDS_OUT_BUG26807,
            enabled: MC_CMD_GET_WORKAROUNDS_OUT_BUG26807,
        };
        let text = out.format_workarounds();
        assert!(text.contains("BUG35388"));
        assert!(text.contains("BUG26807"));
        assert!(text.lines().any(|l| l.starts_with("BUG26807") && l.ends_with("enabled")));
    }

    #[test]
    fn test_reboot_treats_eio_as_done() {
        let mut intf = MockIntf::new();
        intf.reply_error(MC_CMD_REBOOT, MC_CMD_ERR_EIO);
        assert!(mcdi_reboot(&mut intf, false).is_ok());

        let mut intf = MockIntf::new();
        intf.reply_error(MC_CMD_REBOOT, MC_CMD_ERR_EPERM);
        assert!(mcdi_reboot(&mut intf, true).is_err());
        assert_eq!(
            intf.last_request().unwrap().1,
            MC_CMD_REBOOT_FLAGS_AFTER_ASSERTION.to_le_bytes().to_vec()
        );
    }

    #[test]
    fn test_version_uses_ext_request() {
        let mut intf = MockIntf::new();
        intf.reply(MC_CMD_GET_VERSION, &version_payload());
        intf.reply_error(MC_CMD_GET_CLOCK, MC_CMD_ERR_ENOSYS);
        assert!(mcdi_version(&mut intf).is_ok());
        assert_eq!(intf.requests[0].1.len(), MC_CMD_GET_VERSION_EXT_IN_LEN);
    }

    #[test]
    fn test_version_falls_back_on_mc_error() {
        let mut intf = MockIntf::new();
        intf.reply_error(MC_CMD_GET_VERSION, MC_CMD_ERR_EINVAL)
            .reply(MC_CMD_GET_VERSION, &version_payload());
        assert!(get_version(&mut intf).is_ok());
        assert_eq!(intf.requests.len(), 2);
        assert_eq!(intf.requests[1].1.len(), MC_CMD_GET_VERSION_IN_LEN);
    }

    #[test]
    fn test_version_no_fallback_on_timeout() {
        let mut intf = MockIntf::new();
        intf.fail(MC_CMD_GET_VERSION, McdiError::Timeout);
        assert_eq!(get_version(&mut intf), Err(McdiError::Timeout));
        assert_eq!(intf.requests.len(), 1);
    }
}
