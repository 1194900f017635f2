/*
 * SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
 *
 * SPDX-License-Identifier: GPL-2.0-or-later
 */
//! Printable names for protocol values.
//!
//! Names come from the `(value, name)` tables that `mcdi_table!` emits next
//! to the constants, with the common prefix stripped for display.

use std::collections::HashMap;

use crate::error::{val2str, ValStrMap, ERROR_CODE_VALS};
use crate::mcdi::pcol::*;

pub type NameTable = [(u32, &'static str)];

/// First name registered for `val`.
pub fn table_lookup(table: &NameTable, val: u32) -> Option<&'static str> {
    table.iter().find(|(v, _)| *v == val).map(|(_, name)| *name)
}

/// Reverse lookup, accepting the name with or without `prefix`,
/// case-insensitively.
pub fn table_find(table: &NameTable, prefix: &str, name: &str) -> Option<u32> {
    table
        .iter()
        .find(|(_, n)| {
            n.eq_ignore_ascii_case(name)
                || n
                    .strip_prefix(prefix)
                    .is_some_and(|short| short.eq_ignore_ascii_case(name))
        })
        .map(|(v, _)| *v)
}

fn short_name(table: &NameTable, prefix: &str, val: u32) -> &'static str {
    match table_lookup(table, val) {
        Some(name) => name.strip_prefix(prefix).unwrap_or(name),
        None => "Unknown",
    }
}

/// Names of every bit set in `mask`, where the table values are bit numbers.
pub fn mask_names(table: &NameTable, prefix: &str, mask: u64) -> Vec<&'static str> {
    (0..64u32)
        .filter(|bit| mask & (1u64 << bit) != 0)
        .map(|bit| short_name(table, prefix, bit))
        .collect()
}

pub fn cmd_name(cmd: u32) -> &'static str {
    short_name(MC_CMD_TABLE, "MC_CMD_", cmd)
}

pub fn err_name(code: u32) -> &'static str {
    short_name(MC_CMD_ERR_TABLE, "MC_CMD_ERR_", code)
}

pub fn err_desc(code: u32) -> &'static str {
    val2str(code, &ERROR_CODE_VALS)
}

pub fn event_name(code: u32) -> &'static str {
    short_name(MCDI_EVENT_CODE_TABLE, "MCDI_EVENT_CODE_", code)
}

pub fn sensor_name(sensor: u32) -> &'static str {
    short_name(MC_CMD_SENSOR_TABLE, "MC_CMD_SENSOR_", sensor)
}

pub fn sensor_desc(sensor: u32) -> &'static str {
    SENSOR_INFO_VALS
        .get(&sensor)
        .map(|(desc, _)| *desc)
        .unwrap_or("Unknown sensor")
}

/// Unit of a sensor reading; empty for unknown sensors.
pub fn sensor_unit(sensor: u32) -> &'static str {
    SENSOR_INFO_VALS
        .get(&sensor)
        .map(|(_, unit)| *unit)
        .unwrap_or("")
}

pub fn sensor_state_name(state: u32) -> &'static str {
    short_name(MC_CMD_SENSOR_STATE_TABLE, "MC_CMD_SENSOR_STATE_", state)
}

pub fn loopback_name(mode: u32) -> &'static str {
    short_name(MC_CMD_LOOPBACK_TABLE, "MC_CMD_LOOPBACK_", mode)
}

pub fn nvram_type_name(ty: u32) -> &'static str {
    short_name(MC_CMD_NVRAM_TYPE_TABLE, "MC_CMD_NVRAM_TYPE_", ty)
}

pub fn media_name(media: u32) -> &'static str {
    short_name(MC_CMD_MEDIA_TABLE, "MC_CMD_MEDIA_", media)
}

pub fn fcntl_name(fcntl: u32) -> &'static str {
    short_name(MC_CMD_FCNTL_TABLE, "MC_CMD_FCNTL_", fcntl)
}

pub fn firmware_variant_name(fw: u32) -> &'static str {
    short_name(MC_CMD_FW_TABLE, "MC_CMD_FW_", fw)
}

pub fn assert_flags_name(flags: u32) -> &'static str {
    short_name(MC_CMD_GET_ASSERTS_FLAGS_TABLE, "MC_CMD_GET_ASSERTS_FLAGS_", flags)
}

pub fn workaround_name(ty: u32) -> &'static str {
    short_name(MC_CMD_WORKAROUND_TABLE, "MC_CMD_WORKAROUND_", ty)
}

pub fn filter_op_name(op: u32) -> &'static str {
    short_name(MC_CMD_FILTER_OP_TABLE, "MC_CMD_FILTER_OP_IN_OP_", op)
}

pub fn led_name(state: u32) -> &'static str {
    short_name(MC_CMD_LED_TABLE, "MC_CMD_LED_", state)
}

pub fn bist_result_name(result: u32) -> &'static str {
    short_name(MC_CMD_POLL_BIST_TABLE, "MC_CMD_POLL_BIST_", result)
}

// 传感器描述及单位
lazy_static::lazy_static! {
    pub static ref SENSOR_INFO_VALS: HashMap<u32, (&'static str, &'static str)> = {
        let mut m = HashMap::new();
        m.insert(MC_CMD_SENSOR_CONTROLLER_TEMP, ("Controller temperature", "degC"));
        m.insert(MC_CMD_SENSOR_PHY_COMMON_TEMP, ("Phy common temperature", "degC"));
        m.insert(MC_CMD_SENSOR_CONTROLLER_COOLING, ("Controller cooling", "bool"));
        m.insert(MC_CMD_SENSOR_PHY0_TEMP, ("Phy 0 temperature", "degC"));
        m.insert(MC_CMD_SENSOR_PHY0_COOLING, ("Phy 0 cooling", "bool"));
        m.insert(MC_CMD_SENSOR_PHY1_TEMP, ("Phy 1 temperature", "degC"));
        m.insert(MC_CMD_SENSOR_PHY1_COOLING, ("Phy 1 cooling", "bool"));
        m.insert(MC_CMD_SENSOR_IN_1V0, ("1.0v power", "mV"));
        m.insert(MC_CMD_SENSOR_IN_1V2, ("1.2v power", "mV"));
        m.insert(MC_CMD_SENSOR_IN_1V8, ("1.8v power", "mV"));
        m.insert(MC_CMD_SENSOR_IN_2V5, ("2.5v power", "mV"));
        m.insert(MC_CMD_SENSOR_IN_3V3, ("3.3v power", "mV"));
        m.insert(MC_CMD_SENSOR_IN_12V0, ("12v power", "mV"));
        m.insert(MC_CMD_SENSOR_IN_1V2A, ("1.2v analogue power", "mV"));
        m.insert(MC_CMD_SENSOR_IN_VREF, ("reference voltage", "mV"));
        m.insert(MC_CMD_SENSOR_OUT_VAOE, ("AOE FPGA power", "mV"));
        m.insert(MC_CMD_SENSOR_AOE_TEMP, ("AOE FPGA temperature", "degC"));
        m.insert(MC_CMD_SENSOR_PSU_AOE_TEMP, ("AOE FPGA PSU temperature", "degC"));
        m.insert(MC_CMD_SENSOR_PSU_TEMP, ("AOE PSU temperature", "degC"));
        m.insert(MC_CMD_SENSOR_FAN_0, ("Fan 0 speed", "RPM"));
        m.insert(MC_CMD_SENSOR_FAN_1, ("Fan 1 speed", "RPM"));
        m.insert(MC_CMD_SENSOR_FAN_2, ("Fan 2 speed", "RPM"));
        m.insert(MC_CMD_SENSOR_FAN_3, ("Fan 3 speed", "RPM"));
        m.insert(MC_CMD_SENSOR_FAN_4, ("Fan 4 speed", "RPM"));
        m.insert(MC_CMD_SENSOR_IN_VAOE, ("AOE FPGA input power", "mV"));
        m.insert(MC_CMD_SENSOR_OUT_IAOE, ("AOE FPGA current", "mA"));
        m.insert(MC_CMD_SENSOR_IN_IAOE, ("AOE FPGA input current", "mA"));
        m.insert(MC_CMD_SENSOR_NIC_POWER, ("NIC power consumption", "W"));
        m.insert(MC_CMD_SENSOR_IN_0V9, ("0.9v power voltage", "mV"));
        m.insert(MC_CMD_SENSOR_IN_I0V9, ("0.9v power current", "mA"));
        m.insert(MC_CMD_SENSOR_IN_I1V2, ("1.2v power current", "mA"));
        m.insert(MC_CMD_SENSOR_IN_0V9_ADC, ("0.9v power voltage (at ADC)", "mV"));
        m.insert(MC_CMD_SENSOR_CONTROLLER_2_TEMP, ("Controller temperature 2", "degC"));
        m.insert(MC_CMD_SENSOR_VREG_INTERNAL_TEMP, ("Voltage regulator internal temperature", "degC"));
        m.insert(MC_CMD_SENSOR_VREG_0V9_TEMP, ("0.9V voltage regulator temperature", "degC"));
        m.insert(MC_CMD_SENSOR_VREG_1V2_TEMP, ("1.2V voltage regulator temperature", "degC"));
        m.insert(MC_CMD_SENSOR_CONTROLLER_VPTAT, ("controller internal temperature sensor voltage (internal ADC)", "mV"));
        m.insert(MC_CMD_SENSOR_CONTROLLER_INTERNAL_TEMP, ("controller internal temperature (internal ADC)", "degC"));
        m.insert(MC_CMD_SENSOR_CONTROLLER_VPTAT_EXTADC, ("controller internal temperature sensor voltage (external ADC)", "mV"));
        m.insert(MC_CMD_SENSOR_CONTROLLER_INTERNAL_TEMP_EXTADC, ("controller internal temperature (external ADC)", "degC"));
        m.insert(MC_CMD_SENSOR_AMBIENT_TEMP, ("ambient temperature", "degC"));
        m.insert(MC_CMD_SENSOR_AIRFLOW, ("air flow", "bool"));
        m.insert(MC_CMD_SENSOR_VDD08D_VSS08D_CSR, ("voltage between VSS08D and VSS08D at CSR", "mV"));
        m.insert(MC_CMD_SENSOR_VDD08D_VSS08D_CSR_EXTADC, ("voltage between VSS08D and VSS08D at CSR (external ADC)", "mV"));
        m.insert(MC_CMD_SENSOR_HOTPOINT_TEMP, ("Hotpoint temperature", "degC"));
        m.insert(MC_CMD_SENSOR_PHY_POWER_PORT0, ("Port 0 PHY power switch over-current", "bool"));
        m.insert(MC_CMD_SENSOR_PHY_POWER_PORT1, ("Port 1 PHY power switch over-current", "bool"));
        m.insert(MC_CMD_SENSOR_MUM_VCC, ("Mop-up microcontroller reference voltage", "mV"));
        m.insert(MC_CMD_SENSOR_IN_0V9_A, ("0.9v power phase A voltage", "mV"));
        m.insert(MC_CMD_SENSOR_IN_I0V9_A, ("0.9v power phase A current", "mA"));
        m.insert(MC_CMD_SENSOR_VREG_0V9_A_TEMP, ("0.9V voltage regulator phase A temperature", "degC"));
        m.insert(MC_CMD_SENSOR_IN_0V9_B, ("0.9v power phase B voltage", "mV"));
        m.insert(MC_CMD_SENSOR_IN_I0V9_B, ("0.9v power phase B current", "mA"));
        m.insert(MC_CMD_SENSOR_VREG_0V9_B_TEMP, ("0.9V voltage regulator phase B temperature", "degC"));
        m.insert(MC_CMD_SENSOR_CCOM_AVREG_1V2_SUPPLY, ("CCOM AVREG 1v2 supply (interval ADC)", "mV"));
        m.insert(MC_CMD_SENSOR_CCOM_AVREG_1V2_SUPPLY_EXTADC, ("CCOM AVREG 1v2 supply (external ADC)", "mV"));
        m.insert(MC_CMD_SENSOR_CCOM_AVREG_1V8_SUPPLY, ("CCOM AVREG 1v8 supply (interval ADC)", "mV"));
        m.insert(MC_CMD_SENSOR_CCOM_AVREG_1V8_SUPPLY_EXTADC, ("CCOM AVREG 1v8 supply (external ADC)", "mV"));
        m.insert(MC_CMD_SENSOR_CONTROLLER_RTS, ("CCOM RTS temperature", "degC"));
        m.insert(MC_CMD_SENSOR_CONTROLLER_MASTER_VPTAT, ("controller internal temperature sensor voltage on master core (internal ADC)", "mV"));
        m
    };
}

lazy_static::lazy_static! {
    pub static ref EVENT_LEVEL_VALS: ValStrMap = {
        let mut m = HashMap::new();
        m.insert(MCDI_EVENT_LEVEL_INFO, "info");
        m.insert(MCDI_EVENT_LEVEL_WARN, "warning");
        m.insert(MCDI_EVENT_LEVEL_ERR, "error");
        m.insert(MCDI_EVENT_LEVEL_FATAL, "fatal");
        m
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_strip_prefix() {
        assert_eq!(cmd_name(MC_CMD_GET_VERSION), "GET_VERSION");
        assert_eq!(cmd_name(MC_CMD_V2_EXTN), "V2_EXTN");
        assert_eq!(err_name(MC_CMD_ERR_QUEUE_FULL), "QUEUE_FULL");
        assert_eq!(event_name(MCDI_EVENT_CODE_CMDDONE), "CMDDONE");
        assert_eq!(loopback_name(MC_CMD_LOOPBACK_XGMII), "XGMII");
        assert_eq!(nvram_type_name(MC_CMD_NVRAM_TYPE_EXP_ROM), "EXP_ROM");
        assert_eq!(media_name(MC_CMD_MEDIA_SFP_PLUS), "SFP_PLUS");
        assert_eq!(sensor_state_name(MC_CMD_SENSOR_STATE_FATAL), "FATAL");
    }

    #[test]
    fn test_shared_opcode_reports_first_name() {
        assert_eq!(MC_CMD_ENTITY_RESET, MC_CMD_PORT_RESET);
        assert_eq!(cmd_name(MC_CMD_PORT_RESET), "ENTITY_RESET");
    }

    #[test]
    fn test_unknown_values() {
        assert_eq!(cmd_name(0x7ffe), "Unknown");
        assert_eq!(err_name(0), "Unknown");
        assert_eq!(sensor_unit(0x7f), "");
        assert_eq!(sensor_desc(0x7f), "Unknown sensor");
    }

    #[test]
    fn test_reverse_lookup() {
        assert_eq!(table_find(MC_CMD_TABLE, "MC_CMD_", "get_link"), Some(MC_CMD_GET_LINK));
        assert_eq!(
            table_find(MC_CMD_TABLE, "MC_CMD_", "MC_CMD_GET_LINK"),
            Some(MC_CMD_GET_LINK)
        );
        assert_eq!(table_find(MC_CMD_TABLE, "MC_CMD_", "no_such_cmd"), None);
    }

    #[test]
    fn test_mask_names() {
        let mask = (1u64 << MC_CMD_LOOPBACK_NONE) | (1u64 << MC_CMD_LOOPBACK_XGMII);
        assert_eq!(mask_names(MC_CMD_LOOPBACK_TABLE, "MC_CMD_LOOPBACK_", mask), ["NONE", "XGMII"]);
    }

    #[test]
    fn test_every_sensor_has_a_unit() {
        for (sensor, name) in MC_CMD_SENSOR_TABLE {
            if name.ends_with("_NEXT") {
                assert!(!SENSOR_INFO_VALS.contains_key(sensor));
                continue;
            }
            assert_ne!(sensor_unit(*sensor), "", "{}", name);
        }
        assert_eq!(sensor_unit(MC_CMD_SENSOR_FAN_0), "RPM");
        assert_eq!(sensor_unit(MC_CMD_SENSOR_IN_3V3), "mV");
    }
}
