/*
 * SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
 *
 * SPDX-License-Identifier: GPL-2.0-or-later
 */
//! Sensor discovery and sensor value decoding.
//!
//! SENSOR_INFO is paged: each page describes 31 sensors in a mask whose
//! top bit says another page follows. Entries are packed in mask order.
//! READ_SENSORS makes the MC DMA one value entry per present sensor to a
//! host buffer, in the same order.

use unpack::{RawSize, RAWDATA};

use crate::commands::{check_count, execute, CommandResult, McdiCommand};
use crate::error::{McdiError, McdiResult};
use crate::mcdi::buf::McdiBuf;
use crate::mcdi::intf::McdiIntf;
use crate::mcdi::pcol::*;
use crate::mcdi::strings::{sensor_desc, sensor_name, sensor_state_name, sensor_unit};
use crate::{debug2, debug4};

/// Bits per page, including the NEXT bit.
const SENSORS_PER_PAGE: u32 = 32;
/// 防止固件错误导致死循环
const MAX_SENSOR_PAGES: u32 = 8;

/// MC_CMD_SENSOR_INFO for one page.
#[derive(Debug, Clone, Copy, Default)]
pub struct SensorInfo {
    pub page: u32,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, RAWDATA)]
#[repr(C)]
#[raw_data(endian = "little")]
pub struct SensorLimits {
    pub min1: u16,
    pub max1: u16,
    pub min2: u16,
    pub max2: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensorInfoPage {
    pub mask: u32,
    /// (bit within the page, limits)
    pub entries: Vec<(u32, SensorLimits)>,
}

impl SensorInfoPage {
    pub fn has_next(&self) -> bool {
        self.mask & (1 << MC_CMD_SENSOR_PAGE0_NEXT_LBN) != 0
    }
}

fn is_next_bit(bit: u32) -> bool {
    bit % SENSORS_PER_PAGE == MC_CMD_SENSOR_PAGE0_NEXT_LBN
}

impl McdiCommand for SensorInfo {
    const OPCODE: u32 = MC_CMD_SENSOR_INFO;
    const NAME: &'static str = "SENSOR_INFO";
    type Output = SensorInfoPage;

    fn encode(&self) -> McdiResult<McdiBuf> {
        // 旧固件只认识不带页号的请求
        if self.page == 0 {
            return Ok(McdiBuf::new(MC_CMD_SENSOR_INFO_IN_LEN));
        }
        let mut buf = McdiBuf::new(MC_CMD_SENSOR_INFO_EXT_IN_LEN);
        buf.set_dword(MC_CMD_SENSOR_INFO_EXT_IN_PAGE_OFST, self.page)?;
        Ok(buf)
    }

    fn decode(payload: &[u8]) -> McdiResult<SensorInfoPage> {
        let buf = McdiBuf::from_bytes(payload);
        buf.check_len(MC_CMD_SENSOR_INFO_OUT_LENMIN)?;
        let mask = buf.get_dword(MC_CMD_SENSOR_INFO_OUT_MASK_OFST)?;

        let bits: Vec<u32> = (0..SENSORS_PER_PAGE)
            .filter(|bit| mask & (1 << bit) != 0 && !is_next_bit(*bit))
            .collect();
        check_count(
            "SENSOR_INFO entries",
            bits.len(),
            0,
            MC_CMD_SENSOR_ENTRY_MAXNUM,
        )?;
        buf.check_len(MC_CMD_SENSOR_INFO_OUT_LEN(bits.len()))?;

        let mut entries = Vec::with_capacity(bits.len());
        for (i, bit) in bits.into_iter().enumerate() {
            let ofst = MC_CMD_SENSOR_ENTRY_OFST + i * MC_CMD_SENSOR_ENTRY_LEN;
            let limits = SensorLimits::from_bytes(buf.get_bytes(ofst, MC_CMD_SENSOR_ENTRY_LEN)?)?;
            entries.push((bit, limits));
        }
        Ok(SensorInfoPage { mask, entries })
    }

    fn outlen(&self) -> usize {
        MC_CMD_SENSOR_INFO_OUT_LENMAX
    }
}

/// One sensor the MC reports, with its global sensor number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorDescriptor {
    pub sensor: u32,
    pub limits: SensorLimits,
}

impl SensorDescriptor {
    pub fn format_row(&self, csv: bool) -> String {
        let l = &self.limits;
        if csv {
            return format!(
                "{},{},{},{},{},{}",
                sensor_name(self.sensor),
                sensor_unit(self.sensor),
                l.min1,
                l.max1,
                l.min2,
                l.max2
            );
        }
        format!(
            "{:<24} | {:<6} | {:<8} | {:<8} | {:<8} | {:<8} | {}",
            sensor_name(self.sensor),
            sensor_unit(self.sensor),
            l.min1,
            l.max1,
            l.min2,
            l.max2,
            sensor_desc(self.sensor)
        )
    }
}

/// Walk every SENSOR_INFO page.
pub fn read_sensor_info(intf: &mut dyn McdiIntf) -> McdiResult<Vec<SensorDescriptor>> {
    let mut sensors = Vec::new();
    for page in 0..MAX_SENSOR_PAGES {
        let info = execute(intf, &SensorInfo { page })?;
        debug2!(
            "SENSOR_INFO page {}: mask 0x{:08x}, {} sensors",
            page,
            info.mask,
            info.entries.len()
        );
        sensors.extend(info.entries.iter().map(|(bit, limits)| SensorDescriptor {
            sensor: page * SENSORS_PER_PAGE + bit,
            limits: *limits,
        }));
        if !info.has_next() {
            return Ok(sensors);
        }
    }
    log::warn!(
        "SENSOR_INFO still reports more pages after {}",
        MAX_SENSOR_PAGES
    );
    Ok(sensors)
}

/// MC_CMD_READ_SENSORS. `length` selects the extended request that bounds
/// the DMA.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadSensors {
    pub dma_addr: u64,
    pub length: Option<u32>,
}

impl McdiCommand for ReadSensors {
    const OPCODE: u32 = MC_CMD_READ_SENSORS;
    const NAME: &'static str = "READ_SENSORS";
    type Output = ();

    fn encode(&self) -> McdiResult<McdiBuf> {
        if self.dma_addr == 0 {
            return Err(McdiError::InvalidData(
                "READ_SENSORS needs a DMA address".to_string(),
            ));
        }
        let mut buf = match self.length {
            Some(length) => {
                let mut buf = McdiBuf::new(MC_CMD_READ_SENSORS_EXT_IN_LEN);
                buf.set_dword(MC_CMD_READ_SENSORS_EXT_IN_LENGTH_OFST, length)?;
                buf
            }
            None => McdiBuf::new(MC_CMD_READ_SENSORS_IN_LEN),
        };
        buf.set_qword(MC_CMD_READ_SENSORS_IN_DMA_ADDR_OFST, self.dma_addr)?;
        Ok(buf)
    }

    fn decode(_payload: &[u8]) -> McdiResult<()> {
        Ok(())
    }

    fn outlen(&self) -> usize {
        MC_CMD_READ_SENSORS_OUT_LEN
    }
}

/// `MC_CMD_SENSOR_VALUE_ENTRY_TYPEDEF` as found in the DMA buffer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, RAWDATA)]
#[repr(C)]
#[raw_data(endian = "little")]
pub struct SensorValueEntry {
    pub value: u16,
    pub state: u8,
    pub sensor_type: u8,
}

impl SensorValueEntry {
    pub fn is_ok(&self) -> bool {
        self.state as u32 == MC_CMD_SENSOR_STATE_OK
    }

    pub fn format_row(&self, csv: bool) -> String {
        let sensor = self.sensor_type as u32;
        let reading = if self.state as u32 == MC_CMD_SENSOR_STATE_NO_READING {
            "na".to_string()
        } else {
            self.value.to_string()
        };
        if csv {
            return format!(
                "{},{},{},{}",
                sensor_name(sensor),
                reading,
                sensor_unit(sensor),
                sensor_state_name(self.state as u32)
            );
        }
        format!(
            "{:<24} | {:<8} | {:<6} | {}",
            sensor_name(sensor),
            reading,
            sensor_unit(sensor),
            sensor_state_name(self.state as u32)
        )
    }
}

/// Decode the value buffer READ_SENSORS DMAs to the host. Each entry
/// carries its sensor type, so no SENSOR_INFO is needed. Trailing bytes
/// shorter than an entry are ignored.
pub fn decode_sensor_values(dma: &[u8]) -> McdiResult<Vec<SensorValueEntry>> {
    if dma.len() % MC_CMD_SENSOR_VALUE_ENTRY_TYPEDEF_LEN != 0 {
        debug4!(
            "sensor buffer of {} bytes has a partial entry",
            dma.len()
        );
    }
    dma.chunks_exact(SensorValueEntry::RAW_SIZE)
        .map(|chunk| SensorValueEntry::from_bytes(chunk).map_err(McdiError::from))
        .collect()
}

/// DMA buffer length needed for `count` sensors.
pub fn sensor_values_len(count: usize) -> usize {
    count * MC_CMD_SENSOR_VALUE_ENTRY_TYPEDEF_LEN
}

// ===========================
// 命令行处理函数
// ===========================

pub fn mcdi_sensors(intf: &mut dyn McdiIntf) -> CommandResult {
    let csv = intf.context().is_csv_output();
    let sensors = read_sensor_info(intf)?;
    if sensors.is_empty() {
        println!("No sensors reported");
        return Ok(());
    }
    if !csv {
        println!(
            "{:<24} | {:<6} | {:<8} | {:<8} | {:<8} | {:<8} | {}",
            "Sensor", "Unit", "Min", "Max", "Min Crit", "Max Crit", "Description"
        );
    }
    for s in &sensors {
        println!("{}", s.format_row(csv));
    }
    debug2!(
        "{} sensors, value buffer needs {} bytes",
        sensors.len(),
        sensor_values_len(sensors.len())
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcdi::intf::mock::MockIntf;

    fn page(mask: u32, limits: &[[u16; 4]]) -> Vec<u8> {
        let mut out = mask.to_le_bytes().to_vec();
        for l in limits {
            for v in l {
                out.extend_from_slice(&v.to_le_bytes());
            }
        }
        out
    }

    #[test]
    fn test_layout_sizes() {
        assert_eq!(SensorLimits::RAW_SIZE, MC_CMD_SENSOR_INFO_ENTRY_TYPEDEF_LEN);
        assert_eq!(SensorValueEntry::RAW_SIZE, MC_CMD_SENSOR_VALUE_ENTRY_TYPEDEF_LEN);
    }

    #[test]
    fn test_sensor_info_encode() {
        assert!(SensorInfo { page: 0 }.encode().unwrap().is_empty());
        let req = SensorInfo { page: 2 }.encode().unwrap();
        assert_eq!(req.as_bytes(), &[2, 0, 0, 0]);
    }

    #[test]
    fn test_sensor_info_decode() {
        let mask = (1 << MC_CMD_SENSOR_CONTROLLER_TEMP) | (1 << MC_CMD_SENSOR_PHY0_TEMP);
        let info = SensorInfo::decode(&page(mask, &[[0, 90, 0, 105], [0, 80, 0, 95]])).unwrap();
        assert!(!info.has_next());
        assert_eq!(info.entries.len(), 2);
        assert_eq!(info.entries[0].0, MC_CMD_SENSOR_CONTROLLER_TEMP);
        assert_eq!(info.entries[1].1.max2, 95);
    }

    #[test]
    fn test_sensor_info_short_page() {
        // 掩码声明两个传感器，只给了一个条目
        let mask = 0x3;
        let err = SensorInfo::decode(&page(mask, &[[1, 2, 3, 4]])).unwrap_err();
        assert_eq!(
            err,
            McdiError::Truncated {
                expected: 20,
                actual: 12
            }
        );
    }

    #[test]
    fn test_read_sensor_info_pages() {
        let mut intf = MockIntf::new();
        let next = 1 << MC_CMD_SENSOR_PAGE0_NEXT_LBN;
        intf.reply(MC_CMD_SENSOR_INFO, &page(next | 0x1, &[[0, 1, 2, 3]]))
            .reply(MC_CMD_SENSOR_INFO, &page(0x4, &[[4, 5, 6, 7]]));
        let sensors = read_sensor_info(&mut intf).unwrap();
        assert_eq!(sensors.len(), 2);
        assert_eq!(sensors[0].sensor, 0);
        assert_eq!(sensors[1].sensor, 34);
        assert_eq!(intf.requests[1].1, vec![1, 0, 0, 0]);
    }

    #[test]
    fn test_read_sensor_info_stops_at_page_limit() {
        let mut intf = MockIntf::new();
        let next = 1 << MC_CMD_SENSOR_PAGE0_NEXT_LBN;
        intf.reply(MC_CMD_SENSOR_INFO, &page(next, &[]));
        let sensors = read_sensor_info(&mut intf).unwrap();
        assert!(sensors.is_empty());
        assert_eq!(intf.requests.len(), MAX_SENSOR_PAGES as usize);
    }

    #[test]
    fn test_read_sensors_encode() {
        let req = ReadSensors {
            dma_addr: 0xfeed_0000,
            length: None,
        }
        .encode()
        .unwrap();
        assert_eq!(req.len(), MC_CMD_READ_SENSORS_IN_LEN);

        let req = ReadSensors {
            dma_addr: 0xfeed_0000,
            length: Some(64),
        }
        .encode()
        .unwrap();
        assert_eq!(req.len(), MC_CMD_READ_SENSORS_EXT_IN_LEN);
        assert_eq!(req.get_dword(MC_CMD_READ_SENSORS_EXT_IN_LENGTH_OFST).unwrap(), 64);
        assert!(ReadSensors::default().encode().is_err());
    }

    #[test]
    fn test_decode_sensor_values() {
        let dma = [
            45, 0, MC_CMD_SENSOR_STATE_OK as u8, MC_CMD_SENSOR_CONTROLLER_TEMP as u8,
            0xe8, 0x03, MC_CMD_SENSOR_STATE_WARNING as u8, MC_CMD_SENSOR_IN_1V0 as u8,
            0, 0, MC_CMD_SENSOR_STATE_NO_READING as u8, MC_CMD_SENSOR_PHY0_TEMP as u8,
            0xff,
        ];
        let values = decode_sensor_values(&dma).unwrap();
        assert_eq!(values.len(), 3);
        assert!(values[0].is_ok());
        assert_eq!(values[1].value, 1000);
        assert!(!values[1].is_ok());
        assert!(values[0].format_row(false).starts_with("CONTROLLER_TEMP"));
        assert!(values[1].format_row(true).ends_with(",WARNING"));
        assert!(values[2].format_row(true).contains(",na,"));
        assert_eq!(sensor_values_len(3), 12);
    }

    #[test]
    fn test_descriptor_row() {
        let d = SensorDescriptor {
            sensor: MC_CMD_SENSOR_CONTROLLER_TEMP,
            limits: SensorLimits {
                min1: 0,
                max1: 90,
                min2: 0,
                max2: 105,
            },
        };
        assert_eq!(d.format_row(true), "CONTROLLER_TEMP,degC,0,90,0,105");
        assert!(d.format_row(false).ends_with("Controller temperature"));
    }
}
