/*
 * SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
 *
 * SPDX-License-Identifier: GPL-2.0-or-later
 */
use bitflags::bitflags;
use clap::Subcommand;
use unpack::RAWDATA;

use crate::commands::{check_count, decode_fixed, execute, execute_quiet, flag_names, CommandResult, McdiCommand};
use crate::error::{McdiError, McdiResult};
use crate::helper::{hexdump, parse_u32};
use crate::mcdi::buf::McdiBuf;
use crate::mcdi::intf::McdiIntf;
use crate::mcdi::pcol::*;
use crate::mcdi::strings::{nvram_type_name, table_find};
use crate::debug2;

// NVRAM子命令
#[derive(Debug, Clone, Subcommand)]
pub enum NvramCommand {
    /// List partitions with size and flags
    List,
    /// Show details of one partition
    Info {
        /// Partition type, by number or name (e.g. MC_FW)
        partition: String,
    },
    /// Hex dump part of a partition
    Read {
        partition: String,
        #[arg(default_value = "0")]
        offset: String,
        #[arg(default_value = "256")]
        length: String,
    },
}

/// MC_CMD_NVRAM_TYPES
#[derive(Debug, Clone, Copy, Default)]
pub struct NvramTypes;

#[derive(Debug, Default, Clone, PartialEq, RAWDATA)]
#[repr(C)]
#[raw_data(endian = "little")]
pub struct NvramTypesOut {
    pub types: u32,
}

impl NvramTypesOut {
    /// Partition types present, lowest first.
    pub fn type_list(&self) -> Vec<u32> {
        (0..32).filter(|t| self.types & (1 << t) != 0).collect()
    }
}

impl McdiCommand for NvramTypes {
    const OPCODE: u32 = MC_CMD_NVRAM_TYPES;
    const NAME: &'static str = "NVRAM_TYPES";
    type Output = NvramTypesOut;

    fn encode(&self) -> McdiResult<McdiBuf> {
        Ok(McdiBuf::new(MC_CMD_NVRAM_TYPES_IN_LEN))
    }

    fn decode(payload: &[u8]) -> McdiResult<NvramTypesOut> {
        decode_fixed(Self::NAME, payload)
    }

    fn outlen(&self) -> usize {
        MC_CMD_NVRAM_TYPES_OUT_LEN
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct NvramFlags: u32 {
        const PROTECTED = 1 << MC_CMD_NVRAM_INFO_OUT_PROTECTED_LBN;
        const TLV = 1 << MC_CMD_NVRAM_INFO_OUT_TLV_LBN;
        const READ_ONLY_IF_TSA_BOUND = 1 << MC_CMD_NVRAM_INFO_OUT_READ_ONLY_IF_TSA_BOUND_LBN;
        const CRC = 1 << MC_CMD_NVRAM_INFO_OUT_CRC_LBN;
        const READ_ONLY = 1 << MC_CMD_NVRAM_INFO_OUT_READ_ONLY_LBN;
        const CMAC = 1 << MC_CMD_NVRAM_INFO_OUT_CMAC_LBN;
        const A_B = 1 << MC_CMD_NVRAM_INFO_OUT_A_B_LBN;
    }
}

impl_rawsize_for_bitflags!(NvramFlags);

/// MC_CMD_NVRAM_INFO
#[derive(Debug, Clone, Copy)]
pub struct NvramInfo {
    pub partition: u32,
}

#[derive(Debug, Default, Clone, PartialEq, RAWDATA)]
#[repr(C)]
#[raw_data(endian = "little")]
pub struct NvramInfoOut {
    pub partition: u32,
    pub size: u32,
    pub erasesize: u32,
    pub flags: NvramFlags,
    pub physdev: u32,
    pub physaddr: u32,
}

impl McdiCommand for NvramInfo {
    const OPCODE: u32 = MC_CMD_NVRAM_INFO;
    const NAME: &'static str = "NVRAM_INFO";
    type Output = NvramInfoOut;

    fn encode(&self) -> McdiResult<McdiBuf> {
        let mut buf = McdiBuf::new(MC_CMD_NVRAM_INFO_IN_LEN);
        buf.set_dword(MC_CMD_NVRAM_INFO_IN_TYPE_OFST, self.partition)?;
        Ok(buf)
    }

    fn decode(payload: &[u8]) -> McdiResult<NvramInfoOut> {
        decode_fixed(Self::NAME, payload)
    }

    fn outlen(&self) -> usize {
        MC_CMD_NVRAM_INFO_OUT_LEN
    }
}

fn partition_label(partition: u32) -> String {
    match nvram_type_name(partition) {
        "Unknown" => format!("0x{:04x}", partition),
        name => name.to_string(),
    }
}

impl NvramInfoOut {
    pub fn format_info(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "Partition                 : {} ({})\n",
            partition_label(self.partition),
            self.partition
        ));
        output.push_str(&format!("Size                      : {} bytes\n", self.size));
        output.push_str(&format!("Erase Size                : {} bytes\n", self.erasesize));
        output.push_str(&format!(
            "Flags                     : {}\n",
            flag_names(&self.flags, " ")
        ));
        output.push_str(&format!("Physical Device           : {}\n", self.physdev));
        output.push_str(&format!("Physical Address          : 0x{:08x}\n", self.physaddr));
        output
    }

    pub fn format_row(&self, csv: bool) -> String {
        if csv {
            return format!(
                "{},{},{},{}",
                partition_label(self.partition),
                self.size,
                self.erasesize,
                flag_names(&self.flags, ";")
            );
        }
        format!(
            "{:<22} | {:>10} | {:>10} | {}",
            partition_label(self.partition),
            self.size,
            self.erasesize,
            flag_names(&self.flags, " ")
        )
    }
}

/// MC_CMD_NVRAM_PARTITIONS
#[derive(Debug, Clone, Copy, Default)]
pub struct NvramPartitions;

impl McdiCommand for NvramPartitions {
    const OPCODE: u32 = MC_CMD_NVRAM_PARTITIONS;
    const NAME: &'static str = "NVRAM_PARTITIONS";
    type Output = Vec<u32>;

    fn encode(&self) -> McdiResult<McdiBuf> {
        Ok(McdiBuf::new(MC_CMD_NVRAM_PARTITIONS_IN_LEN))
    }

    fn decode(payload: &[u8]) -> McdiResult<Vec<u32>> {
        let buf = McdiBuf::from_bytes(payload);
        buf.check_len(MC_CMD_NVRAM_PARTITIONS_OUT_LENMIN)?;
        let num = buf.get_dword(MC_CMD_NVRAM_PARTITIONS_OUT_NUM_PARTITIONS_OFST)? as usize;
        check_count(
            "NVRAM_PARTITIONS",
            num,
            MC_CMD_NVRAM_PARTITIONS_OUT_TYPE_ID_MINNUM,
            MC_CMD_NVRAM_PARTITIONS_OUT_TYPE_ID_MAXNUM,
        )?;
        buf.check_len(MC_CMD_NVRAM_PARTITIONS_OUT_LEN(num))?;
        (0..num)
            .map(|i| buf.get_array_dword(MC_CMD_NVRAM_PARTITIONS_OUT_TYPE_ID_OFST, i))
            .collect()
    }

    fn outlen(&self) -> usize {
        MC_CMD_NVRAM_PARTITIONS_OUT_LENMAX
    }
}

/// MC_CMD_NVRAM_READ of at most one response worth of data.
#[derive(Debug, Clone, Copy)]
pub struct NvramRead {
    pub partition: u32,
    pub offset: u32,
    pub length: u32,
}

impl McdiCommand for NvramRead {
    const OPCODE: u32 = MC_CMD_NVRAM_READ;
    const NAME: &'static str = "NVRAM_READ";
    type Output = Vec<u8>;

    fn encode(&self) -> McdiResult<McdiBuf> {
        check_count(
            "NVRAM_READ length",
            self.length as usize,
            MC_CMD_NVRAM_READ_OUT_READ_BUFFER_MINNUM,
            MC_CMD_NVRAM_READ_OUT_READ_BUFFER_MAXNUM,
        )?;
        let mut buf = McdiBuf::new(MC_CMD_NVRAM_READ_IN_LEN);
        buf.set_dword(MC_CMD_NVRAM_READ_IN_TYPE_OFST, self.partition)?;
        buf.set_dword(MC_CMD_NVRAM_READ_IN_OFFSET_OFST, self.offset)?;
        buf.set_dword(MC_CMD_NVRAM_READ_IN_LENGTH_OFST, self.length)?;
        Ok(buf)
    }

    fn decode(payload: &[u8]) -> McdiResult<Vec<u8>> {
        McdiBuf::from_bytes(payload).check_len(MC_CMD_NVRAM_READ_OUT_LENMIN)?;
        Ok(payload.to_vec())
    }

    fn outlen(&self) -> usize {
        MC_CMD_NVRAM_READ_OUT_LEN(self.length as usize)
    }
}

/// Read `length` bytes from `offset`, in as many NVRAM_READ requests as
/// it takes.
pub fn nvram_read(
    intf: &mut dyn McdiIntf,
    partition: u32,
    offset: u32,
    length: u32,
) -> McdiResult<Vec<u8>> {
    let mut data = Vec::with_capacity(length as usize);
    let end = offset
        .checked_add(length)
        .ok_or_else(|| McdiError::InvalidData("NVRAM read range overflows".to_string()))?;
    let mut pos = offset;
    while pos < end {
        let chunk = (end - pos).min(MC_CMD_NVRAM_READ_OUT_LENMAX as u32);
        let out = execute(
            intf,
            &NvramRead {
                partition,
                offset: pos,
                length: chunk,
            },
        )?;
        if out.len() < chunk as usize {
            return Err(McdiError::Truncated {
                expected: chunk as usize,
                actual: out.len(),
            });
        }
        data.extend_from_slice(&out[..chunk as usize]);
        pos += chunk;
    }
    debug2!("Read {} bytes from {}", data.len(), partition_label(partition));
    Ok(data)
}

/// Partition type by number or by name (with or without `MC_CMD_NVRAM_TYPE_`).
pub fn parse_partition(input: &str) -> McdiResult<u32> {
    if let Some(ty) = table_find(MC_CMD_NVRAM_TYPE_TABLE, "MC_CMD_NVRAM_TYPE_", input) {
        return Ok(ty);
    }
    parse_u32(input).map_err(|_| {
        McdiError::InvalidData(format!("Unknown NVRAM partition '{}'", input))
    })
}

/// Partitions the MC knows about, falling back to the legacy type mask.
pub fn list_partitions(intf: &mut dyn McdiIntf) -> McdiResult<Vec<u32>> {
    if let Some(parts) = execute_quiet(intf, &NvramPartitions)? {
        return Ok(parts);
    }
    debug2!("NVRAM_PARTITIONS unsupported, using NVRAM_TYPES");
    Ok(execute(intf, &NvramTypes)?.type_list())
}

// ===========================
// 命令行处理函数
// ===========================

pub fn mcdi_nvram_main(subcmd: NvramCommand, intf: &mut dyn McdiIntf) -> CommandResult {
    match subcmd {
        NvramCommand::List => {
            let csv = intf.context().is_csv_output();
            let parts = list_partitions(intf)?;
            if !csv {
                println!(
                    "{:<22} | {:>10} | {:>10} | {}",
                    "Partition", "Size", "Erase Size", "Flags"
                );
            }
            for partition in parts {
                match execute(intf, &NvramInfo { partition }) {
                    Ok(info) => println!("{}", info.format_row(csv)),
                    // 受保护的分区可能拒绝查询，继续列出其余分区
                    Err(e) => log::warn!("{}: {}", partition_label(partition), e),
                }
            }
            Ok(())
        }
        NvramCommand::Info { partition } => {
            let partition = parse_partition(&partition)?;
            let info = execute(intf, &NvramInfo { partition })?;
            print!("{}", info.format_info());
            Ok(())
        }
        NvramCommand::Read {
            partition,
            offset,
            length,
        } => {
            let partition = parse_partition(&partition)?;
            let offset = parse_u32(&offset)?;
            let length = parse_u32(&length)?;
            let data = nvram_read(intf, partition, offset, length)?;
            println!("{}", hexdump(&data));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcdi::intf::mock::MockIntf;
    use unpack::RawSize;

    #[test]
    fn test_layout_sizes() {
        assert_eq!(NvramTypesOut::RAW_SIZE, MC_CMD_NVRAM_TYPES_OUT_LEN);
        assert_eq!(NvramInfoOut::RAW_SIZE, MC_CMD_NVRAM_INFO_OUT_LEN);
    }

    #[test]
    fn test_type_list() {
        let out = NvramTypes::decode(&0x0000_0086u32.to_le_bytes()).unwrap();
        assert_eq!(
            out.type_list(),
            vec![
                MC_CMD_NVRAM_TYPE_MC_FW,
                MC_CMD_NVRAM_TYPE_MC_FW_BACKUP,
                MC_CMD_NVRAM_TYPE_EXP_ROM
            ]
        );
    }

    #[test]
    fn test_nvram_info_decode() {
        let mut buf = McdiBuf::new(MC_CMD_NVRAM_INFO_OUT_LEN);
        buf.set_dword(MC_CMD_NVRAM_INFO_OUT_TYPE_OFST, MC_CMD_NVRAM_TYPE_MC_FW).unwrap();
        buf.set_dword(MC_CMD_NVRAM_INFO_OUT_SIZE_OFST, 0x100000).unwrap();
        buf.set_dword(MC_CMD_NVRAM_INFO_OUT_ERASESIZE_OFST, 0x10000).unwrap();
        buf.set_dword(MC_CMD_NVRAM_INFO_OUT_FLAGS_OFST, 0x81).unwrap();
        let info = NvramInfo::decode(buf.as_bytes()).unwrap();
        assert_eq!(info.flags, NvramFlags::PROTECTED | NvramFlags::A_B);
        assert_eq!(info.format_row(true), "MC_FW,1048576,65536,PROTECTED;A_B");
        assert!(info.format_info().contains("Partition                 : MC_FW (1)"));
    }

    #[test]
    fn test_partitions_decode() {
        let mut payload = 2u32.to_le_bytes().to_vec();
        payload.extend_from_slice(&0x100u32.to_le_bytes());
        payload.extend_from_slice(&0x200u32.to_le_bytes());
        assert_eq!(NvramPartitions::decode(&payload).unwrap(), vec![0x100, 0x200]);

        // 条目数与长度不符
        let short = 3u32.to_le_bytes();
        assert!(matches!(
            NvramPartitions::decode(&short),
            Err(McdiError::Truncated { .. })
        ));
        let too_many = 63u32.to_le_bytes();
        assert!(matches!(
            NvramPartitions::decode(&too_many),
            Err(McdiError::InvalidData(_))
        ));
    }

    #[test]
    fn test_nvram_read_bounds() {
        let read = |length| NvramRead {
            partition: 1,
            offset: 0,
            length,
        };
        assert!(read(0).encode().is_err());
        assert!(read(253).encode().is_err());
        let req = read(252).encode().unwrap();
        assert_eq!(req.get_dword(MC_CMD_NVRAM_READ_IN_LENGTH_OFST).unwrap(), 252);
        assert_eq!(read(16).outlen(), 16);
    }

    #[test]
    fn test_nvram_read_chunks() {
        let mut intf = MockIntf::new();
        intf.reply(MC_CMD_NVRAM_READ, &[0xaa; 252]);
        let data = nvram_read(&mut intf, MC_CMD_NVRAM_TYPE_LOG, 0x10, 300).unwrap();
        assert_eq!(data.len(), 300);
        assert_eq!(intf.requests.len(), 2);
        let second = McdiBuf::from_bytes(&intf.requests[1].1);
        assert_eq!(second.get_dword(MC_CMD_NVRAM_READ_IN_OFFSET_OFST).unwrap(), 0x10 + 252);
        assert_eq!(second.get_dword(MC_CMD_NVRAM_READ_IN_LENGTH_OFST).unwrap(), 48);
    }

    #[test]
    fn test_nvram_read_short_reply() {
        let mut intf = MockIntf::new();
        intf.reply(MC_CMD_NVRAM_READ, &[0x55; 8]);
        assert!(matches!(
            nvram_read(&mut intf, 1, 0, 16),
            Err(McdiError::Truncated {
                expected: 16,
                actual: 8
            })
        ));
    }

    #[test]
    fn test_parse_partition() {
        assert_eq!(parse_partition("mc_fw").unwrap(), MC_CMD_NVRAM_TYPE_MC_FW);
        assert_eq!(parse_partition("MC_CMD_NVRAM_TYPE_LOG").unwrap(), MC_CMD_NVRAM_TYPE_LOG);
        assert_eq!(parse_partition("0x100").unwrap(), 0x100);
        assert!(parse_partition("bogus").is_err());
    }

    #[test]
    fn test_list_partitions_fallback() {
        let mut intf = MockIntf::new();
        intf.reply(MC_CMD_NVRAM_TYPES, &0x2u32.to_le_bytes());
        assert_eq!(list_partitions(&mut intf).unwrap(), vec![MC_CMD_NVRAM_TYPE_MC_FW]);
    }
}
