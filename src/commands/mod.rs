/*
 * SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
 *
 * SPDX-License-Identifier: GPL-2.0-or-later
 */
use crate::error::{McdiError, McdiResult};
use crate::mcdi::buf::McdiBuf;
use crate::mcdi::intf::{McdiIntf, McdiIntfExt};
use crate::mcdi::pcol::MCDI_CTL_SDU_LEN_MAX_V2;
use crate::{debug2, debug4};
use unpack::RawSize;

// 统一的命令结果类型
pub type CommandResult<T = ()> = Result<T, McdiError>;

/// A typed MCDI command: how to build its request payload and how to
/// read its response.
pub trait McdiCommand {
    const OPCODE: u32;
    const NAME: &'static str;
    type Output;

    fn encode(&self) -> McdiResult<McdiBuf>;

    fn decode(payload: &[u8]) -> McdiResult<Self::Output>;

    /// Response buffer size to offer the MC.
    fn outlen(&self) -> usize {
        MCDI_CTL_SDU_LEN_MAX_V2
    }
}

/// Encode `cmd`, run it over `intf` and decode the response.
pub fn execute<C: McdiCommand>(intf: &mut dyn McdiIntf, cmd: &C) -> McdiResult<C::Output> {
    let req = cmd.encode()?;
    debug2!("Running {} inlen {}", C::NAME, req.len());
    let out = intf.rpc_checked(C::OPCODE, req.as_bytes(), cmd.outlen())?;
    debug4!("{} returned {} bytes", C::NAME, out.len());
    C::decode(&out)
}

/// Like `execute`, but `Ok(None)` when the firmware lacks the command.
pub fn execute_quiet<C: McdiCommand>(
    intf: &mut dyn McdiIntf,
    cmd: &C,
) -> McdiResult<Option<C::Output>> {
    let req = cmd.encode()?;
    if req.len() > intf.max_request_len() {
        return Err(McdiError::InvalidData(format!(
            "{} request of {} bytes exceeds interface limit {}",
            C::NAME,
            req.len(),
            intf.max_request_len()
        )));
    }
    match intf.rpc_quiet(C::OPCODE, req.as_bytes(), cmd.outlen())? {
        Some(out) => C::decode(&out).map(Some),
        None => Ok(None),
    }
}

/// Read a fixed OUT layout. Trailing bytes from newer firmware are ignored.
pub fn decode_fixed<T: RawSize>(name: &str, payload: &[u8]) -> McdiResult<T> {
    if payload.len() > T::RAW_SIZE {
        debug4!(
            "{}: ignoring {} trailing bytes",
            name,
            payload.len() - T::RAW_SIZE
        );
    }
    Ok(T::from_bytes(payload)?)
}

/// Check a variable-length array against its `_MINNUM`/`_MAXNUM` bounds.
pub fn check_count(what: &str, count: usize, min: usize, max: usize) -> McdiResult<()> {
    if count < min || count > max {
        return Err(McdiError::InvalidData(format!(
            "{}: {} entries, expected {}..={}",
            what, count, min, max
        )));
    }
    Ok(())
}

/// PCIe function selector used by PRIVILEGE_MASK and EVB_PORT_ASSIGN:
/// PF in the low half, VF (or `0xffff` for the PF itself) in the high half.
pub fn function_selector(pf: u16, vf: Option<u16>) -> u32 {
    let vf = vf.unwrap_or(crate::mcdi::pcol::MC_CMD_PRIVILEGE_MASK_IN_VF_NULL as u16);
    ((vf as u32) << 16) | pf as u32
}

// 便利宏 - 简化错误转换
#[macro_export]
macro_rules! command_error {
    ($msg:expr) => {
        Err($crate::error::McdiError::InvalidData($msg.to_string()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        Err($crate::error::McdiError::InvalidData(format!($fmt, $($arg)*)))
    };
}

// 为 bitflags 类型实现 RawSize，使其可以直接出现在 RAWDATA 结构体中
macro_rules! impl_rawsize_for_bitflags {
    ($($ty:ty),+) => {
        $(
            impl ::unpack::RawSize for $ty {
                const RAW_SIZE: usize =
                    <<$ty as ::bitflags::Flags>::Bits as ::unpack::RawSize>::RAW_SIZE;
                const ENDIAN: ::unpack::Endianness = ::unpack::Endianness::Little;

                fn from_bytes_with_endian(
                    bytes: &[u8],
                    endian: ::unpack::Endianness,
                ) -> Result<Self, ::unpack::RawError> {
                    let bits = <<$ty as ::bitflags::Flags>::Bits as ::unpack::RawSize>::from_bytes_with_endian(
                        bytes, endian,
                    )?;
                    // 保留未知位，新固件可能定义更多标志
                    Ok(Self::from_bits_retain(bits))
                }

                fn write_bytes_with_endian(
                    &self,
                    out: &mut [u8],
                    endian: ::unpack::Endianness,
                ) -> Result<(), ::unpack::RawError> {
                    ::unpack::RawSize::write_bytes_with_endian(&self.bits(), out, endian)
                }
            }
        )+
    };
}

/// Names of the set flags joined with `sep`, plus any unnamed bits in hex.
pub fn flag_names<F>(flags: &F, sep: &str) -> String
where
    F: bitflags::Flags<Bits = u32>,
{
    let mut names: Vec<String> = flags.iter_names().map(|(n, _)| n.to_string()).collect();
    let known = F::all().bits();
    let unknown = flags.bits() & !known;
    if unknown != 0 {
        names.push(format!("0x{:x}", unknown));
    }
    if names.is_empty() {
        return "none".to_string();
    }
    names.join(sep)
}

// 子模块声明
pub mod decode;
pub mod encode;
pub mod evb;
pub mod filter;
pub mod func;
pub mod list;
pub mod mc;
pub mod nvram;
pub mod port;
pub mod queue;
pub mod raw;
pub mod sensor;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcdi::intf::mock::MockIntf;
    use crate::mcdi::pcol::*;

    #[test]
    fn test_check_count() {
        assert!(check_count("DMA_ADDR", 1, 1, 28).is_ok());
        assert!(check_count("DMA_ADDR", 0, 1, 28).is_err());
        assert!(check_count("DMA_ADDR", 29, 1, 28).is_err());
    }

    #[test]
    fn test_function_selector() {
        assert_eq!(function_selector(0, None), 0xffff0000);
        assert_eq!(function_selector(1, Some(3)), 0x00030001);
    }

    #[test]
    fn test_execute_quiet_unsupported() {
        let mut intf = MockIntf::new();
        intf.reply_error(MC_CMD_GET_CLOCK, MC_CMD_ERR_ENOSYS);
        let out = execute_quiet(&mut intf, &mc::GetClock).unwrap();
        assert!(out.is_none());
    }

    #[test]
    fn test_flag_names() {
        let flags = port::LinkFlags::LINK_UP | port::LinkFlags::FULL_DUPLEX;
        assert_eq!(flag_names(&flags, " "), "LINK_UP FULL_DUPLEX");
        assert_eq!(flag_names(&port::LinkFlags::empty(), " "), "none");
        let odd = port::LinkFlags::from_bits_retain(0x1 | 0x100);
        assert_eq!(flag_names(&odd, ","), "LINK_UP,0x100");
    }
}
