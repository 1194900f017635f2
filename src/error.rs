/*
 * SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
 *
 * SPDX-License-Identifier: GPL-2.0-or-later
 */
use std::collections::HashMap;
use std::fmt;

use crate::mcdi::pcol::*;
use crate::mcdi::strings::{cmd_name, err_name};

// 定义值-字符串映射类型
pub type ValStrMap = HashMap<u32, &'static str>;

// 查找函数实现
pub fn val2str(val: u32, map: &ValStrMap) -> &'static str {
    map.get(&val).copied().unwrap_or("Unknown value")
}

// MC 错误码的文字描述
lazy_static::lazy_static! {
    pub static ref ERROR_CODE_VALS: ValStrMap = {
        let mut m = HashMap::new();
        m.insert(MC_CMD_ERR_EPERM, "Operation not permitted");
        m.insert(MC_CMD_ERR_ENOENT, "Non-existent command target");
        m.insert(MC_CMD_ERR_EINTR, "assert() has killed the MC");
        m.insert(MC_CMD_ERR_EIO, "I/O failure");
        m.insert(MC_CMD_ERR_EEXIST, "Already exists");
        m.insert(MC_CMD_ERR_EAGAIN, "Try again");
        m.insert(MC_CMD_ERR_ENOMEM, "Out of memory");
        m.insert(MC_CMD_ERR_EACCES, "Caller does not hold required locks");
        m.insert(MC_CMD_ERR_EBUSY, "Resource is currently unavailable");
        m.insert(MC_CMD_ERR_ENODEV, "No such device");
        m.insert(MC_CMD_ERR_EINVAL, "Invalid argument to target");
        m.insert(MC_CMD_ERR_ENOSPC, "No space");
        m.insert(MC_CMD_ERR_EROFS, "Read-only");
        m.insert(MC_CMD_ERR_EPIPE, "Broken pipe");
        m.insert(MC_CMD_ERR_ERANGE, "Out of range");
        m.insert(MC_CMD_ERR_EDEADLK, "Non-recursive resource is already acquired");
        m.insert(MC_CMD_ERR_ENOSYS, "Operation not implemented");
        m.insert(MC_CMD_ERR_ETIME, "Operation timed out");
        m.insert(MC_CMD_ERR_ENOLINK, "Link has been severed");
        m.insert(MC_CMD_ERR_EPROTO, "Protocol error");
        m.insert(MC_CMD_ERR_EBADMSG, "Bad message");
        m.insert(MC_CMD_ERR_ENOTSUP, "Operation not supported");
        m.insert(MC_CMD_ERR_EADDRNOTAVAIL, "Address not available");
        m.insert(MC_CMD_ERR_ENOTCONN, "Not connected");
        m.insert(MC_CMD_ERR_EALREADY, "Operation already in progress");
        m.insert(MC_CMD_ERR_ESTALE, "Stale handle");
        m.insert(MC_CMD_ERR_ALLOC_FAIL, "Resource allocation failed");
        m.insert(MC_CMD_ERR_NO_VADAPTOR, "V-adaptor not found");
        m.insert(MC_CMD_ERR_NO_EVB_PORT, "EVB port not found");
        m.insert(MC_CMD_ERR_NO_VSWITCH, "V-switch not found");
        m.insert(MC_CMD_ERR_VLAN_LIMIT, "Too many VLAN tags");
        m.insert(MC_CMD_ERR_BAD_PCI_FUNC, "Bad PCI function number");
        m.insert(MC_CMD_ERR_BAD_VLAN_MODE, "Invalid VLAN mode");
        m.insert(MC_CMD_ERR_BAD_VSWITCH_TYPE, "Invalid v-switch type");
        m.insert(MC_CMD_ERR_BAD_VPORT_TYPE, "Invalid v-port type");
        m.insert(MC_CMD_ERR_MAC_EXIST, "MAC address exists");
        m.insert(MC_CMD_ERR_SLAVE_NOT_PRESENT, "Slave core not present");
        m.insert(MC_CMD_ERR_DATAPATH_DISABLED, "The datapath is disabled");
        m.insert(MC_CMD_ERR_CLIENT_NOT_FN, "The requesting client is not a function");
        m.insert(MC_CMD_ERR_TRANSPORT_NOPROXY, "Transport cannot proxy the request between MCs");
        m.insert(MC_CMD_ERR_VLAN_EXIST, "VLAN tag(s) exists");
        m.insert(MC_CMD_ERR_NO_MAC_ADDR, "No MAC address assigned to an EVB port");
        m.insert(MC_CMD_ERR_PROXY_PENDING, "Request relayed to an admin function for authorization");
        m.insert(MC_CMD_ERR_PROXY_INPROGRESS, "Another request from this function is being authorized");
        m.insert(MC_CMD_ERR_PROXY_UNEXPECTED, "Unexpected proxy completion");
        m.insert(MC_CMD_ERR_NO_PRIVILEGE, "Lack of SR-IOV privilege");
        m.insert(MC_CMD_ERR_FILTERS_PRESENT, "Filters are already installed");
        m.insert(MC_CMD_ERR_NO_CLOCK, "No such clock");
        m.insert(MC_CMD_ERR_UNREACHABLE, "Expected assertion did not fire");
        m.insert(MC_CMD_ERR_QUEUE_FULL, "No background resources, retry later");
        m.insert(MC_CMD_ERR_NO_PCIE, "The PCIe link has gone away");
        m.insert(MC_CMD_ERR_NO_DATAPATH, "The datapath has gone away");
        m.insert(MC_CMD_ERR_VIS_PRESENT, "Some VIs are allocated");
        m.insert(MC_CMD_ERR_PIOBUFS_PRESENT, "Some PIO buffers are allocated");
        m
    };
}

/// Host errno for an MC error code, translated the way the Linux sfc
/// driver does it.
pub fn mcdi_errno(code: u32) -> i32 {
    match code {
        MC_CMD_ERR_EPERM => libc::EPERM,
        MC_CMD_ERR_ENOENT => libc::ENOENT,
        MC_CMD_ERR_EINTR => libc::EINTR,
        MC_CMD_ERR_EAGAIN => libc::EAGAIN,
        MC_CMD_ERR_EACCES => libc::EACCES,
        MC_CMD_ERR_EBUSY => libc::EBUSY,
        MC_CMD_ERR_EINVAL => libc::EINVAL,
        MC_CMD_ERR_EDEADLK => libc::EDEADLK,
        MC_CMD_ERR_ENOSYS => libc::ENOSYS,
        MC_CMD_ERR_ETIME => libc::ETIME,
        MC_CMD_ERR_EALREADY => libc::EALREADY,
        MC_CMD_ERR_ENOSPC => libc::ENOSPC,
        MC_CMD_ERR_ENOTSUP => libc::EOPNOTSUPP,
        MC_CMD_ERR_ALLOC_FAIL => libc::ENOBUFS,
        MC_CMD_ERR_MAC_EXIST => libc::EADDRINUSE,
        MC_CMD_ERR_NO_EVB_PORT => libc::EAGAIN,
        _ => libc::EPROTO,
    }
}

/// MCDI specific error types
#[derive(Debug, Clone, PartialEq)]
pub enum McdiError {
    /// Interface error with message
    Interface(String),
    /// The MC answered with an error response
    Mc { cmd: u32, code: u32, arg: u32 },
    /// Timeout error
    Timeout,
    /// Invalid data error
    InvalidData(String),
    /// Response shorter than the command requires
    Truncated { expected: usize, actual: usize },
    /// Command not supported
    NotSupported(String),
    /// System error (file I/O, kernel interactions)
    System(String),
    /// Generic error
    Generic(String),
}

impl McdiError {
    /// Host errno equivalent, as the kernel driver would return it.
    pub fn errno(&self) -> i32 {
        match self {
            McdiError::Mc { code, .. } => mcdi_errno(*code),
            McdiError::Timeout => libc::ETIMEDOUT,
            McdiError::NotSupported(_) => libc::EOPNOTSUPP,
            McdiError::InvalidData(_) => libc::EINVAL,
            McdiError::Truncated { .. } => libc::EIO,
            McdiError::Interface(_) | McdiError::System(_) | McdiError::Generic(_) => libc::EIO,
        }
    }

    /// MC error code, if this error came back from the MC.
    pub fn mc_code(&self) -> Option<u32> {
        match self {
            McdiError::Mc { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl fmt::Display for McdiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            McdiError::Interface(msg) => write!(f, "Interface error: {}", msg),
            McdiError::Mc { cmd, code, arg } => {
                write!(
                    f,
                    "{} failed: {} ({})",
                    cmd_name(*cmd),
                    err_name(*code),
                    val2str(*code, &ERROR_CODE_VALS)
                )?;
                if *arg != 0 {
                    write!(f, " arg 0x{:x}", arg)?;
                }
                Ok(())
            }
            McdiError::Timeout => write!(f, "Operation timed out"),
            McdiError::InvalidData(msg) => write!(f, "{}", msg),
            McdiError::Truncated { expected, actual } => write!(
                f,
                "Response truncated: expected {} bytes, got {}",
                expected, actual
            ),
            McdiError::NotSupported(msg) => write!(f, "Command not supported: {}", msg),
            McdiError::System(msg) => write!(f, "{}", msg),
            McdiError::Generic(msg) => write!(f, "Generic error: {}", msg),
        }
    }
}

impl std::error::Error for McdiError {}

// 从 std::io::Error 转换
impl From<std::io::Error> for McdiError {
    fn from(error: std::io::Error) -> Self {
        McdiError::System(error.to_string())
    }
}

impl From<nix::Error> for McdiError {
    fn from(error: nix::Error) -> Self {
        McdiError::System(error.to_string())
    }
}

impl From<unpack::RawError> for McdiError {
    fn from(error: unpack::RawError) -> Self {
        match error {
            unpack::RawError::Insufficient { needed, got, .. } => McdiError::Truncated {
                expected: needed,
                actual: got,
            },
            unpack::RawError::Invalid(msg) => McdiError::InvalidData(msg),
        }
    }
}

/// 便利类型别名
pub type McdiResult<T> = Result<T, McdiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errno_translation() {
        assert_eq!(mcdi_errno(MC_CMD_ERR_EPERM), libc::EPERM);
        assert_eq!(mcdi_errno(MC_CMD_ERR_ETIME), libc::ETIME);
        assert_eq!(mcdi_errno(MC_CMD_ERR_ENOTSUP), libc::EOPNOTSUPP);
        assert_eq!(mcdi_errno(MC_CMD_ERR_ALLOC_FAIL), libc::ENOBUFS);
        assert_eq!(mcdi_errno(MC_CMD_ERR_MAC_EXIST), libc::EADDRINUSE);
        assert_eq!(mcdi_errno(MC_CMD_ERR_NO_EVB_PORT), libc::EAGAIN);
        // not translated by the driver
        assert_eq!(mcdi_errno(MC_CMD_ERR_ENOMEM), libc::EPROTO);
        assert_eq!(mcdi_errno(MC_CMD_ERR_QUEUE_FULL), libc::EPROTO);
        assert_eq!(mcdi_errno(0xdead), libc::EPROTO);
    }

    #[test]
    fn test_every_error_code_has_description() {
        for (code, name) in MC_CMD_ERR_TABLE {
            assert_ne!(val2str(*code, &ERROR_CODE_VALS), "Unknown value", "{}", name);
        }
        assert_eq!(val2str(0x7777, &ERROR_CODE_VALS), "Unknown value");
    }

    #[test]
    fn test_mc_error_display() {
        let err = McdiError::Mc {
            cmd: MC_CMD_GET_VERSION,
            code: MC_CMD_ERR_EPERM,
            arg: 0,
        };
        assert_eq!(
            err.to_string(),
            "GET_VERSION failed: EPERM (Operation not permitted)"
        );
        assert_eq!(err.errno(), libc::EPERM);
        assert_eq!(err.mc_code(), Some(MC_CMD_ERR_EPERM));
    }

    #[test]
    fn test_raw_error_conversion() {
        let err: McdiError = unpack::RawError::insufficient::<u32>(4, 2).into();
        assert_eq!(err, McdiError::Truncated { expected: 4, actual: 2 });
    }
}
