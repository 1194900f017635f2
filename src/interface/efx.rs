/*
 * SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
 *
 * SPDX-License-Identifier: GPL-2.0-or-later
 */
//! MCDI through the sfc driver's private socket ioctl.
//!
//! The driver owns the MCDI transport (sequence numbers, doorbells,
//! completion, MC reboot handling); we only hand it a command and a
//! payload and read the response back out of the same buffer.

use std::os::fd::{AsRawFd, OwnedFd};

use nix::errno::Errno;
use nix::ioctl_readwrite_bad;
use nix::sys::socket::{socket, AddressFamily, SockFlag, SockType};

use crate::error::{McdiError, McdiResult};
use crate::mcdi::context::{McdiContext, ProtocolContext};
use crate::mcdi::header::mc_error_from_payload;
use crate::mcdi::intf::{dump_request, dump_response, McdiIntf};
use crate::mcdi::pcol::{MCDI_CTL_SDU_LEN_MAX_V2, MC_CMD_ERR_CODE_LEN};
use crate::mcdi::strings::cmd_name;
use crate::{debug2, debug3};

/// `SIOCDEVPRIVATE + 3`
pub const SIOCEFX: u32 = 0x89F3;

/* efx_sock_ioctl commands */
pub const EFX_MCDI_REQUEST: u16 = 0xef20;
pub const EFX_MCDI_REQUEST2: u16 = 0xef21;

/* efx_mcdi_request2 flags */
pub const EFX_MCDI_REQUEST_ERROR: u16 = 0x0001;

const PAYLOAD_DWORDS: usize = MCDI_CTL_SDU_LEN_MAX_V2 / 4;

#[repr(C)]
#[derive(Clone)]
pub struct EfxMcdiRequest2 {
    pub cmd: u16,
    pub inlen: u16,
    pub outlen: u16,
    pub flags: u16,
    pub host_errno: u32,
    pub payload: [u32; PAYLOAD_DWORDS],
}

impl Default for EfxMcdiRequest2 {
    fn default() -> Self {
        Self {
            cmd: 0,
            inlen: 0,
            outlen: 0,
            flags: 0,
            host_errno: 0,
            payload: [0; PAYLOAD_DWORDS],
        }
    }
}

impl EfxMcdiRequest2 {
    /// The driver copies payload bytes as-is, so keep the byte image.
    pub fn set_payload(&mut self, bytes: &[u8]) -> McdiResult<()> {
        if bytes.len() > MCDI_CTL_SDU_LEN_MAX_V2 {
            return Err(McdiError::InvalidData(format!(
                "payload of {} bytes exceeds {}",
                bytes.len(),
                MCDI_CTL_SDU_LEN_MAX_V2
            )));
        }
        self.payload = [0; PAYLOAD_DWORDS];
        for (slot, chunk) in self.payload.iter_mut().zip(bytes.chunks(4)) {
            let mut raw = [0u8; 4];
            raw[..chunk.len()].copy_from_slice(chunk);
            *slot = u32::from_ne_bytes(raw);
        }
        self.inlen = bytes.len() as u16;
        Ok(())
    }

    pub fn payload_bytes(&self, len: usize) -> Vec<u8> {
        let mut out: Vec<u8> = self
            .payload
            .iter()
            .flat_map(|d| d.to_ne_bytes())
            .collect();
        out.truncate(len.min(MCDI_CTL_SDU_LEN_MAX_V2));
        out
    }
}

/// `struct efx_sock_ioctl`. Only the MCDI member of the union is used.
#[repr(C)]
#[derive(Clone, Default)]
pub struct EfxSockIoctl {
    pub cmd: u16,
    pub reserved: u16,
    pub mcdi_request2: EfxMcdiRequest2,
}

ioctl_readwrite_bad!(efx_sock_ioctl, SIOCEFX, libc::ifreq);

#[derive(Default)]
pub struct EfxIntf {
    pub name: String,
    pub desc: String,
    pub ifname: String,
    fd: Option<OwnedFd>,
    pub context: McdiContext,
}

impl EfxIntf {
    pub fn new(ifname: &str, ctx: McdiContext) -> Self {
        Self {
            name: "efx".to_string(),
            desc: "Linux sfc driver MCDI ioctl".to_string(),
            ifname: ifname.to_string(),
            fd: None,
            context: ctx,
        }
    }

    pub fn is_open(&self) -> bool {
        self.fd.is_some()
    }

    /// Copy the interface name into `ifr_name`, NUL terminated.
    fn ifreq(&self) -> McdiResult<libc::ifreq> {
        let name = self.ifname.as_bytes();
        if name.is_empty() || name.len() > libc::IFNAMSIZ - 1 {
            return Err(McdiError::Interface(format!(
                "Invalid interface name '{}' (at most {} characters)",
                self.ifname,
                libc::IFNAMSIZ - 1
            )));
        }
        // SAFETY: ifreq is plain old data; all-zero is a valid value.
        let mut ifr: libc::ifreq = unsafe { std::mem::zeroed() };
        for (dst, src) in ifr.ifr_name.iter_mut().zip(name) {
            *dst = *src as libc::c_char;
        }
        Ok(ifr)
    }
}

impl McdiIntf for EfxIntf {
    fn context(&mut self) -> &mut McdiContext {
        &mut self.context
    }

    fn open(&mut self) -> McdiResult<()> {
        // 先检查接口名
        self.ifreq()?;

        let fd = socket(
            AddressFamily::Inet,
            SockType::Datagram,
            SockFlag::SOCK_CLOEXEC,
            None,
        )
        .map_err(|e| McdiError::System(format!("Could not open control socket: {}", e)))?;
        debug2!("Using interface {}", self.ifname);
        self.fd = Some(fd);

        // REQUEST2 carries v2 sized payloads
        self.context.protocol = ProtocolContext::v2();
        Ok(())
    }

    fn close(&mut self) {
        // OwnedFd 在 drop 时关闭
        self.fd = None;
    }

    fn rpc(&mut self, cmd: u32, inbuf: &[u8], outlen: usize) -> McdiResult<Vec<u8>> {
        if !self.is_open() {
            self.open()?;
        }
        let cmd16 = u16::try_from(cmd).map_err(|_| {
            McdiError::InvalidData(format!("Command 0x{:x} out of range", cmd))
        })?;

        let mut ioc = EfxSockIoctl {
            cmd: EFX_MCDI_REQUEST2,
            ..Default::default()
        };
        ioc.mcdi_request2.cmd = cmd16;
        ioc.mcdi_request2.set_payload(inbuf)?;
        ioc.mcdi_request2.outlen = outlen.min(MCDI_CTL_SDU_LEN_MAX_V2) as u16;

        let mut ifr = self.ifreq()?;
        ifr.ifr_ifru.ifru_data = &mut ioc as *mut EfxSockIoctl as *mut libc::c_char;

        dump_request(cmd, inbuf);

        let fd = match &self.fd {
            Some(fd) => fd.as_raw_fd(),
            None => return Err(McdiError::Interface("Interface not open".to_string())),
        };
        // SAFETY: ifr points at a live EfxSockIoctl for the duration of the call.
        match unsafe { efx_sock_ioctl(fd, &mut ifr) } {
            Ok(_) => {}
            Err(Errno::ETIMEDOUT) => return Err(McdiError::Timeout),
            Err(Errno::EOPNOTSUPP) | Err(Errno::ENOTTY) => {
                return Err(McdiError::Interface(format!(
                    "{}: driver does not support MCDI ioctl",
                    self.ifname
                )))
            }
            Err(e) => {
                return Err(McdiError::Interface(format!(
                    "{}: {} ioctl failed: {}",
                    self.ifname,
                    cmd_name(cmd),
                    e
                )))
            }
        }

        let req = &ioc.mcdi_request2;
        let out = req.payload_bytes(req.outlen as usize);
        dump_response(cmd, &out);

        if req.flags & EFX_MCDI_REQUEST_ERROR != 0 {
            debug3!("MC error, host errno {}", req.host_errno);
            if out.len() >= MC_CMD_ERR_CODE_LEN {
                return Err(mc_error_from_payload(cmd, &out));
            }
            return Err(McdiError::Mc {
                cmd,
                code: req.host_errno,
                arg: 0,
            });
        }
        Ok(out)
    }

    fn max_request_len(&self) -> usize {
        self.context.protocol.max_request_len
    }
}

impl Drop for EfxIntf {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{offset_of, size_of};

    #[test]
    fn test_ioctl_layout() {
        assert_eq!(size_of::<EfxMcdiRequest2>(), 12 + MCDI_CTL_SDU_LEN_MAX_V2);
        assert_eq!(offset_of!(EfxMcdiRequest2, host_errno), 8);
        assert_eq!(offset_of!(EfxMcdiRequest2, payload), 12);
        assert_eq!(offset_of!(EfxSockIoctl, mcdi_request2), 4);
    }

    #[test]
    fn test_payload_byte_image() {
        let mut req = EfxMcdiRequest2::default();
        req.set_payload(&[1, 2, 3, 4, 5]).unwrap();
        assert_eq!(req.inlen, 5);
        assert_eq!(req.payload_bytes(6), vec![1, 2, 3, 4, 5, 0]);
        assert!(req
            .set_payload(&vec![0u8; MCDI_CTL_SDU_LEN_MAX_V2 + 1])
            .is_err());
    }

    #[test]
    fn test_interface_name_checks() {
        let intf = EfxIntf::new("enp1s0f0np0", McdiContext::default());
        let ifr = intf.ifreq().unwrap();
        assert_eq!(ifr.ifr_name[0] as u8, b'e');
        assert_eq!(ifr.ifr_name[11], 0);

        let long = EfxIntf::new("a-very-long-ifname", McdiContext::default());
        assert!(matches!(long.ifreq(), Err(McdiError::Interface(_))));
        let mut empty = EfxIntf::new("", McdiContext::default());
        assert!(empty.open().is_err());
        assert!(!empty.is_open());
    }

    #[test]
    fn test_rpc_without_valid_interface() {
        let mut intf = EfxIntf::new("x".repeat(20).as_str(), McdiContext::default());
        // 名称过长，open 失败
        assert!(intf.rpc(0x29, &[], 0).is_err());
        assert!(!intf.is_open());
    }
}
