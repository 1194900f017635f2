/*
 * SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
 *
 * SPDX-License-Identifier: GPL-2.0-or-later
 */
use crate::error::{McdiError, McdiResult};
use crate::helper::hexdump;
use crate::mcdi::context::McdiContext;
use crate::mcdi::pcol::{MC_CMD_ERR_ENOSYS, MC_CMD_ERR_ENOTSUP};
use crate::mcdi::strings::cmd_name;
use crate::{debug2, debug3};

/// A path to the MC.
///
/// Implementations take a request payload and hand back the response
/// payload; sequencing, retries and completion belong to whatever sits
/// underneath (usually the kernel driver). An error response from the MC
/// must be returned as `McdiError::Mc`.
pub trait McdiIntf {
    fn context(&mut self) -> &mut McdiContext;

    fn open(&mut self) -> McdiResult<()>;
    fn close(&mut self);

    /// Run command `cmd` with payload `inbuf`, accepting at most `outlen`
    /// bytes of response.
    fn rpc(&mut self, cmd: u32, inbuf: &[u8], outlen: usize) -> McdiResult<Vec<u8>>;

    fn max_request_len(&self) -> usize;
}

// 扩展 trait，包含泛型方法
pub trait McdiIntfExt: McdiIntf {
    fn with_context<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut McdiContext) -> R,
    {
        let ctx = self.context();
        f(ctx)
    }

    /// Like `rpc`, but a command the firmware does not implement yields
    /// `Ok(None)` instead of an error.
    fn rpc_quiet(&mut self, cmd: u32, inbuf: &[u8], outlen: usize) -> McdiResult<Option<Vec<u8>>> {
        match self.rpc(cmd, inbuf, outlen) {
            Ok(out) => Ok(Some(out)),
            Err(e) if matches!(e.mc_code(), Some(MC_CMD_ERR_ENOSYS | MC_CMD_ERR_ENOTSUP)) => {
                debug2!("{} not supported by firmware", cmd_name(cmd));
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// `rpc` with a request length check against the interface limit.
    fn rpc_checked(&mut self, cmd: u32, inbuf: &[u8], outlen: usize) -> McdiResult<Vec<u8>> {
        let max = self.max_request_len();
        if inbuf.len() > max {
            return Err(McdiError::InvalidData(format!(
                "{} request of {} bytes exceeds interface limit {}",
                cmd_name(cmd),
                inbuf.len(),
                max
            )));
        }
        self.rpc(cmd, inbuf, outlen)
    }
}
// 为所有实现了 McdiIntf 的类型自动实现扩展 trait
impl<T: McdiIntf + ?Sized> McdiIntfExt for T {}

/// Request trace for `-vvv`.
pub fn dump_request(cmd: u32, inbuf: &[u8]) {
    debug3!("MCDI Request: {} (0x{:02x}) inlen {}", cmd_name(cmd), cmd, inbuf.len());
    if !inbuf.is_empty() {
        debug3!("{}", hexdump(inbuf));
    }
}

pub fn dump_response(cmd: u32, outbuf: &[u8]) {
    debug3!("MCDI Response: {} (0x{:02x}) outlen {}", cmd_name(cmd), cmd, outbuf.len());
    if !outbuf.is_empty() {
        debug3!("{}", hexdump(outbuf));
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use super::*;
    use crate::mcdi::header::mc_error_from_payload;
    use crate::mcdi::pcol::MCDI_CTL_SDU_LEN_MAX_V2;
    use std::collections::{HashMap, VecDeque};

    /// Scripted MC. Replies are queued per opcode; the last reply queued
    /// for an opcode is repeated once the queue runs dry.
    #[derive(Default)]
    pub struct MockIntf {
        pub context: McdiContext,
        pub requests: Vec<(u32, Vec<u8>)>,
        replies: HashMap<u32, VecDeque<McdiResult<Vec<u8>>>>,
    }

    impl MockIntf {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn reply(&mut self, cmd: u32, payload: &[u8]) -> &mut Self {
            self.replies
                .entry(cmd)
                .or_default()
                .push_back(Ok(payload.to_vec()));
            self
        }

        pub fn reply_error(&mut self, cmd: u32, code: u32) -> &mut Self {
            let mut payload = code.to_le_bytes().to_vec();
            payload.extend_from_slice(&0u32.to_le_bytes());
            self.replies
                .entry(cmd)
                .or_default()
                .push_back(Err(mc_error_from_payload(cmd, &payload)));
            self
        }

        /// Fail `cmd` without an MC response, as a broken transport would.
        pub fn fail(&mut self, cmd: u32, err: McdiError) -> &mut Self {
            self.replies.entry(cmd).or_default().push_back(Err(err));
            self
        }

        pub fn last_request(&self) -> Option<&(u32, Vec<u8>)> {
            self.requests.last()
        }
    }

    impl McdiIntf for MockIntf {
        fn context(&mut self) -> &mut McdiContext {
            &mut self.context
        }

        fn open(&mut self) -> McdiResult<()> {
            Ok(())
        }

        fn close(&mut self) {}

        fn rpc(&mut self, cmd: u32, inbuf: &[u8], outlen: usize) -> McdiResult<Vec<u8>> {
            self.requests.push((cmd, inbuf.to_vec()));
            let queue = self
                .replies
                .get_mut(&cmd)
                .ok_or_else(|| mc_error_from_payload(cmd, &MC_CMD_ERR_ENOSYS.to_le_bytes()))?;
            let reply = if queue.len() > 1 {
                queue.pop_front()
            } else {
                queue.front().cloned()
            };
            let mut out = reply.unwrap_or_else(|| Ok(Vec::new()))?;
            out.truncate(outlen);
            Ok(out)
        }

        fn max_request_len(&self) -> usize {
            MCDI_CTL_SDU_LEN_MAX_V2
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockIntf;
    use super::*;
    use crate::mcdi::pcol::*;

    #[test]
    fn test_rpc_quiet_swallows_enosys() {
        let mut intf = MockIntf::new();
        intf.reply_error(MC_CMD_GET_WORKAROUNDS, MC_CMD_ERR_ENOSYS);
        intf.reply_error(MC_CMD_GET_CLOCK, MC_CMD_ERR_ENOTSUP);
        intf.reply_error(MC_CMD_GET_LINK, MC_CMD_ERR_EPERM);

        assert_eq!(intf.rpc_quiet(MC_CMD_GET_WORKAROUNDS, &[], 8).unwrap(), None);
        assert_eq!(intf.rpc_quiet(MC_CMD_GET_CLOCK, &[], 8).unwrap(), None);
        let err = intf.rpc_quiet(MC_CMD_GET_LINK, &[], 28).unwrap_err();
        assert_eq!(err.mc_code(), Some(MC_CMD_ERR_EPERM));
    }

    #[test]
    fn test_mock_replays_and_truncates() {
        let mut intf = MockIntf::new();
        intf.reply(MC_CMD_GET_CLOCK, &[1, 2, 3, 4, 5, 6, 7, 8]);
        let out = intf.rpc(MC_CMD_GET_CLOCK, &[], 4).unwrap();
        assert_eq!(out, vec![1, 2, 3, 4]);
        let out = intf.rpc(MC_CMD_GET_CLOCK, &[], 8).unwrap();
        assert_eq!(out.len(), 8);
        assert_eq!(intf.requests.len(), 2);
    }

    #[test]
    fn test_rpc_checked_limit() {
        let mut intf = MockIntf::new();
        intf.reply(MC_CMD_WRITE32, &[]);
        let big = vec![0u8; MCDI_CTL_SDU_LEN_MAX_V2 + 4];
        assert!(matches!(
            intf.rpc_checked(MC_CMD_WRITE32, &big, 0),
            Err(McdiError::InvalidData(_))
        ));
        assert!(intf.requests.is_empty());
    }

    #[test]
    fn test_with_context() {
        let mut intf = MockIntf::new();
        intf.with_context(|ctx| ctx.output.set_verbose(2));
        assert_eq!(intf.context().verbose_level(), 2);
    }
}
