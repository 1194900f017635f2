/*
 * SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
 *
 * SPDX-License-Identifier: GPL-2.0-or-later
 */
use crate::mcdi::pcol::{MCDI_CTL_SDU_LEN_MAX_V1, MCDI_CTL_SDU_LEN_MAX_V2};

/// 协议上下文 - 请求/响应负载长度限制
#[derive(Clone, Debug)]
pub struct ProtocolContext {
    /// 最大请求负载长度
    pub max_request_len: usize,
    /// 最大响应负载长度
    pub max_response_len: usize,
}

impl Default for ProtocolContext {
    fn default() -> Self {
        Self {
            max_request_len: MCDI_CTL_SDU_LEN_MAX_V1,
            max_response_len: MCDI_CTL_SDU_LEN_MAX_V1,
        }
    }
}

impl ProtocolContext {
    /// 支持v2扩展头的接口使用更大的负载
    pub fn v2() -> Self {
        Self {
            max_request_len: MCDI_CTL_SDU_LEN_MAX_V2,
            max_response_len: MCDI_CTL_SDU_LEN_MAX_V2,
        }
    }

    pub fn is_v2(&self) -> bool {
        self.max_request_len > MCDI_CTL_SDU_LEN_MAX_V1
    }
}

/// 输出上下文 - 控制输出格式和详细程度
#[derive(Clone, Default, Debug)]
pub struct OutputContext {
    /// CSV格式输出
    pub csv: bool,
    /// 详细输出级别 (0-5)
    pub verbose: u8,
}

impl OutputContext {
    pub fn new(csv: bool, verbose: u8) -> Self {
        Self { csv, verbose }
    }

    /// 设置CSV输出 (builder模式)
    pub fn with_csv(mut self, csv: bool) -> Self {
        self.csv = csv;
        self
    }

    /// 设置详细级别 (builder模式)
    pub fn with_verbose(mut self, verbose: u8) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn set_csv(&mut self, csv: bool) {
        self.csv = csv;
    }

    pub fn set_verbose(&mut self, verbose: u8) {
        self.verbose = verbose;
    }

    /// 是否为详细模式 (-v)
    pub fn is_verbose(&self) -> bool {
        self.verbose >= 1
    }

    /// 是否为非常详细模式 (-vv)
    pub fn is_very_verbose(&self) -> bool {
        self.verbose >= 2
    }

    /// 是否为调试模式 (-vvv)，请求和响应按十六进制打印
    pub fn is_debug(&self) -> bool {
        self.verbose >= 3
    }
}

/// 完整的MCDI上下文
#[derive(Clone, Default, Debug)]
pub struct McdiContext {
    /// 协议上下文
    pub protocol: ProtocolContext,
    /// 输出上下文
    pub output: OutputContext,
}

impl McdiContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建带有输出配置的上下文
    pub fn with_output(output: OutputContext) -> Self {
        Self {
            protocol: ProtocolContext::default(),
            output,
        }
    }

    /// 设置最大请求负载长度，超出v2上限或小于v1上限的值被拒绝
    pub fn set_max_request_len(&mut self, len: usize) {
        if !(MCDI_CTL_SDU_LEN_MAX_V1..=MCDI_CTL_SDU_LEN_MAX_V2).contains(&len) {
            log::warn!(
                "Request length {} out of range {}..={}",
                len,
                MCDI_CTL_SDU_LEN_MAX_V1,
                MCDI_CTL_SDU_LEN_MAX_V2
            );
            return;
        }
        self.protocol.max_request_len = len;
    }

    pub fn set_max_response_len(&mut self, len: usize) {
        if !(MCDI_CTL_SDU_LEN_MAX_V1..=MCDI_CTL_SDU_LEN_MAX_V2).contains(&len) {
            log::warn!(
                "Response length {} out of range {}..={}",
                len,
                MCDI_CTL_SDU_LEN_MAX_V1,
                MCDI_CTL_SDU_LEN_MAX_V2
            );
            return;
        }
        self.protocol.max_response_len = len;
    }

    pub fn max_request_len(&self) -> usize {
        self.protocol.max_request_len
    }

    pub fn max_response_len(&self) -> usize {
        self.protocol.max_response_len
    }

    // ===========================
    // 输出相关方法
    // ===========================

    pub fn is_csv_output(&self) -> bool {
        self.output.csv
    }

    pub fn verbose_level(&self) -> u8 {
        self.output.verbose
    }

    pub fn is_verbose(&self) -> bool {
        self.output.is_verbose()
    }

    pub fn is_debug(&self) -> bool {
        self.output.is_debug()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_defaults() {
        let ctx = McdiContext::new();
        assert_eq!(ctx.max_request_len(), 0xfc);
        assert_eq!(ctx.max_response_len(), 0xfc);
        assert!(!ctx.protocol.is_v2());
        assert!(ProtocolContext::v2().is_v2());
    }

    #[test]
    fn test_length_limits() {
        let mut ctx = McdiContext::new();
        ctx.set_max_request_len(0x400);
        assert_eq!(ctx.max_request_len(), 0x400);

        // 超出范围的值被忽略
        ctx.set_max_request_len(0x800);
        assert_eq!(ctx.max_request_len(), 0x400);
        ctx.set_max_response_len(16);
        assert_eq!(ctx.max_response_len(), 0xfc);
    }

    #[test]
    fn test_output_context_builder() {
        let out = OutputContext::default().with_csv(true).with_verbose(2);
        assert!(out.csv);
        assert!(out.is_verbose());
        assert!(out.is_very_verbose());
        assert!(!out.is_debug());

        let ctx = McdiContext::with_output(out);
        assert!(ctx.is_csv_output());
        assert_eq!(ctx.verbose_level(), 2);
    }

    #[test]
    fn test_output_context_mutable_setting() {
        let mut out = OutputContext::default();
        out.set_verbose(3);
        out.set_csv(true);
        assert!(out.csv);
        assert!(out.is_debug());
    }
}
