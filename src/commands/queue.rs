/*
 * SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
 *
 * SPDX-License-Identifier: GPL-2.0-or-later
 */
//! Event, RX and TX queue setup plus VI allocation.
//!
//! Every INIT_* request ends in a list of DMA addresses, one per 4K buffer
//! page backing the ring. The list length is checked against the
//! firmware's `_MINNUM`/`_MAXNUM` before anything is sent.

use bitflags::bitflags;

use crate::commands::{check_count, McdiCommand};
use crate::error::McdiResult;
use crate::mcdi::buf::McdiBuf;
use crate::mcdi::dword::Field;
use crate::mcdi::pcol::*;
use crate::debug3;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct EvqFlags: u32 {
        const INTERRUPTING = 1 << MC_CMD_INIT_EVQ_IN_FLAG_INTERRUPTING_LBN;
        const RPTR_DOS = 1 << MC_CMD_INIT_EVQ_IN_FLAG_RPTR_DOS_LBN;
        const INT_ARMD = 1 << MC_CMD_INIT_EVQ_IN_FLAG_INT_ARMD_LBN;
        const CUT_THRU = 1 << MC_CMD_INIT_EVQ_IN_FLAG_CUT_THRU_LBN;
        const RX_MERGE = 1 << MC_CMD_INIT_EVQ_IN_FLAG_RX_MERGE_LBN;
        const TX_MERGE = 1 << MC_CMD_INIT_EVQ_IN_FLAG_TX_MERGE_LBN;
        const USE_TIMER = 1 << MC_CMD_INIT_EVQ_IN_FLAG_USE_TIMER_LBN;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct RxqFlags: u32 {
        const BUFF_MODE = 1 << MC_CMD_INIT_RXQ_IN_FLAG_BUFF_MODE_LBN;
        const HDR_SPLIT = 1 << MC_CMD_INIT_RXQ_IN_FLAG_HDR_SPLIT_LBN;
        const TIMESTAMP = 1 << MC_CMD_INIT_RXQ_IN_FLAG_TIMESTAMP_LBN;
        const CHAIN = 1 << MC_CMD_INIT_RXQ_IN_FLAG_CHAIN_LBN;
        const PREFIX = 1 << MC_CMD_INIT_RXQ_IN_FLAG_PREFIX_LBN;
        const DISABLE_SCATTER = 1 << MC_CMD_INIT_RXQ_IN_FLAG_DISABLE_SCATTER_LBN;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct TxqFlags: u32 {
        const BUFF_MODE = 1 << MC_CMD_INIT_TXQ_IN_FLAG_BUFF_MODE_LBN;
        const IP_CSUM_DIS = 1 << MC_CMD_INIT_TXQ_IN_FLAG_IP_CSUM_DIS_LBN;
        const TCP_CSUM_DIS = 1 << MC_CMD_INIT_TXQ_IN_FLAG_TCP_CSUM_DIS_LBN;
        const TCP_UDP_ONLY = 1 << MC_CMD_INIT_TXQ_IN_FLAG_TCP_UDP_ONLY_LBN;
        const TIMESTAMP = 1 << MC_CMD_INIT_TXQ_IN_FLAG_TIMESTAMP_LBN;
        const PACER_BYPASS = 1 << MC_CMD_INIT_TXQ_IN_FLAG_PACER_BYPASS_LBN;
        const INNER_IP_CSUM_EN = 1 << MC_CMD_INIT_TXQ_IN_FLAG_INNER_IP_CSUM_EN_LBN;
        const INNER_TCP_CSUM_EN = 1 << MC_CMD_INIT_TXQ_IN_FLAG_INNER_TCP_CSUM_EN_LBN;
    }
}

fn write_dma_addrs(buf: &mut McdiBuf, ofst: usize, addrs: &[u64]) -> McdiResult<()> {
    for (i, addr) in addrs.iter().enumerate() {
        buf.set_array_qword(ofst, i, *addr)?;
    }
    Ok(())
}

fn no_output(payload: &[u8]) -> McdiResult<()> {
    if !payload.is_empty() {
        debug3!("ignoring {} unexpected response bytes", payload.len());
    }
    Ok(())
}

/// MC_CMD_INIT_EVQ
#[derive(Debug, Clone, Default)]
pub struct InitEvq {
    pub size: u32,
    pub instance: u32,
    pub tmr_load: u32,
    pub tmr_reload: u32,
    pub flags: EvqFlags,
    pub tmr_mode: u32,
    /// Target EVQ for a non-interrupting queue, IRQ number otherwise.
    pub target: u32,
    pub count_mode: u32,
    pub count_threshold: u32,
    pub dma_addrs: Vec<u64>,
}

impl McdiCommand for InitEvq {
    const OPCODE: u32 = MC_CMD_INIT_EVQ;
    const NAME: &'static str = "INIT_EVQ";
    /// IRQ the queue was bound to.
    type Output = u32;

    fn encode(&self) -> McdiResult<McdiBuf> {
        check_count(
            "INIT_EVQ DMA_ADDR",
            self.dma_addrs.len(),
            MC_CMD_INIT_EVQ_IN_DMA_ADDR_MINNUM,
            MC_CMD_INIT_EVQ_IN_DMA_ADDR_MAXNUM,
        )?;
        if self.tmr_mode > MC_CMD_INIT_EVQ_IN_TMR_INT_HLDOFF {
            return command_error!("INIT_EVQ: invalid timer mode {}", self.tmr_mode);
        }
        if self.count_mode > MC_CMD_INIT_EVQ_IN_COUNT_MODE_TX {
            return command_error!("INIT_EVQ: invalid count mode {}", self.count_mode);
        }
        let mut buf = McdiBuf::new(MC_CMD_INIT_EVQ_IN_LEN(self.dma_addrs.len()));
        buf.set_dword(MC_CMD_INIT_EVQ_IN_SIZE_OFST, self.size)?;
        buf.set_dword(MC_CMD_INIT_EVQ_IN_INSTANCE_OFST, self.instance)?;
        buf.set_dword(MC_CMD_INIT_EVQ_IN_TMR_LOAD_OFST, self.tmr_load)?;
        buf.set_dword(MC_CMD_INIT_EVQ_IN_TMR_RELOAD_OFST, self.tmr_reload)?;
        buf.set_dword(MC_CMD_INIT_EVQ_IN_FLAGS_OFST, self.flags.bits())?;
        buf.set_dword(MC_CMD_INIT_EVQ_IN_TMR_MODE_OFST, self.tmr_mode)?;
        buf.set_dword(MC_CMD_INIT_EVQ_IN_TARGET_EVQ_OFST, self.target)?;
        buf.set_dword(MC_CMD_INIT_EVQ_IN_COUNT_MODE_OFST, self.count_mode)?;
        buf.set_dword(MC_CMD_INIT_EVQ_IN_COUNT_THRSHLD_OFST, self.count_threshold)?;
        write_dma_addrs(&mut buf, MC_CMD_INIT_EVQ_IN_DMA_ADDR_OFST, &self.dma_addrs)?;
        Ok(buf)
    }

    fn decode(payload: &[u8]) -> McdiResult<u32> {
        let buf = McdiBuf::from_bytes(payload);
        buf.check_len(MC_CMD_INIT_EVQ_OUT_LEN)?;
        buf.get_dword(MC_CMD_INIT_EVQ_OUT_IRQ_OFST)
    }

    fn outlen(&self) -> usize {
        MC_CMD_INIT_EVQ_OUT_LEN
    }
}

/// MC_CMD_INIT_RXQ
#[derive(Debug, Clone, Default)]
pub struct InitRxq {
    pub size: u32,
    pub target_evq: u32,
    pub label: u32,
    pub instance: u32,
    pub flags: RxqFlags,
    pub crc_mode: u32,
    pub owner_id: u32,
    pub port_id: u32,
    pub dma_addrs: Vec<u64>,
}

impl McdiCommand for InitRxq {
    const OPCODE: u32 = MC_CMD_INIT_RXQ;
    const NAME: &'static str = "INIT_RXQ";
    type Output = ();

    fn encode(&self) -> McdiResult<McdiBuf> {
        check_count(
            "INIT_RXQ DMA_ADDR",
            self.dma_addrs.len(),
            MC_CMD_INIT_RXQ_IN_DMA_ADDR_MINNUM,
            MC_CMD_INIT_RXQ_IN_DMA_ADDR_MAXNUM,
        )?;
        let crc = Field::new(MC_CMD_INIT_RXQ_IN_CRC_MODE_LBN, MC_CMD_INIT_RXQ_IN_CRC_MODE_WIDTH);
        if self.crc_mode >> MC_CMD_INIT_RXQ_IN_CRC_MODE_WIDTH != 0 {
            return command_error!("INIT_RXQ: invalid CRC mode {}", self.crc_mode);
        }
        let mut buf = McdiBuf::new(MC_CMD_INIT_RXQ_IN_LEN(self.dma_addrs.len()));
        buf.set_dword(MC_CMD_INIT_RXQ_IN_SIZE_OFST, self.size)?;
        buf.set_dword(MC_CMD_INIT_RXQ_IN_TARGET_EVQ_OFST, self.target_evq)?;
        buf.set_dword(MC_CMD_INIT_RXQ_IN_LABEL_OFST, self.label)?;
        buf.set_dword(MC_CMD_INIT_RXQ_IN_INSTANCE_OFST, self.instance)?;
        buf.set_dword(MC_CMD_INIT_RXQ_IN_FLAGS_OFST, self.flags.bits())?;
        buf.set_field(MC_CMD_INIT_RXQ_IN_FLAGS_OFST, crc, self.crc_mode)?;
        buf.set_dword(MC_CMD_INIT_RXQ_IN_OWNER_ID_OFST, self.owner_id)?;
        buf.set_dword(MC_CMD_INIT_RXQ_IN_PORT_ID_OFST, self.port_id)?;
        write_dma_addrs(&mut buf, MC_CMD_INIT_RXQ_IN_DMA_ADDR_OFST, &self.dma_addrs)?;
        Ok(buf)
    }

    fn decode(payload: &[u8]) -> McdiResult<()> {
        no_output(payload)
    }

    fn outlen(&self) -> usize {
        MC_CMD_INIT_RXQ_OUT_LEN
    }
}

/// MC_CMD_INIT_TXQ
#[derive(Debug, Clone, Default)]
pub struct InitTxq {
    pub size: u32,
    pub target_evq: u32,
    pub label: u32,
    pub instance: u32,
    pub flags: TxqFlags,
    pub crc_mode: u32,
    pub owner_id: u32,
    pub port_id: u32,
    pub dma_addrs: Vec<u64>,
}

impl McdiCommand for InitTxq {
    const OPCODE: u32 = MC_CMD_INIT_TXQ;
    const NAME: &'static str = "INIT_TXQ";
    type Output = ();

    fn encode(&self) -> McdiResult<McdiBuf> {
        check_count(
            "INIT_TXQ DMA_ADDR",
            self.dma_addrs.len(),
            MC_CMD_INIT_TXQ_IN_DMA_ADDR_MINNUM,
            MC_CMD_INIT_TXQ_IN_DMA_ADDR_MAXNUM,
        )?;
        let crc = Field::new(MC_CMD_INIT_TXQ_IN_CRC_MODE_LBN, MC_CMD_INIT_TXQ_IN_CRC_MODE_WIDTH);
        if self.crc_mode >> MC_CMD_INIT_TXQ_IN_CRC_MODE_WIDTH != 0 {
            return command_error!("INIT_TXQ: invalid CRC mode {}", self.crc_mode);
        }
        let mut buf = McdiBuf::new(MC_CMD_INIT_TXQ_IN_LEN(self.dma_addrs.len()));
        buf.set_dword(MC_CMD_INIT_TXQ_IN_SIZE_OFST, self.size)?;
        buf.set_dword(MC_CMD_INIT_TXQ_IN_TARGET_EVQ_OFST, self.target_evq)?;
        buf.set_dword(MC_CMD_INIT_TXQ_IN_LABEL_OFST, self.label)?;
        buf.set_dword(MC_CMD_INIT_TXQ_IN_INSTANCE_OFST, self.instance)?;
        buf.set_dword(MC_CMD_INIT_TXQ_IN_FLAGS_OFST, self.flags.bits())?;
        buf.set_field(MC_CMD_INIT_TXQ_IN_FLAGS_OFST, crc, self.crc_mode)?;
        buf.set_dword(MC_CMD_INIT_TXQ_IN_OWNER_ID_OFST, self.owner_id)?;
        buf.set_dword(MC_CMD_INIT_TXQ_IN_PORT_ID_OFST, self.port_id)?;
        write_dma_addrs(&mut buf, MC_CMD_INIT_TXQ_IN_DMA_ADDR_OFST, &self.dma_addrs)?;
        Ok(buf)
    }

    fn decode(payload: &[u8]) -> McdiResult<()> {
        no_output(payload)
    }

    fn outlen(&self) -> usize {
        MC_CMD_INIT_TXQ_OUT_LEN
    }
}

// FINI_EVQ/FINI_RXQ/FINI_TXQ 请求格式相同，只有实例号
macro_rules! fini_command {
    ($name:ident, $opcode:expr, $label:literal, $in_len:expr, $instance_ofst:expr) => {
        #[doc = concat!("MC_CMD_", $label)]
        #[derive(Debug, Clone, Copy)]
        pub struct $name {
            pub instance: u32,
        }

        impl McdiCommand for $name {
            const OPCODE: u32 = $opcode;
            const NAME: &'static str = $label;
            type Output = ();

            fn encode(&self) -> McdiResult<McdiBuf> {
                let mut buf = McdiBuf::new($in_len);
                buf.set_dword($instance_ofst, self.instance)?;
                Ok(buf)
            }

            fn decode(payload: &[u8]) -> McdiResult<()> {
                no_output(payload)
            }

            fn outlen(&self) -> usize {
                0
            }
        }
    };
}

fini_command!(FiniEvq, MC_CMD_FINI_EVQ, "FINI_EVQ", MC_CMD_FINI_EVQ_IN_LEN, MC_CMD_FINI_EVQ_IN_INSTANCE_OFST);
fini_command!(FiniRxq, MC_CMD_FINI_RXQ, "FINI_RXQ", MC_CMD_FINI_RXQ_IN_LEN, MC_CMD_FINI_RXQ_IN_INSTANCE_OFST);
fini_command!(FiniTxq, MC_CMD_FINI_TXQ, "FINI_TXQ", MC_CMD_FINI_TXQ_IN_LEN, MC_CMD_FINI_TXQ_IN_INSTANCE_OFST);

/// MC_CMD_FLUSH_RX_QUEUES. Completion is signalled by events, not by the
/// response.
#[derive(Debug, Clone, Default)]
pub struct FlushRxQueues {
    pub qids: Vec<u32>,
}

impl McdiCommand for FlushRxQueues {
    const OPCODE: u32 = MC_CMD_FLUSH_RX_QUEUES;
    const NAME: &'static str = "FLUSH_RX_QUEUES";
    type Output = ();

    fn encode(&self) -> McdiResult<McdiBuf> {
        check_count(
            "FLUSH_RX_QUEUES QID",
            self.qids.len(),
            MC_CMD_FLUSH_RX_QUEUES_IN_QID_OFST_MINNUM,
            MC_CMD_FLUSH_RX_QUEUES_IN_QID_OFST_MAXNUM,
        )?;
        let mut buf = McdiBuf::new(MC_CMD_FLUSH_RX_QUEUES_IN_LEN(self.qids.len()));
        for (i, qid) in self.qids.iter().enumerate() {
            buf.set_array_dword(MC_CMD_FLUSH_RX_QUEUES_IN_QID_OFST_OFST, i, *qid)?;
        }
        Ok(buf)
    }

    fn decode(payload: &[u8]) -> McdiResult<()> {
        no_output(payload)
    }

    fn outlen(&self) -> usize {
        MC_CMD_FLUSH_RX_QUEUES_OUT_LEN
    }
}

/// MC_CMD_ALLOC_VIS
#[derive(Debug, Clone, Copy)]
pub struct AllocVis {
    pub min_vi_count: u32,
    pub max_vi_count: u32,
}

/// VIs granted by ALLOC_VIS. `shift` is 0 unless the MC sent the
/// extended response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViAllocation {
    pub count: u32,
    pub base: u32,
    pub shift: u32,
}

impl McdiCommand for AllocVis {
    const OPCODE: u32 = MC_CMD_ALLOC_VIS;
    const NAME: &'static str = "ALLOC_VIS";
    type Output = ViAllocation;

    fn encode(&self) -> McdiResult<McdiBuf> {
        if self.min_vi_count == 0 || self.min_vi_count > self.max_vi_count {
            return command_error!(
                "ALLOC_VIS: bad range {}..={}",
                self.min_vi_count,
                self.max_vi_count
            );
        }
        let mut buf = McdiBuf::new(MC_CMD_ALLOC_VIS_IN_LEN);
        buf.set_dword(MC_CMD_ALLOC_VIS_IN_MIN_VI_COUNT_OFST, self.min_vi_count)?;
        buf.set_dword(MC_CMD_ALLOC_VIS_IN_MAX_VI_COUNT_OFST, self.max_vi_count)?;
        Ok(buf)
    }

    fn decode(payload: &[u8]) -> McdiResult<ViAllocation> {
        let buf = McdiBuf::from_bytes(payload);
        buf.check_len(MC_CMD_ALLOC_VIS_OUT_LEN)?;
        let shift = if buf.len() >= MC_CMD_ALLOC_VIS_EXT_OUT_LEN {
            buf.get_dword(MC_CMD_ALLOC_VIS_EXT_OUT_VI_SHIFT_OFST)?
        } else {
            0
        };
        Ok(ViAllocation {
            count: buf.get_dword(MC_CMD_ALLOC_VIS_OUT_VI_COUNT_OFST)?,
            base: buf.get_dword(MC_CMD_ALLOC_VIS_OUT_VI_BASE_OFST)?,
            shift,
        })
    }

    fn outlen(&self) -> usize {
        MC_CMD_ALLOC_VIS_EXT_OUT_LEN
    }
}

/// MC_CMD_FREE_VIS
#[derive(Debug, Clone, Copy, Default)]
pub struct FreeVis;

impl McdiCommand for FreeVis {
    const OPCODE: u32 = MC_CMD_FREE_VIS;
    const NAME: &'static str = "FREE_VIS";
    type Output = ();

    fn encode(&self) -> McdiResult<McdiBuf> {
        Ok(McdiBuf::new(MC_CMD_FREE_VIS_IN_LEN))
    }

    fn decode(payload: &[u8]) -> McdiResult<()> {
        no_output(payload)
    }

    fn outlen(&self) -> usize {
        MC_CMD_FREE_VIS_OUT_LEN
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::execute;
    use crate::error::McdiError;
    use crate::mcdi::intf::mock::MockIntf;

    #[test]
    fn test_init_evq_layout() {
        let evq = InitEvq {
            size: 1024,
            instance: 3,
            flags: EvqFlags::INTERRUPTING | EvqFlags::USE_TIMER,
            tmr_mode: MC_CMD_INIT_EVQ_IN_TMR_INT_HLDOFF,
            target: 7,
            dma_addrs: vec![0x1000, 0x2000],
            ..Default::default()
        };
        let buf = evq.encode().unwrap();
        assert_eq!(buf.len(), MC_CMD_INIT_EVQ_IN_LEN(2));
        assert_eq!(buf.get_dword(MC_CMD_INIT_EVQ_IN_FLAGS_OFST).unwrap(), 0x41);
        assert_eq!(buf.get_dword(MC_CMD_INIT_EVQ_IN_IRQ_NUM_OFST).unwrap(), 7);
        assert_eq!(buf.get_qword(MC_CMD_INIT_EVQ_IN_DMA_ADDR_OFST + 8).unwrap(), 0x2000);
    }

    #[test]
    fn test_init_evq_limits() {
        let mut evq = InitEvq::default();
        assert!(matches!(evq.encode(), Err(McdiError::InvalidData(_))));
        evq.dma_addrs = vec![0; MC_CMD_INIT_EVQ_IN_DMA_ADDR_MAXNUM];
        assert_eq!(evq.encode().unwrap().len(), MC_CMD_INIT_EVQ_IN_LENMAX);
        evq.dma_addrs.push(0);
        assert!(evq.encode().is_err());
        evq.dma_addrs.truncate(1);
        evq.tmr_mode = 4;
        assert!(evq.encode().is_err());
    }

    #[test]
    fn test_init_evq_irq() {
        let mut intf = MockIntf::new();
        intf.reply(MC_CMD_INIT_EVQ, &12u32.to_le_bytes());
        let evq = InitEvq {
            dma_addrs: vec![0x4000],
            ..Default::default()
        };
        assert_eq!(execute(&mut intf, &evq).unwrap(), 12);
    }

    #[test]
    fn test_init_rxq_flags_and_crc() {
        let rxq = InitRxq {
            size: 512,
            target_evq: 1,
            flags: RxqFlags::PREFIX | RxqFlags::TIMESTAMP,
            crc_mode: 2,
            dma_addrs: vec![0xdead_0000],
            ..Default::default()
        };
        let buf = rxq.encode().unwrap();
        assert_eq!(buf.len(), MC_CMD_INIT_RXQ_IN_LENMIN);
        // PREFIX(8) | TIMESTAMP(2) | CRC_MODE=2 在第 3..6 位
        assert_eq!(
            buf.get_dword(MC_CMD_INIT_RXQ_IN_FLAGS_OFST).unwrap(),
            (1 << 8) | (1 << 2) | (2 << 3)
        );

        let bad = InitRxq {
            crc_mode: 16,
            dma_addrs: vec![0],
            ..Default::default()
        };
        assert!(bad.encode().is_err());
    }

    #[test]
    fn test_init_txq_limits() {
        let txq = InitTxq {
            flags: TxqFlags::IP_CSUM_DIS | TxqFlags::TCP_CSUM_DIS,
            dma_addrs: vec![0; MC_CMD_INIT_TXQ_IN_DMA_ADDR_MAXNUM],
            ..Default::default()
        };
        let buf = txq.encode().unwrap();
        assert_eq!(buf.len(), MC_CMD_INIT_TXQ_IN_LENMAX);
        assert_eq!(buf.get_dword(MC_CMD_INIT_TXQ_IN_FLAGS_OFST).unwrap(), 0x6);

        let too_many = InitTxq {
            dma_addrs: vec![0; MC_CMD_INIT_TXQ_IN_DMA_ADDR_MAXNUM + 1],
            ..Default::default()
        };
        assert!(too_many.encode().is_err());
    }

    #[test]
    fn test_fini_commands() {
        let buf = FiniRxq { instance: 9 }.encode().unwrap();
        assert_eq!(buf.as_bytes(), &[9, 0, 0, 0]);
        assert_eq!(FiniEvq::OPCODE, MC_CMD_FINI_EVQ);
        assert_eq!(FiniTxq::NAME, "FINI_TXQ");
    }

    #[test]
    fn test_flush_rx_queues() {
        let flush = FlushRxQueues { qids: vec![1, 5] };
        let buf = flush.encode().unwrap();
        assert_eq!(buf.len(), 8);
        assert_eq!(buf.get_array_dword(0, 1).unwrap(), 5);

        assert!(FlushRxQueues::default().encode().is_err());
        let full = FlushRxQueues {
            qids: (0..64).collect(),
        };
        assert!(full.encode().is_err());
    }

    #[test]
    fn test_alloc_vis() {
        assert!(AllocVis {
            min_vi_count: 4,
            max_vi_count: 2
        }
        .encode()
        .is_err());

        let mut short = 8u32.to_le_bytes().to_vec();
        short.extend_from_slice(&32u32.to_le_bytes());
        let vis = AllocVis::decode(&short).unwrap();
        assert_eq!(vis, ViAllocation { count: 8, base: 32, shift: 0 });

        let mut ext = short.clone();
        ext.extend_from_slice(&1u32.to_le_bytes());
        assert_eq!(AllocVis::decode(&ext).unwrap().shift, 1);

        assert!(AllocVis::decode(&short[..4]).is_err());
    }
}
