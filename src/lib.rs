/*
 * SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
 *
 * SPDX-License-Identifier: GPL-2.0-or-later
 */

pub mod commands;
pub mod error;
pub mod helper;
pub mod interface;
pub mod logging;
pub mod mcdi;

use std::sync::atomic::AtomicUsize;
pub static VERBOSE_LEVEL: AtomicUsize = AtomicUsize::new(0);

// debugN! 只在 -v 次数足够时输出，目标为 "debugN"
#[macro_export]
macro_rules! debug1 {
    ($($arg:tt)*) => {
        if $crate::VERBOSE_LEVEL.load(std::sync::atomic::Ordering::Relaxed) >= 1 {
            log::debug!(target: "debug1", $($arg)*);
        }
    };
}

#[macro_export]
macro_rules! debug2 {
    ($($arg:tt)*) => {
        if $crate::VERBOSE_LEVEL.load(std::sync::atomic::Ordering::Relaxed) >= 2 {
            log::debug!(target: "debug2", $($arg)*);
        }
    };
}

#[macro_export]
macro_rules! debug3 {
    ($($arg:tt)*) => {
        if $crate::VERBOSE_LEVEL.load(std::sync::atomic::Ordering::Relaxed) >= 3 {
            log::debug!(target: "debug3", $($arg)*);
        }
    };
}

#[macro_export]
macro_rules! debug4 {
    ($($arg:tt)*) => {
        if $crate::VERBOSE_LEVEL.load(std::sync::atomic::Ordering::Relaxed) >= 4 {
            log::debug!(target: "debug4", $($arg)*);
        }
    };
}

#[macro_export]
macro_rules! debug5 {
    ($($arg:tt)*) => {
        if $crate::VERBOSE_LEVEL.load(std::sync::atomic::Ordering::Relaxed) >= 5 {
            log::trace!(target: "debug5", $($arg)*);
        }
    };
}
