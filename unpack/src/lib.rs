/*
 * SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
 *
 * SPDX-License-Identifier: GPL-2.0-or-later
 */
//! Fixed-layout (de)serialization for firmware messages.
//!
//! `RawSize` describes a type with a known wire size; `#[derive(RAWDATA)]`
//! implements it for `#[repr(C)]` structs.

pub use raw_core::raw_size::RawSize;
pub use raw_core::{Endianness, RawError};
pub use raw_derive::RAWDATA;
