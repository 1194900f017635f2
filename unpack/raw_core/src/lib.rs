/*
 * SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
 *
 * SPDX-License-Identifier: GPL-2.0-or-later
 */
use std::fmt;

/// Byte order used when a fixed layout is read from or written to a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    Little,
    Big,
    Native,
}

/// Errors raised while (de)serializing a fixed layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawError {
    /// The input or output buffer is shorter than the layout.
    Insufficient {
        type_name: &'static str,
        needed: usize,
        got: usize,
    },
    /// A value does not fit the layout (for example a non-ASCII byte).
    Invalid(String),
}

impl fmt::Display for RawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawError::Insufficient {
                type_name,
                needed,
                got,
            } => write!(
                f,
                "Insufficient data for {}: need {} bytes, got {}",
                type_name, needed, got
            ),
            RawError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for RawError {}

impl RawError {
    pub fn insufficient<T>(needed: usize, got: usize) -> Self {
        RawError::Insufficient {
            type_name: std::any::type_name::<T>(),
            needed,
            got,
        }
    }
}

pub mod raw_size;
