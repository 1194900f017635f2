/*
 * SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
 *
 * SPDX-License-Identifier: GPL-2.0-or-later
 */
pub mod buf;
pub mod context;
pub mod dword;
pub mod event;
pub mod header;
pub mod intf;
pub mod pcol;
pub mod strings;
