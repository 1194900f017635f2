/*
 * SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
 *
 * SPDX-License-Identifier: GPL-2.0-or-later
 */
use env_logger::Env;
use std::env;
use std::io::Write;

/// 日志颜色配置
struct LogColors {
    error: &'static str,
    warn: &'static str,
    info: &'static str,
    reset: &'static str,
}

impl LogColors {
    fn new(enable_color: bool) -> Self {
        if enable_color {
            Self {
                error: "\x1b[31m", // 红色
                warn: "\x1b[33m",  // 黄色
                info: "\x1b[32m",  // 绿色
                reset: "\x1b[0m",
            }
        } else {
            Self {
                error: "",
                warn: "",
                info: "",
                reset: "",
            }
        }
    }

    fn for_level(&self, level: log::Level) -> &'static str {
        match level {
            log::Level::Error => self.error,
            log::Level::Warn => self.warn,
            log::Level::Info => self.info,
            log::Level::Debug | log::Level::Trace => "",
        }
    }
}

/// RUST_LOG filter for a given `-v` count.
///
/// ERROR/WARN always, INFO from `-v`, and one `debugN` target per `-v`
/// up to five. `debug5` is trace level so it can carry full dumps.
pub fn log_filter(verbose: u8) -> String {
    let mut log_config = vec!["warn".to_string()];
    if verbose > 0 {
        log_config[0] = "info".to_string();
    }
    for level in 1..=verbose.min(5) {
        let log_level = if level <= 4 { "debug" } else { "trace" };
        log_config.push(format!("debug{}={}", level, log_level));
    }
    log_config.join(",")
}

/// 设置日志系统
///
/// # 参数
/// - `verbose`: 详细级别 (0-5)
///   - 0: 只显示 ERROR, WARN
///   - 1: + INFO, debug1 (-v)
///   - 2: + debug2 (-vv)
///   - 3: + debug3，十六进制打印请求和响应 (-vvv)
///   - 4: + debug4 (-vvvv)
///   - 5: + debug5 (-vvvvv)
pub fn setup_logger(verbose: u8) {
    let enable_color =
        env::var("NO_COLOR").is_err() && env::var("TERM").map_or(false, |term| term != "dumb");

    // 只在未设置RUST_LOG时设置环境变量
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", log_filter(verbose));
    }

    let colors = LogColors::new(enable_color);

    let result = env_logger::Builder::from_env(Env::default().filter("RUST_LOG"))
        .format(move |buf, record| match record.target() {
            // debugN 直接输出消息，无前缀
            "debug1" | "debug2" | "debug3" | "debug4" | "debug5" => {
                writeln!(buf, "{}", record.args())
            }
            _ => {
                let level_text = match record.level() {
                    log::Level::Error => "ERROR",
                    log::Level::Warn => "WARN ",
                    log::Level::Info => "INFO ",
                    log::Level::Debug => "DEBUG",
                    log::Level::Trace => "TRACE",
                };
                writeln!(
                    buf,
                    "{}[{}]{} {}",
                    colors.for_level(record.level()),
                    level_text,
                    colors.reset,
                    record.args()
                )
            }
        })
        .try_init();
    if let Err(e) = result {
        eprintln!("Logger already initialized: {}", e);
    }
}

/// 辅助函数：检查指定调试级别是否启用
pub fn is_debug_enabled(level: u8) -> bool {
    match level {
        1 => log::log_enabled!(target: "debug1", log::Level::Debug),
        2 => log::log_enabled!(target: "debug2", log::Level::Debug),
        3 => log::log_enabled!(target: "debug3", log::Level::Debug),
        4 => log::log_enabled!(target: "debug4", log::Level::Debug),
        5 => log::log_enabled!(target: "debug5", log::Level::Trace),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{debug1, debug2, debug3};

    #[test]
    fn test_log_filter() {
        assert_eq!(log_filter(0), "warn");
        assert_eq!(log_filter(1), "info,debug1=debug");
        assert_eq!(
            log_filter(7),
            "info,debug1=debug,debug2=debug,debug3=debug,debug4=debug,debug5=trace"
        );
    }

    #[test]
    fn test_setup_logger() {
        setup_logger(2);
        debug1!("This is debug1 message");
        debug2!("This is debug2 message");
        debug3!("This should not appear");
        assert!(!is_debug_enabled(9));
    }
}
