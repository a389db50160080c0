//! 日志初始化

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

/// 日志输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// 带文件名与行号的彩色文本，开发环境使用
    Pretty,
    Json,
}

impl LogFormat {
    pub fn for_config(config: &AppConfig) -> Self {
        if config.is_development() {
            LogFormat::Pretty
        } else {
            LogFormat::Json
        }
    }
}

/// 初始化全局 tracing 订阅者，返回的 guard 需持有到进程退出
pub fn init_tracing(config: &AppConfig) -> WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.app.log_level))
        .with_writer(writer)
        .with_level(true);

    match LogFormat::for_config(config) {
        LogFormat::Pretty => builder
            .with_ansi(true)
            .with_file(true)
            .with_line_number(true)
            .init(),
        LogFormat::Json => builder.with_ansi(false).json().init(),
    }

    guard
}
