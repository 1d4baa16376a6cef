//! 日志工具模块
//!
//! 提供日志初始化和输出的辅助函数

use crate::config::Config;
use tracing::{info, Dispatch};
use tracing_subscriber::EnvFilter;

/// 构建日志分发器
///
/// 不安装为全局默认值，由调用方通过 `WithSubscriber` 挂到需要的 future 上。
/// 日志写到 stderr，stdout 只留给讲解内容和菜单。
///
/// # 参数
/// - `verbose`: 为 true 时默认级别为 debug，否则为 info（`RUST_LOG` 优先）
pub fn build_dispatch(verbose: bool) -> Dispatch {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    Dispatch::new(subscriber)
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 LeetCode 题目讲解生成器启动");
    info!(
        "启动时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("📡 题库: {}", config.graphql_url);
    info!(
        "🤖 模型: {} ({})",
        config.llm_model_name, config.llm_api_base_url
    );
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大字符数
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text_counts_chars() {
        assert_eq!(truncate_text("两数之和", 2), "两数...");
        assert_eq!(truncate_text("Two Sum", 20), "Two Sum");
    }

    #[test]
    fn test_dispatch_is_scoped() {
        let dispatch = build_dispatch(true);
        tracing::dispatcher::with_default(&dispatch, || {
            log_startup(&Config::default());
        });
    }
}
