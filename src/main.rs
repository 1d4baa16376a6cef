use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::instrument::WithSubscriber;

use leetcode_explainer::app::{App, SaveMode};
use leetcode_explainer::config::Config;
use leetcode_explainer::services::{CredentialStore, ProblemService};
use leetcode_explainer::utils::{build_dispatch, log_startup, ConsolePrompter};

/// 获取 LeetCode 题目，生成 AI 题解并输出 markdown 讲解
#[derive(Debug, Parser)]
#[command(name = "leetcode_explainer", version)]
struct Args {
    /// TOML 配置文件
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 直接处理一道题目后退出（不进入菜单）
    #[arg(short, long)]
    problem: Option<String>,

    /// 配合 --problem 使用：不询问，直接保存讲解文件
    #[arg(long, requires = "problem")]
    save: bool,

    /// 重新输入并保存 API 密钥后退出
    #[arg(long)]
    update_key: bool,

    /// 显示详细日志
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    // 加载配置
    let config = Config::load(args.config.as_deref())?;

    // 日志分发器只作用于 run()
    let dispatch = build_dispatch(args.verbose || config.verbose_logging);

    run(args, config).with_subscriber(dispatch).await
}

async fn run(args: Args, config: Config) -> Result<()> {
    log_startup(&config);

    let mut prompter = ConsolePrompter;
    let mut store = CredentialStore::new(&config.credential_file);

    if args.update_key {
        store.update(&mut prompter).await?;
        return Ok(());
    }

    let api_key = store.load(&mut prompter).await?;
    let service = ProblemService::from_config(&config, &api_key)?;
    let mut app = App::new(&config, service, prompter);

    match args.problem {
        Some(name) => {
            let mode = if args.save {
                SaveMode::Always
            } else {
                SaveMode::Never
            };
            if !app.explain(&name, mode).await? {
                anyhow::bail!("获取题目失败: {}", name);
            }
        }
        None => app.run().await?,
    }

    Ok(())
}
