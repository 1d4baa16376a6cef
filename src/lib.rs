//! # LeetCode Explainer
//!
//! 获取 LeetCode 题目，请求 LLM 生成题解，并输出 markdown 讲解
//!
//! ## 架构设计
//!
//! 数据单向流动：交互驱动 → 题目获取 → 题解生成 → 讲解渲染 → 交互驱动
//!
//! ### ① 客户端层（Clients）
//! - `clients/` - 只负责和外部服务通信
//! - `LeetCodeClient` - 题库 GraphQL 查询（`QuestionBank`）
//! - `LlmClient` - 对话补全（`ChatBackend`）
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，每个服务只处理一道题
//! - `MarkerParser` - 按字面标记解析示例和约束（`ContentParser`）
//! - `SolutionService` - 生成题解，额度用尽时降级为模板题解
//! - `ProblemService` - 获取题目并附上题解
//! - `ReportRenderer` / `ReportWriter` - 渲染和保存讲解
//! - `CredentialStore` - API 密钥的读取、询问和保存
//!
//! ### ③ 交互层（App）
//! - `app` - 菜单循环，所有输入输出经过 `Prompter`
//!
//! ## 模块结构

pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use app::{App, SaveMode};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{Difficulty, Example, Problem, Solution};
pub use services::{render, ProblemService, SolutionService};
