//! 题目获取服务 - 业务能力层
//!
//! 名称 → slug → GraphQL 查询 → 题面解析 → 生成题解 → 组装 `Problem`

use tracing::{error, info, warn};

use crate::clients::{ChatBackend, LeetCodeClient, LlmClient, QuestionBank};
use crate::config::Config;
use crate::error::{AppResult, FetchError};
use crate::models::problem::{Difficulty, Problem};
use crate::models::question::QuestionDetail;
use crate::services::content_parser::{ContentParser, MarkerParser};
use crate::services::solution_service::SolutionService;
use crate::utils::logging::truncate_text;

/// 题目名称转为 URL slug：小写，空格换成连字符，其余字符原样保留
pub fn to_slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

/// 题目获取服务
pub struct ProblemService<Q, C> {
    bank: Q,
    parser: Box<dyn ContentParser>,
    solver: SolutionService<C>,
}

impl ProblemService<LeetCodeClient, LlmClient> {
    /// 按配置创建连接真实服务的实例
    pub fn from_config(config: &Config, api_key: &str) -> AppResult<Self> {
        let bank = LeetCodeClient::new(config)?;
        let solver = SolutionService::new(LlmClient::new(config, api_key), &config.solution_language);
        Ok(Self::new(bank, Box::new(MarkerParser::new()?), solver))
    }
}

impl<Q: QuestionBank, C: ChatBackend> ProblemService<Q, C> {
    pub fn new(bank: Q, parser: Box<dyn ContentParser>, solver: SolutionService<C>) -> Self {
        Self {
            bank,
            parser,
            solver,
        }
    }

    /// 获取题目并附上题解
    ///
    /// 任何失败都只记录日志并返回 `None`；题解生成失败不影响题目本身
    pub async fn get_problem(&self, name: &str) -> Option<Problem> {
        let slug = to_slug(name);
        info!("🔍 正在获取题目: {}", slug);

        match self.try_get_problem(&slug).await {
            Ok(problem) => {
                info!(
                    "✓ 获取成功: {} [{}]，示例 {} 个，约束 {} 条，题解 {} 份",
                    problem.title,
                    problem.difficulty,
                    problem.examples.len(),
                    problem.constraints.len(),
                    problem.solutions.len()
                );
                Some(problem)
            }
            Err(e) => {
                match &e {
                    FetchError::Network { .. } | FetchError::Status { .. } => {
                        error!("🌐 网络错误: {}", e)
                    }
                    FetchError::GraphQl { .. } => error!("❌ {}", e),
                    FetchError::NotFound { .. } => warn!("⚠️ {}", e),
                    FetchError::Decode(_) => error!("❌ {}", e),
                }
                None
            }
        }
    }

    async fn try_get_problem(&self, slug: &str) -> Result<Problem, FetchError> {
        let detail = self.bank.fetch_question(slug).await?;
        let mut problem = self.build_problem(detail);

        if let Some(solution) = self.solver.generate(&problem).await {
            problem.add_solution(solution);
        } else {
            warn!("⚠️ 未能生成题解，讲解中将不包含题解部分");
        }

        Ok(problem)
    }

    /// 由题库数据组装题目（不含题解）
    pub fn build_problem(&self, detail: QuestionDetail) -> Problem {
        let description = detail.content.unwrap_or_default();
        if description.is_empty() {
            warn!("⚠️ 题目 {} 没有题面内容（可能是付费题目）", detail.title);
        }

        let parsed = self.parser.parse(&description);
        info!(
            "题面: {}",
            truncate_text(description.lines().next().unwrap_or_default(), 80)
        );

        Problem {
            question_id: detail.question_id,
            title: detail.title,
            difficulty: Difficulty::parse(&detail.difficulty),
            description,
            examples: parsed.examples,
            constraints: parsed.constraints,
            topic_tags: detail
                .topic_tags
                .unwrap_or_default()
                .into_iter()
                .map(|tag| tag.name)
                .collect(),
            code_snippets: detail.code_snippets.unwrap_or_default(),
            solutions: Vec::new(),
        }
    }
}
