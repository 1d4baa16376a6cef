//! 题解生成服务 - 业务能力层
//!
//! 只负责"为一道题生成题解"：构建提示词 → 调用 LLM → 解析 JSON。
//! 对调用方永不报错，失败时返回 `None`；额度用尽时降级为模板题解。

use serde::Deserialize;
use tracing::{debug, error, info, warn};

use crate::clients::ChatBackend;
use crate::error::{GenerationError, GenerationFailure, LlmError};
use crate::models::language;
use crate::models::problem::{Problem, Solution};

pub const AI_APPROACH_NAME: &str = "AI Generated Solution";
pub const TEMPLATE_APPROACH_NAME: &str = "Template Solution";

const SYSTEM_MESSAGE: &str = "You are an expert programmer helping to solve LeetCode problems. \
                              Provide clear, efficient solutions with detailed explanations.";

/// 模型需要返回的 JSON 结构
#[derive(Debug, Deserialize)]
struct SolutionPayload {
    intuition: String,
    time_complexity: String,
    space_complexity: String,
    code: String,
    explanation: String,
}

/// 题解生成服务
pub struct SolutionService<C> {
    backend: C,
    /// 题解代码语言（langSlug）
    language: String,
}

impl<C: ChatBackend> SolutionService<C> {
    pub fn new(backend: C, language: impl Into<String>) -> Self {
        Self {
            backend,
            language: language.into(),
        }
    }

    /// 为题目生成题解
    ///
    /// 所有错误都在这里消化：额度用尽返回模板题解，其余情况返回 `None`
    pub async fn generate(&self, problem: &Problem) -> Option<Solution> {
        info!("🤖 正在请求 AI 题解 (模型: {})...", self.backend.model_name());

        match self.try_generate(problem).await {
            Ok(solution) => {
                info!("✓ AI 题解生成成功");
                Some(solution)
            }
            Err(GenerationError::Backend(err)) => self.handle_backend_failure(problem, &err),
            Err(GenerationError::Malformed(err)) => {
                error!("❌ 解析 AI 题解时发生意外错误: {}", err);
                None
            }
        }
    }

    async fn try_generate(&self, problem: &Problem) -> Result<Solution, GenerationError> {
        let prompt = build_prompt(problem, &self.language);
        debug!("提示词长度: {} 字符", prompt.len());

        let response = self.backend.complete(SYSTEM_MESSAGE, &prompt).await?;

        info!("正在解析 AI 返回内容...");
        parse_solution_response(&response)
    }

    fn handle_backend_failure(&self, problem: &Problem, err: &LlmError) -> Option<Solution> {
        match GenerationFailure::from(err) {
            GenerationFailure::Quota => {
                warn!("⚠️ LLM API 额度已用尽，请检查账单: https://platform.openai.com/account/billing");
                warn!("可以：1. 为账户充值  2. 等待额度重置  3. 更换 API 密钥");
                warn!("本次使用模板题解代替");
                Some(template_solution(problem, &self.language))
            }
            GenerationFailure::RateLimited => {
                warn!("⏳ 触发请求频率限制，请几分钟后重试: {}", err);
                None
            }
            GenerationFailure::Unclassified => {
                error!("❌ 生成题解失败: {}", err);
                None
            }
        }
    }
}

/// 构建提示词
///
/// 相同的题目总是得到相同的提示词
pub fn build_prompt(problem: &Problem, lang_slug: &str) -> String {
    let examples = problem
        .examples
        .iter()
        .enumerate()
        .map(|(i, ex)| {
            let mut block = format!(
                "Example {}:\nInput: {}\nOutput: {}",
                i + 1,
                ex.input.as_deref().unwrap_or("N/A"),
                ex.output.as_deref().unwrap_or("N/A"),
            );
            if let Some(explanation) = &ex.explanation {
                block.push_str(&format!("\nExplanation: {}", explanation));
            }
            block
        })
        .collect::<Vec<_>>()
        .join("\n");

    let constraints = problem
        .constraints
        .iter()
        .map(|c| format!("- {}", c))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"Given this LeetCode problem:

Title: {}
Difficulty: {}

Description:
{}

Examples:
{}

Constraints:
{}

Respond with a single JSON object and nothing else. It must contain exactly these string fields:
"intuition", "time_complexity", "space_complexity", "code", "explanation".
Write the code in {}."#,
        problem.title,
        problem.difficulty,
        problem.description,
        examples,
        constraints,
        language::language_label(lang_slug),
    )
}

/// 解析模型返回的题解 JSON
///
/// 允许外层包一层 markdown 代码块，缺字段或不是 JSON 都视为解析失败
pub fn parse_solution_response(response: &str) -> Result<Solution, GenerationError> {
    let payload: SolutionPayload = serde_json::from_str(strip_code_fence(response))?;

    Ok(Solution::new(
        AI_APPROACH_NAME,
        payload.intuition,
        payload.time_complexity,
        payload.space_complexity,
        payload.code,
        payload.explanation,
    ))
}

/// 额度用尽时的模板题解
///
/// 代码优先使用题目自带的起始代码
pub fn template_solution(problem: &Problem, lang_slug: &str) -> Solution {
    let code = problem
        .snippet_for(lang_slug)
        .unwrap_or_else(|| language::placeholder_stub(lang_slug));

    Solution::new(
        TEMPLATE_APPROACH_NAME,
        "Please implement your solution here",
        "Analyze the time complexity of your solution",
        "Analyze the space complexity of your solution",
        code,
        "Add a detailed explanation of your approach",
    )
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    match trimmed
        .strip_prefix("```")
        .and_then(|rest| rest.strip_suffix("```"))
    {
        // 开头可能有语言标记（如 json），后面不一定换行
        Some(body) => body
            .trim_start_matches(|c: char| c.is_ascii_alphanumeric())
            .trim(),
        None => trimmed,
    }
}
