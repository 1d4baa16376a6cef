use crate::error::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// 程序配置
///
/// 优先级：默认值 < TOML 配置文件 < 环境变量 < 命令行参数
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    // --- 题库 API 配置 ---
    pub graphql_url: String,
    pub referer: String,
    pub user_agent: String,
    /// 题库请求超时（秒）
    pub http_timeout_secs: u64,
    // --- LLM 配置 ---
    pub llm_api_base_url: String,
    pub llm_model_name: String,
    pub llm_temperature: f32,
    pub llm_max_tokens: u32,
    /// LLM 请求超时（秒）
    pub llm_timeout_secs: u64,
    // --- 本地文件 ---
    /// API 密钥存放文件
    pub credential_file: PathBuf,
    /// 讲解文件输出目录
    pub output_dir: PathBuf,
    /// 题解代码语言（LeetCode 的 langSlug）
    pub solution_language: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            graphql_url: "https://leetcode.com/graphql".to_string(),
            referer: "https://leetcode.com/problems/".to_string(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36".to_string(),
            http_timeout_secs: 30,
            llm_api_base_url: "https://api.openai.com/v1".to_string(),
            llm_model_name: "gpt-3.5-turbo".to_string(),
            llm_temperature: 0.7,
            llm_max_tokens: 2000,
            llm_timeout_secs: 120,
            credential_file: PathBuf::from("config.json"),
            output_dir: PathBuf::from("."),
            solution_language: "python3".to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 从 TOML 文件加载配置，缺省的字段使用默认值
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::ParseFailed {
            path: path.display().to_string(),
            source,
        })
    }

    /// 在默认值之上叠加环境变量
    pub fn from_env() -> Self {
        Self::default().with_env()
    }

    /// 加载完整配置：可选的配置文件，再叠加环境变量
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let base = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(base.with_env())
    }

    /// 用环境变量覆盖已有配置
    pub fn with_env(self) -> Self {
        Self {
            graphql_url: env_or("LEETCODE_GRAPHQL_URL", self.graphql_url),
            referer: env_or("LEETCODE_REFERER", self.referer),
            user_agent: env_or("LEETCODE_USER_AGENT", self.user_agent),
            http_timeout_secs: env_parse_or("HTTP_TIMEOUT_SECS", self.http_timeout_secs),
            llm_api_base_url: env_or("LLM_API_BASE_URL", self.llm_api_base_url),
            llm_model_name: env_or("LLM_MODEL_NAME", self.llm_model_name),
            llm_temperature: env_parse_or("LLM_TEMPERATURE", self.llm_temperature),
            llm_max_tokens: env_parse_or("LLM_MAX_TOKENS", self.llm_max_tokens),
            llm_timeout_secs: env_parse_or("LLM_TIMEOUT_SECS", self.llm_timeout_secs),
            credential_file: std::env::var("CREDENTIAL_FILE").map(PathBuf::from).unwrap_or(self.credential_file),
            output_dir: std::env::var("OUTPUT_DIR").map(PathBuf::from).unwrap_or(self.output_dir),
            solution_language: env_or("SOLUTION_LANGUAGE", self.solution_language),
            verbose_logging: env_parse_or("VERBOSE_LOGGING", self.verbose_logging),
        }
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    pub fn llm_timeout(&self) -> Duration {
        Duration::from_secs(self.llm_timeout_secs)
    }
}

fn env_or(var_name: &str, fallback: String) -> String {
    std::env::var(var_name).unwrap_or(fallback)
}

fn env_parse_or<T: std::str::FromStr>(var_name: &str, fallback: T) -> T {
    std::env::var(var_name).ok().and_then(|v| v.parse().ok()).unwrap_or(fallback)
}
