use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// API 密钥存储错误
    #[error("密钥错误: {0}")]
    Credential(#[from] CredentialError),
    /// 题库客户端创建失败
    #[error("题库错误: {0}")]
    Fetch(#[from] FetchError),
    /// 题面解析规则无效
    #[error("解析规则错误: {0}")]
    Pattern(#[from] regex::Error),
    /// 讲解文件写入错误
    #[error("写入文件失败 ({path}): {source}")]
    ReportWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 控制台读写错误
    #[error("控制台 I/O 错误: {0}")]
    Console(#[from] std::io::Error),
}

/// 题库请求错误
#[derive(Debug, Error)]
pub enum FetchError {
    /// 网络请求失败（DNS、超时、连接中断）
    #[error("网络请求失败 ({url}): {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// 非 2xx 状态码
    #[error("题库返回错误状态 ({url}): {status}")]
    Status { url: String, status: u16 },
    /// GraphQL 返回了 errors 字段
    #[error("GraphQL 错误: {errors}")]
    GraphQl { errors: String },
    /// data.question 为 null
    #[error("题目 '{slug}' 不存在")]
    NotFound { slug: String },
    /// 响应体无法解析
    #[error("题库响应解析失败: {0}")]
    Decode(#[from] serde_json::Error),
}

/// LLM 服务错误
#[derive(Debug, Clone, Error)]
pub enum LlmError {
    /// API 调用失败
    ///
    /// `detail` 保留上游错误的完整调试信息（含 type / code 字段），用于错误分类
    #[error("LLM API 调用失败 (模型: {model}): {message}")]
    Api {
        model: String,
        message: String,
        detail: String,
    },
    /// 返回内容为空
    #[error("LLM 返回内容为空 (模型: {model})")]
    EmptyContent { model: String },
    /// 请求超时
    #[error("LLM 请求超时 (模型: {model}, {secs} 秒)")]
    Timeout { model: String, secs: u64 },
}

impl LlmError {
    /// 便捷构造：只有错误文本的 API 失败
    pub fn api(model: impl Into<String>, message: impl Into<String>) -> Self {
        let message = message.into();
        LlmError::Api {
            model: model.into(),
            detail: message.clone(),
            message,
        }
    }

    /// 用于分类的全部错误文本
    pub fn diagnostic_text(&self) -> String {
        match self {
            LlmError::Api {
                message, detail, ..
            } => format!("{} {}", message, detail),
            other => other.to_string(),
        }
    }
}

/// 题解生成错误
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(transparent)]
    Backend(#[from] LlmError),
    /// 模型输出不是合法的题解 JSON
    #[error("无法解析 LLM 返回的题解 JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// LLM 失败原因分类
///
/// 上游错误格式没有契约保证，只能按错误文本里的关键字粗略分类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationFailure {
    /// 额度用尽
    Quota,
    /// 请求频率限制
    RateLimited,
    /// 其他
    Unclassified,
}

impl GenerationFailure {
    const QUOTA_MARKERS: &'static [&'static str] = &["insufficient_quota"];
    const RATE_LIMIT_MARKERS: &'static [&'static str] = &["429", "rate_limit", "rate limit"];

    pub fn classify(text: &str) -> Self {
        let lowered = text.to_lowercase();
        if Self::QUOTA_MARKERS.iter().any(|m| lowered.contains(m)) {
            GenerationFailure::Quota
        } else if Self::RATE_LIMIT_MARKERS.iter().any(|m| lowered.contains(m)) {
            GenerationFailure::RateLimited
        } else {
            GenerationFailure::Unclassified
        }
    }
}

impl From<&LlmError> for GenerationFailure {
    fn from(err: &LlmError) -> Self {
        GenerationFailure::classify(&err.diagnostic_text())
    }
}

/// API 密钥存储错误
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("读取密钥文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("密钥文件不是合法 JSON ({path}): {source}")]
    ParseFailed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("密钥文件中没有 {key} ({path})")]
    MissingKey { path: String, key: &'static str },
    #[error("写入密钥文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("读取配置文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("配置文件解析失败 ({path}): {source}")]
    ParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
