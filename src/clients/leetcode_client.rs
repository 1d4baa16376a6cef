//! 题库 API 客户端
//!
//! 封装对 LeetCode GraphQL 接口的调用

use crate::config::Config;
use crate::error::FetchError;
use crate::models::question::{
    GraphQlRequest, GraphQlResponse, QuestionData, QuestionDetail, QuestionVariables,
    QUESTION_DETAIL_QUERY,
};
use reqwest::header::{CONTENT_TYPE, REFERER, USER_AGENT};
use tracing::debug;

/// 题库能力：按 slug 取回题目详情
#[allow(async_fn_in_trait)]
pub trait QuestionBank {
    async fn fetch_question(&self, slug: &str) -> Result<QuestionDetail, FetchError>;
}

/// LeetCode GraphQL 客户端
///
/// 内部的 `reqwest::Client` 只创建一次，连接在多次查询之间复用
pub struct LeetCodeClient {
    http: reqwest::Client,
    graphql_url: String,
    user_agent: String,
    referer: String,
}

impl LeetCodeClient {
    /// 创建新的题库客户端
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout())
            .build()
            .map_err(|source| FetchError::Network {
                url: config.graphql_url.clone(),
                source,
            })?;

        Ok(Self {
            http,
            graphql_url: config.graphql_url.clone(),
            user_agent: config.user_agent.clone(),
            referer: config.referer.clone(),
        })
    }

    fn network_error(&self, source: reqwest::Error) -> FetchError {
        FetchError::Network {
            url: self.graphql_url.clone(),
            source,
        }
    }
}

impl QuestionBank for LeetCodeClient {
    async fn fetch_question(&self, slug: &str) -> Result<QuestionDetail, FetchError> {
        let body = GraphQlRequest {
            query: QUESTION_DETAIL_QUERY,
            variables: QuestionVariables { title_slug: slug },
        };

        debug!("请求题库: {} (titleSlug = {})", self.graphql_url, slug);

        let response = self
            .http
            .post(&self.graphql_url)
            .header(CONTENT_TYPE, "application/json")
            .header(USER_AGENT, self.user_agent.as_str())
            .header(REFERER, self.referer.as_str())
            .json(&body)
            .send()
            .await
            .map_err(|e| self.network_error(e))?;

        let status = response.status();
        debug!("题库响应状态: {}", status);

        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.graphql_url.clone(),
                status: status.as_u16(),
            });
        }

        let text = response.text().await.map_err(|e| self.network_error(e))?;

        decode_question_response(&text, slug)
    }
}

/// 解析 GraphQL 响应体
///
/// `errors` 字段优先于 `data`；`data.question` 为 null 视为题目不存在
pub fn decode_question_response(body: &str, slug: &str) -> Result<QuestionDetail, FetchError> {
    let response: GraphQlResponse<QuestionData> = serde_json::from_str(body)?;

    if let Some(errors) = response.errors {
        return Err(FetchError::GraphQl {
            errors: errors.to_string(),
        });
    }

    response
        .data
        .and_then(|data| data.question)
        .ok_or_else(|| FetchError::NotFound {
            slug: slug.to_string(),
        })
}
