//! 题库 GraphQL 接口的数据结构

use crate::models::problem::CodeSnippet;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 获取题目详情的 GraphQL 查询
pub const QUESTION_DETAIL_QUERY: &str = r#"
query getQuestionDetail($titleSlug: String!) {
    question(titleSlug: $titleSlug) {
        questionId
        title
        difficulty
        content
        exampleTestcases
        topicTags {
            name
        }
        codeSnippets {
            langSlug
            code
        }
    }
}
"#;

/// 请求体 `{query, variables: {titleSlug}}`
#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a> {
    pub query: &'a str,
    pub variables: QuestionVariables<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionVariables<'a> {
    pub title_slug: &'a str,
}

/// GraphQL 响应外壳
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    /// 只关心是否存在，内容原样记录到日志
    #[serde(default)]
    pub errors: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct QuestionData {
    pub question: Option<QuestionDetail>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDetail {
    #[serde(default)]
    pub question_id: Option<String>,
    pub title: String,
    pub difficulty: String,
    /// 付费题目的 content 为 null
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub example_testcases: Option<String>,
    #[serde(default)]
    pub topic_tags: Option<Vec<TopicTag>>,
    #[serde(default)]
    pub code_snippets: Option<Vec<CodeSnippet>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopicTag {
    pub name: String,
}
