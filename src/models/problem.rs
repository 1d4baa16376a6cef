use serde::{Deserialize, Serialize};
use std::fmt;

/// 题目难度
///
/// 无法识别的难度文本原样保留
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Other(String),
}

impl Difficulty {
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "Easy" => Difficulty::Easy,
            "Medium" => Difficulty::Medium,
            "Hard" => Difficulty::Hard,
            other => Difficulty::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Other(s) => s,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 题目中的一个示例
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub input: Option<String>,
    pub output: Option<String>,
    pub explanation: Option<String>,
}

impl Example {
    /// 三个字段都没有解析到
    pub fn is_empty(&self) -> bool {
        self.input.is_none() && self.output.is_none() && self.explanation.is_none()
    }
}

/// 题目自带的起始代码
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSnippet {
    pub lang_slug: String,
    pub code: String,
}

/// 一份题解
///
/// 六个字段都不为空：构造时空值会被替换成占位文本
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub approach_name: String,
    pub intuition: String,
    pub time_complexity: String,
    pub space_complexity: String,
    pub code: String,
    pub explanation: String,
}

impl Solution {
    pub const PLACEHOLDER: &'static str = "N/A";

    pub fn new(
        approach_name: impl Into<String>,
        intuition: impl Into<String>,
        time_complexity: impl Into<String>,
        space_complexity: impl Into<String>,
        code: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            approach_name: or_placeholder(approach_name.into()),
            intuition: or_placeholder(intuition.into()),
            time_complexity: or_placeholder(time_complexity.into()),
            space_complexity: or_placeholder(space_complexity.into()),
            code: or_placeholder(code.into()),
            explanation: or_placeholder(explanation.into()),
        }
    }
}

fn or_placeholder(value: String) -> String {
    if value.trim().is_empty() {
        Solution::PLACEHOLDER.to_string()
    } else {
        value
    }
}

/// 结构化的题目
///
/// 抓取时构造一次，之后只会追加题解
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub question_id: Option<String>,
    pub title: String,
    pub difficulty: Difficulty,
    /// 原始题面（可能带 HTML 标记）
    pub description: String,
    pub examples: Vec<Example>,
    pub constraints: Vec<String>,
    #[serde(default)]
    pub topic_tags: Vec<String>,
    #[serde(default)]
    pub code_snippets: Vec<CodeSnippet>,
    #[serde(default)]
    pub solutions: Vec<Solution>,
}

impl Problem {
    pub fn add_solution(&mut self, solution: Solution) {
        self.solutions.push(solution);
    }

    /// 指定语言的起始代码
    pub fn snippet_for(&self, lang_slug: &str) -> Option<&str> {
        self.code_snippets
            .iter()
            .find(|s| s.lang_slug == lang_slug)
            .map(|s| s.code.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_keeps_unknown_text() {
        assert_eq!(Difficulty::parse("Easy"), Difficulty::Easy);
        assert_eq!(Difficulty::parse(" Hard "), Difficulty::Hard);
        assert_eq!(
            Difficulty::parse("Extreme"),
            Difficulty::Other("Extreme".to_string())
        );
        assert_eq!(Difficulty::parse("Extreme").to_string(), "Extreme");
    }

    #[test]
    fn test_solution_fills_blank_fields() {
        let solution = Solution::new("Two pointers", "", "O(n)", "  ", "pass", "done");
        assert_eq!(solution.intuition, Solution::PLACEHOLDER);
        assert_eq!(solution.space_complexity, Solution::PLACEHOLDER);
        assert_eq!(solution.time_complexity, "O(n)");
    }

    #[test]
    fn test_snippet_for_picks_first_match() {
        let problem = Problem {
            question_id: None,
            title: "Two Sum".to_string(),
            difficulty: Difficulty::Easy,
            description: String::new(),
            examples: vec![],
            constraints: vec![],
            topic_tags: vec![],
            code_snippets: vec![
                CodeSnippet { lang_slug: "cpp".to_string(), code: "class Solution {};".to_string() },
                CodeSnippet { lang_slug: "python3".to_string(), code: "class Solution:".to_string() },
                CodeSnippet { lang_slug: "python3".to_string(), code: "second".to_string() },
            ],
            solutions: vec![],
        };
        assert_eq!(problem.snippet_for("python3"), Some("class Solution:"));
        assert_eq!(problem.snippet_for("rust"), None);
    }
}
