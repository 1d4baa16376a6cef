//! 题面解析 - 业务能力层
//!
//! 从题库返回的 HTML / markdown 混合文本中提取示例和约束。
//!
//! 上游格式没有规范可依，这里只是按固定字面标记做尽力而为的切分：
//! - `"Example"` 之后的每一段是一个示例，逐行查找 `Input:` / `Output:` / `Explanation:`
//! - `"Constraints:"` 之后以 `*` 开头的行是约束
//!
//! 不符合这些标记的内容会被静默丢弃。换一种解析方式只需要实现 [`ContentParser`]。

use crate::models::problem::Example;
use regex::Regex;

const EXAMPLE_MARKER: &str = "Example";
const CONSTRAINTS_MARKER: &str = "Constraints:";
const INPUT_MARKER: &str = "Input:";
const OUTPUT_MARKER: &str = "Output:";
const EXPLANATION_MARKER: &str = "Explanation:";

/// 题面解析结果，两个列表可能为空但总是存在
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedContent {
    pub examples: Vec<Example>,
    pub constraints: Vec<String>,
}

/// 题面解析能力
pub trait ContentParser {
    fn parse(&self, content: &str) -> ParsedContent;
}

/// 基于字面标记的解析器
pub struct MarkerParser {
    tag_re: Regex,
}

impl MarkerParser {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            tag_re: Regex::new(r"</?[A-Za-z][A-Za-z0-9]*(?:\s[^<>]*)?/?>")?,
        })
    }

    /// 提取示例
    pub fn parse_examples(&self, content: &str) -> Vec<Example> {
        content
            .split(EXAMPLE_MARKER)
            .skip(1)
            .filter_map(|section| self.parse_example_section(section))
            .collect()
    }

    fn parse_example_section(&self, section: &str) -> Option<Example> {
        let mut example = Example::default();

        for line in section.trim().lines() {
            if let Some(value) = text_after(line, INPUT_MARKER) {
                example.input = self.clean_value(value);
            } else if let Some(value) = text_after(line, OUTPUT_MARKER) {
                example.output = self.clean_value(value);
            } else if let Some(value) = text_after(line, EXPLANATION_MARKER) {
                example.explanation = self.clean_value(value);
            }
        }

        if example.is_empty() {
            None
        } else {
            Some(example)
        }
    }

    /// 提取约束
    pub fn parse_constraints(&self, content: &str) -> Vec<String> {
        let Some(section) = content.split(CONSTRAINTS_MARKER).nth(1) else {
            return Vec::new();
        };

        section
            .lines()
            .map(str::trim)
            .filter(|line| line.starts_with('*'))
            .filter_map(|line| self.clean_value(line.trim_matches(|c: char| c == '*' || c == ' ')))
            .collect()
    }

    /// 去掉行内 HTML 标记并还原常见实体，纯文本原样返回
    fn clean_value(&self, raw: &str) -> Option<String> {
        let text = raw.replace("<sup>", "^").replace("</sup>", "");
        let text = self.tag_re.replace_all(&text, "");
        let text = text
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&nbsp;", " ")
            .replace("&amp;", "&");
        let text = text.trim();

        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }
}

impl ContentParser for MarkerParser {
    fn parse(&self, content: &str) -> ParsedContent {
        ParsedContent {
            examples: self.parse_examples(content),
            constraints: self.parse_constraints(content),
        }
    }
}

/// 行内第一个标记与下一个同名标记之间的文本
fn text_after<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    line.split(marker).nth(1)
}
