//! 讲解文档渲染 - 业务能力层
//!
//! 纯函数：把题目和题解拼成一份 markdown，不做任何 I/O

use crate::models::language;
use crate::models::problem::{Example, Problem, Solution};

const MISSING: &str = "N/A";

/// markdown 讲解渲染器
#[derive(Debug, Clone)]
pub struct ReportRenderer {
    code_fence: String,
}

impl ReportRenderer {
    /// 根据题解语言（langSlug）选择代码块标记
    pub fn for_language(lang_slug: &str) -> Self {
        Self {
            code_fence: language::code_fence(lang_slug).to_string(),
        }
    }

    /// 渲染完整讲解
    ///
    /// 各部分顺序与题目中的顺序完全一致
    pub fn render(&self, problem: &Problem) -> String {
        let mut out = String::new();

        out.push_str(&format!("# {}\n\n", problem.title));
        out.push_str(&format!("Difficulty: {}\n\n", problem.difficulty));
        if !problem.topic_tags.is_empty() {
            out.push_str(&format!("Topics: {}\n\n", problem.topic_tags.join(", ")));
        }

        out.push_str("## Problem Description\n\n");
        out.push_str(&format!("{}\n\n", problem.description));

        out.push_str("## Examples\n\n");
        out.push_str(&render_examples(&problem.examples));

        out.push_str("## Constraints\n\n");
        out.push_str(&render_constraints(&problem.constraints));
        out.push('\n');

        out.push_str("## Solutions\n\n");
        for (i, solution) in problem.solutions.iter().enumerate() {
            self.render_solution(&mut out, i + 1, solution);
        }

        out
    }

    fn render_solution(&self, out: &mut String, index: usize, solution: &Solution) {
        out.push_str(&format!(
            "### Solution {}: {}\n\n\
             #### Intuition\n{}\n\n\
             #### Complexity Analysis\n\
             - Time Complexity: {}\n\
             - Space Complexity: {}\n\n\
             #### Implementation\n```{}\n{}\n```\n\n\
             #### Detailed Explanation\n{}\n\n",
            index,
            solution.approach_name,
            solution.intuition,
            solution.time_complexity,
            solution.space_complexity,
            self.code_fence,
            solution.code,
            solution.explanation,
        ));
    }
}

impl Default for ReportRenderer {
    fn default() -> Self {
        Self::for_language("python3")
    }
}

/// 使用默认渲染器渲染
pub fn render(problem: &Problem) -> String {
    ReportRenderer::default().render(problem)
}

/// 示例部分
///
/// 每行都保留 `Input:` / `Output:` / `Explanation:` 标记，可以被题面解析器重新读回
pub fn render_examples(examples: &[Example]) -> String {
    let mut out = String::new();
    for (i, example) in examples.iter().enumerate() {
        out.push_str(&format!("### Example {}\n", i + 1));
        out.push_str(&format!("Input: {}\n", example.input.as_deref().unwrap_or(MISSING)));
        out.push_str(&format!("Output: {}\n", example.output.as_deref().unwrap_or(MISSING)));
        if let Some(explanation) = &example.explanation {
            out.push_str(&format!("Explanation: {}\n", explanation));
        }
        out.push('\n');
    }
    out
}

/// 约束部分，使用 `* ` 列表
pub fn render_constraints(constraints: &[String]) -> String {
    constraints.iter().map(|c| format!("* {}\n", c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::problem::Difficulty;

    fn sample_problem() -> Problem {
        Problem {
            question_id: Some("20".to_string()),
            title: "Valid Parentheses".to_string(),
            difficulty: Difficulty::Easy,
            description: "Determine if the input string is valid.".to_string(),
            examples: vec![
                Example {
                    input: Some("s = \"()\"".to_string()),
                    output: Some("true".to_string()),
                    explanation: None,
                },
                Example {
                    input: None,
                    output: Some("false".to_string()),
                    explanation: Some("Brackets must close in order.".to_string()),
                },
            ],
            constraints: vec!["1 <= s.length <= 10^4".to_string()],
            topic_tags: vec!["String".to_string(), "Stack".to_string()],
            code_snippets: vec![],
            solutions: vec![],
        }
    }

    #[test]
    fn test_render_without_solutions() {
        let report = render(&sample_problem());

        assert!(report.starts_with("# Valid Parentheses\n\nDifficulty: Easy\n\nTopics: String, Stack\n\n"));
        assert!(report.contains("## Constraints\n\n* 1 <= s.length <= 10^4\n"));
        assert!(report.contains("## Solutions"));
        assert!(!report.contains("Solution 1"));
    }

    #[test]
    fn test_missing_example_field_renders_na() {
        let report = render(&sample_problem());
        assert!(report.contains("### Example 2\nInput: N/A\nOutput: false\nExplanation: Brackets must close in order.\n"));
        assert!(report.contains("### Example 1\nInput: s = \"()\"\nOutput: true\n\n"));
    }

    #[test]
    fn test_solutions_keep_order() {
        let mut problem = sample_problem();
        problem.add_solution(Solution::new("Stack", "Push opens", "O(n)", "O(n)", "def f(): pass", "..."));
        problem.add_solution(Solution::new("Counter", "Count", "O(n)", "O(1)", "def g(): pass", "..."));

        let report = ReportRenderer::for_language("python3").render(&problem);
        let first = report.find("### Solution 1: Stack").unwrap();
        let second = report.find("### Solution 2: Counter").unwrap();
        assert!(first < second);
        assert!(report.contains("#### Implementation\n```python\ndef f(): pass\n```\n"));
        assert!(report.contains("- Space Complexity: O(1)\n"));
    }

    #[test]
    fn test_code_fence_follows_language() {
        let mut problem = sample_problem();
        problem.add_solution(Solution::new("Map", "x", "O(n)", "O(n)", "fn main() {}", "y"));
        let report = ReportRenderer::for_language("rust").render(&problem);
        assert!(report.contains("```rust\nfn main() {}\n```"));
    }
}
