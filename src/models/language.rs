//! LeetCode 语言标识（langSlug）相关的辅助函数

/// 提示词中使用的语言名称
pub fn language_label(lang_slug: &str) -> &str {
    match lang_slug {
        "python3" => "Python 3",
        "python" => "Python",
        "cpp" => "C++",
        "c" => "C",
        "csharp" => "C#",
        "java" => "Java",
        "javascript" => "JavaScript",
        "typescript" => "TypeScript",
        "golang" => "Go",
        "rust" => "Rust",
        "kotlin" => "Kotlin",
        "swift" => "Swift",
        "ruby" => "Ruby",
        "scala" => "Scala",
        "php" => "PHP",
        other => other,
    }
}

/// markdown 代码块的语言标记
pub fn code_fence(lang_slug: &str) -> &str {
    match lang_slug {
        "python3" | "python" => "python",
        "golang" => "go",
        "csharp" => "csharp",
        other => other,
    }
}

/// 没有起始代码时使用的占位函数
pub fn placeholder_stub(lang_slug: &str) -> &'static str {
    match lang_slug {
        "python3" | "python" => "def solution():\n    # Implement your solution here\n    pass",
        "ruby" => "def solution\n  # Implement your solution here\nend",
        _ => "// Implement your solution here",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_python_mappings() {
        assert_eq!(language_label("python3"), "Python 3");
        assert_eq!(code_fence("python3"), "python");
        assert!(placeholder_stub("python3").starts_with("def solution():"));
    }

    #[test]
    fn test_unknown_slug_passes_through() {
        assert_eq!(language_label("elixir"), "elixir");
        assert_eq!(code_fence("elixir"), "elixir");
        assert_eq!(placeholder_stub("elixir"), "// Implement your solution here");
    }
}
