//! 控制台交互
//!
//! 所有需要用户输入的地方都通过 [`Prompter`]，方便在测试中替换为脚本输入

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// 向用户提问、输出信息的能力
pub trait Prompter {
    /// 显示提示并读取一行输入，返回去掉首尾空白的内容
    ///
    /// 输入流结束时返回 `UnexpectedEof`
    fn ask(&mut self, message: &str) -> io::Result<String>;

    /// 向用户输出一段信息
    fn say(&mut self, message: &str) -> io::Result<()>;
}

/// 基于 stdin / stdout 的交互
#[derive(Debug, Default)]
pub struct ConsolePrompter;

impl Prompter for ConsolePrompter {
    fn ask(&mut self, message: &str) -> io::Result<String> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{}", message)?;
        stdout.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "输入已结束"));
        }
        Ok(line.trim().to_string())
    }

    fn say(&mut self, message: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", message)?;
        stdout.flush()
    }
}

/// 按预设答案应答的交互，记录所有输出
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    /// 提示和输出，按发生顺序
    pub transcript: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// 输出中是否出现过某段文字
    pub fn saw(&self, needle: &str) -> bool {
        self.transcript.iter().any(|line| line.contains(needle))
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, message: &str) -> io::Result<String> {
        self.transcript.push(message.to_string());
        self.answers
            .pop_front()
            .map(|answer| answer.trim().to_string())
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "没有更多预设输入"))
    }

    fn say(&mut self, message: &str) -> io::Result<()> {
        self.transcript.push(message.to_string());
        Ok(())
    }
}
