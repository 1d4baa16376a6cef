use tracing::{error, info};

use crate::clients::{ChatBackend, QuestionBank};
use crate::config::Config;
use crate::error::AppResult;
use crate::services::{ProblemService, ReportRenderer, ReportWriter};
use crate::utils::prompt::Prompter;

const MENU: &str = "\nLeetCode 题目讲解\n1. 搜索题目\n2. 退出";

/// 讲解生成后是否保存到文件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveMode {
    /// 询问用户
    Ask,
    Always,
    Never,
}

/// 应用主结构（交互驱动）
pub struct App<Q, C, P> {
    service: ProblemService<Q, C>,
    renderer: ReportRenderer,
    writer: ReportWriter,
    prompter: P,
}

impl<Q: QuestionBank, C: ChatBackend, P: Prompter> App<Q, C, P> {
    pub fn new(config: &Config, service: ProblemService<Q, C>, prompter: P) -> Self {
        Self {
            service,
            renderer: ReportRenderer::for_language(&config.solution_language),
            writer: ReportWriter::with_dir(&config.output_dir),
            prompter,
        }
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    /// 菜单循环，选择退出或输入结束时返回
    pub async fn run(&mut self) -> AppResult<()> {
        loop {
            self.prompter.say(MENU)?;

            let Some(choice) = self.read("\n请输入选项 (1-2): ")? else {
                break;
            };

            match choice.as_str() {
                "1" => {
                    let Some(name) =
                        self.read("\n请输入题目名称（如 'two-sum' 或 'valid sudoku'）: ")?
                    else {
                        break;
                    };
                    self.explain(&name, SaveMode::Ask).await?;
                }
                "2" => break,
                _ => self.prompter.say("\n无效选项，请重新输入。")?,
            }
        }

        info!("👋 已退出");
        Ok(())
    }

    /// 获取一道题并输出讲解
    ///
    /// # 返回
    /// 是否成功取得题目
    pub async fn explain(&mut self, problem_name: &str, save: SaveMode) -> AppResult<bool> {
        if problem_name.is_empty() {
            self.prompter.say("\n题目名称不能为空。")?;
            return Ok(false);
        }

        self.prompter.say("\n正在获取题目详情...")?;

        let Some(problem) = self.service.get_problem(problem_name).await else {
            self.prompter
                .say("\n获取题目失败，请检查题目名称后重试。")?;
            return Ok(false);
        };

        let report = self.renderer.render(&problem);
        self.prompter.say(&format!("\n{}", report))?;

        let should_save = match save {
            SaveMode::Always => true,
            SaveMode::Never => false,
            SaveMode::Ask => self
                .read("\n是否将讲解保存到文件？(y/n): ")?
                .is_some_and(|answer| answer.eq_ignore_ascii_case("y")),
        };

        if should_save {
            match self.writer.save(problem_name, &report).await {
                Ok(path) => self
                    .prompter
                    .say(&format!("\n讲解已保存至 {}", path.display()))?,
                Err(e) => {
                    error!("❌ {}", e);
                    self.prompter.say("\n保存失败，详见日志。")?;
                }
            }
        }

        Ok(true)
    }

    /// 读取一行输入，输入流结束时返回 `None`
    fn read(&mut self, message: &str) -> AppResult<Option<String>> {
        match self.prompter.ask(message) {
            Ok(answer) => Ok(Some(answer)),
            Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
