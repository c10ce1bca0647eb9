//! 交互驱动 - 编排层
//!
//! 把终端命令翻译成页面事件（对应页面上的 keyup / click），
//! 每处理完一个事件就重新渲染整个页面

use anyhow::Result;
use regex::Regex;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use crate::config::Config;
use crate::models::load_seed_or_default;
use crate::utils::logging;
use crate::workflow::PageFlow;

/// 页面事件命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 追加一行（可带初始文本）
    AddRow(String),
    /// 按显示序号删除一行
    RemoveRow(usize),
    /// 按显示序号编辑一行
    EditRow(usize, String),
    /// 修改搜索表达式
    Expression(String),
    /// 点击提交按钮
    Submit,
    /// 重新渲染页面
    Show,
    /// 显示帮助
    Help,
    /// 退出会话
    Quit,
}

impl Command {
    /// 解析一行终端输入
    pub fn parse(line: &str) -> Option<Command> {
        let trimmed = line.trim();

        match trimmed {
            "submit" => return Some(Command::Submit),
            "show" => return Some(Command::Show),
            "help" => return Some(Command::Help),
            "quit" | "exit" => return Some(Command::Quit),
            _ => {}
        }

        let add_re = Regex::new(r"^add(?:\s+(.*))?$").ok()?;
        if let Some(caps) = add_re.captures(trimmed) {
            let text = caps.get(1).map(|m| m.as_str()).unwrap_or("");
            return Some(Command::AddRow(text.to_string()));
        }

        let del_re = Regex::new(r"^del\s+(\d+)$").ok()?;
        if let Some(caps) = del_re.captures(trimmed) {
            let index = caps.get(1)?.as_str().parse().ok()?;
            return Some(Command::RemoveRow(index));
        }

        let edit_re = Regex::new(r"^edit\s+(\d+)(?:\s+(.*))?$").ok()?;
        if let Some(caps) = edit_re.captures(trimmed) {
            let index = caps.get(1)?.as_str().parse().ok()?;
            let text = caps.get(2).map(|m| m.as_str()).unwrap_or("");
            return Some(Command::EditRow(index, text.to_string()));
        }

        let expr_re = Regex::new(r"^expr(?:\s+(.*))?$").ok()?;
        if let Some(caps) = expr_re.captures(trimmed) {
            let text = caps.get(1).map(|m| m.as_str()).unwrap_or("");
            return Some(Command::Expression(text.to_string()));
        }

        None
    }
}

/// 应用主结构
pub struct App {
    flow: PageFlow,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        // 初始化日志文件
        logging::init_log_file(&config.output_log_file)?;
        logging::log_startup(&config);

        // 加载页面种子
        let seed = load_seed_or_default(&config.seed_file).await;
        let flow = PageFlow::new(&config, &seed);

        Ok(Self { flow })
    }

    /// 运行交互主循环
    pub async fn run(&mut self) -> Result<()> {
        // 页面加载时的初始检查
        self.flow.setup().await;
        println!("{}", self.flow.render());
        Self::print_help();

        let stdin = BufReader::new(tokio::io::stdin());
        let mut lines = stdin.lines();

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            match Command::parse(&line) {
                Some(Command::Quit) => break,
                Some(Command::Help) => Self::print_help(),
                Some(command) => {
                    self.dispatch(command).await;
                    println!("{}", self.flow.render());
                }
                None => {
                    println!("无法识别的命令: {}", line.trim());
                    Self::print_help();
                }
            }
        }

        info!("👋 会话结束");
        Ok(())
    }

    /// 把命令分发给页面流程
    async fn dispatch(&mut self, command: Command) {
        match command {
            Command::AddRow(text) => {
                self.flow.add_document(&text).await;
            }
            Command::RemoveRow(index) => match self.flow.resolve_row(index) {
                Some(id) => self.flow.remove_document(id),
                None => println!("没有第 {} 行", index),
            },
            Command::EditRow(index, text) => match self.flow.resolve_row(index) {
                Some(id) => self.flow.edit_document(id, &text).await,
                None => println!("没有第 {} 行", index),
            },
            Command::Expression(expr) => {
                self.flow.change_expression(&expr).await;
            }
            Command::Submit => {
                self.flow.submit_challenge().await;
            }
            Command::Show => {}
            // Quit / Help 在主循环里处理
            Command::Quit | Command::Help => {}
        }
    }

    fn print_help() {
        println!("命令: add [文本] | del <行号> | edit <行号> <文本> | expr <表达式> | submit | show | help | quit");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_with_and_without_text() {
        assert_eq!(
            Command::parse("add le chat dort"),
            Some(Command::AddRow("le chat dort".to_string()))
        );
        assert_eq!(Command::parse("add"), Some(Command::AddRow(String::new())));
    }

    #[test]
    fn test_parse_del_requires_index() {
        assert_eq!(Command::parse("del 2"), Some(Command::RemoveRow(2)));
        assert_eq!(Command::parse("del"), None);
        assert_eq!(Command::parse("del abc"), None);
    }

    #[test]
    fn test_parse_edit_with_text() {
        assert_eq!(
            Command::parse("edit 1 nouveau texte"),
            Some(Command::EditRow(1, "nouveau texte".to_string()))
        );
        assert_eq!(
            Command::parse("edit 3"),
            Some(Command::EditRow(3, String::new()))
        );
    }

    #[test]
    fn test_parse_expr_keeps_whole_expression() {
        assert_eq!(
            Command::parse("expr chat AND (chien OR oiseau)"),
            Some(Command::Expression("chat AND (chien OR oiseau)".to_string()))
        );
        assert_eq!(
            Command::parse("expr"),
            Some(Command::Expression(String::new()))
        );
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(Command::parse("submit"), Some(Command::Submit));
        assert_eq!(Command::parse("  quit  "), Some(Command::Quit));
        assert_eq!(Command::parse("exit"), Some(Command::Quit));
        assert_eq!(Command::parse("n'importe quoi"), None);
    }
}
