//! # Challenge Page Client
//!
//! 文档搜索挑战页面的 Rust 客户端
//!
//! 用户编辑一份分号连接的文档列表，后端用当前搜索表达式逐个
//! 检查匹配情况；提交按钮把表达式交给题目检查端点，按判定结果
//! 渲染两个面板，题目通过后锁定页面
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 基础设施层（Clients）
//! - `clients/` - 持有稀缺资源（HTTP 客户端），只暴露能力
//! - `ApiClient` - 三个检查端点的唯一调用入口
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，不关心页面流程
//! - `MatchService` - 单行 / 整表匹配检查能力
//! - `QuestionService` - 题目检查能力
//!
//! ### ③ 页面状态层（UI）
//! - `ui/` - 显式的页面状态对象，替代散落的元素修改
//! - `DocumentEditor` - 文档列表 + 请求票据（丢弃过期响应）
//! - `ChallengeRunner` - 提交按钮状态机（Ready → Checking → Done）
//! - `view` - 单一的渲染出口
//!
//! ### ④ 流程 / 编排层（Workflow & App）
//! - `workflow/PageFlow` - 把页面事件编排成完整流程
//! - `app` - 终端命令到页面事件的翻译与主循环
//!
//! ## 模块结构

pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod ui;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::{App, Command};
pub use clients::ApiClient;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{DocVerdict, DocumentList, MatchState, PageSeed, QuestionOutcome, RowId};
pub use ui::{ChallengeRunner, DocumentEditor, RunnerState};
pub use workflow::{ChallengeCtx, PageFlow};
