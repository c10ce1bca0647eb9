//! 页面流程 - 流程层
//!
//! 核心职责：把页面事件（对应页面上的 keyup / click / 删除按钮）
//! 编排成"改状态 → 发请求 → 落结果"的完整流程
//!
//! 流程顺序（页面加载时）：
//! 1. 按种子建行（不逐行检查）
//! 2. 对初始表达式做一次整表检查
//! 3. 立刻做一次题目检查

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::models::{MatchState, PageSeed, RowId};
use crate::services::{MatchService, QuestionService};
use crate::ui::challenge::ChallengeRunner;
use crate::ui::editor::DocumentEditor;
use crate::ui::view;
use crate::workflow::challenge_ctx::ChallengeCtx;

/// 页面流程
///
/// - 编排编辑器与运行器的事件处理
/// - 决定何时检查单行、何时整表重查、何时提交题目
/// - 不直接持有 HTTP 资源，只依赖业务能力（services）
pub struct PageFlow {
    editor: DocumentEditor,
    runner: ChallengeRunner,
    match_service: MatchService,
    question_service: QuestionService,
    ctx: ChallengeCtx,
    hint_expr: String,
    verbose_logging: bool,
}

impl PageFlow {
    /// 从配置与页面种子创建流程
    pub fn new(config: &Config, seed: &PageSeed) -> Self {
        Self {
            editor: DocumentEditor::from_serialized(&seed.documents),
            runner: ChallengeRunner::new(),
            match_service: MatchService::new(config),
            question_service: QuestionService::new(config),
            ctx: ChallengeCtx::from(seed),
            hint_expr: seed.hint_expr.clone(),
            verbose_logging: config.verbose_logging,
        }
    }

    /// 页面加载：整表检查一次，再做一次初始题目检查
    pub async fn setup(&mut self) {
        info!("{} 页面初始化, {} 个文档行", self.ctx, self.editor.len());

        self.recheck_all_rows().await;
        self.submit_challenge().await;
    }

    /// 追加一行并立即检查
    pub async fn add_document(&mut self, text: &str) -> RowId {
        let id = self.editor.add_row(text);
        debug!("新增行 {:?}, 字段值: {}", id, self.editor.serialized());

        self.check_row(id).await;
        id
    }

    /// 删除一行
    ///
    /// 未知 ID 静默跳过，序列化字段同步更新
    pub fn remove_document(&mut self, id: RowId) {
        self.editor.remove_row(id);
        debug!("删除行 {:?}, 字段值: {}", id, self.editor.serialized());
    }

    /// 编辑一行并立即重查该行
    pub async fn edit_document(&mut self, id: RowId, new_value: &str) {
        if !self.editor.modify_row(id, new_value) {
            return;
        }

        self.check_row(id).await;
    }

    /// 表达式变化：整表重查
    pub async fn change_expression(&mut self, expr: &str) {
        if !self.runner.expression_enabled() {
            info!("表达式输入框已禁用，忽略修改");
            return;
        }

        self.hint_expr = expr.to_string();
        self.recheck_all_rows().await;
    }

    /// 点击提交按钮
    pub async fn submit_challenge(&mut self) {
        if !self.runner.begin_check() {
            info!("提交按钮不可用，忽略点击");
            return;
        }

        info!("{} 📤 正在检查题目...", self.ctx);

        match self
            .question_service
            .check_question(
                &self.hint_expr,
                self.ctx.user,
                self.ctx.challenge,
                self.ctx.question,
            )
            .await
        {
            Ok(outcome) => {
                if self.verbose_logging {
                    info!(
                        "{} ✓ 检查完成: {} 个匹配 / {} 个未匹配",
                        self.ctx,
                        outcome.good_documents.len(),
                        outcome.wrong_documents.len()
                    );
                }

                let revealed = self.runner.apply_result(outcome);
                if revealed {
                    if self.runner.challenge_complete() {
                        info!("{} 🎉 题目通过，挑战全部完成！", self.ctx);
                    } else {
                        info!("{} 🎉 题目通过！", self.ctx);
                    }
                }
            }
            Err(e) => {
                // 页面对用户保持沉默，只记日志；守卫在这里释放
                warn!("{} 题目检查失败: {}", self.ctx, e);
                self.runner.apply_failure();
            }
        }
    }

    /// 检查单行
    async fn check_row(&mut self, id: RowId) {
        let Some((ticket, value)) = self.editor.begin_row_check(id) else {
            return;
        };

        let state = self
            .match_service
            .check_document(&value, &self.hint_expr)
            .await;

        if !self.editor.apply_row_check(&ticket, state) {
            debug!("行检查结果已过期: {:?}", id);
        }
    }

    /// 整表重查，结果按行序逐位落地
    async fn recheck_all_rows(&mut self) {
        let (ticket, values) = self.editor.begin_bulk_check();

        match self
            .match_service
            .check_documents(&values, &self.hint_expr)
            .await
        {
            Some(matches) => {
                if !self.editor.apply_bulk_check(&ticket, &matches) {
                    debug!("整表检查结果已过期");
                }
            }
            None => {
                // 失败时各行保持原状
            }
        }
    }

    /// 渲染当前页面
    pub fn render(&self) -> String {
        view::render_page(&self.editor, &self.runner, &self.hint_expr)
    }

    /// 把 1 基显示序号换算成行 ID
    pub fn resolve_row(&self, display_index: usize) -> Option<RowId> {
        if display_index == 0 {
            return None;
        }
        self.editor.row_at(display_index - 1).map(|r| r.id)
    }

    pub fn editor(&self) -> &DocumentEditor {
        &self.editor
    }

    pub fn runner(&self) -> &ChallengeRunner {
        &self.runner
    }

    pub fn hint_expr(&self) -> &str {
        &self.hint_expr
    }

    /// 当前各行的匹配状态（测试与日志用）
    pub fn row_states(&self) -> Vec<MatchState> {
        self.editor.rows().iter().map(|r| r.matched).collect()
    }
}
