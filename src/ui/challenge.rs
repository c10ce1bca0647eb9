//! 挑战运行器 - 页面状态层
//!
//! 对应提交按钮、两个结果面板和通关消息
//!
//! 状态机：Ready → Checking → Ready 循环，直到某次成功响应
//! 带上 question_end，之后进入终态 Done，输入全部锁定

use tracing::debug;

use crate::models::{DocVerdict, QuestionOutcome};

/// 运行器状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerState {
    /// 可以提交
    Ready,
    /// 有检查在途，提交按钮禁用
    Checking,
    /// 本题已通过，终态
    Done,
}

/// 挑战运行器
pub struct ChallengeRunner {
    state: RunnerState,
    good_docs: Vec<DocVerdict>,
    wrong_docs: Vec<DocVerdict>,
    success_revealed: bool,
    challenge_complete: bool,
}

impl ChallengeRunner {
    pub fn new() -> Self {
        Self {
            state: RunnerState::Ready,
            good_docs: Vec::new(),
            wrong_docs: Vec::new(),
            success_revealed: false,
            challenge_complete: false,
        }
    }

    pub fn state(&self) -> RunnerState {
        self.state
    }

    /// 提交按钮是否可用
    pub fn submit_enabled(&self) -> bool {
        self.state == RunnerState::Ready
    }

    /// 表达式输入框是否可用
    pub fn expression_enabled(&self) -> bool {
        self.state != RunnerState::Done
    }

    /// 通关消息是否可见
    pub fn success_visible(&self) -> bool {
        self.state == RunnerState::Done
    }

    /// 整个挑战是否已全部完成
    pub fn challenge_complete(&self) -> bool {
        self.challenge_complete
    }

    /// 开始一次题目检查
    ///
    /// 只有 Ready 状态接受提交：检查在途或已通关时按钮是禁用的。
    /// 按钮要等本次请求结束（无论成败）才重新可用
    pub fn begin_check(&mut self) -> bool {
        match self.state {
            RunnerState::Ready => {
                self.state = RunnerState::Checking;
                true
            }
            RunnerState::Checking => {
                debug!("检查已在途，忽略重复提交");
                false
            }
            RunnerState::Done => {
                debug!("题目已通过，忽略提交");
                false
            }
        }
    }

    /// 应用成功响应
    ///
    /// 清空并重建两个结果面板；question_end 置位时进入终态
    ///
    /// # 返回
    /// 返回通关消息是否在本次首次揭示
    pub fn apply_result(&mut self, outcome: QuestionOutcome) -> bool {
        if self.state == RunnerState::Done {
            debug!("终态下丢弃检查结果");
            return false;
        }

        self.good_docs = outcome.good_documents;
        self.wrong_docs = outcome.wrong_documents;

        if outcome.question_end {
            self.state = RunnerState::Done;
            self.challenge_complete = outcome.challenge_end;

            if !self.success_revealed {
                self.success_revealed = true;
                return true;
            }
        } else {
            self.state = RunnerState::Ready;
        }

        false
    }

    /// 应用失败
    ///
    /// 页面对失败保持沉默：只释放在途守卫，面板不动
    pub fn apply_failure(&mut self) {
        if self.state == RunnerState::Checking {
            self.state = RunnerState::Ready;
        }
    }

    pub fn good_documents(&self) -> &[DocVerdict] {
        &self.good_docs
    }

    pub fn wrong_documents(&self) -> &[DocVerdict] {
        &self.wrong_docs
    }
}

impl Default for ChallengeRunner {
    fn default() -> Self {
        Self::new()
    }
}
