//! 挑战上下文
//!
//! 封装"哪个用户在答哪个挑战的哪道题"这一信息

use std::fmt::Display;

use crate::models::PageSeed;

/// 挑战上下文
///
/// 题目检查请求携带的全部标识信息
#[derive(Debug, Clone, Copy)]
pub struct ChallengeCtx {
    /// 用户 ID
    pub user: i64,

    /// 挑战 ID
    pub challenge: i64,

    /// 题目 ID
    pub question: i64,
}

impl ChallengeCtx {
    /// 创建新的挑战上下文
    pub fn new(user: i64, challenge: i64, question: i64) -> Self {
        Self {
            user,
            challenge,
            question,
        }
    }
}

impl From<&PageSeed> for ChallengeCtx {
    fn from(seed: &PageSeed) -> Self {
        Self::new(seed.user, seed.challenge, seed.question)
    }
}

impl Display for ChallengeCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[用户#{} 挑战#{} 题目#{}]",
            self.user, self.challenge, self.question
        )
    }
}
