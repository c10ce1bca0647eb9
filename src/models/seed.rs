use serde::{Deserialize, Serialize};

/// 页面种子
///
/// 服务端渲染挑战页时注入的初始数据：分号连接的文档列表、
/// 提示表达式，以及 `challenge_setup(user, challenge, question)`
/// 携带的挑战标识
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSeed {
    /// 分号连接的初始文档列表
    #[serde(default)]
    pub documents: String,
    /// 初始提示表达式
    #[serde(default)]
    pub hint_expr: String,
    /// 用户 ID
    pub user: i64,
    /// 挑战 ID
    pub challenge: i64,
    /// 题目 ID
    pub question: i64,
}

impl Default for PageSeed {
    fn default() -> Self {
        Self {
            documents: String::new(),
            hint_expr: String::new(),
            user: 1,
            challenge: 1,
            question: 1,
        }
    }
}
