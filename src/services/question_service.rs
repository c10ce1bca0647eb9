//! 题目检查服务 - 业务能力层
//!
//! 把当前表达式连同挑战标识提交给后端，换回判定结果

use crate::clients::ApiClient;
use crate::config::Config;
use crate::models::QuestionOutcome;
use anyhow::{Context, Result};

/// 题目检查服务
pub struct QuestionService {
    api: ApiClient,
}

impl QuestionService {
    /// 创建新的题目检查服务
    pub fn new(config: &Config) -> Self {
        Self {
            api: ApiClient::new(config),
        }
    }

    /// 检查题目
    ///
    /// # 参数
    /// - `search_expression`: 当前表达式
    /// - `user` / `challenge` / `question`: 挑战标识
    ///
    /// # 返回
    /// 返回判定结果；响应缺少期望字段时视为失败
    pub async fn check_question(
        &self,
        search_expression: &str,
        user: i64,
        challenge: i64,
        question: i64,
    ) -> Result<QuestionOutcome> {
        let result = self
            .api
            .check_question(search_expression, user, challenge, question)
            .await?;

        if result.get("good_documents").is_none() {
            anyhow::bail!(
                "题目检查返回错误响应: {}",
                ApiClient::describe_error(&result)
            );
        }

        let outcome: QuestionOutcome =
            serde_json::from_value(result).context("无法解析题目检查结果")?;

        Ok(outcome)
    }
}
